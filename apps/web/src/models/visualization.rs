use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    /// ISO date, oldest first
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PeerComparison {
    pub ticker: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub pb_ratio: Option<f64>,
    #[serde(default)]
    pub ps_ratio: Option<f64>,
    #[serde(default)]
    pub is_main: bool,
}

/// Chartable payload for one ticker.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VisualizationData {
    pub ticker: String,
    #[serde(default)]
    pub price_history: Vec<PricePoint>,
    #[serde(default)]
    pub week_52_high: Option<f64>,
    #[serde(default)]
    pub week_52_low: Option<f64>,
    #[serde(default)]
    pub current_price: Option<f64>,
    /// Position inside the 52-week range, 0-100
    #[serde(default)]
    pub current_position_pct: Option<f64>,
    #[serde(default)]
    pub peer_comparison: Vec<PeerComparison>,
    #[serde(default)]
    pub period_high: Option<f64>,
    #[serde(default)]
    pub period_low: Option<f64>,
    #[serde(default)]
    pub average_volume: Option<f64>,
}

impl VisualizationData {
    pub fn has_price_history(&self) -> bool {
        !self.price_history.is_empty()
    }

    pub fn has_peer_comparison(&self) -> bool {
        !self.peer_comparison.is_empty()
    }

    /// Percent change from the first to the last close in the history.
    pub fn period_change_pct(&self) -> Option<f64> {
        let first = self.price_history.first()?.close;
        let last = self.price_history.last()?.close;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn point(date: &str, close: f64) -> PricePoint {
        PricePoint {
            date: date.to_string(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 0,
        }
    }

    #[test]
    fn missing_lists_deserialize_empty() {
        let data: VisualizationData = serde_json::from_value(json!({ "ticker": "NVDA" })).unwrap();
        assert!(!data.has_price_history());
        assert!(!data.has_peer_comparison());
        assert_eq!(data.period_change_pct(), None);
    }

    #[test]
    fn period_change_uses_first_and_last_close() {
        let data = VisualizationData {
            ticker: "AAPL".into(),
            price_history: vec![point("2024-01-01", 100.0), point("2024-01-02", 90.0), point("2024-01-03", 110.0)],
            week_52_high: None,
            week_52_low: None,
            current_price: None,
            current_position_pct: None,
            peer_comparison: vec![],
            period_high: None,
            period_low: None,
            average_volume: None,
        };
        let change = data.period_change_pct().unwrap();
        assert!((change - 10.0).abs() < 1e-9);
    }
}

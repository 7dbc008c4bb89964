use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentRating {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
    /// The rating is model-generated; anything outside the five known values lands here.
    #[serde(other)]
    #[default]
    Unknown,
}

impl InvestmentRating {
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentRating::StrongBuy => "Strong Buy / 强烈买入",
            InvestmentRating::Buy => "Buy / 买入",
            InvestmentRating::Hold => "Hold / 持有",
            InvestmentRating::Sell => "Sell / 卖出",
            InvestmentRating::StrongSell => "Strong Sell / 强烈卖出",
            InvestmentRating::Unknown => "Not Rated / 未评级",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            InvestmentRating::StrongBuy => "bg-success-600 text-white",
            InvestmentRating::Buy => "bg-success-500/20 text-success-400 border border-success-500/50",
            InvestmentRating::Hold => "bg-amber-500/20 text-amber-400 border border-amber-500/50",
            InvestmentRating::Sell => "bg-red-500/20 text-red-400 border border-red-500/50",
            InvestmentRating::StrongSell => "bg-red-600 text-white",
            InvestmentRating::Unknown => "bg-gray-800 text-gray-400 border border-gray-700",
        }
    }
}

/// Beginner-oriented summary of the primary ticker in a report.
///
/// The backend forwards this object as the language model produced it, so every
/// field tolerates absence, `null`, and numbers sent as strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InvestorSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticker: String,
    #[serde(default, deserialize_with = "loose_number")]
    pub current_price: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub price_change_pct: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub pe_ratio: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub investment_rating: InvestmentRating,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating_explanation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_highlights: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub risk_warnings: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').replace(',', "").parse().ok(),
        _ => None,
    })
}

/// Reads `snapshot` from a research response. A snapshot that still cannot be used
/// becomes `None`, so the report falls back to the full markdown view.
pub fn lenient_snapshot<'de, D>(deserializer: D) -> Result<Option<InvestorSnapshot>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => match serde_json::from_value(value) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                log::warn!("discarding unusable investor snapshot: {}", e);
                Ok(None)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_generated_snapshot() {
        let snapshot: InvestorSnapshot = serde_json::from_value(json!({
            "ticker": "AAPL",
            "current_price": 189.5,
            "price_change_pct": -1.25,
            "market_cap": 2950000000000_u64,
            "pe_ratio": null,
            "investment_rating": "strong_buy",
            "rating_explanation": "Solid cash flows.",
            "key_highlights": ["Services growth"],
            "risk_warnings": ["China exposure"]
        }))
        .unwrap();

        assert_eq!(snapshot.investment_rating, InvestmentRating::StrongBuy);
        assert_eq!(snapshot.market_cap, Some(2.95e12));
        assert!(snapshot.pe_ratio.is_none());
    }

    #[test]
    fn unexpected_rating_maps_to_unknown() {
        let snapshot: InvestorSnapshot = serde_json::from_value(json!({
            "ticker": "TSLA",
            "investment_rating": "one of: strong_buy, buy, hold"
        }))
        .unwrap();

        assert_eq!(snapshot.investment_rating, InvestmentRating::Unknown);
        assert!(snapshot.key_highlights.is_empty());
        assert_eq!(snapshot.investment_rating.label(), "Not Rated / 未评级");
    }

    #[test]
    fn sloppy_fields_are_tolerated() {
        let snapshot: InvestorSnapshot = serde_json::from_value(json!({
            "ticker": null,
            "current_price": "189.5",
            "price_change_pct": "-1.2%",
            "market_cap": "n/a",
            "investment_rating": null,
            "rating_explanation": null,
            "key_highlights": null
        }))
        .unwrap();

        assert_eq!(snapshot.ticker, "");
        assert_eq!(snapshot.current_price, Some(189.5));
        assert_eq!(snapshot.price_change_pct, Some(-1.2));
        assert!(snapshot.market_cap.is_none());
        assert_eq!(snapshot.investment_rating, InvestmentRating::Unknown);
        assert!(snapshot.key_highlights.is_empty());
        assert!(snapshot.risk_warnings.is_empty());
    }
}

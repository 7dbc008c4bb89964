use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{InvestorSnapshot, VisualizationData};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResearchQueryRequest {
    pub query: String,
    /// Continues an existing conversation when set; the backend opens a new one otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ResearchQueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            session_id: None,
        }
    }

    pub fn in_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResearchQueryResponse {
    pub session_id: String,
    pub query: String,
    /// Markdown report body
    pub report: String,
    #[serde(default)]
    pub tickers: Vec<String>,
    pub market_data_available: bool,
    pub sentiment_available: bool,
    pub analyst_consensus_available: bool,
    pub context_retrieved: u32,
    /// ISO-8601 instant as sent by the backend. Kept verbatim and parsed at render time,
    /// since the backend sometimes omits the UTC offset.
    pub timestamp: String,
    #[serde(
        default,
        deserialize_with = "super::snapshot::lenient_snapshot",
        skip_serializing_if = "Option::is_none"
    )]
    pub snapshot: Option<InvestorSnapshot>,
    #[serde(default)]
    pub visualization_data: Vec<VisualizationData>,

    // Agent execution details, not used for rendering decisions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub executed_agents: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub agent_errors: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_metadata: Option<ReportMetadata>,
}

impl ResearchQueryResponse {
    pub fn data_availability(&self) -> DataAvailability {
        DataAvailability {
            market_data: self.market_data_available,
            sentiment: self.sentiment_available,
            analyst_consensus: self.analyst_consensus_available,
            context_retrieved: self.context_retrieved,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataAvailability {
    pub market_data: bool,
    pub sentiment: bool,
    pub analyst_consensus: bool,
    pub context_retrieved: u32,
}

impl DataAvailability {
    pub fn has_context(&self) -> bool {
        self.context_retrieved > 0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    #[serde(default)]
    pub executed_agents: Vec<String>,
    #[serde(default)]
    pub data_sources: BTreeMap<String, bool>,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub tickers: Vec<String>,
    #[serde(default)]
    pub report_template: Option<String>,
}

/// Lifecycle of one query submission on the research page.
#[derive(Clone, Debug, PartialEq)]
pub enum ResearchState {
    Idle,
    Loading { query: String },
    Complete(Box<ResearchQueryResponse>),
    Error(String),
}

impl ResearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResearchState::Loading { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InvestmentRating;
    use serde_json::json;

    #[test]
    fn request_omits_missing_session_id() {
        let body = serde_json::to_value(ResearchQueryRequest::new("Analyze AAPL")).unwrap();
        assert_eq!(body, json!({ "query": "Analyze AAPL" }));

        let body = serde_json::to_value(ResearchQueryRequest::new("Compare").in_session("s1")).unwrap();
        assert_eq!(body, json!({ "query": "Compare", "session_id": "s1" }));
    }

    #[test]
    fn minimal_response_defaults_optional_sections() {
        let response: ResearchQueryResponse = serde_json::from_value(json!({
            "session_id": "s1",
            "query": "Analyze AAPL",
            "report": "# Report",
            "tickers": ["AAPL"],
            "market_data_available": true,
            "sentiment_available": false,
            "analyst_consensus_available": false,
            "context_retrieved": 0,
            "timestamp": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert!(response.snapshot.is_none());
        assert!(response.visualization_data.is_empty());
        assert!(response.agent_errors.is_empty());
        assert_eq!(
            response.data_availability(),
            DataAvailability {
                market_data: true,
                sentiment: false,
                analyst_consensus: false,
                context_retrieved: 0,
            }
        );
        assert!(!response.data_availability().has_context());
    }

    #[test]
    fn missing_tickers_is_empty() {
        let response: ResearchQueryResponse = serde_json::from_value(json!({
            "session_id": "s1",
            "query": "What moved the market?",
            "report": "",
            "market_data_available": false,
            "sentiment_available": false,
            "analyst_consensus_available": false,
            "context_retrieved": 3,
            "timestamp": "2024-01-01T00:00:00"
        }))
        .unwrap();

        assert!(response.tickers.is_empty());
        assert!(response.data_availability().has_context());
    }

    #[test]
    fn negative_context_count_is_rejected() {
        let result = serde_json::from_value::<ResearchQueryResponse>(json!({
            "session_id": "s1",
            "query": "q",
            "report": "",
            "market_data_available": false,
            "sentiment_available": false,
            "analyst_consensus_available": false,
            "context_retrieved": -1,
            "timestamp": "2024-01-01T00:00:00Z"
        }));
        assert!(result.is_err());
    }

    fn response_with_snapshot(snapshot: serde_json::Value) -> Result<ResearchQueryResponse, serde_json::Error> {
        serde_json::from_value(json!({
            "session_id": "s1",
            "query": "Analyze AAPL",
            "report": "# Report",
            "tickers": ["AAPL"],
            "market_data_available": true,
            "sentiment_available": true,
            "analyst_consensus_available": false,
            "context_retrieved": 2,
            "timestamp": "2024-01-01T00:00:00Z",
            "snapshot": snapshot
        }))
    }

    #[test]
    fn loose_snapshot_keeps_the_report() {
        let response = response_with_snapshot(json!({ "ticker": "AAPL" })).unwrap();
        let snapshot = response.snapshot.expect("partial snapshot is kept");
        assert_eq!(snapshot.investment_rating, InvestmentRating::Unknown);

        let response = response_with_snapshot(json!({
            "ticker": "AAPL",
            "investment_rating": "buy",
            "key_highlights": null,
            "current_price": "189.5"
        }))
        .unwrap();
        let snapshot = response.snapshot.expect("sloppy snapshot is kept");
        assert_eq!(snapshot.current_price, Some(189.5));
        assert!(snapshot.key_highlights.is_empty());
    }

    #[test]
    fn unusable_snapshot_is_dropped_not_fatal() {
        for bad in [json!("AAPL looks great"), json!(42), json!({ "key_highlights": "one" }), json!(null)] {
            let response = response_with_snapshot(bad).expect("report survives a bad snapshot");
            assert!(response.snapshot.is_none());
            assert_eq!(response.report, "# Report");
        }
    }
}

//! Canned research data. Backs the demo server routes and stands in for the
//! backend in tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, ResearchApi};
use crate::models::{
    InvestmentRating, InvestorSnapshot, Message, MessageRole, PeerComparison, PricePoint, ResearchQueryRequest,
    ResearchQueryResponse, SessionHistoryResponse, SessionSummary, SessionsResponse, VisualizationData,
};

pub const DEMO_TIMESTAMP: &str = "2025-10-26T12:00:00Z";

struct DemoCompany {
    ticker: &'static str,
    name: &'static str,
    sector: &'static str,
    base_price: f64,
    market_cap: f64,
    pe_ratio: f64,
    pb_ratio: f64,
    ps_ratio: f64,
    rating: InvestmentRating,
}

const DEMO_COMPANIES: &[DemoCompany] = &[
    DemoCompany {
        ticker: "AAPL",
        name: "Apple Inc.",
        sector: "Technology",
        base_price: 180.0,
        market_cap: 2.95e12,
        pe_ratio: 29.4,
        pb_ratio: 45.1,
        ps_ratio: 7.6,
        rating: InvestmentRating::Buy,
    },
    DemoCompany {
        ticker: "MSFT",
        name: "Microsoft Corporation",
        sector: "Technology",
        base_price: 410.0,
        market_cap: 3.05e12,
        pe_ratio: 35.2,
        pb_ratio: 12.3,
        ps_ratio: 12.9,
        rating: InvestmentRating::StrongBuy,
    },
    DemoCompany {
        ticker: "TSLA",
        name: "Tesla, Inc.",
        sector: "Consumer Cyclical",
        base_price: 240.0,
        market_cap: 7.6e11,
        pe_ratio: 62.8,
        pb_ratio: 11.4,
        ps_ratio: 7.9,
        rating: InvestmentRating::Hold,
    },
];

const SECTOR_AVERAGES: (f64, f64, f64) = (27.5, 8.2, 6.1);

fn find_company(ticker: &str) -> Option<&'static DemoCompany> {
    DEMO_COMPANIES.iter().find(|c| c.ticker == ticker)
}

/// Known tickers mentioned in the query, in order of appearance.
pub fn extract_tickers(query: &str) -> Vec<String> {
    let mut tickers: Vec<String> = Vec::new();
    for word in query.split(|c: char| !c.is_ascii_alphanumeric()) {
        let upper = word.to_ascii_uppercase();
        if find_company(&upper).is_some() && !tickers.contains(&upper) {
            tickers.push(upper);
        }
    }
    tickers
}

fn price_history(company: &DemoCompany) -> Vec<PricePoint> {
    (1..=30)
        .map(|day| {
            let drift = day as f64 * 0.004;
            let wave = ((day as f64) / 3.0).sin() * 0.02;
            let close = company.base_price * (1.0 + drift + wave);
            PricePoint {
                date: format!("2025-09-{:02}", day),
                open: close * 0.995,
                high: close * 1.01,
                low: close * 0.99,
                close,
                volume: 40_000_000 + day * 250_000,
            }
        })
        .collect()
}

fn visualization(company: &DemoCompany) -> VisualizationData {
    let history = price_history(company);
    let closes = history.iter().map(|p| p.close);
    let period_high = closes.clone().fold(f64::MIN, f64::max);
    let period_low = closes.fold(f64::MAX, f64::min);
    let current_price = history.last().map(|p| p.close);
    let average_volume = history.iter().map(|p| p.volume as f64).sum::<f64>() / history.len() as f64;

    let (sector_pe, sector_pb, sector_ps) = SECTOR_AVERAGES;
    let sector_label: String = company.sector.chars().take(10).collect();

    VisualizationData {
        ticker: company.ticker.to_string(),
        week_52_high: Some(period_high * 1.08),
        week_52_low: Some(period_low * 0.85),
        current_price,
        current_position_pct: Some(72.0),
        peer_comparison: vec![
            PeerComparison {
                ticker: company.ticker.to_string(),
                name: Some(company.name.to_string()),
                pe_ratio: Some(company.pe_ratio),
                pb_ratio: Some(company.pb_ratio),
                ps_ratio: Some(company.ps_ratio),
                is_main: true,
            },
            PeerComparison {
                ticker: format!("{} Avg", sector_label),
                name: Some(format!("{} Average", company.sector)),
                pe_ratio: Some(sector_pe),
                pb_ratio: Some(sector_pb),
                ps_ratio: Some(sector_ps),
                is_main: false,
            },
        ],
        period_high: Some(period_high),
        period_low: Some(period_low),
        average_volume: Some(average_volume),
        price_history: history,
    }
}

fn snapshot(company: &DemoCompany) -> InvestorSnapshot {
    InvestorSnapshot {
        ticker: company.ticker.to_string(),
        current_price: Some(company.base_price * 1.12),
        price_change_pct: Some(1.35),
        market_cap: Some(company.market_cap),
        pe_ratio: Some(company.pe_ratio),
        investment_rating: company.rating,
        rating_explanation: format!(
            "{} shows steady momentum with valuation close to its recent range.",
            company.name
        ),
        key_highlights: vec![
            "Revenue grew year over year".to_string(),
            "Strong free cash flow supports buybacks".to_string(),
            "Analysts expect margin expansion".to_string(),
        ],
        risk_warnings: vec![
            format!("Valuation is above the {} sector average", company.sector),
            "Sensitive to interest-rate changes".to_string(),
        ],
    }
}

fn report_markdown(query: &str, tickers: &[String]) -> String {
    let mut report = String::from("# Investment Research Report\n\n");
    report.push_str(&format!("**Query:** {}\n\n## Executive Summary\n\n", query));
    if tickers.is_empty() {
        report.push_str("No tracked ticker was identified, so this report covers the general market context.\n");
        return report;
    }
    report.push_str("| Ticker | Company | P/E |\n|---|---|---|\n");
    for ticker in tickers {
        if let Some(company) = find_company(ticker) {
            report.push_str(&format!("| {} | {} | {:.1} |\n", company.ticker, company.name, company.pe_ratio));
        }
    }
    report.push_str("\n## Outlook\n\n- Momentum remains positive\n- ~~Earnings risk~~ priced in\n");
    report
}

/// Response the demo backend returns for `query` in `session_id`.
pub fn demo_response(query: &str, session_id: &str) -> ResearchQueryResponse {
    let tickers = extract_tickers(query);
    let companies: Vec<&DemoCompany> = tickers.iter().filter_map(|t| find_company(t)).collect();
    let has_data = !companies.is_empty();

    ResearchQueryResponse {
        session_id: session_id.to_string(),
        query: query.to_string(),
        report: report_markdown(query, &tickers),
        market_data_available: has_data,
        sentiment_available: has_data,
        analyst_consensus_available: false,
        context_retrieved: if has_data { 5 } else { 0 },
        timestamp: DEMO_TIMESTAMP.to_string(),
        snapshot: companies.first().map(|c| snapshot(c)),
        visualization_data: companies.iter().map(|c| visualization(c)).collect(),
        executed_agents: vec!["router".to_string(), "market_data".to_string(), "report".to_string()],
        agent_errors: Default::default(),
        intent: Some(if tickers.len() > 1 { "comparison" } else { "general_research" }.to_string()),
        report_metadata: None,
        tickers,
    }
}

pub const DEMO_SESSION_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

pub fn demo_history(session_id: &str) -> Option<SessionHistoryResponse> {
    if session_id != DEMO_SESSION_ID {
        return None;
    }
    let query = "What is the investment outlook for Apple?";
    let messages = vec![
        Message {
            role: MessageRole::User,
            content: query.to_string(),
            timestamp: "2025-10-26T12:00:00Z".to_string(),
        },
        Message {
            role: MessageRole::Assistant,
            content: report_markdown(query, &["AAPL".to_string()]),
            timestamp: "2025-10-26T12:00:15Z".to_string(),
        },
    ];
    Some(SessionHistoryResponse {
        session_id: session_id.to_string(),
        message_count: messages.len() as u32,
        messages,
    })
}

pub fn demo_sessions() -> SessionsResponse {
    let sessions = vec![SessionSummary {
        session_id: DEMO_SESSION_ID.to_string(),
        message_count: 2,
        created_at: "2025-10-26T12:00:00Z".to_string(),
        updated_at: "2025-10-26T12:00:15Z".to_string(),
        first_query: Some("What is the investment outlook for Apple?".to_string()),
        user_id: None,
        expires_at: Some("2025-10-27T12:00:00Z".to_string()),
    }];
    SessionsResponse {
        total_count: sessions.len() as u32,
        sessions,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    SubmitQuery,
    GetSessionHistory,
    GetSessions,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MockCall {
    SubmitQuery(ResearchQueryRequest),
    GetSessionHistory(String),
    GetSessions,
}

/// In-memory [`ResearchApi`] serving the demo fixtures, with switchable failures
/// and a log of every call made.
#[derive(Default)]
pub struct MockResearchApi {
    failures: Mutex<HashMap<Operation, ApiError>>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockResearchApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(self, operation: Operation, error: ApiError) -> Self {
        if let Ok(mut failures) = self.failures.lock() {
            failures.insert(operation, error);
        }
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, operation: Operation, call: MockCall) -> Result<(), ApiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match self.failures.lock() {
            Ok(failures) => failures.get(&operation).cloned().map_or(Ok(()), Err),
            Err(_) => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl ResearchApi for MockResearchApi {
    async fn submit_query(&self, request: &ResearchQueryRequest) -> Result<ResearchQueryResponse, ApiError> {
        self.record(Operation::SubmitQuery, MockCall::SubmitQuery(request.clone()))?;
        let session_id = request.session_id.as_deref().unwrap_or(DEMO_SESSION_ID);
        Ok(demo_response(&request.query, session_id))
    }

    async fn get_session_history(&self, session_id: &str) -> Result<SessionHistoryResponse, ApiError> {
        self.record(Operation::GetSessionHistory, MockCall::GetSessionHistory(session_id.to_string()))?;
        demo_history(session_id).ok_or_else(|| ApiError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
            body: format!(r#"{{"detail":"Session not found: {}"}}"#, session_id),
        })
    }

    async fn get_sessions(&self) -> Result<SessionsResponse, ApiError> {
        self.record(Operation::GetSessions, MockCall::GetSessions)?;
        Ok(demo_sessions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_known_tickers_in_order_without_duplicates() {
        assert_eq!(extract_tickers("Compare msft with AAPL and MSFT"), vec!["MSFT", "AAPL"]);
        assert!(extract_tickers("How is the market?").is_empty());
    }

    #[test]
    fn demo_response_for_unknown_ticker_has_no_snapshot() {
        let response = demo_response("How is the market?", "s1");
        assert!(response.snapshot.is_none());
        assert!(response.visualization_data.is_empty());
        assert_eq!(response.context_retrieved, 0);
    }

    #[test]
    fn demo_response_charts_every_ticker() {
        let response = demo_response("Compare AAPL and TSLA", "s1");
        assert_eq!(response.tickers, vec!["AAPL", "TSLA"]);
        assert_eq!(response.snapshot.as_ref().map(|s| s.ticker.as_str()), Some("AAPL"));
        assert_eq!(response.visualization_data.len(), 2);
        assert!(response.visualization_data.iter().all(|v| v.price_history.len() == 30));
    }

    #[test]
    fn fixtures_honour_count_contracts() {
        assert!(demo_sessions().is_consistent());
        assert!(demo_history(DEMO_SESSION_ID).unwrap().is_consistent());
        assert!(demo_history("missing-id").is_none());
    }
}

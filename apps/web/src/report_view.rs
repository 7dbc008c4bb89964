//! What the report display shows for a given response and view mode.
//!
//! `ReportLayout::build` makes every rendering decision up front so the Leptos
//! component only has to draw the result.

use crate::format::{format_timestamp, short_session_id};
use crate::models::{InvestorSnapshot, ResearchQueryResponse, VisualizationData};

pub const DISCLAIMER_EN: &str = "This report was generated by AI agents and should not be considered as financial advice. \
Always conduct your own research and consult with a qualified financial advisor before making investment decisions.";

pub const DISCLAIMER_ZH: &str =
    "本报告由AI代理生成，不应被视为财务建议。在做出投资决策之前，请务必进行自己的研究并咨询合格的财务顾问。";

pub const SIMPLE_CHARTS_HEADING: &str = "Price Trend / 价格走势";
pub const DETAILED_CHARTS_HEADING: &str = "Interactive Charts / 交互式图表";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Simple,
    Detailed,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Simple => "Simple / 简单",
            ViewMode::Detailed => "Detailed / 详细",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Simple => ViewMode::Detailed,
            ViewMode::Detailed => ViewMode::Simple,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportHeader {
    pub query: String,
    /// Empty means the badge row is not rendered.
    pub tickers: Vec<String>,
    pub timestamp: String,
    pub session_id: String,
}

impl ReportHeader {
    pub fn from_response(response: &ResearchQueryResponse) -> Self {
        Self {
            query: response.query.clone(),
            tickers: response.tickers.clone(),
            timestamp: format_timestamp(&response.timestamp),
            session_id: short_session_id(&response.session_id).to_string(),
        }
    }

    pub fn shows_badges(&self) -> bool {
        !self.tickers.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorIcon {
    MarketData,
    Sentiment,
    AnalystConsensus,
    Context,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indicator {
    pub icon: IndicatorIcon,
    pub label: String,
    pub available: bool,
}

/// The four data-availability rows, in display order.
pub fn indicators(response: &ResearchQueryResponse) -> Vec<Indicator> {
    let availability = response.data_availability();
    vec![
        Indicator {
            icon: IndicatorIcon::MarketData,
            label: "Market Data".to_string(),
            available: availability.market_data,
        },
        Indicator {
            icon: IndicatorIcon::Sentiment,
            label: "Sentiment".to_string(),
            available: availability.sentiment,
        },
        Indicator {
            icon: IndicatorIcon::AnalystConsensus,
            label: "Analyst Consensus".to_string(),
            available: availability.analyst_consensus,
        },
        Indicator {
            icon: IndicatorIcon::Context,
            label: format!("Context Retrieved ({})", availability.context_retrieved),
            available: availability.has_context(),
        },
    ]
}

/// Charts for one ticker.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartEntry {
    pub data: VisualizationData,
    pub show_price: bool,
    pub show_peers: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSection {
    pub heading: &'static str,
    pub entries: Vec<ChartEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReportContent {
    /// Simple mode with a snapshot available; peer charts are never shown here.
    Snapshot {
        snapshot: InvestorSnapshot,
        charts: Option<ChartSection>,
    },
    /// Full markdown report with every chart the data supports.
    Full {
        markdown: String,
        charts: Option<ChartSection>,
    },
}

impl ReportContent {
    pub fn charts(&self) -> Option<&ChartSection> {
        match self {
            ReportContent::Snapshot { charts, .. } | ReportContent::Full { charts, .. } => charts.as_ref(),
        }
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self, ReportContent::Snapshot { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportLayout {
    pub header: ReportHeader,
    pub view_mode: ViewMode,
    /// Present only in detailed mode.
    pub indicators: Option<Vec<Indicator>>,
    pub content: ReportContent,
}

impl ReportLayout {
    pub fn build(response: &ResearchQueryResponse, view_mode: ViewMode) -> Self {
        let indicators = match view_mode {
            ViewMode::Detailed => Some(indicators(response)),
            ViewMode::Simple => None,
        };

        let content = match (view_mode, response.snapshot.as_ref()) {
            (ViewMode::Simple, Some(snapshot)) => ReportContent::Snapshot {
                snapshot: snapshot.clone(),
                charts: chart_section(&response.visualization_data, SIMPLE_CHARTS_HEADING, false),
            },
            _ => ReportContent::Full {
                markdown: response.report.clone(),
                charts: chart_section(&response.visualization_data, DETAILED_CHARTS_HEADING, true),
            },
        };

        Self {
            header: ReportHeader::from_response(response),
            view_mode,
            indicators,
            content,
        }
    }

    pub fn footer(&self) -> [&'static str; 2] {
        [DISCLAIMER_EN, DISCLAIMER_ZH]
    }
}

fn chart_section(data: &[VisualizationData], heading: &'static str, allow_peers: bool) -> Option<ChartSection> {
    if data.is_empty() {
        return None;
    }

    let entries = data
        .iter()
        .map(|viz| ChartEntry {
            data: viz.clone(),
            show_price: viz.has_price_history(),
            show_peers: allow_peers && viz.has_peer_comparison(),
        })
        .collect();

    Some(ChartSection { heading, entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvestmentRating, PeerComparison, PricePoint};
    use pretty_assertions::assert_eq;

    fn scenario_response() -> ResearchQueryResponse {
        serde_json::from_value(serde_json::json!({
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
        .unwrap()
    }

    fn snapshot() -> InvestorSnapshot {
        InvestorSnapshot {
            ticker: "AAPL".into(),
            current_price: Some(190.0),
            price_change_pct: Some(0.8),
            market_cap: Some(2.9e12),
            pe_ratio: Some(29.0),
            investment_rating: InvestmentRating::Buy,
            rating_explanation: "Steady.".into(),
            key_highlights: vec!["Buybacks".into()],
            risk_warnings: vec![],
        }
    }

    fn viz(ticker: &str, prices: usize, peers: usize) -> VisualizationData {
        VisualizationData {
            ticker: ticker.into(),
            price_history: (0..prices)
                .map(|i| PricePoint {
                    date: format!("2024-01-{:02}", i + 1),
                    open: 1.0,
                    high: 1.0,
                    low: 1.0,
                    close: 1.0 + i as f64,
                    volume: 10,
                })
                .collect(),
            week_52_high: None,
            week_52_low: None,
            current_price: None,
            current_position_pct: None,
            peer_comparison: (0..peers)
                .map(|i| PeerComparison {
                    ticker: format!("P{}", i),
                    name: None,
                    pe_ratio: Some(10.0),
                    pb_ratio: None,
                    ps_ratio: None,
                    is_main: i == 0,
                })
                .collect(),
            period_high: None,
            period_low: None,
            average_volume: None,
        }
    }

    #[test]
    fn analyze_aapl_scenario() {
        let response = scenario_response();
        let layout = ReportLayout::build(&response, ViewMode::Detailed);

        assert_eq!(layout.header.tickers, vec!["AAPL".to_string()]);
        assert_eq!(layout.header.timestamp, "Jan 1, 2024, 12:00 AM");
        assert_eq!(layout.header.session_id, "s1");

        let indicators = layout.indicators.expect("detailed mode shows indicators");
        let states: Vec<(&str, bool)> = indicators.iter().map(|i| (i.label.as_str(), i.available)).collect();
        assert_eq!(
            states,
            vec![
                ("Market Data", true),
                ("Sentiment", false),
                ("Analyst Consensus", false),
                ("Context Retrieved (0)", false),
            ]
        );
    }

    #[test]
    fn default_mode_is_simple() {
        assert_eq!(ViewMode::default(), ViewMode::Simple);
        let layout = ReportLayout::build(&scenario_response(), ViewMode::default());
        assert!(layout.indicators.is_none());
    }

    #[test]
    fn header_shows_first_eight_characters_of_session() {
        let mut response = scenario_response();
        response.session_id = "abcdef1234567890".into();
        let layout = ReportLayout::build(&response, ViewMode::Simple);
        assert_eq!(layout.header.session_id, "abcdef12");
    }

    #[test]
    fn empty_tickers_hide_badge_row() {
        let mut response = scenario_response();
        response.tickers.clear();
        assert!(!ReportLayout::build(&response, ViewMode::Simple).header.shows_badges());

        response.tickers = vec!["MSFT".into(), "AAPL".into(), "NVDA".into()];
        let header = ReportLayout::build(&response, ViewMode::Simple).header;
        assert!(header.shows_badges());
        assert_eq!(header.tickers, vec!["MSFT", "AAPL", "NVDA"]);
    }

    #[test]
    fn context_indicator_tracks_count() {
        let mut response = scenario_response();
        response.context_retrieved = 7;
        let indicators = indicators(&response);
        assert_eq!(indicators[3].label, "Context Retrieved (7)");
        assert!(indicators[3].available);
    }

    #[test]
    fn snapshot_in_simple_mode_replaces_markdown() {
        let mut response = scenario_response();
        response.snapshot = Some(snapshot());

        let layout = ReportLayout::build(&response, ViewMode::Simple);
        match layout.content {
            ReportContent::Snapshot { snapshot: shown, charts } => {
                assert_eq!(shown, snapshot());
                assert!(charts.is_none());
            }
            other => panic!("expected snapshot content, got {:?}", other),
        }
    }

    #[test]
    fn missing_snapshot_renders_markdown_in_both_modes() {
        let response = scenario_response();
        for mode in [ViewMode::Simple, ViewMode::Detailed] {
            match ReportLayout::build(&response, mode).content {
                ReportContent::Full { markdown, .. } => assert_eq!(markdown, "# Report"),
                other => panic!("expected markdown in {:?}, got {:?}", mode, other),
            }
        }
    }

    #[test]
    fn snapshot_present_detailed_mode_renders_markdown() {
        let mut response = scenario_response();
        response.snapshot = Some(snapshot());
        let layout = ReportLayout::build(&response, ViewMode::Detailed);
        assert!(!layout.content.is_snapshot());
    }

    #[test]
    fn simple_mode_charts_are_price_only() {
        let mut response = scenario_response();
        response.snapshot = Some(snapshot());
        response.visualization_data = vec![viz("AAPL", 5, 2), viz("MSFT", 0, 2)];

        let layout = ReportLayout::build(&response, ViewMode::Simple);
        let charts = layout.content.charts().expect("chart section");
        assert_eq!(charts.heading, SIMPLE_CHARTS_HEADING);
        let flags: Vec<(bool, bool)> = charts.entries.iter().map(|e| (e.show_price, e.show_peers)).collect();
        assert_eq!(flags, vec![(true, false), (false, false)]);
    }

    #[test]
    fn detailed_mode_adds_peer_charts_where_present() {
        let mut response = scenario_response();
        response.visualization_data = vec![viz("AAPL", 5, 2), viz("MSFT", 3, 0), viz("TSLA", 0, 1)];

        let layout = ReportLayout::build(&response, ViewMode::Detailed);
        let charts = layout.content.charts().expect("chart section");
        assert_eq!(charts.heading, DETAILED_CHARTS_HEADING);
        let flags: Vec<(&str, bool, bool)> = charts
            .entries
            .iter()
            .map(|e| (e.data.ticker.as_str(), e.show_price, e.show_peers))
            .collect();
        assert_eq!(flags, vec![("AAPL", true, true), ("MSFT", true, false), ("TSLA", false, true)]);
    }

    #[test]
    fn empty_visualization_data_drops_chart_section() {
        let layout = ReportLayout::build(&scenario_response(), ViewMode::Detailed);
        assert!(layout.content.charts().is_none());
    }

    #[test]
    fn toggling_keeps_header_and_footer() {
        let mut response = scenario_response();
        response.snapshot = Some(snapshot());
        response.visualization_data = vec![viz("AAPL", 5, 2)];

        let simple = ReportLayout::build(&response, ViewMode::Simple);
        let detailed = ReportLayout::build(&response, simple.view_mode.toggled());
        let back = ReportLayout::build(&response, detailed.view_mode.toggled());

        assert_eq!(simple.header, detailed.header);
        assert_eq!(simple.footer(), detailed.footer());
        assert_eq!(simple, back);

        assert!(simple.indicators.is_none());
        assert_eq!(detailed.indicators.as_ref().map(Vec::len), Some(4));

        let peers_shown = |layout: &ReportLayout| {
            layout
                .content
                .charts()
                .map(|c| c.entries.iter().any(|e| e.show_peers))
                .unwrap_or(false)
        };
        assert!(!peers_shown(&simple));
        assert!(peers_shown(&detailed));
    }

    #[test]
    fn footer_is_bilingual() {
        let layout = ReportLayout::build(&scenario_response(), ViewMode::Simple);
        let [en, zh] = layout.footer();
        assert!(en.starts_with("This report was generated by AI agents"));
        assert!(zh.starts_with("本报告由AI代理生成"));
    }
}

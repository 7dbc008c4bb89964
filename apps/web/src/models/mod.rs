mod research;
mod session;
mod snapshot;
mod visualization;

pub use research::{DataAvailability, ReportMetadata, ResearchQueryRequest, ResearchQueryResponse, ResearchState};
pub use session::{Message, MessageRole, SessionHistoryResponse, SessionSummary, SessionsResponse};
pub use snapshot::{InvestmentRating, InvestorSnapshot};
pub use visualization::{PeerComparison, PricePoint, VisualizationData};

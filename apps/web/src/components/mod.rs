pub mod data_indicator;
pub mod header;
pub mod history_message;
pub mod investor_snapshot;
pub mod loading_spinner;
pub mod markdown;
pub mod peer_comparison_chart;
pub mod price_chart;
pub mod query_input;
pub mod report_display;
pub mod session_list;

pub use data_indicator::*;
pub use header::*;
pub use history_message::*;
pub use investor_snapshot::*;
pub use loading_spinner::*;
pub use markdown::*;
pub use peer_comparison_chart::*;
pub use price_chart::*;
pub use query_input::*;
pub use report_display::*;
pub use session_list::*;

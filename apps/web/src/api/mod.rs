mod client;
pub mod mock;

#[cfg(feature = "ssr")]
pub mod handlers;

pub use client::{
    decode_body, history_path, ApiError, ApiHandle, HttpResearchApi, ResearchApi, QUERY_PATH, SESSIONS_PATH,
};
pub use mock::{MockCall, MockResearchApi, Operation};

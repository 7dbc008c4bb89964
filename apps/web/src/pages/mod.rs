mod research;
mod session;

pub use research::ResearchPage;
pub use session::SessionPage;

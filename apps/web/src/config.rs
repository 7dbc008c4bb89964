/// Where the browser client sends research API calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

pub const DEFAULT_API_BASE_URL: &str = "/api";

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// WASM has no process environment, so the override is baked in at build time.
    pub fn from_env() -> Self {
        match option_env!("RESEARCH_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(feature = "ssr")]
pub use server_config::ServerConfig;

#[cfg(feature = "ssr")]
mod server_config {
    use std::net::SocketAddr;

    pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

    #[derive(Clone, Debug)]
    pub struct ServerConfig {
        pub addr: SocketAddr,
    }

    impl ServerConfig {
        pub fn from_env() -> Result<Self, std::net::AddrParseError> {
            let _ = dotenvy::dotenv();
            let raw = std::env::var("RESEARCH_WEB_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
            Ok(Self { addr: raw.parse()? })
        }
    }
}

use std::path::PathBuf;
use std::time::Duration;

// Demo endpoint serving the `{ data: { userHolding: [...] } }` envelope.
const DEFAULT_ENDPOINT: &str = "https://35dee773a9ec441e9f38d5fc249406ce.api.mockbin.io/";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub endpoint: String,
    pub cache_dir: PathBuf,
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Every knob has a default, so loading never fails.
    pub fn from_env() -> Self {
        let endpoint = std::env::var("HOLDINGS_ENDPOINT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let cache_dir = std::env::var("HOLDINGS_CACHE_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);

        let http_timeout = std::env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            endpoint,
            cache_dir,
            http_timeout,
        }
    }
}

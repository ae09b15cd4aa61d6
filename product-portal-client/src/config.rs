//! Runtime settings of the client. A wasm bundle has no process environment, so the values are
//! captured from the build environment.

use log::Level;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOG_LEVEL: Level = Level::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base URL of the remote API, without a trailing `/`
    pub backend_url: &'static str,
    /// Maximum level forwarded to the browser console
    pub log_level: Level,
}

impl PortalConfig {
    /// Read `BACKEND_URL` and `PORTAL_LOG_LEVEL` as they were set when the bundle was built
    pub fn from_env() -> Self {
        Self::from_values(option_env!("BACKEND_URL"), option_env!("PORTAL_LOG_LEVEL"))
    }

    fn from_values(backend_url: Option<&'static str>, log_level: Option<&str>) -> Self {
        let backend_url = backend_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/');
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self {
            backend_url,
            log_level,
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

//! Application Configuration
//!
//! Endpoints are fixed at build time through `MOHA_API_BASE` and
//! `MOHA_ASSET_BASE`; unset variables fall back to the production host.

const DEFAULT_API_BASE: &str = "https://10.10.6.15/moha-api/api";
const DEFAULT_ASSET_BASE: &str = "https://10.10.6.15/moha-api/public";

/// Browser storage keys for the signed-in session
pub struct StorageKeys;

impl StorageKeys {
    pub const TOKEN: &'static str = "token";
    pub const PROFILE: &'static str = "user";
}

/// Remote origins used by the app, without trailing slashes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// REST API root, e.g. `https://host/moha-api/api`
    pub api_base: String,
    /// Public root that uploaded images and files are served from
    pub asset_base: String,
}

impl AppConfig {
    pub fn new(api_base: &str, asset_base: &str) -> Self {
        Self {
            api_base: normalize(api_base),
            asset_base: normalize(asset_base),
        }
    }

    /// Configuration baked in at compile time
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("MOHA_API_BASE").unwrap_or(DEFAULT_API_BASE),
            option_env!("MOHA_ASSET_BASE").unwrap_or(DEFAULT_ASSET_BASE),
        )
    }

    /// Absolute URL for an uploaded asset path
    pub fn asset(&self, path: &str) -> String {
        crate::content::asset_url(&self.asset_base, path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn normalize(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = AppConfig::new("http://localhost:8000/api/", " http://localhost:8000/public// ");
        assert_eq!(config.api_base, "http://localhost:8000/api");
        assert_eq!(config.asset_base, "http://localhost:8000/public");
        assert_eq!(config.asset("storage/a.jpg"), "http://localhost:8000/public/storage/a.jpg");
    }
}

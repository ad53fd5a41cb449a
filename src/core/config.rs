//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Default `tracing` filter when `PORTFOLIO_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,portfolio=debug,tower_http=info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive
    /// Example: info,portfolio=trace
    pub log_filter: Option<String>,

    /// Whether responses are brotli/gzip compressed
    pub compression: bool,

    /// Canonical public URL used in meta tags and structured data
    /// Example: https://mrohit.netlify.app/
    pub site_url: Option<String>,
}

/// Anything except an explicit "off" value counts as enabled
fn parse_switch(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) => !matches!(v.as_str(), "0" | "false" | "off" | "no"),
        None => true,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            log_filter: non_empty(std::env::var("PORTFOLIO_LOG").ok()),
            compression: parse_switch(std::env::var("PORTFOLIO_COMPRESSION").ok().as_deref()),
            site_url: non_empty(std::env::var("PORTFOLIO_SITE_URL").ok()),
        }
    }

    /// Check if a log filter override is configured
    pub fn has_log_filter(&self) -> bool {
        self.log_filter.is_some()
    }

    /// Check if a canonical site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// Log filter, falling back to `DEFAULT_LOG_FILTER`
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Site URL, falling back to the address the server listens on
    pub fn site_url_or(&self, addr: &std::net::SocketAddr) -> String {
        self.site_url
            .clone()
            .unwrap_or_else(|| format!("http://{addr}/"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            log_filter: Some("debug".to_string()),
            compression: false,
            site_url: Some("https://mrohit.netlify.app/".to_string()),
        };

        assert_eq!(config.log_filter_or_default(), "debug");
        assert!(!config.compression);
        assert!(config.has_site_url());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config {
            log_filter: None,
            compression: true,
            site_url: None,
        };

        assert!(!config.has_log_filter());
        assert!(!config.has_site_url());
        assert_eq!(config.log_filter_or_default(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_site_url_falls_back_to_listen_addr() {
        let config = Config {
            log_filter: None,
            compression: true,
            site_url: None,
        };
        let addr: std::net::SocketAddr = "127.0.0.1:3000".parse().unwrap();

        assert_eq!(config.site_url_or(&addr), "http://127.0.0.1:3000/");
    }

    // ========================================================================
    // Parsing helpers
    // ========================================================================

    #[test]
    fn test_compression_switch() {
        assert!(parse_switch(None));
        assert!(parse_switch(Some("1")));
        assert!(parse_switch(Some("yes")));
        assert!(!parse_switch(Some("0")));
        assert!(!parse_switch(Some("false")));
        assert!(!parse_switch(Some(" OFF ")));
    }

    #[test]
    fn test_blank_values_are_unset() {
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(
            non_empty(Some("warn".to_string())),
            Some("warn".to_string())
        );
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            log_filter: Some("trace".to_string()),
            compression: true,
            site_url: None,
        };

        let cloned = config.clone();
        assert_eq!(cloned.log_filter, config.log_filter);
        assert_eq!(cloned.compression, config.compression);
    }

    #[test]
    fn test_config_debug() {
        let config = Config {
            log_filter: None,
            compression: true,
            site_url: Some("https://example.com/".to_string()),
        };

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("compression"));
    }
}

//! Build-time settings (`API_BASE_URL=… trunk build`).

use log::LevelFilter;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080/api";

/// Base URL of the REST API, without trailing slash.
pub fn api_base() -> &'static str {
    let base = option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE);
    base.trim_end_matches('/')
}

pub fn log_level() -> LevelFilter {
    parse_level(option_env!("LOG_LEVEL"))
}

fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.parse().ok()).unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_falls_back_to_info() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("chatty")), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    }

    #[test]
    fn base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }
}

use std::env;
use std::path::PathBuf;

use crate::error::ServerError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8444;
const DEFAULT_DIST: &str = "../frontend/dist";

#[derive(Debug, Clone, PartialEq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Output of `trunk build`.
    pub dist_dir: PathBuf,
    /// Plain HTTP when `None`.
    pub tls: Option<TlsPaths>,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let host = lookup("STATIC_HOST").unwrap_or_else(|| DEFAULT_HOST.into());

        let port = match lookup("STATIC_PORT") {
            None => DEFAULT_PORT,
            Some(value) => value.trim().parse().map_err(|_| ServerError::InvalidPort {
                var: "STATIC_PORT",
                value,
            })?,
        };

        let dist_dir = lookup("STATIC_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DIST));

        let tls = match (lookup("STATIC_TLS_CERT"), lookup("STATIC_TLS_KEY")) {
            (Some(cert), Some(key)) => Some(TlsPaths {
                cert: cert.into(),
                key: key.into(),
            }),
            (None, None) => None,
            _ => return Err(ServerError::IncompleteTls),
        };

        Ok(Self { host, port, dist_dir, tls })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_plain_http_on_8444() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8444);
        assert!(cfg.dist_dir.ends_with("../frontend/dist"));
        assert_eq!(cfg.tls, None);
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("STATIC_PORT", "9000"),
            ("STATIC_DIST_DIR", "/srv/portal"),
            ("STATIC_TLS_CERT", "c.pem"),
            ("STATIC_TLS_KEY", "k.pem"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/portal"));
        assert_eq!(cfg.tls.unwrap().key, PathBuf::from("k.pem"));
    }

    #[test]
    fn rejects_bad_port_and_half_tls() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("STATIC_PORT", "http")])),
            Err(ServerError::InvalidPort { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("STATIC_TLS_CERT", "c.pem")])),
            Err(ServerError::IncompleteTls)
        ));
    }
}

use std::{fs::File, io::BufReader, path::Path};

use rustls::{
    pki_types::{CertificateDer, PrivateKeyDer},
    server::ServerConfig,
};
use rustls_pemfile::{certs, pkcs8_private_keys};

use crate::config::TlsPaths;
use crate::error::ServerError;

fn open(path: &Path) -> Result<BufReader<File>, ServerError> {
    File::open(path).map(BufReader::new).map_err(|source| ServerError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// PEM certificate chain + PKCS#8 key → rustls config (no client auth).
pub fn load(paths: &TlsPaths) -> Result<ServerConfig, ServerError> {
    // ignored when a provider is already installed
    let _ = rustls::crypto::ring::default_provider().install_default();

    let io_err = |path: &Path| {
        let path = path.display().to_string();
        move |source: std::io::Error| ServerError::Io { path, source }
    };

    let chain: Vec<CertificateDer<'static>> = certs(&mut open(&paths.cert)?)
        .collect::<Result<_, _>>()
        .map_err(io_err(&paths.cert))?;

    let key = pkcs8_private_keys(&mut open(&paths.key)?)
        .next()
        .ok_or_else(|| ServerError::NoPrivateKey(paths.key.display().to_string()))?
        .map_err(io_err(&paths.key))?;

    Ok(ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(chain, PrivateKeyDer::Pkcs8(key))?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_files_are_reported_with_their_path() {
        let paths = TlsPaths {
            cert: "/nonexistent/cert.pem".into(),
            key: "/nonexistent/key.pem".into(),
        };
        match load(&paths) {
            Err(ServerError::Io { path, .. }) => assert!(path.contains("cert.pem")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn key_file_without_pkcs8_block_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("cert.pem");
        let key = dir.path().join("key.pem");
        File::create(&cert).unwrap();
        File::create(&key).unwrap().write_all(b"not a key\n").unwrap();

        match load(&TlsPaths { cert, key }) {
            Err(ServerError::NoPrivateKey(path)) => assert!(path.ends_with("key.pem")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
    #[error("STATIC_TLS_CERT and STATIC_TLS_KEY must be set together")]
    IncompleteTls,
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no PKCS#8 private key in {0}")]
    NoPrivateKey(String),
    #[error("TLS: {0}")]
    Tls(#[from] rustls::Error),
}

impl From<ServerError> for std::io::Error {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::Io { source, .. } => source,
            other => std::io::Error::new(std::io::ErrorKind::InvalidInput, other),
        }
    }
}

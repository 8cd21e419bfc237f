//! `env_logger` with a default filter when RUST_LOG is unset.

const DEFAULT_FILTER: &str = "info,actix_web=info,actix_files=warn";

pub fn init() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
    env_logger::Builder::from_env(env).init();
}

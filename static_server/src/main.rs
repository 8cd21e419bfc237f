mod config;
mod error;
mod logger;
mod spa;
mod tls;

use actix_web::{middleware::Logger, App, HttpServer};
use log::info;

use crate::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    logger::init();

    let config = Config::from_env()?;
    info!("serving {} on {}:{}", config.dist_dir.display(), config.host, config.port);

    let dist_dir = config.dist_dir.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(spa::files(&dist_dir))
    });

    let server = match &config.tls {
        Some(paths) => {
            info!("TLS enabled ({})", paths.cert.display());
            server.bind_rustls_0_23((config.host.as_str(), config.port), tls::load(paths)?)?
        }
        None => server.bind((config.host.as_str(), config.port))?,
    };

    server.run().await
}

//! Static files from the trunk `dist/` folder; every other path gets
//! `index.html` so the client-side router can take over after a reload.

use std::path::{Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use log::debug;

pub fn files(dist_dir: &Path) -> Files {
    let index: PathBuf = dist_dir.join("index.html");

    Files::new("/", dist_dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                debug!("SPA fallback for {}", req.path());
                let res = NamedFile::open_async(&index).await?.into_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use actix_web::{http::StatusCode, test, App};

    use super::*;

    fn dist() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>portal</html>").unwrap();
        fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        dir
    }

    #[actix_web::test]
    async fn serves_assets_as_is() {
        let dir = dist();
        let app = test::init_service(App::new().service(files(dir.path()))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/app.js").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "console.log(1)");
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let dir = dist();
        let app = test::init_service(App::new().service(files(dir.path()))).await;

        for uri in ["/", "/admin/reports", "/lecturer/students"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            assert_eq!(test::read_body(resp).await, "<html>portal</html>");
        }
    }
}

//! Serves the page bundle embedded at compile time.
//!
//! The bundle is the `trunk build` output of the `frontend` crate, copied into
//! `static/dist` by `build.rs`. Lookups follow the static-export conventions
//! of the page: `dir/` maps to `dir/index.html`, and anything unknown falls
//! back to the root `index.html`.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::{debug, warn};
use mime_guess::{from_path, Mime};

static STATIC_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// An embedded file ready to be sent.
#[derive(Debug)]
pub struct Asset {
    pub path: String,
    pub mime: Mime,
    pub contents: &'static [u8],
}

/// Resolves a request path against `dir`.
pub fn resolve(dir: &Dir<'static>, request_path: &str) -> Option<Asset> {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() {
        INDEX.to_string()
    } else if path.ends_with('/') {
        format!("{}{}", path, INDEX)
    } else {
        path.to_string()
    };

    let (path, file) = match dir.get_file(&file_path) {
        Some(file) => (file_path, file),
        None => {
            debug!("No embedded file for {}, falling back to {}", request_path, INDEX);
            (INDEX.to_string(), dir.get_file(INDEX)?)
        }
    };

    Some(Asset {
        mime: from_path(&path).first_or_octet_stream(),
        path,
        contents: file.contents(),
    })
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match resolve(&STATIC_DIR, req.path()) {
        Some(asset) => HttpResponse::Ok()
            .content_type(asset.mime.as_ref())
            .body(asset.contents),
        None => {
            warn!("No frontend bundle embedded; run `trunk build` in frontend/ and rebuild");
            HttpResponse::NotFound().body("Not Found")
        }
    }
}

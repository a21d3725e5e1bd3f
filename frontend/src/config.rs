//! Build-time configuration.
//!
//! The page is shipped as a static bundle, so the purchase endpoint is fixed
//! when the wasm is compiled: `TICKETHUB_API_URL=https://... trunk build`.

const DEFAULT_API_URL: &str = "/api/tickets";

/// Endpoint receiving `POST` purchase requests.
pub const API_URL: &str = match option_env!("TICKETHUB_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

use actix_cors::Cors;
use actix_web::{middleware::DefaultHeaders, HttpResponse, Responder};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";

/// Reflects the caller's Origin on any request that carries one
///
/// Preflight interception is off: OPTIONS always reaches the route's
/// [`preflight`] handler, with or without Access-Control-Request-Method.
pub fn permissive() -> Cors {
    Cors::permissive().disable_preflight()
}

/// Header set stamped on every response the CORS layer left untouched,
/// including errors and requests without an Origin.
pub fn default_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", ALLOW_ORIGIN))
        .add(("Access-Control-Allow-Headers", ALLOW_HEADERS))
        .add(("Access-Control-Allow-Methods", ALLOW_METHODS))
}

/// OPTIONS on a function endpoint: empty body, headers only
pub async fn preflight() -> impl Responder {
    HttpResponse::Ok().finish()
}

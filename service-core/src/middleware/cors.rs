use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Accepts any origin, method and header with credentials allowed.
///
/// Wildcards cannot be combined with credentials, so the request's own
/// origin, method and headers are mirrored back instead. Only suitable for
/// prototype deployments.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

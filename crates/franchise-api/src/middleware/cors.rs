//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use franchise_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// Entries that do not parse as origins, methods or header names are skipped.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    // Origins
    if config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    // Methods
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    // Headers
    if config.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        layer = layer.allow_headers(header_names(&config.allowed_headers));
    }
    layer = layer.expose_headers(header_names(&config.exposed_headers));

    layer.max_age(Duration::from_secs(config.max_age_seconds))
}

fn header_names(names: &[String]) -> Vec<HeaderName> {
    names.iter().filter_map(|h| h.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_names_skip_invalid() {
        let names = header_names(&["Authorization".into(), "bad header".into()]);
        assert_eq!(names, vec![axum::http::header::AUTHORIZATION]);
    }
}

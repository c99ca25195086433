/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod data;
pub mod error;
pub mod public;
pub mod read;
pub mod signature;

pub use error::{ApiError, ApiErrorKind, BeebotteError, Result};
pub use signature::RequestSigner;

pub use client::{BeebotteClient, ClientConfig, Credentials, Endpoints, process_response};

/// Join an endpoint prefix and path segments into a request path.
///
/// Segments must be non-empty and limited to characters that travel
/// unescaped, so the signed path is exactly the path on the wire.
pub(crate) fn resource_path(endpoint: &str, segments: &[&str]) -> Result<String> {
    let mut path = endpoint.trim_end_matches('/').to_string();
    for segment in segments {
        validate_segment(segment)?;
        path.push('/');
        path.push_str(segment);
    }
    Ok(path)
}

fn validate_segment(segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(BeebotteError::InvalidArgument(
            "path segment must not be empty".to_string(),
        ));
    }
    let valid = segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'));
    if !valid || segment == "." || segment == ".." {
        return Err(BeebotteError::InvalidArgument(format!(
            "invalid path segment: {segment:?}"
        )));
    }
    Ok(())
}

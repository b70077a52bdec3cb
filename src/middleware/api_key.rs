//! API key extraction from request headers.
//!
//! Clients authenticate with:
//! ```text
//! Authorization: ApiKey 3f2a...c9
//! ```

use axum::http::{HeaderMap, header::AUTHORIZATION};

/// Why no API key could be read from a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    #[error("no authentication info found")]
    Missing,

    #[error("malformed auth header")]
    Malformed,

    #[error("malformed first part of auth header")]
    MalformedScheme,
}

/// Extract the API key from the `Authorization` header.
///
/// The header must consist of exactly two space-separated parts, the scheme
/// `ApiKey` followed by the key.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let value = headers.get(AUTHORIZATION).ok_or(ApiKeyError::Missing)?;
    let value = value.to_str().map_err(|_| ApiKeyError::Malformed)?;

    if value.is_empty() {
        return Err(ApiKeyError::Missing);
    }

    let mut parts = value.split(' ');
    let (Some(scheme), Some(key), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ApiKeyError::Malformed);
    };

    if scheme != "ApiKey" {
        return Err(ApiKeyError::MalformedScheme);
    }
    if key.is_empty() {
        return Err(ApiKeyError::Malformed);
    }

    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn extracts_key_after_scheme() {
        let key = get_api_key(&headers_with("ApiKey abc123")).unwrap();
        assert_eq!(key, "abc123");
    }

    #[test]
    fn missing_header_is_rejected() {
        assert_eq!(get_api_key(&HeaderMap::new()), Err(ApiKeyError::Missing));
    }

    #[test]
    fn empty_header_counts_as_missing() {
        assert_eq!(get_api_key(&headers_with("")), Err(ApiKeyError::Missing));
    }

    #[test]
    fn bearer_scheme_is_rejected() {
        assert_eq!(
            get_api_key(&headers_with("Bearer abc123")),
            Err(ApiKeyError::MalformedScheme)
        );
    }

    #[test]
    fn key_without_scheme_is_malformed() {
        assert_eq!(
            get_api_key(&headers_with("abc123")),
            Err(ApiKeyError::Malformed)
        );
    }

    #[test]
    fn extra_parts_are_malformed() {
        assert_eq!(
            get_api_key(&headers_with("ApiKey abc 123")),
            Err(ApiKeyError::Malformed)
        );
        assert_eq!(
            get_api_key(&headers_with("ApiKey ")),
            Err(ApiKeyError::Malformed)
        );
    }

    #[test]
    fn non_ascii_header_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xfa\xfb").unwrap(),
        );
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::Malformed));
    }
}

//! Classification of HTTP status errors into user-readable messages.

use reqwest::StatusCode;

/// Status errors mapped to messages a user can act on.
#[derive(Debug)]
pub enum HttpError {
    /// Rate limit exceeded (HTTP 403 with rate limit message or 429)
    RateLimitExceeded(String),
    /// Authentication failed (HTTP 401)
    AuthenticationFailed(String),
    /// Resource not found (HTTP 404)
    NotFound(String),
    /// Forbidden access (HTTP 403 non-rate-limit)
    Forbidden(String),
    /// Other client errors
    ClientError(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::RateLimitExceeded(msg) => {
                write!(
                    f,
                    "Rate limit exceeded: {}. Try again later or set GITHUB_TOKEN environment variable.",
                    msg
                )
            }
            HttpError::AuthenticationFailed(msg) => {
                write!(f, "Authentication failed: {}. Check your GITHUB_TOKEN.", msg)
            }
            HttpError::NotFound(msg) => {
                write!(f, "Not found: {}", msg)
            }
            HttpError::Forbidden(msg) => {
                write!(f, "Access forbidden: {}. You may need authentication.", msg)
            }
            HttpError::ClientError(msg) => {
                write!(f, "Request error: {}", msg)
            }
        }
    }
}

impl std::error::Error for HttpError {}

/// Classifies a status error from `error_for_status()`.
/// Client errors (4xx) become [`HttpError`] variants with user-friendly
/// messages; everything else passes through unchanged.
pub fn check_status(error: reqwest::Error) -> anyhow::Error {
    let Some(status) = error.status() else {
        return anyhow::Error::from(error);
    };

    match status {
        StatusCode::UNAUTHORIZED => anyhow::Error::from(HttpError::AuthenticationFailed(
            "Invalid or missing authentication token".to_string(),
        )),
        StatusCode::FORBIDDEN => {
            let msg = error.to_string();
            if msg.contains("rate limit") || msg.contains("API rate limit") {
                anyhow::Error::from(HttpError::RateLimitExceeded(
                    "GitHub API rate limit exceeded".to_string(),
                ))
            } else {
                anyhow::Error::from(HttpError::Forbidden(
                    "Access to this resource is forbidden".to_string(),
                ))
            }
        }
        StatusCode::TOO_MANY_REQUESTS => anyhow::Error::from(HttpError::RateLimitExceeded(
            "Too many requests".to_string(),
        )),
        StatusCode::NOT_FOUND => anyhow::Error::from(HttpError::NotFound(
            "The requested resource was not found".to_string(),
        )),
        s if s.is_client_error() => anyhow::Error::from(HttpError::ClientError(format!(
            "HTTP {} error",
            s.as_u16()
        ))),
        _ => anyhow::Error::from(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = HttpError::RateLimitExceeded("test".to_string());
        assert!(err.to_string().contains("Rate limit"));
        assert!(err.to_string().contains("GITHUB_TOKEN"));

        let err = HttpError::AuthenticationFailed("test".to_string());
        assert!(err.to_string().contains("Authentication"));

        let err = HttpError::NotFound("test".to_string());
        assert!(err.to_string().contains("Not found"));

        let err = HttpError::Forbidden("test".to_string());
        assert!(err.to_string().contains("forbidden"));

        let err = HttpError::ClientError("HTTP 400".to_string());
        assert!(err.to_string().contains("Request error"));
    }

    async fn status_error(status: usize) -> reqwest::Error {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/")
            .with_status(status)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let response = client.get(server.url()).send().await.unwrap();
        response.error_for_status().unwrap_err()
    }

    #[tokio::test]
    async fn test_check_status_unauthorized() {
        let err = check_status(status_error(401).await);
        assert!(matches!(
            err.downcast_ref::<HttpError>(),
            Some(HttpError::AuthenticationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_check_status_forbidden() {
        let err = check_status(status_error(403).await);
        assert!(matches!(
            err.downcast_ref::<HttpError>(),
            Some(HttpError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn test_check_status_too_many_requests() {
        let err = check_status(status_error(429).await);
        assert!(matches!(
            err.downcast_ref::<HttpError>(),
            Some(HttpError::RateLimitExceeded(_))
        ));
    }

    #[tokio::test]
    async fn test_check_status_not_found() {
        let err = check_status(status_error(404).await);
        assert!(matches!(
            err.downcast_ref::<HttpError>(),
            Some(HttpError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_check_status_other_client_error() {
        let err = check_status(status_error(400).await);
        assert!(matches!(
            err.downcast_ref::<HttpError>(),
            Some(HttpError::ClientError(_))
        ));
    }

    #[tokio::test]
    async fn test_check_status_server_error_passes_through() {
        let err = check_status(status_error(500).await);
        assert!(err.downcast_ref::<HttpError>().is_none());
    }
}

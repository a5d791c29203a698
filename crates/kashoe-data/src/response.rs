//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

/// FastAPI-style error body.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        std::str::from_utf8(&self.body)
            .map(str::to_string)
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Parse the body as `T` if it is one.
    ///
    /// For endpoints whose reply is informational: an empty or differently
    /// shaped body gives `None` instead of an error.
    pub fn json_opt<T: DeserializeOwned>(&self) -> Option<T> {
        if self.body.is_empty() {
            return None;
        }
        match serde_json::from_slice(&self.body) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(status = self.status, error = %e, "Response body not in the expected shape");
                None
            }
        }
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The error message is the backend's `detail` field when there is one,
    /// otherwise the raw body.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }

        let message = match serde_json::from_slice::<ErrorBody>(&self.body) {
            Ok(ErrorBody {
                detail: serde_json::Value::String(detail),
            }) => detail,
            Ok(ErrorBody { detail }) => detail.to_string(),
            Err(_) => self.text().unwrap_or_else(|_| "Unknown error".to_string()),
        };
        Err(FetchError::HttpError {
            status: self.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(201, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(404, b"").is_success());
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        let resp = make_response(200, &[0xff, 0xfe]);
        assert!(matches!(resp.text(), Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_response_json() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Health {
            message: String,
            status: String,
        }

        let resp = make_response(200, br#"{"message": "Kashoe Chess Club API", "status": "active"}"#);
        let health: Health = resp.json().unwrap();
        assert_eq!(health.status, "active");
    }

    #[test]
    fn test_response_json_invalid() {
        let resp = make_response(200, b"<html>proxy error</html>");
        let result: Result<Vec<String>, _> = resp.json();
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_response_json_opt() {
        #[derive(Deserialize, Debug)]
        struct Stored {
            id: String,
        }

        let stored: Option<Stored> = make_response(201, br#"{"id": "o-1"}"#).json_opt();
        assert_eq!(stored.unwrap().id, "o-1");

        let ack: Option<Stored> = make_response(201, br#"{"message": "Order received"}"#).json_opt();
        assert!(ack.is_none());

        let empty: Option<Stored> = make_response(204, b"").json_opt();
        assert!(empty.is_none());
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let headers = HashMap::from([("content-type".to_string(), "application/json".to_string())]);
        let resp = Response::new(200, headers, Vec::new());
        assert_eq!(resp.content_type(), Some("application/json"));
        assert_eq!(resp.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn test_error_for_status_success() {
        assert!(make_response(200, b"[]").error_for_status().is_ok());
    }

    #[test]
    fn test_error_for_status_uses_detail() {
        let resp = make_response(404, br#"{"detail": "Product not found"}"#);
        match resp.error_for_status() {
            Err(FetchError::HttpError { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Product not found");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_error_for_status_validation_detail() {
        let resp = make_response(
            422,
            br#"{"detail": [{"loc": ["body", "customer_email"], "msg": "value is not a valid email address"}]}"#,
        );
        let err = resp.error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert!(err.to_string().contains("customer_email"));
    }

    #[test]
    fn test_error_for_status_plain_body() {
        let err = make_response(502, b"Bad Gateway").error_for_status().unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }
}

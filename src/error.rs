//! Error types for the BART client

use thiserror::Error;

pub type Result<T, E = BartError> = std::result::Result<T, E>;

/// Errors that abort a BART API call.
///
/// An error note embedded in an otherwise successful response is not an
/// error; it is carried on [`Reply::advisory`](crate::Reply::advisory).
#[derive(Debug, Error)]
pub enum BartError {
    /// The endpoint name is not one of `bsa`, `etd`, `route`, `sched`, `stn`
    #[error("endpoint '{name}' does not exist")]
    UnknownEndpoint {
        /// The rejected endpoint name
        name: String,
    },

    /// A caller-supplied parameter failed validation; no request was sent
    #[error("{field} '{value}' not recognized")]
    Validation {
        /// Parameter (or parameter sub-part) that failed
        field: String,
        /// The rejected value, as given
        value: String,
    },

    /// The API answered with a non-success HTTP status
    #[error("API request failed: HTTP {status} for url ({url})\n{body}")]
    Transport {
        /// HTTP status code
        status: u16,
        /// Request URL without the query string
        url: String,
        /// Raw response body
        body: String,
    },

    /// The HTTP layer failed: client setup, connect, timeout or body read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not usable XML or lacked an expected element
    #[error("failed to decode API response: {0}")]
    Decode(String),

    /// Client configuration could not be resolved
    #[error("configuration error: {0}")]
    Config(String),
}

impl BartError {
    pub(crate) fn invalid(field: impl Into<String>, value: impl ToString) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// HTTP status of a [`BartError::Transport`] error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True if the call was rejected before any network I/O.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::UnknownEndpoint { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_field_and_value() {
        let err = BartError::invalid("orig", "xxxx");
        assert_eq!(err.to_string(), "orig 'xxxx' not recognized");
        assert!(err.is_validation());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn transport_carries_status() {
        let err = BartError::Transport {
            status: 404,
            url: "https://api.bart.gov/api/stn.aspx".to_string(),
            body: "Not Found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_validation());
        assert!(err.to_string().contains("HTTP 404"));
        assert!(err.to_string().contains("stn.aspx"));
    }

    #[test]
    fn http_error_wording() {
        let err = reqwest::blocking::Client::new()
            .get("not a url")
            .send()
            .map_err(BartError::from)
            .unwrap_err();
        assert!(err.to_string().starts_with("HTTP request failed: "));
    }

    #[test]
    fn unknown_endpoint_is_raised_before_io() {
        let err = BartError::UnknownEndpoint {
            name: "foo".to_string(),
        };
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "endpoint 'foo' does not exist");
    }
}

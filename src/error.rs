//! Error types for request construction, validation, and extraction.
//!
//! Every failure this crate can produce is a variant of [`Error`], and every
//! variant maps to a machine-readable [`ErrorKind`]. Match on the variant (or
//! on [`Error::kind`]) instead of inspecting error messages.

use http::StatusCode;

/// The main error type for the `send` family of functions.
///
/// # Examples
///
/// ```no_run
/// use sendly::{send_get, Error};
///
/// # async fn example() -> Result<(), Error> {
/// match send_get("https://api.example.com/items", None, None).await {
///     Ok(response) => println!("got {}", response.code),
///     Err(Error::UnexpectedResponseStatusCode { status, status_text }) => {
///         eprintln!("unexpected status {status}: {status_text}");
///     }
///     Err(e) => eprintln!("request failed: {e} (kind {:?})", e.kind()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request input could not be parsed as an absolute URL.
    #[error("invalid request URL '{input}': {source}")]
    InvalidRequestUrl {
        /// The input string that failed to parse.
        input: String,
        /// The underlying parse error.
        source: url::ParseError,
    },

    /// The supplied header pairs could not be normalized into valid headers.
    #[error("invalid request headers: {reason}")]
    InvalidRequestHeaders {
        /// What made the headers invalid (bad name or bad value).
        reason: String,
    },

    /// The request could not be constructed from the supplied options.
    ///
    /// This covers construction-time rejections that are not already tagged
    /// as a URL or header problem.
    #[error("invalid request options: {reason}")]
    InvalidRequestOptions {
        /// The underlying rejection.
        reason: String,
    },

    /// The response's `Content-Type` header is missing or empty.
    #[error("the response's Content-Type header is invalid. Received: '{received}'")]
    InvalidResponseContentType {
        /// The raw value that was received, empty if the header was absent.
        received: String,
    },

    /// The response's `Content-Type` does not contain the request's `Accept`
    /// value.
    #[error(
        "the request's Accept header '{accept}' is different to the Content-Type \
         received in the response '{content_type}'"
    )]
    ContentTypeMismatch {
        /// The `Accept` value the request was sent with.
        accept: String,
        /// The `Content-Type` value the response carried.
        content_type: String,
    },

    /// The response status code is outside the acceptable set.
    #[error("received unexpected response code '{status}': {status_text}")]
    UnexpectedResponseStatusCode {
        /// The status code that was received.
        status: StatusCode,
        /// The reason phrase for the status code.
        status_text: String,
    },

    /// An unrecognized response data type tag was supplied.
    #[error("the provided response data type '{value}' is invalid")]
    InvalidResponseDataType {
        /// The tag that failed to parse.
        value: String,
    },

    /// A transport-level failure: connection errors, TLS problems, or a body
    /// that could not be read or decoded in the requested shape.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Machine-readable discriminant for [`Error`].
///
/// Useful when the error needs to cross a serialization or logging boundary
/// where matching on the full variant is impractical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidRequestUrl,
    InvalidRequestHeaders,
    InvalidRequestOptions,
    InvalidResponseContentType,
    ContentTypeMismatch,
    UnexpectedResponseStatusCode,
    InvalidResponseDataType,
    Transport,
}

impl Error {
    /// Returns the machine-readable kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sendly::{Error, ErrorKind};
    ///
    /// let err = Error::InvalidResponseDataType { value: "nonsense".to_string() };
    /// assert_eq!(err.kind(), ErrorKind::InvalidResponseDataType);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidRequestUrl { .. } => ErrorKind::InvalidRequestUrl,
            Error::InvalidRequestHeaders { .. } => ErrorKind::InvalidRequestHeaders,
            Error::InvalidRequestOptions { .. } => ErrorKind::InvalidRequestOptions,
            Error::InvalidResponseContentType { .. } => ErrorKind::InvalidResponseContentType,
            Error::ContentTypeMismatch { .. } => ErrorKind::ContentTypeMismatch,
            Error::UnexpectedResponseStatusCode { .. } => {
                ErrorKind::UnexpectedResponseStatusCode
            }
            Error::InvalidResponseDataType { .. } => ErrorKind::InvalidResponseDataType,
            Error::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Returns the HTTP status code if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::UnexpectedResponseStatusCode { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_every_variant() {
        let err = Error::InvalidRequestUrl {
            input: "someInvalidURL".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidRequestUrl);

        let err = Error::InvalidRequestHeaders {
            reason: "invalid header name".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidRequestHeaders);

        let err = Error::UnexpectedResponseStatusCode {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::UnexpectedResponseStatusCode);
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));

        let err = Error::ContentTypeMismatch {
            accept: "application/json".to_string(),
            content_type: "text/html".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::ContentTypeMismatch);
        assert_eq!(err.status(), None);
    }
}

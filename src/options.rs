//! Per-call options: response shape selection and status-code acceptance.

use std::str::FromStr;

use crate::{Error, RequestOptions};

/// The shape the response body is materialized into.
///
/// Parse from a string with [`FromStr`] when the tag comes from
/// configuration; an unrecognized tag fails with
/// [`Error::InvalidResponseDataType`] before any body I/O happens.
///
/// # Examples
///
/// ```
/// use sendly::ResponseDataType;
///
/// assert_eq!("json".parse::<ResponseDataType>().unwrap(), ResponseDataType::Json);
/// assert!("nonsense".parse::<ResponseDataType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseDataType {
    /// The whole body as raw bytes.
    Bytes,
    /// The body bytes together with the response's content type.
    Blob,
    /// The body parsed as `application/x-www-form-urlencoded` pairs.
    FormData,
    /// The body parsed as JSON.
    #[default]
    Json,
    /// The body as text.
    Text,
}

impl FromStr for ResponseDataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bytes" => Ok(ResponseDataType::Bytes),
            "blob" => Ok(ResponseDataType::Blob),
            "form-data" => Ok(ResponseDataType::FormData),
            "json" => Ok(ResponseDataType::Json),
            "text" => Ok(ResponseDataType::Text),
            other => Err(Error::InvalidResponseDataType {
                value: other.to_string(),
            }),
        }
    }
}

/// An inclusive status-code range. The default accepts `200..=299`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCodeRange {
    /// Lowest acceptable status code.
    pub min: u16,
    /// Highest acceptable status code.
    pub max: u16,
}

impl StatusCodeRange {
    /// Returns `true` if `code` falls inside the range.
    pub fn contains(&self, code: u16) -> bool {
        code >= self.min && code <= self.max
    }
}

impl Default for StatusCodeRange {
    fn default() -> Self {
        Self { min: 200, max: 299 }
    }
}

/// Options for a single `send` call.
///
/// Merge overrides over the defaults with struct update syntax:
///
/// ```
/// use sendly::{Options, ResponseDataType};
///
/// let options = Options {
///     response_data_type: ResponseDataType::Text,
///     ..Default::default()
/// };
/// assert!(options.acceptable_status_codes.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Overrides for the request itself (method, headers, body).
    pub request: RequestOptions,
    /// The shape the response body is materialized into. Defaults to JSON.
    pub response_data_type: ResponseDataType,
    /// Explicit status-code allow-list. When non-empty, the range is
    /// ignored entirely.
    pub acceptable_status_codes: Option<Vec<u16>>,
    /// Acceptable status-code range, used when no allow-list is given.
    pub acceptable_status_range: StatusCodeRange,
    /// Skips status-code validation altogether when `true`.
    pub skip_status_code_validation: bool,
}

//! Response validation: status-code acceptability and content-type agreement.
//!
//! The status check runs first; the first failing check wins.

use http::{header::CONTENT_TYPE, HeaderMap, StatusCode};

use crate::{Error, Options, Result};

/// Checks the status code against the allow-list or, absent one, the range.
///
/// A non-empty allow-list makes the range entirely irrelevant.
fn validate_status_code(status: StatusCode, options: &Options) -> Result<()> {
    if options.skip_status_code_validation {
        return Ok(());
    }
    let acceptable = match &options.acceptable_status_codes {
        Some(codes) if !codes.is_empty() => codes.contains(&status.as_u16()),
        _ => options.acceptable_status_range.contains(status.as_u16()),
    };
    if acceptable {
        Ok(())
    } else {
        Err(Error::UnexpectedResponseStatusCode {
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }
}

/// Ensures the response's `Content-Type` agrees with the request's `Accept`.
fn validate_content_type(accept: &str, headers: &HeaderMap) -> Result<()> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if content_type.is_empty() {
        return Err(Error::InvalidResponseContentType {
            received: content_type.to_string(),
        });
    }
    // Substring containment, so parameter suffixes like `; charset=utf-8`
    // keep matching.
    if !content_type.contains(accept) {
        return Err(Error::ContentTypeMismatch {
            accept: accept.to_string(),
            content_type: content_type.to_string(),
        });
    }
    Ok(())
}

/// Validates a response against the effective options.
pub(crate) fn validate_response(
    accept: &str,
    status: StatusCode,
    headers: &HeaderMap,
    options: &Options,
) -> Result<()> {
    validate_status_code(status, options)?;
    validate_content_type(accept, headers)
}

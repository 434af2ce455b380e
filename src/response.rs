//! Response envelope and body extraction.
//!
//! Every successful call produces one [`Response`]: the status line, the
//! response headers, and the body materialized into the shape selected by
//! [`ResponseDataType`](crate::ResponseDataType).

use bytes::Bytes;
use http::{header::CONTENT_TYPE, HeaderMap, StatusCode};

use crate::{ResponseDataType, Result};

/// Binary body bytes together with the content type the response declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    /// The response's `Content-Type` value, if it carried one.
    pub content_type: Option<String>,
    /// The body bytes.
    pub bytes: Bytes,
}

/// A response body materialized in one of the supported shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    /// The whole body as raw bytes.
    Bytes(Bytes),
    /// The body bytes plus the declared content type.
    Blob(Blob),
    /// The body parsed as `application/x-www-form-urlencoded` pairs.
    FormData(Vec<(String, String)>),
    /// The body parsed as JSON.
    Json(serde_json::Value),
    /// The body as text.
    Text(String),
}

impl ResponseData {
    /// Returns the parsed JSON value, if the body was materialized as JSON.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ResponseData::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the body text, if the body was materialized as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseData::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the raw bytes, if the body was materialized as bytes.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            ResponseData::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns the blob, if the body was materialized as a blob.
    pub fn as_blob(&self) -> Option<&Blob> {
        match self {
            ResponseData::Blob(blob) => Some(blob),
            _ => None,
        }
    }

    /// Returns the form pairs, if the body was materialized as form data.
    pub fn as_form_data(&self) -> Option<&[(String, String)]> {
        match self {
            ResponseData::FormData(pairs) => Some(pairs),
            _ => None,
        }
    }
}

/// The envelope returned by every successful call.
///
/// # Examples
///
/// ```no_run
/// use sendly::send_get;
///
/// # async fn example() -> Result<(), sendly::Error> {
/// let response = send_get("https://httpbin.org/get", None, None).await?;
/// println!("{} {}", response.code, response.status_text);
/// println!("content type: {:?}", response.header("content-type"));
/// println!("data: {:?}", response.data.as_json());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub code: StatusCode,
    /// The canonical reason phrase for the status code.
    pub status_text: String,
    /// The response headers.
    pub headers: HeaderMap,
    /// The materialized body.
    pub data: ResponseData,
}

impl Response {
    /// Returns a response header value by name. Lookup is case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

/// Materializes the response body in the requested shape.
///
/// The body stream is consumed at most once; transport and decoding
/// failures surface as [`Error::Transport`](crate::Error::Transport).
pub(crate) async fn extract_response_data(
    res: reqwest::Response,
    dtype: ResponseDataType,
) -> Result<ResponseData> {
    match dtype {
        ResponseDataType::Bytes => Ok(ResponseData::Bytes(res.bytes().await?)),
        ResponseDataType::Blob => {
            let content_type = res
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            Ok(ResponseData::Blob(Blob {
                content_type,
                bytes: res.bytes().await?,
            }))
        }
        ResponseDataType::FormData => {
            let text = res.text().await?;
            let pairs = url::form_urlencoded::parse(text.as_bytes())
                .into_owned()
                .collect();
            Ok(ResponseData::FormData(pairs))
        }
        ResponseDataType::Json => Ok(ResponseData::Json(res.json().await?)),
        ResponseDataType::Text => Ok(ResponseData::Text(res.text().await?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_with(content_type: Option<&str>, body: &str) -> reqwest::Response {
        let mut builder = http::Response::builder().status(200);
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        reqwest::Response::from(builder.body(body.to_string()).unwrap())
    }

    #[tokio::test]
    async fn extracts_json() {
        let res = response_with(Some("application/json"), r#"{"success":true}"#);
        let data = extract_response_data(res, ResponseDataType::Json)
            .await
            .unwrap();
        assert_eq!(data.as_json(), Some(&json!({ "success": true })));
    }

    #[tokio::test]
    async fn extracts_text() {
        let res = response_with(Some("text/plain"), "hello");
        let data = extract_response_data(res, ResponseDataType::Text)
            .await
            .unwrap();
        assert_eq!(data.as_text(), Some("hello"));
    }

    #[tokio::test]
    async fn extracts_bytes() {
        let res = response_with(None, "raw");
        let data = extract_response_data(res, ResponseDataType::Bytes)
            .await
            .unwrap();
        assert_eq!(data.as_bytes().unwrap().as_ref(), b"raw");
    }

    #[tokio::test]
    async fn a_blob_carries_the_declared_content_type() {
        let res = response_with(Some("application/octet-stream"), "raw");
        let data = extract_response_data(res, ResponseDataType::Blob)
            .await
            .unwrap();
        let blob = data.as_blob().unwrap();
        assert_eq!(blob.content_type.as_deref(), Some("application/octet-stream"));
        assert_eq!(blob.bytes.as_ref(), b"raw");
    }

    #[tokio::test]
    async fn extracts_form_pairs() {
        let res = response_with(
            Some("application/x-www-form-urlencoded"),
            "foo=hey&bar=123",
        );
        let data = extract_response_data(res, ResponseDataType::FormData)
            .await
            .unwrap();
        assert_eq!(
            data.as_form_data().unwrap(),
            &[
                ("foo".to_string(), "hey".to_string()),
                ("bar".to_string(), "123".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn invalid_json_surfaces_as_a_transport_error() {
        let res = response_with(Some("application/json"), "not json");
        let err = extract_response_data(res, ResponseDataType::Json)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Transport);
    }
}

//! Request construction: URL resolution, header normalization, body assembly.
//!
//! [`build_request`] turns a [`RequestInput`] plus [`RequestOptions`] into a
//! fully-populated `reqwest::Request`. Construction is where the crate's
//! request invariants are enforced: every built request carries an `Accept`
//! header, non-GET requests also carry a `Content-Type` header, and GET
//! requests never carry a body.

use bytes::Bytes;
use http::{
    header::{ACCEPT, CONTENT_TYPE},
    HeaderMap, HeaderName, HeaderValue, Method,
};
use serde::Serialize;
use url::Url;

use crate::{Error, Result};

/// The target of a request: an absolute URL string or a pre-parsed [`Url`].
///
/// The `send` family of functions accepts `impl Into<RequestInput>`, so both
/// forms can be passed directly:
///
/// ```
/// use sendly::RequestInput;
/// use url::Url;
///
/// let from_str: RequestInput = "https://api.example.com/items".into();
/// let from_url: RequestInput = Url::parse("https://api.example.com/items").unwrap().into();
/// ```
#[derive(Debug, Clone)]
pub enum RequestInput {
    /// A URL that has already been parsed; used as-is.
    Url(Url),
    /// A URL string, parsed strictly when the request is built.
    Text(String),
}

impl RequestInput {
    /// Resolves the input into a parsed URL.
    pub(crate) fn into_url(self) -> Result<Url> {
        match self {
            RequestInput::Url(url) => Ok(url),
            RequestInput::Text(input) => {
                Url::parse(&input).map_err(|source| Error::InvalidRequestUrl { input, source })
            }
        }
    }
}

impl From<Url> for RequestInput {
    fn from(url: Url) -> Self {
        RequestInput::Url(url)
    }
}

impl From<&str> for RequestInput {
    fn from(input: &str) -> Self {
        RequestInput::Text(input.to_string())
    }
}

impl From<String> for RequestInput {
    fn from(input: String) -> Self {
        RequestInput::Text(input)
    }
}

/// Headers for a single request.
///
/// A pre-validated [`HeaderMap`] is taken as-is. Raw string pairs are
/// normalized when the request is built, and fail with
/// [`Error::InvalidRequestHeaders`] if a name or value is not a legal HTTP
/// header. Lookups against the resulting map are case-insensitive.
#[derive(Debug, Clone)]
pub enum RequestHeaders {
    /// A ready header map, used without further validation.
    Map(HeaderMap),
    /// Raw name/value pairs, normalized at build time.
    Pairs(Vec<(String, String)>),
}

impl RequestHeaders {
    pub(crate) fn into_header_map(self) -> Result<HeaderMap> {
        match self {
            RequestHeaders::Map(map) => Ok(map),
            RequestHeaders::Pairs(pairs) => {
                let mut map = HeaderMap::with_capacity(pairs.len());
                for (name, value) in pairs {
                    let name = HeaderName::try_from(name.as_str()).map_err(|e| {
                        Error::InvalidRequestHeaders {
                            reason: format!("invalid header name '{name}': {e}"),
                        }
                    })?;
                    let value = HeaderValue::try_from(value.as_str()).map_err(|e| {
                        Error::InvalidRequestHeaders {
                            reason: format!("invalid value for header '{name}': {e}"),
                        }
                    })?;
                    map.append(name, value);
                }
                Ok(map)
            }
        }
    }
}

impl From<HeaderMap> for RequestHeaders {
    fn from(map: HeaderMap) -> Self {
        RequestHeaders::Map(map)
    }
}

impl From<Vec<(String, String)>> for RequestHeaders {
    fn from(pairs: Vec<(String, String)>) -> Self {
        RequestHeaders::Pairs(pairs)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RequestHeaders {
    fn from(pairs: [(&str, &str); N]) -> Self {
        RequestHeaders::Pairs(
            pairs
                .into_iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// The body of a single request.
///
/// Structured values are serialized to JSON text at build time; text and raw
/// bytes pass through unchanged.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// A structured value, serialized to JSON text when the request is built.
    Json(serde_json::Value),
    /// Text, passed through unchanged.
    Text(String),
    /// Raw bytes, passed through unchanged.
    Bytes(Bytes),
}

impl RequestBody {
    /// Builds a structured JSON body from any serializable value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sendly::RequestBody;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct NewItem { name: String }
    ///
    /// let body = RequestBody::json(&NewItem { name: "widget".to_string() }).unwrap();
    /// assert!(matches!(body, RequestBody::Json(_)));
    /// ```
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|e| Error::InvalidRequestOptions {
            reason: format!("failed to serialize request body: {e}"),
        })?;
        Ok(RequestBody::Json(value))
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        RequestBody::Json(value)
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::Text(text.to_string())
    }
}

impl From<Bytes> for RequestBody {
    fn from(bytes: Bytes) -> Self {
        RequestBody::Bytes(bytes)
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        RequestBody::Bytes(Bytes::from(bytes))
    }
}

/// Per-request overrides applied when building a request.
///
/// The default is a GET request with no extra headers and no body.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// The HTTP method. Custom methods can be produced with
    /// [`Method::from_bytes`].
    pub method: Method,
    /// Extra headers for this request. `Accept` and (for non-GET)
    /// `Content-Type` are defaulted to `application/json` unless present.
    pub headers: Option<RequestHeaders>,
    /// The request body. Dropped silently for GET requests.
    pub body: Option<RequestBody>,
}

/// Normalizes the caller headers and applies the defaulting policy.
fn build_headers(headers: Option<RequestHeaders>, method: &Method) -> Result<HeaderMap> {
    let mut headers = match headers {
        Some(headers) => headers.into_header_map()?,
        None => HeaderMap::new(),
    };
    if !headers.contains_key(ACCEPT) {
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    }
    if *method != Method::GET && !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    Ok(headers)
}

/// Builds a `reqwest::Request` from the given input and options.
///
/// URL and header failures keep their own tags; any other construction-time
/// rejection surfaces as [`Error::InvalidRequestOptions`].
pub(crate) fn build_request(
    client: &reqwest::Client,
    input: RequestInput,
    options: RequestOptions,
) -> Result<reqwest::Request> {
    let url = input.into_url()?;
    let headers = build_headers(options.headers, &options.method)?;

    let mut builder = client.request(options.method.clone(), url).headers(headers);

    // GET requests never carry a body, even when one was supplied.
    if options.method != Method::GET {
        if let Some(body) = options.body {
            builder = match body {
                RequestBody::Json(value) => {
                    let text =
                        serde_json::to_string(&value).map_err(|e| Error::InvalidRequestOptions {
                            reason: format!("failed to serialize request body: {e}"),
                        })?;
                    builder.body(text)
                }
                RequestBody::Text(text) => builder.body(text),
                RequestBody::Bytes(bytes) => builder.body(bytes),
            };
        }
    }

    builder.build().map_err(|e| Error::InvalidRequestOptions {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use serde_json::json;

    fn client() -> reqwest::Client {
        reqwest::Client::new()
    }

    #[test]
    fn builds_a_default_get_request() {
        let req = build_request(
            &client(),
            "https://www.mozilla.org/favicon.ico".into(),
            RequestOptions::default(),
        )
        .unwrap();

        assert_eq!(req.url().as_str(), "https://www.mozilla.org/favicon.ico");
        assert_eq!(req.method(), Method::GET);
        assert_eq!(req.headers().get(ACCEPT).unwrap(), "application/json");
        assert!(req.headers().get(CONTENT_TYPE).is_none());
        assert!(req.body().is_none());
    }

    #[test]
    fn accepts_a_parsed_url_as_is() {
        let url = Url::parse("https://www.mozilla.org/favicon.ico").unwrap();
        let req = build_request(&client(), url.into(), RequestOptions::default()).unwrap();
        assert_eq!(req.url().as_str(), "https://www.mozilla.org/favicon.ico");
    }

    #[test]
    fn defaults_content_type_for_non_get_requests() {
        let req = build_request(
            &client(),
            "https://api.example.com/items".into(),
            RequestOptions {
                method: Method::POST,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(req.headers().get(ACCEPT).unwrap(), "application/json");
        assert_eq!(req.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn keeps_caller_headers_and_defaults_the_missing_ones() {
        let req = build_request(
            &client(),
            "https://api.example.com/items".into(),
            RequestOptions {
                method: Method::POST,
                headers: Some([("Authorization", "bearer 123456")].into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(req.headers().get("authorization").unwrap(), "bearer 123456");
        assert_eq!(req.headers().get(ACCEPT).unwrap(), "application/json");
        assert_eq!(req.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn header_defaulting_is_case_insensitive() {
        let req = build_request(
            &client(),
            "https://api.example.com/items".into(),
            RequestOptions {
                method: Method::POST,
                headers: Some([("accept", "text/html"), ("content-type", "text/html")].into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(req.headers().get(ACCEPT).unwrap(), "text/html");
        assert_eq!(req.headers().get(CONTENT_TYPE).unwrap(), "text/html");
    }

    #[test]
    fn serializes_a_structured_body_to_json_text() {
        let data = json!({ "hello": "World!", "foo": 123, "baz": false });
        let req = build_request(
            &client(),
            "https://api.example.com/items".into(),
            RequestOptions {
                method: Method::POST,
                body: Some(data.clone().into()),
                ..Default::default()
            },
        )
        .unwrap();

        let bytes = req.body().unwrap().as_bytes().unwrap();
        let round_tripped: serde_json::Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(round_tripped, data);
    }

    #[test]
    fn passes_text_bodies_through_unchanged() {
        let req = build_request(
            &client(),
            "https://api.example.com/items".into(),
            RequestOptions {
                method: Method::PUT,
                body: Some("plain payload".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(req.body().unwrap().as_bytes().unwrap(), b"plain payload");
    }

    #[test]
    fn a_get_request_never_carries_a_body() {
        let req = build_request(
            &client(),
            "https://api.example.com/items".into(),
            RequestOptions {
                method: Method::GET,
                body: Some(json!({ "hello": "World!" }).into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert!(req.body().is_none());
    }

    #[test]
    fn rejects_an_unparseable_url() {
        let err = build_request(&client(), "someInvalidURL".into(), RequestOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequestUrl);
    }

    #[test]
    fn rejects_headers_that_cannot_be_normalized() {
        let err = build_request(
            &client(),
            "https://www.mozilla.org".into(),
            RequestOptions {
                headers: Some([("Content Type", "application/json")].into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequestHeaders);
    }
}

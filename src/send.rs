//! The `send` family: build the request, execute it, validate the response,
//! extract the body.
//!
//! Each call is an independent unit of work. The only state shared between
//! calls is the lazily-initialized transport client, whose connection pool
//! belongs to reqwest.

use std::sync::OnceLock;

use http::{header::ACCEPT, Method};
use tokio::time::sleep;

use crate::{
    request::build_request, response::extract_response_data, validate::validate_response, Options,
    RequestInput, Response, Result, RetryPolicy,
};

/// The shared transport client.
fn transport() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// A single build-execute-validate-extract pass.
async fn dispatch(input: RequestInput, options: Options) -> Result<Response> {
    let client = transport();
    let req = build_request(client, input, options.request.clone())?;

    // Requests built here always carry an Accept header.
    let accept = req
        .headers()
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let requested_url = req.url().clone();

    tracing::debug!(method = %req.method(), url = %requested_url, "dispatching request");
    let res = client.execute(req).await?;

    validate_response(&accept, res.status(), res.headers(), &options)?;

    if res.url() != &requested_url {
        tracing::warn!(
            requested = %requested_url,
            finalized = %res.url(),
            "the request was redirected; update the target to avoid future redirections"
        );
    }

    let code = res.status();
    let status_text = code.canonical_reason().unwrap_or_default().to_string();
    let headers = res.headers().clone();
    let data = extract_response_data(res, options.response_data_type).await?;

    Ok(Response {
        code,
        status_text,
        headers,
        data,
    })
}

/// Forces the method on the options and dispatches.
async fn send_with_method(
    method: Method,
    input: RequestInput,
    options: Option<Options>,
) -> Result<Response> {
    let mut options = options.unwrap_or_default();
    options.request.method = method;
    dispatch(input, options).await
}

/// Builds and sends an HTTP request from the given input and options.
///
/// The method comes from `options.request.method` (GET by default).
///
/// # Examples
///
/// ```no_run
/// use sendly::{send, Options};
///
/// # async fn example() -> Result<(), sendly::Error> {
/// let response = send("https://httpbin.org/get", None).await?;
/// assert_eq!(response.code, 200);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`InvalidRequestUrl`](crate::ErrorKind::InvalidRequestUrl) if the input cannot be parsed
/// - [`InvalidRequestHeaders`](crate::ErrorKind::InvalidRequestHeaders) if header pairs cannot be normalized
/// - [`InvalidRequestOptions`](crate::ErrorKind::InvalidRequestOptions) if the request cannot be constructed
/// - [`UnexpectedResponseStatusCode`](crate::ErrorKind::UnexpectedResponseStatusCode) if the status falls outside the acceptable set
/// - [`InvalidResponseContentType`](crate::ErrorKind::InvalidResponseContentType) if the response carries no usable `Content-Type`
/// - [`ContentTypeMismatch`](crate::ErrorKind::ContentTypeMismatch) if the `Content-Type` does not contain the `Accept` value
/// - [`Transport`](crate::ErrorKind::Transport) on network or body-decoding failures
pub async fn send(input: impl Into<RequestInput>, options: Option<Options>) -> Result<Response> {
    dispatch(input.into(), options.unwrap_or_default()).await
}

/// Builds and sends a GET request, retrying failed attempts per `retry`.
///
/// Every attempt is a full pass: a fresh request is built and dispatched.
/// Attempts are separated by the policy's fixed delay, which suspends only
/// this task. Once attempts are exhausted the original error is returned
/// unchanged.
///
/// # Examples
///
/// ```no_run
/// use sendly::{send_get, RetryPolicy};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), sendly::Error> {
/// let retry = RetryPolicy::with_delay(3, Duration::from_secs(10));
/// let response = send_get("https://httpbin.org/get", None, Some(retry)).await?;
/// println!("{:?}", response.data.as_json());
/// # Ok(())
/// # }
/// ```
pub async fn send_get(
    input: impl Into<RequestInput>,
    options: Option<Options>,
    retry: Option<RetryPolicy>,
) -> Result<Response> {
    let input = input.into();
    let mut options = options.unwrap_or_default();
    options.request.method = Method::GET;
    let retry = retry.unwrap_or_default();

    let mut remaining = retry.attempts;
    loop {
        match dispatch(input.clone(), options.clone()).await {
            Ok(response) => return Ok(response),
            Err(e) if remaining > 0 => {
                tracing::warn!(
                    error = %e,
                    remaining,
                    delay_ms = retry.delay.as_millis() as u64,
                    "GET request failed; retrying after delay"
                );
                remaining -= 1;
                sleep(retry.delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Builds and sends a POST request.
pub async fn send_post(
    input: impl Into<RequestInput>,
    options: Option<Options>,
) -> Result<Response> {
    send_with_method(Method::POST, input.into(), options).await
}

/// Builds and sends a PUT request.
pub async fn send_put(
    input: impl Into<RequestInput>,
    options: Option<Options>,
) -> Result<Response> {
    send_with_method(Method::PUT, input.into(), options).await
}

/// Builds and sends a PATCH request.
pub async fn send_patch(
    input: impl Into<RequestInput>,
    options: Option<Options>,
) -> Result<Response> {
    send_with_method(Method::PATCH, input.into(), options).await
}

/// Builds and sends a DELETE request.
pub async fn send_delete(
    input: impl Into<RequestInput>,
    options: Option<Options>,
) -> Result<Response> {
    send_with_method(Method::DELETE, input.into(), options).await
}

//! # Sendly - validated one-shot HTTP requests
//!
//! Sendly is a thin convenience layer over `reqwest` for GET-heavy API
//! consumption. It normalizes request construction (URL parsing, header
//! defaulting, JSON body serialization), validates every response (status
//! code acceptability plus Accept/Content-Type agreement), materializes the
//! body into the shape you ask for, and retries GET requests with a fixed
//! delay when asked to.
//!
//! There is no client object to configure: the public surface is a set of
//! free async functions, and each call is independent. The underlying
//! connection pool is reqwest's.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sendly::{send_get, send_post, Options, RequestBody, RequestOptions, RetryPolicy};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendly::Error> {
//!     // A GET with two extra attempts, 5 seconds apart.
//!     let retry = RetryPolicy::with_delay(2, Duration::from_secs(5));
//!     let response = send_get("https://httpbin.org/get", None, Some(retry)).await?;
//!     println!("{} {}", response.code, response.status_text);
//!     println!("{:?}", response.data.as_json());
//!
//!     // A POST with a structured body, serialized to JSON for you.
//!     let options = Options {
//!         request: RequestOptions {
//!             body: Some(RequestBody::json(&serde_json::json!({ "name": "widget" }))?),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     };
//!     let created = send_post("https://httpbin.org/post", Some(options)).await?;
//!     println!("{}", created.code);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Validation
//!
//! Responses are validated before the body is touched. The status code must
//! be a member of the explicit allow-list when one is given, or fall inside
//! the acceptable range (`200..=299` by default) otherwise; the check can be
//! skipped outright with `skip_status_code_validation`. The response's
//! `Content-Type` must contain the request's `Accept` value — a substring
//! match, so `application/json; charset=utf-8` satisfies an
//! `application/json` Accept.
//!
//! ## Errors
//!
//! Every failure is a variant of [`Error`] with a machine-readable
//! [`ErrorKind`]; match on those rather than on messages. Errors bubble to
//! the caller untouched — the GET retry loop is the only recovery, and it
//! re-surfaces the original error once attempts are exhausted.
//!
//! ## Cancellation and timeouts
//!
//! Dropping the returned future aborts the in-flight exchange or retry
//! delay. This crate does not impose timeouts; wrap calls in
//! `tokio::time::timeout` where one is needed.

mod error;
mod options;
mod request;
mod response;
mod retry;
mod send;
mod validate;

pub use error::{Error, ErrorKind, Result};
pub use options::{Options, ResponseDataType, StatusCodeRange};
pub use request::{RequestBody, RequestHeaders, RequestInput, RequestOptions};
pub use response::{Blob, Response, ResponseData};
pub use retry::RetryPolicy;
pub use send::{send, send_delete, send_get, send_patch, send_post, send_put};

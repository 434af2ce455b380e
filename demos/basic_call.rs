//! Basic example demonstrating simple GET and POST requests.
//!
//! This example shows how to:
//! - Send a GET request and read the JSON envelope
//! - Send a POST request with a structured body
//! - Access response metadata
//!
//! Run with: `cargo run --example basic_call`

use sendly::{send_get, send_post, Error, Options, RequestBody, RequestOptions};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("sendly=debug,basic_call=info")
        .init();

    println!("=== GET Request Example ===");
    let response = send_get("https://httpbin.org/get?foo=hey&bar=123", None, None).await?;
    println!("Status: {} {}", response.code, response.status_text);
    println!("Content-Type: {:?}", response.header("content-type"));
    println!("Data: {:#?}", response.data.as_json());
    println!();

    println!("=== POST Request Example ===");
    let options = Options {
        request: RequestOptions {
            body: Some(RequestBody::json(&json!({
                "someKey": "Hello",
                "someNumber": 123456,
            }))?),
            ..Default::default()
        },
        ..Default::default()
    };
    let response = send_post("https://httpbin.org/post", Some(options)).await?;
    println!("Status: {}", response.code);
    println!("Echoed: {:#?}", response.data.as_json());

    Ok(())
}

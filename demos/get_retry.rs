//! Example demonstrating GET retry against an unreliable endpoint.
//!
//! httpbin's /status/500,200 endpoint answers 500 or 200 at random, so a
//! few attempts are usually enough to see the retry loop recover.
//!
//! Run with: `cargo run --example get_retry`

use sendly::{send_get, Error, Options, RequestOptions, ResponseDataType, RetryPolicy};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("sendly=debug,get_retry=info")
        .init();

    // Up to four extra attempts, two seconds apart.
    let retry = RetryPolicy::with_delay(4, Duration::from_secs(2));

    // The endpoint answers with an empty text/html body, not JSON.
    let options = Options {
        request: RequestOptions {
            headers: Some([("Accept", "text/html")].into()),
            ..Default::default()
        },
        response_data_type: ResponseDataType::Text,
        ..Default::default()
    };

    match send_get(
        "https://httpbin.org/status/500,200",
        Some(options),
        Some(retry),
    )
    .await
    {
        Ok(response) => println!("recovered: {} {}", response.code, response.status_text),
        Err(e) => println!("still failing after all attempts: {e} (kind {:?})", e.kind()),
    }

    Ok(())
}

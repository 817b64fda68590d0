use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::catalog::CatalogError;

const MAX_RETRIES: u32 = 3;
const BAD_GATEWAY_DELAY: Duration = Duration::from_secs(2);
const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Sends the request and decodes a JSON body.
///
/// `502 Bad Gateway` is retried up to [`MAX_RETRIES`] times. `429 Too Many
/// Requests` is retried after the advertised `Retry-After` delay as long as that
/// delay is sane. Any other non-2xx status becomes [`CatalogError::Status`].
pub async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, CatalogError> {
    let mut attempt = 0;

    loop {
        let Some(current) = request.try_clone() else {
            let response = request.send().await?.error_for_status()?;
            return Ok(response.json::<T>().await?);
        };

        let response = current.send().await?;
        let status = response.status();

        if attempt < MAX_RETRIES {
            if status == StatusCode::BAD_GATEWAY {
                attempt += 1;
                sleep(BAD_GATEWAY_DELAY).await;
                continue; // retry
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.trim().parse::<u64>().ok());

                if let Some(secs) = retry_after.filter(|s| *s <= MAX_RETRY_AFTER_SECS) {
                    attempt += 1;
                    sleep(Duration::from_secs(secs)).await;
                    continue; // retry
                }
            }
        }

        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        return Ok(response.json::<T>().await?);
    }
}

//! Backend liveness probing.

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use super::ApiClient;

/// Retry delays after the immediate first probe.
const RETRY_DELAYS: [Duration; 2] = [Duration::from_secs(2), Duration::from_secs(3)];

/// Probe `/health` until the backend responds.
///
/// Tries immediately, then twice more after 2 s and 3 s. Returns whether
/// the backend came online within the schedule.
pub async fn wait_until_online(client: &ApiClient) -> bool {
    if probe(client).await {
        return true;
    }
    for delay in RETRY_DELAYS {
        sleep(delay).await;
        if probe(client).await {
            return true;
        }
    }
    false
}

async fn probe(client: &ApiClient) -> bool {
    match client.health().await {
        Ok(health) => {
            debug!(status = %health.status, version = %health.version, "health probe ok");
            true
        }
        Err(e) => {
            debug!("health probe failed: {}", e.user_message());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_the_schedule() {
        // Nothing listens on the discard port; every probe is refused
        // immediately and the paused clock skips the backoff sleeps.
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        assert!(!wait_until_online(&client).await);
    }
}

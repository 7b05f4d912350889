// src/http.rs
// Shared HTTP client for all network operations

use std::time::Duration;

/// Idle connection lifetime in the pool
pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Create the shared HTTP client.
///
/// Created once at startup and handed to the LLM client. No request timeout
/// is set: a consultation waits as long as reqwest's default allows.
pub fn create_shared_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_idle_timeout(POOL_IDLE_TIMEOUT)
        .pool_max_idle_per_host(10)
        .user_agent(concat!("consult/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_shared_client() {
        let client = create_shared_client();
        drop(client);
    }
}

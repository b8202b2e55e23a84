use std::time::Duration;

use reqwest::Client;

const APP_USER_AGENT: &str = "modup/0.1.0";

/// Per-request cap so a stalled catalog or mirror cannot hang a run forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(APP_USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

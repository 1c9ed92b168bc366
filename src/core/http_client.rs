use std::time::Duration;

use reqwest::Client;

pub fn build_http_client(disable_proxy: bool, timeout_secs: u64) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent("task-api-server/0.1")
        .timeout(Duration::from_secs(timeout_secs));

    if disable_proxy {
        builder = builder.no_proxy();
    }

    builder.build()
}

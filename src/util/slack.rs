use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::model::global_error::NotifierError;
use crate::model::message::SlackPayload;

#[derive(Debug, Clone)]
pub struct SlackResponse {
    pub status: StatusCode,
    pub body: String,
}

pub fn build_client(timeout: Duration) -> Result<Client, NotifierError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Posts the payload once. Any status code is returned as a response; only
/// transport failures become `NotifierError::Delivery`.
#[instrument(skip_all)]
pub async fn post_payload(
    client: &Client,
    webhook_url: &str,
    payload: &SlackPayload,
) -> Result<SlackResponse, NotifierError> {
    let response = client.post(webhook_url).json(payload).send().await?;
    let status = response.status();
    let body = response.text().await?;
    debug!(%status, "slack webhook responded");

    Ok(SlackResponse { status, body })
}

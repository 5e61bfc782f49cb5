//! The probe itself: build the test message, post it once, report to the console.
//!
//! Delivery failures are reported and swallowed. Only writing the report can fail.
//! The report goes to `out`; the cause chain of a delivery error goes to `trace`.

use std::io::{self, Write};

use reqwest::StatusCode;
use tracing::{error, info, warn};

use crate::configuration::Settings;
use crate::model::global_error::NotifierError;
use crate::model::message::TestMessage;
use crate::util::slack::{build_client, post_payload, SlackResponse};

pub const URL_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Webhook answered 200.
    Delivered { status: StatusCode, body: String },
    /// Webhook answered with any other status.
    Rejected { status: StatusCode, body: String },
    /// The request never produced a response.
    Failed { message: String },
}

impl Outcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Outcome::Delivered { .. })
    }
}

pub async fn run<W: Write, T: Write>(
    settings: &Settings,
    out: &mut W,
    trace: &mut T,
) -> io::Result<Outcome> {
    run_with_message(settings, &TestMessage::now(), out, trace).await
}

pub async fn run_with_message<W: Write, T: Write>(
    settings: &Settings,
    message: &TestMessage,
    out: &mut W,
    trace: &mut T,
) -> io::Result<Outcome> {
    writeln!(
        out,
        "Testing Slack webhook: {}...",
        truncate_url(&settings.webhook_url, URL_PREVIEW_CHARS)
    )?;

    match deliver(settings, message).await {
        Ok(SlackResponse { status, body }) => {
            writeln!(out, "Response status: {}", status.as_u16())?;
            writeln!(out, "Response body: {body}")?;

            if status == StatusCode::OK {
                info!(%status, "test alert delivered");
                writeln!(out, "\n✅ SUCCESS! Check your Slack channel for the test message.")?;
                Ok(Outcome::Delivered { status, body })
            } else {
                warn!(%status, "webhook rejected test alert");
                writeln!(out, "\n❌ FAILED! Status code: {}", status.as_u16())?;
                Ok(Outcome::Rejected { status, body })
            }
        }
        Err(err) => {
            let message = err.to_string();
            error!(error = %message, "test alert delivery failed");
            writeln!(out, "\n❌ ERROR: {message}")?;
            writeln!(trace, "{:?}", anyhow::Error::from(err))?;
            Ok(Outcome::Failed { message })
        }
    }
}

async fn deliver(settings: &Settings, message: &TestMessage) -> Result<SlackResponse, NotifierError> {
    let client = build_client(settings.timeout)?;
    post_payload(&client, &settings.webhook_url, &message.to_payload()).await
}

/// First `max_chars` characters of `url`, never splitting a code point.
pub fn truncate_url(url: &str, max_chars: usize) -> &str {
    match url.char_indices().nth(max_chars) {
        Some((idx, _)) => &url[..idx],
        None => url,
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const HEADLINE: &str = "🧪 *Test Alert*";
pub const SECTION_TEXT: &str =
    "🧪 *Manual Test Alert*\n\nThis is a test to verify Slack integration is working.";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Slack incoming-webhook body: plain-text fallback plus Block Kit blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlackPayload {
    pub text: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Section { text: TextObject },
    Context { elements: Vec<TextObject> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TextObject {
    Mrkdwn { text: String },
}

impl TextObject {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        TextObject::Mrkdwn { text: text.into() }
    }
}

/// The fixed test notification. Only the timestamp differs between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestMessage {
    headline: &'static str,
    generated_at: DateTime<Utc>,
}

impl TestMessage {
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self {
            headline: HEADLINE,
            generated_at,
        }
    }

    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    pub fn to_payload(&self) -> SlackPayload {
        SlackPayload {
            text: self.headline.to_string(),
            blocks: vec![
                Block::Section {
                    text: TextObject::mrkdwn(SECTION_TEXT),
                },
                Block::Context {
                    elements: vec![TextObject::mrkdwn(format!(
                        "Timestamp: {}",
                        format_timestamp(self.generated_at)
                    ))],
                },
            ],
        }
    }
}

pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

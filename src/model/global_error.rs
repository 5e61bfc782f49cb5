use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    /// Required environment value missing or empty. Raised before any I/O.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport failure while talking to the webhook (connect, DNS, TLS, timeout).
    /// A non-200 status is not a delivery error.
    #[error("delivery error: {0}")]
    Delivery(#[from] reqwest::Error),
}


//! Client for the Kinopoisk Unofficial API.
//!
//! The upstream is authoritative but untrusted: every response field is
//! optional, and non-success statuses or transport failures collapse into
//! call-level sentinels instead of propagating.

pub mod api_types;
mod client;
mod http;

pub use client::KinopoiskClient;
pub use http::HttpClient;

/// Client result type for the raw request layer.
pub type Result<T> = std::result::Result<T, KinopoiskError>;

/// Errors raised by the raw request layer, before the call wrappers
/// collapse them into sentinels.
#[derive(Debug, thiserror::Error)]
pub enum KinopoiskError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Outcome of an auxiliary API call.
///
/// `Unavailable` means the call itself failed (transport or non-success
/// status). It is distinct from `Data` holding an empty collection, which
/// means the API answered with zero items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    Data(T),
    Unavailable,
}

impl<T> Fetched<T> {
    pub fn data(self) -> Option<T> {
        match self {
            Self::Data(value) => Some(value),
            Self::Unavailable => None,
        }
    }

    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

impl<T: Default> Fetched<T> {
    /// Collapse to the payload, defaulting when the call failed.
    pub fn data_or_default(self) -> T {
        self.data().unwrap_or_default()
    }
}

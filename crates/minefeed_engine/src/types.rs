use std::fmt;

use thiserror::Error;

/// Failure taxonomy for outbound HTTP calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchErrorKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchErrorKind::InvalidUrl => write!(f, "invalid url"),
            FetchErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            FetchErrorKind::Timeout => write!(f, "timeout"),
            FetchErrorKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FetchErrorKind::Decode => write!(f, "decode error"),
            FetchErrorKind::Network => write!(f, "network error"),
        }
    }
}

/// Error from the fetch layer; `kind` drives policy, `message` is for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Diagnostic events emitted while resolving a version to an article.
///
/// Resolution is best-effort; slug drift on the content site is only
/// debuggable through these events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveEvent {
    Attempt { slug: String },
    Hit { slug: String },
    Miss { slug: String },
    Failed { slug: String, error: FetchError },
}

/// Receives resolution diagnostics.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ResolveEvent);
}

/// Default sink: forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&self, event: ResolveEvent) {
        match event {
            ResolveEvent::Attempt { slug } => log::info!("probing article {slug}"),
            ResolveEvent::Hit { slug } => log::info!("matched article {slug}"),
            ResolveEvent::Miss { slug } => log::info!("no article at {slug}"),
            ResolveEvent::Failed { slug, error } => {
                log::warn!("article lookup failed for {slug}: {error}");
            }
        }
    }
}

// ── Core error types ──
//
// User-facing errors from swctl-core. These are NOT API-specific --
// consumers never see reqwest errors directly. The `From<swctl_api::Error>`
// impl translates transport-layer errors into domain-appropriate variants.

use thiserror::Error;

/// Range and uniqueness violations in a port/VLAN description.
///
/// These are configuration errors: they are raised while building a
/// `VlanPlan`, before any compilation or network call happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Port {port} out of range (expected 1-10)")]
    PortOutOfRange { port: i64 },

    #[error("VLAN {vlan} out of range (expected 1-4094)")]
    VlanOutOfRange { vlan: i64 },

    #[error("VLAN {vlan} listed more than once")]
    DuplicateVlan { vlan: u16 },
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to switch at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request to switch timed out")]
    Timeout,

    // ── Device errors ────────────────────────────────────────────────
    #[error("Switch rejected {endpoint} (HTTP {status})")]
    Rejected { endpoint: String, status: u16 },

    #[error("Switch API error: {message}")]
    Api { message: String },

    // ── Apply stages ─────────────────────────────────────────────────
    #[error("Failed to update port config")]
    MembershipPushFailed {
        #[source]
        source: Box<CoreError>,
    },

    #[error("Couldn't update VLAN configuration")]
    TagPushFailed {
        #[source]
        source: Box<CoreError>,
    },

    #[error("Failed to save {map} VLAN map")]
    SaveFailed {
        map: String,
        #[source]
        source: Box<CoreError>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// The error that caused an apply stage to fail, or `self`.
    pub fn root(&self) -> &CoreError {
        match self {
            Self::MembershipPushFailed { source }
            | Self::TagPushFailed { source }
            | Self::SaveFailed { source, .. } => source.root(),
            other => other,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<swctl_api::Error> for CoreError {
    fn from(err: swctl_api::Error) -> Self {
        match err {
            e if e.is_timeout() => CoreError::Timeout,
            swctl_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            swctl_api::Error::Transport(ref e) if e.is_connect() => CoreError::ConnectionFailed {
                url: e.url().map(ToString::to_string).unwrap_or_default(),
                reason: e.to_string(),
            },
            swctl_api::Error::Rejected { endpoint, status } => {
                CoreError::Rejected { endpoint, status }
            }
            swctl_api::Error::Tls(message) => CoreError::Config { message },
            swctl_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid switch URL: {e}"),
            },
            other => CoreError::Api {
                message: other.to_string(),
            },
        }
    }
}

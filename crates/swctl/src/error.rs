//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text and a stable exit code.

use miette::Diagnostic;
use thiserror::Error;

use swctl_config::ConfigError;
use swctl_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONFIG: i32 = 4;
    pub const PUSH: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to switch at {url}")]
    #[diagnostic(
        code(swctl::connection_failed),
        help(
            "Check that the switch is powered and reachable.\n\
             URL: {url}\n\
             Self-signed certificate? Try: swctl status --insecure"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(swctl::timeout),
        help("Increase timeout with --timeout or check that the switch is responsive.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(swctl::auth_failed),
        help(
            "Verify the web UI user and password.\n\
             Store a password with: swctl config set-password"
        )
    )]
    AuthFailed { message: String },

    #[error("No password configured for profile '{profile}'")]
    #[diagnostic(
        code(swctl::no_credentials),
        help(
            "Pass --password, set SWCTL_PASSWORD, or run: swctl config set-password\n\
             A password is prompted for when stdin is a terminal."
        )
    )]
    NoCredentials { profile: String },

    // ── Switch ───────────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(swctl::push_failed),
        help(
            "The switch may now be partially configured.\n\
             Fix the cause and run apply again; nothing has been saved to flash."
        )
    )]
    PushFailed(Box<CoreError>),

    #[error(transparent)]
    #[diagnostic(
        code(swctl::save_failed),
        help("The running configuration was applied but not persisted; run: swctl save")
    )]
    SaveFailed(Box<CoreError>),

    #[error("Switch API error: {message}")]
    #[diagnostic(code(swctl::api_error))]
    ApiError { message: String },

    // ── VLAN file ────────────────────────────────────────────────────
    #[error("Invalid VLAN configuration: {error}")]
    #[diagnostic(
        code(swctl::vlan_file),
        help("Ports are numbered 1-10 and VLAN ids range 1-4094.")
    )]
    VlanFile { error: ConfigError },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(swctl::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No switch configured")]
    #[diagnostic(
        code(swctl::no_config),
        help(
            "Pass --host (or set SWCTL_HOST), or add a profile to: {path}\n\
             \n\
             [profiles.default]\n\
             host = \"192.168.2.1\""
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(swctl::config))]
    Config(Box<figment::Error>),

    #[error("Keyring error: {message}")]
    #[diagnostic(code(swctl::keyring))]
    Keyring { message: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::PushFailed(_) | Self::SaveFailed(_) | Self::ApiError { .. } => exit_code::PUSH,
            Self::VlanFile { .. } | Self::NoConfig { .. } | Self::Config(_) => exit_code::CONFIG,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Keyring { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

/// Strip apply/save stage wrappers down to the underlying failure.
fn into_root(err: CoreError) -> CoreError {
    match err {
        CoreError::MembershipPushFailed { source }
        | CoreError::TagPushFailed { source }
        | CoreError::SaveFailed { source, .. } => into_root(*source),
        other => other,
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        // A transport failure inside a stage is reported as the transport failure.
        let err = if matches!(
            err.root(),
            CoreError::ConnectionFailed { .. }
                | CoreError::Timeout
                | CoreError::AuthenticationFailed { .. }
        ) {
            into_root(err)
        } else {
            err
        };

        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::Timeout => CliError::Timeout,

            CoreError::MembershipPushFailed { .. } | CoreError::TagPushFailed { .. } => {
                CliError::PushFailed(Box::new(err))
            }

            CoreError::SaveFailed { .. } => CliError::SaveFailed(Box::new(err)),

            CoreError::Rejected { .. } | CoreError::Api { .. } => CliError::ApiError {
                message: err.to_string(),
            },

            CoreError::Model(e) => CliError::VlanFile {
                error: ConfigError::Model(e),
            },

            CoreError::Config { message } => CliError::Validation {
                field: "switch".into(),
                reason: message,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Keyring(e) => CliError::Keyring {
                message: e.to_string(),
            },
            ConfigError::Io(e) => CliError::Io(e),
            vlan @ (ConfigError::ReadVlanFile { .. }
            | ConfigError::Yaml(_)
            | ConfigError::Model(_)
            | ConfigError::Port { .. }) => CliError::VlanFile { error: vlan },
        }
    }
}

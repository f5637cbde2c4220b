// ── Runtime connection configuration ──
//
// These types describe *how* to reach a switch. They carry credential data
// and connection tuning, but never touch disk. The CLI constructs a
// `SwitchConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use swctl_api::{TlsMode, TransportConfig};

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (factory self-signed certificate).
    DangerAcceptInvalid,
}

impl From<&TlsVerification> for TlsMode {
    fn from(tls: &TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        }
    }
}

/// Everything needed to open an authenticated session with one switch.
#[derive(Debug, Clone)]
pub struct SwitchConfig {
    /// Switch root URL, e.g. `https://192.168.2.1`.
    pub url: Url,
    pub username: String,
    pub password: SecretString,
    pub tls: TlsVerification,
    pub timeout: Duration,
}

impl SwitchConfig {
    /// `https://{host}` unless `host` already carries a scheme.
    pub fn url_for_host(host: &str) -> Result<Url, url::ParseError> {
        if host.contains("://") {
            Url::parse(host)
        } else {
            Url::parse(&format!("https://{host}"))
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: TlsMode::from(&self.tls),
            timeout: self.timeout,
            cookie_jar: None,
        }
        .with_cookie_jar()
    }
}

//! Shared configuration for swctl.
//!
//! TOML profiles (one per switch), credential resolution (env + keyring +
//! plaintext), translation to `swctl_core::SwitchConfig`, and loading of the
//! declarative VLAN file. The CLI adds `GlobalOpts`-aware wrappers on top.

pub mod vlan_file;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use swctl_core::{ModelError, SwitchConfig, TlsVerification};

pub use vlan_file::{DEFAULT_VLAN_FILE, load_vlan_file, parse_vlan_yaml};

const KEYRING_SERVICE: &str = "swctl";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no password configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ── VLAN file ───────────────────────────────────────────────────
    #[error("cannot read VLAN file {}: {source}", path.display())]
    ReadVlanFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid VLAN file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Model(#[from] ModelError),

    #[error("port {port}: {source}")]
    Port {
        port: u8,
        #[source]
        source: ModelError,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named switch profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_vlan_file")]
    pub vlan_file: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            insecure: false,
            timeout: default_timeout(),
            vlan_file: default_vlan_file(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
fn default_vlan_file() -> PathBuf {
    PathBuf::from(DEFAULT_VLAN_FILE)
}

/// A named switch profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Switch hostname or URL (e.g., "192.168.2.1").
    pub host: String,

    /// Web UI user.
    #[serde(default = "default_username")]
    pub username: String,

    /// Password (plaintext; prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,

    /// VLAN file for this switch.
    pub vlan_file: Option<PathBuf>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: default_username(),
            password: None,
            password_env: None,
            ca_cert: None,
            insecure: None,
            timeout: None,
            vlan_file: None,
        }
    }
}

fn default_username() -> String {
    "admin".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "swctl").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("swctl");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// Nested keys use a double underscore: `SWCTL_DEFAULTS__TIMEOUT=5`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SWCTL_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Credential resolution (without CLI flags) ───────────────────────

fn keyring_entry(profile_name: &str) -> Result<keyring::Entry, ConfigError> {
    Ok(keyring::Entry::new(
        KEYRING_SERVICE,
        &format!("{profile_name}/password"),
    )?)
}

/// Resolve the password from the credential chain (no CLI flag step).
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's password_env → env var lookup
    if let Some(ref env_name) = profile.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring_entry(profile_name) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a profile's password in the system keyring.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    keyring_entry(profile_name)?.set_password(password)?;
    Ok(())
}

/// Build a `SwitchConfig` from a profile and an already-resolved password.
pub fn profile_to_switch_config(
    profile: &Profile,
    defaults: &Defaults,
    password: SecretString,
) -> Result<SwitchConfig, ConfigError> {
    let url = SwitchConfig::url_for_host(&profile.host).map_err(|_| ConfigError::Validation {
        field: "host".into(),
        reason: format!("invalid host: {}", profile.host),
    })?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(SwitchConfig {
        url,
        username: profile.username.clone(),
        password,
        tls,
        timeout: Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn loads_profiles_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_profile = "lab"

[defaults]
timeout = 10

[profiles.lab]
host = "192.168.2.1"
password = "hunter2"
insecure = true
"#,
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();

        assert_eq!(cfg.default_profile.as_deref(), Some("lab"));
        assert_eq!(cfg.defaults.timeout, 10);
        assert_eq!(cfg.defaults.vlan_file, PathBuf::from("vlan.yml"));
        let lab = &cfg.profiles["lab"];
        assert_eq!(lab.host, "192.168.2.1");
        assert_eq!(lab.username, "admin");
        assert_eq!(lab.insecure, Some(true));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert!(cfg.profiles.is_empty());
        assert_eq!(cfg.defaults.timeout, 30);
    }

    #[test]
    fn plaintext_password_is_last_resort() {
        let profile = Profile {
            host: "switch.lan".into(),
            password: Some("from-file".into()),
            password_env: Some("SWCTL_TEST_UNSET_PASSWORD_VAR".into()),
            ..Profile::default()
        };
        // The keyring may or may not be reachable in CI; either way the
        // plaintext entry guarantees a result.
        assert!(resolve_password(&profile, "swctl-test-nonexistent-profile").is_ok());
    }

    #[test]
    fn profile_builds_insecure_switch_config() {
        let profile = Profile {
            host: "192.168.2.1".into(),
            username: "admin".into(),
            insecure: Some(true),
            timeout: Some(5),
            ..Profile::default()
        };
        let cfg = profile_to_switch_config(
            &profile,
            &Defaults::default(),
            SecretString::from("pw".to_owned()),
        )
        .unwrap();

        assert_eq!(cfg.url.as_str(), "https://192.168.2.1/");
        assert_eq!(cfg.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn ca_cert_selects_custom_trust() {
        let profile = Profile {
            host: "switch.lan".into(),
            ca_cert: Some(PathBuf::from("/etc/swctl/ca.pem")),
            ..Profile::default()
        };
        let cfg = profile_to_switch_config(
            &profile,
            &Defaults::default(),
            SecretString::from("pw".to_owned()),
        )
        .unwrap();

        assert_eq!(
            cfg.tls,
            TlsVerification::CustomCa(PathBuf::from("/etc/swctl/ca.pem"))
        );
    }
}

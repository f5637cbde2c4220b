//! CLI configuration: a thin wrapper around `swctl_config` shared types.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--host, --user, --password, ...).

use std::io::IsTerminal;
use std::path::PathBuf;

use secrecy::SecretString;

use swctl_config::ConfigError;
use swctl_core::SwitchConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use swctl_config::{
    Config, Profile, config_path, load_config_or_default, store_password,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// The active profile with `--host`, `--user`, `--insecure` and `--timeout`
/// applied on top. `None` when neither a profile nor `--host` names a switch.
pub fn effective_profile(global: &GlobalOpts, config: &Config) -> Option<Profile> {
    let name = active_profile_name(global, config);
    let mut profile = config.profiles.get(&name).cloned();

    if let Some(ref host) = global.host {
        profile.get_or_insert_with(Profile::default).host.clone_from(host);
    }
    let mut profile = profile?;

    if let Some(ref user) = global.user {
        profile.username.clone_from(user);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
    Some(profile)
}

/// Build the `SwitchConfig` for the active profile.
///
/// Password order: `--password` / `SWCTL_PASSWORD`, the profile's
/// `password_env`, the keyring, the plaintext entry, then an interactive
/// prompt when stdin is a terminal.
pub fn resolve_switch_config(global: &GlobalOpts, config: &Config) -> Result<SwitchConfig, CliError> {
    let profile_name = active_profile_name(global, config);
    let profile = effective_profile(global, config).ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;

    let password = match global.password {
        Some(ref pw) => SecretString::from(pw.clone()),
        None => match swctl_config::resolve_password(&profile, &profile_name) {
            Ok(pw) => pw,
            Err(ConfigError::NoCredentials { .. }) if std::io::stdin().is_terminal() => {
                prompt_password(&profile)?
            }
            Err(e) => return Err(e.into()),
        },
    };

    Ok(swctl_config::profile_to_switch_config(
        &profile,
        &config.defaults,
        password,
    )?)
}

/// VLAN file to read: `--conf`, then the profile's `vlan_file`, then the
/// configured default.
pub fn resolve_vlan_file(arg: Option<PathBuf>, global: &GlobalOpts, config: &Config) -> PathBuf {
    arg.or_else(|| effective_profile(global, config).and_then(|p| p.vlan_file))
        .unwrap_or_else(|| config.defaults.vlan_file.clone())
}

fn prompt_password(profile: &Profile) -> Result<SecretString, CliError> {
    let prompt = format!("Password for {}@{}: ", profile.username, profile.host);
    let pw = rpassword::prompt_password(prompt)?;
    Ok(SecretString::from(pw))
}

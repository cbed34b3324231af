// SPDX-License-Identifier: MPL-2.0
//! Location of `settings.toml`.
//!
//! The directory is the first of: an explicit override (tests and tooling),
//! `--config-dir`, `CARD_COMPOSER_CONFIG_DIR`, the platform config directory
//! joined with `CardComposer`.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "CardComposer";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "CARD_COMPOSER_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records `--config-dir`. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already set");
    }
}

/// Config directory, honoring `explicit` before every other source.
pub fn get_app_config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    let cli = CLI_CONFIG_DIR.get().cloned().flatten();
    let env = std::env::var(ENV_CONFIG_DIR).ok();
    resolve(explicit, cli, env, dirs::config_dir())
}

fn resolve(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(cli)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| platform.map(|base| base.join(APP_DIR_NAME)))
}

use aocr_core::settings::{EnvOverrides, Settings};

use crate::{cmd::GlobalArgs, util};

/// Settings from `--config` when given, otherwise from the nearest `aocr.toml`.
pub fn load_settings(args: &GlobalArgs) -> anyhow::Result<Settings> {
    let GlobalArgs { subcmd: _, config } = args;

    let settings = match config {
        Some(path) => Settings::from_toml_file(path.clone())?.with_env(EnvOverrides::from_env()),
        None => Settings::load(util::current_dir())?,
    };
    log::debug!(
        "Loaded settings from {:?}",
        settings
            .source_config_file
            .as_ref()
            .map(util::replace_homedir_to_tilde)
    );
    Ok(settings)
}

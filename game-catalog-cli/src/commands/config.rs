use std::path::Path;

use game_catalog_lib::settings::{AppSettings, save_settings, settings_path};

use crate::CliError;

pub(crate) fn run_config_show(settings: &AppSettings) {
    log::info!("Settings file: {}", settings_path().display());
    crate::log_blank();
    match toml::to_string_pretty(settings) {
        Ok(text) => log::info!("{}", text.trim_end()),
        Err(e) => log::warn!("Failed to render settings: {}", e),
    }
    log::info!("# data directory in use: {}", settings.data_dir().display());
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

pub(crate) fn run_config_set_catalog(
    mut settings: AppSettings,
    path: &Path,
) -> Result<(), CliError> {
    if !path.is_file() {
        return Err(CliError::config(format!(
            "Dataset file not found: {}",
            path.display()
        )));
    }
    let path = path.canonicalize()?;
    settings.catalog.dataset_path = Some(path.clone());
    save_settings(&settings)?;
    log::info!("Default dataset set to {}", path.display());
    Ok(())
}

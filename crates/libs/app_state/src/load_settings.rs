use crate::AppSettings;
use color_eyre::eyre::Result;
use std::path::Path;

/// Load the app settings from YAML + environment variables.
pub fn load_app_settings() -> Result<AppSettings> {
    // Load .env first so APP__ overrides from it are visible to the builder.
    dotenv::from_path(".env").ok();
    load_app_settings_from(Path::new("config/settings.yaml"))
}

/// Load settings from an explicit YAML path, with `APP__` env overrides.
pub fn load_app_settings_from(config_path: &Path) -> Result<AppSettings> {
    let config_path = config_path.canonicalize()?;

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    Ok(builder.build()?.try_deserialize::<AppSettings>()?)
}

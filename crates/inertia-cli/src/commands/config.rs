use std::path::Path;

use anyhow::Result;
use tracing::info;

use inertia_core::AppConfig;

pub fn run(config: &AppConfig, config_path: &Path, path_only: bool, write: bool) -> Result<()> {
    if path_only {
        println!("{}", config_path.display());
        return Ok(());
    }

    if write {
        config.save_to(config_path)?;
        info!(path = %config_path.display(), "Wrote configuration");
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    if !config_path.exists() {
        println!("# {} not found, showing defaults\n", config_path.display());
    }
    print!("{}", config.to_toml()?);

    Ok(())
}

// Configuration file loading and creation

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ttypong");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config, io::Error> {
    load_config_from(&get_config_path())
}

/// Load configuration from `path`. A file that fails to parse falls back to
/// the defaults with a warning on stderr (logging is not up yet).
pub fn load_config_from(path: &Path) -> Result<Config, io::Error> {
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        match parse_config(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse config file: {}", e);
                eprintln!("Using default configuration");
                Ok(Config::default())
            }
        }
    } else {
        create_default_config(path)?;
        Ok(Config::default())
    }
}

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let commented_toml = format!(
        "# ttypong configuration file\n\
         # Restart the game after editing\n\
         #\n\
         # [game]\n\
         # profile = \"classic\"   # countdown, side-wall scoring, relative mouse\n\
         # profile = \"rally\"     # no countdown, no scoring, absolute mouse\n\
         # Optional overrides: countdown_seconds = 0..n,\n\
         #                     scoring = \"off\" | \"side_walls\",\n\
         #                     pointer = \"relative\" | \"absolute\"\n\
         #\n\
         # Colors: RGB values from 0-255\n\
         #\n\
         # [logging] writes to a file since the game owns the terminal\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    println!("Created default config file at: {}", path.display());
    Ok(())
}

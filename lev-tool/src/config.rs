//! User configuration options.

use std::fs::{File, create_dir_all};
use std::io::{self, Read, Write};
use std::path::PathBuf;

use dirs::config_dir;
use level::log::{self, info, warn};
use nanoserde::{DeRon, SerRon};

use crate::{BASE_DIR, CLIOptions};

const LOG_TAG: &str = "UserConfig";
const CONFIG_FILE: &str = "user.ron";

fn get_cfg_file() -> io::Result<PathBuf> {
    let mut dir = config_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{}: Couldn't find the user config dir", LOG_TAG),
        )
    })?;
    dir.push(BASE_DIR);
    create_dir_all(&dir)?;
    dir.push(CONFIG_FILE);
    Ok(dir)
}

#[derive(Debug, Clone, PartialEq, DeRon, SerRon)]
pub struct UserConfig {
    /// A `log::LevelFilter` name
    pub log_level: String,
    /// Layer used by queries when `--layer` is not given
    pub layer: i32,
    /// Texture directory, empty if unset
    pub texture_dir: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            log_level: log::LevelFilter::Warn.to_string(),
            layer: 0,
            texture_dir: String::new(),
        }
    }
}

impl UserConfig {
    /// Read the config, creating a default one if there is none or it
    /// can't be read
    pub fn load() -> io::Result<Self> {
        let path = get_cfg_file()?;
        let mut buf = String::new();
        if let Ok(mut file) = File::open(&path) {
            file.read_to_string(&mut buf)?;
        }
        if !buf.is_empty() {
            match UserConfig::deserialize_ron(&buf) {
                Ok(config) => {
                    info!(target: LOG_TAG, "Loaded user config file");
                    return Ok(config);
                }
                Err(e) => warn!(target: LOG_TAG, "Could not deserialise {:?}: {:?}", path, e),
            }
        }
        let config = UserConfig::default();
        config.write()?;
        info!(target: LOG_TAG, "Created default user config file");
        Ok(config)
    }

    pub fn write(&self) -> io::Result<()> {
        let path = get_cfg_file()?;
        let mut file = File::create(&path)?;
        file.write_all(self.serialize_ron().as_bytes())?;
        info!(target: LOG_TAG, "Saved user config to {:?}", path);
        Ok(())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }

    /// Sync the CLI options and UserOptions with each other
    pub fn sync_cli(&mut self, cli: &mut CLIOptions) {
        if let Some(verbose) = cli.verbose {
            if verbose != self.log_level() {
                self.log_level = verbose.to_string();
            }
        } else {
            cli.verbose = Some(self.log_level());
        }

        if let Some(layer) = cli.layer {
            self.layer = layer;
        } else {
            cli.layer = Some(self.layer);
        }

        if let Some(dir) = &cli.textures {
            if *dir != self.texture_dir {
                dir.clone_into(&mut self.texture_dir);
            }
        } else if !self.texture_dir.is_empty() {
            cli.textures = Some(self.texture_dir.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UserConfig;
    use crate::cli::{CLIOptions, Command, ExportArgs};
    use level::log::LevelFilter;
    use nanoserde::{DeRon, SerRon};

    fn options() -> CLIOptions {
        CLIOptions {
            verbose: None,
            textures: None,
            layer: None,
            command: Command::Export(ExportArgs {
                file: "IN.LEV".into(),
                output: "OUT.LEV".into(),
            }),
        }
    }

    #[test]
    fn ron_round_trip() {
        let config = UserConfig {
            log_level: "DEBUG".to_owned(),
            layer: -1,
            texture_dir: "/games/dark/textures".to_owned(),
        };
        let text = config.serialize_ron();
        assert_eq!(UserConfig::deserialize_ron(&text).unwrap(), config);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn config_fills_missing_options() {
        let mut config = UserConfig {
            texture_dir: "tex".to_owned(),
            layer: 2,
            ..UserConfig::default()
        };
        let mut cli = options();
        assert_eq!(cli.log_level(), LevelFilter::Warn);
        config.sync_cli(&mut cli);
        assert_eq!(cli.verbose, Some(LevelFilter::Warn));
        assert_eq!(cli.layer, Some(2));
        assert_eq!(cli.textures.as_deref(), Some("tex"));
    }

    #[test]
    fn config_level_applies_after_sync() {
        let mut config = UserConfig {
            log_level: "INFO".to_owned(),
            ..UserConfig::default()
        };
        let mut cli = options();
        // Before the config is read only the default is known
        assert_eq!(cli.log_level(), LevelFilter::Warn);
        config.sync_cli(&mut cli);
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn options_override_config() {
        let mut config = UserConfig::default();
        let mut cli = CLIOptions {
            verbose: Some(LevelFilter::Debug),
            textures: Some("other".to_owned()),
            layer: Some(-3),
            ..options()
        };
        config.sync_cli(&mut cli);
        assert_eq!(config.log_level(), LevelFilter::Debug);
        assert_eq!(config.layer, -3);
        assert_eq!(config.texture_dir, "other");
    }
}

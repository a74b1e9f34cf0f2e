use std::fs::File;
use std::io::Write;
use crate::common::common::parse_log_level;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::leecher_settings::LeecherSettings;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            plugin: LeecherSettings::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(self)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");

                return match Configuration::init().save(path) {
                    Ok(_) => {
                        eprintln!("Please edit {path}, exiting now...");
                        Err(ConfigurationError::Created(path.to_string()))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        Err(e)
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        parse_log_level(self.log_level.as_str())?;

        if let Some(user) = self.plugin.detected_leechers.iter().find(|user| user.trim().is_empty()) {
            return Err(ConfigurationError::ValidationError(format!(
                "[plugin] detected_leechers contains an empty username: {user:?}"
            )));
        }

        Ok(())
    }
}

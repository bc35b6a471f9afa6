#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::PollPolicy;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ApiURL,
    ConfigFile,
    PollBackoff,
    PollInterval,
    PollMaxInterval,
    PreferencesFile,
    RequestTimeout,
}

pub struct Config {}

fn config_dir() -> path::PathBuf {
    #[cfg(not(target_os = "macos"))]
    let dir = dirs::config_dir().unwrap_or_else(env::temp_dir);
    #[cfg(target_os = "macos")]
    let dir = env::var("HOME")
        .map(|home| return path::PathBuf::from(home).join(".config"))
        .unwrap_or_else(|_| return env::temp_dir());

    return dir.join("kitala");
}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    /// Parses a config value, naming the key in the error when it is malformed.
    pub fn get_parsed<T: FromStr>(key: ConfigKey) -> Result<T> {
        let val = Config::get(key);
        if let Ok(parsed) = val.parse::<T>() {
            return Ok(parsed);
        }

        bail!(format!("Config key '{key}' has an invalid value: {val}"));
    }

    pub fn request_timeout() -> Result<Option<Duration>> {
        let millis = Config::get_parsed::<u64>(ConfigKey::RequestTimeout)?;
        if millis == 0 {
            return Ok(None);
        }

        return Ok(Some(Duration::from_millis(millis)));
    }

    /// Poll timing from config. `poll-interval` must be at least one second.
    pub fn poll_policy() -> Result<PollPolicy> {
        let interval = Config::get_parsed::<u64>(ConfigKey::PollInterval)?;
        if interval == 0 {
            bail!(format!(
                "Config key '{}' has an invalid value: {interval}",
                ConfigKey::PollInterval
            ));
        }

        return Ok(PollPolicy {
            interval: Duration::from_secs(interval),
            backoff_multiplier: Config::get_parsed::<u32>(ConfigKey::PollBackoff)?,
            max_interval: Duration::from_secs(Config::get_parsed::<u64>(
                ConfigKey::PollMaxInterval,
            )?),
        });
    }

    pub fn default(key: ConfigKey) -> String {
        let dir = config_dir();
        let config_path = dir.join("config.toml");
        let preferences_path = dir.join("preferences.toml");

        let res = match key {
            ConfigKey::ApiURL => "http://localhost:5000".to_string(),
            ConfigKey::PollBackoff => "1".to_string(),
            ConfigKey::PollInterval => "30".to_string(),
            ConfigKey::PollMaxInterval => "300".to_string(),
            ConfigKey::RequestTimeout => "0".to_string(),

            // Special
            ConfigKey::ConfigFile => config_path.to_string_lossy().to_string(),
            ConfigKey::PreferencesFile => preferences_path.to_string_lossy().to_string(),
        };

        return res;
    }

    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        Config::set(key, val_str);
                    } else {
                        bail!(format!(
                            "config.toml has an unsupported value type for key '{key}'"
                        ));
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        Config::request_timeout()?;
        Config::poll_policy()?;

        tracing::debug!(
            api_url = Config::get(ConfigKey::ApiURL),
            preferences_file = Config::get(ConfigKey::PreferencesFile),
            poll_interval = Config::get(ConfigKey::PollInterval),
            request_timeout = Config::get(ConfigKey::RequestTimeout),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i64>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}

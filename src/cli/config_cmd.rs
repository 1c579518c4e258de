//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "server_url" => config.server_url = Some(value.to_string()),
        "language" => config.language = Some(value.to_string()),
        "clipboard" => {
            config.clipboard = Some(parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?)
        }
        _ => unreachable!("key validated above"),
    }

    store.save(&config).await?;
    presenter.success(&format!("Set {} = {}", key, value));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;
    let value = match key {
        "server_url" => config.server_url.unwrap_or_else(|| "(not set)".to_string()),
        "language" => config.language.unwrap_or_else(|| "(not set)".to_string()),
        "clipboard" => config
            .clipboard
            .map(|b| b.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
        _ => unreachable!("key validated above"),
    };

    presenter.key_value(key, &value);
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value("server_url", config.server_url_or_default());
    presenter.key_value("language", &config.language_or_default().to_string());
    presenter.key_value("clipboard", &config.clipboard_or_default().to_string());
    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

/// Validate a config value for its key
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "server_url" => {
            if value.starts_with("http://") || value.starts_with("https://") {
                Ok(())
            } else {
                Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be an http(s) URL".to_string(),
                })
            }
        }
        "language" => {
            let is_auto = value.eq_ignore_ascii_case("auto");
            let is_code = (2..=8).contains(&value.len())
                && value.chars().all(|c| c.is_ascii_alphabetic());
            if is_auto || is_code {
                Ok(())
            } else {
                Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be 'auto' or an ISO language code".to_string(),
                })
            }
        }
        _ => Ok(()),
    }
}

fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(()),
    }
}

use std::env;
use std::fs;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use siza_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

use super::{CommandResult, EXIT_CONFIG};

struct Field {
    key: &'static str,
    env_keys: &'static [&'static str],
    value: String,
}

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "config_validation",
                format!("config validation failed: {error}"),
                EXIT_CONFIG,
            )
        }
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in fields(&config) {
        let source = field_source(&field, config_file_doc.as_ref(), config_file_path.as_deref());
        lines.push(format!("- {} = {} (source: {source})", field.key, field.value));
    }

    CommandResult { exit_code: 0, output: lines.join("\n") }
}

fn fields(config: &AppConfig) -> Vec<Field> {
    vec![
        Field {
            key: "agent.name",
            env_keys: &["SIZA_AGENT_NAME"],
            value: config.agent.name.clone(),
        },
        Field {
            key: "model.voice",
            env_keys: &["SIZA_MODEL_VOICE"],
            value: config.model.voice.clone(),
        },
        Field {
            key: "model.temperature",
            env_keys: &["SIZA_MODEL_TEMPERATURE"],
            value: config.model.temperature.to_string(),
        },
        Field {
            key: "model.instructions",
            env_keys: &["SIZA_MODEL_INSTRUCTIONS"],
            value: format!("<{} chars>", config.model.instructions.chars().count()),
        },
        Field {
            key: "platform.url",
            env_keys: &["SIZA_PLATFORM_URL"],
            value: config.platform.url.clone(),
        },
        Field {
            key: "platform.api_key",
            env_keys: &["SIZA_PLATFORM_API_KEY"],
            value: redact_secret(config.platform.api_key.as_ref()),
        },
        Field {
            key: "platform.api_secret",
            env_keys: &["SIZA_PLATFORM_API_SECRET"],
            value: redact_secret(config.platform.api_secret.as_ref()),
        },
        Field {
            key: "server.bind_address",
            env_keys: &["SIZA_SERVER_BIND_ADDRESS"],
            value: config.server.bind_address.clone(),
        },
        Field {
            key: "server.port",
            env_keys: &["SIZA_SERVER_PORT"],
            value: config.server.port.to_string(),
        },
        Field {
            key: "server.graceful_shutdown_secs",
            env_keys: &["SIZA_SERVER_GRACEFUL_SHUTDOWN_SECS"],
            value: config.server.graceful_shutdown_secs.to_string(),
        },
        Field {
            key: "logging.level",
            env_keys: &["SIZA_LOGGING_LEVEL", "SIZA_LOG_LEVEL"],
            value: config.logging.level.clone(),
        },
        Field {
            key: "logging.format",
            env_keys: &["SIZA_LOGGING_FORMAT", "SIZA_LOG_FORMAT"],
            value: format!("{:?}", config.logging.format),
        },
    ]
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    field: &Field,
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = field.env_keys.iter().copied().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, field.key) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn redact_secret(secret: Option<&SecretString>) -> String {
    match secret {
        None => "<unset>".to_string(),
        Some(value) if value.expose_secret().trim().is_empty() => "<empty>".to_string(),
        Some(_) => "<redacted>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;
    use toml::Value;

    use super::{contains_path, redact_secret};

    #[test]
    fn secrets_never_render_their_value() {
        let secret = SecretString::from("sk-live-abc123".to_string());
        assert_eq!(redact_secret(Some(&secret)), "<redacted>");
        assert_eq!(redact_secret(None), "<unset>");
    }

    #[test]
    fn nested_keys_are_detected_in_config_file() {
        let doc: Value = "[model]\nvoice = \"Puck\"\n".parse().expect("valid toml");
        assert!(contains_path(&doc, "model.voice"));
        assert!(!contains_path(&doc, "model.temperature"));
    }
}

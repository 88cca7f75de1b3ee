use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MODEL_INSTRUCTIONS: &str =
    "You are a helpful voice AI assistant. Be concise and friendly.";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub agent: AgentConfig,
    pub model: ModelConfig,
    pub platform: PlatformConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Name the worker registers under; the platform dispatches room jobs by it.
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub voice: String,
    pub temperature: f32,
    pub instructions: String,
}

#[derive(Clone, Debug)]
pub struct PlatformConfig {
    pub url: String,
    pub api_key: Option<SecretString>,
    pub api_secret: Option<SecretString>,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub graceful_shutdown_secs: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub agent_name: Option<String>,
    pub model_voice: Option<String>,
    pub model_temperature: Option<f32>,
    pub platform_url: Option<String>,
    pub server_port: Option<u16>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            agent: AgentConfig { name: "siza-shopper".to_string() },
            model: ModelConfig {
                voice: "Puck".to_string(),
                temperature: 0.8,
                instructions: DEFAULT_MODEL_INSTRUCTIONS.to_string(),
            },
            platform: PlatformConfig {
                url: "ws://localhost:7880".to_string(),
                api_key: None,
                api_secret: None,
            },
            server: ServerConfig {
                bind_address: "127.0.0.1".to_string(),
                port: 8081,
                graceful_shutdown_secs: 15,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

fn secret_value(value: String) -> SecretString {
    value.into()
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("siza.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(agent) = patch.agent {
            if let Some(name) = agent.name {
                self.agent.name = name;
            }
        }

        if let Some(model) = patch.model {
            if let Some(voice) = model.voice {
                self.model.voice = voice;
            }
            if let Some(temperature) = model.temperature {
                self.model.temperature = temperature;
            }
            if let Some(instructions) = model.instructions {
                self.model.instructions = instructions;
            }
        }

        if let Some(platform) = patch.platform {
            if let Some(url) = platform.url {
                self.platform.url = url;
            }
            if let Some(platform_api_key_value) = platform.api_key {
                self.platform.api_key = Some(secret_value(platform_api_key_value));
            }
            if let Some(platform_api_secret_value) = platform.api_secret {
                self.platform.api_secret = Some(secret_value(platform_api_secret_value));
            }
        }

        if let Some(server) = patch.server {
            if let Some(bind_address) = server.bind_address {
                self.server.bind_address = bind_address;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
            if let Some(graceful_shutdown_secs) = server.graceful_shutdown_secs {
                self.server.graceful_shutdown_secs = graceful_shutdown_secs;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("SIZA_AGENT_NAME") {
            self.agent.name = value;
        }

        if let Some(value) = read_env("SIZA_MODEL_VOICE") {
            self.model.voice = value;
        }
        if let Some(value) = read_env("SIZA_MODEL_TEMPERATURE") {
            self.model.temperature = parse_f32("SIZA_MODEL_TEMPERATURE", &value)?;
        }
        if let Some(value) = read_env("SIZA_MODEL_INSTRUCTIONS") {
            self.model.instructions = value;
        }

        if let Some(value) = read_env("SIZA_PLATFORM_URL") {
            self.platform.url = value;
        }
        if let Some(value) = read_env("SIZA_PLATFORM_API_KEY") {
            self.platform.api_key = Some(secret_value(value));
        }
        if let Some(value) = read_env("SIZA_PLATFORM_API_SECRET") {
            self.platform.api_secret = Some(secret_value(value));
        }

        if let Some(value) = read_env("SIZA_SERVER_BIND_ADDRESS") {
            self.server.bind_address = value;
        }
        if let Some(value) = read_env("SIZA_SERVER_PORT") {
            self.server.port = parse_u16("SIZA_SERVER_PORT", &value)?;
        }
        if let Some(value) = read_env("SIZA_SERVER_GRACEFUL_SHUTDOWN_SECS") {
            self.server.graceful_shutdown_secs =
                parse_u64("SIZA_SERVER_GRACEFUL_SHUTDOWN_SECS", &value)?;
        }

        let log_level = read_env("SIZA_LOGGING_LEVEL").or_else(|| read_env("SIZA_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format = read_env("SIZA_LOGGING_FORMAT").or_else(|| read_env("SIZA_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(agent_name) = overrides.agent_name {
            self.agent.name = agent_name;
        }
        if let Some(model_voice) = overrides.model_voice {
            self.model.voice = model_voice;
        }
        if let Some(model_temperature) = overrides.model_temperature {
            self.model.temperature = model_temperature;
        }
        if let Some(platform_url) = overrides.platform_url {
            self.platform.url = platform_url;
        }
        if let Some(server_port) = overrides.server_port {
            self.server.port = server_port;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_agent(&self.agent)?;
        validate_model(&self.model)?;
        validate_platform(&self.platform)?;
        validate_server(&self.server)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("siza.toml"), PathBuf::from("config/siza.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_agent(agent: &AgentConfig) -> Result<(), ConfigError> {
    let name = agent.name.trim();
    if name.is_empty() {
        return Err(ConfigError::Validation("agent.name is required".to_string()));
    }

    let allowed = |ch: char| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_';
    if !name.chars().all(allowed) {
        return Err(ConfigError::Validation(format!(
            "agent.name `{name}` may only contain ASCII letters, digits, `-` and `_`"
        )));
    }

    Ok(())
}

fn validate_model(model: &ModelConfig) -> Result<(), ConfigError> {
    if model.voice.trim().is_empty() {
        return Err(ConfigError::Validation("model.voice is required".to_string()));
    }

    if !model.temperature.is_finite() || !(0.0..=2.0).contains(&model.temperature) {
        return Err(ConfigError::Validation(
            "model.temperature must be in range 0.0..=2.0".to_string(),
        ));
    }

    if model.instructions.trim().is_empty() {
        return Err(ConfigError::Validation("model.instructions must not be blank".to_string()));
    }

    Ok(())
}

fn validate_platform(platform: &PlatformConfig) -> Result<(), ConfigError> {
    let url = platform.url.trim();
    if !url.starts_with("ws://") && !url.starts_with("wss://") {
        let hint = if url.starts_with("http://") || url.starts_with("https://") {
            " (hint: use the websocket scheme of the same host)"
        } else {
            ""
        };
        return Err(ConfigError::Validation(format!(
            "platform.url must start with `ws://` or `wss://`{hint}"
        )));
    }

    let has_key = platform.api_key.as_ref().is_some_and(|value| !value.expose_secret().is_empty());
    let has_secret =
        platform.api_secret.as_ref().is_some_and(|value| !value.expose_secret().is_empty());
    match (has_key, has_secret) {
        (true, false) => Err(ConfigError::Validation(
            "platform.api_key is set but platform.api_secret is missing".to_string(),
        )),
        (false, true) => Err(ConfigError::Validation(
            "platform.api_secret is set but platform.api_key is missing".to_string(),
        )),
        _ => Ok(()),
    }
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.port == 0 {
        return Err(ConfigError::Validation("server.port must be greater than zero".to_string()));
    }

    if server.graceful_shutdown_secs == 0 {
        return Err(ConfigError::Validation(
            "server.graceful_shutdown_secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_u16(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_f32(key: &str, value: &str) -> Result<f32, ConfigError> {
    value.trim().parse::<f32>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    agent: Option<AgentPatch>,
    model: Option<ModelPatch>,
    platform: Option<PlatformPatch>,
    server: Option<ServerPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct AgentPatch {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ModelPatch {
    voice: Option<String>,
    temperature: Option<f32>,
    instructions: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PlatformPatch {
    url: Option<String>,
    api_key: Option<String>,
    api_secret: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerPatch {
    bind_address: Option<String>,
    port: Option<u16>,
    graceful_shutdown_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::io;
    use std::sync::{Mutex, OnceLock};

    use secrecy::ExposeSecret;
    use tempfile::TempDir;

    use super::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn clear_vars(vars: &[&str]) {
        for var in vars {
            env::remove_var(var);
        }
    }

    fn ensure(condition: bool, message: &'static str) -> Result<(), String> {
        if condition {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }

    #[test]
    fn defaults_match_realtime_model_settings() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let config = AppConfig::load(LoadOptions::default())
            .map_err(|err| format!("config load failed: {err}"))?;

        ensure(config.model.voice == "Puck", "default voice should be Puck")?;
        ensure((config.model.temperature - 0.8).abs() < f32::EPSILON, "default temperature")?;
        ensure(config.agent.name == "siza-shopper", "default agent name")?;
        ensure(config.platform.api_key.is_none(), "platform credentials default to unset")?;
        ensure(matches!(config.logging.format, LogFormat::Compact), "default format is compact")
    }

    #[test]
    fn file_load_supports_env_interpolation() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("TEST_PLATFORM_KEY", "APIkey123");
        env::set_var("TEST_PLATFORM_SECRET", "s3cr3t");

        let result = (|| -> Result<(), String> {
            let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
            let path = dir.path().join("siza.toml");
            fs::write(
                &path,
                r#"
[platform]
url = "wss://shop.example.cloud"
api_key = "${TEST_PLATFORM_KEY}"
api_secret = "${TEST_PLATFORM_SECRET}"

[model]
voice = "Kore"
"#,
            )
            .map_err(|err| err.to_string())?;

            let config =
                AppConfig::load(LoadOptions { config_path: Some(path), ..LoadOptions::default() })
                    .map_err(|err| format!("config load failed: {err}"))?;

            ensure(config.platform.url == "wss://shop.example.cloud", "url from file")?;
            ensure(
                config.platform.api_key.as_ref().map(|key| key.expose_secret().to_string())
                    == Some("APIkey123".to_string()),
                "api key should be interpolated from environment",
            )?;
            ensure(config.model.voice == "Kore", "voice from file")?;
            Ok(())
        })();

        clear_vars(&["TEST_PLATFORM_KEY", "TEST_PLATFORM_SECRET"]);
        result
    }

    #[test]
    fn missing_interpolation_variable_is_reported() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
        let path = dir.path().join("siza.toml");
        fs::write(&path, "[platform]\napi_key = \"${SIZA_TEST_UNSET_VARIABLE}\"\n")
            .map_err(|err| err.to_string())?;

        let error =
            AppConfig::load(LoadOptions { config_path: Some(path), ..LoadOptions::default() })
                .err()
                .ok_or_else(|| "expected interpolation failure".to_string())?;
        ensure(
            matches!(
                error,
                ConfigError::MissingEnvInterpolation { ref var }
                    if var == "SIZA_TEST_UNSET_VARIABLE"
            ),
            "error should name the missing variable",
        )
    }

    #[test]
    fn logging_env_aliases_are_supported() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("SIZA_LOG_LEVEL", "warn");
        env::set_var("SIZA_LOG_FORMAT", "pretty");

        let result = (|| -> Result<(), String> {
            let config = AppConfig::load(LoadOptions::default())
                .map_err(|err| format!("config load failed: {err}"))?;

            ensure(config.logging.level == "warn", "warning log level should be set from env var")?;
            ensure(
                matches!(config.logging.format, LogFormat::Pretty),
                "pretty logging format should be set from env var",
            )?;
            Ok(())
        })();

        clear_vars(&["SIZA_LOG_LEVEL", "SIZA_LOG_FORMAT"]);
        result
    }

    #[test]
    fn precedence_defaults_file_env_overrides() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("SIZA_MODEL_VOICE", "Charon");
        env::set_var("SIZA_SERVER_PORT", "9100");

        let result = (|| -> Result<(), String> {
            let dir = TempDir::new().map_err(|err: io::Error| err.to_string())?;
            let path = dir.path().join("siza.toml");
            fs::write(
                &path,
                r#"
[agent]
name = "from-file"

[model]
voice = "Kore"
temperature = 0.4

[server]
port = 9000

[logging]
level = "warn"
"#,
            )
            .map_err(|err| err.to_string())?;

            let config = AppConfig::load(LoadOptions {
                config_path: Some(path),
                overrides: ConfigOverrides {
                    agent_name: Some("from-override".to_string()),
                    log_level: Some("debug".to_string()),
                    ..ConfigOverrides::default()
                },
                ..LoadOptions::default()
            })
            .map_err(|err| format!("config load failed: {err}"))?;

            ensure(config.agent.name == "from-override", "override agent name should win")?;
            ensure(config.logging.level == "debug", "overridden log level should be debug")?;
            ensure(config.model.voice == "Charon", "env voice should win over file")?;
            ensure(config.server.port == 9100, "env port should win over file")?;
            ensure(
                (config.model.temperature - 0.4).abs() < f32::EPSILON,
                "file temperature should win over default",
            )?;
            Ok(())
        })();

        clear_vars(&["SIZA_MODEL_VOICE", "SIZA_SERVER_PORT"]);
        result
    }

    #[test]
    fn validation_fails_fast_with_actionable_error() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("SIZA_MODEL_TEMPERATURE", "3.5");

        let result = (|| -> Result<(), String> {
            let error = match AppConfig::load(LoadOptions::default()) {
                Ok(_) => {
                    return Err("expected validation failure but config load succeeded".to_string())
                }
                Err(error) => error,
            };
            let has_message = matches!(
                error,
                ConfigError::Validation(ref message) if message.contains("model.temperature")
            );
            ensure(has_message, "validation failure should mention model.temperature")
        })();

        clear_vars(&["SIZA_MODEL_TEMPERATURE"]);
        result
    }

    #[test]
    fn platform_credentials_must_come_in_pairs() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("SIZA_PLATFORM_API_KEY", "APIonly");

        let result = (|| -> Result<(), String> {
            let error = AppConfig::load(LoadOptions::default())
                .err()
                .ok_or_else(|| "expected credential pairing failure".to_string())?;
            ensure(
                error.to_string().contains("platform.api_secret is missing"),
                "error should point at the missing secret",
            )
        })();

        clear_vars(&["SIZA_PLATFORM_API_KEY"]);
        result
    }

    #[test]
    fn http_platform_url_gets_scheme_hint() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        let error = AppConfig::load(LoadOptions {
            overrides: ConfigOverrides {
                platform_url: Some("https://shop.example.cloud".to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        })
        .err()
        .ok_or_else(|| "expected url validation failure".to_string())?;

        ensure(error.to_string().contains("websocket scheme"), "error should hint at ws scheme")
    }

    #[test]
    fn invalid_numeric_env_override_is_rejected() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("SIZA_SERVER_PORT", "eighty");

        let result = (|| -> Result<(), String> {
            let error = AppConfig::load(LoadOptions::default())
                .err()
                .ok_or_else(|| "expected env override failure".to_string())?;
            ensure(
                matches!(
                    error,
                    ConfigError::InvalidEnvOverride { ref key, .. } if key == "SIZA_SERVER_PORT"
                ),
                "error should name the offending variable",
            )
        })();

        clear_vars(&["SIZA_SERVER_PORT"]);
        result
    }

    #[test]
    fn secret_values_are_not_leaked_by_debug() -> Result<(), String> {
        let _guard = env_lock().lock().map_err(|_| "env lock is poisoned".to_string())?;

        env::set_var("SIZA_PLATFORM_API_KEY", "APIsecretkeyvalue");
        env::set_var("SIZA_PLATFORM_API_SECRET", "platform-secret-value");

        let result = (|| -> Result<(), String> {
            let config = AppConfig::load(LoadOptions::default())
                .map_err(|err| format!("config load failed: {err}"))?;
            let debug = format!("{config:?}");

            ensure(
                !debug.contains("APIsecretkeyvalue"),
                "debug output should not contain api key",
            )?;
            ensure(
                !debug.contains("platform-secret-value"),
                "debug output should not contain api secret",
            )?;
            Ok(())
        })();

        clear_vars(&["SIZA_PLATFORM_API_KEY", "SIZA_PLATFORM_API_SECRET"]);
        result
    }
}

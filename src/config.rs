use serde::Deserialize;

/// Environment variable naming the config file to load (without extension works too).
pub const CONFIG_PATH_ENV: &str = "PROFILE_SERVER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config";
pub const ENV_PREFIX: &str = "PROFILE_SERVER";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where received profiles are reported.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Structured `tracing` event.
    #[default]
    Tracing,
    /// Plain `Received profile: ...` line on stdout.
    Stdout,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub sink: SinkKind,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub app: AppSettings,
    pub log: LogSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            app: AppSettings {
                sink: SinkKind::default(),
                cors_allowed_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            },
            log: LogSettings {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
        }
    }
}

impl ServerConfig {
    /// Load defaults, then the optional config file, then `PROFILE_SERVER__*` variables.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        Self::load_from(&path, environment())
    }

    pub fn load_from(path: &str, env: config::Environment) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("app.sink", "tracing")?
            .set_default("app.cors_allowed_origins", vec![DEFAULT_CORS_ORIGIN])?
            .set_default("log.level", DEFAULT_LOG_LEVEL)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(env)
            .build()?
            .try_deserialize::<ServerConfig>()?;

        Ok(settings)
    }
}

pub fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("app.cors_allowed_origins")
        .try_parsing(true)
}

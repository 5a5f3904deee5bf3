use std::env;
use std::fmt;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_APP_NAME: &str = "Cluster0";
const DEFAULT_DATABASE: &str = "testDB";
const DEFAULT_COLLECTION: &str = "testCollection";

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "{} has an invalid value: {}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the user collection lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoSettings {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub mongo: MongoSettings,
    pub cors_allowed_origins: Vec<String>,
}

impl Settings {
    /// Reads settings from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        // A full URI wins over the Atlas credential parts
        let uri = match get("MONGODB_URI") {
            Some(uri) => uri,
            None => {
                let user = require("MONGO_USER")?;
                let password = require("MONGO_PASSWORD")?;
                let cluster = require("MONGO_HOST")?;
                let app_name = get("MONGO_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
                atlas_uri(&user, &password, &cluster, &app_name)
            }
        };

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            mongo: MongoSettings {
                uri,
                database: get("MONGO_DB").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
                collection: get("MONGO_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            },
            cors_allowed_origins,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// Builds a `mongodb+srv` connection string with URL-encoded credentials.
pub fn atlas_uri(user: &str, password: &str, cluster: &str, app_name: &str) -> String {
    format!(
        "mongodb+srv://{}:{}@{}/?appName={}",
        urlencoding::encode(user),
        urlencoding::encode(password),
        cluster,
        urlencoding::encode(app_name)
    )
}

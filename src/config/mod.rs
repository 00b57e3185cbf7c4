use once_cell::sync::Lazy;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackendKind {
    MongoDb,
    Memory,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackendKind,
    pub uri: String,
    pub database: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Environment presets first, then specific env vars override
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000 },
            store: StoreConfig {
                // Development runs against the in-memory store unless
                // STORE_BACKEND says otherwise, so no database is needed
                // for local work.
                backend: StoreBackendKind::Memory,
                uri: "mongodb://localhost:27017".to_string(),
                database: "questlog_dev".to_string(),
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig { port: 3000 },
            store: StoreConfig {
                backend: StoreBackendKind::MongoDb,
                uri: "mongodb://localhost:27017".to_string(),
                database: "questlog_staging".to_string(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 3000 },
            store: StoreConfig {
                backend: StoreBackendKind::MongoDb,
                uri: "mongodb://localhost:27017".to_string(),
                database: "questlog".to_string(),
            },
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("STORE_BACKEND") {
            self.store.backend = match v.as_str() {
                "memory" => StoreBackendKind::Memory,
                "mongodb" | "mongo" => StoreBackendKind::MongoDb,
                _ => self.store.backend,
            };
        }
        if let Ok(v) = env::var("MONGODB_URI") {
            self.store.uri = v;
        }
        if let Ok(v) = env::var("MONGODB_DATABASE") {
            self.store.database = v;
        }
        self
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Global configuration accessor, loaded once from the environment.
pub fn config() -> &'static AppConfig {
    &CONFIG
}

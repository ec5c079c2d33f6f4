use serde::Deserialize;

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Deserialize, Clone)]
pub struct SupabaseSettings {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub supabase: SupabaseSettings,
}

impl ServerConfig {
    /// Loads settings from an optional `config` file, then `SUPABASE_*` and
    /// `SERVER_*` environment variables.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with_env(None)
    }

    /// Like [`ServerConfig::load`], reading variables from `env` instead of
    /// the process environment when given.
    pub fn load_with_env(env: Option<config::Map<String, String>>) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("server.addr", DEFAULT_SERVER_ADDR)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(env_source("SUPABASE").source(env.clone()))
            .add_source(env_source("SERVER").source(env))
            .build()?
            .try_deserialize::<ServerConfig>()?;

        Ok(settings)
    }
}

// SUPABASE_URL -> supabase.url
fn env_source(prefix: &str) -> config::Environment {
    config::Environment::with_prefix(prefix)
        .prefix_separator("_")
        .keep_prefix(true)
        .separator("_")
}

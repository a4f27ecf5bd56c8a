use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Configuration {
    #[serde(default)]
    pub server: ServerConfiguration,
    pub embedding: EmbeddingConfiguration,
    pub vector_store: VectorStoreConfiguration,
    pub backfill: Option<BackfillConfiguration>,
    #[serde(default)]
    pub vendors: VendorsConfiguration,
    #[serde(default)]
    pub suggest: SuggestConfiguration,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfiguration {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfiguration {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Text embedding service (`POST {url}/embed`).
#[derive(Debug, Deserialize, Clone)]
pub struct EmbeddingConfiguration {
    pub url: String,
    pub token: SecretString,
}

/// Vector store exposing the `match_account_titles_topk` RPC.
#[derive(Debug, Deserialize, Clone)]
pub struct VectorStoreConfiguration {
    pub url: String,
    pub service_key: SecretString,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackfillConfiguration {
    pub url: String,
    pub anon_key: SecretString,
    pub admin_token: Option<SecretString>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct VendorsConfiguration {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SuggestConfiguration {
    #[serde(default = "default_top_k")]
    pub default_top_k: u32,
}

impl Default for SuggestConfiguration {
    fn default() -> Self {
        Self {
            default_top_k: default_top_k(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_top_k() -> u32 {
    genba_api::DEFAULT_MATCH_COUNT
}

impl Configuration {
    pub fn new() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(config::File::with_name("config"));
        }

        builder =
            builder.add_source(config::Environment::with_prefix("GENBA_PORTAL").separator("__"));

        builder.build()?.try_deserialize()
    }
}

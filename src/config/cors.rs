use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API. Empty means any origin.
    /// TOML: `cors.allowed_origins`. Default: empty.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

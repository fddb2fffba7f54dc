pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct BagcheckConfig {
    pub llm: LlmConfig,
    pub log_store: Option<LogStoreConfig>,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct LogStoreConfig {
    pub url: String,
    pub api_key: String,
}

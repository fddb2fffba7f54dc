use bagcheck_core::domain::common::{BagcheckConfig, LlmConfig, LogStoreConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "bagcheck-api", about = "Carry-on / checked-bag item checker API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log_store: LogStoreArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Origins allowed by CORS, comma separated.
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://127.0.0.1:3000,http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub openrouter_api_key: String,

    #[arg(
        long,
        env = "OPENROUTER_MODEL",
        default_value = "mistralai/mistral-7b-instruct"
    )]
    pub openrouter_model: String,

    #[arg(
        long,
        env = "OPENROUTER_BASE_URL",
        default_value = "https://openrouter.ai/api/v1"
    )]
    pub openrouter_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogStoreArgs {
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    #[arg(long, env = "SUPABASE_KEY", hide_env_values = true)]
    pub supabase_key: Option<String>,
}

impl From<Args> for BagcheckConfig {
    fn from(args: Args) -> Self {
        let log_store = match (args.log_store.supabase_url, args.log_store.supabase_key) {
            (Some(url), Some(api_key)) => Some(LogStoreConfig { url, api_key }),
            (None, None) => None,
            _ => {
                tracing::warn!(
                    "SUPABASE_URL and SUPABASE_KEY must both be set to enable usage logging"
                );
                None
            }
        };

        Self {
            llm: LlmConfig {
                api_key: args.llm.openrouter_api_key,
                model: args.llm.openrouter_model,
                base_url: args.llm.openrouter_base_url,
            },
            log_store,
        }
    }
}

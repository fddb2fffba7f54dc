use crate::domain::common::{BagcheckConfig, services::Service};
use crate::infrastructure::{llm::OpenRouterChatClient, usage_log::SupabaseUsageLogRepository};

pub type BagcheckService = Service<OpenRouterChatClient, SupabaseUsageLogRepository>;

pub fn create_service(config: BagcheckConfig) -> BagcheckService {
    let chat_client = OpenRouterChatClient::new(
        config.llm.api_key,
        config.llm.model,
        config.llm.base_url,
    );

    let usage_log_repository = config
        .log_store
        .map(|store| SupabaseUsageLogRepository::new(store.url, store.api_key));

    Service::new(chat_client, usage_log_repository)
}

use std::sync::Arc;
use std::time::Instant;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    item_check::{
        entities::ItemVerdict,
        ports::{ChatModelClient, ItemCheckService},
        prompt::SYSTEM_PROMPT,
        value_objects::CheckItemInput,
    },
    usage_log::{entities::UsageLogDraft, ports::UsageLogRepository},
};

impl<C, U> ItemCheckService for Service<C, U>
where
    C: ChatModelClient,
    U: UsageLogRepository + 'static,
{
    async fn check_item(&self, input: CheckItemInput) -> Result<ItemVerdict, CoreError> {
        let item_name = input.item_name.trim();
        if item_name.is_empty() {
            return Err(CoreError::Invalid("item_name must not be empty".to_string()));
        }

        let started = Instant::now();

        let raw_response = self
            .chat_client
            .complete(SYSTEM_PROMPT.to_string(), item_name.to_string())
            .await?;

        // The model's text is untrusted input: first require well-formed JSON,
        // then require the exact verdict shape. The two failures stay distinct.
        let parsed: serde_json::Value = serde_json::from_str(&raw_response).map_err(|e| {
            tracing::error!("model returned malformed JSON: {}", e);
            CoreError::MalformedModelResponse(e.to_string())
        })?;

        let verdict: ItemVerdict = serde_json::from_value(parsed).map_err(|e| {
            tracing::error!("model response did not match verdict shape: {}", e);
            CoreError::ModelResponseSchemaMismatch(e.to_string())
        })?;

        let response_time_ms = started.elapsed().as_millis() as i64;

        // Best-effort usage logging on a detached task. A slow or failing
        // store must never delay or fail the response.
        if let Some(repository) = &self.usage_log_repository {
            let repository = Arc::clone(repository);
            let draft = UsageLogDraft::new(
                item_name.to_string(),
                &verdict,
                response_time_ms,
                input.user_agent,
                input.ip_address,
            );
            tokio::spawn(async move {
                if let Err(e) = repository.create_record(draft).await {
                    tracing::warn!("failed to record usage log: {}", e);
                }
            });
        }

        Ok(verdict)
    }
}

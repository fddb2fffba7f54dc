use reqwest::{Client, RequestBuilder};
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    usage_log::{
        entities::{UsageLogDraft, UsageLogRecord},
        ports::UsageLogRepository,
    },
};

// The table pre-exists in the hosted store; its schema is owned there.
const LOG_TABLE: &str = "tsa_api_logs";

/// Usage-log repository backed by Supabase's PostgREST interface.
#[derive(Debug, Clone)]
pub struct SupabaseUsageLogRepository {
    base_url: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ItemNameRow {
    item_name: String,
}

impl SupabaseUsageLogRepository {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            client: Client::new(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, LOG_TABLE)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CoreError> {
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("log store error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Log store returned error: {} - {}",
                status, error_text
            )));
        }
        Ok(response)
    }
}

/// Extracts the total from a PostgREST `Content-Range` value like `0-9/42`
/// (or `*/0` for an empty table).
fn parse_content_range_total(content_range: &str) -> Option<i64> {
    content_range.rsplit('/').next()?.parse().ok()
}

impl UsageLogRepository for SupabaseUsageLogRepository {
    async fn create_record(&self, draft: UsageLogDraft) -> Result<(), CoreError> {
        let response = self
            .authorize(self.client.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(&draft)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("log store insert failed: {}", e);
                CoreError::ExternalServiceError(format!("Log store error: {}", e))
            })?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<UsageLogRecord>, CoreError> {
        let response = self
            .authorize(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("log store fetch failed: {}", e);
                CoreError::ExternalServiceError(format!("Log store error: {}", e))
            })?;

        let response = Self::ensure_success(response).await?;

        response.json().await.map_err(|e| {
            tracing::error!("failed to parse usage log records: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse log records: {}", e))
        })
    }

    async fn count(&self) -> Result<i64, CoreError> {
        let response = self
            .authorize(self.client.head(self.table_url()))
            .query(&[("select", "id")])
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("log store count failed: {}", e);
                CoreError::ExternalServiceError(format!("Log store error: {}", e))
            })?;

        let response = Self::ensure_success(response).await?;

        response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total)
            .ok_or_else(|| {
                CoreError::ExternalServiceError(
                    "Log store returned no usable Content-Range".to_string(),
                )
            })
    }

    async fn recent_item_names(&self, limit: u32) -> Result<Vec<String>, CoreError> {
        let limit = limit.to_string();
        let response = self
            .authorize(self.client.get(self.table_url()))
            .query(&[
                ("select", "item_name"),
                ("order", "created_at.desc"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("log store fetch failed: {}", e);
                CoreError::ExternalServiceError(format!("Log store error: {}", e))
            })?;

        let response = Self::ensure_success(response).await?;

        let rows: Vec<ItemNameRow> = response.json().await.map_err(|e| {
            tracing::error!("failed to parse recent item names: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse log records: {}", e))
        })?;

        Ok(rows.into_iter().map(|row| row.item_name).collect())
    }
}

use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    usage_log::entities::{UsageLogDraft, UsageLogRecord},
};

/// Repository trait for the append-only usage log.
///
/// `create_record` is the only write this system ever performs against the
/// store; the read methods exist for the offline viewer.
#[cfg_attr(test, mockall::automock)]
pub trait UsageLogRepository: Send + Sync {
    fn create_record(
        &self,
        draft: UsageLogDraft,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn fetch_all(&self) -> impl Future<Output = Result<Vec<UsageLogRecord>, CoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<i64, CoreError>> + Send;

    fn recent_item_names(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

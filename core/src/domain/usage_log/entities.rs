use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::item_check::entities::ItemVerdict;

/// Insert payload for one usage-log row.
///
/// The row id and `created_at` are assigned by the store, so they only exist
/// on [`UsageLogRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLogDraft {
    pub item_name: String,
    pub carry_on: bool,
    pub checked_bag: bool,
    pub description: String,
    pub response_time_ms: i64,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLogRecord {
    pub id: i64,
    pub item_name: String,
    pub carry_on: bool,
    pub checked_bag: bool,
    pub description: String,
    pub response_time_ms: i64,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UsageLogDraft {
    pub fn new(
        item_name: String,
        verdict: &ItemVerdict,
        response_time_ms: i64,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> Self {
        Self {
            item_name,
            carry_on: verdict.carry_on,
            checked_bag: verdict.checked_bag,
            description: verdict.description.clone(),
            response_time_ms,
            user_agent,
            ip_address,
        }
    }
}

/// Coarse usage summary for the offline viewer: a total plus the most recent
/// item names (recency-limited, not a true frequency count).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageStats {
    pub total_calls: i64,
    pub recent_items: Vec<String>,
}

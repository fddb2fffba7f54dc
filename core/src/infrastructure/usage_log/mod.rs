pub mod repositories;

pub use repositories::supabase_usage_log_repository::SupabaseUsageLogRepository;

pub mod supabase_usage_log_repository;

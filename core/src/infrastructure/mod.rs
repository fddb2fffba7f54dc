pub mod llm;
pub mod usage_log;

//! Offline viewer for the usage log: dumps every record newest-first, then a
//! coarse usage summary (total calls + recent searches).

use anyhow::bail;
use bagcheck_api::args::LogStoreArgs;
use bagcheck_core::domain::usage_log::{ports::UsageLogRepository, value_objects::UsageStats};
use bagcheck_core::infrastructure::usage_log::SupabaseUsageLogRepository;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "view-logs", about = "Inspect bagcheck usage logs")]
struct ViewLogsArgs {
    #[command(flatten)]
    log_store: LogStoreArgs,

    /// How many recent item names to include in the summary.
    #[arg(long, default_value_t = 10)]
    recent: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = ViewLogsArgs::parse();

    let (Some(url), Some(key)) = (args.log_store.supabase_url, args.log_store.supabase_key) else {
        bail!("SUPABASE_URL and SUPABASE_KEY must be set");
    };

    let repository = SupabaseUsageLogRepository::new(url, key);

    let records = repository.fetch_all().await?;
    if records.is_empty() {
        println!("No logs found.");
    } else {
        println!("Found {} API call logs:", records.len());
        for (i, record) in records.iter().enumerate() {
            println!();
            println!(
                "{}. {}",
                i + 1,
                record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!("   item: {}", record.item_name);
            println!(
                "   carry-on: {}",
                if record.carry_on { "yes" } else { "no" }
            );
            println!(
                "   checked bag: {}",
                if record.checked_bag { "yes" } else { "no" }
            );
            println!("   description: {}", record.description);
            println!("   response time: {}ms", record.response_time_ms);
            if let Some(user_agent) = &record.user_agent {
                println!("   user agent: {}", user_agent);
            }
        }
    }

    let stats = UsageStats {
        total_calls: repository.count().await?,
        recent_items: repository.recent_item_names(args.recent).await?,
    };

    println!();
    println!("Usage summary:");
    println!("  total API calls: {}", stats.total_calls);
    if !stats.recent_items.is_empty() {
        println!("  recent searches: {}", stats.recent_items.join(", "));
    }

    Ok(())
}

use anagram_grouper::core::pipeline::parse_words;
use anagram_grouper::utils::{logger, validation::Validate};
use anagram_grouper::{CliConfig, GroupingEngine, GroupingPipeline, LocalStorage};
use clap::Parser;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting anagram-grouper CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if config.stdin {
        let mut buffer = Vec::new();
        tokio::io::stdin().read_to_end(&mut buffer).await?;

        // stdin 沒有副檔名，依純文字以空白切分
        match parse_words("stdin", &buffer) {
            Ok(words) => {
                tracing::debug!("Read {} words from stdin", words.len());
                config.words.extend(words);
            }
            Err(e) => {
                tracing::error!("❌ {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(e.exit_code());
            }
        }
    }

    let print_groups = config.print;
    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let sink = LocalStorage::new(config.output_path.clone());
    let pipeline = GroupingPipeline::new(LocalStorage::current_dir(), sink, config);
    let engine = GroupingEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(outcome) => {
            if print_groups {
                for group in &outcome.result.groups {
                    println!("{}", group.members.join(", "));
                }
            }
            tracing::info!(
                "✅ Grouped {} words into {} groups",
                outcome.result.total_words,
                outcome.result.groups.len()
            );
            println!("📁 Output saved to: {}", outcome.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Grouping failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use skillscope::client::{SkillTrendsClient, SkillTrendsHook, TrendsState};
use skillscope::trends::ranking::{course_search_url, top_trending};

const TOP_TRENDING: usize = 9;

#[derive(Parser)]
#[command(name = "trends-watch", about = "Poll /api/skills and print the trends dashboard")]
struct Cli {
    /// Base URL of a running skillscope server
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: String,
    /// Seconds between refreshes
    #[arg(long, default_value_t = 3600)]
    interval_secs: u64,
    /// Fetch once, print, and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let client = SkillTrendsClient::new(&cli.base_url)?;
    let hook = Arc::new(SkillTrendsHook::new(
        Arc::new(client),
        Duration::from_secs(cli.interval_secs),
    ));

    if cli.once {
        hook.refetch().await;
        print_dashboard(&hook.snapshot());
        return Ok(());
    }

    let mut updates = hook.subscribe();
    let mounted = hook.mount();
    info!("Watching {} every {}s", cli.base_url, cli.interval_secs);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                if !state.loading {
                    print_dashboard(&state);
                }
            }
            _ = &mut shutdown => {
                info!("Shutting down");
                break;
            }
        }
    }

    mounted.teardown();
    Ok(())
}

fn print_dashboard(state: &TrendsState) {
    if let Some(error) = &state.error {
        println!("! {error}");
    }

    let Some(data) = &state.data else {
        println!("No skill trends loaded");
        return;
    };

    println!();
    println!("{} (updated {})", data.article_title, data.last_updated);
    println!(
        "Data source: {} at {}",
        state.data_source.as_deref().unwrap_or("unknown"),
        state.last_updated.as_deref().unwrap_or("unknown")
    );

    println!("\nTop Trending Skills");
    for (rank, skill) in top_trending(&data.skills, TOP_TRENDING).iter().enumerate() {
        println!(
            "{:>2}. {:<40} {:<10} {:<14} {:<12} {}",
            rank + 1,
            skill.name,
            skill.difficulty,
            skill.time_to_learn,
            skill.growth,
            skill.salary
        );
        if let Some(url) = course_search_url(&skill.name) {
            println!("    {url}");
        }
    }

    println!("\nEmerging Technologies");
    for tech in &data.emerging_technologies {
        println!(
            "  - {} [{:?}, {:?} growth]: {}",
            tech.name,
            tech.maturity,
            tech.growth,
            tech.industries.join(", ")
        );
    }
}

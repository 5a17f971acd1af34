//! MediPredict CLI - developer tools for the prototype
//!
//! # Commands
//!
//! ```bash
//! medipredict serve                 # Serve frontend/dist (port 8080)
//! medipredict simulate              # Run the processing animation in the terminal
//! medipredict history --query ecg   # Search the mock history
//! medipredict routes                # Show the route table
//! ```

use clap::{Parser, Subcommand};
use medipredict::{
    config::ServeConfig, filter_history, mock, HistoryStats, Route, Schedule, SequenceEvent,
    SequenceHandle,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medipredict")]
#[command(about = "MediPredict prototype tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the built frontend with SPA fallback
    Serve {
        /// Port to listen on (default: MEDIPREDICT_PORT or 8080)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory with the trunk build (default: MEDIPREDICT_DIST_DIR or frontend/dist)
        #[arg(short, long)]
        dist: Option<PathBuf>,
    },

    /// Run the processing sequence in the terminal
    Simulate {
        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Search the mock prediction history
    History {
        /// Case-insensitive match on report type or condition
        #[arg(short, long, default_value = "")]
        query: String,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List client-side routes and their layouts
    Routes,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port, dist } => cmd_serve(port, dist).await,
        Commands::Simulate { json } => cmd_simulate(json).await,
        Commands::History { query, json } => cmd_history(&query, json),
        Commands::Routes => cmd_routes(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(port: Option<u16>, dist: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServeConfig::from_env()?.with_overrides(port, dist);
    medipredict::server::start_server(config).await?;
    Ok(())
}

async fn cmd_simulate(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = Schedule::processing();
    let stages = schedule.stages().to_vec();
    if !json {
        eprintln!("🧠 Analyzing your report ({} stages)\n", stages.len());
    }

    let (_handle, mut events) = SequenceHandle::spawn(schedule);
    let mut last_shown = -10.0;

    while let Some(event) = events.recv().await {
        if json {
            println!("{}", serde_json::to_string(&event)?);
            continue;
        }
        match event {
            SequenceEvent::StageStarted(i) => {
                eprintln!("⏳ {} - {}", stages[i].title, stages[i].description);
            }
            SequenceEvent::Progress(p) => {
                // One line per 10% is plenty in a terminal.
                if p - last_shown >= 10.0 || p >= 100.0 {
                    eprintln!("   {:>3.0}%", p);
                    last_shown = p;
                }
            }
            SequenceEvent::StageCompleted(i) => {
                eprintln!("✅ {} complete\n", stages[i].title);
            }
            SequenceEvent::Finished => {
                eprintln!("✨ Done! Next view: {}", Route::Results);
            }
        }
    }

    Ok(())
}

fn cmd_history(query: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let entries = filter_history(mock::history(), query);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let stats = HistoryStats::compute(mock::history());
    eprintln!(
        "📋 {} reports • {} low risk • {} avg. accuracy\n",
        stats.total,
        stats.low_risk,
        stats.average_accuracy_display()
    );

    if entries.is_empty() {
        eprintln!("No reports found for '{}'", query);
        return Ok(());
    }

    for entry in entries {
        println!(
            "  {:<20} {:<22} {:<16} {:<7} {:>5.1}%",
            entry.date_display(),
            entry.report_type,
            entry.disease,
            entry.risk_level.label(),
            entry.accuracy
        );
    }

    Ok(())
}

fn cmd_routes() -> Result<(), Box<dyn std::error::Error>> {
    for route in Route::ALL {
        println!("  {:<18} {:?}", route.path(), route.layout());
    }
    Ok(())
}

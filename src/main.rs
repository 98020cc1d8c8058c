use anyhow::{anyhow, Context};
use campus_portal::site::{generate_site, render_route};
use campus_portal::{PortalConfig, RecordStore, Route};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "campus-portal")]
#[command(about = "Campus Connect portal page set generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Generate {
        #[arg(long, default_value = "dist")]
        out: PathBuf,
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        now: Option<String>,
    },
    Page {
        route: String,
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        now: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            out,
            data,
            config,
            now,
        } => {
            let config = PortalConfig::load(config.as_deref()).context("load portal config")?;
            let store = load_store(data.as_deref());
            let now = resolve_now(now.as_deref())?;
            let written = generate_site(store.as_ref(), &config, now, &out)
                .context("generate portal page set")?;
            println!("Wrote {} pages to {}", written.len(), out.display());
        }
        Command::Page {
            route,
            data,
            config,
            now,
        } => {
            let config = PortalConfig::load(config.as_deref()).context("load portal config")?;
            let store = load_store(data.as_deref());
            let now = resolve_now(now.as_deref())?;
            let route = Route::parse(&route)?;
            print!("{}", render_route(&route, store.as_ref(), &config, now));
        }
    }

    Ok(())
}

fn load_store(data: Option<&std::path::Path>) -> Option<RecordStore> {
    match RecordStore::load(data) {
        Ok(store) => Some(store),
        Err(err) => {
            // Pages render their data-unavailable states instead of aborting.
            tracing::error!(error = %err, "failed to load record store");
            None
        }
    }
}

fn resolve_now(raw: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    match raw {
        Some(raw) => campus_portal::datetime::parse_date_time(raw)
            .ok_or_else(|| anyhow!("invalid --now value: {raw:?} (expected YYYY-MM-DDTHH:MM:SS)")),
        None => Ok(chrono::Local::now().naive_local()),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use feeder_doctor::{
    App, FileSource, HealthPolicy, ReportSource, Settings, StreamSource, Verdict,
};

/// Exit status when the feeder should be restarted.
const EXIT_RESTART: u8 = 2;
const EXIT_ERROR: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "feeder-doctor")]
#[command(about = "Interpret an ADS-B feeder status report and decide whether to restart it")]
#[command(version)]
struct Args {
    /// Path to a file holding the status report
    #[arg(short, long, conflicts_with = "stdin")]
    file: Option<PathBuf>,

    /// Read the status report from stdin
    #[arg(long, conflicts_with_all = ["file", "watch"])]
    stdin: bool,

    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep polling the status file and report verdict changes
    #[arg(short, long, conflicts_with = "export")]
    watch: bool,

    /// Refresh interval in seconds (only used with --watch)
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Export current state to JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Print the full JSON document instead of a summary line
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(Verdict::Keep) => ExitCode::SUCCESS,
        Ok(Verdict::Restart) => ExitCode::from(EXIT_RESTART),
        Err(e) => {
            eprintln!("feeder-doctor: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn run(args: Args) -> Result<Verdict> {
    let settings = Settings::load(args.config.as_deref()).context("loading settings")?;
    let policy = settings.health_policy();
    let refresh = Duration::from_secs(args.refresh.unwrap_or(settings.refresh_secs).max(1));

    let mut app = if args.stdin {
        app_from_stream(StreamSource::spawn(tokio::io::stdin(), "stdin"), policy).await?
    } else {
        let path = args
            .file
            .clone()
            .or(settings.status_file)
            .ok_or_else(|| anyhow!("no status report given; use --file, --stdin or set status_file"))?;
        let mut app = App::new(Box::new(FileSource::new(path)), policy);
        if !app.reload_data() {
            let err = app.load_error.as_deref().unwrap_or("no report available");
            return Err(anyhow!("{}: {}", app.source_description(), err));
        }
        app
    };

    info!("read report from {}", app.source_description());
    output(&app, &args)?;

    if args.watch {
        watch(&mut app, &args, refresh).await?;
    }

    app.verdict()
        .ok_or_else(|| anyhow!("no report was interpreted"))
}

/// Wait for the one report a stream delivers and interpret it.
async fn app_from_stream(mut source: StreamSource, policy: HealthPolicy) -> Result<App> {
    let text = source.recv().await.ok_or_else(|| {
        anyhow!(
            "reading {}: {}",
            source.description(),
            source.error().unwrap_or("no report received")
        )
    })?;
    let mut app = App::new(Box::new(source), policy);
    if !app.accept_report(&text) {
        let err = app.load_error.as_deref().unwrap_or("no report available");
        return Err(anyhow!("{}: {}", app.source_description(), err));
    }
    Ok(app)
}

/// Poll the source until interrupted, printing each new report.
async fn watch(app: &mut App, args: &Args, refresh: Duration) -> Result<()> {
    info!("watching {} every {:?}", app.source_description(), refresh);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, stopping watch");
                return Ok(());
            }
            _ = tokio::time::sleep(refresh) => {}
        }

        if app.reload_data() {
            output(app, args)?;
        } else if let Some(err) = &app.load_error {
            warn!("{}: {}", app.source_description(), err);
        }
    }
}

fn output(app: &App, args: &Args) -> Result<()> {
    let Some(data) = &app.data else {
        return Ok(());
    };

    if let Some(path) = &args.export {
        app.export_state(path)?;
        println!("Exported feeder state to: {}", path.display());
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&data.to_json()?)?);
    } else {
        println!("{}", data.summary_line());
    }
    Ok(())
}

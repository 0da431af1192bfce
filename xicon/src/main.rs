use anyhow::Result;
use appiconset::{AppIconSet, ICON_SPECS};
use clap::Parser;
use std::path::PathBuf;
use task::TaskRunner;

mod task;

const DEFAULT_OUT_DIR: &str = "Soul AI/Assets.xcassets/AppIcon.appiconset";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Directory the icon set is written to
    #[clap(default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
    /// Keep the progress line of every step
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("XICON_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let span = tracing::info_span!("generate", out_dir = %args.out_dir.display());
    let _enter = span.enter();
    let mut runner = TaskRunner::new(4, args.verbose);

    runner.start_task("Render base icon");
    let mut set = AppIconSet::new(&args.out_dir)?;
    set.add_base()?;
    runner.end_task();

    runner.start_task(format!("Scale {} icons", ICON_SPECS.len()));
    set.add_scaled()?;
    runner.end_task();

    runner.start_task("Write Contents.json");
    let icon_set = set.finish()?;
    runner.end_task();

    runner.start_task("Verify icon set");
    appiconset::verify_icon_set(&icon_set.dir)?;
    runner.end_task();

    println!("App icon set generated successfully!");
    Ok(())
}

use clap::Parser;
use slider_demo::{run, Args};

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let changes = run(&args)?;
    log::info!("{} selection changes", changes.len());
    Ok(())
}

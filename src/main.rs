use anyhow::Context;
use clap::Parser;
use subscriber_report::{
    cli::Args,
    configuration::get_configuration,
    source::CsvSource,
    telemetry::{get_subscriber, init_subscriber},
};

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    let config = get_configuration().context("Failed to read configuration")?;

    let subscriber = get_subscriber(
        "subscriber-report".into(),
        config.telemetry.level.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber)?;

    let format = args.format.unwrap_or(config.report.format);
    let sort_descending = args.sort_descending(config.report.sort_descending);

    let subscribers = CsvSource::from_path(&args.path)
        .and_then(CsvSource::parse)
        .with_context(|| format!("Failed to load subscribers from {}", args.path.display()))?;

    println!("{}", subscribers.render(format, sort_descending));
    Ok(())
}

use std::error::Error;

use clap::Parser;
use simple_logger::SimpleLogger;

use climate_impact::report::run_batch;

const ABOUT: &'static str = r#"Computes the climate impact of every project of a CSV
(one project per row) and writes one row of impacts per project.
Rows whose "after" columns are empty use the default modal shift of their project type.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// CSV of projects
    #[arg(short, long)]
    input: String,
    /// CSV to write the impacts to
    #[arg(short, long, default_value = "impacts.csv")]
    output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();

    let data = std::fs::read(&cli.input)?;
    let rows = run_batch(&data)?;
    log::info!("Projects computed: {}", rows.len());

    let net_negative = rows
        .iter()
        .filter(|row| row.total_lifetime_benefit_kg_co2e < 0.0)
        .count();
    if net_negative > 0 {
        log::warn!("{net_negative} projects have a net-negative lifetime benefit");
    }

    std::fs::write(&cli.output, climate_impact::csv::serialize(rows.iter())?)?;
    log::info!("Impacts written to {}", cli.output);
    Ok(())
}

use std::error::Error;

use clap::Parser;
use simple_logger::SimpleLogger;

use climate_impact::*;

#[derive(clap::ValueEnum, Debug, Clone, PartialEq)]
enum Output {
    Csv,
    Markdown,
    All,
}

const ABOUT: &'static str = r#"Computes the climate impact of a transportation project and writes:
* `climate-impact-analysis.csv`, with the impacts per category
* `climate-impact-summary.md`, with a summary of the benefits and a lifecycle assessment
The project is read from a JSON file; absent fields take default values.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// Path to the JSON project record. Defaults are used when not provided.
    #[arg(short, long)]
    project: Option<String>,
    /// Directory to write the reports to
    #[arg(short, long, default_value = ".")]
    output: String,
    /// Which reports to write
    #[arg(long, value_enum, default_value_t=Output::All)]
    format: Output,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();

    let session = match &cli.project {
        Some(path) => {
            log::info!("Loading project from {path}");
            Session::from_record(&load_project_record(path)?)
        }
        None => Session::default(),
    };
    let params = session.parameters();
    log::info!(
        "{} of {} m² in {:?}",
        params.project_type.label(),
        params.area_sq_m(),
        params.region
    );

    let results = session.results();
    log::info!(
        "Total lifetime benefit: {:.2} kg CO2e",
        results.total_lifetime_benefit_kg_co2e()
    );

    std::fs::create_dir_all(&cli.output)?;
    if cli.format != Output::Markdown {
        let path = format!("{}/climate-impact-analysis.csv", cli.output);
        std::fs::write(&path, report::csv(params, &results)?)?;
        log::info!("Analysis written to {path}");
    }
    if cli.format != Output::Csv {
        let path = format!("{}/climate-impact-summary.md", cli.output);
        let date = time::OffsetDateTime::now_utc().date().to_string();
        std::fs::write(&path, summary::render(params, &results, &date)?)?;
        log::info!("Summary written to {path}");
    }

    Ok(())
}

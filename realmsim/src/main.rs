use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod loader;
mod report;

#[derive(Parser, Debug)]
#[command(author, version, about = "Evaluate realm rules scenarios", long_about = None)]
struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a scenario file and print the results
    Report {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Rules config JSON file
        #[arg(long, env = "REALMSIM_CONFIG")]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print static game tables as JSON
    Tables {
        /// Table to print (all tables when omitted)
        #[arg(long, value_enum)]
        name: Option<TableName>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
enum TableName {
    Buildings,
    Tradegoods,
    Ideas,
    Nations,
    Provinces,
    Rebels,
    AiPersonalities,
    Ages,
    Policies,
    SubjectTypes,
    PeaceDemands,
    MapModes,
    Achievements,
}

fn table_json(name: TableName) -> Result<serde_json::Value> {
    use realmdata::*;
    let value = match name {
        TableName::Buildings => serde_json::to_value(buildings::BUILDINGS)?,
        TableName::Tradegoods => serde_json::to_value(tradegoods::TRADE_GOODS)?,
        TableName::Ideas => serde_json::to_value(ideas::IDEA_GROUPS)?,
        TableName::Nations => serde_json::to_value(nations::NATIONS)?,
        TableName::Provinces => serde_json::to_value(provinces::PROVINCES)?,
        TableName::Rebels => serde_json::to_value(rebels::REBELS)?,
        TableName::AiPersonalities => serde_json::to_value(ai_personalities::AI_PERSONALITIES)?,
        TableName::Ages => serde_json::to_value(ages::AGES)?,
        TableName::Policies => serde_json::to_value(policies::POLICIES)?,
        TableName::SubjectTypes => serde_json::to_value(subject_types::SUBJECT_TYPES)?,
        TableName::PeaceDemands => serde_json::to_value(peace_demands::PEACE_DEMANDS)?,
        TableName::MapModes => serde_json::to_value(map_modes::MAP_MODES)?,
        TableName::Achievements => serde_json::to_value(realmsim_core::achievements::ACHIEVEMENTS)?,
    };
    Ok(value)
}

fn run_tables(name: Option<TableName>) -> Result<()> {
    let value = match name {
        Some(name) => table_json(name)?,
        None => {
            let mut all = serde_json::Map::new();
            for name in TableName::value_variants() {
                let key = name
                    .to_possible_value()
                    .map(|v| v.get_name().to_string())
                    .unwrap_or_else(|| format!("{name:?}"));
                all.insert(key, table_json(*name)?);
            }
            serde_json::Value::Object(all)
        }
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn run_report(scenario: PathBuf, config: Option<PathBuf>, json: bool) -> Result<()> {
    let config = loader::load_config(config.as_deref())?;
    let scenario = loader::load_scenario(&scenario)?;
    let report = report::build_report(&scenario, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let text = report::render_text(&report, &config).context("Failed to render report")?;
        print!("{text}");
    }
    Ok(())
}

fn main() -> Result<()> {
    // Try ensuring .env is loaded if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    log::info!("Starting realmsim...");

    match args.command {
        Commands::Report {
            scenario,
            config,
            json,
        } => run_report(scenario, config, json),
        Commands::Tables { name } => run_tables(name),
    }
}

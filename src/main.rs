//! CLI entry point for the congress aging tool.
//!
//! Loads the member dataset once, then renders one of the dashboard's
//! aggregate tables (or all of them, with `export`) as CSV or JSON.

mod infra;
mod services;

use crate::infra::wikipedia::client::WikipediaClient;
use crate::services::encyclopedia::summarize;
use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use congress_aging::config::Settings;
use congress_aging::fetch::BasicClient;
use congress_aging::loader::load_dataset;
use congress_aging::model::{Chamber, Dataset, Party};
use congress_aging::output::{emit, print_pretty, write_json, write_json_file};
use congress_aging::views::histogram::DEFAULT_BINS;
use congress_aging::views::options::DEFAULT_OPTION;
use congress_aging::views::types::{ExportEntry, ExportIndex};
use congress_aging::views::{
    Breakdown, FilterSelection, Selection, age_histogram, average_age_over_time, filter_members,
    filter_options, generation_composition, new_vs_returning, state_session_averages,
};
use serde::Serialize;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "congress_aging")]
#[command(about = "Age and generation trends of US Congress members", long_about = None)]
struct Cli {
    /// Dataset path or URL (overrides CONGRESS_DATA_URL)
    #[arg(long, global = true, value_name = "FILE_OR_URL")]
    data: Option<String>,

    /// Party code lookup CSV (overrides PARTY_CODES_PATH)
    #[arg(long, global = true, value_name = "FILE")]
    party_codes: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum SplitBy {
    Party,
    Chamber,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a short summary of the loaded dataset
    Summary,
    /// Average age and chamber counts per state and congress
    States {
        /// CSV file to write (JSON to stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Generational make-up of each congress
    Generations {
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Average age per congress, optionally split by party or chamber
    AgeTrend {
        #[arg(long, value_enum)]
        by: Option<SplitBy>,

        /// Series to draw: Combined, or category names (Democrat, Republican, House, Senate)
        #[arg(short, long, value_delimiter = ',', default_value = "Combined")]
        select: Vec<String>,

        #[arg(short, long)]
        output: Option<String>,
    },
    /// Average age of new vs returning members per congress
    NewVsReturning {
        #[arg(long, value_enum)]
        by: Option<SplitBy>,

        #[arg(short, long, value_delimiter = ',', default_value = "Combined")]
        select: Vec<String>,

        #[arg(short, long)]
        output: Option<String>,
    },
    /// Filter member rows; "Default" leaves a field unconstrained
    Filter {
        #[arg(long, default_value = DEFAULT_OPTION)]
        congress: String,

        #[arg(long, default_value = DEFAULT_OPTION)]
        chamber: String,

        #[arg(long, default_value = DEFAULT_OPTION)]
        state: String,

        #[arg(long, default_value = DEFAULT_OPTION)]
        party: String,

        #[arg(long, default_value_t = congress_aging::views::filter::AGE_RANGE_MIN)]
        min_age: f64,

        #[arg(long, default_value_t = congress_aging::views::filter::AGE_RANGE_MAX)]
        max_age: f64,

        /// Look up the member in this (0-based) row of the result on Wikipedia
        #[arg(long)]
        select_row: Option<usize>,

        #[arg(short, long)]
        output: Option<String>,
    },
    /// Resolve a party code to its name
    Party {
        code: i64,
    },
    /// List the values available to each filter
    Options,
    /// Age distribution of all member rows
    Histogram {
        #[arg(short, long, default_value_t = DEFAULT_BINS)]
        bins: usize,

        #[arg(short, long)]
        output: Option<String>,
    },
    /// Look up a member on Wikipedia by bioname ("LAST, First")
    Lookup {
        bioname: String,
    },
    /// Write every chart table as JSON into a directory, with an index
    Export {
        #[arg(short = 'd', long, default_value = "export")]
        output_dir: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let settings = Settings::from_env().with_overrides(cli.data, cli.party_codes);

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = Path::new(&settings.log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&settings.log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("congress_aging.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    // Lookups need no dataset
    if let Commands::Lookup { bioname } = &cli.command {
        let wiki = WikipediaClient::new(&settings.user_agent)?;
        println!("{}", summarize(&wiki, bioname).await);
        return Ok(());
    }

    let client = BasicClient::new().context("Failed to build HTTP client")?;
    let data = load_dataset(
        &client,
        &settings.data_source,
        &settings.party_codes_path,
    )
    .await
    .with_context(|| format!("Failed to load dataset from {}", settings.data_source))?;

    match cli.command {
        Commands::Summary => {
            let options = filter_options(&data);
            info!(
                members = data.members().len(),
                congresses = options.congresses.len(),
                first_congress = options.congresses.first().copied(),
                last_congress = options.congresses.last().copied(),
                states = options.states.len(),
                parties = options.party_codes.len(),
                "Dataset summary"
            );
        }
        Commands::States { output } => {
            emit(&state_session_averages(&data), output.as_deref())?;
        }
        Commands::Generations { output } => {
            emit(&generation_composition(&data), output.as_deref())?;
        }
        Commands::AgeTrend { by, select, output } => {
            let breakdown = breakdown(by, &select)?;
            emit(
                &average_age_over_time(&data, breakdown.as_ref()),
                output.as_deref(),
            )?;
        }
        Commands::NewVsReturning { by, select, output } => {
            let breakdown = breakdown(by, &select)?;
            emit(&new_vs_returning(&data, breakdown.as_ref()), output.as_deref())?;
        }
        Commands::Filter {
            congress,
            chamber,
            state,
            party,
            min_age,
            max_age,
            select_row,
            output,
        } => {
            let selection = FilterSelection {
                congress: parse_choice(&congress).context("--congress")?,
                chamber: parse_choice(&chamber).context("--chamber")?,
                state: parse_choice(&state).context("--state")?,
                party: parse_choice(&party).context("--party")?,
                age_range: (min_age, max_age),
            };
            if let Some(code) = selection.party {
                info!(party_code = code, party = data.party_name(code), "Party filter");
            }

            let rows = filter_members(&data, &selection);
            info!(rows = rows.len(), "Filter applied");
            emit(&rows, output.as_deref())?;

            if let Some(idx) = select_row {
                let Some(member) = rows.get(idx) else {
                    bail!("row {idx} is out of range ({} rows matched)", rows.len());
                };
                print_pretty(member);
                info!(bioname = %member.bioname, "Selected member");
                let wiki = WikipediaClient::new(&settings.user_agent)?;
                println!("{}", summarize(&wiki, &member.bioname).await);
            }
        }
        Commands::Party { code } => {
            println!("{}", data.party_name(code));
        }
        Commands::Options => {
            write_json(std::io::stdout().lock(), &filter_options(&data))?;
        }
        Commands::Histogram { bins, output } => {
            emit(&age_histogram(&data, bins), output.as_deref())?;
        }
        Commands::Lookup { .. } => {} // handled before loading
        Commands::Export { output_dir } => {
            export_all(&data, &settings.data_source, &output_dir)?;
        }
    }

    Ok(())
}

/// Builds the breakdown for a line chart from `--by` and `--select`.
fn breakdown(by: Option<SplitBy>, select: &[String]) -> Result<Option<Breakdown>> {
    let Some(by) = by else {
        return Ok(None);
    };
    let breakdown = match by {
        SplitBy::Party => Breakdown::Party(parse_selection(select)?),
        SplitBy::Chamber => Breakdown::Chamber(parse_selection(select)?),
    };
    Ok(Some(breakdown))
}

fn parse_selection<T: std::str::FromStr<Err = String>>(
    select: &[String],
) -> Result<Vec<Selection<T>>> {
    select
        .iter()
        .map(|s| s.trim().parse().map_err(anyhow::Error::msg))
        .collect()
}

/// Parses a filter dropdown value; [`DEFAULT_OPTION`] means unconstrained.
fn parse_choice<T: std::str::FromStr>(value: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    if value == DEFAULT_OPTION {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|e| anyhow::anyhow!("invalid value '{value}': {e}"))
}

/// Writes every chart table plus `index.json` into `output_dir`.
#[tracing::instrument(skip(data))]
fn export_all(data: &Dataset, source: &str, output_dir: &str) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;
    let dir = Path::new(output_dir);
    let mut views = Vec::new();

    let party_series = Breakdown::Party(Party::ALL.into_iter().map(Selection::Category).collect());
    let chamber_series =
        Breakdown::Chamber(Chamber::ALL.into_iter().map(Selection::Category).collect());

    export_view(dir, "state_averages", &state_session_averages(data), &mut views)?;
    export_view(dir, "generations", &generation_composition(data), &mut views)?;
    export_view(dir, "age_trend", &average_age_over_time(data, None), &mut views)?;
    export_view(
        dir,
        "age_trend_by_party",
        &average_age_over_time(data, Some(&party_series)),
        &mut views,
    )?;
    export_view(
        dir,
        "age_trend_by_chamber",
        &average_age_over_time(data, Some(&chamber_series)),
        &mut views,
    )?;
    export_view(dir, "new_vs_returning", &new_vs_returning(data, None), &mut views)?;
    export_view(
        dir,
        "new_vs_returning_by_party",
        &new_vs_returning(data, Some(&party_series)),
        &mut views,
    )?;
    export_view(
        dir,
        "new_vs_returning_by_chamber",
        &new_vs_returning(data, Some(&chamber_series)),
        &mut views,
    )?;
    export_view(dir, "age_histogram", &age_histogram(data, DEFAULT_BINS), &mut views)?;

    let index = ExportIndex {
        generated_at: Utc::now(),
        source: source.to_string(),
        members: data.members().len(),
        views,
    };
    write_json_file(dir.join("index.json"), &index)?;

    info!(output_dir, views = index.views.len(), "Export complete");
    Ok(())
}

fn export_view<T: Serialize>(
    dir: &Path,
    view: &str,
    rows: &[T],
    index: &mut Vec<ExportEntry>,
) -> Result<()> {
    let file = format!("{view}.json");
    write_json_file(dir.join(&file), &rows)?;
    index.push(ExportEntry {
        view: view.to_string(),
        file,
        rows: rows.len(),
    });
    Ok(())
}

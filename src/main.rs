use analytics::{AllTimeStatEngine, FilterOptions, StatColumn, StatValue, YearStatEngine};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use core_types::League;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use uuid::Uuid;

/// The main entry point for the leaguestat application.
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Year(args) => handle_year(args),
        Commands::AllTime(args) => handle_all_time(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Season and all-time statistics for a fantasy league.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Statistics of one season, one row per team.
    Year(YearArgs),
    /// Statistics across seasons, one row per owner.
    AllTime(AllTimeArgs),
}

/// Arguments shared by every command.
#[derive(Args)]
struct CommonArgs {
    /// Path to the league JSON document.
    #[arg(long, short)]
    league: PathBuf,

    /// Optional TOML file with SSL weights. Defaults to ./leaguestat.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the stat sheet as JSON instead of a table.
    #[arg(long)]
    json: bool,

    #[arg(long)]
    only_regular_season: bool,

    #[arg(long)]
    only_post_season: bool,

    #[arg(long)]
    only_championship: bool,

    /// First week to include (inclusive).
    #[arg(long)]
    week_start: Option<i64>,

    /// Last week to include (inclusive).
    #[arg(long)]
    week_end: Option<i64>,
}

impl CommonArgs {
    fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            only_post_season: self.only_post_season,
            only_regular_season: self.only_regular_season,
            only_championship: self.only_championship,
            week_number_start: self.week_start,
            week_number_end: self.week_end,
            ..Default::default()
        }
    }
}

#[derive(Args)]
struct YearArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// The season to compute.
    #[arg(long)]
    year: u32,
}

#[derive(Args)]
struct AllTimeArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// First season of the range; the week start applies to this season.
    #[arg(long)]
    year_start: Option<i64>,

    /// Last season of the range; the week end applies to this season.
    #[arg(long)]
    year_end: Option<i64>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_year(args: YearArgs) -> Result<()> {
    let league = read_league(&args.common.league)?;
    let config = configuration::load_config(args.common.config.as_deref())?;
    let year = league
        .year(args.year)
        .with_context(|| format!("League '{}' has no year {}", league.name, args.year))?;

    let engine = YearStatEngine::new(config.ssl);
    let sheet = engine.stat_sheet(year, &args.common.filter_options())?;
    tracing::info!(year = args.year, teams = year.teams.len(), "Computed year stat sheet");

    if args.common.json {
        println!("{}", serde_json::to_string_pretty(&sheet)?);
        return Ok(());
    }

    let rows = year
        .teams
        .iter()
        .map(|team| (team.id, team.name.clone()))
        .collect::<Vec<_>>();
    println!("{}", render_table("Team", &rows, &sheet.columns()));
    Ok(())
}

fn handle_all_time(args: AllTimeArgs) -> Result<()> {
    let league = read_league(&args.common.league)?;
    let config = configuration::load_config(args.common.config.as_deref())?;

    let options = FilterOptions {
        year_number_start: args.year_start,
        year_number_end: args.year_end,
        ..args.common.filter_options()
    };
    let engine = AllTimeStatEngine::new(config.ssl);
    let sheet = engine.stat_sheet(&league, &options)?;
    tracing::info!(
        from = sheet.year_number_start,
        to = sheet.year_number_end,
        owners = league.owners.len(),
        "Computed all-time stat sheet"
    );

    if args.common.json {
        println!("{}", serde_json::to_string_pretty(&sheet)?);
        return Ok(());
    }

    let rows = league
        .owners
        .iter()
        .map(|owner| (owner.id, owner.name.clone()))
        .collect::<Vec<_>>();
    println!("{}", render_table("Owner", &rows, &sheet.columns()));
    Ok(())
}

/// Reads and validates a league document.
fn read_league(path: &Path) -> Result<League> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read league file {}", path.display()))?;
    let league: League = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse league file {}", path.display()))?;
    league.validate().context("League data failed validation")?;
    tracing::debug!(name = %league.name, years = league.years.len(), "Loaded league");
    Ok(league)
}

// ==============================================================================
// Rendering
// ==============================================================================

/// One row per entity, one column per statistic.
fn render_table(label: &str, rows: &[(Uuid, String)], columns: &[StatColumn]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![label.to_string()];
    header.extend(columns.iter().map(|(name, _)| name.to_string()));
    table.set_header(header);

    for (id, name) in rows {
        let mut row = vec![name.clone()];
        row.extend(
            columns
                .iter()
                .map(|(_, values)| values.get(id).map_or_else(String::new, format_value)),
        );
        table.add_row(row);
    }
    table
}

fn format_value(value: &StatValue) -> String {
    match value {
        StatValue::Count(n) => n.to_string(),
        StatValue::Decimal(d) => d.round_dp(3).normalize().to_string(),
        StatValue::Absent => "-".to_string(),
    }
}

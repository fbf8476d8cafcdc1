//! Unlock.fit CLI
//!
//! Command-line frontend for the weight tracker:
//! - Record entries (directly or through a saved form draft)
//! - List entries and plot weight over time
//! - Dashboard counts and per-category details
//! - Import/Export CSV

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use unlockfit::chart::{table_rows, EntryOrder, WeightSeries};
use unlockfit::config::{generate_default_config, Config};
use unlockfit::csv_io;
use unlockfit::dashboard::{details_for, CategoryCounts};
use unlockfit::store::{EntryRepository, FileBackend};
use unlockfit::tracker::{Category, DraftField, EntryDraft, WeightUnit};

#[derive(Parser)]
#[command(name = "unlockfit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Unlock.fit Weight Tracker")]
#[command(long_about = "Track weight and height measurements, classify them by BMI category,\nand review the breakdown on a dashboard.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory (overrides the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Entries(EntryCommand),

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Commands that work on the stored entries and draft
#[derive(Subcommand)]
pub enum EntryCommand {
    /// Record a measurement
    Add {
        /// Name of the person measured
        #[arg(long)]
        name: String,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
        /// Weight, in --unit
        #[arg(long)]
        weight: String,
        /// Height in centimeters
        #[arg(long)]
        height: String,
        /// kg or lbs (default: from config)
        #[arg(short, long)]
        unit: Option<WeightUnit>,
    },

    /// Show the entries table
    List {
        /// submission or date (default: from config)
        #[arg(short, long)]
        order: Option<EntryOrder>,
    },

    /// Plot weight over time
    Chart {
        /// submission or date (default: from config)
        #[arg(short, long)]
        order: Option<EntryOrder>,
        /// Display unit (default: from config)
        #[arg(short, long)]
        unit: Option<WeightUnit>,
    },

    /// Counts by colour, and details for one category
    Dashboard {
        /// underweight|normal|overweight (or red|green|orange)
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Work with the saved form draft
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },

    /// Export entries as CSV
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import entries from CSV
    Import {
        /// Path to CSV file
        path: PathBuf,
        /// Unit for rows without one (default: from config)
        #[arg(short, long)]
        unit: Option<WeightUnit>,
        /// Dry run (don't actually import)
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
pub enum DraftAction {
    /// Print the draft
    Show,
    /// Set one field (name, date, weight, height)
    Set { field: DraftField, value: String },
    /// Switch the draft between kg and lbs
    ToggleUnit,
    /// Validate the draft and record it
    Submit,
    /// Discard the draft
    Clear,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.to_string_lossy().to_string();
    }

    init_logging(&config);

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }
        Commands::Entries(command) => run(command, &config, cli.format),
    }
}

fn open_repository(config: &Config) -> anyhow::Result<EntryRepository<FileBackend>> {
    let data_dir = config.data_dir();
    let backend = FileBackend::open(&data_dir)
        .with_context(|| format!("cannot open data directory {:?}", data_dir))?;
    let repo = EntryRepository::new(backend);
    tracing::debug!("Data directory: {:?}", repo.backend().dir());
    Ok(repo)
}

fn run(command: EntryCommand, config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let repo = open_repository(config)?;
    let display = &config.display;

    match command {
        EntryCommand::Add {
            name,
            date,
            weight,
            height,
            unit,
        } => {
            let date =
                date.unwrap_or_else(|| chrono::Local::now().date_naive().to_string());
            let draft = EntryDraft::default()
                .with(DraftField::Name, name)
                .with(DraftField::Date, date)
                .with(DraftField::Weight, weight)
                .with(DraftField::Height, height)
                .unit(unit.unwrap_or(display.unit));

            let entry = draft.validate()?;
            let total = repo.append(entry.clone())?;
            println!(
                "Recorded {} on {}: {} {} ({}), {} entries",
                entry.name, entry.date, entry.weight, entry.unit, entry.category, total
            );
        }

        EntryCommand::List { order } => {
            let entries = repo.load()?;
            let order = order.unwrap_or(display.order);

            match format {
                OutputFormat::Json => {
                    let rows = table_rows(&entries, order, display.ideal_weight);
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
                OutputFormat::Csv => {
                    let ordered: Vec<_> = unlockfit::chart::ordered(&entries, order)
                        .into_iter()
                        .cloned()
                        .collect();
                    csv_io::export(&ordered, std::io::stdout().lock())?;
                }
                OutputFormat::Table => {
                    if entries.is_empty() {
                        println!("No entries yet.");
                        println!();
                        println!("Record your first one with:");
                        println!("  unlockfit add --name Ana --weight 70 --height 170");
                    } else {
                        print_table(&table_rows(&entries, order, display.ideal_weight));
                    }
                }
            }
        }

        EntryCommand::Chart { order, unit } => {
            let entries = repo.load()?;
            let series = WeightSeries::build(
                &entries,
                order.unwrap_or(display.order),
                unit.unwrap_or(display.unit),
            );

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&series)?),
                _ => print_chart(&series),
            }
        }

        EntryCommand::Dashboard { category } => {
            let entries = repo.load()?;
            let counts = CategoryCounts::tally(&entries);
            let details = details_for(&entries, category);

            match format {
                OutputFormat::Json => {
                    let body = serde_json::json!({
                        "counts": counts,
                        "selected": category,
                        "details": details,
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                _ => {
                    println!("Customer Counts by Color:");
                    for &c in Category::all() {
                        let marker = if Some(c) == category { " *" } else { "" };
                        println!("  {:<7} {:>4}{}", capitalize(c.color()), counts.get(c), marker);
                    }
                    println!();
                    println!("Customer Details:");
                    if details.is_empty() {
                        println!("  No customers found");
                    }
                    for d in details {
                        println!();
                        println!("  Name: {}", d.name);
                        println!("  Current Weight: {:.2} kg", d.weight_kg);
                        println!("  Ideal Weight: {:.2} kg", d.ideal_weight);
                        println!("  Advice: {}", d.advice);
                    }
                }
            }
        }

        EntryCommand::Draft { action } => {
            let mut draft = repo.load_draft_or(display.unit)?;

            match action {
                DraftAction::Show => print_draft(&draft),
                DraftAction::Set { field, value } => {
                    draft.set(field, value);
                    repo.save_draft(&draft)?;
                    print_draft(&draft);
                }
                DraftAction::ToggleUnit => {
                    draft.unit = draft.unit.toggle();
                    repo.save_draft(&draft)?;
                    print_draft(&draft);
                }
                DraftAction::Submit => {
                    let entry = repo.submit(&draft)?;
                    println!(
                        "Recorded {} on {}: {} {} ({})",
                        entry.name, entry.date, entry.weight, entry.unit, entry.category
                    );
                }
                DraftAction::Clear => {
                    repo.clear_draft()?;
                    println!("Draft cleared");
                }
            }
        }

        EntryCommand::Export { output } => {
            let entries = repo.load()?;
            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)?;
                    let count = csv_io::export(&entries, file)?;
                    println!("Exported {} entries to {:?}", count, path);
                }
                None => {
                    csv_io::export(&entries, std::io::stdout().lock())?;
                }
            }
        }

        EntryCommand::Import {
            path,
            unit,
            dry_run,
        } => {
            if !path.exists() {
                anyhow::bail!("File not found: {:?}", path);
            }

            let result = csv_io::import_path(&path, unit.unwrap_or(display.unit))?;

            println!("Import results:");
            println!("  Rows processed: {}", result.rows_processed);
            println!("  Rows failed: {}", result.rows_failed);

            if !result.errors.is_empty() {
                println!();
                println!("Errors (first 10):");
                for error in result.errors.iter().take(10) {
                    println!("  {}", error);
                }
            }

            if dry_run {
                println!();
                println!("(Dry run - no data was imported)");
            } else if !result.entries.is_empty() {
                let imported = result.entries.len();
                let total = repo.append_all(result.entries)?;
                println!();
                println!("  Imported: {} ({} entries total)", imported, total);
            }
        }

    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("unlockfit={}", config.logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn print_table(rows: &[unlockfit::TableRow]) {
    println!(
        "{:<20} {:<10} {:>10} {:>8} {:>12} {:<12}",
        "Name", "Date", "Weight", "Height", "Ideal Weight", "Category"
    );
    println!("{}", "-".repeat(77));

    for row in rows {
        println!(
            "{:<20} {:<10} {:>10} {:>8} {:>12.2} {:<12}",
            truncate(&row.name, 20),
            row.date,
            format!("{} {}", row.weight, row.unit),
            row.height,
            row.ideal_weight,
            row.category
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{}…", cut)
    }
}

fn print_chart(series: &WeightSeries) {
    const WIDTH: f64 = 40.0;

    let Some((min, max)) = series.display_bounds() else {
        println!("No data to plot");
        return;
    };

    println!("Weight Progress ({}), y-axis {:.1} .. {:.1}", series.unit, min, max);
    println!();
    for point in &series.points {
        let filled = ((point.weight - min) / (max - min) * WIDTH).round() as usize;
        println!(
            "{}  {:>7.1}  |{}",
            point.date,
            point.weight,
            "#".repeat(filled.max(1))
        );
    }
}

fn print_draft(draft: &EntryDraft) {
    println!("Name:   {}", draft.name);
    println!("Date:   {}", draft.date);
    println!("Weight: {} {}", draft.weight, draft.unit);
    println!("Height: {} cm", draft.height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_and_entry_commands_parse() {
        let cli = Cli::try_parse_from(["unlockfit", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { output: None }));

        let cli = Cli::try_parse_from(["unlockfit", "list", "--order", "date"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Entries(EntryCommand::List {
                order: Some(EntryOrder::Date)
            })
        ));

        let cli = Cli::try_parse_from(["unlockfit", "draft", "set", "weight", "70"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Entries(EntryCommand::Draft {
                action: DraftAction::Set {
                    field: DraftField::Weight,
                    ..
                }
            })
        ));
    }
}

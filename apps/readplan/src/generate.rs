use std::io::Write;

use anyhow::{Context, Result};
use rp_catalog::{Canon, Catalog, FileStore, load_books_csv};
use rp_core::Book;
use rp_output::{CsvWriter, PlanSummary, write_plan};
use rp_plan::{Plan, PlanBuilder, PlanStats};
use tracing::{info, warn};

use crate::cli::{GenerateArgs, SourceArgs, StatsArgs};
use crate::config::PlanConfig;

/// Run the `generate` subcommand.
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = PlanConfig::load(&args.source.config)?;
    let books = load_books(&config, &args.source)?;

    let (Some(days), Some(start)) = (config.duration, config.start_date()?) else {
        warn!("config has no \"duration\" and \"start\"; reporting totals only");
        return print_json(&PlanSummary::from_stats(PlanStats::of(&books)));
    };

    let plan = PlanBuilder::new(books)
        .days(days)
        .start(start)
        .advance_calendar(config.advance_calendar)
        .build()
        .context("failed to build reading plan")?;
    log_plan(&plan);

    #[cfg(feature = "sqlite")]
    {
        if let Some(path) = &args.sqlite {
            let mut writer = rp_output::SqliteWriter::new(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            write_plan(&mut writer, &plan)?;
            info!(path = %path.display(), "plan written to SQLite");
        }
    }

    if args.json {
        return print_json(&PlanSummary::from_plan(&plan)?);
    }

    let mut writer = CsvWriter::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    write_plan(&mut writer, &plan)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(path = %args.output.display(), "plan written");
    Ok(())
}

/// Run the `stats` subcommand.
pub fn stats(args: StatsArgs) -> Result<()> {
    let config = PlanConfig::load(&args.source.config)?;
    let books = load_books(&config, &args.source)?;
    print_json(&PlanSummary::from_stats(PlanStats::of(&books)))
}

fn load_books(config: &PlanConfig, source: &SourceArgs) -> Result<Vec<Book>> {
    if let Some(path) = &config.catalog {
        return load_books_csv(path).with_context(|| format!("failed to load {}", path.display()));
    }
    let mut catalog = Catalog::new(Canon, FileStore::new(&source.cache_dir));
    catalog
        .resolve(config.books.as_slice(), source.force)
        .context("failed to resolve book metadata")
}

fn log_plan(plan: &Plan) {
    if plan.degraded() {
        warn!(
            requested = plan.requested_days(),
            days = plan.days().len(),
            "fewer chapters than days; the plan reads one chapter a day"
        );
    }
    info!(
        chapters = plan.total_chapters(),
        verses = plan.total_verses(),
        chapters_per_day = plan.chapters_per_day(),
        verses_per_day = plan.verses_per_day(),
        "plan totals"
    );
}

fn print_json(summary: &PlanSummary) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", summary.to_json_pretty()?)?;
    Ok(())
}

//! Command execution, separated from process setup so it can be tested.

use std::io::Write;

use exoscope_catalog::{
    ArchiveQuery, Catalog, CatalogError, CatalogSource, JsonFileSource, NormalizedExoplanet,
    TransformOptions, ViewMode,
};
use exoscope_config::{ArchiveConfig, CliArgs, Config};

use crate::report;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("no input file; pass --input <rows.json> or use --print-url")]
    MissingInput,

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// The view selected by `--planet` or `--view`.
pub fn resolve_view(args: &CliArgs, config: &ArchiveConfig) -> ViewMode {
    match &args.planet {
        Some(planet) => ViewMode::Single(planet.clone()),
        None => ViewMode::from_label(&args.view, config),
    }
}

pub fn run(args: &CliArgs, config: &Config, out: &mut impl Write) -> Result<(), AppError> {
    let view = resolve_view(args, &config.archive);

    if args.print_url {
        let query = ArchiveQuery::new(view, &config.archive);
        writeln!(out, "{}", query.request_url(&config.archive))?;
        return Ok(());
    }

    let input = args.input.as_deref().ok_or(AppError::MissingInput)?;
    let rows = JsonFileSource::new(input).fetch(&view)?;
    let catalog = Catalog::from_records(&rows, &TransformOptions::from(&config.catalog));

    let selected: Vec<&NormalizedExoplanet> = if let Some(term) = &args.search {
        catalog.search(term, config.search.suggestion_limit)
    } else if let Some(n) = args.rank {
        catalog.most_habitable(n)
    } else {
        catalog.planets().iter().collect()
    };

    if let ViewMode::Single(name) = &view
        && selected.is_empty()
    {
        tracing::warn!("No data found for exoplanet: {name}");
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &selected)?;
        writeln!(out)?;
        return Ok(());
    }

    write!(out, "{}", report::format_table(&selected))?;
    if let ViewMode::Single(_) = view
        && let [planet] = selected.as_slice()
    {
        write!(out, "{}", report::format_breakdown(planet))?;
    }
    Ok(())
}

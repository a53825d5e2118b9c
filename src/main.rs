mod cli;

use std::path::PathBuf;

use clap::Parser;

use kronos_correlation::config::{self, AppSettings, OutputFormat, SortMode};
use kronos_correlation::dataset;
use kronos_correlation::state::session::MissionSession;
use kronos_correlation::ui::table::RowOptions;
use kronos_correlation::ui::{colors, legend, view};
use kronos_correlation::ColorSystem;

use crate::cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let directive = if cli.debug {
        "kronos_correlation=debug"
    } else {
        "kronos_correlation=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .init();

    let settings = config::load_settings();

    match cli.command {
        Commands::Render {
            datasets,
            format,
            sort,
            min_occurrences,
            keep_caches,
        } => {
            let options = RowOptions {
                min_occurrences: min_occurrences.unwrap_or(settings.min_occurrences),
                sort_mode: sort.unwrap_or(settings.sort_mode),
            };
            render(
                &datasets,
                format.unwrap_or(settings.output),
                &options,
                keep_caches,
            )?;
        }
        Commands::Legend {
            dataset: path,
            format,
        } => {
            let data = dataset::load_dataset(&path)?;
            let mut system = ColorSystem::new();
            let entries = legend::build_legend(&mut system, &data.cells);
            match format.unwrap_or(settings.output) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
                OutputFormat::Text => {
                    for line in legend::legend_lines(&entries) {
                        println!("{line}");
                    }
                }
            }
        }
        Commands::Color { points } => {
            let mut system = ColorSystem::new();
            let ordinals = system.assign_ordinals(&points);
            for point in &points {
                let color = system.resolve_color(point);
                let ordinal = ordinals
                    .get(point.as_str())
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<24} hash={:<10} ordinal={:<3} {} ({})",
                    point,
                    colors::hash_point(point),
                    ordinal,
                    color.name,
                    color.border
                );
            }
        }
        Commands::Settings {
            sort,
            min_occurrences,
            format,
        } => {
            update_settings(settings, sort, min_occurrences, format)?;
        }
    }

    Ok(())
}

fn render(
    paths: &[PathBuf],
    format: OutputFormat,
    options: &RowOptions,
    keep_caches: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = MissionSession::default();
    let mut views = Vec::with_capacity(paths.len());

    for path in paths {
        let data = dataset::load_dataset(path)?;
        if !keep_caches {
            session.enter_mission(&data.mission);
        }
        views.push(view::build_view(&mut session.colors, &data, options));
    }

    tracing::debug!("Point caches after render: {:?}", session.colors.stats());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&views)?),
        OutputFormat::Text => {
            let text: Vec<String> = views.iter().map(view::render_text).collect();
            print!("{}", text.join("\n"));
        }
    }
    Ok(())
}

fn update_settings(
    mut settings: AppSettings,
    sort: Option<SortMode>,
    min_occurrences: Option<u32>,
    format: Option<OutputFormat>,
) -> Result<(), Box<dyn std::error::Error>> {
    let changed = sort.is_some() || min_occurrences.is_some() || format.is_some();
    if let Some(sort) = sort {
        settings.sort_mode = sort;
    }
    if let Some(min) = min_occurrences {
        settings.min_occurrences = min;
    }
    if let Some(format) = format {
        settings.output = format;
    }
    if changed {
        config::save_settings(&settings)?;
        tracing::info!("Saved settings to {}", config::settings_path().display());
    }
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

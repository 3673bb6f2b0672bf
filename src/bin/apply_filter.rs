use log::{error, info};
use raster_convolve::config::{load_config, FilterToolConfig};
use raster_convolve::diagnostics::BatchEntry;
use raster_convolve::image::io::write_json_file;
use raster_convolve::{ApplyReport, ConvolutionEngine, Kernel, Raster};
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let kernel = config.kernel.build().map_err(|e| e.to_string())?;
    let engine = ConvolutionEngine::new(config.engine);
    info!(
        "{0}x{0} kernel, {1:?}, {2} inputs",
        kernel.size(),
        config.normalization,
        config.inputs.len()
    );

    let mut entries = Vec::with_capacity(config.inputs.len());
    for input in &config.inputs {
        let entry = match process(&config, &engine, &kernel, input) {
            Ok((output, report)) => {
                println!("Saved {} -> {}", input.display(), output.display());
                BatchEntry {
                    input: input.display().to_string(),
                    output: Some(output.display().to_string()),
                    error: None,
                    report: Some(report),
                }
            }
            Err(err) => {
                error!("skipping {}: {err}", input.display());
                BatchEntry {
                    input: input.display().to_string(),
                    output: None,
                    error: Some(err.to_string()),
                    report: None,
                }
            }
        };
        entries.push(entry);
    }

    if let Some(report_path) = &config.report {
        write_json_file(report_path, &entries).map_err(|e| e.to_string())?;
        println!("Saved report to {}", report_path.display());
    }

    let failed = entries.iter().filter(|e| e.error.is_some()).count();
    if failed > 0 {
        return Err(format!("{failed} of {} inputs failed", entries.len()));
    }
    Ok(())
}

fn process(
    config: &FilterToolConfig,
    engine: &ConvolutionEngine,
    kernel: &Kernel,
    input: &Path,
) -> raster_convolve::Result<(PathBuf, ApplyReport)> {
    let raster = if config.grayscale {
        Raster::open_grayscale(input)?
    } else {
        Raster::open(input)?
    };
    let (filtered, report) = engine.apply_with_report(&raster, kernel, config.normalization);
    let output = config.output_path(input);
    filtered.save(&output)?;
    Ok((output, report))
}

fn usage() -> String {
    "Usage: apply_filter <config.json>".to_string()
}

use crate::cli::BatchArgs;
use crate::config::build_config;
use crate::config::builder::BatchFlags;
use crate::error::Result;
use crate::output;
use crate::utils::progress::CliProgressHandler;
use nerfkit::engine::progress::ProgressReporter;
use nerfkit::workflows::batch::{self, load_jobs};
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::{info, warn};

pub fn run(args: BatchArgs, show_progress: bool) -> Result<()> {
    let config = build_config(
        &args.config,
        BatchFlags {
            no_frame_reuse: args.no_frame_reuse,
            fail_fast: args.fail_fast,
        },
    )?;

    info!("Loading build jobs from {:?}", &args.input);
    let jobs = load_jobs(&args.input)?;
    info!("Loaded {} job(s).", jobs.len());

    let progress_handler = if show_progress {
        CliProgressHandler::new()
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let result = batch::run(&jobs, &config.batch, &reporter)?;

    for failure in &result.failures {
        warn!("{}", failure);
        eprintln!("Skipped: {}", failure);
    }

    match &args.output {
        Some(path) => {
            info!("Writing {} point(s) to {:?}", result.points.len(), path);
            output::write_batch(&result, &config.output, BufWriter::new(File::create(path)?))?;
            println!(
                "Built {} point(s), {} failure(s). Results written to: {}",
                result.points.len(),
                result.failures.len(),
                path.display()
            );
        }
        None => {
            output::write_batch(&result, &config.output, io::stdout().lock())?;
        }
    }

    Ok(())
}

use crate::core::models::coords::{AtomTriple, InternalCoordinate};
use crate::core::models::vector::Vector;
use crate::engine::config::BatchConfig;
use crate::engine::error::NerfError;
use crate::engine::nerf::build_coordinate_from;
use crate::engine::progress::{Progress, ProgressReporter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One reference triple together with every internal coordinate to build from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildJob {
    pub name: String,
    #[serde(flatten)]
    pub triple: AtomTriple,
    #[serde(default)]
    pub coordinates: Vec<InternalCoordinate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPoint {
    pub job: String,
    pub index: usize,
    pub coordinate: InternalCoordinate,
    pub position: Vector,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkflowError {
    #[error("Job '{job}' has no usable reference frame: {source}")]
    Frame {
        job: String,
        #[source]
        source: NerfError,
    },

    #[error("Job '{job}' failed at coordinate {index}: {source}")]
    Coordinate {
        job: String,
        index: usize,
        #[source]
        source: NerfError,
    },
}

/// Points built by a batch run, in job order then coordinate order, plus every
/// failure that was collected instead of aborting the run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BatchResult {
    pub points: Vec<BuiltPoint>,
    pub failures: Vec<WorkflowError>,
}

impl BatchResult {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum JobLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Deserialize)]
struct JobFile {
    #[serde(rename = "job", default)]
    jobs: Vec<BuildJob>,
}

/// Reads build jobs from a TOML file made of `[[job]]` tables.
pub fn load_jobs(path: &Path) -> Result<Vec<BuildJob>, JobLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| JobLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    let file: JobFile = toml::from_str(&content).map_err(|e| JobLoadError::Toml {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    Ok(file.jobs)
}

#[derive(Default)]
struct JobOutcome {
    points: Vec<BuiltPoint>,
    failures: Vec<WorkflowError>,
}

#[instrument(skip_all, name = "batch_workflow")]
pub fn run(
    jobs: &[BuildJob],
    config: &BatchConfig,
    reporter: &ProgressReporter,
) -> Result<BatchResult, WorkflowError> {
    reporter.report(Progress::PhaseStart {
        name: "Building coordinates",
    });
    info!(
        num_jobs = jobs.len(),
        reuse_frames = config.reuse_frames,
        fail_fast = config.fail_fast,
        "Starting batch coordinate construction."
    );
    reporter.report(Progress::TaskStart {
        total_steps: jobs.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = jobs.iter();

    #[cfg(feature = "parallel")]
    let iterator = jobs.par_iter();

    let outcomes = iterator
        .map(|job| {
            let outcome = run_job(job, config);
            reporter.report(Progress::TaskIncrement);
            outcome
        })
        .collect::<Result<Vec<_>, _>>();

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let mut result = BatchResult::default();
    for outcome in outcomes? {
        result.points.extend(outcome.points);
        result.failures.extend(outcome.failures);
    }

    if !result.is_complete() {
        warn!(
            num_failures = result.failures.len(),
            "Some coordinates could not be built."
        );
    }
    info!(
        num_points = result.points.len(),
        "Batch coordinate construction complete."
    );

    Ok(result)
}

fn run_job(job: &BuildJob, config: &BatchConfig) -> Result<JobOutcome, WorkflowError> {
    let mut outcome = JobOutcome::default();
    if job.coordinates.is_empty() {
        debug!(job = %job.name, "Job has no coordinates; skipping.");
        return Ok(outcome);
    }

    let frame = if config.reuse_frames {
        match job.triple.reference_frame() {
            Ok(frame) => Some(frame),
            Err(source) => {
                let error = WorkflowError::Frame {
                    job: job.name.clone(),
                    source,
                };
                if config.fail_fast {
                    return Err(error);
                }
                outcome.failures.push(error);
                return Ok(outcome);
            }
        }
    } else {
        None
    };

    for (index, coordinate) in job.coordinates.iter().enumerate() {
        match build_coordinate_from(&job.triple, coordinate, frame.as_ref()) {
            Ok(position) => outcome.points.push(BuiltPoint {
                job: job.name.clone(),
                index,
                coordinate: *coordinate,
                position,
            }),
            Err(source) => {
                let error = WorkflowError::Coordinate {
                    job: job.name.clone(),
                    index,
                    source,
                };
                if config.fail_fast {
                    return Err(error);
                }
                outcome.failures.push(error);
            }
        }
    }

    debug!(
        job = %job.name,
        built = outcome.points.len(),
        failed = outcome.failures.len(),
        "Finished job."
    );
    Ok(outcome)
}

use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, OutputConfig};
use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use nerfkit::engine::config::BatchConfigBuilder;
use std::str::FromStr;

/// Batch switches given as dedicated command-line flags.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchFlags {
    pub no_frame_reuse: bool,
    pub fail_fast: bool,
}

pub fn build_config(args: &ConfigArgs, flags: BatchFlags) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let output_file = file_config.output.take().unwrap_or_default();
    let precision = args
        .precision
        .or(output_file.precision)
        .unwrap_or(defaults.precision);
    let format = args
        .format
        .or(output_file.format)
        .unwrap_or(defaults.format);

    let batch_file = file_config.batch.take().unwrap_or_default();
    let reuse_frames = if flags.no_frame_reuse {
        false
    } else {
        batch_file.reuse_frames.unwrap_or(defaults.reuse_frames)
    };
    let fail_fast = flags.fail_fast || batch_file.fail_fast.unwrap_or(defaults.fail_fast);

    let batch = BatchConfigBuilder::new()
        .reuse_frames(reuse_frames)
        .fail_fast(fail_fast)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        output: OutputConfig { precision, format },
        batch,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "output.precision" => {
                config.output.get_or_insert_with(Default::default).precision =
                    Some(parse_value(key, value)?);
            }
            "output.format" => {
                config.output.get_or_insert_with(Default::default).format =
                    Some(parse_value(key, value)?);
            }
            "batch.reuse-frames" => {
                config.batch.get_or_insert_with(Default::default).reuse_frames =
                    Some(parse_value(key, value)?);
            }
            "batch.fail-fast" => {
                config.batch.get_or_insert_with(Default::default).fail_fast =
                    Some(parse_value(key, value)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unknown configuration key: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {}: {}", key, value)))
}

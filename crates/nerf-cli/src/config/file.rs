use super::models::OutputFormat;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    pub precision: Option<usize>,
    pub format: Option<OutputFormat>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileBatchConfig {
    #[serde(rename = "reuse-frames")]
    pub reuse_frames: Option<bool>,
    #[serde(rename = "fail-fast")]
    pub fail_fast: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub output: Option<FileOutputConfig>,
    pub batch: Option<FileBatchConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_full_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[output]
precision = 6
format = "csv"

[batch]
reuse-frames = false
fail-fast = true
"#
        )
        .unwrap();

        let config = FileConfig::from_file(file.path()).unwrap();

        assert_eq!(
            config,
            FileConfig {
                output: Some(FileOutputConfig {
                    precision: Some(6),
                    format: Some(OutputFormat::Csv),
                }),
                batch: Some(FileBatchConfig {
                    reuse_frames: Some(false),
                    fail_fast: Some(true),
                }),
            }
        );
    }

    #[test]
    fn empty_file_yields_empty_config() {
        let file = NamedTempFile::new().unwrap();
        assert_eq!(
            FileConfig::from_file(file.path()).unwrap(),
            FileConfig::default()
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\ncolour = true\n").unwrap();

        let result = FileConfig::from_file(file.path());

        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = FileConfig::from_file(Path::new("nonexistent_nerf_config.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}

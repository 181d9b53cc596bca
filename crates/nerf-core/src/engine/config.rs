use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Settings for [`workflows::batch::run`](crate::workflows::batch::run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Build the reference frame once per job and pass it to every coordinate of
    /// that job, instead of rebuilding it for each coordinate.
    pub reuse_frames: bool,
    /// Abort the whole batch on the first failing coordinate instead of collecting
    /// failures alongside successful results.
    pub fail_fast: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            reuse_frames: true,
            fail_fast: false,
        }
    }
}

#[derive(Default)]
pub struct BatchConfigBuilder {
    reuse_frames: Option<bool>,
    fail_fast: Option<bool>,
}

impl BatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reuse_frames(mut self, reuse: bool) -> Self {
        self.reuse_frames = Some(reuse);
        self
    }
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = Some(fail_fast);
        self
    }

    pub fn build(self) -> Result<BatchConfig, ConfigError> {
        Ok(BatchConfig {
            reuse_frames: self
                .reuse_frames
                .ok_or(ConfigError::MissingParameter("reuse_frames"))?,
            fail_fast: self
                .fail_fast
                .ok_or(ConfigError::MissingParameter("fail_fast"))?,
        })
    }
}

use super::models::OutputFormat;

pub struct DefaultsConfig {
    pub precision: usize,
    pub format: OutputFormat,
    pub reuse_frames: bool,
    pub fail_fast: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            precision: 4,
            format: OutputFormat::Text,
            reuse_frames: true,
            fail_fast: false,
        }
    }
}

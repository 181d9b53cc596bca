pub mod batch;
pub mod build;
pub mod frame;
pub mod measure;

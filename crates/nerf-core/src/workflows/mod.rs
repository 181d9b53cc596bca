//! # Workflows Module
//!
//! High-level entry points that drive the kernel over many inputs.
//!
//! - **Batch construction** ([`batch`]) - evaluates independent build jobs, each made
//!   of one reference triple and any number of internal coordinates. The reference
//!   frame of a job is built once and reused for all of its coordinates, and jobs run
//!   in parallel when the `parallel` feature is enabled.

pub mod batch;

//! # Engine Module
//!
//! The stateless NeRF kernel and the pieces that surround it.
//!
//! ## Architecture
//!
//! - **Reference frames** ([`frame`]) - builds the orthonormal basis for three ordered points
//! - **Coordinate construction** ([`nerf`]) - places a fourth point from internal coordinates
//! - **Error Handling** ([`error`]) - the kernel's error taxonomy
//! - **Configuration** ([`config`]) - settings for batch evaluation
//! - **Progress Monitoring** ([`progress`]) - callbacks used by long-running workflows
//!
//! The kernel holds no state between calls. Callers that extend repeatedly from the same
//! three points can compute the frame once and hand it back to every call.

pub mod config;
pub mod error;
pub mod frame;
pub mod nerf;
pub mod progress;

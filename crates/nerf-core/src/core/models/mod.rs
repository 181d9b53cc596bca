//! # Core Models Module
//!
//! Immutable geometric value types used throughout nerfkit.
//!
//! ## Key Components
//!
//! - [`vector`] - Three-component vector with the arithmetic the kernel needs
//! - [`frame`] - Orthonormal 3x3 basis anchored to three reference points
//! - [`coords`] - Ordered reference triples and internal coordinates
//!
//! None of these types carry identity beyond their value; they are `Copy` and can be
//! shared freely across threads.

pub mod coords;
pub mod frame;
pub mod vector;

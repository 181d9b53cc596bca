//! # nerfkit
//!
//! Construction of Cartesian coordinates from internal coordinates using the
//! Natural Extension Reference Frame (NeRF) method.
//!
//! Given three ordered reference points A, B, C and an internal coordinate
//! (bond length to C, bond angle B-C-D, torsion A-B-C-D), the builder places the
//! fourth point D. This is the geometric inverse of measuring a distance, angle,
//! and dihedral from four existing points.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Immutable value types (`Vector`, `BasisMatrix`,
//!   `AtomTriple`, `InternalCoordinate`) and measurement helpers.
//!
//! - **[`engine`]: The Kernel.** The stateless reference-frame builder and the NeRF
//!   coordinate builder, together with the error taxonomy, batch configuration, and
//!   progress reporting.
//!
//! - **[`workflows`]: The Public API for bulk work.** Evaluates many independent build
//!   jobs, reusing one reference frame per job and running jobs in parallel.
//!
//! ## Example
//!
//! ```
//! use nerfkit::core::models::vector::Vector;
//! use nerfkit::engine::nerf::build_coordinate;
//!
//! let a = Vector::new(1.0, 0.0, 0.0);
//! let b = Vector::new(0.0, 0.0, 0.0);
//! let c = Vector::new(0.0, 1.0, 0.0);
//!
//! let d = build_coordinate(&a, &b, &c, 1.0, 90.0, 90.0, None).unwrap();
//! assert!(((d - c).norm() - 1.0).abs() < 1e-9);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

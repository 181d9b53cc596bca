//! # Core Module
//!
//! Value types and measurement utilities shared by the kernel and its callers.
//!
//! - **Geometric values** ([`models`]) - `Vector`, `BasisMatrix`, `AtomTriple`,
//!   and `InternalCoordinate`.
//! - **Measurements** ([`utils`]) - distances, bond angles, dihedrals, and RMSD,
//!   the inverse direction of coordinate construction.

pub mod models;
pub mod utils;

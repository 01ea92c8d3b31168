// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera-transform subsystem for interactive 3D viewers.
//!
//! Vantage maintains the viewing geometry of a scene — eye, target, up,
//! world-axis convention, uniform world scale — and derives the view and
//! view-normal matrices a renderer consumes, with lazy rebuilds gated by a
//! dirty flag. Navigation is exposed as orbit/yaw/pitch/pan/zoom/view-fit
//! operations with configurable rotation constraints (gimbal lock, pitch
//! clamping).
//!
//! # Key entry points
//!
//! - [`Camera`] - the camera state machine and navigation surface
//! - [`camera::Perspective`] / [`camera::Orthographic`] - the two
//!   projection strategies the camera selects between
//! - [`CameraUniform`] - Pod layout for uploading the derived matrices
//! - [`CameraOptions`] - serde/schemars options block for viewer UIs
//!
//! # Ownership model
//!
//! One `Camera` per viewer, mutated and read from a single thread. Every
//! mutation raises a shared [`RedrawSignal`] the owning viewer drains once
//! per render; matrix getters rebuild the cached matrices only when state
//! actually changed.

pub mod camera;
pub mod error;
pub mod options;

pub use camera::{Aabb, Camera, CameraUniform, ProjectionType, RedrawSignal};
pub use error::ParseProjectionError;
pub use options::CameraOptions;

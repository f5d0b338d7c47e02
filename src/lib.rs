//! ipc-landgen: IPC-7351 land pattern generator for KiCad
//!
//! This library turns a declarative housing description (body and lead
//! dimensions with tolerances, pitch, lead count, package family) into a
//! PCB land pattern and serializes it as a KiCad `.kicad_mod` footprint.
//!
//! # Architecture
//!
//! ```text
//! builder ─▶ calculator ─▶ pattern (pads) ─▶ layer generators ─▶ serializer
//! ```
//!
//! - **Calculator**: pure IPC-7351B formulas mapping housing and settings to
//!   pad sizes, positions and courtyard excess
//! - **Pattern**: insertion-ordered pads plus per-layer drawing primitives
//! - **Layer generators**: copper, silkscreen, assembly, courtyard, mask
//! - **Serializer**: deterministic KiCad text output
//!
//! # Modules
//!
//! - [`config`]: Element and settings loading and validation
//! - [`error`]: Error types
//! - [`housing`]: Tolerance model and normalized housing
//! - [`ipc7351`]: IPC-7351B tables, calculator, naming and family builders
//! - [`pattern`]: Land pattern document model
//! - [`layers`]: Layer generators
//! - [`kicad`]: `.kicad_mod` output
//! - [`generate`]: Request pipeline

pub mod config;
pub mod error;
pub mod generate;
pub mod housing;
pub mod ipc7351;
pub mod kicad;
pub mod layers;
pub mod pattern;

pub use generate::{build_pattern, generate_footprint};
pub use ipc7351::PackageFamily;

//! IPC-7351B land pattern standard implementation.
//!
//! This module provides IPC-7351B land pattern calculations for surface
//! mount components: the fillet and courtyard tables, the pad geometry
//! calculator, the naming conventions and one builder per package family.
//!
//! # Density Levels
//!
//! IPC-7351B defines three density levels:
//!
//! - **Most (M)**: Maximum land protrusion, best solder fillet, for high reliability
//! - **Nominal (N)**: Standard density, recommended for most applications
//! - **Least (L)**: Minimum land protrusion, for high-density boards
//!
//! # Example
//!
//! ```
//! use ipc_landgen::config::Settings;
//! use ipc_landgen::housing::{Dimension, Housing};
//! use ipc_landgen::ipc7351::{calculator, PackageFamily};
//! use ipc_landgen::pattern::Pattern;
//!
//! let housing = Housing {
//!     body_length: Some(Dimension::new(1.5, 1.6, 1.7)),
//!     body_width: Some(Dimension::new(0.7, 0.8, 0.9)),
//!     lead_length: Some(Dimension::new(0.2, 0.3, 0.4)),
//!     flags: PackageFamily::Chip.implied_flags(),
//!     ..Housing::default()
//! };
//! let settings = Settings::default();
//! let params = calculator::two_pin(&settings, &housing);
//! assert!(params.distance > params.width);
//!
//! let mut pattern = Pattern::new("", &settings);
//! PackageFamily::Chip.build(&mut pattern, &housing).unwrap();
//! assert_eq!(pattern.pad_count(), 2);
//! ```

pub mod calculator;
pub mod density;
pub mod naming;
pub mod packages;

pub use density::{CourtyardExcess, DensityLevel, SolderFilletGoals};
pub use packages::PackageFamily;

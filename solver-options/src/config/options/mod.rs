//! Options system for solver configuration
//!
//! The options system provides:
//! - A declared schema of defaults, accepted types and enumerated values
//! - Case-insensitive (or exact) option names
//! - Immutable and deprecated option enforcement
//! - Nearest-name suggestions for mistyped options
//! - Rank-gated printing of the current and modified options

pub mod builder;
pub mod registrations;
pub mod registry;
pub mod render;
pub mod store;
pub mod suggest;
pub mod types;

pub use builder::{OptionsSchema, SchemaBuilder};
pub use registry::{OptionsRegistry, RegistryConfig};
pub use render::render_options;
pub use store::{OptionMap, canonical_name};
pub use suggest::{levenshtein_distance, suggest};
pub use types::{OptionSpec, OptionType, OptionValue, ValueKind};

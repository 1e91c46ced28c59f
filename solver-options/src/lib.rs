//! Case-insensitive, type-validating options registry for solver objects.
//!
//! A solver declares an [`OptionsSchema`] of defaults, accepted types and
//! enumerated values, then owns an [`OptionsRegistry`] built from that schema
//! and the caller's options. See [`BaseSolver`] for the host side.

pub mod cli;
pub mod comm;
pub mod config;
pub mod error;
pub mod solver;

pub use comm::{Communicator, LocalComm, StaticComm};
pub use config::options::{
    OptionMap, OptionSpec, OptionType, OptionValue, OptionsRegistry, OptionsSchema, RegistryConfig,
    SchemaBuilder, ValueKind,
};
pub use error::{ConstructionError, OptionsError};
pub use solver::BaseSolver;

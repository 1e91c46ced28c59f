//! Built-in schemas

pub mod demo;

pub use demo::demo_schema;

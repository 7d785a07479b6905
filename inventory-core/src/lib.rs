//! Shared foundation for the inventory scanner tooling: themed console
//! output, user directory lookup, and tracing setup.

pub mod output_macros;
pub mod tracing_init;
pub mod user_paths;

//! Convenience re-exports for common sqlfacade usage
//!
//! This prelude module re-exports the most commonly used items, making it
//! easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use sqlfacade::prelude::*;
//!
//! // Now you have access to the facades, filters and configuration types
//! ```

// Core sqlfacade components
pub use crate::core::SqlFacade;
pub use crate::errors::SqlFacadeError;

// Re-export centralized config
pub use config::{AppConfig, DiagnosticsConfig, PlaceholderStyle, QueryConfig};

// Re-export commonly used facade types for convenience
pub use facade_core::prelude::*;

// Re-export facade_core for callers that need the lower-level builders
pub use facade_core;

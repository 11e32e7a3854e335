//! Lifecycle management for `serve` mode.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build render client → Bind listener
//!
//! Shutdown (shutdown.rs):
//!     SIGTERM/SIGINT → broadcast → stop accepting → drain in-flight calls
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;

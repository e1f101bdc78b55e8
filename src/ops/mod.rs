// * Operations: logging setup and endpoint diagnostics

pub mod probe;
pub mod telemetry;

// * Re-exports for convenient access
pub use probe::{probe, probe_with_timeout};
pub use telemetry::{init_tracing, init_tracing_with_level, LogFormat};

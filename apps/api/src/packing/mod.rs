// Packing-layout engine: generators, the external loader, and shared measurement.
// All functions are pure except the loader's single blocking file read, which
// async callers must run inside tokio::task::spawn_blocking.

pub mod bounds;
pub mod config;
pub mod grid;
pub mod handlers;
pub mod hexagonal;
pub mod loader;
pub mod model;
pub mod render;
pub mod source;
pub mod stats;

// Re-export the public API consumed by the routes.
pub use config::{LoaderOptions, PackingConfig, OPTIMAL_SOURCE_URL};
pub use loader::{LoadError, LoadErrorKind, LoadWarning};
pub use model::{Circle, Packing};
pub use render::RenderPlan;
pub use source::{resolve, EngineSettings, PackingSource};
pub use stats::PackingStats;

// Domain layer - pure simulation logic
pub mod domain;

// Application layer - session orchestration
pub mod application;

// Infrastructure layer - rendering, input
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::Session;
pub use domain::{Cell, Grid, ViewMapping};

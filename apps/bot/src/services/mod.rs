//! Orchestration layer: session dispatch and per-mode command handling.

pub mod competitive_mode;
pub mod default_mode;
pub mod dispatch;
pub mod orchestrator;

pub use competitive_mode::CompetitiveModeHandler;
pub use default_mode::DefaultModeHandler;
pub use dispatch::SessionDispatcher;
pub use orchestrator::GameOrchestrator;

mod screenshot_orchestrator;

pub use screenshot_orchestrator::ScreenshotOrchestrator;

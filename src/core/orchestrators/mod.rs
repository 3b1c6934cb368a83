mod recognition_orchestrator;

pub use recognition_orchestrator::RecognitionOrchestrator;

mod probes;
mod transcript;

pub use probes::{HealthCheck, HealthReport, health_handler, ping_handler};
pub use transcript::{transcribe_file_handler, transcribe_path_handler};

//! I/O layer: spawning external processes.
//! Provides the `ProcessRunner` seam and the `SystemRunner` that actually
//! runs nbconvert.
pub mod process;
pub use process::{ProcessOutcome, ProcessRunner, SystemRunner};

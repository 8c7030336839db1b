//! Test doubles for the protocol-engine seam.

mod recording_engine;

pub use recording_engine::{EngineCall, RecordingEngine, RecordingEngineHandle};

//! NUML Engine Transport
//!
//! Carries a built markup tree across the library boundary. The tree is
//! encoded as UTF-8 JSON and handed to the rendering engine — a platform
//! dynamic library exporting a single `start` entry point — which owns
//! the process from that moment: event loop, windowing, everything. The
//! call blocks until the engine returns.
//!
//! ```text
//! Element → wire::to_bytes() → start(ptr, len) inside the engine
//! ```
//!
//! The engine library is selected by the `NUML_ENGINE_PATH` environment
//! variable, falling back to the conventional debug build path.

pub mod render;
pub mod wire;

pub use render::{engine_path, render, render_at, ENGINE_PATH_VAR};
pub use wire::{to_bytes, to_string, to_string_pretty};

use std::path::PathBuf;

/// Engine transport error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The tree could not be encoded as JSON.
    #[error("failed to encode ui tree: {0}")]
    Encode(#[from] serde_json::Error),

    /// The engine library could not be opened.
    #[error("failed to load engine library {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: libloading::Error,
    },

    /// The library opened but does not export the `start` entry point.
    #[error("engine library {} does not export `start`: {source}", .path.display())]
    MissingStart {
        path: PathBuf,
        source: libloading::Error,
    },
}

//! Platform-neutral core of MD Studio.
//!
//! Owns the single open [`document::Document`], decides when it is dirty,
//! funnels every ingestion source into one replacement path and routes saves
//! through a [`bridge::HostBridge`]. Nothing in here talks to a window
//! system; the root crate supplies the native bridge and the shell.

pub mod bridge;
pub mod config;
pub mod controller;
pub mod document;
pub mod ingest;
pub mod notice;
pub mod paths;
pub mod render;

pub use bridge::{BridgeError, BridgeMode, FileBlob, FileFilter, HostBridge};
pub use controller::{DocumentController, SaveOutcome};
pub use document::Document;
pub use ingest::{IngestOutcome, IngestionCoordinator};
pub use notice::{Notice, Tone};

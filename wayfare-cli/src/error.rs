//! Error types emitted by the Wayfare CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wayfare_core::{ClockParseError, ParseTravelModeError};

/// Errors emitted by the Wayfare CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the trip document failed.
    #[error("failed to open trip at {path:?}: {source}")]
    OpenTrip {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The trip document could not be decoded.
    #[error("failed to parse trip JSON at {path:?}: {source}")]
    ParseTrip {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The start-time override is not an `HH:MM` clock time.
    #[error("invalid start time {value:?}: {source}")]
    InvalidStartTime {
        value: String,
        #[source]
        source: ClockParseError,
    },
    /// The default-mode override names no travel mode.
    #[error(transparent)]
    InvalidTravelMode(#[from] ParseTravelModeError),
    /// Serialising the schedule failed.
    #[error("failed to serialise schedule: {0}")]
    SerialiseSchedule(#[source] serde_json::Error),
    /// Writing the schedule output failed.
    #[error("failed to write schedule output: {0}")]
    WriteScheduleOutput(#[source] std::io::Error),
}

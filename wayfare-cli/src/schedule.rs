//! Schedule command implementation for the Wayfare CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use wayfare_core::{
    ClockTime, Composer, DayPlan, ModeSelections, ProviderEstimates, TimelineConfig, TravelMode,
    TripSchedule,
};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_SCHEDULE_DEFAULT_MODE, ARG_SCHEDULE_START_TIME, ARG_SCHEDULE_TRIP,
    ARG_SCHEDULE_VISIT_MINUTES, CliError, ENV_SCHEDULE_TRIP,
};

/// CLI arguments for the `schedule` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "schedule",
    long_about = "Compose a trip document into a timed schedule. The document \
                 is a JSON object with the trip's days plus optional per-leg \
                 mode selections and cached travel estimates. Defaults can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Compose a trip into a timed schedule"
)]
#[ortho_config(prefix = "WAYFARE")]
pub(crate) struct ScheduleArgs {
    /// Path to a JSON trip document.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) trip_path: Option<Utf8PathBuf>,
    /// Mode assumed for legs without a selection (driving or walking).
    #[arg(long = ARG_SCHEDULE_DEFAULT_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) default_mode: Option<String>,
    /// Visit length in minutes for stops without any duration.
    #[arg(long = ARG_SCHEDULE_VISIT_MINUTES, value_name = "minutes")]
    #[serde(default)]
    pub(crate) default_visit_minutes: Option<u32>,
    /// Start every day at this `HH:MM` time instead of the document's.
    #[arg(long = ARG_SCHEDULE_START_TIME, value_name = "HH:MM")]
    #[serde(default)]
    pub(crate) start_time: Option<String>,
}

impl ScheduleArgs {
    pub(crate) fn into_config(self) -> Result<ScheduleConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScheduleConfig::try_from(merged)
    }
}

/// Resolved `schedule` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScheduleConfig {
    /// Path to the JSON trip document.
    pub(crate) trip_path: Utf8PathBuf,
    /// Composer defaults.
    pub(crate) timeline: TimelineConfig,
    /// Start time applied to every day, if overridden.
    pub(crate) start_time: Option<ClockTime>,
}

impl ScheduleConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.trip_path, ARG_SCHEDULE_TRIP)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ScheduleArgs> for ScheduleConfig {
    type Error = CliError;

    fn try_from(args: ScheduleArgs) -> Result<Self, Self::Error> {
        let trip_path = args.trip_path.ok_or(CliError::MissingArgument {
            field: ARG_SCHEDULE_TRIP,
            env: ENV_SCHEDULE_TRIP,
        })?;

        let mut timeline = TimelineConfig::default();
        if let Some(mode) = args.default_mode {
            let mode: TravelMode = mode.parse()?;
            timeline = timeline.with_default_mode(mode);
        }
        if let Some(minutes) = args.default_visit_minutes {
            timeline = timeline.with_default_visit_minutes(minutes);
        }

        let start_time = args
            .start_time
            .map(|value| {
                value
                    .parse::<ClockTime>()
                    .map_err(|source| CliError::InvalidStartTime { value, source })
            })
            .transpose()?;

        Ok(Self {
            trip_path,
            timeline,
            start_time,
        })
    }
}

/// A trip as stored on disk: days plus the caller-owned leg state.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct TripDocument {
    pub(crate) days: Vec<DayPlan>,
    #[serde(default)]
    pub(crate) selections: ModeSelections,
    #[serde(default)]
    pub(crate) estimates: ProviderEstimates,
}

pub(super) fn run_schedule(args: ScheduleArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_schedule_with(args, &mut stdout)
}

pub(super) fn run_schedule_with(
    args: ScheduleArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_schedule_config(args)?;
    let schedule = execute_schedule(&config)?;
    write_schedule(writer, &schedule)
}

fn resolve_schedule_config(args: ScheduleArgs) -> Result<ScheduleConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_schedule(config: &ScheduleConfig) -> Result<TripSchedule, CliError> {
    let mut document = load_trip(&config.trip_path)?;
    if let Some(start) = config.start_time {
        debug!(
            "overriding start time of {} days with {start}",
            document.days.len()
        );
        for day in &mut document.days {
            day.start_time = start;
        }
    }
    let composer = Composer::with_config(config.timeline.clone());
    let schedule =
        composer.compose_trip(&document.days, &document.selections, &document.estimates);
    info!(
        "composed {} days from {} ({} minutes)",
        schedule.days.len(),
        config.trip_path,
        schedule.total_minutes
    );
    Ok(schedule)
}

/// Loads a JSON-encoded [`TripDocument`] from disk.
pub(super) fn load_trip(path: &Utf8Path) -> Result<TripDocument, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenTrip {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseTrip {
        path: path.to_path_buf(),
        source,
    })
}

fn write_schedule(writer: &mut dyn Write, schedule: &TripSchedule) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(schedule).map_err(CliError::SerialiseSchedule)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteScheduleOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteScheduleOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScheduleConfig, CliError> {
    let merged = ScheduleArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScheduleConfig::try_from(merged)
}

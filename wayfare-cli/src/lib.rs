//! Command-line interface for composing itinerary schedules.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod schedule;

pub use error::CliError;
use schedule::ScheduleArgs;

pub(crate) const ARG_SCHEDULE_TRIP: &str = "trip";
pub(crate) const ARG_SCHEDULE_DEFAULT_MODE: &str = "default-mode";
pub(crate) const ARG_SCHEDULE_VISIT_MINUTES: &str = "visit-minutes";
pub(crate) const ARG_SCHEDULE_START_TIME: &str = "start-time";
pub(crate) const ENV_SCHEDULE_TRIP: &str = "WAYFARE_CMDS_SCHEDULE_TRIP_PATH";

/// Run the Wayfare CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Schedule(args) => schedule::run_schedule(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfare",
    about = "Compose gap-free schedules from itinerary documents",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compose every day of a trip and print the schedule as JSON.
    Schedule(ScheduleArgs),
}

#[cfg(test)]
mod tests;

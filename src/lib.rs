//! Facade crate for the Wayfare itinerary timeline engine.
//!
//! This crate re-exports the core domain types and the caller-facing
//! functions. Serialisation support follows the `serde` feature.
//!
//! # Examples
//! ```
//! use geo::Coord;
//! use wayfare_engine::{
//!     LegEstimate, LegRole, ModeSelections, ProviderEstimates, Stop, TravelMode, compose,
//!     minutes_to_time, resolve_leg_identity, time_to_minutes,
//! };
//!
//! let stops = vec![Stop::new("a", "A", Coord { x: 0.0, y: 0.0 }).with_visit_override(60)];
//! let key = resolve_leg_identity(None, Some("A"), 0, LegRole::Direct);
//! let estimates =
//!     ProviderEstimates::new().with(key, TravelMode::Driving, LegEstimate::new(10, 4_000));
//! let start = time_to_minutes("09:00");
//! let day = compose(
//!     &stops,
//!     wayfare_engine::ClockTime::from_minutes(start),
//!     &ModeSelections::new(),
//!     &estimates,
//! );
//! assert_eq!(day.items[0].arrival.to_string(), "09:10");
//! assert_eq!(minutes_to_time(day.end_time().minutes()), "10:10");
//! ```

#![forbid(unsafe_code)]

pub use wayfare_core::{
    ClockParseError, ClockTime, Composer, DaySchedule, DayPlan, DiningPosition, DiningSchedule,
    DiningStop, DurationText, Endpoint, FallbackHint, ItemKind, ItineraryError, LegEstimate,
    LegIdentity, LegKey, LegRequest, LegRole, LegSource, ModeEstimates, ModeSelections,
    ParseTravelModeError, ProviderEstimates, ResolvedLeg, ScheduleItem, Stop, TimelineConfig,
    TravelMode, TravelTimeError, TravelTimeProvider, Trip, TripSchedule, compose, compose_trip,
    format_duration, minutes_to_time, parse_duration, resolve_leg, resolve_leg_identity,
    time_to_minutes,
};

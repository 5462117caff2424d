//! Itinerary timeline engine.
//!
//! Turns an ordered list of stops into a gap-free schedule. Each stop's
//! arrival is the previous departure plus the travel leg between them, and
//! its departure adds the visit length. Travel legs are resolved from
//! caller-owned provider estimates and per-leg mode selections, keyed by a
//! deterministic [`LegKey`], with a fallback ladder when estimates are
//! missing. Dining detours replace the leg they interrupt.
//!
//! Composition is pure and synchronous. Callers recompose whenever a mode,
//! a duration or an estimate changes.

#![forbid(unsafe_code)]

mod clock;
mod duration;
mod itinerary;
mod segment;
mod stop;
mod timeline;
mod travel_time;
mod trip;

pub mod test_support;

pub use clock::{ClockParseError, ClockTime, MINUTES_PER_DAY, minutes_to_time, time_to_minutes};
pub use duration::{
    DurationText, MAX_PARSED_MINUTES, MIN_PARSED_MINUTES, PARSED_MINUTES_BOUNDS, format_duration,
    parse_duration, parse_duration_text, parse_duration_text_within, parse_duration_within,
};
pub use itinerary::{DayPlan, ItineraryError, Trip};
pub use segment::{Endpoint, LegIdentity, LegKey, LegRole, resolve_leg_identity};
pub use stop::{DiningStop, Stop};
pub use timeline::{
    Composer, DEFAULT_DWELL_MINUTES, DEFAULT_VISIT_MINUTES, DaySchedule, DiningPosition,
    DiningSchedule, ItemKind, ScheduleItem, TimelineConfig, compose,
};
pub use travel_time::{
    DEFAULT_LEG_ESTIMATE, FallbackHint, LegEstimate, LegRequest, LegSource, ModeEstimates,
    ModeSelections, ParseTravelModeError, ProviderEstimates, ResolvedLeg, TravelMode,
    TravelTimeError, TravelTimeProvider, resolve_leg, resolve_leg_with,
};
pub use trip::{TripSchedule, compose_trip};

//! Multi-day aggregation.

use log::debug;

use crate::itinerary::DayPlan;
use crate::timeline::{Composer, DaySchedule};
use crate::travel_time::{ModeSelections, ProviderEstimates};

/// Composed schedules for every day of a trip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripSchedule {
    /// One schedule per day, in order.
    pub days: Vec<DaySchedule>,
    /// Sum of each day's [`DaySchedule::total_minutes`].
    pub total_minutes: u32,
}

impl TripSchedule {
    /// Number of days that run past midnight.
    pub fn days_crossing_midnight(&self) -> usize {
        self.days.iter().filter(|d| d.crosses_midnight()).count()
    }
}

impl Composer {
    /// Compose each day independently and total them.
    ///
    /// Selections and estimates are shared: legs are keyed by their
    /// endpoints and position, so identical legs on different days share
    /// state.
    pub fn compose_trip(
        &self,
        days: &[DayPlan],
        selections: &ModeSelections,
        estimates: &ProviderEstimates,
    ) -> TripSchedule {
        let days: Vec<DaySchedule> = days
            .iter()
            .map(|day| self.compose_day(day, selections, estimates))
            .collect();
        let total_minutes = days
            .iter()
            .map(DaySchedule::total_minutes)
            .fold(0_u32, u32::saturating_add);
        debug!("composed trip of {} days, {total_minutes} minutes", days.len());
        TripSchedule {
            days,
            total_minutes,
        }
    }
}

/// Compose a trip with the default configuration.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfare_core::{ClockTime, DayPlan, ModeSelections, ProviderEstimates, Stop, compose_trip};
///
/// let start: ClockTime = "09:00".parse()?;
/// let day = DayPlan::new(
///     start,
///     vec![Stop::new("a", "A", Coord { x: 0.0, y: 0.0 }).with_visit_override(55)],
/// );
/// let trip = compose_trip(
///     &[day.clone(), day],
///     &ModeSelections::new(),
///     &ProviderEstimates::new(),
/// );
/// assert_eq!(trip.total_minutes, 140);
/// # Ok::<(), wayfare_core::ClockParseError>(())
/// ```
pub fn compose_trip(
    days: &[DayPlan],
    selections: &ModeSelections,
    estimates: &ProviderEstimates,
) -> TripSchedule {
    Composer::new().compose_trip(days, selections, estimates)
}

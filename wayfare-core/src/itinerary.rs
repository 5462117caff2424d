//! Single-day plans, multi-day trips, and the structural edits callers make
//! between composition passes.

use geo::Coord;
use thiserror::Error;

use crate::clock::ClockTime;
use crate::segment::LegIdentity;
use crate::stop::{DiningStop, Stop};
use crate::travel_time::LegRequest;

/// Errors returned by itinerary edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItineraryError {
    /// A stop index did not refer to a stop of the day.
    #[error("stop index {index} is out of range for a day with {len} stops")]
    StopOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of stops in the day.
        len: usize,
    },
    /// A day index did not refer to a day of the trip.
    #[error("day index {index} is out of range for a trip with {len} days")]
    DayOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of days in the trip.
        len: usize,
    },
    /// The stop had no dining stop to remove.
    #[error("stop {index} has no dining stop")]
    NoDiningStop {
        /// The stop's index.
        index: usize,
    },
}

/// One day of an itinerary.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfare_core::{ClockTime, DayPlan, DiningStop, Stop};
///
/// let start: ClockTime = "09:00".parse()?;
/// let mut day = DayPlan::new(
///     start,
///     vec![
///         Stop::new("a", "A", Coord { x: 0.0, y: 0.0 }),
///         Stop::new("b", "B", Coord { x: 0.01, y: 0.0 }),
///     ],
/// );
/// day.attach_dining(1, DiningStop::new("lunch", "Lunch", Coord { x: 0.005, y: 0.0 }))?;
/// assert_eq!(day.stops[1].dining.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayPlan {
    /// When the day begins.
    pub start_time: ClockTime,
    /// Where the day begins, if known. Needed to request the first leg.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_location: Option<Coord<f64>>,
    /// Where the day ends, if known. Needed to request the return leg of a
    /// return dining stop.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_location: Option<Coord<f64>>,
    /// Stops in visiting order.
    pub stops: Vec<Stop>,
    /// Dining stop taken after the last stop.
    #[cfg_attr(feature = "serde", serde(default))]
    pub return_dining: Option<DiningStop>,
}

impl DayPlan {
    /// Construct a day with no known start or end location.
    pub const fn new(start_time: ClockTime, stops: Vec<Stop>) -> Self {
        Self {
            start_time,
            start_location: None,
            end_location: None,
            stops,
            return_dining: None,
        }
    }

    /// Set the start location and return `self`.
    #[must_use]
    pub const fn with_start_location(mut self, location: Coord<f64>) -> Self {
        self.start_location = Some(location);
        self
    }

    /// Set the end location and return `self`.
    #[must_use]
    pub const fn with_end_location(mut self, location: Coord<f64>) -> Self {
        self.end_location = Some(location);
        self
    }

    /// Set the return dining stop and return `self`.
    #[must_use]
    pub fn with_return_dining(mut self, dining: DiningStop) -> Self {
        self.return_dining = Some(dining);
        self
    }

    /// Attach a dining stop before stop `index`.
    ///
    /// The new dining stop is timed only if the stop had none.
    pub fn attach_dining(
        &mut self,
        index: usize,
        dining: DiningStop,
    ) -> Result<(), ItineraryError> {
        self.stop_mut(index)?.dining.push(dining);
        Ok(())
    }

    /// Remove the timed dining stop before stop `index`.
    ///
    /// The next attached dining stop, if any, becomes the timed one.
    pub fn detach_dining(&mut self, index: usize) -> Result<DiningStop, ItineraryError> {
        let stop = self.stop_mut(index)?;
        if stop.dining.is_empty() {
            return Err(ItineraryError::NoDiningStop { index });
        }
        Ok(stop.dining.remove(0))
    }

    /// Set or clear the user's visit override for stop `index`.
    pub fn set_visit_override(
        &mut self,
        index: usize,
        minutes: Option<u32>,
    ) -> Result<(), ItineraryError> {
        self.stop_mut(index)?.visit_override = minutes;
        Ok(())
    }

    fn stop_mut(&mut self, index: usize) -> Result<&mut Stop, ItineraryError> {
        let len = self.stops.len();
        self.stops
            .get_mut(index)
            .ok_or(ItineraryError::StopOutOfRange { index, len })
    }

    /// Legs whose estimates a provider should be asked for.
    ///
    /// The identities match those the composer looks up. Legs with an
    /// unknown endpoint (no start or end location) are omitted. Display-only
    /// dining stops have no legs.
    pub fn leg_requests(&self) -> Vec<LegRequest> {
        let mut requests = Vec::new();
        let mut push =
            |identity: LegIdentity, origin: Option<Coord<f64>>, target: Option<Coord<f64>>| {
                if let (Some(origin), Some(destination)) = (origin, target) {
                    requests.push(LegRequest {
                        identity,
                        origin,
                        destination,
                    });
                }
            };

        let mut previous: Option<&Stop> = None;
        for (index, stop) in self.stops.iter().enumerate() {
            let previous_name = previous.map(|p| p.name.as_str());
            let origin = previous.map_or(self.start_location, |p| Some(p.location));
            match stop.dining.first() {
                Some(dining) => {
                    let (to, from) =
                        LegIdentity::dining_pair(previous_name, Some(stop.name.as_str()), index);
                    push(to, origin, Some(dining.location));
                    push(from, Some(dining.location), Some(stop.location));
                }
                None => {
                    let identity = LegIdentity::direct(previous_name, &stop.name, index);
                    push(identity, origin, Some(stop.location));
                }
            }
            previous = Some(stop);
        }

        if let Some(dining) = &self.return_dining {
            let origin = previous.map_or(self.start_location, |p| Some(p.location));
            let previous_name = previous.map(|p| p.name.as_str());
            let (to, from) = LegIdentity::dining_pair(previous_name, None, self.stops.len());
            push(to, origin, Some(dining.location));
            push(from, Some(dining.location), self.end_location);
        }
        requests
    }
}

/// A multi-day itinerary.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    /// Days in order.
    pub days: Vec<DayPlan>,
}

impl Trip {
    /// Construct a trip from its days.
    pub const fn new(days: Vec<DayPlan>) -> Self {
        Self { days }
    }

    /// Borrow day `index` mutably for editing.
    pub fn day_mut(&mut self, index: usize) -> Result<&mut DayPlan, ItineraryError> {
        let len = self.days.len();
        self.days
            .get_mut(index)
            .ok_or(ItineraryError::DayOutOfRange { index, len })
    }

    /// Leg requests for every day.
    pub fn leg_requests(&self) -> Vec<LegRequest> {
        self.days.iter().flat_map(DayPlan::leg_requests).collect()
    }
}

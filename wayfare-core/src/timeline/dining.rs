//! Dining detours: travel to the restaurant, eat, travel back.

use log::debug;

use crate::clock::ClockTime;
use crate::segment::LegIdentity;
use crate::stop::DiningStop;
use crate::travel_time::{ModeSelections, ProviderEstimates, ResolvedLeg};

use super::Composer;

/// Where a dining stop sits in the stop sequence.
///
/// The detour interrupts the segment from `previous` (trip start when
/// `None`) to `next` (trip end when `None`); `index` is the position of
/// `next`, or the stop count for a return dining stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiningPosition<'a> {
    /// Name of the stop before the detour.
    pub previous: Option<&'a str>,
    /// Name of the stop after the detour.
    pub next: Option<&'a str>,
    /// Ordinal position of `next`.
    pub index: usize,
}

impl DiningPosition<'_> {
    /// Identities of the legs to and from the restaurant.
    pub fn identities(&self) -> (LegIdentity, LegIdentity) {
        LegIdentity::dining_pair(self.previous, self.next, self.index)
    }
}

/// The timed detour for one dining stop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiningSchedule {
    /// Identifier of the dining stop.
    pub id: String,
    /// Display name of the dining stop.
    pub name: String,
    /// Leg from the previous stop to the restaurant.
    pub to_leg: ResolvedLeg,
    /// Leg from the restaurant back onto the route.
    pub from_leg: ResolvedLeg,
    /// Time spent eating.
    pub dwell_minutes: u32,
    /// Arrival at the restaurant.
    pub arrival: ClockTime,
    /// Arrival back on the route after eating and travelling on.
    pub departure: ClockTime,
}

impl DiningSchedule {
    /// When the traveller leaves the restaurant.
    pub const fn leaves_restaurant(&self) -> ClockTime {
        self.arrival.add_minutes(self.dwell_minutes)
    }

    /// Minutes the detour contributes between its anchor and `departure`.
    pub const fn total_minutes(&self) -> u32 {
        self.to_leg
            .duration_minutes
            .saturating_add(self.dwell_minutes)
            .saturating_add(self.from_leg.duration_minutes)
    }
}

impl Composer {
    /// Time a dining detour starting at `anchor`.
    ///
    /// `anchor` is the departure of the stop before the detour, or the trip
    /// start. Arrival and departure are always derived together:
    /// `arrival = anchor + to`, `departure = arrival + dwell + from`.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use wayfare_core::{
    ///     ClockTime, Composer, DiningPosition, DiningStop, LegEstimate, ModeSelections,
    ///     ProviderEstimates, TravelMode,
    /// };
    ///
    /// let position = DiningPosition { previous: Some("A"), next: Some("B"), index: 1 };
    /// let (to, from) = position.identities();
    /// let estimates = ProviderEstimates::new()
    ///     .with(to.key(), TravelMode::Driving, LegEstimate::new(5, 900))
    ///     .with(from.key(), TravelMode::Driving, LegEstimate::new(5, 900));
    /// let bistro = DiningStop::new("d1", "Bistro", Coord { x: 0.0, y: 0.0 }).with_dwell(45);
    ///
    /// let anchor: ClockTime = "10:10".parse()?;
    /// let schedule = Composer::new().compose_dining_stop(
    ///     &bistro,
    ///     anchor,
    ///     position,
    ///     &ModeSelections::new(),
    ///     &estimates,
    /// );
    /// assert_eq!(schedule.arrival.to_string(), "10:15");
    /// assert_eq!(schedule.departure.to_string(), "11:05");
    /// # Ok::<(), wayfare_core::ClockParseError>(())
    /// ```
    pub fn compose_dining_stop(
        &self,
        dining: &DiningStop,
        anchor: ClockTime,
        position: DiningPosition<'_>,
        selections: &ModeSelections,
        estimates: &ProviderEstimates,
    ) -> DiningSchedule {
        let (to_identity, from_identity) = position.identities();
        let to_leg = self.resolve(&to_identity, dining.to_hint.as_ref(), selections, estimates);
        let from_leg = self.resolve(
            &from_identity,
            dining.from_hint.as_ref(),
            selections,
            estimates,
        );
        let dwell_minutes = dining
            .dwell_minutes
            .unwrap_or(self.config().default_dwell_minutes);
        let arrival = anchor.add_minutes(to_leg.duration_minutes);
        let departure = arrival
            .add_minutes(dwell_minutes)
            .add_minutes(from_leg.duration_minutes);
        debug!(
            "dining stop {} between {to_identity} and {from_identity}: {arrival}-{departure}",
            dining.id
        );
        DiningSchedule {
            id: dining.id.clone(),
            name: dining.name.clone(),
            to_leg,
            from_leg,
            dwell_minutes,
            arrival,
            departure,
        }
    }
}

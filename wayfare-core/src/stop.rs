//! Stops to visit and the dining detours attached to them.

use geo::Coord;

use crate::duration::DurationText;
use crate::travel_time::FallbackHint;

/// One place to visit.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The visit
/// duration is taken from the first source present, in order:
/// [`visit_override`](Self::visit_override),
/// [`computed_visit`](Self::computed_visit),
/// [`typical_time_spent`](Self::typical_time_spent), then the composer's
/// default.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfare_core::Stop;
///
/// let stop = Stop::new("louvre", "Louvre Museum", Coord { x: 2.3376, y: 48.8606 })
///     .with_typical_time_spent("2-3 hours")
///     .with_visit_override(90);
/// assert_eq!(stop.visit_override, Some(90));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Stable identifier from the place data source.
    pub id: String,
    /// Display name; also part of the identity of the legs around the stop.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Visit length chosen explicitly by the user, in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visit_override: Option<u32>,
    /// Visit length computed by an earlier planning step, in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub computed_visit: Option<u32>,
    /// Provider-supplied "typical time spent" value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub typical_time_spent: Option<DurationText>,
    /// Approximation for the leg arriving at this stop.
    #[cfg_attr(feature = "serde", serde(default))]
    pub travel_hint: Option<FallbackHint>,
    /// Dining stops visited on the way to this stop.
    ///
    /// Only the first participates in timing; the rest are display-only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dining: Vec<DiningStop>,
}

impl Stop {
    /// Construct a stop with no duration sources or dining stops.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            visit_override: None,
            computed_visit: None,
            typical_time_spent: None,
            travel_hint: None,
            dining: Vec::new(),
        }
    }

    /// Set the user's explicit visit length.
    #[must_use]
    pub fn with_visit_override(mut self, minutes: u32) -> Self {
        self.visit_override = Some(minutes);
        self
    }

    /// Set a previously computed visit length.
    #[must_use]
    pub fn with_computed_visit(mut self, minutes: u32) -> Self {
        self.computed_visit = Some(minutes);
        self
    }

    /// Set the provider's typical time spent.
    #[must_use]
    pub fn with_typical_time_spent(mut self, value: impl Into<DurationText>) -> Self {
        self.typical_time_spent = Some(value.into());
        self
    }

    /// Set the fallback hint for the leg arriving here.
    #[must_use]
    pub fn with_travel_hint(mut self, hint: FallbackHint) -> Self {
        self.travel_hint = Some(hint);
        self
    }

    /// Attach a dining stop visited on the way here.
    #[must_use]
    pub fn with_dining(mut self, dining: DiningStop) -> Self {
        self.dining.push(dining);
        self
    }
}

/// A meal break taken on the way to a stop.
///
/// The detour replaces the direct leg into its stop: the traveller goes from
/// the previous stop to the restaurant, eats, then continues.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiningStop {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Time spent eating, in minutes. The composer default applies if unset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dwell_minutes: Option<u32>,
    /// Approximation for the leg to the restaurant.
    #[cfg_attr(feature = "serde", serde(default))]
    pub to_hint: Option<FallbackHint>,
    /// Approximation for the leg back onto the route.
    #[cfg_attr(feature = "serde", serde(default))]
    pub from_hint: Option<FallbackHint>,
}

impl DiningStop {
    /// Construct a dining stop using the default dwell and no hints.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            dwell_minutes: None,
            to_hint: None,
            from_hint: None,
        }
    }

    /// Set the dwell time in minutes.
    #[must_use]
    pub fn with_dwell(mut self, minutes: u32) -> Self {
        self.dwell_minutes = Some(minutes);
        self
    }

    /// Set hints for the legs to and from the restaurant.
    #[must_use]
    pub fn with_hints(mut self, to: FallbackHint, from: FallbackHint) -> Self {
        self.to_hint = Some(to);
        self.from_hint = Some(from);
        self
    }
}

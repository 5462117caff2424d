//! Cached provider output keyed by leg identity.

use std::collections::HashMap;

use log::{debug, warn};

use crate::segment::LegKey;

use super::mode::TravelMode;
use super::provider::{LegRequest, TravelTimeProvider};

/// A provider's estimate for one leg in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegEstimate {
    /// Travel time in whole minutes.
    pub duration_minutes: u32,
    /// Travel distance in meters.
    pub distance_meters: u32,
}

impl LegEstimate {
    /// Construct an estimate from minutes and meters.
    pub const fn new(duration_minutes: u32, distance_meters: u32) -> Self {
        Self {
            duration_minutes,
            distance_meters,
        }
    }
}

/// Estimates known so far for one leg, per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeEstimates {
    /// Estimate for [`TravelMode::Driving`].
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub driving: Option<LegEstimate>,
    /// Estimate for [`TravelMode::Walking`].
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub walking: Option<LegEstimate>,
}

impl ModeEstimates {
    /// Return the estimate for `mode`, if known.
    pub const fn get(&self, mode: TravelMode) -> Option<LegEstimate> {
        match mode {
            TravelMode::Driving => self.driving,
            TravelMode::Walking => self.walking,
        }
    }

    /// Record the estimate for `mode`.
    pub const fn set(&mut self, mode: TravelMode, estimate: LegEstimate) {
        match mode {
            TravelMode::Driving => self.driving = Some(estimate),
            TravelMode::Walking => self.walking = Some(estimate),
        }
    }
}

/// Provider estimates gathered so far, keyed by leg.
///
/// The map is owned by the caller. It grows as provider responses arrive and
/// is passed by reference into each composition pass.
///
/// # Examples
/// ```
/// use wayfare_core::{LegEstimate, LegIdentity, ProviderEstimates, TravelMode};
///
/// let key = LegIdentity::direct(None, "A", 0).key();
/// let mut estimates = ProviderEstimates::new();
/// estimates.insert(key.clone(), TravelMode::Driving, LegEstimate::new(10, 4_000));
/// assert_eq!(
///     estimates.get(&key, TravelMode::Driving),
///     Some(LegEstimate::new(10, 4_000))
/// );
/// assert!(estimates.get(&key, TravelMode::Walking).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProviderEstimates {
    legs: HashMap<LegKey, ModeEstimates>,
}

impl ProviderEstimates {
    /// Construct an empty estimate cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an estimate, replacing any previous value for that mode.
    pub fn insert(&mut self, key: LegKey, mode: TravelMode, estimate: LegEstimate) {
        self.legs.entry(key).or_default().set(mode, estimate);
    }

    /// Insert an estimate and return `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: LegKey, mode: TravelMode, estimate: LegEstimate) -> Self {
        self.insert(key, mode, estimate);
        self
    }

    /// Return the estimate for `key` in `mode`, if known.
    pub fn get(&self, key: &LegKey, mode: TravelMode) -> Option<LegEstimate> {
        self.legs.get(key).and_then(|known| known.get(mode))
    }

    /// Return every estimate known for `key`.
    pub fn for_leg(&self, key: &LegKey) -> Option<&ModeEstimates> {
        self.legs.get(key)
    }

    /// Iterate over cached legs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&LegKey, &ModeEstimates)> {
        self.legs.iter()
    }

    /// Number of legs with at least one estimate.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Whether no estimates are cached.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Fetch both modes for each request and cache what succeeds.
    ///
    /// Failures are logged and leave any previously cached value in place,
    /// matching the "not yet available" state the resolver already handles.
    /// Returns the number of estimates stored.
    pub fn refresh<P>(&mut self, provider: &P, requests: &[LegRequest]) -> usize
    where
        P: TravelTimeProvider + ?Sized,
    {
        let mut stored = 0;
        for request in requests {
            let key = request.identity.key();
            for mode in TravelMode::ALL {
                match provider.estimate(request.origin, request.destination, mode) {
                    Ok(estimate) => {
                        self.insert(key.clone(), mode, estimate);
                        stored += 1;
                    }
                    Err(err) => warn!("no {mode} estimate for leg {key}: {err}"),
                }
            }
        }
        debug!(
            "refreshed {stored} estimates across {} legs",
            requests.len()
        );
        stored
    }
}

impl FromIterator<(LegKey, TravelMode, LegEstimate)> for ProviderEstimates {
    fn from_iter<I: IntoIterator<Item = (LegKey, TravelMode, LegEstimate)>>(iter: I) -> Self {
        let mut estimates = Self::new();
        for (key, mode, estimate) in iter {
            estimates.insert(key, mode, estimate);
        }
        estimates
    }
}

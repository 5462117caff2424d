//! Turn a leg's identity and whatever estimates exist into concrete values.
//!
//! Resolution never fails. Missing estimates are the normal state while the
//! provider is still answering, so each rung of the ladder degrades to the
//! next:
//!
//! 1. the selected mode's provider estimate;
//! 2. the other mode's provider estimate, reported under that mode;
//! 3. a fallback hint carried by the itinerary, under the selected mode;
//! 4. [`DEFAULT_LEG_ESTIMATE`], under the selected mode.

use log::debug;

use crate::duration::format_duration;
use crate::segment::LegKey;

use super::estimates::{LegEstimate, ProviderEstimates};
use super::mode::TravelMode;

/// Estimate used when neither the provider nor the itinerary knows a leg.
pub const DEFAULT_LEG_ESTIMATE: LegEstimate = LegEstimate::new(15, 1_000);

/// A previously known approximation for a leg, typically stored on a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FallbackHint {
    /// Approximate travel time in minutes.
    pub duration_minutes: u32,
    /// Approximate distance in meters.
    pub distance_meters: u32,
    /// Display glyph recorded with the hint, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub icon: Option<String>,
}

impl FallbackHint {
    /// Construct a hint without an icon.
    pub const fn new(duration_minutes: u32, distance_meters: u32) -> Self {
        Self {
            duration_minutes,
            distance_meters,
            icon: None,
        }
    }
}

/// Which rung of the resolution ladder produced a [`ResolvedLeg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LegSource {
    /// The provider's estimate for the selected mode.
    Provider,
    /// The provider's estimate for the other mode.
    AlternateMode,
    /// The itinerary's fallback hint.
    Hint,
    /// The built-in default.
    Default,
}

/// A leg with concrete travel values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedLeg {
    /// Identity the leg was resolved under.
    pub key: LegKey,
    /// Mode the values describe. Differs from the selection when the
    /// alternate mode's estimate was used.
    pub mode: TravelMode,
    /// Travel time in minutes.
    pub duration_minutes: u32,
    /// Travel distance in meters.
    pub distance_meters: u32,
    /// Display glyph.
    pub icon: String,
    /// Ladder rung that supplied the values.
    pub source: LegSource,
}

/// Resolve a leg using [`DEFAULT_LEG_ESTIMATE`] as the last resort.
///
/// # Examples
/// ```
/// use wayfare_core::{
///     LegEstimate, LegIdentity, LegSource, ProviderEstimates, TravelMode, resolve_leg,
/// };
///
/// let key = LegIdentity::direct(None, "A", 0).key();
/// let estimates = ProviderEstimates::new().with(
///     key.clone(),
///     TravelMode::Walking,
///     LegEstimate::new(25, 2_000),
/// );
///
/// let leg = resolve_leg(&key, TravelMode::Driving, &estimates, None);
/// assert_eq!(leg.mode, TravelMode::Walking);
/// assert_eq!(leg.duration_minutes, 25);
/// assert_eq!(leg.source, LegSource::AlternateMode);
/// ```
pub fn resolve_leg(
    key: &LegKey,
    selected: TravelMode,
    estimates: &ProviderEstimates,
    hint: Option<&FallbackHint>,
) -> ResolvedLeg {
    resolve_leg_with(key, selected, estimates, hint, DEFAULT_LEG_ESTIMATE)
}

/// Resolve a leg with an explicit last-resort estimate.
pub fn resolve_leg_with(
    key: &LegKey,
    selected: TravelMode,
    estimates: &ProviderEstimates,
    hint: Option<&FallbackHint>,
    fallback: LegEstimate,
) -> ResolvedLeg {
    let provided = |mode: TravelMode, source: LegSource| {
        estimates
            .get(key, mode)
            .map(|estimate| build(key, mode, estimate, mode.icon(), source))
    };
    let leg = provided(selected, LegSource::Provider)
        .or_else(|| provided(selected.other(), LegSource::AlternateMode))
        .or_else(|| {
            hint.map(|h| {
                let icon = h.icon.as_deref().unwrap_or_else(|| selected.icon());
                let estimate = LegEstimate::new(h.duration_minutes, h.distance_meters);
                build(key, selected, estimate, icon, LegSource::Hint)
            })
        })
        .unwrap_or_else(|| build(key, selected, fallback, selected.icon(), LegSource::Default));
    if leg.source != LegSource::Provider {
        debug!(
            "leg {key} resolved from {:?} as {} {}",
            leg.source,
            leg.mode,
            format_duration(leg.duration_minutes)
        );
    }
    leg
}

fn build(
    key: &LegKey,
    mode: TravelMode,
    estimate: LegEstimate,
    icon: &str,
    source: LegSource,
) -> ResolvedLeg {
    ResolvedLeg {
        key: key.clone(),
        mode,
        duration_minutes: estimate.duration_minutes,
        distance_meters: estimate.distance_meters,
        icon: icon.to_owned(),
        source,
    }
}

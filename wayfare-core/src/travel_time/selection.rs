//! Per-leg mode choices made by the user.

use std::collections::HashMap;

use crate::segment::LegKey;

use super::mode::TravelMode;

/// The travel mode selected for each leg.
///
/// Legs without an entry use the composer's default mode.
///
/// # Examples
/// ```
/// use wayfare_core::{LegIdentity, ModeSelections, TravelMode};
///
/// let key = LegIdentity::direct(Some("A"), "B", 1).key();
/// let mut selections = ModeSelections::new();
/// assert_eq!(selections.mode_for(&key, TravelMode::Driving), TravelMode::Driving);
///
/// selections.toggle(&key, TravelMode::Driving);
/// assert_eq!(selections.get(&key), Some(TravelMode::Walking));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ModeSelections {
    modes: HashMap<LegKey, TravelMode>,
}

impl ModeSelections {
    /// Construct an empty selection map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `mode` for the leg, returning the previous selection.
    pub fn select(&mut self, key: LegKey, mode: TravelMode) -> Option<TravelMode> {
        self.modes.insert(key, mode)
    }

    /// Select a mode and return `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: LegKey, mode: TravelMode) -> Self {
        self.select(key, mode);
        self
    }

    /// Flip the leg to the other mode and return the new selection.
    ///
    /// An unset leg is treated as currently using `default`.
    pub fn toggle(&mut self, key: &LegKey, default: TravelMode) -> TravelMode {
        let next = self.mode_for(key, default).other();
        self.modes.insert(key.clone(), next);
        next
    }

    /// Forget the selection for a leg so it reverts to the default.
    pub fn clear(&mut self, key: &LegKey) -> Option<TravelMode> {
        self.modes.remove(key)
    }

    /// The explicit selection for a leg, if any.
    pub fn get(&self, key: &LegKey) -> Option<TravelMode> {
        self.modes.get(key).copied()
    }

    /// The selection for a leg, or `default` when unset.
    pub fn mode_for(&self, key: &LegKey, default: TravelMode) -> TravelMode {
        self.get(key).unwrap_or(default)
    }

    /// Number of legs with an explicit selection.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Whether no leg has an explicit selection.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl FromIterator<(LegKey, TravelMode)> for ModeSelections {
    fn from_iter<I: IntoIterator<Item = (LegKey, TravelMode)>>(iter: I) -> Self {
        Self {
            modes: iter.into_iter().collect(),
        }
    }
}

//! Deterministic identities for travel legs.
//!
//! Per-leg state (the selected [`TravelMode`](crate::TravelMode) and any
//! cached provider estimate) is keyed by a [`LegKey`]. The key is derived
//! only from the endpoint names, the ordinal position of the stop the leg
//! arrives at, and the leg's role, so the composer and any UI control that
//! toggles a leg's mode compute the same key independently.
//!
//! Names are stripped of whitespace before serialisation. Trip start and
//! trip end are sentinels that cannot collide with a stop name because
//! reserved characters in names are escaped.

use std::borrow::Borrow;
use std::fmt;

const START_SENTINEL: &str = "@start";
const END_SENTINEL: &str = "@end";
const SEPARATOR: char = '~';
const ESCAPE: char = '\\';
const SENTINEL_MARK: char = '@';

/// One end of a travel leg.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The trip's start location, before stop `0`.
    TripStart,
    /// The trip's end or return location, after the last stop.
    TripEnd,
    /// A named stop. The name is stored with whitespace removed.
    Stop(String),
}

impl Endpoint {
    /// Build a stop endpoint, stripping whitespace from `name`.
    pub fn stop(name: &str) -> Self {
        Self::Stop(name.chars().filter(|c| !c.is_whitespace()).collect())
    }

    /// Stop endpoint for `name`, or trip start when absent.
    pub fn or_start(name: Option<&str>) -> Self {
        name.map_or(Self::TripStart, Self::stop)
    }

    /// Stop endpoint for `name`, or trip end when absent.
    pub fn or_end(name: Option<&str>) -> Self {
        name.map_or(Self::TripEnd, Self::stop)
    }

    fn write_canonical(&self, out: &mut String) {
        match self {
            Self::TripStart => out.push_str(START_SENTINEL),
            Self::TripEnd => out.push_str(END_SENTINEL),
            Self::Stop(name) => {
                for c in name.chars() {
                    if matches!(c, SEPARATOR | ESCAPE | SENTINEL_MARK) {
                        out.push(ESCAPE);
                    }
                    out.push(c);
                }
            }
        }
    }
}

/// The part a leg plays in the stop sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LegRole {
    /// The ordinary leg between two consecutive stops.
    Direct,
    /// The detour leg from the previous stop to a dining stop.
    DiningTo,
    /// The leg from a dining stop back onto the route.
    DiningFrom,
}

/// Typed identity of one travel leg.
///
/// `index` is the position of the stop the leg leads towards; legs after the
/// last stop use the stop count.
///
/// # Examples
/// ```
/// use wayfare_core::LegIdentity;
///
/// let first = LegIdentity::direct(None, "Louvre Museum", 0);
/// assert_eq!(first.key().as_str(), "@start~LouvreMuseum~0");
///
/// let second = LegIdentity::direct(Some("Louvre Museum"), "Notre Dame", 1);
/// assert_eq!(second.key().as_str(), "LouvreMuseum~NotreDame~1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegIdentity {
    /// Where the surrounding route segment begins.
    pub from: Endpoint,
    /// Where the surrounding route segment ends.
    pub to: Endpoint,
    /// Ordinal position of the destination stop.
    pub index: usize,
    /// Role of the leg within the segment.
    pub role: LegRole,
}

impl LegIdentity {
    /// Identity of the ordinary leg arriving at stop `index`.
    ///
    /// `previous` is the preceding stop's name, or `None` for the first stop.
    pub fn direct(previous: Option<&str>, to: &str, index: usize) -> Self {
        Self {
            from: Endpoint::or_start(previous),
            to: Endpoint::stop(to),
            index,
            role: LegRole::Direct,
        }
    }

    /// Identities of the two halves of a dining detour before `index`.
    ///
    /// Both halves are named after the route segment they interrupt: from
    /// `previous` (or trip start) to `next` (or trip end for a return dining
    /// stop). The dining place itself does not participate, so swapping the
    /// restaurant keeps the selected modes.
    pub fn dining_pair(previous: Option<&str>, next: Option<&str>, index: usize) -> (Self, Self) {
        let from = Endpoint::or_start(previous);
        let to = Endpoint::or_end(next);
        let to_leg = Self {
            from: from.clone(),
            to: to.clone(),
            index,
            role: LegRole::DiningTo,
        };
        let from_leg = Self {
            from,
            to,
            index,
            role: LegRole::DiningFrom,
        };
        (to_leg, from_leg)
    }

    /// Canonical serialised key.
    pub fn key(&self) -> LegKey {
        let mut out = String::new();
        self.from.write_canonical(&mut out);
        out.push(SEPARATOR);
        self.to.write_canonical(&mut out);
        out.push(SEPARATOR);
        out.push_str(&self.index.to_string());
        if let Some(suffix) = self.suffix() {
            out.push(SEPARATOR);
            out.push_str(suffix);
        }
        LegKey(out)
    }

    fn suffix(&self) -> Option<&'static str> {
        let pre_first = self.from == Endpoint::TripStart;
        match (self.role, pre_first) {
            (LegRole::Direct, _) => None,
            (LegRole::DiningTo, true) => Some("pre-first-dining-to"),
            (LegRole::DiningFrom, true) => Some("pre-first-dining-from"),
            (LegRole::DiningTo, false) => Some("dining-to"),
            (LegRole::DiningFrom, false) => Some("dining-from"),
        }
    }
}

impl fmt::Display for LegIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key().as_str())
    }
}

/// Serialised [`LegIdentity`], used as the key of per-leg maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LegKey(String);

impl LegKey {
    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&LegIdentity> for LegKey {
    fn from(identity: &LegIdentity) -> Self {
        identity.key()
    }
}

impl From<LegIdentity> for LegKey {
    fn from(identity: LegIdentity) -> Self {
        identity.key()
    }
}

impl AsRef<str> for LegKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LegKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LegKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive a leg key from raw endpoint names.
///
/// `from` is `None` for the trip start and `to` is `None` for the trip end.
/// This is the entry point for UI controls that need the same key the
/// composer looks up.
///
/// # Examples
/// ```
/// use wayfare_core::{LegRole, resolve_leg_identity};
///
/// let key = resolve_leg_identity(Some("Cafe"), Some("Park"), 2, LegRole::DiningTo);
/// assert_eq!(key.as_str(), "Cafe~Park~2~dining-to");
/// ```
pub fn resolve_leg_identity(
    from: Option<&str>,
    to: Option<&str>,
    index: usize,
    role: LegRole,
) -> LegKey {
    LegIdentity {
        from: Endpoint::or_start(from),
        to: Endpoint::or_end(to),
        index,
        role,
    }
    .key()
}

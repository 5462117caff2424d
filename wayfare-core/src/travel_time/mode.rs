//! The two supported ways of travelling a leg.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How a leg is travelled.
///
/// # Examples
/// ```
/// use wayfare_core::TravelMode;
///
/// assert_eq!(TravelMode::Driving.other(), TravelMode::Walking);
/// assert_eq!("walking".parse::<TravelMode>(), Ok(TravelMode::Walking));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// Travel by car.
    #[default]
    Driving,
    /// Travel on foot.
    Walking,
}

/// Error returned when a string names no [`TravelMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode '{0}'")]
pub struct ParseTravelModeError(pub String);

impl TravelMode {
    /// Both modes, in display order.
    pub const ALL: [Self; 2] = [Self::Driving, Self::Walking];

    /// Return the mode as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
        }
    }

    /// The alternative mode.
    pub const fn other(self) -> Self {
        match self {
            Self::Driving => Self::Walking,
            Self::Walking => Self::Driving,
        }
    }

    /// Display glyph for legs travelled in this mode.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Driving => "\u{1F697}",
            Self::Walking => "\u{1F6B6}",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = ParseTravelModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" | "drive" | "car" => Ok(Self::Driving),
            "walking" | "walk" | "foot" => Ok(Self::Walking),
            _ => Err(ParseTravelModeError(s.to_owned())),
        }
    }
}

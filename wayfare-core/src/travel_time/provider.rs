//! Travel-time provider trait and the leg requests it answers.

use geo::Coord;

use crate::segment::LegIdentity;

use super::error::TravelTimeError;
use super::estimates::LegEstimate;
use super::mode::TravelMode;

/// A leg whose travel time should be fetched.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
#[derive(Debug, Clone, PartialEq)]
pub struct LegRequest {
    /// Identity the resulting estimate is cached under.
    pub identity: LegIdentity,
    /// Where the leg starts.
    pub origin: Coord<f64>,
    /// Where the leg ends.
    pub destination: Coord<f64>,
}

/// Estimate travel time and distance between two coordinates.
///
/// Implementations typically call a routing service. The engine never calls
/// a provider during composition; callers populate
/// [`ProviderEstimates`](super::ProviderEstimates) with
/// [`ProviderEstimates::refresh`](super::ProviderEstimates::refresh) and
/// recompose as results arrive. Providers must be `Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use wayfare_core::{LegEstimate, TravelMode, TravelTimeError, TravelTimeProvider};
///
/// struct StraightLine;
///
/// impl TravelTimeProvider for StraightLine {
///     fn estimate(
///         &self,
///         _origin: Coord<f64>,
///         _destination: Coord<f64>,
///         mode: TravelMode,
///     ) -> Result<LegEstimate, TravelTimeError> {
///         match mode {
///             TravelMode::Driving => Ok(LegEstimate::new(5, 2_000)),
///             TravelMode::Walking => Err(TravelTimeError::NoRoute),
///         }
///     }
/// }
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let estimate = StraightLine.estimate(origin, origin, TravelMode::Driving)?;
/// assert_eq!(estimate.duration_minutes, 5);
/// # Ok::<(), TravelTimeError>(())
/// ```
pub trait TravelTimeProvider: Send + Sync {
    /// Return the estimate for travelling from `origin` to `destination`.
    fn estimate(
        &self,
        origin: Coord<f64>,
        destination: Coord<f64>,
        mode: TravelMode,
    ) -> Result<LegEstimate, TravelTimeError>;
}

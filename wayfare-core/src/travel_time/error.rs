use thiserror::Error;

/// Errors from [`crate::travel_time::TravelTimeProvider::estimate`].
///
/// The composer never sees these: a failed fetch is recorded as a missing
/// estimate and resolution falls back accordingly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TravelTimeError {
    /// The provider could not be reached or refused the request.
    #[error("travel time provider unavailable: {reason}")]
    Unavailable {
        /// Provider-specific explanation.
        reason: String,
    },
    /// No route exists between the endpoints for the requested mode.
    #[error("no route between the requested endpoints")]
    NoRoute,
    /// The provider did not answer in time.
    #[error("travel time request timed out")]
    Timeout,
}

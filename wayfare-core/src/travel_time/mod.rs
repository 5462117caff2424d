//! Travel legs: modes, provider estimates and resolution.
//!
//! Estimates arrive from an external [`TravelTimeProvider`] asynchronously
//! to composition. The composer only ever reads a snapshot of
//! [`ProviderEstimates`] and degrades through [`resolve_leg`]'s fallback
//! ladder when an estimate is missing.

mod error;
mod estimates;
mod mode;
mod provider;
mod resolver;
mod selection;

pub use error::TravelTimeError;
pub use estimates::{LegEstimate, ModeEstimates, ProviderEstimates};
pub use mode::{ParseTravelModeError, TravelMode};
pub use provider::{LegRequest, TravelTimeProvider};
pub use resolver::{
    DEFAULT_LEG_ESTIMATE, FallbackHint, LegSource, ResolvedLeg, resolve_leg, resolve_leg_with,
};
pub use selection::ModeSelections;

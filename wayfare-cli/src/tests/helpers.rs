//! Test helpers for writing trip documents to temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use tempfile::TempDir;
use wayfare_core::{
    ClockTime, DayPlan, LegEstimate, LegIdentity, ModeSelections, ProviderEstimates, Stop,
    TravelMode,
};

use crate::schedule::TripDocument;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Create a temporary directory and the path of a trip file inside it.
pub(super) fn trip_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let trip_path = root.join("trip.json");
    (tmp, trip_path)
}

/// A one-day trip: 10 minutes driving to A (60 minute visit), then 20
/// minutes walking to B (45 minute visit).
pub(super) fn sample_trip() -> TripDocument {
    let start: ClockTime = "09:00".parse().expect("valid clock time");
    let stops = vec![
        Stop::new("a", "A", Coord { x: 2.29, y: 48.85 }).with_visit_override(60),
        Stop::new("b", "B", Coord { x: 2.33, y: 48.86 }).with_visit_override(45),
    ];
    let first = LegIdentity::direct(None, "A", 0).key();
    let second = LegIdentity::direct(Some("A"), "B", 1).key();
    let estimates = ProviderEstimates::new()
        .with(first, TravelMode::Driving, LegEstimate::new(10, 5_000))
        .with(second.clone(), TravelMode::Walking, LegEstimate::new(20, 1_600))
        .with(second.clone(), TravelMode::Driving, LegEstimate::new(8, 2_400));
    let selections = ModeSelections::new().with(second, TravelMode::Walking);
    TripDocument {
        days: vec![DayPlan::new(start, stops)],
        selections,
        estimates,
    }
}

/// Serialise [`sample_trip`] to `path`.
pub(super) fn write_sample_trip(path: &Utf8Path) {
    let payload = serde_json::to_string_pretty(&sample_trip()).expect("serialise trip");
    write_utf8(path, payload.as_bytes());
}

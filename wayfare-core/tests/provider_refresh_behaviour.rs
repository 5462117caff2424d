//! Behavioural tests for populating estimates from a provider.

use std::cell::{Cell, RefCell};

use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wayfare_core::test_support::{FailingTravelTimeProvider, FixedTravelTimeProvider};
use wayfare_core::{
    ClockTime, Composer, DayPlan, DaySchedule, LegEstimate, ModeSelections, ProviderEstimates,
    Stop, TravelTimeProvider,
};

struct RefreshWorld {
    day: RefCell<DayPlan>,
    provider: RefCell<Option<Box<dyn TravelTimeProvider>>>,
    estimates: RefCell<ProviderEstimates>,
    stored: Cell<usize>,
    schedule: RefCell<Option<DaySchedule>>,
}

#[fixture]
fn world() -> RefreshWorld {
    RefreshWorld {
        day: RefCell::new(DayPlan::new(ClockTime::MIDNIGHT, Vec::new())),
        provider: RefCell::new(None),
        estimates: RefCell::new(ProviderEstimates::new()),
        stored: Cell::new(0),
        schedule: RefCell::new(None),
    }
}

#[given("a day starting at {start} from a known location")]
fn given_known_start(world: &RefreshWorld, start: String) {
    let start: ClockTime = start.parse().expect("valid clock time");
    world
        .day
        .replace(DayPlan::new(start, Vec::new()).with_start_location(Coord { x: 2.29, y: 48.85 }));
}

#[given("a day starting at {start} from an unknown location")]
fn given_unknown_start(world: &RefreshWorld, start: String) {
    let start: ClockTime = start.parse().expect("valid clock time");
    world.day.replace(DayPlan::new(start, Vec::new()));
}

#[given("a stop {name} visited for {minutes} minutes")]
fn given_stop(world: &RefreshWorld, name: String, minutes: u32) {
    let mut day = world.day.borrow_mut();
    let offset = f64::from(u32::try_from(day.stops.len()).expect("few stops"));
    let location = Coord {
        x: 2.3 + offset / 100.0,
        y: 48.86,
    };
    day.stops
        .push(Stop::new(name.to_lowercase(), name, location).with_visit_override(minutes));
}

#[given("a provider answering {driving} minutes driving and {walking} minutes walking")]
fn given_fixed_provider(world: &RefreshWorld, driving: u32, walking: u32) {
    let provider = FixedTravelTimeProvider::new(
        LegEstimate::new(driving, 4_000),
        LegEstimate::new(walking, 2_500),
    );
    world.provider.replace(Some(Box::new(provider)));
}

#[given("an unavailable provider")]
fn given_failing_provider(world: &RefreshWorld) {
    world
        .provider
        .replace(Some(Box::new(FailingTravelTimeProvider)));
}

#[when("estimates are refreshed from the provider")]
fn when_refreshed(world: &RefreshWorld) {
    let provider = world.provider.borrow();
    let provider = provider.as_deref().expect("provider should be configured");
    let requests = world.day.borrow().leg_requests();
    let stored = world.estimates.borrow_mut().refresh(provider, &requests);
    world.stored.set(stored);
}

#[when("the day is composed")]
fn when_composed(world: &RefreshWorld) {
    let schedule = Composer::new().compose_day(
        &world.day.borrow(),
        &ModeSelections::new(),
        &world.estimates.borrow(),
    );
    world.schedule.replace(Some(schedule));
}

#[then("{count} estimates are stored")]
fn then_stored(world: &RefreshWorld, count: usize) {
    assert_eq!(world.stored.get(), count);
}

#[then("stop {name} runs from {arrival} to {departure}")]
fn then_stop_times(world: &RefreshWorld, name: String, arrival: String, departure: String) {
    let schedule = world.schedule.borrow();
    let item = schedule
        .as_ref()
        .expect("day should be composed")
        .items
        .iter()
        .find(|i| i.name == name)
        .expect("stop should be scheduled");
    assert_eq!(item.arrival.to_string(), arrival);
    assert_eq!(item.departure.to_string(), departure);
}

#[scenario(path = "tests/features/provider_refresh.feature", index = 0)]
fn fetched_estimates_drive_composition(world: RefreshWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/provider_refresh.feature", index = 1)]
fn unavailable_provider_falls_back(world: RefreshWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/provider_refresh.feature", index = 2)]
fn unknown_start_is_not_requested(world: RefreshWorld) {
    let _ = world;
}

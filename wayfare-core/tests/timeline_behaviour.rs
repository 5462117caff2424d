//! Behavioural tests for single-day composition.

use std::cell::{Cell, RefCell};

use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wayfare_core::{
    ClockTime, Composer, DayPlan, DaySchedule, DiningStop, ItemKind, LegEstimate, LegIdentity,
    ModeSelections, ProviderEstimates, Stop, TravelMode,
};

#[derive(Default)]
struct TimelineWorld {
    start: Cell<ClockTime>,
    stops: RefCell<Vec<Stop>>,
    return_dining: RefCell<Option<DiningStop>>,
    selections: RefCell<ModeSelections>,
    estimates: RefCell<ProviderEstimates>,
    schedule: RefCell<Option<DaySchedule>>,
}

impl TimelineWorld {
    /// Direct-leg identity arriving at the stop called `to`.
    fn direct_leg(&self, from: Option<&str>, to: &str) -> LegIdentity {
        let stops = self.stops.borrow();
        let index = stops
            .iter()
            .position(|s| s.name == to)
            .expect("stop should be declared before its leg");
        LegIdentity::direct(from, to, index)
    }

    fn dining_legs(&self, stop: &str) -> (LegIdentity, LegIdentity) {
        let stops = self.stops.borrow();
        let index = stops
            .iter()
            .position(|s| s.name == stop)
            .expect("stop should be declared before its dining stop");
        let previous = index
            .checked_sub(1)
            .and_then(|i| stops.get(i))
            .map(|s| s.name.as_str());
        LegIdentity::dining_pair(previous, Some(stop), index)
    }

    fn with_schedule<T>(&self, f: impl FnOnce(&DaySchedule) -> T) -> T {
        let schedule = self.schedule.borrow();
        f(schedule.as_ref().expect("day should be composed"))
    }
}

#[fixture]
fn world() -> TimelineWorld {
    TimelineWorld::default()
}

fn mode(text: &str) -> TravelMode {
    text.parse().expect("valid travel mode")
}

#[given("a day starting at {start}")]
fn given_start(world: &TimelineWorld, start: String) {
    world.start.set(start.parse().expect("valid clock time"));
}

#[given("a stop {name} visited for {minutes} minutes")]
fn given_stop(world: &TimelineWorld, name: String, minutes: u32) {
    let stop = Stop::new(name.to_lowercase(), name, Coord { x: 0.0, y: 0.0 })
        .with_visit_override(minutes);
    world.stops.borrow_mut().push(stop);
}

#[given("the leg to {to} takes {minutes} minutes by {travel}")]
fn given_first_leg(world: &TimelineWorld, to: String, minutes: u32, travel: String) {
    let key = world.direct_leg(None, &to).key();
    world
        .estimates
        .borrow_mut()
        .insert(key, mode(&travel), LegEstimate::new(minutes, 1_000));
}

#[given("the leg from {from} to {to} takes {minutes} minutes by {travel}")]
fn given_leg(world: &TimelineWorld, from: String, to: String, minutes: u32, travel: String) {
    let key = world.direct_leg(Some(&from), &to).key();
    world
        .estimates
        .borrow_mut()
        .insert(key, mode(&travel), LegEstimate::new(minutes, 1_000));
}

#[given("{travel} is selected from {from} to {to}")]
fn given_selection(world: &TimelineWorld, travel: String, from: String, to: String) {
    let key = world.direct_leg(Some(&from), &to).key();
    world.selections.borrow_mut().select(key, mode(&travel));
}

#[given("a dining stop {name} before {stop} with a {minutes} minute dwell")]
fn given_dining(world: &TimelineWorld, name: String, stop: String, minutes: u32) {
    let dining =
        DiningStop::new(name.to_lowercase(), name, Coord { x: 0.0, y: 0.0 }).with_dwell(minutes);
    let mut stops = world.stops.borrow_mut();
    let target = stops
        .iter_mut()
        .find(|s| s.name == stop)
        .expect("stop should be declared before its dining stop");
    target.dining.push(dining);
}

#[given("each dining leg before {stop} takes {minutes} minutes by {travel}")]
fn given_dining_legs(world: &TimelineWorld, stop: String, minutes: u32, travel: String) {
    let (to, from) = world.dining_legs(&stop);
    let mut estimates = world.estimates.borrow_mut();
    for identity in [to, from] {
        estimates.insert(identity.key(), mode(&travel), LegEstimate::new(minutes, 500));
    }
}

#[given("a return dining stop {name} with a {minutes} minute dwell")]
fn given_return_dining(world: &TimelineWorld, name: String, minutes: u32) {
    let dining =
        DiningStop::new(name.to_lowercase(), name, Coord { x: 0.0, y: 0.0 }).with_dwell(minutes);
    world.return_dining.replace(Some(dining));
}

#[when("the traveller switches the leg from {from} to {to} to {travel}")]
fn when_switch(world: &TimelineWorld, from: String, to: String, travel: String) {
    let key = world.direct_leg(Some(&from), &to).key();
    world.selections.borrow_mut().select(key, mode(&travel));
}

#[when("the day is composed")]
fn when_composed(world: &TimelineWorld) {
    let mut plan = DayPlan::new(world.start.get(), world.stops.borrow().clone());
    plan.return_dining = world.return_dining.borrow().clone();
    let schedule = Composer::new().compose_day(
        &plan,
        &world.selections.borrow(),
        &world.estimates.borrow(),
    );
    world.schedule.replace(Some(schedule));
}

#[then("stop {name} runs from {arrival} to {departure}")]
fn then_stop_times(world: &TimelineWorld, name: String, arrival: String, departure: String) {
    world.with_schedule(|schedule| {
        let item = schedule
            .items
            .iter()
            .find(|i| i.kind == ItemKind::Stop && i.name == name)
            .expect("stop should be scheduled");
        assert_eq!(item.arrival.to_string(), arrival);
        assert_eq!(item.departure.to_string(), departure);
    });
}

#[then("the dining stop before {stop} runs from {arrival} to {departure}")]
fn then_dining_times(world: &TimelineWorld, stop: String, arrival: String, departure: String) {
    world.with_schedule(|schedule| {
        let dining = schedule
            .items
            .iter()
            .find(|i| i.name == stop)
            .and_then(|i| i.dining.as_ref())
            .expect("stop should have a timed dining stop");
        assert_eq!(dining.arrival.to_string(), arrival);
        assert_eq!(dining.departure.to_string(), departure);
    });
}

#[then("the day lasts {minutes} minutes")]
fn then_total(world: &TimelineWorld, minutes: u32) {
    world.with_schedule(|schedule| assert_eq!(schedule.total_minutes(), minutes));
}

#[then("the day crosses midnight")]
fn then_crosses_midnight(world: &TimelineWorld) {
    world.with_schedule(|schedule| assert!(schedule.crosses_midnight()));
}

#[scenario(path = "tests/features/timeline.feature", index = 0)]
fn arrivals_chain(world: TimelineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/timeline.feature", index = 1)]
fn dining_replaces_leg(world: TimelineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/timeline.feature", index = 2)]
fn mode_switch_shifts_later_stops(world: TimelineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/timeline.feature", index = 3)]
fn return_dining_closes_day(world: TimelineWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/timeline.feature", index = 4)]
fn late_schedule_crosses_midnight(world: TimelineWorld) {
    let _ = world;
}

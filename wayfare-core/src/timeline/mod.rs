//! Compose a single day's stops into a gap-free schedule.
//!
//! Composition is one forward pass over the stops. Each stop's arrival is
//! the previous departure (or the trip start) plus either the direct leg or,
//! when a dining stop is attached, the whole dining detour. Departure is
//! arrival plus the resolved visit length.
//!
//! The pass is a pure function of its inputs. After changing a mode, a visit
//! length or a dining stop, callers recompose the whole day; there is no
//! incremental path, so no downstream time can go stale.

mod config;
mod dining;

pub use config::{DEFAULT_DWELL_MINUTES, DEFAULT_VISIT_MINUTES, TimelineConfig};
pub use dining::{DiningPosition, DiningSchedule};

use log::{debug, warn};

use crate::clock::ClockTime;
use crate::duration::parse_duration_within;
use crate::itinerary::DayPlan;
use crate::segment::LegIdentity;
use crate::stop::{DiningStop, Stop};
use crate::travel_time::{FallbackHint, ModeSelections, ProviderEstimates, ResolvedLeg};

/// What a [`ScheduleItem`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ItemKind {
    /// A visited stop.
    Stop,
    /// A dining stop taken after the last stop, before returning.
    ReturnDining,
}

/// One timed entry of a day's schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleItem {
    /// Whether this is a stop or the trailing return dining stop.
    pub kind: ItemKind,
    /// Identifier of the stop or dining stop.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position in the day's stop sequence.
    pub index: usize,
    /// Arrival at the stop.
    pub arrival: ClockTime,
    /// Departure from the stop.
    pub departure: ClockTime,
    /// Resolved visit length; zero for a return dining item.
    pub visit_minutes: u32,
    /// The direct leg travelled to reach the stop. `None` when a dining
    /// detour replaced it.
    pub leg: Option<ResolvedLeg>,
    /// The dining detour taken on the way, if any.
    pub dining: Option<DiningSchedule>,
    /// Identifiers of further dining stops attached to the stop. They are
    /// shown but not timed.
    pub display_only_dining: Vec<String>,
}

impl ScheduleItem {
    /// Minutes spent travelling (and dining) between the previous departure
    /// and this arrival.
    pub fn approach_minutes(&self) -> u32 {
        match (&self.leg, &self.dining) {
            (_, Some(dining)) => dining.total_minutes(),
            (Some(leg), None) => leg.duration_minutes,
            (None, None) => 0,
        }
    }
}

/// A composed day.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfare_core::{ClockTime, ModeSelections, ProviderEstimates, Stop, compose};
///
/// let stops = vec![Stop::new("a", "A", Coord { x: 0.0, y: 0.0 }).with_visit_override(60)];
/// let start: ClockTime = "09:00".parse()?;
/// let day = compose(&stops, start, &ModeSelections::new(), &ProviderEstimates::new());
///
/// // Unknown legs take 15 minutes.
/// assert_eq!(day.items[0].arrival.to_string(), "09:15");
/// assert_eq!(day.end_time().to_string(), "10:15");
/// assert_eq!(day.total_minutes(), 75);
/// # Ok::<(), wayfare_core::ClockParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySchedule {
    /// When the day begins.
    pub start_time: ClockTime,
    /// One item per stop, plus a final return dining item when present.
    pub items: Vec<ScheduleItem>,
}

impl DaySchedule {
    /// The last departure, or the start time for an empty day.
    pub fn end_time(&self) -> ClockTime {
        self.items
            .last()
            .map_or(self.start_time, |item| item.departure)
    }

    /// Minutes from the start time to the last departure.
    ///
    /// Dining detours lie inside this span and are not added again.
    pub fn total_minutes(&self) -> u32 {
        self.end_time().elapsed_since(self.start_time)
    }

    /// Whether the schedule runs past midnight.
    ///
    /// Displayed clock times wrap modulo 24 hours, so such a schedule is
    /// reported rather than corrected. The serialised times keep a day
    /// offset.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time().crosses_midnight()
    }

    /// Whether the day has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Builds schedules from itineraries.
///
/// A composer holds only configuration; it keeps no state between passes
/// and may be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    config: TimelineConfig,
}

impl Composer {
    /// Construct a composer using default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a composer with explicit configuration.
    pub const fn with_config(config: TimelineConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Compose `stops` starting at `start_time`.
    pub fn compose(
        &self,
        stops: &[Stop],
        start_time: ClockTime,
        selections: &ModeSelections,
        estimates: &ProviderEstimates,
    ) -> DaySchedule {
        self.compose_parts(stops, start_time, None, selections, estimates)
    }

    /// Compose a day plan, including its return dining stop.
    pub fn compose_day(
        &self,
        day: &DayPlan,
        selections: &ModeSelections,
        estimates: &ProviderEstimates,
    ) -> DaySchedule {
        self.compose_parts(
            &day.stops,
            day.start_time,
            day.return_dining.as_ref(),
            selections,
            estimates,
        )
    }

    fn compose_parts(
        &self,
        stops: &[Stop],
        start_time: ClockTime,
        return_dining: Option<&DiningStop>,
        selections: &ModeSelections,
        estimates: &ProviderEstimates,
    ) -> DaySchedule {
        let mut items = Vec::with_capacity(stops.len() + 1);
        let mut anchor = start_time;
        let mut previous: Option<&str> = None;

        for (index, stop) in stops.iter().enumerate() {
            let item = self.compose_stop(index, stop, anchor, previous, selections, estimates);
            anchor = item.departure;
            previous = Some(stop.name.as_str());
            items.push(item);
        }

        if let Some(dining) = return_dining {
            let position = DiningPosition {
                previous,
                next: None,
                index: stops.len(),
            };
            let schedule =
                self.compose_dining_stop(dining, anchor, position, selections, estimates);
            items.push(ScheduleItem {
                kind: ItemKind::ReturnDining,
                id: dining.id.clone(),
                name: dining.name.clone(),
                index: stops.len(),
                arrival: schedule.departure,
                departure: schedule.departure,
                visit_minutes: 0,
                leg: None,
                dining: Some(schedule),
                display_only_dining: Vec::new(),
            });
        }

        let schedule = DaySchedule { start_time, items };
        debug!(
            "composed {} items from {start_time} to {}",
            schedule.items.len(),
            schedule.end_time()
        );
        if schedule.crosses_midnight() {
            warn!(
                "schedule starting {start_time} ends at {} on the next day",
                schedule.end_time()
            );
        }
        schedule
    }

    fn compose_stop(
        &self,
        index: usize,
        stop: &Stop,
        anchor: ClockTime,
        previous: Option<&str>,
        selections: &ModeSelections,
        estimates: &ProviderEstimates,
    ) -> ScheduleItem {
        let (arrival, leg, dining) = match stop.dining.first() {
            Some(first) => {
                let position = DiningPosition {
                    previous,
                    next: Some(stop.name.as_str()),
                    index,
                };
                let schedule =
                    self.compose_dining_stop(first, anchor, position, selections, estimates);
                (schedule.departure, None, Some(schedule))
            }
            None => {
                let identity = LegIdentity::direct(previous, &stop.name, index);
                let leg = self.resolve(&identity, stop.travel_hint.as_ref(), selections, estimates);
                (anchor.add_minutes(leg.duration_minutes), Some(leg), None)
            }
        };

        let display_only_dining: Vec<String> =
            stop.dining.iter().skip(1).map(|d| d.id.clone()).collect();
        if !display_only_dining.is_empty() {
            debug!(
                "stop {} has {} untimed dining stops",
                stop.id,
                display_only_dining.len()
            );
        }

        let visit_minutes = self.visit_minutes(stop);
        ScheduleItem {
            kind: ItemKind::Stop,
            id: stop.id.clone(),
            name: stop.name.clone(),
            index,
            arrival,
            departure: arrival.add_minutes(visit_minutes),
            visit_minutes,
            leg,
            dining,
            display_only_dining,
        }
    }

    /// Visit length by precedence: override, computed, typical, default.
    fn visit_minutes(&self, stop: &Stop) -> u32 {
        stop.visit_override
            .or(stop.computed_visit)
            .or_else(|| {
                stop.typical_time_spent
                    .as_ref()
                    .map(|typical| parse_duration_within(typical, &self.config.parsed_visit_bounds))
            })
            .unwrap_or(self.config.default_visit_minutes)
    }

    pub(crate) fn resolve(
        &self,
        identity: &LegIdentity,
        hint: Option<&FallbackHint>,
        selections: &ModeSelections,
        estimates: &ProviderEstimates,
    ) -> ResolvedLeg {
        let key = identity.key();
        let mode = selections.mode_for(&key, self.config.default_mode);
        crate::travel_time::resolve_leg_with(&key, mode, estimates, hint, self.config.default_leg)
    }
}

/// Compose `stops` with the default configuration.
///
/// This is the pure entry point: identical inputs always produce identical
/// schedules.
pub fn compose(
    stops: &[Stop],
    start_time: ClockTime,
    selections: &ModeSelections,
    estimates: &ProviderEstimates,
) -> DaySchedule {
    Composer::new().compose(stops, start_time, selections, estimates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TravelMode;
    use crate::travel_time::{LegEstimate, LegSource};
    use geo::Coord;
    use rstest::{fixture, rstest};

    fn at(clock: &str) -> ClockTime {
        clock.parse().expect("valid test clock")
    }

    fn place(name: &str) -> Stop {
        Stop::new(name.to_lowercase(), name, Coord { x: 0.0, y: 0.0 })
    }

    #[fixture]
    fn stops() -> Vec<Stop> {
        vec![
            place("A").with_visit_override(60),
            place("B").with_visit_override(45),
        ]
    }

    #[fixture]
    fn estimates() -> ProviderEstimates {
        ProviderEstimates::new()
            .with(
                LegIdentity::direct(None, "A", 0).key(),
                TravelMode::Driving,
                LegEstimate::new(10, 5_000),
            )
            .with(
                LegIdentity::direct(Some("A"), "B", 1).key(),
                TravelMode::Walking,
                LegEstimate::new(20, 1_600),
            )
            .with(
                LegIdentity::direct(Some("A"), "B", 1).key(),
                TravelMode::Driving,
                LegEstimate::new(8, 2_400),
            )
    }

    #[fixture]
    fn selections() -> ModeSelections {
        ModeSelections::new().with(
            LegIdentity::direct(Some("A"), "B", 1).key(),
            TravelMode::Walking,
        )
    }

    #[rstest]
    fn chains_legs_and_visits(
        stops: Vec<Stop>,
        selections: ModeSelections,
        estimates: ProviderEstimates,
    ) {
        let day = compose(&stops, at("09:00"), &selections, &estimates);
        let times: Vec<_> = day
            .items
            .iter()
            .map(|i| (i.arrival.to_string(), i.departure.to_string()))
            .collect();
        assert_eq!(
            times,
            vec![
                ("09:10".to_owned(), "10:10".to_owned()),
                ("10:30".to_owned(), "11:15".to_owned()),
            ]
        );
    }

    #[rstest]
    fn dining_replaces_direct_leg(
        stops: Vec<Stop>,
        selections: ModeSelections,
        estimates: ProviderEstimates,
    ) {
        let mut stops = stops;
        let (to, from) = LegIdentity::dining_pair(Some("A"), Some("B"), 1);
        let estimates = estimates
            .with(to.key(), TravelMode::Driving, LegEstimate::new(5, 700))
            .with(from.key(), TravelMode::Driving, LegEstimate::new(5, 700));
        let lunch = DiningStop::new("lunch", "Lunch", Coord { x: 0.0, y: 0.0 }).with_dwell(45);
        stops[1] = stops[1].clone().with_dining(lunch);

        let day = compose(&stops, at("09:00"), &selections, &estimates);
        let b = &day.items[1];
        let dining = b.dining.as_ref().expect("dining schedule");
        assert_eq!(dining.arrival.to_string(), "10:15");
        assert_eq!(dining.departure.to_string(), "11:05");
        assert_eq!(b.arrival.to_string(), "11:05");
        assert_eq!(b.departure.to_string(), "11:50");
        assert_eq!(b.visit_minutes, 45);
        assert!(b.leg.is_none());
        assert_eq!(b.approach_minutes(), 55);
    }

    #[rstest]
    fn only_first_dining_stop_is_timed(stops: Vec<Stop>) {
        let mut stops = stops;
        let origin = Coord { x: 0.0, y: 0.0 };
        stops[1] = stops[1]
            .clone()
            .with_dining(DiningStop::new("lunch", "Lunch", origin).with_dwell(30))
            .with_dining(DiningStop::new("coffee", "Coffee", origin).with_dwell(20));

        let day = compose(&stops, at("09:00"), &ModeSelections::new(), &ProviderEstimates::new());
        let b = &day.items[1];
        // 15 to lunch, 30 dwell, 15 back on route; coffee is untimed.
        assert_eq!(b.arrival.elapsed_since(day.items[0].departure), 60);
        assert_eq!(b.display_only_dining, vec!["coffee".to_owned()]);
    }

    #[rstest]
    fn dining_before_first_stop_anchors_on_start() {
        let breakfast =
            DiningStop::new("breakfast", "Breakfast", Coord { x: 0.0, y: 0.0 }).with_dwell(40);
        let stops = vec![place("A").with_visit_override(30).with_dining(breakfast)];
        let day = compose(&stops, at("08:00"), &ModeSelections::new(), &ProviderEstimates::new());
        let dining = day.items[0].dining.as_ref().expect("dining schedule");
        assert_eq!(dining.arrival.to_string(), "08:15");
        assert!(dining.to_leg.key.as_str().ends_with("pre-first-dining-to"));
        assert_eq!(day.items[0].arrival.to_string(), "09:10");
    }

    #[rstest]
    #[case::override_wins(Some(30), Some(50), Some("2 hours"), 30)]
    #[case::computed_next(None, Some(50), Some("2 hours"), 50)]
    #[case::typical_text(None, None, Some("2 hours"), 120)]
    #[case::typical_clamped(None, None, Some("5 min"), 15)]
    #[case::default_last(None, None, None, 60)]
    fn visit_duration_precedence(
        #[case] visit_override: Option<u32>,
        #[case] computed: Option<u32>,
        #[case] typical: Option<&str>,
        #[case] expected: u32,
    ) {
        let mut stop = place("A");
        stop.visit_override = visit_override;
        stop.computed_visit = computed;
        stop.typical_time_spent = typical.map(Into::into);
        let day = compose(&[stop], at("09:00"), &ModeSelections::new(), &ProviderEstimates::new());
        assert_eq!(day.items[0].visit_minutes, expected);
    }

    #[rstest]
    fn return_dining_appends_pseudo_item(
        stops: Vec<Stop>,
        selections: ModeSelections,
        estimates: ProviderEstimates,
    ) {
        let day_plan = DayPlan::new(at("09:00"), stops).with_return_dining(
            DiningStop::new("dinner", "Dinner", Coord { x: 0.0, y: 0.0 }).with_dwell(60),
        );
        let day = Composer::new().compose_day(&day_plan, &selections, &estimates);
        assert_eq!(day.items.len(), 3);
        let last = &day.items[2];
        assert_eq!(last.kind, ItemKind::ReturnDining);
        assert_eq!(last.visit_minutes, 0);
        assert_eq!(last.index, 2);
        // 11:15 + 15 to dinner + 60 + 15 back.
        assert_eq!(last.arrival.to_string(), "12:45");
        assert_eq!(last.arrival, last.departure);
        let dining = last.dining.as_ref().expect("dining schedule");
        assert!(dining.to_leg.key.as_str().contains("@end"));
        assert_eq!(day.total_minutes(), 225);
    }

    #[rstest]
    fn empty_day_ends_at_start() {
        let day = compose(&[], at("09:00"), &ModeSelections::new(), &ProviderEstimates::new());
        assert!(day.is_empty());
        assert_eq!(day.end_time(), at("09:00"));
        assert_eq!(day.total_minutes(), 0);
    }

    #[rstest]
    fn reports_midnight_crossing() {
        let stops = vec![place("Late").with_visit_override(120)];
        let day = compose(&stops, at("23:00"), &ModeSelections::new(), &ProviderEstimates::new());
        assert!(day.crosses_midnight());
        assert_eq!(day.items[0].departure.to_string(), "01:15");
        assert!(day.items[0].departure > day.items[0].arrival);
    }

    #[rstest]
    fn config_defaults_drive_unknown_values() {
        let config = TimelineConfig::default()
            .with_default_visit_minutes(30)
            .with_default_mode(TravelMode::Walking);
        let key = LegIdentity::direct(None, "A", 0).key();
        let estimates = ProviderEstimates::new()
            .with(key.clone(), TravelMode::Walking, LegEstimate::new(12, 900))
            .with(key, TravelMode::Driving, LegEstimate::new(4, 900));
        let day = Composer::with_config(config).compose(
            &[place("A")],
            at("09:00"),
            &ModeSelections::new(),
            &estimates,
        );
        let item = &day.items[0];
        let leg = item.leg.as_ref().expect("direct leg");
        assert_eq!(leg.mode, TravelMode::Walking);
        assert_eq!(leg.source, LegSource::Provider);
        assert_eq!(item.departure.minutes(), 540 + 12 + 30);
    }
}

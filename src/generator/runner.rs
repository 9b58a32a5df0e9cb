//! Greedy schedule construction.
//!
//! [`ScheduleGenerator`] builds one line per strategy:
//! filter → order → single greedy pass → days-off accounting.

use super::config::GeneratorConfig;
use super::types::{GenerationResult, Schedule, StopReason, Strategy};
use crate::catalog::{Pairing, PairingCatalog};
use crate::config::EngineConfig;
use crate::constraints::{ConstraintValidator, DutyRoster};
use crate::ordering::{
    MostBlockHours, OrderingContext, PreferenceScore, RuleEngine, ShortestTrip, WeekendsKeptFree,
};
use crate::preference::{Preference, PreferenceKind, PreferenceSet};
use crate::scoring::Scorer;
use chrono::NaiveDate;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, trace, warn};

/// Builds monthly schedules from a catalog and a preference set.
///
/// Each strategy is an independent, deterministic single pass over a
/// pre-sorted candidate list with no backtracking, so running the same
/// inputs twice yields identical schedules.
///
/// # Usage
///
/// ```ignore
/// let config = EngineConfig::default();
/// let result = ScheduleGenerator::run(&catalog, &prefs, &config);
/// for schedule in &result.schedules {
///     println!("{}: {:.1} BH, {} days off", schedule.strategy.title(),
///         schedule.total_block_hours, schedule.days_off);
/// }
/// ```
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Builds one schedule per configured strategy.
    ///
    /// The configuration is assumed valid; see [`EngineConfig::validate`].
    pub fn run(
        catalog: &PairingCatalog,
        prefs: &PreferenceSet,
        config: &EngineConfig,
    ) -> GenerationResult {
        Self::run_with_cancel(catalog, prefs, config, None)
    }

    /// Runs generation with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, or the
    /// configured time limit elapses, every strategy stops before its next
    /// candidate and reports the line built so far.
    pub fn run_with_cancel(
        catalog: &PairingCatalog,
        prefs: &PreferenceSet,
        config: &EngineConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GenerationResult {
        let start_time = Instant::now();
        let deadline = config.generator.time_limit().map(|limit| start_time + limit);
        let stop = Interrupt {
            cancel: cancel.as_deref(),
            deadline,
        };

        let build = |strategy: &Strategy| build_schedule(*strategy, catalog, prefs, config, &stop);

        #[cfg(feature = "parallel")]
        let outcomes: Vec<(Schedule, StopReason)> = if config.generator.parallel {
            config.generator.strategies.par_iter().map(build).collect()
        } else {
            config.generator.strategies.iter().map(build).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<(Schedule, StopReason)> =
            config.generator.strategies.iter().map(build).collect();

        let cancelled = outcomes.iter().any(|(_, r)| *r == StopReason::Cancelled);
        let timed_out = outcomes.iter().any(|(_, r)| *r == StopReason::TimedOut);

        GenerationResult {
            schedules: outcomes.into_iter().map(|(s, _)| s).collect(),
            cancelled,
            timed_out,
            elapsed: start_time.elapsed(),
        }
    }

    /// Builds the schedule of a single strategy, without time limit.
    pub fn run_strategy(
        strategy: Strategy,
        catalog: &PairingCatalog,
        prefs: &PreferenceSet,
        config: &EngineConfig,
    ) -> Schedule {
        let stop = Interrupt {
            cancel: None,
            deadline: None,
        };
        build_schedule(strategy, catalog, prefs, config, &stop).0
    }
}

/// External stop conditions shared by all strategies of a run.
struct Interrupt<'a> {
    cancel: Option<&'a AtomicBool>,
    deadline: Option<Instant>,
}

impl Interrupt<'_> {
    fn check(&self) -> Option<StopReason> {
        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Some(StopReason::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(StopReason::TimedOut);
        }
        None
    }
}

fn build_schedule(
    strategy: Strategy,
    catalog: &PairingCatalog,
    prefs: &PreferenceSet,
    config: &EngineConfig,
    interrupt: &Interrupt<'_>,
) -> (Schedule, StopReason) {
    let started = Instant::now();
    let scorer = Scorer::new(&config.scoring);
    let validator = ConstraintValidator::new(&config.limits);
    let blocked = prefs.hard_blocked_dates();

    // 1. Candidates: open trips clear of hard-blocked dates
    let candidates: Vec<&Pairing> = catalog
        .available()
        .filter(|p| validator.avoids_blocked_dates(p, &blocked))
        .filter(|p| {
            config
                .generator
                .min_candidate_score
                .is_none_or(|min| scorer.score(p, prefs) >= min)
        })
        .collect();

    debug!(
        strategy = %strategy,
        available = catalog.available().count(),
        candidates = candidates.len(),
        blocked_dates = blocked.len(),
        "candidates filtered"
    );

    // 2. Strategy order; the catalog's id order breaks remaining ties
    let ordering_prefs = strategy_preferences(strategy, prefs, &config.generator);
    let context = OrderingContext {
        month: catalog.month(),
        scorer,
        preferences: &ordering_prefs,
    };
    let engine = ordering_for(strategy);
    trace!(strategy = %strategy, rules = ?engine.rule_names(), "ordering candidates");
    let ordered = engine.sort_refs(&candidates, &context);

    // 3. Single greedy pass, no backtracking
    let mut roster = DutyRoster::new(catalog.pre_assigned());
    let mut reason = StopReason::Exhausted;

    for candidate in ordered {
        if let Some(r) = interrupt.check() {
            reason = r;
            break;
        }
        match validator.first_violation(&roster, candidate, &blocked) {
            None => {
                roster.push(candidate);
                debug!(
                    strategy = %strategy,
                    pairing = %candidate.id,
                    block_hours = roster.total_block_hours(),
                    "pairing accepted"
                );
            }
            Some(violation) => {
                trace!(strategy = %strategy, pairing = %candidate.id, %violation, "pairing skipped");
            }
        }
    }

    let schedule = finish(strategy, &roster, catalog);

    match reason {
        StopReason::Exhausted => {}
        StopReason::Cancelled => warn!(strategy = %strategy, "schedule generation cancelled"),
        StopReason::TimedOut => warn!(strategy = %strategy, "schedule generation hit time limit"),
    }
    info!(
        strategy = %strategy,
        trips = schedule.trip_count(),
        total_block_hours = schedule.total_block_hours,
        days_off = schedule.days_off,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "schedule built"
    );

    (schedule, reason)
}

/// Preferences a strategy's ordering rules score against.
fn strategy_preferences<'p>(
    strategy: Strategy,
    prefs: &'p PreferenceSet,
    config: &GeneratorConfig,
) -> Cow<'p, PreferenceSet> {
    match strategy {
        Strategy::LifestyleComfort => {
            let mut comfort = prefs.comfort_only();
            if let Some(days) = config.lifestyle_max_duration {
                if !comfort.contains_kind(PreferenceKind::MaxDuration) {
                    comfort.add_labeled(Preference::max_duration(days), "Short Trips");
                }
            }
            Cow::Owned(comfort)
        }
        Strategy::EarningsMax | Strategy::WeekendsFree => Cow::Borrowed(prefs),
    }
}

fn ordering_for<'c>(strategy: Strategy) -> RuleEngine<Pairing, OrderingContext<'c>> {
    match strategy {
        Strategy::EarningsMax => RuleEngine::new().with_rule(MostBlockHours),
        Strategy::LifestyleComfort => RuleEngine::new()
            .with_rule(ShortestTrip)
            .with_rule(PreferenceScore),
        Strategy::WeekendsFree => RuleEngine::new()
            .with_rule(WeekendsKeptFree)
            .with_rule(MostBlockHours),
    }
}

/// Freezes the roster into a schedule and counts days off.
fn finish(strategy: Strategy, roster: &DutyRoster<'_>, catalog: &PairingCatalog) -> Schedule {
    let month = catalog.month();
    let mut pairings: Vec<Pairing> = roster.selected().iter().map(|p| (*p).clone()).collect();
    pairings.sort_by(|a, b| a.departure.cmp(&b.departure).then_with(|| a.id.cmp(&b.id)));

    let worked: BTreeSet<NaiveDate> = pairings
        .iter()
        .chain(catalog.pre_assigned())
        .flat_map(|p| p.span_dates())
        .filter(|d| month.contains(*d))
        .collect();

    Schedule {
        strategy,
        total_block_hours: roster.total_block_hours(),
        days_off: month.num_days().saturating_sub(worked.len() as u32),
        pairings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BidMonth;
    use crate::constraints::ConstraintLimits;
    use crate::scoring::ScoringConfig;
    use chrono::{Duration, NaiveDateTime, Weekday};
    use proptest::prelude::{any, prop, prop_assert, prop_assert_eq, proptest, ProptestConfig};
    use proptest::strategy::Strategy as Gen;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn trip(id: &str, from: u32, to: u32, block: f64) -> Pairing {
        Pairing::new(id, at(from, 8), at(to, 18))
            .with_route_str("JFK - MIA - JFK")
            .with_aircraft("737")
            .with_block_hours(block)
    }

    fn sequential() -> EngineConfig {
        EngineConfig::default().with_generator(GeneratorConfig::default().with_parallel(false))
    }

    fn ids(schedule: &Schedule) -> Vec<&str> {
        schedule.pairing_ids()
    }

    #[test]
    fn test_three_small_trips_all_selected() {
        // Three non-overlapping 20 BH trips, no preferences
        let catalog = PairingCatalog::new(vec![
            trip("P1", 1, 2, 20.0),
            trip("P2", 6, 9, 20.0),
            trip("P3", 14, 14, 20.0),
        ])
        .unwrap();
        let result = ScheduleGenerator::run(&catalog, &PreferenceSet::new(), &sequential());

        assert_eq!(result.schedules.len(), 3);
        assert!(result.is_complete());
        let earnings = result.schedule(Strategy::EarningsMax).unwrap();
        assert_eq!(ids(earnings), vec!["P1", "P2", "P3"]);
        assert!((earnings.total_block_hours - 60.0).abs() < 1e-10);
        // Oct has 31 days; 2 + 4 + 1 worked
        assert_eq!(earnings.days_off, 24);
    }

    #[test]
    fn test_lifestyle_prefers_short_trips() {
        // P_long would fit alone but collides with both short trips
        let catalog = PairingCatalog::new(vec![
            trip("A_long", 5, 12, 40.0),
            trip("B_short", 6, 6, 5.0),
            trip("C_short", 10, 10, 5.0),
        ])
        .unwrap();
        let config = sequential();

        let lifestyle =
            ScheduleGenerator::run_strategy(Strategy::LifestyleComfort, &catalog, &PreferenceSet::new(), &config);
        assert_eq!(ids(&lifestyle), vec!["B_short", "C_short"]);

        let earnings =
            ScheduleGenerator::run_strategy(Strategy::EarningsMax, &catalog, &PreferenceSet::new(), &config);
        assert_eq!(ids(&earnings), vec!["A_long"]);
    }

    #[test]
    fn test_lifestyle_secondary_comfort_score() {
        let catalog = PairingCatalog::new(vec![
            Pairing::new("A", at(6, 8), at(6, 18))
                .with_route_str("JFK - ORD - JFK")
                .with_block_hours(5.0),
            Pairing::new("B", at(6, 9), at(6, 19))
                .with_route_str("JFK - BOS - JFK")
                .with_block_hours(5.0),
        ])
        .unwrap();
        let prefs: PreferenceSet = std::iter::once(Preference::avoid_airport("ORD")).collect();
        let lifestyle =
            ScheduleGenerator::run_strategy(Strategy::LifestyleComfort, &catalog, &prefs, &sequential());
        assert_eq!(ids(&lifestyle), vec!["B"]);
    }

    #[test]
    fn test_weekends_free_prefers_weekday_trips() {
        // Oct 2025: Sat 11, Sun 12
        let catalog = PairingCatalog::new(vec![
            trip("W", 10, 14, 30.0),
            trip("M", 12, 14, 10.0),
            trip("T", 13, 16, 10.0),
        ])
        .unwrap();
        let config = sequential();
        let weekends =
            ScheduleGenerator::run_strategy(Strategy::WeekendsFree, &catalog, &PreferenceSet::new(), &config);
        assert_eq!(ids(&weekends), vec!["T"]);

        let earnings =
            ScheduleGenerator::run_strategy(Strategy::EarningsMax, &catalog, &PreferenceSet::new(), &config);
        assert_eq!(ids(&earnings), vec!["W"]);
    }

    #[test]
    fn test_blocked_date_excluded_everywhere_but_still_ranked() {
        let catalog = PairingCatalog::new(vec![
            trip("BLOCKED", 14, 16, 30.0),
            trip("OK", 20, 21, 10.0),
        ])
        .unwrap();
        let mut prefs = PreferenceSet::new();
        prefs.add(Preference::block_date_off(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()));

        let result = ScheduleGenerator::run(&catalog, &prefs, &sequential());
        for schedule in &result.schedules {
            assert_eq!(ids(schedule), vec!["OK"], "{}", schedule.strategy);
        }

        let config = ScoringConfig::default();
        let ranked = Scorer::new(&config).rank(&catalog, &prefs);
        let blocked = ranked.iter().find(|s| s.id() == "BLOCKED").unwrap();
        assert!((blocked.score + 500.0).abs() < 1e-10);
        assert_eq!(ranked.last().unwrap().id(), "BLOCKED");
    }

    #[test]
    fn test_soft_blocked_date_still_selectable() {
        let catalog = PairingCatalog::new(vec![trip("P", 14, 16, 30.0)]).unwrap();
        let mut prefs = PreferenceSet::new();
        prefs.add(Preference::soft_date_off(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()));
        let schedule =
            ScheduleGenerator::run_strategy(Strategy::EarningsMax, &catalog, &prefs, &sequential());
        assert_eq!(ids(&schedule), vec!["P"]);
    }

    #[test]
    fn test_min_candidate_score() {
        let catalog = PairingCatalog::new(vec![
            Pairing::new("EWR", at(3, 8), at(3, 18))
                .with_route_str("JFK - EWR - JFK")
                .with_block_hours(30.0),
            trip("OK", 6, 6, 5.0),
        ])
        .unwrap();
        let prefs: PreferenceSet = std::iter::once(Preference::avoid_airport("EWR")).collect();
        let config = EngineConfig::default().with_generator(
            GeneratorConfig::default()
                .with_parallel(false)
                .with_min_candidate_score(-100.0),
        );
        let schedule = ScheduleGenerator::run_strategy(Strategy::EarningsMax, &catalog, &prefs, &config);
        assert_eq!(ids(&schedule), vec!["EWR", "OK"]);

        let strict = EngineConfig::default().with_generator(
            GeneratorConfig::default()
                .with_parallel(false)
                .with_min_candidate_score(-99.0),
        );
        let schedule = ScheduleGenerator::run_strategy(Strategy::EarningsMax, &catalog, &prefs, &strict);
        assert_eq!(ids(&schedule), vec!["OK"]);
    }

    #[test]
    fn test_pre_assigned_blocks_time_and_days() {
        let catalog = PairingCatalog::new(vec![
            trip("FIXED", 10, 12, 20.0).pre_assigned(),
            trip("CLASH", 11, 13, 25.0),
            trip("FREE", 20, 20, 5.0),
        ])
        .unwrap();
        let schedule = ScheduleGenerator::run_strategy(
            Strategy::EarningsMax,
            &catalog,
            &PreferenceSet::new(),
            &sequential(),
        );
        assert_eq!(ids(&schedule), vec!["FREE"]);
        assert!((schedule.total_block_hours - 5.0).abs() < 1e-10);
        // 31 - (3 fixed + 1 free)
        assert_eq!(schedule.days_off, 27);
    }

    #[test]
    fn test_block_cap_reached() {
        let catalog = PairingCatalog::new(vec![
            trip("A", 1, 2, 40.0),
            trip("B", 5, 6, 40.0),
            trip("C", 9, 10, 30.0),
            trip("D", 13, 13, 8.0),
        ])
        .unwrap();
        let schedule = ScheduleGenerator::run_strategy(
            Strategy::EarningsMax,
            &catalog,
            &PreferenceSet::new(),
            &sequential(),
        );
        assert_eq!(ids(&schedule), vec!["A", "B", "D"]);
        assert!((schedule.total_block_hours - 88.0).abs() < 1e-10);
    }

    #[test]
    fn test_rest_rule_skips_tight_turn() {
        let catalog = PairingCatalog::new(vec![
            Pairing::new("A", at(5, 8), at(5, 20))
                .with_route_str("JFK-MIA-JFK")
                .with_block_hours(10.0),
            Pairing::new("B", at(6, 4), at(6, 12))
                .with_route_str("JFK-BOS-JFK")
                .with_block_hours(6.0),
            Pairing::new("C", at(6, 6), at(6, 14))
                .with_route_str("JFK-BOS-JFK")
                .with_block_hours(5.0),
        ])
        .unwrap();
        let schedule = ScheduleGenerator::run_strategy(
            Strategy::EarningsMax,
            &catalog,
            &PreferenceSet::new(),
            &sequential(),
        );
        // B leaves only 8 h of rest after A; C leaves exactly 10 h
        assert_eq!(ids(&schedule), vec!["A", "C"]);
    }

    #[test]
    fn test_id_tie_break() {
        let catalog = PairingCatalog::new(vec![
            trip("Z", 10, 10, 10.0),
            trip("A", 10, 10, 10.0),
            trip("M", 10, 10, 10.0),
        ])
        .unwrap();
        let result = ScheduleGenerator::run(&catalog, &PreferenceSet::new(), &sequential());
        for schedule in &result.schedules {
            assert_eq!(ids(schedule), vec!["A"]);
        }
    }

    #[test]
    fn test_no_candidates_gives_empty_schedule() {
        let catalog = PairingCatalog::new(vec![trip("P", 14, 16, 30.0)]).unwrap();
        let mut prefs = PreferenceSet::new();
        prefs.add(Preference::block_date_off(NaiveDate::from_ymd_opt(2025, 10, 16).unwrap()));
        let result = ScheduleGenerator::run(&catalog, &prefs, &sequential());
        assert_eq!(result.schedules.len(), 3);
        for s in &result.schedules {
            assert!(s.is_empty());
            assert_eq!(s.total_block_hours, 0.0);
            assert_eq!(s.days_off, 31);
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog =
            PairingCatalog::with_month(BidMonth::new(2025, 2).unwrap(), Vec::new()).unwrap();
        let result = ScheduleGenerator::run(&catalog, &PreferenceSet::new(), &sequential());
        assert!(result.schedules.iter().all(|s| s.is_empty() && s.days_off == 28));
    }

    #[test]
    fn test_selected_strategies_only() {
        let catalog = PairingCatalog::new(vec![trip("P", 3, 4, 10.0)]).unwrap();
        let config = EngineConfig::default().with_generator(
            GeneratorConfig::default()
                .with_parallel(false)
                .with_strategies([Strategy::WeekendsFree, Strategy::EarningsMax]),
        );
        let result = ScheduleGenerator::run(&catalog, &PreferenceSet::new(), &config);
        let order: Vec<_> = result.schedules.iter().map(|s| s.strategy).collect();
        assert_eq!(order, vec![Strategy::WeekendsFree, Strategy::EarningsMax]);
    }

    #[test]
    fn test_cancelled_run() {
        let catalog = PairingCatalog::new(vec![trip("P", 3, 4, 10.0)]).unwrap();
        let flag = Arc::new(AtomicBool::new(true));
        let result = ScheduleGenerator::run_with_cancel(
            &catalog,
            &PreferenceSet::new(),
            &sequential(),
            Some(flag),
        );
        assert!(result.cancelled);
        assert!(!result.is_complete());
        assert!(result.schedules.iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_zero_time_limit() {
        let catalog = PairingCatalog::new(vec![trip("P", 3, 4, 10.0)]).unwrap();
        let config = EngineConfig::default().with_generator(
            GeneratorConfig::default()
                .with_parallel(false)
                .with_time_limit_ms(0),
        );
        let result = ScheduleGenerator::run(&catalog, &PreferenceSet::new(), &config);
        assert!(result.timed_out);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_custom_limits() {
        let catalog = PairingCatalog::new(vec![
            trip("A", 1, 2, 30.0),
            trip("B", 5, 6, 30.0),
        ])
        .unwrap();
        let config = sequential().with_limits(ConstraintLimits::default().with_max_block_hours(50.0));
        let schedule =
            ScheduleGenerator::run_strategy(Strategy::EarningsMax, &catalog, &PreferenceSet::new(), &config);
        assert_eq!(schedule.trip_count(), 1);
    }

    #[test]
    fn test_out_of_range_rest_does_not_panic() {
        let catalog = PairingCatalog::new(vec![
            trip("A", 1, 2, 30.0),
            trip("B", 20, 21, 20.0),
        ])
        .unwrap();
        let limits = ConstraintLimits::default().with_min_rest_hours(1e13);
        let config = sequential().with_limits(limits);
        assert!(config.validate().is_err());

        let schedule =
            ScheduleGenerator::run_strategy(Strategy::EarningsMax, &catalog, &PreferenceSet::new(), &config);
        assert_eq!(ids(&schedule), vec!["A"]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let pairings: Vec<Pairing> = (1..=28)
            .map(|d| trip(&format!("P{d:02}"), d, (d + d % 3).min(31), f64::from(d % 7) * 3.0 + 2.0))
            .collect();
        let catalog = PairingCatalog::new(pairings).unwrap();
        let mut prefs = PreferenceSet::new();
        prefs.add(Preference::block_weekday(Weekday::Sun));
        prefs.add(Preference::AvoidRedEye);

        let par = EngineConfig::default().with_generator(GeneratorConfig::default().with_parallel(true));
        let a = ScheduleGenerator::run(&catalog, &prefs, &par);
        let b = ScheduleGenerator::run(&catalog, &prefs, &sequential());
        assert_eq!(a.schedules, b.schedules);
    }

    // ---- Properties ----

    fn arb_catalog() -> impl Gen<Value = PairingCatalog> {
        prop::collection::vec(
            (1u32..=28, 0u32..24, 0u32..4, 0u32..24, 0u32..=3000, any::<bool>()),
            1..40,
        )
        .prop_map(|rows| {
            let pairings = rows
                .into_iter()
                .enumerate()
                .map(|(i, (day, hour, extra_days, dur_hours, block_min, pre))| {
                    let departure = at(day, hour);
                    let arrival = departure
                        + Duration::days(i64::from(extra_days))
                        + Duration::hours(i64::from(dur_hours) + 1);
                    let p = Pairing::new(format!("P{i:03}"), departure, arrival)
                        .with_route_str("JFK - ORD - MIA - JFK")
                        .with_block_hours(f64::from(block_min) / 60.0);
                    // keep pre-assigned trips rare so most of the catalog is selectable
                    if pre && i % 5 == 0 {
                        p.pre_assigned()
                    } else {
                        p
                    }
                })
                .collect();
            PairingCatalog::with_month(BidMonth::new(2025, 10).unwrap(), pairings).unwrap()
        })
    }

    fn arb_prefs() -> impl Gen<Value = PreferenceSet> {
        prop::collection::vec((0u8..6, 1u32..=31), 0..5).prop_map(|rows| {
            rows.into_iter()
                .map(|(kind, day)| {
                    let date = NaiveDate::from_ymd_opt(2025, 10, day).unwrap();
                    match kind {
                        0 => Preference::block_date_off(date),
                        1 => Preference::soft_date_off(date),
                        2 => Preference::block_weekday(Weekday::Sat),
                        3 => Preference::AvoidRedEye,
                        4 => Preference::max_duration(day % 4 + 1),
                        _ => Preference::MaximizeEarnings,
                    }
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_schedules_respect_hard_constraints(catalog in arb_catalog(), prefs in arb_prefs()) {
            let config = sequential();
            let min_rest = config.limits.min_rest();
            let blocked = prefs.hard_blocked_dates();
            let result = ScheduleGenerator::run(&catalog, &prefs, &config);

            for schedule in &result.schedules {
                prop_assert!(schedule.total_block_hours <= 88.0);
                let summed: f64 = schedule.pairings.iter().map(|p| p.block_hours).sum();
                prop_assert!((summed - schedule.total_block_hours).abs() < 1e-6);

                let mut line: Vec<&Pairing> = schedule.pairings.iter().collect();
                line.extend(catalog.pre_assigned());
                line.sort_by_key(|p| p.departure);

                for p in &schedule.pairings {
                    prop_assert!(!p.pre_assigned);
                    prop_assert!(!p.span_dates().any(|d| blocked.contains(&d)));
                    for other in line.iter().filter(|o| o.id != p.id) {
                        prop_assert!(!p.overlaps(other), "{} overlaps {}", p.id, other.id);
                    }
                }
                for pair in line.windows(2) {
                    if pair[0].pre_assigned && pair[1].pre_assigned {
                        continue;
                    }
                    prop_assert!(pair[1].departure - pair[0].arrival >= min_rest);
                }
            }
        }

        #[test]
        fn prop_generation_is_deterministic(catalog in arb_catalog(), prefs in arb_prefs()) {
            let first = ScheduleGenerator::run(&catalog, &prefs, &sequential());
            let second = ScheduleGenerator::run(&catalog, &prefs, &sequential());
            prop_assert_eq!(first.schedules, second.schedules);
        }

        #[test]
        fn prop_score_is_additive(catalog in arb_catalog(), prefs in arb_prefs()) {
            let config = ScoringConfig::default();
            let scorer = Scorer::new(&config);
            for pairing in catalog.pairings() {
                let full = scorer.evaluate(pairing, &prefs);
                let parts: f64 = full.breakdown.values().map(|c| c.delta).sum();
                prop_assert!((full.score - parts).abs() < 1e-9);

                for entry in &prefs {
                    let mut without = prefs.clone();
                    without.remove(entry.id);
                    let reduced = scorer.score(pairing, &without);
                    prop_assert!((full.score - full.delta_of(entry.id) - reduced).abs() < 1e-9);
                }
            }
        }
    }
}

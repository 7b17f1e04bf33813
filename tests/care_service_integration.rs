//! Integration tests: CareService → reset scheduler → processor → evaluator.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use pawtrack::Error;
use pawtrack::app::ports::Clock;
use pawtrack::app::service::CareService;
use pawtrack::alerts::AlertKind;
use pawtrack::config::{PetSpec, Roster};
use pawtrack::record::Gender;

// ── Mock clock ────────────────────────────────────────────────

/// Settable clock shared between the test and the service.
#[derive(Clone)]
struct MockClock(Arc<Mutex<DateTime<Utc>>>);

impl MockClock {
    fn starting_at(now: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(now)))
    }

    fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().unwrap() = now;
    }

    fn advance(&self, by: Duration) {
        let mut guard = self.0.lock().unwrap();
        *guard += by;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

// ── Fixtures ──────────────────────────────────────────────────

fn spec(id: &str, max_feed: u32, medication: Option<u32>) -> PetSpec {
    PetSpec {
        id: id.into(),
        species: "dog".into(),
        breed: "mixed".into(),
        gender: Gender::Unknown,
        birth_date: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
        weight_kg: 12.0,
        color: "brown".into(),
        max_feed,
        has_medication: medication.is_some(),
        max_medication: medication.unwrap_or(0),
        health_alert: false,
    }
}

fn roster() -> Roster {
    let mut flagged = spec("rocky", 3, None);
    flagged.health_alert = true;
    Roster {
        pets: vec![
            spec("luna", 3, Some(2)), // medicated
            spec("max", 2, None),     // no medication plan
            flagged,                  // manual health flag set
        ],
    }
}

fn day_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 6, 0, 0).unwrap()
}

fn make_service() -> (CareService<MockClock>, MockClock) {
    let clock = MockClock::starting_at(day_start());
    let roster = roster();
    roster.validate().expect("fixture roster must be valid");
    (CareService::new(&roster, clock.clone()), clock)
}

// ── Feed cap ──────────────────────────────────────────────────

#[test]
fn feed_count_never_exceeds_cap_and_cap_hit_is_not_an_error() {
    let (svc, clock) = make_service();

    for _ in 0..3 {
        svc.apply_action("luna", "feed", None).unwrap();
    }
    let at_cap = svc.pet("luna").unwrap();
    assert_eq!(at_cap.feed_count, 3);
    let stamped = at_cap.last_feed_time;

    // Fourth feed later the same day: silent no-op, timestamp kept.
    clock.advance(Duration::hours(1));
    let after = svc.apply_action("luna", "feed", None).unwrap();
    assert_eq!(after.feed_count, 3);
    assert_eq!(after.last_feed_time, stamped);
}

// ── Medication gating ─────────────────────────────────────────

#[test]
fn medicate_without_plan_never_changes_state_or_alerts() {
    let (svc, clock) = make_service();

    let after = svc.apply_action("max", "medicate", None).unwrap();
    assert_eq!(after.medication_count, 0);
    assert!(after.last_medication_time.is_none());

    // Even a day later the evaluator can never report medication.
    clock.advance(Duration::hours(30));
    let statuses = svc.all_statuses();
    assert_ne!(statuses["max"].kind, AlertKind::Medication);
}

#[test]
fn medication_cap_holds_for_medicated_animal() {
    let (svc, _clock) = make_service();
    for _ in 0..5 {
        svc.apply_action("luna", "medicate", None).unwrap();
    }
    assert_eq!(svc.pet("luna").unwrap().medication_count, 2);
}

// ── Notes ─────────────────────────────────────────────────────

#[test]
fn notes_append_in_order_and_blanks_are_dropped() {
    let (svc, _clock) = make_service();

    svc.apply_action("max", "annotate", Some("  limping slightly ")).unwrap();
    svc.apply_action("max", "annotate", Some("   ")).unwrap();
    svc.apply_action("max", "annotate", None).unwrap();
    let after = svc.apply_action("max", "annotate", Some("vet visit booked")).unwrap();

    assert_eq!(after.notes.len(), 2);
    assert_eq!(after.notes[0].text, "limping slightly");
    assert_eq!(after.notes[1].text, "vet visit booked");
    assert!(after.notes[0].recorded_at <= after.notes[1].recorded_at);
}

// ── Unknown kinds & unknown animals ───────────────────────────

#[test]
fn unknown_action_kind_is_a_silent_no_op() {
    let (svc, _clock) = make_service();
    let before = svc.pet("luna").unwrap();
    let after = svc.apply_action("luna", "walk", Some("around the block")).unwrap();
    assert_eq!(after.feed_count, before.feed_count);
    assert_eq!(after.medication_count, before.medication_count);
    assert_eq!(after.notes.len(), before.notes.len());
}

#[test]
fn unknown_animal_surfaces_not_found() {
    let (svc, _clock) = make_service();
    assert_eq!(svc.pet("ghost").unwrap_err(), Error::NotFound("ghost".into()));
    assert_eq!(
        svc.apply_action("ghost", "feed", None).unwrap_err(),
        Error::NotFound("ghost".into())
    );
}

// ── Alert priority ────────────────────────────────────────────

#[test]
fn health_flag_outranks_overdue_feed_and_medication() {
    let (svc, clock) = make_service();
    // "rocky" carries the manual health flag from registration.
    clock.advance(Duration::hours(2));
    assert_eq!(svc.all_statuses()["rocky"].kind, AlertKind::Health);
}

#[test]
fn nine_hour_old_feed_raises_food_alert() {
    let (svc, clock) = make_service();
    svc.apply_action("luna", "feed", None).unwrap();
    svc.apply_action("luna", "feed", None).unwrap();

    clock.advance(Duration::hours(9));
    let statuses = svc.all_statuses();
    assert_eq!(statuses["luna"].kind, AlertKind::Food);
    assert_eq!(statuses["luna"].message, AlertKind::Food.message());
}

#[test]
fn overdue_medication_reports_when_feed_is_fresh() {
    let (svc, clock) = make_service();
    svc.apply_action("luna", "medicate", None).unwrap();

    // 13 h later the dose is overdue; feed again now so food stays fresh.
    clock.advance(Duration::hours(13));
    svc.apply_action("luna", "feed", None).unwrap();
    assert_eq!(svc.all_statuses()["luna"].kind, AlertKind::Medication);
}

#[test]
fn never_fed_animal_is_ok_not_overdue() {
    let (svc, clock) = make_service();
    clock.advance(Duration::hours(10));
    assert_eq!(svc.all_statuses()["max"].kind, AlertKind::Ok);
}

// ── Day rollover ──────────────────────────────────────────────

#[test]
fn rollover_resets_counters_but_keeps_notes_and_health_flag() {
    let (svc, clock) = make_service();
    svc.apply_action("luna", "feed", None).unwrap();
    svc.apply_action("luna", "medicate", None).unwrap();
    svc.apply_action("luna", "annotate", Some("good appetite")).unwrap();

    clock.set(day_start() + Duration::days(1));
    let after = svc.pet("luna").unwrap();
    assert_eq!(after.feed_count, 0);
    assert!(after.last_feed_time.is_none());
    assert_eq!(after.medication_count, 0);
    assert!(after.last_medication_time.is_none());
    // Notes survive the day boundary; only the counters are daily.
    assert_eq!(after.notes.len(), 1);
    assert_eq!(svc.pet("rocky").unwrap().health_alert, true);
}

#[test]
fn three_day_gap_resets_exactly_once() {
    let (svc, clock) = make_service();
    for _ in 0..3 {
        svc.apply_action("luna", "feed", None).unwrap();
    }

    // Simulated downtime: next call arrives on day D+3.
    clock.set(day_start() + Duration::days(3));
    let after = svc.pet("luna").unwrap();
    assert_eq!(after.feed_count, 0);

    // A feed on the new day starts the fresh count.
    let fed = svc.apply_action("luna", "feed", None).unwrap();
    assert_eq!(fed.feed_count, 1);
}

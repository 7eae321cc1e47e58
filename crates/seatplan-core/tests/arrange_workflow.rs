use rand::SeedableRng;
use rand::rngs::StdRng;
use seatplan::core::io::roster_csv::RosterCsv;
use seatplan::core::models::grid::Zone;
use seatplan::core::models::person::{Person, ZonePreference};
use seatplan::core::models::roster::Roster;
use seatplan::engine::config::{ArrangementConfig, ArrangementConfigBuilder};
use seatplan::engine::error::EngineError;
use seatplan::engine::progress::{Progress, ProgressReporter};
use seatplan::workflows::arrange;
use std::sync::Mutex;

fn config(rows: usize, cols: usize, iterations: usize, restarts: usize) -> ArrangementConfig {
    ArrangementConfigBuilder::new()
        .rows(rows)
        .cols(cols)
        .zone_depth(2)
        .like_weight(20)
        .dislike_weight(-100)
        .iterations(iterations)
        .restarts(restarts)
        .seed(Some(7))
        .build()
        .unwrap()
}

fn classroom() -> Roster {
    let csv = "\
number,name,likes,dislikes,zone,note
1,Ana,Ben|Cho,,front,glasses
2,Ben,Ana,Dan,,
3,Cho,Ana,,,
4,Dan,,Ben,뒷자리,
5,Eli,Fay,,,
6,Fay,Eli,Gus,앞자리,
7,Gus,,Fay,,
8,Hae,Ivy,,,
9,Ivy,Hae Jun,,뒤,
10,Jun,Ivy,,,
";
    RosterCsv::read_from(csv.as_bytes()).unwrap()
}

#[test]
fn mutual_likes_end_up_together() {
    let mut roster = Roster::new();
    roster.push(Person::new("A").with_likes(["B"]));
    roster.push(Person::new("B").with_likes(["A"]));

    let config = config(3, 3, 2_000, 1);
    let result = arrange::run(&roster, &config, &ProgressReporter::new()).unwrap();

    assert_eq!(result.score, 40);
    assert_eq!(result.report.satisfied_likes.len(), 2);
    assert!(result.assignment.seats_exactly(&roster));
}

#[test]
fn lone_front_seat_goes_to_the_front_person() {
    let mut roster = Roster::new();
    let a = roster.push(Person::new("A").with_zone_preference(ZonePreference::Front));
    roster.push(Person::new("B"));
    roster.push(Person::new("C"));

    let config = ArrangementConfigBuilder::new()
        .rows(3)
        .cols(1)
        .zone_depth(1)
        .like_weight(20)
        .dislike_weight(-100)
        .iterations(500)
        .seed(Some(3))
        .build()
        .unwrap();
    let result = arrange::run(&roster, &config, &ProgressReporter::new()).unwrap();

    assert_eq!(result.assignment.seat_of(a), Some(0));
    assert!(result.relaxed.is_empty());
}

#[test]
fn dislikes_are_separated_when_there_is_room() {
    let mut roster = Roster::new();
    roster.push(Person::new("A").with_dislikes(["B"]));
    roster.push(Person::new("B"));

    let config = ArrangementConfigBuilder::new()
        .rows(1)
        .cols(3)
        .zone_depth(0)
        .like_weight(20)
        .dislike_weight(-100)
        .iterations(500)
        .seed(Some(11))
        .build()
        .unwrap();
    let result = arrange::run(&roster, &config, &ProgressReporter::new()).unwrap();

    assert_eq!(result.score, 0);
    assert!(result.report.violated_dislikes.is_empty());
}

#[test]
fn classroom_run_keeps_everyone_and_honors_zones() {
    let roster = classroom();
    let config = config(6, 5, 5_000, 3);
    let result = arrange::run(&roster, &config, &ProgressReporter::new()).unwrap();

    assert_eq!(result.assignment.len(), 30);
    assert!(result.assignment.seats_exactly(&roster));
    assert!(result.relaxed.is_empty());
    assert!(result.report.unmet_zone_preferences.is_empty());
    assert!(result.score >= result.initial_score);
    assert_eq!(result.restart_scores.len(), 3);
    assert_eq!(result.score, *result.restart_scores.iter().max().unwrap());
    assert_eq!(result.restart_scores[result.restart], result.score);
    assert_eq!(
        result.score,
        20 * result.report.breakdown.like_hits as i64
            - 100 * result.report.breakdown.dislike_hits as i64
    );

    for (seat, id) in result.assignment.occupied() {
        let person = roster.get(id).unwrap();
        match person.zone_preference {
            ZonePreference::Front => assert_eq!(result.grid.zone_of_seat(seat), Zone::Front),
            ZonePreference::Back => assert_eq!(result.grid.zone_of_seat(seat), Zone::Back),
            ZonePreference::Anywhere => {}
        }
    }
}

#[test]
fn same_seed_reproduces_the_chart() {
    let roster = classroom();
    let config = config(6, 5, 3_000, 4);
    let first = arrange::run(&roster, &config, &ProgressReporter::new()).unwrap();
    let second = arrange::run(&roster, &config, &ProgressReporter::new()).unwrap();

    assert_eq!(first.assignment, second.assignment);
    assert_eq!(first.restart_scores, second.restart_scores);
    assert_eq!(first.restart, second.restart);
}

#[test]
fn injected_rng_matches_configured_seed() {
    let roster = classroom();
    let config = config(6, 5, 1_000, 2);
    let seeded = arrange::run(&roster, &config, &ProgressReporter::new()).unwrap();
    let injected = arrange::run_with_rng(
        &roster,
        &config,
        &ProgressReporter::new(),
        &mut StdRng::seed_from_u64(7),
    )
    .unwrap();
    assert_eq!(seeded.assignment, injected.assignment);
}

#[test]
fn overfull_roster_is_rejected() {
    let roster: Roster = (0..5).map(|i| Person::new(format!("P{i}"))).collect();
    let config = config(2, 2, 10, 1);
    let err = arrange::run(&roster, &config, &ProgressReporter::new()).unwrap_err();
    assert!(matches!(
        err,
        EngineError::CapacityExceeded {
            people: 5,
            capacity: 4
        }
    ));
}

#[test]
fn progress_covers_every_attempt_of_every_restart() {
    let roster = classroom();
    let config = config(6, 5, 2_500, 3);
    let announced = Mutex::new(0u64);
    let advanced = Mutex::new(0u64);
    let phases = Mutex::new(Vec::new());
    let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| match event {
        Progress::TaskStart { total_steps } => *announced.lock().unwrap() += total_steps,
        Progress::TaskAdvance { steps } => *advanced.lock().unwrap() += steps,
        Progress::PhaseStart { name } => phases.lock().unwrap().push(name),
        _ => {}
    }));

    arrange::run(&roster, &config, &reporter).unwrap();
    drop(reporter);

    assert_eq!(announced.into_inner().unwrap(), 7_500);
    assert_eq!(advanced.into_inner().unwrap(), 7_500);
    assert_eq!(
        phases.into_inner().unwrap(),
        vec!["Preparation", "Searching", "Reporting"]
    );
}

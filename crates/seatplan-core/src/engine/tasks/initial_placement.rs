use crate::core::models::assignment::Assignment;
use crate::core::models::grid::Zone;
use crate::core::models::ids::PersonId;
use crate::core::models::person::ZonePreference;
use crate::engine::context::ArrangementContext;
use crate::engine::error::EngineError;
use crate::engine::progress::Progress;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone)]
pub struct PlacementOutcome {
    pub assignment: Assignment,
    /// Zone-pinned people that did not fit into their zone and were seated from the
    /// unrestricted pool instead, in the order they overflowed.
    pub relaxed: Vec<PersonId>,
}

/// Builds a complete starting assignment that honors zone preferences where possible.
///
/// Front-pinned people are dealt at random onto the front seats, then back-pinned people
/// onto the back seats. Anyone left over when a zone runs out of seats joins the
/// unrestricted pool, whose members are then dropped into uniformly chosen empty seats.
#[instrument(skip_all, name = "initial_placement_task")]
pub fn run(
    context: &ArrangementContext,
    rng: &mut impl Rng,
) -> Result<PlacementOutcome, EngineError> {
    let grid = context.grid;
    let roster = context.roster;
    let capacity = grid.capacity();

    if roster.len() > capacity {
        return Err(EngineError::CapacityExceeded {
            people: roster.len(),
            capacity,
        });
    }

    let mut front_group = Vec::new();
    let mut back_group = Vec::new();
    let mut free_group = Vec::new();
    for (id, person) in roster.iter() {
        match person.zone_preference {
            ZonePreference::Front => front_group.push(id),
            ZonePreference::Back => back_group.push(id),
            ZonePreference::Anywhere => free_group.push(id),
        }
    }

    let mut assignment = Assignment::empty(capacity);
    let mut relaxed = Vec::new();

    for (zone, group) in [(Zone::Front, front_group), (Zone::Back, back_group)] {
        let overflow = fill_zone(context, &mut assignment, zone, group, rng);
        for &id in &overflow {
            if let Some(person) = roster.get(id) {
                warn!(
                    name = %person.name,
                    %zone,
                    "Zone is full; seating person without their zone preference."
                );
                context.reporter.report(Progress::Message(format!(
                    "{} could not be seated in the {zone} zone",
                    person.name
                )));
            }
        }
        relaxed.extend_from_slice(&overflow);
        free_group.extend(overflow);
    }

    let mut empty_seats = assignment.empty_seats();
    free_group.shuffle(rng);
    for id in free_group {
        if empty_seats.is_empty() {
            return Err(EngineError::Internal(
                "ran out of empty seats while placing unrestricted people".to_string(),
            ));
        }
        let pick = rng.gen_range(0..empty_seats.len());
        let seat = empty_seats.remove(pick);
        assignment.place(seat, id);
    }

    if !assignment.seats_exactly(roster) {
        return Err(EngineError::Internal(
            "initial placement did not seat every person exactly once".to_string(),
        ));
    }

    debug!(
        seated = roster.len(),
        relaxed = relaxed.len(),
        "Initial placement complete."
    );
    Ok(PlacementOutcome {
        assignment,
        relaxed,
    })
}

/// Deals `group` onto the still-empty seats of `zone` and returns whoever did not fit.
fn fill_zone(
    context: &ArrangementContext,
    assignment: &mut Assignment,
    zone: Zone,
    mut group: Vec<PersonId>,
    rng: &mut impl Rng,
) -> Vec<PersonId> {
    group.shuffle(rng);
    let mut available: Vec<usize> = context
        .grid
        .seats_in(zone)
        .into_iter()
        .filter(|&seat| assignment.occupant(seat).is_none())
        .collect();
    available.shuffle(rng);

    let mut overflow = Vec::new();
    for id in group {
        match available.pop() {
            Some(seat) => {
                assignment.place(seat, id);
            }
            None => overflow.push(id),
        }
    }
    overflow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::grid::Grid;
    use crate::core::models::person::Person;
    use crate::core::models::roster::Roster;
    use crate::engine::config::{ArrangementConfig, ArrangementConfigBuilder};
    use crate::engine::progress::ProgressReporter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Mutex;

    fn config(rows: usize, cols: usize, depth: usize) -> ArrangementConfig {
        ArrangementConfigBuilder::new()
            .rows(rows)
            .cols(cols)
            .zone_depth(depth)
            .like_weight(20)
            .dislike_weight(-100)
            .iterations(0)
            .build()
            .unwrap()
    }

    fn mixed_roster(front: usize, back: usize, free: usize) -> Roster {
        let pinned = |prefix: &str, n: usize, pref: ZonePreference| {
            (0..n)
                .map(|i| Person::new(format!("{prefix}{i}")).with_zone_preference(pref))
                .collect::<Vec<_>>()
        };
        pinned("F", front, ZonePreference::Front)
            .into_iter()
            .chain(pinned("B", back, ZonePreference::Back))
            .chain(pinned("N", free, ZonePreference::Anywhere))
            .collect()
    }

    fn place(roster: &Roster, config: &ArrangementConfig, seed: u64) -> PlacementOutcome {
        let grid = config.grid.grid();
        let reporter = ProgressReporter::new();
        let context = ArrangementContext::new(roster, &grid, config, &reporter);
        run(&context, &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn pinned_people_land_in_their_zone_when_it_fits() {
        let config = config(6, 5, 2);
        let grid = config.grid.grid();
        let roster = mixed_roster(7, 10, 12);

        for seed in 0..20 {
            let outcome = place(&roster, &config, seed);
            assert!(outcome.relaxed.is_empty());
            assert!(outcome.assignment.seats_exactly(&roster));
            for (seat, id) in outcome.assignment.occupied() {
                let person = roster.get(id).unwrap();
                if let Some(zone) = person.zone_preference.required_zone() {
                    assert_eq!(grid.zone_of_seat(seat), zone, "{} in seat {seat}", person.name);
                }
            }
        }
    }

    #[test]
    fn overflow_is_relaxed_not_dropped() {
        let config = config(3, 2, 1);
        let roster = mixed_roster(3, 0, 1);

        let outcome = place(&roster, &config, 11);
        assert!(outcome.assignment.seats_exactly(&roster));
        assert_eq!(outcome.relaxed.len(), 1);

        let grid = config.grid.grid();
        let relaxed_seat = outcome.assignment.seat_of(outcome.relaxed[0]).unwrap();
        assert_ne!(grid.zone_of_seat(relaxed_seat), Zone::Front);

        let seated_in_front = outcome
            .assignment
            .occupied()
            .filter(|&(seat, id)| {
                grid.zone_of_seat(seat) == Zone::Front
                    && roster.get(id).unwrap().zone_preference == ZonePreference::Front
            })
            .count();
        assert_eq!(seated_in_front, 2);
    }

    #[test]
    fn relaxed_people_are_announced_to_the_reporter() {
        let config = config(3, 2, 1);
        let grid = config.grid.grid();
        let mut roster = Roster::new();
        for name in ["A", "B", "C"] {
            roster.push(Person::new(name).with_zone_preference(ZonePreference::Back));
        }
        let messages = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            if let Progress::Message(text) = event {
                messages.lock().unwrap().push(text);
            }
        }));
        let context = ArrangementContext::new(&roster, &grid, &config, &reporter);

        let outcome = run(&context, &mut StdRng::seed_from_u64(4)).unwrap();
        drop(reporter);

        let messages = messages.into_inner().unwrap();
        assert_eq!(outcome.relaxed.len(), 1);
        let relaxed_name = &roster.get(outcome.relaxed[0]).unwrap().name;
        assert_eq!(
            messages,
            vec![format!("{relaxed_name} could not be seated in the back zone")]
        );
    }

    #[test]
    fn single_front_seat_goes_to_the_front_person() {
        let config = config(3, 1, 1);
        let mut roster = Roster::new();
        let a = roster.push(Person::new("A").with_zone_preference(ZonePreference::Front));
        roster.push(Person::new("B"));
        roster.push(Person::new("C"));

        for seed in 0..10 {
            let outcome = place(&roster, &config, seed);
            assert_eq!(outcome.assignment.seat_of(a), Some(0));
        }
    }

    #[test]
    fn same_seed_gives_same_placement() {
        let config = config(6, 5, 2);
        let roster = mixed_roster(4, 4, 15);
        let first = place(&roster, &config, 99);
        let second = place(&roster, &config, 99);
        assert_eq!(first.assignment, second.assignment);
    }

    #[test]
    fn too_many_people_fail_fast() {
        let config = config(2, 2, 1);
        let roster = mixed_roster(0, 0, 5);
        let grid = Grid::new(2, 2, 1);
        let reporter = ProgressReporter::new();
        let context = ArrangementContext::new(&roster, &grid, &config, &reporter);

        let err = run(&context, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::CapacityExceeded {
                people: 5,
                capacity: 4
            }
        ));
    }

    #[test]
    fn empty_roster_gives_empty_chart() {
        let config = config(2, 3, 1);
        let outcome = place(&Roster::new(), &config, 0);
        assert_eq!(outcome.assignment.len(), 6);
        assert_eq!(outcome.assignment.occupied().count(), 0);
    }
}

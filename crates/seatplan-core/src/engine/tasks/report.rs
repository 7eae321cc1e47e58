use crate::core::models::assignment::Assignment;
use crate::core::models::ids::PersonId;
use crate::core::scoring::ScoreBreakdown;
use crate::engine::context::ArrangementContext;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// A directed preference between two seated people: `from` likes or dislikes `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferencePair {
    pub from: PersonId,
    pub to: PersonId,
}

/// How well a finished assignment honors everybody's wishes.
///
/// Names resolve exactly as they do for scoring, so `satisfied_likes.len()` equals
/// `breakdown.like_hits` and `violated_dislikes.len()` equals `breakdown.dislike_hits`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrangementReport {
    pub breakdown: ScoreBreakdown,
    pub satisfied_likes: Vec<PreferencePair>,
    pub violated_dislikes: Vec<PreferencePair>,
    /// People with at least one resolvable like and no liked person next to them.
    pub without_liked_neighbor: Vec<PersonId>,
    /// Zone-pinned people seated outside their zone.
    pub unmet_zone_preferences: Vec<PersonId>,
}

#[instrument(skip_all, name = "arrangement_report_task")]
pub fn run(context: &ArrangementContext, assignment: &Assignment) -> ArrangementReport {
    let roster = context.roster;
    let grid = context.grid;

    let mut seat_by_name: HashMap<&str, usize> = HashMap::new();
    for (seat, id) in assignment.occupied() {
        if let Some(person) = roster.get(id) {
            seat_by_name.insert(person.name.as_str(), seat);
        }
    }
    let resolve = |name: &str| -> Option<(usize, PersonId)> {
        let seat = *seat_by_name.get(name)?;
        assignment.occupant(seat).map(|id| (seat, id))
    };

    let mut report = ArrangementReport {
        breakdown: context.scorer().breakdown(assignment),
        ..ArrangementReport::default()
    };

    for (seat, id) in assignment.occupied() {
        let Some(person) = roster.get(id) else {
            continue;
        };

        let mut has_resolvable_like = false;
        let mut has_liked_neighbor = false;
        for (other_seat, other) in person.likes.iter().filter_map(|n| resolve(n)) {
            has_resolvable_like = true;
            if grid.is_neighbor(seat, other_seat) {
                has_liked_neighbor = true;
                report.satisfied_likes.push(PreferencePair { from: id, to: other });
            }
        }
        if has_resolvable_like && !has_liked_neighbor {
            report.without_liked_neighbor.push(id);
        }

        for (other_seat, other) in person.dislikes.iter().filter_map(|n| resolve(n)) {
            if grid.is_neighbor(seat, other_seat) {
                report.violated_dislikes.push(PreferencePair { from: id, to: other });
            }
        }

        if let Some(zone) = person.zone_preference.required_zone() {
            if grid.zone_of_seat(seat) != zone {
                report.unmet_zone_preferences.push(id);
            }
        }
    }

    debug!(
        satisfied_likes = report.satisfied_likes.len(),
        violated_dislikes = report.violated_dislikes.len(),
        unmet_zones = report.unmet_zone_preferences.len(),
        "Arrangement report built."
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::grid::Grid;
    use crate::core::models::person::{Person, ZonePreference};
    use crate::core::models::roster::Roster;
    use crate::engine::config::ArrangementConfigBuilder;
    use crate::engine::progress::ProgressReporter;

    #[test]
    fn report_matches_score_breakdown() {
        let config = ArrangementConfigBuilder::new()
            .rows(2)
            .cols(3)
            .zone_depth(1)
            .like_weight(20)
            .dislike_weight(-100)
            .iterations(0)
            .build()
            .unwrap();
        let grid = config.grid.grid();

        let mut roster = Roster::new();
        let a = roster.push(Person::new("A").with_likes(["B", "Ghost"]).with_dislikes(["C"]));
        let b = roster.push(Person::new("B").with_likes(["A"]));
        let c = roster.push(
            Person::new("C")
                .with_likes(["D"])
                .with_zone_preference(ZonePreference::Front),
        );
        let d = roster.push(Person::new("D"));

        // Row 0: A B .   Row 1: C . D
        let mut assignment = Assignment::empty(6);
        assignment.place(0, a);
        assignment.place(1, b);
        assignment.place(3, c);
        assignment.place(5, d);

        let reporter = ProgressReporter::new();
        let context = ArrangementContext::new(&roster, &grid, &config, &reporter);
        let report = run(&context, &assignment);

        assert_eq!(report.breakdown.like_hits, report.satisfied_likes.len());
        assert_eq!(report.breakdown.dislike_hits, report.violated_dislikes.len());
        assert_eq!(
            report.satisfied_likes,
            vec![
                PreferencePair { from: a, to: b },
                PreferencePair { from: b, to: a }
            ]
        );
        assert_eq!(report.violated_dislikes, vec![PreferencePair { from: a, to: c }]);
        assert_eq!(report.without_liked_neighbor, vec![c]);
        assert_eq!(report.unmet_zone_preferences, vec![c]);
        assert_eq!(report.breakdown.total, 40 - 100);
    }

    #[test]
    fn unresolvable_likes_do_not_count_as_lonely() {
        let config = ArrangementConfigBuilder::new()
            .rows(1)
            .cols(2)
            .zone_depth(0)
            .like_weight(1)
            .dislike_weight(-1)
            .iterations(0)
            .build()
            .unwrap();
        let grid = Grid::new(1, 2, 0);
        let mut roster = Roster::new();
        let a = roster.push(Person::new("A").with_likes(["Nobody"]));
        let mut assignment = Assignment::empty(2);
        assignment.place(0, a);

        let reporter = ProgressReporter::new();
        let context = ArrangementContext::new(&roster, &grid, &config, &reporter);
        let report = run(&context, &assignment);
        assert!(report.without_liked_neighbor.is_empty());
        assert!(report.satisfied_likes.is_empty());
    }
}

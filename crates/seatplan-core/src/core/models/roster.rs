use super::grid::{Grid, Zone};
use super::ids::PersonId;
use super::person::{Person, ZonePreference};
use itertools::Itertools;
use slotmap::SlotMap;
use std::collections::HashSet;

/// The participants of one arrangement run.
///
/// People are stored in a slot map keyed by [`PersonId`] and also remembered in input
/// order, which is the order every iteration over the roster follows.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    people: SlotMap<PersonId, Person>,
    order: Vec<PersonId>,
}

/// A liked or disliked name that matches no participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReference {
    pub from: String,
    pub name: String,
}

/// Findings about a roster that degrade the arrangement without preventing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterDiagnostics {
    /// Names carried by more than one participant. Scoring resolves these to whichever
    /// holder sits in the highest-numbered seat.
    pub duplicate_names: Vec<String>,
    pub unknown_references: Vec<UnknownReference>,
    /// Front-pinned people beyond the front zone's capacity.
    pub front_overflow: usize,
    /// Back-pinned people beyond the back zone's capacity.
    pub back_overflow: usize,
    /// People beyond the grid's total capacity.
    pub capacity_overflow: usize,
}

impl RosterDiagnostics {
    pub fn is_clean(&self) -> bool {
        self == &Self::default()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, person: Person) -> PersonId {
        let id = self.people.insert(person);
        self.order.push(id);
        id
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Identifiers in input order.
    pub fn ids(&self) -> &[PersonId] {
        &self.order
    }

    /// People in input order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &Person)> + '_ {
        self.order.iter().map(move |&id| (id, &self.people[id]))
    }

    /// Looks up a participant by name. With duplicate names the last one in input order wins.
    pub fn find_by_name(&self, name: &str) -> Option<PersonId> {
        self.iter()
            .filter(|(_, p)| p.name == name)
            .map(|(id, _)| id)
            .last()
    }

    pub fn count_with_preference(&self, preference: ZonePreference) -> usize {
        self.iter()
            .filter(|(_, p)| p.zone_preference == preference)
            .count()
    }

    /// Checks the roster against a grid without arranging anything.
    pub fn diagnose(&self, grid: &Grid) -> RosterDiagnostics {
        let duplicate_names = self
            .iter()
            .map(|(_, p)| p.name.clone())
            .duplicates()
            .collect();

        let known: HashSet<&str> = self.iter().map(|(_, p)| p.name.as_str()).collect();
        let unknown_references = self
            .iter()
            .flat_map(|(_, p)| {
                p.likes
                    .iter()
                    .chain(p.dislikes.iter())
                    .filter(|name| !known.contains(name.as_str()))
                    .map(move |name| UnknownReference {
                        from: p.name.clone(),
                        name: name.clone(),
                    })
            })
            .collect();

        let front_overflow = self
            .count_with_preference(ZonePreference::Front)
            .saturating_sub(grid.zone_capacity(Zone::Front));
        let back_overflow = self
            .count_with_preference(ZonePreference::Back)
            .saturating_sub(grid.zone_capacity(Zone::Back));

        RosterDiagnostics {
            duplicate_names,
            unknown_references,
            front_overflow,
            back_overflow,
            capacity_overflow: self.len().saturating_sub(grid.capacity()),
        }
    }
}

impl FromIterator<Person> for Roster {
    fn from_iter<T: IntoIterator<Item = Person>>(iter: T) -> Self {
        let mut roster = Roster::new();
        for person in iter {
            roster.push(person);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        [
            Person::new("A").with_likes(["B", "Ghost"]),
            Person::new("B").with_zone_preference(ZonePreference::Front),
            Person::new("C").with_dislikes(["A"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn iteration_follows_input_order() {
        let roster = sample_roster();
        let names: Vec<_> = roster.iter().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.ids().len(), 3);
    }

    #[test]
    fn find_by_name_prefers_last_duplicate() {
        let mut roster = sample_roster();
        let second_a = roster.push(Person::new("A").with_note("second"));
        assert_eq!(roster.find_by_name("A"), Some(second_a));
        assert_eq!(roster.find_by_name("Nobody"), None);
    }

    #[test]
    fn diagnose_reports_unknown_names_and_duplicates() {
        let mut roster = sample_roster();
        roster.push(Person::new("C"));

        let report = roster.diagnose(&Grid::new(6, 5, 2));
        assert_eq!(report.duplicate_names, vec!["C".to_string()]);
        assert_eq!(
            report.unknown_references,
            vec![UnknownReference {
                from: "A".into(),
                name: "Ghost".into()
            }]
        );
        assert_eq!(report.front_overflow, 0);
        assert_eq!(report.capacity_overflow, 0);
        assert!(!report.is_clean());
    }

    #[test]
    fn diagnose_reports_zone_and_capacity_overflow() {
        let roster: Roster = (0..5)
            .map(|i| Person::new(format!("P{i}")).with_zone_preference(ZonePreference::Back))
            .collect();

        let report = roster.diagnose(&Grid::new(2, 2, 1));
        assert_eq!(report.back_overflow, 3);
        assert_eq!(report.front_overflow, 0);
        assert_eq!(report.capacity_overflow, 1);
    }

    #[test]
    fn clean_roster_has_clean_diagnostics() {
        let roster: Roster = [
            Person::new("A").with_likes(["B"]),
            Person::new("B").with_likes(["A"]),
        ]
        .into_iter()
        .collect();
        assert!(roster.diagnose(&Grid::new(2, 2, 1)).is_clean());
    }
}

use seatplan::core::models::assignment::Assignment;
use seatplan::core::models::grid::{Grid, Zone};
use seatplan::core::models::ids::PersonId;
use seatplan::core::models::roster::{Roster, RosterDiagnostics};
use seatplan::workflows::arrange::ArrangementResult;
use std::fmt::Write;

const EMPTY_SEAT: &str = "-";

/// Terminal columns taken by `text`, counting CJK and Hangul characters as two.
fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| match c as u32 {
            0x1100..=0x115F | 0x2E80..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F | 0xFF00..=0xFF60 | 0xFFE0..=0xFFE6 => 2,
            _ => 1,
        })
        .sum()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

fn zone_label(zone: Zone) -> &'static str {
    match zone {
        Zone::Front => "front",
        Zone::Middle => "",
        Zone::Back => "back",
    }
}

/// Renders the chart as a text grid, front row on top. Each cell shows the 1-based seat
/// number followed by the occupant's name.
pub fn render_chart(roster: &Roster, grid: &Grid, assignment: &Assignment) -> String {
    let name_of = |seat: usize| {
        assignment
            .occupant(seat)
            .and_then(|id| roster.get(id))
            .map_or(EMPTY_SEAT, |person| person.name.as_str())
    };
    let name_width = (0..grid.capacity())
        .map(|seat| display_width(name_of(seat)))
        .max()
        .unwrap_or(0)
        .max(EMPTY_SEAT.len());
    let number_width = grid.capacity().to_string().len();

    let mut out = String::new();
    for row in 0..grid.rows() {
        let _ = write!(out, "{:<6}|", zone_label(grid.zone_of(row)));
        for col in 0..grid.cols() {
            let Some(seat) = grid.seat_index(row, col) else {
                continue;
            };
            let _ = write!(
                out,
                " {:>number_width$} {} |",
                seat + 1,
                pad(name_of(seat), name_width)
            );
        }
        out.push('\n');
    }
    out
}

/// One line per occupied seat with the occupant's number, note and preferences, in seat
/// order.
pub fn render_seat_details(roster: &Roster, grid: &Grid, assignment: &Assignment) -> String {
    let number_width = grid.capacity().to_string().len();
    let mut out = String::new();
    for (seat, id) in assignment.occupied() {
        let Some(person) = roster.get(id) else {
            continue;
        };
        let _ = write!(out, "{:>number_width$} {}", seat + 1, person.name);
        if !person.display_number.is_empty() {
            let _ = write!(out, " (#{})", person.display_number);
        }
        if !person.note.is_empty() {
            let _ = write!(out, " note: {};", person.note);
        }
        if !person.likes.is_empty() {
            let _ = write!(out, " likes: {};", person.likes.join(", "));
        }
        if !person.dislikes.is_empty() {
            let _ = write!(out, " dislikes: {};", person.dislikes.join(", "));
        }
        if let Some(zone) = person.zone_preference.required_zone() {
            let _ = write!(out, " wants {zone};");
        }
        let line = out.trim_end_matches(';').len();
        out.truncate(line);
        out.push('\n');
    }
    out
}

fn names<'a>(roster: &'a Roster, ids: &[PersonId]) -> Vec<&'a str> {
    ids.iter()
        .filter_map(|&id| roster.get(id))
        .map(|person| person.name.as_str())
        .collect()
}

/// One-screen summary of a finished arrangement.
pub fn render_summary(roster: &Roster, result: &ArrangementResult) -> String {
    let report = &result.report;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Score: {} (started at {}; {} like hit(s), {} dislike hit(s))",
        result.score, result.initial_score, report.breakdown.like_hits, report.breakdown.dislike_hits
    );
    let _ = writeln!(
        out,
        "Swaps: {} accepted of {} attempts",
        result.stats.accepted_swaps, result.stats.attempts
    );
    if result.restart_scores.len() > 1 {
        let scores: Vec<String> = result.restart_scores.iter().map(i64::to_string).collect();
        let _ = writeln!(
            out,
            "Restarts: best was #{} of {} (scores: {})",
            result.restart + 1,
            result.restart_scores.len(),
            scores.join(", ")
        );
    }

    if !result.relaxed.is_empty() {
        let _ = writeln!(
            out,
            "Zone requests relaxed (zone full): {}",
            names(roster, &result.relaxed).join(", ")
        );
    }
    if !report.violated_dislikes.is_empty() {
        let pairs: Vec<String> = report
            .violated_dislikes
            .iter()
            .filter_map(|pair| Some((roster.get(pair.from)?, roster.get(pair.to)?)))
            .map(|(from, to)| format!("{} -> {}", from.name, to.name))
            .collect();
        let _ = writeln!(out, "Seated next to someone they dislike: {}", pairs.join(", "));
    }
    if !report.without_liked_neighbor.is_empty() {
        let _ = writeln!(
            out,
            "No liked neighbor: {}",
            names(roster, &report.without_liked_neighbor).join(", ")
        );
    }
    out
}

/// Human-readable roster diagnostics for the `check` command.
pub fn render_diagnostics(roster: &Roster, grid: &Grid, diagnostics: &RosterDiagnostics) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} people, {} seats ({} rows x {} cols), {} front and {} back seats",
        roster.len(),
        grid.capacity(),
        grid.rows(),
        grid.cols(),
        grid.zone_capacity(Zone::Front),
        grid.zone_capacity(Zone::Back)
    );

    if diagnostics.is_clean() {
        let _ = writeln!(out, "No problems found.");
        return out;
    }
    if diagnostics.capacity_overflow > 0 {
        let _ = writeln!(
            out,
            "Too many people: {} more than there are seats",
            diagnostics.capacity_overflow
        );
    }
    if diagnostics.front_overflow > 0 {
        let _ = writeln!(
            out,
            "Front zone over-requested by {}; extra people will be seated elsewhere",
            diagnostics.front_overflow
        );
    }
    if diagnostics.back_overflow > 0 {
        let _ = writeln!(
            out,
            "Back zone over-requested by {}; extra people will be seated elsewhere",
            diagnostics.back_overflow
        );
    }
    for name in &diagnostics.duplicate_names {
        let _ = writeln!(out, "Duplicate name: {name}");
    }
    for reference in &diagnostics.unknown_references {
        let _ = writeln!(
            out,
            "Unknown name '{}' referenced by {}",
            reference.name, reference.from
        );
    }
    out
}

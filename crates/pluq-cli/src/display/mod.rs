mod table;

use pluq::engine::assign::{AssignmentRecord, AssignmentTable, Resonance};
use table::TextTable;

pub const NO_SHIFTS_MESSAGE: &str = "No chemical shifts were found!";

/// Zero and missing values print as `-`.
fn score_cell(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => format!("{:.1}", v),
        _ => "-".to_string(),
    }
}

fn record_row(record: &AssignmentRecord) -> Vec<String> {
    let mut row = vec![record.residue().code().to_string()];
    row.extend(record.positions().iter().map(|p| match &p.atoms {
        Some(atoms) => atoms.join(","),
        None => "-".to_string(),
    }));
    row.extend(
        record
            .positions()
            .iter()
            .map(|p| score_cell(Some(p.normalized_score))),
    );
    row.push(score_cell(Some(record.normalized_joint())));
    match record.structure() {
        Some(triple) => row.extend(triple.percentages().map(|v| score_cell(Some(v)))),
        None => row.extend(std::iter::repeat_n(score_cell(None), 3)),
    }
    row
}

/// Renders the ranked assignments, stopping at the first record at or below `cutoff`.
pub fn render_assignments(
    resonances: &[Resonance],
    experiment: &str,
    table: &AssignmentTable,
    cutoff: f64,
) -> String {
    let inputs = resonances
        .iter()
        .map(Resonance::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let mut out = format!("input: {}\nexperiment: {}\n", inputs, experiment);

    if table.is_empty() {
        out.push_str(NO_SHIFTS_MESSAGE);
        return out;
    }

    let n = resonances.len();
    let positions = (1..=n).map(|i| format!("p{}", i));
    let header = std::iter::once("AA".to_string())
        .chain(positions.clone())
        .chain(positions)
        .chain(["Joint", "H", "C", "E"].map(String::from));

    let mut text = TextTable::new(header);
    for record in table.above_cutoff(cutoff) {
        text.push_row(record_row(record));
    }
    out.push_str(&text.render());
    out
}

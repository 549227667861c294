use crate::catalog::MAX_RATING;
use crate::report::DomainRating;

/// Columns per rating unit; the value axis is always 0..=MAX_RATING.
pub const UNIT_WIDTH: usize = 6;

pub fn render_bar_chart(rows: &[DomainRating]) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);
    let axis_width = MAX_RATING as usize * UNIT_WIDTH;

    let mut out = String::new();
    for row in rows {
        let bar = "#".repeat(row.rating.min(MAX_RATING) as usize * UNIT_WIDTH);
        out.push_str(&format!(
            "{:<name_width$} |{:<axis_width$}| {}\n",
            row.name, bar, row.rating
        ));
    }
    out.push_str(&format!("{:<name_width$} {}\n", "", scale_row()));
    out
}

fn scale_row() -> String {
    let mut scale = vec![' '; MAX_RATING as usize * UNIT_WIDTH + 1];
    for tick in 0..=MAX_RATING {
        scale[tick as usize * UNIT_WIDTH] = char::from(b'0' + tick);
    }
    scale.into_iter().collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/chart.rs"]
mod tests;

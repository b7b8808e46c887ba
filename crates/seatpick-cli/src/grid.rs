//! Text rendering of the seat grid.
//!
//! Rows print the way the teacher faces the room: the left block is
//! mirrored so seat 1 of each row sits against the aisle.

use seatpick_core::{SeatId, SeatRegistry};

/// Label width per cell; longer names are cut with an ellipsis.
const CELL_WIDTH: usize = 10;

/// Gap between the left and right blocks.
const AISLE: &str = "  |  ";

pub fn render(registry: &SeatRegistry, selected: Option<SeatId>) -> String {
    let layout = registry.layout();
    let rows = layout.left_rows.len().max(layout.right_rows.len());
    let mut lines = Vec::with_capacity(rows + 2);

    for i in 0..rows {
        let mut line = String::new();
        if let Some(&row) = layout.left_rows.get(i) {
            for n in (1..=layout.seats_per_row).rev() {
                line.push_str(&cell(registry, SeatId::new(row, n), selected));
            }
        } else {
            line.push_str(&" ".repeat((CELL_WIDTH + 2) * layout.seats_per_row as usize));
        }
        line.push_str(AISLE);
        if let Some(&row) = layout.right_rows.get(i) {
            for n in 1..=layout.seats_per_row {
                line.push_str(&cell(registry, SeatId::new(row, n), selected));
            }
        }
        lines.push(line.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push("markers: - disabled   ! tardy   * swap-selected".to_string());
    lines.join("\n")
}

fn cell(registry: &SeatRegistry, seat: SeatId, selected: Option<SeatId>) -> String {
    let marker = if selected == Some(seat) {
        '*'
    } else if !registry.is_enabled(seat) {
        '-'
    } else if registry.is_tardy(seat) {
        '!'
    } else {
        ' '
    };
    format!(
        "{}{:<width$} ",
        marker,
        truncate(&registry.label(seat), CELL_WIDTH),
        width = CELL_WIDTH
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

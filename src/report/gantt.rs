/*!
 * Gantt Chart Rendering
 */

use crate::core::types::Ticks;
use crate::scheduler::Timeline;
use std::fmt;

struct Cell {
    label: String,
    start: Ticks,
}

/// Slices as chart cells, with idle gaps made explicit
fn cells(timeline: &Timeline) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(timeline.len());
    let mut cursor: Ticks = 0;

    for slice in timeline.iter() {
        if slice.start > cursor {
            cells.push(Cell {
                label: "idle".to_string(),
                start: cursor,
            });
        }
        cells.push(Cell {
            label: format!("P{}", slice.pid),
            start: slice.start,
        });
        cursor = slice.end;
    }

    cells
}

/// Two-line chart: a bar of cells and the time stamps at each boundary
///
/// ```text
/// | P1 | P2 | P3 |
/// 0    5    8    16
/// ```
pub struct GanttChart<'a>(pub &'a Timeline);

impl fmt::Display for GanttChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(end) = self.0.end_time() else {
            return writeln!(f, "(empty timeline)");
        };

        let cells = cells(self.0);
        let widths: Vec<usize> = cells
            .iter()
            .map(|cell| cell.label.len().max(cell.start.to_string().len()) + 2)
            .collect();

        f.write_str("|")?;
        for (cell, &width) in cells.iter().zip(&widths) {
            write!(f, "{:^width$}|", cell.label)?;
        }
        writeln!(f)?;

        for (cell, &width) in cells.iter().zip(&widths) {
            write!(f, "{:<pad$}", cell.start, pad = width + 1)?;
        }
        writeln!(f, "{end}")
    }
}

/// Render the chart of `timeline`
pub fn render_gantt(timeline: &Timeline) -> String {
    GanttChart(timeline).to_string()
}

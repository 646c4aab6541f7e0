//! Text rendering of the per-cluster heat grid.
//!
//! Each cluster becomes a `rows × seats` table of student points, the same grouping a
//! plotted heat map would use.

use std::fmt;

use seatscore_evaluator::ScoreBreakdown;
use seatscore_model::Layout;

/// Points of every seat of one cluster. `None` marks an empty seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClusterGrid {
    cluster: u32,
    cells: Vec<Vec<Option<i64>>>,
}

impl ClusterGrid {
    fn empty(cluster: u32, layout: &Layout) -> Self {
        let seats = layout.seats() as usize;
        let rows = layout.rows() as usize;
        Self {
            cluster,
            cells: vec![vec![None; seats]; rows],
        }
    }

    /// Groups the breakdown into one grid per cluster of `layout`.
    ///
    /// Records outside the layout are skipped. Two records on the same seat have their
    /// points added.
    pub(crate) fn from_breakdown(layout: &Layout, breakdown: &[ScoreBreakdown]) -> Vec<Self> {
        let mut grids: Vec<_> = (1..=layout.clusters())
            .map(|cluster| Self::empty(cluster, layout))
            .collect();
        for record in breakdown {
            let Some(cell) = cell_index(record.cluster)
                .and_then(|c| grids.get_mut(c))
                .and_then(|grid| grid.cells.get_mut(cell_index(record.row)?))
                .and_then(|row| row.get_mut(cell_index(record.seat)?))
            else {
                tracing::warn!(
                    student = %record.student,
                    location = %record.location(),
                    "breakdown record outside the layout"
                );
                continue;
            };
            *cell = Some(cell.unwrap_or(0) + record.points);
        }
        grids
    }

    pub(crate) fn cluster(&self) -> u32 {
        self.cluster
    }

    pub(crate) fn total(&self) -> i64 {
        self.cells.iter().flatten().flatten().sum()
    }

    pub(crate) fn get(&self, row: u32, seat: u32) -> Option<i64> {
        let row = self.cells.get(cell_index(row)?)?;
        *row.get(cell_index(seat)?)?
    }
}

/// Converts a 1-based coordinate into a 0-based index.
fn cell_index(coordinate: u32) -> Option<usize> {
    usize::try_from(coordinate).ok()?.checked_sub(1)
}

impl fmt::Display for ClusterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seats = self.cells.first().map_or(0, Vec::len);
        let cell_text = |cell: &Option<i64>| cell.map_or_else(|| ".".to_owned(), |p| p.to_string());
        let width = self
            .cells
            .iter()
            .flatten()
            .map(|cell| cell_text(cell).len())
            .chain((1..=seats).map(|s| format!("s{s}").len()))
            .max()
            .unwrap_or(1);
        let label_width = format!("r{}", self.cells.len()).len();

        writeln!(f, "Cluster {} (total {})", self.cluster, self.total())?;
        write!(f, "{:label_width$}", "")?;
        for seat in 1..=seats {
            write!(f, " {:>width$}", format!("s{seat}"))?;
        }
        writeln!(f)?;
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{:<label_width$}", format!("r{}", i + 1))?;
            for cell in row {
                write!(f, " {:>width$}", cell_text(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

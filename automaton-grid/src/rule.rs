use crate::cell::Cell;
use crate::grid::Neighborhood;
use std::ops::RangeInclusive;

/// The per-cell transition applied uniformly each generation. Each variant reads the
/// neighborhood summary it needs: a living-neighbor count or the 3x3 average.
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionRule {
    Life(LifeRule),
    Diffusion(DiffusionRule),
}

impl TransitionRule {
    pub fn life() -> Self {
        TransitionRule::Life(LifeRule::default())
    }

    pub fn diffusion() -> Self {
        TransitionRule::Diffusion(DiffusionRule::default())
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransitionRule::Life(_) => "life",
            TransitionRule::Diffusion(_) => "diffusion",
        }
    }

    pub fn next_state(&self, cell: &Cell, neighborhood: &Neighborhood) -> Cell {
        match self {
            TransitionRule::Life(rule) => {
                rule.next_state(cell, neighborhood.living_neighbor_count())
            }
            TransitionRule::Diffusion(rule) => rule.next_state(cell, neighborhood.average()),
        }
    }
}

/// Birth/survival thresholds over the eight-neighbor count. The default is B3/S23.
#[derive(Clone, Debug, PartialEq)]
pub struct LifeRule {
    birth: u32,
    survival: RangeInclusive<u32>,
}

impl LifeRule {
    pub fn new(birth: u32, survival: RangeInclusive<u32>) -> Self {
        Self { birth, survival }
    }

    pub fn next_state(&self, cell: &Cell, living_neighbors: u32) -> Cell {
        let alive = if cell.is_alive() {
            self.survival.contains(&living_neighbors)
        } else {
            living_neighbors == self.birth
        };
        if alive { Cell::ALIVE } else { Cell::DEAD }
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::new(3, 2..=3)
    }
}

/// Raises the neighborhood average by a fixed increment, wrapping past 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiffusionRule {
    increment: f64,
}

impl DiffusionRule {
    pub const DEFAULT_INCREMENT: f64 = 0.05;

    pub fn new(increment: f64) -> Self {
        Self { increment }
    }

    /// A cell whose neighborhood averages to zero or less keeps its current value.
    pub fn next_state(&self, cell: &Cell, average: f64) -> Cell {
        if average > 0.0 {
            Cell::new((average + self.increment) % 1.0)
        } else {
            *cell
        }
    }
}

impl Default for DiffusionRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INCREMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::WorldGrid;

    const EPSILON: f64 = 1e-9;

    fn life(cell: Cell, neighbors: u32) -> Cell {
        LifeRule::default().next_state(&cell, neighbors)
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(life(Cell::DEAD, 3), Cell::ALIVE);
        assert_eq!(life(Cell::DEAD, 2), Cell::DEAD);
        assert_eq!(life(Cell::DEAD, 4), Cell::DEAD);
        assert_eq!(life(Cell::DEAD, 0), Cell::DEAD);
    }

    #[test]
    fn test_underpopulation() {
        assert_eq!(life(Cell::ALIVE, 0), Cell::DEAD);
        assert_eq!(life(Cell::ALIVE, 1), Cell::DEAD);
    }

    #[test]
    fn test_survival() {
        assert_eq!(life(Cell::ALIVE, 2), Cell::ALIVE);
        assert_eq!(life(Cell::ALIVE, 3), Cell::ALIVE);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(life(Cell::ALIVE, 4), Cell::DEAD);
        assert_eq!(life(Cell::ALIVE, 8), Cell::DEAD);
    }

    #[test]
    fn diffusion_adds_increment() {
        let next = DiffusionRule::default().next_state(&Cell::DEAD, 0.3);
        assert!((next.value - 0.35).abs() < EPSILON);
    }

    #[test]
    fn diffusion_wraps_past_one() {
        let next = DiffusionRule::default().next_state(&Cell::new(0.9), 0.97);
        assert!((next.value - 0.02).abs() < EPSILON);
    }

    #[test]
    fn diffusion_leaves_zero_average_cell_unchanged() {
        // Not reset to zero: the cell keeps whatever it held before.
        let rule = DiffusionRule::default();
        assert_eq!(rule.next_state(&Cell::new(0.4), 0.0), Cell::new(0.4));
        assert_eq!(rule.next_state(&Cell::new(0.4), -0.1), Cell::new(0.4));
        assert_eq!(rule.next_state(&Cell::DEAD, 0.0), Cell::DEAD);
    }

    #[test]
    fn life_variant_ignores_center_when_counting() {
        let mut grid = WorldGrid::new(5, 5);
        grid.set(2, 2, Cell::ALIVE);
        grid.set(1, 1, Cell::ALIVE);
        grid.set(3, 3, Cell::ALIVE);
        let rule = TransitionRule::life();
        // (2, 2) has two live neighbors; (2, 1) also sees two and stays dead
        assert_eq!(rule.next_state(&grid.get(2, 2), &grid.neighborhood(2, 2)), Cell::ALIVE);
        assert_eq!(rule.next_state(&grid.get(2, 1), &grid.neighborhood(2, 1)), Cell::DEAD);
    }

    #[test]
    fn diffusion_variant_includes_center_in_average() {
        let mut grid = WorldGrid::new(5, 5);
        grid.set(2, 2, Cell::new(0.9));
        let rule = TransitionRule::diffusion();
        let next = rule.next_state(&grid.get(2, 2), &grid.neighborhood(2, 2));
        assert!((next.value - (0.1 + 0.05)).abs() < EPSILON);
    }

    #[test]
    fn variant_names() {
        assert_eq!(TransitionRule::life().name(), "life");
        assert_eq!(TransitionRule::diffusion().name(), "diffusion");
    }
}

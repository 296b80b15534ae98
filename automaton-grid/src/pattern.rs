use crate::cell::Cell;
use crate::grid::WorldGrid;
use crate::random::Random;
use log::debug;

/// A fixed set of live coordinates, as (x, y) pairs.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: Vec<(i64, i64)>,
}

impl Pattern {
    pub fn new(name: &'static str, cells: Vec<(i64, i64)>) -> Self {
        Self { name, cells }
    }

    /// The "180-degree kickback" from Stephen Silver's Life Lexicon.
    pub fn kickback() -> Self {
        Pattern::new(
            "180-degree kickback",
            vec![
                (7, 2),
                (6, 3),
                (6, 4), (7, 4), (8, 4),
                (7, 7), (8, 7),
                (6, 8), (8, 8),
                (8, 9),
            ],
        )
    }

    pub fn place_on(&self, grid: &mut WorldGrid) {
        for &(x, y) in &self.cells {
            grid.set(x, y, Cell::ALIVE);
        }
        debug!("Placed {} ({} cells)", self.name, self.cells.len());
    }
}

/// Marks `count` uniformly drawn cells alive. Repeated draws of one cell are harmless.
pub fn load_random(grid: &mut WorldGrid, rand: &mut Random, count: usize) {
    let max_x = grid.width() - 1;
    let max_y = grid.height() - 1;
    for _ in 0..count {
        let x = rand.next_in_range(0..=max_x);
        let y = rand.next_in_range(0..=max_y);
        grid.set(x as i64, y as i64, Cell::ALIVE);
    }
    debug!("Placed {count} random live cells");
}

/// How a fresh grid gets its first generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seed {
    Kickback,
    Random { count: usize },
}

impl Seed {
    pub fn apply(&self, grid: &mut WorldGrid, rand: &mut Random) {
        match *self {
            Seed::Kickback => Pattern::kickback().place_on(grid),
            Seed::Random { count } => load_random(grid, rand, count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_cells(grid: &WorldGrid) -> Vec<(i64, i64)> {
        let mut result = vec![];
        for y in 0..grid.height() as i64 {
            for x in 0..grid.width() as i64 {
                if grid.get(x, y).is_alive() {
                    result.push((x, y));
                }
            }
        }
        result
    }

    #[test]
    fn kickback_marks_exactly_its_cells() {
        let mut grid = WorldGrid::new(40, 30);
        Pattern::kickback().place_on(&mut grid);
        let mut expected = Pattern::kickback().cells;
        expected.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(live_cells(&grid), expected);
    }

    #[test]
    fn placing_twice_changes_nothing() {
        let mut grid = WorldGrid::new(40, 30);
        Pattern::kickback().place_on(&mut grid);
        Pattern::kickback().place_on(&mut grid);
        assert_eq!(live_cells(&grid).len(), 10);
    }

    #[test]
    fn random_load_is_deterministic_for_a_seed() {
        let mut first = WorldGrid::new(40, 30);
        let mut second = WorldGrid::new(40, 30);
        load_random(&mut first, &mut Random::seeded(1), 20);
        load_random(&mut second, &mut Random::seeded(1), 20);
        assert_eq!(live_cells(&first), live_cells(&second));
    }

    #[test]
    fn random_load_marks_at_most_count_cells() {
        let mut grid = WorldGrid::new(40, 30);
        load_random(&mut grid, &mut Random::seeded(1), 20);
        let live = live_cells(&grid).len();
        assert!((1..=20).contains(&live));
    }

    #[test]
    fn random_load_collisions_are_not_double_counted() {
        let mut grid = WorldGrid::new(1, 1);
        load_random(&mut grid, &mut Random::seeded(1), 5);
        assert_eq!(grid.get(0, 0), Cell::ALIVE);
    }

    #[test]
    fn random_load_on_one_column_stays_in_it() {
        let mut grid = WorldGrid::new(1, 30);
        load_random(&mut grid, &mut Random::seeded(3), 50);
        assert!(live_cells(&grid).iter().all(|&(x, _)| x == 0));
    }
}

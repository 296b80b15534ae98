/// State of one grid cell. The discrete rule only ever stores `DEAD` or `ALIVE`;
/// the diffusion rule stores a level in `[0, 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    pub value: f64,
}

impl Cell {
    pub const DEAD: Cell = Cell { value: 0.0 };
    pub const ALIVE: Cell = Cell { value: 1.0 };

    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn is_alive(&self) -> bool {
        self.value != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_dead() {
        assert_eq!(Cell::default(), Cell::DEAD);
        assert!(!Cell::default().is_alive());
    }

    #[test]
    fn any_nonzero_level_counts_as_alive() {
        assert!(Cell::ALIVE.is_alive());
        assert!(Cell::new(0.02).is_alive());
        assert!(Cell::new(-0.5).is_alive());
    }
}

use crate::cell::Cell;
use std::mem;
use std::ops::{Index, IndexMut};

/// Toroidal grid holding the committed generation (`cells`) and the one being built
/// (`next_cells`). Both buffers keep the dimensions given at construction.
#[derive(Clone, Debug)]
pub struct WorldGrid {
    width: u32,
    height: u32,
    cells: WorldGridCells,
    next_cells: WorldGridCells,
}

impl WorldGrid {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: WorldGridCells::new(width, height),
            next_cells: WorldGridCells::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.num_cells()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Cell> + Clone {
        self.cells.cells_iter()
    }

    pub fn get(&self, x: i64, y: i64) -> Cell {
        self.cells[Loc::wrapped(y, x, self.width, self.height)]
    }

    /// Writes straight into the committed generation. Only seeding does this.
    pub fn set(&mut self, x: i64, y: i64, cell: Cell) {
        let loc = Loc::wrapped(y, x, self.width, self.height);
        self.cells[loc] = cell;
    }

    pub fn set_next(&mut self, x: i64, y: i64, cell: Cell) {
        let loc = Loc::wrapped(y, x, self.width, self.height);
        self.next_cells[loc] = cell;
    }

    pub fn commit_next(&mut self) {
        debug_assert_eq!(self.cells.num_cells(), self.next_cells.num_cells());
        mem::swap(&mut self.next_cells, &mut self.cells);
    }

    pub fn neighborhood(&self, x: i64, y: i64) -> Neighborhood<'_> {
        Neighborhood::new(&self.cells, Loc::wrapped(y, x, self.width, self.height))
    }

    /// Builds one generation from the committed one and commits it. `next_cells` starts
    /// as a copy of `cells`, so a cell the caller leaves as it was keeps its value.
    pub fn update<F>(&mut self, mut next_state: F)
    where
        F: FnMut(&Cell, &Neighborhood) -> Cell,
    {
        self.next_cells.copy_from(&self.cells);
        for row in 0..self.height {
            for col in 0..self.width {
                let loc = Loc::new(row, col);
                let neighborhood = Neighborhood::new(&self.cells, loc);
                self.next_cells[loc] = next_state(&self.cells[loc], &neighborhood);
            }
        }
        self.commit_next();
    }
}

#[derive(Clone, Debug)]
pub struct WorldGridCells {
    cells: Vec<Cell>,
    width: u32,
    height: u32,
}

impl WorldGridCells {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width != 0 && height != 0);
        Self {
            cells: vec![Cell::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Cell> + Clone {
        self.cells.iter()
    }

    fn cell(&self, loc: Loc) -> Option<&Cell> {
        loc.grid_index(self.width, self.height)
            .map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, loc: Loc) -> Option<&mut Cell> {
        loc.grid_index(self.width, self.height)
            .map(|index| &mut self.cells[index])
    }

    pub fn copy_from(&mut self, source: &Self) {
        self.cells.copy_from_slice(&source.cells);
    }
}

impl Index<Loc> for WorldGridCells {
    type Output = Cell;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl IndexMut<Loc> for WorldGridCells {
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.cell_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}

/// The 3x3 Moore window around a cell of a committed buffer, with wrapped edges.
pub struct Neighborhood<'a> {
    cells: &'a WorldGridCells,
    rows: [u32; 3],
    cols: [u32; 3],
}

impl<'a> Neighborhood<'a> {
    pub fn new(cells: &'a WorldGridCells, center: Loc) -> Self {
        let (row_above, row_below) = Self::adjacent_indexes(center.row, cells.height());
        let (col_left, col_right) = Self::adjacent_indexes(center.col, cells.width());
        Self {
            cells,
            rows: [row_above, center.row, row_below],
            cols: [col_left, center.col, col_right],
        }
    }

    pub fn cell(&self, row: u32, col: u32) -> &Cell {
        let grid_index = Loc::new(self.rows[row as usize], self.cols[col as usize]);
        &self.cells[grid_index]
    }

    /// Live cells among the eight neighbors. The center is not counted.
    pub fn living_neighbor_count(&self) -> u32 {
        let mut result = 0;
        self.for_neighbor_cells(|neighbor| {
            if neighbor.is_alive() {
                result += 1;
            }
        });
        result
    }

    /// Mean of all nine values, center included.
    pub fn average(&self) -> f64 {
        let mut sum = 0.0;
        self.for_all_cells(|cell| sum += cell.value);
        sum / 9.0
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(&Cell),
    {
        self.for_cell(0, 0, &mut f);
        self.for_cell(0, 1, &mut f);
        self.for_cell(0, 2, &mut f);

        self.for_cell(1, 0, &mut f);
        self.for_cell(1, 2, &mut f);

        self.for_cell(2, 0, &mut f);
        self.for_cell(2, 1, &mut f);
        self.for_cell(2, 2, &mut f);
    }

    pub fn for_all_cells<F>(&self, mut f: F)
    where
        F: FnMut(&Cell),
    {
        for row in 0..3 {
            for col in 0..3 {
                self.for_cell(row, col, &mut f);
            }
        }
    }

    fn for_cell<F>(&self, row: u32, col: u32, f: &mut F)
    where
        F: FnMut(&Cell),
    {
        f(self.cell(row, col));
    }

    fn adjacent_indexes(cell_index: u32, max: u32) -> (u32, u32) {
        (
            modulo(cell_index as i64 - 1, max),
            modulo(cell_index as i64 + 1, max),
        )
    }
}

fn modulo(val: i64, max: u32) -> u32 {
    val.rem_euclid(max as i64) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Folds any signed offset back onto the torus.
    pub fn wrapped(row: i64, col: i64, width: u32, height: u32) -> Self {
        Self::new(modulo(row, height), modulo(col, width))
    }

    pub fn grid_index(&self, width: u32, height: u32) -> Option<usize> {
        if self.row < height && self.col < width {
            Some(self.row as usize * width as usize + self.col as usize)
        } else {
            None
        }
    }
}

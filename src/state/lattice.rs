// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Occupancy lattice.
//!
//! We don't know in advance which way the fold will grow from its first cell,
//! so the lattice reserves `side - 1` cells on both sides of the origin along
//! every axis: `(2 * side - 1)^3` cells in all. The span check in the move
//! engine keeps every reachable coordinate inside that box, so the lattice is
//! allocated once and never grows during search.

use crate::geometry::Coord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    /// Cells per axis (`2 * side - 1`).
    dim: usize,
    /// Index offset of the origin along each axis (`side - 1`).
    offset: i32,
    cells: Vec<bool>,
    occupied: usize,
}

impl Lattice {
    /// Create an empty lattice for a cube of the given side.
    pub fn new(side: usize) -> Self {
        assert!(side >= 1, "Lattice side must be positive");
        let dim = 2 * side - 1;
        Self {
            dim,
            offset: (side - 1) as i32,
            cells: vec![false; dim * dim * dim],
            occupied: 0,
        }
    }

    /// Flat index of a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the reserved box. The move engine never
    /// produces such a coordinate, so this indicates a bug.
    #[inline]
    fn index(&self, coord: Coord) -> usize {
        let [x, y, z] = coord.components().map(|c| c + self.offset);
        let dim = self.dim as i32;
        assert!(
            (0..dim).contains(&x) && (0..dim).contains(&y) && (0..dim).contains(&z),
            "Lattice coordinate out of bounds: {:?}",
            coord
        );
        ((x as usize * self.dim) + y as usize) * self.dim + z as usize
    }

    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.cells[self.index(coord)]
    }

    /// Mark a free cell occupied.
    #[inline]
    pub fn occupy(&mut self, coord: Coord) {
        let index = self.index(coord);
        debug_assert!(!self.cells[index], "cell {:?} already occupied", coord);
        self.cells[index] = true;
        self.occupied += 1;
    }

    /// Free an occupied cell.
    #[inline]
    pub fn release(&mut self, coord: Coord) {
        let index = self.index(coord);
        debug_assert!(self.cells[index], "cell {:?} already free", coord);
        self.cells[index] = false;
        self.occupied -= 1;
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Largest distance from the origin a coordinate may have on any axis.
    pub fn reach(&self) -> i32 {
        self.offset
    }
}

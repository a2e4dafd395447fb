#[cfg(test)]
mod test;

mod axis;
mod layer;

pub use axis::Axis;
pub use layer::{partition, rotate_slab, Layer, Turn};

use std::fmt;

/// A cubie position on the lattice.
///
/// Components are zero-based: every component of a valid coordinate lies
/// in `0..side` for a puzzle with `side` cubies per edge. Coordinates are
/// plain values, there is no identity beyond the three components.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Ways a coordinate set can fail to describe a cube lattice.
///
/// Both variants are caller bugs rather than user errors: the full
/// coordinate set is generated, never hand-built, so a malformed one
/// means the caller's cubie state has gone wrong.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LatticeError {
    /// the set's cardinality is not a perfect cube
    NotACube { len: usize },
    /// a coordinate has a component outside `0..side`
    OutOfRange { coord: Coord, side: usize },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeError::NotACube { len } => {
                write!(f, "{len} coordinates do not form a cube lattice")
            }
            LatticeError::OutOfRange { coord, side } => {
                write!(f, "coordinate {coord} is outside the {side}^3 lattice")
            }
        }
    }
}

impl std::error::Error for LatticeError {}

/// Infer the side length of a cube lattice from its cardinality.
///
/// Fails loudly when the size is not a perfect cube so a bad set is never
/// silently mis-partitioned into truncated or padded slabs.
pub fn infer_side(len: usize) -> Result<usize, LatticeError> {
    let side = (len as f64).cbrt().round() as usize;
    if side >= 1 && side * side * side == len {
        Ok(side)
    } else {
        Err(LatticeError::NotACube { len })
    }
}

/// Build the full coordinate set for a puzzle with `side` cubies per edge.
///
/// This is the solved arrangement callers start from and then carry
/// between moves, merging rotation results back in after every turn.
/// Coordinates come out x-fastest.
pub fn lattice(side: usize) -> Vec<Coord> {
    let mut coords = Vec::with_capacity(side * side * side);

    for z in 0..side as i32 {
        for y in 0..side as i32 {
            for x in 0..side as i32 {
                coords.push(Coord::new(x, y, z));
            }
        }
    }

    coords
}

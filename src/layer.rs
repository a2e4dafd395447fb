//! Partitioning a cube lattice into slabs and rotating one slab a
//! quarter turn.
//!
//! A quarter turn about a principal axis is exact on the integer lattice:
//! the rotation only ever swaps two components and mirrors one of them
//! across the slab. Rotation is therefore implemented as a column
//! permutation over coordinate components instead of a floating-point
//! matrix, so there is no rounding and four equal turns restore the input
//! by construction.

use crate::{infer_side, Axis, Coord, LatticeError};

/// Direction of a quarter turn, seen from the positive end of the
/// rotation axis. `Ccw` is the right-handed +90 degree rotation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Turn {
    Ccw,
    Cw,
}

impl Turn {
    /// the turn that undoes this one
    pub fn reverse(self) -> Turn {
        match self {
            Turn::Ccw => Turn::Cw,
            Turn::Cw => Turn::Ccw,
        }
    }
}

/// Which input component an output component is read from, and whether it
/// is mirrored across the lattice. `YN` reads `max - y`, `XP` reads `x`,
/// and so on.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Col {
    XP,
    XN,
    YP,
    YN,
    ZP,
    ZN,
}

#[inline]
fn map_coord(c: Coord, max: i32, col: Col) -> i32 {
    match col {
        Col::XP => c.x,
        Col::XN => max - c.x,
        Col::YP => c.y,
        Col::YN => max - c.y,
        Col::ZP => c.z,
        Col::ZN => max - c.z,
    }
}

/// Column triple implementing a quarter turn about `axis`. The axis's own
/// column is always the identity, so a rotated slab stays at its index.
fn turn_cols(axis: Axis, turn: Turn) -> (Col, Col, Col) {
    match (axis, turn) {
        (Axis::X, Turn::Ccw) => (Col::XP, Col::ZN, Col::YP),
        (Axis::X, Turn::Cw) => (Col::XP, Col::ZP, Col::YN),
        (Axis::Y, Turn::Ccw) => (Col::ZP, Col::YP, Col::XN),
        (Axis::Y, Turn::Cw) => (Col::ZN, Col::YP, Col::XP),
        (Axis::Z, Turn::Ccw) => (Col::YN, Col::XP, Col::ZP),
        (Axis::Z, Turn::Cw) => (Col::YP, Col::XN, Col::ZP),
    }
}

/// Rotate one slab's coordinates a quarter turn about `axis`.
///
/// `side` is the side length of the lattice the slab was cut from. The
/// output preserves input order: `out[i]` is the rotation of `in[i]`.
/// The input is not touched, merging the new positions back into cubie
/// state is the caller's job.
pub fn rotate_slab(slab: &[Coord], side: usize, axis: Axis, turn: Turn) -> Vec<Coord> {
    let max = side as i32 - 1;
    let (x_col, y_col, z_col) = turn_cols(axis, turn);

    slab.iter()
        .map(|&c| {
            let rotated = Coord {
                x: map_coord(c, max, x_col),
                y: map_coord(c, max, y_col),
                z: map_coord(c, max, z_col),
            };

            debug_assert!(
                rotated.x >= 0
                    && rotated.x <= max
                    && rotated.y >= 0
                    && rotated.y <= max
                    && rotated.z >= 0
                    && rotated.z <= max,
                "{c} rotated off the lattice to {rotated}"
            );
            debug_assert_eq!(axis.component(rotated), axis.component(c));

            rotated
        })
        .collect()
}

/// The result of partitioning a full coordinate set along one axis.
///
/// Slab `i` holds every coordinate whose component along the axis equals
/// `i`, for `i` in `0..side`. A [`Layer`] is a transient query result;
/// the long-lived cubie state stays with the caller.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Layer {
    axis: Axis,
    side: usize,
    slabs: Vec<Vec<Coord>>,
}

impl Layer {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// cubies per edge of the lattice this layer was cut from
    pub fn side(&self) -> usize {
        self.side
    }

    /// All slabs, ordered by ascending axis component.
    pub fn slabs(&self) -> &[Vec<Coord>] {
        &self.slabs
    }

    /// The slab at `index`.
    ///
    /// Panics if `index >= side`.
    pub fn slab(&self, index: usize) -> &[Coord] {
        &self.slabs[index]
    }

    /// Rotate the slab at `index` a quarter turn, returning the new
    /// coordinates in input order.
    ///
    /// Panics if `index >= side`.
    pub fn rotate_slab(&self, index: usize, turn: Turn) -> Vec<Coord> {
        rotate_slab(&self.slabs[index], self.side, self.axis, turn)
    }
}

/// Split a full cube lattice into slabs along `axis`.
///
/// The set's cardinality must be a perfect cube, and every component of
/// every coordinate must lie in `0..side`; anything else errors out
/// instead of quietly dropping coordinates. Every input coordinate lands
/// in exactly one slab and the input is not mutated.
pub fn partition(coords: &[Coord], axis: Axis) -> Result<Layer, LatticeError> {
    let side = infer_side(coords.len())?;
    let in_range = |v: i32| v >= 0 && v < side as i32;

    let mut slabs: Vec<Vec<Coord>> = (0..side)
        .map(|_| Vec::with_capacity(side * side))
        .collect();

    for &coord in coords {
        if !(in_range(coord.x) && in_range(coord.y) && in_range(coord.z)) {
            return Err(LatticeError::OutOfRange { coord, side });
        }

        slabs[axis.component(coord) as usize].push(coord);
    }

    Ok(Layer { axis, side, slabs })
}

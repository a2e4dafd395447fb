//! Principal axes and their basis vectors.

use std::fmt;

use crate::Coord;

/// One of the three orthogonal directions a layer can rotate about.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// all three axes, in x, y, z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The unit basis vector pointing along this axis.
    pub fn unit_vector(self) -> [i32; 3] {
        match self {
            Axis::X => [1, 0, 0],
            Axis::Y => [0, 1, 0],
            Axis::Z => [0, 0, 1],
        }
    }

    /// The component of `coord` along this axis, read off as the dot
    /// product with the axis's unit vector.
    pub fn component(self, coord: Coord) -> i32 {
        let [ux, uy, uz] = self.unit_vector();
        ux * coord.x + uy * coord.y + uz * coord.z
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

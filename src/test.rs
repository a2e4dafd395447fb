use hashbrown::HashSet;

use crate::{infer_side, lattice, partition, rotate_slab, Axis, Coord, LatticeError, Turn};

fn c(x: i32, y: i32, z: i32) -> Coord {
    Coord::new(x, y, z)
}

#[test]
fn unit_vectors() {
    assert_eq!(Axis::X.unit_vector(), [1, 0, 0]);
    assert_eq!(Axis::Y.unit_vector(), [0, 1, 0]);
    assert_eq!(Axis::Z.unit_vector(), [0, 0, 1]);
}

#[test]
fn component_reads_along_axis() {
    let coord = c(1, 4, 9);

    assert_eq!(Axis::X.component(coord), 1);
    assert_eq!(Axis::Y.component(coord), 4);
    assert_eq!(Axis::Z.component(coord), 9);
}

#[test]
fn infer_side_accepts_perfect_cubes() {
    for side in 1..=6 {
        assert_eq!(infer_side(side * side * side), Ok(side));
    }
}

#[test]
fn infer_side_rejects_everything_else() {
    for len in [0, 2, 7, 26, 28, 100] {
        assert_eq!(infer_side(len), Err(LatticeError::NotACube { len }));
    }
}

#[test]
fn lattice_has_cube_cardinality() {
    for side in 0..=5 {
        assert_eq!(lattice(side).len(), side * side * side);
    }
}

/// A 27-cubie puzzle cut along x must come out as exactly 3 slabs of 9.
#[test]
fn three_slabs_of_nine() {
    let coords = lattice(3);
    let layer = partition(&coords, Axis::X).unwrap();

    assert_eq!(layer.side(), 3);
    assert_eq!(layer.slabs().len(), 3);

    for (i, slab) in layer.slabs().iter().enumerate() {
        assert_eq!(slab.len(), 9);
        assert!(slab.iter().all(|&coord| coord.x == i as i32));
    }
}

/// Every input coordinate lands in exactly one slab: nothing dropped,
/// nothing duplicated.
#[test]
fn partition_is_complete_and_disjoint() {
    for side in 1..=4 {
        let coords = lattice(side);

        for axis in Axis::ALL {
            let layer = partition(&coords, axis).unwrap();

            let mut seen = HashSet::new();
            let mut total = 0;

            for slab in layer.slabs() {
                total += slab.len();
                for &coord in slab {
                    assert!(seen.insert(coord), "{coord} appears in two slabs");
                }
            }

            assert_eq!(total, coords.len());
            assert!(coords.iter().all(|coord| seen.contains(coord)));
        }
    }
}

#[test]
fn partition_rejects_non_cube_input() {
    let mut coords = lattice(3);
    coords.pop();

    assert_eq!(
        partition(&coords, Axis::Z),
        Err(LatticeError::NotACube { len: 26 })
    );
}

#[test]
fn partition_rejects_off_lattice_coordinates() {
    let mut coords = lattice(2);
    coords[3] = c(5, 0, 0);

    assert_eq!(
        partition(&coords, Axis::Y),
        Err(LatticeError::OutOfRange {
            coord: c(5, 0, 0),
            side: 2
        })
    );
}

#[test]
#[should_panic]
fn slab_index_out_of_bounds() {
    let coords = lattice(2);
    let layer = partition(&coords, Axis::X).unwrap();

    layer.slab(2);
}

/// The bottom slab of a 3x3x3, turned +90 degrees about z: (x, y) maps to
/// (2 - y, x) and z stays put.
#[test]
fn quarter_turn_about_z() {
    let coords = lattice(3);
    let layer = partition(&coords, Axis::Z).unwrap();

    let rotated = layer.rotate_slab(0, Turn::Ccw);

    #[rustfmt::skip]
    let expected = vec![
        c(2, 0, 0), c(2, 1, 0), c(2, 2, 0),
        c(1, 0, 0), c(1, 1, 0), c(1, 2, 0),
        c(0, 0, 0), c(0, 1, 0), c(0, 2, 0),
    ];

    assert_eq!(rotated, expected);
}

#[test]
fn rotation_keeps_axis_component() {
    let coords = lattice(4);

    for axis in Axis::ALL {
        let layer = partition(&coords, axis).unwrap();

        for (i, slab) in layer.slabs().iter().enumerate() {
            for turn in [Turn::Ccw, Turn::Cw] {
                let rotated = rotate_slab(slab, layer.side(), axis, turn);

                assert!(rotated
                    .iter()
                    .all(|&coord| axis.component(coord) == i as i32));
            }
        }
    }
}

/// A quarter turn is a bijection on the slab: same cardinality, no two
/// cubies colliding, and nothing leaving the lattice.
#[test]
fn rotation_is_a_lattice_bijection() {
    for side in 1..=4 {
        let coords = lattice(side);

        for axis in Axis::ALL {
            let layer = partition(&coords, axis).unwrap();

            for slab in layer.slabs() {
                let rotated = rotate_slab(slab, side, axis, Turn::Ccw);

                assert_eq!(rotated.len(), slab.len());

                let unique: HashSet<_> = rotated.iter().copied().collect();
                assert_eq!(unique.len(), slab.len());

                let max = side as i32 - 1;
                for coord in &rotated {
                    assert!(coord.x >= 0 && coord.x <= max);
                    assert!(coord.y >= 0 && coord.y <= max);
                    assert!(coord.z >= 0 && coord.z <= max);
                }
            }
        }
    }
}

/// Four equal quarter turns restore every cubie, elementwise, since
/// rotation preserves input order.
#[test]
fn four_turns_are_identity() {
    for side in 1..=5 {
        let coords = lattice(side);

        for axis in Axis::ALL {
            let layer = partition(&coords, axis).unwrap();

            for slab in layer.slabs() {
                for turn in [Turn::Ccw, Turn::Cw] {
                    let mut current = slab.to_vec();

                    for _ in 0..4 {
                        current = rotate_slab(&current, side, axis, turn);
                    }

                    assert_eq!(&current, slab);
                }
            }
        }
    }
}

#[test]
fn cw_undoes_ccw() {
    let coords = lattice(3);

    for axis in Axis::ALL {
        let layer = partition(&coords, axis).unwrap();
        let slab = layer.slab(1);

        let there = rotate_slab(slab, 3, axis, Turn::Ccw);
        let back = rotate_slab(&there, 3, axis, Turn::Ccw.reverse());

        assert_eq!(back, slab);
    }
}

#[test]
fn layer_rotation_matches_free_function() {
    let coords = lattice(3);
    let layer = partition(&coords, Axis::Y).unwrap();

    assert_eq!(
        layer.rotate_slab(2, Turn::Cw),
        rotate_slab(layer.slab(2), 3, Axis::Y, Turn::Cw)
    );
}

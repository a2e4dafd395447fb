use std::time::Instant;

use cubelayers::{lattice, partition, rotate_slab, Axis, Turn};

use crate::{make_bar, VerifyArgs};

use hashbrown::HashSet;
use parking_lot::RwLock;
use rayon::prelude::*;

/// Check every partition and rotation invariant on one lattice, pushing a
/// line per violation.
fn check_lattice(n: usize, failures: &RwLock<Vec<String>>) {
    let fail = |msg: String| failures.write().push(format!("n = {n}: {msg}"));

    let coords = lattice(n);
    let max = n as i32 - 1;

    for axis in Axis::ALL {
        let layer = match partition(&coords, axis) {
            Ok(layer) => layer,
            Err(e) => {
                fail(format!("axis {axis}: partition failed: {e}"));
                continue;
            }
        };

        if layer.slabs().len() != n {
            fail(format!(
                "axis {axis}: {} slabs instead of {n}",
                layer.slabs().len()
            ));
            continue;
        }

        // Completeness: the slabs must re-assemble into exactly the input
        // set, with no coordinate dropped or counted twice.
        let mut seen = HashSet::new();
        let mut total = 0;

        for (i, slab) in layer.slabs().iter().enumerate() {
            if slab.len() != n * n {
                fail(format!("axis {axis}, slab {i}: {} cubies", slab.len()));
            }

            total += slab.len();

            for &coord in slab {
                if axis.component(coord) != i as i32 {
                    fail(format!("axis {axis}, slab {i}: stray cubie {coord}"));
                }
                if !seen.insert(coord) {
                    fail(format!("axis {axis}: {coord} appears in two slabs"));
                }
            }
        }

        if total != coords.len() {
            fail(format!(
                "axis {axis}: slabs cover {total} of {} cubies",
                coords.len()
            ));
        }

        for (i, slab) in layer.slabs().iter().enumerate() {
            for turn in [Turn::Ccw, Turn::Cw] {
                let mut current = slab.to_vec();

                for step in 1..=4 {
                    current = rotate_slab(&current, n, axis, turn);

                    if current.len() != slab.len() {
                        fail(format!(
                            "axis {axis}, slab {i}, {turn:?} x{step}: cardinality changed"
                        ));
                    }

                    let unique: HashSet<_> = current.iter().copied().collect();
                    if unique.len() != current.len() {
                        fail(format!(
                            "axis {axis}, slab {i}, {turn:?} x{step}: cubies collided"
                        ));
                    }

                    for &coord in &current {
                        let on_lattice = coord.x >= 0
                            && coord.x <= max
                            && coord.y >= 0
                            && coord.y <= max
                            && coord.z >= 0
                            && coord.z <= max;

                        if !on_lattice {
                            fail(format!(
                                "axis {axis}, slab {i}, {turn:?} x{step}: {coord} left the lattice"
                            ));
                        }
                        if axis.component(coord) != i as i32 {
                            fail(format!(
                                "axis {axis}, slab {i}, {turn:?} x{step}: {coord} left its slab"
                            ));
                        }
                    }
                }

                // order-4 cycle, elementwise since rotation preserves order
                if &current != slab {
                    fail(format!(
                        "axis {axis}, slab {i}, {turn:?}: four turns are not the identity"
                    ));
                }
            }
        }
    }
}

pub fn verify(opts: &VerifyArgs) {
    let max_n = opts.max_n.max(1);

    let bar = make_bar(max_n as u64);
    bar.set_message("lattices checked");

    let failures = RwLock::new(Vec::new());

    let start = Instant::now();

    if opts.no_parallelism {
        for n in 1..=max_n {
            check_lattice(n, &failures);
            bar.inc(1);
        }
    } else {
        let available_parallelism = num_cpus::get();

        let chunk_size = (max_n / available_parallelism) + 1;
        let chunks = (max_n + chunk_size - 1) / chunk_size;

        (0..chunks).into_par_iter().for_each(|chunk| {
            let lo = chunk * chunk_size + 1;
            let hi = ((chunk + 1) * chunk_size).min(max_n);

            for n in lo..=hi {
                check_lattice(n, &failures);
                bar.inc(1);
            }
        });
    }

    let duration = start.elapsed();

    bar.finish();

    let failures = failures.into_inner();

    if failures.is_empty() {
        println!(
            "All lattices up to n = {max_n} check out. Took {} ms.",
            duration.as_millis()
        );
    } else {
        for failure in &failures {
            eprintln!("{failure}");
        }
        eprintln!("{} check(s) failed.", failures.len());
        std::process::exit(1);
    }
}

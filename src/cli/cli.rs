use clap::{Args, Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use cubelayers::{lattice, partition, rotate_slab, Axis, Layer, Turn};

mod verify;
use verify::verify;

pub fn make_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template =
        format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}}");

    bar.set_style(
        ProgressStyle::with_template(&template)
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}

#[derive(Clone, Parser)]
pub enum Opts {
    /// Print the slabs of an n^3 lattice along an axis
    Layers(LayersArgs),
    /// Rotate one slab and print where each cubie ends up
    Rotate(RotateArgs),
    /// Exhaustively check partition and rotation invariants over a range
    /// of lattice sizes
    Verify(VerifyArgs),
}

#[derive(Clone, Args)]
pub struct LayersArgs {
    /// Cubies per edge of the puzzle
    pub n: usize,

    /// The axis to cut along
    #[clap(long, short, value_enum, default_value = "z")]
    pub axis: AxisArg,
}

#[derive(Clone, Args)]
pub struct RotateArgs {
    /// Cubies per edge of the puzzle
    pub n: usize,

    /// The axis to rotate about
    #[clap(long, short, value_enum, default_value = "z")]
    pub axis: AxisArg,

    /// Index of the slab to rotate, counting from the axis origin
    #[clap(long, short, default_value = "0")]
    pub slab: usize,

    /// The amount of quarter turns to apply
    #[clap(long, short, default_value = "1")]
    pub turns: usize,

    /// Turn clockwise, seen from the positive end of the axis
    #[clap(long, short)]
    pub clockwise: bool,
}

#[derive(Clone, Args)]
pub struct VerifyArgs {
    /// Check every lattice up to and including this side length
    #[clap(default_value = "16")]
    pub max_n: usize,

    /// Disable parallelism
    #[clap(long, short = 'p')]
    pub no_parallelism: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(value: AxisArg) -> Self {
        match value {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

fn cut(n: usize, axis: Axis) -> Layer {
    let coords = lattice(n);

    match partition(&coords, axis) {
        Ok(layer) => layer,
        Err(e) => {
            eprintln!("Failed to partition: {e}");
            std::process::exit(1);
        }
    }
}

fn layers(opts: &LayersArgs) {
    let axis = Axis::from(opts.axis);
    let layer = cut(opts.n, axis);

    for (i, slab) in layer.slabs().iter().enumerate() {
        let cubies = slab
            .iter()
            .map(|coord| format!("{coord}"))
            .collect::<Vec<_>>()
            .join(" ");

        println!("{axis} = {i}: {cubies}");
    }
}

fn rotate(opts: &RotateArgs) {
    let axis = Axis::from(opts.axis);
    let layer = cut(opts.n, axis);

    if opts.slab >= layer.side() {
        eprintln!(
            "Slab index {} is out of range for a {}^3 puzzle.",
            opts.slab,
            layer.side()
        );
        std::process::exit(1);
    }

    let turn = if opts.clockwise { Turn::Cw } else { Turn::Ccw };

    let before = layer.slab(opts.slab);
    let mut after = before.to_vec();

    for _ in 0..opts.turns % 4 {
        after = rotate_slab(&after, layer.side(), axis, turn);
    }

    for (from, to) in before.iter().zip(&after) {
        println!("{from} -> {to}");
    }
}

fn main() {
    let opts = Opts::parse();

    match opts {
        Opts::Layers(l) => layers(&l),
        Opts::Rotate(r) => rotate(&r),
        Opts::Verify(v) => verify(&v),
    }
}

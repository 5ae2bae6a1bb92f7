use anyhow::Result;
use astrokit_core::color::{convert, ColorModel};
use clap::{Args, ValueEnum};

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorModelArg {
    Rgb,
    Hsv,
    Hsl,
}

impl From<ColorModelArg> for ColorModel {
    fn from(arg: ColorModelArg) -> Self {
        match arg {
            ColorModelArg::Rgb => ColorModel::Rgb,
            ColorModelArg::Hsv => ColorModel::Hsv,
            ColorModelArg::Hsl => ColorModel::Hsl,
        }
    }
}

#[derive(Args)]
pub struct ColorArgs {
    /// Model of the input colour
    #[arg(value_enum)]
    pub from: ColorModelArg,

    /// Model to convert to
    #[arg(value_enum)]
    pub to: ColorModelArg,

    /// The three colour components, each in 0-1
    #[arg(num_args = 3, value_names = ["A", "B", "C"], allow_negative_numbers = true)]
    pub components: Vec<f64>,
}

pub fn run(args: &ColorArgs) -> Result<()> {
    let from = ColorModel::from(args.from);
    let to = ColorModel::from(args.to);
    let [a, b, c] = match args.components.as_slice() {
        [a, b, c] => [*a, *b, *c],
        other => anyhow::bail!("Expected 3 colour components, got {}", other.len()),
    };

    let [x, y, z] = convert([a, b, c], from, to);
    println!("{from} ({a:.4}, {b:.4}, {c:.4}) -> {to} ({x:.4}, {y:.4}, {z:.4})");

    Ok(())
}

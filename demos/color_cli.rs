//! CLI application for converting and transforming colors.
//!
//! Colors are given either as hex (`#FF8000`, `F80`, `#FF800080`) or as a
//! comma-separated channel list in the model chosen with `--space`
//! (`0,100,100` for HSB red).
//!
//! Run with: cargo run --example color_cli -- --help

use clap::{Parser, Subcommand};
use color_models_rs::{AnyColor, ColorSpace, Error};

#[derive(Parser)]
#[command(name = "color-cli")]
#[command(about = "Convert and transform colors between color models", long_about = None)]
struct Cli {
    /// Model the input channel lists are written in
    #[arg(short, long, global = true, default_value = "rgb")]
    space: ColorSpace,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color into another model
    Convert {
        color: String,
        /// Target model (rgb, hsb/hsv, hsl, hsi, hsp, cmyk, lab, xyz, oklab)
        #[arg(short, long)]
        to: ColorSpace,
    },

    /// Interpolate a sequence of colors between two colors
    Lerp {
        from: String,
        to: String,
        /// Number of colors to produce
        #[arg(short = 'n', long, default_value = "5")]
        steps: usize,
        /// Only produce the colors between the two inputs
        #[arg(long)]
        exclude_original_colors: bool,
    },

    /// Invert a color
    Invert { color: String },

    /// Rotate a color's hue by 180 degrees
    Opposite { color: String },

    /// Generate random colors in the selected model
    Random {
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
}

fn parse_color(space: ColorSpace, input: &str) -> Result<AnyColor, Error> {
    if input.contains(',') {
        let values = input
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|_| Error::InvalidColorString(input.to_string()))?;
        AnyColor::from_list(space, &values)
    } else {
        AnyColor::from_hex(space, input)
    }
}

fn print_colors(colors: &[AnyColor], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(colors)?);
    } else {
        for color in colors {
            println!("{}  {}", color.to_hex(), color);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let space = cli.space;

    let colors = match cli.command {
        Commands::Convert { color, to } => vec![parse_color(space, &color)?.cast(to)],

        Commands::Lerp {
            from,
            to,
            steps,
            exclude_original_colors,
        } => {
            let from = parse_color(space, &from)?;
            let to = parse_color(space, &to)?;
            from.lerp_to(&to, steps, exclude_original_colors)?
        }

        Commands::Invert { color } => vec![parse_color(space, &color)?.inverted()],

        Commands::Opposite { color } => vec![parse_color(space, &color)?.opposite()],

        Commands::Random { count } => (0..count).map(|_| AnyColor::random(space)).collect(),
    };

    print_colors(&colors, cli.json)
}

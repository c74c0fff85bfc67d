use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use swatchpoints::{image::io::Reader as ImageReader, ColorExtractor, ColorPoint};

/// Extract distinct marker colors from images.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Most colors to extract per image
    #[arg(short = 'n', long, default_value_t = swatchpoints::DEFAULT_COLOR_COUNT)]
    count: usize,

    /// Sample every Nth pixel on both axes
    #[arg(short, long, default_value_t = swatchpoints::DEFAULT_SAMPLE_STRIDE)]
    stride: u32,

    /// Size of the container the image is displayed in, as WIDTHxHEIGHT
    #[arg(short, long, value_parser = parse_container)]
    container: Option<(f64, f64)>,

    /// Print the points as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    for input in &args.inputs {
        let image = ImageReader::open(input)
            .with_context(|| format!("failed to open {}", input.display()))?
            .decode()
            .with_context(|| format!("failed to decode {}", input.display()))?
            .to_rgba8();

        let mut extractor = ColorExtractor::from_image(image)
            .count(args.count)
            .sample_stride(args.stride);

        if let Some((width, height)) = args.container {
            extractor = extractor.container(width, height);
        }

        let points = extractor
            .extract()
            .with_context(|| format!("color extraction failed for {}", input.display()))?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&points)?);
        } else {
            print_table(input, &points);
        }
    }

    Ok(())
}

fn print_table(input: &std::path::Path, points: &[ColorPoint]) {
    println!("{}", input.display());

    if points.is_empty() {
        println!("  no colors found");
        return;
    }

    for point in points {
        println!(
            "  {:>2}  {}  {:<20} ({:>6.1}, {:>6.1})  {:>5} px  vibrancy {:.2}  {}",
            point.id,
            point.hex,
            point.name,
            point.x,
            point.y,
            point.population,
            point.vibrancy,
            if point.is_warm { "warm" } else { "cool" }
        );
    }
}

fn parse_container(value: &str) -> Result<(f64, f64)> {
    let Some((width, height)) = value.split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got {:?}", value);
    };

    let width = width.trim().parse().context("invalid container width")?;
    let height = height.trim().parse().context("invalid container height")?;
    Ok((width, height))
}

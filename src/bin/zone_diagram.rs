use dreamoc_stitcher::diagram::{render_zone_diagram, DrawContext};
use dreamoc_stitcher::error::StitchError;
use dreamoc_stitcher::geometry::DisplayGeometry;
use dreamoc_stitcher::image::io::save_color_image;
use dreamoc_stitcher::stitcher::StitchParams;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), StitchError> {
    let mut params = StitchParams::default();
    let mut out = PathBuf::from("zones.png");

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--width" => params.width = parse_num("--width", args.next())?,
            "--height" => params.height = parse_num("--height", args.next())?,
            "--dpi" => params.dpi = parse_num("--dpi", args.next())?,
            "--out" => out = PathBuf::from(require("--out", args.next())?),
            other => {
                return Err(StitchError::Usage(format!(
                    "unknown argument {other}\n\n{USAGE}"
                )));
            }
        }
    }
    if params.width <= params.height {
        return Err(StitchError::InvalidGeometry {
            width: params.width,
            height: params.height,
        });
    }

    let geometry = DisplayGeometry::new(params.width, params.height);
    let ctx = DrawContext {
        dpi: params.dpi,
        ..Default::default()
    };
    let diagram = render_zone_diagram(&geometry, &ctx);
    save_color_image(&diagram, &out)?;
    println!("Wrote zone diagram to {}", out.display());
    Ok(())
}

const USAGE: &str = "Usage: zone-diagram [--width <px>] [--height <px>] [--dpi <n>] [--out <path>]";

fn require(flag: &str, value: Option<String>) -> Result<String, StitchError> {
    value.ok_or_else(|| StitchError::Usage(format!("{flag} requires a value\n\n{USAGE}")))
}

fn parse_num<T>(flag: &str, value: Option<String>) -> Result<T, StitchError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = require(flag, value)?;
    raw.parse()
        .map_err(|e| StitchError::Usage(format!("invalid value {raw:?} for {flag}: {e}")))
}

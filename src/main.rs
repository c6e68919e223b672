use dreamoc_stitcher::config::stitch::{self, CliCommand};
use dreamoc_stitcher::error::StitchError;
use dreamoc_stitcher::image::io::{load_color_image, save_color_image, write_json_file};
use dreamoc_stitcher::ImageStitcher;
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), StitchError> {
    let mut args = env::args();
    let program = args
        .next()
        .unwrap_or_else(|| "dreamoc-stitcher".to_string());
    let config = match stitch::parse_cli(&program, args)? {
        CliCommand::Run(config) => config,
        CliCommand::Help => {
            println!("{}", stitch::usage(&program));
            return Ok(());
        }
    };

    // geometry is validated before any image is read
    let stitcher = ImageStitcher::new(config.params)?;

    let left = load_color_image(&config.left_path)?;
    let center = load_color_image(&config.center_path)?;
    let right = load_color_image(&config.right_path)?;

    let (canvas, report) = stitcher.stitch_with_report(&left, &center, &right)?;
    save_color_image(&canvas, &config.out_path)?;
    if let Some(path) = &config.report_path {
        write_json_file(path, &report)?;
    }

    println!("Wrote combined image to {}", config.out_path.display());
    Ok(())
}

//! Command-line and file configuration for the stitching tool.
use crate::error::StitchError;
use crate::stitcher::StitchParams;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Fully resolved configuration for one stitching run.
#[derive(Clone, Debug)]
pub struct StitchToolConfig {
    pub left_path: PathBuf,
    pub center_path: PathBuf,
    pub right_path: PathBuf,
    pub params: StitchParams,
    pub out_path: PathBuf,
    pub report_path: Option<PathBuf>,
}

/// Outcome of CLI parsing: either a runnable configuration or a help request.
#[derive(Debug)]
pub enum CliCommand {
    Run(StitchToolConfig),
    Help,
}

/// Load canvas parameters from a JSON file. Missing fields take their
/// defaults.
pub fn load_params(path: &Path) -> Result<StitchParams, StitchError> {
    let data = fs::read_to_string(path).map_err(|e| StitchError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&data).map_err(|e| StitchError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse the tool's command line: three positional view paths plus options.
///
/// Explicit flags override values from a `--config` file regardless of
/// argument order.
pub fn parse_cli<I>(program: &str, args: I) -> Result<CliCommand, StitchError>
where
    I: IntoIterator<Item = String>,
{
    let mut positionals: Vec<PathBuf> = Vec::new();
    let mut width: Option<usize> = None;
    let mut height: Option<usize> = None;
    let mut dpi: Option<u32> = None;
    let mut out_path = PathBuf::from("combined.png");
    let mut report_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "--width" => width = Some(parse_value(program, "--width", it.next())?),
            "--height" => height = Some(parse_value(program, "--height", it.next())?),
            "--dpi" => dpi = Some(parse_value(program, "--dpi", it.next())?),
            "--out" => out_path = parse_value(program, "--out", it.next())?,
            "--config" => config_path = Some(parse_value(program, "--config", it.next())?),
            "--report" => report_path = Some(parse_value(program, "--report", it.next())?),
            other if other.starts_with("--") => {
                return Err(StitchError::Usage(format!(
                    "unknown option {other}\n\n{}",
                    usage(program)
                )));
            }
            _ => positionals.push(PathBuf::from(arg)),
        }
    }

    let [left_path, center_path, right_path] = match <[PathBuf; 3]>::try_from(positionals) {
        Ok(paths) => paths,
        Err(paths) => {
            return Err(StitchError::Usage(format!(
                "expected three view images (left center right), got {}\n\n{}",
                paths.len(),
                usage(program)
            )));
        }
    };

    let mut params = match &config_path {
        Some(path) => load_params(path)?,
        None => StitchParams::default(),
    };
    if let Some(v) = width {
        params.width = v;
    }
    if let Some(v) = height {
        params.height = v;
    }
    if let Some(v) = dpi {
        params.dpi = v;
    }

    Ok(CliCommand::Run(StitchToolConfig {
        left_path,
        center_path,
        right_path,
        params,
        out_path,
        report_path,
    }))
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <left> <center> <right> [options]\n\
         \n\
         Options:\n\
           --width <px>     canvas width (default 1920)\n\
           --height <px>    canvas height (default 1080, must stay below width)\n\
           --dpi <n>        diagram dpi (default 200)\n\
           --out <path>     output image path (default combined.png)\n\
           --config <path>  JSON file with width/height/dpi\n\
           --report <path>  write a JSON stitch report\n\
           -h, --help       print this help"
    )
}

fn parse_value<T>(program: &str, flag: &str, value: Option<String>) -> Result<T, StitchError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = value.ok_or_else(|| {
        StitchError::Usage(format!("{flag} requires a value\n\n{}", usage(program)))
    })?;
    raw.parse()
        .map_err(|e| StitchError::Usage(format!("invalid value {raw:?} for {flag}: {e}")))
}

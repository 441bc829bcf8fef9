use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use serde::Serialize;
use utm::batch::convert_csv_file;
use utm::telemetry::init_tracing;
use utm::{latitude_band, to_lat_lon, to_utm, AngleUnit, Hemisphere, UtmCoordinate};

const HELP: &str = "\
utm - WGS84 geodetic <-> UTM conversion

USAGE:
  utm to-utm <LATITUDE> <LONGITUDE> [--radians]
  utm to-latlon <EASTING> <NORTHING> <ZONE> [--south] [--radians]
  utm convert-csv <INPUT> <OUTPUT> [--radians]

FLAGS:
  --radians   Angles are given/returned in radians instead of degrees
  --south     UTM coordinate is in the southern hemisphere
  -h, --help  Print this help

Results are printed as JSON on stdout.
";

#[derive(Debug, PartialEq)]
enum Command {
    ToUtm { latitude: f64, longitude: f64 },
    ToLatLon { easting: f64, northing: f64, zone: i32, hemisphere: Hemisphere },
    ConvertCsv { input: PathBuf, output: PathBuf },
}

#[derive(Debug, PartialEq)]
struct Cli {
    command: Command,
    unit: AngleUnit,
}

#[derive(Serialize)]
struct ToUtmOutput {
    #[serde(flatten)]
    utm: UtmCoordinate,
    band: Option<char>,
}

fn main() -> ExitCode {
    init_tracing("warn");

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return ExitCode::SUCCESS;
    }

    let result = parse(args).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn parse(mut args: pico_args::Arguments) -> Result<Cli, Box<dyn Error>> {
    let unit = if args.contains("--radians") { AngleUnit::Radians } else { AngleUnit::Degrees };
    let south = args.contains("--south");

    let free: Vec<String> = args
        .finish()
        .into_iter()
        .map(|arg| arg.into_string().map_err(|arg| format!("non UTF-8 argument: {:?}", arg)))
        .collect::<Result<_, _>>()?;

    let (subcommand, rest) = free.split_first().ok_or("missing subcommand, see --help")?;
    let command = match subcommand.as_str() {
        "to-utm" => {
            expect_count(rest, 2, subcommand)?;
            Command::ToUtm {
                latitude: parse_value(&rest[0], "latitude")?,
                longitude: parse_value(&rest[1], "longitude")?,
            }
        }
        "to-latlon" => {
            expect_count(rest, 3, subcommand)?;
            Command::ToLatLon {
                easting: parse_value(&rest[0], "easting")?,
                northing: parse_value(&rest[1], "northing")?,
                zone: parse_value(&rest[2], "zone")?,
                hemisphere: Hemisphere::from(!south),
            }
        }
        "convert-csv" => {
            expect_count(rest, 2, subcommand)?;
            Command::ConvertCsv {
                input: PathBuf::from(&rest[0]),
                output: PathBuf::from(&rest[1]),
            }
        }
        other => return Err(format!("unknown subcommand '{}', see --help", other).into()),
    };

    Ok(Cli { command, unit })
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::ToUtm { latitude, longitude } => {
            let utm = to_utm(latitude, longitude, cli.unit)?;
            let output = ToUtmOutput {
                utm,
                band: latitude_band(cli.unit.to_degrees(latitude)),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::ToLatLon { easting, northing, zone, hemisphere } => {
            let geo = to_lat_lon(easting, northing, zone, hemisphere, cli.unit)?;
            println!("{}", serde_json::to_string_pretty(&geo)?);
        }
        Command::ConvertCsv { input, output } => {
            let summary = convert_csv_file(&input, &output, cli.unit)?;
            tracing::info!(input = %input.display(), output = %output.display(), "csv converted");
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

fn expect_count(rest: &[String], count: usize, subcommand: &str) -> Result<(), Box<dyn Error>> {
    if rest.len() == count {
        Ok(())
    } else {
        Err(format!("{} expects {} arguments, got {}", subcommand, count, rest.len()).into())
    }
}

fn parse_value<T: FromStr>(value: &str, name: &str) -> Result<T, Box<dyn Error>> {
    value
        .parse()
        .map_err(|_| format!("invalid {}: '{}'", name, value).into())
}

//! Command-line parsing and validation.

pub mod error;

use crate::data::{self, Command, DataSource, InputPath, OutputFormat, Parameters, Record};
use error::CliError;
use geodd::constants::MAX_DECIMALS;
use geodd::{DistanceUnit, GeoDDCoordinate};
use std::collections::HashSet;
use std::path::PathBuf;

type CliResult<T> = Result<T, CliError>;

type ApplyFn = fn(Option<&str>, &mut Parameters) -> CliResult<()>;

enum OptKind {
    Value(ApplyFn),
    Flag(ApplyFn),
}

struct OptionSpec {
    name: &'static str,
    kind: OptKind,
}

const OPTION_SPECS: &[OptionSpec] = &[
    OptionSpec {
        name: "format",
        kind: OptKind::Value(|value, params| {
            let v = required_value("format", value)?;
            params.output.format = v.parse::<OutputFormat>().map_err(CliError::from)?;
            Ok(())
        }),
    },
    OptionSpec {
        name: "unit",
        kind: OptKind::Value(|value, params| {
            let v = required_value("unit", value)?;
            params.distance.unit = v.parse::<DistanceUnit>().map_err(CliError::from)?;
            Ok(())
        }),
    },
    OptionSpec {
        name: "decimals",
        kind: OptKind::Value(|value, params| {
            let v = required_value("decimals", value)?;
            params.distance.decimals = parse_decimals(v)?;
            Ok(())
        }),
    },
    OptionSpec {
        name: "from",
        kind: OptKind::Value(|value, params| {
            let v = required_value("from", value)?;
            params.convert.from = Some(v.parse::<DistanceUnit>().map_err(CliError::from)?);
            Ok(())
        }),
    },
    OptionSpec {
        name: "to",
        kind: OptKind::Value(|value, params| {
            let v = required_value("to", value)?;
            params.convert.to = Some(v.parse::<DistanceUnit>().map_err(CliError::from)?);
            Ok(())
        }),
    },
    OptionSpec {
        name: "precise",
        kind: OptKind::Flag(|_, params| {
            params.distance.precise = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "headers",
        kind: OptKind::Flag(|_, params| {
            params.output.headers = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "no-headers",
        kind: OptKind::Flag(|_, params| {
            params.output.headers = false;
            Ok(())
        }),
    },
    OptionSpec {
        name: "perf",
        kind: OptKind::Flag(|_, params| {
            params.perf = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "help",
        kind: OptKind::Flag(|_, _| Err(CliError::Exit(get_help_text()))),
    },
    OptionSpec {
        name: "version",
        kind: OptKind::Flag(|_, _| Err(CliError::Exit(get_version_text()))),
    },
];

pub fn parse_cli(args: Vec<String>) -> CliResult<(DataSource, Command, Parameters)> {
    if args.len() < 2 {
        return Err(CliError::Exit(
            "Usage: geodd [OPTIONS] <coordinate...> <parse|distance|geojson|convert>".to_string(),
        ));
    }

    let mut params = Parameters::default();
    let mut positional = Vec::new();
    let mut applied_options: HashSet<&'static str> = HashSet::new();

    for arg in args.into_iter().skip(1) {
        if let Some(stripped) = arg.strip_prefix("--") {
            let (name, value) = stripped
                .split_once('=')
                .map(|(n, v)| (n, Some(v)))
                .unwrap_or((stripped, None));
            apply_option(name, value, &mut params, &mut applied_options)?;
        } else {
            positional.push(arg);
        }
    }

    if let Some(first) = positional.first()
        && first == "help"
    {
        let message = positional
            .get(1)
            .map(|command| get_command_help(command))
            .unwrap_or_else(get_help_text);
        return Err(CliError::Exit(message));
    }

    let (command, data_source) = parse_positional_args(&positional)?;

    validate_command_options(command, &params, &applied_options)?;

    Ok((data_source, command, params))
}

fn parse_decimals(value: &str) -> CliResult<u32> {
    match value.parse::<u32>() {
        Ok(decimals) if decimals <= MAX_DECIMALS => Ok(decimals),
        _ => Err(format!(
            "Invalid decimals value: {} (expected 0 to {})",
            value, MAX_DECIMALS
        )
        .into()),
    }
}

fn apply_option(
    name: &str,
    value: Option<&str>,
    params: &mut Parameters,
    applied: &mut HashSet<&'static str>,
) -> CliResult<()> {
    let Some(spec) = OPTION_SPECS.iter().find(|s| s.name == name) else {
        return Err(format!("Unknown option: --{}", name).into());
    };

    match spec.kind {
        OptKind::Value(handler) => {
            let val = required_value(spec.name, value)?;
            handler(Some(val), params)?;
        }
        OptKind::Flag(handler) => {
            if value.is_some() {
                return Err(format!("Option --{} does not take a value", spec.name).into());
            }
            handler(None, params)?;
        }
    }

    applied.insert(spec.name);
    Ok(())
}

fn required_value<'a>(flag: &'static str, value: Option<&'a str>) -> CliResult<&'a str> {
    value.ok_or_else(|| CliError::from(format!("Option --{} requires a value", flag)))
}

fn parse_file_arg(arg: &str) -> Option<InputPath> {
    let stripped = arg.strip_prefix('@')?;
    if stripped == "-" {
        return Some(InputPath::Stdin);
    }
    Some(InputPath::File(PathBuf::from(stripped)))
}

fn parse_positional_args(positional_args: &[String]) -> CliResult<(Command, DataSource)> {
    if positional_args.is_empty() {
        return Err("Need at least command and one argument".into());
    }

    let command_index = positional_args
        .iter()
        .position(|arg| Command::all().contains(&arg.as_str()))
        .ok_or_else(|| {
            CliError::from(format!(
                "No command found (expected one of: {})",
                Command::all().join(", ")
            ))
        })?;

    let command = positional_args[command_index]
        .parse::<Command>()
        .map_err(CliError::from)?;

    if command_index + 1 < positional_args.len() {
        return Err(format!(
            "Unexpected argument after command: {}",
            positional_args[command_index + 1]
        )
        .into());
    }

    let data_args = &positional_args[..command_index];

    if data_args.is_empty() {
        return Err("Need at least command and one argument".into());
    }

    let data_source = parse_data_source(data_args, command)?;

    Ok((command, data_source))
}

fn parse_data_source(args: &[String], command: Command) -> CliResult<DataSource> {
    if let [single] = args
        && let Some(path) = parse_file_arg(single)
    {
        return Ok(DataSource::File(path));
    }
    if args.iter().any(|arg| arg.starts_with('@')) {
        return Err("A file argument (@file or @-) must be the only data argument".into());
    }

    let record = match (command, args) {
        (Command::Parse | Command::GeoJson, [coordinate]) => {
            Record::Point(GeoDDCoordinate::parse(coordinate)?)
        }
        (Command::Parse | Command::GeoJson, [lat, lon]) => {
            Record::Point(GeoDDCoordinate::parse_pair(lat, lon)?)
        }
        (Command::Distance, [from, to]) => Record::Route(
            GeoDDCoordinate::parse(from)?,
            GeoDDCoordinate::parse(to)?,
        ),
        (Command::Distance, [lat1, lon1, lat2, lon2]) => Record::Route(
            GeoDDCoordinate::parse_pair(lat1, lon1)?,
            GeoDDCoordinate::parse_pair(lat2, lon2)?,
        ),
        (Command::Convert, [value]) => Record::Length(data::parse_length(value)?),
        (Command::Parse | Command::GeoJson, _) => {
            return Err("Expected <coordinate>, <lat> <lon>, or @file".into());
        }
        (Command::Distance, _) => {
            return Err(
                "Expected <from> <to>, <lat1> <lon1> <lat2> <lon2>, or @file".into(),
            );
        }
        (Command::Convert, _) => return Err("Expected <value> or @file".into()),
    };

    Ok(DataSource::Single(record))
}

fn get_version_text() -> String {
    format!(
        "geodd {}\n Build: {} ({})\n Built: {}\n Features: {}",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_PROFILE"),
        env!("BUILD_TARGET"),
        env!("BUILD_DATE"),
        env!("BUILD_FEATURES")
    )
}

fn validate_command_options(
    command: Command,
    params: &Parameters,
    applied: &HashSet<&'static str>,
) -> CliResult<()> {
    let allowed: &[&str] = match command {
        Command::Distance => &["unit", "decimals", "precise"],
        Command::Convert => &["from", "to"],
        Command::Parse | Command::GeoJson => &[],
    };

    for name in ["unit", "decimals", "precise", "from", "to"] {
        if applied.contains(name) && !allowed.contains(&name) {
            return Err(format!(
                "Option --{} not valid for {} command",
                name,
                command.name()
            )
            .into());
        }
    }

    if applied.contains("precise") && applied.contains("decimals") {
        return Err("Options --precise and --decimals cannot be used together".into());
    }

    if command == Command::Convert {
        if params.convert.from.is_none() {
            return Err("Command convert requires --from=<unit>".into());
        }
        if params.convert.to.is_none() {
            return Err("Command convert requires --to=<unit>".into());
        }
    }

    if command == Command::GeoJson
        && !matches!(params.output.format, OutputFormat::Text | OutputFormat::Json)
    {
        return Err(format!(
            "{} format not supported for geojson command",
            params.output.format.as_str().to_uppercase()
        )
        .into());
    }

    Ok(())
}

fn get_help_text() -> String {
    let defaults = Parameters::default();
    let formats = OutputFormat::all().join(", ");
    format!(
        r#"geodd {}
Parses and validates decimal-degree coordinates and measures great-circle distances.

Usage:
  geodd [OPTIONS] <coordinate> <parse|geojson>
  geodd [OPTIONS] <latitude> <longitude> <parse|geojson>
  geodd [OPTIONS] <from> <to> distance
  geodd [OPTIONS] <lat1> <lon1> <lat2> <lon2> distance
  geodd [OPTIONS] <value> convert --from=<unit> --to=<unit>
  geodd [OPTIONS] @data.txt <parse|distance|geojson|convert>

Examples:
  geodd "37.165611, -8.545786" parse
  geodd 38,737545 -9,370047 geojson
  geodd 37.165611 -8.545786 38.737545 -9.370047 distance --unit=km --decimals=3
  geodd 189143 convert --from=m --to=mi
  echo "52.5 13.4" | geodd @- parse --format=json

Arguments:
  <coordinate>       Combined "<lat>, <lon>" text. '.' is the decimal separator.
  <latitude>         Decimal degrees, -90 to +90. '.' or ',' as decimal separator.
  <longitude>        Decimal degrees, -180 to +180. '.' or ',' as decimal separator.
  @data.txt          File with one record per line (or @- for stdin).

  File inputs:
    - parse/geojson lines contain lat lon.
    - distance lines contain lat1 lon1 lat2 lon2.
    - convert lines contain one value.
    - Fields are separated by ';', by ',' when that gives the expected
      field count, or by whitespace.
    - Blank lines and lines starting with # are ignored.

Options:
  --format=<format>     Output format: {}. Default: {}
  --[no-]headers        Include headers in CSV output. Default: {}
  --perf                Print performance statistics to stderr.
  --help                Show this help message and exit.
  --version             Print version information and exit.

Commands:
  parse                 Validate coordinates and print them normalized.
  distance              Haversine distance between two coordinates.
  geojson               Print coordinates as GeoJSON points.
  convert               Convert a length between m, km and mi.

Run 'geodd help <command>' for command-specific options.
"#,
        env!("CARGO_PKG_VERSION"),
        formats,
        defaults.output.format,
        defaults.output.headers
    )
}

fn get_command_help(command: &str) -> String {
    let defaults = Parameters::default();
    let units = DistanceUnit::all().join(", ");
    match command {
        "parse" => r#"Usage:
  geodd [OPTIONS] <coordinate> parse
  geodd [OPTIONS] <latitude> <longitude> parse
  geodd [OPTIONS] @coords.txt parse

Validates coordinates and prints them with '.' as decimal separator.
The combined form reports any failure as a formatting error; the
separate form reports which bound was violated.

Examples:
  geodd "81.54, -54.1272" parse
  geodd 81,54 -54,1272 parse --format=csv
"#
        .to_string(),
        "distance" => format!(
            r#"Usage:
  geodd [OPTIONS] <from> <to> distance
  geodd [OPTIONS] <lat1> <lon1> <lat2> <lon2> distance
  geodd [OPTIONS] @pairs.txt distance

Calculates the Haversine distance on a sphere of radius 6371.071 km.

Options:
  --unit=<unit>         Output unit: {}. Default: {}
  --decimals=<n>        Round to n places (0 to 15), ties to even. Default: {}
  --precise             Do not round.

Examples:
  geodd "37.165611, -8.545786" "38.737545, -9.370047" distance
  geodd 37.165611 -8.545786 38.737545 -9.370047 distance --unit=km --decimals=2
"#,
            units, defaults.distance.unit, defaults.distance.decimals
        ),
        "geojson" => r#"Usage:
  geodd [OPTIONS] <coordinate> geojson
  geodd [OPTIONS] <latitude> <longitude> geojson
  geodd [OPTIONS] @coords.txt geojson

Prints each coordinate as a GeoJSON Point, [longitude, latitude].
Only text and json formats are supported.

Examples:
  geodd 38.737545 -9.370047 geojson
"#
        .to_string(),
        "convert" => format!(
            r#"Usage:
  geodd [OPTIONS] <value> convert --from=<unit> --to=<unit>
  geodd [OPTIONS] @values.txt convert --from=<unit> --to=<unit>

Converts a length between units: {}.

Options:
  --from=<unit>         Unit of the input value (required).
  --to=<unit>           Unit of the result (required).

Examples:
  geodd 10 convert --from=km --to=mi
"#,
            units
        ),
        _ => format!(
            "Unknown command: {}\n\nRun 'geodd --help' for usage.",
            command
        ),
    }
}

use super::Command;
use crate::cli::error::PlannerError;
use super::types::{DataSource, InputPath, Record, RecordResult, RecordStream};
use geodd::GeoDDCoordinate;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn field_layout(command: Command) -> &'static str {
    match command {
        Command::Parse | Command::GeoJson => "lat lon",
        Command::Distance => "lat1 lon1 lat2 lon2",
        Command::Convert => "value",
    }
}

/// Splits a data line into fields.
///
/// Semicolons always delimit. Commas delimit only when that yields exactly
/// `expected` fields and none of them holds interior whitespace, so
/// `52,5 13,4` and `52.5 13,4` keep their decimal commas. Anything else is
/// split on whitespace.
pub fn parse_delimited_line(line: &str, expected: usize) -> Vec<&str> {
    if line.contains(';') {
        return line.split(';').map(str::trim).collect();
    }
    if line.contains(',') {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() == expected && !parts.iter().any(|p| p.contains(char::is_whitespace)) {
            return parts;
        }
    }
    line.split_whitespace().collect()
}

/// Parses a plain length value. Non-finite values are refused.
pub fn parse_length(text: &str) -> Result<f64, String> {
    let trimmed = text.trim();
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("Invalid value: {}", trimmed)),
    }
}

pub fn parse_record(parts: &[&str], command: Command) -> Result<Record, String> {
    let field = |idx: usize| parts.get(idx).copied();
    match command {
        Command::Parse | Command::GeoJson => GeoDDCoordinate::parse_fields(field(0), field(1))
            .map(Record::Point)
            .map_err(|e| e.to_string()),
        Command::Distance => {
            let from =
                GeoDDCoordinate::parse_fields(field(0), field(1)).map_err(|e| e.to_string())?;
            let to =
                GeoDDCoordinate::parse_fields(field(2), field(3)).map_err(|e| e.to_string())?;
            Ok(Record::Route(from, to))
        }
        Command::Convert => parse_length(field(0).unwrap_or_default()).map(Record::Length),
    }
}

fn open_input(input_path: &InputPath) -> io::Result<Box<dyn BufRead>> {
    match input_path {
        InputPath::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
        InputPath::File(path) => {
            let file = File::open(path)?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

fn read_records<R>(reader: R, path_display: String, command: Command) -> RecordStream
where
    R: BufRead + 'static,
{
    let expected = command.fields_per_line();
    let mut lines = reader.lines().enumerate();
    let mut finished = false;

    let iter = std::iter::from_fn(move || -> Option<RecordResult> {
        if finished {
            return None;
        }

        for (idx, line_result) in lines.by_ref() {
            let line_number = idx + 1;
            let line = match line_result {
                Ok(l) => l,
                Err(e) => {
                    finished = true;
                    return Some(Err(format!(
                        "{}:{}: failed to read line: {}",
                        path_display, line_number, e
                    )));
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let parts = parse_delimited_line(trimmed, expected);
            if parts.len() > expected {
                finished = true;
                return Some(Err(format!(
                    "{}:{}: expected {} fields ({}), found {}",
                    path_display,
                    line_number,
                    expected,
                    field_layout(command),
                    parts.len()
                )));
            }

            let record = parse_record(&parts, command)
                .map_err(|err| format!("{}:{}: {}", path_display, line_number, err));
            if record.is_err() {
                finished = true;
            }
            return Some(record);
        }

        finished = true;
        None
    });

    Box::new(iter)
}

pub fn expand_source(source: DataSource, command: Command) -> Result<RecordStream, PlannerError> {
    match source {
        DataSource::Single(record) => Ok(Box::new(std::iter::once(Ok(record)))),
        DataSource::File(input_path) => {
            let path_display = input_path.display_name();
            let reader = open_input(&input_path).map_err(|source| PlannerError::Open {
                path: path_display.clone(),
                source,
            })?;
            Ok(read_records(reader, path_display, command))
        }
    }
}

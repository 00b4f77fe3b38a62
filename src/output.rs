//! Output formatting for text, CSV, JSON, and Parquet.

mod formatters;

use crate::cli::error::OutputError;
use crate::compute::{CalculationResult, CalculationStream};
use crate::data::{Command, OutputFormat, Parameters};
use crate::planner::OutputPlan;
use formatters::{CsvFormatter, Formatter, JsonFormatter, TextFormatter};
use geodd::GeoJson;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;
use std::io::{self, BufWriter, Write};
use unicode_width::UnicodeWidthStr;

/// A single output value, shared by every tabular format.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Float(f64),
    Text(&'static str),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Float(v) => serializer.serialize_f64(*v),
            Cell::Text(s) => serializer.serialize_str(s),
        }
    }
}

pub fn columns(command: Command) -> &'static [&'static str] {
    match command {
        Command::Parse | Command::GeoJson => &["latitude", "longitude"],
        Command::Distance => &[
            "latitude1",
            "longitude1",
            "latitude2",
            "longitude2",
            "distance",
            "unit",
        ],
        Command::Convert => &["value", "from", "result", "to"],
    }
}

pub fn cells(result: &CalculationResult) -> Vec<Cell> {
    match result {
        CalculationResult::Point { coordinate } => vec![
            Cell::Float(coordinate.latitude()),
            Cell::Float(coordinate.longitude()),
        ],
        CalculationResult::Distance {
            from,
            to,
            distance,
            unit,
        } => vec![
            Cell::Float(from.latitude()),
            Cell::Float(from.longitude()),
            Cell::Float(to.latitude()),
            Cell::Float(to.longitude()),
            Cell::Float(*distance),
            Cell::Text(unit.symbol()),
        ],
        CalculationResult::Length {
            value,
            from,
            result,
            to,
        } => vec![
            Cell::Float(*value),
            Cell::Text(from.symbol()),
            Cell::Float(*result),
            Cell::Text(to.symbol()),
        ],
    }
}

/// JSON object whose keys keep column order.
struct JsonRow<'a> {
    columns: &'a [&'static str],
    cells: &'a [Cell],
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

pub fn to_json_line(result: &CalculationResult, command: Command) -> serde_json::Result<String> {
    match (command, result) {
        (Command::GeoJson, CalculationResult::Point { coordinate }) => {
            serde_json::to_string(&GeoJson::from(*coordinate))
        }
        _ => serde_json::to_string(&JsonRow {
            columns: columns(command),
            cells: &cells(result),
        }),
    }
}

pub fn write_csv_row<W: Write>(
    command: Command,
    result: &CalculationResult,
    headers: bool,
    first: bool,
    writer: &mut W,
) -> io::Result<()> {
    if first && headers {
        writeln!(writer, "{}", columns(command).join(","))?;
    }
    let row: Vec<String> = cells(result).iter().map(Cell::to_string).collect();
    writeln!(writer, "{}", row.join(","))
}

fn text_lines(result: &CalculationResult) -> Vec<(&'static str, String)> {
    match result {
        CalculationResult::Point { coordinate } => vec![
            ("Latitude", format!("{}°", coordinate.latitude())),
            ("Longitude", format!("{}°", coordinate.longitude())),
            ("Coordinate", coordinate.to_display_string()),
        ],
        CalculationResult::Distance {
            from,
            to,
            distance,
            unit,
        } => vec![
            ("From", from.to_string()),
            ("To", to.to_string()),
            ("Distance", format!("{} {}", distance, unit)),
        ],
        CalculationResult::Length {
            value,
            from,
            result,
            to,
        } => vec![
            ("Value", format!("{} {}", value, from)),
            ("Result", format!("{} {}", result, to)),
        ],
    }
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(fill), text)
}

/// One record framed on the left, as a labelled block.
pub fn write_text_record<W: Write>(result: &CalculationResult, writer: &mut W) -> io::Result<()> {
    let lines = text_lines(result);
    let label_width = lines.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    let rendered: Vec<String> = lines
        .iter()
        .map(|(label, value)| format!("│ {}  {}", pad_right(label, label_width), value))
        .collect();
    let box_width = rendered.iter().map(|line| line.width()).max().unwrap_or(0);

    writeln!(writer, "┌{}", "─".repeat(box_width.saturating_sub(1)))?;
    for line in rendered {
        writeln!(writer, "{}", line)?;
    }
    writeln!(writer, "└{}", "─".repeat(box_width.saturating_sub(1)))
}

/// Streaming table layout; column widths are fixed up front.
pub struct TextTable {
    widths: Vec<usize>,
}

const MIN_COLUMN_WIDTH: usize = 12;

impl TextTable {
    pub fn new(command: Command) -> Self {
        let widths = columns(command)
            .iter()
            .map(|name| name.width().max(MIN_COLUMN_WIDTH))
            .collect();
        Self { widths }
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let mut line = String::from(left);
        for (i, width) in self.widths.iter().enumerate() {
            line.push_str(&"─".repeat(width + 2));
            if i + 1 < self.widths.len() {
                line.push(middle);
            }
        }
        line.push(right);
        line
    }

    pub fn write_header<W: Write>(&self, command: Command, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.border('┌', '┬', '┐'))?;
        let mut row = String::from('│');
        for (name, width) in columns(command).iter().zip(&self.widths) {
            row.push_str(&format!(" {} │", pad_right(name, *width)));
        }
        writeln!(writer, "{}", row)?;
        writeln!(writer, "{}", self.border('├', '┼', '┤'))
    }

    pub fn write_row<W: Write>(
        &self,
        result: &CalculationResult,
        writer: &mut W,
    ) -> io::Result<()> {
        let mut row = String::from('│');
        for (cell, width) in cells(result).iter().zip(&self.widths) {
            let text = cell.to_string();
            let padded = match cell {
                Cell::Float(_) => pad_left(&text, *width),
                Cell::Text(_) => pad_right(&text, *width),
            };
            row.push_str(&format!(" {} │", padded));
        }
        writeln!(writer, "{}", row)
    }

    pub fn write_footer<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.border('└', '┴', '┘'))
    }
}

pub fn dispatch_output(
    results: CalculationStream,
    command: Command,
    params: &Parameters,
    output_plan: &OutputPlan,
) -> Result<usize, OutputError> {
    let flush_each = output_plan.flush_each_record;

    match params.output.format {
        #[cfg(feature = "parquet")]
        OutputFormat::Parquet => {
            let writer = BufWriter::new(io::stdout());
            crate::parquet::write_parquet(results, command, writer)
        }
        format => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            let written = {
                let mut formatter: Box<dyn Formatter + '_> = match format {
                    OutputFormat::Csv => Box::new(CsvFormatter::new(
                        &mut writer,
                        command,
                        params.output.headers,
                        flush_each,
                    )),
                    OutputFormat::Json => {
                        Box::new(JsonFormatter::new(&mut writer, command, flush_each))
                    }
                    _ => Box::new(TextFormatter::new(
                        &mut writer,
                        command,
                        output_plan.tabular,
                        flush_each,
                    )),
                };
                formatter.write(results)
            };
            writer.flush()?;
            written
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geodd::{DistanceUnit, GeoDDCoordinate};

    fn point() -> CalculationResult {
        CalculationResult::Point {
            coordinate: GeoDDCoordinate::new(81.54, -54.1272).unwrap(),
        }
    }

    fn route() -> CalculationResult {
        CalculationResult::Distance {
            from: GeoDDCoordinate::new(37.165611, -8.545786).unwrap(),
            to: GeoDDCoordinate::new(38.737545, -9.370047).unwrap(),
            distance: 189143.0,
            unit: DistanceUnit::Meter,
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn csv_rows_with_header() {
        let out = render(|w| write_csv_row(Command::Distance, &route(), true, true, w));
        assert_eq!(
            out,
            "latitude1,longitude1,latitude2,longitude2,distance,unit\n\
             37.165611,-8.545786,38.737545,-9.370047,189143,m\n"
        );
        let out = render(|w| write_csv_row(Command::Parse, &point(), true, false, w));
        assert_eq!(out, "81.54,-54.1272\n");
    }

    #[test]
    fn json_keeps_column_order() {
        assert_eq!(
            to_json_line(&point(), Command::Parse).unwrap(),
            r#"{"latitude":81.54,"longitude":-54.1272}"#
        );
        assert_eq!(
            to_json_line(&route(), Command::Distance).unwrap(),
            r#"{"latitude1":37.165611,"longitude1":-8.545786,"latitude2":38.737545,"longitude2":-9.370047,"distance":189143.0,"unit":"m"}"#
        );
    }

    #[test]
    fn geojson_lines_use_point_documents() {
        assert_eq!(
            to_json_line(&point(), Command::GeoJson).unwrap(),
            r#"{"type":"Point","coordinates":[-54.1272,81.54]}"#
        );
    }

    #[test]
    fn text_record_is_aligned_by_display_width() {
        let out = render(|w| write_text_record(&point(), w));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('┌'));
        assert_eq!(lines[1], "│ Latitude    81.54°");
        assert_eq!(lines[2], "│ Longitude   -54.1272°");
        assert_eq!(lines[3], "│ Coordinate  81.54, -54.1272");
        assert_eq!(lines[0].width(), lines[3].width());
    }

    #[test]
    fn table_rows_line_up_with_header() {
        let table = TextTable::new(Command::Parse);
        let out = render(|w| {
            table.write_header(Command::Parse, w)?;
            table.write_row(&point(), w)?;
            table.write_footer(w)
        });
        let widths: Vec<usize> = out.lines().map(|line| line.width()).collect();
        assert_eq!(widths.len(), 5);
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(out.contains("│        81.54 │     -54.1272 │"));
    }
}

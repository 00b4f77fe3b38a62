//! Per-record calculations over a streaming input.

use crate::data::{Command, Parameters, Record, RecordResult};
use geodd::distance::round_half_even;
use geodd::{DistanceUnit, GeoDDCoordinate};

#[derive(Debug, Clone, PartialEq)]
pub enum CalculationResult {
    Point {
        coordinate: GeoDDCoordinate,
    },
    Distance {
        from: GeoDDCoordinate,
        to: GeoDDCoordinate,
        distance: f64,
        unit: DistanceUnit,
    },
    Length {
        value: f64,
        from: DistanceUnit,
        result: f64,
        to: DistanceUnit,
    },
}

pub type CalculationStream = Box<dyn Iterator<Item = Result<CalculationResult, String>>>;

pub fn calculate_distance(
    from: GeoDDCoordinate,
    to: GeoDDCoordinate,
    params: &Parameters,
) -> CalculationResult {
    let options = &params.distance;
    let distance = match (options.precise, options.unit) {
        (true, unit) => DistanceUnit::Meter.convert(from.precise_distance_to(&to), unit),
        (false, DistanceUnit::Meter) => from.distance_to(&to, options.decimals),
        (false, unit) => round_half_even(
            DistanceUnit::Meter.convert(from.precise_distance_to(&to), unit),
            options.decimals,
        ),
    };

    CalculationResult::Distance {
        from,
        to,
        distance,
        unit: options.unit,
    }
}

pub fn calculate(
    record: Record,
    command: Command,
    params: &Parameters,
) -> Result<CalculationResult, String> {
    match (command, record) {
        (Command::Parse | Command::GeoJson, Record::Point(coordinate)) => {
            Ok(CalculationResult::Point { coordinate })
        }
        (Command::Distance, Record::Route(from, to)) => Ok(calculate_distance(from, to, params)),
        (Command::Convert, Record::Length(value)) => {
            let (Some(from), Some(to)) = (params.convert.from, params.convert.to) else {
                return Err("Command convert requires --from and --to".to_string());
            };
            let result = from.convert(value, to);
            if !result.is_finite() {
                return Err(format!("Result out of range: {:e} {} in {}", value, from, to));
            }
            Ok(CalculationResult::Length {
                value,
                from,
                result,
                to,
            })
        }
        (command, record) => Err(format!(
            "Record {:?} does not fit the {} command",
            record,
            command.name()
        )),
    }
}

pub fn calculate_stream(
    data: Box<dyn Iterator<Item = RecordResult>>,
    command: Command,
    params: Parameters,
) -> CalculationStream {
    Box::new(data.map(move |record| record.and_then(|r| calculate(r, command, &params))))
}

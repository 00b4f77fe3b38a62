use geodd::DistanceUnit;
use geodd::constants::DEFAULT_DECIMALS;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
    #[cfg(feature = "parquet")]
    Parquet,
}

impl OutputFormat {
    pub fn all() -> Vec<&'static str> {
        let mut formats = vec!["text", "csv", "json"];
        if cfg!(feature = "parquet") {
            formats.push("parquet");
        }
        formats
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            #[cfg(feature = "parquet")]
            OutputFormat::Parquet => "parquet",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            #[cfg(feature = "parquet")]
            "parquet" => Ok(OutputFormat::Parquet),
            #[cfg(not(feature = "parquet"))]
            "parquet" => Err("PARQUET format not available in this build".to_string()),
            _ => Err(format!(
                "Invalid format: {} (expected one of: {})",
                s,
                OutputFormat::all().join(", ")
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub headers: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            headers: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DistanceOptions {
    pub unit: DistanceUnit,
    pub decimals: u32,
    /// Skip rounding entirely.
    pub precise: bool,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::Meter,
            decimals: DEFAULT_DECIMALS,
            precise: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub from: Option<DistanceUnit>,
    pub to: Option<DistanceUnit>,
}

#[derive(Debug, Clone, Default)]
pub struct Parameters {
    pub output: OutputOptions,
    pub distance: DistanceOptions,
    pub convert: ConvertOptions,
    pub perf: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Parse,
    Distance,
    GeoJson,
    Convert,
}

impl Command {
    pub fn all() -> [&'static str; 4] {
        ["parse", "distance", "geojson", "convert"]
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Parse => "parse",
            Command::Distance => "distance",
            Command::GeoJson => "geojson",
            Command::Convert => "convert",
        }
    }

    /// Number of fields one line of a data file carries.
    pub fn fields_per_line(self) -> usize {
        match self {
            Command::Parse | Command::GeoJson => 2,
            Command::Distance => 4,
            Command::Convert => 1,
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parse" => Ok(Command::Parse),
            "distance" => Ok(Command::Distance),
            "geojson" => Ok(Command::GeoJson),
            "convert" => Ok(Command::Convert),
            _ => Err(format!("Unknown command: {}", s)),
        }
    }
}

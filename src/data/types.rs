use geodd::GeoDDCoordinate;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum InputPath {
    Stdin,
    File(PathBuf),
}

impl InputPath {
    pub fn display_name(&self) -> String {
        match self {
            InputPath::Stdin => "stdin".to_string(),
            InputPath::File(path) => path.display().to_string(),
        }
    }
}

/// One unit of work for a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record {
    Point(GeoDDCoordinate),
    Route(GeoDDCoordinate, GeoDDCoordinate),
    Length(f64),
}

#[derive(Debug, Clone)]
pub enum DataSource {
    Single(Record),
    File(InputPath),
}

impl DataSource {
    pub fn uses_stdin(&self) -> bool {
        matches!(self, DataSource::File(InputPath::Stdin))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, DataSource::File(_))
    }
}

pub type RecordResult = Result<Record, String>;
pub type RecordStream = Box<dyn Iterator<Item = RecordResult>>;

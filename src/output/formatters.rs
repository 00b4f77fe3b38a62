use super::{TextTable, to_json_line, write_csv_row, write_text_record};
use crate::cli::error::OutputError;
use crate::compute::CalculationStream;
use crate::data::Command;
use std::io::Write;

pub trait Formatter {
    fn write(&mut self, results: CalculationStream) -> Result<usize, OutputError>;
}

pub struct CsvFormatter<'a, W: Write> {
    writer: &'a mut W,
    command: Command,
    headers: bool,
    flush_each: bool,
}

impl<'a, W: Write> CsvFormatter<'a, W> {
    pub fn new(writer: &'a mut W, command: Command, headers: bool, flush_each: bool) -> Self {
        Self {
            writer,
            command,
            headers,
            flush_each,
        }
    }
}

impl<'a, W: Write> Formatter for CsvFormatter<'a, W> {
    fn write(&mut self, results: CalculationStream) -> Result<usize, OutputError> {
        let mut count = 0;
        for (index, result_or_err) in results.enumerate() {
            let result = result_or_err.map_err(OutputError::Record)?;
            write_csv_row(self.command, &result, self.headers, index == 0, self.writer)?;
            count += 1;
            if self.flush_each {
                self.writer.flush()?;
            }
        }
        Ok(count)
    }
}

pub struct JsonFormatter<'a, W: Write> {
    writer: &'a mut W,
    command: Command,
    flush_each: bool,
}

impl<'a, W: Write> JsonFormatter<'a, W> {
    pub fn new(writer: &'a mut W, command: Command, flush_each: bool) -> Self {
        Self {
            writer,
            command,
            flush_each,
        }
    }
}

impl<'a, W: Write> Formatter for JsonFormatter<'a, W> {
    fn write(&mut self, results: CalculationStream) -> Result<usize, OutputError> {
        let mut count = 0;
        for result_or_err in results {
            let result = result_or_err.map_err(OutputError::Record)?;
            let line = to_json_line(&result, self.command)?;
            writeln!(self.writer, "{}", line)?;
            count += 1;
            if self.flush_each {
                self.writer.flush()?;
            }
        }
        Ok(count)
    }
}

pub struct TextFormatter<'a, W: Write> {
    writer: &'a mut W,
    command: Command,
    tabular: bool,
    flush_each: bool,
}

impl<'a, W: Write> TextFormatter<'a, W> {
    pub fn new(writer: &'a mut W, command: Command, tabular: bool, flush_each: bool) -> Self {
        Self {
            writer,
            command,
            tabular,
            flush_each,
        }
    }

    fn write_table(&mut self, results: CalculationStream) -> Result<usize, OutputError> {
        let table = TextTable::new(self.command);
        let mut count = 0;
        let mut failure = None;

        for result_or_err in results {
            let result = match result_or_err {
                Ok(result) => result,
                Err(err) => {
                    failure = Some(err);
                    break;
                }
            };
            if count == 0 {
                table.write_header(self.command, self.writer)?;
            }
            table.write_row(&result, self.writer)?;
            count += 1;
            if self.flush_each {
                self.writer.flush()?;
            }
        }

        // Close the table even when a later record failed.
        if count > 0 {
            table.write_footer(self.writer)?;
        }

        match failure {
            Some(err) => Err(OutputError::Record(err)),
            None => Ok(count),
        }
    }
}

impl<'a, W: Write> Formatter for TextFormatter<'a, W> {
    fn write(&mut self, results: CalculationStream) -> Result<usize, OutputError> {
        if self.command == Command::GeoJson {
            return JsonFormatter::new(&mut *self.writer, self.command, self.flush_each)
                .write(results);
        }
        if self.tabular {
            return self.write_table(results);
        }

        let mut count = 0;
        for result_or_err in results {
            let result = result_or_err.map_err(OutputError::Record)?;
            write_text_record(&result, self.writer)?;
            count += 1;
            if self.flush_each {
                self.writer.flush()?;
            }
        }
        Ok(count)
    }
}

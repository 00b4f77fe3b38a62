//! Parquet output format support.

use crate::cli::error::OutputError;
use crate::compute::CalculationStream;
use crate::data::Command;
use crate::output::{Cell, cells, columns};
use arrow::array::{ArrayRef, Float64Builder, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::io::Write;
use std::sync::Arc;

const BATCH_SIZE: usize = 8192;

enum ColumnBuilder {
    Float(Float64Builder),
    Text(StringBuilder),
}

impl ColumnBuilder {
    fn new(data_type: &DataType) -> Self {
        match data_type {
            DataType::Utf8 => {
                ColumnBuilder::Text(StringBuilder::with_capacity(BATCH_SIZE, BATCH_SIZE * 2))
            }
            _ => ColumnBuilder::Float(Float64Builder::with_capacity(BATCH_SIZE)),
        }
    }

    fn append(&mut self, cell: &Cell) -> std::io::Result<()> {
        match (self, cell) {
            (ColumnBuilder::Float(b), Cell::Float(v)) => b.append_value(*v),
            (ColumnBuilder::Text(b), Cell::Text(s)) => b.append_value(s),
            _ => return Err(std::io::Error::other("Column type mismatch")),
        }
        Ok(())
    }

    fn finish(&mut self) -> ArrayRef {
        match self {
            ColumnBuilder::Float(b) => Arc::new(b.finish()) as ArrayRef,
            ColumnBuilder::Text(b) => Arc::new(b.finish()) as ArrayRef,
        }
    }
}

fn is_text_column(name: &str) -> bool {
    matches!(name, "unit" | "from" | "to")
}

pub fn build_schema(command: Command) -> Arc<Schema> {
    let fields: Vec<Field> = columns(command)
        .iter()
        .map(|name| {
            let data_type = if is_text_column(name) {
                DataType::Utf8
            } else {
                DataType::Float64
            };
            Field::new(*name, data_type, false)
        })
        .collect();
    Arc::new(Schema::new(fields))
}

pub fn write_parquet<W: Write + Send>(
    results: CalculationStream,
    command: Command,
    writer: W,
) -> Result<usize, OutputError> {
    let schema = build_schema(command);
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();

    let mut parquet_writer = ArrowWriter::try_new(writer, schema.clone(), Some(props))
        .map_err(|e| std::io::Error::other(format!("Parquet writer error: {}", e)))?;

    let mut builders: Vec<ColumnBuilder> = schema
        .fields()
        .iter()
        .map(|field| ColumnBuilder::new(field.data_type()))
        .collect();

    let mut total_count = 0;
    let mut batch_count = 0;

    for result_or_err in results {
        let result = result_or_err.map_err(OutputError::Record)?;
        for (builder, cell) in builders.iter_mut().zip(cells(&result).iter()) {
            builder.append(cell)?;
        }
        total_count += 1;
        batch_count += 1;

        if batch_count >= BATCH_SIZE {
            flush_batch(&mut parquet_writer, &schema, &mut builders)?;
            batch_count = 0;
        }
    }

    if batch_count > 0 {
        flush_batch(&mut parquet_writer, &schema, &mut builders)?;
    }

    parquet_writer
        .close()
        .map_err(|e| std::io::Error::other(format!("Failed to close parquet writer: {}", e)))?;

    Ok(total_count)
}

fn flush_batch<W: Write + Send>(
    writer: &mut ArrowWriter<W>,
    schema: &Arc<Schema>,
    builders: &mut [ColumnBuilder],
) -> std::io::Result<()> {
    let arrays: Vec<ArrayRef> = builders.iter_mut().map(ColumnBuilder::finish).collect();

    let batch = RecordBatch::try_new(schema.clone(), arrays)
        .map_err(|e| std::io::Error::other(format!("Failed to create batch: {}", e)))?;

    writer
        .write(&batch)
        .map_err(|e| std::io::Error::other(format!("Failed to write batch: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::CalculationResult;
    use arrow::array::{Array, Float64Array, StringArray};
    use bytes::Bytes;
    use geodd::{DistanceUnit, GeoDDCoordinate};
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    #[test]
    fn schema_types_follow_columns() {
        let schema = build_schema(Command::Convert);
        let types: Vec<&DataType> = schema.fields().iter().map(|f| f.data_type()).collect();
        assert_eq!(
            types,
            vec![
                &DataType::Float64,
                &DataType::Utf8,
                &DataType::Float64,
                &DataType::Utf8
            ]
        );
    }

    #[test]
    fn writes_distance_rows() {
        let from = GeoDDCoordinate::new(37.165611, -8.545786).unwrap();
        let to = GeoDDCoordinate::new(38.737545, -9.370047).unwrap();
        let results: CalculationStream = Box::new(
            vec![Ok(CalculationResult::Distance {
                from,
                to,
                distance: 189.143,
                unit: DistanceUnit::Kilometer,
            })]
            .into_iter(),
        );

        let mut buffer = Vec::new();
        let count = write_parquet(results, Command::Distance, &mut buffer).unwrap();
        assert_eq!(count, 1);

        let reader = ParquetRecordBatchReaderBuilder::try_new(Bytes::from(buffer))
            .unwrap()
            .build()
            .unwrap();
        let batches: Vec<RecordBatch> = reader.map(|b| b.unwrap()).collect();
        assert_eq!(batches.len(), 1);
        let batch = &batches[0];
        assert_eq!(batch.num_rows(), 1);

        let distance = batch
            .column_by_name("distance")
            .unwrap()
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert_eq!(distance.value(0), 189.143);
        let unit = batch
            .column_by_name("unit")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(unit.value(0), "km");
    }

    #[test]
    fn stream_errors_abort_the_file() {
        let results: CalculationStream =
            Box::new(vec![Err("pairs.txt:1: bad".to_string())].into_iter());
        let err = write_parquet(results, Command::Parse, Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "pairs.txt:1: bad");
    }
}

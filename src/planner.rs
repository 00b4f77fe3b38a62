//! Execution planning: turn parsed CLI data into the job main runs.

use crate::cli::error::PlannerError;
use crate::data::{self, Command, DataSource, Parameters, RecordStream};

pub struct ComputePlan {
    pub data_iter: RecordStream,
    pub command: Command,
    pub params: Parameters,
}

pub struct OutputPlan {
    pub flush_each_record: bool,
    /// Stream rows into a table instead of a single boxed record.
    pub tabular: bool,
}

pub fn build_job(
    source: DataSource,
    command: Command,
    params: Parameters,
) -> Result<(ComputePlan, OutputPlan), PlannerError> {
    let flush_each_record = source.uses_stdin();
    let tabular = source.is_file();

    let data_iter = data::expand_source(source, command)?;

    let compute_plan = ComputePlan {
        data_iter,
        command,
        params,
    };
    let output_plan = OutputPlan {
        flush_each_record,
        tabular,
    };
    Ok((compute_plan, output_plan))
}

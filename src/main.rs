//! Decimal-degree coordinate CLI - entry point and error reporting.

mod cli;
mod compute;
mod data;
mod output;
#[cfg(feature = "parquet")]
mod parquet;
mod planner;

use cli::error::CliError;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match cli::parse_cli(args) {
        Ok((source, command, params)) => {
            let start = if params.perf {
                Some(std::time::Instant::now())
            } else {
                None
            };

            let (compute_plan, output_plan) = match planner::build_job(source, command, params) {
                Ok(spec) => spec,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    std::process::exit(1);
                }
            };

            let planner::ComputePlan {
                data_iter,
                command,
                params,
            } = compute_plan;

            let results = compute::calculate_stream(data_iter, command, params.clone());

            let record_count =
                match output::dispatch_output(results, command, &params, &output_plan) {
                    Ok(count) => count,
                    Err(err) => {
                        eprintln!("Error: {}", err);
                        std::process::exit(1);
                    }
                };

            if let Some(start_time) = start {
                let elapsed = start_time.elapsed();
                eprintln!(
                    "Processed {} records in {:.3}s ({:.0} records/sec)",
                    record_count,
                    elapsed.as_secs_f64(),
                    record_count as f64 / elapsed.as_secs_f64()
                );
            }
        }
        Err(CliError::Exit(message)) => {
            println!("{}", message);
        }
        Err(CliError::Message(message)) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    }
}

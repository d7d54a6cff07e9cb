use anyhow::Result;
use tracing::info;

use labuan_cli::output::{default_output_path, write_report};
use labuan_cli::pipeline::transform_file;
use labuan_cli::summary::layout_table;
use labuan_cli::types::RunResult;
use labuan_model::{PipelineOptions, YearDigits};

use crate::cli::{LayoutArg, LayoutArgs, TransformArgs};

pub fn run_transform(args: &TransformArgs) -> Result<RunResult> {
    let options = pipeline_options(&args.layout);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    info!(?options, output = %output.display(), "starting transform");

    let result = transform_file(&args.input, &output, &options)?;
    if let Some(path) = &args.report {
        write_report(&result, path)?;
    }
    Ok(result)
}

pub fn run_columns(args: &LayoutArgs) -> Result<()> {
    println!("{}", layout_table(&pipeline_options(args)));
    Ok(())
}

/// `--layout` picks the base, then the individual flags switch parts off.
fn pipeline_options(args: &LayoutArgs) -> PipelineOptions {
    let base = match args.layout {
        LayoutArg::Basic => PipelineOptions::basic(),
        LayoutArg::Full => PipelineOptions::default(),
    };
    let mut options = base;
    if args.no_part_c {
        options = options.with_part_c(false);
    }
    if args.no_periods {
        options = options.with_periods(false);
    }
    if args.two_digit_year {
        options = options.with_year_digits(YearDigits::Two);
    }
    options
}

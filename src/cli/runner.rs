use std::fs;

use tracing::info;

use terramap::api::process_raster_to_path;
use terramap::core::params::PipelineParams;

use super::args::CliArgs;
use super::errors::AppError;

fn load_params(args: &CliArgs) -> Result<PipelineParams, AppError> {
    if let Some(path) = &args.params {
        let contents = fs::read_to_string(path).map_err(|source| AppError::ParamsRead {
            path: path.clone(),
            source,
        })?;
        let params: PipelineParams =
            serde_json::from_str(&contents).map_err(|source| AppError::ParamsParse {
                path: path.clone(),
                source,
            })?;
        Ok(params)
    } else {
        Ok(PipelineParams {
            record_budget: args.budget,
            seed: args.seed,
            preview_format: args.format,
        })
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = load_params(&args)?;
    if params.record_budget == 0 {
        return Err(AppError::ZeroBudget {
            budget: params.record_budget,
        }
        .into());
    }

    let report = process_raster_to_path(
        &args.input,
        &args.output,
        &args.land_table,
        &args.water_table,
        &params,
    )?;

    info!(
        "Successfully processed: {:?} -> {:?} (scale_factor={}, grid={}x{})",
        args.input, args.output, report.scale_factor, report.grid_width, report.grid_height
    );
    info!(
        "Rows written: {} land ({:?}), {} water ({:?})",
        report.land_rows, args.land_table, report.water_rows, args.water_table
    );

    Ok(())
}

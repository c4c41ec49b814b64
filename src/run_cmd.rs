use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use kairos_io::read_record;
use kairos_pipeline::{CancelToken, Pipeline, write_model_outputs};

use crate::cli::RunArgs;
use crate::config::KairosConfig;
use crate::convert;

/// Run the full pipeline and write the outputs of every model.
pub fn run(args: RunArgs) -> Result<()> {
    let mut config = KairosConfig::load(&args.config)?;
    if let Some(input) = args.input {
        config.io.input = Some(input);
    }
    if let Some(output) = args.output {
        config.io.output_dir = output;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.sequential {
        config.run.parallel = false;
    }

    let input = input_path(&config)?;
    let pipeline_cfg = convert::build_pipeline_config(&config)?;
    let engine = convert::build_calibration_engine(&config.calibration)?;
    let reporting = *pipeline_cfg.verification();

    let record = read_record(&input)
        .with_context(|| format!("failed to read record: {}", input.display()))?;

    info!(engine = engine.name(), seed = config.seed, "starting run");
    let pipeline = Pipeline::new(pipeline_cfg, engine)?;
    let results = pipeline.run(&record, &CancelToken::new())?;

    let dir = &config.io.output_dir;
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    for result in &results {
        write_model_outputs(result, record.dates(), &reporting, dir)
            .with_context(|| format!("failed to write outputs for model {}", result.model_id))?;
        let s = &result.summary;
        info!(
            model = %result.model_id,
            calibrated = s.calibrated,
            skipped = s.skipped,
            failed = s.failed,
            "model finished"
        );
    }
    info!(n_models = results.len(), dir = %dir.display(), "run complete");
    Ok(())
}

/// Resolves the input record path, failing with a hint when unset.
pub fn input_path(config: &KairosConfig) -> Result<PathBuf> {
    config
        .io
        .input
        .clone()
        .ok_or_else(|| anyhow::anyhow!("no input path: set [io].input in config or use --input"))
}

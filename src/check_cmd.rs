use anyhow::{Context, Result};

use kairos_io::read_record;

use crate::cli::CheckArgs;
use crate::config::KairosConfig;
use crate::convert;
use crate::run_cmd::input_path;

/// Validate the configuration and input record, then print a summary.
pub fn run(args: CheckArgs) -> Result<()> {
    let mut config = KairosConfig::load(&args.config)?;
    if let Some(input) = args.input {
        config.io.input = Some(input);
    }

    let pipeline_cfg = convert::build_pipeline_config(&config)?;
    let engine = convert::build_calibration_engine(&config.calibration)?;
    let input = input_path(&config)?;
    let record = read_record(&input)
        .with_context(|| format!("failed to read record: {}", input.display()))?;

    for id in pipeline_cfg.models() {
        if record.model(id).is_none() {
            anyhow::bail!("model {id:?} not found in {}", input.display());
        }
    }

    let (first, last) = record.span();
    println!("record:       {}", input.display());
    println!("days:         {}", record.len());
    println!("span:         {} .. {}", first.yyyymmdd(), last.yyyymmdd());
    let ids: Vec<&str> = record.simulated().iter().map(|s| s.id()).collect();
    println!("models:       {}", ids.join(", "));
    println!("engine:       {}", engine.name());
    println!("leads:        {}", pipeline_cfg.spans().len());
    println!("members:      {}", pipeline_cfg.ensemble_size());
    println!(
        "calibration:  {}..{} ({:?})",
        pipeline_cfg.calibration().start(),
        pipeline_cfg.calibration().end(),
        pipeline_cfg.calibration().upper()
    );
    println!(
        "verification: {}..{} ({:?})",
        pipeline_cfg.verification().start(),
        pipeline_cfg.verification().end(),
        pipeline_cfg.verification().upper()
    );
    Ok(())
}

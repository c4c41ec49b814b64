//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use kairos_calendar::{UpperBound, YearRange};
use kairos_calibrate::{CalibrationEngine, EngineKind, MetaGaussianConfig, build_engine};
use kairos_events::LeadSpans;
use kairos_pipeline::PipelineConfig;
use kairos_window::WindowConfig;

/// Parses a calibration engine name into the corresponding enum variant.
pub fn parse_engine(s: &str) -> Result<EngineKind> {
    match s.to_lowercase().as_str() {
        "linear" | "linear-dressing" => Ok(EngineKind::LinearDressing),
        "meta-gaussian" | "meta_gaussian" => Ok(EngineKind::MetaGaussian),
        other => bail!("unknown calibration engine: {other:?}"),
    }
}

/// Parses an upper-bound rule name into the corresponding enum variant.
pub fn parse_upper_bound(s: &str) -> Result<UpperBound> {
    match s.to_lowercase().as_str() {
        "inclusive" => Ok(UpperBound::Inclusive),
        "exclusive" => Ok(UpperBound::Exclusive),
        other => bail!("unknown year-range upper bound: {other:?}"),
    }
}

/// Converts the `[leads]` section into validated spans.
///
/// At most one of `spans` or `n_leads` may be set; with neither, every
/// forecast day becomes its own lead.
pub fn build_lead_spans(leads: &LeadsToml, forecast_len: usize) -> Result<LeadSpans> {
    let spans = match (&leads.spans, leads.n_leads) {
        (Some(pairs), None) => {
            let pairs: Vec<(usize, usize)> = pairs.iter().map(|p| (p[0], p[1])).collect();
            LeadSpans::new(&pairs)
        }
        (None, Some(n)) => LeadSpans::single_day(n),
        (None, None) => LeadSpans::single_day(forecast_len),
        (Some(_), Some(_)) => bail!("leads must have at most one of spans or n_leads, got both"),
    };
    spans.context("invalid lead spans")
}

/// Converts the `[window]` section; validated with the pipeline config.
pub fn build_window_config(window: &WindowToml) -> WindowConfig {
    WindowConfig::new()
        .with_analysis_len(window.analysis_len)
        .with_forecast_len(window.forecast_len)
        .with_buffer_len(window.buffer_len)
}

/// Builds the eligible calibration year range.
pub fn build_calibration_range(cal: &CalibrationToml) -> Result<YearRange> {
    let upper = parse_upper_bound(&cal.upper)?;
    YearRange::new(cal.start_year, cal.end_year, upper).context("invalid calibration years")
}

/// Builds the verification (and reporting) year range.
pub fn build_verification_range(ver: &VerificationToml) -> Result<YearRange> {
    let upper = parse_upper_bound(&ver.upper)?;
    YearRange::new(ver.start_year, ver.end_year, upper).context("invalid verification years")
}

/// Builds and validates the pipeline configuration.
pub fn build_pipeline_config(config: &KairosConfig) -> Result<PipelineConfig> {
    let spans = build_lead_spans(&config.leads, config.window.forecast_len)?;
    let cfg = PipelineConfig::new(
        spans,
        build_calibration_range(&config.calibration)?,
        build_verification_range(&config.verification)?,
    )
    .with_window(build_window_config(&config.window))
    .with_ensemble_size(config.ensemble.size)
    .with_fit_years(config.calibration.fit_years)
    .with_models(config.run.models.clone())
    .with_seed(config.seed)
    .with_parallel(config.run.parallel);
    cfg.validate().context("invalid pipeline configuration")?;
    Ok(cfg)
}

/// Meta-Gaussian settings from the `[calibration]` section.
pub fn build_meta_gaussian_config(cal: &CalibrationToml) -> MetaGaussianConfig {
    MetaGaussianConfig::new()
        .with_wet_threshold(cal.wet_threshold)
        .with_min_wet_values(cal.min_wet_values)
}

/// Builds the configured calibration engine.
pub fn build_calibration_engine(cal: &CalibrationToml) -> Result<Box<dyn CalibrationEngine>> {
    let kind = parse_engine(&cal.engine)?;
    build_engine(kind, build_meta_gaussian_config(cal)).context("invalid calibration engine")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(extra: &str) -> KairosConfig {
        let text = format!(
            "[calibration]\nstart_year = 1981\nend_year = 2001\n{extra}\n\
             [verification]\nstart_year = 2001\nend_year = 2010\n"
        );
        toml::from_str(&text).unwrap()
    }

    #[test]
    fn engine_names() {
        assert_eq!(parse_engine("linear").unwrap(), EngineKind::LinearDressing);
        assert_eq!(parse_engine("Meta-Gaussian").unwrap(), EngineKind::MetaGaussian);
        assert!(parse_engine("qmap").is_err());
    }

    #[test]
    fn upper_bound_names() {
        assert_eq!(parse_upper_bound("EXCLUSIVE").unwrap(), UpperBound::Exclusive);
        assert_eq!(parse_upper_bound("inclusive").unwrap(), UpperBound::Inclusive);
        assert!(parse_upper_bound("open").is_err());
    }

    #[test]
    fn leads_default_to_forecast_days() {
        let spans = build_lead_spans(&LeadsToml::default(), 7).unwrap();
        assert_eq!(spans.len(), 7);
        assert_eq!(spans.last().end(), 7);
    }

    #[test]
    fn leads_from_n_leads_and_spans() {
        let n = LeadsToml {
            spans: None,
            n_leads: Some(3),
        };
        assert_eq!(build_lead_spans(&n, 7).unwrap().len(), 3);

        let s = LeadsToml {
            spans: Some(vec![[1, 1], [2, 5]]),
            n_leads: None,
        };
        let spans = build_lead_spans(&s, 7).unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans.last().width(), 3);
    }

    #[test]
    fn leads_reject_both_and_invalid() {
        let both = LeadsToml {
            spans: Some(vec![[1, 1]]),
            n_leads: Some(1),
        };
        assert!(build_lead_spans(&both, 7).is_err());

        let bad = LeadsToml {
            spans: Some(vec![[3, 2]]),
            n_leads: None,
        };
        assert!(build_lead_spans(&bad, 7).is_err());
    }

    #[test]
    fn pipeline_config_from_toml() {
        let cfg = build_pipeline_config(&config("fit_years = 15")).unwrap();
        assert_eq!(cfg.fit_years(), 15);
        assert_eq!(cfg.ensemble_size(), 50);
        assert_eq!(cfg.spans().len(), 7);
        assert_eq!(cfg.calibration().upper(), UpperBound::Exclusive);
        assert_eq!(cfg.verification().upper(), UpperBound::Inclusive);
        assert!(cfg.parallel());
    }

    #[test]
    fn pipeline_config_rejects_zero_members() {
        let mut cfg = config("");
        cfg.ensemble.size = 0;
        assert!(build_pipeline_config(&cfg).is_err());
    }

    #[test]
    fn engine_from_toml() {
        let engine = build_calibration_engine(&config("engine = \"meta-gaussian\"").calibration)
            .unwrap();
        assert_eq!(engine.name(), "meta-gaussian");

        let bad = config("engine = \"meta-gaussian\"\nwet_threshold = -1.0");
        assert!(build_calibration_engine(&bad.calibration).is_err());
    }
}

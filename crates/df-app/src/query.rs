//! Queries over stored run samples.

use crate::error::{AppError, AppResult};
use df_results::SampleRecord;

/// Extract a `(time, value)` series for one recorded variable.
pub fn extract_series(samples: &[SampleRecord], variable: &str) -> AppResult<Vec<(f64, f64)>> {
    let pick: fn(&SampleRecord) -> f64 = match variable {
        "height" => |s| s.height_m,
        "velocity" => |s| s.velocity_m_s,
        "friction_factor" => |s| s.friction_factor,
        "reynolds" => |s| s.reynolds,
        other => {
            return Err(AppError::InvalidInput(format!(
                "unknown variable '{other}' (expected height, velocity, friction_factor, or reynolds)"
            )));
        }
    };
    Ok(samples.iter().map(|s| (s.time_s, pick(s))).collect())
}

/// Brief description of one stored run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub sample_count: usize,
    pub time_range: (f64, f64),
    pub final_height_m: Option<f64>,
}

pub fn run_summary(samples: &[SampleRecord]) -> RunSummary {
    let time_range = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (first.time_s, last.time_s),
        _ => (0.0, 0.0),
    };
    RunSummary {
        sample_count: samples.len(),
        time_range,
        final_height_m: samples.last().map(|s| s.height_m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time_s: f64, height_m: f64) -> SampleRecord {
        SampleRecord {
            time_s,
            height_m,
            velocity_m_s: 0.8,
            friction_factor: 0.03,
            reynolds: 6000.0,
        }
    }

    #[test]
    fn extracts_height_series() {
        let samples = vec![sample(0.01, 0.0995), sample(0.02, 0.0990)];
        let series = extract_series(&samples, "height").unwrap();
        assert_eq!(series, vec![(0.01, 0.0995), (0.02, 0.0990)]);
    }

    #[test]
    fn unknown_variable_is_rejected() {
        let err = extract_series(&[], "pressure").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn summary_of_empty_run() {
        let summary = run_summary(&[]);
        assert_eq!(summary.sample_count, 0);
        assert!(summary.final_height_m.is_none());
    }
}

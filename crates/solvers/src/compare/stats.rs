use super::Error;

/// Value substituted for zero or non-finite errors on a log-scale plot.
pub const LOG_SCALE_FLOOR: f64 = 1e-16;

/// Summary statistics of an error sequence.
///
/// Non-finite errors are not filtered: a single NaN makes `max` and `average`
/// NaN, so contamination stays visible to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorSummary {
    /// Largest error.
    pub max: f64,

    /// Error at the last grid point.
    pub final_error: f64,

    /// Mean error over all grid points.
    pub average: f64,
}

/// Computes the point-wise absolute error `|y[i] - y_ref[i]|`.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if the sequences differ in length.
pub fn compute_errors(y: &[f64], y_ref: &[f64]) -> Result<Vec<f64>, Error> {
    if y.len() != y_ref.len() {
        return Err(Error::LengthMismatch {
            expected: y_ref.len(),
            actual: y.len(),
        });
    }
    Ok(abs_diff(y, y_ref))
}

/// Summarizes a raw error sequence.
///
/// Pass the sequence from [`compute_errors`], never the output of
/// [`log_scale_floor`]: substituted floors would bias the statistics.
///
/// # Errors
///
/// Returns [`Error::EmptyErrors`] if `errors` is empty.
pub fn summarize_errors(errors: &[f64]) -> Result<ErrorSummary, Error> {
    summary_of(errors).ok_or(Error::EmptyErrors)
}

/// Prepares errors for a log-scale axis by replacing zero and non-finite
/// values with `floor`.
///
/// The result is for display only.
#[must_use]
pub fn log_scale_floor(errors: &[f64], floor: f64) -> Vec<f64> {
    errors
        .iter()
        .map(|&e| if e.is_finite() && e != 0.0 { e } else { floor })
        .collect()
}

/// Point-wise absolute difference of equal-length sequences.
pub(super) fn abs_diff(y: &[f64], y_ref: &[f64]) -> Vec<f64> {
    debug_assert_eq!(y.len(), y_ref.len());
    y.iter().zip(y_ref).map(|(a, b)| (a - b).abs()).collect()
}

pub(super) fn summary_of(errors: &[f64]) -> Option<ErrorSummary> {
    let &final_error = errors.last()?;

    // f64::max drops NaN; keep it instead.
    let max = errors.iter().copied().fold(f64::NEG_INFINITY, |acc, e| {
        if acc.is_nan() || e.is_nan() {
            f64::NAN
        } else {
            acc.max(e)
        }
    });

    #[allow(clippy::cast_precision_loss)]
    let average = errors.iter().sum::<f64>() / errors.len() as f64;

    Some(ErrorSummary {
        max,
        final_error,
        average,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn absolute_point_wise_errors() {
        let errors = compute_errors(&[1.0, 2.5, -1.0], &[1.5, 2.0, 1.0]).unwrap();
        assert_eq!(errors, vec![0.5, 0.5, 2.0]);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert_eq!(
            compute_errors(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn summary_statistics() {
        let summary = summarize_errors(&[0.0, 0.3, 0.1, 0.2]).unwrap();
        assert_relative_eq!(summary.max, 0.3);
        assert_relative_eq!(summary.final_error, 0.2);
        assert_relative_eq!(summary.average, 0.15);
    }

    #[test]
    fn zeros_count_toward_the_average() {
        let summary = summarize_errors(&[0.0, 0.0, 0.0, 0.4]).unwrap();
        assert_relative_eq!(summary.average, 0.1);
    }

    #[test]
    fn nan_surfaces_in_summary() {
        let summary = summarize_errors(&[0.1, f64::NAN, 0.2]).unwrap();
        assert!(summary.max.is_nan());
        assert!(summary.average.is_nan());
        assert_relative_eq!(summary.final_error, 0.2);
    }

    #[test]
    fn infinity_surfaces_in_summary() {
        let summary = summarize_errors(&[0.1, f64::INFINITY]).unwrap();
        assert_eq!(summary.max, f64::INFINITY);
        assert_eq!(summary.average, f64::INFINITY);
    }

    #[test]
    fn empty_errors_cannot_be_summarized() {
        assert_eq!(summarize_errors(&[]), Err(Error::EmptyErrors));
    }

    #[test]
    fn single_point_summary() {
        let summary = summarize_errors(&[0.0]).unwrap();
        assert_eq!(
            summary,
            ErrorSummary {
                max: 0.0,
                final_error: 0.0,
                average: 0.0
            }
        );
    }

    #[test]
    fn log_floor_replaces_zero_and_non_finite() {
        let errors = [0.0, 1e-3, f64::NAN, f64::INFINITY];
        assert_eq!(
            log_scale_floor(&errors, LOG_SCALE_FLOOR),
            vec![LOG_SCALE_FLOOR, 1e-3, LOG_SCALE_FLOOR, LOG_SCALE_FLOOR]
        );
    }
}

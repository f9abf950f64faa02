//! Descriptive statistics for numeric data.

use congen_core::{CongenError, Result};

/// Arithmetic mean.
///
/// # Errors
///
/// Returns an error if `data` is empty.
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(CongenError::InvalidInput(
            "mean: data must not be empty".into(),
        ));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Variance with given degrees-of-freedom correction.
///
/// - `ddof = 0` → population variance
/// - `ddof = 1` → sample variance (Bessel's correction)
pub fn variance(data: &[f64], ddof: usize) -> Result<f64> {
    let n = data.len();
    if n <= ddof {
        return Err(CongenError::InvalidInput(format!(
            "variance: need more than {} observations (got {})",
            ddof, n,
        )));
    }
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|&x| (x - m).powi(2)).sum();
    Ok(ss / (n - ddof) as f64)
}

/// Standard deviation: sample (divisor `n - 1`) when `sample` is true,
/// population (divisor `n`) otherwise.
///
/// # Errors
///
/// Returns an error if `data` is empty, or has a single value in sample mode.
pub fn stdev(data: &[f64], sample: bool) -> Result<f64> {
    let ddof = usize::from(sample);
    Ok(variance(data, ddof)?.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert!((mean(&[2.0, 4.0, 6.0]).unwrap() - 4.0).abs() < TOL);
    }

    #[test]
    fn mean_empty() {
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn stdev_sample_and_population() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert!((stdev(&data, true).unwrap() - (5.0_f64 / 3.0).sqrt()).abs() < TOL);
        assert!((stdev(&data, false).unwrap() - (5.0_f64 / 4.0).sqrt()).abs() < TOL);
    }

    #[test]
    fn stdev_does_not_modify_input() {
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let copy = data.clone();
        assert!((stdev(&data, false).unwrap() - 2.0).abs() < TOL);
        assert_eq!(data, copy);
    }

    #[test]
    fn stdev_too_few() {
        assert!(stdev(&[1.0], true).is_err());
        assert!(stdev(&[], false).is_err());
        assert_eq!(stdev(&[3.0], false).unwrap(), 0.0);
    }

    #[test]
    fn variance_sample() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance(&data, 0).unwrap() - 4.0).abs() < TOL);
        assert!((variance(&data, 1).unwrap() - 32.0 / 7.0).abs() < TOL);
    }
}

//! Exact binomial probabilities.

use congen_core::{CongenError, Result};

use num_traits::One;

use crate::combinatorics::binomial;
use crate::decimal::{self, BigDecimal};

/// Binomial probability mass `P(X = k) = C(n, k) · p^k · (1 - p)^(n - k)`.
///
/// `p` enters through its shortest decimal representation and `1 - p` is
/// formed in decimal, so the result is exact: there is no underflow for large
/// `n` or extreme `p`, and the masses over `k = 0..=n` sum to exactly one.
///
/// # Errors
///
/// Returns an error if `k > n` or `p` is not in `[0, 1]`.
pub fn binom(n: u64, k: u64, p: f64) -> Result<BigDecimal> {
    if k > n {
        return Err(CongenError::InvalidInput(format!(
            "binom: k ({}) must be <= n ({})",
            k, n
        )));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(CongenError::InvalidInput(
            "binom: p must be in [0, 1]".into(),
        ));
    }

    let n_choose_k = decimal::from_integer(binomial(n, k));
    let p = decimal::from_f64(p)?;
    let q = BigDecimal::one() - &p;

    Ok(decimal::powu(&p, k)? * decimal::powu(&q, n - k)? * n_choose_k)
}

/// [`binom`] with a fair success probability of 0.5.
pub fn binom_default(n: u64, k: u64) -> Result<BigDecimal> {
    binom(n, k, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{powu, round, to_f64, Precision};
    use num_traits::Zero;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn fair_coin_ten_flips() {
        // C(10,5) / 2^10 = 252 / 1024
        assert_eq!(binom(10, 5, 0.5).unwrap(), dec("0.24609375"));
        assert_eq!(binom_default(10, 5).unwrap(), dec("0.24609375"));
    }

    #[test]
    fn known_biased_value() {
        // C(5,2) · 0.3^2 · 0.7^3 = 10 · 0.09 · 0.343
        assert_eq!(binom(5, 2, 0.3).unwrap(), dec("0.3087"));
    }

    #[test]
    fn both_branches_agree() {
        // k small takes the n-k > k branch, k large the other
        assert_eq!(binom(20, 3, 0.5).unwrap(), binom(20, 17, 0.5).unwrap());
        assert_eq!(binom(7, 0, 0.25).unwrap(), powu(&dec("0.75"), 7).unwrap());
        assert_eq!(binom(7, 7, 0.25).unwrap(), powu(&dec("0.25"), 7).unwrap());
    }

    #[test]
    fn degenerate_probabilities() {
        assert_eq!(binom(4, 0, 0.0).unwrap(), BigDecimal::one());
        assert!(binom(4, 1, 0.0).unwrap().is_zero());
        assert_eq!(binom(4, 4, 1.0).unwrap(), BigDecimal::one());
        assert!(binom(4, 3, 1.0).unwrap().is_zero());
    }

    #[test]
    fn masses_sum_to_one() {
        let total: BigDecimal = (0..=12).map(|k| binom(12, k, 0.37).unwrap()).sum();
        assert_eq!(total, BigDecimal::one());
    }

    #[test]
    fn large_n_does_not_underflow() {
        // 0.5^2000 is far below f64::MIN_POSITIVE
        let tail = binom(2000, 0, 0.5).unwrap();
        assert!(!tail.is_zero());
        assert_eq!(to_f64(&tail), 0.0);
        let centre = binom(2000, 1000, 0.5).unwrap();
        let rounded = round(&centre, Precision::new(6).unwrap());
        assert_eq!(rounded, dec("0.0178390"));
    }

    #[test]
    fn invalid_arguments() {
        assert!(binom(3, 4, 0.5).is_err());
        assert!(binom(3, 1, -0.1).is_err());
        assert!(binom(3, 1, 1.5).is_err());
        assert!(binom(3, 1, f64::NAN).is_err());
    }
}

//! Hypothesis tests on 2×2 contingency tables.
//!
//! A table compares how often a "test" outcome occurs in a reference sample
//! versus a comparison sample:
//!
//! ```text
//!               Reference      Comparison
//! Test          ref_test       comp_test
//! Not test      not_ref_test   not_comp_test
//! Total         ref_total      comp_total
//! ```
//!
//! [`fisher`] gives the exact hypergeometric probability of the observed
//! configuration, [`fisher_two_tailed`] sums it over all configurations at
//! least as extreme, and [`chi2`] gives Pearson's chi-squared p-value.

use core::fmt;

use congen_core::{CongenError, Result};
use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::combinatorics::{binomial, factorial};
use crate::decimal::{self, to_bigdec, BigDecimal, Precision};
use crate::distribution::chi_cum_prob;

/// A validated 2×2 contingency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContingencyTable {
    ref_test: u64,
    comp_test: u64,
    ref_total: u64,
    comp_total: u64,
}

impl ContingencyTable {
    /// Build a table from test counts and sample totals.
    ///
    /// # Errors
    ///
    /// Returns an error if a test count exceeds its total.
    pub fn new(ref_test: u64, comp_test: u64, ref_total: u64, comp_total: u64) -> Result<Self> {
        if ref_test > ref_total {
            return Err(CongenError::InvalidInput(format!(
                "ContingencyTable: ref_test ({}) exceeds ref_total ({})",
                ref_test, ref_total
            )));
        }
        if comp_test > comp_total {
            return Err(CongenError::InvalidInput(format!(
                "ContingencyTable: comp_test ({}) exceeds comp_total ({})",
                comp_test, comp_total
            )));
        }
        Ok(Self {
            ref_test,
            comp_test,
            ref_total,
            comp_total,
        })
    }

    pub fn ref_test(&self) -> u64 {
        self.ref_test
    }

    pub fn comp_test(&self) -> u64 {
        self.comp_test
    }

    pub fn ref_total(&self) -> u64 {
        self.ref_total
    }

    pub fn comp_total(&self) -> u64 {
        self.comp_total
    }

    pub fn not_ref_test(&self) -> u64 {
        self.ref_total - self.ref_test
    }

    pub fn not_comp_test(&self) -> u64 {
        self.comp_total - self.comp_test
    }

    /// Test outcomes across both samples.
    pub fn test_total(&self) -> u64 {
        self.ref_test + self.comp_test
    }

    /// Grand total N.
    pub fn grand_total(&self) -> u64 {
        self.ref_total + self.comp_total
    }

    /// The same table with the reference and comparison samples exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            ref_test: self.comp_test,
            comp_test: self.ref_test,
            ref_total: self.comp_total,
            comp_total: self.ref_total,
        }
    }

    /// Exact probability of this configuration; see [`fisher`].
    pub fn fisher(&self, precision: Precision) -> Result<BigDecimal> {
        let (numer, denom) = self.hypergeometric_parts();
        let p = decimal::from_ratio(numer, denom, precision)?;
        trace!("fisher {}: p = {}", self, p);
        Ok(p)
    }

    /// Two-tailed Fisher p-value; see [`fisher_two_tailed`].
    pub fn fisher_two_tailed(&self, precision: Precision) -> Result<BigDecimal> {
        let (observed, denom) = self.hypergeometric_parts();

        // Every table with these margins shares the denominator, so the
        // configurations can be compared and summed on their numerators.
        let extreme: BigUint = self
            .margin_numerators()
            .into_iter()
            .map(|(_, numer)| numer)
            .filter(|numer| *numer <= observed)
            .sum();

        let p = decimal::from_ratio(extreme, denom, precision)?;
        trace!("fisher two-tailed {}: p = {}", self, p);
        Ok(p)
    }

    /// Pearson's chi-squared statistic at `precision`.
    ///
    /// # Errors
    ///
    /// Returns [`CongenError::DivisionByZero`] if any marginal total is zero.
    pub fn chi2_statistic(&self, precision: Precision) -> Result<BigDecimal> {
        let vals = to_bigdec(
            &[self.ref_test, self.comp_test, self.ref_total, self.comp_total],
            precision,
        )?;
        let (ref_test, comp_test) = (&vals[0], &vals[1]);
        let not_ref_test = &vals[2] - ref_test;
        let not_comp_test = &vals[3] - comp_test;

        let cross = ref_test * &not_comp_test - comp_test * &not_ref_test;
        let grand = ref_test + &not_comp_test + comp_test + &not_ref_test;
        let numer = &cross * &cross * grand;
        let denom = (ref_test + comp_test)
            * (&not_ref_test + &not_comp_test)
            * (comp_test + &not_comp_test)
            * (ref_test + &not_ref_test);

        if denom.is_zero() {
            debug!("chi2: table {} has an empty marginal", self);
            return Err(CongenError::DivisionByZero(format!(
                "chi2: table {} has an empty marginal",
                self
            )));
        }
        decimal::div(&numer, &denom, precision)
    }

    /// Chi-squared p-value; see [`chi2`].
    pub fn chi2(&self, precision: Precision) -> Result<BigDecimal> {
        let statistic = self.chi2_statistic(precision)?;
        let p = 1.0 - chi_cum_prob(decimal::to_f64(&statistic));
        trace!("chi2 {}: statistic = {}, p = {}", self, statistic, p);
        Ok(decimal::round(&decimal::from_f64(p)?, precision))
    }

    /// Numerator and denominator of the hypergeometric probability.
    ///
    /// The textbook form is
    ///
    /// ```text
    /// (a+c)! (b+d)! R! C! / (a! c! b! d! N!)
    /// ```
    ///
    /// with a, c the test counts, b, d the non-test counts and R, C the sample
    /// totals. Cancelling `R!/a!`, `C!/c!` and `N!/(a+c)!` into falling
    /// factorials and `(b+d)!/(b! d!)` into a binomial coefficient leaves
    /// `factorial(R, a) · factorial(C, c) · C(b+d, b) / factorial(N, a+c)`.
    fn hypergeometric_parts(&self) -> (BigUint, BigUint) {
        let numer = factorial(self.ref_total, self.ref_test)
            * factorial(self.comp_total, self.comp_test)
            * binomial(self.not_ref_test() + self.not_comp_test(), self.not_ref_test());
        let denom = factorial(self.grand_total(), self.test_total());
        (numer, denom)
    }

    /// Hypergeometric numerators of every table sharing these margins, keyed
    /// by `ref_test` in ascending order.
    ///
    /// Only the first is built from factorials. With R, C the sample totals
    /// and t the test total, each next one follows from
    ///
    /// ```text
    /// numer(a + 1) = numer(a) · (R - a)(t - a) / ((a + 1)(C - t + a + 1))
    /// ```
    ///
    /// and the division is exact because both sides are integers.
    fn margin_numerators(&self) -> Vec<(u64, BigUint)> {
        let (r, c, t) = (self.ref_total, self.comp_total, self.test_total());
        let lo = t.saturating_sub(c);
        let hi = t.min(r);
        let first = Self {
            ref_test: lo,
            comp_test: t - lo,
            ..*self
        };

        let mut numer = first.hypergeometric_parts().0;
        let mut out = Vec::with_capacity((hi - lo + 1) as usize);
        for a in lo..hi {
            let next = &numer * BigUint::from(r - a) * BigUint::from(t - a)
                / (BigUint::from(a + 1) * BigUint::from(c + a + 1 - t));
            out.push((a, numer));
            numer = next;
        }
        out.push((hi, numer));
        out
    }
}

impl fmt::Display for ContingencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}/{} vs {}/{}]",
            self.ref_test, self.ref_total, self.comp_test, self.comp_total
        )
    }
}

// ── Fisher's exact test ────────────────────────────────────────────────────

/// Fisher's exact probability of exactly this 2×2 configuration.
///
/// This is the hypergeometric probability of the observed table given its
/// margins, not a tailed p-value; use [`fisher_two_tailed`] or sum over
/// configurations for significance testing. Factorial products are exact and
/// the final quotient carries `precision` significant digits.
///
/// # Errors
///
/// Returns an error if `ref_test > ref_total` or `comp_test > comp_total`.
pub fn fisher(
    ref_test: u64,
    comp_test: u64,
    ref_total: u64,
    comp_total: u64,
    precision: Precision,
) -> Result<BigDecimal> {
    ContingencyTable::new(ref_test, comp_test, ref_total, comp_total)?.fisher(precision)
}

/// Two-tailed Fisher's exact test.
///
/// Sums the probabilities of all tables with the same margins whose
/// probability does not exceed that of the observed table.
pub fn fisher_two_tailed(table: &ContingencyTable, precision: Precision) -> Result<BigDecimal> {
    table.fisher_two_tailed(precision)
}

// ── Chi-squared test ───────────────────────────────────────────────────────

/// Pearson's chi-squared test for a 2×2 table, as a one-degree-of-freedom
/// p-value `1 - chi_cum_prob(statistic)`.
///
/// Counts are converted with [`to_bigdec`] at `precision` before the cross
/// product difference is formed, and the returned p-value is rounded to the
/// same precision.
///
/// # Errors
///
/// Returns an error if a test count exceeds its total, and
/// [`CongenError::DivisionByZero`] if any marginal total is zero.
pub fn chi2(
    ref_test: u64,
    comp_test: u64,
    ref_total: u64,
    comp_total: u64,
    precision: Precision,
) -> Result<BigDecimal> {
    ContingencyTable::new(ref_test, comp_test, ref_total, comp_total)?.chi2(precision)
}

// ── Tests ──────────────────────────────────────────────────────────────────

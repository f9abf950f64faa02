//! Statistical methods for the congen toolkit.
//!
//! - **Decimal arithmetic** — [`BigDecimal`] helpers at a configurable [`Precision`]
//! - **Combinatorics** — exact falling factorials and binomial coefficients
//! - **Binomial probability** — exact [`binom`] masses
//! - **Contingency tests** — Fisher's exact and chi-squared on 2×2 tables
//! - **Distributions** — chi-squared density and cumulative probability
//! - **Descriptive statistics** — mean and standard deviation
//!
//! ```
//! use congen_stats::{chi2, decimal, fisher, Precision};
//!
//! let p = fisher(1, 4, 5, 5, Precision::default()).unwrap();
//! assert_eq!(p, decimal::parse("0.09920634920634921").unwrap());
//!
//! let p = chi2(5, 5, 10, 10, Precision::default()).unwrap();
//! assert_eq!(p, decimal::parse("1").unwrap());
//! ```

pub mod binomial;
pub mod combinatorics;
pub mod decimal;
pub mod descriptive;
pub mod distribution;
pub mod testing;

pub use binomial::{binom, binom_default};
pub use combinatorics::{factorial, full_factorial};
pub use decimal::{to_bigdec, BigDecimal, Precision, ToBigDecimal, DEFAULT_PRECISION, MAX_PRECISION};
pub use descriptive::{mean, stdev};
pub use distribution::{chi_cum_prob, chi_prob};
pub use testing::{chi2, fisher, fisher_two_tailed, ContingencyTable};

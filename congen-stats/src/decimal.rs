//! Decimal arithmetic at an explicit precision.
//!
//! Values are [`bigdecimal::BigDecimal`]: an unbounded integer mantissa with a
//! base-10 scale, exact under addition, subtraction and multiplication. The
//! helpers here add a validated [`Precision`], half-up rounding to it,
//! precision-bounded division, exact integer powers and `f64` conversions.
//! This keeps factorial-ratio probabilities meaningful at sample sizes where
//! `f64` factorials overflow or cancel to nothing.

use core::fmt;
use core::num::NonZeroU64;

pub use bigdecimal::BigDecimal;
use bigdecimal::RoundingMode;
use congen_core::{CongenError, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Default number of significant digits for decimal test statistics.
pub const DEFAULT_PRECISION: u64 = 16;

/// Largest precision [`Precision::new`] accepts.
pub const MAX_PRECISION: u64 = 100_000;

// ── Precision ──────────────────────────────────────────────────────────────

/// Number of significant decimal digits kept by rounding operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(NonZeroU64);

impl Precision {
    /// [`DEFAULT_PRECISION`] significant digits.
    pub const DEFAULT: Self = Self::from_const(DEFAULT_PRECISION);

    /// Digits needed for any `f64` to survive a decimal round trip.
    const F64_ROUNDTRIP: Self = Self::from_const(17);

    const fn from_const(digits: u64) -> Self {
        match NonZeroU64::new(digits) {
            Some(d) => Self(d),
            None => panic!("precision must be positive"),
        }
    }

    /// Create a precision of `digits` significant digits.
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` is zero or above [`MAX_PRECISION`].
    pub fn new(digits: u64) -> Result<Self> {
        if digits > MAX_PRECISION {
            return Err(CongenError::InvalidInput(format!(
                "Precision: {} digits exceeds the maximum of {}",
                digits, MAX_PRECISION
            )));
        }
        NonZeroU64::new(digits).map(Self).ok_or_else(|| {
            CongenError::InvalidInput("Precision: digits must be positive".into())
        })
    }

    /// Significant digits.
    pub fn digits(self) -> u64 {
        self.0.get()
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} digits", self.0)
    }
}

// ── Construction ───────────────────────────────────────────────────────────

/// Parse plain or scientific notation: `-12.5`, `3e-4`, `1.25E+3`.
///
/// # Errors
///
/// Returns [`CongenError::Parse`] for malformed input or an exponent too large
/// to represent as a scale.
pub fn parse(s: &str) -> Result<BigDecimal> {
    let bad = |reason: String| CongenError::Parse(format!("{:?}: {}", s, reason));

    // Keep `fraction digits - exponent` inside i64.
    if let Some(i) = s.find(['e', 'E']) {
        if let Ok(exp) = s[i + 1..].parse::<i64>() {
            if exp.unsigned_abs() > (i64::MAX / 2) as u64 {
                return Err(bad(format!("exponent {} out of range", exp)));
            }
        }
    }
    s.parse::<BigDecimal>().map_err(|e| bad(e.to_string()))
}

/// Convert an `f64` through its shortest round-trip decimal form, so `0.1`
/// becomes exactly `0.1` rather than its binary expansion.
///
/// # Errors
///
/// Returns an error for NaN or infinite input.
pub fn from_f64(x: f64) -> Result<BigDecimal> {
    if !x.is_finite() {
        return Err(CongenError::InvalidInput(format!(
            "from_f64: {} is not finite",
            x
        )));
    }
    parse(&format!("{:e}", x))
}

/// An unsigned integer as a decimal with scale 0.
pub fn from_integer(n: BigUint) -> BigDecimal {
    BigDecimal::new(BigInt::from(n), 0)
}

/// Exact quotient `numer / denom` rounded to `precision`.
///
/// # Errors
///
/// Returns an error if `denom` is zero.
pub fn from_ratio(numer: BigUint, denom: BigUint, precision: Precision) -> Result<BigDecimal> {
    div(&from_integer(numer), &from_integer(denom), precision)
}

// ── Rounding and arithmetic ────────────────────────────────────────────────

/// Round to `precision` significant digits, ties away from zero.
///
/// Values that already fit are returned unchanged, without padding zeros.
pub fn round(value: &BigDecimal, precision: Precision) -> BigDecimal {
    if value.digits() <= precision.digits() {
        return value.clone();
    }
    value.with_precision_round(precision.0, RoundingMode::HalfUp)
}

/// `numer / denom` rounded to `precision` significant digits.
///
/// # Errors
///
/// Returns [`CongenError::DivisionByZero`] if `denom` is zero.
pub fn div(numer: &BigDecimal, denom: &BigDecimal, precision: Precision) -> Result<BigDecimal> {
    if denom.is_zero() {
        return Err(CongenError::DivisionByZero(format!("{} / 0", numer)));
    }
    if numer.is_zero() {
        return Ok(BigDecimal::zero());
    }

    // Widen the dividend so the integer quotient carries at least one digit
    // beyond the requested precision; rounding the truncated quotient is then
    // the same as rounding the exact one.
    let shift = (precision.digits() + 1 + denom.digits()).saturating_sub(numer.digits());
    let (a, a_scale) = numer.as_bigint_and_exponent();
    let (b, b_scale) = denom.as_bigint_and_exponent();
    let scale = i64::try_from(shift)
        .ok()
        .and_then(|shift| a_scale.checked_sub(b_scale)?.checked_add(shift))
        .ok_or_else(|| {
            CongenError::InvalidInput(format!("div: scale overflow in {} / {}", numer, denom))
        })?;
    let quotient = a * pow10(shift)? / b;

    Ok(round(&BigDecimal::new(quotient, scale), precision))
}

/// Exact integer power.
///
/// # Errors
///
/// Returns an error if `exp` exceeds `u32::MAX` or the resulting scale does
/// not fit in an `i64`.
pub fn powu(base: &BigDecimal, exp: u64) -> Result<BigDecimal> {
    let too_large =
        || CongenError::InvalidInput(format!("powu: {}^{} is out of range", base, exp));
    let exp32 = u32::try_from(exp).map_err(|_| too_large())?;
    let (mantissa, scale) = base.as_bigint_and_exponent();
    let scale = scale.checked_mul(i64::from(exp32)).ok_or_else(too_large)?;
    Ok(BigDecimal::new(mantissa.pow(exp32), scale))
}

/// Nearest `f64`. Values outside the `f64` range become `±inf` or `0.0`.
pub fn to_f64(value: &BigDecimal) -> f64 {
    let short = round(value, Precision::F64_ROUNDTRIP);
    let (mantissa, scale) = short.as_bigint_and_exponent();
    format!("{}e{}", mantissa, -i128::from(scale))
        .parse()
        .unwrap_or(f64::NAN)
}

// ── Batch conversion ───────────────────────────────────────────────────────

/// Values convertible to [`BigDecimal`].
pub trait ToBigDecimal {
    fn to_bigdecimal(&self) -> Result<BigDecimal>;
}

macro_rules! impl_to_bigdecimal_int {
    ($($t:ty),*) => {
        $(impl ToBigDecimal for $t {
            fn to_bigdecimal(&self) -> Result<BigDecimal> {
                Ok(BigDecimal::new(BigInt::from(*self), 0))
            }
        })*
    };
}

impl_to_bigdecimal_int!(u32, u64, usize, i32, i64);

impl ToBigDecimal for f64 {
    fn to_bigdecimal(&self) -> Result<BigDecimal> {
        from_f64(*self)
    }
}

impl ToBigDecimal for BigDecimal {
    fn to_bigdecimal(&self) -> Result<BigDecimal> {
        Ok(self.clone())
    }
}

/// Convert `values` to decimals, each rounded to `precision` significant digits.
///
/// All values feeding one statistic should share a precision; this makes that
/// the single call site.
///
/// # Errors
///
/// Returns an error if any value cannot be represented (NaN or infinite float).
pub fn to_bigdec<T: ToBigDecimal>(values: &[T], precision: Precision) -> Result<Vec<BigDecimal>> {
    values
        .iter()
        .map(|v| Ok(round(&v.to_bigdecimal()?, precision)))
        .collect()
}

fn pow10(exp: u64) -> Result<BigInt> {
    let exp = usize::try_from(exp)
        .map_err(|_| CongenError::InvalidInput(format!("pow10: exponent {} too large", exp)))?;
    Ok(num_traits::pow(BigInt::from(10u8), exp))
}

// ── Tests ──────────────────────────────────────────────────────────────────

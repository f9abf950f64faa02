//! Combinatorics utilities.
//!
//! Exact falling factorials and binomial coefficients over unbounded integers.

use num_bigint::BigUint;
use num_traits::One;

/// Falling factorial `n · (n-1) · … · (k+1)`, i.e. `n! / k!`.
///
/// Neither full factorial is materialized, which matters when only their ratio
/// is needed and `n` runs into the thousands. Returns 1 when `n <= k`.
pub fn factorial(n: u64, k: u64) -> BigUint {
    let mut total = BigUint::one();
    let mut n = n;
    while n > k {
        total *= n;
        n -= 1;
    }
    total
}

/// Full factorial `n!`.
pub fn full_factorial(n: u64) -> BigUint {
    factorial(n, 1)
}

/// Exact binomial coefficient C(n, k). Returns zero if `k > n`.
pub fn binomial(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::default();
    }
    // Cancel the larger of k! and (n-k)! against n! so the falling factorial
    // covers as few terms as possible.
    if n - k > k {
        factorial(n, n - k) / full_factorial(k)
    } else {
        factorial(n, k) / full_factorial(n - k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn factorial_small() {
        assert_eq!(full_factorial(0), big(1));
        assert_eq!(full_factorial(1), big(1));
        assert_eq!(full_factorial(5), big(120));
        assert_eq!(full_factorial(10), big(3_628_800));
        assert_eq!(full_factorial(20), big(2_432_902_008_176_640_000));
    }

    #[test]
    fn factorial_past_u64() {
        // 25! = 15511210043330985984000000
        let expected = BigUint::parse_bytes(b"15511210043330985984000000", 10).unwrap();
        assert_eq!(full_factorial(25), expected);
    }

    #[test]
    fn falling_factorial() {
        assert_eq!(factorial(5, 2), big(60)); // 5*4*3
        assert_eq!(factorial(10, 7), big(720)); // 10*9*8
        assert_eq!(factorial(5, 0), big(120));
    }

    #[test]
    fn falling_factorial_empty_range() {
        assert_eq!(factorial(5, 5), big(1));
        assert_eq!(factorial(3, 5), big(1));
        assert_eq!(factorial(0, 0), big(1));
    }

    #[test]
    fn binomial_known_values() {
        assert_eq!(binomial(5, 0), big(1));
        assert_eq!(binomial(5, 1), big(5));
        assert_eq!(binomial(5, 2), big(10));
        assert_eq!(binomial(5, 3), big(10));
        assert_eq!(binomial(5, 5), big(1));
        assert_eq!(binomial(10, 3), big(120));
        assert_eq!(binomial(20, 10), big(184_756));
    }

    #[test]
    fn binomial_large() {
        // C(100, 50) = 100891344545564193334812497256
        let expected = BigUint::parse_bytes(b"100891344545564193334812497256", 10).unwrap();
        assert_eq!(binomial(100, 50), expected);
        assert_eq!(binomial(100, 3), binomial(100, 97));
    }

    #[test]
    fn binomial_k_greater_than_n() {
        assert_eq!(binomial(3, 5), big(0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn falling_times_lower_is_full(n in 0u64..200, k in 0u64..200) {
            prop_assume!(n >= k);
            prop_assert_eq!(factorial(n, k) * full_factorial(k), full_factorial(n));
        }

        #[test]
        fn binomial_is_symmetric(n in 0u64..300, k in 0u64..300) {
            prop_assume!(k <= n);
            prop_assert_eq!(binomial(n, k), binomial(n, n - k));
        }

        #[test]
        fn pascal_rule(n in 1u64..150, k in 1u64..150) {
            prop_assume!(k <= n);
            prop_assert_eq!(binomial(n, k), binomial(n - 1, k - 1) + binomial(n - 1, k));
        }
    }
}

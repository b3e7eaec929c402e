//! Arbitrary-precision integer values.
//!
//! [`IntegerData`] is an immutable signed big integer shared by every
//! backend. Values are obtained from a [`Library`](crate::Library) through
//! one of three literal encodings:
//!
//! - `i64` machine integers
//! - big-endian two's-complement byte strings
//! - text: decimal, or hexadecimal with a `0x` prefix, optionally negative
//!
//! Equality and ordering compare values. Serialized form is the decimal
//! string.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_traits::{Num, One, Zero};
use rand::Rng;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CryptoError, Result};

/// Trial divisors and Miller-Rabin witnesses.
const SMALL_PRIMES: [u32; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

/// Candidates drawn before a prime search gives up, before scaling by bits.
const PRIME_ATTEMPTS_BASE: u64 = 4096;

/// An immutable arbitrary-precision signed integer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntegerData {
    value: BigInt,
}

impl IntegerData {
    pub(crate) fn from_bigint(value: BigInt) -> Self {
        Self { value }
    }

    pub(crate) fn from_i64(value: i64) -> Self {
        Self::from_bigint(BigInt::from(value))
    }

    /// Decode big-endian two's-complement bytes. Empty input is rejected.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(CryptoError::Format("integer bytes must not be empty".into()));
        }
        Ok(Self::from_bigint(BigInt::from_signed_bytes_be(bytes)))
    }

    /// Parse decimal or `0x`-prefixed hexadecimal text, with an optional
    /// leading `-`. Surrounding whitespace is ignored.
    pub(crate) fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let magnitude = match digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            Some(hex) => parse_magnitude(hex, 16)?,
            None => parse_magnitude(digits, 10)?,
        };
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(Self::from_bigint(BigInt::from_biguint(sign, magnitude)))
    }

    /// Big-endian two's-complement encoding, accepted back by
    /// `integer_from_bytes`.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.value.to_signed_bytes_be()
    }

    /// Number of significant bits in the magnitude. Zero has none.
    pub fn bit_count(&self) -> u64 {
        self.value.bits()
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.value.sign() == Sign::Minus
    }

    /// Truncating division. A zero divisor is a [`CryptoError::Range`].
    pub fn checked_div(&self, divisor: &IntegerData) -> Result<IntegerData> {
        if divisor.is_zero() {
            return Err(CryptoError::Range("division by zero".into()));
        }
        Ok(Self::from_bigint(&self.value / &divisor.value))
    }

    /// Remainder of truncating division; takes the sign of `self`.
    pub fn checked_rem(&self, divisor: &IntegerData) -> Result<IntegerData> {
        if divisor.is_zero() {
            return Err(CryptoError::Range("division by zero".into()));
        }
        Ok(Self::from_bigint(&self.value % &divisor.value))
    }

    /// `self^exponent mod modulus`, reduced into `[0, modulus)`.
    ///
    /// The modulus must be positive and the exponent non-negative.
    pub fn pow_mod(&self, exponent: &IntegerData, modulus: &IntegerData) -> Result<IntegerData> {
        if modulus.value.sign() != Sign::Plus {
            return Err(CryptoError::Range("modulus must be positive".into()));
        }
        if exponent.is_negative() {
            return Err(CryptoError::Range("exponent must not be negative".into()));
        }
        Ok(Self::from_bigint(
            self.value.modpow(&exponent.value, &modulus.value),
        ))
    }

    /// Multiplicative inverse modulo a positive `modulus`.
    pub fn mod_inverse(&self, modulus: &IntegerData) -> Result<IntegerData> {
        if modulus.value.sign() != Sign::Plus {
            return Err(CryptoError::Range("modulus must be positive".into()));
        }
        self.value
            .modinv(&modulus.value)
            .map(Self::from_bigint)
            .ok_or_else(|| CryptoError::Range(format!("{self} has no inverse mod {modulus}")))
    }

    /// Miller-Rabin test using the first `rounds` small primes as
    /// witnesses (clamped to 1..=20). Negative values are never prime.
    pub fn is_probable_prime(&self, rounds: usize) -> bool {
        !self.is_negative() && miller_rabin(self.value.magnitude(), rounds)
    }
}

impl fmt::Display for IntegerData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<'a, 'b> Add<&'b IntegerData> for &'a IntegerData {
    type Output = IntegerData;

    fn add(self, rhs: &'b IntegerData) -> IntegerData {
        IntegerData::from_bigint(&self.value + &rhs.value)
    }
}

impl<'a, 'b> Sub<&'b IntegerData> for &'a IntegerData {
    type Output = IntegerData;

    fn sub(self, rhs: &'b IntegerData) -> IntegerData {
        IntegerData::from_bigint(&self.value - &rhs.value)
    }
}

impl<'a, 'b> Mul<&'b IntegerData> for &'a IntegerData {
    type Output = IntegerData;

    fn mul(self, rhs: &'b IntegerData) -> IntegerData {
        IntegerData::from_bigint(&self.value * &rhs.value)
    }
}

impl Serialize for IntegerData {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for IntegerData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        IntegerData::parse(&text).map_err(de::Error::custom)
    }
}

// ── Random generation ─────────────────────────────────────────────────────────

/// A value with exactly `bit_count` significant bits, prime when asked.
pub(crate) fn random_with_bits<R: Rng + ?Sized>(
    rng: &mut R,
    bit_count: usize,
    want_prime: bool,
    rounds: usize,
) -> Result<IntegerData> {
    if bit_count == 0 {
        return Err(CryptoError::Range("bit count must be positive".into()));
    }
    if want_prime && bit_count < 2 {
        return Err(CryptoError::Range("no prime has fewer than 2 bits".into()));
    }

    let bits = bit_count as u64;
    let top = BigUint::one() << (bit_count - 1);
    let attempts = prime_attempt_budget(bits);
    for _ in 0..attempts {
        let mut candidate = rng.gen_biguint(bits) | &top;
        if !want_prime {
            return Ok(IntegerData::from_bigint(BigInt::from(candidate)));
        }
        if bits > 2 {
            candidate |= BigUint::one();
        }
        if miller_rabin(&candidate, rounds) {
            return Ok(IntegerData::from_bigint(BigInt::from(candidate)));
        }
    }
    Err(CryptoError::Range(format!(
        "no {bit_count}-bit prime found after {attempts} candidates"
    )))
}

/// A value drawn uniformly from `[min, max]`, prime when asked.
///
/// Prime requests reject non-prime draws; an interval with no prime in
/// it fails once the attempt budget runs out.
pub(crate) fn random_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    min: &IntegerData,
    max: &IntegerData,
    want_prime: bool,
    rounds: usize,
) -> Result<IntegerData> {
    if min > max {
        return Err(CryptoError::Range(format!("empty range [{min}, {max}]")));
    }
    let upper = &max.value + BigInt::one();
    if !want_prime {
        return Ok(IntegerData::from_bigint(
            rng.gen_bigint_range(&min.value, &upper),
        ));
    }

    let two = BigInt::from(2u32);
    if max.value < two {
        return Err(CryptoError::Range(format!("no prime in [{min}, {max}]")));
    }
    let lower = if min.value < two { two } else { min.value.clone() };
    let attempts = prime_attempt_budget(max.value.bits());
    for _ in 0..attempts {
        let candidate = rng.gen_bigint_range(&lower, &upper);
        if miller_rabin(candidate.magnitude(), rounds) {
            return Ok(IntegerData::from_bigint(candidate));
        }
    }
    Err(CryptoError::Range(format!(
        "no prime found in [{min}, {max}] after {attempts} candidates"
    )))
}

fn prime_attempt_budget(bits: u64) -> u64 {
    PRIME_ATTEMPTS_BASE + 64 * bits
}

fn parse_magnitude(digits: &str, radix: u32) -> Result<BigUint> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(CryptoError::Format(format!(
            "not a base-{radix} integer: {digits:?}"
        )));
    }
    BigUint::from_str_radix(digits, radix)
        .map_err(|e| CryptoError::Format(format!("not a base-{radix} integer: {e}")))
}

fn miller_rabin(n: &BigUint, rounds: usize) -> bool {
    if *n < BigUint::from(2u32) {
        return false;
    }
    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // n is odd and larger than every witness.
    let one = BigUint::one();
    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for &a in SMALL_PRIMES.iter().take(rounds.clamp(1, SMALL_PRIMES.len())) {
        let mut x = BigUint::from(a).modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

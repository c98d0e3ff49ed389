use num_integer::Integer;

/// Computes the greatest common divisor of two numbers.
///
/// The result is always non-negative; `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    a.gcd(&b)
}

/// Returns `true` when `a` has a multiplicative inverse modulo `modulus`.
pub fn is_coprime(a: i64, modulus: i64) -> bool {
    gcd(a, modulus) == 1
}

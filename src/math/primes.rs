//! Primality test used by the rotation policy

use num_traits::ToPrimitive;

/// Check whether `n` is a prime number
///
/// Accepts any primitive integer. Negative values, zero and one are not
/// prime. Uses trial division by 2, 3 and then odd divisors up to the
/// integer square root.
pub fn is_prime<T: ToPrimitive>(n: T) -> bool {
    n.to_u128().is_some_and(is_prime_u128)
}

const fn is_prime_u128(n: u128) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }

    // divisor <= n / divisor avoids overflowing divisor * divisor
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

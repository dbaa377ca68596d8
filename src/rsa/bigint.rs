// RSA Big Integer Operations
// Wrapper around num-bigint: the exponentiation kernel and the number theory
// key generation needs

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::thread_rng;

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Miller-Rabin rounds used when searching for key primes
pub const MILLER_RABIN_ROUNDS: u32 = 20;

// Every prime below 256. Trial division by these rejects most candidates
// before the first modular exponentiation.
const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses the right-to-left square-and-multiply algorithm, O(log exp)
/// modular multiplications.
///
/// Not constant time. Gives the same values as `BigUint::modpow`; the loop
/// is spelled out so the textbook algorithm stays visible.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1u32;
    }

    result
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() {
        return None;
    }

    let a = BigInt::from(a.clone());
    let m = BigInt::from(m.clone());
    let egcd = a.extended_gcd(&m);

    if !egcd.gcd.is_one() {
        return None;
    }

    // x may be negative; bring it into [0, m)
    egcd.x.mod_floor(&m).to_biguint()
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime
pub fn is_probable_prime(n: &RsaBigInt, iterations: u32) -> bool {
    if n < &RsaBigInt::from(2u8) {
        return false;
    }
    for &p in SMALL_PRIMES.iter() {
        if *n == RsaBigInt::from(p) {
            return true;
        }
        if (n % p).is_zero() {
            return false;
        }
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1u32;
        s += 1;
    }

    // Witness loop
    let mut rng = thread_rng();
    let two = RsaBigInt::from(2u8);

    'witness: for _ in 0..iterations {
        // Pick random witness a in [2, n-1)
        let a = rng.gen_biguint_range(&two, &n_minus_one);

        let mut x = mod_pow(&a, &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // Composite
        return false;
    }

    // Probably prime
    true
}

/// Generate a random prime of exactly `bit_length` bits.
/// The two top bits are forced on, so the product of two such primes has
/// exactly `2 * bit_length` bits.
pub fn random_prime(bit_length: u32) -> RsaBigInt {
    assert!(bit_length >= 2, "prime bit length must be at least 2");

    let mut rng = thread_rng();
    let top_bits = RsaBigInt::from(3u8) << (bit_length - 2);

    loop {
        let candidate = rng.gen_biguint(u64::from(bit_length)) | &top_bits | RsaBigInt::one();

        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS) {
            return candidate;
        }
    }
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}

/// Least common multiple
pub fn lcm(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    if a.is_zero() || b.is_zero() {
        return RsaBigInt::zero();
    }
    (a * b) / gcd(a, b)
}

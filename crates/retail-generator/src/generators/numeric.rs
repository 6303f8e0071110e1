//! Numeric value generators.

use rand::distributions::uniform::SampleUniform;
use rand::Rng;

/// Round a monetary amount to whole cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<T, R>(rng: &mut R, min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd,
    R: Rng,
{
    rng.gen_range(min..=max)
}

/// Generate a random float in the given range (inclusive).
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen_range(min..=max)
}

/// Generate a random monetary amount in the given range, rounded to cents.
pub fn generate_money_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    round_cents(generate_float_range(rng, min, max))
}

/// Gross margin percentage, rounded to two decimals. Zero revenue gives zero.
pub fn margin_pct(revenue: f64, cost: f64) -> f64 {
    if revenue == 0.0 {
        0.0
    } else {
        round_cents((revenue - cost) / revenue * 100.0)
    }
}

//! Random password generation for demos and reproducible runs

use crate::search::SearchBounds;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `length` symbols drawn uniformly from `bounds`.
///
/// The same seed always yields the same password.
pub fn generate_random_password(length: usize, bounds: &SearchBounds, seed: Option<u64>) -> String {
    let mut rng: ChaCha8Rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    (0..length)
        .filter_map(|_| char::from_u32(rng.random_range(bounds.candidates())))
        .collect()
}

//! Entry shuffling.

use rand::Rng;

/// Return the entries in a uniformly random order using the thread RNG.
pub fn shuffle<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    shuffle_with(entries, &mut rand::rng())
}

/// Return the entries in a uniformly random order drawn from `rng`.
///
/// Fisher–Yates: walking from the last index down to 1, swap each position
/// with one picked uniformly from `[0, i]`. The input is left untouched.
pub fn shuffle_with<S: AsRef<str>, R: Rng + ?Sized>(entries: &[S], rng: &mut R) -> Vec<String> {
    let mut out: Vec<String> = entries.iter().map(|e| e.as_ref().to_string()).collect();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

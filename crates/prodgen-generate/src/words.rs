use rand::{Rng, RngCore};

const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwz";
const VOWELS: &[u8] = b"aeiou";

/// Generates a pronounceable lowercase word whose length is drawn uniformly
/// from `1..=max_len`.
///
/// Letters alternate consonant/vowel so short titles and SKUs stay readable
/// in listings.
pub fn word(rng: &mut dyn RngCore, max_len: u32) -> String {
    let length = rng.random_range(1..=max_len.max(1)) as usize;
    let mut out = String::with_capacity(length);
    for position in 0..length {
        let set = if position % 2 == 0 { CONSONANTS } else { VOWELS };
        out.push(set[rng.random_range(0..set.len())] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn word_length_stays_within_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let generated = word(&mut rng, 10);
            assert!((1..=10).contains(&generated.len()));
            assert!(generated.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn word_with_bound_one_is_a_single_letter() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(word(&mut rng, 1).len(), 1);
        }
    }

    #[test]
    fn word_is_deterministic_under_a_fixed_seed() {
        let mut first = ChaCha8Rng::seed_from_u64(42);
        let mut second = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(word(&mut first, 12), word(&mut second, 12));
        }
    }
}

//! Bounded-random text generation.
//!
//! Produces word-like text: roughly 18% spaces, the rest lowercase Latin
//! letters of which roughly 3% are uppercased. The two-draw structure (one
//! draw for the character class, an independent draw for the case) is part
//! of the generation contract.

use rand::Rng;

/// Default minimum text length when no `min_length` restriction is given.
pub const DEFAULT_MIN_LENGTH: u32 = 5;

/// Default maximum text length when no `max_length` restriction is given.
pub const DEFAULT_MAX_LENGTH: u32 = 35;

/// Out of 100 draws, this many produce a space.
const SPACE_WEIGHT: u32 = 18;

/// Out of 100 letter draws, this many are uppercased.
const UPPERCASE_WEIGHT: u32 = 3;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generate a random string with length in `[min_length, max_length]`
/// inclusive.
///
/// The caller must validate `min_length <= max_length` first.
pub fn generate_text<R: Rng>(rng: &mut R, min_length: u32, max_length: u32) -> String {
    debug_assert!(min_length <= max_length);

    let extra = rng.gen_range(0..=max_length - min_length);
    let target = (min_length + extra) as usize;

    let mut text = String::with_capacity(target);
    for _ in 0..target {
        text.push(random_char(rng));
    }
    text
}

/// Draw one character: a space, or a Latin letter that is occasionally
/// uppercased.
pub fn random_char<R: Rng>(rng: &mut R) -> char {
    if rng.gen_range(0..100u32) < SPACE_WEIGHT {
        return ' ';
    }

    let letter = ALPHABET[rng.gen_range(0..ALPHABET.len())] as char;
    if rng.gen_range(0..100u32) < UPPERCASE_WEIGHT {
        letter.to_ascii_uppercase()
    } else {
        letter
    }
}

//! Glitch Effects - Scramble engine and its orchestrators
//!
//! - [`ease`] - Easing curves applied to discrete step progress
//! - [`scramble`] - The transition engine: one timer worker per invocation
//! - [`rotator`] - Cycles an element through phrases forever
//! - [`wave`] - Ambient scramble-then-resolve loop with a stop handle

pub mod ease;
pub mod rotator;
pub mod scramble;
pub mod wave;

use rand::Rng;

/// Glyphs used for unlocked positions while a transition is in flight.
///
/// Symbols only: no letters (so a locked character is unambiguous) and no
/// space (so noise can never imitate a preserved space).
pub const GLITCH_GLYPHS: &[char] = &[
    '0', '1', '×', '+', '?', '¿', '$', '#', '&', '@', '*', '%', '=',
];

/// Draw one glyph from the glitch alphabet.
pub(crate) fn random_glyph(rng: &mut impl Rng) -> char {
    GLITCH_GLYPHS[rng.gen_range(0..GLITCH_GLYPHS.len())]
}

/// Replace every non-space unit of `text` with a random glitch glyph.
///
/// Spaces are preserved verbatim, so the word shape stays readable even in
/// the fully randomized state.
pub fn randomized_text(text: &str, rng: &mut impl Rng) -> String {
    use unicode_segmentation::UnicodeSegmentation;

    text.graphemes(true)
        .map(|unit| {
            if unit == " " {
                ' '
            } else {
                random_glyph(rng)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_randomized_text_preserves_spaces_and_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let out = randomized_text("ab cd ef", &mut rng);

        assert_eq!(out.chars().count(), 8);
        assert_eq!(out.chars().nth(2), Some(' '));
        assert_eq!(out.chars().nth(5), Some(' '));
        for (i, c) in out.chars().enumerate() {
            if i != 2 && i != 5 {
                assert!(GLITCH_GLYPHS.contains(&c), "position {i} not a glyph: {c}");
            }
        }
    }

    #[test]
    fn test_glyph_alphabet_has_no_space_or_letters() {
        for &g in GLITCH_GLYPHS {
            assert_ne!(g, ' ');
            assert!(!g.is_alphabetic());
        }
    }
}

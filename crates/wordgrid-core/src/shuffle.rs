// Seeded Fisher-Yates shuffle and word scrambling.

use crate::random::SeededRandom;

/// Return a permutation of `items` chosen by a seeded Fisher-Yates pass.
///
/// For `i` from the last index down to 1, `j = floor(next() * (i + 1))` and
/// elements `i` and `j` are swapped. The input slice is left untouched.
pub fn shuffle_array<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut rng = SeededRandom::new(seed);
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, &mut rng);
    out
}

/// Shuffle a slice in place, drawing from an existing stream.
///
/// Lets a caller that already owns a generator continue its sequence.
pub fn shuffle_in_place<T>(items: &mut [T], rng: &mut SeededRandom) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Shuffle the characters of a single word.
///
/// The result may equal the input; it is never re-drawn.
pub fn scramble_word(word: &str, seed: u32) -> String {
    let letters: Vec<char> = word.chars().collect();
    shuffle_array(&letters, seed).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<T: Ord + Clone>(v: &[T]) -> Vec<T> {
        let mut v = v.to_vec();
        v.sort();
        v
    }

    // -- shuffle_array --

    #[test]
    fn known_permutation_seed_one() {
        assert_eq!(shuffle_array(&[1, 2, 3, 4, 5], 1), vec![1, 4, 5, 3, 2]);
    }

    #[test]
    fn identity_permutation_is_possible() {
        assert_eq!(shuffle_array(&[1, 2, 3, 4, 5], 42), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec!["a", "b", "c", "d"];
        let _ = shuffle_array(&input, 99);
        assert_eq!(input, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn empty_and_single() {
        let empty: [u8; 0] = [];
        assert!(shuffle_array(&empty, 5).is_empty());
        assert_eq!(shuffle_array(&["only"], 5), vec!["only"]);
    }

    #[test]
    fn result_is_permutation() {
        let input: Vec<u32> = (0..40).collect();
        for seed in 0..200 {
            let out = shuffle_array(&input, seed);
            assert_eq!(out.len(), input.len());
            assert_eq!(sorted(&out), input);
        }
    }

    #[test]
    fn in_place_continues_stream() {
        let mut rng = SeededRandom::new(1);
        let mut items = vec![1, 2, 3, 4, 5];
        shuffle_in_place(&mut items, &mut rng);
        assert_eq!(items, vec![1, 4, 5, 3, 2]);
    }

    // -- scramble_word --

    #[test]
    fn scramble_known_values() {
        assert_eq!(scramble_word("CAT", 1), "TAC");
        assert_eq!(scramble_word("ROBOT", 7), "OORTB");
        assert_eq!(scramble_word("ELEPHANT", 3), "PHETNALE");
    }

    #[test]
    fn scramble_keeps_letters() {
        let word = "PINGÜINO";
        let scrambled = scramble_word(word, 2024);
        let mut a: Vec<char> = word.chars().collect();
        let mut b: Vec<char> = scrambled.chars().collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn scramble_empty() {
        assert_eq!(scramble_word("", 1), "");
    }
}

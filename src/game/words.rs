use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

/// Every word the game can ask for. A few entries appear twice and are kept
/// that way, so those words come up twice per pass.
pub const VOCABULARY: &[&str] = &[
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
    "jet lag",
    "facebook",
    "rock",
    "pillow",
    "wrench",
    "chop",
    "torch",
    "chickenpox",
    "cloud",
    "notepad",
    "android",
    "firefox",
    "eclipse",
    "lamp",
    "q-tips",
    "socket",
    "laptop",
    "keyboard",
    "pen-drive",
    "sketch",
    "elephant",
    "ocean",
    "book",
    "egg",
    "house",
    "dog",
    "ball",
    "star",
    "shirt",
    "ice",
    "cream",
    "christmas",
    "tree",
    "spider",
    "shoe",
    "smile",
    "cup",
    "hat",
    "bird",
    "kite",
    "butterfly",
    "cupcake",
    "fish",
    "grapes",
    "socks",
    "TV",
    "bed",
    "phone",
    "doll",
    "trash",
    "can",
    "sad",
    "airplane",
    "nose",
    "eyes",
    "apple",
    "sun",
    "bubble",
    "moon",
    "snow",
    "candy",
    "roof",
    "storm",
    "rice",
    "flag",
    "sand",
    "wing",
    "city",
    "farm",
    "watch",
    "garbage",
    "spring",
    "winter",
    "toaster",
    "jump",
    "dive",
    "sunglasses",
    "chef",
    "list",
    "book",
    "shelf",
    "hill",
    "pillowcase",
    "stop",
    "light",
    "teacher",
    "recess",
    "vacation",
    "police",
    "clock",
    "subway",
    "hair",
    "tie",
    "bag",
    "tent",
    "heaven",
    "gummy",
    "bears",
    "firefighter",
    "team",
    "morning",
    "dark",
    "pain",
    "homework",
    "glue",
    "eraser",
    "peace",
    "alarm",
    "far",
    "boring",
    "hot",
    "cold",
    "parents",
    "laugh",
    "hair",
    "ice",
    "afraid",
    "root",
    "beer",
    "float",
    "street",
    "sweeper",
    "drinking",
    "fountain",
    "imagination",
    "gum",
    "under",
    "the",
    "desk",
    "toilet",
    "paper",
    "fart",
    "communication",
    "magic",
];

/// Pool of words still to be guessed in the current pass. The front is next.
#[derive(Debug, Clone)]
pub struct WordQueue {
    vocabulary: &'static [&'static str],
    pending: VecDeque<&'static str>,
}

impl WordQueue {
    /// Create an empty queue over `vocabulary`. The first call to
    /// [`WordQueue::next_word`] fills it.
    ///
    /// Panics if `vocabulary` is empty.
    pub fn new(vocabulary: &'static [&'static str]) -> Self {
        assert!(!vocabulary.is_empty(), "word queue needs at least one word");
        Self {
            vocabulary,
            pending: VecDeque::with_capacity(vocabulary.len()),
        }
    }

    /// Words left before the next reshuffle.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Pop the next word, reshuffling the full vocabulary first if the
    /// current pass is used up.
    pub fn next_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        if self.pending.is_empty() {
            self.refill(rng);
        }
        match self.pending.pop_front() {
            Some(word) => word,
            None => unreachable!("refill leaves at least one word"),
        }
    }

    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut words = self.vocabulary.to_vec();
        words.shuffle(rng);
        self.pending.extend(words);
        tracing::debug!(words = self.pending.len(), "word queue reshuffled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn counts<'a>(words: impl IntoIterator<Item = &'a str>) -> HashMap<&'a str, usize> {
        let mut map = HashMap::new();
        for word in words {
            *map.entry(word).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn test_vocabulary_keeps_duplicates() {
        assert_eq!(VOCABULARY.len(), 155);
        let counts = counts(VOCABULARY.iter().copied());
        for word in ["sad", "bubble", "book", "ice", "hair", "bag", "desk"] {
            assert_eq!(counts[word], 2, "{word} should appear twice");
        }
        assert!(VOCABULARY.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_first_word_fills_queue() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut queue = WordQueue::new(VOCABULARY);
        assert_eq!(queue.remaining(), 0);

        let word = queue.next_word(&mut rng);
        assert!(VOCABULARY.contains(&word));
        assert_eq!(queue.remaining(), VOCABULARY.len() - 1);
    }

    #[test]
    fn test_one_pass_matches_vocabulary() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut queue = WordQueue::new(VOCABULARY);

        let pass: Vec<&str> = (0..VOCABULARY.len())
            .map(|_| queue.next_word(&mut rng))
            .collect();

        assert_eq!(counts(pass), counts(VOCABULARY.iter().copied()));
        assert_eq!(queue.remaining(), 0);
    }

    #[test]
    fn test_reshuffles_after_exhaustion() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut queue = WordQueue::new(VOCABULARY);
        for _ in 0..VOCABULARY.len() {
            queue.next_word(&mut rng);
        }

        let word = queue.next_word(&mut rng);
        assert!(VOCABULARY.contains(&word));
        assert_eq!(queue.remaining(), VOCABULARY.len() - 1);
    }

    #[test]
    fn test_single_word_vocabulary_repeats() {
        static ONE: &[&str] = &["solo"];
        let mut rng = StdRng::seed_from_u64(0);
        let mut queue = WordQueue::new(ONE);
        for _ in 0..5 {
            assert_eq!(queue.next_word(&mut rng), "solo");
        }
    }

    #[test]
    #[should_panic(expected = "at least one word")]
    fn test_empty_vocabulary_panics() {
        WordQueue::new(&[]);
    }
}

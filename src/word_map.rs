use crate::word_iter::WordIter;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Map from word to count, keyed by exact byte content.
///
/// The benchmarks only need get, set, and the counting fold, so the timed
/// loops can be retargeted at any map implementation without touching the
/// tokenization logic. [`StdWordMap`] is what the binaries measure;
/// [`FnvWordMap`] swaps the hasher and is compared against it in the
/// criterion benches.
pub trait WordMap: Default {
    /// Looks up the count stored for `word`.
    fn get(&self, word: &[u8]) -> Option<u64>;

    /// Stores `value` for `word`, copying the key if it is new.
    fn set(&mut self, word: &[u8], value: u64);

    /// Bumps the count for `word`; a first sighting stores 1.
    fn add_word(&mut self, word: &[u8]);

    /// Number of distinct words stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the key set in the map's current iteration order. The
    /// order is unspecified but fixed for the returned list, which is what
    /// lets the timed phases walk an identical key sequence on every pass.
    fn keys(&self) -> Vec<Vec<u8>>;
}

impl<S: BuildHasher + Default> WordMap for HashMap<Vec<u8>, u64, S> {
    fn get(&self, word: &[u8]) -> Option<u64> {
        HashMap::get(self, word).copied()
    }

    fn set(&mut self, word: &[u8], value: u64) {
        self.insert(word.to_vec(), value);
    }

    fn add_word(&mut self, word: &[u8]) {
        // Copy the word into an owned key only on a miss; the underlying
        // buffer does not outlive the table.
        match self.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.insert(word.to_vec(), 1);
            }
        }
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn keys(&self) -> Vec<Vec<u8>> {
        HashMap::keys(self).cloned().collect()
    }
}

/// The standard library map with its default (SipHash) hasher. This is the
/// "language-provided map" the binaries measure.
pub type StdWordMap = HashMap<Vec<u8>, u64>;

/// The same map hashed with FNV-1a, which tends to win on short keys.
pub type FnvWordMap = fnv::FnvHashMap<Vec<u8>, u64>;

/// Folds the words of `bytes` into a frequency table: each distinct word
/// maps to the number of times it occurs in the tokenized sequence.
pub fn count_words<M: WordMap>(bytes: &[u8]) -> M {
    let mut counts = M::default();
    for word in WordIter::new(bytes) {
        counts.add_word(word);
    }
    counts
}

use crate::word_map::WordMap;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Number of full lookup passes `perfget` performs.
pub const RUNS: usize = 10;

/// Times `runs` full passes of looking up every key of `keys` in `counts`,
/// walking the list in its fixed order. One contiguous interval spans all
/// passes. Each result goes through [`black_box`] so the lookups survive
/// optimization; nothing else is done with them.
pub fn time_gets<M: WordMap>(counts: &M, keys: &[Vec<u8>], runs: usize) -> Duration {
    let begin = Instant::now();
    for _ in 0..runs {
        for key in keys {
            black_box(counts.get(key));
        }
    }
    begin.elapsed()
}

/// Times one pass of inserting every key of `keys` with the constant value 1
/// into a fresh map. The map is created before the interval starts and is
/// returned so callers can inspect what the pass produced.
pub fn time_sets<M: WordMap>(keys: &[Vec<u8>]) -> (M, Duration) {
    let mut table = M::default();
    let begin = Instant::now();
    for key in keys {
        table.set(key, 1);
    }
    (table, begin.elapsed())
}

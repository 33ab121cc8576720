//! Micro-benchmarks for a word-keyed associative map.
//!
//! The crate backs two binaries, `perfget` and `perfset`. Both read a file,
//! split it into whitespace-delimited words, and build a frequency table
//! keyed by word. `perfget` then times repeated lookups of every key in that
//! table; `perfset` times inserting every key into a fresh, empty table.
//!
//! The map sits behind the [`WordMap`] trait so the same timed loops can be
//! pointed at alternative map implementations. The binaries measure the
//! standard library map ([`StdWordMap`]); the criterion benches additionally
//! measure the FNV-hashed variant ([`FnvWordMap`]).
#![deny(clippy::all, clippy::cargo)]
// I can't do anything about this; fault of the dependencies
#![allow(clippy::multiple_crate_versions)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

mod runner;
mod word_iter;
mod word_map;

pub use runner::{time_gets, time_sets, RUNS};
pub use word_iter::WordIter;
pub use word_map::{count_words, FnvWordMap, StdWordMap, WordMap};

use std::fs;
use std::io;
use std::path::Path;

/// Reads the whole file into memory as raw bytes.
///
/// All-or-nothing: either the complete contents come back or the underlying
/// I/O error does. The contents are never interpreted as text in any
/// encoding; the tokenizer works on plain byte values.
pub fn load(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    fs::read(path)
}

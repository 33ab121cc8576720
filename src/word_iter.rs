use likely_stable::unlikely;

/// Bytes at or below this value delimit words; everything above is word
/// content. A byte-value threshold, not a Unicode whitespace class: NUL and
/// the other C0 control bytes delimit, and bytes above 0x20 never do, no
/// matter the encoding.
const DELIMITER_MAX: u8 = b' ';

/// Iterates the maximal runs of non-delimiter bytes in a buffer, left to
/// right. Runs of delimiters collapse, so no empty word is ever yielded, and
/// a trailing word at end-of-input is yielded without a closing delimiter.
#[derive(Debug)]
pub struct WordIter<'a> {
    bytes: &'a [u8],
    /// Cursor into `bytes`, advanced by each call to `next`.
    pos: usize,
}

impl<'a> WordIter<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl<'a> Iterator for WordIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        // Skip delimiters.
        while self.pos < self.bytes.len() && self.bytes[self.pos] <= DELIMITER_MAX {
            self.pos += 1;
        }
        if unlikely(self.pos == self.bytes.len()) {
            return None;
        }

        // Consume the word.
        let begin = self.pos;
        while self.pos < self.bytes.len() && self.bytes[self.pos] > DELIMITER_MAX {
            self.pos += 1;
        }
        Some(&self.bytes[begin..self.pos])
    }
}

use std::io::BufRead;

use tracing::warn;

/// Lazy stream of normalized word tokens pulled from a reader.
///
/// Splits the input into whitespace-delimited tokens, keeps only tokens
/// accepted by [`is_word_token`], and yields each survivor folded to ASCII
/// lowercase, in input order. The iterator is finite and not restartable:
/// it ends at end-of-stream, or early if the reader fails mid-run (the
/// failure is logged and treated as end-of-stream).
#[derive(Debug)]
pub struct WordTokens<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> WordTokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Pull the next line into the buffer. Returns false at end-of-stream
    /// or on a read error, which ends the stream the same way.
    fn refill(&mut self) -> bool {
        self.line.clear();
        self.pos = 0;
        match self.reader.read_line(&mut self.line) {
            Ok(0) => false,
            Ok(_) => true,
            Err(err) => {
                warn!("input stream became unreadable, treating as end of input: {err}");
                false
            }
        }
    }
}

impl<R: BufRead> Iterator for WordTokens<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let rest = &self.line[self.pos..];
            match rest.find(|c: char| !c.is_ascii_whitespace()) {
                Some(offset) => {
                    let start = self.pos + offset;
                    let end = self.line[start..]
                        .find(|c: char| c.is_ascii_whitespace())
                        .map(|len| start + len)
                        .unwrap_or(self.line.len());
                    self.pos = end;
                    let token = &self.line[start..end];
                    if is_word_token(token) {
                        return Some(fold_token(token));
                    }
                    // Rejected tokens are dropped silently.
                }
                None => {
                    if !self.refill() {
                        return None;
                    }
                }
            }
        }
    }
}

/// Whether a raw token counts as a word.
///
/// The first character must be ASCII alphabetic, `_`, or `#`. Every later
/// character must be ASCII alphabetic or `-`/`_`, except that a `#`-led
/// token allows only alphabetic characters after the `#`. A one-character
/// token is decided by the first-character rule alone.
pub fn is_word_token(token: &str) -> bool {
    let mut bytes = token.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };
    let hash_led = first == b'#';
    if !first.is_ascii_alphabetic() && first != b'_' && !hash_led {
        return false;
    }
    bytes.all(|b| b.is_ascii_alphabetic() || (!hash_led && (b == b'-' || b == b'_')))
}

/// Fold a token to lowercase, ASCII letters only; other bytes pass through.
pub fn fold_token(token: &str) -> String {
    token.to_ascii_lowercase()
}

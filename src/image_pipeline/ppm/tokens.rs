/// Whitespace-delimited tokens of a plain PPM stream.
///
/// A token starting with `#` begins a comment that runs to the end of its line.
#[derive(Clone)]
pub(crate) struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            consumed: 0,
        }
    }

    /// Bytes not yet consumed. Every remaining token needs at least one.
    pub(crate) fn remaining_bytes(&self) -> usize {
        self.text.len() - self.pos
    }

    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let rest = &self.text[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();

            if trimmed.is_empty() {
                return None;
            }

            if trimmed.starts_with('#') {
                self.pos += trimmed.find('\n').map_or(trimmed.len(), |i| i + 1);
                continue;
            }

            let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
            self.pos += end;
            self.consumed += 1;
            return Some(&trimmed[..end]);
        }
    }
}

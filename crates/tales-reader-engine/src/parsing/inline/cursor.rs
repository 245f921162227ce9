/// A byte cursor over a paragraph's reflowed text.
///
/// Only ASCII delimiters are ever matched, so stepping byte by byte never
/// splits a multi-byte character at a reported position.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until `delim` is under the cursor or input runs out.
    ///
    /// Returns true if the delimiter was found.
    pub fn seek(&mut self, delim: u8) -> bool {
        match self.s.as_bytes()[self.i.min(self.s.len())..]
            .iter()
            .position(|b| *b == delim)
        {
            Some(offset) => {
                self.i += offset;
                true
            }
            None => {
                self.i = self.s.len();
                false
            }
        }
    }
}

/// Finds structural divider lines: a trimmed line made only of at least
/// `min_run` copies of one character.
#[derive(Debug, Clone, Copy)]
pub struct DividerScanner {
    ch: char,
    min_run: usize,
}

impl DividerScanner {
    pub fn new(ch: char, min_run: usize) -> Self {
        Self { ch, min_run }
    }

    pub fn is_divider(&self, line: &str) -> bool {
        let trimmed = line.trim();
        let mut count = 0usize;
        for c in trimmed.chars() {
            if c != self.ch {
                return false;
            }
            count += 1;
        }
        count >= self.min_run
    }

    /// Indices of all divider lines, in line order.
    pub fn scan(&self, lines: &[&str]) -> Vec<usize> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.is_divider(line))
            .map(|(i, _)| i)
            .collect()
    }
}

use crate::timers::Millis;

pub(crate) const CHAR_DELAY: Millis = 50;

/// Reveals `text` one character per step. The reveal cannot be skipped or
/// rewound; a new reveal needs a new `Typewriter`.
#[derive(Clone, Debug)]
pub(crate) struct Typewriter {
    text: &'static str,
    /// Byte offset of the next character to reveal.
    pos: usize,
}

impl Typewriter {
    pub(crate) fn new(text: &'static str) -> Self {
        Self { text, pos: 0 }
    }

    /// Appends the next character to `target`. Returns true while more remain.
    pub(crate) fn step(&mut self, target: &mut String) -> bool {
        if let Some(ch) = self.text[self.pos..].chars().next() {
            target.push(ch);
            self.pos += ch.len_utf8();
        }
        !self.done()
    }

    pub(crate) fn done(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub(crate) fn revealed(&self) -> &'static str {
        &self.text[..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_every_character_in_order() {
        let mut tw = Typewriter::new("so…\n♥");
        let mut out = String::new();
        let mut steps = 1;
        while tw.step(&mut out) {
            steps += 1;
            assert_eq!(out, tw.revealed());
        }
        assert_eq!(out, "so…\n♥");
        assert_eq!(steps, "so…\n♥".chars().count());
        assert!(!tw.step(&mut out));
        assert_eq!(out, "so…\n♥");
    }
}

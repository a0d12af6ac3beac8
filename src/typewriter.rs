//! Character-by-character text reveals.

use std::time::Duration;

use crate::schedule::{Flow, Scheduler};

pub const HERO_TITLE: &str = "AWS DevOps Engineer";
pub const HERO_TICK: Duration = Duration::from_millis(150);

pub const CONTACT_SCRIPT: [&str; 4] = [
    "> Initializing secure connection...",
    "> Loading contact protocols...",
    "> Ready to receive transmission...",
    "> Type your message below:",
];
pub const TERMINAL_TICK: Duration = Duration::from_millis(50);

/// Endless type-out of a single line.
///
/// Each tick yields the next frame: the empty string, then one more
/// character per tick up to the full text, then back to the empty string.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: &'static str,
    // characters shown by the next frame
    cursor: usize,
    len: usize,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            cursor: 0,
            len: text.chars().count(),
        }
    }

    pub fn hero() -> Self {
        Self::new(HERO_TITLE)
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn tick(&mut self) -> &'static str {
        let frame = prefix(self.text, self.cursor);
        self.cursor = if self.cursor >= self.len {
            0
        } else {
            self.cursor + 1
        };
        frame
    }
}

fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// One-shot type-out of a fixed multi-line script.
#[derive(Debug, Clone)]
pub struct TerminalScript {
    lines: &'static [&'static str],
    line: usize,
    // byte offset into the current line
    offset: usize,
    output: String,
}

impl TerminalScript {
    pub fn new(lines: &'static [&'static str]) -> Self {
        Self {
            lines,
            line: 0,
            offset: 0,
            output: String::new(),
        }
    }

    pub fn contact() -> Self {
        Self::new(&CONTACT_SCRIPT)
    }

    /// Reveals one more character, or the line break before the next line.
    /// Returns [`Flow::Stop`] once every line is out; further ticks do nothing.
    pub fn tick(&mut self) -> Flow {
        let Some(current) = self.lines.get(self.line) else {
            return Flow::Stop;
        };
        if let Some(c) = current[self.offset..].chars().next() {
            self.output.push(c);
            self.offset += c.len_utf8();
            return Flow::Continue;
        }
        self.line += 1;
        self.offset = 0;
        if self.line < self.lines.len() {
            self.output.push('\n');
            Flow::Continue
        } else {
            Flow::Stop
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_finished(&self) -> bool {
        self.line >= self.lines.len()
    }
}

/// Drives `writer` forever on `scheduler`, handing each frame to `frame`.
pub fn play_typewriter<S: Scheduler>(
    scheduler: &S,
    mut writer: Typewriter,
    mut frame: impl FnMut(&str) + 'static,
) -> S::Handle {
    scheduler.every(
        HERO_TICK,
        Box::new(move || {
            frame(writer.tick());
            Flow::Continue
        }),
    )
}

/// Drives `script` on `scheduler` until it is fully revealed. The interval
/// stops itself afterwards.
pub fn play_terminal<S: Scheduler>(
    scheduler: &S,
    mut script: TerminalScript,
    mut frame: impl FnMut(&str) + 'static,
) -> S::Handle {
    scheduler.every(
        TERMINAL_TICK,
        Box::new(move || {
            let flow = script.tick();
            if flow == Flow::Continue {
                frame(script.output());
            }
            flow
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typewriter_cycles_through_prefixes() {
        let mut writer = Typewriter::new("abc");
        let frames = (0..9).map(|_| writer.tick()).collect::<Vec<_>>();
        assert_eq!(frames, ["", "a", "ab", "abc", "", "a", "ab", "abc", ""]);
    }

    #[test]
    fn typewriter_respects_char_boundaries() {
        let mut writer = Typewriter::new("héllo");
        writer.tick();
        writer.tick();
        assert_eq!(writer.tick(), "hé");
    }

    #[test]
    fn hero_cycle_is_length_plus_one() {
        let mut writer = Typewriter::hero();
        let cycle = HERO_TITLE.chars().count() + 1;
        for _ in 0..cycle - 1 {
            writer.tick();
        }
        assert_eq!(writer.tick(), HERO_TITLE);
        assert_eq!(writer.tick(), "");
    }

    #[test]
    fn terminal_breaks_between_lines_only() {
        static LINES: [&str; 2] = ["ab", "c"];
        let mut script = TerminalScript::new(&LINES);
        let mut ticks = 0;
        while script.tick() == Flow::Continue {
            ticks += 1;
        }
        assert_eq!(script.output(), "ab\nc");
        // two chars, one break, one char
        assert_eq!(ticks, 4);
        assert!(script.is_finished());
        assert_eq!(script.tick(), Flow::Stop);
        assert_eq!(script.output(), "ab\nc");
    }

    #[test]
    fn empty_script_stops_immediately() {
        let mut script = TerminalScript::new(&[]);
        assert_eq!(script.tick(), Flow::Stop);
        assert_eq!(script.output(), "");
    }
}

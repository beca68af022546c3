use std::io::{self, BufRead};

use log::trace;
use thiserror::Error;

use crate::foliowm::{EventSource, FolioWmError, InputEvent, Position, Screen};

/// Plays back input recorded as text, one event per line:
///
/// ```text
/// launch terminal
/// down 300 60
/// move 320 80
/// up 320 80
/// cancel
/// screen 1920 1080
/// ```
///
/// Blank lines and lines starting with `#` are skipped.
pub struct ScriptAdapter<R> {
    reader: R,
    line: usize,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl<R: BufRead> ScriptAdapter<R> {
    pub fn new(reader: R) -> Self {
        ScriptAdapter { reader, line: 0 }
    }

    fn malformed(&self, reason: impl Into<String>) -> ScriptError {
        ScriptError::Malformed {
            line: self.line,
            reason: reason.into(),
        }
    }

    fn coordinates(&self, args: &[&str]) -> Result<(i32, i32), ScriptError> {
        match args {
            [x, y] => {
                let x = x
                    .parse()
                    .map_err(|_| self.malformed(format!("bad number {}", x)))?;
                let y = y
                    .parse()
                    .map_err(|_| self.malformed(format!("bad number {}", y)))?;
                Ok((x, y))
            }
            _ => Err(self.malformed(format!("expected 2 numbers, got {}", args.len()))),
        }
    }

    fn parse_line(&self, text: &str) -> Result<InputEvent, ScriptError> {
        let mut words = text.split_whitespace();
        let command = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();
        let point = |adapter: &Self| {
            adapter
                .coordinates(&args)
                .map(|(x, y)| Position::new(x, y))
        };
        let event = match command {
            "launch" => match args.as_slice() {
                [app] => InputEvent::Launch(app.to_string()),
                _ => return Err(self.malformed("launch takes one application id")),
            },
            "down" => InputEvent::PointerDown(point(self)?),
            "move" => InputEvent::PointerMove(point(self)?),
            "up" => InputEvent::PointerUp(point(self)?),
            "cancel" => InputEvent::PointerCaptureLost,
            "screen" => {
                let (width, height) = self.coordinates(&args)?;
                InputEvent::ScreenResized(Screen::new_screen(width, height))
            }
            other => return Err(self.malformed(format!("unknown command {}", other))),
        };
        Ok(event)
    }
}

impl<R: BufRead> EventSource for ScriptAdapter<R> {
    fn next_event(&mut self) -> Result<Option<InputEvent>, FolioWmError> {
        let mut buffer = String::new();
        loop {
            buffer.clear();
            if self.reader.read_line(&mut buffer).map_err(ScriptError::from)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let text = buffer.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            trace!("script line {}: {}", self.line, text);
            return Ok(Some(self.parse_line(text)?));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn events(script: &str) -> Result<Vec<InputEvent>, FolioWmError> {
        let mut adapter = ScriptAdapter::new(script.as_bytes());
        let mut events = Vec::new();
        while let Some(event) = adapter.next_event()? {
            events.push(event);
        }
        Ok(events)
    }

    fn malformed_line(script: &str) -> usize {
        match events(script) {
            Err(FolioWmError::Script(ScriptError::Malformed { line, .. })) => line,
            other => panic!("expected malformed script, got {:?}", other),
        }
    }

    #[test]
    fn parses_every_command() {
        let script = "\
# open and drag
launch terminal

down 300 60
move -20 75
up 0 0
cancel
screen 1920 1080
";
        assert_eq!(
            events(script).unwrap(),
            vec![
                InputEvent::Launch("terminal".into()),
                InputEvent::PointerDown(Position::new(300, 60)),
                InputEvent::PointerMove(Position::new(-20, 75)),
                InputEvent::PointerUp(Position::new(0, 0)),
                InputEvent::PointerCaptureLost,
                InputEvent::ScreenResized(Screen::new_screen(1920, 1080)),
            ]
        );
    }

    #[test]
    fn reports_line_of_bad_input() {
        assert_eq!(malformed_line("launch terminal\n\nfly 1 2\n"), 3);
        assert_eq!(malformed_line("down 1\n"), 1);
        assert_eq!(malformed_line("# c\nmove x 2\n"), 2);
        assert_eq!(malformed_line("launch\n"), 1);
        assert_eq!(malformed_line("launch a b\n"), 1);
    }

    #[test]
    fn empty_script_has_no_events() {
        assert!(events("").unwrap().is_empty());
        assert!(events("\n# nothing\n   \n").unwrap().is_empty());
    }
}

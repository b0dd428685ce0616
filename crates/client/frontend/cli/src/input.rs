//! Line-based input for the CLI client.
//!
//! The provider hands the engine the raw line exactly as typed, minus the
//! line ending. Validation (length, digits, unlock gating) stays in
//! `game-core`.

use std::io::{self, BufRead, Write};

use game_core::{ActionProvider, RoundView};
use tracing::warn;

/// Reads one action per round from a line-oriented reader.
pub struct LineActionProvider<R, W> {
    reader: R,
    prompt: W,
    exhausted: bool,
}

impl LineActionProvider<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineActionProvider<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self {
            reader,
            prompt,
            exhausted: false,
        }
    }

    /// True once the reader hit end of input.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Replay prompt sharing this provider's reader, so stdin is only locked once.
    pub fn ask_play_again(&mut self) -> io::Result<bool> {
        ask_play_again(&mut self.reader, &mut self.prompt)
    }

    fn read_choice(&mut self) -> io::Result<String> {
        write!(self.prompt, "Choose your move: ")?;
        self.prompt.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            self.exhausted = true;
        }
        Ok(strip_line_ending(&line).to_string())
    }
}

impl<R: BufRead, W: Write> ActionProvider for LineActionProvider<R, W> {
    fn next_choice(&mut self, _view: &RoundView) -> String {
        match self.read_choice() {
            Ok(line) => line,
            Err(error) => {
                warn!(%error, "failed to read action input");
                String::new()
            }
        }
    }
}

/// Asks whether to start another match. Only `y`/`yes` (any case) replays;
/// end of input counts as no.
pub fn ask_play_again(reader: &mut impl BufRead, prompt: &mut impl Write) -> io::Result<bool> {
    write!(prompt, "Play again? (y/n): ")?;
    prompt.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    let answer = line.trim().to_ascii_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}

/// Removes a single trailing `\n` or `\r\n`. Other whitespace is kept so
/// validation sees exactly what was typed.
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line)
}

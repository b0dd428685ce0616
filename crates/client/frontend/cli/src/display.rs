//! Console implementation of the display collaborator.

use std::io;
use std::thread;

use console::{Term, style};
use game_core::{CombatDisplay, GameConfig, MatchOutcome, PlayerAction};
use tracing::warn;

use crate::art;
use crate::config::Pacing;

/// Widest health bar drawn, in cells.
const MAX_BAR_WIDTH: usize = 40;

/// Renders a match to a terminal.
///
/// Write failures are logged and swallowed: the engine treats the display
/// as fire-and-forget.
pub struct ConsoleDisplay {
    term: Term,
    pacing: Pacing,
    player_name: String,
    enemy_name: String,
}

impl ConsoleDisplay {
    pub fn new(term: Term, pacing: Pacing, config: &GameConfig) -> Self {
        Self {
            term,
            pacing,
            player_name: config.player_name.clone(),
            enemy_name: config.enemy_name.clone(),
        }
    }

    pub fn stdout(pacing: Pacing, config: &GameConfig) -> Self {
        Self::new(Term::stdout(), pacing, config)
    }

    /// Clears the screen and shows the title card.
    pub fn title(&mut self) {
        let result = self
            .term
            .clear_screen()
            .and_then(|()| self.term.write_line(&style(art::TITLE).yellow().to_string()))
            .and_then(|()| self.term.write_line(&style(art::SEAGULL).white().to_string()));
        self.report(result);
    }

    fn reveal_text(&self, text: &str) -> io::Result<()> {
        if self.pacing.reveal.is_zero() || !self.term.is_term() {
            return self.term.write_line(text);
        }

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.term.write_str(ch.encode_utf8(&mut buf))?;
            self.term.flush()?;
            thread::sleep(self.pacing.reveal);
        }
        self.term.write_line("")
    }

    fn bar_width(&self) -> usize {
        let (_rows, cols) = self.term.size();
        let label = self.player_name.len().max(self.enemy_name.len()) + 12;
        (cols as usize).saturating_sub(label).clamp(10, MAX_BAR_WIDTH)
    }

    fn health_line(&self, name: &str, health: u32, scale: u32, width: usize) -> String {
        let filled = if scale == 0 {
            0
        } else {
            (health as usize * width).div_ceil(scale as usize).min(width)
        };
        let bar = format!("{}{}", "#".repeat(filled), ".".repeat(width - filled));
        let bar = if health.saturating_mul(4) <= scale {
            style(bar).red()
        } else {
            style(bar).green()
        };
        format!(
            "{:<name_width$} [{}] {:>3}",
            name,
            bar,
            health,
            name_width = self.player_name.len().max(self.enemy_name.len())
        )
    }

    fn banner(&self, art: &str, winner_line: String, color: console::Color) -> io::Result<()> {
        self.term.write_line(&style(art).fg(color).bold().to_string())?;
        self.reveal_text(&winner_line)
    }

    fn pause(&self) {
        if !self.pacing.round_pause.is_zero() {
            thread::sleep(self.pacing.round_pause);
        }
    }

    fn report(&self, result: io::Result<()>) {
        if let Err(error) = result {
            warn!(%error, "terminal write failed");
        }
    }
}

impl CombatDisplay for ConsoleDisplay {
    fn round_banner(&mut self, round: u32) {
        let line = style(format!("===== ROUND {round} =====")).cyan().bold();
        let result = self
            .term
            .write_line("")
            .and_then(|()| self.term.write_line(&line.to_string()));
        self.report(result);
    }

    fn reveal(&mut self, text: &str) {
        let result = self.reveal_text(text);
        self.report(result);
    }

    fn health(&mut self, player_health: u32, enemy_health: u32) {
        let width = self.bar_width();
        let player_scale = GameConfig::PLAYER_START_HEALTH.max(player_health);
        let enemy_scale = GameConfig::ENEMY_START_HEALTH.max(enemy_health);
        let player = self.health_line(&self.player_name, player_health, player_scale, width);
        let enemy = self.health_line(&self.enemy_name, enemy_health, enemy_scale, width);
        let result = self
            .term
            .write_line(&player)
            .and_then(|()| self.term.write_line(&enemy));
        self.report(result);
        self.pause();
    }

    fn action_menu(&mut self, actions: &[PlayerAction]) {
        let result = actions.iter().try_for_each(|action| {
            let digit = action.digit().unwrap_or('?');
            let label = if action.requires_power() {
                style(action.to_string()).magenta().bold()
            } else {
                style(action.to_string())
            };
            self.term.write_line(&format!("  {digit}) {label}"))
        });
        self.report(result);
    }

    fn power_unlocked(&mut self) {
        let line = style("A familiar roundhouse kick echoes down the beach... press 4!")
            .magenta()
            .bold()
            .to_string();
        let result = self.reveal_text(&line);
        self.report(result);
    }

    fn victory(&mut self, outcome: &MatchOutcome) {
        let line = format!(
            "The {} retreat after {} rounds. The nachos are safe.",
            self.enemy_name, outcome.rounds
        );
        let result = self.banner(art::VICTORY, line, console::Color::Green);
        self.report(result);
    }

    fn defeat(&mut self, outcome: &MatchOutcome) {
        let line = format!(
            "After {} rounds the {} have cleaned {} out.",
            outcome.rounds, self.enemy_name, self.player_name
        );
        let result = self.banner(art::DEFEAT, line, console::Color::Red);
        self.report(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> ConsoleDisplay {
        console::set_colors_enabled(false);
        ConsoleDisplay::new(Term::stdout(), Pacing::instant(), &GameConfig::default())
    }

    #[test]
    fn full_health_fills_bar() {
        let line = display().health_line("Old Man", 20, 20, 10);
        assert!(line.contains("[##########]"), "{line}");
        assert!(line.ends_with(" 20"));
    }

    #[test]
    fn empty_health_draws_empty_bar() {
        let line = display().health_line("Seagulls", 0, 30, 10);
        assert!(line.contains("[..........]"), "{line}");
    }

    #[test]
    fn partial_health_rounds_up() {
        let line = display().health_line("Seagulls", 1, 30, 10);
        assert!(line.contains("[#.........]"), "{line}");
    }
}

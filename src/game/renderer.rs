use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::buzz::BuzzEvent;
use super::state::GameSnapshot;

/// What the single game screen shows.
pub struct Screen<'a> {
    pub snapshot: &'a GameSnapshot,
    /// Cue to flash under the word, if any.
    pub cue: BuzzEvent,
    pub game_over: bool,
}

pub fn render(frame: &mut Frame, screen: &Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let snapshot = screen.snapshot;
    let timer_style = if snapshot.remaining_seconds < super::state::PANIC_THRESHOLD_SECONDS {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(format!("Time {}    Score {}", snapshot.remaining_time, snapshot.score))
            .style(timer_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" GUESS THE WORD ")),
        chunks[0],
    );

    let body = if screen.game_over {
        format!("Game over!\n\nFinal score: {}", snapshot.score)
    } else {
        format!("The word is:\n\n{}", snapshot.word)
    };
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(screen.cue.label())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow)),
        chunks[2],
    );

    let help = if screen.game_over {
        "[Q/Esc] Quit"
    } else {
        "[→/C/Enter] Got it  [←/S] Skip  [Q/Esc] Quit"
    };
    frame.render_widget(
        Paragraph::new(help)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        chunks[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(screen: &Screen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|f| render(f, screen)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            word: "zebra".into(),
            score: 3,
            remaining_seconds: 125,
            remaining_time: "02:05".into(),
            game_finished: false,
            buzz: BuzzEvent::None,
        }
    }

    #[test]
    fn test_renders_word_time_and_score() {
        let snapshot = snapshot();
        let out = draw(&Screen { snapshot: &snapshot, cue: BuzzEvent::Correct, game_over: false });
        assert!(out.contains("zebra"));
        assert!(out.contains("02:05"));
        assert!(out.contains("Score 3"));
        assert!(out.contains("CORRECT!"));
    }

    #[test]
    fn test_renders_game_over() {
        let snapshot = snapshot();
        let out = draw(&Screen { snapshot: &snapshot, cue: BuzzEvent::GameOver, game_over: true });
        assert!(out.contains("Final score: 3"));
        assert!(!out.contains("zebra"));
    }
}

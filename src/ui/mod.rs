//! Terminal presentation. Draws what the engine computed and reports what the
//! player pressed; never touches run state.

pub mod battle_scene;
pub mod game_over;
pub mod name_prompt;
pub mod upgrade_menu;

use crate::combat::{BattleFrame, Combatant, LogEntry};
use crate::core::constants::MAX_LOG_ENTRIES;
use crate::core::{EndChoice, Frontend, Playback};
use crate::upgrades::OfferedUpgrade;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::error;
use upgrade_menu::UpgradeMenu;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Poll granularity while waiting out a frame delay.
const INPUT_POLL_MS: u64 = 50;

/// `Frontend` backed by a crossterm terminal.
///
/// Terminal failures end the run: the frontend answers "quit" and keeps the
/// first error for the caller to report.
pub struct TerminalFrontend<'a> {
    terminal: &'a mut Tui,
    log: VecDeque<LogEntry>,
    last_frame: Option<BattleFrame>,
    /// Tier of the battle being shown, as reported by the engine.
    tier: u32,
    error: Option<io::Error>,
}

impl<'a> TerminalFrontend<'a> {
    pub fn new(terminal: &'a mut Tui) -> Self {
        Self {
            terminal,
            log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            last_frame: None,
            tier: 1,
            error: None,
        }
    }

    /// The first terminal error hit during the run, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn fail(&mut self, e: io::Error) {
        error!(error = %e, "terminal error");
        if self.error.is_none() {
            self.error = Some(e);
        }
    }

    fn push_log(&mut self, entry: LogEntry) {
        if self.log.len() >= MAX_LOG_ENTRIES {
            self.log.pop_front();
        }
        self.log.push_back(entry);
    }

    fn draw_frame(&mut self, frame: &BattleFrame) -> io::Result<()> {
        let log = &self.log;
        let tier = self.tier;
        self.terminal.draw(|f| {
            let area = f.size();
            battle_scene::draw_battle_scene(f, area, &frame.hero, &frame.enemy, log, tier);
        })?;
        Ok(())
    }

    /// Waits out `delay`, returning true if the player pressed q or Esc.
    fn quit_pressed_within(delay: Duration) -> io::Result<bool> {
        let deadline = Instant::now() + delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(false);
            }
            if event::poll(remaining.min(Duration::from_millis(INPUT_POLL_MS)))? {
                if let Event::Key(key_event) = event::read()? {
                    if matches!(key_event.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(true);
                    }
                }
            }
        }
    }

    fn play(&mut self, tier: u32, frames: &[BattleFrame]) -> io::Result<Playback> {
        self.tier = tier;
        self.log.clear();
        for frame in frames {
            self.push_log(frame.log.clone());
            self.draw_frame(frame)?;
            if Self::quit_pressed_within(frame.delay)? {
                return Ok(Playback::QuitRequested);
            }
        }
        self.last_frame = frames.last().cloned();
        Ok(Playback::Finished)
    }

    fn menu(&mut self, hero: &Combatant, offers: &[OfferedUpgrade]) -> io::Result<Option<usize>> {
        let mut menu = UpgradeMenu::new();
        loop {
            self.terminal.draw(|f| {
                let area = f.size();
                menu.draw(f, area, hero, offers);
            })?;

            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Up | KeyCode::Char('k') => menu.move_up(),
                    KeyCode::Down | KeyCode::Char('j') => menu.move_down(offers.len()),
                    KeyCode::Enter => return Ok(Some(menu.selected)),
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    _ => {}
                }
            }
        }
    }

    fn end_screen(&mut self, won: bool, hero: &Combatant) -> io::Result<EndChoice> {
        loop {
            let log = &self.log;
            let last_frame = self.last_frame.as_ref();
            let tier = self.tier;
            self.terminal.draw(|f| {
                let area = f.size();
                if let Some(frame) = last_frame {
                    battle_scene::draw_battle_scene(
                        f,
                        area,
                        &frame.hero,
                        &frame.enemy,
                        log,
                        tier,
                    );
                }
                game_over::draw_game_over(f, won, hero);
            })?;

            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Char('r') | KeyCode::Char('R') => return Ok(EndChoice::Restart),
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(EndChoice::Quit)
                    }
                    _ => {}
                }
            }
        }
    }
}

impl Frontend for TerminalFrontend<'_> {
    fn render_battle(&mut self, tier: u32, frames: &[BattleFrame]) -> Playback {
        match self.play(tier, frames) {
            Ok(playback) => playback,
            Err(e) => {
                self.fail(e);
                Playback::QuitRequested
            }
        }
    }

    fn choose_upgrade(&mut self, hero: &Combatant, offers: &[OfferedUpgrade]) -> Option<usize> {
        match self.menu(hero, offers) {
            Ok(choice) => choice,
            Err(e) => {
                self.fail(e);
                None
            }
        }
    }

    fn end_of_game(&mut self, won: bool, hero: &Combatant) -> EndChoice {
        match self.end_screen(won, hero) {
            Ok(choice) => choice,
            Err(e) => {
                self.fail(e);
                EndChoice::Quit
            }
        }
    }
}

/// Shows the farewell screen for a moment.
pub fn show_farewell(terminal: &mut Tui, hero_name: &str) -> io::Result<()> {
    terminal.draw(|f| game_over::draw_farewell(f, hero_name))?;
    std::thread::sleep(Duration::from_secs(1));
    Ok(())
}

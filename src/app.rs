//! App: terminal init, main loop, tick and key handling.

use crate::game::{Direction, Game};
use crate::input::{Action, key_to_action};
use crate::theme::Theme;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};
use tachyonfx::Effect;

pub struct App {
    game: Game,
    theme: Theme,
    /// Target render frames per second.
    frame_rate: f64,
    no_animation: bool,
    last_tick: Instant,
    /// TachyonFX fade for pending combo cells (created when a combo
    /// appears, dropped once it resolves).
    combo_effect: Option<Effect>,
    /// Last time the combo effect was processed (for delta).
    combo_effect_process_time: Option<Instant>,
}

impl App {
    pub fn new(game: Game, theme: Theme, frame_rate: f64, no_animation: bool) -> Self {
        Self {
            game,
            theme,
            frame_rate,
            no_animation,
            last_tick: Instant::now(),
            combo_effect: None,
            combo_effect_process_time: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        use crossterm::{
            event::{
                KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
                PushKeyboardEnhancementFlags,
            },
            execute,
            terminal::{
                EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
            },
        };

        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        // Attempt to enable enhanced keyboard reporting; not all
        // terminals support it.
        let _ = execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        );

        let mut terminal =
            ratatui::DefaultTerminal::new(ratatui::backend::CrosstermBackend::new(stdout))?;

        let result = self.run_loop(&mut terminal);

        // Restore
        let _ = execute!(std::io::stdout(), PopKeyboardEnhancementFlags);
        execute!(std::io::stdout(), LeaveAlternateScreen)?;
        disable_raw_mode()?;

        result
    }

    fn run_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            let now = Instant::now();
            terminal.draw(|f| {
                crate::ui::draw(
                    f,
                    &self.game,
                    &self.theme,
                    f.area(),
                    &mut self.combo_effect,
                    &mut self.combo_effect_process_time,
                    now,
                    self.no_animation,
                )
            })?;

            // Retire the fade once it finished or its combos resolved.
            if self.game.pending_combo_groups().is_empty()
                || self.combo_effect.as_ref().is_some_and(|e| e.done())
            {
                self.combo_effect = None;
                self.combo_effect_process_time = None;
            }

            let frame_duration = Duration::from_secs_f64(1.0 / self.frame_rate);
            let timeout = frame_duration.saturating_sub(now.elapsed());

            if event::poll(timeout)? {
                while event::poll(Duration::ZERO)? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key_to_action(key) {
                            Action::Quit => return Ok(()),
                            Action::Pause => self.game.toggle_pause(),
                            Action::Swap => {
                                if !self.game.paused {
                                    self.game.swap()?;
                                }
                            }
                            Action::MoveUp => self.game.move_swapper(Direction::Up),
                            Action::MoveRight => self.game.move_swapper(Direction::Right),
                            Action::MoveDown => self.game.move_swapper(Direction::Down),
                            Action::MoveLeft => self.game.move_swapper(Direction::Left),
                            Action::None => {}
                        }
                    }
                }
            }

            // Real elapsed time, so state clocks track the wall clock
            // even when a frame runs long.
            let dt = self.last_tick.elapsed();
            self.last_tick = Instant::now();
            self.game.update(dt)?;
        }
    }
}

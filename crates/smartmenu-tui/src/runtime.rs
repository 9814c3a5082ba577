//! Screen runtime - owns the terminal and runs the event loop.
//!
//! Each iteration drains the login session inbox, polls terminal input
//! until the next tick is due, feeds everything through the reducer, and
//! redraws when something changed.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use smartmenu_core::config::Config;

use crate::state::{AppState, OnLogin};
use crate::update::{self, UiEvent};
use crate::{render, terminal};

/// Tick cadence while a sign-in attempt is in flight (spinner animation).
pub const FRAME_DURATION: Duration = Duration::from_millis(80);

/// Poll duration when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

/// Full-screen sign-in runtime.
///
/// Terminal state is restored on drop. Dropping also drops the session,
/// which cancels any attempt still in flight.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates the runtime and takes over the terminal.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(config: &Config, on_login: Option<OnLogin>) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(config, on_login),
            last_tick: Instant::now(),
        })
    }

    /// Runs until the user quits.
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!("sign-in screen mounted");
        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;
            if !events.is_empty() {
                dirty = true;
            }
            for event in events {
                update::update(&mut self.state, event);
            }

            // Completions arrive from the submission task.
            if self.state.session.drain_inbox() > 0 {
                dirty = true;
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        self.state.session.teardown();
        tracing::debug!("sign-in screen unmounted");
        Ok(())
    }

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let tick_interval = if self.state.session.controller().is_submitting() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };
        let poll_duration = tick_interval.saturating_sub(self.last_tick.elapsed());

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}

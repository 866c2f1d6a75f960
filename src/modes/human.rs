use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, Phase};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

/// Interactive play: keyboard in, ratatui out.
///
/// Input, simulation ticks and rendering all run on one task; events only
/// buffer a direction request, and every state change happens inside the
/// engine's tick.
pub struct HumanMode {
    engine: GameEngine,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    /// Session clock; elapsed milliseconds are what the engine sees as time
    clock: Instant,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let tick_interval = Duration::from_millis(config.tick_interval_ms);

        Self {
            engine: GameEngine::new(config),
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval,
            clock: Instant::now(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        self.clock = Instant::now();
        self.engine.reset(0);
        self.metrics.on_game_start();

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.engine.state().phase == Phase::Running {
                        self.update_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    if self.engine.state().phase == Phase::Running {
                        self.metrics.update();
                    }
                    let snapshot = self.engine.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.engine.request_direction(direction);
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::Ignored => {}
            }
        }
    }

    fn update_game(&mut self) {
        let outcome = self.engine.tick(self.now_ms());

        if outcome.terminated {
            self.metrics
                .on_game_over(self.engine.state().score, outcome.collision);
        }
    }

    fn reset_game(&mut self) {
        self.engine.reset(self.now_ms());
        self.metrics.on_game_start();
    }

    fn now_ms(&self) -> u64 {
        self.clock.elapsed().as_millis() as u64
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default());
        assert_eq!(mode.engine.state().phase, Phase::Running);
        assert_eq!(mode.engine.state().score, 0);
        assert_eq!(mode.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_game_reset() {
        let mut mode = HumanMode::new(GameConfig::default());
        mode.reset_game();
        assert_eq!(mode.engine.state().phase, Phase::Running);
        assert_eq!(mode.engine.state().score, 0);
        assert_eq!(mode.metrics.games_played, 0);
    }
}

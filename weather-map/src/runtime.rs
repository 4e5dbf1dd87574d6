//! Event loop
//!
//! Terminal input and task results arrive on separate channels. Input goes
//! through the view, which turns it into actions. Actions go through the
//! reducer, and the effect it returns starts a background fetch. The screen is
//! redrawn only after a state change or a resize.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::api::WeatherClient;
use crate::components::{Component, WeatherMapView, WeatherMapViewProps};
use crate::effect::handle_effect;
use crate::reducer::reducer;
use crate::state::{AppState, LOADING_ANIM_TICK_MS};
use crate::tasks::TaskManager;

/// How long the input thread blocks before checking for shutdown
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Terminal input handed to components
#[derive(Debug, Clone)]
pub enum EventKind {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Wheel scroll at a position; positive delta scrolls down
    Scroll { column: u16, row: u16, delta: isize },
    Resize(u16, u16),
}

impl EventKind {
    /// Convert a crossterm event. Key releases, focus and paste events are dropped.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key(key)),
            Event::Mouse(mouse) => Some(match mouse.kind {
                MouseEventKind::ScrollUp => Self::Scroll {
                    column: mouse.column,
                    row: mouse.row,
                    delta: -1,
                },
                MouseEventKind::ScrollDown => Self::Scroll {
                    column: mouse.column,
                    row: mouse.row,
                    delta: 1,
                },
                _ => Self::Mouse(mouse),
            }),
            Event::Resize(width, height) => Some(Self::Resize(width, height)),
            _ => None,
        }
    }
}

/// Read terminal input on a blocking thread until `stop` fires or the
/// receiving side is gone
fn spawn_input_reader(
    tx: mpsc::UnboundedSender<EventKind>,
    stop: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !stop.is_cancelled() {
            match event::poll(INPUT_POLL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    warn!(error = %e, "Terminal input poll failed");
                    break;
                }
            }
            let Ok(raw) = event::read() else {
                continue;
            };
            if let Some(event) = EventKind::from_terminal(raw) {
                if tx.send(event).is_err() {
                    break;
                }
            }
        }
        debug!("Input reader stopped");
    })
}

/// Owns the state and drives the reducer, the effect handler and the view
pub struct Runtime {
    state: AppState,
    client: WeatherClient,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    tasks: TaskManager,
    log_actions: bool,
}

impl Runtime {
    pub fn new(state: AppState, client: WeatherClient) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());

        Self {
            state,
            client,
            action_tx,
            action_rx,
            tasks,
            log_actions: false,
        }
    }

    /// Log every dispatched action (except ticks) with its summary
    pub fn with_action_log(mut self, enabled: bool) -> Self {
        self.log_actions = enabled;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run one action through the reducer and start the effect it returns.
    ///
    /// Returns whether the screen needs a redraw.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let logged = (self.log_actions && !action.is_noisy())
            .then(|| (action.name(), action.summary()));

        let result = reducer(&mut self.state, action);

        if let Some((name, summary)) = logged {
            debug!(
                action = name,
                summary = %summary,
                state_changed = result.changed,
                effect = result.effect.is_some(),
                "Action processed"
            );
        }

        if let Some(effect) = result.effect {
            handle_effect(effect, &mut self.tasks, &self.client);
        }
        result.changed
    }

    /// Wait for the next action from a background task
    pub async fn next_action(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    /// Draw and react to input until the view asks to quit
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        view: &mut WeatherMapView,
    ) -> io::Result<()> {
        let (input_tx, mut input_rx) = mpsc::unbounded_channel();
        let stop = CancellationToken::new();
        let reader = spawn_input_reader(input_tx, stop.clone());
        self.tasks.start_tick(Duration::from_millis(LOADING_ANIM_TICK_MS));
        info!("Event loop started");

        let mut redraw = true;
        let result = loop {
            if redraw {
                let state = &self.state;
                let drawn = terminal.draw(|frame| {
                    let area = frame.area();
                    let props = WeatherMapViewProps {
                        state,
                        is_focused: true,
                    };
                    view.render(frame, area, props);
                });
                if let Err(e) = drawn {
                    break Err(e);
                }
                redraw = false;
            }

            tokio::select! {
                Some(event) = input_rx.recv() => {
                    if let EventKind::Resize(..) = event {
                        redraw = true;
                    }
                    let props = WeatherMapViewProps {
                        state: &self.state,
                        is_focused: true,
                    };
                    for action in view.handle_event(&event, props) {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.next_action() => {
                    if let Action::Quit = action {
                        break Ok(());
                    }
                    redraw |= self.dispatch(action);
                }

                else => break Ok(()),
            }
        };

        stop.cancel();
        self.tasks.shutdown();
        let _ = reader.await;
        info!("Event loop stopped");

        result
    }
}

use crate::effect::{MountId, TaggedOutcome, run_effect};
use crate::error::{AppError, Result as AppErrorResult};
use crate::screens::{Navigation, Screen, ScreenResponse};
use crate::{Command, Effect, EffectOutcome, HELP};

use cp_services::ProfileRepository;
use cp_session::{Navigator, ScreenGraph};

use std::io::Write;

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What one [`App::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The gate switched graphs (or identities); the entry screen is mounted.
    Transitioned(ScreenGraph),
    /// An effect outcome was delivered to the mounted screen.
    Completed,
    /// An effect outcome arrived for a screen that is no longer mounted.
    Discarded,
    /// Session and splash can no longer change.
    Settled,
}

/// Terminal front end: mounts the screen the navigator points at, feeds it
/// commands and effect outcomes, and runs the effects it asks for.
pub struct App {
    repository: ProfileRepository,
    navigator: Navigator,
    screen: Screen,
    mount_id: MountId,
    current_year: i32,
    outcomes_tx: mpsc::UnboundedSender<TaggedOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<TaggedOutcome>,
    gate_live: bool,
    stale_outcomes: u64,
    output: Vec<String>,
}

impl App {
    /// Mounts the navigator's current screen. Must be called inside a
    /// Tokio runtime since mounting may spawn effects.
    pub fn new(repository: ProfileRepository, navigator: Navigator, current_year: i32) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        let (screen, response) =
            Screen::mount(navigator.current(), navigator.identity(), current_year);

        let mut app = Self {
            repository,
            navigator,
            screen,
            mount_id: 1,
            current_year,
            outcomes_tx,
            outcomes_rx,
            gate_live: true,
            stale_outcomes: 0,
            output: Vec::new(),
        };
        app.apply(response);
        app
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn mount_id(&self) -> MountId {
        self.mount_id
    }

    pub fn stale_outcomes(&self) -> u64 {
        self.stale_outcomes
    }

    /// Alerts and messages produced since the last call.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    /// Wait for the next gate transition or effect outcome and handle it.
    /// Cancel safe.
    pub async fn step(&mut self) -> Step {
        tokio::select! {
            graph = self.navigator.next_transition(), if self.gate_live => match graph {
                Some(graph) => {
                    self.mount();
                    Step::Transitioned(graph)
                }
                None => {
                    self.gate_live = false;
                    Step::Settled
                }
            },
            Some(tagged) = self.outcomes_rx.recv() => self.deliver(tagged),
            else => Step::Settled,
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Flow {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                self.output.push(e.to_string());
                return Flow::Continue;
            }
        };

        match command {
            Command::Quit => return Flow::Quit,
            Command::Help => self.output.push(HELP.to_string()),
            command => {
                let response = self.screen.handle(command);
                self.apply(response);
            }
        }
        Flow::Continue
    }

    /// Read commands from `input` until `quit` or end of input.
    pub async fn run<R>(mut self, input: R) -> AppErrorResult<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut stdout = std::io::stdout();
        self.print(&mut stdout)?;

        loop {
            tokio::select! {
                _ = self.step() => {}
                line = lines.next_line() => match line {
                    Ok(Some(line)) => {
                        if self.handle_line(&line) == Flow::Quit {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => return Err(AppError::io("Failed to read input", e)),
                },
            }
            self.print(&mut stdout)?;
        }

        info!("Input closed, leaving");
        Ok(())
    }

    fn deliver(&mut self, tagged: TaggedOutcome) -> Step {
        if tagged.mount_id != self.mount_id {
            if let Some(response) = self.late_registration(&tagged.outcome) {
                self.apply(response);
                return Step::Completed;
            }

            debug!(
                "Discarding outcome for unmounted screen {} (current {})",
                tagged.mount_id, self.mount_id
            );
            self.stale_outcomes += 1;
            return Step::Discarded;
        }

        let response = self.screen.complete(tagged.outcome);
        self.apply(response);
        Step::Completed
    }

    /// Signing up signs the new user in before the profile is written, so
    /// Home can mount (and read) ahead of the write. Hand it the late
    /// registration result instead of dropping it.
    fn late_registration(&mut self, outcome: &EffectOutcome) -> Option<ScreenResponse> {
        let (EffectOutcome::Registered(Ok(identity)), Screen::Home(home)) =
            (outcome, &mut self.screen)
        else {
            return None;
        };
        if home.identity() != identity {
            return None;
        }

        debug!("Registration of {} finished after Home mounted", identity.id);
        Some(home.registration_completed())
    }

    fn mount(&mut self) {
        self.mount_id += 1;
        let (screen, response) = Screen::mount(
            self.navigator.current(),
            self.navigator.identity(),
            self.current_year,
        );
        debug!("Mounted {} (#{})", screen.name(), self.mount_id);
        self.screen = screen;
        self.apply(response);
    }

    fn apply(&mut self, response: ScreenResponse) {
        if let Some(alert) = response.alert {
            self.output.push(alert.to_string());
        }

        if let Some(effect) = response.effect {
            self.spawn_effect(effect);
        }

        match response.navigation {
            Some(Navigation::To(route)) => match self.navigator.navigate(route) {
                Ok(()) => self.mount(),
                Err(e) => debug!("Navigation ignored: {e}"),
            },
            Some(Navigation::Back) => {
                if self.navigator.back() {
                    self.mount();
                }
            }
            None => {}
        }
    }

    fn spawn_effect(&self, effect: Effect) {
        let repository = self.repository.clone();
        let outcomes = self.outcomes_tx.clone();
        let mount_id = self.mount_id;

        tokio::spawn(async move {
            let outcome = run_effect(&repository, effect).await;
            // The receiver is gone only when the app is shutting down
            let _ = outcomes.send(TaggedOutcome { mount_id, outcome });
        });
    }

    fn print(&mut self, out: &mut impl Write) -> AppErrorResult<()> {
        let mut text = String::new();
        for line in self.take_output() {
            text.push_str(&line);
            text.push('\n');
        }
        text.push_str(&self.screen.render());
        text.push_str("> ");

        out.write_all(text.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| AppError::io("Failed to write to stdout", e))
    }
}

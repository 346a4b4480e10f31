//! The countdown widget.
//!
//! Two time fields, a start button and the remaining-time line, wired to a
//! [`Store`] and a [`Driver`]. Submitting validates both fields before any
//! event is dispatched; a rejected submission only sets the alert line.
//!
//! ```rust
//! use countdown_timer::app;
//! use countdown_timer::config::Settings;
//!
//! let settings = Settings {
//!     start: Some("10:00:00".to_string()),
//!     end: Some("10:30:00".to_string()),
//!     ..Settings::default()
//! };
//! let mut widget = app::Model::new(&settings);
//! assert!(widget.submit().is_some());
//! assert!(widget.state().started());
//! ```

use crate::button;
use crate::clock::ClockValue;
use crate::config::Settings;
use crate::display;
use crate::driver::{Driver, Phase, TickMsg};
use crate::error::CountdownError;
use crate::key::{self, Binding, KeyPress};
use crate::store::{CountdownConfig, CountdownState, Store};
use crate::timeinput;
use crate::Component;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Installs the settings read by [`BubbleTeaModel::init`].
///
/// Only the first call has an effect; later calls return `false`.
pub fn configure(settings: Settings) -> bool {
    SETTINGS.set(settings).is_ok()
}

/// Label of the start field.
pub const START_PROMPT: &str = "Start time: ";
/// Label of the end field.
pub const STOP_PROMPT: &str = "End time: ";

/// Which control receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The start time field.
    StartField,
    /// The end time field.
    StopField,
    /// The start button.
    Button,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::StartField => Focus::StopField,
            Focus::StopField => Focus::Button,
            Focus::Button => Focus::StartField,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::StartField => Focus::Button,
            Focus::StopField => Focus::StartField,
            Focus::Button => Focus::StopField,
        }
    }
}

/// Keys handled by the widget itself.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Focus the next control.
    pub next: Binding,
    /// Focus the previous control.
    pub prev: Binding,
    /// Submit the form from anywhere.
    pub start: Binding,
    /// Press the button while it has focus.
    pub press: Binding,
    /// Tear down and exit.
    pub quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            next: Binding::new(vec![KeyCode::Tab]).with_help("tab", "next"),
            prev: Binding::new(vec![
                KeyPress::from(KeyCode::BackTab),
                KeyPress::from((KeyCode::BackTab, KeyModifiers::SHIFT)),
            ])
            .with_help("shift+tab", "prev"),
            start: Binding::new(vec![KeyCode::Enter]).with_help("enter", "start"),
            press: Binding::new(vec![KeyCode::Char(' ')]),
            quit: Binding::new(vec![
                KeyPress::from(KeyCode::Esc),
                KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ])
            .with_help("esc", "quit"),
        }
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.next, &self.prev, &self.start, &self.quit]
    }
}

/// The countdown widget.
#[derive(Debug)]
pub struct Model {
    /// Start time field.
    pub start_input: timeinput::Model,
    /// End time field.
    pub stop_input: timeinput::Model,
    /// Submit button.
    pub button: button::Model,
    /// Remaining time line.
    pub display: display::Model,
    /// Widget-level keys.
    pub key_map: KeyMap,
    /// Style of the alert line.
    pub alert_style: Style,

    store: Store,
    driver: Driver,
    focus: Focus,
    alert: Option<CountdownError>,
}

impl Model {
    /// Builds the widget with the start field focused.
    pub fn new(settings: &Settings) -> Self {
        let mut start_input = timeinput::new().with_prompt(START_PROMPT);
        let mut stop_input = timeinput::new().with_prompt(STOP_PROMPT);
        if let Some(start) = &settings.start {
            start_input.set_value(start);
        }
        if let Some(end) = &settings.end {
            stop_input.set_value(end);
        }
        let _ = start_input.focus();

        Self {
            start_input,
            stop_input,
            button: button::Model::default(),
            display: display::Model::new(),
            key_map: KeyMap::default(),
            alert_style: Style::new().foreground(Color::from("9")).bold(true),
            store: Store::new(),
            driver: Driver::new(settings.interval),
            focus: Focus::StartField,
            alert: None,
        }
    }

    /// The countdown state.
    pub fn state(&self) -> &CountdownState {
        self.store.state()
    }

    /// The message of the last rejected submission, if it is still shown.
    pub fn alert(&self) -> Option<&CountdownError> {
        self.alert.as_ref()
    }

    /// Which control has focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether a countdown is ticking.
    pub fn running(&self) -> bool {
        self.driver.phase() == Phase::Running
    }

    /// Validates both fields and starts the countdown.
    ///
    /// A malformed field or a stop time before the start time sets the alert
    /// and leaves the state untouched.
    pub fn submit(&mut self) -> Option<Cmd> {
        let config = match self.read_config() {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    start = %self.start_input.value(),
                    stop = %self.stop_input.value(),
                    %err,
                    "countdown rejected"
                );
                self.alert = Some(err);
                return None;
            }
        };

        self.alert = None;
        Some(self.driver.start(&mut self.store, config))
    }

    /// Cancels any running countdown. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.driver.teardown();
    }

    fn read_config(&self) -> Result<CountdownConfig, CountdownError> {
        let start: ClockValue = self.start_input.parse()?;
        let stop: ClockValue = self.stop_input.parse()?;
        let config = CountdownConfig::new(start, stop);
        config.remaining()?;
        Ok(config)
    }

    fn set_focus(&mut self, focus: Focus) {
        self.component_mut(self.focus).blur();
        self.focus = focus;
        let _ = self.component_mut(focus).focus();
        debug!(?focus, "focus changed");
    }

    fn component_mut(&mut self, focus: Focus) -> &mut dyn Component {
        match focus {
            Focus::StartField => &mut self.start_input,
            Focus::StopField => &mut self.stop_input,
            Focus::Button => &mut self.button,
        }
    }

    /// Routes ticks to the driver and keys to the focused control.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.downcast_ref::<TickMsg>().is_some() {
            return self.driver.update(&msg, &mut self.store);
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.key_map.quit.matches(key_msg) {
            self.teardown();
            return Some(quit());
        }
        if self.key_map.next.matches(key_msg) {
            self.set_focus(self.focus.next());
            return None;
        }
        if self.key_map.prev.matches(key_msg) {
            self.set_focus(self.focus.prev());
            return None;
        }
        if self.key_map.start.matches(key_msg) {
            return self.submit();
        }

        match self.focus {
            Focus::StartField => self.start_input.update(&msg),
            Focus::StopField => self.stop_input.update(&msg),
            Focus::Button => {
                if self.key_map.press.matches(key_msg) {
                    return self.submit();
                }
            }
        }
        None
    }

    /// Renders the form, the remaining time, the alert and the help line.
    pub fn view(&self) -> String {
        let form = format!(
            "{}   {}   {}",
            self.start_input.view(),
            self.stop_input.view(),
            self.button.view()
        );
        let remaining = self.display.view(self.store.state().countdown().remaining());
        let alert = match &self.alert {
            Some(err) => self.alert_style.clone().inline(true).render(&err.to_string()),
            None => String::new(),
        };

        format!(
            "{}\n\n{}\n\n{}\n\n{}\n",
            form,
            remaining,
            alert,
            key::short_help_view(&self.key_map)
        )
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let settings = SETTINGS.get().cloned().unwrap_or_default();
        let mut model = Model::new(&settings);
        let cmd = if settings.autostart {
            model.submit()
        } else {
            None
        };
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}

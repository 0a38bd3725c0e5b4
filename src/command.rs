// Command: a remote control whose button is bound to swappable commands.

use crate::dispatch::Capability;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::debug;

pub trait Command {
    fn execute(&self) -> String;
    fn undo(&self) -> String;
}

impl Capability for dyn Command {
    type Input = ();
    type Output = String;

    fn invoke(&self, _input: ()) -> String {
        self.execute()
    }
}

// ============================================================================
// Receiver
// ============================================================================

pub struct Light {
    location: String,
    on: Cell<bool>,
}

impl Light {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            on: Cell::new(false),
        }
    }

    pub fn turn_on(&self) -> String {
        self.on.set(true);
        format!("{} light is ON", self.location)
    }

    pub fn turn_off(&self) -> String {
        self.on.set(false);
        format!("{} light is OFF", self.location)
    }

    pub fn is_on(&self) -> bool {
        self.on.get()
    }
}

// ============================================================================
// Concrete commands
// ============================================================================

pub struct LightOnCommand {
    light: Rc<Light>,
}

impl LightOnCommand {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self) -> String {
        self.light.turn_on()
    }

    fn undo(&self) -> String {
        self.light.turn_off()
    }
}

pub struct LightOffCommand {
    light: Rc<Light>,
}

impl LightOffCommand {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self) -> String {
        self.light.turn_off()
    }

    fn undo(&self) -> String {
        self.light.turn_on()
    }
}

// ============================================================================
// Invoker
// ============================================================================

/// Undo depth kept by [`RemoteControl::new`].
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Holds one bound command and the most recent executions for undo. Once
/// `history_limit` entries are kept, each press drops the oldest.
pub struct RemoteControl {
    slot: Option<Rc<dyn Command>>,
    history: VecDeque<Rc<dyn Command>>,
    history_limit: usize,
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// A limit of 0 disables undo.
    pub fn with_history_limit(history_limit: usize) -> Self {
        Self {
            slot: None,
            history: VecDeque::with_capacity(history_limit.min(DEFAULT_HISTORY_LIMIT)),
            history_limit,
        }
    }

    pub fn set_command(&mut self, command: Rc<dyn Command>) {
        self.slot = Some(command);
    }

    /// Runs the bound command. `None` when nothing is bound yet.
    pub fn press_button(&mut self) -> Option<String> {
        let command = self.slot.as_ref()?;
        let output = command.execute();
        debug!(output = %output, "button pressed");
        if self.history_limit > 0 {
            if self.history.len() == self.history_limit {
                self.history.pop_front();
            }
            self.history.push_back(Rc::clone(command));
        }
        Some(output)
    }

    /// Reverts the most recently executed command.
    pub fn press_undo(&mut self) -> Option<String> {
        let command = self.history.pop_back()?;
        let output = command.undo();
        debug!(output = %output, "undo pressed");
        Some(output)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn demo() {
    let light = Rc::new(Light::new("Living room"));
    let mut remote = RemoteControl::new();

    remote.set_command(Rc::new(LightOnCommand::new(Rc::clone(&light))));
    if let Some(output) = remote.press_button() {
        println!("Press: {output}");
    }

    remote.set_command(Rc::new(LightOffCommand::new(Rc::clone(&light))));
    if let Some(output) = remote.press_button() {
        println!("Press: {output}");
    }

    while let Some(output) = remote.press_undo() {
        println!("Undo:  {output}");
    }
}

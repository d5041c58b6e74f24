//! Raw input events and their translation into simulation commands.

mod macroquad_source;

pub use macroquad_source::MacroquadEvents;

/// Key identity as delivered by the event source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    /// Printable key, lower-case; space is `' '`
    Char(char),
    /// Any key this program has no name for
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Backend-independent input event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawEvent {
    PointerDown {
        x: f32,
        y: f32,
        button: PointerButton,
    },
    KeyReleased(Key),
    QuitRequested,
}

/// Commands that change the loop or the whole grid; applied as soon as they are classified
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCommand {
    Quit,
    TogglePause,
    Reset,
}

/// Commands applied during the simulation-input pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationCommand {
    ToggleCellAt { x: i32, y: i32 },
}

/// Outcome of classifying one raw event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Translation {
    Control(ControlCommand),
    /// Kept for the simulation-input pass
    Deferred(RawEvent),
}

/// Keys reserved for loop control. Escape always quits in addition to `quit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    pub quit: Key,
    pub pause: Key,
    pub reset: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: Key::Char('q'),
            pause: Key::Char(' '),
            reset: Key::Char('r'),
        }
    }
}

/// Source of raw events, drained once per frame
pub trait EventSource {
    /// Append every event that arrived since the last poll
    fn poll(&mut self, out: &mut Vec<RawEvent>);
}

/// Maps raw events to commands. Holds only the key bindings.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputTranslator {
    bindings: KeyBindings,
}

impl InputTranslator {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn translate(&self, event: RawEvent) -> Translation {
        match event {
            RawEvent::QuitRequested => Translation::Control(ControlCommand::Quit),
            RawEvent::KeyReleased(key) => match self.control_for_key(key) {
                Some(command) => Translation::Control(command),
                None => Translation::Deferred(event),
            },
            RawEvent::PointerDown { .. } => Translation::Deferred(event),
        }
    }

    fn control_for_key(&self, key: Key) -> Option<ControlCommand> {
        if key == Key::Escape || key == self.bindings.quit {
            Some(ControlCommand::Quit)
        } else if key == self.bindings.pause {
            Some(ControlCommand::TogglePause)
        } else if key == self.bindings.reset {
            Some(ControlCommand::Reset)
        } else {
            None
        }
    }

    /// Simulation command for a deferred event, if it has one
    pub fn simulation_command(&self, event: &RawEvent) -> Option<SimulationCommand> {
        match *event {
            RawEvent::PointerDown {
                x,
                y,
                button: PointerButton::Primary,
            } => Some(SimulationCommand::ToggleCellAt {
                x: x.floor() as i32,
                y: y.floor() as i32,
            }),
            _ => None,
        }
    }
}

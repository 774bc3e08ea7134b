use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Control bytes the editor reacts to
#[derive(Debug, Eq, PartialEq, Copy, Clone, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ControlCharacter {
    CtrlH = 0x8,
    Tab = 0x9,
    LineFeed = 0xA,
    CarriageReturn = 0xD,
    Escape = 0x1B,
    Backspace = 0x7F,
}

impl ControlCharacter {
    fn new(byte: u8) -> Option<Self> {
        Self::try_from(byte).ok()
    }
}

/// Arrow key decoded from `ESC [ A..D`
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arrow {
    Up,
    Down,
    Right,
    Left,
}

impl Arrow {
    fn new(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Arrow::Up),
            b'B' => Some(Arrow::Down),
            b'C' => Some(Arrow::Right),
            b'D' => Some(Arrow::Left),
            _ => None,
        }
    }
}

/// What a single input byte means to the editor
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Byte was consumed, or is not something the editor handles
    Ignore,
    /// Printable ASCII, `0x20..=0x7e`
    Print(u8),
    ControlCharacter(ControlCharacter),
    Arrow(Arrow),
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
enum State {
    Idle,
    SawEscape,
    SawBracket,
}

/// Escape sequence recognizer
///
/// Sits in front of every other byte handler and swallows the bytes of
/// `ESC [ x` sequences. Only the four arrow keys are recognized,
/// anything else returns to idle without an action.
pub struct Parser {
    state: State,
}

impl Parser {
    pub const fn new() -> Self {
        Self { state: State::Idle }
    }

    pub fn reset(&mut self) {
        self.state = State::Idle;
    }

    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    pub fn advance(&mut self, byte: u8) -> Action {
        match self.state {
            State::Idle => match byte {
                0x1b => {
                    self.state = State::SawEscape;
                    Action::Ignore
                }
                0x20..=0x7e => Action::Print(byte),
                _ => ControlCharacter::new(byte)
                    .map(Action::ControlCharacter)
                    .unwrap_or(Action::Ignore),
            },
            State::SawEscape => {
                self.state = if byte == b'[' {
                    State::SawBracket
                } else {
                    State::Idle
                };
                Action::Ignore
            }
            State::SawBracket => {
                self.state = State::Idle;
                Arrow::new(byte).map(Action::Arrow).unwrap_or(Action::Ignore)
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

//! Data-level keypad: the button table and input decoding.
//!
//! The pad is modeled as data — actions, stable element ids, grid
//! positions — so routing can be exercised without any UI toolkit. Hosts
//! that do render buttons look their clicks up here by id.

use crate::core::Operator;

/// The typed meaning of one button press or key-up event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadAction {
    /// Type a digit (0-9).
    Digit(u8),
    /// Type the decimal point.
    Decimal,
    /// Select an operator.
    Operator(Operator),
    /// Apply the pending operation.
    Equals,
    /// Remove the last typed character.
    Delete,
    /// Reset the calculation.
    AllClear,
}

impl PadAction {
    /// The character this action types, when it types one.
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(_) | Self::Equals | Self::Delete | Self::AllClear => None,
        }
    }

    /// The label the button carries.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::AllClear => "AC".to_string(),
        }
    }
}

/// One keypad button: an action at a grid position with a stable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDef {
    /// The action this button performs.
    pub action: PadAction,
    /// The element id hosts attach to the rendered button.
    pub id: String,
    /// Grid row (0-indexed, top first).
    pub row: usize,
    /// Grid column (0-indexed).
    pub col: usize,
}

impl ButtonDef {
    /// Creates a button definition with its canonical id.
    #[must_use]
    pub fn new(action: PadAction, row: usize, col: usize) -> Self {
        let id = match action {
            PadAction::Digit(d) => format!("btn-{d}"),
            PadAction::Decimal => "btn-decimal".to_string(),
            PadAction::Operator(op) => format!("btn-{}", op_name(op)),
            PadAction::Equals => "btn-equals".to_string(),
            PadAction::Delete => "btn-delete".to_string(),
            PadAction::AllClear => "btn-all-clear".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }
}

/// Returns a name for an operator (for element ids).
fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Divide => "divide",
        Operator::Multiply => "times",
        Operator::Add => "plus",
        Operator::Subtract => "minus",
    }
}

/// The calculator pad.
///
/// Layout:
/// ```text
/// [ AC  ] [ DEL ] [  ÷  ]
/// [  7  ] [  8  ] [  9  ] [  *  ]
/// [  4  ] [  5  ] [  6  ] [  -  ]
/// [  1  ] [  2  ] [  3  ] [  +  ]
/// [  0  ] [  .  ] [  =  ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<ButtonDef>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard pad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: AC DEL ÷
            ButtonDef::new(PadAction::AllClear, 0, 0),
            ButtonDef::new(PadAction::Delete, 0, 1),
            ButtonDef::new(PadAction::Operator(Operator::Divide), 0, 2),
            // Row 1: 7 8 9 *
            ButtonDef::new(PadAction::Digit(7), 1, 0),
            ButtonDef::new(PadAction::Digit(8), 1, 1),
            ButtonDef::new(PadAction::Digit(9), 1, 2),
            ButtonDef::new(PadAction::Operator(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 -
            ButtonDef::new(PadAction::Digit(4), 2, 0),
            ButtonDef::new(PadAction::Digit(5), 2, 1),
            ButtonDef::new(PadAction::Digit(6), 2, 2),
            ButtonDef::new(PadAction::Operator(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            ButtonDef::new(PadAction::Digit(1), 3, 0),
            ButtonDef::new(PadAction::Digit(2), 3, 1),
            ButtonDef::new(PadAction::Digit(3), 3, 2),
            ButtonDef::new(PadAction::Operator(Operator::Add), 3, 3),
            // Row 4: 0 . =
            ButtonDef::new(PadAction::Digit(0), 4, 0),
            ButtonDef::new(PadAction::Decimal, 4, 1),
            ButtonDef::new(PadAction::Equals, 4, 2),
        ];
        Self { buttons }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// All button definitions.
    #[must_use]
    pub fn buttons(&self) -> &[ButtonDef] {
        &self.buttons
    }

    /// Finds a button by element id.
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by grid position. The grid is ragged; empty cells
    /// return `None`.
    #[must_use]
    pub fn find_button_at(&self, row: usize, col: usize) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Decodes a button click by element id.
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<PadAction> {
        self.find_button_by_id(element_id).map(|b| b.action)
    }

    /// Maps a keyboard key-up name to a pad action.
    ///
    /// `/` is translated to the division operator since the division glyph
    /// is not a standard key. Unrecognized keys map to `None`.
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<PadAction> {
        match key {
            "0" => Some(PadAction::Digit(0)),
            "1" => Some(PadAction::Digit(1)),
            "2" => Some(PadAction::Digit(2)),
            "3" => Some(PadAction::Digit(3)),
            "4" => Some(PadAction::Digit(4)),
            "5" => Some(PadAction::Digit(5)),
            "6" => Some(PadAction::Digit(6)),
            "7" => Some(PadAction::Digit(7)),
            "8" => Some(PadAction::Digit(8)),
            "9" => Some(PadAction::Digit(9)),
            "." => Some(PadAction::Decimal),
            "/" => Some(PadAction::Operator(Operator::Divide)),
            "*" => Some(PadAction::Operator(Operator::Multiply)),
            "+" => Some(PadAction::Operator(Operator::Add)),
            "-" => Some(PadAction::Operator(Operator::Subtract)),
            "Enter" => Some(PadAction::Equals),
            "Backspace" | "Delete" => Some(PadAction::Delete),
            "Escape" => Some(PadAction::AllClear),
            _ => None,
        }
    }
}

//! Tallypad — a two-operand calculator engine.
//!
//! The engine behind a browser-style calculator: digit and operator input
//! arrives as button clicks or keyboard key-up events, a small state
//! machine holds the running calculation, and a display projection is
//! re-rendered after every mutation. A history panel keeps an ordered,
//! user-deletable list of saved results and mirrors the newest one into a
//! single-slot key-value store.
//!
//! The browser surfaces themselves (DOM, styling, real local storage) are
//! not part of the crate; they plug in behind the [`display::DisplaySink`]
//! and [`store::SlotStore`] traits.
//!
//! Invalid input never errors out to the user: malformed edits, premature
//! equals presses, and the zero right-operand guard are all absorbed as
//! silent no-ops, so the display survives any input sequence.
//!
//! # Example
//!
//! ```rust
//! use tallypad::prelude::*;
//!
//! let mut session = CalculatorSession::new(RecordingDisplay::new(), MemoryStore::new());
//!
//! // Keyboard input, browser key names
//! session.key_up("5");
//! session.key_up("+");
//! session.key_up("3");
//! session.key_up("Enter");
//! assert_eq!(session.calculator().current_operand(), "8");
//!
//! // Save the result into the history panel
//! assert!(session.save_result());
//! assert_eq!(session.store().read(LAST_RESULT_KEY), Some("8".to_string()));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod display;
pub mod history;
pub mod keypad;
pub mod router;
pub mod session;
pub mod store;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{Calculator, Operand, Operator, Rejection};
    pub use crate::display::{DisplayFrame, DisplaySink, RecordingDisplay};
    pub use crate::history::{HistoryEntry, HistoryPanel, DELETE_AFFORDANCE};
    pub use crate::keypad::{ButtonDef, Keypad, PadAction};
    pub use crate::router::InputRouter;
    pub use crate::session::CalculatorSession;
    pub use crate::store::{MemoryStore, SlotStore, LAST_RESULT_KEY};
}

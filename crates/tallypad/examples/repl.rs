//! Interactive calculator demo.
//!
//! Reads one input per line: a browser key name (`Enter`, `Escape`,
//! `Backspace`) or a run of calculator characters (`12+34`). The commands
//! `save`, `recall`, `history`, and `quit` drive the history panel.
//!
//! Run with `RUST_LOG=tallypad=debug` to watch absorbed inputs.

use std::io::{self, BufRead};

use tallypad::prelude::*;

/// Prints each frame as the two display lines.
#[derive(Debug, Default)]
struct StdoutDisplay;

impl DisplaySink for StdoutDisplay {
    fn render(&mut self, frame: DisplayFrame) {
        println!("  ┌──────────────────────┐");
        println!("  │ {:>20} │", frame.secondary);
        println!("  │ {:>20} │", frame.primary);
        println!("  └──────────────────────┘");
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut session = CalculatorSession::new(StdoutDisplay, MemoryStore::new());
    println!("keys: digits . + - * /  |  Enter = equals, Escape = clear, Backspace = delete");
    println!("commands: save, recall, history, quit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "" => {}
            "quit" | "q" => break,
            "save" => {
                if session.save_result() {
                    println!("saved {}", session.calculator().current_operand());
                } else {
                    println!("nothing to save");
                }
            }
            "recall" => session.recall_last(),
            "history" => {
                if session.history().placeholder_visible() {
                    println!("{}", HistoryPanel::EMPTY_PLACEHOLDER);
                }
                for (i, entry) in session.history().entries().iter().enumerate() {
                    println!("  {i}: {}", entry.display_text);
                }
            }
            key => {
                // A multi-character line that isn't a key name is treated
                // as characters typed in order.
                if !session.key_up(key) {
                    for ch in key.chars() {
                        session.key_up(&ch.to_string());
                    }
                }
            }
        }
    }
    Ok(())
}

//! The two-operand calculation state machine.

use super::{Operand, Operator, Rejection};

/// Running state of one calculation.
///
/// Two states, really: idle (no operator chosen) and pending (operator
/// chosen, left operand stored). Callers mutate through the five input
/// operations and re-render afterwards. No method panics; invalid input is
/// reported as a [`Rejection`] and the state left untouched, so any input
/// sequence is survivable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    current: Operand,
    previous: Operand,
    operation: Option<Operator>,
}

impl Calculator {
    /// Creates a calculator in the cleared state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The operand being typed, verbatim.
    #[must_use]
    pub fn current_operand(&self) -> &str {
        self.current.as_str()
    }

    /// The stored left-hand operand; empty unless an operation is pending.
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        self.previous.as_str()
    }

    /// The pending operator, if one has been selected.
    #[must_use]
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// Appends a digit or decimal point to the current operand.
    pub fn append_digit(&mut self, digit: char) -> Result<(), Rejection> {
        self.current.append(digit)
    }

    /// Removes the last character of the current operand. Never touches
    /// the stored operand or the pending operator.
    pub fn delete_digit(&mut self) {
        self.current.delete_last();
    }

    /// Selects the operator for the next computation.
    ///
    /// On an empty buffer, subtraction is reinterpreted as a literal
    /// leading minus so negative numbers can be entered (the operator
    /// stays unset); any other operator on an empty buffer is rejected.
    /// An already-pending operation is collapsed first, left to right with
    /// no precedence; the new operator takes over whether or not that
    /// collapse succeeded.
    pub fn select_operation(&mut self, op: Operator) -> Result<(), Rejection> {
        if self.current.is_empty() {
            if op == Operator::Subtract {
                return self.current.append('-');
            }
            return Err(Rejection::NoOperation);
        }
        if !self.previous.is_empty() {
            let _ = self.calculate();
        }
        self.operation = Some(op);
        self.previous = std::mem::take(&mut self.current);
        Ok(())
    }

    /// Applies the pending operator to the stored and current operands.
    ///
    /// On success the current operand becomes the stringified result and
    /// the pending state clears. Rejected with the state unchanged when
    /// either operand fails to parse, when no operator is pending, or when
    /// the right-hand operand is exactly zero. The zero guard fires for
    /// every operator, not only division; `5 + 0` is silently refused.
    pub fn calculate(&mut self) -> Result<(), Rejection> {
        let (Some(lhs), Some(rhs)) = (self.previous.value(), self.current.value()) else {
            return Err(Rejection::NoOperation);
        };
        if rhs == 0.0 {
            return Err(Rejection::ZeroOperand);
        }
        let Some(op) = self.operation else {
            return Err(Rejection::NoOperation);
        };
        self.current.set_value(op.apply(lhs, rhs));
        self.previous.clear();
        self.operation = None;
        Ok(())
    }

    /// Resets every field to the cleared state, from any prior state.
    pub fn all_clear(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.operation = None;
    }
}

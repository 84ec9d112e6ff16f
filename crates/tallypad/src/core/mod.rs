//! Core calculator state: operators, rejection reasons, and the
//! two-operand machine.

pub mod operand;
pub mod state;

pub use operand::Operand;
pub use state::Calculator;

use thiserror::Error;

/// Why an input was absorbed as a no-op.
///
/// Nothing here ever reaches the user: the router and session swallow every
/// rejection, so the only observable effect of an invalid action is that
/// nothing happened. The variants exist so tests and logs can tell the
/// no-op paths apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The edit would leave the operand text malformed (second decimal
    /// point, repeated leading zero, foreign character).
    #[error("invalid operand edit")]
    InvalidInput,
    /// An operand or the operator is missing.
    #[error("no computable operation")]
    NoOperation,
    /// The right-hand operand is zero at calculate time.
    #[error("right-hand operand is zero")]
    ZeroOperand,
}

/// The four supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Division (÷)
    Divide,
    /// Multiplication (*)
    Multiply,
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
}

impl Operator {
    /// Returns the symbol shown on the pending display line.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Divide => "÷",
            Self::Multiply => "*",
            Self::Add => "+",
            Self::Subtract => "-",
        }
    }

    /// Parses a button or key symbol.
    ///
    /// `/` and `×` are accepted as aliases since the division glyph has no
    /// standard key and multiply buttons commonly carry the times sign.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "÷" | "/" => Some(Self::Divide),
            "*" | "×" => Some(Self::Multiply),
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            _ => None,
        }
    }

    /// Applies the operator with `lhs` on the left.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Divide => lhs / rhs,
            Self::Multiply => lhs * rhs,
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Rejection tests =====

    #[test]
    fn test_rejection_display_invalid_input() {
        assert_eq!(format!("{}", Rejection::InvalidInput), "invalid operand edit");
    }

    #[test]
    fn test_rejection_display_no_operation() {
        assert_eq!(format!("{}", Rejection::NoOperation), "no computable operation");
    }

    #[test]
    fn test_rejection_display_zero_operand() {
        assert_eq!(
            format!("{}", Rejection::ZeroOperand),
            "right-hand operand is zero"
        );
    }

    #[test]
    fn test_rejection_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(Rejection::ZeroOperand);
        assert!(err.to_string().contains("zero"));
    }

    // ===== Operator tests =====

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Divide.symbol(), "÷");
        assert_eq!(Operator::Multiply.symbol(), "*");
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
    }

    #[test]
    fn test_operator_from_symbol_glyphs() {
        assert_eq!(Operator::from_symbol("÷"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("+"), Some(Operator::Add));
        assert_eq!(Operator::from_symbol("-"), Some(Operator::Subtract));
    }

    #[test]
    fn test_operator_from_symbol_aliases() {
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("−"), Some(Operator::Subtract));
    }

    #[test]
    fn test_operator_from_symbol_unknown() {
        assert_eq!(Operator::from_symbol("%"), None);
        assert_eq!(Operator::from_symbol(""), None);
        assert_eq!(Operator::from_symbol("plus"), None);
    }

    #[test]
    fn test_operator_symbol_round_trip() {
        for op in [
            Operator::Divide,
            Operator::Multiply,
            Operator::Add,
            Operator::Subtract,
        ] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_operator_apply_divide() {
        assert_eq!(Operator::Divide.apply(6.0, 2.0), 3.0);
    }

    #[test]
    fn test_operator_apply_multiply() {
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), 42.0);
    }

    #[test]
    fn test_operator_apply_add() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
    }

    #[test]
    fn test_operator_apply_subtract() {
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
    }

    #[test]
    fn test_operator_apply_left_operand_first() {
        // previous is always the left operand
        assert_eq!(Operator::Divide.apply(10.0, 2.0), 5.0);
        assert_eq!(Operator::Subtract.apply(10.0, 2.0), 8.0);
    }
}

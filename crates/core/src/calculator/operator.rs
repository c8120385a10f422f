use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Binary operator on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `×`
    Multiply,
    /// `÷`
    Divide,
    /// `%`: `a % b` is `b` percent of `a`.
    Percent,
}

impl Operator {
    /// Keypad symbol.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Percent => '%',
        }
    }

    /// Parses a keypad symbol. `*`, `x` and `/` are accepted as aliases.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' | 'x' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            '%' => Some(Self::Percent),
            _ => None,
        }
    }

    /// Applies the operator.
    ///
    /// Division by zero and overflow both yield zero.
    #[must_use]
    pub fn apply(self, lhs: Decimal, rhs: Decimal) -> Decimal {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => lhs.checked_div(rhs),
            Self::Percent => lhs
                .checked_mul(rhs)
                .and_then(|p| p.checked_div(Decimal::ONE_HUNDRED)),
        };
        result.unwrap_or(Decimal::ZERO)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(Operator::Add, dec!(0.1), dec!(0.2), dec!(0.3))]
    #[case(Operator::Subtract, dec!(5000), dec!(7500), dec!(-2500))]
    #[case(Operator::Multiply, dec!(1500), dec!(12), dec!(18000))]
    #[case(Operator::Divide, dec!(10), dec!(4), dec!(2.5))]
    #[case(Operator::Divide, dec!(10), dec!(0), dec!(0))]
    #[case(Operator::Percent, dec!(200), dec!(15), dec!(30))]
    fn test_apply(
        #[case] op: Operator,
        #[case] lhs: Decimal,
        #[case] rhs: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(op.apply(lhs, rhs), expected);
    }

    #[test]
    fn test_overflow_yields_zero() {
        assert_eq!(Operator::Multiply.apply(Decimal::MAX, dec!(2)), Decimal::ZERO);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('='), None);
        assert_eq!(Operator::Divide.to_string(), "÷");
    }
}

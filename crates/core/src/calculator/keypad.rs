use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use super::operator::Operator;

/// Calculator state between key presses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculator {
    display: String,
    previous: Option<Decimal>,
    pending: Option<Operator>,
    waiting_for_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous: None,
            pending: None,
            waiting_for_operand: false,
        }
    }
}

impl Calculator {
    /// A cleared calculator showing `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The `previous op` line above the display, if an operation is pending.
    #[must_use]
    pub fn expression(&self) -> Option<String> {
        let previous = self.previous?;
        Some(match self.pending {
            Some(op) => format!("{} {op}", previous.normalize()),
            None => previous.normalize().to_string(),
        })
    }

    /// Current display as a number. Partial input such as `-` reads as zero.
    #[must_use]
    pub fn value(&self) -> Decimal {
        Decimal::from_str(self.display.trim_end_matches('.')).unwrap_or(Decimal::ZERO)
    }

    /// Presses a digit key. Non-digits are ignored.
    pub fn digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    /// Presses the decimal point.
    pub fn decimal_point(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Resets everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Removes the last character of the display.
    pub fn backspace(&mut self) {
        self.display.pop();
        if self.display.is_empty() {
            self.display.push('0');
        }
    }

    /// Presses an operator key, folding any pending operation first.
    pub fn operator(&mut self, next: Operator) {
        let input = self.value();

        match (self.previous, self.pending) {
            (None, _) => self.previous = Some(input),
            (Some(previous), Some(op)) => {
                let result = op.apply(previous, input);
                self.display = render(result);
                self.previous = Some(result);
            }
            (Some(_), None) => {}
        }

        self.waiting_for_operand = true;
        self.pending = Some(next);
    }

    /// Presses `=`. Does nothing unless an operation is pending.
    pub fn equals(&mut self) {
        let (Some(previous), Some(op)) = (self.previous, self.pending) else {
            return;
        };

        self.display = render(op.apply(previous, self.value()));
        self.previous = None;
        self.pending = None;
        self.waiting_for_operand = true;
    }

    /// Feeds a sequence of keys: digits, `.`, operators, `=`, `C` and `<`
    /// (backspace). Unknown keys are skipped.
    pub fn press_all(&mut self, keys: &str) -> &str {
        for key in keys.chars() {
            match key {
                '0'..='9' => self.digit(key),
                '.' => self.decimal_point(),
                '=' => self.equals(),
                'C' | 'c' => self.clear(),
                '<' => self.backspace(),
                other => {
                    if let Some(op) = Operator::from_symbol(other) {
                        self.operator(op);
                    }
                }
            }
        }
        self.display()
    }
}

fn render(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12+30=", "42")]
    #[case("5000-7500=", "-2500")]
    #[case("1.5×4=", "6")]
    #[case("10÷4=", "2.5")]
    #[case("10÷0=", "0")]
    #[case("200%15=", "30")]
    #[case("2+3×4=", "20")]
    #[case("0.1+0.2=", "0.3")]
    fn test_sequences(#[case] keys: &str, #[case] expected: &str) {
        assert_eq!(Calculator::new().press_all(keys), expected);
    }

    #[test]
    fn test_chained_operator_shows_running_total() {
        let mut calc = Calculator::new();
        calc.press_all("2+3+");
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.expression().as_deref(), Some("5 +"));
    }

    #[test]
    fn test_leading_zero_replaced() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press_all("007"), "7");
    }

    #[test]
    fn test_decimal_point_once() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press_all("1..5."), "1.5");
    }

    #[test]
    fn test_decimal_point_after_operator_starts_fresh() {
        let mut calc = Calculator::new();
        calc.press_all("3+");
        calc.decimal_point();
        assert_eq!(calc.display(), "0.");
        assert_eq!(calc.press_all("5="), "3.5");
    }

    #[test]
    fn test_backspace() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press_all("123<"), "12");
        assert_eq!(calc.press_all("<<<"), "0");
    }

    #[test]
    fn test_clear_resets_state() {
        let mut calc = Calculator::new();
        calc.press_all("9×");
        calc.clear();
        assert_eq!(calc, Calculator::new());
        assert!(calc.expression().is_none());
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press_all("42="), "42");
    }

    #[test]
    fn test_result_feeds_next_operation() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press_all("6×7=+8="), "50");
    }

    #[test]
    fn test_digit_after_equals_starts_new_number() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press_all("1+1=9"), "9");
    }
}

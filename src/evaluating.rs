use crate::error_handling::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl BinaryOperator {
    pub fn precedence(&self) -> i32 {
        use BinaryOperator::*;
        match self {
            Addition | Subtraction => 1,
            Multiplication | Division => 2,
        }
    }

    pub fn call(&self, left: i32, right: i32) -> Result<i32> {
        use BinaryOperator::*;
        let result = match self {
            Addition => left.checked_add(right),
            Subtraction => left.checked_sub(right),
            Multiplication => left.checked_mul(right),
            Division => {
                if right == 0 {
                    return Err(ToyError::DivisionByZero);
                }
                left.checked_div(right)
            },
        };
        result.ok_or(ToyError::Overflow)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::*;
        let symbol = match self {
            Addition => "+",
            Subtraction => "-",
            Multiplication => "*",
            Division => "/",
        };
        write!(f, "{symbol}")
    }
}

/// The operand stack of the evaluator.
#[derive(Default)]
pub struct Slots {
    values: Vec<i32>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: i32) {
        self.values.push(value);
    }

    /// Pops the right-hand then the left-hand operand and pushes the result.
    pub fn apply(&mut self, operator: BinaryOperator) -> Result<()> {
        let right = self.values.pop().ok_or(ToyError::AbruptEnd)?;
        let left = self.values.pop().ok_or(ToyError::AbruptEnd)?;
        let result = operator.call(left, right)?;
        log::trace!("{left} {operator} {right} = {result}");
        self.values.push(result);
        Ok(())
    }

    pub fn finish(mut self) -> Result<i32> {
        match (self.values.pop(), self.values.is_empty()) {
            (Some(result), true) => Ok(result),
            (Some(extra), false) => Err(ToyError::DidNotExpect(extra.to_string())),
            (None, _) => Err(ToyError::AbruptEnd),
        }
    }
}

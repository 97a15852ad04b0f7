use crate::error_handling::*;
use crate::evaluating::*;
use crate::scanning::*;
use crate::variables::Variables;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    Negative,
    Positive,
}

impl UnaryOperator {
    // a sign is applied as `0 - x` or `0 + x`
    fn desugared(&self) -> BinaryOperator {
        match self {
            UnaryOperator::Negative => BinaryOperator::Subtraction,
            UnaryOperator::Positive => BinaryOperator::Addition,
        }
    }
}

#[derive(Debug)]
enum StackNode {
    Unary(UnaryOperator),
    Binary(BinaryOperator),
    Paren,
}

impl StackNode {
    fn precedence(&self) -> i32 {
        match self {
            StackNode::Paren => 0,
            StackNode::Binary(operator) => operator.precedence(),
            StackNode::Unary(_) => 3,
        }
    }
}

/// Two-stack shunting yard that evaluates as it goes.
///
/// `is_edge` is true wherever an operand is expected: at the start, after `(`
/// and after any operator. A `+` or `-` seen there is a sign.
pub struct Yard<'a> {
    slots: Slots,
    stack: Vec<StackNode>,
    is_edge: bool,
    variables: &'a Variables,
}

impl<'a> Yard<'a> {
    pub fn new(variables: &'a Variables) -> Self {
        Self{slots: Slots::new(), stack: Vec::new(), is_edge: true, variables}
    }

    fn reduce(&mut self, node: StackNode) -> Result<()> {
        match node {
            StackNode::Unary(operator) => self.slots.apply(operator.desugared()),
            StackNode::Binary(operator) => self.slots.apply(operator),
            StackNode::Paren => Err(ToyError::UnmatchedParen('(')),
        }
    }

    fn pop_higher_operator(&mut self, precedence: i32) -> Option<StackNode> {
        let higher = self.stack
            .last()
            .filter(|node| !matches!(node, StackNode::Paren) && node.precedence() >= precedence)
            .is_some();
        if higher {
            self.stack.pop()
        } else {
            None
        }
    }

    fn add_number(&mut self, value: i32) {
        self.slots.push(value);
        self.is_edge = false;
    }

    fn add_sign(&mut self, operator: UnaryOperator) {
        self.slots.push(0);
        self.stack.push(StackNode::Unary(operator));
    }

    fn add_operator(&mut self, operator: BinaryOperator) -> Result<()> {
        while let Some(node) = self.pop_higher_operator(operator.precedence()) {
            self.reduce(node)?;
        }
        self.stack.push(StackNode::Binary(operator));
        self.is_edge = true;
        Ok(())
    }

    fn add_left_paren(&mut self) {
        self.stack.push(StackNode::Paren);
    }

    fn add_right_paren(&mut self) -> Result<()> {
        while let Some(node) = self.stack.pop() {
            if let StackNode::Paren = node {
                return Ok(());
            }
            self.reduce(node)?;
        }
        Err(ToyError::UnmatchedParen(')'))
    }

    fn handle_edge(&mut self, token: &Token) -> Result<()> {
        use BinaryOperator::*;
        match token {
            Token::Literal(value) => self.add_number(*value),
            Token::Identifier(name) => {
                let value = self.variables
                    .get(name)
                    .ok_or_else(|| ToyError::Undefined(name.clone()))?;
                self.add_number(value);
            },
            Token::Punctuation(Punctuation::Open) => self.add_left_paren(),
            Token::Operator(Addition) => self.add_sign(UnaryOperator::Positive),
            Token::Operator(Subtraction) => self.add_sign(UnaryOperator::Negative),
            _ => return Err(ToyError::DidNotExpect(token.to_string())),
        }
        Ok(())
    }

    fn handle_middle(&mut self, token: &Token) -> Result<()> {
        match token {
            Token::Operator(operator) => self.add_operator(*operator),
            Token::Punctuation(Punctuation::Close) => self.add_right_paren(),
            _ => Err(ToyError::DidNotExpect(token.to_string())),
        }
    }

    pub fn push(&mut self, token: &Token) -> Result<()> {
        if self.is_edge {
            self.handle_edge(token)
        } else {
            self.handle_middle(token)
        }
    }

    pub fn finish(mut self) -> Result<i32> {
        if self.is_edge {
            return Err(ToyError::AbruptEnd);
        }
        while let Some(node) = self.stack.pop() {
            self.reduce(node)?;
        }
        self.slots.finish()
    }
}

pub fn evaluate(tokens: &[Token], variables: &Variables) -> Result<i32> {
    let mut yard = Yard::new(variables);
    for token in tokens {
        yard.push(token)?;
    }
    yard.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(expression: &str) -> Result<i32> {
        let mut variables = Variables::new();
        variables.set("x", 2);
        variables.set("y", 5);
        let tokens = scan(expression, &variables)?;
        evaluate(&tokens, &variables)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(calc("2 + 3 * 4"), Ok(14));
        assert_eq!(calc("2 * 3 + 4"), Ok(10));
        assert_eq!(calc("(2 + 3) * 4"), Ok(20));
        assert_eq!(calc("7 + 3 * (10 / (12 / (3 + 1) - 1))"), Ok(22));
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(calc("10 - 4 - 3"), Ok(3));
        assert_eq!(calc("100 / 10 / 5"), Ok(2));
        assert_eq!(calc("8 / 2 * 4"), Ok(16));
    }

    #[test]
    fn test_variables() {
        assert_eq!(calc("x * y - 1"), Ok(9));
        assert_eq!(calc("(x)"), Ok(2));
    }

    #[test]
    fn test_unary() {
        assert_eq!(calc("-5"), Ok(-5));
        assert_eq!(calc("+5"), Ok(5));
        assert_eq!(calc("-(3+2)"), Ok(-5));
        assert_eq!(calc("- -3"), Ok(3));
        assert_eq!(calc("-x * 3"), Ok(-6));
        assert_eq!(calc("2 * -3"), Ok(-6));
        assert_eq!(calc("2 - -3"), Ok(5));
        assert_eq!(calc("y / -x"), Ok(-2));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(calc("5 / 0"), Err(ToyError::DivisionByZero));
        assert_eq!(calc("5 / (x - 2)"), Err(ToyError::DivisionByZero));
    }

    #[test]
    fn test_unbalanced_parens() {
        assert_eq!(calc("(1 + 2"), Err(ToyError::UnmatchedParen('(')));
        assert_eq!(calc("1 + 2)"), Err(ToyError::UnmatchedParen(')')));
        assert_eq!(calc("((1)"), Err(ToyError::UnmatchedParen('(')));
    }

    #[test]
    fn test_malformed_sequences() {
        assert_eq!(calc(""), Err(ToyError::AbruptEnd));
        assert_eq!(calc("1 +"), Err(ToyError::AbruptEnd));
        assert_eq!(calc("()"), Err(ToyError::DidNotExpect(")".into())));
        assert_eq!(calc("* 3"), Err(ToyError::DidNotExpect("*".into())));
        assert_eq!(calc("2 3"), Err(ToyError::DidNotExpect("3".into())));
        assert_eq!(calc("2 (3)"), Err(ToyError::DidNotExpect("(".into())));
        assert_eq!(calc("(1) x"), Err(ToyError::DidNotExpect("x".into())));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(calc("2147483647 + 1"), Err(ToyError::Overflow));
        assert_eq!(calc("-2147483647 - 1"), Ok(i32::MIN));
    }
}

use crate::error_handling::*;
use crate::evaluating::BinaryOperator;
use crate::variables::Variables;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Punctuation {
    Open,
    Close,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Literal(i32),
    Identifier(String),
    Operator(BinaryOperator),
    Punctuation(Punctuation),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(value) => write!(f, "{value}"),
            Token::Identifier(name) => write!(f, "{name}"),
            Token::Operator(operator) => write!(f, "{operator}"),
            Token::Punctuation(Punctuation::Open) => write!(f, "("),
            Token::Punctuation(Punctuation::Close) => write!(f, ")"),
        }
    }
}

pub fn is_identifier_start(character: char) -> bool {
    character.is_ascii_alphabetic() || character == '_'
}

pub fn is_identifier_part(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

/// Splits an expression into tokens, checking every identifier against the
/// variables bound so far.
pub struct StringScanner<'a> {
    string: &'a str,
    index: usize,
    variables: &'a Variables,
}

impl<'a> StringScanner<'a> {
    pub fn new(string: &'a str, variables: &'a Variables) -> Self {
        Self{string, index: 0, variables}
    }

    fn view(&self) -> &'a str {
        &self.string[self.index..]
    }

    // byte length of the run of characters matching `predicate`
    fn count_while<P: Fn(char) -> bool>(&self, predicate: P) -> usize {
        self.view()
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum()
    }

    fn take(&mut self, length: usize) -> &'a str {
        let content = &self.view()[..length];
        self.index += length;
        content
    }

    fn skip_whitespace(&mut self) {
        let count = self.count_while(char::is_whitespace);
        self.index += count;
    }

    fn get_number(&mut self) -> Result<Token> {
        let count = self.count_while(|c| c.is_ascii_digit());
        let content = self.take(count);
        if content.len() > 1 && content.starts_with('0') {
            return Err(ToyError::InvalidNumber(content.into()));
        }
        content
            .parse()
            .map(Token::Literal)
            .map_err(|_| ToyError::InvalidNumber(content.into()))
    }

    fn get_identifier(&mut self) -> Result<Token> {
        let count = self.count_while(is_identifier_part);
        let name = self.take(count);
        if !self.variables.contains(name) {
            return Err(ToyError::Undefined(name.into()));
        }
        Ok(Token::Identifier(name.into()))
    }

    fn get_single(&mut self, character: char) -> Result<Token> {
        let token = match character {
            '(' => Token::Punctuation(Punctuation::Open),
            ')' => Token::Punctuation(Punctuation::Close),
            '+' => Token::Operator(BinaryOperator::Addition),
            '-' => Token::Operator(BinaryOperator::Subtraction),
            '*' => Token::Operator(BinaryOperator::Multiplication),
            '/' => Token::Operator(BinaryOperator::Division),
            _ => return Err(ToyError::InvalidCharacter(character)),
        };
        self.index += character.len_utf8();
        Ok(token)
    }
}

impl Iterator for StringScanner<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let character = self.view().chars().next()?;
        let token = if character.is_ascii_digit() {
            self.get_number()
        } else if is_identifier_start(character) {
            self.get_identifier()
        } else {
            self.get_single(character)
        };
        Some(token)
    }
}

pub fn scan(expression: &str, variables: &Variables) -> Result<Vec<Token>> {
    let tokens = StringScanner::new(expression, variables).collect::<Result<Vec<_>>>()?;
    log::trace!("scanned {expression:?} into {tokens:?}");
    Ok(tokens)
}

use crate::error_handling::*;
use crate::parsing::evaluate;
use crate::scanning::*;
use crate::variables::Variables;

pub const TERMINATOR: char = ';';

pub fn is_valid_identifier(name: &str) -> bool {
    let mut characters = name.chars();
    characters.next().is_some_and(is_identifier_start) && characters.all(is_identifier_part)
}

/// Lexes and evaluates one right-hand side against the current bindings.
pub fn evaluate_expression(expression: &str, variables: &Variables) -> Result<i32> {
    let tokens = scan(expression, variables)?;
    evaluate(&tokens, variables)
}

/// Executes statements in source order, collecting one error per failing
/// statement.
#[derive(Default)]
pub struct Processor {
    variables: Variables,
    errors: Vec<ToyError>,
}

impl Processor {
    pub fn new() -> Self {
        Self::default()
    }

    fn assignment(statement: &str) -> Result<(&str, &str)> {
        let mut sides = statement.split('=');
        let (Some(identifier), Some(expression), None) = (sides.next(), sides.next(), sides.next()) else {
            return Err(ToyError::MalformedStatement(statement.into()));
        };

        let identifier = identifier.trim();
        if !is_valid_identifier(identifier) {
            return Err(ToyError::InvalidIdentifier(identifier.into()));
        }
        Ok((identifier, expression.trim()))
    }

    fn execute(&mut self, statement: &str) -> Result<()> {
        let (identifier, expression) = Self::assignment(statement)?;
        let value = evaluate_expression(expression, &self.variables)?;
        self.variables.set(identifier, value);
        log::debug!("bound {identifier} = {value}");
        Ok(())
    }

    pub fn process(&mut self, statement: &str) {
        if let Err(e) = self.execute(statement) {
            log::debug!("statement {statement:?} failed: {e}");
            self.errors.push(e);
        }
    }

    pub fn process_program(&mut self, program: &str) {
        if !program.ends_with(TERMINATOR) {
            log::debug!("program is missing its final '{TERMINATOR}'");
            self.errors.push(ToyError::MissingTerminator);
            return;
        }

        for statement in program.split(TERMINATOR).map(str::trim).filter(|s| !s.is_empty()) {
            self.process(statement);
        }
    }

    /// Either every binding or every error; never a mix of the two.
    pub fn finish(self) -> std::result::Result<Variables, Vec<ToyError>> {
        if self.errors.is_empty() {
            Ok(self.variables)
        } else {
            Err(self.errors)
        }
    }
}

pub fn run(program: &str) -> std::result::Result<Variables, Vec<ToyError>> {
    let mut processor = Processor::new();
    processor.process_program(program);
    processor.finish()
}

/// Runs a program read from a file. Trailing whitespace after the final
/// terminator, such as the file's closing newline, is ignored.
pub fn run_file(contents: &str) -> std::result::Result<Variables, Vec<ToyError>> {
    run(contents.trim_end())
}

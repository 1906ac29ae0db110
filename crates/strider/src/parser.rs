//! Recursive-descent parser for selector statements.
//!
//! ```text
//! statement := step { step }
//! step      := member | index
//! member    := ['.'] ( ident | '{' ws literal ws '}' )
//! index     := '[' ws ( literal | number | rule ) ws ']'
//! rule      := { step ws } '=' ws ( literal | number ) ws
//! literal   := '"' char* '"' | "'" char* "'"
//! number    := ['-'] digit* ['.' digit*]
//! ```
//!
//! A backslash passes the following code point through unchanged, both in
//! identifiers and in literals. Parsing is all-or-nothing: the first problem
//! aborts with a [`SyntaxError`] positioned where the cursor stood.

use crate::class::{self, CharClass};
use crate::cursor::Cursor;
use crate::error::SyntaxError;
use crate::instruction::{IndexRule, Instruction};
use crate::literal::Literal;
use crate::op::Operator;
use crate::value::Number;

/// Parses a statement into its instruction sequence.
pub fn parse(statement: &str) -> Result<Vec<Instruction>, SyntaxError> {
    Parser::new(statement).parse()
}

/// Deepest nesting of `[` accepted inside rule chains.
const MAX_DEPTH: usize = 128;

/// Parser over a single statement.
#[derive(Debug, Clone)]
pub struct Parser {
    cursor: Cursor,
    depth: usize,
}

impl Parser {
    pub fn new(statement: &str) -> Self {
        Parser {
            cursor: Cursor::new(statement),
            depth: 0,
        }
    }

    /// Rewinds to the start of the statement.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.depth = 0;
    }

    /// Current offset in code points.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parses the whole statement from the start.
    ///
    /// Calling this again yields an equal sequence.
    pub fn parse(&mut self) -> Result<Vec<Instruction>, SyntaxError> {
        self.reset();
        let mut instructions = Vec::new();
        while !self.cursor.at_end() {
            instructions.push(self.next_instruction()?);
        }
        Ok(instructions)
    }

    /// Parses the step at the cursor.
    pub fn next_instruction(&mut self) -> Result<Instruction, SyntaxError> {
        if self.cursor.expect("[") {
            self.parse_index()
        } else {
            self.parse_member()
        }
    }

    fn parse_member(&mut self) -> Result<Instruction, SyntaxError> {
        if self.cursor.expect(".") {
            self.cursor.consume_literal(".")?;
        }

        if self.cursor.expect("{") {
            self.cursor.consume_literal("{")?;
            self.cursor.consume_whitespace();
            let name = self.parse_literal()?;
            self.cursor.consume_whitespace();
            self.cursor.consume_literal("}")?;
            return Ok(Instruction::member(name));
        }

        // bare identifier, ends at the first character outside the class
        let mut name = match self.parse_char(class::ident_start)? {
            Some(c) => String::from(c),
            None => return Err(self.unexpected("member name")),
        };
        while let Some(c) = self.parse_char(class::ident_char)? {
            name.push(c);
        }
        Ok(Instruction::member(name))
    }

    fn parse_index(&mut self) -> Result<Instruction, SyntaxError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.cursor.error("statement nested too deeply"));
        }
        self.depth += 1;
        let index = self.parse_index_body();
        self.depth -= 1;
        index
    }

    fn parse_index_body(&mut self) -> Result<Instruction, SyntaxError> {
        self.cursor.consume_literal("[")?;
        self.cursor.consume_whitespace();

        let instruction = match self.parse_value()? {
            Some(key) => Instruction::index(key),
            None => Instruction::Rule(self.parse_index_rule()?),
        };

        self.cursor.consume_whitespace();
        self.cursor.consume_literal("]")?;
        Ok(instruction)
    }

    fn parse_index_rule(&mut self) -> Result<IndexRule, SyntaxError> {
        let mut lhs = Vec::new();
        self.cursor.consume_whitespace();
        while !self.cursor.expect_match(class::operator_start) {
            lhs.push(self.next_instruction()?);
            self.cursor.consume_whitespace();
        }

        let operator = self.parse_operator()?;
        self.cursor.consume_whitespace();

        let rhs = match self.parse_value()? {
            Some(rhs) => rhs,
            None => return Err(self.unexpected("value")),
        };
        self.cursor.consume_whitespace();

        Ok(IndexRule::new(lhs, operator, rhs))
    }

    fn parse_operator(&mut self) -> Result<Operator, SyntaxError> {
        for operator in Operator::ALL {
            if self.cursor.expect(operator.symbol()) {
                self.cursor.consume_literal(operator.symbol())?;
                return Ok(operator);
            }
        }
        Err(self.unexpected("operator"))
    }

    /// Parses a quoted literal or a number, if one starts at the cursor.
    fn parse_value(&mut self) -> Result<Option<Literal>, SyntaxError> {
        if self.cursor.expect_match(class::quote) {
            Ok(Some(Literal::String(self.parse_literal()?)))
        } else if self.cursor.expect_match(class::number_start) {
            Ok(Some(Literal::Number(self.parse_number()?)))
        } else {
            Ok(None)
        }
    }

    fn parse_literal(&mut self) -> Result<String, SyntaxError> {
        if !self.cursor.expect_match(class::quote) {
            return Err(self.unexpected("quote"));
        }
        let quote = self.cursor.consume_char()?;

        let mut text = String::new();
        while self.cursor.peek_char(0) != Some(quote) {
            match self.parse_char(class::any)? {
                Some(c) => text.push(c),
                None => return Err(self.cursor.error("unterminated string literal")),
            }
        }
        self.cursor.consume_char()?;
        Ok(text)
    }

    fn parse_number(&mut self) -> Result<Number, SyntaxError> {
        let mut text = String::new();
        if self.cursor.expect("-") {
            text.push_str(self.cursor.consume_literal("-")?);
        }
        self.consume_digits(&mut text)?;
        if self.cursor.expect(".") {
            text.push_str(self.cursor.consume_literal(".")?);
            self.consume_digits(&mut text)?;
        }
        Ok(Literal::parse_number(&text))
    }

    fn consume_digits(&mut self, text: &mut String) -> Result<(), SyntaxError> {
        while self.cursor.expect_match(class::digit) {
            text.push(self.cursor.consume_char()?);
        }
        Ok(())
    }

    /// Consumes the next code point if it belongs to `class`.
    ///
    /// An escaped code point (`\x`) is always accepted.
    fn parse_char(&mut self, class: CharClass) -> Result<Option<char>, SyntaxError> {
        if self.cursor.expect("\\") {
            self.cursor.consume_literal("\\")?;
            if self.cursor.at_end() {
                return Err(self.cursor.error("expected a character after `\\`"));
            }
            return self.cursor.consume_char().map(Some);
        }
        if self.cursor.expect_match(class) {
            return self.cursor.consume_char().map(Some);
        }
        Ok(None)
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        self.cursor.error(format!(
            "expected {expected}, found {}",
            self.cursor.describe_ahead(5)
        ))
    }
}

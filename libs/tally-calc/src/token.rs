//! Tokenization of expression text
//!
//! Text is split on operator characters, each operator becomes its own
//! token, and the empty runs the split produces are dropped. Number tokens
//! borrow from the text; nothing is parsed here.

use std::iter::FusedIterator;

use crate::operator::Operator;

/// A number run or a single operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Number(&'a str),
    Operator(Operator),
}

impl<'a> Token<'a> {
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    pub const fn number(&self) -> Option<&'a str> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Operator(_) => None,
        }
    }

    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(o) => Some(*o),
            Self::Number(_) => None,
        }
    }
}

/// Lazy left-to-right token stream over expression text
///
/// The stream is consumed as it is walked; tokenize the text again to start
/// over.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.rest.chars();
        let first = chars.next()?;

        if let Some(op) = Operator::from_char(first) {
            self.rest = chars.as_str();
            return Some(Token::Operator(op));
        }

        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| Operator::from_char(c).is_some())
            .map_or(self.rest.len(), |(i, _)| i);
        let (number, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Token::Number(number))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Split `text` into numbers and operators
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Number of operands in `text`, counting only non-empty runs
pub fn operand_count(text: &str) -> usize {
    tokenize(text).filter(Token::is_number).count()
}

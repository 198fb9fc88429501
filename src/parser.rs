use crate::lexer::{tokenize, Token, Tokens};
use crate::{FloatType, IntType, ParseError, Symbol, Value};
use std::iter::Peekable;

/// Read the expressions in `source` one at a time. The returned iterator
/// yields one item per top-level expression, so callers can take a single
/// expression with `.next()` or drain it to execute a whole file.
pub fn parse(source: &str) -> Parser {
    Parser {
        tokens: tokenize(source).peekable(),
    }
}

pub struct Parser<'a> {
    tokens: Peekable<Tokens<'a>>,
}

impl Iterator for Parser<'_> {
    type Item = Result<Value, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.peek()?;
        Some(read_expression(&mut self.tokens))
    }
}

/// Consume exactly one full expression from the stream, leaving it
/// positioned just after the expression's closing token.
fn read_expression(tokens: &mut Peekable<Tokens>) -> Result<Value, ParseError> {
    match tokens.next() {
        None => Err(ParseError::UnexpectedEof),
        Some(Token::CloseParen) => Err(ParseError::UnexpectedCloseParen),
        Some(Token::OpenParen) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    None => return Err(ParseError::UnexpectedEof),
                    Some(Token::CloseParen) => {
                        tokens.next();
                        break;
                    }
                    Some(_) => items.push(read_expression(tokens)?),
                }
            }
            Ok(Value::List(items.into_iter().collect()))
        }
        Some(Token::Atom(text)) => Ok(read_atom(&text)),
    }
}

/// Numbers become numbers; every other token is a symbol.
fn read_atom(token: &str) -> Value {
    if let Ok(n) = token.parse::<IntType>() {
        return Value::Int(n);
    }
    if let Ok(n) = token.parse::<FloatType>() {
        return Value::Float(n);
    }
    Value::Symbol(Symbol::from_ref(token))
}

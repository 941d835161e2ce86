//! Small recursive-descent evaluator for `+ - * / ( )` over decimal literals.
//!
//! There are no identifiers and no function calls. Anything unexpected
//! (bad syntax, division by zero, non-finite results) yields `None`.
//! Integers too large for `i64` continue as decimals.

use std::fmt;

const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(x) => x,
        }
    }

    fn checked(self) -> Option<Self> {
        match self {
            Number::Float(x) if !x.is_finite() => None,
            other => Some(other),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{i}"),
            // Whole decimals keep a trailing ".0" so `4/2` reads "2.0".
            Number::Float(x) if x.fract() == 0.0 && x.abs() < 1e16 => write!(f, "{x:.1}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(Number),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Evaluate an arithmetic expression, failing closed.
pub fn evaluate(expr: &str) -> Option<Number> {
    let tokens = tokenize(expr)?;
    let mut parser = Parser { tokens: &tokens, pos: 0 };
    let value = parser.expression(0)?;
    if parser.pos != tokens.len() {
        return None;
    }
    value.checked()
}

fn tokenize(expr: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' | '-' | '*' | '/' | '(' | ')' => {
                chars.next();
                tokens.push(match c {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    '/' => Token::Slash,
                    '(' => Token::LParen,
                    _ => Token::RParen,
                });
            }
            '0'..='9' | '.' => {
                let mut end = start;
                let mut seen_dot = false;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_ascii_digit() {
                        end = i + 1;
                    } else if d == '.' && !seen_dot {
                        seen_dot = true;
                        end = i + 1;
                    } else {
                        break;
                    }
                    chars.next();
                }
                tokens.push(Token::Num(parse_literal(&expr[start..end])?));
            }
            _ => return None,
        }
    }

    Some(tokens)
}

fn parse_literal(text: &str) -> Option<Number> {
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if !text.contains('.') {
        if let Ok(i) = text.parse::<i64>() {
            return Some(Number::Int(i));
        }
    }
    text.parse::<f64>().ok().map(Number::Float)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self, depth: usize) -> Option<Number> {
        let mut acc = self.term(depth)?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term(depth)?;
            acc = apply(op, acc, rhs)?;
        }
        Some(acc)
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self, depth: usize) -> Option<Number> {
        let mut acc = self.factor(depth)?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.factor(depth)?;
            acc = apply(op, acc, rhs)?;
        }
        Some(acc)
    }

    // factor := ('+' | '-') factor | '(' expression ')' | number
    fn factor(&mut self, depth: usize) -> Option<Number> {
        if depth > MAX_DEPTH {
            return None;
        }
        match self.bump()? {
            Token::Num(n) => Some(n),
            Token::Plus => self.factor(depth + 1),
            Token::Minus => match self.factor(depth + 1)? {
                Number::Int(i) => Some(
                    i.checked_neg()
                        .map_or(Number::Float(-(i as f64)), Number::Int),
                ),
                Number::Float(x) => Some(Number::Float(-x)),
            },
            Token::LParen => {
                let inner = self.expression(depth + 1)?;
                match self.bump()? {
                    Token::RParen => Some(inner),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

fn apply(op: Token, lhs: Number, rhs: Number) -> Option<Number> {
    let result = match (op, lhs, rhs) {
        (Token::Slash, _, rhs) if rhs.as_f64() == 0.0 => return None,
        (Token::Slash, lhs, rhs) => Number::Float(lhs.as_f64() / rhs.as_f64()),
        (Token::Plus, Number::Int(a), Number::Int(b)) => {
            a.checked_add(b).map_or(Number::Float(a as f64 + b as f64), Number::Int)
        }
        (Token::Minus, Number::Int(a), Number::Int(b)) => {
            a.checked_sub(b).map_or(Number::Float(a as f64 - b as f64), Number::Int)
        }
        (Token::Star, Number::Int(a), Number::Int(b)) => {
            a.checked_mul(b).map_or(Number::Float(a as f64 * b as f64), Number::Int)
        }
        (Token::Plus, a, b) => Number::Float(a.as_f64() + b.as_f64()),
        (Token::Minus, a, b) => Number::Float(a.as_f64() - b.as_f64()),
        (Token::Star, a, b) => Number::Float(a.as_f64() * b.as_f64()),
        _ => return None,
    };
    result.checked()
}

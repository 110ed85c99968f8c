//! Arithmetic evaluation for cleaned numeric text.
//!
//! Grammar (whitespace already removed by the caller, but tolerated):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := number | '(' expr ')'
//! number  := digits ('.' digits?)? | '.' digits
//! ```

use std::fmt;

const MAX_DEPTH: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalErrorCode {
    UnexpectedChar,
    UnexpectedEnd,
    UnbalancedParen,
    InvalidNumber,
    TrailingInput,
    NonFinite,
    TooDeep,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub code: EvalErrorCode,
    pub position: usize,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.code {
            EvalErrorCode::UnexpectedChar => "unexpected character",
            EvalErrorCode::UnexpectedEnd => "unexpected end of expression",
            EvalErrorCode::UnbalancedParen => "unbalanced parenthesis",
            EvalErrorCode::InvalidNumber => "invalid number literal",
            EvalErrorCode::TrailingInput => "trailing input",
            EvalErrorCode::NonFinite => "result is not finite",
            EvalErrorCode::TooDeep => "expression nested too deeply",
        };
        write!(f, "{what} at byte {}", self.position)
    }
}

impl std::error::Error for EvalError {}

pub fn evaluate(src: &str) -> Result<f64, EvalError> {
    let mut p = Evaluator {
        src: src.as_bytes(),
        pos: 0,
        depth: 0,
    };
    let value = p.expr()?;
    p.skip_ws();
    if p.pos < p.src.len() {
        let code = if p.src[p.pos] == b')' {
            EvalErrorCode::UnbalancedParen
        } else {
            EvalErrorCode::TrailingInput
        };
        return Err(p.error(code));
    }
    if !value.is_finite() {
        return Err(EvalError {
            code: EvalErrorCode::NonFinite,
            position: 0,
        });
    }
    Ok(value)
}

struct Evaluator<'a> {
    src: &'a [u8],
    pos: usize,
    depth: usize,
}

impl Evaluator<'_> {
    fn error(&self, code: EvalErrorCode) -> EvalError {
        EvalError {
            code,
            position: self.pos,
        }
    }

    fn skip_ws(&mut self) {
        while self.src.get(self.pos).is_some_and(u8::is_ascii_whitespace) {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.src.get(self.pos).copied()
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.term()?;
        while let Some(op @ (b'+' | b'-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            acc = if op == b'+' { acc + rhs } else { acc - rhs };
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.unary()?;
        while let Some(op @ (b'*' | b'/')) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            acc = if op == b'*' { acc * rhs } else { acc / rhs };
        }
        Ok(acc)
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        self.enter()?;
        let out = match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                self.unary().map(|v| -v)
            }
            Some(b'+') => {
                self.pos += 1;
                self.unary()
            }
            _ => self.primary(),
        };
        self.depth -= 1;
        out
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            None => Err(self.error(EvalErrorCode::UnexpectedEnd)),
            Some(b'(') => {
                let open = self.pos;
                self.pos += 1;
                self.enter()?;
                let inner = self.expr();
                self.depth -= 1;
                let value = inner?;
                if self.peek() != Some(b')') {
                    return Err(EvalError {
                        code: EvalErrorCode::UnbalancedParen,
                        position: open,
                    });
                }
                self.pos += 1;
                Ok(value)
            }
            Some(b'0'..=b'9' | b'.') => self.number(),
            Some(b')') => Err(self.error(EvalErrorCode::UnbalancedParen)),
            Some(_) => Err(self.error(EvalErrorCode::UnexpectedChar)),
        }
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        let start = self.pos;
        while self
            .src
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_digit() || *b == b'.')
        {
            self.pos += 1;
        }
        // Only ASCII digits and dots were consumed.
        let literal = std::str::from_utf8(&self.src[start..self.pos]).unwrap_or("");
        if literal == "." {
            return Err(EvalError {
                code: EvalErrorCode::InvalidNumber,
                position: start,
            });
        }
        literal.parse::<f64>().map_err(|_| EvalError {
            code: EvalErrorCode::InvalidNumber,
            position: start,
        })
    }

    fn enter(&mut self) -> Result<(), EvalError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(EvalErrorCode::TooDeep));
        }
        self.depth += 1;
        Ok(())
    }
}

//! Restricted arithmetic formula evaluation.
//!
//! Players can edit the XP formula freely, so the evaluator accepts only
//! pure arithmetic: numeric literals, a fixed variable whitelist, and
//! `+ - * / ( )` with standard precedence. A hand-built tokenizer and
//! recursive-descent parser keep the feature while closing the injection
//! surface of evaluating arbitrary text. Anything outside the grammar,
//! including unknown identifiers and assignment, is a syntax error; a
//! parsed expression that produces a non-finite value is a distinct
//! result error.
//!
//! Nothing here caches: the caller re-evaluates whenever the formula text
//! or the underlying snapshot changes.

use crate::character::{Character, CounterKind};
use crate::derived::DerivedStats;
use crate::error::FormulaError;
use serde::{Deserialize, Serialize};

/// The default XP formula new sheets start with.
pub const DEFAULT_FORMULA: &str = "gold / 2 + strength + agility";

/// Snapshot of the stat values formulas can reference.
///
/// Captured from a character plus its derived stats; total (post-
/// equipment) values are used for the derived fields.
///
/// # Examples
///
/// ```rust
/// use grimhand::{evaluate, StatSnapshot};
///
/// let snapshot = StatSnapshot {
///     gold: 10.0,
///     strength: 5.0,
///     agility: 3.0,
///     ..StatSnapshot::default()
/// };
/// assert_eq!(evaluate("gold / 2 + strength + agility", &snapshot), Ok(13));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatSnapshot {
    pub life_current: f64,
    pub life_max: f64,
    pub strength: f64,
    pub agility: f64,
    pub ap_current: f64,
    pub ap_max: f64,
    pub gold: f64,
    pub xp: f64,
    pub doubt: f64,
    pub corruption: f64,
    pub attack: f64,
}

impl StatSnapshot {
    /// Capture a snapshot from current character state and derived stats.
    pub fn capture(character: &Character, derived: &DerivedStats) -> Self {
        Self {
            life_current: character.life.current() as f64,
            life_max: derived.total.life_max as f64,
            strength: derived.total.strength as f64,
            agility: derived.total.agility as f64,
            ap_current: character.action_points.current() as f64,
            ap_max: derived.total.ap_max as f64,
            gold: character.counter(CounterKind::Gold) as f64,
            xp: character.counter(CounterKind::Xp) as f64,
            doubt: character.counter(CounterKind::Doubt) as f64,
            corruption: character.counter(CounterKind::Corruption) as f64,
            attack: derived.total.attack as f64,
        }
    }
}

/// The whitelisted formula variables.
///
/// Names are the ones players type into the formula box; they predate
/// this crate, so the camelCase spelling is part of the formula language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Var {
    LifeCurrent,
    LifeMax,
    Strength,
    Agility,
    ApCurrent,
    ApMax,
    Gold,
    Xp,
    Doubt,
    Corruption,
    Attack,
}

impl Var {
    fn from_name(name: &str) -> Option<Var> {
        match name {
            "lifeCurrent" => Some(Var::LifeCurrent),
            "lifeMax" => Some(Var::LifeMax),
            "strength" => Some(Var::Strength),
            "agility" => Some(Var::Agility),
            "apCurrent" => Some(Var::ApCurrent),
            "apMax" => Some(Var::ApMax),
            "gold" => Some(Var::Gold),
            "xp" => Some(Var::Xp),
            "doubt" => Some(Var::Doubt),
            "corruption" => Some(Var::Corruption),
            "attack" => Some(Var::Attack),
            _ => None,
        }
    }

    fn read(self, snapshot: &StatSnapshot) -> f64 {
        match self {
            Var::LifeCurrent => snapshot.life_current,
            Var::LifeMax => snapshot.life_max,
            Var::Strength => snapshot.strength,
            Var::Agility => snapshot.agility,
            Var::ApCurrent => snapshot.ap_current,
            Var::ApMax => snapshot.ap_max,
            Var::Gold => snapshot.gold,
            Var::Xp => snapshot.xp,
            Var::Doubt => snapshot.doubt,
            Var::Corruption => snapshot.corruption,
            Var::Attack => snapshot.attack,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Var(Var),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Parsed formula expression tree.
#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Number(f64),
    Var(Var),
    Neg(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    fn eval(&self, snapshot: &StatSnapshot) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Var(var) => var.read(snapshot),
            Expr::Neg(inner) => -inner.eval(snapshot),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = lhs.eval(snapshot);
                let rhs = rhs.eval(snapshot);
                match op {
                    BinOp::Add => lhs + rhs,
                    BinOp::Sub => lhs - rhs,
                    BinOp::Mul => lhs * rhs,
                    BinOp::Div => lhs / rhs,
                }
            }
        }
    }
}

fn syntax(position: usize, message: impl Into<String>) -> FormulaError {
    FormulaError::Syntax {
        position,
        message: message.into(),
    }
}

/// Tokenize formula text, rejecting anything outside the grammar.
///
/// Identifiers are checked against the variable whitelist here, so an
/// unknown name fails as a syntax error before any evaluation happens.
fn tokenize(text: &str) -> Result<Vec<(Token, usize)>, FormulaError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        match bytes[i] {
            b' ' | b'\t' | b'\r' | b'\n' => i += 1,
            b'+' => {
                tokens.push((Token::Plus, start));
                i += 1;
            }
            b'-' => {
                tokens.push((Token::Minus, start));
                i += 1;
            }
            b'*' => {
                tokens.push((Token::Star, start));
                i += 1;
            }
            b'/' => {
                tokens.push((Token::Slash, start));
                i += 1;
            }
            b'(' => {
                tokens.push((Token::LParen, start));
                i += 1;
            }
            b')' => {
                tokens.push((Token::RParen, start));
                i += 1;
            }
            b'0'..=b'9' => {
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                if i < bytes.len() && bytes[i] == b'.' {
                    i += 1;
                    if i >= bytes.len() || !bytes[i].is_ascii_digit() {
                        return Err(syntax(start, "malformed number"));
                    }
                    while i < bytes.len() && bytes[i].is_ascii_digit() {
                        i += 1;
                    }
                }
                let literal = &text[start..i];
                let value: f64 = literal
                    .parse()
                    .map_err(|_| syntax(start, "malformed number"))?;
                tokens.push((Token::Number(value), start));
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                while i < bytes.len()
                    && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_')
                {
                    i += 1;
                }
                let name = &text[start..i];
                let var = Var::from_name(name)
                    .ok_or_else(|| syntax(start, format!("unknown variable `{}`", name)))?;
                tokens.push((Token::Var(var), start));
            }
            other => {
                return Err(syntax(
                    start,
                    format!("unexpected character `{}`", other as char),
                ));
            }
        }
    }

    Ok(tokens)
}

/// Recursive-descent parser over the token stream.
///
/// Grammar:
/// ```text
/// expr   := term   { ("+" | "-") term }
/// term   := factor { ("*" | "/") factor }
/// factor := NUMBER | VAR | "(" expr ")" | "-" factor
/// ```
struct Parser<'a> {
    tokens: &'a [(Token, usize)],
    pos: usize,
    len: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [(Token, usize)], text_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            len: text_len,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|&(token, _)| token)
    }

    fn position(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|&(_, pos)| pos)
            .unwrap_or(self.len)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<Expr, FormulaError> {
        let mut lhs = self.term()?;
        while let Some(token) = self.peek() {
            let op = match token {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, FormulaError> {
        let mut lhs = self.factor()?;
        while let Some(token) = self.peek() {
            let op = match token {
                Token::Star => BinOp::Mul,
                Token::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            let rhs = self.factor()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expr, FormulaError> {
        let position = self.position();
        match self.advance() {
            Some(Token::Number(value)) => Ok(Expr::Number(value)),
            Some(Token::Var(var)) => Ok(Expr::Var(var)),
            Some(Token::Minus) => Ok(Expr::Neg(Box::new(self.factor()?))),
            Some(Token::LParen) => {
                let inner = self.expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(syntax(self.position(), "expected `)`")),
                }
            }
            Some(_) => Err(syntax(position, "expected a value")),
            None => Err(syntax(position, "unexpected end of formula")),
        }
    }
}

fn parse(text: &str) -> Result<Expr, FormulaError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(syntax(0, "empty formula"));
    }
    let mut parser = Parser::new(&tokens, text.len());
    let expr = parser.expr()?;
    if parser.peek().is_some() {
        return Err(syntax(parser.position(), "unexpected trailing input"));
    }
    Ok(expr)
}

/// Evaluate a formula against a stat snapshot.
///
/// Returns the floored numeric result, a
/// [`FormulaError::Syntax`] if the text is not a restricted arithmetic
/// expression over the whitelisted variables, or
/// [`FormulaError::Result`] if the expression parsed but produced a
/// non-finite value.
///
/// # Examples
///
/// ```rust
/// use grimhand::{evaluate, FormulaError, StatSnapshot};
///
/// let snapshot = StatSnapshot {
///     gold: 7.0,
///     ..StatSnapshot::default()
/// };
/// assert_eq!(evaluate("gold / 2", &snapshot), Ok(3));
/// assert!(matches!(
///     evaluate("mana + 1", &snapshot),
///     Err(FormulaError::Syntax { .. })
/// ));
/// assert_eq!(evaluate("1 / 0", &snapshot), Err(FormulaError::Result));
/// ```
pub fn evaluate(text: &str, snapshot: &StatSnapshot) -> Result<i64, FormulaError> {
    let expr = parse(text)?;
    let value = expr.eval(snapshot);
    if !value.is_finite() {
        return Err(FormulaError::Result);
    }
    Ok(value.floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> StatSnapshot {
        StatSnapshot {
            life_current: 9.0,
            life_max: 13.0,
            strength: 5.0,
            agility: 3.0,
            ap_current: 2.0,
            ap_max: 5.0,
            gold: 10.0,
            xp: 40.0,
            doubt: 1.0,
            corruption: 0.0,
            attack: 4.0,
        }
    }

    #[test]
    fn test_default_formula() {
        // floor(10 / 2 + 5 + 3) = 13
        assert_eq!(evaluate(DEFAULT_FORMULA, &snapshot()), Ok(13));
    }

    #[test]
    fn test_precedence_and_parens() {
        assert_eq!(evaluate("2 + 3 * 4", &snapshot()), Ok(14));
        assert_eq!(evaluate("(2 + 3) * 4", &snapshot()), Ok(20));
        assert_eq!(evaluate("10 - 4 - 3", &snapshot()), Ok(3));
        assert_eq!(evaluate("20 / 2 / 5", &snapshot()), Ok(2));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-3 + gold", &snapshot()), Ok(7));
        assert_eq!(evaluate("--4", &snapshot()), Ok(4));
        assert_eq!(evaluate("2 * -3", &snapshot()), Ok(-6));
    }

    #[test]
    fn test_result_is_floored() {
        assert_eq!(evaluate("7 / 2", &snapshot()), Ok(3));
        assert_eq!(evaluate("-7 / 2", &snapshot()), Ok(-4));
    }

    #[test]
    fn test_all_variables_resolve() {
        let snap = snapshot();
        assert_eq!(evaluate("lifeCurrent", &snap), Ok(9));
        assert_eq!(evaluate("lifeMax", &snap), Ok(13));
        assert_eq!(evaluate("apCurrent + apMax", &snap), Ok(7));
        assert_eq!(evaluate("xp + doubt + corruption", &snap), Ok(41));
        assert_eq!(evaluate("attack", &snap), Ok(4));
    }

    #[test]
    fn test_unknown_identifier_is_syntax_error() {
        let err = evaluate("mana + 1", &snapshot()).unwrap_err();
        assert!(matches!(err, FormulaError::Syntax { position: 0, .. }));
        assert!(err.to_string().contains("mana"));
    }

    #[test]
    fn test_assignment_is_syntax_error() {
        assert!(matches!(
            evaluate("gold = 99", &snapshot()),
            Err(FormulaError::Syntax { .. })
        ));
        assert!(matches!(
            evaluate("xp += 1", &snapshot()),
            Err(FormulaError::Syntax { .. })
        ));
    }

    #[test]
    fn test_non_arithmetic_constructs_rejected() {
        for text in ["gold; xp", "max(1, 2)", "gold.max", "2 ** 3", "[1]"] {
            assert!(
                matches!(evaluate(text, &snapshot()), Err(FormulaError::Syntax { .. })),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn test_malformed_expressions_rejected() {
        for text in ["", "   ", "1 +", "* 2", "(1 + 2", "1 2", "1."] {
            assert!(
                matches!(evaluate(text, &snapshot()), Err(FormulaError::Syntax { .. })),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn test_division_by_zero_is_result_error() {
        assert_eq!(evaluate("1 / 0", &snapshot()), Err(FormulaError::Result));
        assert_eq!(
            evaluate("gold / corruption", &snapshot()),
            Err(FormulaError::Result)
        );
        // 0/0 is NaN rather than infinity; still a result error.
        assert_eq!(evaluate("0 / 0", &snapshot()), Err(FormulaError::Result));
    }

    #[test]
    fn test_decimal_literals() {
        assert_eq!(evaluate("2.5 * 2", &snapshot()), Ok(5));
        assert_eq!(evaluate("0.5 + 0.25", &snapshot()), Ok(0));
    }
}

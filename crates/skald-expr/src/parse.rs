//! Parser for gate-expression text.

use rustc_hash::FxHashSet;

use crate::error::{ParseError, ParseResult};
use crate::expr::GateExpr;
use crate::gate::{Gate, OneQubitKind};
use crate::lexer::{SpannedToken, Token, tokenize};

/// Parse a gate-expression string.
///
/// Factors are separated by `*` and written in operator order, so
/// `"CNOT(1,0)*H(1)"` applies the Hadamard first. Controlled gates use
/// the tuple form `CGate((0,),S(1))`; a single bare control is also
/// accepted, as in `CGate(0,S(1))`.
pub fn parse(source: &str) -> ParseResult<GateExpr> {
    let mut parser = Parser::new(source)?;
    let expr = parser.parse_expr()?;
    parser.expect_eof()?;
    Ok(expr)
}

/// Parser state.
struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl Parser {
    /// Create a new parser from source.
    fn new(source: &str) -> ParseResult<Self> {
        let mut tokens = Vec::new();

        for result in tokenize(source) {
            match result {
                Ok(t) => tokens.push(t),
                Err((span, message)) => {
                    return Err(ParseError::LexerError {
                        position: span.start,
                        message,
                    });
                }
            }
        }

        Ok(Self { tokens, pos: 0 })
    }

    /// Peek at the current token.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    /// Byte offset of the current token (or end of input).
    fn position(&self) -> usize {
        match self.tokens.get(self.pos) {
            Some(t) => t.span.start,
            None => self.tokens.last().map_or(0, |t| t.span.end),
        }
    }

    /// Advance and return the current token.
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|t| t.token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Check if current token matches.
    fn check(&self, token: &Token) -> bool {
        self.peek()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(token))
    }

    /// Consume token if it matches.
    fn consume(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect a specific token.
    fn expect(&mut self, expected: &Token) -> ParseResult<()> {
        let position = self.position();
        let found = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof(format!("expected {expected}")))?;

        if std::mem::discriminant(&found) != std::mem::discriminant(expected) {
            return Err(ParseError::UnexpectedToken {
                position,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
        Ok(())
    }

    /// Expect that all input has been consumed.
    fn expect_eof(&self) -> ParseResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(t) => Err(ParseError::UnexpectedToken {
                position: self.position(),
                expected: "end of input".into(),
                found: t.to_string(),
            }),
        }
    }

    /// Parse a product of factors.
    fn parse_expr(&mut self) -> ParseResult<GateExpr> {
        let mut factors = vec![self.parse_factor()?];
        while self.consume(&Token::Star) {
            factors.push(self.parse_factor()?);
        }

        if factors.len() == 1 {
            Ok(GateExpr::Gate(factors.remove(0)))
        } else {
            Ok(GateExpr::Product(factors))
        }
    }

    /// Parse a single gate application.
    fn parse_factor(&mut self) -> ParseResult<Gate> {
        let name = self.parse_identifier()?;
        if name == "CGate" {
            return self.parse_controlled();
        }
        let args = self.parse_int_args()?;
        gate_from_name(&name, &args)
    }

    /// Parse `CGate((c0,c1,),inner)` or `CGate(c0,inner)`.
    fn parse_controlled(&mut self) -> ParseResult<Gate> {
        self.expect(&Token::LParen)?;
        let controls = if self.check(&Token::LParen) {
            self.parse_int_args()?
        } else {
            vec![self.parse_int()?]
        };
        self.expect(&Token::Comma)?;
        let inner = self.parse_factor()?;
        self.expect(&Token::RParen)?;

        let gate = Gate::controlled(controls, inner);
        check_duplicates(&gate)?;
        Ok(gate)
    }

    /// Parse a parenthesized integer list, allowing a trailing comma.
    fn parse_int_args(&mut self) -> ParseResult<Vec<u32>> {
        self.expect(&Token::LParen)?;
        let mut args = vec![self.parse_int()?];
        while self.consume(&Token::Comma) {
            if matches!(self.peek(), Some(Token::Int(_))) {
                args.push(self.parse_int()?);
            } else {
                break;
            }
        }
        self.expect(&Token::RParen)?;
        Ok(args)
    }

    /// Parse an identifier.
    fn parse_identifier(&mut self) -> ParseResult<String> {
        let position = self.position();
        match self.advance() {
            Some(Token::Ident(s)) => Ok(s),
            Some(other) => Err(ParseError::UnexpectedToken {
                position,
                expected: "gate name".into(),
                found: other.to_string(),
            }),
            None => Err(ParseError::UnexpectedEof("gate name".into())),
        }
    }

    /// Parse an integer literal.
    fn parse_int(&mut self) -> ParseResult<u32> {
        let position = self.position();
        match self.advance() {
            Some(Token::Int(v)) => Ok(v),
            Some(other) => Err(ParseError::UnexpectedToken {
                position,
                expected: "qubit index".into(),
                found: other.to_string(),
            }),
            None => Err(ParseError::UnexpectedEof("qubit index".into())),
        }
    }
}

/// Build a gate from its textual name and integer arguments.
fn gate_from_name(name: &str, args: &[u32]) -> ParseResult<Gate> {
    let kind = match name {
        "H" => Some(OneQubitKind::H),
        "X" => Some(OneQubitKind::X),
        "Y" => Some(OneQubitKind::Y),
        "Z" => Some(OneQubitKind::Z),
        "S" => Some(OneQubitKind::S),
        "Sdg" => Some(OneQubitKind::Sdg),
        "T" => Some(OneQubitKind::T),
        "Tdg" => Some(OneQubitKind::Tdg),
        _ => None,
    };

    if let Some(kind) = kind {
        expect_args(name, 1, args)?;
        return Ok(Gate::one_qubit(kind, args[0]));
    }

    let gate = match name {
        "CNOT" | "CX" => {
            expect_args(name, 2, args)?;
            Gate::cnot(args[0], args[1])
        }
        "SWAP" => {
            expect_args(name, 2, args)?;
            Gate::swap(args[0], args[1])
        }
        "Mz" => {
            expect_args(name, 1, args)?;
            Gate::mz(args[0])
        }
        other => return Err(ParseError::UnknownGate(other.to_string())),
    };

    check_duplicates(&gate)?;
    Ok(gate)
}

fn expect_args(gate: &str, expected: usize, args: &[u32]) -> ParseResult<()> {
    if args.len() != expected {
        return Err(ParseError::WrongArgCount {
            gate: gate.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Reject gates addressing the same wire twice.
fn check_duplicates(gate: &Gate) -> ParseResult<()> {
    let mut seen = FxHashSet::default();
    for q in gate.qubits() {
        if !seen.insert(q) {
            return Err(ParseError::DuplicateQubit {
                gate: gate.name().to_string(),
                qubit: q.index(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_cnot() {
        let expr = parse("CNOT(1,0)").unwrap();
        assert_eq!(expr, GateExpr::Gate(Gate::cnot(1, 0)));
        assert_eq!(expr.arg_count(), 2);
    }

    #[test]
    fn test_parse_product() {
        let expr = parse("CNOT(1,0)*H(1)").unwrap();
        assert_eq!(expr, Gate::cnot(1, 0) * Gate::h(1));
    }

    #[test]
    fn test_parse_controlled_tuple_form() {
        let expr = parse("CGate((0,),S(1))").unwrap();
        assert_eq!(expr, GateExpr::Gate(Gate::controlled([0], Gate::s(1))));
    }

    #[test]
    fn test_parse_controlled_bare_form() {
        let expr = parse("CGate(0,S(1))").unwrap();
        assert_eq!(expr, GateExpr::Gate(Gate::controlled([0], Gate::s(1))));
    }

    #[test]
    fn test_parse_multi_control() {
        let expr = parse("CGate((0,1),X(2))").unwrap();
        assert_eq!(expr, GateExpr::Gate(Gate::controlled([0, 1], Gate::x(2))));
    }

    #[test]
    fn test_parse_mixed_product() {
        let expr =
            parse("SWAP(0,2)*H(0)*CGate((0,),S(1))*H(1)*CGate((0,),T(2))*CGate((1,),S(2))*H(2)")
                .unwrap();
        assert_eq!(expr.factor_count(), 7);
        assert_eq!(expr.arg_count(), 7);
        assert_eq!(expr.min_qubits(), 3);
    }

    #[test]
    fn test_parse_cx_alias() {
        assert_eq!(parse("CX(0,1)").unwrap(), parse("CNOT(0,1)").unwrap());
    }

    #[test]
    fn test_parse_whitespace_tolerant() {
        let expr = parse(" CNOT( 1 , 0 ) * H( 1 ) ").unwrap();
        assert_eq!(expr, Gate::cnot(1, 0) * Gate::h(1));
    }

    #[test]
    fn test_parse_unknown_gate() {
        assert!(matches!(parse("Q(0)"), Err(ParseError::UnknownGate(_))));
    }

    #[test]
    fn test_parse_wrong_arg_count() {
        assert!(matches!(
            parse("H(0,1)"),
            Err(ParseError::WrongArgCount { expected: 1, got: 2, .. })
        ));
        assert!(matches!(
            parse("CNOT(1)"),
            Err(ParseError::WrongArgCount { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_parse_duplicate_qubit() {
        assert!(matches!(
            parse("CNOT(1,1)"),
            Err(ParseError::DuplicateQubit { qubit: 1, .. })
        ));
        assert!(matches!(
            parse("CGate((0,),X(0))"),
            Err(ParseError::DuplicateQubit { qubit: 0, .. })
        ));
    }

    #[test]
    fn test_parse_trailing_garbage() {
        assert!(matches!(
            parse("H(0))"),
            Err(ParseError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse(""), Err(ParseError::UnexpectedEof(_))));
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let expr = Gate::swap(0, 2) * Gate::controlled([0], Gate::t(2)) * Gate::h(2);
        assert_eq!(parse(&expr.to_string()).unwrap(), expr);
    }
}

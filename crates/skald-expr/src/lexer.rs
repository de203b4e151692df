//! Lexer for gate-expression text.

use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Tokens of the gate-expression grammar.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum Token {
    #[token("*")]
    Star,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u32>().ok())]
    Int(u32),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Star => write!(f, "'*'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
            Token::Int(v) => write!(f, "integer {v}"),
            Token::Ident(s) => write!(f, "identifier '{s}'"),
        }
    }
}

/// A token with its source span.
#[derive(Debug, Clone)]
pub(crate) struct SpannedToken {
    pub(crate) token: Token,
    pub(crate) span: Range<usize>,
}

/// Tokenize a source string, preserving spans for error reporting.
pub(crate) fn tokenize(source: &str) -> Vec<Result<SpannedToken, (Range<usize>, String)>> {
    Token::lexer(source)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok(SpannedToken { token, span }),
            Err(()) => {
                let message = format!("invalid input {:?}", &source[span.clone()]);
                Err((span, message))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        tokenize(source)
            .into_iter()
            .map(|r| r.unwrap().token)
            .collect()
    }

    #[test]
    fn test_tokenize_gate_call() {
        assert_eq!(
            tokens("CNOT(1,0)"),
            vec![
                Token::Ident("CNOT".into()),
                Token::LParen,
                Token::Int(1),
                Token::Comma,
                Token::Int(0),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_skips_whitespace() {
        assert_eq!(
            tokens(" H( 2 ) * H(0)"),
            vec![
                Token::Ident("H".into()),
                Token::LParen,
                Token::Int(2),
                Token::RParen,
                Token::Star,
                Token::Ident("H".into()),
                Token::LParen,
                Token::Int(0),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_invalid_input() {
        let results = tokenize("H(0) @");
        assert!(results.iter().any(Result::is_err));
    }
}

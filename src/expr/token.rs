//! Tokenizer for expression text.

use super::errors::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(v) => write!(f, "{v}"),
            Token::Ident(s)  => write!(f, "{s}"),
            Token::Plus      => write!(f, "+"),
            Token::Minus     => write!(f, "-"),
            Token::Star      => write!(f, "*"),
            Token::Slash     => write!(f, "/"),
            Token::Caret     => write!(f, "^"),
            Token::LParen    => write!(f, "("),
            Token::RParen    => write!(f, ")"),
        }
    }
}

/// Splits `text` into tokens.
///
/// Numbers accept an optional fraction and exponent (`1.5e-3`). The `e` of
/// an exponent is only consumed when followed by a digit (optionally
/// signed), so `2e` lexes as the number `2` and the identifier `e`.
pub(crate) fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i] as char;
        match c {
            ' ' | '\t' | '\n' | '\r' => i += 1,
            '+' => { tokens.push(Token::Plus);   i += 1 }
            '-' => { tokens.push(Token::Minus);  i += 1 }
            '*' => { tokens.push(Token::Star);   i += 1 }
            '/' => { tokens.push(Token::Slash);  i += 1 }
            '^' => { tokens.push(Token::Caret);  i += 1 }
            '(' => { tokens.push(Token::LParen); i += 1 }
            ')' => { tokens.push(Token::RParen); i += 1 }
            '0'..='9' | '.' => {
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                // exponent part: e/E, optional sign, at least one digit
                if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
                    let mut j = i + 1;
                    if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
                        j += 1;
                    }
                    if j < bytes.len() && bytes[j].is_ascii_digit() {
                        i = j;
                        while i < bytes.len() && bytes[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                let text = &text[start..i];
                let value = text.parse::<f64>().map_err(|_| ParseError::MalformedNumber {
                    text: text.to_owned(),
                })?;
                tokens.push(Token::Number(value));
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                let start = i;
                while i < bytes.len()
                    && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_')
                {
                    i += 1;
                }
                tokens.push(Token::Ident(text[start..i].to_owned()));
            }
            _ => return Err(ParseError::UnexpectedChar { c, pos: i }),
        }
    }

    Ok(tokens)
}

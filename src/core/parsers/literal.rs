//! Minimal lexer for Dart-style map literals.
//!
//! Only the tokens needed to find `'locale': { ... }` blocks and their keys are
//! recognized. String literals and comments are consumed whole so that braces
//! inside them (e.g. `'Hello {name}'` placeholders) never affect nesting.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Contents of a quoted string literal, without the quotes.
    Str(&'a str),
    OpenBrace,
    CloseBrace,
    Colon,
    /// Any run of characters that is not one of the above.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    /// Byte offset of the first character of the token.
    pub start: usize,
    /// Byte offset just past the token.
    pub end: usize,
}

pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let kind = match bytes[pos] {
            b if b.is_ascii_whitespace() => {
                pos += 1;
                continue;
            }
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                pos = source[pos..].find('\n').map_or(bytes.len(), |i| pos + i + 1);
                continue;
            }
            b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                pos = source[pos + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |i| pos + 2 + i + 2);
                continue;
            }
            quote @ (b'\'' | b'"') => {
                let (text_start, text_end, next) = if bytes[pos..].starts_with(&[quote; 3]) {
                    let (text_end, next) = scan_multiline_string(bytes, pos + 3, quote);
                    (pos + 3, text_end, next)
                } else {
                    let (text_end, next) = scan_string(bytes, pos + 1, quote);
                    (pos + 1, text_end, next)
                };
                pos = next;
                TokenKind::Str(&source[text_start..text_end])
            }
            b'{' => {
                pos += 1;
                TokenKind::OpenBrace
            }
            b'}' => {
                pos += 1;
                TokenKind::CloseBrace
            }
            b':' => {
                pos += 1;
                TokenKind::Colon
            }
            _ => {
                pos += 1;
                while pos < bytes.len() && !is_delimiter(bytes[pos]) {
                    pos += 1;
                }
                TokenKind::Other
            }
        };
        tokens.push(Token {
            kind,
            start,
            end: pos,
        });
    }

    tokens
}

/// Scan a string body starting just after the opening quote.
///
/// Returns `(text_end, next)`: the offset where the contents end and the
/// offset to resume lexing at. Single-line literals stop at end of line when
/// the closing quote is missing.
fn scan_string(bytes: &[u8], mut pos: usize, quote: u8) -> (usize, usize) {
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'\n' => return (pos, pos),
            b if b == quote => return (pos, pos + 1),
            _ => pos += 1,
        }
    }
    (bytes.len(), bytes.len())
}

/// Scan a triple-quoted string body (`'''...'''`) starting just after the
/// opening quotes. Line breaks belong to the string; an unterminated literal
/// runs to the end of the input.
fn scan_multiline_string(bytes: &[u8], mut pos: usize, quote: u8) -> (usize, usize) {
    while pos < bytes.len() {
        if bytes[pos] == b'\\' {
            pos += 2;
        } else if bytes[pos..].starts_with(&[quote; 3]) {
            return (pos, pos + 3);
        } else {
            pos += 1;
        }
    }
    (bytes.len(), bytes.len())
}

fn is_delimiter(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, b'\'' | b'"' | b'{' | b'}' | b':' | b'/')
}

/// Returns the key text when `tokens[index]` is a non-empty string literal
/// immediately followed by a colon.
pub fn key_at<'a>(tokens: &[Token<'a>], index: usize) -> Option<&'a str> {
    let token = tokens.get(index)?;
    let next = tokens.get(index + 1)?;
    match token.kind {
        TokenKind::Str(text)
            if !text.is_empty() && next.kind == TokenKind::Colon && next.start == token.end =>
        {
            Some(text)
        }
        _ => None,
    }
}

/// Index of the `}` closing the `{` at `open`, counting nesting depth.
pub fn matching_close(tokens: &[Token<'_>], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::OpenBrace => depth += 1,
            TokenKind::CloseBrace => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

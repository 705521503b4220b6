//! Tokenizer for the template notation.
//!
//! Whitespace and comments (`#` and `//` to end of line) are insignificant
//! and dropped here; every surviving token carries its byte span so the
//! parser and resolver can point diagnostics back into the source.

use crate::{
    Result, SourceContext,
    raw::Span,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    LBrace,
    RBrace,
    Colon,
    Equals,
    Comma,
    /// Bare word, used for keys (e.g. `server`).
    Ident(String),
    /// Double-quoted string, used for annotations and quoted keys.
    Str(String),
    Eof,
}

impl TokenKind {
    /// Short description for "expected X, found Y" messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            TokenKind::LBrace => "'{'".to_string(),
            TokenKind::RBrace => "'}'".to_string(),
            TokenKind::Colon => "':'".to_string(),
            TokenKind::Equals => "'='".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Ident(s) => format!("'{s}'"),
            TokenKind::Str(s) => format!("\"{s}\""),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Tokenize the whole template up front.
pub(crate) fn tokenize(ctx: &SourceContext) -> Result<Vec<Token>> {
    let src = ctx.src();
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        match b {
            b' ' | b'\t' | b'\r' | b'\n' => pos += 1,
            b'#' => pos = skip_line(bytes, pos),
            b'/' => {
                if bytes.get(pos + 1) == Some(&b'/') {
                    pos = skip_line(bytes, pos);
                } else {
                    return Err(ctx.syntax_error("unexpected character '/'", Span::new(pos, 1)));
                }
            }
            b'{' => {
                tokens.push(Token { kind: TokenKind::LBrace, span: Span::new(pos, 1) });
                pos += 1;
            }
            b'}' => {
                tokens.push(Token { kind: TokenKind::RBrace, span: Span::new(pos, 1) });
                pos += 1;
            }
            b':' => {
                tokens.push(Token { kind: TokenKind::Colon, span: Span::new(pos, 1) });
                pos += 1;
            }
            b'=' => {
                tokens.push(Token { kind: TokenKind::Equals, span: Span::new(pos, 1) });
                pos += 1;
            }
            b',' => {
                tokens.push(Token { kind: TokenKind::Comma, span: Span::new(pos, 1) });
                pos += 1;
            }
            b'"' => {
                let (token, next) = lex_string(ctx, src, pos)?;
                tokens.push(token);
                pos = next;
            }
            _ if is_ident_start(b) => {
                let start = pos;
                while pos < bytes.len() && is_ident_continue(bytes[pos]) {
                    pos += 1;
                }
                let text = &src[start..pos];
                tokens.push(Token {
                    kind: TokenKind::Ident(text.to_string()),
                    span: Span::new(start, pos - start),
                });
            }
            _ => {
                // Report the full character, not just its first byte.
                let ch = src[pos..].chars().next().unwrap_or('\u{fffd}');
                return Err(ctx.syntax_error(
                    format!("unexpected character '{ch}'"),
                    Span::new(pos, ch.len_utf8()),
                ));
            }
        }
    }

    tokens.push(Token { kind: TokenKind::Eof, span: Span::new(src.len(), 0) });
    Ok(tokens)
}

fn skip_line(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos] != b'\n' {
        pos += 1;
    }
    pos
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Lex a double-quoted string starting at `start` (which points at the
/// opening quote). Returns the token and the position after the closing
/// quote.
fn lex_string(ctx: &SourceContext, src: &str, start: usize) -> Result<(Token, usize)> {
    let bytes = src.as_bytes();
    let mut value = String::new();
    let mut pos = start + 1;

    while pos < bytes.len() {
        match bytes[pos] {
            b'"' => {
                let span = Span::new(start, pos + 1 - start);
                return Ok((Token { kind: TokenKind::Str(value), span }, pos + 1));
            }
            b'\n' => break,
            b'\\' => {
                let escape = bytes.get(pos + 1).copied();
                match escape {
                    Some(b'"') => value.push('"'),
                    Some(b'\\') => value.push('\\'),
                    _ => {
                        return Err(ctx.syntax_error(
                            "invalid escape sequence in quoted literal",
                            Span::new(pos, 2.min(bytes.len() - pos)),
                        ));
                    }
                }
                pos += 2;
            }
            _ => {
                let ch = src[pos..].chars().next().unwrap_or('\u{fffd}');
                value.push(ch);
                pos += ch.len_utf8();
            }
        }
    }

    Err(ctx.syntax_error("unterminated quoted literal", Span::new(start, pos - start)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let ctx = SourceContext::new(src, "<test>");
        tokenize(&ctx).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_basic_tokens() {
        assert_eq!(
            kinds("test { port: \"int\" }"),
            vec![
                TokenKind::Ident("test".into()),
                TokenKind::LBrace,
                TokenKind::Ident("port".into()),
                TokenKind::Colon,
                TokenKind::Str("int".into()),
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("# leading\nport = \"int\" // trailing\n"),
            vec![
                TokenKind::Ident("port".into()),
                TokenKind::Equals,
                TokenKind::Str("int".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            kinds(r#""a\"b\\c""#),
            vec![TokenKind::Str("a\"b\\c".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_spans() {
        let ctx = SourceContext::new("ab: \"int\"", "<test>");
        let tokens = tokenize(&ctx).unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!(tokens[1].span, Span::new(2, 1));
        assert_eq!(tokens[2].span, Span::new(4, 5));
    }

    #[test]
    fn test_unterminated_string() {
        let ctx = SourceContext::new("key: \"int", "<test>");
        let err = tokenize(&ctx).unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn test_unexpected_character() {
        let ctx = SourceContext::new("key: %", "<test>");
        let err = tokenize(&ctx).unwrap_err();
        assert!(err.to_string().contains("unexpected character '%'"));
    }

    #[test]
    fn test_lone_slash_rejected() {
        let ctx = SourceContext::new("/ oops", "<test>");
        assert!(tokenize(&ctx).is_err());
    }
}

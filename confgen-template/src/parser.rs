//! Recursive-descent parser for the template notation.
//!
//! Grammar (whitespace/comments insignificant, commas optional separators):
//!
//! ```text
//! root   := '{' fields '}' | fields
//! fields := (field ','?)*
//! field  := key (':' | '=')? value
//! key    := IDENT | STRING
//! value  := STRING            -- type annotation leaf
//!         | '{' fields '}'    -- nested object
//! ```
//!
//! Duplicate sibling keys are an error, not a silent override.

use indexmap::map::Entry;

use crate::{
    Result, SourceContext,
    lexer::{Token, TokenKind, tokenize},
    raw::{RawField, RawLeaf, RawNode, RawObject},
};

pub(crate) fn parse(ctx: &SourceContext) -> Result<RawObject> {
    let tokens = tokenize(ctx)?;
    let mut parser = Parser { ctx, tokens, pos: 0 };
    parser.parse_root()
}

struct Parser<'a> {
    ctx: &'a SourceContext,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn parse_root(&mut self) -> Result<RawObject> {
        // Outer braces around the whole template are optional.
        let root = if self.peek().kind == TokenKind::LBrace {
            self.advance();
            let object = self.parse_fields(true)?;
            self.expect_rbrace()?;
            object
        } else {
            self.parse_fields(false)?
        };

        let token = self.peek();
        if token.kind != TokenKind::Eof {
            let found = token.kind.describe();
            let span = token.span;
            return Err(self
                .ctx
                .syntax_error(format!("expected end of input, found {found}"), span));
        }
        Ok(root)
    }

    /// Parse fields until `}` (braced) or end of input (brace-less root).
    fn parse_fields(&mut self, braced: bool) -> Result<RawObject> {
        let mut object = RawObject::default();

        loop {
            while self.peek().kind == TokenKind::Comma {
                self.advance();
            }
            match &self.peek().kind {
                TokenKind::RBrace if braced => break,
                TokenKind::Eof => break,
                _ => {}
            }

            let (key, key_span) = self.parse_key()?;
            let node = self.parse_value(&key)?;

            match object.fields.entry(key) {
                Entry::Occupied(occupied) => {
                    let first_span = occupied.get().key_span;
                    return Err(self
                        .ctx
                        .duplicate_key_error(occupied.key(), first_span, key_span));
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(RawField { key_span, node });
                }
            }
        }

        Ok(object)
    }

    fn parse_key(&mut self) -> Result<(String, crate::raw::Span)> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Ident(name) | TokenKind::Str(name) => {
                self.advance();
                if name.is_empty() {
                    return Err(self.ctx.syntax_error("empty key", token.span));
                }
                Ok((name, token.span))
            }
            other => Err(self.ctx.syntax_error(
                format!("expected a key, found {}", other.describe()),
                token.span,
            )),
        }
    }

    fn parse_value(&mut self, key: &str) -> Result<RawNode> {
        let had_separator = matches!(self.peek().kind, TokenKind::Colon | TokenKind::Equals);
        if had_separator {
            self.advance();
        }

        let token = self.peek().clone();
        match token.kind {
            TokenKind::LBrace => {
                self.advance();
                let object = self.parse_fields(true)?;
                self.expect_rbrace()?;
                Ok(RawNode::Object(object))
            }
            TokenKind::Str(annotation) if had_separator => {
                self.advance();
                Ok(RawNode::Leaf(RawLeaf { annotation, span: token.span }))
            }
            other => {
                let message = if had_separator {
                    format!(
                        "expected a quoted type annotation or '{{' after '{key}', found {}",
                        other.describe()
                    )
                } else {
                    format!("expected ':', '=' or '{{' after '{key}', found {}", other.describe())
                };
                Err(self.ctx.syntax_error(message, token.span))
            }
        }
    }

    fn expect_rbrace(&mut self) -> Result<()> {
        let token = self.peek().clone();
        if token.kind == TokenKind::RBrace {
            self.advance();
            Ok(())
        } else {
            Err(self.ctx.syntax_error(
                format!("expected '}}', found {}", token.kind.describe()),
                token.span,
            ))
        }
    }

    fn peek(&self) -> &Token {
        // The token stream always ends with Eof.
        &self.tokens[self.pos]
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(src: &str) -> RawObject {
        parse(&SourceContext::new(src, "<test>")).unwrap()
    }

    fn parse_err(src: &str) -> String {
        parse(&SourceContext::new(src, "<test>")).unwrap_err().to_string()
    }

    fn leaf<'a>(object: &'a RawObject, key: &str) -> &'a str {
        match &object.fields[key].node {
            RawNode::Leaf(leaf) => &leaf.annotation,
            RawNode::Object(_) => panic!("expected leaf at '{key}'"),
        }
    }

    #[test]
    fn test_nested_object() {
        let root = parse_ok("test {\n  server: \"string?\"\n  port: \"int\"\n  length: \"duration\"\n}");
        assert_eq!(root.len(), 1);
        let RawNode::Object(test) = &root.fields["test"].node else {
            panic!("expected object at 'test'");
        };
        assert_eq!(leaf(test, "server"), "string?");
        assert_eq!(leaf(test, "port"), "int");
        assert_eq!(leaf(test, "length"), "duration");
    }

    #[test]
    fn test_key_order_preserved() {
        let root = parse_ok("b: \"int\"\nz: \"string\"\na: \"boolean\"");
        let keys: Vec<&str> = root.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "z", "a"]);
    }

    #[test]
    fn test_outer_braces_optional() {
        let bare = parse_ok("port: \"int\"");
        let braced = parse_ok("{ port: \"int\" }");
        assert_eq!(bare, braced);
    }

    #[test]
    fn test_separator_variants() {
        let root = parse_ok("a = \"int\", b: \"string\"\nc { d: \"long\" }");
        assert_eq!(root.len(), 3);
        assert!(matches!(root.fields["c"].node, RawNode::Object(_)));
    }

    #[test]
    fn test_quoted_keys() {
        let root = parse_ok("\"my key\": \"string\"");
        assert_eq!(leaf(&root, "my key"), "string");
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = parse_err("port: \"int\"\nport: \"long\"");
        assert!(err.contains("duplicate key 'port'"));
    }

    #[test]
    fn test_duplicate_key_in_nested_object() {
        let err = parse_err("a { x: \"int\"\n x: \"int\" }");
        assert!(err.contains("duplicate key 'x'"));
    }

    #[test]
    fn test_same_key_in_different_objects_allowed() {
        let root = parse_ok("a { x: \"int\" }\nb { x: \"int\" }");
        assert_eq!(root.len(), 2);
    }

    #[test]
    fn test_unbalanced_braces() {
        let err = parse_err("test { port: \"int\"");
        assert!(err.contains("expected '}'"));
    }

    #[test]
    fn test_stray_closing_brace() {
        let err = parse_err("port: \"int\" }");
        assert!(err.contains("expected end of input"));
    }

    #[test]
    fn test_missing_value() {
        let err = parse_err("port:");
        assert!(err.contains("after 'port'"));
    }

    #[test]
    fn test_annotation_requires_separator() {
        let err = parse_err("port \"int\"");
        assert!(err.contains("expected ':', '=' or '{'"));
    }

    #[test]
    fn test_empty_template() {
        assert!(parse_ok("").is_empty());
        assert!(parse_ok("# only a comment\n").is_empty());
    }
}

//! # Lexer - Tokenizing Palette Markup
//!
//! Breaks palette text into tags and text runs using the [Logos] lexer
//! generator. Palette markup is a constrained dialect: attribute values never
//! contain `>`, and there are no processing instructions or CDATA sections,
//! so a tag is simply `<name ...>` or `</name ...>`. Comments (`<!-- ... -->`)
//! are lexed as a single token.
//!
//! [Logos]: https://docs.rs/logos
//!
//! Like the rest of the palette pipeline this lexer is lossless: every byte of
//! the input lands in exactly one token.
//!
//! ```
//! use blocklevel_engine::palette::lexer::lex;
//!
//! let input = "<category>\n  <block type=\"a\"/>\n</category>";
//! let tokens = lex(input);
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```

use logos::Logos;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Token kinds produced by Logos. Converted to [`TokenKind`] so lexing
/// failures can be represented alongside real tokens.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    /// `<name ...>` or `<name .../>`
    #[regex(r"<[A-Za-z][^>]*>")]
    StartTag,

    /// `</name>`
    #[regex(r"</[A-Za-z][^>]*>")]
    EndTag,

    /// `<!-- ... -->`
    #[regex(r"<!--([^-]|-[^-])*-->")]
    Comment,

    /// Anything up to the next `<`
    #[regex(r"[^<]+")]
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    StartTag,
    EndTag,
    Text,
    Comment,
    /// A `<` that does not begin a well-formed tag.
    Invalid,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::StartTag => TokenKind::StartTag,
            RawToken::EndTag => TokenKind::EndTag,
            RawToken::Text => TokenKind::Text,
            RawToken::Comment => TokenKind::Comment,
        }
    }
}

/// A lexed token with its kind, text slice and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Range<usize>,
}

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("Invalid attribute regex")
});

impl<'a> Token<'a> {
    /// Element name of a start or end tag, `None` for text.
    pub fn tag_name(&self) -> Option<&'a str> {
        let inner = match self.kind {
            TokenKind::StartTag => &self.text[1..],
            TokenKind::EndTag => &self.text[2..],
            TokenKind::Text | TokenKind::Comment | TokenKind::Invalid => return None,
        };
        let end = inner
            .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '.')))
            .unwrap_or(inner.len());
        Some(&inner[..end])
    }

    /// True for `<name .../>`.
    pub fn is_self_closing(&self) -> bool {
        self.kind == TokenKind::StartTag
            && self.text[..self.text.len() - 1].trim_end().ends_with('/')
    }

    /// Value of the named attribute on a start tag.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        if self.kind != TokenKind::StartTag {
            return None;
        }
        let text = self.text;
        ATTRIBUTE.captures_iter(text).find_map(|caps| {
            if caps.get(1)?.as_str() != name {
                return None;
            }
            caps.get(2).or_else(|| caps.get(3)).map(|m| &text[m.range()])
        })
    }
}

/// Lex the input into a sequence of tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(input);

    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(raw) => raw.into(),
            Err(()) => TokenKind::Invalid,
        };
        tokens.push(Token {
            kind,
            text: lexer.slice(),
            span: lexer.span(),
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_tags_and_text() {
        assert_eq!(
            kinds("<category id=\"motion\">\n  <block type=\"a\"/>\n</category>"),
            vec![
                TokenKind::StartTag,
                TokenKind::Text,
                TokenKind::StartTag,
                TokenKind::Text,
                TokenKind::EndTag,
            ]
        );
    }

    #[test]
    fn lexing_is_lossless() {
        let input = "x < y <block type='b'>\n<field name=\"N\">10</field></block> <";
        let reconstructed: String = lex(input).iter().map(|t| t.text).collect();
        assert_eq!(reconstructed, input);
    }

    #[test]
    fn stray_angle_bracket_is_invalid() {
        let tokens = lex("a < b");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Invalid));
    }

    #[rstest]
    #[case("<!-- movement -->")]
    #[case("<!---->")]
    #[case("<!-- a <b> - c\n  spans lines -->")]
    fn comment_is_one_token(#[case] input: &str) {
        let tokens = lex(input);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].tag_name(), None);
    }

    #[test]
    fn unterminated_comment_is_invalid() {
        assert_eq!(lex("<!-- open")[0].kind, TokenKind::Invalid);
    }

    #[test]
    fn tag_spanning_lines() {
        let tokens = lex("<category\n    name=\"x\"\n    id=\"control\">");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].tag_name(), Some("category"));
        assert_eq!(tokens[0].attribute("id"), Some("control"));
    }

    #[rstest]
    #[case("<block type=\"motion_goto\">", Some("block"), false)]
    #[case("<block type=\"motion_goto\"/>", Some("block"), true)]
    #[case("<sep gap=\"36\" />", Some("sep"), true)]
    #[case("</block>", Some("block"), false)]
    #[case("<shadow type=\"math_number\"></shadow>", Some("shadow"), false)]
    fn tag_shape(
        #[case] input: &str,
        #[case] name: Option<&str>,
        #[case] self_closing: bool,
    ) {
        let token = &lex(input)[0];
        assert_eq!(token.tag_name(), name);
        assert_eq!(token.is_self_closing(), self_closing);
    }

    #[rstest]
    #[case(r#"<block type="motion_goto">"#, Some("motion_goto"))]
    #[case(r#"<block type='looks_say'/>"#, Some("looks_say"))]
    #[case(r#"<block id="x_size" type="looks_size"/>"#, Some("looks_size"))]
    #[case(r#"<block type = "spaced" >"#, Some("spaced"))]
    #[case(r#"<block data-type="nope" id="x">"#, None)]
    #[case(r#"<block>"#, None)]
    fn type_attribute(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(lex(input)[0].attribute("type"), expected);
    }

    #[test]
    fn text_has_no_tag_name() {
        let tokens = lex("hello");
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].tag_name(), None);
        assert_eq!(tokens[0].attribute("type"), None);
    }
}

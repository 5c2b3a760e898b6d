//! Splits a palette description into its wrapper and a flat list of
//! top-level elements.
//!
//! Nested content (values, shadows, fields, even nested blocks) stays inside
//! its top-level element as a verbatim slice; only the outermost tag is ever
//! inspected.

use super::lexer::{Token, TokenKind, lex};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("No opening wrapper tag")]
    MissingWrapper,

    #[error("Wrapper <{name}> is never closed")]
    UnclosedWrapper { name: String },

    #[error("<{name}> at byte {offset} is never closed")]
    Unterminated { name: String, offset: usize },

    #[error("Unexpected </{name}> at byte {offset}")]
    StrayEndTag { name: String, offset: usize },

    #[error("Invalid markup at byte {offset}")]
    InvalidMarkup { offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind<'a> {
    /// A draggable block; `block_type` is the outermost `type` attribute.
    Block { block_type: Option<&'a str> },
    /// Cosmetic spacing marker.
    Separator,
    /// Labels, comments, buttons and any other tag. Never filtered.
    Other,
}

/// One top-level element of a palette body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    pub kind: ElementKind<'a>,
    /// Horizontal whitespace preceding the element on its first line.
    pub indent: &'a str,
    /// Verbatim source of the element, nested content included.
    pub text: &'a str,
}

impl Element<'_> {
    pub fn is_block(&self) -> bool {
        matches!(self.kind, ElementKind::Block { .. })
    }

    pub fn is_separator(&self) -> bool {
        matches!(self.kind, ElementKind::Separator)
    }
}

/// A palette description split into wrapper and body elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette<'a> {
    /// Everything up to and including the opening wrapper tag.
    pub open: &'a str,
    pub elements: Vec<Element<'a>>,
    /// Indentation of the closing wrapper tag.
    pub close_indent: &'a str,
    /// The closing wrapper tag and everything after it.
    pub close: &'a str,
}

impl<'a> Palette<'a> {
    /// Renders the wrapper around `elements`, one element per line.
    pub fn render(&self, elements: &[Element<'a>]) -> String {
        let mut out = String::from(self.open);
        out.push('\n');
        for element in elements {
            out.push_str(element.indent);
            out.push_str(element.text);
            out.push('\n');
        }
        out.push_str(self.close_indent);
        out.push_str(self.close);
        out
    }

    /// The wrapper with no content: an empty category.
    pub fn render_empty(&self) -> String {
        self.render(&[])
    }
}

/// Scan `input` into a [`Palette`].
///
/// The first start tag is the wrapper. Its body is read element by element
/// until the wrapper's closing tag. Whitespace between elements is dropped
/// except for the indentation of each element's first line.
pub fn scan(input: &str) -> Result<Palette<'_>, ScanError> {
    let tokens = lex(input);

    let mut pos = 0;
    let wrapper = loop {
        let token = tokens.get(pos).ok_or(ScanError::MissingWrapper)?;
        match token.kind {
            TokenKind::StartTag if !token.is_self_closing() => break token,
            TokenKind::Text | TokenKind::Comment => pos += 1,
            _ => return Err(ScanError::MissingWrapper),
        }
    };
    let wrapper_name = wrapper.tag_name().unwrap_or_default();
    let open = &input[..wrapper.span.end];
    pos += 1;

    let mut elements = Vec::new();
    let mut indent = "";
    loop {
        let Some(token) = tokens.get(pos) else {
            return Err(ScanError::UnclosedWrapper {
                name: wrapper_name.to_string(),
            });
        };
        match token.kind {
            TokenKind::Text => {
                if !token.text.trim().is_empty() {
                    log::debug!("Ignoring stray text at byte {}", token.span.start);
                }
                indent = trailing_indent(token.text);
                pos += 1;
            }
            TokenKind::Comment => {
                elements.push(Element {
                    kind: ElementKind::Other,
                    indent,
                    text: token.text,
                });
                indent = "";
                pos += 1;
            }
            TokenKind::Invalid => {
                return Err(ScanError::InvalidMarkup {
                    offset: token.span.start,
                });
            }
            TokenKind::EndTag => {
                let name = token.tag_name().unwrap_or_default();
                if name != wrapper_name {
                    return Err(ScanError::StrayEndTag {
                        name: name.to_string(),
                        offset: token.span.start,
                    });
                }
                return Ok(Palette {
                    open,
                    elements,
                    close_indent: indent,
                    close: &input[token.span.start..],
                });
            }
            TokenKind::StartTag => {
                let last = element_end(&tokens, pos)?;
                elements.push(Element {
                    kind: classify(token),
                    indent,
                    text: &input[token.span.start..tokens[last].span.end],
                });
                indent = "";
                pos = last + 1;
            }
        }
    }
}

fn classify<'a>(token: &Token<'a>) -> ElementKind<'a> {
    match token.tag_name() {
        Some("block") => ElementKind::Block {
            block_type: token.attribute("type"),
        },
        Some("sep") => ElementKind::Separator,
        _ => ElementKind::Other,
    }
}

/// Index of the token closing the element that starts at `start`.
///
/// Only tags with the same name affect depth, so a block's nested shadows
/// and values never close it early, while nested blocks are counted.
fn element_end(tokens: &[Token<'_>], start: usize) -> Result<usize, ScanError> {
    let opener = &tokens[start];
    if opener.is_self_closing() {
        return Ok(start);
    }
    let name = opener.tag_name();
    let mut depth = 1usize;
    for (offset, token) in tokens[start + 1..].iter().enumerate() {
        if token.tag_name() != name {
            continue;
        }
        match token.kind {
            TokenKind::StartTag if !token.is_self_closing() => depth += 1,
            TokenKind::EndTag => {
                depth -= 1;
                if depth == 0 {
                    return Ok(start + 1 + offset);
                }
            }
            _ => {}
        }
    }
    Err(ScanError::Unterminated {
        name: name.unwrap_or_default().to_string(),
        offset: opener.span.start,
    })
}

/// Spaces and tabs after the final newline, if that is all there is.
fn trailing_indent(text: &str) -> &str {
    match text.rfind('\n') {
        Some(idx) => {
            let tail = &text[idx + 1..];
            if tail.chars().all(|c| c == ' ' || c == '\t') {
                tail
            } else {
                ""
            }
        }
        None => "",
    }
}

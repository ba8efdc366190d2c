use std::collections::BTreeMap;

use super::{ParseError, cursor::Cursor};

/// One piece of markup starting at a `<`.
#[derive(Debug)]
pub enum Markup {
    /// An opening tag, possibly self-closed (`<br/>`).
    Open {
        tag: String,
        attrs: BTreeMap<String, String>,
        self_closing: bool,
    },
    /// A closing tag (`</div>`).
    Close { tag: String },
    /// A comment or declaration (doctype, processing instruction); skipped.
    Skip,
}

/// Elements that never have children or closing tags.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is raw text up to the matching close tag.
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

pub fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_TAGS.contains(&tag)
}

/// Parses the markup construct at the cursor, which must be on a `<`.
pub fn parse_markup(cur: &mut Cursor<'_>) -> Result<Markup, ParseError> {
    if cur.starts_with(b"<!--") {
        return skip_comment(cur);
    }
    if cur.starts_with(b"<!") || cur.starts_with(b"<?") {
        return skip_declaration(cur);
    }
    if cur.starts_with(b"</") {
        return parse_close(cur);
    }
    parse_open(cur)
}

fn skip_comment(cur: &mut Cursor<'_>) -> Result<Markup, ParseError> {
    let pos = cur.pos();
    cur.bump_n(4); // <!--
    match cur.find_ignore_case("-->") {
        Some(off) => {
            cur.bump_n(off + 3);
            Ok(Markup::Skip)
        }
        None => Err(ParseError::UnexpectedEof {
            context: "comment",
            pos,
        }),
    }
}

fn skip_declaration(cur: &mut Cursor<'_>) -> Result<Markup, ParseError> {
    let pos = cur.pos();
    while let Some(b) = cur.bump() {
        if b == b'>' {
            return Ok(Markup::Skip);
        }
    }
    Err(ParseError::UnexpectedEof {
        context: "declaration",
        pos,
    })
}

fn parse_close(cur: &mut Cursor<'_>) -> Result<Markup, ParseError> {
    let pos = cur.pos();
    cur.bump_n(2); // </
    let tag = parse_name(cur, "closing tag name")?;
    cur.skip_whitespace();
    if cur.bump() != Some(b'>') {
        return Err(ParseError::MalformedTag {
            pos,
            detail: format!("closing tag </{tag} not terminated with '>'"),
        });
    }
    Ok(Markup::Close { tag })
}

fn parse_open(cur: &mut Cursor<'_>) -> Result<Markup, ParseError> {
    let pos = cur.pos();
    cur.bump(); // <
    let tag = parse_name(cur, "tag name")?;
    let attrs = parse_attrs(cur)?;

    cur.skip_whitespace();
    let self_closing = if cur.peek() == Some(b'/') {
        cur.bump();
        true
    } else {
        false
    };
    if cur.bump() != Some(b'>') {
        return Err(ParseError::MalformedTag {
            pos,
            detail: format!("tag <{tag} not terminated with '>'"),
        });
    }

    Ok(Markup::Open {
        tag,
        attrs,
        self_closing,
    })
}

/// Parses a tag or attribute name, lowercased.
///
/// Names start with an ASCII letter and continue with letters, digits,
/// `-`, `_`, or `:`.
fn parse_name(cur: &mut Cursor<'_>, context: &'static str) -> Result<String, ParseError> {
    let pos = cur.pos();
    match cur.peek() {
        Some(b) if b.is_ascii_alphabetic() => {}
        Some(b) => {
            return Err(ParseError::MalformedTag {
                pos,
                detail: format!("expected {context}, found {:?}", b as char),
            });
        }
        None => {
            return Err(ParseError::UnexpectedEof { context, pos });
        }
    }
    let name = cur.eat_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':'));
    Ok(name.to_ascii_lowercase())
}

/// Parses attributes up to (but not including) the tag terminator.
///
/// Values must be single- or double-quoted; a bare name is a boolean
/// attribute with an empty value. The first occurrence of a name wins.
fn parse_attrs(cur: &mut Cursor<'_>) -> Result<BTreeMap<String, String>, ParseError> {
    let mut attrs = BTreeMap::new();
    loop {
        cur.skip_whitespace();
        match cur.peek() {
            Some(b'>') | Some(b'/') => return Ok(attrs),
            Some(b) if b.is_ascii_alphabetic() => {}
            Some(b) => {
                return Err(ParseError::MalformedAttribute {
                    pos: cur.pos(),
                    detail: format!("expected attribute name, found {:?}", b as char),
                });
            }
            None => {
                return Err(ParseError::UnexpectedEof {
                    context: "attribute list",
                    pos: cur.pos(),
                });
            }
        }
        let name = parse_name(cur, "attribute name")?;
        cur.skip_whitespace();

        let value = if cur.peek() == Some(b'=') {
            cur.bump();
            cur.skip_whitespace();
            parse_attr_value(cur, &name)?
        } else {
            String::new()
        };
        attrs.entry(name).or_insert(value);
    }
}

fn parse_attr_value(cur: &mut Cursor<'_>, name: &str) -> Result<String, ParseError> {
    let pos = cur.pos();
    let quote = match cur.peek() {
        Some(q @ (b'"' | b'\'')) => q,
        _ => {
            return Err(ParseError::MalformedAttribute {
                pos,
                detail: format!("value of {name:?} must be quoted"),
            });
        }
    };
    cur.bump();
    let raw = cur.eat_while(|b| b != quote);
    if cur.bump() != Some(quote) {
        return Err(ParseError::UnexpectedEof {
            context: "attribute value",
            pos,
        });
    }
    Ok(html_escape::decode_html_entities(raw).into_owned())
}

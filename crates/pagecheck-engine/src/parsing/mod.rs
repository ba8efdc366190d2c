pub mod builder;
pub mod cursor;
pub mod markup;

use crate::dom::Document;

use builder::TreeBuilder;
use cursor::Cursor;
use markup::Markup;

/// Failure to load markup into a [`Document`].
///
/// Parse errors are fatal for the scenario that triggered the load; other
/// scenarios in the same run are unaffected because each performs its own
/// load.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of input in {context} starting at byte {pos}")]
    UnexpectedEof { context: &'static str, pos: usize },
    #[error("malformed tag at byte {pos}: {detail}")]
    MalformedTag { pos: usize, detail: String },
    #[error("malformed attribute at byte {pos}: {detail}")]
    MalformedAttribute { pos: usize, detail: String },
    #[error("closing tag </{found}> at byte {pos} does not match open element <{open}>")]
    MismatchedClose {
        open: String,
        found: String,
        pos: usize,
    },
    #[error("closing tag </{tag}> at byte {pos} has no open element")]
    StrayClose { tag: String, pos: usize },
    #[error("element <{tag}> still open at end of input")]
    UnterminatedElement { tag: String },
}

/// Parses markup text into a fully independent [`Document`].
///
/// Pure function of its input: no nodes are shared across calls, so two
/// loads of the same text yield value-equal but identity-distinct trees.
/// The id index is built during the same traversal.
pub fn parse_document(input: &str) -> Result<Document, ParseError> {
    let mut cur = Cursor::new(input);
    let mut builder = TreeBuilder::new();

    while !cur.eof() {
        if cur.peek() == Some(b'<') {
            let pos = cur.pos();
            match markup::parse_markup(&mut cur)? {
                Markup::Open {
                    tag,
                    attrs,
                    self_closing,
                } => {
                    let raw_text = markup::is_raw_text(&tag);
                    builder.open_element(tag.clone(), attrs);
                    if self_closing || markup::is_void(&tag) {
                        builder.close_implicit();
                    } else if raw_text {
                        let content = consume_raw_text(&mut cur, &tag)?;
                        builder.append_text(content);
                        builder.close_implicit();
                    }
                }
                Markup::Close { tag } => builder.close_element(&tag, pos)?,
                Markup::Skip => {}
            }
        } else {
            let raw = cur.eat_while(|b| b != b'<');
            builder.append_text(html_escape::decode_html_entities(raw).into_owned());
        }
    }

    builder.finish()
}

/// Consumes the content of a raw-text element (`script`, `style`) up to and
/// including its close tag. The content is not entity-decoded.
fn consume_raw_text(cur: &mut Cursor<'_>, tag: &str) -> Result<String, ParseError> {
    let pos = cur.pos();
    let close = format!("</{tag}");
    let Some(off) = cur.find_ignore_case(&close) else {
        return Err(ParseError::UnterminatedElement {
            tag: tag.to_string(),
        });
    };
    let content = cur.s[cur.i..cur.i + off].to_string();
    cur.bump_n(off + close.len());
    cur.skip_whitespace();
    if cur.bump() != Some(b'>') {
        return Err(ParseError::MalformedTag {
            pos,
            detail: format!("closing tag </{tag} not terminated with '>'"),
        });
    }
    Ok(content)
}

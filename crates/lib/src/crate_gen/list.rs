//! Parsing of list literals passed on the command line.
//!
//! Build systems pass source lists as a JSON array or as a literal such as
//! `['a.rs', "b.rs"]`. JSON is tried first; anything else goes through a
//! scanner for quoted strings that understands the common backslash escapes.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListLiteralError {
  #[error("list literal must be enclosed in brackets: {0}")]
  NotBracketed(String),

  #[error("unterminated string in list literal: {0}")]
  Unterminated(String),

  #[error("unexpected character {found:?} at offset {offset} in list literal")]
  Unexpected { found: char, offset: usize },
}

/// Parse a bracketed list of quoted strings.
pub fn parse_list_literal(literal: &str) -> Result<Vec<String>, ListLiteralError> {
  let trimmed = literal.trim();
  if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
    return Ok(items);
  }

  let inner = trimmed
    .strip_prefix('[')
    .and_then(|s| s.strip_suffix(']'))
    .ok_or_else(|| ListLiteralError::NotBracketed(literal.to_string()))?;

  let mut items = Vec::new();
  let mut chars = inner.char_indices().peekable();
  let mut expect_item = true;

  while let Some((offset, c)) = chars.next() {
    match c {
      c if c.is_whitespace() => {}
      ',' if !expect_item => expect_item = true,
      '\'' | '"' if expect_item => {
        let quote = c;
        let mut item = String::new();
        let mut closed = false;
        while let Some((_, c)) = chars.next() {
          match c {
            '\\' => {
              if let Some((_, escaped)) = chars.next() {
                item.push(unescape(escaped));
              }
            }
            c if c == quote => {
              closed = true;
              break;
            }
            c => item.push(c),
          }
        }
        if !closed {
          return Err(ListLiteralError::Unterminated(literal.to_string()));
        }
        items.push(item);
        expect_item = false;
      }
      found => return Err(ListLiteralError::Unexpected { found, offset }),
    }
  }

  Ok(items)
}

fn unescape(c: char) -> char {
  match c {
    'n' => '\n',
    't' => '\t',
    'r' => '\r',
    '0' => '\0',
    c => c,
  }
}

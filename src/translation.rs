//! Placeholder rewriting for numbered-placeholder dialects.
//!
//! Statements are assembled with positional `?` placeholders; PostgreSQL's
//! driver expects `$1..$N`. [`number_placeholders`] rewrites bare `?` markers
//! in order, skipping quoted strings, comments, and dollar-quoted blocks via
//! a lightweight state machine. It does not attempt full SQL parsing; complex
//! PL/pgSQL bodies should use native placeholders directly.

use std::borrow::Cow;

#[derive(Clone)]
enum State {
    Normal,
    SingleQuoted,
    DoubleQuoted,
    LineComment,
    BlockComment(u32),
    DollarQuoted(String),
}

fn is_line_comment_start(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'-') && bytes.get(idx + 1) == Some(&b'-')
}

fn is_block_comment_start(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'/') && bytes.get(idx + 1) == Some(&b'*')
}

fn is_block_comment_end(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx) == Some(&b'*') && bytes.get(idx + 1) == Some(&b'/')
}

fn try_start_dollar_quote(bytes: &[u8], start: usize) -> Option<(String, usize)> {
    let mut idx = start + 1;
    while idx < bytes.len() && bytes[idx] != b'$' {
        let b = bytes[idx];
        if !(b.is_ascii_alphanumeric() || b == b'_') {
            return None;
        }
        idx += 1;
    }

    if idx < bytes.len() && bytes[idx] == b'$' {
        let tag = String::from_utf8(bytes[start + 1..idx].to_vec()).ok()?;
        Some((tag, idx))
    } else {
        None
    }
}

fn matches_tag(bytes: &[u8], idx: usize, tag: &str) -> bool {
    let end = idx + 1 + tag.len();
    end < bytes.len()
        && bytes[idx + 1..=end].starts_with(tag.as_bytes())
        && bytes.get(end) == Some(&b'$')
}

/// Rewrite each bare `?` outside literals and comments to `$1`, `$2`, ...
///
/// Returns a borrowed `Cow` when the statement contains no placeholders.
#[must_use]
pub fn number_placeholders(sql: &str) -> Cow<'_, str> {
    let mut out: Option<String> = None;
    let mut seg_start = 0usize;
    let mut state = State::Normal;
    let mut counter = 0usize;
    let mut idx = 0;
    let bytes = sql.as_bytes();

    while idx < bytes.len() {
        let b = bytes[idx];
        match state {
            State::Normal => match b {
                b'\'' => state = State::SingleQuoted,
                b'"' => state = State::DoubleQuoted,
                _ if is_line_comment_start(bytes, idx) => state = State::LineComment,
                _ if is_block_comment_start(bytes, idx) => state = State::BlockComment(1),
                b'$' => {
                    if let Some((tag, advance)) = try_start_dollar_quote(bytes, idx) {
                        state = State::DollarQuoted(tag);
                        idx = advance;
                    }
                }
                b'?' => {
                    counter += 1;
                    let buf = out.get_or_insert_with(String::new);
                    buf.push_str(&sql[seg_start..idx]);
                    buf.push('$');
                    buf.push_str(&counter.to_string());
                    seg_start = idx + 1;
                }
                _ => {}
            },
            State::SingleQuoted => {
                if b == b'\'' {
                    if bytes.get(idx + 1) == Some(&b'\'') {
                        idx += 1; // skip escaped quote
                    } else {
                        state = State::Normal;
                    }
                }
            }
            State::DoubleQuoted => {
                if b == b'"' {
                    if bytes.get(idx + 1) == Some(&b'"') {
                        idx += 1; // skip escaped quote
                    } else {
                        state = State::Normal;
                    }
                }
            }
            State::LineComment => {
                if b == b'\n' {
                    state = State::Normal;
                }
            }
            State::BlockComment(depth) => {
                if is_block_comment_start(bytes, idx) {
                    state = State::BlockComment(depth + 1);
                } else if is_block_comment_end(bytes, idx) {
                    if depth == 1 {
                        state = State::Normal;
                    } else {
                        state = State::BlockComment(depth - 1);
                    }
                }
            }
            State::DollarQuoted(ref tag) => {
                if b == b'$' && matches_tag(bytes, idx, tag) {
                    let tag_len = tag.len();
                    state = State::Normal;
                    idx += tag_len;
                }
            }
        }

        idx += 1;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&sql[seg_start..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(sql),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_placeholders_in_order() {
        let sql = "insert into t (a,b,c) values (?,?,?)";
        let res = number_placeholders(sql);
        assert_eq!(res, "insert into t (a,b,c) values ($1,$2,$3)");
    }

    #[test]
    fn borrows_when_no_placeholders() {
        let sql = "select count(*) from t";
        let res = number_placeholders(sql);
        assert!(matches!(res, Cow::Borrowed(_)));
        assert_eq!(res, sql);
    }

    #[test]
    fn skips_inside_literals_and_comments() {
        let sql = "select '?', x -- ?\n/* ? */ from t where a = ? and b = ?";
        let res = number_placeholders(sql);
        assert_eq!(res, "select '?', x -- ?\n/* ? */ from t where a = $1 and b = $2");
    }

    #[test]
    fn skips_dollar_quoted_blocks() {
        let sql = "$fn$ where a = ? $fn$ and b = ?";
        let res = number_placeholders(sql);
        assert_eq!(res, "$fn$ where a = ? $fn$ and b = $1");
    }

    #[test]
    fn handles_escaped_quotes() {
        let sql = "select 'it''s ?' where a = ?";
        let res = number_placeholders(sql);
        assert_eq!(res, "select 'it''s ?' where a = $1");
    }
}

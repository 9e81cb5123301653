//! Query-string parsing for the locale override.
//!
//! The bootstrap reads the `locale` key of the page URL's query string. The
//! parser is deliberately forgiving: malformed input yields whatever pairs
//! could be read, never an error, because an unreadable override simply
//! means no override.

use winnow::combinator::{opt, preceded, separated};
use winnow::prelude::*;
use winnow::token::take_while;

/// Key of the query parameter carrying the locale override.
pub const LOCALE_KEY: &str = "locale";

/// Parse a query string into decoded key/value pairs.
///
/// A leading `?` is accepted and skipped. A key without `=` decodes to an
/// empty value, and `key=` decodes to a present-but-empty value.
///
/// # Example
///
/// ```
/// use locboot::query::parse_query;
///
/// let pairs = parse_query("?locale=pt_BR&debug=1");
/// assert_eq!(pairs[0], ("locale".to_string(), "pt_BR".to_string()));
/// ```
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let mut input = query.strip_prefix('?').unwrap_or(query);
    pairs(&mut input).unwrap_or_default()
}

/// Extract the locale override from a query string.
///
/// Returns `None` when the `locale` key is absent. When the key appears more
/// than once the last occurrence wins, matching how the original frontend's
/// query-object conversion behaved.
pub fn locale_override(query: &str) -> Option<String> {
    parse_query(query)
        .into_iter()
        .rev()
        .find(|(key, _)| key == LOCALE_KEY)
        .map(|(_, value)| value)
}

/// Parse `key[=value](&key[=value])*`.
fn pairs(input: &mut &str) -> ModalResult<Vec<(String, String)>> {
    separated(0.., pair, '&').parse_next(input)
}

/// Parse a single `key[=value]` pair, decoding both components.
fn pair(input: &mut &str) -> ModalResult<(String, String)> {
    let key = take_while(1.., |c: char| c != '=' && c != '&').parse_next(input)?;
    let value = opt(preceded('=', take_while(0.., |c: char| c != '&'))).parse_next(input)?;
    Ok((decode_component(key), decode_component(value.unwrap_or(""))))
}

/// Decode a form-urlencoded component: `+` becomes a space and `%XX` escapes
/// become their byte value. Invalid escapes pass through untouched.
fn decode_component(raw: &str) -> String {
    let mut out = Vec::with_capacity(raw.len());
    let mut bytes = raw.bytes();
    while let Some(b) = bytes.next() {
        match b {
            b'+' => out.push(b' '),
            b'%' => {
                let mut rest = bytes.clone();
                match (rest.next().and_then(hex_digit), rest.next().and_then(hex_digit)) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        bytes = rest;
                    }
                    _ => out.push(b'%'),
                }
            }
            other => out.push(other),
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(decode_component("pt%5FBR"), "pt_BR");
    }

    #[test]
    fn plus_decodes_to_space() {
        assert_eq!(decode_component("a+b"), "a b");
    }

    #[test]
    fn invalid_escape_passes_through() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
    }
}

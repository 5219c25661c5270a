//! Cell reference substitution for plain arithmetic formulas
//!
//! The expression is split into address tokens (an uppercase letter directly followed by
//! digits) and everything else. Tokens are found left to right without overlap, so `AB12`
//! contains the token `B12` and `A12B3` contains `A12` and `B3`.

use sheetcalc_core::CellSnapshot;
use tracing::trace;

/// Value substituted for references that resolve to nothing
const MISSING_VALUE: &str = "0";

/// A classified run of expression text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Cell address text such as `B12`
    Address(&'a str),
    /// Any text between addresses
    Other(&'a str),
}

/// Split an expression into address and non-address runs
pub fn segments(expression: &str) -> Segments<'_> {
    Segments {
        input: expression,
        pos: 0,
    }
}

/// Iterator returned by [`segments`]
pub struct Segments<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Segments<'a> {
    /// Length of the address token starting at `at`, if one starts there
    fn address_len(&self, at: usize) -> Option<usize> {
        let bytes = &self.input.as_bytes()[at..];
        if !bytes.first()?.is_ascii_uppercase() {
            return None;
        }
        let digits = bytes[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        (digits > 0).then_some(1 + digits)
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        if start >= self.input.len() {
            return None;
        }

        if let Some(len) = self.address_len(start) {
            self.pos += len;
            return Some(Segment::Address(&self.input[start..self.pos]));
        }

        // Token boundaries are ASCII bytes, so byte offsets stay on char boundaries
        let mut end = start + 1;
        while end < self.input.len() && self.address_len(end).is_none() {
            end += 1;
        }
        self.pos = end;
        Some(Segment::Other(&self.input[start..end]))
    }
}

/// Replace every address token with the referenced cell's display value
///
/// A reference to an absent cell, or to a cell whose display value is empty, becomes `0`.
pub fn substitute(expression: &str, cells: &CellSnapshot) -> String {
    let mut out = String::with_capacity(expression.len());

    for segment in segments(expression) {
        match segment {
            Segment::Address(address) => {
                let value = resolve(address, cells);
                trace!(address, value, "substituted cell reference");
                out.push_str(value);
            }
            Segment::Other(text) => out.push_str(text),
        }
    }

    out
}

fn resolve<'a>(address: &str, cells: &'a CellSnapshot) -> &'a str {
    match cells.get(address) {
        Some(cell) if !cell.display_value.is_empty() => &cell.display_value,
        _ => MISSING_VALUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetcalc_core::Cell;

    fn snapshot(entries: &[(&str, &str)]) -> CellSnapshot {
        entries
            .iter()
            .map(|(addr, value)| (*addr, Cell::literal(*value)))
            .collect()
    }

    #[test]
    fn test_segments() {
        let parts: Vec<_> = segments("A1+(B22*3)").collect();
        assert_eq!(
            parts,
            vec![
                Segment::Address("A1"),
                Segment::Other("+("),
                Segment::Address("B22"),
                Segment::Other("*3)"),
            ]
        );
    }

    #[test]
    fn test_segments_leftmost_non_overlapping() {
        let parts: Vec<_> = segments("AB12").collect();
        assert_eq!(parts, vec![Segment::Other("A"), Segment::Address("B12")]);

        let parts: Vec<_> = segments("A12B3").collect();
        assert_eq!(parts, vec![Segment::Address("A12"), Segment::Address("B3")]);
    }

    #[test]
    fn test_segments_non_ascii() {
        let parts: Vec<_> = segments("é+A1×2").collect();
        assert_eq!(
            parts,
            vec![
                Segment::Other("é+"),
                Segment::Address("A1"),
                Segment::Other("×2"),
            ]
        );
    }

    #[test]
    fn test_segments_without_addresses() {
        let parts: Vec<_> = segments("a1 + B + 12").collect();
        assert_eq!(parts, vec![Segment::Other("a1 + B + 12")]);
        assert_eq!(segments("").count(), 0);
    }

    #[test]
    fn test_substitute() {
        let cells = snapshot(&[("A1", "3"), ("A2", "4")]);
        assert_eq!(substitute("A1+A2", &cells), "3+4");
        assert_eq!(substitute("A1*A1-A2", &cells), "3*3-4");
    }

    #[test]
    fn test_substitute_missing_and_empty() {
        let cells = snapshot(&[("A1", "3"), ("B1", "")]);
        assert_eq!(substitute("A1+A2", &cells), "3+0");
        assert_eq!(substitute("B1*2", &cells), "0*2");
    }

    #[test]
    fn test_substitute_uses_text_verbatim() {
        let cells = snapshot(&[("A1", "hello"), ("A2", "-3")]);
        assert_eq!(substitute("A1", &cells), "hello");
        assert_eq!(substitute("5-A2", &cells), "5--3");
    }

    #[test]
    fn test_substitute_does_not_normalize_keys() {
        let cells = snapshot(&[("A1", "9")]);
        assert_eq!(substitute("A01", &cells), "0");
    }
}

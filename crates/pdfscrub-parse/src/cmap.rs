//! ToUnicode CMap parser.
//!
//! Only the `bfchar` and `bfrange` mappings are read; code-space ranges are
//! ignored. Codes in a byte string are therefore segmented greedily: a code
//! grows one byte at a time until it names a mapping (or reaches the longest
//! source code the map declares).

use std::collections::HashMap;

use tracing::debug;

use crate::tokenizer::{Lexer, Operand};

/// Longest character code considered, in bytes.
const MAX_CODE_BYTES: usize = 4;
/// Widest `bfrange` expanded.
const MAX_RANGE_SPAN: u32 = 0xFFFF;

/// Character code to Unicode mapping parsed from a `/ToUnicode` stream.
#[derive(Debug, Clone, Default)]
pub struct CMap {
    mappings: HashMap<u32, String>,
    max_code_bytes: usize,
}

impl CMap {
    /// Parse CMap data. Mappings read before a malformed token are kept.
    pub fn parse(data: &[u8]) -> Self {
        let mut cmap = CMap {
            mappings: HashMap::new(),
            max_code_bytes: 1,
        };
        for op in Lexer::new(data) {
            let op = match op {
                Ok(op) => op,
                Err(e) => {
                    debug!(error = %e, "stopped reading ToUnicode CMap");
                    break;
                }
            };
            match op.name.as_str() {
                "endbfchar" => cmap.read_bfchar(&op.operands),
                "endbfrange" => cmap.read_bfrange(&op.operands),
                _ => {}
            }
        }
        cmap
    }

    fn read_bfchar(&mut self, operands: &[Operand]) {
        for pair in operands.chunks_exact(2) {
            let (Some(src), Some(dst)) = (pair[0].as_string_bytes(), pair[1].as_string_bytes())
            else {
                continue;
            };
            if let Some(code) = self.source_code(src) {
                self.mappings.insert(code, units_to_string(&be_units(dst)));
            }
        }
    }

    fn read_bfrange(&mut self, operands: &[Operand]) {
        for triple in operands.chunks_exact(3) {
            let (Some(lo), Some(hi)) = (triple[0].as_string_bytes(), triple[1].as_string_bytes())
            else {
                continue;
            };
            let (Some(lo), Some(hi)) = (self.source_code(lo), self.source_code(hi)) else {
                continue;
            };
            if hi < lo {
                continue;
            }
            let hi = hi.min(lo.saturating_add(MAX_RANGE_SPAN));

            match &triple[2] {
                Operand::Array(items) => {
                    for (code, item) in (lo..=hi).zip(items) {
                        if let Some(dst) = item.as_string_bytes() {
                            self.mappings.insert(code, units_to_string(&be_units(dst)));
                        }
                    }
                }
                dst => {
                    let Some(dst) = dst.as_string_bytes() else {
                        continue;
                    };
                    let mut units = be_units(dst);
                    for code in lo..=hi {
                        self.mappings.insert(code, units_to_string(&units));
                        // successive codes bump the last UTF-16 unit
                        if let Some(last) = units.last_mut() {
                            *last = last.wrapping_add(1);
                        }
                    }
                }
            }
        }
    }

    fn source_code(&mut self, bytes: &[u8]) -> Option<u32> {
        if bytes.is_empty() || bytes.len() > MAX_CODE_BYTES {
            return None;
        }
        self.max_code_bytes = self.max_code_bytes.max(bytes.len());
        Some(be_number(bytes))
    }

    /// Look up the Unicode string for a character code.
    pub fn lookup(&self, code: u32) -> Option<&str> {
        self.mappings.get(&code).map(String::as_str)
    }

    /// Split the code starting at `pos`: returns the code and its byte length.
    ///
    /// The code is extended while it is unmapped and more bytes remain.
    pub fn next_code(&self, bytes: &[u8], pos: usize) -> (u32, usize) {
        let mut code = u32::from(bytes[pos]);
        let mut len = 1;
        while !self.mappings.contains_key(&code)
            && pos + len < bytes.len()
            && len < self.max_code_bytes
        {
            code = (code << 8) | u32::from(bytes[pos + len]);
            len += 1;
        }
        (code, len)
    }

    /// Iterate the codes of `bytes` in order.
    pub fn codes<'a>(&'a self, bytes: &'a [u8]) -> impl Iterator<Item = u32> + 'a {
        let mut pos = 0;
        std::iter::from_fn(move || {
            if pos >= bytes.len() {
                return None;
            }
            let (code, len) = self.next_code(bytes, pos);
            pos += len;
            Some(code)
        })
    }

    /// Decode `bytes`; codes without a mapping contribute nothing.
    pub fn decode(&self, bytes: &[u8]) -> String {
        self.codes(bytes)
            .filter_map(|code| self.lookup(code))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

fn be_number(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0, |acc, b| (acc << 8) | u32::from(*b))
}

/// Big-endian UTF-16 units. An odd leading byte forms a unit of its own.
fn be_units(bytes: &[u8]) -> Vec<u16> {
    let (head, rest) = if bytes.len() % 2 == 1 {
        (Some(u16::from(bytes[0])), &bytes[1..])
    } else {
        (None, bytes)
    };
    head.into_iter()
        .chain(rest.chunks_exact(2).map(|p| u16::from_be_bytes([p[0], p[1]])))
        .collect()
}

/// Compose surrogate pairs; lone surrogates become U+FFFD.
fn units_to_string(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmap(body: &str) -> CMap {
        CMap::parse(body.as_bytes())
    }

    #[test]
    fn empty_cmap() {
        let c = cmap("");
        assert!(c.is_empty());
        assert_eq!(c.lookup(0x41), None);
    }

    #[test]
    fn bfchar_mapping() {
        let c = cmap("1 beginbfchar\n<0041> <0041>\nendbfchar");
        assert_eq!(c.lookup(0x41), Some("A"));
        assert_eq!(c.decode(&[0x00, 0x41]), "A");
    }

    #[test]
    fn bfrange_increments() {
        let c = cmap("1 beginbfrange\n<0041> <0043> <0041>\nendbfrange");
        assert_eq!(c.lookup(0x41), Some("A"));
        assert_eq!(c.lookup(0x42), Some("B"));
        assert_eq!(c.lookup(0x43), Some("C"));
        assert_eq!(c.decode(&[0x00, 0x41, 0x00, 0x43]), "AC");
    }

    #[test]
    fn bfrange_increments_last_unit_of_multi_unit_destination() {
        let c = cmap("1 beginbfrange <01> <02> <00660066> endbfrange");
        assert_eq!(c.lookup(1), Some("ff"));
        assert_eq!(c.lookup(2), Some("fg"));
    }

    #[test]
    fn bfrange_array_destination() {
        let c = cmap("1 beginbfrange\n<0010> <0012> [<0058> <0059> <005A>]\nendbfrange");
        assert_eq!(c.lookup(0x10), Some("X"));
        assert_eq!(c.lookup(0x11), Some("Y"));
        assert_eq!(c.lookup(0x12), Some("Z"));
    }

    #[test]
    fn surrogate_pair_destination() {
        let c = cmap("1 beginbfchar <01> <D835DC00> endbfchar");
        assert_eq!(c.lookup(1), Some("\u{1D400}"));
    }

    #[test]
    fn ligature_destination() {
        let c = cmap("1 beginbfchar <1F> <00660069> endbfchar");
        assert_eq!(c.decode(&[0x1F]), "fi");
    }

    #[test]
    fn single_byte_codes_do_not_extend() {
        let c = cmap("2 beginbfchar <41> <0061> <42> <0062> endbfchar");
        // 0x43 is unmapped; it must not swallow the following byte
        assert_eq!(c.decode(&[0x41, 0x43, 0x42]), "ab");
        assert_eq!(c.codes(&[0x41, 0x43, 0x42]).collect::<Vec<_>>(), vec![0x41, 0x43, 0x42]);
    }

    #[test]
    fn mixed_width_codes_extend_greedily() {
        let c = cmap(
            "1 beginbfchar <20> <0020> endbfchar\n\
             1 beginbfchar <8140> <3000> endbfchar",
        );
        assert_eq!(c.codes(&[0x20, 0x81, 0x40]).collect::<Vec<_>>(), vec![0x20, 0x8140]);
        assert_eq!(c.decode(&[0x20, 0x81, 0x40]), " \u{3000}");
    }

    #[test]
    fn full_boilerplate() {
        let data = b"/CIDInit /ProcSet findresource begin\n\
            12 dict begin\n\
            begincmap\n\
            /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
            /CMapName /Adobe-Identity-UCS def\n\
            /CMapType 2 def\n\
            1 begincodespacerange\n<0000> <FFFF>\nendcodespacerange\n\
            2 beginbfchar\n<0003> <0020>\n<0024> <0041>\nendbfchar\n\
            1 beginbfrange\n<0044> <0046> <0061>\nendbfrange\n\
            endcmap\n\
            CMapName currentdict /CMap defineresource pop\nend\nend";
        let c = CMap::parse(data);
        assert_eq!(c.len(), 5);
        assert_eq!(c.decode(&[0x00, 0x24, 0x00, 0x03, 0x00, 0x45]), "A b");
    }

    #[test]
    fn malformed_tail_keeps_earlier_mappings() {
        let c = cmap("1 beginbfchar <01> <0041> endbfchar 1 beginbfchar <02> (unterminated");
        assert_eq!(c.lookup(1), Some("A"));
        assert_eq!(c.lookup(2), None);
    }

    #[test]
    fn inverted_range_is_ignored() {
        let c = cmap("1 beginbfrange <05> <01> <0041> endbfrange");
        assert!(c.is_empty());
    }
}

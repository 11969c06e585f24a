//! Built-in simple-font encodings and `Differences` handling.
//!
//! Encodings map a single-byte character code to a glyph name. Text is
//! recovered by looking the glyph name up in the glyph list, so a custom
//! `Differences` entry such as `/uni20AC` decodes the same way as the
//! standard `/Euro`.

use std::borrow::Cow;

use crate::glyph_list::glyph_name_to_unicode;

/// A named built-in encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardEncoding {
    /// Adobe StandardEncoding.
    Standard,
    /// WinAnsiEncoding.
    WinAnsi,
    /// MacRomanEncoding.
    MacRoman,
    /// MacExpertEncoding.
    MacExpert,
    /// Built-in encoding of the Symbol font. Used for symbolic fonts that
    /// carry a `Differences` dictionary without a `BaseEncoding`.
    Symbol,
}

impl StandardEncoding {
    /// Resolve an `/Encoding` or `/BaseEncoding` name.
    ///
    /// Only the three names a font dictionary may reference are accepted.
    pub fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"WinAnsiEncoding" => Some(Self::WinAnsi),
            b"MacRomanEncoding" => Some(Self::MacRoman),
            b"MacExpertEncoding" => Some(Self::MacExpert),
            _ => None,
        }
    }

    /// Glyph name assigned to `code`, if any.
    pub fn glyph_name(self, code: u8) -> Option<&'static str> {
        self.table()[code as usize]
    }

    fn table(self) -> &'static [Option<&'static str>; 256] {
        match self {
            Self::Standard => &STANDARD_NAMES,
            Self::WinAnsi => &WIN_ANSI_NAMES,
            Self::MacRoman => &MAC_ROMAN_NAMES,
            Self::MacExpert => &MAC_EXPERT_NAMES,
            Self::Symbol => &SYMBOL_NAMES,
        }
    }
}

/// Code to glyph-name table of one simple font.
#[derive(Debug, Clone)]
pub struct FontEncoding {
    names: [Option<Cow<'static, str>>; 256],
}

impl FontEncoding {
    pub fn from_standard(encoding: StandardEncoding) -> Self {
        let table = encoding.table();
        Self {
            names: std::array::from_fn(|i| table[i].map(Cow::Borrowed)),
        }
    }

    /// Override individual codes, as a `Differences` array does.
    ///
    /// Entries are applied in order, so a later entry for the same code wins.
    pub fn apply_differences<I, S>(&mut self, differences: I)
    where
        I: IntoIterator<Item = (u8, S)>,
        S: Into<String>,
    {
        for (code, name) in differences {
            self.names[code as usize] = Some(Cow::Owned(name.into()));
        }
    }

    pub fn glyph_name(&self, code: u8) -> Option<&str> {
        self.names[code as usize].as_deref()
    }

    /// Text for a single code, or `None` when the code has no glyph name
    /// or the name is not a known glyph.
    pub fn decode(&self, code: u8) -> Option<String> {
        self.glyph_name(code).and_then(glyph_name_to_unicode)
    }

    /// Decode a byte string. Codes without a usable mapping contribute nothing.
    pub fn decode_bytes(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len());
        for &b in bytes {
            if let Some(text) = self.decode(b) {
                out.push_str(&text);
            }
        }
        out
    }
}

const fn build_table(entries: &[(u8, &'static str)]) -> [Option<&'static str>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < entries.len() {
        table[entries[i].0 as usize] = Some(entries[i].1);
        i += 1;
    }
    table
}

/// Adobe StandardEncoding, the built-in encoding of Latin Type 1 fonts.
#[rustfmt::skip]
static STANDARD_NAMES: [Option<&str>; 256] = build_table(&[
    (0x20, "space"), (0x21, "exclam"), (0x22, "quotedbl"), (0x23, "numbersign"),
    (0x24, "dollar"), (0x25, "percent"), (0x26, "ampersand"), (0x27, "quoteright"),
    (0x28, "parenleft"), (0x29, "parenright"), (0x2A, "asterisk"), (0x2B, "plus"),
    (0x2C, "comma"), (0x2D, "hyphen"), (0x2E, "period"), (0x2F, "slash"), (0x30, "zero"),
    (0x31, "one"), (0x32, "two"), (0x33, "three"), (0x34, "four"), (0x35, "five"),
    (0x36, "six"), (0x37, "seven"), (0x38, "eight"), (0x39, "nine"), (0x3A, "colon"),
    (0x3B, "semicolon"), (0x3C, "less"), (0x3D, "equal"), (0x3E, "greater"), (0x3F, "question"),
    (0x40, "at"), (0x41, "A"), (0x42, "B"), (0x43, "C"), (0x44, "D"), (0x45, "E"), (0x46, "F"),
    (0x47, "G"), (0x48, "H"), (0x49, "I"), (0x4A, "J"), (0x4B, "K"), (0x4C, "L"), (0x4D, "M"),
    (0x4E, "N"), (0x4F, "O"), (0x50, "P"), (0x51, "Q"), (0x52, "R"), (0x53, "S"), (0x54, "T"),
    (0x55, "U"), (0x56, "V"), (0x57, "W"), (0x58, "X"), (0x59, "Y"), (0x5A, "Z"),
    (0x5B, "bracketleft"), (0x5C, "backslash"), (0x5D, "bracketright"), (0x5E, "asciicircum"),
    (0x5F, "underscore"), (0x60, "quoteleft"), (0x61, "a"), (0x62, "b"), (0x63, "c"),
    (0x64, "d"), (0x65, "e"), (0x66, "f"), (0x67, "g"), (0x68, "h"), (0x69, "i"), (0x6A, "j"),
    (0x6B, "k"), (0x6C, "l"), (0x6D, "m"), (0x6E, "n"), (0x6F, "o"), (0x70, "p"), (0x71, "q"),
    (0x72, "r"), (0x73, "s"), (0x74, "t"), (0x75, "u"), (0x76, "v"), (0x77, "w"), (0x78, "x"),
    (0x79, "y"), (0x7A, "z"), (0x7B, "braceleft"), (0x7C, "bar"), (0x7D, "braceright"),
    (0x7E, "asciitilde"), (0xA1, "exclamdown"), (0xA2, "cent"), (0xA3, "sterling"),
    (0xA4, "fraction"), (0xA5, "yen"), (0xA6, "florin"), (0xA7, "section"), (0xA8, "currency"),
    (0xA9, "quotesingle"), (0xAA, "quotedblleft"), (0xAB, "guillemotleft"),
    (0xAC, "guilsinglleft"), (0xAD, "guilsinglright"), (0xAE, "fi"), (0xAF, "fl"),
    (0xB1, "endash"), (0xB2, "dagger"), (0xB3, "daggerdbl"), (0xB4, "periodcentered"),
    (0xB6, "paragraph"), (0xB7, "bullet"), (0xB8, "quotesinglbase"), (0xB9, "quotedblbase"),
    (0xBA, "quotedblright"), (0xBB, "guillemotright"), (0xBC, "ellipsis"),
    (0xBD, "perthousand"), (0xBF, "questiondown"), (0xC1, "grave"), (0xC2, "acute"),
    (0xC3, "circumflex"), (0xC4, "tilde"), (0xC5, "macron"), (0xC6, "breve"),
    (0xC7, "dotaccent"), (0xC8, "dieresis"), (0xCA, "ring"), (0xCB, "cedilla"),
    (0xCD, "hungarumlaut"), (0xCE, "ogonek"), (0xCF, "caron"), (0xD0, "emdash"), (0xE1, "AE"),
    (0xE3, "ordfeminine"), (0xE8, "Lslash"), (0xE9, "Oslash"), (0xEA, "OE"),
    (0xEB, "ordmasculine"), (0xF1, "ae"), (0xF5, "dotlessi"), (0xF8, "lslash"),
    (0xF9, "oslash"), (0xFA, "oe"), (0xFB, "germandbls"),
]);

/// WinAnsiEncoding (Windows code page 1252).
#[rustfmt::skip]
static WIN_ANSI_NAMES: [Option<&str>; 256] = build_table(&[
    (0x20, "space"), (0x21, "exclam"), (0x22, "quotedbl"), (0x23, "numbersign"),
    (0x24, "dollar"), (0x25, "percent"), (0x26, "ampersand"), (0x27, "quotesingle"),
    (0x28, "parenleft"), (0x29, "parenright"), (0x2A, "asterisk"), (0x2B, "plus"),
    (0x2C, "comma"), (0x2D, "hyphen"), (0x2E, "period"), (0x2F, "slash"), (0x30, "zero"),
    (0x31, "one"), (0x32, "two"), (0x33, "three"), (0x34, "four"), (0x35, "five"),
    (0x36, "six"), (0x37, "seven"), (0x38, "eight"), (0x39, "nine"), (0x3A, "colon"),
    (0x3B, "semicolon"), (0x3C, "less"), (0x3D, "equal"), (0x3E, "greater"), (0x3F, "question"),
    (0x40, "at"), (0x41, "A"), (0x42, "B"), (0x43, "C"), (0x44, "D"), (0x45, "E"), (0x46, "F"),
    (0x47, "G"), (0x48, "H"), (0x49, "I"), (0x4A, "J"), (0x4B, "K"), (0x4C, "L"), (0x4D, "M"),
    (0x4E, "N"), (0x4F, "O"), (0x50, "P"), (0x51, "Q"), (0x52, "R"), (0x53, "S"), (0x54, "T"),
    (0x55, "U"), (0x56, "V"), (0x57, "W"), (0x58, "X"), (0x59, "Y"), (0x5A, "Z"),
    (0x5B, "bracketleft"), (0x5C, "backslash"), (0x5D, "bracketright"), (0x5E, "asciicircum"),
    (0x5F, "underscore"), (0x60, "grave"), (0x61, "a"), (0x62, "b"), (0x63, "c"), (0x64, "d"),
    (0x65, "e"), (0x66, "f"), (0x67, "g"), (0x68, "h"), (0x69, "i"), (0x6A, "j"), (0x6B, "k"),
    (0x6C, "l"), (0x6D, "m"), (0x6E, "n"), (0x6F, "o"), (0x70, "p"), (0x71, "q"), (0x72, "r"),
    (0x73, "s"), (0x74, "t"), (0x75, "u"), (0x76, "v"), (0x77, "w"), (0x78, "x"), (0x79, "y"),
    (0x7A, "z"), (0x7B, "braceleft"), (0x7C, "bar"), (0x7D, "braceright"), (0x7E, "asciitilde"),
    (0x80, "Euro"), (0x82, "quotesinglbase"), (0x83, "florin"), (0x84, "quotedblbase"),
    (0x85, "ellipsis"), (0x86, "dagger"), (0x87, "daggerdbl"), (0x88, "circumflex"),
    (0x89, "perthousand"), (0x8A, "Scaron"), (0x8B, "guilsinglleft"), (0x8C, "OE"),
    (0x8E, "Zcaron"), (0x91, "quoteleft"), (0x92, "quoteright"), (0x93, "quotedblleft"),
    (0x94, "quotedblright"), (0x95, "bullet"), (0x96, "endash"), (0x97, "emdash"),
    (0x98, "tilde"), (0x99, "trademark"), (0x9A, "scaron"), (0x9B, "guilsinglright"),
    (0x9C, "oe"), (0x9E, "zcaron"), (0x9F, "Ydieresis"), (0xA0, "space"), (0xA1, "exclamdown"),
    (0xA2, "cent"), (0xA3, "sterling"), (0xA4, "currency"), (0xA5, "yen"), (0xA6, "brokenbar"),
    (0xA7, "section"), (0xA8, "dieresis"), (0xA9, "copyright"), (0xAA, "ordfeminine"),
    (0xAB, "guillemotleft"), (0xAC, "logicalnot"), (0xAD, "hyphen"), (0xAE, "registered"),
    (0xAF, "macron"), (0xB0, "degree"), (0xB1, "plusminus"), (0xB2, "twosuperior"),
    (0xB3, "threesuperior"), (0xB4, "acute"), (0xB5, "mu"), (0xB6, "paragraph"),
    (0xB7, "periodcentered"), (0xB8, "cedilla"), (0xB9, "onesuperior"), (0xBA, "ordmasculine"),
    (0xBB, "guillemotright"), (0xBC, "onequarter"), (0xBD, "onehalf"), (0xBE, "threequarters"),
    (0xBF, "questiondown"), (0xC0, "Agrave"), (0xC1, "Aacute"), (0xC2, "Acircumflex"),
    (0xC3, "Atilde"), (0xC4, "Adieresis"), (0xC5, "Aring"), (0xC6, "AE"), (0xC7, "Ccedilla"),
    (0xC8, "Egrave"), (0xC9, "Eacute"), (0xCA, "Ecircumflex"), (0xCB, "Edieresis"),
    (0xCC, "Igrave"), (0xCD, "Iacute"), (0xCE, "Icircumflex"), (0xCF, "Idieresis"),
    (0xD0, "Eth"), (0xD1, "Ntilde"), (0xD2, "Ograve"), (0xD3, "Oacute"), (0xD4, "Ocircumflex"),
    (0xD5, "Otilde"), (0xD6, "Odieresis"), (0xD7, "multiply"), (0xD8, "Oslash"),
    (0xD9, "Ugrave"), (0xDA, "Uacute"), (0xDB, "Ucircumflex"), (0xDC, "Udieresis"),
    (0xDD, "Yacute"), (0xDE, "Thorn"), (0xDF, "germandbls"), (0xE0, "agrave"), (0xE1, "aacute"),
    (0xE2, "acircumflex"), (0xE3, "atilde"), (0xE4, "adieresis"), (0xE5, "aring"), (0xE6, "ae"),
    (0xE7, "ccedilla"), (0xE8, "egrave"), (0xE9, "eacute"), (0xEA, "ecircumflex"),
    (0xEB, "edieresis"), (0xEC, "igrave"), (0xED, "iacute"), (0xEE, "icircumflex"),
    (0xEF, "idieresis"), (0xF0, "eth"), (0xF1, "ntilde"), (0xF2, "ograve"), (0xF3, "oacute"),
    (0xF4, "ocircumflex"), (0xF5, "otilde"), (0xF6, "odieresis"), (0xF7, "divide"),
    (0xF8, "oslash"), (0xF9, "ugrave"), (0xFA, "uacute"), (0xFB, "ucircumflex"),
    (0xFC, "udieresis"), (0xFD, "yacute"), (0xFE, "thorn"), (0xFF, "ydieresis"),
]);

/// MacRomanEncoding, including the Mac OS Roman mathematical glyphs.
#[rustfmt::skip]
static MAC_ROMAN_NAMES: [Option<&str>; 256] = build_table(&[
    (0x20, "space"), (0x21, "exclam"), (0x22, "quotedbl"), (0x23, "numbersign"),
    (0x24, "dollar"), (0x25, "percent"), (0x26, "ampersand"), (0x27, "quotesingle"),
    (0x28, "parenleft"), (0x29, "parenright"), (0x2A, "asterisk"), (0x2B, "plus"),
    (0x2C, "comma"), (0x2D, "hyphen"), (0x2E, "period"), (0x2F, "slash"), (0x30, "zero"),
    (0x31, "one"), (0x32, "two"), (0x33, "three"), (0x34, "four"), (0x35, "five"),
    (0x36, "six"), (0x37, "seven"), (0x38, "eight"), (0x39, "nine"), (0x3A, "colon"),
    (0x3B, "semicolon"), (0x3C, "less"), (0x3D, "equal"), (0x3E, "greater"), (0x3F, "question"),
    (0x40, "at"), (0x41, "A"), (0x42, "B"), (0x43, "C"), (0x44, "D"), (0x45, "E"), (0x46, "F"),
    (0x47, "G"), (0x48, "H"), (0x49, "I"), (0x4A, "J"), (0x4B, "K"), (0x4C, "L"), (0x4D, "M"),
    (0x4E, "N"), (0x4F, "O"), (0x50, "P"), (0x51, "Q"), (0x52, "R"), (0x53, "S"), (0x54, "T"),
    (0x55, "U"), (0x56, "V"), (0x57, "W"), (0x58, "X"), (0x59, "Y"), (0x5A, "Z"),
    (0x5B, "bracketleft"), (0x5C, "backslash"), (0x5D, "bracketright"), (0x5E, "asciicircum"),
    (0x5F, "underscore"), (0x60, "grave"), (0x61, "a"), (0x62, "b"), (0x63, "c"), (0x64, "d"),
    (0x65, "e"), (0x66, "f"), (0x67, "g"), (0x68, "h"), (0x69, "i"), (0x6A, "j"), (0x6B, "k"),
    (0x6C, "l"), (0x6D, "m"), (0x6E, "n"), (0x6F, "o"), (0x70, "p"), (0x71, "q"), (0x72, "r"),
    (0x73, "s"), (0x74, "t"), (0x75, "u"), (0x76, "v"), (0x77, "w"), (0x78, "x"), (0x79, "y"),
    (0x7A, "z"), (0x7B, "braceleft"), (0x7C, "bar"), (0x7D, "braceright"), (0x7E, "asciitilde"),
    (0x80, "Adieresis"), (0x81, "Aring"), (0x82, "Ccedilla"), (0x83, "Eacute"),
    (0x84, "Ntilde"), (0x85, "Odieresis"), (0x86, "Udieresis"), (0x87, "aacute"),
    (0x88, "agrave"), (0x89, "acircumflex"), (0x8A, "adieresis"), (0x8B, "atilde"),
    (0x8C, "aring"), (0x8D, "ccedilla"), (0x8E, "eacute"), (0x8F, "egrave"),
    (0x90, "ecircumflex"), (0x91, "edieresis"), (0x92, "iacute"), (0x93, "igrave"),
    (0x94, "icircumflex"), (0x95, "idieresis"), (0x96, "ntilde"), (0x97, "oacute"),
    (0x98, "ograve"), (0x99, "ocircumflex"), (0x9A, "odieresis"), (0x9B, "otilde"),
    (0x9C, "uacute"), (0x9D, "ugrave"), (0x9E, "ucircumflex"), (0x9F, "udieresis"),
    (0xA0, "dagger"), (0xA1, "degree"), (0xA2, "cent"), (0xA3, "sterling"), (0xA4, "section"),
    (0xA5, "bullet"), (0xA6, "paragraph"), (0xA7, "germandbls"), (0xA8, "registered"),
    (0xA9, "copyright"), (0xAA, "trademark"), (0xAB, "acute"), (0xAC, "dieresis"),
    (0xAD, "notequal"), (0xAE, "AE"), (0xAF, "Oslash"), (0xB0, "infinity"), (0xB1, "plusminus"),
    (0xB2, "lessequal"), (0xB3, "greaterequal"), (0xB4, "yen"), (0xB5, "mu"),
    (0xB6, "partialdiff"), (0xB7, "summation"), (0xB8, "product"), (0xB9, "pi"),
    (0xBA, "integral"), (0xBB, "ordfeminine"), (0xBC, "ordmasculine"), (0xBD, "Omega"),
    (0xBE, "ae"), (0xBF, "oslash"), (0xC0, "questiondown"), (0xC1, "exclamdown"),
    (0xC2, "logicalnot"), (0xC3, "radical"), (0xC4, "florin"), (0xC5, "approxequal"),
    (0xC6, "Delta"), (0xC7, "guillemotleft"), (0xC8, "guillemotright"), (0xC9, "ellipsis"),
    (0xCA, "space"), (0xCB, "Agrave"), (0xCC, "Atilde"), (0xCD, "Otilde"), (0xCE, "OE"),
    (0xCF, "oe"), (0xD0, "endash"), (0xD1, "emdash"), (0xD2, "quotedblleft"),
    (0xD3, "quotedblright"), (0xD4, "quoteleft"), (0xD5, "quoteright"), (0xD6, "divide"),
    (0xD7, "lozenge"), (0xD8, "ydieresis"), (0xD9, "Ydieresis"), (0xDA, "fraction"),
    (0xDB, "currency"), (0xDC, "guilsinglleft"), (0xDD, "guilsinglright"), (0xDE, "fi"),
    (0xDF, "fl"), (0xE0, "daggerdbl"), (0xE1, "periodcentered"), (0xE2, "quotesinglbase"),
    (0xE3, "quotedblbase"), (0xE4, "perthousand"), (0xE5, "Acircumflex"), (0xE6, "Ecircumflex"),
    (0xE7, "Aacute"), (0xE8, "Edieresis"), (0xE9, "Egrave"), (0xEA, "Iacute"),
    (0xEB, "Icircumflex"), (0xEC, "Idieresis"), (0xED, "Igrave"), (0xEE, "Oacute"),
    (0xEF, "Ocircumflex"), (0xF0, "apple"), (0xF1, "Ograve"), (0xF2, "Uacute"),
    (0xF3, "Ucircumflex"), (0xF4, "Ugrave"), (0xF5, "dotlessi"), (0xF6, "circumflex"),
    (0xF7, "tilde"), (0xF8, "macron"), (0xF9, "breve"), (0xFA, "dotaccent"), (0xFB, "ring"),
    (0xFC, "cedilla"), (0xFD, "hungarumlaut"), (0xFE, "ogonek"), (0xFF, "caron"),
]);

/// MacExpertEncoding (old-style figures, small capitals, fractions).
#[rustfmt::skip]
static MAC_EXPERT_NAMES: [Option<&str>; 256] = build_table(&[
    (0x20, "space"), (0x21, "exclamsmall"), (0x22, "Hungarumlautsmall"), (0x23, "centoldstyle"),
    (0x24, "dollaroldstyle"), (0x25, "dollarsuperior"), (0x26, "ampersandsmall"),
    (0x27, "Acutesmall"), (0x28, "parenleftsuperior"), (0x29, "parenrightsuperior"),
    (0x2A, "twodotenleader"), (0x2B, "onedotenleader"), (0x2C, "comma"), (0x2D, "hyphen"),
    (0x2E, "period"), (0x2F, "fraction"), (0x30, "zerooldstyle"), (0x31, "oneoldstyle"),
    (0x32, "twooldstyle"), (0x33, "threeoldstyle"), (0x34, "fouroldstyle"),
    (0x35, "fiveoldstyle"), (0x36, "sixoldstyle"), (0x37, "sevenoldstyle"),
    (0x38, "eightoldstyle"), (0x39, "nineoldstyle"), (0x3A, "colon"), (0x3B, "semicolon"),
    (0x3D, "threequartersemdash"), (0x3F, "questionsmall"), (0x44, "Ethsmall"),
    (0x47, "onequarter"), (0x48, "onehalf"), (0x49, "threequarters"), (0x4A, "oneeighth"),
    (0x4B, "threeeighths"), (0x4C, "fiveeighths"), (0x4D, "seveneighths"), (0x4E, "onethird"),
    (0x4F, "twothirds"), (0x56, "ff"), (0x57, "fi"), (0x58, "fl"), (0x59, "ffi"), (0x5A, "ffl"),
    (0x5B, "parenleftinferior"), (0x5D, "parenrightinferior"), (0x5E, "Circumflexsmall"),
    (0x5F, "hypheninferior"), (0x60, "Gravesmall"), (0x61, "Asmall"), (0x62, "Bsmall"),
    (0x63, "Csmall"), (0x64, "Dsmall"), (0x65, "Esmall"), (0x66, "Fsmall"), (0x67, "Gsmall"),
    (0x68, "Hsmall"), (0x69, "Ismall"), (0x6A, "Jsmall"), (0x6B, "Ksmall"), (0x6C, "Lsmall"),
    (0x6D, "Msmall"), (0x6E, "Nsmall"), (0x6F, "Osmall"), (0x70, "Psmall"), (0x71, "Qsmall"),
    (0x72, "Rsmall"), (0x73, "Ssmall"), (0x74, "Tsmall"), (0x75, "Usmall"), (0x76, "Vsmall"),
    (0x77, "Wsmall"), (0x78, "Xsmall"), (0x79, "Ysmall"), (0x7A, "Zsmall"),
    (0x7B, "colonmonetary"), (0x7C, "onefitted"), (0x7D, "rupiah"), (0x7E, "Tildesmall"),
    (0x81, "asuperior"), (0x82, "centsuperior"), (0x87, "Aacutesmall"), (0x88, "Agravesmall"),
    (0x89, "Acircumflexsmall"), (0x8A, "Adieresissmall"), (0x8B, "Atildesmall"),
    (0x8C, "Aringsmall"), (0x8D, "Ccedillasmall"), (0x8E, "Eacutesmall"), (0x8F, "Egravesmall"),
    (0x90, "Ecircumflexsmall"), (0x91, "Edieresissmall"), (0x92, "Iacutesmall"),
    (0x93, "Igravesmall"), (0x94, "Icircumflexsmall"), (0x95, "Idieresissmall"),
    (0x96, "Ntildesmall"), (0x97, "Oacutesmall"), (0x98, "Ogravesmall"),
    (0x99, "Ocircumflexsmall"), (0x9A, "Odieresissmall"), (0x9B, "Otildesmall"),
    (0x9C, "Uacutesmall"), (0x9D, "Ugravesmall"), (0x9E, "Ucircumflexsmall"),
    (0x9F, "Udieresissmall"), (0xA1, "eightsuperior"), (0xA2, "fourinferior"),
    (0xA3, "threeinferior"), (0xA4, "sixinferior"), (0xA5, "eightinferior"),
    (0xA6, "seveninferior"), (0xA7, "Scaronsmall"), (0xA9, "centinferior"),
    (0xAA, "twoinferior"), (0xAC, "Dieresissmall"), (0xAE, "Caronsmall"), (0xAF, "osuperior"),
    (0xB0, "fiveinferior"), (0xB2, "commainferior"), (0xB3, "periodinferior"),
    (0xB4, "Yacutesmall"), (0xB6, "dollarinferior"), (0xB9, "Thornsmall"),
    (0xBB, "nineinferior"), (0xBC, "zeroinferior"), (0xBD, "Zcaronsmall"), (0xBE, "AEsmall"),
    (0xBF, "Oslashsmall"), (0xC0, "questiondownsmall"), (0xC1, "oneinferior"),
    (0xC2, "Lslashsmall"), (0xC9, "Cedillasmall"), (0xCF, "OEsmall"), (0xD0, "figuredash"),
    (0xD1, "hyphensuperior"), (0xD6, "exclamdownsmall"), (0xD8, "Ydieresissmall"),
    (0xDA, "onesuperior"), (0xDB, "twosuperior"), (0xDC, "threesuperior"),
    (0xDD, "foursuperior"), (0xDE, "fivesuperior"), (0xDF, "sixsuperior"),
    (0xE0, "sevensuperior"), (0xE1, "ninesuperior"), (0xE2, "zerosuperior"),
    (0xE4, "esuperior"), (0xE5, "rsuperior"), (0xE6, "tsuperior"), (0xE9, "isuperior"),
    (0xEA, "ssuperior"), (0xEB, "dsuperior"), (0xF1, "lsuperior"), (0xF2, "Ogoneksmall"),
    (0xF3, "Brevesmall"), (0xF4, "Macronsmall"), (0xF5, "bsuperior"), (0xF6, "nsuperior"),
    (0xF7, "msuperior"), (0xF8, "commasuperior"), (0xF9, "periodsuperior"),
    (0xFA, "Dotaccentsmall"), (0xFB, "Ringsmall"),
]);

/// Built-in encoding of the Symbol font.
#[rustfmt::skip]
static SYMBOL_NAMES: [Option<&str>; 256] = build_table(&[
    (0x20, "space"), (0x21, "exclam"), (0x22, "universal"), (0x23, "numbersign"),
    (0x24, "existential"), (0x25, "percent"), (0x26, "ampersand"), (0x27, "suchthat"),
    (0x28, "parenleft"), (0x29, "parenright"), (0x2A, "asteriskmath"), (0x2B, "plus"),
    (0x2C, "comma"), (0x2D, "minus"), (0x2E, "period"), (0x2F, "slash"), (0x30, "zero"),
    (0x31, "one"), (0x32, "two"), (0x33, "three"), (0x34, "four"), (0x35, "five"),
    (0x36, "six"), (0x37, "seven"), (0x38, "eight"), (0x39, "nine"), (0x3A, "colon"),
    (0x3B, "semicolon"), (0x3C, "less"), (0x3D, "equal"), (0x3E, "greater"), (0x3F, "question"),
    (0x40, "congruent"), (0x41, "Alpha"), (0x42, "Beta"), (0x43, "Chi"), (0x44, "Delta"),
    (0x45, "Epsilon"), (0x46, "Phi"), (0x47, "Gamma"), (0x48, "Eta"), (0x49, "Iota"),
    (0x4A, "theta1"), (0x4B, "Kappa"), (0x4C, "Lambda"), (0x4D, "Mu"), (0x4E, "Nu"),
    (0x4F, "Omicron"), (0x50, "Pi"), (0x51, "Theta"), (0x52, "Rho"), (0x53, "Sigma"),
    (0x54, "Tau"), (0x55, "Upsilon"), (0x56, "sigma1"), (0x57, "Omega"), (0x58, "Xi"),
    (0x59, "Psi"), (0x5A, "Zeta"), (0x5B, "bracketleft"), (0x5C, "therefore"),
    (0x5D, "bracketright"), (0x5E, "perpendicular"), (0x5F, "underscore"), (0x60, "radicalex"),
    (0x61, "alpha"), (0x62, "beta"), (0x63, "chi"), (0x64, "delta"), (0x65, "epsilon"),
    (0x66, "phi"), (0x67, "gamma"), (0x68, "eta"), (0x69, "iota"), (0x6A, "phi1"),
    (0x6B, "kappa"), (0x6C, "lambda"), (0x6D, "mu"), (0x6E, "nu"), (0x6F, "omicron"),
    (0x70, "pi"), (0x71, "theta"), (0x72, "rho"), (0x73, "sigma"), (0x74, "tau"),
    (0x75, "upsilon"), (0x76, "omega1"), (0x77, "omega"), (0x78, "xi"), (0x79, "psi"),
    (0x7A, "zeta"), (0x7B, "braceleft"), (0x7C, "bar"), (0x7D, "braceright"), (0x7E, "similar"),
    (0xA0, "Euro"), (0xA1, "Upsilon1"), (0xA2, "minute"), (0xA3, "lessequal"),
    (0xA4, "fraction"), (0xA5, "infinity"), (0xA6, "florin"), (0xA7, "club"), (0xA8, "diamond"),
    (0xA9, "heart"), (0xAA, "spade"), (0xAB, "arrowboth"), (0xAC, "arrowleft"),
    (0xAD, "arrowup"), (0xAE, "arrowright"), (0xAF, "arrowdown"), (0xB0, "degree"),
    (0xB1, "plusminus"), (0xB2, "second"), (0xB3, "greaterequal"), (0xB4, "multiply"),
    (0xB5, "proportional"), (0xB6, "partialdiff"), (0xB7, "bullet"), (0xB8, "divide"),
    (0xB9, "notequal"), (0xBA, "equivalence"), (0xBB, "approxequal"), (0xBC, "ellipsis"),
    (0xBD, "arrowvertex"), (0xBE, "arrowhorizex"), (0xBF, "carriagereturn"), (0xC0, "aleph"),
    (0xC1, "Ifraktur"), (0xC2, "Rfraktur"), (0xC3, "weierstrass"), (0xC4, "circlemultiply"),
    (0xC5, "circleplus"), (0xC6, "emptyset"), (0xC7, "intersection"), (0xC8, "union"),
    (0xC9, "propersuperset"), (0xCA, "reflexsuperset"), (0xCB, "notsubset"),
    (0xCC, "propersubset"), (0xCD, "reflexsubset"), (0xCE, "element"), (0xCF, "notelement"),
    (0xD0, "angle"), (0xD1, "gradient"), (0xD2, "registerserif"), (0xD3, "copyrightserif"),
    (0xD4, "trademarkserif"), (0xD5, "product"), (0xD6, "radical"), (0xD7, "dotmath"),
    (0xD8, "logicalnot"), (0xD9, "logicaland"), (0xDA, "logicalor"), (0xDB, "arrowdblboth"),
    (0xDC, "arrowdblleft"), (0xDD, "arrowdblup"), (0xDE, "arrowdblright"),
    (0xDF, "arrowdbldown"), (0xE0, "lozenge"), (0xE1, "angleleft"), (0xE2, "registersans"),
    (0xE3, "copyrightsans"), (0xE4, "trademarksans"), (0xE5, "summation"),
    (0xE6, "parenlefttp"), (0xE7, "parenleftex"), (0xE8, "parenleftbt"),
    (0xE9, "bracketlefttp"), (0xEA, "bracketleftex"), (0xEB, "bracketleftbt"),
    (0xEC, "bracelefttp"), (0xED, "braceleftmid"), (0xEE, "braceleftbt"), (0xEF, "braceex"),
    (0xF1, "angleright"), (0xF2, "integral"), (0xF3, "integraltp"), (0xF4, "integralex"),
    (0xF5, "integralbt"), (0xF6, "parenrighttp"), (0xF7, "parenrightex"),
    (0xF8, "parenrightbt"), (0xF9, "bracketrighttp"), (0xFA, "bracketrightex"),
    (0xFB, "bracketrightbt"), (0xFC, "bracerighttp"), (0xFD, "bracerightmid"),
    (0xFE, "bracerightbt"),
]);

//! Glyph name to Unicode lookup, after the Adobe Glyph List conventions.
//!
//! Covers every name used by the five built-in simple encodings, the
//! Latin Extended-A and Greek accented forms that show up in `Differences`
//! arrays, and the numbered `afii` names (Cyrillic, Hebrew, Arabic).
//! Names outside the table are resolved through the `uniXXXX` / `uXXXX`
//! forms, suffix stripping (`a.sc`) and ligature splitting (`f_f_i`).

/// Resolve a glyph name to the Unicode text it stands for.
///
/// Returns `None` when the name cannot be interpreted. Ligature names
/// resolve to several characters.
pub fn glyph_name_to_unicode(name: &str) -> Option<String> {
    if let Some(ch) = lookup(name) {
        return Some(ch.to_string());
    }

    // "a.sc", "one.oldstyle": the part before the first period names the glyph
    if let Some((base, _)) = name.split_once('.') {
        if base.is_empty() {
            return None;
        }
        return glyph_name_to_unicode(base);
    }

    if name.contains('_') {
        let mut out = String::new();
        for part in name.split('_') {
            out.push_str(&glyph_name_to_unicode(part)?);
        }
        return Some(out);
    }

    if let Some(hex) = name.strip_prefix("uni") {
        return parse_uni_sequence(hex);
    }

    if let Some(hex) = name.strip_prefix('u') {
        if (4..=6).contains(&hex.len()) {
            return parse_scalar(hex).map(String::from);
        }
    }

    None
}

/// Exact table lookup, no fallbacks.
pub fn lookup(name: &str) -> Option<char> {
    if let Some(digits) = name.strip_prefix("afii") {
        return digits.parse().ok().and_then(afii);
    }
    GLYPH_LIST
        .binary_search_by_key(&name, |&(n, _)| n)
        .ok()
        .map(|i| GLYPH_LIST[i].1)
}

/// The numbered `afiiNNNNN` names: Cyrillic, Hebrew, Arabic and a few
/// letterlike symbols and format controls.
fn afii(number: u32) -> Option<char> {
    let scalar = match number {
        208 => 0x2015,
        299 => 0x200E,
        300 => 0x200F,
        301 => 0x200D,
        // Cyrillic capitals; Ё sits outside the alphabetic block
        10017..=10022 => 0x0410 + (number - 10017),
        10023 => 0x0401,
        10024..=10049 => 0x0416 + (number - 10024),
        10050 => 0x0490,
        10051..=10061 => 0x0402 + (number - 10051),
        10062 => 0x040E,
        // Cyrillic small letters
        10065..=10070 => 0x0430 + (number - 10065),
        10071 => 0x0451,
        10072..=10097 => 0x0436 + (number - 10072),
        10098 => 0x0491,
        10099..=10109 => 0x0452 + (number - 10099),
        10110 => 0x045E,
        10145 => 0x040F,
        10146 => 0x0462,
        10147 => 0x0472,
        10148 => 0x0474,
        10193 => 0x045F,
        10194 => 0x0463,
        10195 => 0x0473,
        10196 => 0x0475,
        10846 => 0x04D9,
        // Arabic
        57388 => 0x060C,
        57392..=57401 => 0x0660 + (number - 57392),
        57403 => 0x061B,
        57407 => 0x061F,
        57409..=57434 => 0x0621 + (number - 57409),
        57440..=57458 => 0x0640 + (number - 57440),
        57636 => 0x20AA,
        // Hebrew letters, finals included
        57664..=57690 => 0x05D0 + (number - 57664),
        61248 => 0x2105,
        61289 => 0x2113,
        61352 => 0x2116,
        61573..=61575 => 0x202C + (number - 61573),
        _ => return None,
    };
    char::from_u32(scalar)
}

/// `uniXXXX` may carry several 4-digit groups, one per character.
fn parse_uni_sequence(hex: &str) -> Option<String> {
    if hex.is_empty() || hex.len() % 4 != 0 {
        return None;
    }
    let mut out = String::new();
    for start in (0..hex.len()).step_by(4) {
        let ch = parse_scalar(hex.get(start..start + 4)?)?;
        out.push(ch);
    }
    Some(out)
}

fn parse_scalar(hex: &str) -> Option<char> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    // surrogate code points are not characters
    if (0xD800..=0xDFFF).contains(&value) {
        return None;
    }
    char::from_u32(value)
}

/// Sorted by byte order of the name for binary search.
#[rustfmt::skip]
static GLYPH_LIST: &[(&str, char)] = &[
    ("A", '\u{0041}'), ("AE", '\u{00C6}'), ("AEsmall", '\u{F7E6}'), ("Aacute", '\u{00C1}'),
    ("Aacutesmall", '\u{F7E1}'), ("Abreve", '\u{0102}'), ("Acircumflex", '\u{00C2}'),
    ("Acircumflexsmall", '\u{F7E2}'), ("Acutesmall", '\u{F7B4}'), ("Adieresis", '\u{00C4}'),
    ("Adieresissmall", '\u{F7E4}'), ("Agrave", '\u{00C0}'), ("Agravesmall", '\u{F7E0}'),
    ("Alpha", '\u{0391}'), ("Alphatonos", '\u{0386}'), ("Amacron", '\u{0100}'),
    ("Aogonek", '\u{0104}'), ("Aring", '\u{00C5}'), ("Aringsmall", '\u{F7E5}'),
    ("Asmall", '\u{F761}'), ("Atilde", '\u{00C3}'), ("Atildesmall", '\u{F7E3}'), ("B", '\u{0042}'),
    ("Beta", '\u{0392}'), ("Brevesmall", '\u{F6F4}'), ("Bsmall", '\u{F762}'), ("C", '\u{0043}'),
    ("Cacute", '\u{0106}'), ("Caronsmall", '\u{F6F5}'), ("Ccaron", '\u{010C}'),
    ("Ccedilla", '\u{00C7}'), ("Ccedillasmall", '\u{F7E7}'), ("Cedillasmall", '\u{F7B8}'),
    ("Chi", '\u{03A7}'), ("Circumflexsmall", '\u{F6F6}'), ("Csmall", '\u{F763}'), ("D", '\u{0044}'),
    ("Dcaron", '\u{010E}'), ("Delta", '\u{0394}'), ("Dieresissmall", '\u{F7A8}'),
    ("Dotaccentsmall", '\u{F6F7}'), ("Dsmall", '\u{F764}'), ("E", '\u{0045}'),
    ("Eacute", '\u{00C9}'), ("Eacutesmall", '\u{F7E9}'), ("Ecaron", '\u{011A}'),
    ("Ecircumflex", '\u{00CA}'), ("Ecircumflexsmall", '\u{F7EA}'), ("Edieresis", '\u{00CB}'),
    ("Edieresissmall", '\u{F7EB}'), ("Edotaccent", '\u{0116}'), ("Egrave", '\u{00C8}'),
    ("Egravesmall", '\u{F7E8}'), ("Emacron", '\u{0112}'), ("Eogonek", '\u{0118}'),
    ("Epsilon", '\u{0395}'), ("Epsilontonos", '\u{0388}'), ("Esmall", '\u{F765}'),
    ("Eta", '\u{0397}'), ("Etatonos", '\u{0389}'), ("Eth", '\u{00D0}'), ("Ethsmall", '\u{F7F0}'),
    ("Euro", '\u{20AC}'), ("F", '\u{0046}'), ("Fsmall", '\u{F766}'), ("G", '\u{0047}'),
    ("Gamma", '\u{0393}'), ("Gbreve", '\u{011E}'), ("Gcommaaccent", '\u{0122}'),
    ("Gdotaccent", '\u{0120}'), ("Gravesmall", '\u{F760}'), ("Gsmall", '\u{F767}'),
    ("H", '\u{0048}'), ("Hsmall", '\u{F768}'), ("Hungarumlautsmall", '\u{F6F8}'), ("I", '\u{0049}'),
    ("Iacute", '\u{00CD}'), ("Iacutesmall", '\u{F7ED}'), ("Icircumflex", '\u{00CE}'),
    ("Icircumflexsmall", '\u{F7EE}'), ("Idieresis", '\u{00CF}'), ("Idieresissmall", '\u{F7EF}'),
    ("Idotaccent", '\u{0130}'), ("Ifraktur", '\u{2111}'), ("Igrave", '\u{00CC}'),
    ("Igravesmall", '\u{F7EC}'), ("Imacron", '\u{012A}'), ("Iogonek", '\u{012E}'),
    ("Iota", '\u{0399}'), ("Iotadieresis", '\u{03AA}'), ("Iotatonos", '\u{038A}'),
    ("Ismall", '\u{F769}'), ("J", '\u{004A}'), ("Jsmall", '\u{F76A}'), ("K", '\u{004B}'),
    ("Kappa", '\u{039A}'), ("Kcommaaccent", '\u{0136}'), ("Ksmall", '\u{F76B}'), ("L", '\u{004C}'),
    ("Lacute", '\u{0139}'), ("Lambda", '\u{039B}'), ("Lcaron", '\u{013D}'),
    ("Lcommaaccent", '\u{013B}'), ("Lslash", '\u{0141}'), ("Lslashsmall", '\u{F6F9}'),
    ("Lsmall", '\u{F76C}'), ("M", '\u{004D}'), ("Macronsmall", '\u{F7AF}'), ("Msmall", '\u{F76D}'),
    ("Mu", '\u{039C}'), ("N", '\u{004E}'), ("Nacute", '\u{0143}'), ("Ncaron", '\u{0147}'),
    ("Ncommaaccent", '\u{0145}'), ("Nsmall", '\u{F76E}'), ("Ntilde", '\u{00D1}'),
    ("Ntildesmall", '\u{F7F1}'), ("Nu", '\u{039D}'), ("O", '\u{004F}'), ("OE", '\u{0152}'),
    ("OEsmall", '\u{F6FA}'), ("Oacute", '\u{00D3}'), ("Oacutesmall", '\u{F7F3}'),
    ("Ocircumflex", '\u{00D4}'), ("Ocircumflexsmall", '\u{F7F4}'), ("Odieresis", '\u{00D6}'),
    ("Odieresissmall", '\u{F7F6}'), ("Ogoneksmall", '\u{F6FB}'), ("Ograve", '\u{00D2}'),
    ("Ogravesmall", '\u{F7F2}'), ("Ohungarumlaut", '\u{0150}'), ("Omacron", '\u{014C}'),
    ("Omega", '\u{03A9}'), ("Omegatonos", '\u{038F}'), ("Omicron", '\u{039F}'),
    ("Omicrontonos", '\u{038C}'), ("Oslash", '\u{00D8}'), ("Oslashsmall", '\u{F7F8}'),
    ("Osmall", '\u{F76F}'), ("Otilde", '\u{00D5}'), ("Otildesmall", '\u{F7F5}'), ("P", '\u{0050}'),
    ("Phi", '\u{03A6}'), ("Pi", '\u{03A0}'), ("Psi", '\u{03A8}'), ("Psmall", '\u{F770}'),
    ("Q", '\u{0051}'), ("Qsmall", '\u{F771}'), ("R", '\u{0052}'), ("Racute", '\u{0154}'),
    ("Rcaron", '\u{0158}'), ("Rcommaaccent", '\u{0156}'), ("Rfraktur", '\u{211C}'),
    ("Rho", '\u{03A1}'), ("Ringsmall", '\u{F6FC}'), ("Rsmall", '\u{F772}'), ("S", '\u{0053}'),
    ("Sacute", '\u{015A}'), ("Scaron", '\u{0160}'), ("Scaronsmall", '\u{F6FD}'),
    ("Scedilla", '\u{015E}'), ("Scommaaccent", '\u{0218}'), ("Sigma", '\u{03A3}'),
    ("Ssmall", '\u{F773}'), ("T", '\u{0054}'), ("Tau", '\u{03A4}'), ("Tcaron", '\u{0164}'),
    ("Tcommaaccent", '\u{0162}'), ("Theta", '\u{0398}'), ("Thorn", '\u{00DE}'),
    ("Thornsmall", '\u{F7FE}'), ("Tildesmall", '\u{F6FE}'), ("Tsmall", '\u{F774}'),
    ("U", '\u{0055}'), ("Uacute", '\u{00DA}'), ("Uacutesmall", '\u{F7FA}'),
    ("Ucircumflex", '\u{00DB}'), ("Ucircumflexsmall", '\u{F7FB}'), ("Udieresis", '\u{00DC}'),
    ("Udieresissmall", '\u{F7FC}'), ("Ugrave", '\u{00D9}'), ("Ugravesmall", '\u{F7F9}'),
    ("Uhungarumlaut", '\u{0170}'), ("Umacron", '\u{016A}'), ("Uogonek", '\u{0172}'),
    ("Upsilon", '\u{03A5}'), ("Upsilon1", '\u{03D2}'), ("Upsilondieresis", '\u{03AB}'),
    ("Upsilontonos", '\u{038E}'), ("Uring", '\u{016E}'), ("Usmall", '\u{F775}'), ("V", '\u{0056}'),
    ("Vsmall", '\u{F776}'), ("W", '\u{0057}'), ("Wsmall", '\u{F777}'), ("X", '\u{0058}'),
    ("Xi", '\u{039E}'), ("Xsmall", '\u{F778}'), ("Y", '\u{0059}'), ("Yacute", '\u{00DD}'),
    ("Yacutesmall", '\u{F7FD}'), ("Ydieresis", '\u{0178}'), ("Ydieresissmall", '\u{F7FF}'),
    ("Ysmall", '\u{F779}'), ("Z", '\u{005A}'), ("Zacute", '\u{0179}'), ("Zcaron", '\u{017D}'),
    ("Zcaronsmall", '\u{F6FF}'), ("Zdotaccent", '\u{017B}'), ("Zeta", '\u{0396}'),
    ("Zsmall", '\u{F77A}'), ("a", '\u{0061}'), ("aacute", '\u{00E1}'), ("abreve", '\u{0103}'),
    ("acircumflex", '\u{00E2}'), ("acute", '\u{00B4}'), ("adieresis", '\u{00E4}'),
    ("ae", '\u{00E6}'), ("agrave", '\u{00E0}'), ("aleph", '\u{2135}'), ("alpha", '\u{03B1}'),
    ("alphatonos", '\u{03AC}'), ("amacron", '\u{0101}'), ("ampersand", '\u{0026}'),
    ("ampersandsmall", '\u{F726}'), ("angle", '\u{2220}'), ("angleleft", '\u{2329}'),
    ("angleright", '\u{232A}'), ("aogonek", '\u{0105}'), ("apple", '\u{F8FF}'),
    ("approxequal", '\u{2248}'), ("aring", '\u{00E5}'), ("arrowboth", '\u{2194}'),
    ("arrowdblboth", '\u{21D4}'), ("arrowdbldown", '\u{21D3}'), ("arrowdblleft", '\u{21D0}'),
    ("arrowdblright", '\u{21D2}'), ("arrowdblup", '\u{21D1}'), ("arrowdown", '\u{2193}'),
    ("arrowhorizex", '\u{F8E7}'), ("arrowleft", '\u{2190}'), ("arrowright", '\u{2192}'),
    ("arrowup", '\u{2191}'), ("arrowvertex", '\u{F8E6}'), ("asciicircum", '\u{005E}'),
    ("asciitilde", '\u{007E}'), ("asterisk", '\u{002A}'), ("asteriskmath", '\u{2217}'),
    ("asuperior", '\u{F6E9}'), ("at", '\u{0040}'), ("atilde", '\u{00E3}'), ("b", '\u{0062}'),
    ("backslash", '\u{005C}'), ("bar", '\u{007C}'), ("beta", '\u{03B2}'), ("braceex", '\u{F8F4}'),
    ("braceleft", '\u{007B}'), ("braceleftbt", '\u{F8F3}'), ("braceleftmid", '\u{F8F2}'),
    ("bracelefttp", '\u{F8F1}'), ("braceright", '\u{007D}'), ("bracerightbt", '\u{F8FE}'),
    ("bracerightmid", '\u{F8FD}'), ("bracerighttp", '\u{F8FC}'), ("bracketleft", '\u{005B}'),
    ("bracketleftbt", '\u{F8F0}'), ("bracketleftex", '\u{F8EF}'), ("bracketlefttp", '\u{F8EE}'),
    ("bracketright", '\u{005D}'), ("bracketrightbt", '\u{F8FB}'), ("bracketrightex", '\u{F8FA}'),
    ("bracketrighttp", '\u{F8F9}'), ("breve", '\u{02D8}'), ("brokenbar", '\u{00A6}'),
    ("bsuperior", '\u{F6EA}'), ("bullet", '\u{2022}'), ("c", '\u{0063}'), ("cacute", '\u{0107}'),
    ("caron", '\u{02C7}'), ("carriagereturn", '\u{21B5}'), ("ccaron", '\u{010D}'),
    ("ccedilla", '\u{00E7}'), ("cedilla", '\u{00B8}'), ("cent", '\u{00A2}'),
    ("centinferior", '\u{F6DF}'), ("centoldstyle", '\u{F7A2}'), ("centsuperior", '\u{F6E0}'),
    ("chi", '\u{03C7}'), ("circlemultiply", '\u{2297}'), ("circleplus", '\u{2295}'),
    ("circumflex", '\u{02C6}'), ("club", '\u{2663}'), ("colon", '\u{003A}'),
    ("colonmonetary", '\u{20A1}'), ("comma", '\u{002C}'), ("commaaccent", '\u{F6C3}'),
    ("commainferior", '\u{F6E1}'), ("commasuperior", '\u{F6E2}'), ("congruent", '\u{2245}'),
    ("copyright", '\u{00A9}'), ("copyrightsans", '\u{F8E9}'), ("copyrightserif", '\u{F6D9}'),
    ("currency", '\u{00A4}'), ("d", '\u{0064}'), ("dagger", '\u{2020}'), ("daggerdbl", '\u{2021}'),
    ("dcaron", '\u{010F}'), ("degree", '\u{00B0}'), ("delta", '\u{03B4}'), ("diamond", '\u{2666}'),
    ("dieresis", '\u{00A8}'), ("dieresistonos", '\u{0385}'), ("divide", '\u{00F7}'),
    ("dollar", '\u{0024}'), ("dollarinferior", '\u{F6E3}'), ("dollaroldstyle", '\u{F724}'),
    ("dollarsuperior", '\u{F6E4}'), ("dotaccent", '\u{02D9}'), ("dotlessi", '\u{0131}'),
    ("dotlessj", '\u{0237}'), ("dotmath", '\u{22C5}'), ("dsuperior", '\u{F6EB}'), ("e", '\u{0065}'),
    ("eacute", '\u{00E9}'), ("ecaron", '\u{011B}'), ("ecircumflex", '\u{00EA}'),
    ("edieresis", '\u{00EB}'), ("edotaccent", '\u{0117}'), ("egrave", '\u{00E8}'),
    ("eight", '\u{0038}'), ("eightinferior", '\u{2088}'), ("eightoldstyle", '\u{F738}'),
    ("eightsuperior", '\u{2078}'), ("element", '\u{2208}'), ("ellipsis", '\u{2026}'),
    ("emacron", '\u{0113}'), ("emdash", '\u{2014}'), ("emptyset", '\u{2205}'),
    ("endash", '\u{2013}'), ("eogonek", '\u{0119}'), ("epsilon", '\u{03B5}'),
    ("epsilontonos", '\u{03AD}'), ("equal", '\u{003D}'), ("equivalence", '\u{2261}'),
    ("estimated", '\u{212E}'), ("esuperior", '\u{F6EC}'), ("eta", '\u{03B7}'),
    ("etatonos", '\u{03AE}'), ("eth", '\u{00F0}'), ("exclam", '\u{0021}'),
    ("exclamdown", '\u{00A1}'), ("exclamdownsmall", '\u{F7A1}'), ("exclamsmall", '\u{F721}'),
    ("existential", '\u{2203}'), ("f", '\u{0066}'), ("ff", '\u{FB00}'), ("ffi", '\u{FB03}'),
    ("ffl", '\u{FB04}'), ("fi", '\u{FB01}'), ("figuredash", '\u{2012}'), ("five", '\u{0035}'),
    ("fiveeighths", '\u{215D}'), ("fiveinferior", '\u{2085}'), ("fiveoldstyle", '\u{F735}'),
    ("fivesuperior", '\u{2075}'), ("fl", '\u{FB02}'), ("florin", '\u{0192}'), ("four", '\u{0034}'),
    ("fourinferior", '\u{2084}'), ("fouroldstyle", '\u{F734}'), ("foursuperior", '\u{2074}'),
    ("fraction", '\u{2044}'), ("g", '\u{0067}'), ("gamma", '\u{03B3}'), ("gbreve", '\u{011F}'),
    ("gcommaaccent", '\u{0123}'), ("gdotaccent", '\u{0121}'), ("germandbls", '\u{00DF}'),
    ("gradient", '\u{2207}'), ("grave", '\u{0060}'), ("greater", '\u{003E}'),
    ("greaterequal", '\u{2265}'), ("guillemotleft", '\u{00AB}'), ("guillemotright", '\u{00BB}'),
    ("guilsinglleft", '\u{2039}'), ("guilsinglright", '\u{203A}'), ("h", '\u{0068}'),
    ("heart", '\u{2665}'), ("hungarumlaut", '\u{02DD}'), ("hyphen", '\u{002D}'),
    ("hypheninferior", '\u{F6E5}'), ("hyphensuperior", '\u{F6E6}'), ("i", '\u{0069}'),
    ("iacute", '\u{00ED}'), ("icircumflex", '\u{00EE}'), ("idieresis", '\u{00EF}'),
    ("igrave", '\u{00EC}'), ("imacron", '\u{012B}'), ("increment", '\u{2206}'),
    ("infinity", '\u{221E}'), ("integral", '\u{222B}'), ("integralbt", '\u{2321}'),
    ("integralex", '\u{F8F5}'), ("integraltp", '\u{2320}'), ("intersection", '\u{2229}'),
    ("iogonek", '\u{012F}'), ("iota", '\u{03B9}'), ("iotadieresis", '\u{03CA}'),
    ("iotadieresistonos", '\u{0390}'), ("iotatonos", '\u{03AF}'), ("isuperior", '\u{F6ED}'),
    ("j", '\u{006A}'), ("k", '\u{006B}'), ("kappa", '\u{03BA}'), ("kcommaaccent", '\u{0137}'),
    ("l", '\u{006C}'), ("lacute", '\u{013A}'), ("lambda", '\u{03BB}'), ("lcaron", '\u{013E}'),
    ("lcommaaccent", '\u{013C}'), ("less", '\u{003C}'), ("lessequal", '\u{2264}'),
    ("logicaland", '\u{2227}'), ("logicalnot", '\u{00AC}'), ("logicalor", '\u{2228}'),
    ("lozenge", '\u{25CA}'), ("lslash", '\u{0142}'), ("lsuperior", '\u{F6EE}'), ("m", '\u{006D}'),
    ("macron", '\u{00AF}'), ("minus", '\u{2212}'), ("minute", '\u{2032}'),
    ("msuperior", '\u{F6EF}'), ("mu", '\u{00B5}'), ("multiply", '\u{00D7}'), ("n", '\u{006E}'),
    ("nacute", '\u{0144}'), ("nbspace", '\u{00A0}'), ("ncaron", '\u{0148}'),
    ("ncommaaccent", '\u{0146}'), ("nine", '\u{0039}'), ("nineinferior", '\u{2089}'),
    ("nineoldstyle", '\u{F739}'), ("ninesuperior", '\u{2079}'), ("notelement", '\u{2209}'),
    ("notequal", '\u{2260}'), ("notsubset", '\u{2284}'), ("nsuperior", '\u{207F}'),
    ("ntilde", '\u{00F1}'), ("nu", '\u{03BD}'), ("numbersign", '\u{0023}'), ("numero", '\u{2116}'),
    ("o", '\u{006F}'), ("oacute", '\u{00F3}'), ("ocircumflex", '\u{00F4}'),
    ("odieresis", '\u{00F6}'), ("oe", '\u{0153}'), ("ogonek", '\u{02DB}'), ("ograve", '\u{00F2}'),
    ("ohungarumlaut", '\u{0151}'), ("omacron", '\u{014D}'), ("omega", '\u{03C9}'),
    ("omega1", '\u{03D6}'), ("omegatonos", '\u{03CE}'), ("omicron", '\u{03BF}'),
    ("omicrontonos", '\u{03CC}'), ("one", '\u{0031}'), ("onedotenleader", '\u{2024}'),
    ("oneeighth", '\u{215B}'), ("onefitted", '\u{F6DC}'), ("onehalf", '\u{00BD}'),
    ("oneinferior", '\u{2081}'), ("oneoldstyle", '\u{F731}'), ("onequarter", '\u{00BC}'),
    ("onesuperior", '\u{00B9}'), ("onethird", '\u{2153}'), ("ordfeminine", '\u{00AA}'),
    ("ordmasculine", '\u{00BA}'), ("oslash", '\u{00F8}'), ("osuperior", '\u{F6F0}'),
    ("otilde", '\u{00F5}'), ("p", '\u{0070}'), ("paragraph", '\u{00B6}'), ("parenleft", '\u{0028}'),
    ("parenleftbt", '\u{F8ED}'), ("parenleftex", '\u{F8EC}'), ("parenleftinferior", '\u{208D}'),
    ("parenleftsuperior", '\u{207D}'), ("parenlefttp", '\u{F8EB}'), ("parenright", '\u{0029}'),
    ("parenrightbt", '\u{F8F8}'), ("parenrightex", '\u{F8F7}'), ("parenrightinferior", '\u{208E}'),
    ("parenrightsuperior", '\u{207E}'), ("parenrighttp", '\u{F8F6}'), ("partialdiff", '\u{2202}'),
    ("percent", '\u{0025}'), ("period", '\u{002E}'), ("periodcentered", '\u{00B7}'),
    ("periodinferior", '\u{F6E7}'), ("periodsuperior", '\u{F6E8}'), ("perpendicular", '\u{22A5}'),
    ("perthousand", '\u{2030}'), ("phi", '\u{03C6}'), ("phi1", '\u{03D5}'), ("pi", '\u{03C0}'),
    ("plus", '\u{002B}'), ("plusminus", '\u{00B1}'), ("product", '\u{220F}'),
    ("propersubset", '\u{2282}'), ("propersuperset", '\u{2283}'), ("proportional", '\u{221D}'),
    ("psi", '\u{03C8}'), ("q", '\u{0071}'), ("question", '\u{003F}'), ("questiondown", '\u{00BF}'),
    ("questiondownsmall", '\u{F7BF}'), ("questionsmall", '\u{F73F}'), ("quotedbl", '\u{0022}'),
    ("quotedblbase", '\u{201E}'), ("quotedblleft", '\u{201C}'), ("quotedblright", '\u{201D}'),
    ("quoteleft", '\u{2018}'), ("quoteright", '\u{2019}'), ("quotesinglbase", '\u{201A}'),
    ("quotesingle", '\u{0027}'), ("r", '\u{0072}'), ("racute", '\u{0155}'), ("radical", '\u{221A}'),
    ("radicalex", '\u{F8E5}'), ("rcaron", '\u{0159}'), ("rcommaaccent", '\u{0157}'),
    ("reflexsubset", '\u{2286}'), ("reflexsuperset", '\u{2287}'), ("registered", '\u{00AE}'),
    ("registersans", '\u{F8E8}'), ("registerserif", '\u{F6DA}'), ("rho", '\u{03C1}'),
    ("ring", '\u{02DA}'), ("rsuperior", '\u{F6F1}'), ("rupiah", '\u{F6DD}'), ("s", '\u{0073}'),
    ("sacute", '\u{015B}'), ("scaron", '\u{0161}'), ("scedilla", '\u{015F}'),
    ("scommaaccent", '\u{0219}'), ("second", '\u{2033}'), ("section", '\u{00A7}'),
    ("semicolon", '\u{003B}'), ("seven", '\u{0037}'), ("seveneighths", '\u{215E}'),
    ("seveninferior", '\u{2087}'), ("sevenoldstyle", '\u{F737}'), ("sevensuperior", '\u{2077}'),
    ("sfthyphen", '\u{00AD}'), ("sigma", '\u{03C3}'), ("sigma1", '\u{03C2}'),
    ("similar", '\u{223C}'), ("six", '\u{0036}'), ("sixinferior", '\u{2086}'),
    ("sixoldstyle", '\u{F736}'), ("sixsuperior", '\u{2076}'), ("slash", '\u{002F}'),
    ("space", '\u{0020}'), ("spade", '\u{2660}'), ("ssuperior", '\u{F6F2}'),
    ("sterling", '\u{00A3}'), ("suchthat", '\u{220B}'), ("summation", '\u{2211}'),
    ("t", '\u{0074}'), ("tau", '\u{03C4}'), ("tcaron", '\u{0165}'), ("tcommaaccent", '\u{0163}'),
    ("therefore", '\u{2234}'), ("theta", '\u{03B8}'), ("theta1", '\u{03D1}'), ("thorn", '\u{00FE}'),
    ("three", '\u{0033}'), ("threeeighths", '\u{215C}'), ("threeinferior", '\u{2083}'),
    ("threeoldstyle", '\u{F733}'), ("threequarters", '\u{00BE}'),
    ("threequartersemdash", '\u{F6DE}'), ("threesuperior", '\u{00B3}'), ("tilde", '\u{02DC}'),
    ("tonos", '\u{0384}'), ("trademark", '\u{2122}'), ("trademarksans", '\u{F8EA}'),
    ("trademarkserif", '\u{F6DB}'), ("tsuperior", '\u{F6F3}'), ("two", '\u{0032}'),
    ("twodotenleader", '\u{2025}'), ("twoinferior", '\u{2082}'), ("twooldstyle", '\u{F732}'),
    ("twosuperior", '\u{00B2}'), ("twothirds", '\u{2154}'), ("u", '\u{0075}'),
    ("uacute", '\u{00FA}'), ("ucircumflex", '\u{00FB}'), ("udieresis", '\u{00FC}'),
    ("ugrave", '\u{00F9}'), ("uhungarumlaut", '\u{0171}'), ("umacron", '\u{016B}'),
    ("underscore", '\u{005F}'), ("union", '\u{222A}'), ("universal", '\u{2200}'),
    ("uogonek", '\u{0173}'), ("upsilon", '\u{03C5}'), ("upsilondieresis", '\u{03CB}'),
    ("upsilondieresistonos", '\u{03B0}'), ("upsilontonos", '\u{03CD}'), ("uring", '\u{016F}'),
    ("v", '\u{0076}'), ("w", '\u{0077}'), ("weierstrass", '\u{2118}'), ("x", '\u{0078}'),
    ("xi", '\u{03BE}'), ("y", '\u{0079}'), ("yacute", '\u{00FD}'), ("ydieresis", '\u{00FF}'),
    ("yen", '\u{00A5}'), ("z", '\u{007A}'), ("zacute", '\u{017A}'), ("zcaron", '\u{017E}'),
    ("zdotaccent", '\u{017C}'), ("zero", '\u{0030}'), ("zeroinferior", '\u{2080}'),
    ("zerooldstyle", '\u{F730}'), ("zerosuperior", '\u{2070}'), ("zeta", '\u{03B6}'),
];

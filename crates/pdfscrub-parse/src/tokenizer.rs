//! Content stream lexer.
//!
//! Splits content stream (or CMap) bytes into [`Operator`]s, each carrying
//! the [`Operand`]s accumulated since the previous operator. The lexer is
//! an iterator, so the interpreter dispatches each operator as soon as it
//! is read; the first malformed token ends iteration with an error.

use std::ops::Range;

use crate::error::BackendError;

/// A content stream operand value.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Integer number (e.g., `42`, `-7`).
    Integer(i64),
    /// Real number (e.g., `3.14`, `.5`).
    Real(f64),
    /// Name object without the leading `/`, `#xx` escapes resolved.
    Name(String),
    /// Literal string `(...)`, escapes resolved, as raw bytes.
    LiteralString(Vec<u8>),
    /// Hex string `<...>` as decoded bytes.
    HexString(Vec<u8>),
    /// Array of operands.
    Array(Vec<Operand>),
    /// `true` or `false`.
    Boolean(bool),
    /// The null object.
    Null,
    /// Inline dictionary `<< /Key value ... >>`.
    Dictionary(Vec<(String, Operand)>),
}

impl Operand {
    /// Numeric value of an integer or real operand.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Operand::Integer(i) => Some(*i as f64),
            Operand::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Operand::Name(n) => Some(n),
            _ => None,
        }
    }

    /// Bytes of a literal or hex string.
    pub fn as_string_bytes(&self) -> Option<&[u8]> {
        match self {
            Operand::LiteralString(b) | Operand::HexString(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Operand]> {
        match self {
            Operand::Array(a) => Some(a),
            _ => None,
        }
    }
}

/// An operator with the operands that preceded it.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    /// Operator keyword (e.g., `"BT"`, `"Tf"`, `"endbfchar"`).
    pub name: String,
    /// Operands in stream order.
    pub operands: Vec<Operand>,
    /// Byte range from the first operand (or the keyword when there are
    /// none) to the end of the keyword.
    pub span: Range<usize>,
    /// Byte range of each operand, parallel to `operands`.
    pub operand_spans: Vec<Range<usize>>,
}

/// Streaming lexer over content stream bytes.
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Read up to and including the next operator keyword.
    ///
    /// Returns `Ok(None)` at end of input. Operands left over after the last
    /// operator are discarded.
    fn next_operator(&mut self) -> Result<Option<Operator>, BackendError> {
        let mut operands = Vec::new();
        let mut operand_spans: Vec<Range<usize>> = Vec::new();

        loop {
            self.skip_whitespace_and_comments();
            let Some(&b) = self.input.get(self.pos) else {
                return Ok(None);
            };
            let start = self.pos;

            let operand = match b {
                b'(' => Operand::LiteralString(self.literal_string()?),
                b'<' if self.peek(1) == Some(b'<') => Operand::Dictionary(self.dictionary()?),
                b'<' => Operand::HexString(self.hex_string()?),
                b'[' => {
                    self.pos += 1;
                    Operand::Array(self.array()?)
                }
                b'/' => Operand::Name(self.name()),
                b'0'..=b'9' | b'+' | b'-' | b'.' => self.number()?,
                b']' => {
                    return Err(self.malformed("unexpected ']' outside array"));
                }
                _ if is_regular(b) => {
                    let keyword = self.keyword();
                    match keyword.as_str() {
                        "true" => Operand::Boolean(true),
                        "false" => Operand::Boolean(false),
                        "null" => Operand::Null,
                        _ => {
                            if keyword == "BI" {
                                self.skip_inline_image()?;
                            }
                            let first = operand_spans.first().map_or(start, |r| r.start);
                            return Ok(Some(Operator {
                                name: keyword,
                                span: first..self.pos,
                                operands,
                                operand_spans,
                            }));
                        }
                    }
                }
                _ => {
                    // stray delimiters such as `)` `>` `{` `}`
                    self.pos += 1;
                    continue;
                }
            };
            operands.push(operand);
            operand_spans.push(start..self.pos);
        }
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.input.get(self.pos + ahead).copied()
    }

    fn malformed(&self, what: &str) -> BackendError {
        BackendError::MalformedStream(format!("{what} at byte {}", self.pos))
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&b) = self.input.get(self.pos) {
            if is_whitespace(b) {
                self.pos += 1;
            } else if b == b'%' {
                while self
                    .input
                    .get(self.pos)
                    .is_some_and(|&c| c != b'\n' && c != b'\r')
                {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    /// `(...)` with balanced parentheses and escape sequences.
    fn literal_string(&mut self) -> Result<Vec<u8>, BackendError> {
        self.pos += 1;
        let mut out = Vec::new();
        let mut depth = 1u32;

        while let Some(&b) = self.input.get(self.pos) {
            self.pos += 1;
            match b {
                b'(' => {
                    depth += 1;
                    out.push(b);
                }
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(out);
                    }
                    out.push(b);
                }
                b'\\' => {
                    let Some(&escaped) = self.input.get(self.pos) else {
                        break;
                    };
                    self.pos += 1;
                    match escaped {
                        b'n' => out.push(b'\n'),
                        b'r' => out.push(b'\r'),
                        b't' => out.push(b'\t'),
                        b'b' => out.push(0x08),
                        b'f' => out.push(0x0C),
                        b'\r' => {
                            // line continuation, CR or CRLF
                            if self.peek(0) == Some(b'\n') {
                                self.pos += 1;
                            }
                        }
                        b'\n' => {}
                        b'0'..=b'7' => {
                            let mut value = u32::from(escaped - b'0');
                            for _ in 0..2 {
                                match self.peek(0) {
                                    Some(d @ b'0'..=b'7') => {
                                        value = value * 8 + u32::from(d - b'0');
                                        self.pos += 1;
                                    }
                                    _ => break,
                                }
                            }
                            // high-order overflow is ignored
                            out.push((value & 0xFF) as u8);
                        }
                        // `\(`, `\)`, `\\` and unknown escapes keep the character
                        other => out.push(other),
                    }
                }
                _ => out.push(b),
            }
        }

        Err(self.malformed("unterminated literal string"))
    }

    /// `<...>`; whitespace is ignored and an odd final digit is padded with 0.
    fn hex_string(&mut self) -> Result<Vec<u8>, BackendError> {
        self.pos += 1;
        let mut digits = Vec::new();
        loop {
            let Some(&b) = self.input.get(self.pos) else {
                return Err(self.malformed("unterminated hex string"));
            };
            self.pos += 1;
            if b == b'>' {
                break;
            }
            if is_whitespace(b) {
                continue;
            }
            match hex_value(b) {
                Some(v) => digits.push(v),
                None => return Err(self.malformed("invalid hex digit")),
            }
        }
        if digits.len() % 2 != 0 {
            digits.push(0);
        }
        Ok(digits.chunks(2).map(|p| (p[0] << 4) | p[1]).collect())
    }

    /// Elements up to `]`; the `[` is already consumed.
    fn array(&mut self) -> Result<Vec<Operand>, BackendError> {
        let mut elements = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            let Some(&b) = self.input.get(self.pos) else {
                return Err(self.malformed("unterminated array"));
            };
            if b == b']' {
                self.pos += 1;
                return Ok(elements);
            }
            elements.push(self.value()?);
        }
    }

    /// `<< /Key value ... >>`.
    fn dictionary(&mut self) -> Result<Vec<(String, Operand)>, BackendError> {
        self.pos += 2;
        let mut entries = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            match (self.peek(0), self.peek(1)) {
                (None, _) => return Err(self.malformed("unterminated dictionary")),
                (Some(b'>'), Some(b'>')) => {
                    self.pos += 2;
                    return Ok(entries);
                }
                (Some(b'/'), _) => {}
                _ => return Err(self.malformed("expected name key in dictionary")),
            }
            let key = self.name();
            self.skip_whitespace_and_comments();
            if self.peek(0).is_none() {
                return Err(self.malformed("unterminated dictionary value"));
            }
            let value = self.value()?;
            entries.push((key, value));
        }
    }

    /// A single object inside an array, dictionary or inline image header.
    /// Bare keywords other than `true`/`false`/`null` are kept as names.
    fn value(&mut self) -> Result<Operand, BackendError> {
        let b = self.input[self.pos];
        match b {
            b'/' => Ok(Operand::Name(self.name())),
            b'(' => Ok(Operand::LiteralString(self.literal_string()?)),
            b'<' if self.peek(1) == Some(b'<') => Ok(Operand::Dictionary(self.dictionary()?)),
            b'<' => Ok(Operand::HexString(self.hex_string()?)),
            b'[' => {
                self.pos += 1;
                Ok(Operand::Array(self.array()?))
            }
            b'0'..=b'9' | b'+' | b'-' | b'.' => self.number(),
            _ if is_regular(b) => {
                let keyword = self.keyword();
                Ok(match keyword.as_str() {
                    "true" => Operand::Boolean(true),
                    "false" => Operand::Boolean(false),
                    "null" => Operand::Null,
                    _ => Operand::Name(keyword),
                })
            }
            _ => Err(self.malformed(&format!("unexpected byte 0x{b:02X}"))),
        }
    }

    fn name(&mut self) -> String {
        self.pos += 1;
        let start = self.pos;
        while self.input.get(self.pos).copied().is_some_and(is_regular) {
            self.pos += 1;
        }

        let raw = &self.input[start..self.pos];
        let mut name = Vec::with_capacity(raw.len());
        let mut i = 0;
        while i < raw.len() {
            if raw[i] == b'#' && i + 2 < raw.len() {
                if let (Some(hi), Some(lo)) = (hex_value(raw[i + 1]), hex_value(raw[i + 2])) {
                    name.push((hi << 4) | lo);
                    i += 3;
                    continue;
                }
            }
            name.push(raw[i]);
            i += 1;
        }
        String::from_utf8_lossy(&name).into_owned()
    }

    fn number(&mut self) -> Result<Operand, BackendError> {
        let start = self.pos;
        if matches!(self.peek(0), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let mut has_dot = false;
        while let Some(b) = self.peek(0) {
            if b == b'.' && !has_dot {
                has_dot = true;
            } else if !b.is_ascii_digit() {
                break;
            }
            self.pos += 1;
        }

        // only ASCII digits, sign and dot were consumed
        let token = String::from_utf8_lossy(&self.input[start..self.pos]);
        let digits = token.trim_start_matches(['+', '-']);
        if digits.is_empty() || digits == "." {
            // a lone sign or dot reads as zero, as viewers do
            return Ok(Operand::Integer(0));
        }
        if has_dot {
            token
                .parse::<f64>()
                .map(Operand::Real)
                .map_err(|_| self.malformed("invalid real number"))
        } else {
            match token.parse::<i64>() {
                Ok(v) => Ok(Operand::Integer(v)),
                // out of i64 range
                Err(_) => token
                    .parse::<f64>()
                    .map(Operand::Real)
                    .map_err(|_| self.malformed("invalid integer")),
            }
        }
    }

    /// A run of regular characters: `BT`, `T*`, `'`, `d0`, `endbfrange`.
    fn keyword(&mut self) -> String {
        let start = self.pos;
        while self.input.get(self.pos).copied().is_some_and(is_regular) {
            self.pos += 1;
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    /// Skip an inline image header and its data, through `EI`.
    fn skip_inline_image(&mut self) -> Result<(), BackendError> {
        loop {
            self.skip_whitespace_and_comments();
            if self.peek(0).is_none() {
                return Err(self.malformed("unterminated inline image (missing ID)"));
            }
            if self.peek(0) == Some(b'I')
                && self.peek(1) == Some(b'D')
                && self.peek(2).is_none_or(is_whitespace)
            {
                // one whitespace byte separates ID from the data
                self.pos += 3;
                break;
            }
            self.value()?;
        }

        let data_start = self.pos.min(self.input.len());
        let mut i = data_start;
        while i + 1 < self.input.len() {
            if (i == data_start || is_whitespace(self.input[i - 1]))
                && self.input[i] == b'E'
                && self.input[i + 1] == b'I'
                && self
                    .input
                    .get(i + 2)
                    .is_none_or(|&c| is_whitespace(c) || is_delimiter(c))
            {
                self.pos = i + 2;
                return Ok(());
            }
            i += 1;
        }
        self.pos = self.input.len();
        Err(self.malformed("unterminated inline image (missing EI)"))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Operator, BackendError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_operator() {
            Ok(op) => op.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Read every operator of `input`.
///
/// # Errors
///
/// Returns [`BackendError::MalformedStream`] at the first malformed token.
pub fn tokenize(input: &[u8]) -> Result<Vec<Operator>, BackendError> {
    Lexer::new(input).collect()
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0C | 0x00)
}

fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

fn is_regular(b: u8) -> bool {
    !is_whitespace(b) && !is_delimiter(b)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

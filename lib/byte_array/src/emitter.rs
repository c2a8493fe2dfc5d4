//! Streaming emission of a constant byte array declaration and its length constant.

use std::io::{self, BufRead, BufReader, Read, Write};

use crate::token::HexToken;

/// The number of [`HexToken`]s written on each line of the array body.
pub const BYTES_PER_LINE: u64 = 16;

/// The placement of line breaks and whitespace in the array body.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum WrapStyle {
    /// Tokens on a line are separated by a single space and every line ends directly after its
    /// last comma. No blank lines are produced.
    #[default]
    Compact,
    /// Every token is followed by `", "` and every sixteenth token by an additional line break.
    /// The closing `};` is preceded by a line break, which leaves a blank line whenever the
    /// body ends on a full line.
    Legacy,
}

impl WrapStyle {
    /// Returns the textual representation of the [`WrapStyle`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Legacy => "legacy",
        }
    }
}

/// The naming and layout of an emitted declaration.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Declaration {
    /// The identifier of the array.
    name: String,
    /// The layout of the array body.
    wrap_style: WrapStyle,
}

impl Declaration {
    /// Creates a new [`Declaration`] named `name` using [`WrapStyle::Compact`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wrap_style: WrapStyle::default(),
        }
    }

    /// Replaces the [`WrapStyle`] of the [`Declaration`].
    #[must_use]
    pub fn with_wrap_style(mut self, wrap_style: WrapStyle) -> Self {
        self.wrap_style = wrap_style;
        self
    }

    /// Returns the identifier of the array.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier of the length constant.
    pub fn length_name(&self) -> String {
        format!("{}_len", self.name)
    }

    /// Returns the [`WrapStyle`] of the array body.
    pub const fn wrap_style(&self) -> WrapStyle {
        self.wrap_style
    }
}

/// Writes a [`Declaration`] one byte at a time.
///
/// The opening line is written on construction, so any input should be opened before an
/// [`Emitter`] is created.
#[derive(Debug)]
pub struct Emitter<'decl, W: Write> {
    /// The destination of the emitted text.
    writer: W,
    /// The naming and layout of the output.
    declaration: &'decl Declaration,
    /// The number of bytes pushed so far.
    count: u64,
}

impl<'decl, W: Write> Emitter<'decl, W> {
    /// Creates a new [`Emitter`] and writes the opening line of `declaration` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any error produced by `writer`.
    pub fn new(mut writer: W, declaration: &'decl Declaration) -> io::Result<Self> {
        writeln!(writer, "const unsigned char {}[] = {{", declaration.name())?;

        Ok(Self {
            writer,
            declaration,
            count: 0,
        })
    }

    /// Appends the token for `byte` to the array body.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the underlying writer.
    pub fn push(&mut self, byte: u8) -> io::Result<()> {
        let token = HexToken::new(byte);
        match self.declaration.wrap_style() {
            WrapStyle::Compact => {
                if !self.count.is_multiple_of(BYTES_PER_LINE) {
                    self.writer.write_all(b" ")?;
                }
                write!(self.writer, "{token},")?;
            }
            WrapStyle::Legacy => write!(self.writer, "{token}, ")?,
        }

        self.count += 1;
        if self.count.is_multiple_of(BYTES_PER_LINE) {
            self.writer.write_all(b"\n")?;
        }

        Ok(())
    }

    /// Appends the tokens for every byte in `bytes` to the array body.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the underlying writer.
    pub fn push_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        bytes.iter().try_for_each(|&byte| self.push(byte))
    }

    /// Returns the number of bytes pushed so far.
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Closes the array body, writes the length constant, and flushes the writer.
    ///
    /// Returns the number of bytes in the array.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the underlying writer.
    pub fn finish(mut self) -> io::Result<u64> {
        match self.declaration.wrap_style() {
            WrapStyle::Compact => {
                if !self.count.is_multiple_of(BYTES_PER_LINE) {
                    self.writer.write_all(b"\n")?;
                }
                self.writer.write_all(b"};\n")?;
            }
            WrapStyle::Legacy => self.writer.write_all(b"\n};\n")?,
        }

        writeln!(
            self.writer,
            "const unsigned int {} = {};",
            self.declaration.length_name(),
            self.count
        )?;
        self.writer.flush()?;

        Ok(self.count)
    }
}

/// Reads `reader` to exhaustion and writes the corresponding `declaration` to `writer`.
///
/// Returns the number of bytes read, which is also the value of the emitted length constant.
///
/// # Errors
///
/// Returns any error produced by `reader` other than [`io::ErrorKind::Interrupted`], or by
/// `writer`. Output written before the error is not retracted.
pub fn emit<R: Read, W: Write>(
    reader: R,
    writer: W,
    declaration: &Declaration,
) -> io::Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut emitter = Emitter::new(writer, declaration)?;

    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        };
        if chunk.is_empty() {
            break;
        }

        emitter.push_all(chunk)?;
        let consumed = chunk.len();
        reader.consume(consumed);
    }

    emitter.finish()
}

/// Returns the `declaration` of an array holding `bytes`.
pub fn encode(bytes: &[u8], declaration: &Declaration) -> String {
    let mut output = Vec::with_capacity(bytes.len() * 6 + 96);

    Emitter::new(&mut output, declaration)
        .and_then(|mut emitter| {
            emitter.push_all(bytes)?;
            emitter.finish()
        })
        .unwrap_or_else(|_| unreachable!("writing to a `Vec` cannot fail"));

    String::from_utf8(output).unwrap_or_else(|_| unreachable!("emitted text is ASCII"))
}

//! Text form of a bitfield.
//!
//! Input is a run of `'0'`/`'1'` characters, one per bit in index order.
//! Output is the space-separated list of set bit indices.
//!
//! ```
//! use packed_bitfield::BitField;
//!
//! let mut bf = BitField::new(6)?;
//! bf.read_bits("01 10x1".as_bytes())?;
//! assert_eq!(bf.to_string(), "1 2 5");
//!
//! let mut out = Vec::new();
//! bf.write_acts(&mut out)?;
//! assert_eq!(out, b"1 2 5\n");
//! # Ok::<(), packed_bitfield::BitFieldError>(())
//! ```

use crate::bitfield::BitField;
use crate::error::Result;
use itertools::Itertools;
use log::trace;
use std::fmt;
use std::io::{self, BufRead, Write};

impl BitField {
    /// Read `length()` bytes from `reader` into bits `0..length()`.
    ///
    /// Each byte is one symbol, so a multi-byte UTF-8 character spans several
    /// bits; [`BitField::from_bit_str`] works on `char`s instead. ASCII
    /// whitespace between symbols is skipped. `'1'` sets the bit, `'0'`
    /// clears it, and any other byte leaves it unchanged. Bytes past
    /// the last bit are not consumed from the iterator, though a buffered
    /// reader may have pulled them into its buffer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BitFieldError::Io`] if the reader fails, or with kind
    /// `UnexpectedEof` if input ends early. Bits read before the failure
    /// stay applied.
    pub fn read_bits<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let mut bytes = reader
            .bytes()
            .filter(|b| !matches!(b, Ok(c) if c.is_ascii_whitespace()));

        for i in 0..self.length() {
            match bytes.next() {
                Some(Ok(byte)) => self.apply_symbol(i, char::from(byte)),
                Some(Err(e)) => return Err(e.into()),
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        format!("expected {} bit characters, got {}", self.length(), i),
                    )
                    .into());
                }
            }
        }

        Ok(())
    }

    /// Apply one input symbol to bit `i`: `'1'` sets, `'0'` clears, anything
    /// else is a no-op.
    fn apply_symbol(&mut self, i: usize, symbol: char) {
        match symbol {
            '1' => self.write_bit(i, true),
            '0' => self.write_bit(i, false),
            other => trace!("ignoring {:?} for bit {}", other, i),
        }
    }

    /// Build a bitfield from a string of `'0'`/`'1'` characters.
    ///
    /// The length is the number of non-whitespace `char`s in `s`, so a
    /// multi-byte character occupies a single bit. Characters other than
    /// `'0'`/`'1'` count toward the length and read as 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitfield::BitField;
    ///
    /// let bf = BitField::from_bit_str("0101")?;
    /// assert_eq!(bf.length(), 4);
    /// assert_eq!(bf.get_acts(), vec![1, 3]);
    /// # Ok::<(), packed_bitfield::BitFieldError>(())
    /// ```
    pub fn from_bit_str(s: &str) -> Result<BitField> {
        let symbols = || s.chars().filter(|c| !c.is_whitespace());
        let mut bf = BitField::zeroed(symbols().count());
        for (i, symbol) in symbols().enumerate() {
            bf.apply_symbol(i, symbol);
        }
        Ok(bf)
    }

    /// Write the indices of set live bits, space-separated, then a newline.
    ///
    /// The last index is followed directly by `'\n'`, with no trailing
    /// space before it.
    pub fn write_acts<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", self)?;
        Ok(())
    }
}

impl fmt::Display for BitField {
    /// Space-separated indices of set live bits, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_acts().iter().join(" "))
    }
}

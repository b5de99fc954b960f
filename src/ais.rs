//! AIS payload armoring and six-bit field extraction.
//!
//! Encapsulation sentences carry binary AIS messages as text, six bits per
//! character. [`dearmor`] recovers the six-bit symbols, and [`bit_field`]
//! reads arbitrary, non-byte-aligned ranges of bits from them.

use std::ops::Range;

use tartan_bitfield::bitfield;
use thiserror::Error;

/// An error removing armor from a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArmorError {
    /// A character outside `'0'..='w'`, or in the unused `'X'..='_'` band.
    #[error("Invalid armor character {character:?} at index {index}.")]
    BadCharacter { index: usize, character: char },
}

/// A bit range that does not address a symbol buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitRangeError {
    /// The range ends before it starts.
    #[error("Bit range {start}..{end} ends before it starts.")]
    Reversed { start: usize, end: usize },
    /// The range extends past the last symbol.
    #[error("Bit range ends at {end}, past the {available} available bits.")]
    OutOfBounds { end: usize, available: usize },
}

/// Recover six-bit symbols from an armored payload, one per character.
pub fn dearmor(payload: &str) -> Result<Vec<u8>, ArmorError> {
    payload
        .bytes()
        .enumerate()
        .map(|(index, b)| -> Result<u8, ArmorError> {
            if !(b'0'..=b'w').contains(&b) || (b'X'..=b'_').contains(&b) {
                let character = payload[index..].chars().next().unwrap_or(b as char);
                Err(ArmorError::BadCharacter { index, character })?;
            }

            let v = b - b'0';
            // Close the gap left by the eight excluded characters.
            Ok(if v > 40 { v - 8 } else { v })
        })
        .collect()
}

const ALPHABET: &[u8; 64] = b"@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_ !\"#$%&'()*+,-./0123456789:;<=>?";

/// Convert a six-bit value to its character in the AIS text alphabet.
///
/// # Panics
///
/// If `v` is greater than 63.
pub fn sixbit_to_ascii(v: u8) -> char {
    assert!(v < 64, "six-bit value {v} out of range");
    ALPHABET[v as usize] as char
}

/// Decode a run of six-bit text symbols, trimming trailing `@` padding and
/// spaces.
///
/// # Panics
///
/// If any symbol is greater than 63.
pub fn decode_text(symbols: &[u8]) -> String {
    let text: String = symbols.iter().copied().map(sixbit_to_ascii).collect();
    text.trim_end_matches(['@', ' ']).to_string()
}

/// Pack the bits `range` of a six-bit symbol buffer into bytes.
///
/// Bit `i` is bit `5 - i % 6` of symbol `i / 6`, most significant first. The
/// extracted bits form a big-endian integer whose last bit is least
/// significant, shifted right by `(6 - len % 6) % 6` to drop the padding of
/// a partial final symbol. Leading zero bytes are not emitted, so a range of
/// zero bits yields an empty vector.
///
/// # Panics
///
/// If the range is reversed or extends past the end of `symbols`. See
/// [`try_bit_field`] for a checked variant.
pub fn bit_field(symbols: &[u8], range: Range<usize>) -> Vec<u8> {
    match try_bit_field(symbols, range) {
        Ok(bytes) => bytes,
        Err(err) => panic!("{err}"),
    }
}

/// Pack the bits `range` of a six-bit symbol buffer into bytes, failing on
/// ranges that do not address the buffer.
///
/// See [`bit_field`] for the packing rules.
pub fn try_bit_field(symbols: &[u8], range: Range<usize>) -> Result<Vec<u8>, BitRangeError> {
    let Range { start, end } = range;

    if end < start {
        Err(BitRangeError::Reversed { start, end })?;
    }

    let available = symbols.len() * 6;
    if end > available {
        Err(BitRangeError::OutOfBounds { end, available })?;
    }

    let len = end - start;
    let padding = (6 - len % 6) % 6;
    let kept = len.saturating_sub(padding);

    let mut bytes = vec![0; kept.div_ceil(8)];
    let lead = bytes.len() * 8 - kept; // Unused high bits of the first byte.

    for k in 0..kept {
        let i = start + k;
        let bit = (symbols[i / 6] >> (5 - i % 6)) & 1;

        let o = lead + k;
        bytes[o / 8] |= bit << (7 - o % 8);
    }

    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes.drain(..first);

    Ok(bytes)
}

/// The fields common to the start of every AIS message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Header {
    /// Message type, 1 to 27.
    pub message_type: u8,
    /// Number of times the message has been repeated.
    pub repeat: u8,
    /// Maritime Mobile Service Identity of the sender.
    pub mmsi: u32,
}

impl Header {
    /// Read the header from the first seven symbols of a payload.
    pub fn from_symbols(symbols: &[u8]) -> Result<Self, BitRangeError> {
        // Seven whole symbols, so no padding is dropped.
        let bytes = try_bit_field(symbols, 0..42)?;
        let value = bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);

        bitfield! {
            struct RawHeader(u64) {
                [4..34] mmsi: u64,
                [34..36] repeat: u64,
                [36..42] message_type: u64,
            }
        }

        let raw = RawHeader(value);

        Ok(Self {
            message_type: raw.message_type() as u8,
            repeat: raw.repeat() as u8,
            mmsi: raw.mmsi() as u32,
        })
    }
}

//! Sentence framing: sigil, checksum and field tokens.

use thiserror::Error;

/// An error validating the outer structure of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// The sentence is shorter than a sigil and a five character type.
    #[error("Sentence is too short.")]
    TooShort,
    /// The sentence does not begin with `$` or `!`.
    #[error("No initial sentence sigil.")]
    NoSigil,
    /// The text after `*` is not exactly two hexadecimal digits.
    #[error("Invalid checksum {0:?}.")]
    Checksum(String),
}

/// The leading character of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sigil {
    /// `$`, a conventional parametric sentence.
    Parametric,
    /// `!`, an encapsulation sentence carrying armored binary data.
    Encapsulation,
}

impl Sigil {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'$' => Some(Self::Parametric),
            b'!' => Some(Self::Encapsulation),
            _ => None,
        }
    }
}

/// The outcome of checksum validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checksum {
    /// The sentence had no `*` suffix.
    Absent,
    /// The sentence declared a checksum, alongside the one computed from its
    /// bytes.
    Present { declared: u8, computed: u8 },
}

impl Checksum {
    /// The declared checksum, or zero if absent.
    pub fn declared(&self) -> u8 {
        match *self {
            Self::Absent => 0,
            Self::Present { declared, .. } => declared,
        }
    }

    /// Whether the declared and computed values agree. An absent checksum is
    /// always valid.
    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Absent => true,
            Self::Present { declared, computed } => declared == computed,
        }
    }
}

/// A sentence split into its sigil, field tokens and checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub sigil: Sigil,
    /// Comma-separated tokens between the sigil and `*`. Empty tokens are
    /// kept, and there is always at least one.
    pub fields: Vec<&'a str>,
    pub checksum: Checksum,
}

impl<'a> Envelope<'a> {
    /// Validate the framing of a raw sentence and tokenize its body.
    ///
    /// A checksum mismatch is not an error here; it is recorded in
    /// [`Envelope::checksum`] so fields can still be decoded.
    pub fn parse(sentence: &'a str) -> Result<Self, EnvelopeError> {
        // A sigil and a five character type.
        if sentence.len() < 6 {
            Err(EnvelopeError::TooShort)?;
        }

        let sigil = Sigil::from_byte(sentence.as_bytes()[0]).ok_or(EnvelopeError::NoSigil)?;
        let body = &sentence[1..];

        let (body, checksum) = match body.split_once('*') {
            Some((body, suffix)) => {
                let invalid = || EnvelopeError::Checksum(suffix.to_string());

                // `from_str_radix` alone admits a sign and other widths.
                if suffix.len() != 2 || !suffix.bytes().all(|b| b.is_ascii_hexdigit()) {
                    Err(invalid())?;
                }

                let declared = u8::from_str_radix(suffix, 16).map_err(|_| invalid())?;
                let computed = compute_checksum(body);
                (body, Checksum::Present { declared, computed })
            }
            None => (body, Checksum::Absent),
        };

        Ok(Self {
            sigil,
            fields: body.split(',').collect(),
            checksum,
        })
    }

    /// The sentence type token, such as `GPGGA`.
    pub fn kind(&self) -> &'a str {
        self.fields[0]
    }
}

/// Accumulate the bytes of a sentence body into an exclusive-or checksum.
pub fn compute_checksum(body: &str) -> u8 {
    body.bytes().fold(0, |acc, b| acc ^ b)
}

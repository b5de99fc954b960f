//! The field decoder engine, and the typed decoding entrypoint.

use thiserror::Error;

use crate::{
    ais::ArmorError,
    convert::{self, ConvertError, Slot},
    envelope::{Checksum, Envelope, EnvelopeError},
    schema::{FieldDescriptor, Schema, SchemaError, Tag},
};

/// Errors occurring while decoding a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The sentence is shorter than a sigil and a five character type.
    #[error("Sentence is too short.")]
    TooShort,
    /// The sentence does not begin with `$` or `!`.
    #[error("No initial sentence sigil.")]
    NoSigil,
    /// The text after `*` is not exactly two hexadecimal digits.
    #[error("Invalid checksum {0:?}.")]
    BadChecksum(String),
    /// Declared and computed checksums do not match.
    #[error("Declared ({declared:#04x}) and computed ({computed:#04x}) checksums do not match.")]
    ChecksumMismatch { declared: u8, computed: u8 },
    /// The record yielded no destination for a field its schema names.
    #[error("Record has no destination for field {index} of its schema.")]
    InvalidDestination { index: usize },
    /// A field's converter cannot write to its type.
    #[error("Field {field:?} has the wrong type for its converter.")]
    FieldTypeMismatch { field: String },
    /// A token could not be converted.
    #[error("Invalid field {field:?} at position {position}: {source}")]
    Field {
        field: String,
        position: usize,
        #[source]
        source: ConvertError,
    },
    /// The type field is not at token position 0.
    #[error("Late type field at position {0}.")]
    LateTypeField(usize),
    /// No field carries the type tag.
    #[error("Missing type field.")]
    MissingTypeField,
    /// A type pattern is malformed.
    #[error("Bad syntax for type match {0:?}.")]
    BadTypeMatcherSyntax(String),
    /// Two fields read the same token.
    #[error("Duplicate field at position {0}.")]
    DuplicatePosition(usize),
    /// The sentence type token does not satisfy the record's type matcher.
    #[error("Wrong sentence type {0:?} for record.")]
    SentenceTypeMismatch(String),
    /// No record shape is registered for the sentence type.
    #[error("Sentence type {0:?} not registered.")]
    NotRegistered(String),
    /// An armored payload holds a character outside the armor alphabet.
    #[error("Invalid armor character {character:?} at index {index}.")]
    BadArmorCharacter { index: usize, character: char },
}

impl From<EnvelopeError> for Error {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::TooShort => Self::TooShort,
            EnvelopeError::NoSigil => Self::NoSigil,
            EnvelopeError::Checksum(e) => Self::BadChecksum(e),
        }
    }
}

impl From<SchemaError> for Error {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::LateTypeField(p) => Self::LateTypeField(p),
            SchemaError::MissingTypeField => Self::MissingTypeField,
            SchemaError::BadTypeMatcherSyntax(s) => Self::BadTypeMatcherSyntax(s),
            SchemaError::DuplicatePosition(p) => Self::DuplicatePosition(p),
        }
    }
}

impl From<ArmorError> for Error {
    fn from(err: ArmorError) -> Self {
        match err {
            ArmorError::BadCharacter { index, character } => {
                Self::BadArmorCharacter { index, character }
            }
        }
    }
}

/// A record shape that sentences can be decoded into.
///
/// See the [`Sentence`](macro@Sentence) derive macro for an automatic
/// implementation of this trait.
pub trait Sentence {
    /// The schema describing this record's fields, built once per shape.
    fn schema(&self) -> Result<&'static Schema, SchemaError>;

    /// Borrow the destination of the field at `index` in the schema.
    fn slot(&mut self, index: usize) -> Option<Slot<'_>>;
}

/// Decode a sentence into a record, writing fields in schema order.
///
/// Fields written before a failing field keep their decoded values. A
/// checksum mismatch is reported only after every field has been written,
/// and takes precedence over a field error.
///
/// # Example
///
/// ```
/// let mut bod = Bod::default();
/// bosun::decode(&mut bod, "$GPBOD,099.3,T,105.6,M,POINTB,*48")?;
/// assert_eq!(bod.destination, "POINTB");
/// ```
pub fn decode<S: Sentence + ?Sized>(dst: &mut S, sentence: &str) -> Result<(), Error> {
    let envelope = Envelope::parse(sentence)?;
    let schema = dst.schema()?;

    let decoded = decode_fields(dst, schema, &envelope);
    verify(&envelope)?;
    decoded
}

/// Report a checksum mismatch as an error.
pub(crate) fn verify(envelope: &Envelope<'_>) -> Result<(), Error> {
    match envelope.checksum {
        Checksum::Present { declared, computed } if declared != computed => {
            tracing::debug!(
                kind = envelope.kind(),
                declared,
                computed,
                "checksum mismatch"
            );
            Err(Error::ChecksumMismatch { declared, computed })
        }
        _ => Ok(()),
    }
}

/// Apply each descriptor of a schema to the tokens of an envelope.
pub fn decode_fields<S: Sentence + ?Sized>(
    dst: &mut S,
    schema: &Schema,
    envelope: &Envelope<'_>,
) -> Result<(), Error> {
    for (index, field) in schema.fields().iter().enumerate() {
        let slot = dst.slot(index).ok_or(Error::InvalidDestination { index })?;

        match field.tag() {
            Tag::Type(matcher) => {
                let token = envelope.kind();

                // The observed type is kept even when it is rejected.
                convert::text(token, slot).map_err(|e| field_error(field, 0, e))?;

                if !matcher.matches(token) {
                    Err(Error::SentenceTypeMismatch(token.to_string()))?;
                }
            }
            Tag::Checksum => {
                convert::checksum(envelope.checksum.declared(), slot)
                    .map_err(|e| field_error(field, 0, e))?;
            }
            tag => {
                let position = field.position().unwrap_or_default();

                // Trailing fields missing from short sentences read as empty.
                let token = envelope.fields.get(position).copied().unwrap_or_default();

                let apply: fn(&str, Slot<'_>) -> Result<(), ConvertError> = match tag {
                    Tag::Number => convert::number,
                    Tag::Text => convert::text,
                    Tag::LatLon => convert::latlon,
                    Tag::Date => convert::date,
                    Tag::Time => convert::time,
                    Tag::Type(_) | Tag::Checksum => unreachable!(),
                };

                apply(token, slot).map_err(|e| field_error(field, position, e))?;
            }
        }
    }

    Ok(())
}

fn field_error(field: &FieldDescriptor, position: usize, err: ConvertError) -> Error {
    match err {
        ConvertError::Unsupported => Error::FieldTypeMismatch {
            field: field.name().to_string(),
        },
        source => Error::Field {
            field: field.name().to_string(),
            position,
            source,
        },
    }
}

//! Record schemas: ordered field descriptors and sentence type matchers.

use std::collections::HashSet;

use regex::Regex;
use thiserror::Error;

/// A malformed schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The type field is not at token position 0.
    #[error("Late type field at position {0}.")]
    LateTypeField(usize),
    /// No field carries the type tag.
    #[error("Missing type field.")]
    MissingTypeField,
    /// A type pattern is not wrapped in `/…/`, or does not compile.
    #[error("Bad syntax for type match {0:?}.")]
    BadTypeMatcherSyntax(String),
    /// Two fields read the same token.
    #[error("Duplicate field at position {0}.")]
    DuplicatePosition(usize),
}

/// Matches the sentence type token of a sentence.
#[derive(Debug, Clone)]
pub enum TypeMatcher {
    /// Exact string equality.
    Literal(String),
    /// Regular expression search, anywhere in the token.
    Pattern(Regex),
}

impl TypeMatcher {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Compile a regular expression matcher.
    pub fn pattern(expr: &str) -> Result<Self, SchemaError> {
        Regex::new(expr)
            .map(Self::Pattern)
            .map_err(|_| SchemaError::BadTypeMatcherSyntax(expr.to_string()))
    }

    /// Read a matcher from text, where a `/`-wrapped value is a regular
    /// expression and anything else a literal. Errors carry `text` as given,
    /// wrapper included.
    ///
    /// ```
    /// let m = TypeMatcher::parse("/^G[LNP]GGA$/")?;
    /// assert!(m.matches("GNGGA"));
    /// ```
    pub fn parse(text: &str) -> Result<Self, SchemaError> {
        let invalid = || SchemaError::BadTypeMatcherSyntax(text.to_string());

        match text.strip_prefix('/') {
            Some(rest) => match rest.strip_suffix('/') {
                Some(expr) => Self::pattern(expr).map_err(|_| invalid()),
                None => Err(invalid()),
            },
            None => Ok(Self::literal(text)),
        }
    }

    /// Whether a sentence type token satisfies this matcher.
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Self::Literal(text) => text == token,
            Self::Pattern(re) => re.is_match(token),
        }
    }
}

/// The semantic tag of a field, selecting its converter.
#[derive(Debug, Clone)]
pub enum Tag {
    /// The sentence type, checked against a matcher.
    Type(TypeMatcher),
    Number,
    Text,
    LatLon,
    Date,
    Time,
    /// The declared checksum, independent of any token.
    Checksum,
}

/// Describes how one record field is read from a sentence.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    position: Option<usize>,
    tag: Tag,
}

impl FieldDescriptor {
    /// A field read from the token at `position`.
    pub fn at(position: usize, name: impl Into<String>, tag: Tag) -> Self {
        Self {
            name: name.into(),
            position: Some(position),
            tag,
        }
    }

    /// A field receiving the sentence checksum.
    pub fn checksum(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
            tag: Tag::Checksum,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token position, or `None` for checksum fields.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }
}

/// An ordered, validated list of field descriptors for one record shape.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Validate a list of descriptors.
    ///
    /// Exactly one descriptor must carry [`Tag::Type`], at position 0, and no
    /// two descriptors may share a position. Positions not named by any
    /// descriptor are padding, and their tokens are ignored.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, SchemaError> {
        let mut has_type = false;
        let mut seen = HashSet::new();

        for field in &fields {
            if let (Tag::Type(_), Some(position)) = (&field.tag, field.position) {
                if position != 0 {
                    Err(SchemaError::LateTypeField(position))?;
                }
                has_type = true;
            }

            if let Some(position) = field.position {
                if !seen.insert(position) {
                    Err(SchemaError::DuplicatePosition(position))?;
                }
            }
        }

        if !has_type {
            Err(SchemaError::MissingTypeField)?;
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// The matcher of the type field.
    pub fn type_matcher(&self) -> &TypeMatcher {
        self.fields
            .iter()
            .find_map(|f| match &f.tag {
                Tag::Type(m) => Some(m),
                _ => None,
            })
            .unwrap()
    }
}

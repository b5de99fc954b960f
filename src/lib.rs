//! A schema-driven decoder for NMEA 0183 sentences and the AIS payloads they
//! carry.
//!
//! Sentences are decoded into plain structs. Each struct describes, through
//! its schema, which comma-separated token feeds each field and how that token
//! is converted. Most users should derive [`Sentence`](macro@Sentence) for
//! their record shapes, or use the built-in shapes in [`sentences`].
//!
//! - [`decode`] fills a record of a known shape.
//! - [`Registry::parse`] picks the shape from the sentence type.
//! - [`ais`] removes armor from encapsulated payloads and extracts bit
//!   fields from them.
//!
//! ```
//! let mut gga = Gga::default();
//! bosun::decode(&mut gga, "$GPGGA,170834,4124.8963,N,08151.6838,W,1,05,1.5,280.2,M,-34.0,M,,*75")?;
//! ```
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable the derive macro and the built-in sentences (default).
//! - `serde`: implement `Serialize` for built-in sentences and AIS headers.

extern crate self as bosun;

pub mod ais;
pub mod convert;
pub mod decode;
pub mod envelope;
pub mod registry;
pub mod schema;
#[cfg(feature = "derive")]
pub mod sentences;

pub use decode::{Error, Sentence, decode};
pub use registry::{Record, Registry, Rejection};

/// Derive [`Sentence`] for a struct representing one kind of sentence.
///
/// _Requires Cargo feature `derive`._
///
/// Annotate each decoded field with `nmea(N, tag)`, where `N` is the index of
/// the comma-separated token it reads (the sentence type being token 0) and
/// `tag` selects the converter:
///
/// - `number`: an integer or float, zero when empty.
/// - `string`: the token verbatim, into a `String` or `Vec<u8>`.
/// - `latlon`: degrees and minutes (`DDDMM.MMMM`) into decimal degrees.
/// - `date`: a `DDMMYY` date into an `Option<DateTime<Utc>>`.
/// - `time`: a `HHMMSS[.fff]` time of day into an `Option<DateTime<Utc>>`.
///
/// The type field, at position 0, is matched exactly with
/// `sentence = "TYPE"` or searched with `pattern = "REGEX"`. A field
/// annotated `nmea(checksum)` receives the declared checksum. Token
/// positions not named by any field are skipped.
///
/// ```
/// #[derive(Debug, Default, Sentence)]
/// struct Hdt {
///     #[nmea(0, pattern = "^G[LNP]HDT$")]
///     kind: String,
///     #[nmea(1, number)]
///     heading: f64,
///     #[nmea(checksum)]
///     checksum: u8,
/// }
/// ```
#[cfg(feature = "derive")]
pub use bosun_derive::Sentence;

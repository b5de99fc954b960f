//! Built-in record shapes for common sentences.
//!
//! Talker sentences match any of the `GL`, `GN` and `GP` talker prefixes.
//! Sentences shorter than their shape leave trailing fields at zero.
//!
//! _Requires Cargo feature `derive`._

use chrono::{DateTime, Utc};

use crate::{
    Sentence,
    ais::{self, ArmorError},
    registry::Registry,
    schema::SchemaError,
};

/// Register every built-in shape under its sentence types.
pub(crate) fn register_builtin(registry: &Registry) -> Result<(), SchemaError> {
    registry.register::<Vdm>("AIVDM")?;
    registry.register::<Vdm>("AIVDO")?;

    for talker in ["GL", "GN", "GP"] {
        registry.register::<Bod>(format!("{talker}BOD"))?;
        registry.register::<Bwc>(format!("{talker}BWC"))?;
        registry.register::<Gga>(format!("{talker}GGA"))?;
        registry.register::<Gll>(format!("{talker}GLL"))?;
        registry.register::<Gns>(format!("{talker}GNS"))?;
        registry.register::<Gsa>(format!("{talker}GSA"))?;
        registry.register::<Gsv>(format!("{talker}GSV"))?;
        registry.register::<Hdt>(format!("{talker}HDT"))?;
        registry.register::<R00>(format!("{talker}R00"))?;
        registry.register::<Rma>(format!("{talker}RMA"))?;
        registry.register::<Rmb>(format!("{talker}RMB"))?;
        registry.register::<Rmc>(format!("{talker}RMC"))?;
        registry.register::<Stn>(format!("{talker}STN"))?;
        registry.register::<Ths>(format!("{talker}THS"))?;
        registry.register::<Trf>(format!("{talker}TRF"))?;
        registry.register::<Vbw>(format!("{talker}VBW"))?;
        registry.register::<Vtg>(format!("{talker}VTG"))?;
        registry.register::<Wpl>(format!("{talker}WPL"))?;
        registry.register::<Xte>(format!("{talker}XTE"))?;
        registry.register::<Zda>(format!("{talker}ZDA"))?;
    }

    registry.register::<Rme>("PGRME")?;
    registry.register::<Rmm>("PGRMM")?;
    registry.register::<Rmz>("PGRMZ")?;
    registry.register::<Lib>("PSLIB")?;

    Ok(())
}

/// Bearing, origin to destination.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bod {
    #[nmea(0, pattern = "^G[LNP]BOD$")]
    pub kind: String,
    /// Degrees true.
    #[nmea(1, number)]
    pub true_bearing: f64,
    /// Degrees magnetic.
    #[nmea(3, number)]
    pub magnetic_bearing: f64,
    #[nmea(5, string)]
    pub destination: String,
    #[nmea(6, string)]
    pub start: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Bearing and distance to waypoint, great circle.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bwc {
    #[nmea(0, pattern = "^G[LNP]BWC$")]
    pub kind: String,
    #[nmea(1, time)]
    pub timestamp: Option<DateTime<Utc>>,
    #[nmea(2, latlon)]
    pub latitude: f64,
    #[nmea(3, string)]
    pub north_south: String,
    #[nmea(4, latlon)]
    pub longitude: f64,
    #[nmea(5, string)]
    pub east_west: String,
    #[nmea(6, number)]
    pub true_bearing: f64,
    #[nmea(8, number)]
    pub magnetic_bearing: f64,
    #[nmea(10, number)]
    pub range: f64,
    #[nmea(11, string)]
    pub range_unit: String,
    #[nmea(12, string)]
    pub waypoint: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Global positioning system fix data.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gga {
    #[nmea(0, pattern = "^G[LNP]GGA$")]
    pub kind: String,
    #[nmea(1, time)]
    pub timestamp: Option<DateTime<Utc>>,
    #[nmea(2, latlon)]
    pub latitude: f64,
    #[nmea(3, string)]
    pub north_south: String,
    #[nmea(4, latlon)]
    pub longitude: f64,
    #[nmea(5, string)]
    pub east_west: String,
    /// Fix quality: 0 invalid, 1 GPS, 2 differential GPS.
    #[nmea(6, number)]
    pub quality: u8,
    /// Satellites in use.
    #[nmea(7, number)]
    pub satellites: u8,
    /// Horizontal dilution of precision.
    #[nmea(8, number)]
    pub hdop: f64,
    /// Altitude above mean sea level.
    #[nmea(9, number)]
    pub altitude: f64,
    #[nmea(10, string)]
    pub altitude_unit: String,
    /// Height of the geoid above the WGS84 ellipsoid.
    #[nmea(11, number)]
    pub separation: f64,
    #[nmea(12, string)]
    pub separation_unit: String,
    /// Seconds since the last differential correction.
    #[nmea(13, number)]
    pub age: f64,
    #[nmea(14, string)]
    pub reference_station: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Geographic position, latitude and longitude.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gll {
    #[nmea(0, pattern = "^G[LNP]GLL$")]
    pub kind: String,
    #[nmea(1, latlon)]
    pub latitude: f64,
    #[nmea(2, string)]
    pub north_south: String,
    #[nmea(3, latlon)]
    pub longitude: f64,
    #[nmea(4, string)]
    pub east_west: String,
    #[nmea(5, time)]
    pub timestamp: Option<DateTime<Utc>>,
    /// `A` when the data is valid.
    #[nmea(6, string)]
    pub status: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Fix data for single or combined satellite navigation systems.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gns {
    #[nmea(0, pattern = "^G[LNP]GNS$")]
    pub kind: String,
    #[nmea(1, time)]
    pub timestamp: Option<DateTime<Utc>>,
    #[nmea(2, latlon)]
    pub latitude: f64,
    #[nmea(3, string)]
    pub north_south: String,
    #[nmea(4, latlon)]
    pub longitude: f64,
    #[nmea(5, string)]
    pub east_west: String,
    /// One mode indicator character per constellation.
    #[nmea(6, string)]
    pub mode: String,
    #[nmea(7, number)]
    pub satellites: u8,
    #[nmea(8, number)]
    pub hdop: f64,
    #[nmea(9, number)]
    pub altitude: f64,
    #[nmea(10, number)]
    pub separation: f64,
    #[nmea(11, number)]
    pub age: f64,
    #[nmea(12, number)]
    pub reference_station: u16,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Dilution of precision and active satellites.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gsa {
    #[nmea(0, pattern = "^G[LNP]GSA$")]
    pub kind: String,
    /// `M` manual or `A` automatic selection of 2D or 3D fix.
    #[nmea(1, string)]
    pub mode: String,
    /// 1 no fix, 2 2D fix, 3 3D fix.
    #[nmea(2, number)]
    pub fix: u8,
    #[nmea(3, string)]
    pub sv0: String,
    #[nmea(4, string)]
    pub sv1: String,
    #[nmea(5, string)]
    pub sv2: String,
    #[nmea(6, string)]
    pub sv3: String,
    #[nmea(7, string)]
    pub sv4: String,
    #[nmea(8, string)]
    pub sv5: String,
    #[nmea(9, string)]
    pub sv6: String,
    #[nmea(10, string)]
    pub sv7: String,
    #[nmea(11, string)]
    pub sv8: String,
    #[nmea(12, string)]
    pub sv9: String,
    #[nmea(13, string)]
    pub sv10: String,
    #[nmea(14, string)]
    pub sv11: String,
    #[nmea(15, number)]
    pub pdop: f64,
    #[nmea(16, number)]
    pub hdop: f64,
    #[nmea(17, number)]
    pub vdop: f64,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Satellites in view, four per sentence.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gsv {
    #[nmea(0, pattern = "^G[LNP]GSV$")]
    pub kind: String,
    /// Number of sentences in this cycle.
    #[nmea(1, number)]
    pub messages: u8,
    #[nmea(2, number)]
    pub message_number: u8,
    #[nmea(3, number)]
    pub satellites_in_view: u8,

    #[nmea(4, number)]
    pub satellite0_prn: u16,
    #[nmea(5, number)]
    pub elevation0: i16,
    #[nmea(6, number)]
    pub azimuth0: u16,
    #[nmea(7, number)]
    pub snr0: u8,

    #[nmea(8, number)]
    pub satellite1_prn: u16,
    #[nmea(9, number)]
    pub elevation1: i16,
    #[nmea(10, number)]
    pub azimuth1: u16,
    #[nmea(11, number)]
    pub snr1: u8,

    #[nmea(12, number)]
    pub satellite2_prn: u16,
    #[nmea(13, number)]
    pub elevation2: i16,
    #[nmea(14, number)]
    pub azimuth2: u16,
    #[nmea(15, number)]
    pub snr2: u8,

    #[nmea(16, number)]
    pub satellite3_prn: u16,
    #[nmea(17, number)]
    pub elevation3: i16,
    #[nmea(18, number)]
    pub azimuth3: u16,
    #[nmea(19, number)]
    pub snr3: u8,

    #[nmea(checksum)]
    pub checksum: u8,
}

/// Heading, true.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hdt {
    #[nmea(0, pattern = "^G[LNP]HDT$")]
    pub kind: String,
    #[nmea(1, number)]
    pub heading: f64,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Waypoints in the active route.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct R00 {
    #[nmea(0, pattern = "^G[LNP]R00$")]
    pub kind: String,
    #[nmea(1, string)]
    pub wp0: String,
    #[nmea(2, string)]
    pub wp1: String,
    #[nmea(3, string)]
    pub wp2: String,
    #[nmea(4, string)]
    pub wp3: String,
    #[nmea(5, string)]
    pub wp4: String,
    #[nmea(6, string)]
    pub wp5: String,
    #[nmea(7, string)]
    pub wp6: String,
    #[nmea(8, string)]
    pub wp7: String,
    #[nmea(9, string)]
    pub wp8: String,
    #[nmea(10, string)]
    pub wp9: String,
    #[nmea(11, string)]
    pub wp10: String,
    #[nmea(12, string)]
    pub wp11: String,
    #[nmea(13, string)]
    pub wp12: String,
    #[nmea(14, string)]
    pub wp13: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Recommended minimum specific Loran-C data.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rma {
    #[nmea(0, pattern = "^G[LNP]RMA$")]
    pub kind: String,
    #[nmea(1, string)]
    pub status: String,
    #[nmea(2, latlon)]
    pub latitude: f64,
    #[nmea(3, string)]
    pub north_south: String,
    #[nmea(4, latlon)]
    pub longitude: f64,
    #[nmea(5, string)]
    pub east_west: String,
    /// Knots.
    #[nmea(8, number)]
    pub speed: f64,
    #[nmea(9, number)]
    pub course_over_ground: i32,
    #[nmea(10, number)]
    pub variation: f64,
    #[nmea(11, string)]
    pub variation_direction: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Recommended minimum navigation information.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rmb {
    #[nmea(0, pattern = "^G[LNP]RMB$")]
    pub kind: String,
    #[nmea(1, string)]
    pub status: String,
    /// Nautical miles.
    #[nmea(2, number)]
    pub cross_track_error: f64,
    /// Direction to steer, `L` or `R`.
    #[nmea(3, string)]
    pub correct_direction: String,
    #[nmea(4, string)]
    pub origin: String,
    #[nmea(5, string)]
    pub destination: String,
    #[nmea(6, latlon)]
    pub latitude: f64,
    #[nmea(7, string)]
    pub north_south: String,
    #[nmea(8, latlon)]
    pub longitude: f64,
    #[nmea(9, string)]
    pub east_west: String,
    #[nmea(10, number)]
    pub range_to_destination: f64,
    #[nmea(11, number)]
    pub bearing_to_destination: f64,
    #[nmea(12, number)]
    pub closing_velocity: f64,
    /// `A` when the arrival circle has been entered.
    #[nmea(13, string)]
    pub arrival_status: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Recommended minimum specific GPS/Transit data.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rmc {
    #[nmea(0, pattern = "^G[LNP]RMC$")]
    pub kind: String,
    #[nmea(1, time)]
    pub time: Option<DateTime<Utc>>,
    #[nmea(2, string)]
    pub status: String,
    #[nmea(3, latlon)]
    pub latitude: f64,
    #[nmea(4, string)]
    pub north_south: String,
    #[nmea(5, latlon)]
    pub longitude: f64,
    #[nmea(6, string)]
    pub east_west: String,
    /// Speed over ground, knots.
    #[nmea(7, number)]
    pub speed: f64,
    /// Track made good, degrees true.
    #[nmea(8, number)]
    pub track: f64,
    /// The year is the literal two-digit year of the sentence.
    #[nmea(9, date)]
    pub date: Option<DateTime<Utc>>,
    #[nmea(10, number)]
    pub magnetic_variation: f64,
    #[nmea(11, string)]
    pub variation_direction: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Multiple data ID.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stn {
    #[nmea(0, pattern = "^G[LNP]STN$")]
    pub kind: String,
    #[nmea(1, number)]
    pub talker: u8,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// True heading and status.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ths {
    #[nmea(0, pattern = "^G[LNP]THS$")]
    pub kind: String,
    #[nmea(1, number)]
    pub heading: f64,
    #[nmea(2, string)]
    pub status: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Transit fix data.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trf {
    #[nmea(0, pattern = "^G[LNP]TRF$")]
    pub kind: String,
    #[nmea(1, time)]
    pub time: Option<DateTime<Utc>>,
    #[nmea(2, date)]
    pub date: Option<DateTime<Utc>>,
    #[nmea(3, latlon)]
    pub latitude: f64,
    #[nmea(4, string)]
    pub north_south: String,
    #[nmea(5, latlon)]
    pub longitude: f64,
    #[nmea(6, string)]
    pub east_west: String,
    #[nmea(7, number)]
    pub elevation: f64,
    #[nmea(8, number)]
    pub iterations: f64,
    #[nmea(9, number)]
    pub doppler_intervals: f64,
    #[nmea(10, number)]
    pub update_distance: f64,
    #[nmea(11, string)]
    pub satellite: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Dual ground and water speed.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vbw {
    #[nmea(0, pattern = "^G[LNP]VBW$")]
    pub kind: String,
    #[nmea(1, number)]
    pub longitudinal_water_speed: f64,
    #[nmea(2, number)]
    pub transverse_water_speed: f64,
    #[nmea(3, string)]
    pub water_speed_status: String,
    #[nmea(4, number)]
    pub longitudinal_ground_speed: f64,
    #[nmea(5, number)]
    pub transverse_ground_speed: f64,
    #[nmea(6, string)]
    pub ground_speed_status: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Track made good and ground speed.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vtg {
    #[nmea(0, pattern = "^G[LNP]VTG$")]
    pub kind: String,
    #[nmea(1, number)]
    pub track_true: f64,
    #[nmea(3, number)]
    pub track_magnetic: f64,
    #[nmea(5, number)]
    pub speed_knots: f64,
    #[nmea(7, number)]
    pub speed_kph: f64,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Waypoint location.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Wpl {
    #[nmea(0, pattern = "^G[LNP]WPL$")]
    pub kind: String,
    #[nmea(1, latlon)]
    pub latitude: f64,
    #[nmea(2, string)]
    pub north_south: String,
    #[nmea(3, latlon)]
    pub longitude: f64,
    #[nmea(4, string)]
    pub east_west: String,
    #[nmea(5, string)]
    pub waypoint: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Measured cross-track error.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Xte {
    #[nmea(0, pattern = "^G[LNP]XTE$")]
    pub kind: String,
    #[nmea(1, string)]
    pub general_warning: String,
    #[nmea(2, string)]
    pub lock_flag: String,
    #[nmea(3, number)]
    pub cross_track_error: f64,
    #[nmea(4, string)]
    pub steer: String,
    #[nmea(5, string)]
    pub units: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Date and time, with local zone offset.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Zda {
    #[nmea(0, pattern = "^G[LNP]ZDA$")]
    pub kind: String,
    #[nmea(1, time)]
    pub time: Option<DateTime<Utc>>,
    #[nmea(2, number)]
    pub day: u8,
    #[nmea(3, number)]
    pub month: u8,
    /// Four-digit year.
    #[nmea(4, number)]
    pub year: u16,
    #[nmea(5, number)]
    pub zone_hours: i8,
    #[nmea(6, number)]
    pub zone_minutes: i8,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Garmin estimated position error, in metres.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rme {
    #[nmea(0, sentence = "PGRME")]
    pub kind: String,
    /// Horizontal.
    #[nmea(1, number)]
    pub hpe: f64,
    /// Vertical.
    #[nmea(3, number)]
    pub vpe: f64,
    /// Spherical.
    #[nmea(5, number)]
    pub osepe: f64,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Garmin map datum.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rmm {
    #[nmea(0, sentence = "PGRMM")]
    pub kind: String,
    #[nmea(1, string)]
    pub map_datum: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Garmin altitude.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rmz {
    #[nmea(0, sentence = "PGRMZ")]
    pub kind: String,
    /// Feet.
    #[nmea(1, number)]
    pub altitude: f64,
    /// 2 for a 2D fix, 3 for 3D.
    #[nmea(3, number)]
    pub fix_dimensions: i8,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// Starlink differential beacon receiver tuning.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lib {
    #[nmea(0, sentence = "PSLIB")]
    pub kind: String,
    /// Kilohertz.
    #[nmea(1, number)]
    pub frequency: f64,
    #[nmea(2, number)]
    pub bit_rate: f64,
    #[nmea(3, string)]
    pub request_type: String,
    #[nmea(checksum)]
    pub checksum: u8,
}

/// One fragment of an AIS message, received (`AIVDM`) or from own vessel
/// (`AIVDO`).
///
/// Fragments are not reassembled; messages spanning several sentences must
/// be joined by concatenating [`Vdm::payload`] in fragment order before
/// removing armor.
#[derive(Debug, Clone, Default, PartialEq, Sentence)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vdm {
    #[nmea(0, pattern = "^AIVD[MO]$")]
    pub kind: String,
    /// Total fragments in the message.
    #[nmea(1, number)]
    pub fragments: u8,
    /// One-based index of this fragment.
    #[nmea(2, number)]
    pub fragment_number: u8,
    /// Sequential identifier shared by the fragments of one message.
    #[nmea(3, string)]
    pub message_id: String,
    /// Radio channel, `A` or `B`.
    #[nmea(4, string)]
    pub channel: String,
    /// Armored payload.
    #[nmea(5, string)]
    pub payload: String,
    /// Fill bits appended to the final symbol of the payload.
    #[nmea(6, number)]
    pub fill_bits: u8,
    #[nmea(checksum)]
    pub checksum: u8,
}

impl Vdm {
    /// Remove the armor from this fragment's payload.
    pub fn symbols(&self) -> Result<Vec<u8>, ArmorError> {
        ais::dearmor(&self.payload)
    }

    /// Number of payload bits, excluding fill bits.
    pub fn bit_len(&self) -> usize {
        (self.payload.len() * 6).saturating_sub(self.fill_bits as usize)
    }
}

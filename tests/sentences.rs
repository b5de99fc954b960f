#![cfg(feature = "derive")]

use bosun::{
    Error, Registry,
    convert::{ConvertError, placeholder_date},
    sentences::*,
};
use chrono::{DateTime, NaiveDate, Utc};

fn time(h: u32, m: u32, s: u32, ms: u32) -> Option<DateTime<Utc>> {
    Some(placeholder_date().and_hms_milli_opt(h, m, s, ms).unwrap().and_utc())
}

fn date(y: i32, m: u32, d: u32) -> Option<DateTime<Utc>> {
    Some(NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap().and_utc())
}

fn decode<T: bosun::Sentence + Default>(sentence: &str) -> T {
    let mut record = T::default();
    bosun::decode(&mut record, sentence).unwrap();
    record
}

#[test]
fn bod() {
    let got: Bod = decode("$GPBOD,099.3,T,105.6,M,POINTB,*48");
    let want = Bod {
        kind: "GPBOD".into(),
        true_bearing: 99.3,
        magnetic_bearing: 105.6,
        destination: "POINTB".into(),
        start: "".into(),
        checksum: 0x48,
    };
    assert_eq!(got, want);

    let got: Bod = decode("$GPBOD,097.0,T,103.2,M,POINTB,POINTA*4A");
    let want = Bod {
        kind: "GPBOD".into(),
        true_bearing: 97.0,
        magnetic_bearing: 103.2,
        destination: "POINTB".into(),
        start: "POINTA".into(),
        checksum: 0x4a,
    };
    assert_eq!(got, want);
}

#[test]
fn bwc() {
    let got: Bwc = decode("$GPBWC,081837,,,,,,T,,M,,N,*13");
    let want = Bwc {
        kind: "GPBWC".into(),
        timestamp: time(8, 18, 37, 0),
        range_unit: "N".into(),
        checksum: 0x13,
        ..Default::default()
    };
    assert_eq!(got, want);

    let got: Bwc = decode("$GPBWC,225444,4917.24,N,12309.57,W,051.9,T,031.6,M,001.3,N,004*29");
    let want = Bwc {
        kind: "GPBWC".into(),
        timestamp: time(22, 54, 44, 0),
        latitude: 49.28733333333333,
        north_south: "N".into(),
        longitude: 123.1595,
        east_west: "W".into(),
        true_bearing: 51.9,
        magnetic_bearing: 31.6,
        range: 1.3,
        range_unit: "N".into(),
        waypoint: "004".into(),
        checksum: 0x29,
    };
    assert_eq!(got, want);
}

#[test]
fn gga() {
    let got: Gga = decode("$GPGGA,123456,3455.083,S,13836.285,E,1,2,3,4,M,5,M,,*4A");
    let want = Gga {
        kind: "GPGGA".into(),
        timestamp: time(12, 34, 56, 0),
        latitude: 34.918049999999994,
        north_south: "S".into(),
        longitude: 138.60475000000002,
        east_west: "E".into(),
        quality: 1,
        satellites: 2,
        hdop: 3.0,
        altitude: 4.0,
        altitude_unit: "M".into(),
        separation: 5.0,
        separation_unit: "M".into(),
        age: 0.0,
        reference_station: "".into(),
        checksum: 0x4a,
    };
    assert_eq!(got, want);

    let got: Gga =
        decode("$GPGGA,170834,4124.8963,N,08151.6838,W,1,05,1.5,280.2,M,-34.0,M,,*75");
    assert_eq!(got.latitude, 41.41493833333334);
    assert_eq!(got.longitude, 81.86139666666665);
    assert_eq!(got.satellites, 5);
    assert_eq!(got.hdop, 1.5);
    assert_eq!(got.separation, -34.0);
    assert_eq!(got.checksum, 0x75);
}

#[test]
fn gll() {
    let got: Gll = decode("$GPGLL,5300.97914,N,00259.98174,E,125926,A*28");
    let want = Gll {
        kind: "GPGLL".into(),
        latitude: 53.01631900000001,
        north_south: "N".into(),
        longitude: 2.9996956666666668,
        east_west: "E".into(),
        timestamp: time(12, 59, 26, 0),
        status: "A".into(),
        checksum: 0x28,
    };
    assert_eq!(got, want);

    // Trailing time and status missing.
    let got: Gll = decode("$GPGLL,3751.65,S,14507.36,E*77");
    let want = Gll {
        kind: "GPGLL".into(),
        latitude: 37.86083333333333,
        north_south: "S".into(),
        longitude: 145.12266666666667,
        east_west: "E".into(),
        checksum: 0x77,
        ..Default::default()
    };
    assert_eq!(got, want);

    // No checksum.
    let got: Gll = decode("$GPGLL,4916.45,N,12311.12,W,225444,A");
    assert_eq!(got.timestamp, time(22, 54, 44, 0));
    assert_eq!(got.checksum, 0);
}

#[test]
fn gns() {
    let got: Gns = decode("$GNGNS,014035.00,4332.69262,S,17235.48549,E,RR,13,0.9,25.63,11.24,,*70");
    let want = Gns {
        kind: "GNGNS".into(),
        timestamp: time(1, 40, 35, 0),
        latitude: 43.54487699999999,
        north_south: "S".into(),
        longitude: 172.59142483333332,
        east_west: "E".into(),
        mode: "RR".into(),
        satellites: 13,
        hdop: 0.9,
        altitude: 25.63,
        separation: 11.24,
        age: 0.0,
        reference_station: 0,
        checksum: 0x70,
    };
    assert_eq!(got, want);

    let got: Gns = decode("$GLGNS,014035.00,,,,,,5,,,,1.0,23*67");
    let want = Gns {
        kind: "GLGNS".into(),
        timestamp: time(1, 40, 35, 0),
        satellites: 5,
        age: 1.0,
        reference_station: 23,
        checksum: 0x67,
        ..Default::default()
    };
    assert_eq!(got, want);
}

#[test]
fn gsa() {
    let got: Gsa = decode("$GPGSA,A,3,,,,,,16,18,,22,24,,,3.6,2.1,2.2*3C");
    let want = Gsa {
        kind: "GPGSA".into(),
        mode: "A".into(),
        fix: 3,
        sv5: "16".into(),
        sv6: "18".into(),
        sv8: "22".into(),
        sv9: "24".into(),
        pdop: 3.6,
        hdop: 2.1,
        vdop: 2.2,
        checksum: 0x3c,
        ..Default::default()
    };
    assert_eq!(got, want);
}

#[test]
fn gsv() {
    let got: Gsv = decode("$GPGSV,1,1,13,02,02,213,,03,-3,000,,11,00,121,,14,13,172,05*62");
    let want = Gsv {
        kind: "GPGSV".into(),
        messages: 1,
        message_number: 1,
        satellites_in_view: 13,
        satellite0_prn: 2,
        elevation0: 2,
        azimuth0: 213,
        snr0: 0,
        satellite1_prn: 3,
        elevation1: -3,
        azimuth1: 0,
        snr1: 0,
        satellite2_prn: 11,
        elevation2: 0,
        azimuth2: 121,
        snr2: 0,
        satellite3_prn: 14,
        elevation3: 13,
        azimuth3: 172,
        snr3: 5,
        checksum: 0x62,
    };
    assert_eq!(got, want);

    // Final sentence of a cycle, with an empty satellite block.
    let got: Gsv = decode("$GPGSV,3,3,11,22,42,067,42,24,14,311,43,27,05,244,00,,,,*4D");
    assert_eq!(got.azimuth0, 67);
    assert_eq!(got.snr1, 43);
    assert_eq!(got.satellite3_prn, 0);
    assert_eq!(got.checksum, 0x4d);
}

#[test]
fn hdt_and_ths() {
    let got: Hdt = decode("$GPHDT,1,T*2A");
    assert_eq!(
        got,
        Hdt {
            kind: "GPHDT".into(),
            heading: 1.0,
            checksum: 0x2a,
        }
    );

    let got: Ths = decode("$GPTHS,1.2,A*34");
    assert_eq!(
        got,
        Ths {
            kind: "GPTHS".into(),
            heading: 1.2,
            status: "A".into(),
            checksum: 0x34,
        }
    );
}

#[test]
fn r00() {
    let got: R00 = decode("$GPR00,MINST,CHATN,CHAT1,CHATW,CHATM,CHATE,003,004,005,006,007,,,*05");
    let want = R00 {
        kind: "GPR00".into(),
        wp0: "MINST".into(),
        wp1: "CHATN".into(),
        wp2: "CHAT1".into(),
        wp3: "CHATW".into(),
        wp4: "CHATM".into(),
        wp5: "CHATE".into(),
        wp6: "003".into(),
        wp7: "004".into(),
        wp8: "005".into(),
        wp9: "006".into(),
        wp10: "007".into(),
        checksum: 0x05,
        ..Default::default()
    };
    assert_eq!(got, want);
}

#[test]
fn rma_and_rmb() {
    let got: Rma = decode("$GPRMA,A,1234.56,N,12345.67,W,,,12.3,123,12.3,W*6D");
    let want = Rma {
        kind: "GPRMA".into(),
        status: "A".into(),
        latitude: 12.575999999999999,
        north_south: "N".into(),
        longitude: 123.76116666666667,
        east_west: "W".into(),
        speed: 12.3,
        course_over_ground: 123,
        variation: 12.3,
        variation_direction: "W".into(),
        checksum: 0x6d,
    };
    assert_eq!(got, want);

    let got: Rmb = decode("$GPRMB,A,4.08,L,EGLL,EGLM,5130.02,N,00046.34,W,004.6,213.9,122.9,A*3D");
    let want = Rmb {
        kind: "GPRMB".into(),
        status: "A".into(),
        cross_track_error: 4.08,
        correct_direction: "L".into(),
        origin: "EGLL".into(),
        destination: "EGLM".into(),
        latitude: 51.50033333333334,
        north_south: "N".into(),
        longitude: 0.7723333333333334,
        east_west: "W".into(),
        range_to_destination: 4.6,
        bearing_to_destination: 213.9,
        closing_velocity: 122.9,
        arrival_status: "A".into(),
        checksum: 0x3d,
    };
    assert_eq!(got, want);
}

#[test]
fn rmc_keeps_literal_year() {
    let got: Rmc = decode("$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62");
    let want = Rmc {
        kind: "GPRMC".into(),
        time: time(8, 18, 36, 0),
        status: "A".into(),
        latitude: 37.86083333333333,
        north_south: "S".into(),
        longitude: 145.12266666666667,
        east_west: "E".into(),
        speed: 0.0,
        track: 360.0,
        date: date(98, 9, 13),
        magnetic_variation: 11.3,
        variation_direction: "E".into(),
        checksum: 0x62,
    };
    assert_eq!(got, want);
}

#[test]
fn trf_and_zda_fractional_seconds() {
    let got: Trf = decode("$GPTRF,053220.03,051197,4916.45,N,12311.12,W,1.2,3.4,5.6,7.8,SAT");
    let want = Trf {
        kind: "GPTRF".into(),
        time: time(5, 32, 20, 30),
        date: date(97, 11, 5),
        latitude: 49.27416666666666,
        north_south: "N".into(),
        longitude: 123.18533333333335,
        east_west: "W".into(),
        elevation: 1.2,
        iterations: 3.4,
        doppler_intervals: 5.6,
        update_distance: 7.8,
        satellite: "SAT".into(),
        checksum: 0,
    };
    assert_eq!(got, want);

    let got: Zda = decode("$GPZDA,173958.45,01,05,1970,10,30");
    let want = Zda {
        kind: "GPZDA".into(),
        time: time(17, 39, 58, 450),
        day: 1,
        month: 5,
        year: 1970,
        zone_hours: 10,
        zone_minutes: 30,
        checksum: 0,
    };
    assert_eq!(got, want);
}

#[test]
fn leap_second_is_rejected() {
    let mut zda = Zda::default();
    let err = bosun::decode(&mut zda, "$GPZDA,235960,01,05,1970,10,30").unwrap_err();

    assert_eq!(
        err,
        Error::Field {
            field: "time".into(),
            position: 1,
            source: ConvertError::LeapSecond("235960".into()),
        }
    );
    assert_eq!(zda.time, None);

    let got: Zda = decode("$GPZDA,235959.999,01,05,1970,10,30");
    assert_eq!(got.time, time(23, 59, 59, 999));
}

#[test]
fn stn_vbw_vtg() {
    let got: Stn = decode("$GPSTN,3");
    assert_eq!(got.kind, "GPSTN");
    assert_eq!(got.talker, 3);

    let got: Vbw = decode("$GPVBW,1.2,3.4,A,5.6,7.8,A");
    let want = Vbw {
        kind: "GPVBW".into(),
        longitudinal_water_speed: 1.2,
        transverse_water_speed: 3.4,
        water_speed_status: "A".into(),
        longitudinal_ground_speed: 5.6,
        transverse_ground_speed: 7.8,
        ground_speed_status: "A".into(),
        checksum: 0,
    };
    assert_eq!(got, want);

    let got: Vtg = decode("$GPVTG,78.9,T,,,1.23,N,4.56,K*1C");
    let want = Vtg {
        kind: "GPVTG".into(),
        track_true: 78.9,
        track_magnetic: 0.0,
        speed_knots: 1.23,
        speed_kph: 4.56,
        checksum: 0x1c,
    };
    assert_eq!(got, want);
}

#[test]
fn wpl_and_xte() {
    let got: Wpl = decode("$GPWPL,5128.62,N,00027.58,W,EGLL*59");
    let want = Wpl {
        kind: "GPWPL".into(),
        latitude: 51.477000000000004,
        north_south: "N".into(),
        longitude: 0.4596666666666666,
        east_west: "W".into(),
        waypoint: "EGLL".into(),
        checksum: 0x59,
    };
    assert_eq!(got, want);

    let got: Xte = decode("$GPXTE,A,A,4.07,L,N*6D");
    let want = Xte {
        kind: "GPXTE".into(),
        general_warning: "A".into(),
        lock_flag: "A".into(),
        cross_track_error: 4.07,
        steer: "L".into(),
        units: "N".into(),
        checksum: 0x6d,
    };
    assert_eq!(got, want);
}

#[test]
fn garmin_and_starlink() {
    let got: Rme = decode("$PGRME,15.0,M,45.0,M,25.0,M*1C");
    assert_eq!(
        got,
        Rme {
            kind: "PGRME".into(),
            hpe: 15.0,
            vpe: 45.0,
            osepe: 25.0,
            checksum: 0x1c,
        }
    );

    let got: Rmm = decode("$PGRMM,Astrln Geod '66*51");
    assert_eq!(got.map_datum, "Astrln Geod '66");

    let got: Rmz = decode("$PGRMZ,93,f,3*21");
    assert_eq!(
        got,
        Rmz {
            kind: "PGRMZ".into(),
            altitude: 93.0,
            fix_dimensions: 3,
            checksum: 0x21,
        }
    );

    let got: Lib = decode("$PSLIB,320.0,200*59");
    assert_eq!(
        got,
        Lib {
            kind: "PSLIB".into(),
            frequency: 320.0,
            bit_rate: 200.0,
            request_type: "".into(),
            checksum: 0x59,
        }
    );

    let got: Lib = decode("$PSLIB,,,J*22");
    assert_eq!(got.request_type, "J");
    assert_eq!(got.frequency, 0.0);
}

#[test]
fn vdm() {
    let got: Vdm = decode("!AIVDM,2,2,3,B,1@0000000000000,2*55");
    let want = Vdm {
        kind: "AIVDM".into(),
        fragments: 2,
        fragment_number: 2,
        message_id: "3".into(),
        channel: "B".into(),
        payload: "1@0000000000000".into(),
        fill_bits: 2,
        checksum: 0x55,
    };
    assert_eq!(got, want);
    assert_eq!(got.bit_len(), 88);
    assert_eq!(got.symbols().unwrap()[..2], [0x01u8, 0x10]);
}

#[test]
fn wrong_talker_is_rejected_but_recorded() {
    let mut hdt = Hdt::default();
    let err = bosun::decode(&mut hdt, "$XXHDT,1,T*3D").unwrap_err();

    assert_eq!(err, Error::SentenceTypeMismatch("XXHDT".into()));
    assert_eq!(hdt.kind, "XXHDT");
    assert_eq!(hdt.heading, 0.0);
}

#[test]
fn dynamic_matches_typed() {
    let registry = Registry::default();

    let sentences = [
        "$GPBOD,099.3,T,105.6,M,POINTB,*48",
        "$GPGGA,123519,4807.038,N,01131.000,W,1,2,3,4,M,5,M,,*41",
        "$GNGNS,014035.00,4332.69262,S,17235.48549,E,RR,13,0.9,25.63,11.24,,*70",
        "$PGRMZ,246,f,3*1B",
        "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C",
    ];

    let record = registry.parse(sentences[0]).unwrap();
    assert_eq!(record.downcast_ref::<Bod>(), Some(&decode::<Bod>(sentences[0])));

    let record = registry.parse(sentences[1]).unwrap();
    assert_eq!(record.downcast_ref::<Gga>(), Some(&decode::<Gga>(sentences[1])));

    let record = registry.parse(sentences[2]).unwrap();
    assert_eq!(record.downcast_ref::<Gns>(), Some(&decode::<Gns>(sentences[2])));

    let record = registry.parse(sentences[3]).unwrap();
    assert_eq!(record.downcast_ref::<Rmz>(), Some(&decode::<Rmz>(sentences[3])));

    let record = registry.parse(sentences[4]).unwrap();
    assert_eq!(record.downcast_ref::<Vdm>(), Some(&decode::<Vdm>(sentences[4])));
    assert!(record.downcast_ref::<Gga>().is_none());
}

#[test]
fn builtin_kinds() {
    let kinds = Registry::default().kinds();

    assert_eq!(kinds.len(), 2 + 3 * 20 + 4);
    assert!(kinds.iter().any(|k| k == "GLZDA"));
    assert!(kinds.iter().any(|k| k == "AIVDO"));
    assert!(kinds.iter().any(|k| k == "PSLIB"));
    assert!(!kinds.iter().any(|k| k == "GPVDM"));
}

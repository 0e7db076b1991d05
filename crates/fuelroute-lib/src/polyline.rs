//! Codec for the Google encoded-polyline format.
//!
//! Coordinates are stored as deltas from the previous point, scaled by
//! 10^5, zig-zag encoded, and packed into printable ASCII in 5-bit groups
//! with a continuation bit. Decoding reconstructs coordinates to 1e-5
//! degree precision; encoding is the exact inverse for inputs already
//! quantized to that precision.

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// Scale factor for 1e-5 degree precision.
const PRECISION_FACTOR: f64 = 1e5;

/// Offset applied to every encoded byte to keep it printable.
const CHAR_OFFSET: u8 = 63;

/// Continuation bit marking a non-final 5-bit group.
const CONTINUATION_BIT: i64 = 0x20;

/// Decode an encoded polyline into an ordered point sequence.
///
/// Fails with [`Error::MalformedPolyline`] when the stream terminates in
/// the middle of a coordinate or contains a byte outside the encoding
/// alphabet, and with [`Error::CoordinateOutOfRange`] when an accumulated
/// coordinate leaves WGS84 bounds.
pub fn decode(encoded: &str) -> Result<Vec<GeoPoint>> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat_e5: i64 = 0;
    let mut lon_e5: i64 = 0;

    while index < bytes.len() {
        lat_e5 += read_delta(bytes, &mut index)?;
        if index >= bytes.len() {
            return Err(Error::MalformedPolyline {
                offset: index,
                reason: "stream ended before longitude delta".to_string(),
            });
        }
        lon_e5 += read_delta(bytes, &mut index)?;

        let point = GeoPoint::new(
            lon_e5 as f64 / PRECISION_FACTOR,
            lat_e5 as f64 / PRECISION_FACTOR,
        );
        if !point.in_bounds() {
            return Err(Error::CoordinateOutOfRange {
                lon: point.lon,
                lat: point.lat,
            });
        }
        points.push(point);
    }

    Ok(points)
}

/// Encode a point sequence into the polyline format.
///
/// Coordinates are quantized to 1e-5 degrees; for input already at that
/// precision this is the exact inverse of [`decode`].
pub fn encode(points: &[GeoPoint]) -> String {
    let mut encoded = String::with_capacity(points.len() * 4);
    let mut prev_lat: i64 = 0;
    let mut prev_lon: i64 = 0;

    for point in points {
        let lat = quantize(point.lat);
        let lon = quantize(point.lon);
        write_delta(lat - prev_lat, &mut encoded);
        write_delta(lon - prev_lon, &mut encoded);
        prev_lat = lat;
        prev_lon = lon;
    }

    encoded
}

fn quantize(degrees: f64) -> i64 {
    (degrees * PRECISION_FACTOR).round() as i64
}

/// Read one zig-zag varint delta, advancing `index` past its bytes.
fn read_delta(bytes: &[u8], index: &mut usize) -> Result<i64> {
    let mut shift = 0u32;
    let mut accumulated: i64 = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(Error::MalformedPolyline {
                offset: *index,
                reason: "continuation bit set on final byte".to_string(),
            });
        };
        if !(CHAR_OFFSET..=126).contains(&byte) {
            return Err(Error::MalformedPolyline {
                offset: *index,
                reason: format!("byte 0x{byte:02x} outside encoding alphabet"),
            });
        }
        *index += 1;

        // A coordinate delta fits in far fewer groups; a run this long
        // can only come from corrupt input, and shifting further would
        // overflow the accumulator.
        if shift >= 60 {
            return Err(Error::MalformedPolyline {
                offset: *index,
                reason: "coordinate delta varint too long".to_string(),
            });
        }

        let group = i64::from(byte - CHAR_OFFSET);
        accumulated |= (group & 0x1f) << shift;
        shift += 5;

        if group < CONTINUATION_BIT {
            break;
        }
    }

    // Undo zig-zag: LSB carries the sign.
    if accumulated & 1 == 1 {
        Ok(!(accumulated >> 1))
    } else {
        Ok(accumulated >> 1)
    }
}

/// Append one delta as a zig-zag varint.
fn write_delta(delta: i64, out: &mut String) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };
    while value >= CONTINUATION_BIT {
        let group = (value & 0x1f) | CONTINUATION_BIT;
        out.push((group as u8 + CHAR_OFFSET) as char);
        value >>= 5;
    }
    out.push((value as u8 + CHAR_OFFSET) as char);
}

//! Encoded-polyline codec
//!
//! The format packs a coordinate sequence as deltas scaled by 1e5: each value
//! is left-shifted with its sign folded into the low bit, split into 5-bit
//! chunks (low chunk first), and every chunk is offset by 63 into printable
//! ASCII with bit 6 marking continuation.

use thiserror::Error;

use crate::models::Coordinate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolylineError {
    #[error("truncated value at byte {position}")]
    UnexpectedEnd { position: usize },

    #[error("invalid polyline byte {byte:#04x} at position {position}")]
    InvalidByte { byte: u8, position: usize },

    #[error("value overflow at byte {position}")]
    Overflow { position: usize },
}

/// Decodes an encoded polyline into its coordinate sequence
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut coords = Vec::new();
    let mut index = 0;
    let mut lat = 0i64;
    let mut lng = 0i64;

    while index < bytes.len() {
        let (d_lat, next) = decode_value(bytes, index)?;
        let (d_lng, after) = decode_value(bytes, next)?;
        lat += d_lat;
        lng += d_lng;
        index = after;
        coords.push(Coordinate::new(lat as f64 / 1e5, lng as f64 / 1e5));
    }
    Ok(coords)
}

/// Encodes a coordinate sequence into the compact polyline representation
#[must_use]
pub fn encode(coords: &[Coordinate]) -> String {
    let mut encoded = String::new();
    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;

    for coord in coords {
        let lat = (coord.latitude * 1e5).round() as i64;
        let lng = (coord.longitude * 1e5).round() as i64;
        encode_value(lat - prev_lat, &mut encoded);
        encode_value(lng - prev_lng, &mut encoded);
        prev_lat = lat;
        prev_lng = lng;
    }
    encoded
}

fn decode_value(bytes: &[u8], mut index: usize) -> Result<(i64, usize), PolylineError> {
    let mut accumulated: u64 = 0;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(index) else {
            return Err(PolylineError::UnexpectedEnd { position: index });
        };
        if byte < 63 {
            return Err(PolylineError::InvalidByte {
                byte,
                position: index,
            });
        }
        if shift >= 64 {
            return Err(PolylineError::Overflow { position: index });
        }
        let chunk = u64::from(byte - 63);
        accumulated |= (chunk & 0x1f) << shift;
        shift += 5;
        index += 1;
        if chunk < 0x20 {
            break;
        }
    }

    // Low bit carries the sign: odd means the value was bit-inverted.
    let magnitude = (accumulated >> 1) as i64;
    let value = if accumulated & 1 == 1 {
        !magnitude
    } else {
        magnitude
    };
    Ok((value, index))
}

fn encode_value(value: i64, out: &mut String) {
    let mut folded = if value < 0 {
        !(value << 1) as u64
    } else {
        (value << 1) as u64
    };
    while folded >= 0x20 {
        out.push((((folded & 0x1f) | 0x20) as u8 + 63) as char);
        folded >>= 5;
    }
    out.push((folded as u8 + 63) as char);
}

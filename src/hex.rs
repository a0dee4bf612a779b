//! Hex string and packed ARGB integer boundaries.

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Parse `RGB`, `RRGGBB` or `RRGGBBAA` (optional leading `#`) into
/// `[red, green, blue, alpha]`. Short and six-digit forms are fully opaque.
pub(crate) fn parse_hex(input: &str) -> Result<[u8; 4]> {
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::color_string(input));
    }

    let byte = |i: usize| -> Result<u8> {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::color_string(input))
    };

    match digits.len() {
        3 => {
            let mut out = [0, 0, 0, 255];
            for (slot, c) in out.iter_mut().zip(digits.chars()) {
                // to_digit cannot fail after the hex-digit check
                let nibble = c.to_digit(16).unwrap_or(0) as u8;
                *slot = nibble * 17;
            }
            Ok(out)
        }
        6 => Ok([byte(0)?, byte(2)?, byte(4)?, 255]),
        8 => Ok([byte(0)?, byte(2)?, byte(4)?, byte(6)?]),
        _ => Err(Error::color_string(input)),
    }
}

pub(crate) fn format_hex([red, green, blue, alpha]: [u8; 4]) -> String {
    if alpha == 255 {
        format!("#{red:02X}{green:02X}{blue:02X}")
    } else {
        format!("#{red:02X}{green:02X}{blue:02X}{alpha:02X}")
    }
}

pub(crate) fn pack_argb([red, green, blue, alpha]: [u8; 4]) -> u32 {
    (alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32
}

pub(crate) fn unpack_argb(argb: u32) -> [u8; 4] {
    [
        (argb >> 16 & 0xFF) as u8,
        (argb >> 8 & 0xFF) as u8,
        (argb & 0xFF) as u8,
        (argb >> 24 & 0xFF) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_form() {
        assert_eq!(parse_hex("#F00").unwrap(), [255, 0, 0, 255]);
        assert_eq!(parse_hex("abc").unwrap(), [0xAA, 0xBB, 0xCC, 255]);
    }

    #[test]
    fn test_parse_long_forms() {
        assert_eq!(parse_hex("#00ff7F").unwrap(), [0, 255, 127, 255]);
        assert_eq!(parse_hex("11223380").unwrap(), [0x11, 0x22, 0x33, 0x80]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "#", "#12", "#1234", "#12345", "#GGGGGG", "##FFF", "#FF FF FF"] {
            assert!(parse_hex(input).is_err(), "{input} should be rejected");
        }
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex([255, 136, 0, 255]), "#FF8800");
        assert_eq!(format_hex([1, 2, 3, 4]), "#01020304");
    }

    #[test]
    fn test_argb_packing() {
        assert_eq!(pack_argb([0x12, 0x34, 0x56, 0x78]), 0x7812_3456);
        assert_eq!(unpack_argb(0x7812_3456), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(pack_argb([255, 0, 0, 255]), 0xFFFF_0000);
    }
}

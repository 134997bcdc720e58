//! Weight display formatting

use core::fmt::Write;

use heapless::String;

use crate::traits::SensorError;

/// Unit label shown under the reading
pub const UNIT: &str = "g";

/// Format a reading with one decimal place
pub fn format_grams(reading: Result<f32, SensorError>) -> String<16> {
    let mut out = String::new();
    match reading {
        Ok(grams) => {
            let _ = write!(out, "{:.1}", grams);
        }
        Err(_) => {
            let _ = out.push_str("--.-");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_decimal() {
        assert_eq!(format_grams(Ok(0.0)).as_str(), "0.0");
        assert_eq!(format_grams(Ok(152.46)).as_str(), "152.5");
        assert_eq!(format_grams(Ok(-3.26)).as_str(), "-3.3");
    }

    #[test]
    fn test_sensor_error() {
        assert_eq!(format_grams(Err(SensorError::NotReady)).as_str(), "--.-");
    }
}

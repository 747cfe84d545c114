//! Unknown1 device definition and output types

use serde::Serialize;

/// Pulse slicer used to turn the received signal into bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modulation {
    FskPulsePcm,
}

impl Modulation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FskPulsePcm => "FSK_PULSE_PCM",
        }
    }
}

/// Static registration data for a decoder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceSpec {
    pub name: &'static str,
    pub modulation: Modulation,
    /// Nominal width of pulse [us]
    pub short_width: f64,
    /// Nominal width of bit period [us]
    pub long_width: f64,
    /// Maximum gap inside a row [us]
    pub gap_limit: f64,
    /// Gap that ends the whole transmission [us]
    pub reset_limit: f64,
    /// 0 = enabled, 1 = disabled by default, 3 = disabled and hidden
    pub disabled: u8,
    /// Export fields in output order
    pub fields: &'static [&'static str],
}

impl DeviceSpec {
    pub fn is_enabled(&self) -> bool {
        self.disabled == 0
    }
}

/// Output fields, in the order columnar exporters must write them
pub const OUTPUT_FIELDS: &[&str] = &[
    "model",
    "short_width",
    "long_width",
    "gap_limit",
    "reset_limit",
    "lengthBits",
    "hex_data",
    "binary_data",
    "rowCount",
];

/// The Unknown1 sensor: FSK PCM, 500 us bits, 0xAA x 8 preamble.
///
/// Gap limit 7000 keeps a packet in one row; reset limit 10000 still separates
/// back-to-back transmissions.
pub static UNKNOWN1: DeviceSpec = DeviceSpec {
    name: "Unknown1",
    modulation: Modulation::FskPulsePcm,
    short_width: 500.0,
    long_width: 500.0,
    gap_limit: 7000.0,
    reset_limit: 10000.0,
    disabled: 0,
    fields: OUTPUT_FIELDS,
};

/// Result of one decode invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DecodeOutcome {
    NotRecognized = 0,
    Decoded = 1,
}

impl From<DecodeOutcome> for i32 {
    fn from(outcome: DecodeOutcome) -> Self {
        outcome as i32
    }
}

/// Record emitted for a capture that carried the preamble.
///
/// Serialized field order matches [`OUTPUT_FIELDS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedRecord {
    pub model: String,
    pub short_width: f64,
    pub long_width: f64,
    pub gap_limit: f64,
    pub reset_limit: f64,
    #[serde(rename = "lengthBits")]
    pub length_bits: usize,
    pub hex_data: String,
    pub binary_data: String,
    #[serde(rename = "rowCount")]
    pub row_count: usize,
}

impl DecodedRecord {
    /// Field values as display strings, in [`OUTPUT_FIELDS`] order.
    ///
    /// Timings keep their fractional part (`500.0`) as in the JSON and CSV output.
    pub fn field_values(&self) -> [String; 9] {
        [
            self.model.clone(),
            format!("{:?}", self.short_width),
            format!("{:?}", self.long_width),
            format!("{:?}", self.gap_limit),
            format!("{:?}", self.reset_limit),
            self.length_bits.to_string(),
            self.hex_data.clone(),
            self.binary_data.clone(),
            self.row_count.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_values() {
        assert_eq!(i32::from(DecodeOutcome::NotRecognized), 0);
        assert_eq!(i32::from(DecodeOutcome::Decoded), 1);
    }

    #[test]
    fn test_unknown1_definition() {
        assert_eq!(UNKNOWN1.name, "Unknown1");
        assert_eq!(UNKNOWN1.modulation.name(), "FSK_PULSE_PCM");
        assert!(UNKNOWN1.is_enabled());
        assert_eq!(UNKNOWN1.fields.len(), 9);
    }

    #[test]
    fn test_json_keys_follow_field_order() {
        let record = DecodedRecord {
            model: "Unknown1".to_string(),
            short_width: 500.0,
            long_width: 500.0,
            gap_limit: 7000.0,
            reset_limit: 10000.0,
            length_bits: 8,
            hex_data: "AA".to_string(),
            binary_data: "10101010".to_string(),
            row_count: 1,
        };

        assert_eq!(record.field_values()[1], "500.0");
        assert_eq!(record.field_values()[4], "10000.0");

        let json = serde_json::to_string(&record).unwrap();
        let mut last = 0;
        for field in OUTPUT_FIELDS {
            let pos = json.find(&format!("\"{}\":", field)).unwrap();
            assert!(pos >= last, "{} out of order in {}", field, json);
            last = pos;
        }
    }
}

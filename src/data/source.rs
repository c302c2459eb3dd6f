//! Source kinds and their line encodings.
//!
//! Every input belongs to one of a closed set of kinds. The kind decides the
//! decoding rule, the fixed display name, and how a failure is isolated.

use std::fmt;

/// Origin of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// The raw/noisy ADC capture (hex encoded).
    RawInput,
    /// The clean reference capture (hex encoded).
    CleanInput,
    /// One file from the processed-output directory (decimal floats).
    Processed,
}

impl SourceKind {
    /// The two always-present reference inputs, in registry order.
    pub const FIXED: [SourceKind; 2] = [SourceKind::RawInput, SourceKind::CleanInput];

    pub fn encoding(self) -> Encoding {
        match self {
            SourceKind::RawInput | SourceKind::CleanInput => Encoding::Hex,
            SourceKind::Processed => Encoding::Decimal,
        }
    }

    /// Display name for fixed sources. Processed sources are named after their file.
    pub fn fixed_name(self) -> Option<&'static str> {
        match self {
            SourceKind::RawInput => Some("Raw Input (noisy)"),
            SourceKind::CleanInput => Some("Clean Input"),
            SourceKind::Processed => None,
        }
    }

    pub fn is_fixed(self) -> bool {
        self != SourceKind::Processed
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceKind::RawInput => "raw input",
            SourceKind::CleanInput => "clean input",
            SourceKind::Processed => "processed output",
        })
    }
}

/// Line encoding of a text source: one number per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Non-negative base-16 integer of any length, case-insensitive, no `0x` prefix.
    Hex,
    /// Decimal floating point, including `nan` and `inf`.
    Decimal,
}

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFault {
    /// Not a number in this encoding.
    Malformed,
    /// A valid hex integer too large to represent as `f64`.
    OutOfRange,
}

/// First rejected line of a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadLine {
    /// 1-based.
    pub line_no: usize,
    pub line: String,
    pub fault: LineFault,
}

impl Encoding {
    /// Decode one already-trimmed, non-empty line.
    pub fn decode(self, line: &str) -> Result<f64, LineFault> {
        match self {
            Encoding::Hex => decode_hex(line),
            Encoding::Decimal => line.parse::<f64>().map_err(|_| LineFault::Malformed),
        }
    }

    /// Decode a whole text body. Blank lines are ignored; the first bad line
    /// aborts the source.
    pub fn decode_all(self, text: &str) -> Result<Vec<f64>, BadLine> {
        let mut values = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            match self.decode(line) {
                Ok(v) => values.push(v),
                Err(fault) => {
                    return Err(BadLine {
                        line_no: i + 1,
                        line: line.to_string(),
                        fault,
                    })
                }
            }
        }
        Ok(values)
    }
}

fn decode_hex(line: &str) -> Result<f64, LineFault> {
    // from_str_radix tolerates a leading '+', the format does not
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(LineFault::Malformed);
    }
    if let Ok(v) = u64::from_str_radix(line, 16) {
        return Ok(v as f64);
    }
    // wider than 64 bits: accumulate in f64, exact up to the final rounding
    let v = line
        .bytes()
        .filter_map(|b| (b as char).to_digit(16))
        .fold(0.0f64, |acc, d| acc * 16.0 + f64::from(d));
    if v.is_finite() {
        Ok(v)
    } else {
        Err(LineFault::OutOfRange)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Hex => "hexadecimal integer",
            Encoding::Decimal => "decimal float",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_accepts_mixed_case() {
        assert_eq!(Encoding::Hex.decode("7D0"), Ok(2000.0));
        assert_eq!(Encoding::Hex.decode("7d0"), Ok(2000.0));
        assert_eq!(Encoding::Hex.decode("FFF"), Ok(4095.0));
    }

    #[test]
    fn hex_rejects_prefix_and_sign() {
        for line in ["0x800", "+800", "-1", "12.5"] {
            assert_eq!(Encoding::Hex.decode(line), Err(LineFault::Malformed), "{line}");
        }
    }

    #[test]
    fn hex_wider_than_u64_still_decodes() {
        assert_eq!(Encoding::Hex.decode("10000000000000000"), Ok(18_446_744_073_709_551_616.0));
        assert_eq!(
            Encoding::Hex.decode("FFFFFFFFFFFFFFFF"),
            Ok(u64::MAX as f64)
        );
        let huge = "F".repeat(300);
        assert_eq!(Encoding::Hex.decode(&huge), Err(LineFault::OutOfRange));
    }

    #[test]
    fn decimal_keeps_non_finite_values() {
        assert_eq!(Encoding::Decimal.decode("2040.5"), Ok(2040.5));
        assert_eq!(Encoding::Decimal.decode("-1e3"), Ok(-1000.0));
        assert!(Encoding::Decimal.decode("nan").is_ok_and(f64::is_nan));
        assert_eq!(Encoding::Decimal.decode("inf"), Ok(f64::INFINITY));
        assert_eq!(Encoding::Decimal.decode("-inf"), Ok(f64::NEG_INFINITY));
        assert_eq!(Encoding::Decimal.decode("abc"), Err(LineFault::Malformed));
    }

    #[test]
    fn decode_all_skips_blank_lines_and_reports_first_failure() {
        assert_eq!(
            Encoding::Hex.decode_all("800\n\n  7D0 \n"),
            Ok(vec![2048.0, 2000.0])
        );
        assert_eq!(
            Encoding::Decimal.decode_all("1.0\n2.0\nbad\n3.0\n"),
            Err(BadLine {
                line_no: 3,
                line: "bad".to_string(),
                fault: LineFault::Malformed,
            })
        );
        let values = Encoding::Decimal.decode_all("1.0\nnan\n2.0\n").unwrap();
        assert_eq!(values.len(), 3);
        assert!(values[1].is_nan());
    }
}

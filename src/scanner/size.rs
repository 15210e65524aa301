use crate::error::ConfigError;

const KIB: f64 = 1024.0;

/// Units stepped through in human-readable mode. The byte unit is padded so
/// that columns line up with the three-letter binary units.
const UNITS: &[&str] = &["B  ", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB"];
const OVERFLOW_UNIT: &str = "YiB";

/// Render a byte count for the report.
///
/// Without `human_readable` the value is always expressed in kibibytes.
/// Otherwise it is scaled by 1024 until its magnitude drops below 1024,
/// ending at `YiB` for values that never do.
pub fn format_size(bytes: f64, human_readable: bool) -> String {
    if human_readable {
        human_size(bytes)
    } else {
        format!("{:.2} KiB", bytes / KIB)
    }
}

fn human_size(mut bytes: f64) -> String {
    for unit in UNITS {
        if bytes.abs() < KIB {
            return format!("{:.2} {}", bytes, unit);
        }
        bytes /= KIB;
    }
    format!("{:.2} {}", bytes, OVERFLOW_UNIT)
}

/// Parse a threshold such as `10M` or `0K` into bytes.
///
/// The input is an unsigned integer followed by exactly one unit letter out of
/// `B`, `K`, `M`, `G`, `T`, `P`, each a power of 1024.
pub fn parse_threshold(spec: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidThreshold {
        spec: spec.to_string(),
        reason,
    };

    let unit = spec
        .chars()
        .last()
        .ok_or_else(|| invalid("empty threshold".to_string()))?;
    let number = &spec[..spec.len() - unit.len_utf8()];

    let exponent = match unit {
        'B' => 0,
        'K' => 1,
        'M' => 2,
        'G' => 3,
        'T' => 4,
        'P' => 5,
        other => return Err(invalid(format!("unknown unit '{}'", other))),
    };

    let value: u64 = number.parse().map_err(|e| invalid(format!("{}", e)))?;

    value
        .checked_mul(1024u64.pow(exponent))
        .ok_or_else(|| invalid("threshold too large".to_string()))
}

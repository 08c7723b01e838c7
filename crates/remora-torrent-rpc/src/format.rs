//! Human-readable byte and rate formatting.

/// Unit ladder escalating in fixed powers of 1024.
const UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

/// Denomination of a raw daemon quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    /// Value is already a byte count.
    Bytes,
    /// Value is a bit count and divides by eight first.
    #[cfg_attr(not(test), allow(dead_code))]
    Bits,
}

/// Format a non-negative quantity as `"<value> <unit>"`.
///
/// Values under 1024 bytes print as a bare integer; larger values print with
/// two decimals and the largest power-of-1024 unit not exceeding the value,
/// clamped at `PiB`.
pub(crate) fn format_size(value: u64, unit: Unit) -> String {
    let bytes = match unit {
        Unit::Bytes => value,
        Unit::Bits => value / 8,
    };
    if bytes == 0 {
        return "0 B".to_string();
    }
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut scaled = to_f64(bytes);
    let mut index = 0;
    while scaled >= 1024.0 && index < UNITS.len() - 1 {
        scaled /= 1024.0;
        index += 1;
    }
    format!("{scaled:.2} {}", UNITS[index])
}

/// Format a rate in bytes per second with a `/s` suffix.
pub(crate) fn format_rate(bytes_per_second: u64) -> String {
    format!("{}/s", format_size(bytes_per_second, Unit::Bytes))
}

pub(crate) const fn to_f64(value: u64) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "u64 to f64 conversion is required for user-facing display values"
    )]
    {
        value as f64
    }
}

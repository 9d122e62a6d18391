//! Display formatting helpers: severity colors, labels, numbers, dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{IocType, SeverityLevel};

/// Chart/legend color for a severity level.
#[must_use]
pub fn severity_color(severity: SeverityLevel) -> &'static str {
    match severity {
        SeverityLevel::Critical => "#DC2626",
        SeverityLevel::High => "#F97316",
        SeverityLevel::Medium => "#FBBF24",
        SeverityLevel::Low => "#10B981",
        SeverityLevel::Info => "#06B6D4",
    }
}

/// CSS class for a severity badge.
#[must_use]
pub fn severity_badge_class(severity: SeverityLevel) -> &'static str {
    match severity {
        SeverityLevel::Critical => "badge-critical",
        SeverityLevel::High => "badge-high",
        SeverityLevel::Medium => "badge-medium",
        SeverityLevel::Low => "badge-low",
        SeverityLevel::Info => "badge-info",
    }
}

/// Human-readable IOC type name.
#[must_use]
pub fn ioc_type_label(kind: IocType) -> &'static str {
    match kind {
        IocType::Ipv4 => "IPv4",
        IocType::Domain => "Domain",
        IocType::Url => "URL",
        IocType::Md5 => "MD5 Hash",
        IocType::Sha256 => "SHA256 Hash",
        IocType::Email => "Email",
        IocType::Hostname => "Hostname",
        IocType::Yara => "YARA Rule",
        IocType::Cve => "CVE",
    }
}

/// Label for a lowercase wire value (report maps key by string).
/// Unknown keys fall back to uppercasing the raw value.
#[must_use]
pub fn ioc_type_label_for(raw: &str) -> String {
    IocType::from_wire(raw)
        .map(|kind| ioc_type_label(kind).to_owned())
        .unwrap_or_else(|| raw.to_uppercase())
}

/// Abbreviate large counts: `1_500_000` → `"1.5M"`, `4_210` → `"4.2K"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_number(num: i64) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Relative age like `"2h ago"`, given both instants in epoch millis.
/// A `then` in the future clamps to `"0s ago"`.
#[must_use]
pub fn format_relative_time(now_ms: i64, then_ms: i64) -> String {
    let seconds = (now_ms - then_ms).max(0) / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if minutes > 0 {
        format!("{minutes}m ago")
    } else {
        format!("{seconds}s ago")
    }
}

/// Relative age of an ISO 8601 timestamp against the browser clock,
/// for the IOC table's Last Seen column. Falls back to the absolute
/// date server-side or when the timestamp does not parse.
#[must_use]
pub fn format_last_seen(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let then = js_sys::Date::parse(iso);
        if then.is_finite() {
            #[allow(clippy::cast_possible_truncation)]
            return format_relative_time(js_sys::Date::now() as i64, then as i64);
        }
    }
    format_date(iso)
}

/// Render an ISO 8601 timestamp as `"YYYY-MM-DD HH:MM"`.
/// Malformed input is returned unchanged rather than dropped.
#[must_use]
pub fn format_date(iso: &str) -> String {
    let Some((date, time)) = iso.split_once('T') else {
        return iso.to_owned();
    };
    // `get` rejects both short and non-char-boundary slices, so garbage
    // after the `T` can never panic the renderer.
    let Some(hhmm) = time.get(..5) else {
        return iso.to_owned();
    };
    if date.len() != 10 {
        return iso.to_owned();
    }
    format!("{date} {hhmm}")
}

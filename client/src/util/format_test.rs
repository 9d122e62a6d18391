use super::*;

#[test]
fn severity_colors_match_palette() {
    assert_eq!(severity_color(SeverityLevel::Critical), "#DC2626");
    assert_eq!(severity_color(SeverityLevel::Info), "#06B6D4");
}

#[test]
fn badge_classes_follow_severity() {
    for severity in SeverityLevel::ALL {
        assert_eq!(severity_badge_class(severity), format!("badge-{}", severity.as_str()));
    }
}

#[test]
fn type_labels_are_human_readable() {
    assert_eq!(ioc_type_label(IocType::Ipv4), "IPv4");
    assert_eq!(ioc_type_label(IocType::Sha256), "SHA256 Hash");
    assert_eq!(ioc_type_label(IocType::Yara), "YARA Rule");
}

#[test]
fn type_label_for_wire_value() {
    assert_eq!(ioc_type_label_for("domain"), "Domain");
    assert_eq!(ioc_type_label_for("md5"), "MD5 Hash");
}

#[test]
fn type_label_for_unknown_uppercases() {
    assert_eq!(ioc_type_label_for("ja3"), "JA3");
}

#[test]
fn format_number_abbreviates() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1_000), "1.0K");
    assert_eq!(format_number(4_210), "4.2K");
    assert_eq!(format_number(1_500_000), "1.5M");
}

#[test]
fn relative_time_picks_largest_unit() {
    let now = 1_700_000_000_000;
    assert_eq!(format_relative_time(now, now - 9 * 1000), "9s ago");
    assert_eq!(format_relative_time(now, now - 3 * 60 * 1000), "3m ago");
    assert_eq!(format_relative_time(now, now - 5 * 3_600 * 1000), "5h ago");
    assert_eq!(format_relative_time(now, now - 2 * 86_400 * 1000), "2d ago");
}

#[test]
fn relative_time_clamps_future_timestamps() {
    assert_eq!(format_relative_time(1_000, 5_000), "0s ago");
}

// Without a browser clock the column degrades to the absolute date.
#[test]
fn last_seen_falls_back_to_absolute_date() {
    assert_eq!(format_last_seen("2026-08-20T22:03:11Z"), "2026-08-20 22:03");
    assert_eq!(format_last_seen("garbage"), "garbage");
}

#[test]
fn format_date_renders_minute_precision() {
    assert_eq!(format_date("2026-08-01T09:15:00Z"), "2026-08-01 09:15");
}

#[test]
fn format_date_passes_through_malformed_input() {
    assert_eq!(format_date("not-a-date"), "not-a-date");
    assert_eq!(format_date(""), "");
}

#[test]
fn format_date_passes_through_multibyte_time() {
    assert_eq!(format_date("2026-08-01Tあああ"), "2026-08-01Tあああ");
    assert_eq!(format_date("2026-08-01Tああ"), "2026-08-01Tああ");
}

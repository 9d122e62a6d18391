use super::*;
use crate::net::types::{IocType, SeverityLevel};

fn sample_ioc(value: &str, source: &str) -> Ioc {
    Ioc {
        id: "ioc-1".to_owned(),
        kind: IocType::Domain,
        value: value.to_owned(),
        severity: SeverityLevel::High,
        confidence: 80,
        source: source.to_owned(),
        observed_count: 7,
        first_seen: "2026-08-01T09:15:00Z".to_owned(),
        last_seen: "2026-08-20T22:03:11Z".to_owned(),
        tags: vec![],
        description: None,
    }
}

#[test]
fn csv_escape_passes_plain_fields() {
    assert_eq!(csv_escape("evil.example"), "evil.example");
}

#[test]
fn csv_escape_quotes_delimiters_and_doubles_quotes() {
    assert_eq!(csv_escape("a,b"), "\"a,b\"");
    assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(csv_escape("line\nbreak"), "\"line\nbreak\"");
    assert_eq!(csv_escape("bare\rreturn"), "\"bare\rreturn\"");
}

#[test]
fn csv_output_matches_input_rows() {
    let iocs = vec![sample_ioc("evil.example", "abuse.ch"), sample_ioc("bad,corp", "feed, with comma")];
    let csv = iocs_to_csv(&iocs);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,type,value,severity,confidence,source,observedCount,firstSeen,lastSeen");
    assert_eq!(
        lines[1],
        "ioc-1,domain,evil.example,high,80,abuse.ch,7,2026-08-01T09:15:00Z,2026-08-20T22:03:11Z"
    );
    assert!(lines[2].contains("\"bad,corp\""));
    assert!(lines[2].contains("\"feed, with comma\""));
}

#[test]
fn csv_of_empty_slice_is_header_only() {
    assert_eq!(iocs_to_csv(&[]).lines().count(), 1);
}

#[test]
fn json_export_round_trips() {
    let iocs = vec![sample_ioc("evil.example", "abuse.ch")];
    let json = to_json_pretty(&iocs).expect("serializable");
    let back: Vec<Ioc> = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(back, iocs);
}

use super::*;

fn sample_ioc_json() -> &'static str {
    r#"{
        "id": "ioc-9f2",
        "type": "ipv4",
        "value": "203.0.113.7",
        "severity": "critical",
        "confidence": 92,
        "source": "abuse.ch",
        "observedCount": 148,
        "firstSeen": "2026-08-01T09:15:00Z",
        "lastSeen": "2026-08-20T22:03:11Z",
        "tags": ["botnet", "c2"],
        "description": "Known C2 endpoint"
    }"#
}

#[test]
fn ioc_deserializes_camel_case_payload() {
    let ioc: Ioc = serde_json::from_str(sample_ioc_json()).expect("valid IOC payload");
    assert_eq!(ioc.kind, IocType::Ipv4);
    assert_eq!(ioc.severity, SeverityLevel::Critical);
    assert_eq!(ioc.observed_count, 148);
    assert_eq!(ioc.first_seen, "2026-08-01T09:15:00Z");
    assert_eq!(ioc.tags, vec!["botnet", "c2"]);
}

#[test]
fn ioc_tolerates_missing_tags_and_description() {
    let json = r#"{
        "id": "ioc-1",
        "type": "sha256",
        "value": "aa",
        "severity": "low",
        "confidence": 10,
        "source": "internal",
        "observedCount": 1,
        "firstSeen": "2026-01-01T00:00:00Z",
        "lastSeen": "2026-01-02T00:00:00Z"
    }"#;
    let ioc: Ioc = serde_json::from_str(json).expect("optional fields default");
    assert!(ioc.tags.is_empty());
    assert!(ioc.description.is_none());
}

#[test]
fn user_envelope_with_user() {
    let json = r#"{"user":{"id":"u1","firstName":"Dana","lastName":"Reyes","role":"analyst","username":"dreyes","image":null}}"#;
    let resp: CurrentUserResponse = serde_json::from_str(json).expect("valid envelope");
    let user = resp.user.expect("user present");
    assert_eq!(user.first_name, "Dana");
    assert_eq!(user.role, "analyst");
    assert!(user.image.is_none());
}

#[test]
fn user_envelope_empty_object_yields_none() {
    let resp: CurrentUserResponse = serde_json::from_str("{}").expect("empty envelope");
    assert!(resp.user.is_none());
}

#[test]
fn severity_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&SeverityLevel::High).unwrap(), "\"high\"");
    assert_eq!(SeverityLevel::High.as_str(), "high");
}

#[test]
fn ioc_type_round_trips_wire_values() {
    for kind in IocType::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
        let back: IocType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn from_wire_parses_known_values_and_rejects_unknown() {
    assert_eq!(IocType::from_wire("cve"), Some(IocType::Cve));
    assert_eq!(IocType::from_wire("ja3"), None);
    assert_eq!(SeverityLevel::from_wire("medium"), Some(SeverityLevel::Medium));
    assert_eq!(SeverityLevel::from_wire(""), None);
}

#[test]
fn report_summary_defaults_missing_sections() {
    let json = r#"{"generatedAt":"2026-08-22T00:00:00Z","totalIocs":4210,
        "severity":{"critical":12,"high":80,"medium":300,"low":1000,"info":2818},
        "types":{"ipv4":2000,"domain":1500},
        "sources":{"abuse.ch":3000,"internal":1210}}"#;
    let report: ReportSummary = serde_json::from_str(json).expect("valid report");
    assert_eq!(report.total_iocs, 4210);
    assert_eq!(report.severity.total(), 4210);
    assert!(report.top_threats.is_empty());
    assert_eq!(report.types.get("ipv4"), Some(&2000));
}

#[test]
fn severity_counts_entries_ordered_most_severe_first() {
    let counts = SeverityCounts { critical: 1, high: 2, medium: 3, low: 4, info: 5 };
    let entries = counts.entries();
    assert_eq!(entries[0], (SeverityLevel::Critical, 1));
    assert_eq!(entries[4], (SeverityLevel::Info, 5));
}

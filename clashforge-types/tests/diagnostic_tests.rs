use clashforge_types::{Diagnostic, Severity, Subject};

#[test]
fn error_constructor() {
    let d = Diagnostic::error(Subject::Catalog, "catalog is empty");
    assert!(d.is_error());
    assert_eq!(d.severity, Severity::Error);
}

#[test]
fn warning_constructor() {
    let d = Diagnostic::warning(Subject::Group("Proxy".to_string()), "unknown member");
    assert!(!d.is_error());
}

#[test]
fn display_names_the_subject() {
    let d = Diagnostic::warning(
        Subject::Rule("DOMAIN,a.com,Nowhere".to_string()),
        "targets unknown node or group `Nowhere`",
    );
    let text = d.to_string();
    assert!(text.starts_with("warning:"), "got: {text}");
    assert!(text.contains("DOMAIN,a.com,Nowhere"), "got: {text}");
}

#[test]
fn subject_display_forms() {
    assert_eq!(Subject::Catalog.to_string(), "node catalog");
    assert_eq!(Subject::Group("G".to_string()).to_string(), "group `G`");
    assert_eq!(Subject::Rules.to_string(), "rule sequence");
}

#[test]
fn serde_roundtrip() {
    let d = Diagnostic::error(Subject::Group("Youtube".to_string()), "group has no members");
    let json = serde_json::to_string(&d).unwrap();
    let back: Diagnostic = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
}

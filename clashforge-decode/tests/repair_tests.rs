use clashforge_decode::{decode_records, repair_indentation, DecodeError};
use pretty_assertions::assert_eq;

// The classic paste artifact: child fields indented deeper than the
// list-item marker implies.
const DAMAGED: &str = "\
- name: \"SS-01\"
      type: ss
      server: \"1.2.3.4\"
      port: 8888
      cipher: \"aes-128-gcm\"
      password: \"pw\"
";

const CLEAN: &str = "\
- name: \"SS-01\"
  type: ss
  server: \"1.2.3.4\"
  port: 8888
  cipher: \"aes-128-gcm\"
  password: \"pw\"
";

#[test]
fn repairs_over_indented_children() {
    let repaired = repair_indentation(DAMAGED).unwrap();
    assert_eq!(repaired.trim_end(), CLEAN.trim_end());
}

#[test]
fn damaged_input_decodes_via_repair() {
    let nodes = decode_records(DAMAGED).unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].name, "SS-01");
    assert_eq!(nodes[0].port, 8888);
}

#[test]
fn repair_resets_per_list_item() {
    let damaged = "\
- name: a
      type: ss
      server: s1
      port: 1
      cipher: c
      password: p
- name: b
      type: ss
      server: s2
      port: 2
      cipher: c
      password: p
";
    let nodes = decode_records(damaged).unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[1].name, "b");
}

#[test]
fn clean_input_needs_no_repair() {
    assert_eq!(repair_indentation(CLEAN), None);
}

#[test]
fn comments_and_blanks_pass_through() {
    let damaged = "\
# heading

- name: a
      type: ss
      # trailing comment
      server: s
      port: 1
      cipher: c
      password: p
";
    let repaired = repair_indentation(damaged).unwrap();
    assert!(repaired.contains("# heading"));
    assert!(decode_records(damaged).is_ok());
}

#[test]
fn unrepairable_input_surfaces_original_error() {
    // Broken in a way no indent shift fixes.
    let text = "- name: [unclosed";
    let err = decode_records(text).unwrap_err();
    assert!(matches!(err, DecodeError::Yaml(_)));
}

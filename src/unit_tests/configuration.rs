use super::*;

fn disp(s: &str) -> Vec<i16> {
    s.chars()
        .map(|c| c.to_digit(10).unwrap() as i16)
        .collect()
}

#[test]
fn round_trips_through_display_form() {
    for s in ["1221", "120201", "1002332", "12233", "0000", "10220"] {
        let seq = disp(s);
        let config = Configuration::from_display(&seq).unwrap();
        assert_eq!(config.as_tuple(), seq, "round-trip failed for {s}");
    }
}

#[test]
fn link_closes_inner_paired_subpath() {
    // spec.md scenario 5: "1221" + link(2,3) -> "1100"
    let mut config = Configuration::from_display(&disp("1221")).unwrap();
    config.link(2, 3);
    assert_eq!(config.as_tuple(), disp("1100"));
}

#[test]
fn link_splits_two_fresh_subpaths() {
    // spec.md scenario 6: "0000" + link(0,1) + link(2,3) -> "1122"
    let mut config = Configuration::from_display(&disp("0000")).unwrap();
    config.link(0, 1);
    config.link(2, 3);
    assert_eq!(config.as_tuple(), disp("1122"));
}

#[test]
fn would_close_detects_cycle_forming_link() {
    // spec.md scenario 7: "1221" -> would_close(0,3) is true. Column 1 and
    // column 2 are also direct partners (the inner subpath), so closing
    // that pair is equally a cycle; only pairs spanning two different
    // subpaths are safe to link.
    let config = Configuration::from_display(&disp("1221")).unwrap();
    assert!(config.would_close(0, 3));
    assert!(config.would_close(1, 2));
    assert!(!config.would_close(0, 1));
    assert!(!config.would_close(0, 2));
    assert!(!config.would_close(1, 3));
    assert!(!config.would_close(2, 3));
}

#[test]
fn link_spawns_unpaired_endpoint() {
    let mut config = Configuration::from_display(&disp("000")).unwrap();
    config.link(1, 1);
    assert_eq!(config.as_tuple(), disp("010"));
}

#[test]
fn link_extends_paired_subpath() {
    let mut config = Configuration::from_display(&disp("10220")).unwrap();
    config.link(0, 1);
    config.link(3, 4);
    assert_eq!(config.as_tuple(), disp("01202"));
}

#[test]
fn link_merges_two_paired_subpaths() {
    // "1212" pairs columns (0,2) and (1,3) — two crossing subpaths, neither
    // pair already partnered with the other. Linking the inner ends (1,2)
    // merges them into one subpath spanning the outer columns (0,3).
    let mut config = Configuration::from_display(&disp("1212")).unwrap();
    config.link(1, 2);
    assert_eq!(config.as_tuple(), disp("1001"));
}

#[test]
fn link_merges_unpaired_endpoint_into_paired_subpath() {
    // Column 0 is an unpaired (global) endpoint; linking it to one end of
    // the paired subpath at columns 1,2 extends the global thread so that
    // its floating end moves to column 2.
    let mut config = Configuration::from_display(&disp("1220")).unwrap();
    config.link(0, 1);
    assert_eq!(config.as_tuple(), disp("0010"));
}

#[test]
fn link_joins_two_distinct_unpaired_endpoints_with_no_leftover() {
    // Columns 0 and 3 are two distinct unpaired (global) endpoints — the
    // start-side and end-side threads, not already partnered with each
    // other. Linking them directly closes the whole path so far, leaving
    // no open end anywhere, not a leftover self-loop at either column.
    let mut config = Configuration::from_display(&disp("1002")).unwrap();
    config.link(0, 3);
    assert_eq!(config.as_tuple(), disp("0000"));
}

#[test]
fn mask_removes_unmasked_unpaired_endpoint() {
    let mut config = Configuration::from_display(&disp("010")).unwrap();
    config.mask(&[false, false, false]);
    assert_eq!(config.as_tuple(), disp("000"));
}

#[test]
fn mask_splits_paired_subpath_into_unpaired_when_one_end_survives() {
    let mut config = Configuration::from_display(&disp("0110")).unwrap();
    config.mask(&[false, true, false, false]);
    // column 1 survives; column 2 (its old partner) is masked away, so
    // column 1 becomes the sole, unpaired, surviving endpoint.
    assert_eq!(config.as_tuple(), disp("0100"));
}

#[test]
fn mask_is_idempotent() {
    let mut config = Configuration::from_display(&disp("1221")).unwrap();
    let vmask = [true, false, false, true];
    config.mask(&vmask);
    let once = config.as_tuple();
    config.mask(&vmask);
    assert_eq!(config.as_tuple(), once);
}

#[test]
fn copy_is_independent_of_original() {
    let original = Configuration::from_display(&disp("1221")).unwrap();
    let mut copy = original.copy();
    copy.link(2, 3);
    assert_eq!(original.as_tuple(), disp("1221"));
    assert_eq!(copy.as_tuple(), disp("1100"));
}

#[test]
fn from_display_rejects_triple_occurrence() {
    let err = Configuration::from_display(&[1, 1, 1]).unwrap_err();
    assert_eq!(err, crate::error::HamGridError::RepeatedSubpathId { id: 1 });
}

#[test]
fn empty_configuration_has_no_endpoints() {
    let config = Configuration::empty(5);
    assert_eq!(config.len(), 5);
    assert_eq!(config.as_tuple(), vec![0, 0, 0, 0, 0]);
    for a in 0..5 {
        for b in (a + 1)..5 {
            assert!(!config.would_close(a, b));
        }
    }
}

//! Full-session behavior over multiple in-memory sources.

use std::collections::BTreeSet;

use reclink_core::run_match_session;
use reclink_map::MappingProfile;
use reclink_model::{FieldType, MatchPhase, QueryType, Source};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// A small fleet of sources wired together through shared identifiers:
/// the registry row carries tax, name, phone, and plate; the vehicle row
/// shares only the phone; the plate file shares only the plate; the claims
/// row shares the vehicle's chassis, which never becomes an anchor unless
/// the vehicle row itself matches in phase 1.
fn fleet() -> Vec<Source> {
    vec![
        Source::new(
            "registry.csv",
            strings(&["Tax Reg No DMS", "Customer Name", "Mobile", "Number Plate"]),
            vec![
                strings(&["0305311225", "Nguyen Van A", "84912345678", "51a-123.45"]),
                strings(&["7777777777", "Tran Thi B", "0900000000", ""]),
            ],
        ),
        Source::new(
            "vehicles.csv",
            strings(&["Chassis Number", "Engine No", "Tel"]),
            vec![
                strings(&["abc 123", "ENG-1", "0912 345 678"]),
                strings(&["xyz 999", "ENG-2", "0911111111"]),
            ],
        ),
        Source::new(
            "claims.csv",
            strings(&["Chassis No", "Claim Ref"]),
            vec![strings(&["ABC123", "CL-77"])],
        ),
        Source::new(
            "plates.csv",
            strings(&["License Plate"]),
            vec![strings(&["51 A 12345"]), strings(&["30F 11111"])],
        ),
    ]
}

#[test]
fn tax_query_cascades_through_shared_identifiers() {
    let sources = fleet();
    let result = run_match_session(&sources, "0305311225", QueryType::Tax, &MappingProfile::default());

    let reasons: Vec<(&str, usize, &str)> = result
        .records
        .iter()
        .map(|r| (r.source.as_str(), r.row, r.reason.as_str()))
        .collect();
    assert!(reasons.contains(&("registry.csv", 0, "tax_exact")));
    assert!(reasons.contains(&("vehicles.csv", 0, "link_tel")));
    assert!(reasons.contains(&("plates.csv", 0, "link_plate")));
    assert_eq!(result.total_matches(), 3);

    // The vehicle row was a phase-2 match, so its chassis never anchored
    // and the claims row stays out: propagation stops after two phases.
    assert!(result.records_for_source("claims.csv").next().is_none());
    assert_eq!(result.anchor_counts[&FieldType::ChassisNo], 0);
    assert_eq!(result.anchor_counts[&FieldType::TaxNo], 1);
    assert_eq!(result.anchor_counts[&FieldType::Tel], 1);
    assert_eq!(result.anchor_counts[&FieldType::NumberPlate], 1);
}

#[test]
fn per_source_counts_cover_every_source() {
    let sources = fleet();
    let result = run_match_session(&sources, "0305311225", QueryType::Tax, &MappingProfile::default());

    assert_eq!(result.per_source.len(), 4);
    let registry = &result.per_source["registry.csv"];
    assert_eq!((registry.phase1, registry.phase2), (1, 0));
    let vehicles = &result.per_source["vehicles.csv"];
    assert_eq!((vehicles.phase1, vehicles.phase2), (0, 1));
    let claims = &result.per_source["claims.csv"];
    assert_eq!(claims.total(), 0);
    let plates = &result.per_source["plates.csv"];
    assert_eq!((plates.phase1, plates.phase2), (0, 1));
}

#[test]
fn no_row_is_matched_twice() {
    let sources = fleet();
    // A phone query matches the registry row and the vehicle row directly;
    // both also share anchors, so phase 2 must skip them.
    let result = run_match_session(&sources, "0912345678", QueryType::Tel, &MappingProfile::default());

    let mut keys = BTreeSet::new();
    for record in &result.records {
        assert!(keys.insert(record.key()), "duplicate match for {:?}", record.key());
    }
}

#[test]
fn auto_query_enriches_anchors_across_fields() {
    let sources = fleet();
    // Auto resolves the phone query to tel_exact on both the registry and
    // the vehicle rows in phase 1; the vehicle's chassis then anchors and
    // pulls the claims row in.
    let result = run_match_session(&sources, "0912345678", QueryType::Auto, &MappingProfile::default());

    let phase1: BTreeSet<&str> = result
        .records
        .iter()
        .filter(|r| r.phase == MatchPhase::Phase1)
        .map(|r| r.source.as_str())
        .collect();
    assert!(phase1.contains("registry.csv"));
    assert!(phase1.contains("vehicles.csv"));

    let claim = result
        .records_for_source("claims.csv")
        .next()
        .expect("claims row should link via the anchored chassis");
    assert_eq!(claim.reason, "link_chassis");
    assert_eq!(claim.phase, MatchPhase::Phase2);
}

#[test]
fn name_query_uses_token_sort_similarity() {
    let sources = fleet();
    let result = run_match_session(&sources, "A Van Nguyen", QueryType::Name, &MappingProfile::default());

    let registry = result
        .records_for_source("registry.csv")
        .next()
        .expect("reordered name should still match");
    assert_eq!(registry.reason, "name_fuzzy(100)");
    // The matched row's identifiers still cascade.
    assert!(result.records_for_source("vehicles.csv").next().is_some());
}

#[test]
fn sessions_are_idempotent_and_anchor_order_independent() {
    let sources = fleet();
    let first = run_match_session(&sources, "0305311225", QueryType::Tax, &MappingProfile::default());
    let second = run_match_session(&sources, "0305311225", QueryType::Tax, &MappingProfile::default());
    assert_eq!(first, second);

    let mut reversed = fleet();
    reversed.reverse();
    let third = run_match_session(&reversed, "0305311225", QueryType::Tax, &MappingProfile::default());
    assert_eq!(first.anchor_counts, third.anchor_counts);
    assert_eq!(first.total_matches(), third.total_matches());
}

#[test]
fn empty_query_matches_nothing() {
    let sources = fleet();
    for query in ["", "   "] {
        let result = run_match_session(&sources, query, QueryType::Auto, &MappingProfile::default());
        assert_eq!(result.total_matches(), 0);
        assert_eq!(result.total_anchors(), 0);
    }
}

#[test]
fn empty_sources_contribute_nothing() {
    let sources = vec![
        Source::new("empty.csv", Vec::new(), Vec::new()),
        Source::new("headers_only.csv", strings(&["Tel"]), Vec::new()),
    ];
    let result = run_match_session(&sources, "0912345678", QueryType::Tel, &MappingProfile::default());
    assert_eq!(result.total_matches(), 0);
    assert_eq!(result.per_source.len(), 2);
}

#[test]
fn explicit_profile_overrides_drive_matching() {
    // "MST" matches no heuristic; only the profile makes it a tax column.
    let sources = vec![Source::new(
        "custom.csv",
        strings(&["MST"]),
        vec![strings(&["0305311225"])],
    )];
    let json = r#"{"mapping_per_file": {"custom.csv": {"MST": "tax_no"}}}"#;
    let profile: MappingProfile = serde_json::from_str(json).unwrap();

    let unmapped = run_match_session(&sources, "0305311225", QueryType::Tax, &MappingProfile::default());
    assert_eq!(unmapped.total_matches(), 0);

    let mapped = run_match_session(&sources, "0305311225", QueryType::Tax, &profile);
    assert_eq!(mapped.total_matches(), 1);
    assert_eq!(mapped.records[0].reason, "tax_exact");
}

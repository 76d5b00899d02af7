use std::collections::BTreeMap;
use std::fs;

use tempfile::TempDir;

use reclink_model::{
    FieldType, MatchPhase, MatchRecord, SessionResult, Source, SourceCounts,
};
use reclink_report::write_session_outputs;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn sample_sources() -> Vec<Source> {
    vec![
        Source::new(
            "registry.csv",
            strings(&["Tax Reg No DMS", "Tel"]),
            vec![strings(&["0305311225", "0912345678"])],
        ),
        Source::new(
            "vehicles.csv",
            strings(&["Chassis Number", "Tel"]),
            vec![strings(&["ABC123", "0912345678"])],
        ),
        Source::new("quiet.csv", strings(&["Note"]), vec![strings(&["n/a"])]),
    ]
}

fn sample_result(sources: &[Source]) -> SessionResult {
    let mut per_source = BTreeMap::new();
    per_source.insert(
        "registry.csv".to_string(),
        SourceCounts { phase1: 1, phase2: 0 },
    );
    per_source.insert(
        "vehicles.csv".to_string(),
        SourceCounts { phase1: 0, phase2: 1 },
    );
    per_source.insert("quiet.csv".to_string(), SourceCounts::default());

    let records = vec![
        MatchRecord {
            source: "registry.csv".to_string(),
            row: 0,
            values: sources[0].row_values(0),
            reason: "tax_exact".to_string(),
            phase: MatchPhase::Phase1,
        },
        MatchRecord {
            source: "vehicles.csv".to_string(),
            row: 0,
            values: sources[1].row_values(0),
            reason: "link_tel".to_string(),
            phase: MatchPhase::Phase2,
        },
    ];

    let mut anchor_counts = BTreeMap::new();
    for field in FieldType::PROPAGATING {
        anchor_counts.insert(field, 0);
    }
    anchor_counts.insert(FieldType::TaxNo, 1);
    anchor_counts.insert(FieldType::Tel, 1);

    SessionResult {
        records,
        anchor_counts,
        per_source,
    }
}

#[test]
fn writes_expected_layout() {
    let dir = TempDir::new().unwrap();
    let sources = sample_sources();
    let result = sample_result(&sources);

    let outputs =
        write_session_outputs(dir.path(), "0305311225", &sources, &result).unwrap();

    assert!(outputs.folder.ends_with("0305311225"));
    assert!(outputs.combined.exists());
    assert!(outputs.summary.exists());
    assert_eq!(outputs.per_source.len(), 3);
    assert!(
        outputs.per_source["registry.csv"]
            .to_str()
            .unwrap()
            .ends_with("registry__matches.csv")
    );
}

#[test]
fn per_source_file_carries_meta_columns() {
    let dir = TempDir::new().unwrap();
    let sources = sample_sources();
    let result = sample_result(&sources);
    let outputs = write_session_outputs(dir.path(), "0305311225", &sources, &result).unwrap();

    let text = fs::read_to_string(&outputs.per_source["registry.csv"]).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Tax Reg No DMS,Tel,_file,_match_reason,_phase"
    );
    assert_eq!(
        lines.next().unwrap(),
        "0305311225,0912345678,registry.csv,tax_exact,phase1"
    );
    assert!(lines.next().is_none());
}

#[test]
fn source_without_matches_gets_header_only_file() {
    let dir = TempDir::new().unwrap();
    let sources = sample_sources();
    let result = sample_result(&sources);
    let outputs = write_session_outputs(dir.path(), "0305311225", &sources, &result).unwrap();

    let text = fs::read_to_string(&outputs.per_source["quiet.csv"]).unwrap();
    assert_eq!(text.trim_end(), "Note");
}

#[test]
fn combined_file_unions_columns_in_first_seen_order() {
    let dir = TempDir::new().unwrap();
    let sources = sample_sources();
    let result = sample_result(&sources);
    let outputs = write_session_outputs(dir.path(), "0305311225", &sources, &result).unwrap();

    let text = fs::read_to_string(&outputs.combined).unwrap();
    let mut lines = text.lines();
    // Registry matched first, so its columns lead; the vehicle source adds
    // only its unseen column.
    assert_eq!(
        lines.next().unwrap(),
        "Tax Reg No DMS,Tel,Chassis Number,_file,_match_reason,_phase"
    );
    assert_eq!(
        lines.next().unwrap(),
        "0305311225,0912345678,,registry.csv,tax_exact,phase1"
    );
    assert_eq!(
        lines.next().unwrap(),
        ",0912345678,ABC123,vehicles.csv,link_tel,phase2"
    );
}

#[test]
fn summary_lists_every_source_in_order() {
    let dir = TempDir::new().unwrap();
    let sources = sample_sources();
    let result = sample_result(&sources);
    let outputs = write_session_outputs(dir.path(), "0305311225", &sources, &result).unwrap();

    let text = fs::read_to_string(&outputs.summary).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "file,phase1_matches,phase2_matches,total_matches",
            "registry.csv,1,0,1",
            "vehicles.csv,0,1,1",
            "quiet.csv,0,0,0",
        ]
    );
}

#[test]
fn no_matches_yields_empty_combined_file() {
    let dir = TempDir::new().unwrap();
    let sources = sample_sources();
    let mut result = sample_result(&sources);
    result.records.clear();

    let outputs = write_session_outputs(dir.path(), "nothing", &sources, &result).unwrap();
    let text = fs::read_to_string(&outputs.combined).unwrap();
    assert!(text.is_empty());
}

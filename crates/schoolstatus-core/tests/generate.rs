use schoolstatus_core::{
    run, ConfigOverrides, GeneratorConfig, RosterError, STATUS_FILE_NAME,
};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ROSTER: &str = "\
SCHOOL_YEAR,ST,LEAID,LEA_NAME,NCESSCH,SCH_NAME
2020-2021,VA,5100001,Acme LEA,510000100001,Acme Elementary
2020-2021,VA,5100001,Acme LEA,510000100002,Acme Middle
2020-2021,VA,5100002,Blue Ridge LEA,510000200001,Blue Ridge High
2020-2021,MD,2400001,Bay LEA,240000100001,Bay Elementary
2020-2021,DC,1100001,District LEA,110000100001,Capitol High
2020-2021,VA,5100001,Acme LEA,510000100003,Acme High
";

fn write_roster(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("ccd.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn config_for(ccd: &Path, out: &Path) -> GeneratorConfig {
    GeneratorConfig::default().with_overrides(ConfigOverrides {
        ccd_file: Some(ccd.to_path_buf()),
        output_dir: Some(out.to_path_buf()),
        ..Default::default()
    })
}

/// Expected State -> LEA -> School id sets, straight from the CSV text.
fn expected_ids(csv: &str) -> BTreeMap<String, BTreeMap<String, BTreeSet<String>>> {
    let mut out: BTreeMap<String, BTreeMap<String, BTreeSet<String>>> = BTreeMap::new();
    for line in csv.lines().skip(1) {
        let cols: Vec<&str> = line.split(',').collect();
        out.entry(cols[1].to_string())
            .or_default()
            .entry(cols[2].to_string())
            .or_default()
            .insert(cols[4].to_string());
    }
    out
}

fn read_doc(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn output_mirrors_roster_structure() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let ccd = write_roster(tmp.path(), ROSTER);

    let report = run(&config_for(&ccd, &out)).unwrap();
    let expected = expected_ids(ROSTER);

    // one directory per distinct State
    let dirs: BTreeSet<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(dirs, expected.keys().cloned().collect());
    assert_eq!(report.files.len(), expected.len());
    assert_eq!(report.stats.schools, 6);

    for (state, leas) in &expected {
        let doc = read_doc(&out.join(state).join(STATUS_FILE_NAME));
        let lea_docs = doc["lea"].as_array().unwrap();

        let lea_ids: BTreeSet<String> = lea_docs
            .iter()
            .map(|l| l["leaID"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(&lea_ids, &leas.keys().cloned().collect::<BTreeSet<_>>());
        assert_eq!(lea_docs.len(), leas.len(), "no duplicated LEAs in {state}");

        for lea in lea_docs {
            let schools = lea["openStatus"].as_array().unwrap();
            let ids: BTreeSet<String> = schools
                .iter()
                .map(|s| s["schoolID"].as_str().unwrap().to_string())
                .collect();
            assert_eq!(&ids, &leas[lea["leaID"].as_str().unwrap()]);
            for s in schools {
                assert_eq!(s["weeklyInPersonInstruction"], "Not reported");
            }
        }
    }
}

#[test]
fn schools_follow_input_order_within_lea() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let ccd = write_roster(tmp.path(), ROSTER);
    run(&config_for(&ccd, &out)).unwrap();

    let doc = read_doc(&out.join("VA").join(STATUS_FILE_NAME));
    let acme: Vec<&str> = doc["lea"][0]["openStatus"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["schoolID"].as_str().unwrap())
        .collect();
    assert_eq!(acme, vec!["510000100001", "510000100002", "510000100003"]);
    assert_eq!(doc["lea"][1]["leaName"], "Blue Ridge LEA");
}

#[test]
fn second_run_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let ccd = write_roster(tmp.path(), ROSTER);
    let config = config_for(&ccd, &out);

    let first = run(&config).unwrap();
    let snapshot: Vec<Vec<u8>> = first.files.iter().map(|f| fs::read(f).unwrap()).collect();

    let second = run(&config).unwrap();
    assert_eq!(first.files, second.files);
    let again: Vec<Vec<u8>> = second.files.iter().map(|f| fs::read(f).unwrap()).collect();
    assert_eq!(snapshot, again);
}

#[test]
fn url_overrides_reach_every_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let ccd = write_roster(tmp.path(), ROSTER);
    let config = config_for(&ccd, &out).with_overrides(ConfigOverrides {
        conforms_to: Some("https://example.org/conf".into()),
        described_by: Some("https://example.org/schema.json".into()),
        ..Default::default()
    });

    let report = run(&config).unwrap();
    for f in &report.files {
        let doc = read_doc(f);
        assert_eq!(doc["conformsTo"], "https://example.org/conf");
        assert_eq!(doc["describedBy"], "https://example.org/schema.json");
        assert_eq!(doc["reportingPeriodStartDate"], "2021-05-10");
    }
}

#[test]
fn missing_roster_fails_before_writing() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let config = config_for(&tmp.path().join("nope.csv"), &out);

    assert!(matches!(run(&config), Err(RosterError::NotFound(_))));
    assert!(!out.exists());
}

#[test]
fn missing_column_fails_before_writing() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let ccd = write_roster(tmp.path(), "ST,LEAID,NCESSCH,SCH_NAME\nVA,1,11,School\n");

    match run(&config_for(&ccd, &out)) {
        Err(RosterError::MissingColumn(col)) => assert_eq!(col, "LEA_NAME"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
    assert!(!out.exists());
}

#[cfg(feature = "compact")]
#[test]
fn gzipped_roster_loads_like_plain_csv() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let tmp = TempDir::new().unwrap();
    let gz_path = tmp.path().join("ccd.csv.gz");
    let mut enc = GzEncoder::new(fs::File::create(&gz_path).unwrap(), Compression::default());
    enc.write_all(ROSTER.as_bytes()).unwrap();
    enc.finish().unwrap();
    let plain_path = write_roster(tmp.path(), ROSTER);

    let gz_out = tmp.path().join("gz");
    let plain_out = tmp.path().join("plain");
    run(&config_for(&gz_path, &gz_out)).unwrap();
    run(&config_for(&plain_path, &plain_out)).unwrap();

    for st in ["DC", "MD", "VA"] {
        assert_eq!(
            fs::read(gz_out.join(st).join(STATUS_FILE_NAME)).unwrap(),
            fs::read(plain_out.join(st).join(STATUS_FILE_NAME)).unwrap()
        );
    }
}

#[test]
fn blank_state_rows_never_reach_the_output_root() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let ccd = write_roster(
        tmp.path(),
        "ST,LEAID,LEA_NAME,NCESSCH,SCH_NAME\n,001,A,001001,S\nVA,002,B,002001,T\n",
    );

    let report = run(&config_for(&ccd, &out)).unwrap();
    assert_eq!(report.files, vec![out.join("VA").join(STATUS_FILE_NAME)]);

    let entries: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["VA".to_string()]);
}

#[test]
fn path_like_state_code_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let ccd = write_roster(
        tmp.path(),
        "ST,LEAID,LEA_NAME,NCESSCH,SCH_NAME\n../escaped,001,A,001001,S\n",
    );

    match run(&config_for(&ccd, &out)) {
        Err(RosterError::InvalidStateCode(code)) => assert_eq!(code, "../escaped"),
        other => panic!("expected InvalidStateCode, got {other:?}"),
    }
    assert!(!tmp.path().join("escaped").exists());
}

use chrono::{FixedOffset, TimeZone};
use hamlog_c2a::{Config, RunSummary, convert};
use std::fs;
use std::path::Path;

fn sample() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/HamLog.csv");
    fs::read_to_string(path).unwrap()
}

/// Run a full conversion of `input` and return (stdout, stderr, summary).
fn run(input: &str, config: &Config) -> (String, String, RunSummary) {
    let generated = FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 6, 10, 9, 0, 0)
        .unwrap();
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let summary = convert(config, input.as_bytes(), &mut out, &mut diag, &generated).unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
        summary,
    )
}

#[test]
fn test_sample_full_run() {
    let (out, diag, summary) = run(&sample(), &Config::default());

    assert_eq!(
        summary,
        RunSummary {
            converted: 4,
            lines: 6,
            exported: 4,
            latest_no: 6,
        }
    );

    let mut lines = out.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Generated on 2024-06-10 at 09:00:00 +08:00 for BG1REN"
    );
    assert_eq!(lines.next().unwrap(), "<ADIF_VER:5>3.1.1");
    assert_eq!(lines.next().unwrap(), "<PROGRAMID:10>HamLog-C2A");
    assert!(lines.next().unwrap().starts_with("<PROGRAMVERSION:"));
    assert_eq!(lines.next().unwrap(), "<EOH>");

    let records: Vec<&str> = lines.collect();
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.ends_with("<EOR>")));

    assert_eq!(
        records[0],
        "<QSO_DATE:8>20240101<TIME_ON:4>0100<QSO_DATE_OFF:8>20240102<TIME_OFF:4>0050\
         <CALL:5>BA1AA<FREQ:5>7.050<BAND:3>40M<MODE:3>SSB<RST_RCVD:2>57<RST_SENT:2>59\
         <TX_PWR:4>100W<NAME:4>Wang<QTH:16>Xicheng, Beijing<STATION_CALLSIGN:6>BG1REN\
         <MY_CITY:16>Haidian, Beijing<EOR>"
    );
    assert!(records[1].starts_with("<QSO_DATE:8>20240531<TIME_ON:4>1230<TIME_OFF:4>1232"));
    assert!(records[1].contains("<COMMENT:7>tnx, 73"));
    assert!(records[2].contains("<BAND:2>2M"));
    assert!(!records[2].contains("TIME_OFF"));
    assert!(!records[2].contains("<NAME"));
    assert!(records[3].contains("<BAND:2>6M"));

    let diag_lines: Vec<&str> = diag.lines().collect();
    assert_eq!(diag_lines.len(), 4);
    assert!(diag_lines[0].starts_with("Error [only supports UTC+08:00 timezone"));
    assert!(diag_lines[0].ends_with("Line: 2024-06-02 1300 bad timezone,4|2/6/2024|1300|1310|21.200|SSB|100W|-|UTC+09:00|59|59|HL1AAA|-|-|-"));
    assert_eq!(
        diag_lines[1],
        "Error [expected 15 fields, found 1]. Line: broken line without fields"
    );
    assert_eq!(
        diag_lines[2],
        "Converted 4 record(s) from 6 lines with 2 error(s). Exported 4 record(s)."
    );
    assert_eq!(diag_lines[3], "Latest No: 6");
}

#[test]
fn test_sample_start_threshold() {
    let config = Config {
        start_no: 3,
        ..Config::default()
    };
    let (out, _diag, summary) = run(&sample(), &config);

    assert_eq!(summary.exported, 2);
    assert_eq!(summary.converted, 4);
    assert_eq!(summary.latest_no, 6);
    assert_eq!(out.matches("<EOR>").count(), 2);
    assert!(!out.contains("BA1AA"));
    assert!(!out.contains("JA1XYZ"));
}

#[test]
fn test_threshold_above_every_record() {
    let config = Config {
        start_no: 1000,
        ..Config::default()
    };
    let (out, _diag, summary) = run(&sample(), &config);

    assert_eq!(summary.exported, 0);
    assert_eq!(summary.latest_no, 6);
    assert!(out.ends_with("<EOH>\n"));
}

#[test]
fn test_empty_input() {
    let (out, diag, summary) = run("", &Config::default());

    assert_eq!(summary, RunSummary::default());
    assert!(out.ends_with("<EOH>\n"));
    assert_eq!(
        diag,
        "Converted 0 record(s) from 0 lines with 0 error(s). Exported 0 record(s).\nLatest No: 0\n"
    );
}

#[test]
fn test_callsign_uppercased_everywhere() {
    let config = Config {
        station_callsign: "bg1ren".to_string(),
        ..Config::default()
    };
    let (out, _diag, _summary) = run(&sample(), &config);

    assert!(out.lines().next().unwrap().ends_with("for BG1REN"));
    assert_eq!(out.matches("<STATION_CALLSIGN:6>BG1REN").count(), 4);
    assert!(!out.contains("bg1ren"));
}

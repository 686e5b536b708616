//! Converter integration tests
//!
//! End-to-end conversion through the filesystem.

use std::fs;

use conf2json::converter::{convert_file, Converter, RedirectRule};
use tempfile::TempDir;

const GAME_CONF: &str = r"
[URL Rewrite]
#start Vira Lilith# zoom art
^https?://prd-game-a[0-9]?-gbf\.akamaized\.net/assets/img/sp/assets/npc/zoom/3040/x\.png url 302 https://raw.githubusercontent.com/u/r/main/npc/zoom/3040/x.png
#!#^https?://prd-game-a[0-9]?-gbf\.akamaized\.net/assets/img/sp/assets/npc/zoom/3040/y\.png url 302 https://raw.githubusercontent.com/u/r/main/npc/zoom/3040/y.png
#start Bob
a url 302 https://h/leader/core/a.png
b url 302 https://h/leader/core/b.png
c url 302 d url 302 e
";

#[test]
fn test_convert_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("gbf.conf");
    fs::write(&input, GAME_CONF).unwrap();

    let report = convert_file(&Converter::default(), &input, None).unwrap();
    assert!(report.written);
    assert_eq!(report.output_path, dir.path().join("gbf.json"));

    let names: Vec<&str> = report.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "NPC-Vira_Lilith-3040",
            "NPC-Vira_Lilith-3040_1",
            "leader-Bob-core",
            "leader-Bob-core_1",
        ]
    );
    assert!(report.rules[0].enable);
    assert!(!report.rules[1].enable);
    assert_eq!(report.rules[0].group, "GBF_mod-NPC-Vira_Lilith");
    assert!(report.rules[0].pattern.contains("granbluefantasy"));

    let json = fs::read_to_string(&report.output_path).unwrap();
    let parsed: Vec<RedirectRule> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report.rules);
}

#[test]
fn test_missing_input_returns_empty_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.conf");

    let report = convert_file(&Converter::default(), &input, None).unwrap();
    assert!(report.rules.is_empty());
    assert!(!report.written);
    assert!(!report.output_path.exists());
}

#[test]
fn test_invalid_utf8_returns_empty_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("latin1.conf");
    fs::write(&input, [0x61, 0xff, 0xfe, 0x0a]).unwrap();

    let report = convert_file(&Converter::default(), &input, None).unwrap();
    assert!(report.rules.is_empty());
    assert!(!report.written);
}

#[test]
fn test_write_failure_still_returns_rules() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("rules.conf");
    fs::write(&input, "a url 302 https://h/x/a.png\n").unwrap();
    let output = dir.path().join("no_such_dir").join("out.json");

    let report = convert_file(&Converter::default(), &input, Some(&output)).unwrap();
    assert!(!report.written);
    assert_eq!(report.rules.len(), 1);
    assert_eq!(report.rules[0].name, "x");
}

use bjlite_cli::run;

fn stats(content: &str) -> (i32, String, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    std::fs::write(&path, content).unwrap();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["bjlite", "stats", "--input", &path.to_string_lossy()],
        &mut out,
        &mut err,
    );
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn line(id: u32, outcome: &str) -> String {
    format!(
        r#"{{"round_id":"20250101-{:06}","seed":3,"round":{},"player":[],"dealer":[],"player_value":20,"dealer_value":19,"outcome":"{}","ts":"2025-01-01T00:00:00Z"}}"#,
        id, id, outcome
    )
}

#[test]
fn counts_by_winner_and_outcome() {
    let content = [
        line(1, "player_blackjack"),
        line(2, "dealer_bust_player"),
        line(3, "dealer_blackjack"),
        line(4, "push"),
    ]
    .join("\n")
        + "\n";
    let (code, out, _) = stats(&content);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["rounds"], 4);
    assert_eq!(v["wins"], 2);
    assert_eq!(v["losses"], 1);
    assert_eq!(v["pushes"], 1);
    assert_eq!(v["win_rate"], 50.0);
    assert_eq!(v["outcomes"]["player_blackjack"], 1);
    assert_eq!(v["outcomes"]["player_higher"], 0);
}

#[test]
fn corrupted_lines_warn_but_succeed() {
    let content = format!("{}\n{{oops}}\n{}\n", line(1, "push"), line(2, "dealer_higher"));
    let (code, out, err) = stats(&content);
    assert_eq!(code, 0);
    assert!(err.contains("WARNING: Skipped 1 corrupted record(s)"));
    assert!(out.contains("\"rounds\": 2"));
}

#[test]
fn unknown_outcome_tag_is_corrupt() {
    let content = format!("{}\n{}\n", line(1, "push"), line(2, "surrender"));
    let (code, _, err) = stats(&content);
    assert_eq!(code, 0);
    assert!(err.contains("Skipped 1 corrupted"));
}

#[test]
fn missing_input_fails() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["bjlite", "stats", "--input", "/definitely/not/here.jsonl"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("Failed to read"));
}

use bjlite_cli::logging::LogCapture;
use bjlite_cli::run;
use tracing::Level;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn sim_emits_engine_and_command_events() {
    let capture = LogCapture::new();
    let subscriber = Registry::default().with(capture.layer());

    let code = tracing::subscriber::with_default(subscriber, || {
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        run(
            ["bjlite", "sim", "--rounds", "30", "--seed", "2"],
            &mut out,
            &mut err,
        )
    });
    assert_eq!(code, 0);

    let entries = capture.entries();
    let resolved: Vec<_> = entries
        .iter()
        .filter(|e| e.message == "round resolved")
        .collect();
    assert_eq!(resolved.len(), 30);
    assert!(resolved.iter().all(|e| e.level == Level::INFO));
    assert!(resolved[0].target.starts_with("bjlite_engine"));
    assert_eq!(resolved[29].field("round"), Some("30"));

    // 30 rounds cannot come out of one 52-card deck
    assert!(capture
        .messages()
        .iter()
        .any(|m| m == "reshuffling deck before round"));

    let done = entries
        .iter()
        .find(|e| e.message == "simulation complete")
        .unwrap();
    assert_eq!(done.field("rounds"), Some("30"));
}

use anyhow::Error;
use rat_base16::{ColorScheme, load_with};
use std::io;
use std::path::Path;
use std::sync::mpsc;

#[test]
fn test_log_invalid_color() -> Result<(), Error> {
    let (tx, rx) = mpsc::channel::<String>();
    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("{} {}", record.level(), message)))
        .level(log::LevelFilter::Debug)
        .chain(tx)
        .apply()?;

    let data = include_str!("data/default-dark.yaml").replace("\"585858\"", "\"58585g\"");
    let reader = |_: &Path| -> Result<Vec<u8>, io::Error> { Ok(data.as_bytes().to_vec()) };
    let scheme = load_with("default-dark.yaml", &reader)?;
    assert!(scheme.color("base03").is_none());

    let msg = rx.try_iter().collect::<Vec<String>>();
    assert!(
        msg.iter()
            .any(|v| v.starts_with("WARN") && v.contains("base03") && v.contains("58585g")),
        "{:?}",
        msg
    );
    assert!(
        msg.iter()
            .any(|v| v.starts_with("DEBUG") && v.contains("Default Dark")),
        "{:?}",
        msg
    );
    Ok(())
}

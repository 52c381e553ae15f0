//! Integration tests for the namespace console
//!
//! These tests validate:
//! - Config files loaded from disk
//! - Whole scripts replayed through the handler
//! - Tree output after moves and writes

use ns_console::{load_config_file, run_script, CommandHandler, ConsoleError};
use services_namespace::{ConfigError, NamespaceOperations};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn run(handler: &mut CommandHandler, script: &str) -> String {
    let mut output = Vec::new();
    run_script(handler, Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_config_file_drives_path_syntax() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("namespace.json");
    fs::write(
        &path,
        r#"{ "separator": "/", "main_drive": "root", "zip_rounding": "half_up" }"#,
    )
    .unwrap();

    let config = load_config_file(&path).unwrap();
    let mut handler = CommandHandler::new(config).unwrap();
    let output = run(
        &mut handler,
        "zip root arc\ntouch root/arc t\nwrite root/arc/t abcde\ntree\n",
    );

    assert!(output.contains("Created zip_file: root/arc"));
    assert!(output.ends_with("- root (3)\n   - arc (3)\n      - t (5)\n"));
}

#[test]
fn test_config_file_errors() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        load_config_file(&missing),
        Err(ConsoleError::Io(_))
    ));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, b"{ not json").unwrap();
    assert!(matches!(
        load_config_file(&broken),
        Err(ConsoleError::Config(ConfigError::Parse(_)))
    ));

    let bad_separator = dir.path().join("bad_separator.json");
    fs::write(&bad_separator, r#"{ "separator": "a" }"#).unwrap();
    assert!(matches!(
        load_config_file(&bad_separator),
        Err(ConsoleError::Config(ConfigError::InvalidSeparator('a')))
    ));
}

#[test]
fn test_demo_script_replay() {
    let script = include_str!("../../demos/namespace_demo.nsh");
    let mut handler = CommandHandler::default();
    let output = run(&mut handler, script);

    assert!(!output.contains("error:"));
    assert!(output.contains("This is the content of my file"));

    let ns = handler.namespace();
    // my_txt_file2 is 30 chars, my_txt_file3 is 36 chars inside the zip
    assert_eq!(ns.resolve("C:\\my_folder\\my_zip").unwrap().size(), 18);
    assert_eq!(ns.resolve("C:\\my_folder").unwrap().size(), 48);
    assert_eq!(ns.resolve("C:\\my_folder2").unwrap().size(), 7);
    assert_eq!(ns.root().size(), 55);
    assert!(ns.check_consistency().is_ok());
}

#[test]
fn test_failed_commands_leave_tree_untouched() {
    let mut handler = CommandHandler::default();
    run(
        &mut handler,
        "mkdir C: docs\ntouch C:\\docs a.txt\nwrite C:\\docs\\a.txt hello\n",
    );
    let before = handler.tree(None).unwrap();

    let output = run(
        &mut handler,
        "mkdir C: docs\nmv C:\\docs C:\\docs\\inside\nwrite C:\\docs text\nrm C:\n",
    );
    assert_eq!(output.matches("error:").count(), 4);
    assert_eq!(handler.tree(None).unwrap(), before);
}

mod common;

use common::TicketTest;

// ============================================================================
// Generate command tests
// ============================================================================

fn generate_args<'a>(avatar: &'a str) -> Vec<&'a str> {
    vec![
        "generate",
        "--name",
        "Ada Lovelace",
        "--email",
        "ada@example.com",
        "--github",
        "ada-l",
        "--avatar",
        avatar,
    ]
}

#[test]
fn test_generate_text() {
    let test = TicketTest::new();
    let avatar = test.write_png("ada.png", 8, 8);

    let output = test.run_success(&generate_args(&avatar));
    assert!(output.contains("Congrats, Ada Lovelace! Your ticket is ready."));
    assert!(output.contains("We have emailed your ticket to ada@example.com"));
    assert!(output.contains("◆ Coding Conf"));
    assert!(output.contains("@ada-l <https://github.com/ada-l>"));
    assert!(output.contains("avatar: ada.png (image/png,"));
}

#[test]
fn test_generate_json() {
    let test = TicketTest::new();
    let avatar = test.write_png("ada.png", 8, 8);

    let mut args = generate_args(&avatar);
    args.push("--json");
    let output = test.run_success(&args);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["name"], "Ada Lovelace");
    assert_eq!(json["github"], "ada-l");
    assert_eq!(json["profile_url"], "https://github.com/ada-l");
    assert_eq!(json["avatar"]["mime"], "image/png");
    let number = json["number"].as_str().unwrap();
    assert!(number.starts_with('#') && number.len() == 6, "{number}");
}

#[test]
fn test_generate_alias_and_at_prefix() {
    let test = TicketTest::new();
    let avatar = test.write_png("ada.png", 8, 8);

    let output = test.run_success(&[
        "g",
        "--name",
        "Ada Lovelace",
        "--email",
        "ada@example.com",
        "--github",
        "@ada-l",
        "--avatar",
        &avatar,
        "--json",
    ]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["github"], "ada-l");
}

#[test]
fn test_generate_uses_configured_event() {
    let test = TicketTest::new();
    let avatar = test.write_png("ada.png", 8, 8);
    test.run_success(&["config", "set", "event.name", "Rust Nation"]);
    test.run_success(&["config", "set", "event.location", "London, UK"]);

    let output = test.run_success(&generate_args(&avatar));
    assert!(output.contains("◆ Rust Nation"));
    assert!(output.contains("Jan 31, 2025 / London, UK"));
}

#[test]
fn test_generate_reports_field_errors() {
    let test = TicketTest::new();
    let avatar = test.write_png("ada.png", 8, 8);

    let stderr = test.run_failure(&[
        "generate",
        "--name",
        "Al",
        "--email",
        "not-an-email",
        "--github=-bad-",
        "--avatar",
        &avatar,
    ]);
    assert!(stderr.contains("ticket not generated"));
    assert!(stderr.contains("Please enter a valid name!"));
    assert!(stderr.contains("Please enter a valid email address!"));
    assert!(stderr.contains("Please enter a valid github username!"));
}

#[test]
fn test_generate_rejects_non_image() {
    let test = TicketTest::new();
    let avatar = test.write_file("cv.pdf", b"%PDF-1.4\n%%EOF\n");

    let stderr = test.run_failure(&generate_args(&avatar));
    assert!(stderr.contains("File type not accepted. Please upload: image/*"));
}

#[test]
fn test_generate_respects_size_limit() {
    let test = TicketTest::new();
    let avatar = test.write_png("big.png", 64, 64);
    test.run_success(&["config", "set", "picker.max_file_size", "10b"]);

    let stderr = test.run_failure(&generate_args(&avatar));
    assert!(stderr.contains("File too large. Please upload a photo under"));
}

#[test]
fn test_generate_missing_avatar_file() {
    let test = TicketTest::new();
    let stderr = test.run_failure(&generate_args("nowhere/ada.png"));
    assert!(stderr.contains("could not open"));
}

#[test]
fn test_generate_requires_all_arguments() {
    let test = TicketTest::new();
    let stderr = test.run_failure(&["generate", "--name", "Ada Lovelace"]);
    assert!(stderr.contains("--email"));
}

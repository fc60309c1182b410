//! Golden dry-run output for composed messages.

use std::path::Path;

use pretty_assertions::assert_eq;

use mattersend::compose::{ComposeRequest, Input};
use mattersend::config::{Config, MessageOptions};
use mattersend::highlight::SyntaxMode;
use mattersend::tabular::TabularDialect;

const CONFIG: &str = "[DEFAULT]
url=https://chat.mydomain.com/hooks/abcdefghi123456

[angrybot]
icon = :angry:
username = AngryBot
";

fn config() -> Config {
    Config::parse(CONFIG).unwrap()
}

fn request(message: &str) -> ComposeRequest {
    ComposeRequest {
        options: MessageOptions {
            channel: Some("town-square".to_string()),
            ..MessageOptions::default()
        },
        message: Some(message.to_string()).filter(|m| !m.is_empty()),
        ..ComposeRequest::default()
    }
}

fn dry_run(request: &ComposeRequest) -> String {
    request
        .compose_with(&config())
        .unwrap()
        .prepare()
        .unwrap()
        .dry_run()
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_simple() {
    assert_eq!(
        dry_run(&request("test message")),
        r#"POST https://chat.mydomain.com/hooks/abcdefghi123456
{
    "channel": "town-square",
    "text": "test message"
}"#
    );
}

#[test]
fn test_section() {
    let req = ComposeRequest {
        section: "angrybot".to_string(),
        ..request("test message")
    };
    assert_eq!(
        dry_run(&req),
        r#"POST https://chat.mydomain.com/hooks/abcdefghi123456
{
    "channel": "town-square",
    "icon_url": "https://chat.mydomain.com/static/emoji/1f620.png",
    "text": "test message",
    "username": "AngryBot"
}"#
    );
}

#[test]
fn test_override_url() {
    let mut req = request("test message");
    req.options.url = Some("http://chat.net/hooks/abdegh12".to_string());
    assert_eq!(
        dry_run(&req),
        r#"POST http://chat.net/hooks/abdegh12
{
    "channel": "town-square",
    "text": "test message"
}"#
    );
}

#[test]
fn test_syntax_by_ext() {
    let dir = tempfile::tempdir().unwrap();
    let req = ComposeRequest {
        input: Input::File(write(dir.path(), "source.coffee", "xxxx")),
        ..request("")
    };
    assert_eq!(
        dry_run(&req),
        r#"POST https://chat.mydomain.com/hooks/abcdefghi123456
{
    "attachments": [
        {
            "fallback": "```coffeescript\nxxxx```",
            "text": "```coffeescript\nxxxx```",
            "title": "source.coffee"
        }
    ],
    "channel": "town-square"
}"#
    );
}

#[test]
fn test_syntax_by_basename() {
    let dir = tempfile::tempdir().unwrap();
    let req = ComposeRequest {
        input: Input::File(write(dir.path(), "Makefile", "all:\n\tcc main.c\n")),
        ..request("")
    };
    let output = dry_run(&req);
    assert!(output.contains(r#""text": "```makefile\nall:\n\tcc main.c\n```""#), "{output}");
}

#[test]
fn test_syntax_none_leaves_file_unfenced() {
    let dir = tempfile::tempdir().unwrap();
    let req = ComposeRequest {
        input: Input::File(write(dir.path(), "main.go", "package main")),
        syntax: SyntaxMode::None,
        ..request("")
    };
    assert!(dry_run(&req).contains(r#""text": "package main""#));
}

#[test]
fn test_message_with_attached_file_and_info() {
    let dir = tempfile::tempdir().unwrap();
    let req = ComposeRequest {
        input: Input::File(write(dir.path(), "changes.nomime", "text/x-diff diff")),
        fileinfo: true,
        ..request("test message")
    };
    assert_eq!(
        dry_run(&req),
        r#"POST https://chat.mydomain.com/hooks/abcdefghi123456
{
    "attachments": [
        {
            "fallback": "text/x-diff diff",
            "fields": [
                {
                    "short": true,
                    "title": "Size",
                    "value": "16.0B"
                },
                {
                    "short": true,
                    "title": "Mime",
                    "value": "application/octet-stream"
                }
            ],
            "text": "text/x-diff diff",
            "title": "changes.nomime"
        }
    ],
    "channel": "town-square",
    "text": "test message"
}"#
    );
}

#[test]
fn test_stdin_table_is_appended_to_message() {
    let req = ComposeRequest {
        input: Input::Text("abc,def\nfoo,bar\n".to_string()),
        tabular: Some(TabularDialect::Excel),
        ..request("Report:")
    };
    assert_eq!(
        dry_run(&req),
        r#"POST https://chat.mydomain.com/hooks/abcdefghi123456
{
    "channel": "town-square",
    "text": "Report:\n\n| abc | def |\n| --- | --- |\n| foo | bar |"
}"#
    );
}

#[test]
fn test_dry_run_matches_posted_payload() {
    let message = request("same bytes").compose_with(&config()).unwrap();
    let prepared = message.prepare().unwrap();
    let output = prepared.dry_run();
    let (request_line, body) = output.split_once('\n').unwrap();
    assert_eq!(request_line, format!("POST {}", prepared.url()));
    assert_eq!(body, prepared.payload());
    assert_eq!(body, message.get_payload().unwrap());
}

use mattersend::config::{Config, DEFAULT_SECTION, MessageOptions, load_config, load_config_paths};
use mattersend::Error;

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mattersend.conf");
    let content = r#"
# comment
[DEFAULT]
url = https://chat.mydomain.com/hooks/abcdefghi123456

; another comment
[alerts]
channel = ops-alerts
icon = :rotating_light:
"#;
    std::fs::write(&path, content).unwrap();

    let config = load_config(Some(&path)).unwrap();
    let alerts = config.section("alerts").unwrap();
    assert_eq!(
        alerts.url.as_deref(),
        Some("https://chat.mydomain.com/hooks/abcdefghi123456")
    );
    assert_eq!(alerts.channel.as_deref(), Some("ops-alerts"));
    assert_eq!(alerts.icon.as_deref(), Some(":rotating_light:"));
}

#[test]
fn test_cli_options_override_section_and_default() {
    let config = Config::parse(
        "[DEFAULT]\nurl = http://default/hooks/a\nusername = default-bot\n[deploy]\nusername = deployer\nchannel = releases\n",
    )
    .unwrap();
    let cli = MessageOptions {
        channel: Some("hotfixes".to_string()),
        ..MessageOptions::default()
    };

    let effective = config.section("deploy").unwrap().union(&cli);
    assert_eq!(effective.url.as_deref(), Some("http://default/hooks/a"), "inherited from DEFAULT");
    assert_eq!(effective.username.as_deref(), Some("deployer"), "section beats DEFAULT");
    assert_eq!(effective.channel.as_deref(), Some("hotfixes"), "cli beats section");
    assert_eq!(effective.icon, None);
}

#[test]
fn test_user_file_overrides_system_file_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let system = dir.path().join("etc.conf");
    let user = dir.path().join("home.conf");
    std::fs::write(&system, "[DEFAULT]\nurl = http://system/hooks/a\n[bot]\nusername = sys\n").unwrap();
    std::fs::write(&user, "[bot]\nicon = http://x/i.png\n").unwrap();

    let config = load_config_paths(&[system, user]).unwrap();
    let bot = config.section("bot").unwrap();
    assert_eq!(bot.url.as_deref(), Some("http://system/hooks/a"));
    assert_eq!(bot.username.as_deref(), Some("sys"));
    assert_eq!(bot.icon.as_deref(), Some("http://x/i.png"));
}

#[test]
fn test_no_files_yields_empty_default_section() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_paths(&[dir.path().join("absent.conf")]).unwrap();
    assert_eq!(config.section(DEFAULT_SECTION).unwrap(), MessageOptions::default());
}

#[test]
fn test_malformed_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.conf");
    std::fs::write(&path, "[DEFAULT]\nthis is not a pair\n").unwrap();

    let err = load_config(Some(&path)).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("broken.conf"));
}

//! Messages and the attachments they carry.
//!
//! A [`Message`] collects destination options, a text body and any number of
//! [`Attachment`]s, and renders them into the [`Payload`] the webhook
//! expects. Files are turned into attachments by [`Message::attach_file`],
//! which runs their content through the tabular formatter or the syntax
//! detector first.

mod attachment;
mod payload;

use std::path::Path;

pub use attachment::{Attachment, AttachmentPayload, DEFAULT_TEXT_LIMIT, Field};
pub use payload::Payload;

use crate::config::MessageOptions;
use crate::delivery::{PreparedRequest, WebhookClient};
use crate::emoji::{ResolvedIcon, resolve_icon};
use crate::error::{Error, Result};
use crate::highlight::{SyntaxMode, fence};
use crate::tabular::{TabularDialect, format_table};

/// A chat message on its way to an incoming webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Webhook endpoint. Required to send.
    pub url: Option<String>,
    /// Channel name or `@username`. Required to send.
    pub channel: Option<String>,
    pub username: Option<String>,
    /// Raw icon reference, resolved when the payload is built.
    pub icon: Option<String>,
    pub text: String,
    /// Rendered in insertion order.
    pub attachments: Vec<Attachment>,
    pub text_limit: usize,
    pub native_emoji: bool,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            url: None,
            channel: None,
            username: None,
            icon: None,
            text: String::new(),
            attachments: Vec::new(),
            text_limit: DEFAULT_TEXT_LIMIT,
            native_emoji: false,
        }
    }
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a message from already merged options.
    pub fn from_options(options: &MessageOptions) -> Self {
        Self {
            url: options.url.clone(),
            channel: options.channel.clone(),
            username: options.username.clone(),
            icon: options.icon.clone(),
            ..Self::default()
        }
    }

    /// Override the attachment text/fallback truncation limit.
    #[must_use]
    pub const fn with_text_limit(mut self, limit: usize) -> Self {
        self.text_limit = limit;
        self
    }

    /// Send `:name:` icons as `icon_emoji` instead of rewriting them to
    /// static image URLs. Only useful on servers that render `icon_emoji`.
    #[must_use]
    pub const fn with_native_emoji(mut self, native: bool) -> Self {
        self.native_emoji = native;
        self
    }

    /// Append `text` to the body, putting `separator` in between when the
    /// body is not empty.
    pub fn append(&mut self, text: &str, separator: Option<&str>) {
        if let Some(separator) = separator.filter(|_| !self.text.is_empty()) {
            self.text.push_str(separator);
        }
        self.text.push_str(text);
    }

    /// Turn a file into an attachment and add it to the message.
    ///
    /// `text` replaces the file content when given. Tabular mode converts
    /// the content to a Markdown table and disables syntax fencing;
    /// otherwise `syntax` decides the code fence. With `include_fileinfo`
    /// the file size and MIME type are added as short fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not UTF-8, or its
    /// tabular content cannot be parsed.
    pub fn attach_file(
        &mut self,
        path: &Path,
        text: Option<String>,
        tabular: Option<TabularDialect>,
        syntax: &SyntaxMode,
        include_fileinfo: bool,
    ) -> Result<&mut Attachment> {
        let basename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let guess = mime_guess::from_path(path);

        let raw = match text {
            Some(text) => text,
            None => read_text(path)?,
        };

        let content = if let Some(dialect) = tabular {
            format_table(&raw, dialect)?
        } else {
            match syntax.resolve(Some(&basename), guess.first_raw()) {
                Some(tag) => {
                    tracing::debug!(file = %path.display(), syntax = %tag, "fencing attachment");
                    fence(&raw, &tag)
                }
                None => raw,
            }
        };

        let mut attachment = Attachment::new(content);
        attachment.title = Some(basename);
        if include_fileinfo {
            let size = std::fs::metadata(path)?.len();
            attachment.add_field("Size", human_size(size), true);
            attachment.add_field("Mime", guess.first_or_octet_stream().essence_str(), true);
        }

        self.attachments.push(attachment);
        let last = self.attachments.len() - 1;
        Ok(&mut self.attachments[last])
    }

    /// The icon key this message will carry, if any.
    pub fn resolved_icon(&self) -> Option<ResolvedIcon> {
        let icon = self.icon.as_deref()?;
        resolve_icon(icon, self.url.as_deref().unwrap_or_default(), self.native_emoji)
    }

    /// Snapshot of the message in wire form.
    pub fn payload(&self) -> Payload {
        let mut payload = Payload {
            attachments: self
                .attachments
                .iter()
                .map(|attachment| attachment.snapshot(self.text_limit))
                .collect(),
            channel: payload::present(self.channel.as_ref()),
            text: payload::present(Some(&self.text)),
            username: payload::present(self.username.as_ref()),
            ..Payload::default()
        };
        payload.set_icon(self.resolved_icon());
        payload
    }

    /// Serialized payload: sorted keys, four-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn get_payload(&self) -> Result<String> {
        self.payload().to_json()
    }

    /// Check the destination and freeze the payload for delivery.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the webhook URL or the channel is
    /// missing.
    pub fn prepare(&self) -> Result<PreparedRequest> {
        let url = payload::present(self.url.as_deref().map(str::trim))
            .ok_or_else(|| Error::config("Missing mattermost webhook URL"))?;
        if payload::present(self.channel.as_ref()).is_none() {
            return Err(Error::config("Missing destination channel"));
        }
        Ok(PreparedRequest::new(url, self.get_payload()?))
    }

    /// Deliver the message with a single POST.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any request is made when the
    /// destination is incomplete, a transport error when the request
    /// fails, and a delivery error for any response other than 200.
    pub fn send(&self, client: &WebhookClient) -> Result<()> {
        self.prepare()?.deliver(client)
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.display().to_string(),
        source,
    })
}

/// Binary-prefixed size with one decimal, e.g. `4.9KiB`.
#[allow(clippy::cast_precision_loss)]
pub fn human_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"];
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1}{unit}B");
        }
        size /= 1024.0;
    }
    format!("{size:.1}YiB")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use tempfile::tempdir;

    const HOOK: &str = "https://chat.mydomain.com/hooks/abcdefghi123456";

    fn message() -> Message {
        Message {
            url: Some(HOOK.to_string()),
            channel: Some("town-square".to_string()),
            ..Message::default()
        }
    }

    #[test]
    fn test_append_uses_separator_only_after_existing_text() {
        let mut msg = Message::new();
        msg.append("first", Some("\n\n"));
        msg.append("second", Some("\n\n"));
        msg.append("third", None);
        assert_eq!(msg.text, "first\n\nsecondthird");
    }

    #[test]
    fn test_payload_with_channel_and_text_only() {
        let mut msg = message();
        msg.text = "test message".to_string();
        assert_eq!(
            msg.get_payload().unwrap(),
            "{\n    \"channel\": \"town-square\",\n    \"text\": \"test message\"\n}"
        );
    }

    #[test]
    fn test_payload_drops_blank_values() {
        let mut msg = message();
        msg.text = " \n".to_string();
        msg.username = Some("   ".to_string());
        let payload = msg.payload();
        assert_eq!(payload.text, None);
        assert_eq!(payload.username, None);
    }

    #[test]
    fn test_payload_keeps_leading_indentation() {
        let mut msg = message();
        msg.text = "    indented line\nnext".to_string();
        assert_eq!(msg.payload().text.as_deref(), Some("    indented line\nnext"));
        assert!(
            msg.get_payload()
                .unwrap()
                .contains(r#""text": "    indented line\nnext""#)
        );
    }

    #[test]
    fn test_prepare_trims_webhook_url() {
        let mut msg = message();
        msg.url = Some(" https://chat.mydomain.com/hooks/abc \n".to_string());
        assert_eq!(msg.prepare().unwrap().url(), "https://chat.mydomain.com/hooks/abc");
    }

    #[test]
    fn test_payload_resolves_icon_shortcode() {
        let mut msg = message();
        msg.icon = Some(":angry:".to_string());
        let payload = msg.payload();
        assert_eq!(
            payload.icon_url.as_deref(),
            Some("https://chat.mydomain.com/static/emoji/1f620.png")
        );
        assert_eq!(payload.icon_emoji, None);
    }

    #[test]
    fn test_unresolvable_icon_is_dropped_from_payload() {
        let mut msg = message();
        msg.icon = Some(":definitely_not_an_emoji:".to_string());
        let json = msg.get_payload().unwrap();
        assert!(!json.contains("icon"), "unexpected icon key in {json}");
    }

    #[test]
    fn test_native_emoji_keeps_icon_emoji() {
        let mut msg = message().with_native_emoji(true);
        msg.icon = Some(":angry:".to_string());
        assert_eq!(msg.payload().icon_emoji.as_deref(), Some(":angry:"));
    }

    #[test]
    fn test_text_limit_applies_to_attachments() {
        let mut msg = message().with_text_limit(3);
        msg.attachments.push(Attachment::new("abcdef"));
        assert_eq!(msg.payload().attachments[0].text.as_deref(), Some("abc"));
    }

    #[test]
    fn test_prepare_requires_url() {
        let msg = Message {
            channel: Some("town-square".to_string()),
            ..Message::default()
        };
        let err = msg.prepare().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "Missing mattermost webhook URL");
    }

    #[test]
    fn test_prepare_requires_channel() {
        let msg = Message {
            url: Some(HOOK.to_string()),
            channel: Some(" ".to_string()),
            ..Message::default()
        };
        let err = msg.prepare().unwrap_err();
        assert_eq!(err.to_string(), "Missing destination channel");
    }

    #[test]
    fn test_attach_file_detects_syntax_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("source.coffee");
        std::fs::write(&path, "xxxx").unwrap();

        let mut msg = message();
        let attachment = msg
            .attach_file(&path, None, None, &SyntaxMode::Auto, false)
            .unwrap();
        assert_eq!(attachment.text, "```coffeescript\nxxxx```");
        assert_eq!(attachment.title.as_deref(), Some("source.coffee"));
        assert!(attachment.fields.is_empty());
    }

    #[test]
    fn test_attach_file_without_known_syntax_is_not_fenced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "plain words").unwrap();

        let mut msg = message();
        let attachment = msg
            .attach_file(&path, None, None, &SyntaxMode::Auto, false)
            .unwrap();
        assert_eq!(attachment.text, "plain words");
    }

    #[test]
    fn test_attach_file_explicit_text_wins_over_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Makefile");
        std::fs::write(&path, "on disk").unwrap();

        let mut msg = message();
        let attachment = msg
            .attach_file(&path, Some("all:".to_string()), None, &SyntaxMode::Auto, false)
            .unwrap();
        assert_eq!(attachment.text, "```makefile\nall:```");
    }

    #[test]
    fn test_attach_file_tabular_suppresses_syntax() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.py");
        std::fs::write(&path, "abc,def\nfoo,bar\n").unwrap();

        let mut msg = message();
        let attachment = msg
            .attach_file(
                &path,
                None,
                Some(TabularDialect::Sniff),
                &SyntaxMode::Named("python".to_string()),
                false,
            )
            .unwrap();
        assert_eq!(attachment.text, "| abc | def |\n| --- | --- |\n| foo | bar |");
    }

    #[test]
    fn test_attach_file_with_fileinfo_adds_short_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "x".repeat(5000)).unwrap();

        let mut msg = message();
        let attachment = msg
            .attach_file(&path, None, None, &SyntaxMode::None, true)
            .unwrap();
        assert_eq!(
            attachment.fields,
            vec![
                Field::new("Size", "4.9KiB", Some(true)),
                Field::new("Mime", "application/json", Some(true)),
            ]
        );
    }

    #[test]
    fn test_attach_file_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let mut msg = message();
        let err = msg
            .attach_file(&path, None, None, &SyntaxMode::Auto, false)
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_attachments_render_in_insertion_order() {
        let mut msg = message();
        msg.attachments.push(Attachment::new("one"));
        msg.attachments.push(Attachment::new("two"));
        let texts = msg
            .payload()
            .attachments
            .into_iter()
            .map(|a| a.text.unwrap())
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0.0B");
        assert_eq!(human_size(16), "16.0B");
        assert_eq!(human_size(5000), "4.9KiB");
        assert_eq!(human_size(1024 * 1024), "1.0MiB");
        assert_eq!(human_size(u64::MAX), "16.0EiB");
    }

    fn keys_in_order(json: &str) -> Vec<String> {
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        value
            .as_object()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default()
    }

    proptest! {
        #[test]
        fn prop_payload_keys_are_sorted_and_stable(
            text in ".{0,40}",
            username in proptest::option::of("[a-z]{0,10}"),
            icon in proptest::option::of(prop_oneof![
                Just(":smile:".to_string()),
                Just("http://x/i.png".to_string()),
                "[a-z]{1,8}",
            ]),
            attach in proptest::bool::ANY,
        ) {
            let mut msg = message();
            msg.text = text;
            msg.username = username;
            msg.icon = icon;
            if attach {
                msg.attachments.push(Attachment::new("body"));
            }

            let first = msg.get_payload().unwrap();
            let second = msg.get_payload().unwrap();
            prop_assert_eq!(&first, &second);

            // Raw key order as written, before any map reordering.
            let written = first
                .lines()
                .filter(|line| line.starts_with("    \"") && !line.starts_with("     "))
                .filter_map(|line| line.trim_start().strip_prefix('"'))
                .filter_map(|line| line.split_once("\":").map(|(key, _)| key.to_string()))
                .collect::<Vec<_>>();
            let mut sorted = written.clone();
            sorted.sort();
            prop_assert_eq!(&written, &sorted);
            prop_assert_eq!(written.len(), keys_in_order(&first).len());
        }
    }
}

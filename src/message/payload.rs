//! Wire payload and its deterministic JSON rendering.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::attachment::AttachmentPayload;
use crate::emoji::ResolvedIcon;
use crate::error::Result;

/// The JSON object POSTed to the webhook.
///
/// Keys are declared in lexicographic order and unset keys are skipped, so
/// the same message always serializes to the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Payload {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Payload {
    /// Set whichever icon key the resolved icon maps to, clearing the other.
    pub fn set_icon(&mut self, icon: Option<ResolvedIcon>) {
        self.icon_url = None;
        self.icon_emoji = None;
        match icon {
            Some(ResolvedIcon::Url(url)) => self.icon_url = Some(url),
            Some(ResolvedIcon::Emoji(emoji)) => self.icon_emoji = Some(emoji),
            None => {}
        }
    }

    /// Pretty JSON with four-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// The value as given, or `None` when it is blank.
pub(crate) fn present<S: AsRef<str>>(value: Option<S>) -> Option<String> {
    value
        .filter(|value| !value.as_ref().trim().is_empty())
        .map(|value| value.as_ref().to_string())
}

pub(crate) fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_is_empty_object() {
        assert_eq!(Payload::default().to_json().unwrap(), "{}");
    }

    #[test]
    fn test_keys_are_sorted_and_indented() {
        let payload = Payload {
            channel: Some("town-square".to_string()),
            text: Some("hi".to_string()),
            username: Some("bot".to_string()),
            icon_url: Some("http://x/y.png".to_string()),
            ..Payload::default()
        };
        assert_eq!(
            payload.to_json().unwrap(),
            "{\n    \"channel\": \"town-square\",\n    \"icon_url\": \"http://x/y.png\",\n    \"text\": \"hi\",\n    \"username\": \"bot\"\n}"
        );
    }

    #[test]
    fn test_set_icon_keeps_only_one_key() {
        let mut payload = Payload::default();
        payload.set_icon(Some(ResolvedIcon::Url("u".to_string())));
        payload.set_icon(Some(ResolvedIcon::Emoji("e".to_string())));
        assert_eq!(payload.icon_url, None);
        assert_eq!(payload.icon_emoji.as_deref(), Some("e"));
        payload.set_icon(None);
        assert_eq!(payload.icon_emoji, None);
    }

    #[test]
    fn test_present_keeps_whitespace_and_drops_blank() {
        assert_eq!(present(Some(" a ")), Some(" a ".to_string()));
        assert_eq!(present(Some(" \n")), None);
        assert_eq!(present(None::<&str>), None);
    }

    #[test]
    fn test_truncate_chars_short_input_unchanged() {
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}

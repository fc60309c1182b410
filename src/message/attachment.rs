//! Attachments: structured content blocks rendered below the message text.

use serde::Serialize;

use super::payload::{present, truncate_chars};

/// Attachment text and fallback longer than this are cut before sending.
/// Mattermost starts rejecting attachments somewhere near 4000 characters.
pub const DEFAULT_TEXT_LIMIT: usize = 3500;

/// One cell of an attachment's field grid.
///
/// Fields are declared in key order so serialized output is sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Render side by side with other short fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<bool>,
    pub title: String,
    pub value: String,
}

impl Field {
    pub fn new(title: impl Into<String>, value: impl Into<String>, short: Option<bool>) -> Self {
        Self {
            short,
            title: title.into(),
            value: value.into(),
        }
    }
}

/// A secondary block of content attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachment {
    pub text: String,
    /// Plain-text summary for clients that cannot render attachments.
    /// Defaults to `text`.
    pub fallback: Option<String>,
    pub color: Option<String>,
    pub pretext: Option<String>,
    pub author_name: Option<String>,
    pub author_link: Option<String>,
    pub author_icon: Option<String>,
    pub title: Option<String>,
    pub title_link: Option<String>,
    pub image_url: Option<String>,
    pub thumb_url: Option<String>,
    pub fields: Vec<Field>,
}

impl Attachment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn add_field(&mut self, title: impl Into<String>, value: impl Into<String>, short: bool) {
        self.fields.push(Field::new(title, value, Some(short)));
    }

    /// Freeze the attachment into its wire form, cutting `text` and
    /// `fallback` to `text_limit` characters.
    pub fn snapshot(&self, text_limit: usize) -> AttachmentPayload {
        let text = present(Some(&self.text)).map(|text| truncate_chars(&text, text_limit));
        let fallback = present(self.fallback.as_ref())
            .map(|fallback| truncate_chars(&fallback, text_limit))
            .or_else(|| text.clone());

        AttachmentPayload {
            author_icon: present(self.author_icon.as_ref()),
            author_link: present(self.author_link.as_ref()),
            author_name: present(self.author_name.as_ref()),
            color: present(self.color.as_ref()),
            fallback,
            fields: self.fields.clone(),
            image_url: present(self.image_url.as_ref()),
            pretext: present(self.pretext.as_ref()),
            text,
            thumb_url: present(self.thumb_url.as_ref()),
            title: present(self.title.as_ref()),
            title_link: present(self.title_link.as_ref()),
        }
    }
}

/// Serialized form of an [`Attachment`]. Unset keys are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_defaults_to_text() {
        let snapshot = Attachment::new("hello").snapshot(DEFAULT_TEXT_LIMIT);
        assert_eq!(snapshot.text.as_deref(), Some("hello"));
        assert_eq!(snapshot.fallback.as_deref(), Some("hello"));
    }

    #[test]
    fn test_explicit_fallback_is_kept() {
        let attachment = Attachment {
            fallback: Some("summary".to_string()),
            ..Attachment::new("long body")
        };
        let snapshot = attachment.snapshot(DEFAULT_TEXT_LIMIT);
        assert_eq!(snapshot.fallback.as_deref(), Some("summary"));
    }

    #[test]
    fn test_text_and_fallback_are_truncated() {
        let attachment = Attachment {
            fallback: Some("y".repeat(5000)),
            ..Attachment::new("x".repeat(5000))
        };
        let snapshot = attachment.snapshot(DEFAULT_TEXT_LIMIT);
        assert_eq!(snapshot.text.unwrap().chars().count(), 3500);
        assert_eq!(snapshot.fallback.unwrap().chars().count(), 3500);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let snapshot = Attachment::new("é".repeat(10)).snapshot(4);
        assert_eq!(snapshot.text.as_deref(), Some("éééé"));
    }

    #[test]
    fn test_empty_attachment_serializes_to_empty_object() {
        let snapshot = Attachment::default().snapshot(DEFAULT_TEXT_LIMIT);
        assert_eq!(serde_json::to_string(&snapshot).unwrap(), "{}");
    }

    #[test]
    fn test_unfenced_text_keeps_indentation() {
        let snapshot = Attachment::new("    indented\nnext\n").snapshot(DEFAULT_TEXT_LIMIT);
        assert_eq!(snapshot.text.as_deref(), Some("    indented\nnext\n"));
        assert_eq!(snapshot.fallback.as_deref(), Some("    indented\nnext\n"));
    }

    #[test]
    fn test_empty_strings_are_omitted() {
        let attachment = Attachment {
            color: Some(String::new()),
            title: Some("  ".to_string()),
            ..Attachment::new("body")
        };
        let json = serde_json::to_string(&attachment.snapshot(DEFAULT_TEXT_LIMIT)).unwrap();
        assert_eq!(json, r#"{"fallback":"body","text":"body"}"#);
    }

    #[test]
    fn test_fields_keep_falsy_values() {
        let mut attachment = Attachment::new("t");
        attachment.add_field("Count", "0", true);
        attachment.fields.push(Field::new("Note", "", None));
        let json = serde_json::to_string(&attachment.snapshot(DEFAULT_TEXT_LIMIT)).unwrap();
        assert_eq!(
            json,
            r#"{"fallback":"t","fields":[{"short":true,"title":"Count","value":"0"},{"title":"Note","value":""}],"text":"t"}"#
        );
    }
}

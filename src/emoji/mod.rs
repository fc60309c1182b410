//! Icon resolution for webhook messages.
//!
//! A user-supplied icon is either a URL or an emoji reference. Mattermost
//! webhooks do not render `icon_emoji` natively, so `:name:` shortcodes are
//! rewritten to the static emoji image the server itself hosts.

mod codes;

use std::collections::HashMap;

use once_cell::sync::Lazy;

static CODES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| codes::EMOJI_CODES.iter().copied().collect());

/// Image code for an emoji shortcode name (without colons).
pub fn emoji_code(name: &str) -> Option<&'static str> {
    CODES.get(name).copied()
}

/// The single icon key that ends up in a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIcon {
    Url(String),
    Emoji(String),
}

impl ResolvedIcon {
    /// Payload key for this icon.
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Url(_) => "icon_url",
            Self::Emoji(_) => "icon_emoji",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Url(value) | Self::Emoji(value) => value,
        }
    }
}

/// Classify and, where needed, rewrite a raw icon reference.
///
/// `native_emoji` tells whether the server renders `icon_emoji` itself; when
/// it does not, `:name:` becomes an `icon_url` under the webhook's origin.
/// A shortcode with no known image is dropped and `None` is returned.
pub fn resolve_icon(icon: &str, webhook_url: &str, native_emoji: bool) -> Option<ResolvedIcon> {
    let icon = icon.trim();
    if icon.is_empty() {
        return None;
    }
    if icon.contains("://") {
        return Some(ResolvedIcon::Url(icon.to_string()));
    }

    let shortcode = icon
        .strip_prefix(':')
        .and_then(|rest| rest.strip_suffix(':'))
        .filter(|name| !name.is_empty());
    let Some(name) = shortcode.filter(|_| !native_emoji) else {
        return Some(ResolvedIcon::Emoji(icon.to_string()));
    };

    let Some(code) = emoji_code(name) else {
        tracing::warn!(icon, "no image for emoji shortcode, dropping icon");
        return None;
    };
    match webhook_url.split_once("/hooks/") {
        Some((origin, _)) => Some(ResolvedIcon::Url(format!(
            "{origin}/static/emoji/{code}.png"
        ))),
        None => {
            tracing::debug!(icon, "webhook URL has no /hooks/ segment, keeping shortcode");
            Some(ResolvedIcon::Emoji(icon.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HOOK: &str = "https://chat.mydomain.com/hooks/abcdefghi123456";

    #[test]
    fn test_url_icon_is_passed_through() {
        let icon = resolve_icon("https://example.com/bot.png", HOOK, false);
        assert_eq!(
            icon,
            Some(ResolvedIcon::Url("https://example.com/bot.png".to_string()))
        );
        assert_eq!(icon.unwrap().field_name(), "icon_url");
    }

    #[test]
    fn test_shortcode_is_rewritten_to_static_image() {
        let icon = resolve_icon(":angry:", HOOK, false).unwrap();
        assert_eq!(icon.field_name(), "icon_url");
        assert_eq!(
            icon.value(),
            "https://chat.mydomain.com/static/emoji/1f620.png"
        );
    }

    #[test]
    fn test_mattermost_only_emoji_uses_its_name() {
        let icon = resolve_icon(":mattermost:", HOOK, false).unwrap();
        assert_eq!(
            icon.value(),
            "https://chat.mydomain.com/static/emoji/mattermost.png"
        );
    }

    #[test]
    fn test_unknown_shortcode_is_dropped() {
        assert_eq!(resolve_icon(":no_such_emoji_here:", HOOK, false), None);
    }

    #[test]
    fn test_bare_emoji_name_stays_emoji() {
        assert_eq!(
            resolve_icon("angry", HOOK, false),
            Some(ResolvedIcon::Emoji("angry".to_string()))
        );
    }

    #[test]
    fn test_native_emoji_keeps_shortcode() {
        assert_eq!(
            resolve_icon(":angry:", HOOK, true),
            Some(ResolvedIcon::Emoji(":angry:".to_string()))
        );
    }

    #[test]
    fn test_icon_is_trimmed() {
        let icon = resolve_icon("  :smile:\n", HOOK, false).unwrap();
        assert_eq!(
            icon.value(),
            "https://chat.mydomain.com/static/emoji/1f604.png"
        );
        assert_eq!(resolve_icon("   ", HOOK, false), None);
    }

    #[test]
    fn test_lone_colons_are_not_a_shortcode() {
        assert_eq!(
            resolve_icon("::", HOOK, false),
            Some(ResolvedIcon::Emoji("::".to_string()))
        );
        assert_eq!(
            resolve_icon(":", HOOK, false),
            Some(ResolvedIcon::Emoji(":".to_string()))
        );
    }

    #[test]
    fn test_webhook_without_hooks_segment_keeps_shortcode() {
        assert_eq!(
            resolve_icon(":angry:", "https://chat.example.com/incoming/x", false),
            Some(ResolvedIcon::Emoji(":angry:".to_string()))
        );
    }

    #[test]
    fn test_common_shortcodes_resolve() {
        let cases = [
            ("robot_face", "1f916"),
            ("information_source", "2139"),
            ("no_entry_sign", "1f6ab"),
            ("hammer_and_wrench", "1f6e0"),
            ("thinking_face", "1f914"),
            ("white_check_mark", "2705"),
            ("rotating_light", "1f6a8"),
            ("flag-us", "1f1fa-1f1f8"),
            ("man_technologist", "1f468-200d-1f4bb"),
        ];
        for (name, code) in cases {
            assert_eq!(
                resolve_icon(&format!(":{name}:"), HOOK, false),
                Some(ResolvedIcon::Url(format!(
                    "https://chat.mydomain.com/static/emoji/{code}.png"
                ))),
                "{name}"
            );
        }
    }

    #[test]
    fn test_table_covers_full_emoji_set() {
        assert!(codes::EMOJI_CODES.len() > 1500);
        assert!(codes::EMOJI_CODES.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_table_has_no_duplicate_names() {
        assert_eq!(CODES.len(), codes::EMOJI_CODES.len());
    }

    proptest! {
        #[test]
        fn prop_url_icons_are_never_rewritten(
            scheme in "[a-z]{2,8}",
            rest in "[a-zA-Z0-9./:_-]{0,40}",
        ) {
            let icon = format!("{scheme}://{rest}");
            prop_assert_eq!(
                resolve_icon(&icon, HOOK, false),
                Some(ResolvedIcon::Url(icon.clone()))
            );
        }

        #[test]
        fn prop_known_shortcodes_point_at_origin(index in 0..codes::EMOJI_CODES.len()) {
            let (name, code) = codes::EMOJI_CODES[index];
            let icon = resolve_icon(&format!(":{name}:"), HOOK, false);
            prop_assert_eq!(
                icon,
                Some(ResolvedIcon::Url(format!(
                    "https://chat.mydomain.com/static/emoji/{code}.png"
                )))
            );
        }

        #[test]
        fn prop_colonless_names_stay_emoji(name in "[a-z_]{1,20}") {
            prop_assert_eq!(
                resolve_icon(&name, HOOK, false),
                Some(ResolvedIcon::Emoji(name.clone()))
            );
        }
    }
}

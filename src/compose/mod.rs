//! One-call message composition.
//!
//! [`ComposeRequest`] captures everything the command line can ask for and
//! turns it into a [`Message`]: options are merged with the configuration,
//! inline text goes into the body, and the input is either attached as a
//! file or formatted and appended to the body.

use std::io::Read;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_SECTION, MessageOptions, load_config};
use crate::error::{Error, Result};
use crate::highlight::{SyntaxMode, fence};
use crate::message::Message;
use crate::tabular::{TabularDialect, format_table};

/// Separator between inline message text and appended content.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Where the content of a message comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    /// Only the inline message text.
    #[default]
    None,
    /// Text read from standard input or supplied directly.
    Text(String),
    /// A file to attach.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeRequest {
    /// Explicit options; these win over the configuration.
    pub options: MessageOptions,
    /// Explicit configuration file instead of the default locations.
    pub config_file: Option<PathBuf>,
    pub section: String,
    /// Inline message text.
    pub message: Option<String>,
    pub input: Input,
    /// Format the input as a table using this dialect.
    pub tabular: Option<TabularDialect>,
    pub syntax: SyntaxMode,
    /// Add size and MIME fields to an attached file.
    pub fileinfo: bool,
    pub native_emoji: bool,
}

impl Default for ComposeRequest {
    fn default() -> Self {
        Self {
            options: MessageOptions::default(),
            config_file: None,
            section: DEFAULT_SECTION.to_string(),
            message: None,
            input: Input::None,
            tabular: None,
            syntax: SyntaxMode::Auto,
            fileinfo: false,
            native_emoji: false,
        }
    }
}

impl ComposeRequest {
    /// Load the configuration this request points at and compose.
    ///
    /// # Errors
    ///
    /// See [`load_config`] and [`ComposeRequest::compose_with`].
    pub fn compose(&self) -> Result<Message> {
        let config = load_config(self.config_file.as_deref())?;
        self.compose_with(&config)
    }

    /// Compose against an already loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown section, and any error
    /// from reading, decoding or formatting the input.
    pub fn compose_with(&self, config: &Config) -> Result<Message> {
        let options = config.section(&self.section)?.union(&self.options);
        let mut message = Message::from_options(&options).with_native_emoji(self.native_emoji);

        if let Some(text) = &self.message {
            message.append(text, None);
        }

        match &self.input {
            Input::None => {}
            Input::Text(text) => {
                let content = format_inline(text, self.tabular, &self.syntax)?;
                message.append(&content, Some(PARAGRAPH_SEPARATOR));
            }
            Input::File(path) => {
                tracing::debug!(file = %path.display(), "attaching file");
                message.attach_file(path, None, self.tabular, &self.syntax, self.fileinfo)?;
            }
        }

        Ok(message)
    }
}

/// Format text that has no file name behind it.
///
/// There is nothing to detect a syntax from, so `auto` behaves like `none`.
///
/// # Errors
///
/// Returns an error if tabular formatting fails.
pub fn format_inline(
    text: &str,
    tabular: Option<TabularDialect>,
    syntax: &SyntaxMode,
) -> Result<String> {
    if let Some(dialect) = tabular {
        return format_table(text, dialect);
    }
    Ok(match syntax.resolve(None, None) {
        Some(tag) => fence(text, &tag),
        None => text.to_string(),
    })
}

/// Read all of standard input as UTF-8 text.
///
/// # Errors
///
/// Returns an IO error if stdin cannot be read and a decode error if it is
/// not UTF-8.
pub fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin().lock().read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: "<stdin>".to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::parse(
            "[DEFAULT]\nurl=https://chat.mydomain.com/hooks/abcdefghi123456\n\n[angrybot]\nicon = :angry:\nusername = AngryBot\n",
        )
        .unwrap()
    }

    fn request() -> ComposeRequest {
        ComposeRequest {
            options: MessageOptions {
                channel: Some("town-square".to_string()),
                ..MessageOptions::default()
            },
            ..ComposeRequest::default()
        }
    }

    #[test]
    fn test_options_come_from_section_and_cli() {
        let req = ComposeRequest {
            section: "angrybot".to_string(),
            ..request()
        };
        let msg = req.compose_with(&config()).unwrap();
        assert_eq!(msg.channel.as_deref(), Some("town-square"));
        assert_eq!(msg.username.as_deref(), Some("AngryBot"));
        assert_eq!(msg.icon.as_deref(), Some(":angry:"));
        assert_eq!(
            msg.url.as_deref(),
            Some("https://chat.mydomain.com/hooks/abcdefghi123456")
        );
    }

    #[test]
    fn test_cli_url_overrides_config() {
        let mut req = request();
        req.options.url = Some("http://chat.net/hooks/abdegh12".to_string());
        let msg = req.compose_with(&config()).unwrap();
        assert_eq!(msg.url.as_deref(), Some("http://chat.net/hooks/abdegh12"));
    }

    #[test]
    fn test_message_and_stdin_text_are_joined() {
        let req = ComposeRequest {
            message: Some("test message".to_string()),
            input: Input::Text("text/x-diff diff".to_string()),
            ..request()
        };
        let msg = req.compose_with(&config()).unwrap();
        assert_eq!(msg.text, "test message\n\ntext/x-diff diff");
    }

    #[test]
    fn test_stdin_alone_has_no_leading_separator() {
        let req = ComposeRequest {
            input: Input::Text("only stdin".to_string()),
            ..request()
        };
        assert_eq!(req.compose_with(&config()).unwrap().text, "only stdin");
    }

    #[test]
    fn test_stdin_tabular() {
        let req = ComposeRequest {
            input: Input::Text("abc,def\nfoo,bar\n".to_string()),
            tabular: Some(TabularDialect::Sniff),
            ..request()
        };
        assert_eq!(
            req.compose_with(&config()).unwrap().text,
            "| abc | def |\n| --- | --- |\n| foo | bar |"
        );
    }

    #[test]
    fn test_inline_auto_syntax_does_not_fence() {
        assert_eq!(format_inline("x", None, &SyntaxMode::Auto).unwrap(), "x");
    }

    #[test]
    fn test_inline_named_syntax_fences() {
        assert_eq!(
            format_inline("x = 1", None, &SyntaxMode::Named("python".to_string())).unwrap(),
            "```python\nx = 1```"
        );
    }

    #[test]
    fn test_unknown_section_fails() {
        let req = ComposeRequest {
            section: "ghost".to_string(),
            ..request()
        };
        assert!(matches!(req.compose_with(&config()), Err(Error::Config(_))));
    }
}

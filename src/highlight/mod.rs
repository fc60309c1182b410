//! Syntax detection for attached files.
//!
//! Maps a MIME type or file name to the language tag Mattermost uses to
//! highlight a fenced code block. Detection only produces a hint; the caller
//! decides whether to fence at all.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

/// Language tags Mattermost knows how to highlight.
pub const SYNTAXES: &[&str] = &[
    "diff",
    "apache",
    "makefile",
    "http",
    "json",
    "markdown",
    "javascript",
    "css",
    "nginx",
    "objectivec",
    "python",
    "xml",
    "perl",
    "bash",
    "php",
    "coffeescript",
    "cs",
    "cpp",
    "sql",
    "go",
    "ruby",
    "java",
    "ini",
    "latex",
];

const MIME_TO_SYNTAX: &[(&str, &str)] = &[
    ("text/x-diff", "diff"),
    ("text/x-patch", "diff"),
    ("application/json", "json"),
    ("application/x-javascript", "javascript"),
    ("text/x-python", "python"),
    ("application/xml", "xml"),
    ("text/x-perl", "perl"),
    ("text/x-sh", "bash"),
    ("text/x-csrc", "cpp"),
    ("text/x-chdr", "cpp"),
    ("text/x-c++src", "cpp"),
    ("text/x-c++hdr", "cpp"),
    ("text/x-c", "cpp"),
    ("application/x-sql", "sql"),
    ("application/x-ruby", "ruby"),
    ("text/x-java-source", "java"),
    ("application/x-latex", "latex"),
];

// Keys are either a dotted extension or an exact basename.
const EXT_TO_SYNTAX: &[(&str, &str)] = &[
    ("Makefile", "makefile"),
    ("GNUmakefile", "makefile"),
    (".mk", "makefile"),
    (".htaccess", "apache"),
    (".diff", "diff"),
    (".patch", "diff"),
    (".json", "json"),
    (".md", "markdown"),
    (".markdown", "markdown"),
    (".js", "javascript"),
    (".css", "css"),
    (".m", "objectivec"),
    (".py", "python"),
    (".xml", "xml"),
    (".pl", "perl"),
    (".sh", "bash"),
    (".php", "php"),
    (".phtml", "php"),
    (".phps", "php"),
    (".php3", "php"),
    (".php4", "php"),
    (".php5", "php"),
    (".php7", "php"),
    (".coffee", "coffeescript"),
    (".cs", "cs"),
    (".c", "cpp"),
    (".cc", "cpp"),
    (".cxx", "cpp"),
    (".cpp", "cpp"),
    (".h", "cpp"),
    (".hh", "cpp"),
    (".dic", "cpp"),
    (".sql", "sql"),
    (".go", "go"),
    (".rb", "ruby"),
    (".java", "java"),
    (".ini", "ini"),
    (".latex", "latex"),
    (".tex", "latex"),
];

static MIME_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| MIME_TO_SYNTAX.iter().copied().collect());

static EXT_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| EXT_TO_SYNTAX.iter().copied().collect());

/// Detect the highlighting language for a file.
///
/// The MIME type wins over the extension. Files without an extension
/// (`Makefile`, `.htaccess`) are looked up by their whole basename.
pub fn detect_syntax(basename: &str, mime: Option<&str>) -> Option<&'static str> {
    if let Some(syntax) = mime.and_then(|mime| MIME_TABLE.get(mime).copied()) {
        return Some(syntax);
    }

    EXT_TABLE.get(extension_or_basename(basename)).copied()
}

/// Text after the last dot, dot included; the whole basename for dotfiles
/// and names without any dot.
fn extension_or_basename(basename: &str) -> &str {
    let stem_start = basename.len() - basename.trim_start_matches('.').len();
    match basename[stem_start..].rfind('.') {
        Some(idx) => &basename[stem_start + idx..],
        None => basename,
    }
}

/// What to do about code fencing for a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyntaxMode {
    /// Detect from the file name and MIME type.
    #[default]
    Auto,
    /// Never fence.
    None,
    /// Fence without a language tag.
    Plain,
    /// Fence with this language tag.
    Named(String),
}

impl SyntaxMode {
    /// Resolve to the fence tag to use, if any. `Some("")` means a bare fence.
    pub fn resolve(&self, basename: Option<&str>, mime: Option<&str>) -> Option<String> {
        match self {
            Self::Auto => basename
                .and_then(|name| detect_syntax(name, mime))
                .map(ToOwned::to_owned),
            Self::None => None,
            Self::Plain => Some(String::new()),
            Self::Named(tag) => Some(tag.clone()),
        }
    }
}

impl FromStr for SyntaxMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "none" => Ok(Self::None),
            "plain" => Ok(Self::Plain),
            tag if SYNTAXES.contains(&tag) => Ok(Self::Named(tag.to_string())),
            other => Err(format!(
                "unknown syntax '{other}' (expected auto, none, plain or one of: {})",
                SYNTAXES.join(", ")
            )),
        }
    }
}

impl fmt::Display for SyntaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::None => f.write_str("none"),
            Self::Plain => f.write_str("plain"),
            Self::Named(tag) => f.write_str(tag),
        }
    }
}

/// Wrap text in a fenced code block. `plain` and the empty tag produce a
/// fence without a language.
pub fn fence(code: &str, syntax: &str) -> String {
    let tag = if syntax == "plain" { "" } else { syntax };
    format!("```{tag}\n{code}```")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(detect_syntax("source.coffee", None), Some("coffeescript"));
        assert_eq!(detect_syntax("main.c", None), Some("cpp"));
        assert_eq!(detect_syntax("index.php5", None), Some("php"));
    }

    #[test]
    fn test_mime_wins_over_extension() {
        assert_eq!(detect_syntax("script.js", Some("text/x-python")), Some("python"));
    }

    #[test]
    fn test_unknown_mime_falls_back_to_extension() {
        assert_eq!(detect_syntax("data.json", Some("text/plain")), Some("json"));
    }

    #[test]
    fn test_detect_by_exact_basename() {
        assert_eq!(detect_syntax("Makefile", None), Some("makefile"));
    }

    #[test]
    fn test_dotfile_resolves_by_basename() {
        assert_eq!(detect_syntax(".htaccess", None), Some("apache"));
        assert_eq!(extension_or_basename(".htaccess"), ".htaccess");
    }

    #[test]
    fn test_dotfile_with_extension_uses_extension() {
        assert_eq!(extension_or_basename(".profile.sh"), ".sh");
    }

    #[test]
    fn test_unknown_file_has_no_syntax() {
        assert_eq!(detect_syntax("notes.txt", None), None);
        assert_eq!(detect_syntax("README", None), None);
        assert_eq!(detect_syntax("trailing.", None), None);
    }

    #[test]
    fn test_only_last_extension_counts() {
        assert_eq!(detect_syntax("dump.sql.gz", None), None);
        assert_eq!(detect_syntax("backup.tar.py", None), Some("python"));
    }

    #[test]
    fn test_fence_with_tag() {
        assert_eq!(fence("xxxx", "coffeescript"), "```coffeescript\nxxxx```");
    }

    #[test]
    fn test_fence_plain_has_no_tag() {
        assert_eq!(fence("x", "plain"), "```\nx```");
        assert_eq!(fence("x", ""), "```\nx```");
    }

    #[test]
    fn test_syntax_mode_parses_known_tags() {
        assert_eq!("auto".parse::<SyntaxMode>(), Ok(SyntaxMode::Auto));
        assert_eq!("none".parse::<SyntaxMode>(), Ok(SyntaxMode::None));
        assert_eq!("plain".parse::<SyntaxMode>(), Ok(SyntaxMode::Plain));
        assert_eq!(
            "python".parse::<SyntaxMode>(),
            Ok(SyntaxMode::Named("python".to_string()))
        );
        assert!("brainfuck".parse::<SyntaxMode>().is_err());
    }

    #[test]
    fn test_syntax_mode_resolve() {
        assert_eq!(
            SyntaxMode::Auto.resolve(Some("a.rb"), None),
            Some("ruby".to_string())
        );
        assert_eq!(SyntaxMode::Auto.resolve(None, None), None);
        assert_eq!(SyntaxMode::None.resolve(Some("a.rb"), None), None);
        assert_eq!(SyntaxMode::Plain.resolve(None, None), Some(String::new()));
        assert_eq!(
            SyntaxMode::Named("go".to_string()).resolve(Some("a.rb"), None),
            Some("go".to_string())
        );
    }

    #[test]
    fn test_every_table_entry_is_a_known_syntax() {
        for (_, syntax) in MIME_TO_SYNTAX.iter().chain(EXT_TO_SYNTAX) {
            assert!(SYNTAXES.contains(syntax), "{syntax} missing from SYNTAXES");
        }
    }
}

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// A YAML tag split into handle and suffix.
///
/// The lexer only hands out the raw text of a tag token; this type is for callers that need to
/// look at its parts.
#[derive(Clone, PartialEq, Debug, Eq, Ord, PartialOrd, Hash)]
pub struct Tag {
    /// Handle of the tag (`!`, `!!` or `!name!`). Empty for verbatim tags.
    pub handle: String,
    /// The suffix of the tag, or the whole URI of a verbatim tag.
    pub suffix: String,
}

impl Tag {
    /// Splits the value of a lexed tag token.
    ///
    /// Shorthand values keep their leading `!` (`!!str`, `!e!foo`, `!local`), verbatim values
    /// keep their delimiters (`!<tag:yaml.org,2002:str>`). A verbatim value cut short by the end
    /// of input has no closing `>`. A value without a leading `!` is taken as a bare URI.
    #[must_use]
    pub fn from_token_value(value: &str) -> Tag {
        if let Some(uri) = value.strip_prefix("!<") {
            return Tag {
                handle: String::new(),
                suffix: uri.strip_suffix('>').unwrap_or(uri).to_string(),
            };
        }
        let Some(rest) = value.strip_prefix('!') else {
            return Tag {
                handle: String::new(),
                suffix: value.to_string(),
            };
        };
        match rest.find('!') {
            Some(pos) => Tag {
                handle: value[..pos + 2].to_string(),
                suffix: rest[pos + 1..].to_string(),
            },
            None => Tag {
                handle: "!".to_string(),
                suffix: rest.to_string(),
            },
        }
    }

    #[must_use]
    pub fn is_verbatim(&self) -> bool {
        self.handle.is_empty()
    }

    /// Returns whether the tag uses the secondary handle (`!!str`, `!!int`, ...).
    ///
    /// Without `%TAG` directives the secondary handle stands for `tag:yaml.org,2002:`, so this
    /// tells whether the tag is from the YAML core schema.
    #[must_use]
    pub fn is_yaml_core_schema(&self) -> bool {
        self.handle == "!!"
    }

    /// Suffix with `%xx` URI escapes decoded.
    ///
    /// Falls back to the raw suffix when the escapes don't decode to valid UTF-8.
    #[must_use]
    pub fn decoded_suffix(&self) -> Cow<'_, str> {
        urlencoding::decode(&self.suffix).unwrap_or(Cow::Borrowed(&self.suffix))
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_verbatim() {
            write!(f, "!<{}>", self.suffix)
        } else {
            write!(f, "{}{}", self.handle, self.suffix)
        }
    }
}

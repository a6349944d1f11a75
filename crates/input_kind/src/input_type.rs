//! The fixed set of `<input type>` keywords treated as text-capable.

use std::fmt;
use std::str::FromStr;

/// An `<input>` subtype that accepts and edits character input.
///
/// The variants are the complete set; any keyword that does not map to one of
/// them (`checkbox`, `radio`, `file`, `hidden`, custom values, ...) is not a
/// text input type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextInputType {
    Text,
    Number,
    Range,
    Color,
    Date,
    Datetime,
    DatetimeLocal,
    Email,
    Month,
    Password,
    Search,
    Tel,
    Time,
    Url,
    Week,
}

/// Canonical lower-case keywords of every [`TextInputType`], in declaration order.
pub const TEXT_INPUT_TYPES: &[&str] = &[
    "text",
    "number",
    "range",
    "color",
    "date",
    "datetime",
    "datetime-local",
    "email",
    "month",
    "password",
    "search",
    "tel",
    "time",
    "url",
    "week",
];

impl TextInputType {
    pub const ALL: [TextInputType; 15] = [
        TextInputType::Text,
        TextInputType::Number,
        TextInputType::Range,
        TextInputType::Color,
        TextInputType::Date,
        TextInputType::Datetime,
        TextInputType::DatetimeLocal,
        TextInputType::Email,
        TextInputType::Month,
        TextInputType::Password,
        TextInputType::Search,
        TextInputType::Tel,
        TextInputType::Time,
        TextInputType::Url,
        TextInputType::Week,
    ];

    /// Canonical lower-case keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            TextInputType::Text => "text",
            TextInputType::Number => "number",
            TextInputType::Range => "range",
            TextInputType::Color => "color",
            TextInputType::Date => "date",
            TextInputType::Datetime => "datetime",
            TextInputType::DatetimeLocal => "datetime-local",
            TextInputType::Email => "email",
            TextInputType::Month => "month",
            TextInputType::Password => "password",
            TextInputType::Search => "search",
            TextInputType::Tel => "tel",
            TextInputType::Time => "time",
            TextInputType::Url => "url",
            TextInputType::Week => "week",
        }
    }

    /// Look up a keyword, ignoring ASCII case.
    ///
    /// The keyword is not trimmed; `" text"` is not a member.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        // Longest keyword is "datetime-local"; anything longer cannot match.
        if keyword.is_empty() || keyword.len() > 14 {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(keyword))
    }
}

/// Returns `true` if `keyword` names a text-capable `<input>` subtype.
#[inline]
pub fn is_text_input_type(keyword: &str) -> bool {
    TextInputType::from_keyword(keyword).is_some()
}

impl fmt::Display for TextInputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a keyword outside the text-input-type set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownInputType {
    keyword: String,
}

impl UnknownInputType {
    /// The rejected keyword, as given.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

impl fmt::Display for UnknownInputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a text input type: {:?}", self.keyword)
    }
}

impl std::error::Error for UnknownInputType {}

impl FromStr for TextInputType {
    type Err = UnknownInputType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| UnknownInputType {
            keyword: s.to_string(),
        })
    }
}

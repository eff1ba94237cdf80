use serde::Deserialize;
use serde::de::IgnoredAny;
use shelf_parse::title_tokens;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const PUB_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// A loosely typed JSON field. Strings and numbers carry text, anything else
/// (`null`, booleans, objects, arrays) is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Number(serde_json::Number),
    Other(IgnoredAny),
}

impl Scalar {
    pub fn into_text(self) -> Option<String> {
        match self {
            Scalar::String(s) => Some(s),
            Scalar::Number(n) => Some(n.to_string()),
            Scalar::Other(_) => None,
        }
    }
}

/// Text of an optional loosely typed field, empty when missing or unusable.
pub fn text(value: Option<Scalar>) -> String {
    value.and_then(Scalar::into_text).unwrap_or_default()
}

/// A field that is sometimes a list of values and sometimes a single one.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(v) => v,
            OneOrMany::One(v) => vec![v],
        }
    }
}

/// Flatten an optional identifier field into a list, dropping blank and
/// non-scalar entries.
pub fn identifier_list(value: Option<OneOrMany<Scalar>>) -> Vec<String> {
    value
        .map(Vec::from)
        .unwrap_or_default()
        .into_iter()
        .filter_map(Scalar::into_text)
        .filter(|v| !v.trim().is_empty())
        .collect()
}

/// Tokenize `query` and percent-encode each token, joined with `+`.
/// Falls back to the raw query when it has no tokens.
pub fn encode_query(query: &str) -> String {
    let tokens = title_tokens(query, false);
    if tokens.is_empty() {
        return query.to_string();
    }
    tokens
        .iter()
        .map(|t| urlencoding::encode(t))
        .collect::<Vec<_>>()
        .join("+")
}

/// Returns `value` if it is a real `YYYY-MM-DD` date, otherwise an empty string.
pub fn parse_pub_date(value: &str) -> String {
    let well_formed = value.len() == 10 && value.starts_with(|c: char| c.is_ascii_digit());
    if well_formed && Date::parse(value, PUB_DATE_FORMAT).is_ok() {
        value.to_string()
    } else {
        String::new()
    }
}

pub fn parse_cover(cover: Option<&str>, generic_cover: &str) -> String {
    match cover.filter(|c| !c.is_empty()) {
        Some(cover) => {
            let cover = cover.replace("&edge=curl", "");
            match cover.strip_prefix("http://") {
                Some(rest) => format!("https://{rest}"),
                None => cover,
            }
        }
        None => generic_cover.to_string(),
    }
}

/// The most specific category of a `>` separated category path.
pub fn parse_tags(category_name: Option<&str>) -> Vec<String> {
    category_name
        .and_then(|c| c.rsplit('>').next())
        .filter(|tag| !tag.is_empty())
        .map(|tag| vec![tag.to_string()])
        .unwrap_or_default()
}

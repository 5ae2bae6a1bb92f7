//! Filename templates with `${name}` placeholders.
//!
//! A template such as `/data/M42/${token}-stacked.${extension}` is parsed once
//! into literal and placeholder segments. It can then be split into a static
//! search root plus the remaining pattern, matched against candidate paths
//! to recover the placeholder values, or filled in from a [`Binding`].

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{AstroError, Result};

const SEPARATOR: char = '/';
const OPEN: &str = "${";
const CLOSE: char = '}';

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed, validated path template.
#[derive(Clone, Debug)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
    /// Byte offset of the first `${` in `raw`.
    first_placeholder: Option<usize>,
    pattern: Regex,
}

/// The static root of a template and the pattern that follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitTemplate {
    pub root: String,
    pub remainder: String,
    /// Whether a separator was dropped between `root` and `remainder`.
    separated: bool,
}

impl SplitTemplate {
    /// Reassemble the original template.
    pub fn rejoin(&self) -> String {
        if self.separated {
            format!("{}{}{}", self.root, SEPARATOR, self.remainder)
        } else {
            format!("{}{}", self.root, self.remainder)
        }
    }

    pub fn as_parts(&self) -> (&str, &str) {
        (&self.root, &self.remainder)
    }
}

/// Placeholder values captured from one path, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Binding {
    entries: Vec<(String, String)>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set `name` to `value`, keeping its position if it is already bound.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Binding {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut binding = Binding::new();
        for (name, value) in iter {
            binding.insert(name, value);
        }
        binding
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateMatch {
    pub path: String,
    pub binding: Binding,
}

impl PathTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut literal = String::new();
        let mut first_placeholder = None;
        let mut rest = template;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            literal.push_str(&rest[..start]);
            let after = &rest[start + OPEN.len()..];
            let end = after.find(CLOSE).ok_or_else(|| {
                AstroError::invalid_template(
                    template,
                    format!("unterminated placeholder at byte {}", offset + start),
                )
            })?;
            let name = &after[..end];

            if name.is_empty() {
                return Err(AstroError::invalid_template(template, "empty placeholder name"));
            }
            if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
                return Err(AstroError::invalid_template(
                    template,
                    format!("placeholder name {name:?} is not an identifier"),
                ));
            }
            if segments
                .iter()
                .any(|s| matches!(s, Segment::Placeholder(n) if n == name))
            {
                return Err(AstroError::invalid_template(
                    template,
                    format!("placeholder ${{{name}}} appears more than once"),
                ));
            }

            if literal.is_empty() {
                if let Some(Segment::Placeholder(previous)) = segments.last() {
                    return Err(AstroError::invalid_template(
                        template,
                        format!("placeholders ${{{previous}}} and ${{{name}}} are not separated"),
                    ));
                }
            } else {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }

            if first_placeholder.is_none() {
                first_placeholder = Some(offset + start);
            }
            segments.push(Segment::Placeholder(name.to_string()));

            let consumed = start + OPEN.len() + end + CLOSE.len_utf8();
            offset += consumed;
            rest = &rest[consumed..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let pattern = compile(&segments)?;
        Ok(Self {
            raw: template.to_string(),
            segments,
            first_placeholder,
            pattern,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    pub fn has_placeholders(&self) -> bool {
        self.first_placeholder.is_some()
    }

    /// Split into the placeholder-free directory prefix and the rest.
    ///
    /// The separator ending the root is dropped unless it is the leading `/`
    /// of an absolute path, in which case the root is `/`.
    pub fn split(&self) -> SplitTemplate {
        let Some(first) = self.first_placeholder else {
            return SplitTemplate {
                root: self.raw.clone(),
                remainder: String::new(),
                separated: false,
            };
        };

        match self.raw[..first].rfind(SEPARATOR) {
            None => SplitTemplate {
                root: String::new(),
                remainder: self.raw.clone(),
                separated: false,
            },
            Some(0) => SplitTemplate {
                root: SEPARATOR.to_string(),
                remainder: self.raw[1..].to_string(),
                separated: false,
            },
            Some(i) => SplitTemplate {
                root: self.raw[..i].to_string(),
                remainder: self.raw[i + 1..].to_string(),
                separated: true,
            },
        }
    }

    /// Match a single path, returning the captured binding.
    pub fn match_path(&self, path: &str) -> Option<Binding> {
        let captures = self.pattern.captures(path)?;
        let entries = self
            .placeholders()
            .zip(captures.iter().skip(1))
            .map(|(name, group)| {
                let value = group.map_or("", |m| m.as_str());
                (name.to_string(), value.to_string())
            })
            .collect();
        Some(Binding { entries })
    }

    /// The candidates that match, in their original order.
    pub fn matches<I, S>(&self, paths: I) -> Vec<TemplateMatch>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .filter_map(|path| {
                let path = path.as_ref();
                self.match_path(path).map(|binding| TemplateMatch {
                    path: path.to_string(),
                    binding,
                })
            })
            .collect()
    }

    /// Fill every placeholder from `binding`.
    pub fn substitute(&self, binding: &Binding) -> Result<String> {
        let mut out = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = binding
                        .get(name)
                        .ok_or_else(|| AstroError::MissingBinding(name.clone()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

fn compile(segments: &[Segment]) -> Result<Regex> {
    let mut pattern = String::from("(?s)^");
    for segment in segments {
        match segment {
            Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
            Segment::Placeholder(_) => pattern.push_str("(.*)"),
        }
    }
    pattern.push('$');
    Ok(Regex::new(&pattern)?)
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for PathTemplate {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

pub fn split_path_template(template: &str) -> Result<SplitTemplate> {
    Ok(PathTemplate::parse(template)?.split())
}

pub fn paths_matching_template<I, S>(template: &str, paths: I) -> Result<Vec<TemplateMatch>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(PathTemplate::parse(template)?.matches(paths))
}

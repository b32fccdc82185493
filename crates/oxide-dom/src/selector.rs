//! A small CSS selector subset.
//!
//! Supported: type selectors, `*`, `.class`, `#id`, attribute selectors
//! (`[attr]`, `[attr="v"]`, `[attr^="v"]`, `[attr*="v"]`), `:not(...)` over a
//! compound selector, and comma-separated selector lists. Combinators are not
//! supported.

use std::fmt;
use std::str::FromStr;

use crate::error::{DomError, Result};
use crate::node::Element;

/// How an attribute selector compares the attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrOp {
    /// `[attr]`
    Exists,
    /// `[attr="v"]`
    Equals(String),
    /// `[attr^="v"]`
    Prefix(String),
    /// `[attr*="v"]`
    Contains(String),
}

/// One attribute selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrMatcher {
    pub name: String,
    pub op: AttrOp,
}

impl AttrMatcher {
    fn matches(&self, el: &Element) -> bool {
        if self.name == "class" {
            let joined = el.classes().join(" ");
            return match &self.op {
                AttrOp::Exists => el.has_attr("class"),
                AttrOp::Equals(v) => joined == *v,
                AttrOp::Prefix(v) => joined.starts_with(v.as_str()),
                AttrOp::Contains(v) => joined.contains(v.as_str()),
            };
        }
        match (&self.op, el.attr(&self.name)) {
            (AttrOp::Exists, value) => value.is_some(),
            (AttrOp::Equals(v), Some(actual)) => actual == v,
            (AttrOp::Prefix(v), Some(actual)) => actual.starts_with(v.as_str()),
            (AttrOp::Contains(v), Some(actual)) => actual.contains(v.as_str()),
            (_, None) => false,
        }
    }
}

/// A compound selector such as `input.form-control[required]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrMatcher>,
    pub negations: Vec<Compound>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attrs.is_empty()
            && self.negations.is_empty()
    }

    /// Returns whether `el` satisfies every part of this compound.
    pub fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if tag != "*" && tag != el.tag() {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| el.has_class(c))
            && self.attrs.iter().all(|a| a.matches(el))
            && !self.negations.iter().any(|n| n.matches(el))
    }
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<Compound>,
}

impl Selector {
    /// Parses a selector list.
    pub fn parse(input: &str) -> Result<Self> {
        let mut alternatives = Vec::new();
        for part in input.split(',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(invalid(input, "empty selector in list"));
            }
            let mut cursor = Cursor::new(part);
            let compound = cursor.compound(input)?;
            if !cursor.at_end() {
                return Err(invalid(
                    input,
                    format!("unsupported syntax at {:?}", cursor.rest()),
                ));
            }
            alternatives.push(compound);
        }
        Ok(Self {
            source: input.to_string(),
            alternatives,
        })
    }

    /// Returns whether `el` matches any alternative.
    pub fn matches(&self, el: &Element) -> bool {
        self.alternatives.iter().any(|c| c.matches(el))
    }

    /// Returns the parsed alternatives.
    pub fn alternatives(&self) -> &[Compound] {
        &self.alternatives
    }
}

impl FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn invalid(selector: &str, reason: impl Into<String>) -> DomError {
    DomError::InvalidSelector {
        selector: selector.to_string(),
        reason: reason.into(),
    }
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn ident(&mut self, selector: &str) -> Result<String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            self.bump();
        }
        if self.pos == start {
            return Err(invalid(selector, format!("expected identifier at {:?}", self.rest())));
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn compound(&mut self, selector: &str) -> Result<Compound> {
        let mut compound = Compound::default();

        if self.eat("*") {
            compound.tag = Some("*".to_string());
        } else if self.peek().is_some_and(char::is_alphabetic) {
            compound.tag = Some(self.ident(selector)?.to_ascii_lowercase());
        }

        loop {
            match self.peek() {
                Some('.') => {
                    self.bump();
                    compound.classes.push(self.ident(selector)?);
                }
                Some('#') => {
                    self.bump();
                    compound.id = Some(self.ident(selector)?);
                }
                Some('[') => {
                    self.bump();
                    compound.attrs.push(self.attribute(selector)?);
                }
                Some(':') => {
                    if !self.eat(":not(") {
                        return Err(invalid(selector, "only :not(...) is supported"));
                    }
                    self.skip_ws();
                    let inner = self.compound(selector)?;
                    self.skip_ws();
                    if !self.eat(")") {
                        return Err(invalid(selector, "unclosed :not("));
                    }
                    compound.negations.push(inner);
                }
                _ => break,
            }
        }

        if compound.is_empty() {
            return Err(invalid(selector, format!("expected selector at {:?}", self.rest())));
        }
        Ok(compound)
    }

    fn attribute(&mut self, selector: &str) -> Result<AttrMatcher> {
        self.skip_ws();
        let name = self.ident(selector)?.to_ascii_lowercase();
        self.skip_ws();

        let op = if self.eat("]") {
            return Ok(AttrMatcher {
                name,
                op: AttrOp::Exists,
            });
        } else if self.eat("^=") {
            AttrOp::Prefix(String::new())
        } else if self.eat("*=") {
            AttrOp::Contains(String::new())
        } else if self.eat("=") {
            AttrOp::Equals(String::new())
        } else {
            return Err(invalid(selector, "unsupported attribute operator"));
        };

        self.skip_ws();
        let value = self.attr_value(selector)?;
        self.skip_ws();
        if !self.eat("]") {
            return Err(invalid(selector, "unclosed attribute selector"));
        }

        let op = match op {
            AttrOp::Prefix(_) => AttrOp::Prefix(value),
            AttrOp::Contains(_) => AttrOp::Contains(value),
            _ => AttrOp::Equals(value),
        };
        Ok(AttrMatcher { name, op })
    }

    fn attr_value(&mut self, selector: &str) -> Result<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if c == quote {
                        let value = self.src[start..self.pos].to_string();
                        self.bump();
                        return Ok(value);
                    }
                    self.bump();
                }
                Err(invalid(selector, "unterminated string"))
            }
            _ => self.ident(selector),
        }
    }
}

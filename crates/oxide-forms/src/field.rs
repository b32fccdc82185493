//! Field descriptors: the engine's view of one form control.

use oxide_dom::{Document, NodeId};
use serde::{Deserialize, Serialize};

/// The `type` of an input element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Email,
    Tel,
    Checkbox,
    Radio,
    Password,
    Number,
    Url,
    Hidden,
    Submit,
    #[serde(other)]
    Other,
}

impl InputType {
    /// Parses an HTML `type` attribute. Unknown types map to `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Self::Text,
            "email" => Self::Email,
            "tel" => Self::Tel,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "password" => Self::Password,
            "number" => Self::Number,
            "url" => Self::Url,
            "hidden" => Self::Hidden,
            "submit" => Self::Submit,
            _ => Self::Other,
        }
    }

    /// Returns the HTML attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text | Self::Other => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Password => "password",
            Self::Number => "number",
            Self::Url => "url",
            Self::Hidden => "hidden",
            Self::Submit => "submit",
        }
    }
}

/// Which kind of form control a field is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    #[default]
    Input,
    Textarea,
    Select,
}

impl TagKind {
    /// Maps an element tag to a field kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "input" => Some(Self::Input),
            "textarea" => Some(Self::Textarea),
            "select" => Some(Self::Select),
            _ => None,
        }
    }
}

/// Snapshot of one form control, as the validator sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDescriptor {
    pub name: Option<String>,
    pub id: Option<String>,
    pub value: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub tag: TagKind,
    pub required: bool,
    pub checked: bool,
}

impl FieldDescriptor {
    /// Creates an `input` field of the given type.
    pub fn input(name: impl Into<String>, input_type: InputType) -> Self {
        Self {
            name: Some(name.into()),
            input_type,
            ..Self::default()
        }
    }

    /// Creates a `textarea` field.
    pub fn textarea(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            tag: TagKind::Textarea,
            ..Self::default()
        }
    }

    /// Creates a `select` field.
    pub fn select(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            tag: TagKind::Select,
            input_type: InputType::Other,
            ..Self::default()
        }
    }

    /// Sets the value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks a checkbox as checked.
    #[must_use]
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Returns the key used for rule and message lookup: the name, or the
    /// id when the name is absent or empty.
    pub fn key(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.id.as_deref())
            .unwrap_or("")
    }

    /// Returns the value with surrounding whitespace removed.
    pub fn trimmed_value(&self) -> &str {
        self.value.trim()
    }

    /// Reads a descriptor from an `input`, `textarea` or `select` element.
    pub fn from_element(doc: &Document, node: NodeId) -> Option<Self> {
        let el = doc.get(node)?;
        let tag = TagKind::from_tag(el.tag())?;
        let input_type = match tag {
            TagKind::Input => InputType::parse(el.attr("type").unwrap_or("text")),
            TagKind::Textarea | TagKind::Select => InputType::Other,
        };
        Some(Self {
            name: el.attr("name").map(str::to_string),
            id: el.id().map(str::to_string),
            value: el.value.clone(),
            input_type,
            tag,
            required: el.has_attr("required"),
            checked: el.checked,
        })
    }
}

//! Script tags and their attribute sets.

use std::fmt;

use indexmap::IndexMap;

/// `type` value executed only by module-capable browsers; legacy browsers
/// ignore the tag as an unrecognized type.
pub const MODULE_TYPE: &str = "module";

/// Boolean attribute that makes module-capable browsers skip the tag.
pub const NOMODULE_ATTR: &str = "nomodule";

/// An HTML attribute value: boolean (flag) attributes render bare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Flag,
    Value(String),
}

/// A script tag produced by the HTML document generator.
///
/// Created by the generator, classified exactly once by the tag classifier,
/// never removed by the core.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptTag {
    src: String,
    attributes: IndexMap<String, AttrValue>,
}

impl ScriptTag {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Referenced source file.
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes
            .insert(name.into(), AttrValue::Value(value.into()));
    }

    pub fn set_flag(&mut self, name: impl Into<String>) {
        self.attributes.insert(name.into(), AttrValue::Flag);
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn has_flag(&self, name: &str) -> bool {
        matches!(self.attribute(name), Some(AttrValue::Flag))
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Tag executes in module-capable browsers only.
    pub fn is_module(&self) -> bool {
        matches!(self.attribute("type"), Some(AttrValue::Value(v)) if v == MODULE_TYPE)
    }

    /// Tag is skipped by module-capable browsers.
    pub fn is_nomodule(&self) -> bool {
        self.has_flag(NOMODULE_ATTR)
    }
}

impl fmt::Display for ScriptTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<script src=\"{}\"", self.src)?;
        for (name, value) in &self.attributes {
            match value {
                AttrValue::Flag => write!(f, " {name}")?,
                AttrValue::Value(value) => write!(f, " {name}=\"{value}\"")?,
            }
        }
        write!(f, "></script>")
    }
}

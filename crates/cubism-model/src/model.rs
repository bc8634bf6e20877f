//! The neutral API model produced by the descriptor loader.
//!
//! Field names on the wire follow the descriptor files (`entry`, `args`,
//! `return`, `proptype`, `propget`, ...); the Rust side uses regular names.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single function argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arg {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Arg {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self { name: name.into(), ty: ty.into() }
    }
}

/// Return description of a non-void function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Return {
    #[serde(rename = "type")]
    pub ty: String,
}

/// An exported native function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// External symbol name, always carrying the namespace prefix (`csm...`).
    pub entry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Arg>,
    /// `None` for void functions.
    #[serde(default, rename = "return", skip_serializing_if = "Option::is_none")]
    pub ret: Option<Return>,
}

impl Function {
    pub fn new(entry: impl Into<String>) -> Self {
        Self { entry: entry.into(), doc: None, args: Vec::new(), ret: None }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_arg(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.args.push(Arg::new(name, ty));
        self
    }

    pub fn returning(mut self, ty: impl Into<String>) -> Self {
        self.ret = Some(Return { ty: ty.into() });
        self
    }

    pub fn return_type(&self) -> Option<&str> {
        self.ret.as_ref().map(|ret| ret.ty.as_str())
    }
}

/// A class property backed by a getter function.
///
/// A property with `length` models a 1-D array whose element count comes from
/// a second accessor; `length2` adds a per-row count for jagged 2-D data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "propname", default)]
    pub name: String,
    #[serde(rename = "proptype")]
    pub ty: String,
    /// Entry symbol of the getter.
    #[serde(rename = "propget")]
    pub getter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Arguments of the getter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Arg>,
    #[serde(rename = "propgetlength", default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(rename = "proplengthfactor", default, skip_serializing_if = "Option::is_none")]
    pub length_factor: Option<String>,
    #[serde(rename = "propgetlength2", default, skip_serializing_if = "Option::is_none")]
    pub length2: Option<String>,
    #[serde(rename = "proplength2factor", default, skip_serializing_if = "Option::is_none")]
    pub length2_factor: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, getter: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            getter: getter.into(),
            doc: None,
            args: Vec::new(),
            length: None,
            length_factor: None,
            length2: None,
            length2_factor: None,
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.args.push(Arg::new(name, ty));
        self
    }

    pub fn with_length(mut self, getter: impl Into<String>, factor: Option<&str>) -> Self {
        self.length = Some(getter.into());
        self.length_factor = factor.map(str::to_string);
        self
    }

    pub fn with_length2(mut self, getter: impl Into<String>, factor: Option<&str>) -> Self {
        self.length2 = Some(getter.into());
        self.length2_factor = factor.map(str::to_string);
        self
    }
}

/// A group of properties and methods exposed as one class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    #[serde(rename = "clsname", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "clsdoc", default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub props: Vec<Property>,
    /// Class methods.
    #[serde(default)]
    pub funcs: Vec<Function>,
}

/// The whole API surface: every exported function plus the class map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiModel {
    #[serde(default)]
    pub funcs: Vec<Function>,
    #[serde(default)]
    pub clsmap: IndexMap<String, Class>,
}

impl ApiModel {
    /// Merges a later descriptor fragment into this model.
    ///
    /// Functions are appended. Classes merge by key: properties and methods of
    /// an existing class are appended, a missing doc or name is filled in.
    pub fn merge(&mut self, other: ApiModel) {
        self.funcs.extend(other.funcs);
        for (key, class) in other.clsmap {
            match self.clsmap.get_mut(&key) {
                Some(existing) => {
                    existing.props.extend(class.props);
                    existing.funcs.extend(class.funcs);
                    if existing.name.is_none() {
                        existing.name = class.name;
                    }
                    if existing.doc.is_none() {
                        existing.doc = class.doc;
                    }
                }
                None => {
                    self.clsmap.insert(key, class);
                }
            }
        }
    }

    pub fn function(&self, entry: &str) -> Option<&Function> {
        self.funcs.iter().find(|func| func.entry == entry)
    }
}

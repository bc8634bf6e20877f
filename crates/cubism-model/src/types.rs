//! The closed type vocabulary of the Cubism Core API surface.
//!
//! Descriptor files spell types as plain tags (`Float32`, `Model`,
//! `Uint16Array`, `Float32Array2`, `StringArray`). Every tag is either an exact
//! scalar/handle kind, the special `StringArray`, or a scalar kind with one of
//! the array suffixes `Array` (1-D) or `Array2` (array of arrays). Nothing else
//! nests, so the whole vocabulary fits in a small enum.

use std::fmt;
use std::str::FromStr;

use crate::error::UnmappedType;

const ARRAY_SUFFIX: &str = "Array";
const ARRAY2_SUFFIX: &str = "Array2";

/// Scalar element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    Int32,
    Uint8,
    Uint16,
    Uint32,
    Float32,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 5] = [
        ScalarKind::Int32,
        ScalarKind::Uint8,
        ScalarKind::Uint16,
        ScalarKind::Uint32,
        ScalarKind::Float32,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ScalarKind::Int32 => "Int32",
            ScalarKind::Uint8 => "Uint8",
            ScalarKind::Uint16 => "Uint16",
            ScalarKind::Uint32 => "Uint32",
            ScalarKind::Float32 => "Float32",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        ScalarKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

/// Opaque native handles. All of them cross the boundary as a raw pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Moc,
    Model,
    Memory,
}

impl HandleKind {
    pub fn tag(self) -> &'static str {
        match self {
            HandleKind::Moc => "Moc",
            HandleKind::Model => "Model",
            HandleKind::Memory => "Memory",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Moc" => Some(HandleKind::Moc),
            "Model" => Some(HandleKind::Model),
            "Memory" => Some(HandleKind::Memory),
            _ => None,
        }
    }
}

/// A parsed neutral type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeutralType {
    Scalar(ScalarKind),
    Handle(HandleKind),
    /// Array of native C strings. Never treated as a generic scalar array.
    StringArray,
    /// One-dimensional array of scalars (`<Scalar>Array`).
    Array(ScalarKind),
    /// Array of scalar arrays (`<Scalar>Array2`).
    Array2(ScalarKind),
}

impl NeutralType {
    /// Parses a descriptor tag, rejecting anything outside the vocabulary.
    pub fn parse(tag: &str) -> Result<Self, UnmappedType> {
        let unmapped = || UnmappedType { tag: tag.to_string() };

        if tag == "StringArray" {
            return Ok(NeutralType::StringArray);
        }
        if let Some(base) = tag.strip_suffix(ARRAY2_SUFFIX) {
            return ScalarKind::from_tag(base).map(NeutralType::Array2).ok_or_else(unmapped);
        }
        if let Some(base) = tag.strip_suffix(ARRAY_SUFFIX) {
            return ScalarKind::from_tag(base).map(NeutralType::Array).ok_or_else(unmapped);
        }
        if let Some(handle) = HandleKind::from_tag(tag) {
            return Ok(NeutralType::Handle(handle));
        }
        ScalarKind::from_tag(tag).map(NeutralType::Scalar).ok_or_else(unmapped)
    }

    /// Element kind of a scalar array type.
    pub fn element(self) -> Option<ScalarKind> {
        match self {
            NeutralType::Array(kind) | NeutralType::Array2(kind) => Some(kind),
            _ => None,
        }
    }

    /// Number of array dimensions of a scalar array (0 for everything else,
    /// including `StringArray`).
    pub fn dimensions(self) -> u8 {
        match self {
            NeutralType::Array(_) => 1,
            NeutralType::Array2(_) => 2,
            _ => 0,
        }
    }

    /// Strips one array dimension. Only `Array2` has one to spare.
    pub fn demote(self) -> Option<Self> {
        match self {
            NeutralType::Array2(kind) => Some(NeutralType::Array(kind)),
            _ => None,
        }
    }

    /// True when the type crosses the native boundary as a raw pointer to
    /// memory owned by the native side.
    pub fn is_pointer_shaped(self) -> bool {
        matches!(
            self,
            NeutralType::Array(_) | NeutralType::Array2(_) | NeutralType::StringArray
        )
    }

    pub fn is_model_handle(self) -> bool {
        self == NeutralType::Handle(HandleKind::Model)
    }
}

impl FromStr for NeutralType {
    type Err = UnmappedType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NeutralType::parse(s)
    }
}

impl fmt::Display for NeutralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeutralType::Scalar(kind) => f.write_str(kind.tag()),
            NeutralType::Handle(handle) => f.write_str(handle.tag()),
            NeutralType::StringArray => f.write_str("StringArray"),
            NeutralType::Array(kind) => write!(f, "{}{}", kind.tag(), ARRAY_SUFFIX),
            NeutralType::Array2(kind) => write!(f, "{}{}", kind.tag(), ARRAY2_SUFFIX),
        }
    }
}

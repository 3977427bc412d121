//! Node type hierarchy used for `is-a` tests.
//!
//! Two layers:
//! - **Deserialization layer**: `RawType` mirrors one entry of a hierarchy JSON file
//! - **Lookup layer**: `TypeHierarchy` trait, implemented by `DynamicTypeHierarchy`
//!
//! The hierarchy is single-inheritance: every type names at most one parent.

use indexmap::IndexMap;

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw type declaration from a hierarchy JSON file.
///
/// ```json
/// [
///   { "type": "Expression", "kind": "abstract" },
///   { "type": "Addition", "extends": "Expression" }
/// ]
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawType {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub kind: TypeKind,
}

/// Parse hierarchy JSON content into raw type declarations.
pub fn parse_type_hierarchy(json: &str) -> Result<Vec<RawType>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Declaration kind of a node type.
///
/// Only `Abstract` changes compilation: abstract types can be matched
/// (through their subtypes) but never built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Abstract,
    #[default]
    Ordinary,
    List,
    Literal,
}

#[derive(Debug, thiserror::Error)]
pub enum HierarchyError {
    #[error("invalid type hierarchy JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("type `{0}` is declared more than once")]
    DuplicateType(String),

    #[error("type `{child}` extends unknown type `{parent}`")]
    UnknownParent { child: String, parent: String },

    #[error("type `{0}` is part of an inheritance cycle")]
    Cycle(String),
}

// ============================================================================
// TypeHierarchy Trait
// ============================================================================

/// Lookup service answering `is-a` queries over node type names.
pub trait TypeHierarchy {
    fn contains(&self, name: &str) -> bool;
    fn parent(&self, name: &str) -> Option<&str>;
    fn is_abstract(&self, name: &str) -> bool;

    /// All declared type names, in declaration order.
    fn type_names(&self) -> Vec<&str>;

    /// Whether `sub` is `sup` or transitively extends it.
    fn is_a(&self, sub: &str, sup: &str) -> bool {
        let mut current = Some(sub);
        while let Some(name) = current {
            if name == sup {
                return true;
            }
            current = self.parent(name);
        }
        false
    }

    /// Every type that is-a `name`, including `name` itself, in declaration order.
    fn descendants(&self, name: &str) -> Vec<&str> {
        self.type_names()
            .into_iter()
            .filter(|candidate| self.is_a(candidate, name))
            .collect()
    }
}

impl<T: TypeHierarchy + ?Sized> TypeHierarchy for &T {
    fn contains(&self, name: &str) -> bool {
        (*self).contains(name)
    }
    fn parent(&self, name: &str) -> Option<&str> {
        (*self).parent(name)
    }
    fn is_abstract(&self, name: &str) -> bool {
        (*self).is_abstract(name)
    }
    fn type_names(&self) -> Vec<&str> {
        (*self).type_names()
    }
}

// ============================================================================
// Dynamic Lookup Layer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    pub parent: Option<String>,
    pub kind: TypeKind,
}

/// Heap-allocated type hierarchy, built in code or from JSON.
#[derive(Debug, Clone, Default)]
pub struct DynamicTypeHierarchy {
    types: IndexMap<String, TypeInfo>,
}

impl DynamicTypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a type. The parent, if any, must already be declared.
    pub fn add_type(
        &mut self,
        name: &str,
        parent: Option<&str>,
        kind: TypeKind,
    ) -> Result<&mut Self, HierarchyError> {
        if self.types.contains_key(name) {
            return Err(HierarchyError::DuplicateType(name.to_owned()));
        }
        if let Some(parent) = parent
            && !self.types.contains_key(parent)
        {
            return Err(HierarchyError::UnknownParent {
                child: name.to_owned(),
                parent: parent.to_owned(),
            });
        }
        self.types.insert(
            name.to_owned(),
            TypeInfo {
                parent: parent.map(str::to_owned),
                kind,
            },
        );
        Ok(self)
    }

    /// Build from raw declarations.
    ///
    /// Declarations may appear in any order; parents are resolved after all
    /// names are known.
    pub fn from_raw(raw_types: &[RawType]) -> Result<Self, HierarchyError> {
        let mut types = IndexMap::with_capacity(raw_types.len());
        for raw in raw_types {
            let info = TypeInfo {
                parent: raw.extends.clone(),
                kind: raw.kind,
            };
            if types.insert(raw.type_name.clone(), info).is_some() {
                return Err(HierarchyError::DuplicateType(raw.type_name.clone()));
            }
        }

        for (name, info) in &types {
            if let Some(parent) = &info.parent
                && !types.contains_key(parent)
            {
                return Err(HierarchyError::UnknownParent {
                    child: name.clone(),
                    parent: parent.clone(),
                });
            }
        }

        let hierarchy = Self { types };
        hierarchy.ensure_acyclic()?;
        Ok(hierarchy)
    }

    pub fn from_json(json: &str) -> Result<Self, HierarchyError> {
        let raw = parse_type_hierarchy(json)?;
        Self::from_raw(&raw)
    }

    pub fn get(&self, name: &str) -> Option<&TypeInfo> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn ensure_acyclic(&self) -> Result<(), HierarchyError> {
        for name in self.types.keys() {
            let mut steps = 0;
            let mut current = self.parent(name);
            while let Some(ancestor) = current {
                if ancestor == name || steps > self.types.len() {
                    return Err(HierarchyError::Cycle(name.clone()));
                }
                steps += 1;
                current = self.parent(ancestor);
            }
        }
        Ok(())
    }
}

impl TypeHierarchy for DynamicTypeHierarchy {
    fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    fn parent(&self, name: &str) -> Option<&str> {
        self.types.get(name)?.parent.as_deref()
    }

    fn is_abstract(&self, name: &str) -> bool {
        self.types
            .get(name)
            .is_some_and(|info| info.kind == TypeKind::Abstract)
    }

    fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }
}

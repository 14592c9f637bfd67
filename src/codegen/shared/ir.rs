//! Declaration IR shared by every backend.
//!
//! Emitters build these values once; the Kotlin text renderer and the
//! structured (serialized) backend both consume them, so the two outputs
//! cannot diverge. The IR is deliberately minimal: an interface block, a
//! property block with optional getter/setter bodies, and the delegate
//! variable shape expressed as a property with an initializer.

use serde_derive::{Deserialize, Serialize};

/// Schema version stamped on every serialized declaration export.
pub const IR_SCHEMA_VERSION: u32 = 1;

/// Container for a serialized set of property declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclarationSet {
    /// IR schema version (mirrors `IR_SCHEMA_VERSION`).
    pub version: u32,
    pub properties: Vec<PropertyIr>,
}

impl DeclarationSet {
    /// Creates a new set, automatically wiring the schema version.
    pub fn new(properties: Vec<PropertyIr>) -> Self {
        Self {
            version: IR_SCHEMA_VERSION,
            properties,
        }
    }
}

/// One property declaration: a delegate variable, an accessor pair, or an
/// event-handler property, depending on which fields are populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyIr {
    /// Extension receiver type; `None` declares on the ambient receiver.
    #[serde(default)]
    pub receiver: Option<String>,
    pub name: String,
    /// Rendered type of the property (target-language syntax).
    pub property_type: String,
    /// `var` vs `val` in the Kotlin rendering.
    pub mutable: bool,
    #[serde(default)]
    pub modifiers: Vec<String>,
    /// Initializer expression (delegate declarations).
    #[serde(default)]
    pub initializer: Option<String>,
    /// Getter body expression, rendered as `get() = <expr>`.
    #[serde(default)]
    pub getter: Option<String>,
    #[serde(default)]
    pub setter: Option<SetterIr>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetterIr {
    /// Name of the incoming value parameter.
    pub parameter: String,
    /// Setter body statement.
    pub body: String,
}

/// Interface block with an ordered supertype list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterfaceIr {
    pub name: String,
    #[serde(default)]
    pub parents: Vec<String>,
}

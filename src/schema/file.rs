/* Schema file model - serde view of the declarative attribute description. */

use crate::schema::repository::Repository;
use crate::schema::types::{AttributeFacade, AttributeInfo, AttributeType, CodegenError};
use anyhow::Context;
use serde_derive::{Deserialize, Serialize};
use std::path::Path;

/* ============================================================================
   Schema Document
   ============================================================================ */

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct SchemaFile {
    #[serde(default)]
    pub schema: SchemaHeader,
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
    #[serde(default)]
    pub facades: Vec<FacadeEntry>,
    #[serde(default)]
    pub events: Vec<EventEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct SchemaHeader {
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct AttributeEntry {
    /* Wire-format attribute name */
    pub name: String,
    /* Identifier-safe name; derived from `name` when omitted */
    #[serde(default)]
    pub field_name: Option<String>,
    /* Type category tag; defaults to "string" */
    #[serde(default, rename = "type")]
    pub type_tag: Option<String>,
    #[serde(default)]
    pub enum_type: Option<String>,
    /* Pre-formatted literal-expression construction arguments */
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct FacadeEntry {
    pub class_name: String,
    #[serde(default)]
    pub parents: Vec<String>,
    /* Names of declared attributes, in emission order */
    #[serde(default)]
    pub attributes: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct EventEntry {
    /* Wire-format handler attribute name, e.g. "onclick" */
    pub name: String,
    #[serde(default)]
    pub field_name: Option<String>,
}

impl SchemaFile {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read schema file {}", path.display()))?;
        let file: SchemaFile = serde_yml::from_str(&text)
            .with_context(|| format!("failed to parse schema file {}", path.display()))?;
        Ok(file)
    }
}

/* ============================================================================
   Repository Construction
   ============================================================================ */

/* Fold one or more schema documents into a Repository */
pub fn build_repository(
    files: impl IntoIterator<Item = SchemaFile>,
) -> Result<Repository, CodegenError> {
    let mut repository = Repository::new();

    for file in files {
        for entry in &file.attributes {
            repository.declare_attribute(attribute_from_entry(entry)?);
        }

        for entry in &file.facades {
            let mut declared = Vec::with_capacity(entry.attributes.len());
            for name in &entry.attributes {
                let attribute =
                    repository
                        .attribute(name)
                        .cloned()
                        .ok_or_else(|| CodegenError::UnknownAttribute {
                            facade: entry.class_name.clone(),
                            attribute: name.clone(),
                        })?;
                declared.push(attribute);
            }
            repository.declare_facade(AttributeFacade::new(
                entry.class_name.clone(),
                entry.parents.clone(),
                declared,
            ));
        }

        for entry in &file.events {
            let field_name = entry
                .field_name
                .clone()
                .unwrap_or_else(|| derive_field_name(&entry.name));
            repository.declare_event(AttributeInfo::new(entry.name.clone(), field_name));
        }
    }

    Ok(repository)
}

/* Load a single schema file into a fresh Repository */
pub fn load_schema(path: impl AsRef<Path>) -> anyhow::Result<Repository> {
    let file = SchemaFile::load(path)?;
    Ok(build_repository([file])?)
}

fn attribute_from_entry(entry: &AttributeEntry) -> Result<AttributeInfo, CodegenError> {
    let attr_type = match entry.type_tag.as_deref() {
        Some(tag) => AttributeType::from_tag(tag)?,
        None => AttributeType::String,
    };
    let field_name = entry
        .field_name
        .clone()
        .unwrap_or_else(|| derive_field_name(&entry.name));
    Ok(AttributeInfo {
        name: entry.name.clone(),
        field_name,
        attr_type,
        enum_type_name: entry.enum_type.clone(),
        options: entry.options.clone(),
    })
}

/* Turn a wire name into an identifier: split on non-alphanumeric separators
 * and camel-case the pieces, e.g. "data-x" -> "dataX", "accept-charset" ->
 * "acceptCharset". Names already identifier-shaped pass through unchanged.
 */
pub fn derive_field_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if upper_next {
                out.extend(c.to_uppercase());
                upper_next = false;
            } else {
                out.push(c);
            }
        } else {
            upper_next = !out.is_empty();
        }
    }
    out
}

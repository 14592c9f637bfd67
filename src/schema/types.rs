/* Schema model: value types built once per generation run, read-only after. */

use std::collections::BTreeSet;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodegenError {
    #[error("unknown attribute type category: {0}")]
    UnknownTypeCategory(String),
    #[error("facade {facade} references undeclared attribute: {attribute}")]
    UnknownAttribute { facade: String, attribute: String },
}

/* Closed set of attribute type categories understood by the generator */
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AttributeType {
    #[default]
    String,
    Boolean,
    Ticker,
    Enum,
    StringSet,
}

impl AttributeType {
    /* Parse a raw schema tag; anything outside the closed set is a malformed schema */
    pub fn from_tag(tag: &str) -> Result<Self, CodegenError> {
        match tag {
            "string" => Ok(AttributeType::String),
            "boolean" => Ok(AttributeType::Boolean),
            "ticker" => Ok(AttributeType::Ticker),
            "enum" => Ok(AttributeType::Enum),
            "string-set" => Ok(AttributeType::StringSet),
            other => Err(CodegenError::UnknownTypeCategory(other.to_string())),
        }
    }

    /* Identifier prefix of the delegate class implementing this category */
    pub fn class_prefix(&self) -> &'static str {
        match self {
            AttributeType::String => "String",
            AttributeType::Boolean => "Boolean",
            AttributeType::Ticker => "Ticker",
            AttributeType::Enum => "Enum",
            AttributeType::StringSet => "StringSet",
        }
    }

    /* Kotlin type exposed by accessors of this category */
    pub fn value_type(&self) -> &'static str {
        match self {
            AttributeType::String | AttributeType::StringSet => "String",
            AttributeType::Boolean | AttributeType::Ticker => "Boolean",
            /* Enum accessors use the enum class name, resolved per attribute */
            AttributeType::Enum => "String",
        }
    }
}

/* One HTML attribute as declared by the schema */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeInfo {
    /* Wire-format attribute name, e.g. "accesskey" or "data-x" */
    pub name: String,
    /* Identifier-safe derived name, e.g. "accessKey" */
    pub field_name: String,
    pub attr_type: AttributeType,
    /* Enum class name for enum-typed attributes */
    pub enum_type_name: Option<String>,
    /* Pre-formatted literal-expression construction arguments */
    pub options: Vec<String>,
}

impl AttributeInfo {
    pub fn new(name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_name: field_name.into(),
            attr_type: AttributeType::String,
            enum_type_name: None,
            options: Vec::new(),
        }
    }
}

/* Request to materialize a typed delegate for one attribute category + options */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRequest {
    pub attr_type: AttributeType,
    /* Display name of the generated delegate's value type */
    pub type_name: String,
    /* Ordered, pre-formatted literal-expression arguments */
    pub options: Vec<String>,
    /* Deterministic function of (attr_type, options); see delegate_property_name */
    pub delegate_property_name: String,
}

impl AttributeRequest {
    pub fn new(attr_type: AttributeType, type_name: impl Into<String>, options: Vec<String>) -> Self {
        let delegate_property_name = delegate_property_name(attr_type, &options);
        Self {
            attr_type,
            type_name: type_name.into(),
            options,
            delegate_property_name,
        }
    }

    /* Build the request an attribute's declared type resolves to */
    pub fn for_attribute(attribute: &AttributeInfo) -> Self {
        match attribute.attr_type {
            AttributeType::Enum => {
                let type_name = attribute
                    .enum_type_name
                    .clone()
                    .unwrap_or_else(|| capitalize(&attribute.field_name));
                let options = if attribute.options.is_empty() {
                    vec![format!("{}Values", decapitalize(&type_name))]
                } else {
                    attribute.options.clone()
                };
                Self::new(AttributeType::Enum, type_name, options)
            }
            other => Self::new(other, other.value_type(), attribute.options.clone()),
        }
    }
}

/* Derive the delegate variable name for a (category, options) pair.
 *
 * Pure and deterministic so that equal requests always share one delegate:
 * "attribute" + class prefix + each option reduced to identifier characters
 * and capitalized, falling back to the prefix itself when there are no
 * options. E.g. attributeStringString, attributeBooleanTrueFalse,
 * attributeEnumDirValues.
 */
pub fn delegate_property_name(attr_type: AttributeType, options: &[String]) -> String {
    let prefix = attr_type.class_prefix();
    let suffix: String = options.iter().map(|opt| sanitize_option(opt)).collect();
    if suffix.is_empty() {
        format!("attribute{}{}", prefix, prefix)
    } else {
        format!("attribute{}{}", prefix, suffix)
    }
}

fn sanitize_option(option: &str) -> String {
    let cleaned: String = option.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    capitalize(&cleaned)
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub(crate) fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/* Generated interface grouping a family of attribute accessors */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeFacade {
    pub class_name: String,
    /* Ordered supertype list */
    pub parents: Vec<String>,
    /* Accessors are emitted in this order */
    pub declared_attributes: Vec<AttributeInfo>,
    /* Lowercase name set used by the case-collision skip rule */
    pub attribute_names: BTreeSet<String>,
}

impl AttributeFacade {
    pub fn new(class_name: impl Into<String>, parents: Vec<String>, declared_attributes: Vec<AttributeInfo>) -> Self {
        let attribute_names = declared_attributes
            .iter()
            .map(|attr| attr.name.to_lowercase())
            .collect();
        Self {
            class_name: class_name.into(),
            parents,
            declared_attributes,
            attribute_names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_category_is_rejected() {
        let err = AttributeType::from_tag("tristate").unwrap_err();
        assert_eq!(err, CodegenError::UnknownTypeCategory("tristate".to_string()));
    }

    #[test]
    fn delegate_name_is_deterministic_in_type_and_options() {
        let a = delegate_property_name(AttributeType::Boolean, &["\"true\"".into(), "\"false\"".into()]);
        let b = delegate_property_name(AttributeType::Boolean, &["\"true\"".into(), "\"false\"".into()]);
        assert_eq!(a, b);
        assert_eq!(a, "attributeBooleanTrueFalse");
    }

    #[test]
    fn delegate_name_without_options_repeats_prefix() {
        assert_eq!(
            delegate_property_name(AttributeType::String, &[]),
            "attributeStringString"
        );
    }

    #[test]
    fn enum_request_defaults_to_values_reference() {
        let mut attr = AttributeInfo::new("dir", "dir");
        attr.attr_type = AttributeType::Enum;
        attr.enum_type_name = Some("Dir".to_string());
        let request = AttributeRequest::for_attribute(&attr);
        assert_eq!(request.type_name, "Dir");
        assert_eq!(request.options, vec!["dirValues".to_string()]);
        assert_eq!(request.delegate_property_name, "attributeEnumDirValues");
    }

    #[test]
    fn facade_collision_set_is_lowercased() {
        let facade = AttributeFacade::new(
            "CommonAttributeGroupFacade",
            vec![],
            vec![AttributeInfo::new("onClick", "onClick")],
        );
        assert!(facade.attribute_names.contains("onclick"));
    }
}

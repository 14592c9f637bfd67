/* Attribute accessors: getter/setter property pairs reading and writing
 * through a named delegate, indexed by the tag instance and the literal
 * attribute name.
 */

use crate::codegen::kotlin_gen::helpers::quote;
use crate::codegen::kotlin_gen::render::render_property;
use crate::codegen::shared::ir::{PropertyIr, SetterIr};
use crate::schema::repository::Repository;
use crate::schema::types::AttributeInfo;

/* Append the accessor pair for one attribute, resolving its delegate through
 * the repository's memoized table. With no receiver the declaration is a free
 * extension on the ambient receiver type. Indentation is purely cosmetic;
 * callers inside an interface body conventionally pass 1.
 */
pub fn emit_attribute_property(
    out: &mut String,
    repository: &mut Repository,
    attribute: &AttributeInfo,
    receiver: Option<&str>,
    indent: usize,
) {
    let request = repository.request_for(attribute);
    let delegate = &request.delegate_property_name;
    let indexed = format!("{}[this, {}]", delegate, quote(&attribute.name));

    let property = PropertyIr {
        receiver: receiver.map(str::to_string),
        name: attribute.field_name.clone(),
        property_type: request.type_name.clone(),
        mutable: true,
        modifiers: vec![],
        initializer: None,
        getter: Some(indexed.clone()),
        setter: Some(SetterIr {
            parameter: "newValue".to_string(),
            body: format!("{} = newValue", indexed),
        }),
    };
    render_property(out, &property, indent);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessor_reads_and_writes_through_the_delegate() {
        let mut repository = Repository::new();
        let attribute = AttributeInfo::new("accesskey", "accessKey");
        let mut out = String::new();
        emit_attribute_property(&mut out, &mut repository, &attribute, Some("HtmlTag"), 1);
        let expected = concat!(
            "    var HtmlTag.accessKey: String\n",
            "    get() = attributeStringString[this, \"accesskey\"]\n",
            "    set(newValue) { attributeStringString[this, \"accesskey\"] = newValue }\n",
            "\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn accessor_without_receiver_is_a_free_extension() {
        let mut repository = Repository::new();
        let attribute = AttributeInfo::new("accesskey", "accessKey");
        let mut out = String::new();
        emit_attribute_property(&mut out, &mut repository, &attribute, None, 0);
        assert!(out.starts_with("var accessKey: String\n"));
    }
}

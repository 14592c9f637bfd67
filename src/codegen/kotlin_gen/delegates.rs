/* Delegate declarations: the internal mutable indirection objects accessors
 * read and write through.
 */

use crate::codegen::kotlin_gen::render::render_property;
use crate::codegen::shared::ir::PropertyIr;
use crate::schema::types::AttributeRequest;

/* Build the delegate-variable declaration for one request */
pub fn delegate_ir(request: &AttributeRequest) -> PropertyIr {
    let class_name = format!("{}Attribute", request.attr_type.class_prefix());
    PropertyIr {
        receiver: None,
        name: request.delegate_property_name.clone(),
        property_type: format!("Attribute<{}>", request.type_name),
        mutable: true,
        modifiers: vec!["internal".to_string()],
        initializer: Some(format!("{}({})", class_name, request.options.join(", "))),
        getter: None,
        setter: None,
    }
}

/* Append one delegate declaration plus a trailing blank line.
 *
 * Must be called at most once per distinct delegate name; uniqueness is the
 * Repository's memoization contract, not checked here.
 */
pub fn emit_attribute_delegate(out: &mut String, request: &AttributeRequest) {
    render_property(out, &delegate_ir(request), 0);
    out.push('\n');
}

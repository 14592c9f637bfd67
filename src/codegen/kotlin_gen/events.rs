/* Event-handler properties: write-only extensions whose assignment forwards
 * to the consumer's event registration. Reads are never meaningful, so the
 * generated getter unconditionally throws.
 */

use crate::codegen::kotlin_gen::helpers::quote;
use crate::codegen::kotlin_gen::render::render_property;
use crate::codegen::shared::ir::{PropertyIr, SetterIr};
use crate::schema::types::AttributeInfo;

pub const EVENT_HANDLER_TYPE: &str = "(org.w3c.dom.events.Event) -> Unit";

/* Build the event-property declaration. Both backends (text and structured)
 * consume this one value, so their getter/setter bodies are identical by
 * construction.
 */
pub fn event_property_ir(
    parent: &str,
    attribute: &AttributeInfo,
    should_unsafe_cast: bool,
) -> PropertyIr {
    let new_value = if should_unsafe_cast {
        "newValue.unsafeCast<(Event) -> Unit>()"
    } else {
        "newValue"
    };

    PropertyIr {
        receiver: Some(parent.to_string()),
        name: format!("{}Function", attribute.field_name),
        property_type: EVENT_HANDLER_TYPE.to_string(),
        mutable: true,
        modifiers: vec![],
        initializer: None,
        getter: Some(format!(
            "throw UnsupportedOperationException({})",
            quote(&format!("You can't read variable {}", attribute.field_name))
        )),
        setter: Some(SetterIr {
            parameter: "newValue".to_string(),
            body: format!(
                "consumer.onTagEvent(this, {}, {})",
                quote(&attribute.name),
                new_value
            ),
        }),
    }
}

/* Text backend: append the event property plus a trailing blank line */
pub fn emit_event_property(
    out: &mut String,
    parent: &str,
    attribute: &AttributeInfo,
    should_unsafe_cast: bool,
) {
    let property = event_property_ir(parent, attribute, should_unsafe_cast);
    render_property(out, &property, 0);
    out.push('\n');
}

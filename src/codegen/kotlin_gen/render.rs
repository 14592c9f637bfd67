/* Kotlin renderers for the shared declaration IR. Target-language syntax is
 * isolated here; emitters only build IR values.
 */

use crate::codegen::shared::ir::{InterfaceIr, PropertyIr};
use std::fmt::Write;

/* One indentation level */
pub const INDENT_UNIT: &str = "    ";

pub fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT_UNIT);
    }
}

/* Render a property block: header line, then getter/setter lines at the same
 * indentation level. Every line is newline-terminated.
 */
pub fn render_property(out: &mut String, property: &PropertyIr, level: usize) {
    indent(out, level);
    for modifier in &property.modifiers {
        write!(out, "{} ", modifier).unwrap();
    }
    out.push_str(if property.mutable { "var " } else { "val " });
    if let Some(receiver) = &property.receiver {
        write!(out, "{}.", receiver).unwrap();
    }
    write!(out, "{}: {}", property.name, property.property_type).unwrap();
    if let Some(initializer) = &property.initializer {
        write!(out, " = {}", initializer).unwrap();
    }
    out.push('\n');

    if let Some(getter) = &property.getter {
        indent(out, level);
        writeln!(out, "get() = {}", getter).unwrap();
    }
    if let Some(setter) = &property.setter {
        indent(out, level);
        writeln!(out, "set({}) {{ {} }}", setter.parameter, setter.body).unwrap();
    }
}

/* Render an interface block with an ordered supertype list */
pub fn render_interface(out: &mut String, interface: &InterfaceIr) {
    if interface.parents.is_empty() {
        writeln!(out, "interface {} {{", interface.name).unwrap();
    } else {
        writeln!(out, "interface {} : {} {{", interface.name, interface.parents.join(", ")).unwrap();
    }
    out.push_str("}\n");
}

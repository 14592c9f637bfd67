/* Facade generation: one interface block plus an accessor pair for every
 * declared attribute that survives the exclusion and case-collision filters.
 */

use crate::codegen::kotlin_gen::accessors::emit_attribute_property;
use crate::codegen::kotlin_gen::helpers::{is_attribute_excluded, is_lower_case};
use crate::codegen::kotlin_gen::render::render_interface;
use crate::codegen::shared::ir::InterfaceIr;
use crate::schema::repository::Repository;
use crate::schema::types::AttributeFacade;

/* Append the facade's interface block, then accessors in declaration order.
 *
 * The collision rule is asymmetric on purpose: an uppercase/mixed-case name
 * whose lowercase form is already in the facade's name set is skipped (it is
 * a case variant of an attribute inherited from another facade); lowercase
 * names always emit.
 */
pub fn emit_facade(out: &mut String, repository: &mut Repository, facade: &AttributeFacade) {
    render_interface(
        out,
        &InterfaceIr {
            name: facade.class_name.clone(),
            parents: facade.parents.clone(),
        },
    );

    for attribute in &facade.declared_attributes {
        if is_attribute_excluded(&attribute.name) {
            continue;
        }
        if is_lower_case(&attribute.name)
            || !facade.attribute_names.contains(&attribute.name.to_lowercase())
        {
            emit_attribute_property(out, repository, attribute, Some(&facade.class_name), 0);
        }
    }
}

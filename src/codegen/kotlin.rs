/* Kotlin generator front: renders the full declaration set into per-file
 * sinks and writes them under the output directory.
 */

use crate::codegen::kotlin_gen::{emit_attribute_delegate, emit_event_property, emit_facade};
use crate::codegen::kotlin_gen::events::event_property_ir;
use crate::codegen::shared::ir::DeclarationSet;
use crate::schema::repository::Repository;
use anyhow::Context;
use std::fs;
use std::path::Path;

pub struct KotlinCodeGenerator {
    options: KotlinCodeGeneratorOptions,
}

pub struct KotlinCodeGeneratorOptions {
    pub output_dir: String,
    pub emit_facades: bool,
    pub emit_event_properties: bool,
    /* Receiver type event-handler extensions are declared on */
    pub event_receiver: String,
    /* Wrap forwarded handlers in an unchecked cast (JS-facing targets) */
    pub should_unsafe_cast: bool,
    /* Serialize the event declarations for the structured backend */
    pub emit_ir: bool,
}

impl Default for KotlinCodeGeneratorOptions {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            emit_facades: true,
            emit_event_properties: true,
            event_receiver: "CommonAttributeGroupFacade".to_string(),
            should_unsafe_cast: false,
            emit_ir: true,
        }
    }
}

/* Rendered sinks, one per output file */
pub struct GeneratedSources {
    pub attributes: String,
    pub attribute_groups: String,
    pub event_attributes: String,
    pub event_ir: DeclarationSet,
}

const FILE_HEADER: &str =
    "/* Auto-generated attribute declarations. Do not modify this file directly. */\n\n";

impl KotlinCodeGenerator {
    pub fn new(options: KotlinCodeGeneratorOptions) -> Self {
        Self { options }
    }

    /* Render every sink without touching the filesystem. Facades are rendered
     * first so the delegate table is fully populated before it is emitted;
     * delegates come out in first-request order.
     */
    pub fn render(&self, repository: &mut Repository) -> GeneratedSources {
        let mut attribute_groups = String::from(FILE_HEADER);
        if self.options.emit_facades {
            let facades = repository.facades().to_vec();
            for facade in &facades {
                emit_facade(&mut attribute_groups, repository, facade);
            }
        }

        let mut attributes = String::from(FILE_HEADER);
        for request in repository.delegate_requests().cloned().collect::<Vec<_>>() {
            emit_attribute_delegate(&mut attributes, &request);
        }

        let mut event_attributes = String::from(FILE_HEADER);
        let mut event_declarations = Vec::new();
        if self.options.emit_event_properties {
            for attribute in repository.events().to_vec() {
                emit_event_property(
                    &mut event_attributes,
                    &self.options.event_receiver,
                    &attribute,
                    self.options.should_unsafe_cast,
                );
                event_declarations.push(event_property_ir(
                    &self.options.event_receiver,
                    &attribute,
                    self.options.should_unsafe_cast,
                ));
            }
        }

        GeneratedSources {
            attributes,
            attribute_groups,
            event_attributes,
            event_ir: DeclarationSet::new(event_declarations),
        }
    }

    /* Render and write attributes.kt, attribute-groups.kt, event-attributes.kt
     * and (optionally) event-properties.json under the output directory.
     */
    pub fn emit_code(&self, repository: &mut Repository) -> anyhow::Result<GeneratedSources> {
        let sources = self.render(repository);
        let output_dir = Path::new(&self.options.output_dir);

        write_file(&output_dir.join("attributes.kt"), &sources.attributes)?;
        write_file(&output_dir.join("attribute-groups.kt"), &sources.attribute_groups)?;
        write_file(&output_dir.join("event-attributes.kt"), &sources.event_attributes)?;

        if self.options.emit_ir {
            let ir_json = serde_json::to_string_pretty(&sources.event_ir)?;
            write_file(&output_dir.join("event-properties.json"), &ir_json)?;
        }

        Ok(sources)
    }
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/* Typed HTML wrapper declaration generator.
 *
 * Loads a declarative attribute/tag schema and emits the delegate,
 * accessor, facade and event-handler declarations of a typed Kotlin
 * wrapper library. Generation is one deterministic pass over the schema
 * into append-only text sinks.
 */

pub mod cmds;
pub mod codegen;
pub mod schema;

pub mod accessors;
pub mod delegates;
pub mod events;
pub mod facades;
pub mod helpers;
pub mod render;

/* Re-export main public functions */
pub use accessors::emit_attribute_property;
pub use delegates::emit_attribute_delegate;
pub use events::{emit_event_property, event_property_ir};
pub use facades::emit_facade;

pub mod file;
pub mod repository;
pub mod types;

pub use file::{load_schema, SchemaFile};
pub use repository::Repository;
pub use types::{AttributeFacade, AttributeInfo, AttributeRequest, AttributeType, CodegenError};

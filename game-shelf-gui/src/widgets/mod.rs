pub mod entity_table;
pub mod form_fields;
pub mod toolbar;

pub use entity_table::{RowAction, TableColumn, entity_table};
pub use toolbar::{ToolbarAction, collection_toolbar};

pub mod add;
pub mod catalog;
pub mod list;

pub use add::AddSerperConnectorPage;
pub use catalog::ConnectorCatalog;
pub use list::ConnectorList;

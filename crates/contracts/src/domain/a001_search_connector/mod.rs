pub mod aggregate;

pub use aggregate::{
    ConnectorCreateRequest, ConnectorDraft, ConnectorType, SearchSourceConnector, ValidatedDraft,
};

pub mod a001_search_connector;
pub mod a002_document;

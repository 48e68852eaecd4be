pub mod a001_search_connector;

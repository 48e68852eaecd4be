pub mod api_utils;
pub mod components;
pub mod document_viewer;
pub mod icons;
pub mod markdown;
pub mod navigation;
pub mod notifications;

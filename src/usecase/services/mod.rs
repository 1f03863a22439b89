pub mod annotation_service;
pub mod extract_service;
pub mod import_service;
pub mod table_service;

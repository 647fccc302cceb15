pub mod data_uri;
pub mod file_size;

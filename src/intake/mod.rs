pub mod download;
pub mod scratch;

pub mod document_handlers;

use std::path::Path;

use thiserror::Error;

pub const PLACEHOLDER_RESULT: &str = "Sample result here";

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ProcessingError(pub String);

// Turns a downloaded document into a processing result.
//
// The handler calls this once per request, after the file is on disk, and
// returns the result verbatim as processingResult.
pub trait DocumentProcessor: Send + Sync {
    fn process(&self, path: &Path) -> Result<String, ProcessingError>;
}

// Stand-in until a real processor is wired up. Never touches the file.
pub struct PlaceholderProcessor;

impl DocumentProcessor for PlaceholderProcessor {
    fn process(&self, _path: &Path) -> Result<String, ProcessingError> {
        Ok(PLACEHOLDER_RESULT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_ignores_the_file() {
        let result = PlaceholderProcessor.process(Path::new("/does/not/exist")).unwrap();
        assert_eq!(result, "Sample result here");
    }
}

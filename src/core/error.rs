//! Argument validation errors shared by the finder and the generator

use std::path::PathBuf;
use thiserror::Error;

/// The single error kind raised by the library.
///
/// Every variant is a precondition violation detected before any work
/// starts, so an `Err` never comes with partial results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("Directory path cannot be null or empty")]
    EmptyDirectoryPath,

    #[error("File name cannot be null or empty")]
    EmptyFileName,

    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Input string cannot be null")]
    MissingInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = InvalidArgument::NotADirectory(PathBuf::from("/tmp/file.txt"));
        assert_eq!(err.to_string(), "Path is not a directory: /tmp/file.txt");

        let err = InvalidArgument::DirectoryNotFound(PathBuf::from("missing"));
        assert_eq!(err.to_string(), "Directory does not exist: missing");
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            InvalidArgument::MissingInput.to_string(),
            "Input string cannot be null"
        );
        assert_eq!(
            InvalidArgument::EmptyFileName.to_string(),
            "File name cannot be null or empty"
        );
    }
}

use miette::Diagnostic;
use thiserror::Error;

use crate::Size;

// =============================================================================
// Error
// =============================================================================

#[derive(Clone, Debug, Diagnostic, Eq, Error, PartialEq)]
pub enum Error {
    #[diagnostic(
        code(element::name),
        help("names must be non-empty and must not contain '/'")
    )]
    #[error("invalid name '{name}'")]
    InvalidName { name: String },
    #[diagnostic(
        code(folder::insert),
        help("names are compared case-insensitively")
    )]
    #[error("{name} already exists")]
    AlreadyExists { name: String },
    #[diagnostic(code(folder::remove), help("check the contents of the folder"))]
    #[error("{name} does not exist")]
    NotFound { name: String },
    #[diagnostic(
        code(partition::capacity),
        help("remove elements from the partition to free space")
    )]
    #[error("capacity overflow: {requested} bytes requested, {available} bytes available")]
    CapacityOverflow { requested: Size, available: Size },
    #[diagnostic(
        code(partition::detached),
        help("the element was removed from its partition")
    )]
    #[error("element is not attached to a partition")]
    Detached,
    #[diagnostic(code(folder::get), help("check the contents of the tree"))]
    #[error("path indicated a folder, but '{name}' is a file")]
    UnexpectedFile { name: String },
    #[diagnostic(code(folder::get), help("check the depth of '..' components"))]
    #[error("path indicated a parent folder, but the current folder has no parent")]
    UnexpectedOrphan,
    #[diagnostic(code(folder::get))]
    #[error("path contained a prefix, which is not supported")]
    UnexpectedPrefix,
}

pub type Result<T> = std::result::Result<T, Error>;

#![deny(
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    unsafe_code,
    unused_must_use
)]
#![deny(
    rust_2018_compatibility,
    rust_2018_idioms
)]
#![deny(
    rust_2021_compatibility,
    rust_2021_incompatible_closure_captures,
    rust_2021_incompatible_or_patterns,
    rust_2021_prefixes_incompatible_syntax,
    rust_2021_prelude_collisions
)]
#![warn(
    unused,
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

mod error;
mod file;
mod folder;
mod instance;
mod node;
mod partition;
mod shortcut;

pub use error::{
    Error,
    Result,
};
pub use file::{
    File,
    FileWeak,
};
pub use folder::{
    count::Count,
    Folder,
    FolderWeak,
};
pub use instance::{
    live,
    Census,
    Counted,
};
pub use node::{
    child::Child,
    located::Located,
    measured::{
        Measured,
        Size,
    },
    named::Named,
    render::Render,
    Node,
    WeakNode,
};
pub use partition::{
    Partition,
    PartitionOptions,
    DEFAULT_CAPACITY,
    DEFAULT_NAME,
};
pub use shortcut::{
    Shortcut,
    ShortcutWeak,
};

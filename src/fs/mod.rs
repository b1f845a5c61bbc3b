// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Filesystem collaborators and the filesystem-capable [`Path`]
//!
//! The lexical engine never performs I/O. Everything that touches the
//! filesystem goes through the [`FileSystemProbe`] and [`FileIO`] traits,
//! implemented for the real system by [`OsFileSystem`] and optionally
//! wrapped by [`LoggingFileSystem`].

use std::io;

use crate::{Error, Result};

mod logging;
mod path;

pub use logging::LoggingFileSystem;
pub use path::Path;

/// Wrap an I/O error with the path it occurred on
pub(crate) fn os_error(path: &str, source: io::Error) -> Error {
    Error::Os {
        path: path.to_string(),
        source,
    }
}

/// Read-only filesystem queries
///
/// Each probe returns `false`, rather than an error, for a nonexistent
/// path. All probes except [`is_symlink`](Self::is_symlink) follow symbolic
/// links.
pub trait FileSystemProbe {
    /// True if the path exists
    fn exists(&self, path: &str) -> bool;

    /// True if the path is an existing regular file
    fn is_file(&self, path: &str) -> bool;

    /// True if the path is an existing directory
    fn is_dir(&self, path: &str) -> bool;

    /// True if the path itself is a symbolic link
    fn is_symlink(&self, path: &str) -> bool;
}

/// Mutating filesystem operations
///
/// Every failure surfaces as [`Error::Os`] carrying the underlying system
/// error; there is no retry or transient-error classification.
pub trait FileIO {
    /// The stream type returned by [`open`](Self::open)
    type File: io::Read + io::Write;

    /// Open a file stream for the path
    fn open(&self, path: &str, mode: OpenMode) -> Result<Self::File>;

    /// Create a single directory with the given permission bits
    fn mkdir(&self, path: &str, mode: u32) -> Result<()>;

    /// Remove an empty directory
    fn rmdir(&self, path: &str) -> Result<()>;

    /// Remove a file
    fn unlink(&self, path: &str) -> Result<()>;

    /// Create a symbolic link at `link` pointing to `target`
    fn symlink(&self, target: &str, link: &str) -> Result<()>;

    /// List the names of a directory's entries
    ///
    /// The self and parent pseudo-entries are excluded.
    fn list_children(&self, path: &str) -> Result<Vec<String>>;
}

/// A complete filesystem collaborator for [`Path`]
pub trait FileSystem: FileSystemProbe + FileIO + Clone + std::fmt::Debug {}

impl<T: FileSystemProbe + FileIO + Clone + std::fmt::Debug> FileSystem for T {}

/// A parsed file open mode
///
/// Modes follow the Python conventions accepted by the original text form:
/// one of `r`, `w`, `x`, or `a`, optionally followed by `+` to make the
/// stream both readable and writable. A trailing `b` or `t` is accepted and
/// ignored; this library is byte-transparent.
///
/// ```
/// # use pathlib::OpenMode;
/// assert!(OpenMode::parse("r").is_ok());
/// assert!(OpenMode::parse("w+b").is_ok());
/// assert!(OpenMode::parse("q").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMode {
    /// Open for reading
    pub read: bool,
    /// Open for writing
    pub write: bool,
    /// Write at the end of the file
    pub append: bool,
    /// Truncate an existing file on open
    pub truncate: bool,
    /// Create the file if it does not exist
    pub create: bool,
    /// Create the file, failing if it already exists
    pub create_new: bool,
}

impl OpenMode {
    /// Parse Python-style mode text, failing with
    /// [`Error::InvalidArgument`] for anything unrecognized
    pub fn parse(mode: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument {
            message: format!("invalid file mode \"{mode}\""),
        };
        let mut chars = mode.chars();
        let mut parsed = match chars.next() {
            Some('r') => Self {
                read: true,
                write: false,
                append: false,
                truncate: false,
                create: false,
                create_new: false,
            },
            Some('w') => Self {
                read: false,
                write: true,
                append: false,
                truncate: true,
                create: true,
                create_new: false,
            },
            Some('x') => Self {
                read: false,
                write: true,
                append: false,
                truncate: false,
                create: false,
                create_new: true,
            },
            Some('a') => Self {
                read: false,
                write: true,
                append: true,
                truncate: false,
                create: true,
                create_new: false,
            },
            _ => return Err(invalid()),
        };
        for flag in chars {
            match flag {
                '+' => {
                    parsed.read = true;
                    parsed.write = true;
                }
                // Byte-transparent: text and binary streams are the same.
                'b' | 't' => {}
                _ => return Err(invalid()),
            }
        }
        Ok(parsed)
    }
}

/// Options for [`Path::mkdir`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MkdirOptions {
    /// Permission bits for the new leaf directory
    pub mode: u32,
    /// Create missing ancestor directories as needed
    pub parents: bool,
    /// Do not error when the directory already exists
    pub exist_ok: bool,
}

impl Default for MkdirOptions {
    fn default() -> Self {
        Self {
            mode: 0o777,
            parents: false,
            exist_ok: false,
        }
    }
}

/// The [`FileSystem`] backed by the real operating system via [`std::fs`]
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl OsFileSystem {
    /// Create a new [`OsFileSystem`]
    pub fn new() -> Self {
        Self
    }
}

impl FileSystemProbe for OsFileSystem {
    fn exists(&self, path: &str) -> bool {
        std::fs::metadata(path).is_ok()
    }

    fn is_file(&self, path: &str) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &str) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    fn is_symlink(&self, path: &str) -> bool {
        std::fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false)
    }
}

impl FileIO for OsFileSystem {
    type File = std::fs::File;

    fn open(&self, path: &str, mode: OpenMode) -> Result<Self::File> {
        let mut options = std::fs::OpenOptions::new();
        options
            .read(mode.read)
            .write(mode.write)
            .append(mode.append)
            .truncate(mode.truncate)
            .create(mode.create)
            .create_new(mode.create_new);
        options.open(path).map_err(|source| os_error(path, source))
    }

    fn mkdir(&self, path: &str, mode: u32) -> Result<()> {
        let mut builder = std::fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;
        builder.create(path).map_err(|source| os_error(path, source))
    }

    fn rmdir(&self, path: &str) -> Result<()> {
        std::fs::remove_dir(path).map_err(|source| os_error(path, source))
    }

    fn unlink(&self, path: &str) -> Result<()> {
        std::fs::remove_file(path).map_err(|source| os_error(path, source))
    }

    fn symlink(&self, target: &str, link: &str) -> Result<()> {
        #[cfg(unix)]
        return std::os::unix::fs::symlink(target, link).map_err(|source| os_error(link, source));
        #[cfg(windows)]
        return std::os::windows::fs::symlink_file(target, link)
            .map_err(|source| os_error(link, source));
        #[cfg(not(any(unix, windows)))]
        {
            let _ = target;
            Err(os_error(
                link,
                io::Error::new(io::ErrorKind::Unsupported, "symlinks are not supported"),
            ))
        }
    }

    fn list_children(&self, path: &str) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|source| os_error(path, source))?;
        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| os_error(path, source))?;
            children.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(children)
    }
}

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

#![deny(rustdoc::broken_intra_doc_links, rustdoc::bare_urls, rust_2018_idioms)]
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    clippy::explicit_iter_loop,
    unreachable_pub
)]

//! # pathlib
//!
//! Path values and path manipulation with a clean split between the
//! lexical and the physical:
//!
//! * [`PurePath`] is a purely lexical, always-normalized path value. It
//!   never touches the filesystem, so the same code handles paths for
//!   any system via the [`Separator`](path::Separator) strategy:
//!   [`PurePosixPath`], [`PureWindowsPath`], and the compile-time
//!   selected [`PureNativePath`].
//! * [`Path`] pairs a [`PureNativePath`] with a [`FileSystem`]
//!   collaborator and adds the operations that actually probe and
//!   mutate the disk. The collaborator is swappable, so filesystem
//!   behaviour can be wrapped (see [`LoggingFileSystem`]) or faked.
//! * [`ops`] offers `os.path`-style free functions over plain strings
//!   for callers that do not want a path value at all.
//!
//! Paths are normalized eagerly and purely lexically: `.` segments and
//! redundant separators disappear, and `..` collapses against a named
//! parent without consulting the disk, so a `..` crossing a symbolic
//! link may name a different file than the kernel would resolve.
//!
//! ```
//! # use pathlib::PurePosixPath;
//! let path = PurePosixPath::new("/alpha/./beta//../gamma.tar.gz");
//! assert_eq!(path.to_string(), "/alpha/gamma.tar.gz");
//! assert_eq!(path.suffixes(), [".tar", ".gz"]);
//! assert_eq!((&path.parent() / "delta").to_string(), "/alpha/delta");
//! ```

pub mod fs;
pub mod ops;
pub mod path;

pub use fs::{
    FileIO, FileSystem, FileSystemProbe, LoggingFileSystem, MkdirOptions, OpenMode, OsFileSystem,
    Path,
};
pub use path::{PureNativePath, PurePath, PurePosixPath, PureWindowsPath};

/// A specialized `Result` for path operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A specialized `Error` for path operations
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A caller-supplied argument violated a lexical precondition
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// An underlying operating system call failed
    #[error("{source} for path {path}")]
    Os {
        /// The path the operation was attempted on
        path: String,
        /// The originating I/O error
        source: std::io::Error,
    },
}

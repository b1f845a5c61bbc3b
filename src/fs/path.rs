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

use std::fmt;
use std::io::{ErrorKind, Read, Write};
use std::ops::Div;

use crate::fs::{os_error, FileIO, FileSystem, MkdirOptions, OpenMode, OsFileSystem};
use crate::path::PureNativePath;
use crate::{Error, Result};

/// A [`PureNativePath`] paired with a [`FileSystem`] collaborator
///
/// All lexical methods of the pure type are available and stay pure; the
/// additional methods perform I/O through the collaborator. The default
/// collaborator is [`OsFileSystem`].
///
/// ```no_run
/// # use pathlib::{MkdirOptions, Path};
/// # fn main() -> pathlib::Result<()> {
/// let logs = Path::new("/var/log/app");
/// logs.mkdir(MkdirOptions {
///     parents: true,
///     ..Default::default()
/// })?;
/// (&logs / "run.txt").write_text("started\n")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Path<F: FileSystem = OsFileSystem> {
    base: PureNativePath,
    fs: F,
}

impl Path {
    /// Parse the raw text into a [`Path`] backed by [`OsFileSystem`]
    pub fn new(path: impl AsRef<str>) -> Self {
        Self::with_fs(path, OsFileSystem::new())
    }

    /// The current working directory as an absolute [`Path`]
    pub fn cwd() -> Result<Self> {
        let dir = std::env::current_dir().map_err(|source| os_error(".", source))?;
        Ok(Self::new(dir.to_string_lossy()))
    }
}

impl<F: FileSystem> Path<F> {
    /// Parse the raw text into a [`Path`] backed by the given collaborator
    pub fn with_fs(path: impl AsRef<str>, fs: F) -> Self {
        Self {
            base: PureNativePath::new(path),
            fs,
        }
    }

    fn wrap(&self, base: PureNativePath) -> Self {
        Self {
            base,
            fs: self.fs.clone(),
        }
    }

    /// A view of the purely lexical part of this path
    pub fn pure(&self) -> &PureNativePath {
        &self.base
    }

    /// Discard the collaborator, keeping the lexical part
    pub fn into_pure(self) -> PureNativePath {
        self.base
    }

    /// True if the path is anchored at the root
    pub fn is_absolute(&self) -> bool {
        self.base.is_absolute()
    }

    /// True if the path is exactly the root
    pub fn is_root(&self) -> bool {
        self.base.is_root()
    }

    /// The final component, or `""` for the root and the empty path
    pub fn name(&self) -> &str {
        self.base.name()
    }

    /// The root anchor, or `""` for a relative path
    pub fn root(&self) -> &str {
        self.base.root()
    }

    /// The normalized components, including the root sentinel
    pub fn parts(&self) -> &[String] {
        self.base.parts()
    }

    /// The final component without its last extension
    pub fn stem(&self) -> String {
        self.base.stem()
    }

    /// The last extension of the final component, dot included
    pub fn suffix(&self) -> String {
        self.base.suffix()
    }

    /// Every extension of the final component, outermost last
    pub fn suffixes(&self) -> Vec<String> {
        self.base.suffixes()
    }

    /// The lexical parent, sharing this path's collaborator
    pub fn parent(&self) -> Self {
        self.wrap(self.base.parent())
    }

    /// Every lexical ancestor, nearest first
    pub fn parents(&self) -> Vec<Self> {
        self.base
            .parents()
            .into_iter()
            .map(|base| self.wrap(base))
            .collect()
    }

    /// Append another path, sharing this path's collaborator
    pub fn joinpath(&self, other: impl Into<PureNativePath>) -> Self {
        self.wrap(self.base.joinpath(other))
    }

    /// This path expressed relative to `other`
    pub fn relative_to(&self, other: &Self) -> Result<Self> {
        Ok(self.wrap(self.base.relative_to(&other.base)?))
    }

    /// A copy with the final component replaced
    pub fn with_name(&self, name: &str) -> Result<Self> {
        Ok(self.wrap(self.base.with_name(name)?))
    }

    /// A copy with the last extension replaced
    pub fn with_suffix(&self, suffix: &str) -> Result<Self> {
        Ok(self.wrap(self.base.with_suffix(suffix)?))
    }

    /// True if the path exists, following symbolic links
    pub fn exists(&self) -> bool {
        self.fs.exists(&self.to_string())
    }

    /// True if the path is an existing regular file
    pub fn is_file(&self) -> bool {
        self.fs.is_file(&self.to_string())
    }

    /// True if the path is an existing directory
    pub fn is_dir(&self) -> bool {
        self.fs.is_dir(&self.to_string())
    }

    /// True if the path itself is a symbolic link
    pub fn is_symlink(&self) -> bool {
        self.fs.is_symlink(&self.to_string())
    }

    /// Open a file stream using Python-style mode text
    ///
    /// See [`OpenMode::parse`] for the accepted modes.
    pub fn open(&self, mode: &str) -> Result<F::File> {
        let mode = OpenMode::parse(mode)?;
        self.fs.open(&self.to_string(), mode)
    }

    /// Create this directory
    ///
    /// Without [`MkdirOptions::parents`] the immediate parent must already
    /// exist. With [`MkdirOptions::exist_ok`] an existing directory at this
    /// path is not an error.
    pub fn mkdir(&self, options: MkdirOptions) -> Result<()> {
        if !options.parents && !self.parent().is_dir() {
            let parent = self.parent().to_string();
            return Err(os_error(
                &parent,
                std::io::Error::new(ErrorKind::NotFound, "no such directory"),
            ));
        }
        self.makedirs(options.mode, options.exist_ok)
    }

    fn makedirs(&self, mode: u32, exist_ok: bool) -> Result<()> {
        if self.is_dir() {
            if exist_ok {
                return Ok(());
            }
            return Err(os_error(
                &self.to_string(),
                std::io::Error::new(ErrorKind::AlreadyExists, "directory exists"),
            ));
        }
        let parent = self.parent();
        if parent.base != self.base && !parent.is_root() && !parent.is_dir() {
            parent.makedirs(mode, true)?;
        }
        match self.fs.mkdir(&self.to_string(), mode) {
            Ok(()) => Ok(()),
            // Tolerate a concurrent creation of the same directory.
            Err(Error::Os { source, .. })
                if source.kind() == ErrorKind::AlreadyExists && self.is_dir() =>
            {
                Ok(())
            }
            Err(source) => Err(source),
        }
    }

    /// Create a symbolic link at this path pointing to `target`
    pub fn symlink_to(&self, target: impl Into<PureNativePath>) -> Result<()> {
        let target = target.into();
        self.fs.symlink(&target.to_string(), &self.to_string())
    }

    /// Remove the file at this path
    pub fn unlink(&self) -> Result<()> {
        self.fs.unlink(&self.to_string())
    }

    /// Remove the empty directory at this path
    pub fn rmdir(&self) -> Result<()> {
        self.fs.rmdir(&self.to_string())
    }

    /// The directory's entries, each joined onto this path
    ///
    /// The order is whatever the collaborator reports; the self and parent
    /// pseudo-entries are excluded.
    pub fn iterdir(&self) -> Result<Vec<Self>> {
        let children = self.fs.list_children(&self.to_string())?;
        Ok(children
            .into_iter()
            .map(|child| self.joinpath(child.as_str()))
            .collect())
    }

    /// The file's entire contents as bytes
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        let mut stream = self.open("rb")?;
        let mut contents = Vec::new();
        stream
            .read_to_end(&mut contents)
            .map_err(|source| os_error(&self.to_string(), source))?;
        Ok(contents)
    }

    /// The file's entire contents as UTF-8 text
    pub fn read_text(&self) -> Result<String> {
        let mut stream = self.open("rt")?;
        let mut contents = String::new();
        stream
            .read_to_string(&mut contents)
            .map_err(|source| os_error(&self.to_string(), source))?;
        Ok(contents)
    }

    /// Replace the file's contents with the given bytes
    pub fn write_bytes(&self, contents: &[u8]) -> Result<()> {
        let mut stream = self.open("wb")?;
        stream
            .write_all(contents)
            .map_err(|source| os_error(&self.to_string(), source))
    }

    /// Replace the file's contents with the given text
    pub fn write_text(&self, contents: &str) -> Result<()> {
        let mut stream = self.open("wt")?;
        stream
            .write_all(contents.as_bytes())
            .map_err(|source| os_error(&self.to_string(), source))
    }
}

impl<F: FileSystem> fmt::Display for Path<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt(f)
    }
}

impl<F: FileSystem> PartialEq for Path<F> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<F: FileSystem> Eq for Path<F> {}

impl<F: FileSystem> PartialOrd for Path<F> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: FileSystem> Ord for Path<F> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.base.cmp(&other.base)
    }
}

impl<F: FileSystem> std::hash::Hash for Path<F> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.base.hash(state)
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl<F: FileSystem> From<&Path<F>> for PureNativePath {
    fn from(path: &Path<F>) -> Self {
        path.base.clone()
    }
}

impl<F: FileSystem> From<Path<F>> for PureNativePath {
    fn from(path: Path<F>) -> Self {
        path.base
    }
}

impl<F: FileSystem> Div<&str> for &Path<F> {
    type Output = Path<F>;

    fn div(self, rhs: &str) -> Self::Output {
        self.joinpath(rhs)
    }
}

impl<F: FileSystem> Div<&str> for Path<F> {
    type Output = Path<F>;

    fn div(self, rhs: &str) -> Self::Output {
        self.joinpath(rhs)
    }
}

impl<F: FileSystem> Div<&Path<F>> for &Path<F> {
    type Output = Path<F>;

    fn div(self, rhs: &Path<F>) -> Self::Output {
        self.joinpath(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops;
    use tempfile::TempDir;

    fn scratch(tmpdir: &TempDir, name: &str) -> Path {
        &Path::new(tmpdir.path().to_str().unwrap()) / name
    }

    #[test]
    fn exists() {
        let tmpdir = TempDir::new().unwrap();
        let path = scratch(&tmpdir, "exists_test");
        assert!(!path.exists());
        path.write_text("").unwrap();
        assert!(path.exists());
        assert!(path.parent().exists());
    }

    #[test]
    fn is_file_and_is_dir() {
        let tmpdir = TempDir::new().unwrap();
        let file = scratch(&tmpdir, "file_test");
        let dir = scratch(&tmpdir, "dir_test");
        assert!(!file.is_file());
        assert!(!dir.is_dir());

        file.write_text("contents").unwrap();
        dir.mkdir(MkdirOptions::default()).unwrap();

        assert!(file.is_file());
        assert!(!file.is_dir());
        assert!(dir.is_dir());
        assert!(!dir.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_roundtrip() {
        let tmpdir = TempDir::new().unwrap();
        let target = scratch(&tmpdir, "symlink_target");
        let link = scratch(&tmpdir, "symlink_link");
        target.write_text("payload").unwrap();

        link.symlink_to(&target).unwrap();
        assert!(link.is_symlink());
        assert!(!target.is_symlink());
        assert!(link.is_file());
        assert_eq!(link.read_text().unwrap(), "payload");

        target.unlink().unwrap();
        assert!(link.is_symlink());
        assert!(!link.exists());
    }

    #[test]
    fn open_modes() {
        let tmpdir = TempDir::new().unwrap();
        let path = scratch(&tmpdir, "open_test");

        // Exclusive creation succeeds once.
        let mut stream = path.open("xt").unwrap();
        stream.write_all(b"first").unwrap();
        drop(stream);
        let err = path.open("x").unwrap_err();
        assert!(matches!(err, Error::Os { .. }), "{err}");

        let mut stream = path.open("at").unwrap();
        stream.write_all(b" second").unwrap();
        drop(stream);
        assert_eq!(path.read_text().unwrap(), "first second");

        // Writing truncates.
        path.write_text("third").unwrap();
        assert_eq!(path.read_text().unwrap(), "third");
    }

    #[test]
    fn open_missing_file_fails() {
        let tmpdir = TempDir::new().unwrap();
        let path = scratch(&tmpdir, "missing");
        let err = path.open("r").unwrap_err();
        match err {
            Error::Os { path: raw, source } => {
                assert_eq!(raw, path.to_string());
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn open_invalid_mode_fails() {
        let tmpdir = TempDir::new().unwrap();
        let path = scratch(&tmpdir, "mode_test");
        let err = path.open("rw").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn mkdir() {
        let tmpdir = TempDir::new().unwrap();
        let path = &scratch(&tmpdir, "mkdir_test") / "subdir";

        // The parent is missing, so a plain mkdir fails.
        let err = path.mkdir(MkdirOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Os { .. }), "{err}");
        assert!(!path.exists());

        path.mkdir(MkdirOptions {
            parents: true,
            ..Default::default()
        })
        .unwrap();
        assert!(path.is_dir());
        assert!(path.parent().is_dir());

        let err = path.mkdir(MkdirOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Os { .. }), "{err}");

        path.mkdir(MkdirOptions {
            exist_ok: true,
            ..Default::default()
        })
        .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn mkdir_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmpdir = TempDir::new().unwrap();
        let path = scratch(&tmpdir, "mode_dir");
        path.mkdir(MkdirOptions {
            mode: 0o700,
            ..Default::default()
        })
        .unwrap();
        let meta = std::fs::metadata(path.to_string()).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, 0o700);
    }

    #[test]
    fn unlink() {
        let tmpdir = TempDir::new().unwrap();
        let path = scratch(&tmpdir, "unlink_test");
        path.write_text("").unwrap();
        assert!(path.exists());
        path.unlink().unwrap();
        assert!(!path.exists());
        assert!(path.unlink().is_err());
    }

    #[test]
    fn rmdir() {
        let tmpdir = TempDir::new().unwrap();
        let dir = scratch(&tmpdir, "rmdir_test");
        assert!(dir.rmdir().is_err());

        dir.mkdir(MkdirOptions::default()).unwrap();
        let inner = &dir / "occupant";
        inner.write_text("").unwrap();
        // Non-empty directories are refused.
        assert!(dir.rmdir().is_err());

        inner.unlink().unwrap();
        dir.rmdir().unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn iterdir() {
        let tmpdir = TempDir::new().unwrap();
        let dir = scratch(&tmpdir, "iterdir_test");
        dir.mkdir(MkdirOptions::default()).unwrap();
        assert_eq!(dir.iterdir().unwrap(), vec![]);

        (&dir / "alpha").write_text("").unwrap();
        (&dir / "beta").mkdir(MkdirOptions::default()).unwrap();

        let mut entries = dir.iterdir().unwrap();
        entries.sort();
        assert_eq!(entries, vec![&dir / "alpha", &dir / "beta"]);
    }

    #[test]
    fn iterdir_of_file_fails() {
        let tmpdir = TempDir::new().unwrap();
        let path = scratch(&tmpdir, "not_a_dir");
        path.write_text("").unwrap();
        assert!(path.iterdir().is_err());
    }

    #[test]
    fn read_write_bytes() {
        let tmpdir = TempDir::new().unwrap();
        let path = scratch(&tmpdir, "bytes_test");
        let payload = [0u8, 159, 146, 150];
        path.write_bytes(&payload).unwrap();
        assert_eq!(path.read_bytes().unwrap(), payload);
        // Invalid UTF-8 is an error only for the text reader.
        assert!(path.read_text().is_err());
    }

    #[test]
    fn read_write_text() {
        let tmpdir = TempDir::new().unwrap();
        let path = scratch(&tmpdir, "text_test");
        path.write_text("line one\nline two\n").unwrap();
        assert_eq!(path.read_text().unwrap(), "line one\nline two\n");
        path.write_text("replaced").unwrap();
        assert_eq!(path.read_text().unwrap(), "replaced");
    }

    #[test]
    fn cwd_is_absolute() {
        let cwd = Path::cwd().unwrap();
        assert!(cwd.is_absolute());
        assert_eq!(cwd.to_string(), ops::abspath(".").unwrap());
    }

    #[test]
    fn lexical_methods_carry_the_collaborator() {
        let path = Path::new("/alpha/beta/gamma.tar.gz");
        assert_eq!(path.name(), "gamma.tar.gz");
        assert_eq!(path.stem(), "gamma.tar");
        assert_eq!(path.suffix(), ".gz");
        assert_eq!(path.parent(), Path::new("/alpha/beta"));
        assert_eq!(
            path.relative_to(&Path::new("/alpha")).unwrap(),
            Path::new("beta/gamma.tar.gz")
        );
        assert_eq!(
            path.with_suffix(".bz2").unwrap(),
            Path::new("/alpha/beta/gamma.tar.bz2")
        );
        assert_eq!(path.pure(), &PureNativePath::new("/alpha/beta/gamma.tar.gz"));
        assert_eq!(path.into_pure().to_string(), "/alpha/beta/gamma.tar.gz");
    }
}

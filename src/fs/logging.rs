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

use log::debug;

use crate::fs::{FileIO, FileSystem, FileSystemProbe, OpenMode};
use crate::Result;

/// A [`FileSystem`] wrapper that logs every operation at debug level
/// before delegating to the inner collaborator
///
/// The label distinguishes multiple wrapped collaborators in shared log
/// output; it leads every log line.
#[derive(Debug, Clone)]
pub struct LoggingFileSystem<T: FileSystem> {
    inner: T,
    label: String,
}

impl<T: FileSystem> LoggingFileSystem<T> {
    /// Wrap the given collaborator, tagging its log lines with `label`
    pub fn new(inner: T, label: impl Into<String>) -> Self {
        Self {
            inner,
            label: label.into(),
        }
    }

    /// The label leading this wrapper's log lines
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Consume self, returning the inner collaborator
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: FileSystem> fmt::Display for LoggingFileSystem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoggingFileSystem({}, {:?})", self.label, self.inner)
    }
}

impl<T: FileSystem> FileSystemProbe for LoggingFileSystem<T> {
    fn exists(&self, path: &str) -> bool {
        debug!("{} exists request for {path}", self.label);
        self.inner.exists(path)
    }

    fn is_file(&self, path: &str) -> bool {
        debug!("{} is_file request for {path}", self.label);
        self.inner.is_file(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        debug!("{} is_dir request for {path}", self.label);
        self.inner.is_dir(path)
    }

    fn is_symlink(&self, path: &str) -> bool {
        debug!("{} is_symlink request for {path}", self.label);
        self.inner.is_symlink(path)
    }
}

impl<T: FileSystem> FileIO for LoggingFileSystem<T> {
    type File = T::File;

    fn open(&self, path: &str, mode: OpenMode) -> Result<Self::File> {
        debug!("{} open request for {path} with mode {mode:?}", self.label);
        self.inner.open(path, mode)
    }

    fn mkdir(&self, path: &str, mode: u32) -> Result<()> {
        debug!("{} mkdir request for {path} with mode {mode:o}", self.label);
        self.inner.mkdir(path, mode)
    }

    fn rmdir(&self, path: &str) -> Result<()> {
        debug!("{} rmdir request for {path}", self.label);
        self.inner.rmdir(path)
    }

    fn unlink(&self, path: &str) -> Result<()> {
        debug!("{} unlink request for {path}", self.label);
        self.inner.unlink(path)
    }

    fn symlink(&self, target: &str, link: &str) -> Result<()> {
        debug!("{} symlink request for {link} pointing to {target}", self.label);
        self.inner.symlink(target, link)
    }

    fn list_children(&self, path: &str) -> Result<Vec<String>> {
        debug!("{} list_children request for {path}", self.label);
        self.inner.list_children(path)
    }
}

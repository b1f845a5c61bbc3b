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

//! Free functions over raw path text
//!
//! These operate on plain strings with the build platform's separator, for
//! callers that do not want a structured [`PurePath`](crate::PurePath)
//! value. Only [`normpath`] normalizes its input; everything else follows
//! string-concatenation semantics and leaves redundant separators untouched.

use crate::path::{resolve, split_extension, Native, Separator};
use crate::{Error, Result};

/// The platform path separator
pub const SEP: &str = Native::SEP;

/// The platform path separator as a single char
pub const SEP_CHAR: char = Native::SEP_CHAR;

/// Join path parts into a complete path
///
/// Separators are added as needed between parts, while existing separators
/// pass through unmodified. A part that starts with the separator discards
/// everything accumulated before it. Use an empty string as the last part to
/// force a trailing separator; an empty part anywhere else contributes its
/// following separator, so a leading empty part anchors the result.
///
/// ```
/// # use pathlib::ops::join;
/// assert_eq!(join(&["/abc", "xyz"]), "/abc/xyz");
/// assert_eq!(join(&["/abc//", "xyz", ""]), "/abc//xyz/");
/// assert_eq!(join(&["", "xyz"]), "/xyz");
/// ```
pub fn join<T: AsRef<str>>(parts: &[T]) -> String {
    let mut joined = String::new();
    let last = parts.len().saturating_sub(1);
    for (index, part) in parts.iter().enumerate() {
        let part = part.as_ref();
        if part.starts_with(SEP) {
            // Absolute part, ignore previous parts.
            joined = part.to_string();
        } else {
            joined.push_str(part);
        }
        if !joined.ends_with(SEP) && index != last {
            joined.push_str(SEP);
        }
    }
    joined
}

/// Split a path into directory and name components
///
/// The split happens at the last separator. A run of trailing separators on
/// the directory component is stripped back, unless the component is the
/// root itself. Joining the two components reproduces an equivalent (but not
/// necessarily identical) path.
pub fn split(path: &str) -> (String, String) {
    let pos = match path.rfind(SEP) {
        Some(pos) => pos + SEP.len(),
        // No directory.
        None => return (String::new(), path.to_string()),
    };
    let (root, name) = path.split_at(pos);
    let root = if root.chars().all(|c| c == SEP_CHAR) {
        root
    } else {
        root.trim_end_matches(SEP_CHAR)
    };
    (root.to_string(), name.to_string())
}

/// The directory component of a path, per [`split`]
pub fn dirname(path: &str) -> String {
    split(path).0
}

/// The name component of a path, per [`split`]
pub fn basename(path: &str) -> String {
    split(path).1
}

/// Normalize a path
///
/// Elides empty and `"."` segments and resolves `".."` segments lexically.
/// A relative path keeps the `".."` segments that cannot be resolved; an
/// absolute path cannot escape above its root.
///
/// ```
/// # use pathlib::ops::normpath;
/// assert_eq!(normpath("/abc/.././xyz/"), "/xyz");
/// assert_eq!(normpath("abc/../../.."), "../..");
/// ```
pub fn normpath(path: &str) -> String {
    let absolute = path.starts_with(SEP);
    let resolved = resolve(absolute, path.split(SEP_CHAR));
    match (absolute, resolved.is_empty()) {
        (true, _) => format!("{}{}", SEP, resolved.join(SEP)),
        (false, true) => String::from("."),
        (false, false) => resolved.join(SEP),
    }
}

/// Return a normalized absolute path
///
/// A relative input is joined with the process working directory first.
/// Fails with the OS failure kind if the working directory cannot be
/// determined.
pub fn abspath(path: &str) -> Result<String> {
    if isabs(path) {
        return Ok(normpath(path));
    }
    let cwd = std::env::current_dir().map_err(|source| Error::Os {
        path: path.to_string(),
        source,
    })?;
    let cwd = cwd.to_string_lossy().into_owned();
    Ok(normpath(&join(&[cwd.as_str(), path])))
}

/// Determine if a path is absolute
pub fn isabs(path: &str) -> bool {
    path.starts_with(SEP)
}

/// Split a path into a root and an extension
///
/// The split happens at the last dot anywhere in the path, not just in the
/// name component. A dot at position 0, or no dot at all, means no
/// extension; the extension always includes its leading dot when present.
///
/// ```
/// # use pathlib::ops::splitext;
/// assert_eq!(splitext("abc..xyz"), ("abc.".to_string(), ".xyz".to_string()));
/// ```
pub fn splitext(path: &str) -> (String, String) {
    let (root, ext) = split_extension(path);
    (root.to_string(), ext.to_string())
}

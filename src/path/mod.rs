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

//! Pure lexical path values
//!
//! [`PurePath`] is an immutable, normalized sequence of path segments. All of
//! its operations are pure functions of their inputs; none of them touch the
//! filesystem. The filesystem-capable counterpart is
//! [`Path`](crate::fs::Path).

use std::fmt::Formatter;
use std::marker::PhantomData;
use std::ops::Div;

use crate::{Error, Result};

mod sep;

pub use sep::{Backslash, Native, Separator, Slash};

/// Resolve a raw segment sequence into its normal form
///
/// Empty and `"."` segments are elided. A `".."` segment cancels the most
/// recent real segment when one is available; otherwise it is retained for a
/// relative path and discarded for an absolute one, which cannot be escaped
/// above its root. The returned sequence never carries the root sentinel.
pub(crate) fn resolve<'a>(
    absolute: bool,
    segments: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let mut resolved: Vec<String> = Vec::new();
    let mut depth = 0isize;
    for segment in segments {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." {
            depth -= 1;
            if depth >= 0 {
                resolved.pop();
            } else if !absolute {
                resolved.push(String::from(".."));
            }
        } else {
            depth += 1;
            resolved.push(segment.to_string());
        }
    }
    resolved
}

/// A system-independent, immutable path value
///
/// A [`PurePath`] maintains the following invariants:
///
/// * Segments are delimited by the separator supplied by `S`
/// * No stored segment is empty or `"."`
/// * A relative path may retain leading `".."` segments; an absolute path
///   never retains `".."`
/// * An absolute path stores the separator sentinel at index 0 of
///   [`PurePath::parts`]; the sentinel is never treated as a name
///
/// Normalization is applied eagerly by every constructor, so two textually
/// different spellings of the same lexical path compare equal:
///
/// ```
/// # use pathlib::PurePosixPath;
/// assert_eq!(PurePosixPath::from("abc"), PurePosixPath::from("./abc"));
/// assert_eq!(PurePosixPath::from("abc//def/").to_string(), "abc/def");
/// assert_eq!(PurePosixPath::from("/abc/../..").to_string(), "/");
/// ```
///
/// The relative root renders as `"."` and the absolute root as the
/// separator:
///
/// ```
/// # use pathlib::PurePosixPath;
/// assert_eq!(PurePosixPath::default().to_string(), ".");
/// assert_eq!(PurePosixPath::from("/").to_string(), "/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PurePath<S: Separator = Native> {
    /// Normalized segments, with the root sentinel first for absolute paths
    parts: Vec<String>,
    sep: PhantomData<S>,
}

/// A [`PurePath`] delimited by forward slashes
pub type PurePosixPath = PurePath<Slash>;

/// A [`PurePath`] delimited by backslashes
pub type PureWindowsPath = PurePath<Backslash>;

/// A [`PurePath`] using the build platform's separator
pub type PureNativePath = PurePath<Native>;

impl<S: Separator> PurePath<S> {
    /// Parse a string into a normalized [`PurePath`]
    ///
    /// Parsing cannot fail: every input denotes some lexical path once
    /// normalization has been applied.
    pub fn new(path: impl AsRef<str>) -> Self {
        let path = path.as_ref();
        let absolute = path.starts_with(S::SEP);
        let resolved = resolve(absolute, path.split(S::SEP_CHAR));
        Self::from_resolved(absolute, resolved)
    }

    /// Assemble a path from segments that are already in normal form
    fn from_resolved(absolute: bool, resolved: Vec<String>) -> Self {
        let mut parts = Vec::with_capacity(resolved.len() + 1);
        if absolute {
            parts.push(S::SEP.to_string());
        }
        parts.extend(resolved);
        Self {
            parts,
            sep: PhantomData,
        }
    }

    /// The normalized segments of this path
    ///
    /// For an absolute path the first segment is the separator sentinel.
    ///
    /// ```
    /// # use pathlib::PurePosixPath;
    /// assert_eq!(PurePosixPath::from("/abc").parts(), ["/", "abc"]);
    /// assert_eq!(PurePosixPath::from("./..").parts(), [".."]);
    /// ```
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// True if this path is anchored at the absolute root
    pub fn is_absolute(&self) -> bool {
        self.parts.first().map(|p| p == S::SEP).unwrap_or(false)
    }

    /// True if this path is the relative or absolute root
    pub fn is_root(&self) -> bool {
        self.parts.is_empty() || (self.parts.len() == 1 && self.is_absolute())
    }

    /// The final path component, or `""` for a root
    pub fn name(&self) -> &str {
        if self.is_root() {
            ""
        } else {
            self.parts.last().map(String::as_str).unwrap_or("")
        }
    }

    /// The path anchor: the separator for an absolute path, else `""`
    pub fn root(&self) -> &str {
        if self.is_absolute() {
            S::SEP
        } else {
            ""
        }
    }

    /// The name with its final extension removed
    ///
    /// A name consisting of a solitary extension (e.g. `".profile"`) is its
    /// own stem, and a name with a trailing dot keeps that dot:
    ///
    /// ```
    /// # use pathlib::PurePosixPath;
    /// assert_eq!(PurePosixPath::from("/abc/def.xyz").stem(), "def");
    /// assert_eq!(PurePosixPath::from(".profile").stem(), ".profile");
    /// assert_eq!(PurePosixPath::from("abc.").stem(), "abc.");
    /// ```
    pub fn stem(&self) -> String {
        let name = self.name();
        let (stem, _) = split_extension(name);
        if stem == "." {
            // A solitary dot is elided here, unlike in splitext().
            return String::new();
        }
        let mut stem = stem.to_string();
        if !name.is_empty() && name.ends_with('.') {
            stem.push('.');
        }
        stem
    }

    /// The final extension of the name, including its leading dot
    ///
    /// ```
    /// # use pathlib::PurePosixPath;
    /// assert_eq!(PurePosixPath::from("abc.def.xyz").suffix(), ".xyz");
    /// assert_eq!(PurePosixPath::from("abc.").suffix(), "");
    /// ```
    pub fn suffix(&self) -> String {
        let (_, suffix) = split_extension(self.name());
        if suffix == "." {
            // A solitary dot is elided here, unlike in splitext().
            return String::new();
        }
        suffix.to_string()
    }

    /// All extensions of the name, outermost last
    ///
    /// A name that starts or ends with a dot has no recognizable extensions
    /// and yields an empty sequence.
    ///
    /// ```
    /// # use pathlib::PurePosixPath;
    /// let path = PurePosixPath::from("abc.def.xyz");
    /// assert_eq!(path.suffixes(), [".def", ".xyz"]);
    /// assert!(PurePosixPath::from(".abc").suffixes().is_empty());
    /// ```
    pub fn suffixes(&self) -> Vec<String> {
        let name = self.name();
        if name.starts_with('.') || name.ends_with('.') {
            return Vec::new();
        }
        name.split('.')
            .skip(1) // the stem
            .map(|piece| format!(".{piece}"))
            .collect()
    }

    /// The direct parent of this path
    ///
    /// A root is its own parent.
    ///
    /// ```
    /// # use pathlib::PurePosixPath;
    /// assert_eq!(PurePosixPath::from("abc/def").parent(), PurePosixPath::from("abc"));
    /// assert_eq!(PurePosixPath::from("/").parent(), PurePosixPath::from("/"));
    /// ```
    pub fn parent(&self) -> Self {
        if self.is_root() {
            return self.clone();
        }
        let mut parts = self.parts.clone();
        parts.pop();
        Self {
            parts,
            sep: PhantomData,
        }
    }

    /// All ancestors of this path, direct parent first
    ///
    /// Returns an empty sequence for a root.
    pub fn parents(&self) -> Vec<Self> {
        let mut parents = Vec::new();
        let mut current = self.clone();
        while !current.is_root() {
            current = current.parent();
            parents.push(current.clone());
        }
        parents
    }

    /// Join this path with another path
    ///
    /// An absolute `other` replaces `self` entirely; otherwise the combined
    /// segment sequence is re-resolved so the eager normalization invariant
    /// holds for the result.
    ///
    /// ```
    /// # use pathlib::PurePosixPath;
    /// let base = PurePosixPath::from("abc");
    /// assert_eq!(base.joinpath("def/"), PurePosixPath::from("abc/def"));
    /// assert_eq!(base.joinpath("/def"), PurePosixPath::from("/def"));
    /// assert_eq!(base.joinpath(".."), PurePosixPath::default());
    /// ```
    pub fn joinpath(&self, other: impl Into<Self>) -> Self {
        let other = other.into();
        if other.is_absolute() {
            return other;
        }
        let absolute = self.is_absolute();
        let combined: Vec<&str> = self.segments().chain(other.segments()).collect();
        Self::from_resolved(absolute, resolve(absolute, combined))
    }

    /// Compute this path relative to `other`
    ///
    /// Fails with [`Error::InvalidArgument`] unless the segments of `other`
    /// are a prefix of the segments of `self`. The relative root is a prefix
    /// of everything, so `relative_to` of it returns `self` unchanged.
    pub fn relative_to(&self, other: &Self) -> Result<Self> {
        if other.parts.len() > self.parts.len()
            || self.parts[..other.parts.len()] != other.parts[..]
        {
            return Err(Error::InvalidArgument {
                message: format!("path \"{self}\" does not start with \"{other}\""),
            });
        }
        let remainder = self.parts[other.parts.len()..].to_vec();
        Ok(Self {
            parts: remainder,
            sep: PhantomData,
        })
    }

    /// Replace the final path component
    ///
    /// Fails with [`Error::InvalidArgument`] if this path has no name or if
    /// `name` is not a single valid segment.
    ///
    /// ```
    /// # use pathlib::PurePosixPath;
    /// let path = PurePosixPath::from("abc/def");
    /// assert_eq!(path.with_name("xyz").unwrap(), PurePosixPath::from("abc/xyz"));
    /// assert!(path.with_name("xyz/").is_err());
    /// ```
    pub fn with_name(&self, name: &str) -> Result<Self> {
        if self.name().is_empty() {
            return Err(Error::InvalidArgument {
                message: format!("path \"{self}\" has no name"),
            });
        }
        if name.is_empty() || name == "." || name == ".." || name.contains(S::SEP_CHAR) {
            return Err(Error::InvalidArgument {
                message: format!("invalid name \"{name}\""),
            });
        }
        let mut parts = self.parts.clone();
        parts.pop();
        parts.push(name.to_string());
        Ok(Self {
            parts,
            sep: PhantomData,
        })
    }

    /// Replace the final extension of the name
    ///
    /// The new suffix must be empty or a dot followed by one or more
    /// non-separator characters.
    ///
    /// ```
    /// # use pathlib::PurePosixPath;
    /// let path = PurePosixPath::from("abc.def");
    /// assert_eq!(path.with_suffix(".xyz").unwrap(), PurePosixPath::from("abc.xyz"));
    /// ```
    pub fn with_suffix(&self, suffix: &str) -> Result<Self> {
        if !suffix.is_empty()
            && (!suffix.starts_with('.') || suffix.len() == 1 || suffix.contains(S::SEP_CHAR))
        {
            return Err(Error::InvalidArgument {
                message: format!("invalid suffix \"{suffix}\""),
            });
        }
        self.with_name(&format!("{}{}", self.stem(), suffix))
    }

    /// The real segments of this path, without the root sentinel
    fn segments(&self) -> impl Iterator<Item = &str> {
        let skip = usize::from(self.is_absolute());
        self.parts[skip..].iter().map(String::as_str)
    }

    /// Render the canonical text of this path
    fn render(&self) -> String {
        if self.parts.is_empty() {
            return String::from(".");
        }
        if self.is_absolute() {
            format!("{}{}", S::SEP, self.parts[1..].join(S::SEP))
        } else {
            self.parts.join(S::SEP)
        }
    }
}

/// Split `text` at its last dot
///
/// A dot at position 0, or no dot at all, means no extension. The extension
/// always includes the leading dot when present.
pub(crate) fn split_extension(text: &str) -> (&str, &str) {
    match text.rfind('.') {
        Some(pos) if pos > 0 => text.split_at(pos),
        _ => (text, ""),
    }
}

impl<S: Separator> std::fmt::Display for PurePath<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.render().fmt(f)
    }
}

impl<S: Separator> From<&str> for PurePath<S> {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl<S: Separator> From<String> for PurePath<S> {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl<S: Separator> From<&PurePath<S>> for PurePath<S> {
    fn from(path: &PurePath<S>) -> Self {
        path.clone()
    }
}

impl<S: Separator> From<PurePath<S>> for String {
    fn from(path: PurePath<S>) -> Self {
        path.render()
    }
}

/// Ordering is lexical over the rendered canonical text. It does not imply
/// anything about directory hierarchies; it exists so paths can be used in
/// contexts that require a sort order.
impl<S: Separator> Ord for PurePath<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.render().cmp(&other.render())
    }
}

impl<S: Separator> PartialOrd for PurePath<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Separator> Div<&str> for &PurePath<S> {
    type Output = PurePath<S>;

    fn div(self, rhs: &str) -> PurePath<S> {
        self.joinpath(rhs)
    }
}

impl<S: Separator> Div<&PurePath<S>> for &PurePath<S> {
    type Output = PurePath<S>;

    fn div(self, rhs: &PurePath<S>) -> PurePath<S> {
        self.joinpath(rhs)
    }
}

impl<S: Separator> Div<&str> for PurePath<S> {
    type Output = PurePath<S>;

    fn div(self, rhs: &str) -> PurePath<S> {
        self.joinpath(rhs)
    }
}

impl<S: Separator> Div<&PurePath<S>> for PurePath<S> {
    type Output = PurePath<S>;

    fn div(self, rhs: &PurePath<S>) -> PurePath<S> {
        self.joinpath(rhs)
    }
}

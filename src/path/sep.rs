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

//! Separator strategies for [`PurePath`](crate::path::PurePath)
//!
//! A path value is parameterized by the separator that delimits its segments.
//! The strategy is a zero-sized type selected at compile time; there is no
//! runtime reconfiguration.

use std::fmt::Debug;
use std::hash::Hash;

mod private {
    pub trait Sealed {}

    impl Sealed for super::Slash {}
    impl Sealed for super::Backslash {}
}

/// Supplies the separator constants for a path flavor
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait Separator:
    Clone + Copy + Debug + Default + PartialEq + Eq + PartialOrd + Ord + Hash + private::Sealed
{
    /// The separator as a string slice
    const SEP: &'static str;

    /// The separator as a single char
    const SEP_CHAR: char;
}

/// Forward-slash separated paths, as used on POSIX platforms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slash;

impl Separator for Slash {
    const SEP: &'static str = "/";
    const SEP_CHAR: char = '/';
}

/// Backslash separated paths, as used on Windows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Backslash;

impl Separator for Backslash {
    const SEP: &'static str = "\\";
    const SEP_CHAR: char = '\\';
}

/// The separator flavor of the build platform
#[cfg(windows)]
pub type Native = Backslash;

/// The separator flavor of the build platform
#[cfg(not(windows))]
pub type Native = Slash;

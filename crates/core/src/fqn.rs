// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use lasso::{Spur, ThreadedRodeo};

/// The project-wide string interner every `Fqn` is built through. FQNs are
/// the single most-cloned identifier in the pipeline — every scope push,
/// every symbol-table lookup key, every `CALLS`/`INHERITS` edge endpoint
/// carries one — so instead of cloning a fresh `String` at each `child`/
/// `join_path` call, the dotted text is interned once and every `Fqn`
/// after that is a `Copy` key into this table. `ThreadedRodeo` is used
/// rather than the plain single-threaded `Rodeo` because interning happens
/// from every `rayon` worker during the Define phase (§5).
static INTERNER: OnceLock<ThreadedRodeo> = OnceLock::new();

fn interner() -> &'static ThreadedRodeo {
    INTERNER.get_or_init(ThreadedRodeo::new)
}

/// A fully qualified name: `<project>.<pkg1>.<pkg2>...<module>.<type?>.<member?>`.
///
/// `Fqn` is the one identifier threaded through every crate boundary. It is
/// assigned once, during the walk/definition phases, and never changes —
/// the resolution phase only ever reads `Fqn`s, it never mints new ones
/// except by joining an already-known `Fqn` with a single segment. It is
/// a thin, `Copy` key (a `lasso::Spur`) into the process-wide interner
/// above; the dotted text itself is only ever allocated once per distinct
/// FQN, not once per clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fqn(Spur);

impl Fqn {
    /// Start a new FQN at the project root, e.g. the project name itself.
    pub fn root(segment: impl Into<String>) -> Self {
        Self(interner().get_or_intern(segment.into()))
    }

    /// Build an `Fqn` from an already dot-joined string (used when
    /// reconstructing a candidate FQN from written import-path text).
    pub fn from_dotted(dotted: impl Into<String>) -> Self {
        Self(interner().get_or_intern(dotted.into()))
    }

    /// Append one lexical child segment, never a semantic one: nested
    /// types and nested functions extend the path with their lexical
    /// parent's name, not with any notion of "owning type" beyond that.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        Self(interner().get_or_intern(format!("{}.{}", self.as_str(), segment)))
    }

    /// Append a full dotted path (e.g. resolving `X.Y.Z` against a project
    /// root) in one step.
    #[must_use]
    pub fn join_path(&self, dotted: &str) -> Self {
        if dotted.is_empty() {
            *self
        } else {
            Self(interner().get_or_intern(format!("{}.{}", self.as_str(), dotted)))
        }
    }

    pub fn as_str(&self) -> &'static str {
        interner().resolve(&self.0)
    }

    /// The last dotted segment, i.e. this entity's own simple name.
    pub fn simple_name(&self) -> &'static str {
        let s = self.as_str();
        s.rsplit('.').next().unwrap_or(s)
    }

    /// The FQN of the lexical parent, if any (the project root has none).
    pub fn parent(&self) -> Option<Self> {
        let s = self.as_str();
        s.rfind('.').map(|idx| Self::from_dotted(&s[..idx]))
    }

    pub fn segments(&self) -> impl Iterator<Item = &'static str> {
        self.as_str().split('.')
    }

    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// `true` if `self` is `other` or a descendant of `other` in the
    /// lexical-containment sense (used by diagnostics, not by resolution).
    pub fn is_within(&self, other: &Fqn) -> bool {
        let s = self.as_str();
        let o = other.as_str();
        s == o || s.starts_with(&format!("{o}."))
    }
}

impl fmt::Display for Fqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Fqn> for String {
    fn from(fqn: Fqn) -> Self {
        fqn.as_str().to_string()
    }
}

impl AsRef<str> for Fqn {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Ordered lexicographically by the dotted text, matching the behavior of
/// the hand-rolled `String` newtype this replaced — interning keys
/// (`Spur`) carry no meaningful order of their own.
impl PartialOrd for Fqn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fqn {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_appends_one_segment() {
        let root = Fqn::root("myproj");
        let module = root.child("utils").child("helpers");
        assert_eq!(module.as_str(), "myproj.utils.helpers");
        assert_eq!(module.simple_name(), "helpers");
    }

    #[test]
    fn parent_strips_last_segment() {
        let fqn = Fqn::from_dotted("myproj.utils.helpers.short");
        assert_eq!(fqn.parent().unwrap().as_str(), "myproj.utils.helpers");
        assert_eq!(Fqn::root("myproj").parent(), None);
    }

    #[test]
    fn join_path_handles_empty() {
        let root = Fqn::root("myproj");
        assert_eq!(root.join_path(""), root);
        assert_eq!(root.join_path("a.b").as_str(), "myproj.a.b");
    }

    #[test]
    fn is_within_is_prefix_aware_not_substring() {
        let parent = Fqn::root("myproj");
        let sibling = Fqn::from_dotted("myprojX.thing");
        assert!(!sibling.is_within(&parent));
        assert!(parent.child("a").is_within(&parent));
    }
}

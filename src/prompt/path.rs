//! Path segmentation.
//!
//! A path is split into its non-empty components. Each component is tagged
//! with a single separator digit, `(components remaining, including this one)
//! mod 10`, so the last component is always `1` and the digits count down
//! towards the current directory.
//!
//! Control characters and DEL are replaced with [`NONPRINT_MARKER`], which can
//! never appear inside a component. The renderer turns each marker into the
//! configured non-printable glyph, one glyph per replaced character.

use super::state::NO_REPOSITORY;

/// Stand-in for a non-printable character within a component.
pub const NONPRINT_MARKER: char = '/';

/// One printable path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathComponent {
    /// Component text with non-printable characters replaced
    text: String,
    /// Character count of `text`
    len: usize,
    pub separator: char,
    /// Component lies inside the current repository
    pub in_repository: bool,
    /// Characters elided from the end; never more than `len - 1`
    omitted: usize,
}

/// A run of visible component text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRun<'a> {
    Text(&'a str),
    /// Number of consecutive non-printable characters
    NonPrintable(usize),
}

impl PathComponent {
    fn new(raw: &str, separator: char, in_repository: bool) -> Self {
        let text: String = raw
            .chars()
            .map(|c| if is_nonprintable(c) { NONPRINT_MARKER } else { c })
            .collect();
        let len = text.chars().count();
        Self {
            text,
            len,
            separator,
            in_repository,
            omitted: 0,
        }
    }

    /// Character count before elision.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn omitted(&self) -> usize {
        self.omitted
    }

    /// Elide `omitted` trailing characters. The first character always stays.
    pub fn set_omitted(&mut self, omitted: usize) {
        self.omitted = omitted.min(self.len.saturating_sub(1));
    }

    /// Largest number of characters that may be elided.
    pub fn max_omitted(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Rendered width: separator digit, kept characters and omission marker.
    pub fn rendered_len(&self) -> usize {
        1 + (self.len - self.omitted) + usize::from(self.omitted > 0)
    }

    /// Text that survives elision, with markers still in place.
    pub fn visible(&self) -> &str {
        let keep = self.len - self.omitted;
        match self.text.char_indices().nth(keep) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    /// Visible text split into printable and non-printable runs.
    pub fn runs(&self) -> Vec<PathRun<'_>> {
        let mut runs = Vec::new();
        let mut rest = self.visible();
        while !rest.is_empty() {
            let printable = rest.find(NONPRINT_MARKER).unwrap_or(rest.len());
            if printable > 0 {
                runs.push(PathRun::Text(&rest[..printable]));
                rest = &rest[printable..];
                continue;
            }
            let markers = rest
                .find(|c: char| c != NONPRINT_MARKER)
                .unwrap_or(rest.len());
            // The marker is one byte wide, so bytes == characters here
            runs.push(PathRun::NonPrintable(markers));
            rest = &rest[markers..];
        }
        runs
    }
}

/// The current path, split for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments {
    pub components: Vec<PathComponent>,
    /// `/` itself is the repository root (only meaningful with no components)
    pub root_in_repository: bool,
}

impl PathSegments {
    /// Split `path` and mark the components inside the repository.
    ///
    /// Component `i` of `n` is `n - 1 - i` components away from the end; it is
    /// inside the repository when that distance is at most `git_dir_depth`.
    pub fn split(path: &str, git_dir_depth: i64) -> Self {
        let raw: Vec<&str> = path.split('/').filter(|c| !c.is_empty()).collect();
        let count = raw.len();
        let components = raw
            .into_iter()
            .enumerate()
            .map(|(i, component)| {
                let remaining = count - i;
                let separator = char::from_digit((remaining % 10) as u32, 10).unwrap_or('0');
                let distance = (remaining - 1) as i64;
                let in_repository = git_dir_depth != NO_REPOSITORY && distance <= git_dir_depth;
                PathComponent::new(component, separator, in_repository)
            })
            .collect();

        Self {
            components,
            root_in_repository: git_dir_depth != NO_REPOSITORY && git_dir_depth >= -1,
        }
    }

    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Rendered width of the path content, excluding the surrounding block.
    pub fn rendered_len(&self) -> usize {
        if self.is_root() {
            1
        } else {
            self.components.iter().map(PathComponent::rendered_len).sum()
        }
    }
}

fn is_nonprintable(c: char) -> bool {
    (c as u32) < 32 || c as u32 == 127
}

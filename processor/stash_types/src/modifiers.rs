//! Member modifier flags.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Modifier set attached to a member declaration.
    ///
    /// Mirrors the host language's declaration modifiers. Stored as a
    /// bitset so policy checks are plain intersections.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const ABSTRACT = 1 << 5;
        const TRANSIENT = 1 << 6;
        const VOLATILE = 1 << 7;
    }
}

impl Modifiers {
    /// Check for exclusively-private visibility.
    #[inline]
    pub const fn is_private(self) -> bool {
        self.contains(Self::PRIVATE)
    }

    /// Check for static storage.
    #[inline]
    pub const fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    /// Check for an immutable binding.
    #[inline]
    pub const fn is_final(self) -> bool {
        self.contains(Self::FINAL)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(&str, Modifiers); 8] = [
            ("public", Modifiers::PUBLIC),
            ("protected", Modifiers::PROTECTED),
            ("private", Modifiers::PRIVATE),
            ("static", Modifiers::STATIC),
            ("final", Modifiers::FINAL),
            ("abstract", Modifiers::ABSTRACT),
            ("transient", Modifiers::TRANSIENT),
            ("volatile", Modifiers::VOLATILE),
        ];

        if self.is_empty() {
            return write!(f, "<none>");
        }
        let mut first = true;
        for (name, flag) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

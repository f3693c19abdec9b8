use std::fmt::Display;
use std::fmt::Formatter;

/// A handle to a variable of a [`super::Csp`]. Handles are only meaningful for the problem which
/// created them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainId {
    id: u32,
}

impl DomainId {
    pub(crate) fn new(id: u32) -> Self {
        DomainId { id }
    }

    pub fn index(&self) -> usize {
        self.id as usize
    }
}

impl Display for DomainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

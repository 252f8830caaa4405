use serde::Serialize;

/// A single catalogue control. Immutable and `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Control {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl Control {
    #[must_use]
    pub const fn new(id: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}

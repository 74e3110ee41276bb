//! Optional capabilities.
//!
//! Some collaborators (statistical sentence segmentation, language identification)
//! depend on resources that may not be installed. They are probed once, and the
//! outcome is kept as a [Capability] that call sites match on.

/// Outcome of a capability probe.
#[derive(Debug)]
pub enum Capability<T> {
    Available(T),
    /// Holds the reason why the capability could not be set up.
    Unavailable(String),
}

impl<T> Capability<T> {
    /// Build a capability from a fallible constructor, keeping the error message as the reason.
    pub fn probe<E: std::fmt::Debug>(res: Result<T, E>) -> Self {
        match res {
            Ok(inner) => Capability::Available(inner),
            Err(e) => Capability::Unavailable(format!("{:?}", e)),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Capability<U> {
        match self {
            Capability::Available(inner) => Capability::Available(f(inner)),
            Capability::Unavailable(reason) => Capability::Unavailable(reason),
        }
    }

    /// Get the capability, if available.
    pub fn available(&self) -> Option<&T> {
        match self {
            Capability::Available(inner) => Some(inner),
            Capability::Unavailable(_) => None,
        }
    }
}

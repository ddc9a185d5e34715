use crate::utils::UNAVAILABLE_PRIORITY;

/// What one backend reported when probed: how much it wants to be chosen and
/// how to call it.
///
/// A capability is available only when its priority is non-negative and its
/// entry points were resolved; an unavailable capability always reports
/// [`UNAVAILABLE_PRIORITY`] and hands out no entry points.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendCapability<E> {
    priority: i32,
    entry_points: Option<E>,
}

impl<E> Default for BackendCapability<E> {
    fn default() -> Self {
        Self::unavailable()
    }
}

impl<E> BackendCapability<E> {
    pub fn available(priority: i32, entry_points: E) -> Self {
        Self {
            priority,
            entry_points: Some(entry_points),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            priority: UNAVAILABLE_PRIORITY,
            entry_points: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.priority >= 0 && self.entry_points.is_some()
    }

    pub fn priority(&self) -> i32 {
        if self.is_available() {
            self.priority
        } else {
            UNAVAILABLE_PRIORITY
        }
    }

    pub fn entry_points(&self) -> Option<&E> {
        if self.is_available() {
            self.entry_points.as_ref()
        } else {
            None
        }
    }
}

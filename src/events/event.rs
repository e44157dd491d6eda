//! Notification schema.

use std::fmt;

use crate::types::{ArtifactId, Principal, SubjectId};

/// Kind of registry notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// An artifact was appended
    Added,
    /// An artifact was removed
    Removed,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Added => write!(f, "added"),
            EventKind::Removed => write!(f, "removed"),
        }
    }
}

/// A notification emitted after a successful mutation.
///
/// `index` is the artifact's position at the time of the event: the new
/// position for `Added`, the position it was removed from for `Removed`.
/// Positions shift on later removals; `id` does not.
///
/// # Example
///
/// ```
/// use audit_registry::{ArtifactId, EventKind, Principal, RegistryEvent, SubjectId};
///
/// let event = RegistryEvent::Added {
///     subject: SubjectId::new("0x01"),
///     index: 0,
///     id: ArtifactId(1),
///     owner: Principal::new("alice"),
/// };
///
/// assert_eq!(event.kind(), EventKind::Added);
/// assert_eq!(event.index(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// An artifact was appended to `subject`'s sequence
    Added {
        /// Subject the artifact belongs to
        subject: SubjectId,
        /// Position of the new artifact
        index: usize,
        /// Stable identifier of the new artifact
        id: ArtifactId,
        /// Submitter
        owner: Principal,
    },
    /// An artifact was removed from `subject`'s sequence
    Removed {
        /// Subject the artifact belonged to
        subject: SubjectId,
        /// Position the artifact was removed from
        index: usize,
        /// Stable identifier of the removed artifact
        id: ArtifactId,
        /// Owner that removed it
        owner: Principal,
    },
}

impl RegistryEvent {
    /// Returns the event kind.
    pub fn kind(&self) -> EventKind {
        match self {
            RegistryEvent::Added { .. } => EventKind::Added,
            RegistryEvent::Removed { .. } => EventKind::Removed,
        }
    }

    /// Returns the subject.
    pub fn subject(&self) -> &SubjectId {
        match self {
            RegistryEvent::Added { subject, .. } | RegistryEvent::Removed { subject, .. } => {
                subject
            }
        }
    }

    /// Returns the artifact position.
    pub fn index(&self) -> usize {
        match self {
            RegistryEvent::Added { index, .. } | RegistryEvent::Removed { index, .. } => *index,
        }
    }

    /// Returns the artifact id.
    pub fn id(&self) -> ArtifactId {
        match self {
            RegistryEvent::Added { id, .. } | RegistryEvent::Removed { id, .. } => *id,
        }
    }

    /// Returns the artifact owner.
    pub fn owner(&self) -> &Principal {
        match self {
            RegistryEvent::Added { owner, .. } | RegistryEvent::Removed { owner, .. } => owner,
        }
    }
}

impl fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[subject={}, index={}, id={}, owner={}]",
            self.kind(),
            self.subject(),
            self.index(),
            self.id(),
            self.owner()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn removed() -> RegistryEvent {
        RegistryEvent::Removed {
            subject: SubjectId::new("0xabc"),
            index: 2,
            id: ArtifactId(9),
            owner: Principal::new("carol"),
        }
    }

    #[test]
    fn accessors_cover_both_variants() {
        let event = removed();
        assert_eq!(event.kind(), EventKind::Removed);
        assert_eq!(event.subject().as_str(), "0xabc");
        assert_eq!(event.index(), 2);
        assert_eq!(event.id(), ArtifactId(9));
        assert_eq!(event.owner().id(), "carol");
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(
            removed().to_string(),
            "removed[subject=0xabc, index=2, id=#9, owner=carol]"
        );
    }

    #[test]
    fn event_kind_display() {
        assert_eq!(EventKind::Added.to_string(), "added");
        assert_eq!(EventKind::Removed.to_string(), "removed");
    }
}

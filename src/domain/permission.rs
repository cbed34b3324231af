// SPDX-License-Identifier: MPL-2.0
//! Media library permission state.

/// Answer of the platform permission collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Permission lifecycle of the screen.
///
/// The permission is requested once per screen lifetime. Only the first
/// resolution is recorded; later answers are ignored and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    #[default]
    Unrequested,
    Granted,
    Denied,
}

impl PermissionState {
    /// Records the collaborator's answer.
    ///
    /// Returns `true` when the caller must warn the user, which only happens
    /// on the transition from `Unrequested` to `Denied`.
    pub fn resolve(&mut self, status: PermissionStatus) -> bool {
        if *self != PermissionState::Unrequested {
            return false;
        }
        *self = match status {
            PermissionStatus::Granted => PermissionState::Granted,
            PermissionStatus::Denied => PermissionState::Denied,
        };
        status == PermissionStatus::Denied
    }

    #[must_use]
    pub fn is_resolved(self) -> bool {
        self != PermissionState::Unrequested
    }

    #[must_use]
    pub fn is_denied(self) -> bool {
        self == PermissionState::Denied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unrequested() {
        let state = PermissionState::default();
        assert_eq!(state, PermissionState::Unrequested);
        assert!(!state.is_resolved());
    }

    #[test]
    fn granted_does_not_warn() {
        let mut state = PermissionState::default();
        assert!(!state.resolve(PermissionStatus::Granted));
        assert_eq!(state, PermissionState::Granted);
    }

    #[test]
    fn denied_warns_exactly_once() {
        let mut state = PermissionState::default();
        assert!(state.resolve(PermissionStatus::Denied));
        assert!(state.is_denied());
        assert!(!state.resolve(PermissionStatus::Denied));
        assert!(state.is_denied());
    }

    #[test]
    fn later_resolutions_are_ignored() {
        let mut state = PermissionState::default();
        state.resolve(PermissionStatus::Granted);
        assert!(!state.resolve(PermissionStatus::Denied));
        assert_eq!(state, PermissionState::Granted);
    }
}

//! Focused-project state behind the project modal

use crate::content::Project;

/// At most one project is expanded in the overlay at a time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ProjectFocus {
    focused: Option<&'static Project>,
}

impl ProjectFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus `project`, replacing whatever was focused before.
    pub fn select(&mut self, project: &'static Project) {
        self.focused = Some(project);
    }

    pub fn dismiss(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<&'static Project> {
        self.focused
    }

    pub fn is_open(&self) -> bool {
        self.focused.is_some()
    }

    pub fn is_focused(&self, project: &Project) -> bool {
        self.focused.is_some_and(|p| p == project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn select_and_dismiss() {
        let mut focus = ProjectFocus::new();
        assert!(!focus.is_open());
        focus.select(&PROJECTS[1]);
        assert_eq!(focus.focused(), Some(&PROJECTS[1]));
        focus.dismiss();
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn second_selection_replaces_first() {
        let mut focus = ProjectFocus::new();
        focus.select(&PROJECTS[0]);
        focus.select(&PROJECTS[2]);
        assert!(focus.is_focused(&PROJECTS[2]));
        assert!(!focus.is_focused(&PROJECTS[0]));
    }

    #[test]
    fn dismiss_when_empty_is_fine() {
        let mut focus = ProjectFocus::new();
        focus.dismiss();
        assert!(!focus.is_open());
    }
}

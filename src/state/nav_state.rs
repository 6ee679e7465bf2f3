//! Navigation stack

use crate::app::navigation::{Route, Tab};

/// Single navigation stack plus the active bottom tab.
///
/// The stack is never empty; `back` refuses to pop the last route.
pub struct NavState {
    active_tab: Tab,
    stack: Vec<Route>,
}

impl NavState {
    /// The app boots into the auth flow.
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Home,
            stack: vec![Route::Login],
        }
    }

    pub fn current(&self) -> &Route {
        // invariant: stack is never empty
        self.stack.last().unwrap_or(&Route::Login)
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Push a route unless it is already on top.
    pub fn push(&mut self, route: Route) {
        if self.current() != &route {
            self.stack.push(route);
        }
    }

    /// Swap the top route without growing the stack.
    pub fn replace(&mut self, route: Route) {
        self.stack.pop();
        self.stack.push(route);
    }

    /// Pop the top route. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Drop the whole stack and start over at the given route. Used by
    /// sign-out and by the auth flow once verification completes.
    pub fn reset(&mut self, route: Route) {
        self.stack.clear();
        self.stack.push(route);
        self.active_tab = Tab::Home;
    }

    /// Switch tabs, resetting the stack to the tab's root route.
    /// Re-selecting the active tab also resets, matching the platform
    /// convention of popping to root.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.stack.clear();
        self.stack.push(tab.route());
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::SharedString;

    #[test]
    fn boots_into_login() {
        let nav = NavState::new();
        assert_eq!(nav.current(), &Route::Login);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn push_and_back_walk_the_stack() {
        let mut nav = NavState::new();
        nav.select_tab(Tab::Files);
        nav.push(Route::Folder(SharedString::from("1")));
        assert_eq!(nav.current(), &Route::Folder(SharedString::from("1")));
        assert!(nav.can_go_back());

        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Files);
        assert!(!nav.back());
        assert_eq!(nav.current(), &Route::Files);
    }

    #[test]
    fn push_is_idempotent_on_top() {
        let mut nav = NavState::new();
        nav.select_tab(Tab::Account);
        nav.push(Route::PlanDetails);
        nav.push(Route::PlanDetails);
        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Account);
    }

    #[test]
    fn replace_swaps_without_growing() {
        let mut nav = NavState::new();
        nav.replace(Route::Signup);
        assert_eq!(nav.current(), &Route::Signup);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn reset_clears_history() {
        let mut nav = NavState::new();
        nav.select_tab(Tab::Account);
        nav.push(Route::PlanDetails);
        nav.reset(Route::Login);
        assert_eq!(nav.current(), &Route::Login);
        assert!(!nav.can_go_back());
        assert_eq!(nav.active_tab(), Tab::Home);
    }

    #[test]
    fn selecting_a_tab_resets_the_stack() {
        let mut nav = NavState::new();
        nav.select_tab(Tab::Files);
        nav.push(Route::Folder(SharedString::from("2")));
        nav.select_tab(Tab::Home);
        assert_eq!(nav.active_tab(), Tab::Home);
        assert_eq!(nav.current(), &Route::Home);
        assert!(!nav.can_go_back());

        // re-selecting pops to root
        nav.push(Route::Activity);
        nav.select_tab(Tab::Home);
        assert_eq!(nav.current(), &Route::Home);
    }
}

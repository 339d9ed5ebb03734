use super::super::state::App;
use super::Effect;
use crate::deck::LinkTarget;
use tracing::{debug, info};

impl App {
    /// Jump to a page's anchor, centering its artboard in the viewport. A
    /// missing anchor silently no-ops and leaves the scroll position alone.
    /// Invoked from the header, the collapsible menu (which closes itself),
    /// the progress rail and contents-page hotspots alike.
    pub(super) fn handle_jump_to_page(&mut self, page: u32, effects: &mut Vec<Effect>) {
        self.nav.menu_open = false;
        match self.layout().centered_offset(page) {
            Some(target) => {
                info!(page, "Jumping to page anchor");
                effects.push(Effect::GlideTo(target));
            }
            None => debug!(page, "Jump target has no anchor; ignoring"),
        }
    }

    pub(super) fn handle_toggle_menu(&mut self) {
        self.nav.menu_open = !self.nav.menu_open;
        debug!(open = self.nav.menu_open, "Toggled navigation menu");
    }

    pub(super) fn handle_scroll_to_top(&mut self, effects: &mut Vec<Effect>) {
        effects.push(Effect::GlideTo(0.0));
    }

    pub(super) fn handle_link(&mut self, target: LinkTarget, effects: &mut Vec<Effect>) {
        if target.leaves_document() {
            effects.push(Effect::OpenLink(target));
        } else if let LinkTarget::Page(page) = target {
            self.handle_jump_to_page(page, effects);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::path::PathBuf;

    fn ready_app() -> App {
        let (mut app, _fetch) = App::bootstrap(AppConfig::default(), PathBuf::from("/nonexistent"));
        app.open_gate(21);
        app
    }

    #[test]
    fn a_jump_closes_the_open_menu() {
        let mut app = ready_app();
        app.nav.menu_open = true;
        let mut effects = Vec::new();
        app.handle_jump_to_page(6, &mut effects);
        assert!(!app.nav.menu_open);
        assert!(matches!(effects.as_slice(), [Effect::GlideTo(_)]));
    }

    #[test]
    fn a_jump_to_an_absent_anchor_pushes_no_effects() {
        let mut app = ready_app();
        let mut effects = Vec::new();
        app.handle_jump_to_page(99, &mut effects);
        assert!(effects.is_empty());
        app.handle_jump_to_page(0, &mut effects);
        assert!(effects.is_empty());
    }

    #[test]
    fn page_links_jump_and_outbound_links_leave_through_the_os() {
        let mut app = ready_app();
        app.nav.menu_open = true;
        let mut effects = Vec::new();
        app.handle_link(LinkTarget::Page(11), &mut effects);
        assert!(!app.nav.menu_open);
        assert!(matches!(effects.as_slice(), [Effect::GlideTo(_)]));

        let mut effects = Vec::new();
        app.handle_link(
            LinkTarget::External("https://example.com".to_string()),
            &mut effects,
        );
        assert!(matches!(effects.as_slice(), [Effect::OpenLink(_)]));
    }
}

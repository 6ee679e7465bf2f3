//! TeamFolderCard Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::components::primitives::avatar_stack::AvatarStack;
use crate::domain::home::TeamFolder;
use crate::i18n::{self, Locale};
use crate::theme::colors::BikaColors;

/// Tile in the team folders grid on the home screen
#[derive(IntoElement)]
pub struct TeamFolderCard {
    id: ElementId,
    folder: TeamFolder,
    locale: Locale,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl TeamFolderCard {
    pub fn new(folder: TeamFolder, locale: Locale) -> Self {
        Self {
            id: ElementId::from(SharedString::from(format!("team-folder-{}", folder.id))),
            folder,
            locale,
            on_click: None,
        }
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for TeamFolderCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let folder = self.folder;
        let files_line = i18n::t_with(
            self.locale,
            "home-files-count",
            &[("count", &folder.files_count.to_string())],
        );

        div()
            .id(self.id)
            .flex_1()
            .p_3()
            .rounded_lg()
            .bg(BikaColors::surface())
            .border_1()
            .border_color(BikaColors::divider())
            .flex()
            .flex_col()
            .gap_2()
            .cursor_pointer()
            .hover(|s| s.bg(BikaColors::surface_muted()))
            .when_some(self.on_click, |el, handler| el.on_click(handler))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(BikaColors::hero_bg())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(BikaColors::accent_purple())
                            .child("▣"),
                    )
                    .child(AvatarStack::new(folder.member_initials.iter().copied())),
            )
            .child(
                div()
                    .text_size(px(14.0))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(BikaColors::text())
                    .child(SharedString::from(folder.name)),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(BikaColors::text_muted())
                    .child(files_line),
            )
    }
}

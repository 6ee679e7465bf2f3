//! TabBar Component
//!
//! Bottom navigation bar with the five main tabs.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::navigation::Tab;
use crate::i18n::{self, Locale};
use crate::theme::colors::BikaColors;

#[derive(IntoElement)]
pub struct TabBar {
    active: Tab,
    locale: Locale,
    on_select: Option<Rc<dyn Fn(Tab, &mut Window, &mut App) + 'static>>,
}

impl TabBar {
    pub fn new(active: Tab, locale: Locale) -> Self {
        Self {
            active,
            locale,
            on_select: None,
        }
    }

    pub fn on_select(mut self, handler: impl Fn(Tab, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for TabBar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let active = self.active;
        let locale = self.locale;
        let on_select = self.on_select;

        div()
            .w_full()
            .py_1()
            .bg(BikaColors::surface())
            .border_t_1()
            .border_color(BikaColors::divider())
            .flex()
            .flex_row()
            .children(Tab::all().iter().map(|&tab| {
                let is_active = tab == active;
                let color = if is_active {
                    BikaColors::primary()
                } else {
                    BikaColors::text_inactive()
                };
                let label: SharedString = i18n::t(locale, tab.title_key());
                let id: ElementId = ElementId::from(SharedString::from(format!(
                    "tab-{}",
                    tab.title_key()
                )));
                let handler = on_select.clone();

                div()
                    .id(id)
                    .flex_1()
                    .py_1()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_1()
                    .cursor_pointer()
                    .text_color(color)
                    .when_some(handler, |el, handler| {
                        el.on_click(move |_event, window, cx| handler(tab, window, cx))
                    })
                    .child(div().text_size(px(18.0)).child(tab.glyph()))
                    .child(div().text_size(px(11.0)).child(label))
            }))
    }
}

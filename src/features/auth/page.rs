//! Auth Pages
//!
//! Sign in, sign up, password confirmation, OTP entry and password
//! reset. One view renders whichever auth route is current; the copy
//! is fixture content and stays in English.

use gpui::{
    div, prelude::*, px, AnyElement, Context, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::primitives::button::Button;
use crate::components::primitives::text_field::TextField;
use crate::features::auth::controller::AuthController;
use crate::theme::colors::BikaColors;

/// Auth flow component
pub struct AuthPage {
    entities: AppEntities,
    controller: AuthController,
}

impl AuthPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = AuthController::new(entities.clone());

        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }

    fn brand_mark(&self) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            .child(
                div()
                    .size(px(56.0))
                    .rounded_lg()
                    .bg(BikaColors::primary())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(24.0))
                    .text_color(BikaColors::text_light())
                    .child("☁"),
            )
            .child(
                div()
                    .text_size(px(20.0))
                    .font_weight(FontWeight::BOLD)
                    .text_color(BikaColors::text())
                    .child("Bika"),
            )
    }

    fn heading(&self, title: &'static str, subtitle: &'static str) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_1()
            .child(
                div()
                    .text_size(px(22.0))
                    .font_weight(FontWeight::BOLD)
                    .text_color(BikaColors::text())
                    .child(title),
            )
            .child(
                div()
                    .max_w(px(300.0))
                    .text_size(px(13.0))
                    .text_color(BikaColors::text_muted())
                    .child(subtitle),
            )
    }

    fn footer_link(
        &self,
        id: &'static str,
        prompt: &'static str,
        link: &'static str,
        target: Route,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .justify_center()
            .gap_1()
            .text_size(px(13.0))
            .child(div().text_color(BikaColors::text_muted()).child(prompt))
            .child(
                div()
                    .id(ElementId::from(SharedString::from(id)))
                    .text_color(BikaColors::primary())
                    .cursor_pointer()
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        this.controller.show(target.clone(), cx);
                    }))
                    .child(link),
            )
    }

    fn frame(&self, children: Vec<AnyElement>) -> AnyElement {
        div()
            .size_full()
            .bg(BikaColors::background())
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .p_4()
            .children(children)
            .into_any_element()
    }

    fn render_login(&self, cx: &mut Context<Self>) -> AnyElement {
        self.frame(vec![
            self.brand_mark().into_any_element(),
            self.heading(
                "Sign in",
                "Access your documents, photos, and videos securely in the cloud.",
            )
            .into_any_element(),
            TextField::new("you@example.com")
                .label("Email")
                .into_any_element(),
            TextField::new("Password")
                .label("Password")
                .into_any_element(),
            div()
                .id("forgot-password")
                .w_full()
                .flex()
                .justify_end()
                .text_size(px(13.0))
                .text_color(BikaColors::primary())
                .cursor_pointer()
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.controller.show(Route::ForgotPassword, cx);
                }))
                .child("Forgot password?")
                .into_any_element(),
            Button::primary("login-continue", "Continue")
                .full_width()
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.controller.show(Route::Password, cx);
                }))
                .into_any_element(),
            self.footer_link(
                "go-signup",
                "Need an account?",
                "Create one",
                Route::Signup,
                cx,
            )
            .into_any_element(),
        ])
    }

    fn render_signup(&self, cx: &mut Context<Self>) -> AnyElement {
        self.frame(vec![
            self.brand_mark().into_any_element(),
            self.heading(
                "Create account",
                "Store, organize, and share documents securely with 15 GB of free storage.",
            )
            .into_any_element(),
            TextField::new("Jane Doe")
                .label("Full name")
                .into_any_element(),
            TextField::new("you@example.com")
                .label("Email")
                .into_any_element(),
            TextField::new("Password")
                .label("Password")
                .into_any_element(),
            Button::primary("signup-submit", "Sign up")
                .full_width()
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.controller.show(Route::Otp, cx);
                }))
                .into_any_element(),
            self.footer_link(
                "go-login",
                "Already have an account?",
                "Sign in",
                Route::Login,
                cx,
            )
            .into_any_element(),
        ])
    }

    fn render_password(&self, cx: &mut Context<Self>) -> AnyElement {
        self.frame(vec![
            self.brand_mark().into_any_element(),
            self.heading("Are You Digne?", "Confirm yourself by your password")
                .into_any_element(),
            TextField::new("Type your password")
                .masked()
                .into_any_element(),
            Button::primary("password-login", "Login")
                .full_width()
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.controller.show(Route::Otp, cx);
                }))
                .into_any_element(),
            self.footer_link(
                "go-reset",
                "Forgotten your password?",
                "Reset Password",
                Route::ForgotPassword,
                cx,
            )
            .into_any_element(),
        ])
    }

    fn render_otp(&self, cx: &mut Context<Self>) -> AnyElement {
        self.frame(vec![
            self.brand_mark().into_any_element(),
            self.heading(
                "Welcome Digne!",
                "Enter a 6-digit access code sent to your email",
            )
            .into_any_element(),
            TextField::new("000000").into_any_element(),
            Button::primary("otp-verify", "Verify")
                .full_width()
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.controller.complete(cx);
                }))
                .into_any_element(),
            self.footer_link(
                "otp-resend",
                "Didn't get your OTP code?",
                "Send again",
                Route::Otp,
                cx,
            )
            .into_any_element(),
        ])
    }

    fn render_forgot_password(&self, cx: &mut Context<Self>) -> AnyElement {
        self.frame(vec![
            self.brand_mark().into_any_element(),
            self.heading(
                "Reset password",
                "Enter the email associated with your account and we'll send an OTP to reset your password.",
            )
            .into_any_element(),
            TextField::new("you@example.com")
                .label("Email")
                .into_any_element(),
            Button::primary("forgot-send", "Send OTP")
                .full_width()
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.controller.show(Route::Otp, cx);
                }))
                .into_any_element(),
            self.footer_link(
                "back-to-login",
                "",
                "Back to sign in",
                Route::Login,
                cx,
            )
            .into_any_element(),
        ])
    }
}

impl Render for AuthPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let route = self.entities.nav.read(cx).current().clone();

        match route {
            Route::Signup => self.render_signup(cx),
            Route::Otp => self.render_otp(cx),
            Route::Password => self.render_password(cx),
            Route::ForgotPassword => self.render_forgot_password(cx),
            _ => self.render_login(cx),
        }
    }
}

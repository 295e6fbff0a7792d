//! Login page with login/register modes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only public route. Submits through `SessionContext`, then navigates to
//! the dashboard. Backend rejections are shown inline and never retried.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::gateway::Registration;
use crate::routes::AppRoute;
use crate::state::session::SessionContext;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Which form the card shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

pub(crate) fn submit_label(mode: AuthMode, busy: bool) -> &'static str {
    match (busy, mode) {
        (true, _) => "Processing...",
        (false, AuthMode::Login) => "Login",
        (false, AuthMode::Register) => "Create Account",
    }
}

/// Trim the email and check both fields before any network call.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn optional_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn LoginPage(session: SessionContext) -> impl IntoView {
    let mode = RwSignal::new(AuthMode::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let mode_value = mode.get();
        let registration = Registration {
            email: email_value.clone(),
            password: password_value.clone(),
            firstname: optional_name(&firstname.get()),
            lastname: optional_name(&lastname.get()),
        };
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match mode_value {
                AuthMode::Login => session.login(&email_value, &password_value).await,
                AuthMode::Register => session.register(&registration).await,
            };
            busy.set(false);
            match result {
                Ok(()) => navigate(AppRoute::HOME.path(), NavigateOptions::default()),
                Err(e) => error.set(e.display_message().to_owned()),
            }
        });
    };

    let tab_class = move |tab: AuthMode| {
        if mode.get() == tab { "login-tab login-tab--active" } else { "login-tab" }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"AI Security Platform"</h1>
                <p class="login-card__subtitle">"Trust & Security Layer for AI Applications"</p>
                <div class="login-tabs">
                    <button class=move || tab_class(AuthMode::Login) on:click=move |_| mode.set(AuthMode::Login)>
                        "Login"
                    </button>
                    <button
                        class=move || tab_class(AuthMode::Register)
                        on:click=move |_| mode.set(AuthMode::Register)
                    >
                        "Register"
                    </button>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message login-message--error">{move || error.get()}</p>
                    </Show>
                    <Show when=move || mode.get() == AuthMode::Register>
                        <div class="login-form__names">
                            <input
                                class="login-input"
                                type="text"
                                placeholder="First name"
                                prop:value=move || firstname.get()
                                on:input=move |ev| firstname.set(event_target_value(&ev))
                            />
                            <input
                                class="login-input"
                                type="text"
                                placeholder="Last name"
                                prop:value=move || lastname.get()
                                on:input=move |ev| lastname.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(mode.get(), busy.get())}
                    </button>
                </form>
            </div>
        </div>
    }
}

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::api;
use crate::components::alert;
use crate::context::{use_app, use_session};
use crate::guard::DASHBOARD_PATH;
use crate::models::LoginRequest;

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            alert("Email and password are required");
            return;
        }
        set_submitting.set(true);
        let api = app.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&api, &credentials).await {
                Ok(_) => {
                    session.refresh();
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => alert(&e.user_message("Login failed")),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Show
            when=move || !session.has_token()
            fallback=|| view! { <Redirect path=DASHBOARD_PATH/> }
        >
            <div class="auth-page">
                <form class="auth-form" on:submit=on_submit.clone()>
                    <h1>"Admin Login"</h1>
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                    />
                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Login" }}
                    </button>
                    <a href="/" class="back-link">"← Back to site"</a>
                </form>
            </div>
        </Show>
    }
}

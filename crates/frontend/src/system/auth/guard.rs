use contracts::system::admin_auth::AuthDecision;
use leptos::prelude::*;

use super::context::{admin_auth, redirect_to, use_dashboard_config};

/// Renders children only when the admin flag is set.
/// Otherwise redirects to the login route and renders nothing.
#[component]
pub fn RequireAdminAuth(children: ChildrenFn) -> impl IntoView {
    let config = use_dashboard_config();
    let (is_loading, set_is_loading) = signal(true);
    let (is_authenticated, set_is_authenticated) = signal(false);

    // Check once on mount
    Effect::new(move |_| {
        match admin_auth(&config).check() {
            AuthDecision::Granted => set_is_authenticated.set(true),
            AuthDecision::Redirect(route) => redirect_to(&route),
        }
        set_is_loading.set(false);
    });

    view! {
        <Show
            when=move || !is_loading.get() && is_authenticated.get()
            fallback=move || {
                if is_loading.get() {
                    view! {
                        <div class="admin-loading">
                            <div class="admin-spinner"></div>
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}

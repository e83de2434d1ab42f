use crate::components::layout::{AppShell, Sidebar};
use leptos::prelude::*;

/// Layout wrapper for the administration pages: the shared chrome plus the
/// role-aware side navigation. Access control already happened in the
/// navigation guard by the time this renders.
#[component]
pub fn AdminShell(children: Children) -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex gap-6">
                <Sidebar />
                <div class="flex-1 min-w-0">{children()}</div>
            </div>
        </AppShell>
    }
}

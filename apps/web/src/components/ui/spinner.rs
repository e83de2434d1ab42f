use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div role="status" aria-live="polite" class="inline-flex">
            <span class="h-6 w-6 animate-spin rounded-full border-[3px] border-gray-200 border-t-blue-600 dark:border-gray-700 dark:border-t-blue-500"></span>
            <span class="sr-only">"Cargando"</span>
        </div>
    }
}

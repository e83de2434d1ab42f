use leptos::prelude::*;

// Matches the call-to-action buttons on the public pages.
const BUTTON_CLASS: &str = "inline-flex items-center justify-center text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm w-full sm:w-auto px-5 py-2.5 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800 transition-all";

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let is_disabled = move || disabled.get();

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=BUTTON_CLASS
            class:cursor-not-allowed=is_disabled
            class:opacity-60=is_disabled
            disabled=is_disabled
        >
            {children()}
        </button>
    }
}

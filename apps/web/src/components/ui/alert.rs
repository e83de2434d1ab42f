//! Alert banners for success and error messages. Messages must be safe to
//! render and should never include credentials or token material.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn container_class(self) -> &'static str {
        match self {
            AlertKind::Error => {
                "flex items-start gap-2 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
            }
            AlertKind::Success => {
                "flex items-start gap-2 rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
            }
            AlertKind::Info => {
                "flex items-start gap-2 rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
            }
        }
    }

    fn icon(self) -> &'static str {
        match self {
            AlertKind::Error => "error",
            AlertKind::Success => "check_circle",
            AlertKind::Info => "info",
        }
    }
}

/// Renders a styled alert banner with a leading status icon.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    view! {
        <div class=kind.container_class() role="alert">
            <span class="material-symbols-outlined text-base" aria-hidden="true">
                {kind.icon()}
            </span>
            <span>{message}</span>
        </div>
    }
}

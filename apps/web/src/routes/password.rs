//! Password recovery pages. Both are public by design: the people who
//! need them are locked out. The reset token travels in the URL and must
//! never be rendered or logged.

use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn RecuperarContrasenaPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                    "Recuperar contraseña"
                </h1>
                <p class="mt-4 text-gray-500 dark:text-gray-400">
                    "Ingresa tu correo y te enviaremos un enlace para restablecerla."
                </p>
            </div>
        </AppShell>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                    "Nueva contraseña"
                </h1>
                <p class="mt-4 text-gray-500 dark:text-gray-400">
                    "Define una nueva contraseña para tu cuenta."
                </p>
            </div>
        </AppShell>
    }
}

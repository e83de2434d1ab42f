use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::use_session;
use crate::routes::registry::RouteId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

const INPUT_CLASS: &str = "block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-blue-600 focus:outline-none focus:ring-4 focus:ring-blue-100 dark:border-gray-600 dark:bg-gray-700 dark:text-white dark:placeholder-gray-400 dark:focus:border-blue-500 dark:focus:ring-blue-900";

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        let store = store.clone();
        async move {
            store
                .login(&input.email, &input.password)
                .await
                .map_err(|err| err.to_string())
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => navigate(RouteId::Administracion.path(), Default::default()),
                Err(message) => set_error.set(Some(message)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some("Ingresa tu correo y contraseña.".to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <div class="flex justify-center px-4 py-12">
                <form
                    class="w-full max-w-md rounded-lg border border-gray-200 bg-white p-8 shadow-sm dark:border-gray-800 dark:bg-gray-900"
                    on:submit=on_submit
                >
                    <h1 class="mb-1 text-2xl font-bold text-gray-900 dark:text-white">
                        "Iniciar sesión"
                    </h1>
                    <p class="mb-6 text-sm text-gray-500 dark:text-gray-400">
                        "Accede al panel de administración de Prefabrica."
                    </p>
                    <div class="mb-5">
                        <label
                            class="mb-2 block text-sm font-medium text-gray-900 dark:text-white"
                            for="email"
                        >
                            "Correo electrónico"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class=INPUT_CLASS
                            autocomplete="email"
                            placeholder="nombre@correo.cl"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-5">
                        <label
                            class="mb-2 block text-sm font-medium text-gray-900 dark:text-white"
                            for="password"
                        >
                            "Contraseña"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class=INPUT_CLASS
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-6 text-right text-sm">
                        <A
                            href=RouteId::RecuperarContrasena.path()
                            {..}
                            class="font-medium text-blue-700 hover:underline dark:text-blue-500"
                        >
                            "¿Olvidaste tu contraseña?"
                        </A>
                    </div>
                    <Button button_type="submit" disabled=login_action.pending()>
                        "Iniciar sesión"
                    </Button>
                    {move || {
                        login_action
                            .pending()
                            .get()
                            .then_some(
                                view! {
                                    <div class="mt-4 flex items-center gap-3 text-sm text-gray-500 dark:text-gray-400">
                                        <Spinner />
                                        "Verificando credenciales..."
                                    </div>
                                },
                            )
                    }}
                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=message />
                                    </div>
                                }
                            })
                    }}
                </form>
            </div>
        </AppShell>
    }
}

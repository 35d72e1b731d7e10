use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};
use leptos_router::use_navigate;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let navigate = use_navigate();

    create_effect(move |_| {
        if let Some(Ok(())) = vm.login_action.value().get() {
            navigate("/", Default::default());
        }
    });

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let email_input = Callback::new(move |value: String| vm.form.email.set(value));
    let password_input = Callback::new(move |value: String| vm.form.password.set(value));

    view! {
        <LoginForm
            email=vm.form.email
            password=vm.form.password
            error=vm.error
            pending=vm.pending()
            on_email_input=email_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{icon_arrow_right, icon_line_chart, icon_lock, icon_user};
use crate::config::AppConfig;
use crate::session::{simulate_login, BrowserStore, Session};

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_authenticated: Callback<Session>,
}

fn text_field(
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    icon: Html,
    value: &UseStateHandle<String>,
) -> Html {
    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };

    html! {
        <div class="space-y-2">
            <label class="block text-sm font-medium text-gray-400">{ label }</label>
            <div class="relative neu-concave rounded-xl">
                <div class="absolute inset-y-0 left-0 pl-4 flex items-center text-gray-500 pointer-events-none">
                    { icon }
                </div>
                <input
                    type={kind}
                    required=true
                    value={(**value).clone()}
                    {oninput}
                    {placeholder}
                    class="w-full bg-transparent py-3 pl-12 pr-4 text-gray-200 placeholder-gray-500 focus:outline-none"
                />
            </div>
        </div>
    }
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let config = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let is_loading = use_state(|| false);

    let onsubmit = {
        let is_loading = is_loading.clone();
        let on_authenticated = props.on_authenticated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_loading {
                return;
            }
            is_loading.set(true);

            let is_loading = is_loading.clone();
            let on_authenticated = on_authenticated.clone();
            let config = config.clone();
            spawn_local(async move {
                let store = BrowserStore::new(config.storage_key.clone());
                match simulate_login(&store, config.login_delay_ms).await {
                    Ok(session) => on_authenticated.emit(session),
                    Err(e) => log::error!("login failed: {}", e),
                }
                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen w-full flex items-center justify-center p-4 bg-[#1a1b1e]">
            <div class="w-full max-w-[min(400px,90%)] mx-auto">
                <div class="text-center mb-6 sm:mb-8">
                    <div class="inline-flex items-center justify-center p-3 sm:p-4 neu-convex rounded-2xl mb-3 sm:mb-4 text-gray-200 transform hover:scale-105 transition-transform duration-200">
                        { icon_line_chart() }
                    </div>
                    <h1 class="text-2xl sm:text-3xl font-bold text-gray-200 mb-2">{"TradePro"}</h1>
                    <p class="text-sm sm:text-base text-gray-400">{"Welcome back! Please login to continue."}</p>
                </div>

                <div class="neu-convex rounded-2xl p-6 sm:p-8">
                    <form {onsubmit} class="space-y-5 sm:space-y-6">
                        { text_field("Email", "email", "Enter your email", icon_user(), &email) }
                        { text_field("Password", "password", "Enter your password", icon_lock(), &password) }

                        <div class="pt-2">
                            <button
                                type="submit"
                                disabled={*is_loading}
                                class="neu-button w-full py-3 flex items-center justify-center gap-2 text-gray-200 font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                if *is_loading {
                                    <div class="animate-spin rounded-full h-4 w-4 border-2 border-gray-200 border-t-transparent"></div>
                                } else {
                                    {"Sign In"}
                                    { icon_arrow_right() }
                                }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

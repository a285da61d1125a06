use std::rc::Rc;

use yew::prelude::*;

use crate::browser::{self, PopStateListener};
use crate::components::Layout;
use crate::config::AppConfig;
use crate::pages::{DashboardPage, LoginPage, ProfilePage, SettingsPage, TransactionsPage};
use crate::routes::{guard, resolve, Route};
use crate::session::{BrowserStore, Session};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<AppConfig>,
}

fn initial_route(authenticated: bool) -> Route {
    let path = browser::current_path().unwrap_or_else(|e| {
        log::warn!("could not read the current path: {}", e);
        String::from("/")
    });
    let (route, rewrite) = resolve(&path, authenticated);
    if rewrite {
        log::debug!("rewriting {} to {}", path, route.path());
        if let Err(e) = browser::replace_path(route.path()) {
            log::warn!("{}", e);
        }
    }
    route
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let session = {
        let key = config.storage_key.clone();
        use_state(move || Session::load(&BrowserStore::new(key)))
    };
    let authenticated = session.is_authenticated();
    let route = use_state(move || initial_route(authenticated));

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |requested: Route| {
            let target = guard(requested, authenticated);
            if target == *route {
                return;
            }
            if let Err(e) = browser::push_path(target.path()) {
                log::warn!("{}", e);
            }
            route.set(target);
        })
    };

    let on_authenticated = {
        let session = session.clone();
        let route = route.clone();
        Callback::from(move |signed_in: Session| {
            if let Err(e) = browser::replace_path(Route::Dashboard.path()) {
                log::warn!("{}", e);
            }
            session.set(signed_in);
            route.set(Route::Dashboard);
        })
    };

    let on_logout = {
        let session = session.clone();
        let route = route.clone();
        let key = config.storage_key.clone();
        Callback::from(move |_: ()| {
            let signed_out = Session::sign_out(&BrowserStore::new(key.clone())).unwrap_or_else(|e| {
                log::error!("sign out did not clear storage: {}", e);
                Session::default()
            });
            if let Err(e) = browser::replace_path(Route::Login.path()) {
                log::warn!("{}", e);
            }
            session.set(signed_out);
            route.set(Route::Login);
        })
    };

    {
        let route = route.clone();
        use_effect_with_deps(
            move |authenticated: &bool| {
                let authenticated = *authenticated;
                let listener = PopStateListener::new(move |path| {
                    let (target, rewrite) = resolve(&path, authenticated);
                    if rewrite {
                        if let Err(e) = browser::replace_path(target.path()) {
                            log::warn!("{}", e);
                        }
                    }
                    route.set(target);
                });
                let listener = match listener {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        log::warn!("history navigation disabled: {}", e);
                        None
                    }
                };
                move || drop(listener)
            },
            authenticated,
        );
    }

    let content = match *route {
        Route::Login => html! { <LoginPage {on_authenticated} /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Transactions => html! { <TransactionsPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Settings => html! { <SettingsPage /> },
    };

    let page = if *route == Route::Login {
        content
    } else {
        html! {
            <Layout active_route={*route} {on_navigate} {on_logout}>
                { content }
            </Layout>
        }
    };

    html! {
        <ContextProvider<Rc<AppConfig>> context={config}>
            <ContextProvider<Session> context={(*session).clone()}>
                { page }
            </ContextProvider<Session>>
        </ContextProvider<Rc<AppConfig>>>
    }
}

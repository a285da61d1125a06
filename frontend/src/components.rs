use chrono::Timelike;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::date_filter::parse_date_input;
use crate::format::{format_date_label, time_of_day};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active_route: Route,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sidebar_open = use_state(|| false);
    let open_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(true))
    };
    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: ()| sidebar_open.set(false))
    };

    html! {
        <div class="min-h-screen bg-[#1a1b1e] overflow-hidden">
            <div class="flex h-screen p-5">
                <div class="hidden lg:block w-[100px]">
                    <Sidebar
                        is_open={false}
                        active_route={props.active_route}
                        on_navigate={props.on_navigate.clone()}
                        on_logout={props.on_logout.clone()}
                    />
                </div>

                <div class="lg:hidden">
                    <Sidebar
                        is_open={*sidebar_open}
                        on_close={close_sidebar}
                        active_route={props.active_route}
                        on_navigate={props.on_navigate.clone()}
                        on_logout={props.on_logout.clone()}
                    />
                </div>

                <div class="flex-1 overflow-auto">
                    <div class="lg:hidden m-4">
                        <button onclick={open_sidebar} class="relative p-3 rounded-xl bg-[#1a1b1e] shadow-[4px_4px_8px_#151617,_-4px_-4px_8px_#1f2025] active:scale-95 transition-all duration-300 text-gray-400 hover:text-blue-400">
                            { icon_menu() }
                        </button>
                    </div>
                    <div class="h-full py-5 px-6 sm:px-10">
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
        </div>
    }
}

struct NavItem {
    label: &'static str,
    route: Route,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub is_open: bool,
    #[prop_or_default]
    pub on_close: Callback<()>,
    pub active_route: Route,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            route: Route::Dashboard,
            icon: icon_line_chart,
        },
        NavItem {
            label: "Transactions",
            route: Route::Transactions,
            icon: icon_receipt,
        },
        NavItem {
            label: "Profile",
            route: Route::Profile,
            icon: icon_user,
        },
        NavItem {
            label: "Settings",
            route: Route::Settings,
            icon: icon_settings,
        },
    ];

    let slide = if props.is_open {
        "translate-x-0"
    } else {
        "-translate-x-full lg:translate-x-0"
    };

    html! {
        <>
            if props.is_open {
                <div class="fixed inset-0 bg-black bg-opacity-50 lg:hidden z-40" onclick={{
                    let on_close = props.on_close.clone();
                    Callback::from(move |_: MouseEvent| on_close.emit(()))
                }}></div>
            }

            <aside class={classes!("fixed", "top-5", "left-5", "h-[calc(100vh-2.5rem)]", "w-[100px]", "neu-card", "transform", "transition-transform", "duration-300", "ease-in-out", "z-50", "flex", "flex-col", "items-center", "py-8", "px-4", slide)}>
                <div class="mb-12">
                    <div class="neu-button p-4 text-blue-400">{ icon_line_chart() }</div>
                </div>

                <nav class="flex-1 w-full space-y-5">
                    { for nav_items.iter().map(|item| {
                        let is_active = item.route == props.active_route;
                        let onclick = {
                            let on_navigate = props.on_navigate.clone();
                            let on_close = props.on_close.clone();
                            let route = item.route;
                            Callback::from(move |_: MouseEvent| {
                                on_navigate.emit(route);
                                on_close.emit(());
                            })
                        };
                        let state_class = if is_active {
                            "text-blue-400 shadow-[inset_4px_4px_8px_#0d0e0f,_inset_-4px_-4px_8px_#27282d]"
                        } else {
                            "text-gray-400"
                        };
                        html! {
                            <button
                                key={item.label}
                                title={item.label}
                                {onclick}
                                class={classes!("w-full", "aspect-square", "neu-button", "flex", "items-center", "justify-center", "transition-all", "duration-200", "group", "hover:text-blue-400", state_class)}
                            >
                                { (item.icon)() }
                            </button>
                        }
                    }) }
                </nav>

                <div class="w-full mt-8">
                    <button
                        title="Logout"
                        onclick={{
                            let on_logout = props.on_logout.clone();
                            Callback::from(move |_: MouseEvent| on_logout.emit(()))
                        }}
                        class="w-full aspect-square neu-button flex items-center justify-center text-gray-400 hover:text-red-400 transition-all duration-200 group"
                    >
                        { icon_log_out() }
                    </button>
                </div>
            </aside>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct GreetingHeaderProps {
    pub user_name: AttrValue,
    pub is_active: bool,
    pub on_toggle_active: Callback<bool>,
}

#[function_component(GreetingHeader)]
pub fn greeting_header(props: &GreetingHeaderProps) -> Html {
    let hour = chrono::Local::now().hour();

    html! {
        <header class="neu-card p-6">
            <div class="flex flex-col gap-6 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <h1 class="text-xl sm:text-2xl font-bold text-gray-200">
                        { format!("Good {}, {}!", time_of_day(hour), props.user_name) }
                    </h1>
                    <p class="text-sm sm:text-base text-gray-400 mt-1">{"Welcome back to your trading dashboard"}</p>
                </div>
                <Toggle
                    checked={props.is_active}
                    on_change={props.on_toggle_active.clone()}
                    active_text="Trading Active"
                    inactive_text="Trading Inactive"
                    class={classes!("w-full", "sm:w-auto")}
                />
            </div>
        </header>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleSize {
    Sm,
    #[default]
    Md,
}

impl ToggleSize {
    fn height(self) -> &'static str {
        match self {
            ToggleSize::Sm => "h-10",
            ToggleSize::Md => "h-12",
        }
    }

    fn text(self) -> &'static str {
        match self {
            ToggleSize::Sm => "text-sm",
            ToggleSize::Md => "text-base",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    pub checked: bool,
    pub on_change: Callback<bool>,
    #[prop_or(AttrValue::from("Active"))]
    pub active_text: AttrValue,
    #[prop_or(AttrValue::from("Inactive"))]
    pub inactive_text: AttrValue,
    #[prop_or_default]
    pub size: ToggleSize,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> Html {
    let onclick = {
        let on_change = props.on_change.clone();
        let checked = props.checked;
        let disabled = props.disabled;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !disabled {
                on_change.emit(!checked);
            }
        })
    };
    let tone = if props.checked { "text-green-400" } else { "text-red-400" };
    let interaction = if props.disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        "cursor-pointer hover:scale-[1.02]"
    };

    html! {
        <button
            type="button"
            {onclick}
            disabled={props.disabled}
            class={classes!("relative", props.size.height(), "px-6", "rounded-xl", "transition-all", "duration-300", "outline-none", interaction, "bg-[#1a1b1e]", "shadow-[6px_6px_12px_#151617,_-6px_-6px_12px_#1f2025]", "active:scale-95", props.class.clone())}
        >
            <div class="absolute inset-[2px] rounded-xl shadow-[inset_2px_2px_4px_#151617,_inset_-2px_-2px_4px_#1f2025] bg-[#1c1d20]"></div>
            <div class={classes!("relative", "flex", "items-center", "justify-center", "h-full", "gap-3", tone)}>
                { icon_power() }
                <span class={classes!("font-medium", "whitespace-nowrap", props.size.text())}>
                    { if props.checked { props.active_text.clone() } else { props.inactive_text.clone() } }
                </span>
            </div>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct DateInputProps {
    pub label: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub min: Option<String>,
    #[prop_or_default]
    pub max: Option<String>,
}

#[function_component(DateInput)]
pub fn date_input(props: &DateInputProps) -> Html {
    let focused = use_state(|| false);

    let display = match parse_date_input(&props.value) {
        Ok(Some(date)) => format_date_label(date),
        Ok(None) => "Select date".to_string(),
        Err(e) => {
            log::debug!("date input shows raw value: {}", e);
            props.value.clone()
        }
    };
    let has_value = !props.value.is_empty();

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };
    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };

    let label_tone = if *focused { "text-gray-200" } else { "text-gray-400" };
    let frame = if *focused {
        "shadow-[8px_8px_16px_#0d0e0f,_-8px_-8px_16px_#27282d] scale-[1.02]"
    } else {
        "shadow-[4px_4px_8px_#0d0e0f,_-4px_-4px_8px_#27282d]"
    };

    html! {
        <div class="relative group">
            <div class="flex items-center gap-2 mb-2">
                <div class="p-2 rounded-lg bg-[#1a1b1e] shadow-[2px_2px_4px_#151617,_-2px_-2px_4px_#1f2025] text-gray-400">
                    { icon_calendar() }
                </div>
                <label class={classes!("text-sm", "font-medium", "transition-colors", "duration-300", label_tone)}>
                    { props.label.clone() }
                </label>
            </div>
            <label class={classes!("block", "relative", "rounded-xl", "bg-[#1a1b1e]", "transition-all", "duration-300", "cursor-pointer", frame)}>
                <div class="relative py-3.5 px-4 text-base font-medium flex items-center justify-between gap-3 pointer-events-none">
                    <span class={if has_value { "text-gray-200 font-semibold tracking-wide" } else { "text-gray-500" }}>
                        { display }
                    </span>
                    <span class="text-gray-400">{ icon_chevron_down() }</span>
                </div>
                <input
                    type="date"
                    value={props.value.clone()}
                    min={props.min.clone()}
                    max={props.max.clone()}
                    {oninput}
                    {onfocus}
                    {onblur}
                    class="absolute inset-0 w-full h-full opacity-0 cursor-pointer [color-scheme:dark]"
                />
            </label>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_line_chart() -> Html {
    icon_base("M3 3v18h18M7 14l4-4 4 4 5-5")
}
pub fn icon_receipt() -> Html {
    icon_base("M4 2v20l2-1 2 1 2-1 2 1 2-1 2 1 2-1 2 1V2l-2 1-2-1-2 1-2-1-2 1-2-1-2 1zM16 8H8M16 12H8M13 16H8")
}
pub fn icon_user() -> Html {
    icon_base("M20 21v-2a4 4 0 00-4-4H8a4 4 0 00-4 4v2M12 11a4 4 0 100-8 4 4 0 000 8z")
}
pub fn icon_settings() -> Html {
    icon_base("M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1")
}
pub fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
pub fn icon_menu() -> Html {
    icon_base("M3 12h18M3 6h18M3 18h18")
}
pub fn icon_calendar() -> Html {
    icon_base("M3 4h18v18H3zM16 2v4M8 2v4M3 10h18")
}
pub fn icon_chevron_down() -> Html {
    icon_base("M6 9l6 6 6-6")
}
pub fn icon_x() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
pub fn icon_minus() -> Html {
    icon_base("M5 12h14")
}
pub fn icon_arrow_up_right() -> Html {
    icon_base("M7 17L17 7M7 7h10v10")
}
pub fn icon_arrow_down_right() -> Html {
    icon_base("M7 7l10 10M17 7v10H7")
}
pub fn icon_arrow_right() -> Html {
    icon_base("M5 12h14M12 5l7 7-7 7")
}
pub fn icon_dollar_sign() -> Html {
    icon_base("M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6")
}
pub fn icon_trending_up() -> Html {
    icon_base("M23 6l-9.5 9.5-5-5L1 18M17 6h6v6")
}
pub fn icon_power() -> Html {
    icon_base("M18.36 6.64a9 9 0 11-12.73 0M12 2v10")
}
pub fn icon_bell() -> Html {
    icon_base("M18 8a6 6 0 10-12 0c0 7-3 7-3 7h18s-3 0-3-7M13.73 21a2 2 0 01-3.46 0")
}
pub fn icon_shield() -> Html {
    icon_base("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z")
}
pub fn icon_smartphone() -> Html {
    icon_base("M7 2h10a2 2 0 012 2v16a2 2 0 01-2 2H7a2 2 0 01-2-2V4a2 2 0 012-2zM12 18h.01")
}
pub fn icon_mail() -> Html {
    icon_base("M4 4h16v16H4zM22 6l-10 7L2 6")
}
pub fn icon_target() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0M12 12m-5 0a5 5 0 1010 0 5 5 0 10-10 0")
}
pub fn icon_alert_triangle() -> Html {
    icon_base("M10.29 3.86L1.82 18a2 2 0 001.71 3h16.94a2 2 0 001.71-3L13.71 3.86a2 2 0 00-3.42 0zM12 9v4M12 17h.01")
}
pub fn icon_save() -> Html {
    icon_base("M19 21H5a2 2 0 01-2-2V5a2 2 0 012-2h11l5 5v11a2 2 0 01-2 2zM17 21v-8H7v8M7 3v5h8")
}
pub fn icon_edit() -> Html {
    icon_base("M17 3a2.83 2.83 0 114 4L7.5 20.5 2 22l1.5-5.5L17 3z")
}
pub fn icon_lock() -> Html {
    icon_base("M5 11h14v10H5zM7 11V7a5 5 0 0110 0v4")
}

use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{
    icon_alert_triangle, icon_dollar_sign, icon_edit, icon_plus, icon_save, icon_target,
    icon_trending_up, icon_user, icon_x, Toggle, ToggleSize,
};
use crate::config::AppConfig;
use crate::preferences::{
    add_blank, delete_preference, next_preference_id, parse_amount, seed_preferences, set_active,
    sorted_for_display, update_preference, TradingPreference,
};

#[derive(Properties, PartialEq)]
struct ProfileCardProps {
    name: AttrValue,
    code: AttrValue,
    is_active: bool,
    on_toggle_active: Callback<bool>,
}

#[function_component(ProfileCard)]
fn profile_card(props: &ProfileCardProps) -> Html {
    let dim = (!props.is_active).then_some("opacity-75");
    let name_tone = if props.is_active { "text-gray-200" } else { "text-gray-400" };

    html! {
        <div class={classes!("relative", "neu-card", "p-6", "transition-all", "duration-300", dim)}>
            if !props.is_active {
                <div class="absolute inset-0 bg-[#1a1b1e]/50 rounded-2xl backdrop-blur-[1px]"></div>
            }
            <div class="relative flex items-center justify-between gap-6">
                <div class="flex items-center gap-4">
                    <div class="neu-convex p-4 rounded-xl">
                        <div class="w-12 h-12 neu-concave rounded-lg flex items-center justify-center text-gray-400">
                            { icon_user() }
                        </div>
                    </div>
                    <div class="space-y-1">
                        <h3 class={classes!("text-xl", "font-bold", "transition-colors", "duration-300", name_tone)}>{ props.name.clone() }</h3>
                        <p class="text-sm text-gray-400">{ format!("Code: {}", props.code) }</p>
                    </div>
                </div>
                <Toggle checked={props.is_active} on_change={props.on_toggle_active.clone()} size={ToggleSize::Sm} />
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Quantity,
    Target,
    StopLoss,
}

fn preference_field(
    label: &'static str,
    value: f64,
    editing: bool,
    dimmed: bool,
    tone: &'static str,
    icon: Html,
    on_input: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_input.emit(input.value());
    });

    html! {
        <div class="space-y-2">
            <div class="flex items-center gap-2">
                <div class={classes!("p-1.5", "rounded-lg", "bg-[#1a1b1e]", "shadow-[2px_2px_4px_#151617,_-2px_-2px_4px_#1f2025]", tone)}>
                    { icon }
                </div>
                <span class="text-sm font-medium text-gray-400">{ label }</span>
            </div>
            <div class="relative overflow-hidden rounded-xl bg-[#1a1b1e] shadow-[inset_3px_3px_6px_#151617,_inset_-3px_-3px_6px_#1f2025]">
                <div class="relative py-3 px-4">
                    if editing {
                        <input
                            type="number"
                            value={value.to_string()}
                            {oninput}
                            placeholder={format!("Enter {}", label.to_lowercase())}
                            class={classes!("w-full", "bg-transparent", "text-lg", "font-medium", "focus:outline-none", "placeholder-gray-500", tone)}
                        />
                    } else {
                        <span class={classes!("block", "text-xl", "font-semibold", tone, dimmed.then_some("opacity-50"))}>
                            { value.to_string() }
                        </span>
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PreferenceCardProps {
    preference: TradingPreference,
    is_new: bool,
    on_save: Callback<(u64, TradingPreference)>,
    on_toggle_active: Callback<(u64, bool)>,
    on_delete: Callback<u64>,
}

#[function_component(TradingPreferenceCard)]
fn trading_preference_card(props: &PreferenceCardProps) -> Html {
    let is_editing = use_state(|| props.is_new);
    let edited = use_state(|| props.preference.clone());
    let preference = &props.preference;
    let id = preference.id;

    let on_save = {
        let is_editing = is_editing.clone();
        let edited = edited.clone();
        let on_save = props.on_save.clone();
        let is_active = preference.is_active;
        Callback::from(move |_: MouseEvent| {
            if !edited.can_save() {
                return;
            }
            let values = TradingPreference {
                is_active,
                ..(*edited).clone()
            };
            on_save.emit((id, values));
            is_editing.set(false);
        })
    };

    let on_cancel = {
        let is_editing = is_editing.clone();
        let edited = edited.clone();
        let on_delete = props.on_delete.clone();
        let original = preference.clone();
        let is_new = props.is_new;
        Callback::from(move |_: MouseEvent| {
            if is_new {
                on_delete.emit(id);
            } else {
                edited.set(original.clone());
                is_editing.set(false);
            }
        })
    };

    let on_edit = {
        let is_editing = is_editing.clone();
        Callback::from(move |_: MouseEvent| is_editing.set(true))
    };

    let on_toggle = {
        let on_toggle_active = props.on_toggle_active.clone();
        Callback::from(move |active: bool| on_toggle_active.emit((id, active)))
    };

    let set_field = |field: Field| {
        let edited = edited.clone();
        Callback::from(move |raw: String| {
            let amount = parse_amount(&raw);
            let mut next = (*edited).clone();
            match field {
                Field::Quantity => next.quantity = amount,
                Field::Target => next.target = amount,
                Field::StopLoss => next.stop_loss = amount,
            }
            edited.set(next);
        })
    };

    let on_script = {
        let edited = edited.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edited.set(TradingPreference {
                script: input.value(),
                ..(*edited).clone()
            });
        })
    };

    let dimmed = !preference.is_active && !*is_editing;
    let edit_tone = if preference.is_active {
        "text-blue-400 shadow-[4px_4px_8px_#151617,_-4px_-4px_8px_#1f2025] active:scale-95"
    } else {
        "text-gray-500 opacity-50 cursor-not-allowed"
    };
    let icon_tone = if preference.is_active { "text-blue-400" } else { "text-gray-500" };

    html! {
        <div class="relative transition-all duration-300 transform hover:scale-[1.01] group">
            <div class={classes!("absolute", "inset-0", "rounded-2xl", "bg-[#1a1b1e]", "shadow-[8px_8px_16px_#0d0e0f,_-8px_-8px_16px_#27282d]", dimmed.then_some("opacity-75"))}></div>
            if dimmed {
                <div class="absolute inset-0 bg-[#1a1b1e]/60 rounded-2xl backdrop-blur-[1px]"></div>
            }

            <div class="relative p-5 sm:p-6 rounded-2xl">
                <div class="absolute top-4 right-4 flex items-center gap-3">
                    if *is_editing {
                        <button onclick={on_save} disabled={!edited.can_save()} class="p-2 rounded-xl bg-[#1a1b1e] shadow-[4px_4px_8px_#151617,_-4px_-4px_8px_#1f2025] active:scale-95 transition-all duration-300 text-green-400 disabled:opacity-50 disabled:cursor-not-allowed">
                            { icon_save() }
                        </button>
                        <button onclick={on_cancel} class="p-2 rounded-xl bg-[#1a1b1e] shadow-[4px_4px_8px_#151617,_-4px_-4px_8px_#1f2025] active:scale-95 transition-all duration-300 text-red-400">
                            { icon_x() }
                        </button>
                    } else {
                        <Toggle checked={preference.is_active} on_change={on_toggle} size={ToggleSize::Sm} />
                        <button onclick={on_edit} disabled={!preference.is_active} class={classes!("p-2", "rounded-xl", "bg-[#1a1b1e]", "transition-all", "duration-300", edit_tone)}>
                            { icon_edit() }
                        </button>
                    }
                </div>

                <div class="flex items-center gap-4 mb-8 mt-4">
                    <div class="relative h-12 w-12 rounded-xl bg-[#1a1b1e] shadow-[4px_4px_8px_#151617,_-4px_-4px_8px_#1f2025] overflow-hidden">
                        <div class={classes!("relative", "h-full", "w-full", "flex", "items-center", "justify-center", icon_tone)}>
                            { icon_trending_up() }
                        </div>
                    </div>
                    <div class="flex-1">
                        if props.is_new {
                            <div>
                                <input
                                    type="text"
                                    value={edited.script.clone()}
                                    oninput={on_script}
                                    placeholder="Enter script name"
                                    class="w-full bg-transparent text-xl font-bold text-gray-200 placeholder-gray-500 focus:outline-none border-b-2 border-blue-400/20 focus:border-blue-400 pb-1"
                                />
                                <p class="text-sm text-gray-400 mt-2">{"Add a new trading script"}</p>
                            </div>
                        } else {
                            <h3 class={classes!("text-xl", "font-bold", if preference.is_active { "text-gray-200" } else { "text-gray-400" })}>
                                { preference.script.clone() }
                            </h3>
                            <p class="text-sm text-gray-400 mt-1">{"Trading Script"}</p>
                        }
                    </div>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 sm:gap-6">
                    { preference_field("Quantity", edited.quantity, *is_editing, !preference.is_active, "text-gray-200", icon_dollar_sign(), set_field(Field::Quantity)) }
                    { preference_field("Target", edited.target, *is_editing, !preference.is_active, "text-green-400", icon_target(), set_field(Field::Target)) }
                    { preference_field("Stop Loss", edited.stop_loss, *is_editing, !preference.is_active, "text-red-400", icon_alert_triangle(), set_field(Field::StopLoss)) }
                </div>
            </div>
        </div>
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let config = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let is_active = use_state(|| true);
    let preferences = use_state(|| {
        seed_preferences().unwrap_or_else(|e| {
            log::error!("could not load trading preferences: {}", e);
            Vec::new()
        })
    });

    let on_toggle_profile = {
        let is_active = is_active.clone();
        Callback::from(move |active: bool| is_active.set(active))
    };

    let on_add = {
        let preferences = preferences.clone();
        Callback::from(move |_: MouseEvent| {
            let now_ms = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
            let id = next_preference_id(&preferences, now_ms);
            preferences.set(add_blank(&preferences, id));
        })
    };

    let on_save = {
        let preferences = preferences.clone();
        Callback::from(move |(id, values): (u64, TradingPreference)| {
            log::debug!("saving preference {} ({})", id, values.script);
            preferences.set(update_preference(&preferences, id, &values));
        })
    };

    let on_toggle_active = {
        let preferences = preferences.clone();
        Callback::from(move |(id, active): (u64, bool)| {
            preferences.set(set_active(&preferences, id, active));
        })
    };

    let on_delete = {
        let preferences = preferences.clone();
        Callback::from(move |id: u64| preferences.set(delete_preference(&preferences, id)))
    };

    let sorted = sorted_for_display(&preferences);

    html! {
        <div class="h-full">
            <div class="max-w-7xl">
                <h1 class="text-2xl font-bold text-gray-200 mb-8">{"Profile"}</h1>

                <div class="space-y-8">
                    <ProfileCard
                        name={config.user_name.clone()}
                        code={config.user_code.clone()}
                        is_active={*is_active}
                        on_toggle_active={on_toggle_profile}
                    />

                    <div class="space-y-6">
                        <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4">
                            <div class="flex items-center gap-4">
                                <div class="neu-button p-3 text-blue-400">{ icon_trending_up() }</div>
                                <div>
                                    <h2 class="text-xl font-bold text-gray-200">{"Trading Preferences"}</h2>
                                    <p class="text-sm text-gray-400 mt-1">{"Manage your trading scripts and rules"}</p>
                                </div>
                            </div>
                            <div class="flex items-center gap-3">
                                <div class="neu-convex px-4 py-2">
                                    <span class="text-sm font-medium text-blue-400">{ format!("{} Scripts", preferences.len()) }</span>
                                </div>
                                <button onclick={on_add} class="neu-button px-4 py-2 flex items-center gap-2 text-sm font-medium text-gray-200 whitespace-nowrap hover:text-blue-400">
                                    { icon_plus() }
                                    {"Add Script"}
                                </button>
                            </div>
                        </div>

                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                            { for sorted.into_iter().map(|preference| {
                                let is_new = preference.is_new();
                                let key = preference.id.to_string();
                                html! {
                                    <TradingPreferenceCard
                                        {key}
                                        {preference}
                                        {is_new}
                                        on_save={on_save.clone()}
                                        on_toggle_active={on_toggle_active.clone()}
                                        on_delete={on_delete.clone()}
                                    />
                                }
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

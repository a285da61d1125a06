use yew::prelude::*;

use crate::components::{
    icon_bell, icon_lock, icon_mail, icon_settings, icon_shield, icon_smartphone, Toggle,
    ToggleSize,
};
use crate::preferences::{default_account_settings, toggle_setting, AccountSetting, SettingIcon};
use crate::session::Session;

fn setting_icon(icon: SettingIcon) -> Html {
    match icon {
        SettingIcon::Bell => icon_bell(),
        SettingIcon::Shield => icon_shield(),
        SettingIcon::Smartphone => icon_smartphone(),
        SettingIcon::Mail => icon_mail(),
    }
}

fn setting_row(setting: &AccountSetting, on_toggle: Callback<&'static str>) -> Html {
    let id = setting.id;
    let on_change = Callback::from(move |_: bool| on_toggle.emit(id));
    let tone = if setting.enabled { "text-blue-400" } else { "text-gray-500" };

    html! {
        <div key={id} class="neu-card p-5 flex items-center justify-between gap-4">
            <div class="flex items-center gap-4">
                <div class={classes!("neu-button", "p-3", tone)}>{ setting_icon(setting.icon) }</div>
                <div>
                    <h3 class="text-base font-semibold text-gray-200">{ setting.title }</h3>
                    <p class="text-sm text-gray-400 mt-1">{ setting.description }</p>
                </div>
            </div>
            <Toggle
                checked={setting.enabled}
                {on_change}
                active_text="On"
                inactive_text="Off"
                size={ToggleSize::Sm}
            />
        </div>
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let session = use_context::<Session>().unwrap_or_default();
    let settings = use_state(default_account_settings);

    let on_toggle = {
        let settings = settings.clone();
        Callback::from(move |id: &'static str| {
            log::debug!("toggling setting {}", id);
            settings.set(toggle_setting(&settings, id));
        })
    };

    html! {
        <div class="h-full">
            <div class="max-w-7xl">
                <div class="flex items-center gap-4 mb-8">
                    <div class="neu-button p-3 text-blue-400">{ icon_settings() }</div>
                    <div>
                        <h1 class="text-2xl font-bold text-gray-200">{"Settings"}</h1>
                        <p class="text-sm text-gray-400 mt-1">{"Manage your account preferences"}</p>
                    </div>
                </div>

                <div class="space-y-6">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        { for settings.iter().map(|setting| setting_row(setting, on_toggle.clone())) }
                    </div>

                    <div class="neu-card p-5 flex items-center gap-4">
                        <div class="neu-button p-3 text-red-400">{ icon_lock() }</div>
                        <div>
                            <h3 class="text-base font-semibold text-gray-200">{"Security"}</h3>
                            <p class="text-sm text-gray-400 mt-1">
                                { match session.auth_code() {
                                    Some(code) => format!("Signed in with session code {}", code),
                                    None => String::from("No active session"),
                                } }
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

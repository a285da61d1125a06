//! Trading preferences and account settings.

use serde::{Deserialize, Serialize};

use crate::error::Result;

const PREFERENCES_JSON: &str = include_str!("../data/preferences.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPreference {
    pub id: u64,
    pub script: String,
    pub quantity: f64,
    pub target: f64,
    pub stop_loss: f64,
    pub is_active: bool,
}

impl TradingPreference {
    pub fn blank(id: u64) -> Self {
        Self {
            id,
            script: String::new(),
            quantity: 0.0,
            target: 0.0,
            stop_loss: 0.0,
            is_active: true,
        }
    }

    /// A preference with no script yet is still being created.
    pub fn is_new(&self) -> bool {
        self.script.is_empty()
    }

    pub fn can_save(&self) -> bool {
        !self.script.trim().is_empty()
    }
}

pub fn seed_preferences() -> Result<Vec<TradingPreference>> {
    Ok(serde_json::from_str(PREFERENCES_JSON)?)
}

/// Fresh id: the clock in ms, bumped past any id already in use.
pub fn next_preference_id(preferences: &[TradingPreference], now_ms: u64) -> u64 {
    let highest = preferences.iter().map(|p| p.id).max().unwrap_or(0);
    now_ms.max(highest + 1)
}

pub fn add_blank(preferences: &[TradingPreference], id: u64) -> Vec<TradingPreference> {
    let mut next = Vec::with_capacity(preferences.len() + 1);
    next.push(TradingPreference::blank(id));
    next.extend(preferences.iter().cloned());
    next
}

/// Replaces the stored values for `id`, keeping the id itself.
pub fn update_preference(
    preferences: &[TradingPreference],
    id: u64,
    values: &TradingPreference,
) -> Vec<TradingPreference> {
    preferences
        .iter()
        .map(|p| {
            if p.id == id {
                TradingPreference {
                    id,
                    ..values.clone()
                }
            } else {
                p.clone()
            }
        })
        .collect()
}

pub fn set_active(preferences: &[TradingPreference], id: u64, active: bool) -> Vec<TradingPreference> {
    preferences
        .iter()
        .map(|p| {
            if p.id == id {
                TradingPreference {
                    is_active: active,
                    ..p.clone()
                }
            } else {
                p.clone()
            }
        })
        .collect()
}

pub fn delete_preference(preferences: &[TradingPreference], id: u64) -> Vec<TradingPreference> {
    preferences.iter().filter(|p| p.id != id).cloned().collect()
}

/// New (blank) preferences first; the rest keep their order.
pub fn sorted_for_display(preferences: &[TradingPreference]) -> Vec<TradingPreference> {
    let mut sorted = preferences.to_vec();
    sorted.sort_by_key(|p| !p.is_new());
    sorted
}

/// Lenient number input: anything unparseable counts as zero.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingIcon {
    Bell,
    Shield,
    Smartphone,
    Mail,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AccountSetting {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub enabled: bool,
    pub icon: SettingIcon,
}

pub fn default_account_settings() -> Vec<AccountSetting> {
    vec![
        AccountSetting {
            id: "notifications",
            title: "Push Notifications",
            description: "Receive notifications for trades and alerts",
            enabled: true,
            icon: SettingIcon::Bell,
        },
        AccountSetting {
            id: "2fa",
            title: "Two-Factor Auth",
            description: "Add an extra layer of security to your account",
            enabled: true,
            icon: SettingIcon::Shield,
        },
        AccountSetting {
            id: "mobile",
            title: "Mobile Access",
            description: "Allow trading from mobile devices",
            enabled: false,
            icon: SettingIcon::Smartphone,
        },
        AccountSetting {
            id: "email",
            title: "Email Updates",
            description: "Receive daily summaries and reports",
            enabled: true,
            icon: SettingIcon::Mail,
        },
    ]
}

pub fn toggle_setting(settings: &[AccountSetting], id: &str) -> Vec<AccountSetting> {
    settings
        .iter()
        .map(|s| {
            if s.id == id {
                AccountSetting {
                    enabled: !s.enabled,
                    ..s.clone()
                }
            } else {
                s.clone()
            }
        })
        .collect()
}

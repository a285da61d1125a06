use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    icon_arrow_down_right, icon_arrow_up_right, icon_dollar_sign, icon_minus, icon_plus,
    icon_trending_up, icon_x, GreetingHeader,
};
use crate::config::AppConfig;
use crate::format::{format_price, format_with_commas};
use crate::portfolio::{
    adjust_quantity, exit_position, positions_summary, profit_loss_summary, seed_positions,
    Position, Trend,
};
use crate::table::{Align, CellValue, Column, ColumnRole, Table};

fn trend_arrow(trend: Trend) -> Html {
    match trend {
        Trend::Up => html! { <span class="text-green-400">{ icon_arrow_up_right() }</span> },
        Trend::Down => html! { <span class="text-red-400">{ icon_arrow_down_right() }</span> },
        Trend::Flat => html! {},
    }
}

fn price_cell(value: &CellValue, class: &'static str) -> Html {
    html! {
        <span class={class}>{ format_price(value.as_f64().unwrap_or_default()) }</span>
    }
}

fn position_controls(item: &Position, positions: &UseStateHandle<Vec<Position>>) -> Html {
    let change = |delta: i64| {
        let positions = positions.clone();
        let id = item.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            positions.set(adjust_quantity(&positions, id, delta));
        })
    };
    let on_exit = {
        let positions = positions.clone();
        let id = item.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            log::info!("exiting position {}", id);
            positions.set(exit_position(&positions, id));
        })
    };

    html! {
        <div class="flex flex-col md:flex-row w-full md:w-auto items-center gap-3">
            <div class="relative group w-full md:w-[180px] p-1.5 rounded-2xl bg-[#1a1b1e] shadow-[inset_4px_4px_8px_#151617,_inset_-4px_-4px_8px_#1f2025]">
                <div class="flex items-center gap-3 w-full">
                    <button onclick={change(-1)} class="p-2 rounded-xl text-red-400 hover:scale-110 active:scale-95 transition-all duration-300 bg-gradient-to-br from-[#1c1d20] to-[#18191c] shadow-[3px_3px_6px_#151617,_-3px_-3px_6px_#1f2025]">
                        { icon_minus() }
                    </button>
                    <div class="relative flex-1 py-2 px-3 rounded-xl bg-[#1a1b1e] shadow-[inset_3px_3px_6px_#151617,_inset_-3px_-3px_6px_#1f2025]">
                        <span class="block text-center font-semibold text-gray-200 tracking-wider group-hover:text-blue-400">
                            { format_with_commas(i64::from(item.quantity)) }
                        </span>
                    </div>
                    <button onclick={change(1)} class="p-2 rounded-xl text-green-400 hover:scale-110 active:scale-95 transition-all duration-300 bg-gradient-to-br from-[#1c1d20] to-[#18191c] shadow-[3px_3px_6px_#151617,_-3px_-3px_6px_#1f2025]">
                        { icon_plus() }
                    </button>
                </div>
            </div>
            <button onclick={on_exit} class="relative group w-full md:w-[100px] py-3 rounded-xl hover:scale-105 active:scale-95 transition-all duration-300 bg-gradient-to-br from-[#1c1d20] to-[#18191c] shadow-[4px_4px_8px_#151617,_-4px_-4px_8px_#1f2025]">
                <div class="flex items-center justify-center gap-2 text-red-400">
                    { icon_x() }
                    <span class="text-sm font-medium whitespace-nowrap">{"Exit"}</span>
                </div>
            </button>
        </div>
    }
}

fn position_columns(positions: &UseStateHandle<Vec<Position>>) -> Vec<Column<Position>> {
    let positions = positions.clone();
    vec![
        Column::new("Script", "script").render(|value, _| {
            html! { <span class="font-semibold text-gray-200">{ value.to_string() }</span> }
        }),
        Column::new("Avg", "buyingPrice")
            .align(Align::Right)
            .render(|value, _| price_cell(value, "text-gray-300")),
        Column::new("LTP", "currentPrice")
            .align(Align::Right)
            .render(|value, item: &Position| {
                let trend = Trend::between(item.current_price, item.buying_price);
                html! {
                    <div class="flex items-center justify-end gap-1">
                        { trend_arrow(trend) }
                        <span class={classes!("font-medium", trend.text_class())}>
                            { format_price(value.as_f64().unwrap_or_default()) }
                        </span>
                    </div>
                }
            }),
        Column::new("Trg", "target")
            .align(Align::Right)
            .render(|value, _| price_cell(value, "text-green-400 font-medium")),
        Column::new("SL", "stopLoss")
            .align(Align::Right)
            .render(|value, _| price_cell(value, "text-red-400 font-medium")),
        Column::new("P&L", "currentPrice")
            .align(Align::Right)
            .role(ColumnRole::ProfitLoss)
            .render(|_, item: &Position| {
                let pl = item.profit_loss();
                let trend = Trend::of(pl);
                html! {
                    <div class="flex items-center justify-end gap-1">
                        { trend_arrow(trend) }
                        <span class={classes!("font-medium", trend.text_class())}>
                            { format_price(pl.abs()) }
                            <span class="text-xs ml-1">{ trend.sign() }</span>
                        </span>
                    </div>
                }
            }),
        Column::new("Actions", "id")
            .align(Align::Center)
            .role(ColumnRole::Actions)
            .render(move |_, item: &Position| position_controls(item, &positions)),
    ]
}

fn share_swatch(percent: f64) -> Html {
    html! {
        <div class="h-8 w-8 neu-convex rounded-lg flex items-center justify-center">
            <div
                class="h-6 w-6 rounded-md bg-blue-400/10"
                style={format!("background: conic-gradient(rgb(96 165 250 / 0.4) {}%, transparent 0)", percent)}
            ></div>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let config = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let is_active = use_state(|| true);
    let positions = use_state(|| {
        seed_positions().unwrap_or_else(|e| {
            log::error!("could not load positions: {}", e);
            Vec::new()
        })
    });

    let on_toggle_active = {
        let is_active = is_active.clone();
        Callback::from(move |active: bool| is_active.set(active))
    };

    let pl = profit_loss_summary();
    let counts = positions_summary();
    let columns = position_columns(&positions);

    html! {
        <div class="h-full">
            <div class="max-w-7xl">
                <GreetingHeader
                    user_name={config.user_name.clone()}
                    is_active={*is_active}
                    {on_toggle_active}
                />

                <div class="mt-5 space-y-6">
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                        <div class="neu-card p-4 hover:scale-[1.02] transition-all duration-300">
                            <div class="flex items-center justify-between mb-3">
                                <div class="flex items-center gap-3">
                                    <div class="neu-button p-2 text-green-400">{ icon_dollar_sign() }</div>
                                    <h2 class="text-lg font-semibold text-gray-200">{"Total P/L"}</h2>
                                </div>
                                <p class="text-xl font-bold text-green-400">{ pl.total }</p>
                            </div>
                            <div class="grid grid-cols-2 gap-3">
                                <div class="neu-concave p-3 rounded-xl">
                                    <div class="flex items-center gap-2">
                                        <span class="text-green-400">{ icon_arrow_up_right() }</span>
                                        <span class="text-sm text-gray-400">{"Profit"}</span>
                                    </div>
                                    <span class="text-base font-semibold text-green-400 mt-1 block">{ pl.profit }</span>
                                </div>
                                <div class="neu-concave p-3 rounded-xl">
                                    <div class="flex items-center gap-2">
                                        <span class="text-red-400">{ icon_arrow_down_right() }</span>
                                        <span class="text-sm text-gray-400">{"Loss"}</span>
                                    </div>
                                    <span class="text-base font-semibold text-red-400 mt-1 block">{ pl.loss }</span>
                                </div>
                            </div>
                        </div>

                        <div class="neu-card p-4 hover:scale-[1.02] transition-all duration-300">
                            <div class="flex items-center justify-between mb-3">
                                <div class="flex items-center gap-3">
                                    <div class="neu-button p-2 text-blue-400">{ icon_trending_up() }</div>
                                    <h2 class="text-lg font-semibold text-gray-200">{"Total Positions"}</h2>
                                </div>
                                <div class="neu-convex px-3 py-1">
                                    <p class="text-xl font-bold text-blue-400">{ counts.total }</p>
                                </div>
                            </div>
                            <div class="grid grid-cols-2 gap-3">
                                <div class="neu-concave p-3 rounded-xl">
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <p class="text-sm text-gray-400">{"Active"}</p>
                                            <p class="text-base font-semibold text-blue-400 mt-1">{ counts.active }</p>
                                        </div>
                                        { share_swatch(counts.share_percent(counts.active)) }
                                    </div>
                                </div>
                                <div class="neu-concave p-3 rounded-xl">
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <p class="text-sm text-gray-400">{"Inactive"}</p>
                                            <p class="text-base font-semibold text-blue-400 mt-1">{ counts.inactive }</p>
                                        </div>
                                        { share_swatch(counts.share_percent(counts.inactive)) }
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="space-y-4">
                        <div class="flex items-center justify-between">
                            <h2 class="text-lg font-semibold text-gray-200">{"Active Positions"}</h2>
                            <div class="neu-convex px-3 py-1">
                                <span class="text-sm font-medium text-blue-400">{ format!("{} Active", positions.len()) }</span>
                            </div>
                        </div>
                        <Table<Position> records={(*positions).clone()} {columns} class={classes!("w-full")} />
                    </div>
                </div>
            </div>
        </div>
    }
}

use yew::prelude::*;

use crate::components::{icon_calendar, icon_x, DateInput};
use crate::date_filter::{filter_by_date_range, DateRange};
use crate::format::{capitalize, format_price, format_timestamp, format_with_commas};
use crate::gauge::CircularProgress;
use crate::portfolio::{seed_transactions, Transaction};
use crate::table::{Align, CellValue, Column, Table};

fn muted_price(class: &'static str) -> impl Fn(&CellValue, &Transaction) -> Html {
    move |value, _| {
        html! { <span class={class}>{ format_price(value.as_f64().unwrap_or_default()) }</span> }
    }
}

fn transaction_columns() -> Vec<Column<Transaction>> {
    vec![
        Column::new("Script", "script").width("180px").render(|value, item: &Transaction| {
            html! {
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-lg overflow-hidden neu-convex p-1">
                        <img src={item.logo.clone()} alt={value.to_string()} class="w-full h-full object-cover rounded-md" />
                    </div>
                    <span class="font-semibold text-gray-200">{ value.to_string() }</span>
                </div>
            }
        }),
        Column::new("Status", "status")
            .align(Align::Center)
            .render(|value, item: &Transaction| {
                html! {
                    <span class={classes!("px-3", "py-1", "rounded-full", "text-sm", "font-medium", item.status.badge_class())}>
                        { capitalize(&value.to_string()) }
                    </span>
                }
            }),
        Column::new("Quantity", "quantity")
            .align(Align::Right)
            .render(|_, item: &Transaction| {
                html! { <span class="text-gray-300">{ format_with_commas(i64::from(item.quantity)) }</span> }
            }),
        Column::new("Buy Price", "buyingPrice")
            .align(Align::Right)
            .render(muted_price("text-gray-300")),
        Column::new("Sell Price", "sellingPrice")
            .align(Align::Right)
            .render(muted_price("text-gray-300")),
        Column::new("Target", "target")
            .align(Align::Right)
            .render(muted_price("text-green-400")),
        Column::new("Stop Loss", "stopLoss")
            .align(Align::Right)
            .render(muted_price("text-red-400")),
        Column::new("Progress", "percentage")
            .align(Align::Center)
            .render(|value, _| {
                html! {
                    <div class="flex justify-center">
                        <CircularProgress percentage={value.as_f64().unwrap_or_default()} size={40} stroke_width={20} />
                    </div>
                }
            }),
        Column::new("Date", "createdAt")
            .align(Align::Right)
            .render(|value, _| {
                html! { <span class="text-gray-400">{ format_timestamp(&value.to_string()) }</span> }
            }),
    ]
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|v| !v.is_empty())
}

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let transactions = use_state(|| {
        seed_transactions().unwrap_or_else(|e| {
            log::error!("could not load transactions: {}", e);
            Vec::new()
        })
    });
    let start_date = use_state(String::new);
    let end_date = use_state(String::new);

    let range = DateRange::parse(&start_date, &end_date).unwrap_or_else(|e| {
        log::warn!("ignoring date filter: {}", e);
        DateRange::default()
    });
    let today = chrono::Local::now().date_naive();
    let filtered = filter_by_date_range(&transactions, &range, today);

    let on_start = {
        let start_date = start_date.clone();
        Callback::from(move |value: String| start_date.set(value))
    };
    let on_end = {
        let end_date = end_date.clone();
        Callback::from(move |value: String| end_date.set(value))
    };
    let clear_dates = {
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        Callback::from(move |_: MouseEvent| {
            start_date.set(String::new());
            end_date.set(String::new());
        })
    };

    let has_range = !start_date.is_empty() || !end_date.is_empty();

    html! {
        <div class="h-full">
            <div class="max-w-7xl">
                <div class="flex flex-col gap-6 mb-8">
                    <div class="flex items-center gap-4">
                        <div class="neu-button p-3 text-blue-400">{ icon_calendar() }</div>
                        <div>
                            <h1 class="text-2xl font-bold text-gray-200">{"Transaction History"}</h1>
                            <p class="text-sm text-gray-400 mt-1">{"View and filter your trading history"}</p>
                        </div>
                    </div>

                    <div class="neu-card p-6">
                        <div class="flex flex-col gap-6">
                            <div class="flex items-center justify-between">
                                <h2 class="text-lg font-semibold text-gray-200">{"Date Filter"}</h2>
                                if has_range {
                                    <button onclick={clear_dates} class="group flex items-center gap-2 py-1 px-3 rounded-lg text-sm font-medium text-red-400 transition-all duration-300 hover:scale-105 active:scale-95">
                                        { icon_x() }
                                        <span>{"Clear"}</span>
                                    </button>
                                }
                            </div>

                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                                <DateInput
                                    label="Start Date"
                                    value={(*start_date).clone()}
                                    on_change={on_start}
                                    max={non_empty(&end_date)}
                                />
                                <DateInput
                                    label="End Date"
                                    value={(*end_date).clone()}
                                    on_change={on_end}
                                    min={non_empty(&start_date)}
                                />
                            </div>
                        </div>
                    </div>
                </div>

                <Table<Transaction>
                    records={filtered.records}
                    columns={transaction_columns()}
                    class={classes!("w-full")}
                    empty_message="No transactions found for the selected date range"
                />
            </div>
        </div>
    }
}

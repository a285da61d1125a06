use yew::prelude::*;

use super::{
    derive_body, partition_columns, Cell, Column, ColumnPartition, ColumnRole, RowCells,
    TableBody, TableRecord,
};

#[derive(Properties, PartialEq)]
pub struct TableProps<T: PartialEq + 'static> {
    pub records: Vec<T>,
    pub columns: Vec<Column<T>>,
    #[prop_or_default]
    pub on_row_click: Option<Callback<T>>,
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or(AttrValue::from("No data available"))]
    pub empty_message: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Table)]
pub fn table<T>(props: &TableProps<T>) -> Html
where
    T: TableRecord + Clone + PartialEq + 'static,
{
    let partition = partition_columns(&props.columns);
    let body = derive_body(
        &props.records,
        &partition,
        props.is_loading,
        props.empty_message.as_str(),
    );
    let on_row_click = props.on_row_click.as_ref();

    html! {
        <div class={classes!("neu-card", "p-4", props.class.clone())}>
            { desktop_view(&partition, &body, on_row_click) }
            { mobile_view(&body, on_row_click) }
        </div>
    }
}

fn row_click<T: Clone + 'static>(on_row_click: Option<&Callback<T>>, record: &T) -> Callback<MouseEvent> {
    let on_row_click = on_row_click.cloned();
    let record = record.clone();
    Callback::from(move |_| {
        if let Some(cb) = &on_row_click {
            cb.emit(record.clone());
        }
    })
}

fn width_style(width: Option<&'static str>) -> Option<String> {
    width.map(|w| format!("min-width: {}", w))
}

fn spinner() -> Html {
    html! {
        <div class="flex justify-center items-center py-8">
            <div class="animate-spin rounded-full h-8 w-8 border-2 border-gray-400 border-t-transparent"></div>
        </div>
    }
}

fn empty_state(message: &str) -> Html {
    html! { <div class="text-center text-gray-400 py-8">{ message.to_string() }</div> }
}

fn header_label(text: &str) -> Html {
    html! {
        <div class="relative py-2 px-3 rounded-lg transition-all duration-150 hover:scale-[1.02]">
            <span class="text-sm font-bold text-gray-200 tracking-wide uppercase whitespace-nowrap group-hover:text-blue-400 transition-colors duration-150">
                { text.to_string() }
            </span>
        </div>
    }
}

fn desktop_view<T: Clone + 'static>(
    partition: &ColumnPartition<'_, T>,
    body: &TableBody<'_, T>,
    on_row_click: Option<&Callback<T>>,
) -> Html {
    let rows = match body {
        TableBody::Loading => spinner(),
        TableBody::Empty(message) => empty_state(message),
        TableBody::Rows(rows) => html! {
            <div class="space-y-2 p-3">
                { for rows.iter().map(|row| desktop_row(row, on_row_click)) }
            </div>
        },
    };

    html! {
        <div class="hidden md:block overflow-x-auto scrollbar-thin">
            <div class="inline-block min-w-full">
                <div class="sticky top-0 z-10 backdrop-blur-sm bg-[#1a1b1e]/80 rounded-xl">
                    <div class="relative p-4 flex items-center">
                        { for partition.regular.iter().map(|column| html! {
                            <div class={classes!(ColumnRole::Regular.header_class(), column.align.class())} style={width_style(column.width)}>
                                { header_label(&column.header) }
                            </div>
                        }) }
                        if let Some(column) = partition.profit_loss {
                            <div class={column.role.header_class()}>{ header_label(&column.header) }</div>
                        }
                        if let Some(column) = partition.actions {
                            <div class={column.role.header_class()}>{ header_label(&column.header) }</div>
                        }
                    </div>
                </div>
                <div class="neu-concave mt-4 rounded-xl">
                    { rows }
                </div>
            </div>
        </div>
    }
}

fn desktop_cell(cell: &Cell) -> Html {
    html! {
        <div class={classes!("flex-1", "px-2", "transition-all", "duration-150", cell.align.class(), cell.content.as_text().map(|_| "truncate"))} style={width_style(cell.width)}>
            { cell.content.to_html() }
        </div>
    }
}

fn desktop_row<T: Clone + 'static>(row: &RowCells<'_, T>, on_row_click: Option<&Callback<T>>) -> Html {
    html! {
        <div
            key={row.key.to_string()}
            onclick={row_click(on_row_click, row.record)}
            class="relative overflow-hidden rounded-lg transition-all duration-150 hover:scale-[1.01] cursor-pointer group bg-[#1a1b1e] hover:bg-[#1c1d20]"
        >
            <div class="relative p-3 flex items-center">
                { for row.regular.iter().map(desktop_cell) }
                if let Some(cell) = &row.profit_loss {
                    <div class="w-[150px] px-2 text-right">{ cell.content.to_html() }</div>
                }
                if let Some(cell) = &row.actions {
                    <div class="w-[300px] px-2">{ cell.content.to_html() }</div>
                }
            </div>
        </div>
    }
}

fn mobile_view<T: Clone + 'static>(body: &TableBody<'_, T>, on_row_click: Option<&Callback<T>>) -> Html {
    let content = match body {
        TableBody::Loading => spinner(),
        TableBody::Empty(message) => empty_state(message),
        TableBody::Rows(rows) => html! {
            <div class="space-y-6">
                { for rows.iter().map(|row| mobile_card(row, on_row_click)) }
            </div>
        },
    };

    html! {
        <div class="block md:hidden space-y-4">
            { content }
        </div>
    }
}

fn mobile_card<T: Clone + 'static>(row: &RowCells<'_, T>, on_row_click: Option<&Callback<T>>) -> Html {
    html! {
        <div key={row.key.to_string()} onclick={row_click(on_row_click, row.record)} class="group">
            <div class="relative neu-card p-5 transition-all duration-300 group-hover:scale-[1.02] group-active:scale-[0.98]">
                <div class="relative space-y-4">
                    if let Some(lead) = row.lead() {
                        <div class="flex items-center justify-between mb-2">
                            <div class="flex items-center gap-3">
                                <div class="h-10 w-10 neu-button flex items-center justify-center">
                                    <span class="text-xl font-bold text-blue-400">
                                        { row.avatar().map(String::from).unwrap_or_default() }
                                    </span>
                                </div>
                                <div class="text-lg font-semibold text-gray-200">{ lead.content.to_html() }</div>
                            </div>
                        </div>
                    }

                    <div class="grid grid-cols-2 gap-3">
                        { for row.details().iter().map(|cell| html! {
                            <div class="neu-concave p-3 rounded-xl">
                                <p class="text-xs font-medium text-gray-400 uppercase tracking-wide mb-1">{ cell.header.clone() }</p>
                                <div class="text-sm">{ cell.content.to_html() }</div>
                            </div>
                        }) }
                    </div>

                    if let Some(cell) = &row.profit_loss {
                        <div class="neu-concave p-4 rounded-xl bg-gradient-to-br from-blue-400/5 to-purple-400/5">
                            <div class="flex items-center justify-between">
                                <span class="text-sm font-medium text-gray-400 uppercase tracking-wide">{ cell.header.clone() }</span>
                                <div class="text-base">{ cell.content.to_html() }</div>
                            </div>
                        </div>
                    }

                    if let Some(actions) = row.mobile_actions() {
                        <div class="pt-2">{ actions }</div>
                    }
                </div>
            </div>
        </div>
    }
}

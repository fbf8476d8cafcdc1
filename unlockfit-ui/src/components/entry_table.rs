//! Entry Table Component
//!
//! Every stored entry with its computed ideal weight, rows tinted by category.

use leptos::*;
use unlockfit::chart::{table_rows, EntryOrder, TableRow};
use unlockfit::tracker::IdealWeightRule;

use crate::state::global::GlobalState;

/// Entries table with an order selector
#[component]
pub fn EntryTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let order = state.order;

    let rows = create_memo(move |_| {
        state
            .entries
            .with(|entries| table_rows(entries, order.get(), IdealWeightRule::default()))
    });

    let on_order = move |ev| {
        if let Ok(selected) = event_target_value(&ev).parse::<EntryOrder>() {
            order.set(selected);
        }
    };

    view! {
        <div class="space-y-3">
            <div class="flex items-center justify-end space-x-2 text-sm">
                <label for="entry-order" class="text-gray-400">"Order"</label>
                <select
                    id="entry-order"
                    class="bg-gray-700 rounded-lg px-3 py-1"
                    on:change=on_order
                >
                    <option value="submission" selected=move || order.get() == EntryOrder::Submission>
                        "As submitted"
                    </option>
                    <option value="date" selected=move || order.get() == EntryOrder::Date>
                        "By date"
                    </option>
                </select>
            </div>

            <table class="w-full text-left text-sm">
                <thead class="text-gray-400 border-b border-gray-700">
                    <tr>
                        <th class="py-2">"Name"</th>
                        <th>"Date"</th>
                        <th>"Weight"</th>
                        <th>"Height"</th>
                        <th>"Ideal Weight"</th>
                        <th>"Category"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get().into_iter().enumerate()
                        key=|(idx, row)| format!("{}:{}:{}:{}", idx, row.name, row.date, row.weight)
                        children=|(_, row)| view! { <EntryRow row=row /> }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn EntryRow(row: TableRow) -> impl IntoView {
    view! {
        <tr class=row.row_class>
            <td class="py-2">{row.name}</td>
            <td>{row.date.to_string()}</td>
            <td>{format!("{} {}", row.weight, row.unit)}</td>
            <td>{format!("{} cm", row.height)}</td>
            <td>{format!("{:.2} kg", row.ideal_weight)}</td>
            <td>{row.category.to_string()}</td>
        </tr>
    }
}

//! Home Page
//!
//! Entry form with a persisted draft, the entries table and the weight chart.

use leptos::*;
use unlockfit::tracker::{DraftField, EntryDraft};

use crate::components::{EntryTable, WeightChart};
use crate::state::global::{submitted_message, GlobalState};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Restore the draft left behind by the last visit
    let initial = state.repository.load_draft().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Failed to restore draft: {}", e).into());
        EntryDraft::default()
    });
    let draft = create_rw_signal(initial);

    // Save on every change
    let repository = state.repository.clone();
    create_effect(move |_| {
        let current = draft.get();
        if let Err(e) = repository.save_draft(&current) {
            web_sys::console::error_1(&format!("Failed to save draft: {}", e).into());
        }
    });

    let unit = Signal::derive(move || draft.with(|d| d.unit));

    view! {
        <div class="space-y-8">
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Log Entry"</h2>
                <EntryForm draft=draft />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Entries"</h2>
                <EntryTable />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Weight Over Time"</h2>
                <WeightChart unit=unit />
            </section>
        </div>
    }
}

/// Form bound to the draft signal
#[component]
fn EntryForm(draft: RwSignal<EntryDraft>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let current = draft.get_untracked();
        match state.submit(&current) {
            Ok(entry) => {
                draft.set(EntryDraft::cleared(current.unit));
                state.show_success(&submitted_message(&entry));
            }
            Err(e) => state.show_error(&e.to_string()),
        }
    };

    let toggle_unit = move |_| draft.update(|d| d.unit = d.unit.toggle());

    view! {
        <form on:submit=on_submit class="grid md:grid-cols-2 gap-4">
            <DraftInput draft=draft field=DraftField::Name label="Name" input_type="text" />
            <DraftInput draft=draft field=DraftField::Date label="Date" input_type="date" />
            <div class="flex items-end space-x-2">
                <div class="flex-1">
                    <DraftInput draft=draft field=DraftField::Weight label="Weight" input_type="number" />
                </div>
                <span
                    class="px-3 py-2 mb-0.5 rounded-lg bg-gray-700 hover:bg-gray-600 cursor-pointer select-none"
                    title="Switch unit"
                    on:click=toggle_unit
                >
                    {move || draft.with(|d| d.unit.label())}
                </span>
            </div>
            <DraftInput draft=draft field=DraftField::Height label="Height (cm)" input_type="number" />

            <div class="md:col-span-2">
                <button
                    type="submit"
                    class="w-full px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
                >
                    "Submit"
                </button>
            </div>
        </form>
    }
}

/// One required text field of the draft
#[component]
fn DraftInput(
    draft: RwSignal<EntryDraft>,
    field: DraftField,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    let id = format!("entry-{}", label.to_lowercase().replace(' ', "-"));
    let value = move || draft.with(|d| field_value(d, field).to_string());

    view! {
        <div>
            <label for=id.clone() class="block text-sm text-gray-400 mb-1">{label}</label>
            <input
                id=id
                type=input_type
                step="any"
                required=true
                class="w-full bg-gray-700 rounded-lg px-3 py-2"
                prop:value=value
                on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

fn field_value(draft: &EntryDraft, field: DraftField) -> &str {
    match field {
        DraftField::Name => &draft.name,
        DraftField::Date => &draft.date,
        DraftField::Weight => &draft.weight,
        DraftField::Height => &draft.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value() {
        let draft = EntryDraft::default()
            .with(DraftField::Name, "Ana")
            .with(DraftField::Height, "170");
        assert_eq!(field_value(&draft, DraftField::Name), "Ana");
        assert_eq!(field_value(&draft, DraftField::Height), "170");
        assert_eq!(field_value(&draft, DraftField::Weight), "");
    }
}

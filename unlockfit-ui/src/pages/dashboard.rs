//! Dashboard Page
//!
//! Category counts as clickable colour buckets, with detail cards for the selected one.

use leptos::*;
use unlockfit::dashboard::{details_for, CategoryCounts, CustomerDetail};
use unlockfit::tracker::Category;

use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Re-read storage on mount
    state.reload();

    let entries = state.entries;
    let selected = create_rw_signal(None::<Category>);
    let counts = create_memo(move |_| entries.with(|list| CategoryCounts::tally(list)));
    let details = create_memo(move |_| entries.with(|list| details_for(list, selected.get())));

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Customers by BMI category"</p>
            </div>

            <section class="grid grid-cols-3 gap-4">
                {Category::all()
                    .iter()
                    .map(|&category| view! {
                        <CategoryBucket category=category counts=counts selected=selected />
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="space-y-4">
                {move || {
                    let cards = details.get();
                    if selected.get().is_none() {
                        view! {
                            <p class="text-gray-400">"Select a category to see its customers."</p>
                        }.into_view()
                    } else if cards.is_empty() {
                        view! { <p class="text-gray-400">"No customers found"</p> }.into_view()
                    } else {
                        cards
                            .into_iter()
                            .map(|detail| view! { <DetailCard detail=detail /> })
                            .collect_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Clickable count for one colour bucket
#[component]
fn CategoryBucket(
    category: Category,
    counts: Memo<CategoryCounts>,
    selected: RwSignal<Option<Category>>,
) -> impl IntoView {
    let is_active = move || selected.get() == Some(category);

    view! {
        <button
            on:click=move |_| selected.set(Some(category))
            class=move || bucket_class(category, is_active())
        >
            <div class="text-4xl font-bold">{move || counts.get().get(category)}</div>
            <div class="text-sm mt-1 capitalize">{category.color()}</div>
        </button>
    }
}

fn bucket_class(category: Category, active: bool) -> String {
    let background = match category {
        Category::Normal => "bg-green-600",
        Category::Overweight => "bg-orange-500",
        Category::Underweight => "bg-red-600",
    };
    let ring = if active { "ring-4 ring-white" } else { "opacity-80 hover:opacity-100" };
    format!("rounded-xl p-6 text-white transition {} {}", background, ring)
}

#[component]
fn DetailCard(detail: CustomerDetail) -> impl IntoView {
    view! {
        <div class=format!("bg-gray-800 rounded-xl p-5 border-l-4 border-{}", border_color(detail.category))>
            <h3 class="text-lg font-semibold">{detail.name}</h3>
            <p class="text-gray-300">{format!("Current Weight: {:.1} kg", detail.weight_kg)}</p>
            <p class="text-gray-300">{format!("Ideal Weight: {:.2} kg", detail.ideal_weight)}</p>
            <p class="text-gray-400 mt-2">{detail.advice}</p>
        </div>
    }
}

fn border_color(category: Category) -> &'static str {
    match category {
        Category::Normal => "green-500",
        Category::Overweight => "orange-500",
        Category::Underweight => "red-500",
    }
}

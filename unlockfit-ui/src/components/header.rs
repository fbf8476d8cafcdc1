//! Header Component
//!
//! Title bar with links to the entry form and the dashboard.

use leptos::*;
use leptos_router::*;

/// Page header
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"⚖️"</span>
                        <span class="text-xl font-bold text-white">"Unlock.fit Weight Tracker"</span>
                    </A>

                    <nav class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/dashboard" label="Dashboard" />
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

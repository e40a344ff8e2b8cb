//! Bank Card Component

use leptos::*;
use surya::view::{or_fallback, NOT_AVAILABLE};
use surya::Bank;

/// One payment bank
#[component]
pub fn BankCard(bank: Bank) -> impl IntoView {
    let swift = or_fallback(bank.swift_code.as_deref(), NOT_AVAILABLE).to_string();

    view! {
        <div class="border border-gray-200 rounded-lg p-4 bg-white hover:shadow-md transition">
            <h3 class="font-bold text-lg">{bank.name}</h3>
            <p class="text-sm text-gray-600 mt-1">
                "Code: "<span class="font-mono">{bank.code}</span>
            </p>
            <p class="text-sm text-gray-600">
                "SWIFT: "<span class="font-mono">{swift}</span>
            </p>
        </div>
    }
}

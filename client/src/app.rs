//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use vehicles::VehicleForm;

use crate::pages::vehicle_manager::VehicleManagerPage;
use crate::state::ui::UiState;

/// Root application component.
///
/// Owns the single `VehicleForm` controller for the page and shares it with
/// children through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let form = RwSignal::new(VehicleForm::new());
    let ui = RwSignal::new(UiState::default());

    provide_context(form);
    provide_context(ui);

    view! {
        <Title text="CarLogix Vehicle Manager"/>
        <VehicleManagerPage/>
    }
}

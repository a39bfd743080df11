//! Vehicle manager page: status banner, vehicle tabs, and the add-car form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page reads the `RwSignal<VehicleForm>` and `RwSignal<UiState>`
//! contexts provided by `App`. Submits run `begin_submit` synchronously, post
//! through `BrowserTransport` on a local task, then apply the response with
//! `finish_submit`.

#[cfg(test)]
#[path = "vehicle_manager_test.rs"]
mod vehicle_manager_test;

use leptos::prelude::*;
use vehicles::{BodyType, CarStatus, DraftField, MessageKind, VehicleForm};

use crate::components::field::{FieldKind, FormField, SelectOption};
use crate::state::ui::{UiState, VehicleTab};

/// Rendering recipe for one draft field.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FieldSpec {
    pub field: DraftField,
    pub kind: FieldKind,
}

fn body_type_options() -> Vec<SelectOption> {
    BodyType::ALL
        .into_iter()
        .map(|body| SelectOption { value: body.as_str(), label: body.label() })
        .collect()
}

fn status_options() -> Vec<SelectOption> {
    CarStatus::ALL
        .into_iter()
        .map(|status| SelectOption { value: status.as_str(), label: status.label() })
        .collect()
}

fn dimension() -> FieldKind {
    FieldKind::Number { min: Some(0.0), max: None }
}

/// Fields of the add-car form, in display order.
pub(crate) fn car_field_specs() -> Vec<FieldSpec> {
    DraftField::ALL
        .into_iter()
        .map(|field| {
            let kind = match field {
                DraftField::Vin | DraftField::Make | DraftField::Model => FieldKind::Text,
                DraftField::Year => FieldKind::Number { min: Some(1900.0), max: Some(9999.0) },
                DraftField::Length | DraftField::Width | DraftField::Height | DraftField::Wheelbase => {
                    dimension()
                }
                DraftField::BodyType => FieldKind::Select(body_type_options()),
                DraftField::Status => FieldKind::Select(status_options()),
            };
            FieldSpec { field, kind }
        })
        .collect()
}

fn banner_class(kind: MessageKind) -> String {
    format!("message {}", kind.as_str())
}

fn tab_class(active: bool) -> &'static str {
    if active { "tab active" } else { "tab" }
}

/// Settle a begun submit when no browser transport is compiled in, so the
/// form does not stay in `Submitting`.
#[cfg(any(test, not(feature = "csr")))]
fn finish_without_transport(form: &mut VehicleForm) {
    let failure = vehicles::TransportError::new("not available outside the browser");
    let _ = form.finish_submit(Err(failure));
}

#[component]
pub fn VehicleManagerPage() -> impl IntoView {
    let form = expect_context::<RwSignal<VehicleForm>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let tabs = VehicleTab::ALL
        .into_iter()
        .map(move |tab| {
            view! {
                <button
                    class=move || tab_class(ui.get().active_tab == tab)
                    on:click=move |_| ui.update(|s| s.active_tab = tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="container">
            <h1>"CarLogix Vehicle Manager"</h1>
            <Show when=move || form.with(|f| f.message().is_visible())>
                <div class=move || banner_class(form.with(|f| f.message().kind))>
                    {move || form.with(|f| f.message().text.clone())}
                </div>
            </Show>
            <div class="tabs">{tabs}</div>
            {move || match ui.get().active_tab {
                VehicleTab::Car => view! { <CarForm form=form/> },
            }}
        </div>
    }
}

/// Add-car form bound to the shared `VehicleForm`.
#[component]
fn CarForm(form: RwSignal<VehicleForm>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(payload)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use vehicles::VehicleTransport;

            let result = crate::net::api::BrowserTransport.create_vehicle(&payload).await;
            form.update(|f| {
                if let Err(e) = f.finish_submit(result) {
                    log::warn!("car submit failed: {e}");
                }
            });
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            form.update(finish_without_transport);
        }
    };

    let fields = car_field_specs()
        .into_iter()
        .map(move |spec| {
            let field = spec.field;
            let value = Signal::derive(move || form.with(|f| f.draft().get(field).to_owned()));
            let on_change = Callback::new(move |raw: String| form.update(|f| f.set_field(field, raw)));
            view! {
                <FormField
                    label=field.label()
                    kind=spec.kind
                    value=value
                    on_change=on_change
                    required=field.is_required()
                />
            }
        })
        .collect_view();

    view! {
        <form class="form-section" on:submit=on_submit>
            <h2>"Add Car"</h2>
            <div class="form-grid">
                <div>{fields}</div>
            </div>
            <button type="submit" class="button" disabled=move || form.with(VehicleForm::is_submitting)>
                "Add Car"
            </button>
        </form>
    }
}

use board::constants::PICKER_PLACEHOLDER;
use board::view::{picker_options, retain_selection};
use leptos::{ev, event_target_value, *};

use crate::live::actions;

use super::parking_board::BoardContext;

/// Park form with the picker of currently available slots.
#[component]
pub fn ParkForm() -> impl IntoView {
    let board = use_context::<BoardContext>().expect("board context missing");
    let form = board.form;

    let options = create_memo(move |_| board.sync.with(|sync| picker_options(sync.snapshot())));

    // Drop the selection once its slot is no longer available.
    create_effect(move |_| {
        let options = options.get();
        let current = form.selected.get_untracked();
        let retained = retain_selection(&options, current.clone());
        if retained != current {
            form.selected.set(retained);
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        actions::submit_park(board);
    };

    view! {
        <form id="parkForm" class="park-form" on:submit=on_submit>
            <h2>"Park Vehicle"</h2>
            <input
                id="plate"
                type="text"
                placeholder="Plate Number"
                prop:value=move || form.plate.get()
                on:input=move |ev| form.plate.set(event_target_value(&ev))
            />
            <input
                id="model"
                type="text"
                placeholder="Car Model"
                prop:value=move || form.model.get()
                on:input=move |ev| form.model.set(event_target_value(&ev))
            />
            <select
                id="slotSelect"
                prop:value=move || form.selected.get().unwrap_or_default()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.selected.set((!value.is_empty()).then_some(value));
                }
            >
                <option value="" disabled=true selected=move || form.selected.get().is_none()>
                    {PICKER_PLACEHOLDER}
                </option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|id| {
                            let id_for_selected = id.clone();
                            view! {
                                <option
                                    value=id.clone()
                                    selected=move || {
                                        form.selected.get().as_deref() == Some(id_for_selected.as_str())
                                    }
                                >
                                    {id.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <button type="submit">"Park Now"</button>
        </form>
    }
}

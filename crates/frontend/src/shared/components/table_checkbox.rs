use leptos::prelude::*;

/// Selection cell of a table row.
///
/// Renders a `<td>` with a checkbox; clicks do not reach the row.
#[component]
pub fn TableCheckbox(
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(into, optional)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}

/// Header cell toggling every selectable row at once.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(into, optional)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <th class="table__cell table__cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </th>
    }
}

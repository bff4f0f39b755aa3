use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::browser::{listen_fullscreen_changes, BrowserPlatform, FullscreenListener};
use super::controller::{self, shared, MapView, ProviderMap, SharedMap};
use super::model::WATCHDOG_MS;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

type MapHandle = StoredValue<Option<SharedMap<BrowserPlatform>>, LocalStorage>;

fn with_map(handle: MapHandle, f: impl FnOnce(&SharedMap<BrowserPlatform>)) {
    if let Some(Some(map)) = handle.try_get_value() {
        f(&map);
    }
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

/// Live map of active providers around the operator
#[component]
#[allow(non_snake_case)]
pub fn ProvidersMap() -> impl IntoView {
    let auth = use_auth();
    let (view_state, set_view_state) = signal(MapView::default());
    let wrapper_ref = NodeRef::<leptos::html::Div>::new();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let handle: MapHandle = StoredValue::new_local(None);
    let fullscreen_listener = StoredValue::new_local(None::<FullscreenListener>);
    on_cleanup(move || {
        let _ = fullscreen_listener.try_update_value(|listener| listener.take());
    });

    // Bootstrap once both elements are mounted
    Effect::new(move |_| {
        let (Some(wrapper), Some(container)) = (wrapper_ref.get(), container_ref.get()) else {
            return;
        };
        if handle.with_value(|h| h.is_some()) {
            return;
        }

        let platform = BrowserPlatform::new(container.into(), wrapper.into());
        let map = shared(ProviderMap::new(platform));
        map.borrow_mut()
            .set_observer(move |view: &MapView| set_view_state.set(view.clone()));
        handle.set_value(Some(map.clone()));

        fullscreen_listener.set_value(listen_fullscreen_changes(move || {
            with_map(handle, |map| map.borrow_mut().on_fullscreen_change());
        }));

        let client = auth.client();
        let script_src = config().maps_script_src();
        {
            let map = map.clone();
            let client = client.clone();
            spawn_local(async move {
                controller::load_library(&map, &client, &script_src).await;
            });
        }
        spawn_local(async move {
            controller::locate(&map, &client).await;
        });
    });

    // Watchdog, armed once per loading epoch
    Effect::new(move |armed: Option<u64>| {
        let (loading, epoch) = view_state.with(|v| (v.loading, v.loading_epoch));
        let armed = armed.unwrap_or(0);
        if !loading || epoch == armed {
            return armed;
        }
        spawn_local(async move {
            TimeoutFuture::new(WATCHDOG_MS).await;
            with_map(handle, |map| {
                map.borrow_mut().on_watchdog_elapsed(epoch);
            });
        });
        epoch
    });

    let refresh = move || {
        with_map(handle, |map| {
            let map = map.clone();
            let client = auth.client();
            spawn_local(async move {
                controller::refresh(&map, &client).await;
            });
        });
    };

    let toggle_fullscreen = move || with_map(handle, |map| map.borrow_mut().toggle_fullscreen());
    let toggle_panel = move || with_map(handle, |map| map.borrow_mut().toggle_panel());
    let set_radius = move |input: String| {
        with_map(handle, |map| {
            map.borrow_mut().set_radius(&input);
        });
    };

    let controls_visible = move || view_state.with(|v| v.controls_visible());
    let fullscreen = move || view_state.with(|v| v.fullscreen);
    let panel_visible = move || view_state.with(|v| v.panel_visible);

    view! {
        <div
            node_ref=wrapper_ref
            class=move || {
                if fullscreen() { "provider-map provider-map--fullscreen" } else { "provider-map" }
            }
        >
            <div node_ref=container_ref class="provider-map__canvas"></div>

            <Show when=move || view_state.with(|v| v.loading)>
                <div class="provider-map__overlay">
                    <div class="spinner"></div>
                    <p>"Loading map..."</p>
                </div>
            </Show>

            {move || view_state.with(|v| v.error.clone()).map(|message| view! {
                <div class="provider-map__overlay provider-map__overlay--error">
                    <h3>"Error Loading Map"</h3>
                    <p>{message}</p>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| reload_page()>
                        "Try Again"
                    </Button>
                </div>
            })}

            <Show when=controls_visible>
                <div class="provider-map__toolbar">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| toggle_fullscreen()>
                        {move || if fullscreen() {
                            view! { {icon("minimize")} " Exit Fullscreen" }.into_any()
                        } else {
                            view! { {icon("maximize")} " Fullscreen" }.into_any()
                        }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| toggle_panel()>
                        {icon("filter")}
                        {move || if panel_visible() { " Hide" } else { " Filter" }}
                    </Button>
                </div>

                <Show when=panel_visible>
                    <div class="provider-map__panel">
                        <div class="provider-map__panel-header">
                            <span class="provider-map__summary">
                                {move || view_state.with(|v| v.summary())}
                            </span>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |_| refresh()
                            >
                                {icon("refresh")}
                                " Refresh"
                            </Button>
                        </div>
                        <Show when=move || view_state.with(|v| v.using_fallback)>
                            <div class="provider-map__hint">"Live provider data is unavailable, showing sample providers."</div>
                        </Show>
                        <div class="provider-map__radius">
                            <label for="provider-map-radius">"Radius (km):"</label>
                            <input
                                id="provider-map-radius"
                                type="number"
                                min="1"
                                max="100"
                                prop:value=move || view_state.with(|v| v.radius.km().to_string())
                                on:change=move |ev| set_radius(event_target_value(&ev))
                            />
                            <Button
                                appearance=ButtonAppearance::Primary
                                size=ButtonSize::Small
                                on_click=move |_| refresh()
                            >
                                "Apply"
                            </Button>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

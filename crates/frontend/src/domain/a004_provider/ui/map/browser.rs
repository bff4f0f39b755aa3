//! `MapPlatform` backed by the real browser and the Google Maps JS API.
//!
//! `google.maps` has no typed bindings here, so everything goes through
//! `js_sys::Reflect`.

use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Event, HtmlElement, HtmlScriptElement};

use super::model::{GeoPoint, GeolocationOptions, MarkerIcon, MarkerSpec};
use super::platform::{MapError, MapPlatform};

const FULLSCREEN_ELEMENT_KEYS: [&str; 3] = [
    "fullscreenElement",
    "webkitFullscreenElement",
    "msFullscreenElement",
];

const FULLSCREEN_CHANGE_EVENTS: [&str; 4] = [
    "fullscreenchange",
    "webkitfullscreenchange",
    "mozfullscreenchange",
    "MSFullscreenChange",
];

/// A placed marker and the click handler that opens its popup.
pub struct BrowserMarker {
    marker: JsValue,
    _on_click: Option<Closure<dyn FnMut()>>,
}

#[derive(Clone)]
pub struct BrowserPlatform {
    /// Element the map is drawn into.
    container: HtmlElement,
    /// Element taken fullscreen, so overlays stay visible.
    wrapper: HtmlElement,
}

impl BrowserPlatform {
    pub fn new(container: HtmlElement, wrapper: HtmlElement) -> Self {
        Self { container, wrapper }
    }
}

fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn object(entries: &[(&str, JsValue)]) -> Object {
    let obj = Object::new();
    for (key, value) in entries {
        let _ = Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj
}

fn lat_lng(point: GeoPoint) -> JsValue {
    object(&[
        ("lat", JsValue::from_f64(point.lat)),
        ("lng", JsValue::from_f64(point.lng)),
    ])
    .into()
}

fn google_maps() -> Option<JsValue> {
    let window = web_sys::window()?;
    get(&get(&window, "google")?, "maps")
}

fn maps_member(name: &str) -> Result<JsValue, MapError> {
    google_maps()
        .and_then(|maps| get(&maps, name))
        .ok_or_else(|| MapError::Construction(format!("google.maps.{} is not available", name)))
}

fn construct(name: &str, args: &[&JsValue]) -> Result<JsValue, MapError> {
    let ctor: Function = maps_member(name)?
        .dyn_into()
        .map_err(|_| MapError::Construction(format!("google.maps.{} is not a constructor", name)))?;
    let array = Array::new();
    for arg in args {
        array.push(arg);
    }
    Reflect::construct(&ctor, &array).map_err(|e| MapError::Construction(js_message(&e)))
}

/// Calls the first of `methods` that exists on `target`.
fn call_first(target: &JsValue, methods: &[&str]) -> Result<(), MapError> {
    for method in methods {
        if let Some(function) = get(target, method).and_then(|f| f.dyn_into::<Function>().ok()) {
            return function
                .call0(target)
                .map(|_| ())
                .map_err(|e| MapError::Fullscreen(js_message(&e)));
        }
    }
    Err(MapError::Fullscreen("not supported by this browser".to_string()))
}

fn marker_icon(icon: &MarkerIcon) -> Result<JsValue, MapError> {
    Ok(match icon {
        MarkerIcon::Circle {
            scale,
            fill_color,
            fill_opacity,
            stroke_color,
            stroke_weight,
        } => {
            let circle = get(&maps_member("SymbolPath")?, "CIRCLE").unwrap_or(JsValue::from(0));
            object(&[
                ("path", circle),
                ("scale", JsValue::from_f64(*scale)),
                ("fillColor", JsValue::from_str(fill_color)),
                ("fillOpacity", JsValue::from_f64(*fill_opacity)),
                ("strokeColor", JsValue::from_str(stroke_color)),
                ("strokeWeight", JsValue::from_f64(*stroke_weight)),
            ])
            .into()
        }
        MarkerIcon::Image { url, size } => {
            let px = JsValue::from(*size);
            let scaled = construct("Size", &[&px, &px])?;
            object(&[("url", JsValue::from_str(url)), ("scaledSize", scaled)]).into()
        }
    })
}

#[async_trait(?Send)]
impl MapPlatform for BrowserPlatform {
    type Map = JsValue;
    type Marker = BrowserMarker;

    fn maps_library_present(&self) -> bool {
        google_maps().is_some()
    }

    async fn load_external_script(&self, src: &str) -> Result<(), MapError> {
        let fail = |detail: String| {
            log::error!("Script {} failed: {}", src, detail);
            MapError::ScriptLoad(src.to_string())
        };
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| fail("no document".to_string()))?;

        // Another map may have injected the same script and still be waiting on it.
        let existing = document
            .query_selector(&script_selector(src))
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlScriptElement>().ok());
        let injected = existing.is_none();
        let script = match existing {
            Some(script) => {
                log::debug!("Reusing pending script {}", src);
                script
            }
            None => {
                let script: HtmlScriptElement = document
                    .create_element("script")
                    .map_err(|e| fail(js_message(&e)))?
                    .dyn_into()
                    .map_err(|_| fail("not a script element".to_string()))?;
                script.set_src(src);
                script.set_async(true);
                script.set_defer(true);
                script
            }
        };

        let promise = Promise::new(&mut |resolve: Function, reject: Function| {
            let on_load = Closure::once_into_js(move || {
                let _ = resolve.call0(&JsValue::NULL);
            });
            let on_error = Closure::once_into_js(move || {
                let _ = reject.call0(&JsValue::NULL);
            });
            let _ = script.add_event_listener_with_callback("load", on_load.unchecked_ref());
            let _ = script.add_event_listener_with_callback("error", on_error.unchecked_ref());
        });

        if injected {
            let head = document.head().ok_or_else(|| fail("no <head>".to_string()))?;
            head.append_child(&script).map_err(|e| fail(js_message(&e)))?;
        }

        match JsFuture::from(promise).await {
            Ok(_) => Ok(()),
            Err(e) => {
                // A failed tag must not be reused by the next attempt.
                script.remove();
                Err(fail(js_message(&e)))
            }
        }
    }

    async fn current_location(&self, options: GeolocationOptions) -> Option<GeoPoint> {
        let navigator = web_sys::window()?.navigator();
        let geolocation = match get(&navigator, "geolocation") {
            Some(g) => g,
            None => {
                log::info!("Geolocation not supported, using default location");
                return None;
            }
        };
        let get_position: Function = get(&geolocation, "getCurrentPosition")?.dyn_into().ok()?;
        let js_options = object(&[
            ("enableHighAccuracy", JsValue::from_bool(options.enable_high_accuracy)),
            ("timeout", JsValue::from(options.timeout_ms)),
            ("maximumAge", JsValue::from(options.maximum_age_ms)),
        ]);

        let promise = Promise::new(&mut |resolve: Function, reject: Function| {
            let on_error = reject.clone();
            let success = Closure::once_into_js(move |position: JsValue| {
                let _ = resolve.call1(&JsValue::NULL, &position);
            });
            let failure = Closure::once_into_js(move |error: JsValue| {
                let _ = on_error.call1(&JsValue::NULL, &error);
            });
            if let Err(e) = get_position.call3(&geolocation, &success, &failure, &js_options) {
                let _ = reject.call1(&JsValue::NULL, &e);
            }
        });

        match JsFuture::from(promise).await {
            Ok(position) => {
                let coords = get(&position, "coords")?;
                let lat = get(&coords, "latitude")?.as_f64()?;
                let lng = get(&coords, "longitude")?.as_f64()?;
                Some(GeoPoint::new(lat, lng))
            }
            Err(e) => {
                log::warn!("Location permission denied or error: {}", js_message(&e));
                None
            }
        }
    }

    fn create_map(&self, center: GeoPoint, zoom: u8) -> Result<JsValue, MapError> {
        let options = object(&[
            ("center", lat_lng(center)),
            ("zoom", JsValue::from(zoom)),
            ("mapTypeControl", JsValue::FALSE),
            ("fullscreenControl", JsValue::FALSE),
            ("streetViewControl", JsValue::FALSE),
        ]);
        construct("Map", &[self.container.as_ref(), options.as_ref()])
    }

    fn place_marker(&self, map: &JsValue, spec: &MarkerSpec) -> Result<BrowserMarker, MapError> {
        let options = object(&[
            ("position", lat_lng(spec.position)),
            ("map", map.clone()),
            ("icon", marker_icon(&spec.icon)?),
            ("title", JsValue::from_str(&spec.title)),
        ]);
        let marker = construct("Marker", &[options.as_ref()])
            .map_err(|e| MapError::Marker(e.to_string()))?;

        let on_click = match &spec.info_html {
            Some(html) => {
                let content = object(&[("content", JsValue::from_str(html))]);
                let info = construct("InfoWindow", &[content.as_ref()])
                    .map_err(|e| MapError::Marker(e.to_string()))?;
                let open: Function = get(&info, "open")
                    .and_then(|f| f.dyn_into().ok())
                    .ok_or_else(|| MapError::Marker("InfoWindow.open missing".to_string()))?;
                let (map, anchor) = (map.clone(), marker.clone());
                let handler = Closure::wrap(Box::new(move || {
                    let _ = open.call2(&info, &map, &anchor);
                }) as Box<dyn FnMut()>);
                let add_listener: Function = get(&marker, "addListener")
                    .and_then(|f| f.dyn_into().ok())
                    .ok_or_else(|| MapError::Marker("Marker.addListener missing".to_string()))?;
                add_listener
                    .call2(&marker, &JsValue::from_str("click"), handler.as_ref())
                    .map_err(|e| MapError::Marker(js_message(&e)))?;
                Some(handler)
            }
            None => None,
        };

        Ok(BrowserMarker {
            marker,
            _on_click: on_click,
        })
    }

    fn remove_marker(&self, marker: &BrowserMarker) {
        if let Some(set_map) = get(&marker.marker, "setMap").and_then(|f| f.dyn_into::<Function>().ok()) {
            let _ = set_map.call1(&marker.marker, &JsValue::NULL);
        }
    }

    fn set_center(&self, map: &JsValue, center: GeoPoint) {
        if let Some(set_center) = get(map, "setCenter").and_then(|f| f.dyn_into::<Function>().ok()) {
            let _ = set_center.call1(map, &lat_lng(center));
        }
    }

    fn request_fullscreen(&self) -> Result<(), MapError> {
        call_first(
            self.wrapper.as_ref(),
            &["requestFullscreen", "webkitRequestFullscreen", "msRequestFullscreen"],
        )
    }

    fn exit_fullscreen(&self) -> Result<(), MapError> {
        let document: JsValue = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| MapError::Fullscreen("no document".to_string()))?
            .into();
        call_first(
            &document,
            &["exitFullscreen", "webkitExitFullscreen", "msExitFullscreen"],
        )
    }

    fn owns_fullscreen(&self) -> bool {
        let document: JsValue = match web_sys::window().and_then(|w| w.document()) {
            Some(d) => d.into(),
            None => return false,
        };
        FULLSCREEN_ELEMENT_KEYS
            .iter()
            .filter_map(|key| get(&document, key))
            .any(|element| Object::is(&element, self.wrapper.as_ref()))
    }
}

/// Document fullscreen listeners of one map; removed on drop.
pub struct FullscreenListener {
    document: Document,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for FullscreenListener {
    fn drop(&mut self) {
        for event in FULLSCREEN_CHANGE_EVENTS {
            let _ = self
                .document
                .remove_event_listener_with_callback(event, self.closure.as_ref().unchecked_ref());
        }
    }
}

/// Calls `handler` on every document fullscreen change until the returned
/// listener is dropped.
pub fn listen_fullscreen_changes(handler: impl Fn() + 'static) -> Option<FullscreenListener> {
    let document = web_sys::window().and_then(|w| w.document())?;
    let closure = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>);
    for event in FULLSCREEN_CHANGE_EVENTS {
        let _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    Some(FullscreenListener { document, closure })
}

/// CSS selector matching a `<script>` tag with exactly this `src`.
fn script_selector(src: &str) -> String {
    format!("script[src=\"{}\"]", src.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_selector() {
        assert_eq!(
            script_selector("https://maps.googleapis.com/maps/api/js?key=k&libraries=places"),
            r#"script[src="https://maps.googleapis.com/maps/api/js?key=k&libraries=places"]"#
        );
        assert_eq!(script_selector(r#"a"b"#), r#"script[src="a\"b"]"#);
    }
}

//! Provider map state machine.
//!
//! `ProviderMap` holds every piece of map state and only changes it in
//! synchronous transitions. The async drivers at the bottom of the file
//! (`load_library`, `locate`, `refresh`, `run_fetch`) await the platform or
//! the network without holding a borrow, then feed the result back in.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::domain::a004_provider::nearby::{
    NearbyProvider, NearbyProvidersResponse, NearbyQuery,
};

use super::model::{
    fallback_providers, provider_marker, summary_text, user_location_marker, GeoPoint,
    GeolocationOptions, SearchRadius, DEFAULT_LOCATION, DEFAULT_ZOOM,
};
use super::platform::{MapError, MapPlatform, NearbyProviderSource};
use crate::shared::api_error::ApiError;

pub const SCRIPT_LOAD_ERROR: &str =
    "Failed to load Google Maps. Please check your internet connection.";
pub const MAP_MISSING_ERROR: &str = "Map initialization failed. Please refresh the page.";
pub const TIMEOUT_ERROR: &str = "Loading timed out. Please try refreshing the page.";

/// A provider request in flight. Only the newest ticket's result is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchTicket {
    generation: u64,
    pub query: NearbyQuery,
    center: GeoPoint,
}

/// What the view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub loading: bool,
    /// Bumped on every transition into loading; the watchdog is armed per epoch.
    pub loading_epoch: u64,
    pub error: Option<String>,
    pub initialized: bool,
    pub fullscreen: bool,
    pub panel_visible: bool,
    pub radius: SearchRadius,
    pub provider_count: usize,
    pub using_fallback: bool,
}

impl MapView {
    pub fn summary(&self) -> String {
        summary_text(self.provider_count)
    }

    /// Overlay controls are only shown on a settled, healthy map.
    pub fn controls_visible(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            loading: true,
            loading_epoch: 1,
            error: None,
            initialized: false,
            fullscreen: false,
            panel_visible: true,
            radius: SearchRadius::DEFAULT,
            provider_count: 0,
            using_fallback: false,
        }
    }
}

type Observer = Rc<dyn Fn(&MapView)>;

pub struct ProviderMap<P: MapPlatform> {
    platform: P,
    library_ready: bool,
    location: Option<GeoPoint>,
    init_attempted: bool,
    map: Option<P::Map>,
    user_marker: Option<P::Marker>,
    markers: Vec<P::Marker>,
    providers: Vec<NearbyProvider>,
    radius: SearchRadius,
    loading: bool,
    loading_epoch: u64,
    error: Option<String>,
    fullscreen: bool,
    panel_visible: bool,
    generation: u64,
    using_fallback: bool,
    observer: Option<Observer>,
}

impl<P: MapPlatform> ProviderMap<P> {
    /// Starts in the loading state, before the library or location is known.
    pub fn new(platform: P) -> Self {
        let initial = MapView::default();
        Self {
            platform,
            library_ready: false,
            location: None,
            init_attempted: false,
            map: None,
            user_marker: None,
            markers: Vec::new(),
            providers: Vec::new(),
            radius: initial.radius,
            loading: initial.loading,
            loading_epoch: initial.loading_epoch,
            error: None,
            fullscreen: false,
            panel_visible: initial.panel_visible,
            generation: 0,
            using_fallback: false,
            observer: None,
        }
    }

    /// Called with a fresh `MapView` after every transition.
    pub fn set_observer(&mut self, observer: impl Fn(&MapView) + 'static) {
        self.observer = Some(Rc::new(observer));
        self.notify();
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn providers(&self) -> &[NearbyProvider] {
        &self.providers
    }

    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    pub fn user_marker(&self) -> Option<&P::Marker> {
        self.user_marker.as_ref()
    }

    pub fn view(&self) -> MapView {
        MapView {
            loading: self.loading,
            loading_epoch: self.loading_epoch,
            error: self.error.clone(),
            initialized: self.map.is_some(),
            fullscreen: self.fullscreen,
            panel_visible: self.panel_visible,
            radius: self.radius,
            provider_count: self.providers.len(),
            using_fallback: self.using_fallback,
        }
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            observer(&self.view());
        }
    }

    fn set_loading(&mut self, loading: bool) {
        if loading && !self.loading {
            self.loading_epoch += 1;
        }
        self.loading = loading;
    }

    fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.set_loading(false);
    }

    pub fn on_library_loaded(&mut self) -> Option<FetchTicket> {
        log::debug!("Google Maps library ready");
        self.library_ready = true;
        let ticket = self.try_initialize();
        self.notify();
        ticket
    }

    pub fn on_library_failed(&mut self, err: MapError) {
        log::error!("Google Maps script failed to load: {}", err);
        self.fail(SCRIPT_LOAD_ERROR.to_string());
        self.notify();
    }

    /// Records the operator position; `None` falls back to the default.
    pub fn on_location(&mut self, position: Option<GeoPoint>) -> Option<FetchTicket> {
        let location = match position {
            Some(p) => {
                log::debug!("Location permission granted: {}, {}", p.lat, p.lng);
                p
            }
            None => {
                log::info!("Location unavailable, using default location");
                DEFAULT_LOCATION
            }
        };
        self.location = Some(location);
        let ticket = self.try_initialize();
        self.notify();
        ticket
    }

    /// Creates the map once both prerequisites are in. Later calls are no-ops.
    pub fn try_initialize(&mut self) -> Option<FetchTicket> {
        let center = match (self.library_ready, self.location) {
            (true, Some(center)) => center,
            _ => return None,
        };
        if self.init_attempted {
            return None;
        }
        self.init_attempted = true;

        log::debug!("Creating map at {}, {}", center.lat, center.lng);
        match self.platform.create_map(center, DEFAULT_ZOOM) {
            Ok(map) => {
                match self.platform.place_marker(&map, &user_location_marker(center)) {
                    Ok(marker) => self.user_marker = Some(marker),
                    Err(e) => log::error!("Error adding location marker: {}", e),
                }
                self.map = Some(map);
                self.begin_fetch()
            }
            Err(e) => {
                log::error!("Error initializing map: {}", e);
                self.fail(format!("Failed to initialize map: {}", e));
                None
            }
        }
    }

    /// Enters loading and issues a ticket for the current location and radius.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        let center = match self.location {
            Some(center) if self.map.is_some() => center,
            _ => {
                log::error!("Map reference is not available");
                self.fail(MAP_MISSING_ERROR.to_string());
                return None;
            }
        };
        self.generation += 1;
        self.set_loading(true);
        log::debug!(
            "Fetching providers near {}, {} within {} km",
            center.lat,
            center.lng,
            self.radius.km()
        );
        Some(FetchTicket {
            generation: self.generation,
            query: NearbyQuery::first_page(center.lat, center.lng, self.radius.km()),
            center,
        })
    }

    /// Applies a completed fetch. Returns `false` when the ticket is stale.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<NearbyProvidersResponse, ApiError>,
    ) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding provider batch {} (latest is {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        let (data, fallback) = match result {
            Ok(data) => (data, false),
            Err(e) => {
                log::warn!("API error, using mock data: {}", e);
                (fallback_providers(ticket.center), true)
            }
        };

        self.clear_markers();
        if let Some(map) = &self.map {
            for provider in &data.providers {
                match self.platform.place_marker(map, &provider_marker(provider)) {
                    Ok(marker) => self.markers.push(marker),
                    Err(e) => {
                        log::error!("Error adding marker for provider {}: {}", provider.id, e)
                    }
                }
            }
        }
        log::info!("Placed {} provider markers", self.markers.len());

        self.providers = data.providers;
        self.using_fallback = fallback;
        self.set_loading(false);
        self.notify();
        true
    }

    fn clear_markers(&mut self) {
        for marker in self.markers.drain(..) {
            self.platform.remove_marker(&marker);
        }
    }

    /// Re-centres on the operator and re-fetches with the current radius.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        let center = self.location?;
        let map = self.map.as_ref()?;
        self.platform.set_center(map, center);
        let ticket = self.begin_fetch();
        self.notify();
        ticket
    }

    /// Stores a new radius from raw input. Takes effect on the next refresh.
    pub fn set_radius(&mut self, input: &str) -> SearchRadius {
        self.radius = SearchRadius::parse(input);
        self.notify();
        self.radius
    }

    pub fn toggle_panel(&mut self) {
        self.panel_visible = !self.panel_visible;
        self.notify();
    }

    pub fn toggle_fullscreen(&mut self) {
        let result = if self.fullscreen {
            self.platform.exit_fullscreen()
        } else {
            self.platform.request_fullscreen()
        };
        if let Err(e) = result {
            log::warn!("{}", e);
        }
        self.fullscreen = !self.fullscreen;
        self.notify();
    }

    /// Document-level fullscreen change, including Esc pressed by the user.
    /// Only a change of this map's own element is applied.
    pub fn on_fullscreen_change(&mut self) {
        let active = self.platform.owns_fullscreen();
        if active != self.fullscreen {
            self.fullscreen = active;
            self.notify();
        }
    }

    /// Fired `WATCHDOG_MS` after entering loading epoch `epoch`.
    pub fn on_watchdog_elapsed(&mut self, epoch: u64) -> bool {
        if !self.loading || epoch != self.loading_epoch {
            return false;
        }
        log::warn!("Safety timeout triggered - forcing loading state to false");
        self.loading = false;
        if self.error.is_none() {
            self.error = Some(TIMEOUT_ERROR.to_string());
        }
        self.notify();
        true
    }
}

pub type SharedMap<P> = Rc<RefCell<ProviderMap<P>>>;

pub fn shared<P: MapPlatform>(map: ProviderMap<P>) -> SharedMap<P> {
    Rc::new(RefCell::new(map))
}

/// Makes the mapping library available, then initialises if possible.
pub async fn load_library<P, S>(map: &SharedMap<P>, source: &S, script_src: &str)
where
    P: MapPlatform + Clone,
    S: NearbyProviderSource,
{
    let platform = map.borrow().platform().clone();
    let ticket = if platform.maps_library_present() {
        map.borrow_mut().on_library_loaded()
    } else {
        log::debug!("Loading Google Maps script...");
        let loaded = platform.load_external_script(script_src).await;
        let mut state = map.borrow_mut();
        match loaded {
            Ok(()) => state.on_library_loaded(),
            Err(e) => {
                state.on_library_failed(e);
                None
            }
        }
    };
    if let Some(ticket) = ticket {
        run_fetch(map, source, ticket).await;
    }
}

/// Asks for the operator position, then initialises if possible.
pub async fn locate<P, S>(map: &SharedMap<P>, source: &S)
where
    P: MapPlatform + Clone,
    S: NearbyProviderSource,
{
    let platform = map.borrow().platform().clone();
    let position = platform
        .current_location(GeolocationOptions::default())
        .await;
    let ticket = map.borrow_mut().on_location(position);
    if let Some(ticket) = ticket {
        run_fetch(map, source, ticket).await;
    }
}

pub async fn refresh<P, S>(map: &SharedMap<P>, source: &S)
where
    P: MapPlatform,
    S: NearbyProviderSource,
{
    let ticket = map.borrow_mut().refresh();
    if let Some(ticket) = ticket {
        run_fetch(map, source, ticket).await;
    }
}

pub async fn run_fetch<P, S>(map: &SharedMap<P>, source: &S, ticket: FetchTicket)
where
    P: MapPlatform,
    S: NearbyProviderSource,
{
    let result = source.nearby(&ticket.query).await;
    map.borrow_mut().apply_fetch(ticket, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_provider::ui::map::model::{MarkerIcon, MarkerSpec};
    use async_trait::async_trait;
    use futures::executor::block_on;

    #[derive(Default)]
    struct FakeBrowser {
        library_present: bool,
        script_fails: bool,
        location: Option<GeoPoint>,
        map_error: Option<String>,
        failing_titles: Vec<String>,
        maps_created: Vec<GeoPoint>,
        centers: Vec<GeoPoint>,
        next_marker: u32,
        live_markers: Vec<(u32, MarkerSpec)>,
        fullscreen_calls: Vec<&'static str>,
        fullscreen: bool,
    }

    #[derive(Clone, Default)]
    struct FakePlatform(Rc<RefCell<FakeBrowser>>);

    impl FakePlatform {
        fn with(configure: impl FnOnce(&mut FakeBrowser)) -> Self {
            let fake = FakePlatform::default();
            configure(&mut *fake.0.borrow_mut());
            fake
        }

        fn provider_markers(&self) -> Vec<MarkerSpec> {
            self.0
                .borrow()
                .live_markers
                .iter()
                .filter(|(_, spec)| spec.title != "Your Location")
                .map(|(_, spec)| spec.clone())
                .collect()
        }

        fn user_markers(&self) -> Vec<MarkerSpec> {
            self.0
                .borrow()
                .live_markers
                .iter()
                .filter(|(_, spec)| spec.title == "Your Location")
                .map(|(_, spec)| spec.clone())
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl MapPlatform for FakePlatform {
        type Map = usize;
        type Marker = u32;

        fn maps_library_present(&self) -> bool {
            self.0.borrow().library_present
        }

        async fn load_external_script(&self, src: &str) -> Result<(), MapError> {
            if self.0.borrow().script_fails {
                Err(MapError::ScriptLoad(src.to_string()))
            } else {
                self.0.borrow_mut().library_present = true;
                Ok(())
            }
        }

        async fn current_location(&self, _options: GeolocationOptions) -> Option<GeoPoint> {
            self.0.borrow().location
        }

        fn create_map(&self, center: GeoPoint, _zoom: u8) -> Result<usize, MapError> {
            let mut state = self.0.borrow_mut();
            if let Some(e) = &state.map_error {
                return Err(MapError::Construction(e.clone()));
            }
            state.maps_created.push(center);
            Ok(state.maps_created.len())
        }

        fn place_marker(&self, _map: &usize, spec: &MarkerSpec) -> Result<u32, MapError> {
            let mut state = self.0.borrow_mut();
            if state.failing_titles.contains(&spec.title) {
                return Err(MapError::Marker(spec.title.clone()));
            }
            state.next_marker += 1;
            let id = state.next_marker;
            state.live_markers.push((id, spec.clone()));
            Ok(id)
        }

        fn remove_marker(&self, marker: &u32) {
            self.0.borrow_mut().live_markers.retain(|(id, _)| id != marker);
        }

        fn set_center(&self, _map: &usize, center: GeoPoint) {
            self.0.borrow_mut().centers.push(center);
        }

        fn request_fullscreen(&self) -> Result<(), MapError> {
            let mut state = self.0.borrow_mut();
            state.fullscreen_calls.push("request");
            state.fullscreen = true;
            Ok(())
        }

        fn exit_fullscreen(&self) -> Result<(), MapError> {
            let mut state = self.0.borrow_mut();
            state.fullscreen_calls.push("exit");
            state.fullscreen = false;
            Ok(())
        }

        fn owns_fullscreen(&self) -> bool {
            self.0.borrow().fullscreen
        }
    }

    struct FakeSource {
        response: Result<NearbyProvidersResponse, ApiError>,
        queries: RefCell<Vec<NearbyQuery>>,
    }

    impl FakeSource {
        fn ok(providers: Vec<NearbyProvider>) -> Self {
            let count = providers.len() as u32;
            Self {
                response: Ok(NearbyProvidersResponse {
                    providers,
                    count,
                    message: "ok".into(),
                }),
                queries: RefCell::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                response: Err(ApiError::Status {
                    status,
                    message: format!("API error: {}", status),
                    detail: None,
                }),
                queries: RefCell::new(Vec::new()),
            }
        }

        fn last_query(&self) -> NearbyQuery {
            *self.queries.borrow().last().unwrap()
        }
    }

    #[async_trait(?Send)]
    impl NearbyProviderSource for FakeSource {
        async fn nearby(&self, query: &NearbyQuery) -> Result<NearbyProvidersResponse, ApiError> {
            self.queries.borrow_mut().push(*query);
            self.response.clone()
        }
    }

    fn provider(id: i64, name: &str) -> NearbyProvider {
        NearbyProvider {
            id,
            name: name.into(),
            current_latitude: 33.31,
            current_longitude: 44.41,
            distance_km: 1.2,
            ..Default::default()
        }
    }

    fn boot(platform: &FakePlatform, source: &FakeSource) -> SharedMap<FakePlatform> {
        let map = shared(ProviderMap::new(platform.clone()));
        block_on(async {
            load_library(&map, source, "https://maps.test/js").await;
            locate(&map, source).await;
        });
        map
    }

    #[test]
    fn test_bootstrap_creates_one_map() {
        let platform = FakePlatform::with(|b| {
            b.library_present = true;
            b.location = Some(GeoPoint::new(33.0, 44.0));
        });
        let source = FakeSource::ok(vec![]);
        let map = boot(&platform, &source);

        block_on(async {
            load_library(&map, &source, "https://maps.test/js").await;
            locate(&map, &source).await;
        });
        assert!(map.borrow_mut().try_initialize().is_none());

        assert_eq!(platform.0.borrow().maps_created.len(), 1);
        assert_eq!(platform.user_markers().len(), 1);
        assert_eq!(map.borrow().user_marker(), Some(&1));
        assert!(map.borrow().view().initialized);
    }

    #[test]
    fn test_denied_location_centres_on_default() {
        let platform = FakePlatform::with(|b| b.library_present = true);
        let source = FakeSource::ok(vec![]);
        let map = boot(&platform, &source);

        assert_eq!(platform.0.borrow().maps_created, vec![DEFAULT_LOCATION]);
        assert_eq!(platform.user_markers()[0].position, DEFAULT_LOCATION);
        assert_eq!(map.borrow().location(), Some(DEFAULT_LOCATION));
        let query = source.last_query();
        assert_eq!((query.latitude, query.longitude), (33.3152, 44.3661));
    }

    #[test]
    fn test_radius_is_clamped_before_sending() {
        let platform = FakePlatform::with(|b| b.library_present = true);
        let source = FakeSource::ok(vec![]);
        let map = boot(&platform, &source);
        assert_eq!(source.last_query().radius, 25);

        map.borrow_mut().set_radius("200");
        block_on(refresh(&map, &source));
        assert_eq!(source.last_query().radius, 100);

        map.borrow_mut().set_radius("0");
        block_on(refresh(&map, &source));
        assert_eq!(source.last_query().radius, 1);
        assert_eq!(source.last_query().page_size, 100);
        assert_eq!(platform.0.borrow().centers.len(), 2);
    }

    #[test]
    fn test_fetch_failure_renders_fallback_providers() {
        let platform = FakePlatform::with(|b| {
            b.library_present = true;
            b.location = Some(GeoPoint::new(33.0, 44.0));
        });
        let source = FakeSource::failing(500);
        let map = boot(&platform, &source);

        let view = map.borrow().view();
        assert_eq!(view.error, None);
        assert!(!view.loading);
        assert!(view.using_fallback);
        assert_eq!(view.provider_count, 2);
        let titles: Vec<String> = platform.provider_markers().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Test Provider 1", "Test Provider 2"]);
    }

    #[test]
    fn test_watchdog_times_out_loading() {
        let platform = FakePlatform::default();
        let mut map = ProviderMap::new(platform);
        let epoch = map.view().loading_epoch;

        assert!(!map.on_watchdog_elapsed(epoch + 1));
        assert!(map.on_watchdog_elapsed(epoch));
        let view = map.view();
        assert!(!view.loading);
        assert_eq!(view.error.as_deref(), Some(TIMEOUT_ERROR));
        assert!(!map.on_watchdog_elapsed(epoch));
    }

    #[test]
    fn test_watchdog_keeps_existing_error() {
        let platform = FakePlatform::with(|b| b.script_fails = true);
        let source = FakeSource::ok(vec![]);
        let map = boot(&platform, &source);
        let view = map.borrow().view();
        assert_eq!(view.error.as_deref(), Some(SCRIPT_LOAD_ERROR));
        assert!(!view.loading);
        assert!(platform.0.borrow().maps_created.is_empty());
        assert!(source.queries.borrow().is_empty());
        assert!(!map.borrow_mut().on_watchdog_elapsed(view.loading_epoch));
    }

    #[test]
    fn test_fullscreen_toggle_symmetry() {
        let platform = FakePlatform::with(|b| b.library_present = true);
        let source = FakeSource::ok(vec![]);
        let map = boot(&platform, &source);
        let changes = Rc::new(RefCell::new(Vec::new()));
        let seen = changes.clone();
        map.borrow_mut()
            .set_observer(move |view: &MapView| seen.borrow_mut().push(view.fullscreen));
        changes.borrow_mut().clear();

        map.borrow_mut().toggle_fullscreen();
        map.borrow_mut().on_fullscreen_change();
        map.borrow_mut().toggle_fullscreen();
        map.borrow_mut().on_fullscreen_change();

        assert!(!map.borrow().view().fullscreen);
        assert_eq!(platform.0.borrow().fullscreen_calls, vec!["request", "exit"]);
        assert_eq!(*changes.borrow(), vec![true, false]);
    }

    #[test]
    fn test_fullscreen_change_of_another_map_is_ignored() {
        let source = FakeSource::ok(vec![]);
        let first_platform = FakePlatform::with(|b| b.library_present = true);
        let second_platform = FakePlatform::with(|b| b.library_present = true);
        let first = boot(&first_platform, &source);
        let second = boot(&second_platform, &source);

        second.borrow_mut().toggle_fullscreen();
        // The document event reaches every mounted map.
        first.borrow_mut().on_fullscreen_change();
        second.borrow_mut().on_fullscreen_change();

        assert!(!first.borrow().view().fullscreen);
        assert!(second.borrow().view().fullscreen);
        assert!(first_platform.0.borrow().fullscreen_calls.is_empty());
    }

    #[test]
    fn test_esc_exit_clears_fullscreen() {
        let platform = FakePlatform::with(|b| b.library_present = true);
        let source = FakeSource::ok(vec![]);
        let map = boot(&platform, &source);

        map.borrow_mut().toggle_fullscreen();
        platform.0.borrow_mut().fullscreen = false;
        map.borrow_mut().on_fullscreen_change();

        assert!(!map.borrow().view().fullscreen);
        assert_eq!(platform.0.borrow().fullscreen_calls, vec!["request"]);
    }

    #[test]
    fn test_map_construction_failure() {
        let platform = FakePlatform::with(|b| {
            b.library_present = true;
            b.map_error = Some("container has no size".into());
        });
        let source = FakeSource::ok(vec![]);
        let map = boot(&platform, &source);
        assert_eq!(
            map.borrow().view().error.as_deref(),
            Some("Failed to initialize map: container has no size")
        );
        assert!(source.queries.borrow().is_empty());
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let platform = FakePlatform::with(|b| b.library_present = true);
        let source = FakeSource::ok(vec![]);
        let map = boot(&platform, &source);

        let older = map.borrow_mut().refresh().unwrap();
        let newer = map.borrow_mut().refresh().unwrap();
        let fresh = NearbyProvidersResponse {
            providers: vec![provider(3, "Fresh")],
            count: 1,
            message: String::new(),
        };
        let stale = NearbyProvidersResponse {
            providers: vec![provider(4, "Stale"), provider(5, "Stale too")],
            count: 2,
            message: String::new(),
        };

        assert!(map.borrow_mut().apply_fetch(newer, Ok(fresh)));
        assert!(!map.borrow_mut().apply_fetch(older, Ok(stale)));

        let titles: Vec<String> = platform.provider_markers().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Fresh"]);
        assert_eq!(map.borrow().providers()[0].id, 3);
    }

    #[test]
    fn test_markers_replaced_between_batches() {
        let platform = FakePlatform::with(|b| b.library_present = true);
        let source = FakeSource::failing(503);
        let map = boot(&platform, &source);
        assert_eq!(platform.provider_markers().len(), 2);

        block_on(refresh(&map, &source));
        block_on(refresh(&map, &source));
        assert_eq!(platform.provider_markers().len(), 2);
        assert_eq!(platform.user_markers().len(), 1);
    }

    #[test]
    fn test_failed_marker_does_not_abort_batch() {
        let platform = FakePlatform::with(|b| {
            b.library_present = true;
            b.failing_titles = vec!["Broken".into()];
        });
        let source = FakeSource::ok(vec![provider(1, "Broken"), provider(2, "Fine")]);
        let map = boot(&platform, &source);
        let titles: Vec<String> = platform.provider_markers().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Fine"]);
        assert_eq!(map.borrow().view().provider_count, 2);
    }

    #[test]
    fn test_single_provider_end_to_end() {
        let platform = FakePlatform::with(|b| b.location = Some(GeoPoint::new(33.30, 44.40)));
        let source = FakeSource::ok(vec![NearbyProvider {
            id: 7,
            name: "Acme Cleaning".into(),
            current_latitude: 33.31,
            current_longitude: 44.41,
            distance_km: 1.2,
            marker_image: None,
            ..Default::default()
        }]);
        let map = boot(&platform, &source);

        assert_eq!(platform.0.borrow().maps_created, vec![GeoPoint::new(33.30, 44.40)]);
        assert_eq!(platform.user_markers().len(), 1);
        let markers = platform.provider_markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].title, "Acme Cleaning");
        assert!(matches!(markers[0].icon, MarkerIcon::Circle { fill_color: "#FF5722", .. }));

        let view = map.borrow().view();
        assert_eq!(view.summary(), "Showing 1 active provider");
        assert!(view.controls_visible());
        assert!(!view.using_fallback);
    }
}

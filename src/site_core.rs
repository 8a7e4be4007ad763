use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::timers::callback::Timeout;

use crate::scroll_tracker;
use palm_classic_core::{
    ambient_tone, AmbientTone, AvailabilityCheck, AvailabilityPhase, ScrollMetrics, View,
    WeatherPreset, NOTICE_DELAY_MS, NOTICE_VISIBLE_MS,
};

pub(crate) type SiteSubscriber = Rc<dyn Fn()>;

/// Single authoritative application state. Components hold an `Rc` to it,
/// mutate through the methods below and read through `snapshot()`; nothing
/// here is a module-level global, so tests can run isolated instances.
pub(crate) struct SiteCore {
    state: RefCell<SiteState>,
    timers: RefCell<TimerSlots>,
    subscribers: Rc<RefCell<Vec<SiteSubscriber>>>,
}

struct SiteState {
    view: View,
    weather: WeatherPreset,
    metrics: ScrollMetrics,
    availability: AvailabilityCheck,
    notice_visible: bool,
    session_started: bool,
}

impl SiteState {
    fn new() -> Self {
        Self {
            view: View::default(),
            weather: WeatherPreset::default(),
            metrics: ScrollMetrics::default(),
            availability: AvailabilityCheck::new(),
            notice_visible: false,
            session_started: false,
        }
    }
}

/// Pending timer handles. `gloo` timeouts cancel on drop, so overwriting a
/// slot replaces the pending transition and dropping `SiteCore` tears all
/// of them down; a stale timer can never fire into a reset component.
#[derive(Default)]
struct TimerSlots {
    availability: Option<Timeout>,
    notice: Option<Timeout>,
}

/// Read-only view of the state for one render cycle.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SiteSnapshot {
    pub(crate) view: View,
    pub(crate) weather: WeatherPreset,
    pub(crate) tone: AmbientTone,
    pub(crate) metrics: ScrollMetrics,
    pub(crate) document_progress: f64,
    pub(crate) availability: AvailabilityPhase,
    pub(crate) notice_visible: bool,
}

impl SiteCore {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(SiteState::new()),
            timers: RefCell::new(TimerSlots::default()),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: SiteSubscriber) -> SiteSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        SiteSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    pub(crate) fn snapshot(&self) -> SiteSnapshot {
        let state = self.state.borrow();
        SiteSnapshot {
            view: state.view,
            weather: state.weather,
            tone: ambient_tone(state.view, state.weather.status, state.metrics),
            metrics: state.metrics,
            document_progress: state.metrics.document_progress(),
            availability: state.availability.phase(),
            notice_visible: state.notice_visible,
        }
    }

    /// Schedules the one-shot atmospheric notice. Idempotent: the notice
    /// fires once per session, not again on weather toggles or re-mounts.
    pub(crate) fn begin_session(self: &Rc<Self>) {
        {
            let mut state = self.state.borrow_mut();
            if state.session_started {
                return;
            }
            state.session_started = true;
        }
        console::log!("session start");
        let weak = Rc::downgrade(self);
        let show = Timeout::new(NOTICE_DELAY_MS, move || {
            if let Some(core) = weak.upgrade() {
                core.set_notice_visible(true);
                core.schedule_notice_hide();
            }
        });
        self.timers.borrow_mut().notice = Some(show);
    }

    fn schedule_notice_hide(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let hide = Timeout::new(NOTICE_VISIBLE_MS, move || {
            if let Some(core) = weak.upgrade() {
                core.set_notice_visible(false);
                core.timers.borrow_mut().notice = None;
            }
        });
        self.timers.borrow_mut().notice = Some(hide);
    }

    fn set_notice_visible(&self, visible: bool) {
        self.state.borrow_mut().notice_visible = visible;
        self.notify();
    }

    /// Unconditional view switch. Any target is accepted, including the
    /// current view. Side effects in order: scroll reset to the top, then
    /// one notification carrying the tone already derived for offset zero.
    pub(crate) fn transition(&self, view: View) {
        console::log!("view", format!("{:?}", view));
        scroll_tracker::reset_scroll();
        let mut state = self.state.borrow_mut();
        state.view = view;
        state.metrics = scroll_tracker::sample_metrics();
        drop(state);
        self.notify();
    }

    pub(crate) fn toggle_weather(&self) {
        let mut state = self.state.borrow_mut();
        state.weather = state.weather.toggled();
        drop(state);
        self.notify();
    }

    /// Replaces the scroll sample wholesale; handlers stay idempotent and
    /// order-independent because nothing is accumulated.
    pub(crate) fn update_scroll(&self, metrics: ScrollMetrics) {
        {
            let mut state = self.state.borrow_mut();
            if state.metrics == metrics {
                return;
            }
            state.metrics = metrics;
        }
        self.notify();
    }

    /// Fire-and-forget availability check. A request while one is already
    /// running is dropped; the FSM decides, the timer slot obeys.
    pub(crate) fn request_availability(self: &Rc<Self>) {
        let delay = self.state.borrow_mut().availability.request();
        let Some(delay) = delay else {
            return;
        };
        self.schedule_availability(delay);
        self.notify();
    }

    fn schedule_availability(self: &Rc<Self>, delay: u32) {
        let weak = Rc::downgrade(self);
        let timeout = Timeout::new(delay, move || {
            if let Some(core) = weak.upgrade() {
                core.availability_timer_elapsed();
            }
        });
        self.timers.borrow_mut().availability = Some(timeout);
    }

    fn availability_timer_elapsed(self: &Rc<Self>) {
        let next = self.state.borrow_mut().availability.timer_elapsed();
        match next {
            Some(delay) => self.schedule_availability(delay),
            None => self.timers.borrow_mut().availability = None,
        }
        self.notify();
    }
}

/// Drop guard returned by `subscribe`; unhooks the subscriber so a torn
/// down component stops receiving notifications.
pub(crate) struct SiteSubscription {
    subscriber: SiteSubscriber,
    subscribers: Rc<RefCell<Vec<SiteSubscriber>>>,
}

impl Drop for SiteSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn transition_resets_scroll_and_derives_target_tone() {
        let core = SiteCore::new();
        // Simulate being mid-document before the switch.
        core.update_scroll(ScrollMetrics {
            offset: 1_200.0,
            viewport_height: 800.0,
            content_height: 4_000.0,
        });

        core.transition(View::Spa);

        let window = web_sys::window().expect("window available");
        assert_eq!(window.scroll_y().unwrap_or(-1.0), 0.0);
        let snapshot = core.snapshot();
        assert_eq!(snapshot.view, View::Spa);
        assert_eq!(snapshot.tone, AmbientTone::Spa);
    }

    #[wasm_bindgen_test]
    fn reselecting_the_current_view_still_resets_scroll() {
        let core = SiteCore::new();
        core.transition(View::Home);
        let snapshot = core.snapshot();
        assert_eq!(snapshot.view, View::Home);
        assert_eq!(snapshot.document_progress, 0.0);
    }

    #[wasm_bindgen_test]
    fn reentrant_availability_request_is_dropped() {
        let core = SiteCore::new();
        core.request_availability();
        assert_eq!(core.snapshot().availability, AvailabilityPhase::Checking);
        core.request_availability();
        assert_eq!(core.snapshot().availability, AvailabilityPhase::Checking);
    }

    #[wasm_bindgen_test]
    fn weather_toggle_notifies_and_round_trips() {
        let core = SiteCore::new();
        let hits = Rc::new(Cell::new(0u32));
        let counter = hits.clone();
        let subscription = core.subscribe(Rc::new(move || {
            counter.set(counter.get() + 1);
        }));

        let initial = core.snapshot().weather;
        core.toggle_weather();
        assert_ne!(core.snapshot().weather, initial);
        core.toggle_weather();
        assert_eq!(core.snapshot().weather, initial);
        assert_eq!(hits.get(), 2);

        drop(subscription);
        core.toggle_weather();
        assert_eq!(hits.get(), 2);
    }

    #[wasm_bindgen_test]
    fn atmospheric_notice_is_scheduled_once_per_session() {
        let core = SiteCore::new();
        core.begin_session();
        assert!(core.state.borrow().session_started);
        assert!(core.timers.borrow().notice.is_some());

        // Cancel the pending timer; repeated calls and weather toggles
        // must not put another one in the slot.
        core.timers.borrow_mut().notice = None;
        core.begin_session();
        core.toggle_weather();
        core.begin_session();
        assert!(core.timers.borrow().notice.is_none());
        assert!(!core.snapshot().notice_visible);
    }

    #[wasm_bindgen_test]
    fn independent_cores_do_not_share_state() {
        let first = SiteCore::new();
        let second = SiteCore::new();
        first.transition(View::Dining);
        assert_eq!(first.snapshot().view, View::Dining);
        assert_eq!(second.snapshot().view, View::Home);
    }
}

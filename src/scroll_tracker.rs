use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::Element;

use palm_classic_core::{region_progress, ScrollMetrics};

// Spring tuning for the header progress bar.
const SPRING_STIFFNESS: f64 = 100.0;
const SPRING_DAMPING: f64 = 30.0;
const SPRING_REST_DELTA: f64 = 0.001;
// Background tabs can starve rAF; cap the integration step.
const SPRING_MAX_DT: f64 = 0.064;

/// Samples the viewport oracle. Called fresh in every scroll/resize
/// handler; without a window (headless startup) everything reads as zero.
pub(crate) fn sample_metrics() -> ScrollMetrics {
    let Some(window) = web_sys::window() else {
        return ScrollMetrics::default();
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let content_height = window
        .document()
        .and_then(|document| document.body())
        .map(|body| f64::from(body.scroll_height()))
        .unwrap_or(0.0);
    ScrollMetrics {
        offset,
        viewport_height,
        content_height,
    }
}

pub(crate) fn reset_scroll() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Progress through a tall section whose content is pinned while the page
/// scrolls past it: 0 while the section top is below the viewport top, 1
/// once only the last viewport-height of it remains.
pub(crate) fn region_progress_of(element: &Element, viewport_height: f64) -> f64 {
    let rect = element.get_bounding_client_rect();
    let extent = rect.height() - viewport_height;
    region_progress(-rect.top(), 0.0, extent)
}

/// Spring-damped scaleX applied straight to the progress bar element, off
/// the Yew render path. The frame handle cancels on drop, so tearing the
/// tracker down mid-animation leaves no callback behind.
pub(crate) struct DampedProgress {
    inner: Rc<RefCell<SpringInner>>,
}

struct SpringInner {
    bar: Element,
    value: f64,
    velocity: f64,
    target: f64,
    last_timestamp: Option<f64>,
    frame: Option<AnimationFrame>,
}

impl DampedProgress {
    pub(crate) fn new(bar: Element) -> Self {
        let inner = Rc::new(RefCell::new(SpringInner {
            bar,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
            last_timestamp: None,
            frame: None,
        }));
        inner.borrow().apply();
        Self { inner }
    }

    pub(crate) fn set_target(&self, target: f64) {
        let needs_frame = {
            let mut inner = self.inner.borrow_mut();
            inner.target = target.clamp(0.0, 1.0);
            inner.frame.is_none()
        };
        if needs_frame {
            Self::schedule(&self.inner);
        }
    }

    fn schedule(inner: &Rc<RefCell<SpringInner>>) {
        let weak = Rc::downgrade(inner);
        let handle = request_animation_frame(move |timestamp| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let settled = {
                let mut state = inner.borrow_mut();
                state.frame = None;
                state.step(timestamp)
            };
            if !settled {
                Self::schedule(&inner);
            }
        });
        inner.borrow_mut().frame = Some(handle);
    }
}

impl SpringInner {
    fn step(&mut self, timestamp: f64) -> bool {
        let dt = match self.last_timestamp {
            Some(last) => ((timestamp - last) / 1_000.0).clamp(0.0, SPRING_MAX_DT),
            None => 1.0 / 60.0,
        };
        self.last_timestamp = Some(timestamp);

        let displacement = self.target - self.value;
        let acceleration = SPRING_STIFFNESS * displacement - SPRING_DAMPING * self.velocity;
        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        let settled =
            displacement.abs() < SPRING_REST_DELTA && self.velocity.abs() < SPRING_REST_DELTA;
        if settled {
            self.value = self.target;
            self.velocity = 0.0;
            self.last_timestamp = None;
        }
        self.apply();
        settled
    }

    fn apply(&self) {
        let style = format!("transform: scaleX({:.4});", self.value.clamp(0.0, 1.0));
        let _ = self.bar.set_attribute("style", &style);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn metrics_sample_is_never_negative() {
        let metrics = sample_metrics();
        assert!(metrics.viewport_height >= 0.0);
        assert!(metrics.content_height >= 0.0);
        let progress = metrics.document_progress();
        assert!((0.0..=1.0).contains(&progress));
    }

    #[wasm_bindgen_test]
    fn damped_bar_writes_scale_transform() {
        let document = web_sys::window()
            .expect("window available")
            .document()
            .expect("document available");
        let bar = document.create_element("div").expect("element created");
        let tracker = DampedProgress::new(bar.clone());
        tracker.set_target(0.5);
        let style = bar.get_attribute("style").unwrap_or_default();
        assert!(style.contains("scaleX"), "style was {style:?}");
    }
}

use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::{Date, Math};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::home::HomeSections;
use crate::scroll_tracker::{self, DampedProgress};
use crate::site_core::{SiteCore, SiteSnapshot};
use crate::views::{DiningView, HistoryView, ReservationsView, SpaView, SuitesView};
use palm_classic_core::{AvailabilityPhase, View, WeatherPreset};

const HEADER_CONDENSE_OFFSET: f64 = 50.0;
const RAIN_DROP_COUNT: usize = 80;
const PALM_MOTIF_SRC: &str =
    "https://images.unsplash.com/photo-1518531933037-91b2f5f229cc?q=80&w=1543&auto=format&fit=crop";

#[function_component(App)]
pub(crate) fn app() -> Html {
    let core_handle = use_state(SiteCore::new);
    let core = (*core_handle).clone();
    let snapshot = use_state(|| core.snapshot());
    let snapshot_value = (*snapshot).clone();

    {
        let core = Rc::clone(&core);
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let reader = Rc::clone(&core);
            let subscription = core.subscribe(Rc::new(move || {
                snapshot.set(reader.snapshot());
            }));
            core.begin_session();
            move || drop(subscription)
        });
    }

    {
        let core = Rc::clone(&core);
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window available");
            let sample = {
                let core = Rc::clone(&core);
                Rc::new(move || core.update_scroll(scroll_tracker::sample_metrics()))
            };
            let scroll = {
                let sample = Rc::clone(&sample);
                EventListener::new(&window, "scroll", move |_: &Event| sample())
            };
            let resize = {
                let sample = Rc::clone(&sample);
                EventListener::new(&window, "resize", move |_: &Event| sample())
            };
            sample();
            move || {
                drop(scroll);
                drop(resize);
            }
        });
    }

    let progress_ref = use_node_ref();
    let damped = use_mut_ref(|| None::<DampedProgress>);
    {
        let progress_ref = progress_ref.clone();
        let damped = damped.clone();
        use_effect_with(snapshot_value.document_progress, move |progress| {
            let mut slot = damped.borrow_mut();
            if slot.is_none() {
                if let Some(element) = progress_ref.cast::<Element>() {
                    *slot = Some(DampedProgress::new(element));
                }
            }
            if let Some(bar) = slot.as_ref() {
                bar.set_target(*progress);
            }
            || ()
        });
    }

    let on_select = {
        let core = Rc::clone(&core);
        Callback::from(move |view: View| core.transition(view))
    };
    let on_weather_toggle = {
        let core = Rc::clone(&core);
        Callback::from(move |_: MouseEvent| core.toggle_weather())
    };
    let on_check = {
        let core = Rc::clone(&core);
        Callback::from(move |_: MouseEvent| core.request_availability())
    };

    let is_raining = snapshot_value.weather.is_raining();
    let condensed = snapshot_value.metrics.offset > HEADER_CONDENSE_OFFSET
        || snapshot_value.view != View::Home;
    let root_class = classes!(
        "site-root",
        snapshot_value.tone.is_dark().then_some("site-root-dark")
    );
    let root_style = format!("background-color: {};", snapshot_value.tone.hex());

    html! {
        <div class={root_class} style={root_style}>
            <Header
                current_view={snapshot_value.view}
                condensed={condensed}
                on_select={on_select.clone()}
            />
            <WeatherWidget
                weather={snapshot_value.weather}
                notice_visible={snapshot_value.notice_visible}
                on_toggle={on_weather_toggle}
            />
            if is_raining {
                <RainOverlay />
            }
            <main class="site-main">
                { render_view(&snapshot_value, &on_select) }
            </main>
            <SiteFooter on_select={on_select.clone()} />
            <AvailabilityBar phase={snapshot_value.availability} on_check={on_check} />
            <div class="scroll-progress" ref={progress_ref} />
            <div class={classes!("palm-motif", is_raining.then_some("palm-motif-blurred"))}>
                <img class="palm-motif-top" src={PALM_MOTIF_SRC} alt="Palm leaf motif" />
                <img class="palm-motif-bottom" src={PALM_MOTIF_SRC} alt="Palm leaf motif" />
            </div>
            <CustomCursor />
        </div>
    }
}

const CURSOR_TARGETS: &str = "a, button, [role=\"button\"], img, input, select";

fn over_cursor_target(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(CURSOR_TARGETS).ok())
        .flatten()
        .is_some()
}

#[function_component(CustomCursor)]
fn custom_cursor() -> Html {
    let position = use_state(|| (-100.0, -100.0));
    let hovering = use_state(|| false);
    let visible = use_state(|| false);

    {
        let position = position.clone();
        let hovering = hovering.clone();
        let visible = visible.clone();
        use_effect_with((), move |_| {
            // Touch devices keep the native cursor; never attach.
            let window = web_sys::window().expect("window available");
            let touch = window.navigator().max_touch_points() > 0;
            let listener = (!touch).then(|| {
                EventListener::new(&window, "mousemove", move |event: &Event| {
                    let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() else {
                        return;
                    };
                    visible.set(true);
                    position.set((f64::from(event.client_x()), f64::from(event.client_y())));
                    hovering.set(over_cursor_target(event.target()));
                })
            });
            move || drop(listener)
        });
    }

    if !*visible {
        return html! {};
    }

    let hover = *hovering;
    let (x, y) = *position;
    let half = if hover { 40.0 } else { 15.0 };
    let style = format!("transform: translate({:.0}px, {:.0}px);", x - half, y - half);

    html! {
        <div
            class={classes!("custom-cursor", hover.then_some("custom-cursor-hover"))}
            style={style}
        >
            if hover {
                <span class="cursor-ring">{ "Explore" }</span>
            } else {
                <span class="cursor-cross" />
            }
        </div>
    }
}

fn render_view(snapshot: &SiteSnapshot, on_select: &Callback<View>) -> Html {
    match snapshot.view {
        View::Home => {
            let on_select = on_select.clone();
            let on_navigate = Callback::from(move |_: ()| on_select.emit(View::Suites));
            html! { <HomeSections {on_navigate} /> }
        }
        View::Suites => html! { <SuitesView /> },
        View::Dining => html! { <DiningView /> },
        View::Spa => html! { <SpaView /> },
        View::History => html! { <HistoryView /> },
        View::Reservations => html! { <ReservationsView /> },
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    current_view: View,
    condensed: bool,
    on_select: Callback<View>,
}

const MENU_ITEMS: [(&str, View); 6] = [
    ("The Arrival", View::Home),
    ("Chambers of Calm", View::Suites),
    ("The Gilded Bar", View::Dining),
    ("Heritage Spa", View::Spa),
    ("Our Legacy", View::History),
    ("Reservations", View::Reservations),
];

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let menu_open_value = *menu_open;

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let nav_button = |label: &'static str, view: View| {
        let on_select = props.on_select.clone();
        let active = props.current_view == view;
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(view));
        html! {
            <button
                class={classes!("nav-link", active.then_some("nav-link-active"))}
                {onclick}
            >
                { label }
            </button>
        }
    };

    let menu_entries: Html = MENU_ITEMS
        .iter()
        .map(|(label, view)| {
            let view = *view;
            let on_select = props.on_select.clone();
            let menu_open = menu_open.clone();
            let active = props.current_view == view;
            let onclick = Callback::from(move |_: MouseEvent| {
                on_select.emit(view);
                menu_open.set(false);
            });
            html! {
                <button
                    class={classes!("menu-entry", active.then_some("menu-entry-active"))}
                    {onclick}
                >
                    { *label }
                </button>
            }
        })
        .collect();

    let home_click = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(View::Home))
    };

    html! {
        <header class={classes!("site-header", props.condensed.then_some("site-header-condensed"))}>
            <div class="header-inner">
                <nav class="header-nav">
                    { nav_button("Suites", View::Suites) }
                    { nav_button("Dining", View::Dining) }
                </nav>
                <button class="header-logo" onclick={home_click}>
                    { "The Palm Classic" }
                </button>
                <div class="header-right">
                    <nav class="header-nav">
                        { nav_button("History", View::History) }
                        { nav_button("Wellness", View::Spa) }
                    </nav>
                    <button class="menu-toggle" aria-label="Open Menu" onclick={open_menu}>
                        <span /><span /><span />
                    </button>
                </div>
            </div>
            if menu_open_value {
                <div class="menu-overlay">
                    <div class="menu-panel">
                        <button class="menu-close" onclick={close_menu}>{ "[ Close ]" }</button>
                        <div class="menu-entries">{ menu_entries }</div>
                        <div class="menu-footer">
                            <p>{ "Singapore • Colonial District" }</p>
                        </div>
                    </div>
                </div>
            }
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct WeatherWidgetProps {
    weather: WeatherPreset,
    notice_visible: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(WeatherWidget)]
fn weather_widget(props: &WeatherWidgetProps) -> Html {
    let weather = props.weather;
    let glyph = if weather.is_raining() { "☂" } else { "☀" };
    let notice_copy = if weather.is_raining() {
        "Synced with actual hotel weather. A gentle tropical rain is falling."
    } else {
        "Synced with actual hotel weather. Clear skies at the veranda."
    };

    html! {
        <div class="weather-widget">
            <button class="weather-card" onclick={props.on_toggle.clone()}>
                <div class="weather-readout">
                    <p class="weather-caption">{ "Heritage Grounds" }</p>
                    <p class="weather-value">
                        { format!("{}°F & {}", weather.temp_f, weather.status.label()) }
                    </p>
                </div>
                <span class="weather-glyph">{ glyph }</span>
            </button>
            if props.notice_visible {
                <div class="weather-notice">
                    <p class="weather-notice-title">{ "Atmospheric Sync" }</p>
                    <p class="weather-notice-copy">{ notice_copy }</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AvailabilityBarProps {
    phase: AvailabilityPhase,
    on_check: Callback<MouseEvent>,
}

#[function_component(AvailabilityBar)]
fn availability_bar(props: &AvailabilityBarProps) -> Html {
    let check_in = use_state(|| iso_date(0.0));
    let check_out = use_state(|| iso_date(86_400_000.0));
    let guests = use_state(|| "2 Adults".to_string());

    let on_check_in = text_input_setter(check_in.clone());
    let on_check_out = text_input_setter(check_out.clone());
    let on_guests = {
        let guests = guests.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            {
                guests.set(select.value());
            }
        })
    };

    let checking = props.phase == AvailabilityPhase::Checking;
    let confirmed = props.phase == AvailabilityPhase::Confirmed;

    html! {
        <div class="availability-bar">
            if confirmed {
                <div class="availability-success">
                    <span class="availability-success-mark">{ "✓" }</span>
                    <span>{ "Availability confirmed for your dates." }</span>
                </div>
            }
            <div class="availability-panel">
                <div class="availability-fields">
                    <label class="availability-field">
                        { "Check In" }
                        <input type="date" value={(*check_in).clone()} onchange={on_check_in} />
                    </label>
                    <label class="availability-field">
                        { "Check Out" }
                        <input type="date" value={(*check_out).clone()} onchange={on_check_out} />
                    </label>
                    <label class="availability-field">
                        { "Guests" }
                        <select onchange={on_guests}>
                            { guest_option("1 Adult", &guests) }
                            { guest_option("2 Adults", &guests) }
                            { guest_option("2 Adults, 1 Child", &guests) }
                            { guest_option("Entire Wing", &guests) }
                        </select>
                    </label>
                </div>
                <button
                    class="availability-check"
                    disabled={checking}
                    onclick={props.on_check.clone()}
                >
                    if checking {
                        <span class="availability-spinner" />
                        { "Searching…" }
                    } else {
                        { "Check Availability" }
                    }
                </button>
            </div>
        </div>
    }
}

fn guest_option(label: &'static str, selected: &UseStateHandle<String>) -> Html {
    html! {
        <option value={label} selected={**selected == *label}>{ label }</option>
    }
}

fn text_input_setter(slot: UseStateHandle<String>) -> Callback<Event> {
    Callback::from(move |event: Event| {
        if let Some(input) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        {
            slot.set(input.value());
        }
    })
}

fn iso_date(offset_ms: f64) -> String {
    let date = Date::new(&JsValue::from_f64(Date::now() + offset_ms));
    let iso = String::from(date.to_iso_string());
    iso.chars().take(10).collect()
}

#[function_component(RainOverlay)]
fn rain_overlay() -> Html {
    // Drop geometry is decorative; randomize once per mount.
    let drops = use_memo((), |_| {
        (0..RAIN_DROP_COUNT)
            .map(|_| {
                format!(
                    "left: {:.1}%; height: {:.0}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
                    Math::random() * 110.0,
                    40.0 + Math::random() * 60.0,
                    0.8 + Math::random() * 0.7,
                    Math::random() * 2.0,
                )
            })
            .collect::<Vec<_>>()
    });

    html! {
        <div class="rain-overlay">
            {
                drops
                    .iter()
                    .map(|style| html! { <span class="rain-drop" style={style.clone()} /> })
                    .collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SiteFooterProps {
    on_select: Callback<View>,
}

#[function_component(SiteFooter)]
fn site_footer(props: &SiteFooterProps) -> Html {
    let history_click = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(View::History))
    };
    let reservations_click = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(View::Reservations))
    };

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <h2>{ "The Palm Classic" }</h2>
                    <p>{ "Est. 1924 • Heritage in Bloom" }</p>
                </div>
                <nav class="footer-nav">
                    <button onclick={history_click}>{ "History" }</button>
                    <button onclick={reservations_click}>{ "Reservations" }</button>
                    <button>{ "Press" }</button>
                    <button>{ "Contact" }</button>
                </nav>
                <p class="footer-fineprint">
                    { "© 2024 The Palm Classic. All rights reserved." }
                </p>
            </div>
        </footer>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn cursor_hover_follows_interactive_ancestors() {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let button = document.create_element("button").expect("create button");
        let label = document.create_element("span").expect("create span");
        button.append_child(&label).expect("append label");

        // The span itself is not interactive; `closest` climbs to the button.
        assert!(over_cursor_target(Some(label.into())));

        let plain = document.create_element("p").expect("create paragraph");
        assert!(!over_cursor_target(Some(plain.into())));
        assert!(!over_cursor_target(None));
    }
}

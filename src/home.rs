use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Element, Event};
use yew::prelude::*;

use crate::scroll_tracker;
use palm_classic_core::stage_index;

/// Staged content for the "Rhythms of the Day" panel; the active entry is
/// picked by scroll progress through the section.
struct DayStage {
    time: &'static str,
    label: &'static str,
    title: &'static str,
    copy: &'static str,
}

const DAY_STAGES: [DayStage; 4] = [
    DayStage {
        time: "06:00 AM",
        label: "Sunrise",
        title: "The Mirror Pool",
        copy: "Watch the light dance across our infinity edge as the tropics wake.",
    },
    DayStage {
        time: "12:00 PM",
        label: "Midday",
        title: "The Botanist's Lunch",
        copy: "Fresh ingredients from our garden served under a canopy of banyan trees.",
    },
    DayStage {
        time: "06:00 PM",
        label: "Sunset",
        title: "The Gilded Bar",
        copy: "Crystal glasses and amber liquids. The city's most storied cocktails.",
    },
    DayStage {
        time: "12:00 AM",
        label: "Midnight",
        title: "Starlit Courtyard",
        copy: "The scent of night-blooming cereus and the rhythm of the warm breeze.",
    },
];

#[derive(Properties, PartialEq)]
pub(crate) struct HomeSectionsProps {
    pub(crate) on_navigate: Callback<()>,
}

#[function_component(HomeSections)]
pub(crate) fn home_sections(props: &HomeSectionsProps) -> Html {
    html! {
        <>
            <Hero />
            <Rooms on_navigate={props.on_navigate.clone()} />
            <Amenities />
            <Experience />
        </>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-backdrop" />
            <div class="hero-content">
                <p class="hero-eyebrow">{ "Welcome to Inherited Luxury" }</p>
                <h1 class="hero-title">{ "The Palm Classic" }</h1>
                <div class="hero-rule" />
                <p class="hero-tagline">
                    { "Where colonial stateliness meets the wild heartbeat of the tropics." }
                </p>
            </div>
            <div class="hero-scroll-hint">
                <span class="hero-scroll-line" />
                <span>{ "Scroll" }</span>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct RoomsProps {
    on_navigate: Callback<()>,
}

#[function_component(Rooms)]
fn rooms(props: &RoomsProps) -> Html {
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(()))
    };

    html! {
        <section class="rooms">
            <p class="section-eyebrow">{ "Chambers of Calm" }</p>
            <h2 class="section-title">{ "Rooms & Suites" }</h2>
            <p class="section-copy">
                { "Four-poster beds, rattan ceilings and verandas that open onto the " }
                { "oldest private garden in the district." }
            </p>
            <button class="rooms-cta" {onclick}>{ "Explore the Suites" }</button>
        </section>
    }
}

#[function_component(Amenities)]
fn amenities() -> Html {
    let section_ref = use_node_ref();
    let active = use_state(|| 0usize);
    let active_value = *active;

    // Own region tracker: progress through this tall section, recomputed
    // from scratch on every scroll and resize event.
    {
        let section_ref = section_ref.clone();
        let active = active.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window available");
            let last = std::cell::Cell::new(0usize);
            let recompute = {
                let section_ref = section_ref.clone();
                Rc::new(move || {
                    let Some(element) = section_ref.cast::<Element>() else {
                        return;
                    };
                    let metrics = scroll_tracker::sample_metrics();
                    let progress =
                        scroll_tracker::region_progress_of(&element, metrics.viewport_height);
                    let index = stage_index(progress, DAY_STAGES.len());
                    if last.get() != index {
                        last.set(index);
                        active.set(index);
                    }
                })
            };
            let scroll = {
                let recompute = Rc::clone(&recompute);
                EventListener::new(&window, "scroll", move |_: &Event| recompute())
            };
            let resize = {
                let recompute = Rc::clone(&recompute);
                EventListener::new(&window, "resize", move |_: &Event| recompute())
            };
            recompute();
            move || {
                drop(scroll);
                drop(resize);
            }
        });
    }

    let stage_list: Html = DAY_STAGES
        .iter()
        .enumerate()
        .map(|(index, stage)| {
            html! {
                <div class={classes!(
                    "day-stage",
                    (index == active_value).then_some("day-stage-active")
                )}>
                    <span class="day-stage-time">{ stage.time }</span>
                    <h3 class="day-stage-label">{ stage.label }</h3>
                </div>
            }
        })
        .collect();

    let stage = &DAY_STAGES[active_value.min(DAY_STAGES.len() - 1)];

    html! {
        <section class="amenities" ref={section_ref}>
            <div class="amenities-sticky">
                <div class="amenities-list">
                    <p class="section-eyebrow">{ "Rhythms of the Day" }</p>
                    { stage_list }
                </div>
                <div class="amenities-detail">
                    <h4 class="day-detail-title">{ stage.title }</h4>
                    <p class="day-detail-copy">{ stage.copy }</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Experience)]
fn experience() -> Html {
    const HOTSPOTS: [(&str, &str, &str); 3] = [
        ("15%", "40%", "Banyan Tree"),
        ("45%", "60%", "Blue Orchids"),
        ("75%", "30%", "Lily Pond"),
    ];

    let hotspots: Html = HOTSPOTS
        .iter()
        .map(|(x, y, label)| {
            let style = format!("left: {x}; top: {y};");
            html! {
                <div class="experience-hotspot" {style}>
                    <span class="experience-hotspot-dot" />
                    <span>{ *label }</span>
                </div>
            }
        })
        .collect();

    html! {
        <section class="experience">
            <div class="experience-heading">
                <h2 class="section-title section-title-light">{ "Botanical Immersion" }</h2>
                <p class="section-eyebrow">{ "A Living Legacy in Every Leaf" }</p>
            </div>
            <div class="experience-pan">
                <div class="experience-panorama">
                    { hotspots }
                </div>
            </div>
            <p class="experience-hint">{ "← Pan to Explore →" }</p>
            <div class="experience-watermark">{ "Botanical Heritage" }</div>
        </section>
    }
}

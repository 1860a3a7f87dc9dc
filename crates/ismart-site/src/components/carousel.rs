//! Carousel components
//!
//! Index arithmetic lives in `ismart_core::carousel`; these components only
//! render it and wire up pointer and timer events.

use super::ContentCard;
use ismart_core::catalog::{Slide, Testimonial};
use ismart_core::{Autoplay, Card, CyclicStepper, OverflowPolicy, WindowedSlider};
use leptos::*;
use std::time::Duration;

const ARROW: &str = "absolute top-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-white/80 hover:bg-white shadow flex items-center justify-center text-gray-900 disabled:opacity-40 disabled:cursor-not-allowed";

/// Start the autoplay interval for the current component. The interval is
/// cleared when the component's owner is disposed. Effects do not run during
/// server rendering, so this only ticks in the browser.
fn use_autoplay<F>(autoplay: RwSignal<Autoplay>, tick: F)
where
    F: Fn() + Clone + 'static,
{
    create_effect(move |_| {
        if !autoplay.with_untracked(Autoplay::is_enabled) {
            return;
        }
        let interval = autoplay.with_untracked(Autoplay::interval);
        let tick = tick.clone();
        let handle = set_interval_with_handle(
            move || {
                if autoplay.with_untracked(Autoplay::should_advance) {
                    tick();
                }
            },
            interval,
        );
        match handle {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(_) => tracing::warn!("could not start carousel autoplay"),
        }
    });
}

fn autoplay_for(interval: Duration) -> Autoplay {
    if interval.is_zero() {
        Autoplay::disabled()
    } else {
        Autoplay::new(interval)
    }
}

#[component]
fn Dots<F>(count: usize, active: F, stepper: RwSignal<CyclicStepper>) -> impl IntoView
where
    F: Fn() -> usize + Copy + 'static,
{
    view! {
        <div class="flex justify-center gap-2">
            {(0..count)
                .map(|i| {
                    view! {
                        <button
                            aria-label=format!("Go to slide {}", i + 1)
                            class=move || {
                                if active() == i {
                                    "w-3 h-3 rounded-full bg-emerald-500"
                                } else {
                                    "w-3 h-3 rounded-full bg-gray-300 hover:bg-gray-400"
                                }
                            }
                            on:click=move |_| stepper.update(|s| {
                                s.go_to(i);
                            })
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Full-width hero with one slide at a time, wrapping in both directions
#[component]
pub fn HeroCarousel(slides: &'static [Slide], interval: Duration) -> impl IntoView {
    let stepper = create_rw_signal(CyclicStepper::new(slides.len()));
    let autoplay = create_rw_signal(autoplay_for(interval));
    use_autoplay(autoplay, move || stepper.update(|s| {
        s.next();
    }));
    let current = move || stepper.with(CyclicStepper::index);

    view! {
        <section
            class="relative h-[520px] overflow-hidden bg-gray-900"
            on:mouseenter=move |_| autoplay.update(Autoplay::suspend)
            on:mouseleave=move |_| autoplay.update(Autoplay::resume)
        >
            {slides
                .iter()
                .enumerate()
                .map(|(i, slide)| {
                    view! {
                        <div
                            class=move || {
                                if current() == i {
                                    "absolute inset-0 transition-opacity duration-700 opacity-100"
                                } else {
                                    "absolute inset-0 transition-opacity duration-700 opacity-0 pointer-events-none"
                                }
                            }
                            style=slide.visual.background_style()
                        >
                            <div class="absolute inset-0 bg-gradient-to-r from-black/70 to-transparent"></div>
                            <div class="relative container mx-auto px-4 h-full flex items-center">
                                <div class="max-w-xl text-white">
                                    <h1 class="text-4xl md:text-5xl font-bold mb-4">{slide.title}</h1>
                                    <p class="text-lg md:text-xl text-gray-200 mb-8">{slide.subtitle}</p>
                                    <a
                                        href=slide.href
                                        class="inline-block px-8 py-4 bg-emerald-500 hover:bg-emerald-400 text-white font-semibold rounded-lg transition"
                                    >
                                        {slide.cta}
                                    </a>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}

            <button
                aria-label="Previous slide"
                class=format!("{ARROW} left-4")
                on:click=move |_| stepper.update(|s| {
                    s.previous();
                })
            >
                "‹"
            </button>
            <button
                aria-label="Next slide"
                class=format!("{ARROW} right-4")
                on:click=move |_| stepper.update(|s| {
                    s.next();
                })
            >
                "›"
            </button>
            <div class="absolute bottom-6 inset-x-0">
                <Dots count=slides.len() active=current stepper=stepper/>
            </div>
        </section>
    }
}

/// Row of `window` cards scrolled one card at a time
#[component]
pub fn CardSlider(
    cards: Vec<Card>,
    window: usize,
    policy: OverflowPolicy,
    #[prop(optional)] label: &'static str,
) -> impl IntoView {
    let slider = create_rw_signal(WindowedSlider::new(cards.len(), window, policy));
    let card_width = 100.0 / slider.with_untracked(WindowedSlider::window) as f64;
    let offset = move || slider.with(WindowedSlider::offset_percent);

    view! {
        <div class="relative px-6" aria-label=label>
            <div class="overflow-hidden">
                <div
                    class="flex transition-transform duration-500 ease-out"
                    style=move || format!("transform: translateX({}%);", offset())
                >
                    {cards
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="shrink-0 px-3" style=format!("width: {card_width}%;")>
                                    <ContentCard card=card/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <button
                aria-label="Scroll back"
                class=format!("{ARROW} left-0")
                disabled=move || !slider.with(WindowedSlider::can_retreat)
                on:click=move |_| slider.update(|s| {
                    s.previous();
                })
            >
                "‹"
            </button>
            <button
                aria-label="Scroll forward"
                class=format!("{ARROW} right-0")
                disabled=move || !slider.with(WindowedSlider::can_advance)
                on:click=move |_| slider.update(|s| {
                    s.next();
                })
            >
                "›"
            </button>
        </div>
    }
}

#[component]
pub fn TestimonialCarousel(
    testimonials: &'static [Testimonial],
    interval: Duration,
) -> impl IntoView {
    let stepper = create_rw_signal(CyclicStepper::new(testimonials.len()));
    let autoplay = create_rw_signal(autoplay_for(interval));
    use_autoplay(autoplay, move || stepper.update(|s| {
        s.next();
    }));
    let current = move || stepper.with(CyclicStepper::index);
    let testimonial = move || testimonials.get(current());

    view! {
        <div
            class="max-w-3xl mx-auto text-center"
            on:mouseenter=move |_| autoplay.update(Autoplay::suspend)
            on:mouseleave=move |_| autoplay.update(Autoplay::resume)
        >
            {move || {
                testimonial()
                    .map(|t| {
                        view! {
                            <blockquote class="min-h-[140px]">
                                <p class="text-2xl text-gray-800 italic mb-6">{format!("“{}”", t.quote)}</p>
                                <footer class="text-gray-600">
                                    <span class="font-semibold text-gray-900">{t.author}</span>
                                    {format!(" · {}", t.location)}
                                </footer>
                            </blockquote>
                        }
                    })
            }}
            <div class="mt-8">
                <Dots count=testimonials.len() active=current stepper=stepper/>
            </div>
        </div>
    }
}

use gloo_timers::callback::Timeout;
use serde::Deserialize;
use yew::prelude::*;

use crate::i18n::use_localizer;

const ADVANCE_MS: u32 = 6000;
const MAX_RATING: u8 = 5;

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    #[serde(default)]
    pub website: String,
    pub rating: u8,
}

/// Carousel position after `current`, wrapping around.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + len - 1) % len
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let t = use_localizer();
    let items: Vec<Testimonial> = t.section("testimonials.items").unwrap_or_default();
    let len = items.len();
    let index = use_state(|| 0usize);

    // Each slide change restarts the countdown to the next one
    {
        let current = *index;
        let index = index.clone();
        use_effect_with_deps(
            move |&(current, len)| {
                let timeout = (len > 1).then(|| {
                    Timeout::new(ADVANCE_MS, move || index.set(next_index(current, len)))
                });
                move || drop(timeout)
            },
            (current, len),
        );
    }

    let Some(current) = items.get(*index % len.max(1)) else {
        return html! {};
    };

    let previous = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set(prev_index(*index, len)))
    };
    let next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set(next_index(*index, len)))
    };
    let stars = "★".repeat(current.rating.min(MAX_RATING) as usize);

    html! {
        <section class="testimonials">
            <style>
                {r#"
                    .testimonials__carousel {
                        position: relative;
                        max-width: 720px;
                        margin: 0 auto;
                    }
                    .testimonial {
                        text-align: center;
                        padding: 3rem;
                        border-radius: 20px;
                        border: 1px solid #334155;
                        background: linear-gradient(to bottom right, rgba(30, 41, 59, 0.8), rgba(15, 23, 42, 0.8));
                        animation: fadeIn 0.5s ease-out;
                    }
                    .testimonial__stars { color: #facc15; letter-spacing: 0.2rem; }
                    .testimonial__quote {
                        font-size: 1.3rem;
                        font-style: italic;
                        font-weight: 300;
                        color: #e2e8f0;
                    }
                    .testimonial__role { color: #94a3b8; }
                    .testimonial__site { color: #60a5fa; font-size: 0.85rem; }
                    .testimonials__nav {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        border: 1px solid #334155;
                        background: #0f172a;
                        color: #fff;
                        cursor: pointer;
                    }
                    .testimonials__nav.prev { left: -20px; }
                    .testimonials__nav.next { right: -20px; }
                "#}
            </style>
            <div class="section-heading">
                <h2>{t.text("testimonials.heading")}</h2>
                <p>{t.text("testimonials.description")}</p>
            </div>
            <div class="testimonials__carousel">
                <div class="testimonial" key={*index}>
                    <div class="testimonial__stars">{stars}</div>
                    <p class="testimonial__quote">{format!("“{}”", current.quote)}</p>
                    <div><strong>{&current.author}</strong></div>
                    <div class="testimonial__role">{&current.role}</div>
                    <div class="testimonial__site">{&current.website}</div>
                </div>
                if len > 1 {
                    <>
                        <button class="testimonials__nav prev" aria-label={t.text("testimonials.previous")} onclick={previous}>{"‹"}</button>
                        <button class="testimonials__nav next" aria-label={t.text("testimonials.next")} onclick={next}>{"›"}</button>
                    </>
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(1, 3), 0);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}

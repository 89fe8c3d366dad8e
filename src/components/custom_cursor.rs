use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

/// Dots kept behind the pointer, newest first.
pub const TRAIL_LEN: usize = 5;

const INTERACTIVE: &str = "button, a, [role=\"button\"], .cursor-pointer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailDot {
    pub id: u32,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CursorState {
    pub position: Option<(i32, i32)>,
    pub hovering: bool,
    pub trail: Vec<TrailDot>,
    next_id: u32,
}

pub enum CursorAction {
    Moved { x: i32, y: i32, hovering: bool },
    Left,
}

impl Reducible for CursorState {
    type Action = CursorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CursorAction::Moved { x, y, hovering } => {
                let mut trail = Vec::with_capacity(TRAIL_LEN);
                trail.push(TrailDot { id: self.next_id, x, y });
                trail.extend(self.trail.iter().take(TRAIL_LEN - 1).copied());
                Rc::new(CursorState {
                    position: Some((x, y)),
                    hovering,
                    trail,
                    next_id: self.next_id.wrapping_add(1),
                })
            }
            CursorAction::Left => Rc::new(CursorState {
                position: None,
                hovering: false,
                trail: Vec::new(),
                next_id: self.next_id,
            }),
        }
    }
}

fn over_interactive(e: &MouseEvent) -> bool {
    e.target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE).ok().flatten())
        .is_some()
}

/// Pointer follower drawn over the page, with a short fading trail.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let state = use_reducer(CursorState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let move_callback = Closure::wrap(Box::new({
                let dispatcher = dispatcher.clone();
                move |e: MouseEvent| {
                    dispatcher.dispatch(CursorAction::Moved {
                        x: e.client_x(),
                        y: e.client_y(),
                        hovering: over_interactive(&e),
                    });
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            let leave_callback = Closure::wrap(Box::new(move |_: MouseEvent| {
                dispatcher.dispatch(CursorAction::Left);
            }) as Box<dyn FnMut(MouseEvent)>);

            let root = window
                .and_then(|w| w.document())
                .and_then(|d| d.document_element());
            if let Some(root) = root.as_ref() {
                let _ = root.add_event_listener_with_callback("mousemove", move_callback.as_ref().unchecked_ref());
                let _ = root.add_event_listener_with_callback("mouseleave", leave_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(root) = root.as_ref() {
                    let _ = root.remove_event_listener_with_callback("mousemove", move_callback.as_ref().unchecked_ref());
                    let _ = root.remove_event_listener_with_callback("mouseleave", leave_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let Some((x, y)) = state.position else {
        return html! { <style>{CURSOR_CSS}</style> };
    };
    let hover = state.hovering.then(|| "hover");

    html! {
        <>
            <style>{CURSOR_CSS}</style>
            <div
                class={classes!("cursor__dot", hover)}
                style={format!("left: {}px; top: {}px;", x - 6, y - 6)}
            />
            { for state.trail.iter().enumerate().map(|(i, dot)| {
                let fade = i as f32 * 0.2;
                html! {
                    <div
                        key={dot.id}
                        class={classes!("cursor__trail", hover)}
                        style={format!(
                            "left: {}px; top: {}px; opacity: {}; transform: scale({});",
                            dot.x - 1,
                            dot.y - 1,
                            (0.6 - fade).max(0.1),
                            (1.0 - fade).max(0.3),
                        )}
                    />
                }
            }) }
            <div
                class={classes!("cursor__ring", hover)}
                style={format!("left: {}px; top: {}px;", x - 16, y - 16)}
            />
        </>
    }
}

const CURSOR_CSS: &str = r#"
    .cursor__dot, .cursor__trail, .cursor__ring {
        position: fixed;
        pointer-events: none;
        border-radius: 50%;
    }
    .cursor__dot {
        z-index: 9999;
        width: 12px;
        height: 12px;
        background: linear-gradient(to right, #60a5fa, #a855f7);
        box-shadow: 0 0 6px rgba(96, 165, 250, 0.3);
        transition: transform 0.15s ease-out;
    }
    .cursor__dot.hover {
        transform: scale(1.25);
        background: linear-gradient(to right, #fbbf24, #f97316);
        box-shadow: 0 0 10px rgba(251, 191, 36, 0.5);
    }
    .cursor__trail {
        z-index: 9998;
        width: 8px;
        height: 8px;
        background: rgba(96, 165, 250, 0.4);
    }
    .cursor__trail.hover { background: rgba(251, 191, 36, 0.4); }
    .cursor__ring {
        z-index: 9997;
        width: 32px;
        height: 32px;
        border: 1px solid rgba(96, 165, 250, 0.3);
        transition: left 0.2s ease-out, top 0.2s ease-out, transform 0.2s;
    }
    .cursor__ring.hover {
        border-color: rgba(251, 191, 36, 0.6);
        transform: scale(1.5);
    }
    @media (hover: none) {
        .cursor__dot, .cursor__trail, .cursor__ring { display: none; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(state: Rc<CursorState>, x: i32) -> Rc<CursorState> {
        state.reduce(CursorAction::Moved { x, y: 0, hovering: false })
    }

    #[test]
    fn trail_keeps_the_newest_dots() {
        let mut state = Rc::new(CursorState::default());
        for x in 0..8 {
            state = moved(state, x);
        }
        let xs: Vec<i32> = state.trail.iter().map(|d| d.x).collect();
        assert_eq!(xs, vec![7, 6, 5, 4, 3]);
        assert_eq!(state.position, Some((7, 0)));
    }

    #[test]
    fn trail_ids_stay_unique() {
        let state = moved(moved(Rc::new(CursorState::default()), 1), 1);
        assert_ne!(state.trail[0].id, state.trail[1].id);
    }

    #[test]
    fn leaving_the_page_hides_the_cursor() {
        let state = Rc::new(CursorState::default())
            .reduce(CursorAction::Moved { x: 3, y: 4, hovering: true })
            .reduce(CursorAction::Left);
        assert_eq!(state.position, None);
        assert!(!state.hovering);
        assert!(state.trail.is_empty());
    }
}

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Linear mapping of `value` from `from` onto `to`, clamped to the ends of `to`.
pub fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    let progress = ((value - from.0) / span).clamp(0.0, 1.0);
    to.0 + progress * (to.1 - to.0)
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Subscribes `on_scroll` to window scroll events for the lifetime of the
/// component, calling it once immediately with the current offset.
#[hook]
fn use_scroll_listener(on_scroll: Callback<f64>) {
    use_effect_with_deps(
        move |on_scroll| {
            on_scroll.emit(current_scroll_y());

            let listener = web_sys::window().map(|window| {
                let on_scroll = on_scroll.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    on_scroll.emit(current_scroll_y());
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        on_scroll,
    );
}

/// Current vertical scroll offset of the window.
#[hook]
pub fn use_window_scroll_y() -> f64 {
    let scroll_y = use_state_eq(|| 0.0_f64);
    let on_scroll = {
        let scroll_y = scroll_y.clone();
        use_callback(move |offset: f64, _| scroll_y.set(offset), ())
    };
    use_scroll_listener(on_scroll);
    *scroll_y
}

/// True while the window is scrolled further than `threshold` pixels.
/// Only crossings of the threshold re-render the component.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let past = use_state_eq(|| false);
    let on_scroll = {
        let past = past.clone();
        use_callback(
            move |offset: f64, threshold: &f64| past.set(offset > *threshold),
            threshold,
        )
    };
    use_scroll_listener(on_scroll);
    *past
}

/// Becomes true once, `delay_ms` after mount. The returned handle can be set
/// back to false (e.g. when the user closes a popup); it is not re-armed.
#[hook]
pub fn use_shown_after(delay_ms: u32) -> UseStateHandle<bool> {
    let shown = use_state_eq(|| false);
    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |delay_ms| {
                let timeout = Timeout::new(*delay_ms, move || shown.set(true));
                move || drop(timeout)
            },
            delay_ms,
        );
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_linearly_inside_the_range() {
        assert_eq!(map_range(0.0, (0.0, 500.0), (0.0, 150.0)), 0.0);
        assert_eq!(map_range(250.0, (0.0, 500.0), (0.0, 150.0)), 75.0);
        assert_eq!(map_range(500.0, (0.0, 500.0), (0.0, 150.0)), 150.0);
    }

    #[test]
    fn clamps_outside_the_range() {
        assert_eq!(map_range(-40.0, (0.0, 500.0), (0.0, 150.0)), 0.0);
        assert_eq!(map_range(2_000.0, (0.0, 500.0), (0.0, 150.0)), 150.0);
        assert_eq!(map_range(10.0, (0.0, 100.0), (1.0, 0.0)), 0.9);
    }

    #[test]
    fn degenerate_input_range_maps_to_start() {
        assert_eq!(map_range(42.0, (10.0, 10.0), (3.0, 7.0)), 3.0);
    }
}

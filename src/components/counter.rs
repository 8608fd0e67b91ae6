use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Performance};
use yew::prelude::*;

use crate::config::{COUNTER_DURATION, COUNTER_THRESHOLD};
use crate::observer::OnceVisible;

/// Source of millisecond timestamps on the same origin as
/// `requestAnimationFrame` callbacks.
pub trait Clock {
    fn now(&self) -> f64;
}

pub struct PerformanceClock(Performance);

impl PerformanceClock {
    pub fn from_window() -> Option<Self> {
        web_sys::window().and_then(|w| w.performance()).map(Self)
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> f64 {
        self.0.now()
    }
}

/// `parseInt(raw)` semantics: leading whitespace and sign, decimal or
/// `0x` digits up to the first non-digit, `NaN` when there are none.
pub fn parse_int(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let (radix, digits) = if rest.starts_with("0x") || rest.starts_with("0X") {
        (16, &rest[2..])
    } else {
        (10, rest)
    };

    let mut value: Option<f64> = None;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = Some(value.unwrap_or(0.0) * f64::from(radix) + f64::from(d)),
            None => break,
        }
    }
    value.map_or(f64::NAN, |v| sign * v)
}

/// `Math.round`: halves go towards positive infinity.
pub fn js_round(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Number to text the way JavaScript string concatenation does it.
pub fn format_js_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        (if v > 0.0 { "Infinity" } else { "-Infinity" }).to_string()
    } else if v == 0.0 {
        "0".to_string()
    } else if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: f64,
    suffix: String,
    start: f64,
    duration: f64,
}

impl CounterAnimation {
    pub fn new(target: f64, suffix: impl Into<String>, start: f64) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            start,
            duration: COUNTER_DURATION,
        }
    }

    pub fn start(target: f64, suffix: impl Into<String>, clock: &impl Clock) -> Self {
        Self::new(target, suffix, clock.now())
    }

    pub fn progress(&self, now: f64) -> f64 {
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// What to display at `now`. Once `done`, no more frames are needed.
    pub fn frame(&self, now: f64) -> CounterFrame {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return CounterFrame {
                text: format!("{}{}", format_js_number(self.target), self.suffix),
                done: true,
            };
        }
        let current = js_round(ease_out_cubic(progress) * self.target);
        CounterFrame {
            text: format_js_number(current),
            done: false,
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drives `animation` from `requestAnimationFrame` until it is done or
/// `running` is cleared.
fn run_animation(animation: CounterAnimation, display: UseStateSetter<String>, running: Rc<Cell<bool>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let first = frame.clone();
    let scheduler = window.clone();

    *first.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |now: f64| {
        if !running.get() {
            let _ = frame.borrow_mut().take();
            return;
        }
        let CounterFrame { text, done } = animation.frame(now);
        display.set(text);
        if done {
            let _ = frame.borrow_mut().take();
            return;
        }
        if let Some(next) = frame.borrow().as_ref() {
            let _ = scheduler.request_animation_frame(next.as_ref().unchecked_ref());
        }
    }));

    let pending = first.borrow();
    if let Some(callback) = pending.as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    /// Raw target, as it would appear in `data-count`.
    pub count: String,
    #[prop_or_default]
    pub suffix: String,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let text = use_state(|| "0".to_string());

    {
        let node = node.clone();
        let display = text.setter();
        let count = props.count.clone();
        let suffix = props.suffix.clone();
        use_effect_with_deps(
            move |_| {
                let running = Rc::new(Cell::new(true));
                let watcher = node.cast::<Element>().and_then(|element| {
                    let running = running.clone();
                    OnceVisible::observe(&element, COUNTER_THRESHOLD, None, move || {
                        let Some(clock) = PerformanceClock::from_window() else {
                            return;
                        };
                        debug!("counter {} started", count);
                        let animation = CounterAnimation::start(parse_int(&count), suffix, &clock);
                        run_animation(animation, display, running);
                    })
                });
                move || {
                    running.set(false);
                    drop(watcher);
                }
            },
            (),
        );
    }

    html! {
        <span
            ref={node}
            class="stat-number"
            data-count={props.count.clone()}
            data-suffix={props.suffix.clone()}
        >
            {(*text).clone()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ManualClock(Cell<f64>);

    impl ManualClock {
        fn advance(&self, ms: f64) {
            self.0.set(self.0.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> f64 {
            self.0.get()
        }
    }

    fn run_to_end(animation: &CounterAnimation, clock: &ManualClock) -> Vec<CounterFrame> {
        let mut frames = Vec::new();
        loop {
            clock.advance(16.0);
            let frame = animation.frame(clock.now());
            let done = frame.done;
            frames.push(frame);
            if done {
                return frames;
            }
        }
    }

    #[test]
    fn finishes_on_target_with_suffix() {
        let clock = ManualClock(Cell::new(1_000.0));
        let animation = CounterAnimation::start(parse_int("150"), "+", &clock);
        let frames = run_to_end(&animation, &clock);

        let last = frames.last().unwrap();
        assert_eq!(last.text, "150+");
        assert!(frames[..frames.len() - 1].iter().all(|f| !f.done && !f.text.ends_with('+')));
        assert_eq!(frames.iter().filter(|f| f.done).count(), 1);
    }

    #[test]
    fn values_never_decrease() {
        let clock = ManualClock(Cell::new(0.0));
        let animation = CounterAnimation::start(500.0, "", &clock);
        let values: Vec<f64> = run_to_end(&animation, &clock)
            .iter()
            .map(|f| f.text.parse::<f64>().unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last(), Some(&500.0));
    }

    #[test]
    fn eases_out() {
        let animation = CounterAnimation::new(100.0, "%", 0.0);
        // 1 - 0.5^3 = 0.875
        assert_eq!(animation.frame(1_000.0).text, "88");
        assert_eq!(animation.frame(0.0).text, "0");
        assert_eq!(animation.frame(2_000.0).text, "100%");
        assert_eq!(animation.frame(5_000.0).text, "100%");
    }

    #[test]
    fn timestamps_before_start_clamp_to_zero() {
        let animation = CounterAnimation::new(100.0, "", 50.0);
        assert_eq!(animation.progress(40.0), 0.0);
        assert_eq!(animation.frame(40.0).text, "0");
    }

    #[test]
    fn non_numeric_target_propagates_nan() {
        let animation = CounterAnimation::new(parse_int("beaucoup"), "+", 0.0);
        assert_eq!(animation.frame(500.0).text, "NaN");
        assert_eq!(animation.frame(2_000.0).text, "NaN+");

        let missing = CounterAnimation::new(parse_int(""), "", 0.0);
        assert_eq!(missing.frame(2_000.0).text, "NaN");
    }

    #[test]
    fn parse_int_follows_javascript() {
        assert_eq!(parse_int("150"), 150.0);
        assert_eq!(parse_int("  42px"), 42.0);
        assert_eq!(parse_int("-7"), -7.0);
        assert_eq!(parse_int("+8"), 8.0);
        assert_eq!(parse_int("0x1F"), 31.0);
        assert_eq!(parse_int("12.9"), 12.0);
        assert!(parse_int("abc").is_nan());
        assert!(parse_int("-").is_nan());
    }

    #[test]
    fn rounding_matches_math_round() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(2.4), 2.0);
        assert_eq!(js_round(0.49999999999999994), 0.0);
        assert_eq!(js_round(-0.5), 0.0);
        assert!(js_round(f64::NAN).is_nan());
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_js_number(-0.0), "0");
        assert_eq!(format_js_number(150.0), "150");
        assert_eq!(format_js_number(0.5), "0.5");
        assert_eq!(format_js_number(f64::INFINITY), "Infinity");
    }
}

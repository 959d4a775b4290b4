//! Main application component.

use yew::prelude::*;

use crate::components::{OutputPanel, SliderPanel};

/// Main application component.
///
/// Yew owns the reactive loop: the slider value lives in component state,
/// each input event sets it once, and each state change re-renders the
/// output exactly once with the freshly computed text.
#[function_component(App)]
pub fn app() -> Html {
    // Static wiring; binding the one declared output cannot fail.
    let app = use_memo((), |_| doubler_rs::App::new().unwrap());

    let n = use_state(|| app.page.slider.default);

    let on_slide = {
        let n = n.clone();
        Callback::from(move |value: i64| {
            n.set(value);
        })
    };

    let txt = app
        .render(app.page.output.key, *n)
        .unwrap_or_else(|e| e.to_string());

    html! {
        <div class="app">
            <header class="header">
                <div class="header-left">
                    <h1>{ "doubler-rs" }</h1>
                    <p class="subtitle">{ "Reactive Slider Demo" }</p>
                </div>
            </header>

            <main class="main">
                <div class="panels">
                    <SliderPanel
                        slider={app.page.slider.clone()}
                        value={*n}
                        on_change={on_slide}
                    />

                    <OutputPanel value={txt} />
                </div>
            </main>

            <footer class="footer">
                <div class="footer-row">
                    <span class="footer-left">{ "MIT License" }</span>
                    <span class="footer-build">
                        { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                    </span>
                </div>
            </footer>
        </div>
    }
}

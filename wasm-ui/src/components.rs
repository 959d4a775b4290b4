//! UI components for the doubler demo.

use doubler_rs::Slider;
use yew::prelude::*;

/// Parse a raw range-input value and pull it into the slider's bounds.
///
/// The browser keeps a range input within its min/max, but nothing stops
/// other event sources from handing us garbage; unparseable input is
/// dropped, out-of-range input is clamped.
pub fn slider_value(raw: &str, slider: &Slider) -> Option<i64> {
    raw.trim().parse::<i64>().ok().map(|v| slider.clamp(v))
}

/// Input panel holding the slider control.
#[derive(Properties, PartialEq)]
pub struct SliderPanelProps {
    pub slider: Slider,
    pub value: i64,
    pub on_change: Callback<i64>,
}

#[function_component(SliderPanel)]
pub fn slider_panel(props: &SliderPanelProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        let slider = props.slider.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(value) = slider_value(&target.value(), &slider) {
                on_change.emit(value);
            }
        })
    };

    html! {
        <div class="panel slider-panel">
            <div class="panel-header">
                <h2>{ props.slider.label }</h2>
                <span class="hint">{ format!("{}..{}", props.slider.min, props.slider.max) }</span>
            </div>
            <div class="panel-content slider-row">
                <input
                    type="range"
                    class="value-slider"
                    min={props.slider.min.to_string()}
                    max={props.slider.max.to_string()}
                    value={props.value.to_string()}
                    oninput={on_input}
                />
                <span class="value-readout">{ props.value.to_string() }</span>
            </div>
        </div>
    }
}

/// Output panel for the echoed text.
#[derive(Properties, PartialEq)]
pub struct OutputPanelProps {
    pub value: String,
}

#[function_component(OutputPanel)]
pub fn output_panel(props: &OutputPanelProps) -> Html {
    html! {
        <div class="panel output-panel">
            <div class="panel-header">
                <h2>{ "Output" }</h2>
            </div>
            <div class="panel-content">
                <pre class="text-output">{ &props.value }</pre>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doubler_rs::page;

    #[test]
    fn test_slider_value_parses_in_range() {
        let slider = page().slider;
        assert_eq!(slider_value("42", &slider), Some(42));
        assert_eq!(slider_value(" 7 ", &slider), Some(7));
    }

    #[test]
    fn test_slider_value_clamps() {
        let slider = page().slider;
        assert_eq!(slider_value("-5", &slider), Some(0));
        assert_eq!(slider_value("999", &slider), Some(100));
    }

    #[test]
    fn test_slider_value_drops_garbage() {
        let slider = page().slider;
        assert_eq!(slider_value("", &slider), None);
        assert_eq!(slider_value("abc", &slider), None);
        assert_eq!(slider_value("4.2", &slider), None);
    }
}

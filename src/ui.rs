//! UI declaration: the page's input control and output region.
//!
//! These are plain data. The hosting framework (the Yew app in `wasm-ui`,
//! or the CLI launcher) reads them to render controls and to decide what
//! values are acceptable.

use crate::error::AppError;

/// A bounded integer slider control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    /// Input key the server reads the value under.
    pub key: &'static str,
    /// Label shown next to the control.
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
    /// Value the control starts at when a session begins.
    pub default: i64,
}

impl Slider {
    /// Pull an externally injected value into the declared bounds.
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    /// Accept an in-range value, reject anything outside the bounds.
    pub fn check(&self, value: i64) -> Result<i64, AppError> {
        if (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(AppError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// A verbatim text output region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOutput {
    /// Output key a server computation is bound under.
    pub key: &'static str,
}

/// The declared page: one slider input and one text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub slider: Slider,
    pub output: TextOutput,
}

/// The app's page declaration: slider `n` (0..=100, default 20) labeled
/// "N", and text region `txt`.
pub fn page() -> Page {
    Page {
        slider: Slider {
            key: "n",
            label: "N",
            min: 0,
            max: 100,
            default: 20,
        },
        output: TextOutput { key: "txt" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_declaration() {
        let page = page();
        assert_eq!(page.slider.key, "n");
        assert_eq!(page.slider.label, "N");
        assert_eq!(page.slider.min, 0);
        assert_eq!(page.slider.max, 100);
        assert_eq!(page.slider.default, 20);
        assert_eq!(page.output.key, "txt");
    }

    #[test]
    fn test_default_is_in_range() {
        let slider = page().slider;
        assert_eq!(slider.check(slider.default), Ok(slider.default));
    }

    #[test]
    fn test_clamp_pins_to_bounds() {
        let slider = page().slider;
        assert_eq!(slider.clamp(-1), 0);
        assert_eq!(slider.clamp(0), 0);
        assert_eq!(slider.clamp(55), 55);
        assert_eq!(slider.clamp(100), 100);
        assert_eq!(slider.clamp(101), 100);
        assert_eq!(slider.clamp(i64::MIN), 0);
        assert_eq!(slider.clamp(i64::MAX), 100);
    }

    #[test]
    fn test_check_rejects_out_of_range() {
        let slider = page().slider;
        assert_eq!(slider.check(0), Ok(0));
        assert_eq!(slider.check(100), Ok(100));
        assert_eq!(
            slider.check(101),
            Err(AppError::OutOfRange {
                value: 101,
                min: 0,
                max: 100
            })
        );
        assert_eq!(
            slider.check(-1),
            Err(AppError::OutOfRange {
                value: -1,
                min: 0,
                max: 100
            })
        );
    }
}

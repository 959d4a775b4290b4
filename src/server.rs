//! Server bindings: named output computations keyed by output region.
//!
//! A computation is a plain `fn` from the current input snapshot to the
//! rendered text. Computations are pure and hold no state, so the hosting
//! framework may re-invoke them at whatever cadence and on whatever thread
//! it likes.

use std::collections::BTreeMap;

use crate::error::AppError;

/// Snapshot of the session's input values at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inputs {
    /// Current slider value, within the declared bounds by construction
    /// of the control.
    pub n: i64,
}

/// A pure output computation.
pub type OutputFn = fn(&Inputs) -> String;

/// Text for the `txt` region: echoes twice the slider value.
pub fn txt(inputs: &Inputs) -> String {
    format!("n*2 is {}", inputs.n * 2)
}

/// Named output computations, keyed by output region.
#[derive(Debug, Clone, Default)]
pub struct Server {
    bindings: BTreeMap<&'static str, OutputFn>,
}

impl Server {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a computation to an output key. Each key takes one binding.
    pub fn bind(&mut self, key: &'static str, f: OutputFn) -> Result<(), AppError> {
        if self.bindings.contains_key(key) {
            return Err(AppError::DuplicateOutput(key.to_string()));
        }
        self.bindings.insert(key, f);
        Ok(())
    }

    /// Evaluate the computation bound to `key` against the given inputs.
    pub fn render(&self, key: &str, inputs: &Inputs) -> Result<String, AppError> {
        match self.bindings.get(key) {
            Some(f) => Ok(f(inputs)),
            None => Err(AppError::UnknownOutput(key.to_string())),
        }
    }

    pub fn is_bound(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txt_boundaries() {
        assert_eq!(txt(&Inputs { n: 0 }), "n*2 is 0");
        assert_eq!(txt(&Inputs { n: 20 }), "n*2 is 40");
        assert_eq!(txt(&Inputs { n: 100 }), "n*2 is 200");
    }

    #[test]
    fn test_txt_full_range() {
        for n in 0..=100 {
            assert_eq!(txt(&Inputs { n }), format!("n*2 is {}", 2 * n));
        }
    }

    #[test]
    fn test_txt_is_idempotent() {
        let inputs = Inputs { n: 37 };
        assert_eq!(txt(&inputs), txt(&inputs));
    }

    #[test]
    fn test_bind_and_render() {
        let mut server = Server::new();
        server.bind("txt", txt).unwrap();
        assert!(server.is_bound("txt"));
        assert_eq!(server.render("txt", &Inputs { n: 3 }).unwrap(), "n*2 is 6");
    }

    #[test]
    fn test_bind_rejects_duplicate() {
        let mut server = Server::new();
        server.bind("txt", txt).unwrap();
        assert_eq!(
            server.bind("txt", txt),
            Err(AppError::DuplicateOutput("txt".to_string()))
        );
    }

    #[test]
    fn test_render_unknown_key() {
        let server = Server::new();
        assert_eq!(
            server.render("nope", &Inputs { n: 0 }),
            Err(AppError::UnknownOutput("nope".to_string()))
        );
    }
}

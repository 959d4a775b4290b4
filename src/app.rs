//! The application entry object: page declaration plus server bindings.

use crate::error::AppError;
use crate::server::{Inputs, Server, txt};
use crate::ui::{Page, page};

/// The assembled application: what the page declares and what the server
/// computes. The hosting framework instantiates the reactive state per
/// session and re-renders outputs on change; this object just holds the
/// two declarations together.
#[derive(Debug, Clone)]
pub struct App {
    pub page: Page,
    pub server: Server,
}

impl App {
    /// Build the app and verify every declared output has a binding.
    pub fn new() -> Result<Self, AppError> {
        let page = page();
        let mut server = Server::new();
        server.bind(page.output.key, txt)?;

        let app = Self { page, server };
        app.validate()?;
        Ok(app)
    }

    /// Check that each output region the page declares is bound.
    fn validate(&self) -> Result<(), AppError> {
        if !self.server.is_bound(self.page.output.key) {
            return Err(AppError::UnboundOutput(self.page.output.key.to_string()));
        }
        Ok(())
    }

    /// Evaluate the output bound to `key` at slider value `n`.
    pub fn render(&self, key: &str, n: i64) -> Result<String, AppError> {
        self.server.render(key, &Inputs { n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_wires_txt() {
        let app = App::new().unwrap();
        assert!(app.server.is_bound("txt"));
        assert_eq!(app.render("txt", 20).unwrap(), "n*2 is 40");
    }

    #[test]
    fn test_app_renders_at_default() {
        let app = App::new().unwrap();
        let n = app.page.slider.default;
        assert_eq!(app.render("txt", n).unwrap(), "n*2 is 40");
    }

    #[test]
    fn test_app_rejects_unknown_output() {
        let app = App::new().unwrap();
        assert_eq!(
            app.render("plot", 20),
            Err(AppError::UnknownOutput("plot".to_string()))
        );
    }
}

//! # doubler-rs
//!
//! A minimal reactive-UI demo: one bounded integer slider and one text
//! output that echoes twice the slider value.
//!
//! The crate is framework-free. It declares the page (a slider `n`,
//! range 0..=100, default 20, and a verbatim text region `txt`) and binds
//! the one output computation against it. Rendering, change observation,
//! and re-invocation belong to whatever hosts the [`App`]: the `wasm-ui`
//! member crate mounts it in Yew, and the `doubler-run` binary evaluates
//! it headlessly.
//!
//! ## Example
//!
//! ```
//! use doubler_rs::{App, Inputs};
//!
//! let app = App::new().unwrap();
//! assert_eq!(app.page.slider.default, 20);
//!
//! let text = app.server.render("txt", &Inputs { n: 20 }).unwrap();
//! assert_eq!(text, "n*2 is 40");
//! ```

pub mod app;
pub mod error;
pub mod server;
pub mod ui;

pub use app::App;
pub use error::AppError;
pub use server::{Inputs, OutputFn, Server, txt};
pub use ui::{Page, Slider, TextOutput, page};

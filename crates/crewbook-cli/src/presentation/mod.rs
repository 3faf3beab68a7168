//! Presentation layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(JSON)==> serde_json
//!                                                                         ==(Text)==> Display (views)
//! ```
//!
//! ViewModels carry raw values (ids, ISO dates, row counts) and serialize as
//! the JSON API. Views implement `Display` for the plain text layout.

pub mod formatters;
pub mod presenters;
pub mod renderer;
pub mod view_models;
pub mod views;

pub use renderer::ConsoleRenderer;
pub use view_models::{CommandResultViewModel, StatusBadge, StatusLevel};

use view_models::ErrorViewModel;

/// Print a failed command as a JSON envelope on stdout.
pub fn render_error(err: &anyhow::Error) {
    let kind = err
        .downcast_ref::<crewbook_runtime::Error>()
        .map(crewbook_runtime::Error::kind)
        .unwrap_or("error");
    let result = CommandResultViewModel::new(ErrorViewModel {
        kind,
        message: err.to_string(),
    })
    .with_badge(StatusBadge::error(err.to_string()));

    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }
}

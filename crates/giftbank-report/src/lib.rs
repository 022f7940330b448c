//! giftbank-report: renders profiles as a text histogram or an HTML chart.

pub mod histogram;
pub mod html;

pub use histogram::render_histogram;
pub use html::{generate_comparison_html, write_comparison_html};

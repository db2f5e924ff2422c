//! UI components for the portfolio.
//!
//! Each section is mountable on its own and takes the theme as its only prop.

mod acknowledgment_overlay;
mod contact_panel;
mod education_panel;
mod form_field;
mod icon;
mod project_gallery;
mod reveal;

pub use contact_panel::ContactPanel;
pub use education_panel::EducationPanel;
pub use project_gallery::ProjectGallery;

//! Portfolio Core Library
//!
//! Everything behind the portfolio's three sections that is not markup:
//! the static content tables, the visual state machines that drive the
//! staggered reveal, the contact form's submit cycle and the email relay it
//! talks to.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{AlwaysSucceeds, ContactForm, FieldId, RelayCredentials, ValidationPolicy};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut form = ContactForm::new();
//!     form.set_field(FieldId::Name, "Ada");
//!     form.set_field(FieldId::Email, "ada@x.com");
//!     form.set_field(FieldId::Message, "Hello");
//!
//!     let _ = form
//!         .submit(
//!             &AlwaysSucceeds,
//!             &RelayCredentials::default(),
//!             ValidationPolicy::AcceptAsIs,
//!             portfolio_core::contact::DEFAULT_SEND_TIMEOUT,
//!         )
//!         .await;
//!     assert!(form.submission_acknowledged());
//! }
//! ```

pub mod config;
pub mod contact;
pub mod data;
pub mod error;
pub mod records;
pub mod relay;
pub mod reveal;
pub mod view;

// Re-exports
pub use config::PortfolioConfig;
pub use contact::{ContactForm, SubmissionPhase, ValidationPolicy};
pub use error::{PortfolioError, PortfolioResult};
pub use records::{
    AssetHandle, ContactField, ContactInfoRow, CredentialRecord, FieldId, FieldKind, IconKind,
    ProjectRecord,
};
pub use relay::{
    AlwaysFails, AlwaysSucceeds, EmailJsRelay, EmailRelay, RecordingRelay, RelayCredentials,
    TemplateParams,
};
pub use reveal::{
    ImmediateVisibility, RevealGate, StaggerSchedule, Transition, TransitionTable, Trigger,
    VisibilityObserver, VisualState,
};
pub use view::{Theme, VisibleText};

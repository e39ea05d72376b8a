//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Reusable UI components (header, footer, tab bars, toasts)
//! - `modals`: Modal dialogs (request body editor)
//! - `panels`: Main panels (sidebar, request form, response viewer)
//! - `tabs`: Tab content for the request form and response viewer
//! - `styling`: Color schemes and style constants

mod components;
mod modals;
mod panels;
mod styling;
mod tabs;

pub use components::{render_footer, render_header, render_notification};
pub use modals::render_body_editor_modal;
pub use panels::{render_request_panel, render_response_panel, render_sidebar_panel};

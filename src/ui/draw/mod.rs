//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Reusable UI components (header, request bar, footer)
//! - `modals`: Modal dialogs (auth, logout confirmation, collection name, body editor)
//! - `panels`: Main panels (sidebar, request, response)
//! - `tabs`: Request and response tabs
//! - `styling`: Color schemes and style constants

mod components;
mod modals;
mod panels;
mod styling;
mod tabs;

pub use components::{render_footer, render_header, render_request_bar};
pub use modals::{
    render_auth_modal, render_body_editor_modal, render_collection_name_modal,
    render_logout_confirmation_modal,
};
pub use panels::{render_request_panel, render_response_panel, render_sidebar};

pub mod code_context;
pub mod code_tabs;
pub mod smart_link;

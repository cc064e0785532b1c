mod filters;
mod frontend_controller;
pub(super) mod server;

pub(super) mod members_controller;
pub(super) mod server;

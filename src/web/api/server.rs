use crate::member::config::CardConfig;
use crate::web::api::members_controller;
use crate::web::server::Server;
use rocket::{Build, Rocket};

pub struct ApiServer {
    card_config: CardConfig,
}

impl ApiServer {
    pub fn new(card_config: CardConfig) -> Self {
        Self { card_config }
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build.manage(self.card_config.clone()).mount(
            "/",
            routes![
                members_controller::card,
                members_controller::verify,
                members_controller::write_from_query,
                members_controller::write_from_form,
                members_controller::preflight,
            ],
        )
    }
}

use rocket::{Build, Rocket};

use crate::database::DbPool;
use crate::member::config::CardConfig;
use crate::tools::env_args::retrieve_parsed_arg_value;
use crate::web::api::server::ApiServer;
use crate::web::cors::Cors;
use crate::web::frontend::server::FrontendServer;

const PORT_ENV_ARG: &str = "--port";
const DEFAULT_PORT: u16 = 8000;

pub trait Server {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

/// The member store is shared by every server, so it is managed here.
pub fn build_server(pool: DbPool, card_config: CardConfig) -> Rocket<Build> {
    let port = get_port();
    info!("Starting server [port: {port}, card_config: {card_config:?}]");
    let rocket_build = rocket::build()
        .configure(rocket::Config::figment().merge(("port", port)))
        .manage(pool)
        .attach(Cors);

    let servers: Vec<Box<dyn Server>> = vec![
        Box::new(ApiServer::new(card_config)),
        Box::new(FrontendServer::new()),
    ];
    servers
        .iter()
        .fold(rocket_build, |rocket_build, server| server.configure(rocket_build))
}

fn get_port() -> u16 {
    retrieve_parsed_arg_value(PORT_ENV_ARG).unwrap_or(DEFAULT_PORT)
}

use crate::database::DbPool;
use crate::member::config::CardConfig;
use crate::web::server::build_server;
use rocket::{Build, Rocket};

mod api;
mod cors;
mod error;
mod frontend;
mod server;

pub fn start_servers(pool: DbPool, card_config: CardConfig) -> Rocket<Build> {
    build_server(pool, card_config)
}

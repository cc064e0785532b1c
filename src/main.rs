mod database;
mod error;
mod member;
mod tools;
mod web;

#[macro_use]
extern crate rocket;

use crate::database::init_db;
use crate::member::config::CardConfig;
use crate::web::start_servers;

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let pool = match init_db() {
        Ok(pool) => pool,
        Err(error) => {
            error!("{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    };
    start_servers(pool, CardConfig::from_args())
}

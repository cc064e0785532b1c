use crate::database::DbPool;
use crate::member::look_up::landing_sample;
use crate::web::error::WebError;
use rocket::{Request, State};
use rocket_dyn_templates::{Template, context};

/// Landing page, showing what the card reader will display for the canonical member.
#[get("/")]
pub async fn index(pool: &State<DbPool>) -> Result<Template, WebError> {
    let member = landing_sample(pool.inner())?;

    Ok(Template::render(
        "index",
        context! {
            title: "Palestra",
            member: member,
        },
    ))
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            uri: req.uri()
        },
    )
}

use crate::database::DbPool;
use crate::member::config::CardConfig;
use crate::member::look_up::{fetch_card_preview, verify_identity};
use crate::member::registration::register_or_report;
use crate::web::error::WebError;
use dto::card_preview::CardPreview;
use dto::member_fields::MemberFields;
use dto::registration::Registration;
use dto::verification::Verification;
use rocket::State;
use rocket::form::Form;
use rocket::http::Status;
use rocket::serde::json::Json;

/// Registration fields, as sent by the card reader page either in the query string or as a form.
#[derive(FromForm, Debug, Default)]
pub struct WriteForm {
    nis: Option<String>,
    surname: Option<String>,
    name: Option<String>,
    birth_date: Option<String>,
    birth_place: Option<String>,
    birth_prov: Option<String>,
    fiscal_code: Option<String>,
    res_addr: Option<String>,
    res_place: Option<String>,
    res_prov: Option<String>,
}

impl From<WriteForm> for MemberFields {
    fn from(form: WriteForm) -> Self {
        MemberFields::new(
            form.nis,
            form.surname,
            form.name,
            form.birth_date,
            form.birth_place,
            form.birth_prov,
            form.fiscal_code,
            form.res_addr,
            form.res_place,
            form.res_prov,
        )
    }
}

/// Preview the data of a card, gated by its access code (`can`).
/// Called without any access code, this acts as a liveness probe.
#[get("/card?<can>&<nis>")]
pub async fn card(
    pool: &State<DbPool>,
    card_config: &State<CardConfig>,
    can: Option<&str>,
    nis: Option<&str>,
) -> Result<Json<CardPreview>, WebError> {
    let preview = fetch_card_preview(pool.inner(), card_config.inner(), can, nis)?;

    Ok(Json(preview))
}

#[get("/verify/<nis>")]
pub async fn verify(pool: &State<DbPool>, nis: &str) -> Result<Json<Verification>, WebError> {
    let verification = verify_identity(pool.inner(), nis)?;

    Ok(Json(verification))
}

#[get("/write?<fields..>")]
pub async fn write_from_query(
    pool: &State<DbPool>,
    fields: WriteForm,
) -> Result<Json<Registration>, WebError> {
    write(pool.inner(), fields)
}

#[post("/write", data = "<fields>")]
pub async fn write_from_form(
    pool: &State<DbPool>,
    fields: Form<WriteForm>,
) -> Result<Json<Registration>, WebError> {
    write(pool.inner(), fields.into_inner())
}

fn write(pool: &DbPool, fields: WriteForm) -> Result<Json<Registration>, WebError> {
    let registration = register_or_report(pool, &MemberFields::from(fields))?;

    Ok(Json(registration))
}

/// Answer CORS pre-flight requests. Headers are added by the CORS fairing.
#[options("/<_..>")]
pub async fn preflight() -> Status {
    Status::Ok
}

use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};

pub const CORS_HEADERS: [(&str, &str); 5] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST,GET,DELETE,PUT,OPTIONS"),
    (
        "Access-Control-Allow-Headers",
        "Origin, Content-Type, Accept, Authorization",
    ),
    ("Access-Control-Allow-Credentials", "true"),
    ("Access-Control-Max-Age", "1728000"),
];

/// Attach permissive cross-origin headers to every response,
/// so that the card reader page can call the API from any origin.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Permissive CORS headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        for (name, value) in CORS_HEADERS {
            response.set_raw_header(name, value);
        }
    }
}

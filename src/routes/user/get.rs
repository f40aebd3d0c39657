use crate::db;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "List users.", skip(store))]
#[get("/users")]
pub async fn list_handler(store: web::Data<db::UserStore>) -> Result<impl Responder> {
    let users = db::user::fetch_all(store.get_ref()).await;
    Ok(web::Json(users))
}

use crate::{error::Error as CronwardError, server::AppState};
use actix_web::{HttpResponse, web};

pub async fn agents_list(state: web::Data<AppState>) -> Result<HttpResponse, CronwardError> {
    Ok(HttpResponse::Ok().json(state.api.agents().get_agents().await?))
}

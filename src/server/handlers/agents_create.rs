use crate::{agents::AgentsCreateParams, error::Error as CronwardError, server::AppState};
use actix_web::{HttpResponse, web};

pub async fn agents_create(
    state: web::Data<AppState>,
    body_params: web::Json<AgentsCreateParams>,
) -> Result<HttpResponse, CronwardError> {
    Ok(HttpResponse::Ok().json(
        state
            .api
            .agents()
            .create_agent(body_params.into_inner())
            .await?,
    ))
}

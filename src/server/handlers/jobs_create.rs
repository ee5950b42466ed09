use crate::{error::Error as CronwardError, jobs::JobsCreateParams, server::AppState};
use actix_web::{HttpResponse, web};

pub async fn jobs_create(
    state: web::Data<AppState>,
    body_params: web::Json<JobsCreateParams>,
) -> Result<HttpResponse, CronwardError> {
    Ok(HttpResponse::Ok().json(state.api.jobs().create_job(body_params.into_inner()).await?))
}

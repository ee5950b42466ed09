use crate::{error::Error as CronwardError, jobs::JobsListParams, server::AppState};
use actix_web::{HttpResponse, web};

pub async fn jobs_list(
    state: web::Data<AppState>,
    query_params: web::Query<JobsListParams>,
) -> Result<HttpResponse, CronwardError> {
    Ok(HttpResponse::Ok().json(state.api.jobs().get_jobs(query_params.into_inner()).await?))
}

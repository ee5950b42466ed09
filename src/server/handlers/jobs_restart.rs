use crate::{
    error::Error as CronwardError,
    jobs::{JobId, JobsLifecycleParams},
    server::AppState,
};
use actix_web::{HttpResponse, web};

pub async fn jobs_restart(
    state: web::Data<AppState>,
    job_id: web::Path<JobId>,
    query_params: web::Query<JobsLifecycleParams>,
) -> Result<HttpResponse, CronwardError> {
    state
        .api
        .jobs()
        .restart_job(job_id.into_inner(), query_params.operator_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

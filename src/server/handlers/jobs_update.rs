use crate::{
    error::Error as CronwardError,
    jobs::{JobId, JobsUpdateParams},
    server::AppState,
};
use actix_web::{HttpResponse, web};

pub async fn jobs_update(
    state: web::Data<AppState>,
    job_id: web::Path<JobId>,
    body_params: web::Json<JobsUpdateParams>,
) -> Result<HttpResponse, CronwardError> {
    Ok(HttpResponse::Ok().json(
        state
            .api
            .jobs()
            .update_job(job_id.into_inner(), body_params.into_inner())
            .await?,
    ))
}

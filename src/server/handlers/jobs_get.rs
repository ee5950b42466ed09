use crate::{error::Error as CronwardError, jobs::JobId, server::AppState};
use actix_web::{HttpResponse, web};

pub async fn jobs_get(
    state: web::Data<AppState>,
    job_id: web::Path<JobId>,
) -> Result<HttpResponse, CronwardError> {
    let job_id = job_id.into_inner();
    match state.api.jobs().get_job_details(job_id).await? {
        Some(job_details) => Ok(HttpResponse::Ok().json(job_details)),
        None => Err(CronwardError::not_found(format!(
            "Job ({job_id}) is not found."
        ))),
    }
}

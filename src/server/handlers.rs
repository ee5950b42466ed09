mod agents_create;
mod agents_list;
mod jobs_create;
mod jobs_delete;
mod jobs_get;
mod jobs_list;
mod jobs_pause;
mod jobs_restart;
mod jobs_start;
mod jobs_update;
mod status_get;

pub use self::{
    agents_create::agents_create, agents_list::agents_list, jobs_create::jobs_create,
    jobs_delete::jobs_delete, jobs_get::jobs_get, jobs_list::jobs_list, jobs_pause::jobs_pause,
    jobs_restart::jobs_restart, jobs_start::jobs_start, jobs_update::jobs_update,
    status_get::status_get,
};

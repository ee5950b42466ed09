use crate::server::AppState;
use actix_web::{HttpResponse, web};

pub async fn status_get(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.status)
}

#[cfg(test)]
mod tests {
    use crate::{server::handlers::status_get, tests::mock_app_state};
    use actix_web::{body::MessageBody, web};
    use bytes::Bytes;

    #[tokio::test]
    async fn returns_server_version() -> anyhow::Result<()> {
        let app_state = mock_app_state().await?;

        let response = status_get(web::Data::new(app_state)).await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.into_body().try_into_bytes().unwrap(),
            Bytes::from_static(b"{\"version\":\"0.1.0\"}")
        );

        Ok(())
    }
}

use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::access::adapter::incoming::web::extractors::admin::AdminKey;
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectDraft;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminKey,
    path: web::Path<Uuid>,
    req: web::Json<ProjectDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.update.execute(id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::TooManyContentImages { max }) => ApiResponse::bad_request(
            "TOO_MANY_CONTENT_IMAGES",
            &format!("A project holds at most {max} content images"),
        ),

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::project::application::ports::incoming::use_cases::{
        UpdateProjectError, UpdateProjectUseCase,
    };
    use crate::modules::project::application::ports::outgoing::project_repository::ProjectRecord;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::project_test_fixtures::{sample_draft, sample_record};

    #[derive(Clone)]
    struct MockUpdateProjectUseCase {
        result: Result<ProjectRecord, UpdateProjectError>,
    }

    #[async_trait]
    impl UpdateProjectUseCase for MockUpdateProjectUseCase {
        async fn execute(
            &self,
            _id: Uuid,
            _draft: ProjectDraft,
        ) -> Result<ProjectRecord, UpdateProjectError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_update_project_success() {
        let record = sample_record();
        let record_id = record.id;

        let app_state = TestAppStateBuilder::default()
            .with_update_project(MockUpdateProjectUseCase { result: Ok(record) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/projects/{}", record_id))
            .insert_header(("x-admin-key", "test-admin-key"))
            .set_json(sample_draft())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], record_id.to_string());
    }

    #[actix_web::test]
    async fn test_update_project_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_update_project(MockUpdateProjectUseCase {
                result: Err(UpdateProjectError::NotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/projects/{}", Uuid::new_v4()))
            .insert_header(("x-admin-key", "test-admin-key"))
            .set_json(sample_draft())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_update_project_rejected_with_wrong_admin_key() {
        let record = sample_record();

        let app_state = TestAppStateBuilder::default()
            .with_update_project(MockUpdateProjectUseCase { result: Ok(record) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/projects/{}", Uuid::new_v4()))
            .insert_header(("x-admin-key", "wrong-key"))
            .set_json(sample_draft())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_ADMIN_KEY");
    }
}

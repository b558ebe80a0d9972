/// Integration tests for the /profiles endpoints
///
/// These run against a live PostgreSQL (DATABASE_URL); they are ignored by
/// default so the suite passes on machines without a database.
mod common;

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::json;
    use sqlx::PgPool;

    use social_api::models::{ProfileResponse, PASSWORD_PLACEHOLDER};
    use social_api::routes;

    use crate::common::fixtures;

    async fn setup_test_app(
        pool: PgPool,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .configure(routes::configure),
        )
        .await
    }

    #[actix_web::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn test_create_and_get_profile_round_trip() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::post()
            .uri("/profiles")
            .set_json(json!({
                "username": "alice",
                "password": "password123",
                "name": "Alice A",
                "start_date": "2024-01-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let created: ProfileResponse = test::read_body_json(resp).await;
        assert_eq!(created.username, "alice");
        assert_eq!(created.name, "Alice A");
        assert_eq!(created.start_date.to_string(), "2024-01-01");
        assert_eq!(created.password, PASSWORD_PLACEHOLDER);
        assert_ne!(created.password, "password123");

        let req = test::TestRequest::get()
            .uri(&format!("/profiles/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let fetched: ProfileResponse = test::read_body_json(resp).await;
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.username, created.username);
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.start_date, created.start_date);
        assert_eq!(fetched.password, PASSWORD_PLACEHOLDER);

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn test_stored_password_is_scrambled() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::post()
            .uri("/profiles")
            .set_json(json!({
                "username": "bob",
                "password": "hunter2hunter2",
                "name": "Bob B",
                "start_date": "2024-02-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let created: ProfileResponse = test::read_body_json(resp).await;

        let stored: String =
            sqlx::query_scalar("SELECT password FROM profiles WHERE id = $1")
                .bind(created.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_ne!(stored, "hunter2hunter2");
        assert!(social_api::security::verify("hunter2hunter2", &stored));

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn test_create_profile_missing_field_returns_400() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::post()
            .uri("/profiles")
            .set_json(json!({
                "username": "carol",
                "name": "Carol C",
                "start_date": "2024-01-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn test_create_profile_malformed_date_returns_400() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::post()
            .uri("/profiles")
            .set_json(json!({
                "username": "dave",
                "password": "password123",
                "name": "Dave D",
                "start_date": "2024/13/40"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn test_get_update_delete_missing_profile_returns_404() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::get().uri("/profiles/999999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);

        let req = test::TestRequest::put()
            .uri("/profiles/999999")
            .set_json(json!({
                "username": "ghost",
                "password": "password123",
                "name": "Ghost",
                "start_date": "2024-01-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);

        let req = test::TestRequest::delete()
            .uri("/profiles/999999")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);
    }

    #[actix_web::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn test_update_missing_field_leaves_record_unchanged() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        let profile = fixtures::create_test_profile(&pool, "erin").await;
        let app = setup_test_app(pool.clone()).await;

        // password key absent: all required fields must be present
        let req = test::TestRequest::patch()
            .uri(&format!("/profiles/{}", profile.id))
            .set_json(json!({
                "username": "erin_updated",
                "name": "Erin E",
                "start_date": "2024-03-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let stored: String =
            sqlx::query_scalar("SELECT username FROM profiles WHERE id = $1")
                .bind(profile.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(stored, "erin");

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn test_update_short_username_not_persisted() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        let profile = fixtures::create_test_profile(&pool, "frank").await;
        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::put()
            .uri(&format!("/profiles/{}", profile.id))
            .set_json(json!({
                "username": "ab",
                "password": "password123",
                "name": "Frank F",
                "start_date": "2024-01-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let stored: String =
            sqlx::query_scalar("SELECT username FROM profiles WHERE id = $1")
                .bind(profile.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(stored, "frank");

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn test_update_applies_all_fields_in_one_commit() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        let profile = fixtures::create_test_profile(&pool, "grace").await;
        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::put()
            .uri(&format!("/profiles/{}", profile.id))
            .set_json(json!({
                "username": "grace_new",
                "password": "newpassword1",
                "name": "Grace G",
                "start_date": "2024-05-05",
                "interests": "climbing",
                "birthday": "1990-05-20"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let updated: ProfileResponse = test::read_body_json(resp).await;
        assert_eq!(updated.username, "grace_new");
        assert_eq!(updated.name, "Grace G");
        assert_eq!(updated.interests.as_deref(), Some("climbing"));
        assert_eq!(updated.birthday.map(|d| d.to_string()), Some("1990-05-20".into()));
        assert_eq!(updated.start_date.to_string(), "2024-05-05");
        assert_eq!(updated.password, PASSWORD_PLACEHOLDER);

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn test_duplicate_username_returns_409() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        fixtures::create_test_profile(&pool, "heidi").await;
        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::post()
            .uri("/profiles")
            .set_json(json!({
                "username": "heidi",
                "password": "password123",
                "name": "Heidi H",
                "start_date": "2024-01-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 409);

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn test_list_and_delete_profiles() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        let a = fixtures::create_test_profile(&pool, "ivan").await;
        fixtures::create_test_profile(&pool, "judy").await;
        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::get().uri("/profiles").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let listed: Vec<ProfileResponse> = test::read_body_json(resp).await;
        assert_eq!(listed.len(), 2);

        let req = test::TestRequest::delete()
            .uri(&format!("/profiles/{}", a.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let deleted: bool = test::read_body_json(resp).await;
        assert!(deleted);

        let req = test::TestRequest::get()
            .uri(&format!("/profiles/{}", a.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);

        fixtures::cleanup_test_data(&pool).await;
    }
}

use serde_json::json;

use crate::common::{TestApp, VALID_DESCRIPTION, routes};

mod plant_creation {
    use super::*;

    #[tokio::test]
    async fn creates_a_plant_with_embedded_category() {
        let app = TestApp::spawn().await;
        let category_id = app.create_category("Succulents", VALID_DESCRIPTION).await;

        let res = app
            .post(
                routes::PLANTS,
                &json!({
                    "name": "Aloe Vera",
                    "price": 249.0,
                    "images": ["https://img.example/aloe.jpg"],
                    "category": category_id,
                    "availability": 120,
                    "instruction": ["Water sparingly", "Keep in indirect sunlight"],
                    "benefits": ["Air purifying"],
                }),
            )
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["name"], "Aloe Vera");
        assert_eq!(res.body["price"], 249.0);
        assert_eq!(res.body["availability"], 120);
        assert_eq!(res.body["stockLevel"], "high_stock");
        assert_eq!(res.body["category"]["_id"], category_id);
        assert_eq!(res.body["category"]["category"], "Succulents");
        assert_eq!(res.body["instruction"][0], "Water sparingly");
        assert!(res.body["createdAt"].is_string());
    }

    #[tokio::test]
    async fn trims_the_plant_name() {
        let app = TestApp::spawn().await;
        let category_id = app.create_category("Succulents", VALID_DESCRIPTION).await;

        let res = app
            .post(
                routes::PLANTS,
                &json!({
                    "name": "  Jade Plant  ",
                    "price": 150.0,
                    "category": category_id,
                    "availability": 10,
                }),
            )
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["name"], "Jade Plant");
        assert_eq!(res.body["stockLevel"], "limited");
    }

    #[tokio::test]
    async fn rejects_invalid_input() {
        let app = TestApp::spawn().await;
        let category_id = app.create_category("Succulents", VALID_DESCRIPTION).await;

        // Empty name
        let res = app
            .post(
                routes::PLANTS,
                &json!({"name": "  ", "price": 10.0, "category": category_id, "availability": 1}),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        // Negative price
        let res = app
            .post(
                routes::PLANTS,
                &json!({"name": "Aloe", "price": -1.0, "category": category_id, "availability": 1}),
            )
            .await;
        assert_eq!(res.status, 400);

        // Negative availability
        let res = app
            .post(
                routes::PLANTS,
                &json!({"name": "Aloe", "price": 10.0, "category": category_id, "availability": -5}),
            )
            .await;
        assert_eq!(res.status, 400);

        // Missing category
        let res = app
            .post(
                routes::PLANTS,
                &json!({"name": "Aloe", "price": 10.0, "availability": 1}),
            )
            .await;
        assert_eq!(res.status, 400);
    }
}

mod plant_reads {
    use super::*;

    #[tokio::test]
    async fn lists_all_plants() {
        let app = TestApp::spawn().await;
        let category_id = app.create_category("Ferns", VALID_DESCRIPTION).await;
        app.create_plant("Boston Fern", 12.5, category_id, 40).await;
        app.create_plant("Maidenhair Fern", 18.0, category_id, 0).await;

        let res = app.get(routes::PLANTS).await;

        assert_eq!(res.status, 200);
        let plants = res.body.as_array().unwrap();
        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0]["name"], "Boston Fern");
        assert_eq!(plants[0]["category"]["category"], "Ferns");
        assert_eq!(plants[1]["stockLevel"], "limited");
    }

    #[tokio::test]
    async fn gets_a_plant_by_id() {
        let app = TestApp::spawn().await;
        let category_id = app.create_category("Ferns", VALID_DESCRIPTION).await;
        let id = app.create_plant("Boston Fern", 12.5, category_id, 40).await;

        let res = app.get(&routes::plant(id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["_id"], id);
        assert_eq!(res.body["name"], "Boston Fern");
        assert_eq!(res.body["stockLevel"], "low_stock");
    }

    #[tokio::test]
    async fn unknown_id_returns_404() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::plant(424242)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(res.body["success"], false);
    }
}

mod plant_deletion {
    use super::*;

    #[tokio::test]
    async fn deletes_a_plant() {
        let app = TestApp::spawn().await;
        let category_id = app.create_category("Ferns", VALID_DESCRIPTION).await;
        let id = app.create_plant("Boston Fern", 12.5, category_id, 40).await;

        let res = app.delete(&routes::plant(id)).await;
        assert_eq!(res.status, 204);

        let res = app.get(&routes::plant(id)).await;
        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn deleting_twice_returns_404() {
        let app = TestApp::spawn().await;
        let category_id = app.create_category("Ferns", VALID_DESCRIPTION).await;
        let id = app.create_plant("Boston Fern", 12.5, category_id, 40).await;

        assert_eq!(app.delete(&routes::plant(id)).await.status, 204);
        assert_eq!(app.delete(&routes::plant(id)).await.status, 404);
    }
}

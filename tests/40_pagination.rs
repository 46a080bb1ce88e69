mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::{json, Value};

use casting_agency_api::database::{models::NewActor, Store};
use common::TestApp;

async fn app_with_actors(count: i32) -> Result<TestApp> {
    let app = TestApp::new();
    for n in 0..count {
        app.store
            .create_actor(NewActor {
                name: format!("Actor {}", n + 1),
                age: 20 + n,
                gender: "Female".to_string(),
            })
            .await?;
    }
    Ok(app)
}

fn ids(body: &Value) -> Vec<i64> {
    body["actors"]
        .as_array()
        .map(|actors| actors.iter().filter_map(|a| a["id"].as_i64()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn pages_are_fixed_size_slices() -> Result<()> {
    let app = app_with_actors(25).await?;
    let assistant = common::assistant();

    let first = app.get("/actors", Some(&assistant)).await?;
    assert_eq!(ids(&first.body), (1..=10).collect::<Vec<_>>());

    let second = app.get("/actors?page=2", Some(&assistant)).await?;
    assert_eq!(ids(&second.body), (11..=20).collect::<Vec<_>>());

    let third = app.get("/actors?page=3", Some(&assistant)).await?;
    assert_eq!(ids(&third.body), (21..=25).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test]
async fn page_past_the_end_is_empty_not_an_error() -> Result<()> {
    let app = app_with_actors(3).await?;

    let res = app.get("/actors?page=4", Some(&common::assistant())).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({"success": true, "actors": []}));
    Ok(())
}

#[tokio::test]
async fn unparsable_page_falls_back_to_first() -> Result<()> {
    let app = app_with_actors(12).await?;

    let res = app.get("/actors?page=abc", Some(&common::assistant())).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.body), (1..=10).collect::<Vec<_>>());

    let res = app.get("/actors?page=0", Some(&common::assistant())).await?;
    assert!(ids(&res.body).is_empty());
    Ok(())
}

#[tokio::test]
async fn repeated_page_keys_use_the_first() -> Result<()> {
    let app = app_with_actors(15).await?;
    let assistant = common::assistant();

    let res = app.get("/actors?page=1&page=2", Some(&assistant)).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.body), (1..=10).collect::<Vec<_>>());

    let res = app.get("/actors?page=2&page=1", Some(&assistant)).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.body), (11..=15).collect::<Vec<_>>());

    let res = app.get("/movies?page=1&page=2&sort=title", Some(&assistant)).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["message"], "resource not found");
    Ok(())
}

#[tokio::test]
async fn movies_paginate_too() -> Result<()> {
    let app = TestApp::new();
    let producer = common::producer();
    for day in 1..=11 {
        app.post(
            "/movies",
            Some(&producer),
            json!({"title": format!("Movie {}", day), "release_date": format!("2020-01-{:02}", day)}),
        )
        .await?;
    }

    let res = app.get("/movies?page=2", Some(&common::assistant())).await?;
    assert_eq!(
        res.body["movies"],
        json!([{"id": 11, "title": "Movie 11", "release_date": "2020-01-11"}])
    );
    Ok(())
}

use std::collections::HashSet;
use std::sync::Arc;

use bytes::Bytes;
use serde_json::Value;
use trove::{Catalog, Response, Router, routes};

const TOKEN: &str = "test-token";

fn app() -> Router {
    routes::app(Arc::new(Catalog::embedded().unwrap()), Some(TOKEN))
}

async fn get(app: &Router, uri: &str) -> Response {
    let req = http::Request::builder()
        .uri(uri)
        .header("host", "localhost:8000")
        .header("authorization", format!("Bearer {TOKEN}"))
        .body(Bytes::new())
        .unwrap();
    app.call(req).await
}

fn text(res: &Response) -> &str {
    std::str::from_utf8(res.body()).unwrap()
}

fn json(res: &Response) -> Value {
    assert_eq!(res.header("content-type"), Some("application/json"));
    serde_json::from_slice(res.body()).unwrap()
}

fn array(res: &Response) -> Vec<Value> {
    json(res).as_array().cloned().unwrap()
}

#[tokio::test]
async fn plain_text_routes() {
    let app = app();
    for (uri, body) in [
        ("/", "Hello Express!"),
        ("/burgers", "We have juicy cheese burgers!"),
        ("/pizza", "We have pizza!"),
        ("/pizza/pepperoni", "We have pepperoni pizza!"),
        ("/pizza/pineapple", "You have chosen wisely."),
        ("/test", "hello world"),
    ] {
        let res = get(&app, uri).await;
        assert_eq!(res.status_code(), 200, "{uri}");
        assert_eq!(res.header("content-type"), Some("text/plain; charset=utf-8"));
        assert_eq!(text(&res), body);
    }
}

#[tokio::test]
async fn salad_and_no_content() {
    let app = app();
    let res = get(&app, "/salad").await;
    assert_eq!(res.status_code(), 500);
    assert_eq!(text(&res), "No Salad for you!");

    let res = get(&app, "/204").await;
    assert_eq!(res.status_code(), 204);
    assert!(res.body().is_empty());
}

#[tokio::test]
async fn greetings_welcomes_the_visitor() {
    let res = get(&app(), "/greetings?name=Legolas&race=elf").await;
    assert_eq!(res.status_code(), 200);
    assert_eq!(text(&res), "Greetings Legolas the elf. Welcome to our Kingdom");
}

#[tokio::test]
async fn greetings_stops_at_the_first_missing_parameter() {
    let app = app();
    let res = get(&app, "/greetings").await;
    assert_eq!(res.status_code(), 400);
    assert_eq!(text(&res), "Please provide a name");

    let res = get(&app, "/greetings?name=Gimli").await;
    assert_eq!(res.status_code(), 400);
    assert_eq!(text(&res), "Please provide a race");
}

#[tokio::test]
async fn grade_letters_and_validation() {
    let app = app();
    for (mark, letter) in [("95", "A"), ("90", "A"), ("89.9", "B"), ("75", "C"), ("60", "D"), ("0", "F")] {
        let res = get(&app, &format!("/grade?mark={mark}")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(text(&res), letter, "mark {mark}");
    }

    for (uri, message) in [
        ("/grade", "Please provide a mark"),
        ("/grade?mark=abc", "Mark must be a numeric value"),
        ("/grade?mark=NaN", "Mark must be a numeric value"),
        ("/grade?mark=101", "Mark must be in range 0 to 100"),
        ("/grade?mark=-1", "Mark must be in range 0 to 100"),
        ("/grade?mark=Infinity", "Mark must be in range 0 to 100"),
        ("/grade?mark=-inf", "Mark must be in range 0 to 100"),
    ] {
        let res = get(&app, uri).await;
        assert_eq!(res.status_code(), 400, "{uri}");
        assert_eq!(text(&res), message);
    }
}

#[tokio::test]
async fn video_and_query_viewer() {
    let app = app();
    let video = json(&get(&app, "/video").await);
    assert_eq!(video["title"], "Star Trek");
    assert_eq!(video["length"], "100.3");

    assert_eq!(text(&get(&app, "/queryviewer?q=hello%20there").await), "hello there");
    assert_eq!(text(&get(&app, "/queryviewer").await), "");
}

#[tokio::test]
async fn echo_describes_the_request() {
    let res = get(&app(), "/echo?x=1").await;
    let body = text(&res);
    assert!(body.starts_with("Here are some details of your request:"));
    assert!(body.contains("Host: localhost\n"));
    assert!(body.contains("Path: /echo\n"));
    assert!(body.contains("Route: /echo\n"));
    assert!(body.contains("Original URL: /echo?x=1\n"));
    assert!(body.contains("Query: x=1\n"));
}

#[tokio::test]
async fn echo_reports_ipv6_hosts_whole() {
    let req = http::Request::builder()
        .uri("/echo")
        .header("host", "[::1]:8000")
        .header("authorization", format!("Bearer {TOKEN}"))
        .body(Bytes::new())
        .unwrap();
    let res = app().call(req).await;
    assert!(text(&res).contains("Host: [::1]\n"));
}

#[tokio::test]
async fn bare_movies_is_a_random_sample() {
    let app = app();
    let total = Catalog::embedded().unwrap().movies.len();
    let movies = array(&get(&app, "/movies").await);
    assert_eq!(movies.len(), total.min(10));
    let titles: HashSet<_> = movies.iter().map(|m| m["film_title"].as_str().unwrap()).collect();
    assert_eq!(titles.len(), movies.len());
}

#[tokio::test]
async fn movies_filter_case_insensitively_in_catalog_order() {
    let app = app();
    let movies = array(&get(&app, "/movies?genre=DRAMA&country=australia").await);
    assert!(!movies.is_empty());
    for m in &movies {
        assert!(m["genre"].as_str().unwrap().to_lowercase().contains("drama"));
        assert!(m["country"].as_str().unwrap().to_lowercase().contains("australia"));
    }
    let titles: Vec<_> = movies.iter().map(|m| m["film_title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["Ride a Wild Pony", "Babe"]);

    let movies = array(&get(&app, "/movies?avg_vote=8.6").await);
    assert!(movies.iter().all(|m| m["avg_vote"].as_f64().unwrap() >= 8.6));

    let res = get(&app, "/movies?avg_vote=great").await;
    assert_eq!(res.status_code(), 400);
    assert_eq!(text(&res), "avg_vote must be a number");
}

#[tokio::test]
async fn unknown_movie_parameters_return_everything() {
    let total = Catalog::embedded().unwrap().movies.len();
    assert_eq!(array(&get(&app(), "/movies?page=2").await).len(), total);
}

#[tokio::test]
async fn books_search_and_sort() {
    let app = app();
    let books = array(&get(&app, "/books?sort=rank").await);
    let ranks: Vec<_> = books.iter().map(|b| b["rank"].as_u64().unwrap()).collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));

    let books = array(&get(&app, "/books?search=hobbit").await);
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "The Hobbit");

    let res = get(&app, "/books?sort=author").await;
    assert_eq!(res.status_code(), 400);
    assert_eq!(text(&res), "Sort must be one of title or rank");
}

#[tokio::test]
async fn pokemon_types_and_filters() {
    let app = app();
    let types = array(&get(&app, "/types").await);
    assert_eq!(types.len(), 18);
    assert_eq!(types[0], "Bug");

    let fire = array(&get(&app, "/pokemon?type=fire").await);
    assert!(!fire.is_empty());
    assert!(fire.iter().all(|p| p["type"].as_array().unwrap().iter().any(|t| t == "Fire")));

    let named = array(&get(&app, "/pokemon?name=PIKA").await);
    assert_eq!(named.len(), 1);
    assert_eq!(named[0]["name"], "Pikachu");

    let res = get(&app, "/pokemon?type=Wood").await;
    assert_eq!(res.status_code(), 400);
    assert_eq!(text(&res), "Type is not valid");
}

#[tokio::test]
async fn unauthorized_requests_never_reach_handlers() {
    let app = app();
    for auth in [None, Some("Bearer wrong")] {
        let mut builder = http::Request::builder().uri("/movies");
        if let Some(value) = auth {
            builder = builder.header("authorization", value);
        }
        let res = app.call(builder.body(Bytes::new()).unwrap()).await;
        assert_eq!(res.status_code(), 401);
        assert_eq!(json(&res)["error"], "Unauthorized request");
    }
}

#[tokio::test]
async fn without_a_token_everything_is_open() {
    let app = routes::app(Arc::new(Catalog::embedded().unwrap()), None);
    let req = http::Request::builder().uri("/burgers").body(Bytes::new()).unwrap();
    assert_eq!(app.call(req).await.status_code(), 200);
}

#[tokio::test]
async fn unknown_paths_and_methods() {
    let app = app();
    assert_eq!(get(&app, "/salmon").await.status_code(), 404);

    let req = http::Request::builder()
        .method("POST")
        .uri("/books")
        .header("authorization", format!("Bearer {TOKEN}"))
        .body(Bytes::new())
        .unwrap();
    assert_eq!(app.call(req).await.status_code(), 405);
}

#[tokio::test]
async fn head_is_answered_like_get() {
    let app = app();
    let req = http::Request::builder()
        .method("HEAD")
        .uri("/burgers")
        .header("authorization", format!("Bearer {TOKEN}"))
        .body(Bytes::new())
        .unwrap();
    let res = app.call(req).await;
    assert_eq!(res.status_code(), 200);
    assert_eq!(res.header("content-type"), Some("text/plain; charset=utf-8"));
}

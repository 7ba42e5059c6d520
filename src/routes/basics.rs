//! The plain-text and fixed-JSON endpoints: food, greetings, grades and
//! request introspection.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::request::Request;
use crate::response::{Json, Response};
use crate::status::Status;

pub async fn hello(_req: Request) -> &'static str {
    "Hello Express!"
}

pub async fn burgers(_req: Request) -> &'static str {
    "We have juicy cheese burgers!"
}

pub async fn pizza(_req: Request) -> &'static str {
    "We have pizza!"
}

pub async fn pepperoni(_req: Request) -> &'static str {
    "We have pepperoni pizza!"
}

pub async fn pineapple(_req: Request) -> &'static str {
    "You have chosen wisely."
}

pub async fn salad(_req: Request) -> Response {
    Response::builder()
        .status(Status::InternalServerError)
        .text("No Salad for you!")
}

pub async fn no_content(_req: Request) -> Status {
    Status::NoContent
}

pub async fn hello_world(_req: Request) -> &'static str {
    "hello world"
}

/// GET /echo: describes the request back to the caller.
pub async fn echo(req: Request) -> String {
    let query = req
        .query_pairs()
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ");
    let original = req.uri().path_and_query().map_or(req.path(), |pq| pq.as_str());

    format!(
        "Here are some details of your request:\n  \
         Host: {host}\n  \
         Path: {path}\n  \
         Route: {route}\n  \
         Protocol: {version:?}\n  \
         Original URL: {original}\n  \
         Query: {query}\n",
        host = req.host().unwrap_or_default(),
        path = req.path(),
        route = req.route().unwrap_or_default(),
        version = req.version(),
    )
}

#[derive(Serialize)]
struct Video {
    title: &'static str,
    description: &'static str,
    length: &'static str,
}

pub async fn video(_req: Request) -> Json<impl Serialize> {
    Json(Video {
        title: "Star Trek",
        description: "Boldly going where no man has gone before",
        length: "100.3",
    })
}

/// GET /queryviewer: the raw `q` value, or an empty body.
pub async fn query_viewer(req: Request) -> String {
    req.query("q").unwrap_or_default().to_owned()
}

/// GET /greetings?name=..&race=..
pub async fn greetings(req: Request) -> Result<String> {
    let name = req.query("name").ok_or_else(|| Error::invalid("Please provide a name"))?;
    let race = req.query("race").ok_or_else(|| Error::invalid("Please provide a race"))?;
    Ok(format!("Greetings {name} the {race}. Welcome to our Kingdom"))
}

/// GET /grade?mark=..
pub async fn grade(req: Request) -> Result<&'static str> {
    let raw = req.query("mark").ok_or_else(|| Error::invalid("Please provide a mark"))?;
    let mark = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|m| !m.is_nan())
        .ok_or_else(|| Error::invalid("Mark must be a numeric value"))?;
    letter_grade(mark)
}

fn letter_grade(mark: f64) -> Result<&'static str> {
    if !(0.0..=100.0).contains(&mark) {
        return Err(Error::invalid("Mark must be in range 0 to 100"));
    }
    Ok(match mark {
        m if m >= 90.0 => "A",
        m if m >= 80.0 => "B",
        m if m >= 70.0 => "C",
        m if m >= 60.0 => "D",
        _ => "F",
    })
}

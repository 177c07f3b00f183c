#![allow(dead_code)]

use axum::body::{self, Body};
use axum::http::{Request, Response};
use serde_json::Value;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 4] = ["bankBinCode", "bankAccount", "amount", "message"];

pub fn write_requests_csv(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

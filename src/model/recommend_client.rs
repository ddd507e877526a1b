//! HTTP client for the lyric recommendation service

use std::time::Duration;

use anyhow::Result;
use futures::future::BoxFuture;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::SearchError;
use super::provider::RecommendationProvider;
use super::query::Query;
use super::song::{Release, Song, SongScore};

#[derive(Serialize)]
struct RecommendRequest<'a> {
    lyric: &'a str,
}

/// One element of the service's `recommendations` array
#[derive(Debug, Deserialize)]
struct RemoteSong {
    track: String,
    artist: String,
    #[serde(default)]
    genre: String,
    #[serde(default)]
    release_date: String,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    ly: String,
}

impl From<RemoteSong> for Song {
    fn from(remote: RemoteSong) -> Self {
        Song {
            title: remote.track,
            artist: remote.artist,
            genre: remote.genre,
            album: None,
            release: Release::parse(&remote.release_date),
            lyrics_excerpt: remote.ly,
            score: SongScore::Relevance(remote.score),
        }
    }
}

/// Sends queries to `POST {endpoint}` and decodes the recommendations
pub struct HttpRecommendationClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpRecommendationClient {
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: Url::parse(endpoint)?,
        })
    }

    pub async fn search(&self, query: &Query) -> Result<Vec<Song>, SearchError> {
        tracing::debug!(endpoint = %self.endpoint, query_len = query.as_str().chars().count(), "Sending recommendation request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&RecommendRequest { lyric: query.as_str() })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Recommendation service responded");
        if !status.is_success() {
            return Err(SearchError::Provider {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        parse_recommendations(&body)
    }
}

impl RecommendationProvider for HttpRecommendationClient {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn recommend<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, Result<Vec<Song>, SearchError>> {
        Box::pin(self.search(query))
    }
}

/// Decode a response body. `recommendations` must be an array; nothing else is coerced.
pub fn parse_recommendations(body: &[u8]) -> Result<Vec<Song>, SearchError> {
    let mut payload: Value = serde_json::from_slice(body)
        .map_err(|e| SearchError::InvalidResponse(format!("body is not JSON: {}", e)))?;

    let recommendations = match payload.get_mut("recommendations").map(Value::take) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(SearchError::InvalidResponse(format!(
                "recommendations is {}, expected an array",
                json_type_name(&other)
            )));
        }
        None => {
            return Err(SearchError::InvalidResponse(
                "recommendations field is missing".to_string(),
            ));
        }
    };

    recommendations
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<RemoteSong>(item)
                .map(Song::from)
                .map_err(|e| SearchError::InvalidResponse(format!("recommendation {}: {}", index, e)))
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    struct CapturedRequest {
        head: String,
        body: Vec<u8>,
    }

    /// Serve exactly one HTTP exchange with a canned response
    async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/recommend", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let header_end = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before headers were complete");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().unwrap())
                })
                .unwrap_or(0);

            while buf.len() < header_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before body was complete");
                buf.extend_from_slice(&chunk[..n]);
            }

            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            CapturedRequest {
                head,
                body: buf[header_end..header_end + content_length].to_vec(),
            }
        });

        (endpoint, handle)
    }

    #[tokio::test]
    async fn posts_trimmed_query_as_json() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"recommendations":[{"track":"Imagine","artist":"John Lennon","genre":"Soft Rock","release_date":"1971-09-09","score":0.5,"ly":"Imagine there's no heaven"}]}"#,
        )
        .await;

        let client = HttpRecommendationClient::new(&endpoint, None).unwrap();
        let query = Query::parse("  no heaven  ").unwrap();
        let songs = client.search(&query).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.head.starts_with("POST /recommend HTTP/1.1\r\n"), "{}", request.head);
        assert!(request.head.to_ascii_lowercase().contains("content-type: application/json"));

        let body: Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body, serde_json::json!({ "lyric": "no heaven" }));

        assert_eq!(
            songs,
            vec![Song {
                title: "Imagine".to_string(),
                artist: "John Lennon".to_string(),
                genre: "Soft Rock".to_string(),
                album: None,
                release: Some(Release::Date(NaiveDate::from_ymd_opt(1971, 9, 9).unwrap())),
                lyrics_excerpt: "Imagine there's no heaven".to_string(),
                score: SongScore::Relevance(0.5),
            }]
        );
    }

    #[tokio::test]
    async fn server_error_is_a_provider_error() {
        let (endpoint, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

        let client = HttpRecommendationClient::new(&endpoint, None).unwrap();
        let err = client.search(&Query::parse("love").unwrap()).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, SearchError::Provider { status: 500 }), "{err:?}");
        assert_eq!(err.user_message(), "Failed to search for music. Please try again.");
    }

    #[tokio::test]
    async fn non_list_recommendations_are_rejected() {
        let (endpoint, server) = serve_once("200 OK", r#"{"recommendations":"not-a-list"}"#).await;

        let client = HttpRecommendationClient::new(&endpoint, None).unwrap();
        let err = client.search(&Query::parse("love").unwrap()).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, SearchError::InvalidResponse(_)), "{err:?}");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpRecommendationClient::new(&format!("http://{}/recommend", addr), None).unwrap();
        let err = client.search(&Query::parse("love").unwrap()).await.unwrap_err();

        assert!(matches!(err, SearchError::Transport(_)), "{err:?}");
        assert_eq!(err.kind(), "transport");
    }

    #[test]
    fn empty_recommendations_are_a_valid_result() {
        let songs = parse_recommendations(br#"{"recommendations":[]}"#).unwrap();
        assert!(songs.is_empty());
    }

    #[test]
    fn malformed_payloads_are_invalid_responses() {
        let cases: [&[u8]; 5] = [
            b"<html>oops</html>",
            br#"{}"#,
            br#"{"recommendations":null}"#,
            br#"{"recommendations":{"track":"Imagine"}}"#,
            br#"{"recommendations":[{"artist":"no track"}]}"#,
        ];
        for body in cases {
            let err = parse_recommendations(body).unwrap_err();
            assert!(
                matches!(err, SearchError::InvalidResponse(_)),
                "{}: {err:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn optional_fields_default() {
        let songs = parse_recommendations(br#"{"recommendations":[{"track":"Song","artist":"Band"}]}"#).unwrap();
        assert_eq!(songs[0].genre, "");
        assert_eq!(songs[0].release, None);
        assert_eq!(songs[0].lyrics_excerpt, "");
        assert_eq!(songs[0].score, SongScore::Relevance(0.0));
    }

    #[test]
    fn order_is_preserved() {
        let songs = parse_recommendations(
            br#"{"recommendations":[
                {"track":"B","artist":"x","score":0.2},
                {"track":"A","artist":"x","score":0.9},
                {"track":"B","artist":"x","score":0.2}
            ]}"#,
        )
        .unwrap();
        let titles: Vec<_> = songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A", "B"]);
    }
}

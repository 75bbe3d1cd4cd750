/// Character source: fetches API pages and shapes them into Characters
///
/// All configured pages are fetched concurrently and the load succeeds only
/// if every page does. A failed or hung page therefore never produces a
/// partially rendered catalog; the UI offers a retry that re-issues the
/// same fan-out.

use futures::future::try_join_all;
use serde::Deserialize;
use thiserror::Error;

use crate::state::data::Character;

/// Character pages fetched at startup
pub const PAGE_URLS: [&str; 2] = [
    "https://rickandmortyapi.com/api/character?page=1",
    "https://rickandmortyapi.com/api/character?page=2",
];

/// Maximum number of characters kept after concatenating all pages
pub const CHARACTER_LIMIT: usize = 40;

/// Errors from fetching or decoding a character page
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("page request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("page returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// One page of the character API
#[derive(Debug, Deserialize)]
struct CharacterPage {
    #[serde(default)]
    results: Vec<ApiCharacter>,
}

/// A character as the API serializes it
#[derive(Debug, Deserialize)]
struct ApiCharacter {
    id: i64,
    name: String,
    status: String,
    species: String,
    image: String,
    #[serde(default)]
    episode: Vec<String>,
}

impl From<ApiCharacter> for Character {
    fn from(api: ApiCharacter) -> Self {
        Character {
            id: api.id,
            name: api.name,
            image_url: api.image,
            status: api.status,
            species: api.species,
            episode_count: api.episode.len(),
        }
    }
}

/// Fetch every page concurrently and concatenate the results.
///
/// Pages are concatenated in request order, then truncated to `limit`
/// before any card exists. The first failing page fails the whole load.
pub async fn fetch_characters(
    urls: Vec<String>,
    limit: usize,
) -> Result<Vec<Character>, SourceError> {
    let client = reqwest::Client::new();

    let pages = try_join_all(urls.iter().map(|url| fetch_page(&client, url))).await?;

    let mut characters: Vec<Character> = pages
        .into_iter()
        .flat_map(|page| page.results)
        .map(Character::from)
        .collect();
    characters.truncate(limit);

    println!("📥 Loaded {} characters from {} pages", characters.len(), urls.len());

    Ok(characters)
}

async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<CharacterPage, SourceError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(SourceError::Status(response.status()));
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serve a fixed HTTP response on a local port, forever
    fn spawn_stub_page(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let mut stream = match stream {
                    Ok(s) => s,
                    Err(_) => continue,
                };
                let mut request = [0u8; 4096];
                let _ = stream.read(&mut request);
                let response = format!(
                    "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len(),
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{addr}/")
    }

    fn page_body(ids: &[i64]) -> String {
        let results: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "name": format!("Character {id}"),
                    "status": "Alive",
                    "species": "Human",
                    "image": format!("http://example.invalid/{id}.jpeg"),
                    "episode": ["e1", "e2"],
                })
            })
            .collect();
        serde_json::json!({ "results": results }).to_string()
    }

    #[tokio::test]
    async fn test_successful_fan_out_concatenates_in_request_order() {
        let first = spawn_stub_page("HTTP/1.1 200 OK", page_body(&[1, 2]));
        let second = spawn_stub_page("HTTP/1.1 200 OK", page_body(&[3]));

        let characters = fetch_characters(vec![first, second], 40).await.unwrap();

        let ids: Vec<i64> = characters.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(characters[0].episode_count, 2);
    }

    #[tokio::test]
    async fn test_result_is_truncated_to_the_limit() {
        let page = spawn_stub_page("HTTP/1.1 200 OK", page_body(&[1, 2, 3, 4]));

        let characters = fetch_characters(vec![page], 2).await.unwrap();

        assert_eq!(characters.len(), 2);
        assert_eq!(characters[1].id, 2);
    }

    #[tokio::test]
    async fn test_one_failing_page_fails_the_whole_load_and_retry_recovers() {
        let healthy = spawn_stub_page("HTTP/1.1 200 OK", page_body(&[1, 2]));
        let failing = spawn_stub_page(
            "HTTP/1.1 500 Internal Server Error",
            "{\"error\":\"boom\"}".to_string(),
        );

        let failed = fetch_characters(vec![healthy.clone(), failing], 40).await;
        assert!(matches!(failed, Err(SourceError::Status(status)) if status.as_u16() == 500));

        // Retry against healthy endpoints matches a clean load exactly
        let second_healthy = spawn_stub_page("HTTP/1.1 200 OK", page_body(&[3]));
        let retried = fetch_characters(vec![healthy.clone(), second_healthy.clone()], 40)
            .await
            .unwrap();
        let clean = fetch_characters(vec![healthy, second_healthy], 40)
            .await
            .unwrap();

        assert_eq!(retried, clean);
        assert_eq!(retried.len(), 3);
    }

    #[tokio::test]
    async fn test_unreachable_page_is_a_request_error() {
        // Bind then drop a listener so the port refuses connections
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = fetch_characters(vec![format!("http://{addr}/")], 40).await;

        assert!(matches!(result, Err(SourceError::Request(_))));
    }
}

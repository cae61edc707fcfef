use serde_json::json;
use tmdb_addon_core::MediaKind;
use tmdb_addon_metadata::MetadataError;
use tmdb_addon_metadata::provider::MetadataProvider;
use tmdb_addon_metadata::tmdb::{TmdbClient, TmdbConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> TmdbClient {
    TmdbClient::new(TmdbConfig {
        api_key: "test-key".into(),
        base_url: server.uri(),
        language: "en-US".into(),
    })
}

#[tokio::test]
async fn discover_sends_key_language_and_sort() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/discover/tv"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("language", "de-DE"))
        .and(query_param("sort_by", "popularity.desc"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 2,
            "total_pages": 10,
            "results": [
                { "id": 1399, "name": "Game of Thrones", "first_air_date": "2011-04-17" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .discover_popular(MediaKind::Series, 2, Some("de-DE"))
        .await
        .unwrap();
    assert_eq!(page.page, 2);
    assert_eq!(page.results[0].id, 1399);
}

#[tokio::test]
async fn default_language_is_used_when_none_given() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending/movie/week"))
        .and(query_param("language", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .trending(MediaKind::Movie, 1, None)
        .await
        .unwrap();
    assert!(page.results.is_empty());
}

#[tokio::test]
async fn details_appends_related_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .and(query_param("append_to_response", "videos,credits,external_ids"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "title": "The Matrix",
            "credits": { "cast": [{ "name": "Keanu Reeves" }, { "name": null, "character": "Agent" }] },
            "videos": { "results": [{ "key": null, "site": "YouTube", "type": "Trailer" }] },
            "external_ids": { "imdb_id": "tt0133093" }
        })))
        .mount(&server)
        .await;

    let detail = client(&server)
        .details(MediaKind::Movie, "603", None)
        .await
        .unwrap();
    assert_eq!(detail.item.title.as_deref(), Some("The Matrix"));
    let cast = detail.credits.unwrap().cast;
    assert_eq!(cast[0].name.as_deref(), Some("Keanu Reeves"));
    assert_eq!(cast[1].name, None);
    assert_eq!(detail.videos.unwrap().results[0].key, None);
}

#[tokio::test]
async fn search_sends_query_and_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("query", "the matrix"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 2,
            "results": [{ "id": 603, "title": "The Matrix", "release_date": "1999-03-31" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .search(MediaKind::Movie, "the matrix", 2, None)
        .await
        .unwrap();
    assert_eq!(page.results[0].id, 603);
}

#[tokio::test]
async fn similar_and_find_hit_expected_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tv/1399/similar"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "id": 1400, "name": "House of the Dragon" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/find/tt0944947"))
        .and(query_param("external_source", "imdb_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "movie_results": [],
            "tv_results": [{ "id": 1399, "name": "Game of Thrones" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tmdb = client(&server);
    let similar = tmdb
        .similar(MediaKind::Series, "1399", None)
        .await
        .unwrap();
    assert_eq!(similar.results[0].id, 1400);

    let found = tmdb.find_by_imdb_id("tt0944947", None).await.unwrap();
    assert!(found.movie_results.is_empty());
    assert_eq!(found.tv_results[0].id, 1399);
}

#[tokio::test]
async fn not_found_status_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client(&server)
        .details(MediaKind::Movie, "1", None)
        .await
        .unwrap_err();
    assert!(matches!(err, MetadataError::NotFound));
}

#[tokio::test]
async fn server_error_is_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server)
        .similar(MediaKind::Movie, "603", None)
        .await
        .unwrap_err();
    assert!(matches!(err, MetadataError::Provider(_)));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn malformed_body_is_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server)
        .discover_popular(MediaKind::Movie, 1, None)
        .await
        .unwrap_err();
    assert!(matches!(err, MetadataError::Provider(_)));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let tmdb = TmdbClient::new(TmdbConfig {
        api_key: "k".into(),
        base_url: "http://127.0.0.1:9".into(),
        language: "en-US".into(),
    });

    let err = tmdb.find_by_imdb_id("tt0133093", None).await.unwrap_err();
    assert!(matches!(err, MetadataError::Network(_)));
}

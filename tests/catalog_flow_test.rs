#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockito::{Matcher, Server, ServerGuard};
    use planet_catalog::app::ports::CatalogStorePort;
    use planet_catalog::app::CatalogUseCase;
    use planet_catalog::common::constants::NOT_FOUND_TITLE;
    use planet_catalog::common::error::CatalogError;
    use planet_catalog::config::{ApiConfig, HttpConfig};
    use planet_catalog::domain::FilmTitle;
    use planet_catalog::infra::{InMemoryStore, ReqwestHttp};
    use serde_json::json;

    fn api(server: &ServerGuard) -> ApiConfig {
        ApiConfig {
            planets_url: format!("{}/api/planets/", server.url()),
            films_url: format!("{}/api/films/", server.url()),
        }
    }

    fn build(server: &ServerGuard, store: Arc<InMemoryStore>) -> CatalogUseCase {
        let http = ReqwestHttp::new(&HttpConfig::default()).unwrap();
        CatalogUseCase::new(Box::new(http), store, &api(server))
    }

    fn films_body(server: &ServerGuard) -> String {
        json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                { "title": "A New Hope", "url": format!("{}/api/films/1/", server.url()) },
                { "title": "Return of the Jedi", "url": format!("{}/api/films/3/", server.url()) }
            ]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_initial_load_against_http_server() {
        let mut server = Server::new_async().await;
        let films_json = films_body(&server);
        let films = server
            .mock("GET", "/api/films/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(films_json)
            .expect(1)
            .create_async()
            .await;
        let planets_body = json!({
            "count": 61,
            "next": format!("{}/api/planets/?page=2", server.url()),
            "previous": null,
            "results": [{
                "name": "Tatooine",
                "url": format!("{}/api/planets/1/", server.url()),
                "films": [
                    format!("{}/api/films/1/", server.url()),
                    format!("{}/api/films/3/", server.url()),
                    format!("{}/api/films/5/", server.url())
                ]
            }]
        });
        let planets = server
            .mock("GET", "/api/planets/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(planets_body.to_string())
            .expect(1)
            .create_async()
            .await;

        let store = Arc::new(InMemoryStore::new());
        build(&server, store.clone()).load_initial_data().await.unwrap();

        films.assert_async().await;
        planets.assert_async().await;

        let page = store.state().planet_page.unwrap();
        assert_eq!(page.count(), Some(61));
        assert_eq!(
            page.results[0].films,
            vec![
                FilmTitle::from("A New Hope"),
                FilmTitle::from("Return of the Jedi"),
                FilmTitle::from(NOT_FOUND_TITLE)
            ]
        );
        assert_eq!(page.results[0].name(), Some("Tatooine"));
    }

    #[tokio::test]
    async fn test_film_failure_skips_planet_fetch() {
        let mut server = Server::new_async().await;
        let _films = server
            .mock("GET", "/api/films/")
            .with_status(503)
            .create_async()
            .await;
        let planets = server
            .mock("GET", Matcher::Regex("^/api/planets/".to_string()))
            .expect(0)
            .create_async()
            .await;

        let store = Arc::new(InMemoryStore::new());
        let err = build(&server, store.clone())
            .load_initial_data()
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Status { status: 503, .. }));
        planets.assert_async().await;
        assert_eq!(
            store.dispatched_kinds(),
            vec!["FETCH_PLANETS_BEGIN", "FETCH_PLANETS_FAILURE"]
        );
        assert_eq!(store.state().error.and_then(|e| e.status), Some(503));
    }

    #[tokio::test]
    async fn test_repeat_lookup_served_from_cache() {
        let mut server = Server::new_async().await;
        let films_json = films_body(&server);
        let planet_json = json!({
            "name": "Yavin IV",
            "url": format!("{}/api/planets/3/", server.url()),
            "films": [format!("{}/api/films/1/", server.url())]
        })
        .to_string();
        let _films = server
            .mock("GET", "/api/films/")
            .with_status(200)
            .with_body(films_json)
            .create_async()
            .await;
        let planet = server
            .mock("GET", "/api/planets/3")
            .with_status(200)
            .with_body(planet_json)
            .expect(1)
            .create_async()
            .await;

        let store = Arc::new(InMemoryStore::new());
        let use_case = build(&server, store.clone());
        use_case.load_films().await.unwrap();
        use_case.resolve_or_fetch_planet("3").await.unwrap();
        use_case.resolve_or_fetch_planet("3").await.unwrap();

        planet.assert_async().await;
        assert_eq!(
            store.dispatched_kinds(),
            vec![
                "FETCH_FILMS",
                "FETCH_PLANETS_BEGIN",
                "FETCH_PLANET_SUCCESS",
                "FETCH_PLANETS_BEGIN",
                "RETRIEVE_PLANET_FROM_CACHE"
            ]
        );
        let current = store.state().current_planet.unwrap();
        assert_eq!(current.films, vec![FilmTitle::from("A New Hope")]);
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported() {
        let mut server = Server::new_async().await;
        let _planet = server
            .mock("GET", "/api/planets/7")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let store = Arc::new(InMemoryStore::new());
        let err = build(&server, store.clone())
            .resolve_or_fetch_planet("7")
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Json(_)));
        let report = store.state().error.unwrap();
        assert!(report.message.starts_with("JSON deserialization failed"));
        assert!(store.planet_cache().is_empty());
    }
}

//! Planets from the community API.

use tracing::{info, instrument};

use super::client::ApiClient;
use crate::constants::community;
use crate::error::AppError;
use crate::models::Planet;

pub struct PlanetApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PlanetApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn get_planets(&self) -> Result<Vec<Planet>, AppError> {
        let planets: Vec<Planet> = self.client.get_community(&[community::PLANETS]).await?;
        info!("Fetched {} planets", planets.len());
        Ok(planets)
    }

    #[instrument(skip(self))]
    pub async fn get_planet(&self, index: i32) -> Result<Planet, AppError> {
        let index = index.to_string();
        self.client
            .get_community(&[community::PLANETS, &index])
            .await
    }

    /// Planets that currently have an active event (defense, invasion, ...).
    #[instrument(skip(self))]
    pub async fn get_planets_with_events(&self) -> Result<Vec<Planet>, AppError> {
        self.client
            .get_community(&[community::PLANET_EVENTS])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::test_client;
    use crate::models::planet::tests::planet_json;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_planets() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/planets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                planet_json(0, "Super Earth", 1_000_000),
                planet_json(64, "Malevelon Creek", 250_000)
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let planets = client.planets().get_planets().await.unwrap();

        assert_eq!(planets.len(), 2);
        assert_eq!(planets[1].name, "Malevelon Creek");
        assert!((planets[1].liberation_percentage() - 75.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_get_planet_by_index() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/planets/64"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(planet_json(64, "Malevelon Creek", 500_000)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let planet = client.planets().get_planet(64).await.unwrap();
        assert_eq!(planet.index, 64);
        assert_eq!(planet.players(), 1234);
    }

    #[tokio::test]
    async fn test_get_planets_with_events_empty() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/planet-events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let planets = client.planets().get_planets_with_events().await.unwrap();
        assert!(planets.is_empty());
    }
}

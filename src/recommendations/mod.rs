//! Outfit recommendation requests

mod types;

use reqwest::Client;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

pub use types::*;

/// Marker the backend embeds in failures caused by a wardrobe with nothing
/// to recommend from. Compared case-insensitively.
const NO_ITEMS_MARKER: &str = "no clothing items";

#[derive(Debug, serde::Serialize)]
struct GenerateRequest<'a> {
    user_id: &'a str,
    mood: &'a str,
    occasion: &'a str,
    weather: &'a WeatherContext,
}

/// Client for outfit recommendation requests
pub struct RecommendationsClient {
    /// Base URL of the StyleSync backend
    base_url: String,

    /// Client options
    options: ClientOptions,

    /// HTTP client used for requests
    client: Client,
}

impl RecommendationsClient {
    /// Create a new RecommendationsClient
    pub(crate) fn new(base_url: &str, options: ClientOptions, client: Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            options,
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}/recommendations{}",
            self.base_url, self.options.api_prefix, path
        )
    }

    /// Request outfit recommendations for a user.
    ///
    /// `mood` and `occasion` are free-form tags; the backend decides how to
    /// interpret values outside the suggested palettes. `weather` is
    /// forwarded unchanged. The returned order is the backend's ranking and
    /// is preserved for display.
    ///
    /// A wardrobe with nothing to recommend from surfaces as
    /// [`Error::EmptyWardrobe`], distinguishable from transport or server
    /// failures, so callers can prompt the user to add items instead of
    /// offering a retry.
    pub async fn generate(
        &self,
        user_id: &str,
        mood: &str,
        occasion: &str,
        weather: &WeatherContext,
    ) -> Result<Vec<OutfitRecommendation>, Error> {
        let url = self.endpoint("/generate");
        let request = GenerateRequest {
            user_id,
            mood,
            occasion,
            weather,
        };

        let result = Fetch::post(&self.client, &url)
            .timeout(self.options.request_timeout)
            .json(&request)?
            .execute::<RecommendationsResponse>()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(Error::Request { body, .. })
                if body.to_lowercase().contains(NO_ITEMS_MARKER) =>
            {
                return Err(Error::EmptyWardrobe);
            }
            Err(err) => return Err(err),
        };

        // The backend answers an empty wardrobe with an empty list rather
        // than a failure status.
        if response.recommendations.is_empty() {
            tracing::warn!(url = %url, user_id, "nothing to recommend from");
            return Err(Error::EmptyWardrobe);
        }

        Ok(response.recommendations)
    }

    /// First-ranked recommendation, for callers that only want today's
    /// outfit.
    pub async fn quick_pick(
        &self,
        user_id: &str,
        mood: &str,
        occasion: &str,
        weather: &WeatherContext,
    ) -> Result<OutfitRecommendation, Error> {
        let mut recommendations = self.generate(user_id, mood, occasion, weather).await?;
        // generate never returns an empty vector
        Ok(recommendations.remove(0))
    }
}

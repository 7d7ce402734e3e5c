//! User management operations

mod types;

use reqwest::Client;
use serde_json::json;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

pub use types::*;

/// Client for user management
pub struct UsersClient {
    /// Base URL of the StyleSync backend
    base_url: String,

    /// Client options
    options: ClientOptions,

    /// HTTP client used for requests
    client: Client,
}

impl UsersClient {
    /// Create a new UsersClient
    pub(crate) fn new(base_url: &str, options: ClientOptions, client: Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            options,
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}/users{}", self.base_url, self.options.api_prefix, path)
    }

    /// Create (or fetch, when the email is already registered) a development
    /// test user and return its identifier.
    pub async fn create_test_user(
        &self,
        email: &str,
        name: &str,
    ) -> Result<CreateTestUserResponse, Error> {
        let url = self.endpoint("/create-test-user");

        let body = json!({
            "email": email,
            "name": name,
        });

        let response = Fetch::post(&self.client, &url)
            .timeout(self.options.request_timeout)
            .json(&body)?
            .execute::<CreateTestUserResponse>()
            .await?;

        if !response.success {
            tracing::error!(url = %url, message = %response.message, "user creation reported failure");
            return Err(Error::application(&response.message));
        }

        Ok(response)
    }

    /// List every registered user.
    pub async fn list_users(&self) -> Result<Vec<User>, Error> {
        let url = self.endpoint("/users");

        let response = Fetch::get(&self.client, &url)
            .timeout(self.options.request_timeout)
            .execute::<UserListResponse>()
            .await?;

        if !response.success {
            tracing::error!(url = %url, "user listing reported failure");
            return Err(Error::application("user listing reported failure"));
        }

        Ok(response.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(mock_server: &MockServer) -> UsersClient {
        UsersClient::new(&mock_server.uri(), ClientOptions::default(), Client::new())
    }

    #[tokio::test]
    async fn create_test_user_posts_email_and_name() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/users/create-test-user"))
            .and(body_json(json!({
                "email": "demo@example.com",
                "name": "Demo User"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Test user created successfully",
                "user_id": "user-42",
                "email": "demo@example.com",
                "name": "Demo User"
            })))
            .mount(&mock_server)
            .await;

        let response = client_for(&mock_server)
            .create_test_user("demo@example.com", "Demo User")
            .await
            .unwrap();

        assert_eq!(response.user_id, "user-42");
        assert_eq!(response.name.as_deref(), Some("Demo User"));
    }

    #[tokio::test]
    async fn create_test_user_tolerates_an_existing_account() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/users/create-test-user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Test user already exists",
                "user_id": "user-42",
                "email": "demo@example.com"
            })))
            .mount(&mock_server)
            .await;

        let response = client_for(&mock_server)
            .create_test_user("demo@example.com", "Demo User")
            .await
            .unwrap();

        assert_eq!(response.user_id, "user-42");
        assert!(response.name.is_none());
    }

    #[tokio::test]
    async fn list_users_unwraps_the_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/users/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "users": [
                    {
                        "user_id": "user-1",
                        "email": "a@example.com",
                        "full_name": "User A",
                        "created_at": "2024-05-01T10:30:00"
                    },
                    {
                        "user_id": "user-2",
                        "email": "b@example.com",
                        "full_name": null
                    }
                ],
                "total": 2
            })))
            .mount(&mock_server)
            .await;

        let users = client_for(&mock_server).list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].full_name.as_deref(), Some("User A"));
        assert!(users[1].full_name.is_none());
    }
}

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::model::catalog::Listing;
use crate::utils::format_price;

/// Signup request body for `POST /auth/signup`
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request body for `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// New listing body for `POST /books`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub condition: String,
    pub category: String,
    pub negotiable: bool,
}

/// Raw record returned by `GET /books`
///
/// The backend has no documented schema; everything beyond the title is
/// optional and defaulted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub seller_email: String,
    #[serde(default)]
    pub contact: String,
}

impl BookRecord {
    /// Ad hoc mapping into the listing shape used by every view
    ///
    /// `title`→name, `description`→condition text (parsed into the closed
    /// enum when it happens to name one), `sellerEmail`→seller,
    /// `contact`→location.
    pub fn into_listing(self, index: usize) -> Listing {
        let id = match &self.id {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => (index + 1).to_string(),
        };

        Listing {
            id,
            name: self.title,
            price: format_price(self.price),
            price_value: self.price,
            condition: self.description.parse().ok(),
            category: None,
            date_posted: String::new(),
            seller: self.seller_email,
            location: self.contact,
            negotiable: false,
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description)
            },
            images: Vec::new(),
            status: None,
        }
    }
}

/// Thin client for the marketplace backend (unauthenticated stub endpoints)
#[derive(Clone)]
pub struct MarketClient {
    base_url: String,
    client: Client,
}

impl MarketClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    async fn check(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("{} failed: {} - {}", what, status, text);
        }
        Ok(response)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<serde_json::Value> {
        let url = format!("{}/auth/signup", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to reach signup endpoint")?;

        let response = Self::check(response, "Signup").await?;

        // Response schema is undocumented; pass it through
        response.json().await.context("Failed to parse signup response")
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<serde_json::Value> {
        let url = format!("{}/auth/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to reach login endpoint")?;

        let response = Self::check(response, "Login").await?;

        response.json().await.context("Failed to parse login response")
    }

    /// Fetch the whole listing collection (no server-side filtering,
    /// sorting, or pagination)
    pub async fn get_books(&self) -> Result<Vec<Listing>> {
        let url = format!("{}/books", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch listings")?;

        let response = Self::check(response, "Listing fetch").await?;

        let records: Vec<BookRecord> = response
            .json()
            .await
            .context("Failed to parse listings response")?;

        Ok(records
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.into_listing(i))
            .collect())
    }

    pub async fn add_book(&self, book: &NewBook) -> Result<()> {
        let url = format!("{}/books", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(book)
            .send()
            .await
            .context("Failed to post listing")?;

        Self::check(response, "Listing creation").await?;
        Ok(())
    }
}

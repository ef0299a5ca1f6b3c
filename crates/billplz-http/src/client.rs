//! Reqwest-based Billplz API client

use billplz_core::{
    BankAccount, BankAccountCheckResponse, BankAccountList, Bill, BillTransactions, Collection,
    CollectionIndexResult, OpenCollection, OpenCollectionIndexResult, PaymentMethod,
    PaymentMethodList,
};
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;

/// Base URL of the production Billplz API.
pub const PRODUCTION_ENDPOINT: &str = "https://www.billplz.com/api/v3";

/// Base URL of the staging (sandbox) Billplz API.
pub const SANDBOX_ENDPOINT: &str = "https://billplz-staging.herokuapp.com/api/v3";

/// Status filters accepted by the collection index endpoints.
const COLLECTION_STATUSES: &[&str] = &["active", "inactive"];

/// Status filters accepted by the bill transaction index endpoint.
const TRANSACTION_STATUSES: &[&str] = &["pending", "completed", "failed"];

/// Bank account listings are capped at ten account numbers per request.
const BANK_ACCOUNT_INDEX_LIMIT: usize = 10;

/// Billplz API client.
///
/// Authenticates every request with HTTP basic auth, API key as username
/// and an empty password. Entities submitted through create calls are
/// validated locally first; the call fails with [`Error::Validation`]
/// before any network I/O if a rule is violated.
///
/// # Example
///
/// ```ignore
/// use billplz_http::Client;
///
/// let client = Client::new("73eb57f0-7d4e-42b9-a544-aeac6e4b0f81", true);
/// let collection = client.get_collection("inbmmepb").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Client {
    /// Creates a client against the production or sandbox endpoint.
    pub fn new(api_key: impl Into<String>, sandbox: bool) -> Self {
        let base_url = if sandbox {
            SANDBOX_ENDPOINT
        } else {
            PRODUCTION_ENDPOINT
        };
        Self::with_client(reqwest::Client::new(), api_key, base_url)
    }

    /// Creates a client with a caller-supplied transport and base URL.
    ///
    /// The transport may be shared across clients to reuse connections.
    pub fn with_client(
        http: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a new collection.
    ///
    /// The collection is validated before submission.
    pub async fn create_collection(&self, collection: &Collection) -> Result<Collection, Error> {
        collection.validate()?;
        let res = self
            .request(Method::POST, &format!("{}/collections", self.base_url))
            .json(collection)
            .send()
            .await?;
        self.decode(res).await
    }

    /// Retrieves a single collection with the given ID.
    pub async fn get_collection(&self, id: &str) -> Result<Collection, Error> {
        let res = self
            .request(Method::GET, &format!("{}/collections/{id}", self.base_url))
            .send()
            .await?;
        match res.status() {
            StatusCode::NOT_FOUND => Err(Error::CollectionNotFound),
            _ => self.decode(res).await,
        }
    }

    /// Retrieves a page of collections, up to 15 at a time.
    ///
    /// A page of 0 defaults to 1. The status filter accepts "active" or
    /// "inactive"; any other value retrieves all collections.
    pub async fn get_collection_index(
        &self,
        page: u32,
        status: &str,
    ) -> Result<CollectionIndexResult, Error> {
        let res = self
            .request(Method::GET, &format!("{}/collections", self.base_url))
            .query(&index_query(page, status, COLLECTION_STATUSES))
            .send()
            .await?;
        self.decode(res).await
    }

    /// Activates a collection with the given ID.
    pub async fn activate_collection(&self, id: &str) -> Result<(), Error> {
        let res = self
            .request(
                Method::POST,
                &format!("{}/collections/{id}/activate", self.base_url),
            )
            .send()
            .await?;
        match res.status() {
            StatusCode::UNPROCESSABLE_ENTITY => Err(Error::CannotActivateCollection),
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
            _ => {
                res.error_for_status()?;
                Ok(())
            }
        }
    }

    /// Deactivates a collection with the given ID.
    pub async fn deactivate_collection(&self, id: &str) -> Result<(), Error> {
        let res = self
            .request(
                Method::POST,
                &format!("{}/collections/{id}/deactivate", self.base_url),
            )
            .send()
            .await?;
        match res.status() {
            StatusCode::UNPROCESSABLE_ENTITY => Err(Error::CannotDeactivateCollection),
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
            _ => {
                res.error_for_status()?;
                Ok(())
            }
        }
    }

    /// Creates a new open collection.
    ///
    /// The open collection is validated before submission.
    pub async fn create_open_collection(
        &self,
        open_collection: &OpenCollection,
    ) -> Result<OpenCollection, Error> {
        open_collection.validate()?;
        let res = self
            .request(Method::POST, &format!("{}/open_collections", self.base_url))
            .json(open_collection)
            .send()
            .await?;
        self.decode(res).await
    }

    /// Retrieves a single open collection with the given ID.
    pub async fn get_open_collection(&self, id: &str) -> Result<OpenCollection, Error> {
        let res = self
            .request(
                Method::GET,
                &format!("{}/open_collections/{id}", self.base_url),
            )
            .send()
            .await?;
        match res.status() {
            StatusCode::NOT_FOUND => Err(Error::CollectionNotFound),
            _ => self.decode(res).await,
        }
    }

    /// Retrieves a page of open collections, up to 15 at a time.
    ///
    /// Page and status filters behave as in
    /// [`get_collection_index`](Self::get_collection_index).
    pub async fn get_open_collection_index(
        &self,
        page: u32,
        status: &str,
    ) -> Result<OpenCollectionIndexResult, Error> {
        let res = self
            .request(Method::GET, &format!("{}/open_collections", self.base_url))
            .query(&index_query(page, status, COLLECTION_STATUSES))
            .send()
            .await?;
        self.decode(res).await
    }

    /// Creates a new bill.
    ///
    /// The bill is validated before submission.
    pub async fn create_bill(&self, bill: &Bill) -> Result<Bill, Error> {
        bill.validate()?;
        let res = self
            .request(Method::POST, &format!("{}/bills", self.base_url))
            .json(bill)
            .send()
            .await?;
        self.decode(res).await
    }

    /// Retrieves a single bill with the given ID.
    pub async fn get_bill(&self, id: &str) -> Result<Bill, Error> {
        let res = self
            .request(Method::GET, &format!("{}/bills/{id}", self.base_url))
            .send()
            .await?;
        match res.status() {
            StatusCode::NOT_FOUND => Err(Error::BillNotFound),
            _ => self.decode(res).await,
        }
    }

    /// Deletes a bill with the given ID.
    pub async fn delete_bill(&self, id: &str) -> Result<(), Error> {
        let res = self
            .request(Method::DELETE, &format!("{}/bills/{id}", self.base_url))
            .send()
            .await?;
        match res.status() {
            StatusCode::NOT_FOUND => Err(Error::BillNotFound),
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
            _ => {
                res.error_for_status()?;
                Ok(())
            }
        }
    }

    /// Retrieves a page of transactions made against a bill, up to 15 at a
    /// time.
    ///
    /// A page of 0 defaults to 1. The status filter accepts "pending",
    /// "completed" or "failed"; any other value retrieves all transactions.
    pub async fn get_bill_transactions(
        &self,
        id: &str,
        page: u32,
        status: &str,
    ) -> Result<BillTransactions, Error> {
        let res = self
            .request(
                Method::GET,
                &format!("{}/bills/{id}/transactions", self.base_url),
            )
            .query(&index_query(page, status, TRANSACTION_STATUSES))
            .send()
            .await?;
        self.decode(res).await
    }

    /// Retrieves all payment methods available on a collection.
    pub async fn get_payment_method_index(&self, id: &str) -> Result<Vec<PaymentMethod>, Error> {
        let res = self
            .request(
                Method::GET,
                &format!("{}/collections/{id}/payment_methods", self.base_url),
            )
            .send()
            .await?;
        let list: PaymentMethodList = self.decode(res).await?;
        Ok(list.payment_methods)
    }

    /// Enables the payment methods with the given codes on a collection.
    pub async fn update_payment_methods(
        &self,
        id: &str,
        codes: &[&str],
    ) -> Result<Vec<PaymentMethod>, Error> {
        let body = PaymentMethodList {
            payment_methods: codes
                .iter()
                .map(|code| PaymentMethod {
                    code: Some((*code).to_string()),
                    ..Default::default()
                })
                .collect(),
        };

        let res = self
            .request(
                Method::PUT,
                &format!("{}/collections/{id}/payment_methods", self.base_url),
            )
            .json(&body)
            .send()
            .await?;
        let list: PaymentMethodList = self.decode(res).await?;
        Ok(list.payment_methods)
    }

    /// Checks a bank account's registration status by account number.
    ///
    /// Returns `true` if the account is registered and verified, `false`
    /// if it is registered but unverified.
    pub async fn check_registration(&self, account_number: &str) -> Result<bool, Error> {
        let res = self
            .request(
                Method::GET,
                &format!(
                    "{}/check/bank_account_number/{account_number}",
                    self.base_url
                ),
            )
            .send()
            .await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Err(Error::BankAccountNotFound);
        }

        let check: BankAccountCheckResponse = self.decode(res).await?;
        match check.name.as_deref() {
            Some("verified") => Ok(true),
            Some("unverified") => Ok(false),
            _ => Err(Error::BankAccountNotFound),
        }
    }

    /// Retrieves bank accounts with the given account numbers.
    ///
    /// Only the first ten account numbers are sent. Requires the Billplz
    /// 'ADMIN' setting to be enabled on the account.
    pub async fn get_bank_account_index(
        &self,
        account_numbers: &[&str],
    ) -> Result<BankAccountList, Error> {
        let query: Vec<(&str, &str)> = account_numbers
            .iter()
            .take(BANK_ACCOUNT_INDEX_LIMIT)
            .map(|number| ("account_numbers[]", *number))
            .collect();

        let res = self
            .request(
                Method::GET,
                &format!("{}/bank_verification_services", self.base_url),
            )
            .query(&query)
            .send()
            .await?;
        match res.status() {
            StatusCode::UNPROCESSABLE_ENTITY | StatusCode::UNAUTHORIZED => {
                Err(Error::AdminPrivilegeRequired)
            }
            _ => self.decode(res).await,
        }
    }

    /// Retrieves a bank account with the given account number.
    ///
    /// Requires the Billplz 'ADMIN' setting to be enabled on the account.
    pub async fn get_bank_account(&self, account_number: &str) -> Result<BankAccount, Error> {
        let res = self
            .request(
                Method::GET,
                &format!(
                    "{}/bank_verification_services/{account_number}",
                    self.base_url
                ),
            )
            .send()
            .await?;
        match res.status() {
            StatusCode::UNPROCESSABLE_ENTITY => Err(Error::AdminPrivilegeRequired),
            _ => self.decode(res).await,
        }
    }

    /// Creates a bank account through the direct verification service.
    ///
    /// The bank account is validated before submission. Requires the
    /// Billplz 'ADMIN' setting to be enabled on the account.
    pub async fn create_bank_account(&self, account: &BankAccount) -> Result<BankAccount, Error> {
        account.validate()?;
        let res = self
            .request(
                Method::POST,
                &format!("{}/bank_verification_services", self.base_url),
            )
            .json(account)
            .send()
            .await?;
        match res.status() {
            StatusCode::UNPROCESSABLE_ENTITY | StatusCode::UNAUTHORIZED => {
                Err(Error::AdminPrivilegeRequired)
            }
            _ => self.decode(res).await,
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!(%method, url, "sending billplz request");
        self.http
            .request(method, url)
            .basic_auth(&self.api_key, Some(""))
            .header(ACCEPT, "application/json")
    }

    async fn decode<T: DeserializeOwned>(&self, res: Response) -> Result<T, Error> {
        if res.status() == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }
        Ok(res.error_for_status()?.json().await?)
    }
}

/// Builds the query string for a paginated, status-filterable index call.
///
/// A page of 0 defaults to 1, and a status outside the endpoint's allowed
/// set is dropped so the server returns all statuses.
fn index_query(page: u32, status: &str, allowed: &[&str]) -> Vec<(&'static str, String)> {
    let page = if page == 0 { 1 } else { page };
    let mut query = vec![("page", page.to_string())];
    if allowed.contains(&status) {
        query.push(("status", status.to_string()));
    }
    query
}

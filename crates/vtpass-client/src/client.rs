//! VTpass service facade.

use serde::de::DeserializeOwned;
use std::time::Duration;
use vtpass_core::{
    ApiError, AuthHeaders, BalanceResponse, BaseResponse, Credentials, CustomerInfo,
    CustomerInfoResponse, Environment, ResponseCode, Service, ServiceCategory,
    ServiceCategoryResponse, ServiceResponse, ServiceVariations, VariationResponse, WalletBalance,
    INVALID_ARGUMENTS, PRODUCT_DOES_NOT_EXIST,
};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::{HttpTransport, RawResponse, Transport, DEFAULT_TIMEOUT_SECONDS};

/// Payload codes rejected on an HTTP 200 response.
#[derive(Debug, Clone, Copy)]
enum PayloadCheck {
    /// `011`.
    InvalidArguments,
    /// `011` and `012`.
    InvalidArgumentsOrMissingProduct,
}

impl PayloadCheck {
    fn check(self, code: &ResponseCode) -> Result<(), ClientError> {
        if code == INVALID_ARGUMENTS {
            return Err(ClientError::InvalidArguments);
        }
        if matches!(self, Self::InvalidArgumentsOrMissingProduct)
            && code == PRODUCT_DOES_NOT_EXIST
        {
            return Err(ClientError::ProductNotFound);
        }
        Ok(())
    }
}

/// VTpass API client.
///
/// Credentials and the header set built from them are fixed at construction,
/// so one client can be shared across tasks. Dropping a call's future aborts
/// the request.
#[derive(Debug, Clone)]
pub struct VtpassClient<T = HttpTransport> {
    transport: T,
    credentials: Credentials,
    auth_headers: AuthHeaders,
    environment: Environment,
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// Replaces the environment's base URL, e.g. for a proxy or a mock server.
    pub base_url: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            base_url: None,
        }
    }
}

impl ClientOptions {
    /// Create options pointing at a custom base URL.
    #[must_use]
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            base_url: Some(url.into()),
            ..Self::default()
        }
    }
}

impl VtpassClient<HttpTransport> {
    /// Create a client for the given environment.
    ///
    /// The environment may be given as an [`Environment`] or by name; names
    /// other than `"sandbox"` and `"live"` select the sandbox.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
        environment: impl Into<Environment>,
    ) -> Self {
        Self::with_options(
            Credentials::new(api_key, public_key, secret_key),
            environment,
            ClientOptions::default(),
        )
    }

    /// Create a client with custom options.
    #[must_use]
    pub fn with_options(
        credentials: Credentials,
        environment: impl Into<Environment>,
        options: ClientOptions,
    ) -> Self {
        let environment = environment.into();
        let base_url = options
            .base_url
            .unwrap_or_else(|| environment.base_url().to_string());
        let transport =
            HttpTransport::new(base_url, Duration::from_secs(options.timeout_seconds));

        Self::with_transport(credentials, environment, transport)
    }

    /// Create a client from loaded configuration.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_options(
            config.credentials(),
            config.environment,
            ClientOptions {
                timeout_seconds: config.timeout_seconds,
                base_url: None,
            },
        )
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

impl<T: Transport> VtpassClient<T> {
    /// Create a client over a custom transport.
    #[must_use]
    pub fn with_transport(
        credentials: Credentials,
        environment: impl Into<Environment>,
        transport: T,
    ) -> Self {
        let auth_headers = credentials.auth_headers();
        Self {
            transport,
            credentials,
            auth_headers,
            environment: environment.into(),
        }
    }

    /// The selected environment.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The credentials this client authenticates with.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Verify a meter number with its biller.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArguments`] or
    /// [`ClientError::ProductNotFound`] when the biller rejects the lookup,
    /// [`ClientError::Api`] on a non-200 response, and transport or decode
    /// errors as they occur.
    pub async fn verify_meter_number(
        &self,
        meter_number: &str,
        meter_type: &str,
        service_id: &str,
    ) -> Result<CustomerInfo, ClientError> {
        let body = serde_json::json!({
            "billersCode": meter_number,
            "serviceID": service_id,
            "type": meter_type,
        });

        let response = self
            .transport
            .post("merchant-verify", &body, &self.auth_headers)
            .await?;

        let envelope: CustomerInfoResponse =
            decode_success(&response, PayloadCheck::InvalidArgumentsOrMissingProduct)?;

        tracing::debug!(service_id = %service_id, "Meter number verified");
        Ok(envelope.content)
    }

    /// List the variation codes of a service.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArguments`] for an unknown service,
    /// [`ClientError::Api`] on a non-200 response, and transport or decode
    /// errors as they occur.
    pub async fn service_variations(
        &self,
        service_id: &str,
    ) -> Result<ServiceVariations, ClientError> {
        let path = format!("service-variations?serviceID={}", encode(service_id));
        let envelope: VariationResponse = self.get(&path, PayloadCheck::InvalidArguments).await?;
        Ok(envelope.content)
    }

    /// List the services under a category identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArguments`] for an unknown identifier,
    /// [`ClientError::Api`] on a non-200 response, and transport or decode
    /// errors as they occur.
    pub async fn service_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Vec<Service>, ClientError> {
        let path = format!("services?identifier={}", encode(identifier));
        let envelope: ServiceResponse = self.get(&path, PayloadCheck::InvalidArguments).await?;
        Ok(envelope.content)
    }

    /// List all service categories.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArguments`] if the API rejects the call,
    /// [`ClientError::Api`] on a non-200 response, and transport or decode
    /// errors as they occur.
    pub async fn service_categories(&self) -> Result<Vec<ServiceCategory>, ClientError> {
        let envelope: ServiceCategoryResponse = self
            .get("service-categories", PayloadCheck::InvalidArguments)
            .await?;
        Ok(envelope.content)
    }

    /// Check that the API is reachable and accepts the credentials.
    ///
    /// Returns `true` on HTTP 200 whatever the payload says.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on a non-200 response and transport or
    /// decode errors as they occur.
    pub async fn ping(&self) -> Result<bool, ClientError> {
        let response = self.transport.get("balance", &self.auth_headers).await?;
        check_status(&response)?;
        Ok(true)
    }

    /// Fetch the wallet balance.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArguments`] if the API rejects the call,
    /// [`ClientError::Api`] on a non-200 response, and transport or decode
    /// errors as they occur.
    pub async fn balance(&self) -> Result<WalletBalance, ClientError> {
        let envelope: BalanceResponse = self.get("balance", PayloadCheck::InvalidArguments).await?;
        Ok(envelope.contents)
    }

    async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        payload_check: PayloadCheck,
    ) -> Result<R, ClientError> {
        let response = self.transport.get(path, &self.auth_headers).await?;
        decode_success(&response, payload_check)
    }
}

/// Turn a non-200 response into a classified error.
fn check_status(response: &RawResponse) -> Result<(), ClientError> {
    if response.is_ok() {
        return Ok(());
    }

    let envelope: BaseResponse = serde_json::from_slice(&response.body)?;
    let error = ApiError::from_code(&envelope.code);

    tracing::warn!(
        status = response.status,
        code = %error.code,
        kind = %error.kind,
        "VTpass API returned an error"
    );

    Err(error.into())
}

/// Check status, then the payload code, then decode the full envelope.
fn decode_success<R: DeserializeOwned>(
    response: &RawResponse,
    payload_check: PayloadCheck,
) -> Result<R, ClientError> {
    check_status(response)?;

    let base: BaseResponse = serde_json::from_slice(&response.body)?;
    if let Err(e) = payload_check.check(&base.code) {
        tracing::warn!(
            code = %base.code,
            description = ?base.response_description,
            "VTpass rejected the request"
        );
        return Err(e);
    }

    Ok(serde_json::from_slice(&response.body)?)
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use vtpass_core::{ErrorKind, LIVE_BASE_URL, SANDBOX_BASE_URL};

    #[derive(Debug, Clone, PartialEq)]
    struct Recorded {
        method: &'static str,
        path: String,
        body: Option<serde_json::Value>,
        api_key: Option<String>,
        public_key: Option<String>,
        secret_key: Option<String>,
    }

    /// Answers every request with one canned response and records what it saw.
    struct CannedTransport {
        response: RawResponse,
        requests: Mutex<Vec<Recorded>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                response: RawResponse::new(status, body),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn record(
            &self,
            method: &'static str,
            path: &str,
            body: Option<&serde_json::Value>,
            headers: &AuthHeaders,
        ) {
            self.requests.lock().unwrap().push(Recorded {
                method,
                path: path.to_string(),
                body: body.cloned(),
                api_key: headers.get("api-key").map(str::to_string),
                public_key: headers.get("public-key").map(str::to_string),
                secret_key: headers.get("secret-key").map(str::to_string),
            });
        }

        fn requests(&self) -> Vec<Recorded> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn get(&self, path: &str, headers: &AuthHeaders) -> Result<RawResponse, ClientError> {
            self.record("GET", path, None, headers);
            Ok(self.response.clone())
        }

        async fn post(
            &self,
            path: &str,
            body: &serde_json::Value,
            headers: &AuthHeaders,
        ) -> Result<RawResponse, ClientError> {
            self.record("POST", path, Some(body), headers);
            Ok(self.response.clone())
        }
    }

    fn client(status: u16, body: &str) -> VtpassClient<CannedTransport> {
        VtpassClient::with_transport(
            Credentials::new("ak", "PK_test", "SK_test"),
            Environment::Sandbox,
            CannedTransport::new(status, body),
        )
    }

    #[test]
    fn environment_selects_base_url() {
        let sandbox = VtpassClient::new("ak", "pk", "sk", Environment::Sandbox);
        assert_eq!(sandbox.base_url(), SANDBOX_BASE_URL.trim_end_matches('/'));

        let live = VtpassClient::new("ak", "pk", "sk", "live");
        assert_eq!(live.environment(), Environment::Live);
        assert_eq!(live.base_url(), LIVE_BASE_URL.trim_end_matches('/'));
    }

    #[test]
    fn unknown_environment_name_selects_sandbox() {
        let client = VtpassClient::new("ak", "pk", "sk", "production");
        assert_eq!(client.environment(), Environment::Sandbox);
        assert_eq!(client.base_url(), SANDBOX_BASE_URL.trim_end_matches('/'));
    }

    #[test]
    fn options_override_base_url() {
        let client = VtpassClient::with_options(
            Credentials::new("ak", "pk", "sk"),
            Environment::Live,
            ClientOptions::with_base_url("http://localhost:9000/"),
        );
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(client.environment(), Environment::Live);
    }

    #[test]
    fn from_config_uses_configured_environment() {
        let config = ClientConfig::new("ak", "pk", "sk")
            .with_environment("live")
            .with_timeout_seconds(10);
        let client = VtpassClient::from_config(&config);
        assert_eq!(client.environment(), Environment::Live);
        assert_eq!(client.base_url(), LIVE_BASE_URL.trim_end_matches('/'));
        assert_eq!(client.credentials().public_key(), "pk");
    }

    #[test]
    fn query_values_are_encoded() {
        assert_eq!(encode("ikeja-electric"), "ikeja-electric");
        assert_eq!(encode("a b&c"), "a+b%26c");
    }

    #[tokio::test]
    async fn every_call_carries_the_same_credentials() {
        let client = client(200, r#"{"code":1,"contents":{"balance":10.5}}"#);
        client.balance().await.unwrap();
        client.ping().await.unwrap();

        let requests = client.transport.requests();
        assert_eq!(requests.len(), 2);
        for request in requests {
            assert_eq!(request.api_key.as_deref(), Some("ak"));
            assert_eq!(request.public_key.as_deref(), Some("PK_test"));
            assert_eq!(request.secret_key.as_deref(), Some("SK_test"));
        }
    }

    #[tokio::test]
    async fn verify_meter_number_posts_biller_fields() {
        let client = client(
            200,
            r#"{"code":"000","content":{
                "Customer_Name":"TESTMETER1","Meter_Number":1111111111111,"Address":"Lagos"
            }}"#,
        );
        let info = client
            .verify_meter_number("1111111111111", "prepaid", "ikeja-electric")
            .await
            .unwrap();
        assert_eq!(info.customer_name.as_deref(), Some("TESTMETER1"));
        assert_eq!(info.meter_number.unwrap().to_string(), "1111111111111");

        let request = &client.transport.requests()[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "merchant-verify");
        assert_eq!(
            request.body,
            Some(serde_json::json!({
                "billersCode": "1111111111111",
                "serviceID": "ikeja-electric",
                "type": "prepaid",
            }))
        );
    }

    #[tokio::test]
    async fn verify_meter_number_payload_invalid_arguments() {
        let client = client(
            200,
            r#"{"code":"011","response_description":"INVALID ARGUMENTS","content":{}}"#,
        );
        let err = client
            .verify_meter_number("1", "prepaid", "ikeja-electric")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidArguments));
    }

    #[tokio::test]
    async fn verify_meter_number_payload_missing_product() {
        let client = client(200, r#"{"code":"012","content":[]}"#);
        let err = client
            .verify_meter_number("1", "prepaid", "no-such-disco")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::ProductNotFound));
    }

    #[tokio::test]
    async fn product_code_is_only_checked_on_verification() {
        let client = client(
            200,
            r#"{"code":"012","content":{"ServiceName":"X","varations":[]}}"#,
        );
        let variations = client.service_variations("x").await.unwrap();
        assert!(variations.variations.is_empty());
    }

    #[tokio::test]
    async fn service_variations_keeps_order_and_service_name() {
        let client = client(
            200,
            r#"{"code":"000","content":{"ServiceName":"MTN Data","varations":[
                {"variation_code":"mtn-10mb-100","name":"N100 100MB","variation_amount":"100.00"},
                {"variation_code":"mtn-50mb-200","name":"N200 200MB","variation_amount":"200.00"},
                {"variation_code":"mtn-100mb-1000","name":"N1000 1.5GB","variation_amount":1000}
            ]}}"#,
        );
        let result = client.service_variations("mtn-data").await.unwrap();
        assert_eq!(result.service_name, "MTN Data");
        let codes: Vec<_> = result
            .variations
            .iter()
            .map(|v| v.variation_code.as_str())
            .collect();
        assert_eq!(codes, vec!["mtn-10mb-100", "mtn-50mb-200", "mtn-100mb-1000"]);
        assert_eq!(
            client.transport.requests()[0].path,
            "service-variations?serviceID=mtn-data"
        );
    }

    #[tokio::test]
    async fn service_variations_payload_invalid_arguments() {
        let client = client(200, r#"{"code":"011","content":{"errors":"SERVICE NOT VALID"}}"#);
        let err = client.service_variations("nope").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidArguments));
    }

    #[tokio::test]
    async fn service_by_identifier_returns_services() {
        let client = client(
            200,
            r#"{"response_description":"000","content":[
                {"serviceID":"airtel","name":"Airtel Airtime VTU","minimium_amount":"10"}
            ],"code":"000"}"#,
        );
        let services = client.service_by_identifier("airtime").await.unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].service_id, "airtel");
        assert_eq!(services[0].extra["minimium_amount"], "10");
        assert_eq!(client.transport.requests()[0].path, "services?identifier=airtime");
    }

    #[tokio::test]
    async fn service_by_identifier_payload_invalid_arguments() {
        let client = client(
            200,
            r#"{"code":"011","response_description":"INVALID ARGUMENTS","content":[]}"#,
        );
        let err = client.service_by_identifier("nothing").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidArguments));
        assert!(err.as_api().is_none());
    }

    #[tokio::test]
    async fn balance_payload_invalid_arguments() {
        let client = client(200, r#"{"code":"011","contents":{"balance":0}}"#);
        let err = client.balance().await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidArguments));
        assert_eq!(err.kind(), Some(ErrorKind::InvalidArguments));
    }

    #[tokio::test]
    async fn service_categories_payload_invalid_arguments() {
        let client = client(200, r#"{"code":"011","content":[]}"#);
        let err = client.service_categories().await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidArguments));
    }

    #[tokio::test]
    async fn ping_ignores_payload_on_200() {
        let client = client(200, "not even json");
        assert!(client.ping().await.unwrap());
    }

    #[tokio::test]
    async fn ping_classifies_non_200() {
        let client = client(401, r#"{"code":"011"}"#);
        let err = client.ping().await.unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidArguments));
        assert_eq!(err.as_api().unwrap().message, "INVALID ARGUMENTS");
    }

    #[tokio::test]
    async fn balance_returns_classified_error_on_non_200() {
        let client = client(503, r#"{"code":"030"}"#);
        let err = client.balance().await.unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.kind, ErrorKind::BillerNotReachable);
        assert_eq!(api.message, "BILLER NOT REACHABLE AT THIS POINT");
    }

    #[tokio::test]
    async fn unknown_error_code_has_empty_message() {
        let client = client(400, r#"{"code":"099"}"#);
        let err = client.balance().await.unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.kind, ErrorKind::Unknown);
        assert_eq!(api.code, "099");
        assert!(api.message.is_empty());
    }

    #[tokio::test]
    async fn malformed_error_body_is_a_decode_error() {
        let client = client(500, "<html>Bad Gateway</html>");
        let err = client.balance().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_decode_error() {
        let client = client(200, r#"{"code":"000","content":"unexpected"}"#);
        let err = client.service_categories().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn missing_code_is_a_decode_error() {
        let client = client(200, r#"{"contents":{"balance":1.0}}"#);
        let err = client.balance().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}

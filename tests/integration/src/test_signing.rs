//! Signing scenarios with known signatures.

#[cfg(test)]
mod tests {
    use suiteql_auth::{AuthError, AuthErrorKind, OAuthCredentials, SigningRequest, sign};

    use crate::{TEST_ENDPOINT, TEST_NONCE, TEST_TIMESTAMP, test_credentials};

    fn signing_request<'a>(
        method: http::Method,
        url: &str,
        credentials: &'a OAuthCredentials,
    ) -> SigningRequest<'a> {
        SigningRequest::new(method, url, credentials)
            .with_timestamp(TEST_TIMESTAMP)
            .with_nonce(TEST_NONCE)
    }

    #[test]
    fn test_should_sign_bare_suiteql_post() {
        let credentials = test_credentials();
        let signed = signing_request(http::Method::POST, TEST_ENDPOINT, &credentials)
            .sign()
            .unwrap();

        assert_eq!(
            signed.base_string,
            "POST&https%3A%2F%2Fx.example.com%2Fquery%2Fv1%2Fsuiteql&\
             oauth_consumer_key%3DCK%26oauth_nonce%3Dabc123%26\
             oauth_signature_method%3DHMAC-SHA256%26oauth_timestamp%3D1700000000%26\
             oauth_token%3DTK%26oauth_version%3D1.0"
        );
        assert_eq!(
            signed.signature,
            "CNmln8cHRJtVBcgqidU%2FMkoR7vpebxFPWGJsv7VLVzE%3D"
        );
        assert_eq!(
            signed.authorization,
            "OAuth realm=\"1234567\",oauth_consumer_key=\"CK\",oauth_token=\"TK\",\
             oauth_signature_method=\"HMAC-SHA256\",oauth_timestamp=\"1700000000\",\
             oauth_nonce=\"abc123\",oauth_version=\"1.0\",\
             oauth_signature=\"CNmln8cHRJtVBcgqidU%2FMkoR7vpebxFPWGJsv7VLVzE%3D\""
        );
    }

    #[test]
    fn test_should_sign_paged_url_independent_of_query_order() {
        let credentials = test_credentials();
        let forward = signing_request(
            http::Method::POST,
            "https://x.example.com/query/v1/suiteql?offset=0&limit=1000",
            &credentials,
        )
        .sign()
        .unwrap();
        let reversed = signing_request(
            http::Method::POST,
            "https://x.example.com/query/v1/suiteql?limit=1000&offset=0",
            &credentials,
        )
        .sign()
        .unwrap();

        assert_eq!(
            forward.signature,
            "4VSO8COUqW0CXgQdru5C%2FcQV6qqrnyS7A2D2I27A%2Boc%3D"
        );
        assert_eq!(forward.authorization, reversed.authorization);
    }

    #[test]
    fn test_should_sign_extra_parameters() {
        let credentials = test_credentials();
        let signed = signing_request(http::Method::POST, TEST_ENDPOINT, &credentials)
            .with_extra_param("offset", "5")
            .sign()
            .unwrap();
        assert_eq!(
            signed.signature,
            "TWxZy%2F4jLPBBiNPRTiX1aKW7J4AAc64t9r4unHaI37A%3D"
        );
    }

    #[test]
    fn test_should_decode_and_reencode_query_values() {
        let credentials = test_credentials();
        let signed = signing_request(
            http::Method::GET,
            "https://x.example.com/query/v1/suiteql?name=J%C3%B6rg+K&offset=0&offset=9",
            &credentials,
        )
        .sign()
        .unwrap();

        assert_eq!(
            signed.base_string,
            "GET&https%3A%2F%2Fx.example.com%2Fquery%2Fv1%2Fsuiteql&\
             name%3DJ%C3%B6rg%20K%26oauth_consumer_key%3DCK%26oauth_nonce%3Dabc123%26\
             oauth_signature_method%3DHMAC-SHA256%26oauth_timestamp%3D1700000000%26\
             oauth_token%3DTK%26oauth_version%3D1.0%26offset%3D0"
        );
        assert_eq!(
            signed.signature,
            "Bf6bs5SNQirrrwy6a7EK%2Fkb%2FYYBw5Cw2bWUI%2B%2F4pCP0%3D"
        );
    }

    #[test]
    fn test_should_match_known_hmac_vectors() {
        assert_eq!(
            sign("data", "key", "secret").unwrap(),
            "X9GZl7AHP17yDP5vYQst8cGNT1YRHEtlQIf71blyg3U%3D"
        );
        assert_eq!(
            sign("data", "", "").unwrap(),
            "sZxff1RBqWgaAZoseRBquuF5e3C07LNrgkNbUR48lAM%3D"
        );
        assert_eq!(
            sign("GET&https%3A%2F%2Fx.example.com&", "CS", "TS").unwrap(),
            "3KngA9nsUYsut%2BaDr0aLhprJ%2B01b%2F7lvPxmOn81a2Pg%3D"
        );
    }

    #[test]
    fn test_should_change_signature_with_nonce() {
        let credentials = test_credentials();
        let first = signing_request(http::Method::POST, TEST_ENDPOINT, &credentials)
            .sign()
            .unwrap();
        let second = SigningRequest::new(http::Method::POST, TEST_ENDPOINT, &credentials)
            .with_timestamp(TEST_TIMESTAMP)
            .with_nonce("abc124")
            .sign()
            .unwrap();
        assert_ne!(first.signature, second.signature);
    }

    #[test]
    fn test_should_reject_oauth_parameter_in_query() {
        let credentials = test_credentials();
        let result = signing_request(
            http::Method::POST,
            "https://x.example.com/query/v1/suiteql?oauth_nonce=evil",
            &credentials,
        )
        .sign();
        assert!(matches!(
            result,
            Err(AuthError::DuplicateParameter(ref key)) if key == "oauth_nonce"
        ));
    }

    #[test]
    fn test_should_classify_signing_failures() {
        let missing = OAuthCredentials::new("1234567", "CK", "CS", "", "TS");
        let error = signing_request(http::Method::POST, TEST_ENDPOINT, &missing)
            .sign()
            .unwrap_err();
        assert_eq!(error.kind(), AuthErrorKind::Configuration);

        let non_ascii = OAuthCredentials::new("1234567", "CK", "CS", "TK", "sécret");
        let error = signing_request(http::Method::POST, TEST_ENDPOINT, &non_ascii)
            .sign()
            .unwrap_err();
        assert_eq!(error.kind(), AuthErrorKind::Encoding);
        assert!(!error.is_retryable());

        let error = signing_request(http::Method::POST, "not a url", &test_credentials())
            .sign()
            .unwrap_err();
        assert!(matches!(error, AuthError::MalformedUrl(_)));
    }
}

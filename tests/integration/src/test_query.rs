//! SuiteQL request assembly and response labeling flows.

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use suiteql_auth::OAuthCredentials;
    use suiteql_query::columns::column_count;
    use suiteql_query::{SuiteQlRequest, extract_aliases, label_response};

    use crate::{TEST_NONCE, TEST_TIMESTAMP, test_config};

    const CUSTOMER_QUERY: &str = "SELECT c.id AS \"Customer ID\",\r\n  \
                                  c.companyname AS name,\n  \
                                  SUM(t.foreigntotal) AS 'Total Sales'\n\
                                  FROM customer c JOIN transaction t ON t.entity = c.id\n\
                                  GROUP BY c.id, c.companyname";

    fn credentials_from_config() -> OAuthCredentials {
        let config = test_config();
        OAuthCredentials::new(
            config.account_id.as_str(),
            config.consumer_key.as_str(),
            config.consumer_secret.as_str(),
            config.token_id.as_str(),
            config.token_secret.as_str(),
        )
    }

    #[test]
    fn test_should_build_first_page_from_config() {
        let config = test_config();
        let request = SuiteQlRequest::new(CUSTOMER_QUERY)
            .with_limit(config.page_limit)
            .build_with(
                &credentials_from_config(),
                &config.suiteql_url,
                TEST_TIMESTAMP,
                TEST_NONCE,
            )
            .unwrap();

        assert_eq!(
            request.uri(),
            "https://x.example.com/query/v1/suiteql?limit=1000&offset=0"
        );
        let authorization = request
            .headers()
            .get(http::header::AUTHORIZATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(
            authorization
                .ends_with("oauth_signature=\"4VSO8COUqW0CXgQdru5C%2FcQV6qqrnyS7A2D2I27A%2Boc%3D\"")
        );

        let body: Value = serde_json::from_str(request.body()).unwrap();
        assert_eq!(body["q"], CUSTOMER_QUERY);
    }

    #[test]
    fn test_should_sign_each_page_differently() {
        let config = test_config();
        let credentials = credentials_from_config();
        let first = SuiteQlRequest::new(CUSTOMER_QUERY);
        let second = first.next_page();

        let build = |page: &SuiteQlRequest| {
            page.build_with(&credentials, &config.suiteql_url, TEST_TIMESTAMP, TEST_NONCE)
                .unwrap()
        };
        let first = build(&first);
        let second = build(&second);

        assert_eq!(
            second.uri(),
            "https://x.example.com/query/v1/suiteql?limit=1000&offset=1000"
        );
        assert_ne!(
            first.headers().get(http::header::AUTHORIZATION),
            second.headers().get(http::header::AUTHORIZATION)
        );
    }

    #[test]
    fn test_should_extract_aliases_across_line_breaks() {
        assert_eq!(
            extract_aliases(CUSTOMER_QUERY),
            vec!["Customer ID", "name", "Total Sales"]
        );
    }

    #[test]
    fn test_should_label_suiteql_response() {
        let body = json!({
            "links": [],
            "count": 1,
            "hasMore": false,
            "offset": 0,
            "totalResults": 1,
            "items": [{
                "links": [],
                "customer id": "42",
                "name": "Acme",
                "total sales": "1250.00"
            }]
        })
        .to_string();

        let labeled = label_response(&body, CUSTOMER_QUERY);
        assert_eq!(
            labeled["columns"],
            json!(["Customer ID", "name", "Total Sales"])
        );
        assert_eq!(column_count(&labeled), Some(3));
        assert_eq!(labeled["items"][0]["name"], "Acme");
        assert_eq!(labeled["hasMore"], false);
    }

    #[test]
    fn test_should_label_error_page() {
        let labeled = label_response("<html>503</html>", "SELECT id AS ident FROM customer");
        assert_eq!(labeled["error"], "Invalid JSON response");
        assert_eq!(labeled["raw"], "<html>503</html>");
        assert_eq!(labeled["columns"], json!(["ident"]));
    }
}

#[cfg(test)]
mod tests {
    use crate::classifier::{is_valid_input_url, KeywordVocabulary, PageClassifier};
    use crate::config::Config;
    use crate::errors::FetchError;
    use axum::{response::Html, routing::get, Router};
    use tokio::net::TcpListener;

    fn test_classifier() -> PageClassifier {
        let config = Config::default();
        let mut crawler = config.crawler.clone();
        crawler.timeout_seconds = 5;
        PageClassifier::new(&crawler, KeywordVocabulary::from_config(&config.keywords))
    }

    async fn start_test_server(body: &'static str) -> String {
        let app = Router::new()
            .route("/", get(move || async move { Html(body) }))
            .route(
                "/error",
                get(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn zero_anchors_yields_empty_result() {
        let classifier = test_classifier();
        let result = classifier.classify_document("<html><body><p>hi</p></body></html>", "https://acme.test/");
        assert_eq!(result.features, None);
        assert_eq!(result.pricing, None);
    }

    #[test]
    fn finds_features_and_pricing_links() {
        let classifier = test_classifier();
        let html = r#"<html><body>
            <a href="/blog">Blog</a>
            <a href="/product-overview">Product</a>
            <a href="/pricing-plans">Plans</a>
        </body></html>"#;

        let result = classifier.classify_document(html, "https://acme.test/");
        assert_eq!(
            result.features.as_deref(),
            Some("https://acme.test/product-overview")
        );
        assert_eq!(
            result.pricing.as_deref(),
            Some("https://acme.test/pricing-plans")
        );
    }

    #[test]
    fn one_link_can_fill_both_categories() {
        let classifier = test_classifier();
        let html = r#"<a href="/features-pricing">All about us</a>"#;

        let result = classifier.classify_document(html, "https://acme.test/");
        assert_eq!(
            result.features.as_deref(),
            Some("https://acme.test/features-pricing")
        );
        assert_eq!(
            result.pricing.as_deref(),
            Some("https://acme.test/features-pricing")
        );
    }

    #[test]
    fn first_match_wins_and_overview_never_overrides() {
        let classifier = test_classifier();
        let html = r#"
            <a href="/features-main">Features</a>
            <a href="/product-overview">Overview</a>
        "#;

        let result = classifier.classify_document(html, "https://acme.test/");
        assert_eq!(
            result.features.as_deref(),
            Some("https://acme.test/features-main")
        );
    }

    #[test]
    fn overview_assigns_while_features_unassigned() {
        let classifier = test_classifier();
        let html = r#"<a href="/product-overview">Overview</a>"#;

        let result = classifier.classify_document(html, "https://acme.test/");
        assert_eq!(
            result.features.as_deref(),
            Some("https://acme.test/product-overview")
        );
        assert_eq!(result.pricing, None);
    }

    #[test]
    fn excluded_domain_links_are_never_classified() {
        let classifier = test_classifier();
        let html = r#"<a href="https://example.com/features">Features</a>"#;

        let result = classifier.classify_document(html, "https://acme.test/");
        assert_eq!(result.features, None);
        assert_eq!(result.pricing, None);
    }

    #[test]
    fn exclusion_applies_to_the_resolved_url() {
        // The raw href carries a matching term, but it resolves under
        // the excluded domain.
        let classifier = test_classifier();
        let html = r#"<a href="/features">Features</a>"#;

        let result = classifier.classify_document(html, "https://example.com/");
        assert_eq!(result.features, None);
    }

    #[test]
    fn terms_match_the_raw_href_not_the_resolved_url() {
        let classifier = test_classifier();
        // Base URL contains "pricing"; the href itself does not.
        let html = r#"<a href="/about">About</a>"#;

        let result = classifier.classify_document(html, "https://pricing.test/");
        assert_eq!(result.pricing, None);
    }

    #[test]
    fn matching_is_case_insensitive_on_the_href() {
        let classifier = test_classifier();
        let html = r#"<a href="/PRICING-Plans">Plans</a>"#;

        let result = classifier.classify_document(html, "https://acme.test/");
        assert_eq!(
            result.pricing.as_deref(),
            Some("https://acme.test/PRICING-Plans")
        );
    }

    #[test]
    fn later_links_never_replace_assignments() {
        let classifier = test_classifier();
        let html = r#"
            <a href="/features">First features</a>
            <a href="/pricing">First pricing</a>
            <a href="/better-features">Later features</a>
            <a href="/better-pricing">Later pricing</a>
        "#;

        let result = classifier.classify_document(html, "https://acme.test/");
        assert_eq!(result.features.as_deref(), Some("https://acme.test/features"));
        assert_eq!(result.pricing.as_deref(), Some("https://acme.test/pricing"));
    }

    #[test]
    fn empty_hrefs_are_skipped() {
        let classifier = test_classifier();
        let html = r#"<a href="">Features</a>"#;

        let result = classifier.classify_document(html, "https://acme.test/");
        assert_eq!(result.features, None);
    }

    #[test]
    fn unresolvable_hrefs_are_skipped_silently() {
        let classifier = test_classifier();
        let html = r#"<a href="http://[invalid/pricing">Plans</a>"#;

        let result = classifier.classify_document(html, "https://acme.test/");
        assert_eq!(result.pricing, None);
    }

    #[test]
    fn validates_input_url_prefix() {
        assert!(is_valid_input_url("http://acme.test"));
        assert!(is_valid_input_url("https://acme.test/pricing"));
        assert!(!is_valid_input_url("ftp://acme.test"));
        assert!(!is_valid_input_url("acme.test"));
        assert!(!is_valid_input_url(""));
    }

    #[tokio::test]
    async fn classify_fetches_and_scans_the_page() {
        let server_url = start_test_server(
            r#"<html><body>
                <a href="/product-overview">Product</a>
                <a href="/pricing-plans">Plans</a>
            </body></html>"#,
        )
        .await;

        let classifier = test_classifier();
        let result = classifier.classify(&server_url).await.unwrap();

        assert_eq!(
            result.features.as_deref(),
            Some(format!("{}/product-overview", server_url).as_str())
        );
        assert_eq!(
            result.pricing.as_deref(),
            Some(format!("{}/pricing-plans", server_url).as_str())
        );
    }

    #[tokio::test]
    async fn non_success_status_is_a_fetch_error() {
        let server_url = start_test_server("<html></html>").await;

        let classifier = test_classifier();
        let result = classifier.classify(&format!("{}/error", server_url)).await;

        assert!(matches!(result, Err(FetchError::Status(status)) if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_fetch_error() {
        // Bind to learn a free port, then drop the listener.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let classifier = test_classifier();
        let result = classifier.classify(&format!("http://{}", addr)).await;

        assert!(matches!(result, Err(FetchError::Request(_))));
    }
}

//! Directory client 集成测试（本地桩服务器）
//!
//! 运行方式:
//! ```bash
//! cargo test -p bishwakosh-catalog --test directory_test
//! # 真实 REST Countries:
//! cargo test -p bishwakosh-catalog --test directory_test -- --ignored --nocapture
//! ```

mod common;

use bishwakosh_catalog::{CatalogConfig, CatalogError, GLOBE_GLYPH, create_directory};
use common::{local_config, serve_once, serve_silence};

const THREE_COUNTRIES: &str = r#"[
    {"name": {"common": "Bangladesh", "official": "People's Republic of Bangladesh"},
     "flags": {"png": "https://flagcdn.com/w320/bd.png", "svg": "https://flagcdn.com/bd.svg"},
     "cca2": "BD",
     "maps": {"googleMaps": "https://goo.gl/maps/op6gmLbHcvv6rLhH6"}},
    {"name": {"common": "Åland Islands"},
     "flags": {"svg": ""},
     "cca2": "AX",
     "maps": {}},
    {"name": {"common": "Brazil"},
     "flags": {"svg": "https://flagcdn.com/br.svg"},
     "cca2": "br",
     "maps": {"googleMaps": "https://goo.gl/maps/waCKk21HeeqFzkNC9"}}
]"#;

#[tokio::test]
async fn test_list_countries_sorted_and_normalized() {
    let (base, request) = serve_once(200, THREE_COUNTRIES).await;
    let directory = create_directory(&local_config(&base)).unwrap();

    let countries = require_ok!(directory.list_countries().await);
    let names: Vec<&str> = countries.iter().map(|c| c.display_name.as_str()).collect();
    assert_eq!(names, vec!["Åland Islands", "Bangladesh", "Brazil"]);

    let aland = &countries[0];
    assert_eq!(aland.flag_image_url, GLOBE_GLYPH);
    assert_eq!(aland.external_map_url, None);
    assert_eq!(countries[2].two_letter_code, "BR");

    let request = request.await.unwrap();
    assert!(
        request
            .request_line
            .starts_with("GET /v3.1/all?fields=name,flags,cca2,maps "),
        "unexpected request line: {}",
        request.request_line
    );
}

#[tokio::test]
async fn test_list_countries_empty_array() {
    let (base, _request) = serve_once(200, "[]").await;
    let directory = create_directory(&local_config(&base)).unwrap();

    let countries = require_ok!(directory.list_countries().await);
    assert!(countries.is_empty());
}

#[tokio::test]
async fn test_list_countries_http_error() {
    let (base, _request) = serve_once(404, r#"{"status": 404, "message": "Not Found"}"#).await;
    let directory = create_directory(&local_config(&base)).unwrap();

    let err = require_err!(directory.list_countries().await);
    assert!(
        matches!(
            &err,
            CatalogError::HttpStatus { status: 404, raw_message: Some(m), .. } if m == "Not Found"
        ),
        "unexpected error: {err:?}"
    );
    assert_eq!(err.service(), "restcountries");
}

#[tokio::test]
async fn test_list_countries_malformed_body() {
    let (base, _request) = serve_once(200, "<html>maintenance</html>").await;
    let directory = create_directory(&local_config(&base)).unwrap();

    let err = require_err!(directory.list_countries().await);
    assert!(matches!(err, CatalogError::ParseError { .. }), "{err:?}");
}

#[tokio::test]
async fn test_list_countries_record_without_code() {
    let body = r#"[{"name": {"common": "Nowhere"}, "flags": {"svg": "x.svg"}}]"#;
    let (base, _request) = serve_once(200, body).await;
    let directory = create_directory(&local_config(&base)).unwrap();

    let err = require_err!(directory.list_countries().await);
    assert!(matches!(err, CatalogError::ParseError { .. }), "{err:?}");
}

#[tokio::test]
async fn test_list_countries_timeout() {
    let base = serve_silence().await;
    let directory = create_directory(&local_config(&base)).unwrap();

    let err = require_err!(directory.list_countries().await);
    assert!(matches!(err, CatalogError::Timeout { .. }), "{err:?}");
    assert!(!err.is_expected());
}

#[tokio::test]
async fn test_list_countries_connection_refused() {
    // 绑定后立即释放端口，连接会被拒绝
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let directory = create_directory(&local_config(&format!("http://{addr}"))).unwrap();

    let err = require_err!(directory.list_countries().await);
    assert!(matches!(err, CatalogError::NetworkError { .. }), "{err:?}");
}

// ============ 真实服务 ============

#[tokio::test]
#[ignore]
async fn test_live_restcountries() {
    let directory = create_directory(&CatalogConfig::default()).unwrap();

    let countries = require_ok!(directory.list_countries().await);
    assert!(countries.len() > 200, "国家列表过短: {}", countries.len());
    assert!(countries.iter().any(|c| c.two_letter_code == "BD"));

    println!("✓ list_countries 测试通过，共 {} 个国家", countries.len());
}

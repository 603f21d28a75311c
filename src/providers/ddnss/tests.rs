use super::*;
use assert_matches::assert_matches;
use httpmock::prelude::*;
use std::time::Duration;

const ZONE: &str = "myhost.ddnss.de";
const UPDATED: &str = "<html><body><font color='#008000'>Updated 1 hostname.</font></body></html>";

fn provider(server: &MockServer) -> DdnssProvider {
    let config = DdnssConfig {
        api_token: "token".into(),
        username: "user".into(),
        password: "pass".into(),
        api_url: server.base_url(),
    };
    DdnssProvider::new(config, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_update_host_strips_acme_label() {
    assert_eq!(
        DdnssProvider::update_host("_acme-challenge", ZONE),
        "myhost.ddnss.de"
    );
    assert_eq!(DdnssProvider::update_host("@", "MyHost.ddnss.de."), "myhost.ddnss.de");
    assert_eq!(DdnssProvider::update_host("sub", ZONE), "sub.myhost.ddnss.de");
}

#[tokio::test]
async fn test_create_txt_record() {
    let server = MockServer::start_async().await;
    let update_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/upd.php")
                .query_param("key", "token")
                .query_param("host", "myhost.ddnss.de")
                .query_param("verbose", "true")
                .query_param("txtm", "1")
                .query_param("txt", "challenge-token");
            then.status(200).body(UPDATED);
        })
        .await;

    let record = Record::new("_acme-challenge", RecordType::TXT, "challenge-token");
    let created = provider(&server).create_record(ZONE, &record).await.unwrap();
    update_mock.assert_async().await;
    assert_eq!(created, record);
}

#[tokio::test]
async fn test_create_aaaa_record() {
    let server = MockServer::start_async().await;
    let update_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/upd.php")
                .query_param("host", "myhost.ddnss.de")
                .query_param("ipv6", "2001:db8::1");
            then.status(200).body(UPDATED);
        })
        .await;

    provider(&server)
        .create_record(ZONE, &Record::new("@", RecordType::AAAA, "2001:db8::1"))
        .await
        .unwrap();
    update_mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_txt_clears_value() {
    let server = MockServer::start_async().await;
    let clear_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/upd.php")
                .query_param("host", "myhost.ddnss.de")
                .query_param("txtm", "2");
            then.status(200).body(UPDATED);
        })
        .await;

    provider(&server)
        .delete_record(ZONE, &Record::new("_acme-challenge", RecordType::TXT, "x"))
        .await
        .unwrap();
    clear_mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_address_makes_no_request() {
    let server = MockServer::start_async().await;
    let any_mock = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(500);
        })
        .await;

    provider(&server)
        .delete_record(ZONE, &Record::new("@", RecordType::A, "1.2.3.4"))
        .await
        .unwrap();
    any_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_unconfirmed_update_is_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/upd.php");
            then.status(200)
                .body("<html><font color='red'>badauth</font></html>");
        })
        .await;

    let result = provider(&server)
        .create_record(ZONE, &Record::new("@", RecordType::A, "1.2.3.4"))
        .await;
    assert_matches!(result, Err(Error::ProviderError(msg)) if msg.contains("badauth"));
}

#[tokio::test]
async fn test_unsupported_type() {
    let server = MockServer::start_async().await;
    let result = provider(&server)
        .create_record(ZONE, &Record::new("@", RecordType::CNAME, "other.example.com"))
        .await;
    assert_matches!(result, Err(Error::UnsupportedType(t)) if t == "CNAME");
}

#[tokio::test]
async fn test_list_logs_in_and_scrapes_hosts() {
    let server = MockServer::start_async().await;
    let login_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/do.php")
                .body_contains("login")
                .body_contains("user");
            then.status(302)
                .header("Location", "/ua/index.php")
                .header("Set-Cookie", "PHPSESSID=abc; Path=/");
        })
        .await;
    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/ua/vhosts_list.php");
            then.status(200).body(
                "<table>\
                 <tr><td><u>myhost.ddnss.de</u></td><td>1.2.3.4</td><td>2001:db8::1</td></tr>\
                 <tr><td><u>www.myhost.ddnss.de</u></td><td>5.6.7.8</td></tr>\
                 <tr><td><u>unrelated.ddnss.de</u></td><td>9.9.9.9</td></tr>\
                 </table>",
            );
        })
        .await;

    let records = provider(&server).list_records(ZONE).await.unwrap();
    login_mock.assert_async().await;
    list_mock.assert_async().await;
    assert_eq!(
        records,
        vec![
            Record::new("@", RecordType::A, "1.2.3.4"),
            Record::new("@", RecordType::AAAA, "2001:db8::1"),
            Record::new("www", RecordType::A, "5.6.7.8"),
        ]
    );
}

#[tokio::test]
async fn test_list_without_login_is_credential_error() {
    let server = MockServer::start_async().await;
    let config = DdnssConfig {
        api_url: server.base_url(),
        ..DdnssConfig::new("token")
    };
    let provider = DdnssProvider::new(config, Duration::from_secs(5)).unwrap();
    assert_matches!(provider.list_records(ZONE).await, Err(Error::CredentialError(_)));
}

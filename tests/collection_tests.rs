use discogs::{
    Credentials, Discogs, DiscogsError, ErrorKind, FolderArgs, OAuthClient, OAuthSigner, Options,
    Pagination, SignatureMethod,
};
use serde_json::json;
use wiremock::matchers::{header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn signer() -> OAuthSigner {
    OAuthSigner::new(
        OAuthClient::new("consumer-key", "consumer-secret"),
        Credentials::new("access-token", "access-secret"),
    )
}

fn client(server: &MockServer) -> Discogs {
    Discogs::new(&Options::new("DiscogsTest/1.0").with_url(server.uri())).unwrap()
}

fn authorization(request: &wiremock::Request) -> String {
    request
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_folders_without_oauth_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"folders": []})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server)
        .collection()
        .folders("alice")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert!(matches!(err.root(), DiscogsError::MissingCredentials));
    assert!(err.full_message().starts_with("failed to fetch folders: "));
}

#[tokio::test]
async fn test_identity_without_oauth_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).user().identity().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert!(err.full_message().starts_with("failed to fetch identity: "));
}

#[tokio::test]
async fn test_folders_are_signed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice/collection/folders"))
        .and(header_regex("authorization", "^OAuth "))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "folders": [
                {"id": 0, "name": "All", "count": 23},
                {"id": 1, "name": "Uncategorized", "count": 20}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let folders = client(&server)
        .with_oauth(signer())
        .collection()
        .folders("alice")
        .await
        .unwrap();

    assert_eq!(folders.folders.len(), 2);
    assert_eq!(folders.by_name("Uncategorized").map(|f| f.count), Some(20));

    let requests = server.received_requests().await.unwrap();
    let authorization = authorization(&requests[0]);
    for field in [
        "oauth_consumer_key=\"consumer-key\"",
        "oauth_token=\"access-token\"",
        "oauth_signature_method=\"HMAC-SHA1\"",
        "oauth_version=\"1.0\"",
        "oauth_nonce=\"",
        "oauth_timestamp=\"",
        "oauth_signature=\"",
    ] {
        assert!(authorization.contains(field), "{} missing {}", authorization, field);
    }
}

#[tokio::test]
async fn test_oauth_replaces_token_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/oauth/identity"))
        .and(header("user-agent", "DiscogsTest/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "username": "alice",
            "resource_url": "https://api.discogs.com/users/alice",
            "consumer_name": "DiscogsTest"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Discogs::new(
        &Options::new("DiscogsTest/1.0")
            .with_url(server.uri())
            .with_token("personal-token"),
    )
    .unwrap()
    .with_oauth(signer());
    let identity = client.user().identity().await.unwrap();

    assert_eq!(identity.username, "alice");
    assert_eq!(identity.consumer_name, "DiscogsTest");

    let requests = server.received_requests().await.unwrap();
    let values: Vec<_> = requests[0].headers.get_all("authorization").iter().collect();
    assert_eq!(values.len(), 1);
    assert!(authorization(&requests[0]).starts_with("OAuth "));
}

#[tokio::test]
async fn test_plaintext_signature() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/bob/collection/folders/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "name": "Techno",
            "count": 7,
            "resource_url": "https://api.discogs.com/users/bob/collection/folders/3"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let signer = OAuthSigner::new(
        OAuthClient::new("ck", "cs").with_signature_method(SignatureMethod::Plaintext),
        Credentials::new("tk", "ts"),
    );
    let folder = client(&server)
        .with_oauth(signer)
        .collection()
        .folder(&FolderArgs::new("bob", 3))
        .await
        .unwrap();

    assert_eq!(folder.id, 3);
    assert_eq!(folder.name, "Techno");
    assert_eq!(folder.count, 7);

    let requests = server.received_requests().await.unwrap();
    let authorization = authorization(&requests[0]);
    assert!(authorization.contains("oauth_signature_method=\"PLAINTEXT\""));
    assert!(authorization.contains("oauth_signature=\"cs&ts\""));
}

#[tokio::test]
async fn test_folder_releases_with_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice/collection/folders/0/releases"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "2"))
        .and(header_regex("authorization", "^OAuth "))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": {
                "page": 1, "pages": 2, "per_page": 2, "items": 3,
                "urls": {"next": "https://api.discogs.com/users/alice/collection/folders/0/releases?page=2&per_page=2"}
            },
            "releases": [
                {
                    "id": 2464521,
                    "instance_id": 1,
                    "folder_id": 1,
                    "rating": 4,
                    "basic_information": {
                        "id": 2464521,
                        "title": "Information Overload Unit",
                        "year": 1981,
                        "artists": [{"name": "SPK"}]
                    }
                },
                {"id": 1, "instance_id": 2, "folder_id": 1, "rating": 0}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .with_oauth(signer())
        .collection()
        .folder_releases(&FolderArgs::new("alice", 0), Some(&Pagination::new(1, 2)))
        .await
        .unwrap();

    assert!(page.pagination.has_next());
    assert_eq!(page.releases.len(), 2);
    assert_eq!(page.releases[0].rating, 4);
    assert_eq!(
        page.releases[0].basic_information.title,
        "Information Overload Unit"
    );
    assert_eq!(page.releases[0].basic_information.artists_string(), "SPK");
}

#[tokio::test]
async fn test_username_is_escaped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/dj%20x/collection/folders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"folders": []})))
        .expect(1)
        .mount(&server)
        .await;

    let folders = client(&server)
        .with_oauth(signer())
        .collection()
        .folders("dj x")
        .await
        .unwrap();
    assert!(folders.folders.is_empty());
}

#[tokio::test]
async fn test_signed_request_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice/collection/folders/9"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "You must authenticate to access this resource."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .with_oauth(signer())
        .collection()
        .folder(&FolderArgs::new("alice", 9))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert!(matches!(err.root(), DiscogsError::Unauthorized));
    assert_eq!(err.full_message(), "failed to fetch folder: unauthorized");
}

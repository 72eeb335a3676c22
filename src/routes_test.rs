use super::*;

// =============================================================================
// Helpers
// =============================================================================

struct Site {
    base: String,
    _public: tempfile::TempDir,
    _pkg: tempfile::TempDir,
}

async fn serve_site() -> Site {
    let public = tempfile::tempdir().unwrap();
    std::fs::write(public.path().join("sw.js"), "self.addEventListener('install', () => {});").unwrap();
    std::fs::create_dir(public.path().join("images")).unwrap();
    std::fs::write(public.path().join("images/project-1.webp"), b"RIFF").unwrap();

    let pkg = tempfile::tempdir().unwrap();
    std::fs::write(pkg.path().join("portfolio.css"), "body{}").unwrap();

    let config = HostConfig {
        bind_addr: "127.0.0.1".parse().unwrap(),
        port: 0,
        public_dir: public.path().to_path_buf(),
    };
    let router = static_routes(&config, pkg.path());

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Site { base: format!("http://{addr}"), _public: public, _pkg: pkg }
}

// =============================================================================
// static_routes
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let site = serve_site().await;
    let resp = reqwest::get(format!("{}/healthz", site.base)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn service_worker_script_is_served_from_public_dir() {
    let site = serve_site().await;
    let resp = reqwest::get(format!("{}/sw.js", site.base)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("install"));
}

#[tokio::test]
async fn nested_public_assets_are_served() {
    let site = serve_site().await;
    let resp = reqwest::get(format!("{}/images/project-1.webp", site.base)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.bytes().await.unwrap().as_ref(), b"RIFF");
}

#[tokio::test]
async fn pkg_assets_are_served_from_pkg_dir() {
    let site = serve_site().await;
    let resp = reqwest::get(format!("{}/pkg/portfolio.css", site.base)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "body{}");
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let site = serve_site().await;
    let resp = reqwest::get(format!("{}/images/missing.webp", site.base)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

// =============================================================================
// Shipped assets
// =============================================================================

#[tokio::test]
async fn every_project_image_is_served_from_default_public_dir() {
    let config = HostConfig::from_lookup(|key| (key == "BIND_ADDR").then(|| "127.0.0.1".to_owned())).unwrap();
    let config = HostConfig { port: 0, ..config };
    let pkg = tempfile::tempdir().unwrap();
    let router = static_routes(&config, pkg.path());

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    for project in portfolio_client::content::PROJECTS {
        let resp = reqwest::get(format!("http://{addr}{}", project.image)).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "{} should ship", project.image);
    }
    let resp = reqwest::get(format!("http://{addr}/sw.js")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

use crate::e2e::helpers;

use helpers::assertions::{assert_video_response, video_ids};
use helpers::fixtures::{mount_playlist_page, mount_playlist_title, playlist_page, VideoFixture};
use helpers::{TestContext, PLAYLIST_ID};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

fn videos_path(hours_back: i64) -> String {
    format!("/api/playlists/{}/videos?hoursBack={}", PLAYLIST_ID, hours_back)
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_videos_inside_the_window(ctx: &TestContext) {
    let page = playlist_page(
        &[
            VideoFixture::new("fresh1", 1),
            VideoFixture::new("fresh2", 10),
            VideoFixture::new("stale1", 30),
        ],
        None,
    );
    mount_playlist_page(&ctx.upstream, PLAYLIST_ID, None, page, 1).await;

    let response = ctx.client.get(&videos_path(24)).await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(video_ids(body), vec!["fresh1", "fresh2"]);
    assert_video_response(&body[0], "fresh1");
    assert_eq!(
        body[0].get("channel_title").and_then(|v| v.as_str()),
        Some("Rust Weekly")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_stop_paging_once_a_page_ends_before_the_window(ctx: &TestContext) {
    let first = playlist_page(
        &[VideoFixture::new("fresh1", 2), VideoFixture::new("stale1", 48)],
        Some("PAGE2"),
    );
    mount_playlist_page(&ctx.upstream, PLAYLIST_ID, None, first, 1).await;
    mount_playlist_page(
        &ctx.upstream,
        PLAYLIST_ID,
        Some("PAGE2"),
        playlist_page(&[VideoFixture::new("fresh9", 1)], None),
        0,
    )
    .await;

    let response = ctx.client.get(&videos_path(24)).await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(video_ids(response.body.as_ref().unwrap()), vec!["fresh1"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_follow_pages_while_the_window_continues(ctx: &TestContext) {
    let first = playlist_page(
        &[VideoFixture::new("vid1", 1), VideoFixture::new("vid2", 5)],
        Some("PAGE2"),
    );
    let second = playlist_page(
        &[VideoFixture::new("vid3", 8), VideoFixture::new("vid4", 30)],
        Some("PAGE3"),
    );
    mount_playlist_page(&ctx.upstream, PLAYLIST_ID, None, first, 1).await;
    mount_playlist_page(&ctx.upstream, PLAYLIST_ID, Some("PAGE2"), second, 1).await;
    mount_playlist_page(
        &ctx.upstream,
        PLAYLIST_ID,
        Some("PAGE3"),
        playlist_page(&[], None),
        0,
    )
    .await;

    let response = ctx.client.get(&videos_path(12)).await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        video_ids(response.body.as_ref().unwrap()),
        vec!["vid1", "vid2", "vid3"]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_the_configured_window_by_default(ctx: &TestContext) {
    let page = playlist_page(
        &[VideoFixture::new("week1", 100), VideoFixture::new("old1", 200)],
        None,
    );
    mount_playlist_page(&ctx.upstream, PLAYLIST_ID, None, page, 1).await;

    let response = ctx
        .client
        .get(&format!("/api/playlists/{}/videos", PLAYLIST_ID))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(video_ids(response.body.as_ref().unwrap()), vec!["week1"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_empty_list_for_empty_playlist(ctx: &TestContext) {
    mount_playlist_page(&ctx.upstream, PLAYLIST_ID, None, json!({}), 1).await;

    let response = ctx.client.get(&videos_path(24)).await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body, Some(json!([])));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_window_out_of_range(ctx: &TestContext) {
    for hours_back in [0, -5, 8761] {
        let response = ctx.client.get(&videos_path(hours_back)).await.unwrap();
        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_message("hoursBack must be between 1 and 8760");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_playlist_id(ctx: &TestContext) {
    let response = ctx.client.get("/api/playlists/x/videos").await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("not a valid playlist id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_map_upstream_errors_to_bad_gateway(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path("/youtube/v3/playlistItems"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 404, "message": "The playlist identified with the request's playlistId parameter cannot be found." }
        })))
        .expect(1)
        .mount(&ctx.upstream)
        .await;

    let response = ctx.client.get(&videos_path(24)).await.unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("404");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_give_up_after_max_retries(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path("/youtube/v3/playlistItems"))
        .respond_with(ResponseTemplate::new(503).insert_header("Retry-After", "0"))
        .expect(3)
        .mount(&ctx.upstream)
        .await;

    let response = ctx.client.get(&videos_path(24)).await.unwrap();

    response
        .assert_status(StatusCode::SERVICE_UNAVAILABLE)
        .assert_error_message("max retries exceeded");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_recover_from_rate_limiting(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path("/youtube/v3/playlistItems"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&ctx.upstream)
        .await;
    let page = playlist_page(&[VideoFixture::new("fresh1", 1)], None);
    mount_playlist_page(&ctx.upstream, PLAYLIST_ID, None, page, 1).await;

    let response = ctx.client.get(&videos_path(24)).await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(video_ids(response.body.as_ref().unwrap()), vec!["fresh1"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_playlist_title(ctx: &TestContext) {
    mount_playlist_title(&ctx.upstream, PLAYLIST_ID, "Watch Later, Rust edition").await;

    let response = ctx
        .client
        .get(&format!("/api/playlists/{}", PLAYLIST_ID))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body,
        Some(json!({ "id": PLAYLIST_ID, "title": "Watch Later, Rust edition" }))
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_to_unknown_playlist_title(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path("/youtube/v3/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&ctx.upstream)
        .await;

    let response = ctx
        .client
        .get(&format!("/api/playlists/{}", PLAYLIST_ID))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("title").and_then(|v| v.as_str()), Some("unknown_playlist"));
}

//! YouTube id detection on URL links

use aml_render::colorblocks::{create_url_link, youtube_video_id};
use rstest::rstest;

#[rstest]
#[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
#[case("https://youtube.com/watch?v=dQw4w9WgXcQ&t=42", Some("dQw4w9WgXcQ"))]
#[case("https://m.youtube.com/watch?v=a_b-C1d2E3f", Some("a_b-C1d2E3f"))]
#[case("https://youtu.be/dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
#[case("https://youtu.be/dQw4w9WgXcQ?si=abc", Some("dQw4w9WgXcQ"))]
#[case("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ", Some("dQw4w9WgXcQ"))]
// Too short, too long
#[case("https://youtu.be/dQw4w9WgXc", None)]
#[case("https://www.youtube.com/watch?v=dQw4w9WgXcQQ", None)]
// Percent-encoded query separators are not decoded
#[case("https://www.youtube.com/watch%3Fv%3DdQw4w9WgXcQ", None)]
#[case("https://www.youtube.com/watch?feature=share%26v%3DdQw4w9WgXcQ", None)]
#[case("https://example.com/watch?v=dQw4w9WgXcQ", None)]
fn test_video_id(#[case] url: &str, #[case] expected: Option<&str>) {
    assert_eq!(youtube_video_id(url).as_deref(), expected);
}

#[test]
fn test_placeholder_follows_link() {
    let html = create_url_link("https://youtu.be/dQw4w9WgXcQ");
    assert_eq!(
        html,
        "<a href=\"https://youtu.be/dQw4w9WgXcQ\" target=\"_blank\" rel=\"noopener noreferrer\">https://youtu.be/dQw4w9WgXcQ</a><span class=\"youtube-embed-placeholder\" data-video-id=\"dQw4w9WgXcQ\"></span>"
    );
}

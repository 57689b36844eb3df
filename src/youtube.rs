use eyre::Result;
use log::debug;
use serde::Deserialize;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Maximum comment threads per commentThreads request, per the API
pub const PAGE_SIZE: usize = 100;

/// One page of comment texts plus the continuation cursor for the next one
#[derive(Debug, Clone)]
pub struct CommentPage {
    pub comments: Vec<String>,
    pub next_page_token: Option<String>,
    pub total_hint: Option<u64>,
}

/// A paginated supplier of comment pages. Implemented by the real API client
/// and by scripted stubs in tests.
pub trait CommentSource {
    async fn fetch_page(&self, video_id: &str, page_token: Option<&str>) -> Result<CommentPage>;
}

/// A trending video eligible for the demo list
#[derive(Debug, Clone, serde::Serialize)]
pub struct TrendingVideo {
    pub video_id: String,
    pub title: String,
    pub thumbnail: String,
}

#[derive(Debug, Deserialize)]
struct CommentThreadsResponse {
    items: Option<Vec<CommentThread>>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
    #[serde(rename = "pageInfo")]
    page_info: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(rename = "totalResults")]
    total_results: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: Option<ThreadSnippet>,
}

#[derive(Debug, Deserialize)]
struct ThreadSnippet {
    #[serde(rename = "topLevelComment")]
    top_level_comment: Option<TopLevelComment>,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: Option<CommentSnippet>,
}

#[derive(Debug, Deserialize)]
struct CommentSnippet {
    #[serde(rename = "textOriginal")]
    text_original: Option<String>,
    #[serde(rename = "textDisplay")]
    text_display: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    items: Option<Vec<VideoItem>>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    snippet: Option<VideoSnippet>,
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    title: String,
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl CommentSnippet {
    /// Prefer the raw comment text; fall back to the HTML-escaped display text
    fn text(&self) -> Option<String> {
        if let Some(t) = &self.text_original {
            return Some(t.clone());
        }
        self.text_display
            .as_ref()
            .map(|t| html_escape::decode_html_entities(t).to_string())
    }
}

/// YouTube Data API v3 client
pub struct YouTubeApi {
    client: reqwest::Client,
    api_key: String,
}

impl YouTubeApi {
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self { client, api_key }
    }

    async fn comment_threads(
        &self,
        video_id: &str,
        part: &str,
        max_results: usize,
        page_token: Option<&str>,
    ) -> Result<CommentThreadsResponse> {
        let mut url = format!(
            "{API_BASE}/commentThreads?key={}&part={part}&videoId={video_id}&maxResults={max_results}",
            self.api_key
        );
        if let Some(token) = page_token {
            url.push_str(&format!("&pageToken={token}"));
        }
        debug!("Fetching comment threads: video={video_id} page_token={page_token:?}");

        let resp: CommentThreadsResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp)
    }

    /// List the currently most-popular videos (id, title, thumbnail)
    pub async fn fetch_popular(&self, max_results: usize) -> Result<Vec<TrendingVideo>> {
        let url = format!(
            "{API_BASE}/videos?key={}&part=snippet&chart=mostPopular&maxResults={max_results}",
            self.api_key
        );
        debug!("Fetching popular videos");

        let resp: VideosResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let videos = resp
            .items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| {
                let snippet = item.snippet?;
                let thumbnail = snippet
                    .thumbnails
                    .and_then(|t| t.high.or(t.default))
                    .map(|t| t.url)
                    .unwrap_or_default();
                Some(TrendingVideo {
                    video_id: item.id,
                    title: snippet.title,
                    thumbnail,
                })
            })
            .collect();
        Ok(videos)
    }

    /// Check whether a video has at least one comment thread
    pub async fn has_comments(&self, video_id: &str) -> Result<bool> {
        let resp = self.comment_threads(video_id, "id", 1, None).await?;
        Ok(resp.items.is_some_and(|items| !items.is_empty()))
    }
}

impl CommentSource for YouTubeApi {
    async fn fetch_page(&self, video_id: &str, page_token: Option<&str>) -> Result<CommentPage> {
        let resp = self
            .comment_threads(video_id, "snippet", PAGE_SIZE, page_token)
            .await?;

        let comments = resp
            .items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|thread| thread.snippet?.top_level_comment?.snippet?.text())
            .collect();

        Ok(CommentPage {
            comments,
            next_page_token: resp.next_page_token,
            total_hint: resp.page_info.and_then(|p| p.total_results),
        })
    }
}

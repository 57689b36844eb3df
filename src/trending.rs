use eyre::Result;
use futures::future::join_all;
use log::debug;

use crate::youtube::{TrendingVideo, YouTubeApi};

/// How many popular videos to consider
const POPULAR_FETCH: usize = 5;
/// How many eligible videos to keep
const TRENDING_LIMIT: usize = 4;

/// The two upstream calls the trending list needs. Split out so tests can
/// script responses without a network.
pub trait VideoDirectory {
    async fn fetch_popular(&self, max_results: usize) -> Result<Vec<TrendingVideo>>;
    async fn has_comments(&self, video_id: &str) -> Result<bool>;
}

impl VideoDirectory for YouTubeApi {
    async fn fetch_popular(&self, max_results: usize) -> Result<Vec<TrendingVideo>> {
        YouTubeApi::fetch_popular(self, max_results).await
    }

    async fn has_comments(&self, video_id: &str) -> Result<bool> {
        YouTubeApi::has_comments(self, video_id).await
    }
}

/// List trending videos that have at least one comment thread.
///
/// The per-video existence checks are independent, so they run as one
/// concurrent batch and the list is filtered only after every check has
/// finished. A single failed check fails the whole fetch.
pub async fn fetch_trending<D: VideoDirectory>(directory: &D) -> Result<Vec<TrendingVideo>> {
    let popular = directory.fetch_popular(POPULAR_FETCH).await?;
    debug!("Fetched {} popular videos", popular.len());

    let checks = popular.into_iter().map(|video| async move {
        let eligible = directory.has_comments(&video.video_id).await?;
        Ok::<_, eyre::Report>(eligible.then_some(video))
    });

    let mut videos = Vec::new();
    for checked in join_all(checks).await {
        if let Some(video) = checked? {
            videos.push(video);
        }
    }
    videos.truncate(TRENDING_LIMIT);
    Ok(videos)
}

//! Read-side use cases: a single post page and the feed.

use std::sync::Arc;

use quillpost_domain::{Comment, Like, Post, PostStatus, Slug};
use quillpost_shared::{Query, CREATED_AT};

use crate::entities::{Comments, Files, Likes, Posts};
use crate::infrastructure::ports::PlatformError;
use crate::stores::AuthStore;

/// Everything a post page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PostPage {
    pub post: Post,
    /// Preview URL of the featured image, `""` without one
    pub image_url: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub viewer_liked: bool,
    pub viewer_is_author: bool,
}

pub struct LoadPost {
    posts: Arc<Posts>,
    files: Arc<Files>,
    likes: Arc<Likes>,
    comments: Arc<Comments>,
    auth: Arc<AuthStore>,
}

impl LoadPost {
    pub fn new(
        posts: Arc<Posts>,
        files: Arc<Files>,
        likes: Arc<Likes>,
        comments: Arc<Comments>,
        auth: Arc<AuthStore>,
    ) -> Self {
        Self {
            posts,
            files,
            likes,
            comments,
            auth,
        }
    }

    pub async fn execute(&self, slug: &Slug) -> Result<PostPage, PlatformError> {
        let post = self.posts.get_post(slug).await?;
        let (likes, comments) = tokio::try_join!(
            self.likes.get_likes(slug),
            self.comments.get_comments(slug)
        )?;

        let viewer = self.auth.user_id();
        let viewer_liked = viewer
            .as_ref()
            .is_some_and(|viewer| likes.iter().any(|like| &like.user_id == viewer));
        let viewer_is_author = viewer
            .as_ref()
            .is_some_and(|viewer| post.is_authored_by(viewer));

        Ok(PostPage {
            image_url: self.files.get_file_preview(post.featured_image.as_ref()),
            post,
            likes,
            comments,
            viewer_liked,
            viewer_is_author,
        })
    }
}

/// A post in the feed together with its image preview.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub post: Post,
    pub image_url: String,
}

pub struct LoadFeed {
    posts: Arc<Posts>,
    files: Arc<Files>,
}

impl LoadFeed {
    pub fn new(posts: Arc<Posts>, files: Arc<Files>) -> Self {
        Self { posts, files }
    }

    /// Active posts, or every post when `include_inactive` is set, newest first.
    pub async fn execute(&self, include_inactive: bool) -> Result<Vec<FeedItem>, PlatformError> {
        let mut queries = vec![Query::order_desc(CREATED_AT)];
        if !include_inactive {
            queries.push(Query::equal("status", PostStatus::Active.as_str()));
        }
        let posts = self.posts.get_posts_matching(queries).await?;

        Ok(posts
            .into_iter()
            .map(|post| FeedItem {
                image_url: self.files.get_file_preview(post.featured_image.as_ref()),
                post,
            })
            .collect())
    }
}

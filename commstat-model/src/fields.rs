use crate::error::ModelError;
use crate::form::FormState;
use crate::sort::SortKey;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sortable columns of the community list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CommunitySortField {
    Followers,
    ViewsPerPost,
    LikesPerView,
}

impl SortKey for CommunitySortField {
    fn all() -> &'static [Self] {
        use CommunitySortField::*;
        &[Followers, ViewsPerPost, LikesPerView]
    }

    fn as_str(&self) -> &'static str {
        match self {
            CommunitySortField::Followers => "followers",
            CommunitySortField::ViewsPerPost => "views_per_post",
            CommunitySortField::LikesPerView => "likes_per_view",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CommunitySortField::Followers => "Followers",
            CommunitySortField::ViewsPerPost => "Views",
            CommunitySortField::LikesPerView => "Likes",
        }
    }

    // Biggest communities first.
    fn default_sort() -> FormState<Self> {
        FormState::new(CommunitySortField::Followers, true)
    }
}

/// Sortable columns of the post list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PostSortField {
    PublishedAt,
    Views,
    LikesPerView,
}

impl SortKey for PostSortField {
    fn all() -> &'static [Self] {
        use PostSortField::*;
        &[PublishedAt, Views, LikesPerView]
    }

    fn as_str(&self) -> &'static str {
        match self {
            PostSortField::PublishedAt => "published_at",
            PostSortField::Views => "views",
            PostSortField::LikesPerView => "likes_per_view",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PostSortField::PublishedAt => "Date",
            PostSortField::Views => "Views",
            PostSortField::LikesPerView => "Likes",
        }
    }

    // Newest posts first.
    fn default_sort() -> FormState<Self> {
        FormState::new(PostSortField::PublishedAt, true)
    }
}

macro_rules! impl_sort_key_text {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = ModelError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as SortKey>::parse(s)
                }
            }
        )+
    };
}

impl_sort_key_text!(CommunitySortField, PostSortField);

//! Lazy page-flattening traversal over a list endpoint.
//!
//! A [`Paginator`] owns its page counter and at most one page of buffered
//! items. The next page is requested only once the buffer is drained, and the
//! walk ends after a page reports `hasMore == false`. A failed fetch ends the
//! walk for good; restart by asking the façade for a fresh iterator.

use std::collections::VecDeque;

use async_trait::async_trait;
use futures_util::stream::{self, Stream};
use tally_core::Page;

use crate::error::TallyError;

/// Fetches one page of a list endpoint by page number.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;

    async fn fetch_page(&self, page: u32) -> Result<Page<Self::Item>, TallyError>;
}

/// Reject page numbers below 1 before any request is made.
pub(crate) fn validate_page(page: u32) -> Result<(), TallyError> {
    if page == 0 {
        return Err(TallyError::Validation(
            "page must be greater than or equal to 1".to_string(),
        ));
    }
    Ok(())
}

pub struct Paginator<S: PageSource> {
    source: S,
    /// `None` once the last page was fetched or a fetch failed.
    next_page: Option<u32>,
    buffer: VecDeque<S::Item>,
}

impl<S: PageSource> Paginator<S> {
    /// Walk starting at page 1.
    pub fn new(source: S) -> Self {
        Self {
            source,
            next_page: Some(1),
            buffer: VecDeque::new(),
        }
    }

    /// `true` once no further item will be yielded.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.next_page.is_none() && self.buffer.is_empty()
    }

    /// Next item, fetching the following page only when the buffer is empty.
    ///
    /// # Errors
    ///
    /// Returns the fetch error once; every later call yields `Ok(None)`.
    pub async fn try_next(&mut self) -> Result<Option<S::Item>, TallyError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            let Some(page) = self.next_page else {
                return Ok(None);
            };

            tracing::debug!(page, "fetching page");
            match self.source.fetch_page(page).await {
                Ok(fetched) => {
                    self.next_page = if fetched.has_more {
                        page.checked_add(1)
                    } else {
                        None
                    };
                    self.buffer.extend(fetched.items);
                }
                Err(err) => {
                    self.next_page = None;
                    tracing::warn!(page, error = %err, "page walk aborted");
                    return Err(err);
                }
            }
        }
    }

    /// Drain the remaining items into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; items already read are discarded.
    pub async fn collect_all(mut self) -> Result<Vec<S::Item>, TallyError> {
        let mut items = Vec::new();
        while let Some(item) = self.try_next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Adapt the walk into a `Stream` of results ending after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<S::Item, TallyError>> {
        stream::try_unfold(self, |mut paginator| async move {
            let item = paginator.try_next().await?;
            Ok::<_, TallyError>(item.map(|item| (item, paginator)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::TransportError;
    use futures_util::TryStreamExt;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Serves pre-scripted pages and records every requested page number.
    struct Scripted {
        pages: Mutex<VecDeque<Result<Page<&'static str>, TallyError>>>,
        calls: Mutex<Vec<u32>>,
    }

    impl Scripted {
        fn new(pages: Vec<Result<Page<&'static str>, TallyError>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<u32> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageSource for &Scripted {
        type Item = &'static str;

        async fn fetch_page(&self, page: u32) -> Result<Page<&'static str>, TallyError> {
            self.calls.lock().unwrap().push(page);
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .expect("no more scripted pages")
        }
    }

    fn page(items: &[&'static str], page: u32, has_more: bool) -> Result<Page<&'static str>, TallyError> {
        Ok(Page {
            items: items.to_vec(),
            page,
            limit: 2,
            total: 3,
            has_more,
        })
    }

    fn server_error() -> Result<Page<&'static str>, TallyError> {
        Err(TallyError::from(TransportError::Status {
            status: 500,
            message: "boom".into(),
        }))
    }

    #[tokio::test]
    async fn flattens_pages_with_one_call_each() {
        let source = Scripted::new(vec![page(&["a", "b"], 1, true), page(&["c"], 2, false)]);
        let items = Paginator::new(&source).collect_all().await.unwrap();

        assert_eq!(items, ["a", "b", "c"]);
        assert_eq!(source.calls(), [1, 2]);
    }

    #[tokio::test]
    async fn next_page_is_fetched_only_after_buffer_drains() {
        let source = Scripted::new(vec![page(&["a", "b"], 1, true), page(&["c"], 2, false)]);
        let mut walk = Paginator::new(&source);
        assert!(source.calls().is_empty());

        assert_eq!(walk.try_next().await.unwrap(), Some("a"));
        assert_eq!(source.calls(), [1]);
        assert_eq!(walk.try_next().await.unwrap(), Some("b"));
        assert_eq!(source.calls(), [1]);

        assert_eq!(walk.try_next().await.unwrap(), Some("c"));
        assert_eq!(source.calls(), [1, 2]);
        assert_eq!(walk.try_next().await.unwrap(), None);
        assert!(walk.is_exhausted());
    }

    #[tokio::test]
    async fn full_page_without_more_terminates() {
        let source = Scripted::new(vec![page(&["a", "b"], 1, false)]);
        let items = Paginator::new(&source).collect_all().await.unwrap();

        assert_eq!(items, ["a", "b"]);
        assert_eq!(source.calls(), [1]);
    }

    #[tokio::test]
    async fn empty_page_with_more_keeps_walking() {
        let source = Scripted::new(vec![
            page(&[], 1, true),
            page(&["a"], 2, true),
            page(&[], 3, false),
        ]);
        let items = Paginator::new(&source).collect_all().await.unwrap();

        assert_eq!(items, ["a"]);
        assert_eq!(source.calls(), [1, 2, 3]);
    }

    #[tokio::test]
    async fn failure_exhausts_the_walk() {
        let source = Scripted::new(vec![page(&["a"], 1, true), server_error()]);
        let mut walk = Paginator::new(&source);

        assert_eq!(walk.try_next().await.unwrap(), Some("a"));
        assert!(walk.try_next().await.is_err());
        assert_eq!(walk.try_next().await.unwrap(), None);
        assert_eq!(source.calls(), [1, 2]);
    }

    #[tokio::test]
    async fn each_walk_restarts_at_page_one() {
        let source = Scripted::new(vec![
            page(&["a"], 1, false),
            page(&["a"], 1, false),
        ]);
        let first = Paginator::new(&source).collect_all().await.unwrap();
        let second = Paginator::new(&source).collect_all().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.calls(), [1, 1]);
    }

    #[tokio::test]
    async fn stream_yields_items_then_error() {
        let source = Scripted::new(vec![page(&["a", "b"], 1, true), server_error()]);
        let stream = Paginator::new(&source).into_stream();
        futures_util::pin_mut!(stream);

        assert_eq!(stream.try_next().await.unwrap(), Some("a"));
        assert_eq!(stream.try_next().await.unwrap(), Some("b"));
        assert!(stream.try_next().await.is_err());
    }

    #[tokio::test]
    async fn stream_collects_every_page() {
        let source = Scripted::new(vec![page(&["a"], 1, true), page(&["b"], 2, false)]);
        let items: Vec<_> = Paginator::new(&source).into_stream().try_collect().await.unwrap();
        assert_eq!(items, ["a", "b"]);
    }

    #[test]
    fn page_zero_is_rejected() {
        assert!(matches!(validate_page(0), Err(TallyError::Validation(_))));
        assert!(validate_page(1).is_ok());
    }
}

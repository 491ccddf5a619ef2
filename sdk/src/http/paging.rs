use crate::error::PubSubError;
use futures::stream::{self, BoxStream};
use futures::{Future, StreamExt, TryStreamExt};

/// A single page of a listing response.
pub(crate) trait Page {
    type Item;

    /// Split the page into its items and the token of the next page.
    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

enum PageState {
    First,
    Next(String),
    Done,
}

/// Turn a page fetcher into a stream of items. The stream ends once a page
/// comes back without a next page token; the first failed request is yielded
/// as an error and nothing is fetched after it.
pub(crate) fn paginate<'a, P, F, Fut>(mut fetch: F) -> BoxStream<'a, Result<P::Item, PubSubError>>
where
    P: Page + Send + 'a,
    P::Item: Send + 'a,
    F: FnMut(Option<String>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<P, PubSubError>> + Send + 'a,
{
    stream::try_unfold(PageState::First, move |state| {
        let request = match state {
            PageState::First => Some(fetch(None)),
            PageState::Next(page_token) => Some(fetch(Some(page_token))),
            PageState::Done => None,
        };

        async move {
            let Some(request) = request else {
                return Ok::<_, PubSubError>(None);
            };

            let (items, next_page_token) = request.await?.into_parts();
            let state = match next_page_token {
                Some(page_token) if !page_token.is_empty() => PageState::Next(page_token),
                _ => PageState::Done,
            };
            Ok(Some((items, state)))
        }
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok)))
    .try_flatten()
    .boxed()
}

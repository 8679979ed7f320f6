//! Cursor pagination over listing endpoints.

use std::future::Future;

use crate::query::PageCursor;
use crate::types::Paginated;
use crate::Error;

/// Fetches pages until the server stops issuing a `next_page` token or
/// `max_pages` pages have been collected.
///
/// `fetch` receives a copy of `query` with the cursor from the previous page
/// applied. Tokens are echoed back exactly as received. The first error
/// aborts the walk and is returned as-is.
///
/// ```no_run
/// # async fn run(client: &intrinio_api::Client) -> Result<(), intrinio_api::Error> {
/// use intrinio_api::query::AllCompaniesQuery;
///
/// let query = AllCompaniesQuery::default().with_sector("Energy");
/// let pages = intrinio_api::collect_pages(query, Some(5), |q| async move {
///     client.company().get_all_companies(&q).await
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn collect_pages<Q, P, F, Fut>(
    mut query: Q,
    max_pages: Option<usize>,
    mut fetch: F,
) -> Result<Vec<P>, Error>
where
    Q: PageCursor + Clone,
    P: Paginated,
    F: FnMut(Q) -> Fut,
    Fut: Future<Output = Result<P, Error>>,
{
    let mut pages = Vec::new();
    loop {
        if max_pages.is_some_and(|max| pages.len() >= max) {
            break;
        }
        let page = fetch(query.clone()).await?;
        let next = page.next_page().map(str::to_string);
        pages.push(page);
        match next {
            Some(token) => {
                tracing::debug!(pages = pages.len(), "Following next_page cursor");
                query.set_next_page(Some(token));
            }
            None => break,
        }
    }
    Ok(pages)
}

use super::define_query;

define_query! {
    /// Size and cursor for index listings.
    PageQuery: paged {
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    /// Parameters for the index search endpoints. `query` is required.
    IndexSearchQuery {
        query / with_query: String = "query",
        page_size / with_page_size: u32 = "page_size",
    }
}

use tracing::Instrument;

use super::{
    BookDetail, BookSummary, CatalogClient, CatalogError, SubjectListing, WorkRecord, SUBJECT,
    SUBJECT_LIMIT,
};

impl CatalogClient {
    /// Lists the works of [`SUBJECT`] and resolves the description of each one.
    ///
    /// Detail requests are issued strictly in listing order, each after the previous
    /// response has been parsed. The first failure aborts the whole aggregation.
    pub async fn python_books(&self) -> Result<Vec<BookDetail>, CatalogError> {
        let span = tracing::info_span!(
            "get-python-books",
            http.status_code = tracing::field::Empty,
            "books-count" = tracing::field::Empty
        );

        async move {
            let path = format!("/subjects/{SUBJECT}?limit={SUBJECT_LIMIT}");
            let listing: SubjectListing = self.get_json("subject", &path).await?;

            tracing::Span::current().record("books-count", listing.work_count);
            tracing::info!(count = listing.work_count, "get books count");

            let mut details = Vec::with_capacity(listing.works.len());

            for book in listing.works {
                details.push(self.book_details(book).await?);
            }

            Ok(details)
        }
        .instrument(span)
        .await
    }

    #[tracing::instrument(
        name = "get-book-details",
        skip_all,
        fields(key = %book.key, http.status_code = tracing::field::Empty)
    )]
    async fn book_details(&self, book: BookSummary) -> Result<BookDetail, CatalogError> {
        let record: WorkRecord = self.get_json("work", &book.key).await?;

        let title = book.title;
        let description = record.description_or_default();

        tracing::info!(%title, %description, "get book details");

        Ok(BookDetail { title, description })
    }
}

use crate::framework::{Document, JsonFileStore, StoreEntity, StoreError};

/// Trait for resource-specific clients to inherit standard store operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// the operations that need nothing resource-specific: `load`, `save`, `read`,
/// `delete` and `list`.
pub trait StoreClient<T: StoreEntity> {
    /// The resource-specific error type.
    type Error;

    /// Access the inner generic JsonFileStore.
    fn inner(&self) -> &JsonFileStore<T>;

    /// Map store errors to the specific resource error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Read the whole document. A missing file is an empty document.
    #[tracing::instrument(skip(self))]
    fn load(&self) -> Result<Document<T::Record>, Self::Error> {
        self.inner().load().map_err(Self::map_error)
    }

    /// Overwrite the file with `document`. Failures are logged, not returned.
    fn save(&self, document: &Document<T::Record>) {
        self.inner().save(document)
    }

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    fn read(&self, id: T::Id) -> Result<Option<T::Record>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().read(id).map_err(Self::map_error)
    }

    /// Delete a record by ID.
    #[tracing::instrument(skip(self))]
    fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).map_err(Self::map_error)
    }

    /// All records, in document order.
    #[tracing::instrument(skip(self))]
    fn list(&self) -> Result<Vec<T::Record>, Self::Error> {
        let document = self.load()?;
        Ok(document.into_values().collect())
    }
}

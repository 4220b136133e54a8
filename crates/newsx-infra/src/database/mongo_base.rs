use std::borrow::Borrow;

use bson::Document;
use futures::TryStreamExt;
use mongodb::Collection;
use serde::Serialize;
use serde::de::DeserializeOwned;

use newsx_core::domain::InsertOutcome;
use newsx_core::error::RepoError;

/// Generic MongoDB repository over one typed collection.
pub struct MongoBaseRepository<D>
where
    D: Send + Sync,
{
    pub(crate) collection: Collection<D>,
}

impl<D> MongoBaseRepository<D>
where
    D: Serialize + DeserializeOwned + Send + Sync + Unpin,
{
    pub fn new(collection: Collection<D>) -> Self {
        Self { collection }
    }

    pub(crate) async fn insert_document(
        &self,
        document: impl Borrow<D> + Send + Sync,
    ) -> Result<InsertOutcome, RepoError> {
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(query_error)?;

        let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
            RepoError::Decode(format!(
                "insert returned a non-ObjectId identifier: {}",
                result.inserted_id
            ))
        })?;

        Ok(InsertOutcome::acknowledged(inserted_id.into()))
    }

    pub(crate) async fn find_one_by(&self, filter: Document) -> Result<Option<D>, RepoError> {
        self.collection
            .find_one(filter)
            .await
            .map_err(query_error)
    }

    pub(crate) async fn count_all(&self) -> Result<u64, RepoError> {
        self.collection
            .count_documents(Document::new())
            .await
            .map_err(query_error)
    }

    /// Run a projected find and collect the cursor into `P`.
    pub(crate) async fn find_projected<P>(&self, query: ProjectedFind) -> Result<Vec<P>, RepoError>
    where
        P: DeserializeOwned + Send + Sync + Unpin,
    {
        let collection = self.collection.clone_with_type::<P>();
        let mut find = collection.find(Document::new()).projection(query.projection);

        if let Some(sort) = query.sort {
            find = find.sort(sort);
        }
        if let Some(skip) = query.skip {
            find = find.skip(skip);
        }
        if let Some(limit) = query.limit {
            let limit = i64::try_from(limit).unwrap_or(i64::MAX);
            find = find.limit(limit);
        }

        let cursor = find.await.map_err(query_error)?;
        cursor.try_collect().await.map_err(query_error)
    }
}

/// Options for a projected, unfiltered find.
#[derive(Debug, Default)]
pub(crate) struct ProjectedFind {
    pub projection: Document,
    pub sort: Option<Document>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

pub(crate) fn query_error(err: mongodb::error::Error) -> RepoError {
    use mongodb::error::ErrorKind;

    match *err.kind {
        ErrorKind::BsonDeserialization(_) => RepoError::Decode(err.to_string()),
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            RepoError::Connection(err.to_string())
        }
        _ => RepoError::Query(err.to_string()),
    }
}

use mongodb::{
    Client, Collection, IndexModel,
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::OnceCell;
use tracing::info;

use crate::app_error::{AppError, AppResult};

pub mod waitlist;

use waitlist::WaitlistDocument;

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Document store access for the waitlist collection.
///
/// The connection is opened on first use and kept for the rest of the
/// process. A failed attempt leaves the cell empty so the next request
/// tries again.
pub struct MongoPersistence {
    uri: SecretString,
    database: String,
    collection_name: String,
    collection: OnceCell<Collection<WaitlistDocument>>,
}

impl MongoPersistence {
    pub fn new(uri: SecretString, database: &str, collection_name: &str) -> Self {
        MongoPersistence {
            uri,
            database: database.to_string(),
            collection_name: collection_name.to_string(),
            collection: OnceCell::new(),
        }
    }

    pub(crate) async fn waitlist(&self) -> AppResult<&Collection<WaitlistDocument>> {
        self.collection.get_or_try_init(|| self.connect()).await
    }

    async fn connect(&self) -> AppResult<Collection<WaitlistDocument>> {
        let client = Client::with_uri_str(self.uri.expose_secret()).await?;
        let collection = client
            .database(&self.database)
            .collection::<WaitlistDocument>(&self.collection_name);

        let unique_email = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        collection.create_index(unique_email).await?;

        info!(
            database = %self.database,
            collection = %self.collection_name,
            "Connected to document store"
        );
        Ok(collection)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_err))
                if write_err.code == DUPLICATE_KEY_CODE =>
            {
                AppError::DuplicateEntry
            }
            ErrorKind::Command(cmd_err) if cmd_err.code == DUPLICATE_KEY_CODE => {
                AppError::DuplicateEntry
            }
            _ => {
                // Log the actual error for debugging, but don't expose details
                tracing::error!(error = %err, "Document store error");
                AppError::Database("Document store operation failed".into())
            }
        }
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    bson::{self, doc, oid::ObjectId},
    options::{Acknowledgment, WriteConcern},
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::persistence::MongoPersistence,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

// Waitlist entry as stored in the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub city: String,
    pub state: String,
    pub gender: String,
    pub looking_for: String,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl From<&WaitlistEntry> for WaitlistDocument {
    fn from(entry: &WaitlistEntry) -> Self {
        WaitlistDocument {
            id: None,
            first_name: entry.first_name.clone(),
            last_name: entry.last_name.clone(),
            full_name: entry.full_name.clone(),
            email: entry.email.clone(),
            date_of_birth: entry.date_of_birth.clone(),
            city: entry.city.clone(),
            state: entry.state.clone(),
            gender: entry.gender.clone(),
            looking_for: entry.looking_for.clone(),
            created_at: to_bson_datetime(entry.created_at),
            updated_at: to_bson_datetime(entry.updated_at),
        }
    }
}

impl From<WaitlistDocument> for WaitlistEntry {
    fn from(doc: WaitlistDocument) -> Self {
        WaitlistEntry {
            email: doc.email,
            full_name: doc.full_name,
            first_name: doc.first_name,
            last_name: doc.last_name,
            date_of_birth: doc.date_of_birth,
            city: doc.city,
            state: doc.state,
            gender: doc.gender,
            looking_for: doc.looking_for,
            created_at: from_bson_datetime(doc.created_at),
            updated_at: from_bson_datetime(doc.updated_at),
        }
    }
}

// With w:0 the driver returns immediately and the server confirms nothing.
fn is_acknowledged(write_concern: Option<&WriteConcern>) -> bool {
    !matches!(
        write_concern.and_then(|wc| wc.w.as_ref()),
        Some(Acknowledgment::Nodes(0))
    )
}

fn to_bson_datetime(dt: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(dt.timestamp_millis())
}

fn from_bson_datetime(dt: bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

#[async_trait]
impl WaitlistRepo for MongoPersistence {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let found = self
            .waitlist()
            .await?
            .find_one(doc! { "email": email })
            .await
            .map_err(AppError::from)?;
        Ok(found.map(WaitlistEntry::from))
    }

    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<()> {
        let collection = self.waitlist().await?;

        let acknowledged = is_acknowledged(collection.write_concern());

        collection
            .insert_one(WaitlistDocument::from(entry))
            .await
            .map_err(AppError::from)?;

        if !acknowledged {
            return Err(AppError::Unacknowledged);
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        let total = self
            .waitlist()
            .await?
            .estimated_document_count()
            .await
            .map_err(AppError::from)?;
        Ok(total)
    }
}

//! The CRUD walkthrough.
//!
//! Runs List → Create → Get → Update → Delete against the objects
//! collection, one call at a time, printing each response. Create and
//! Update gate the calls that depend on their id; List, Get and Delete
//! gate nothing.
//!
//! # Example
//!
//! ```no_run
//! use objectsapi::{ObjectsClient, Walkthrough};
//!
//! #[tokio::main]
//! async fn main() -> objectsapi::Result<()> {
//!     let client = ObjectsClient::from_env()?;
//!     let outcome = Walkthrough::new(&client, std::io::stdout()).run().await?;
//!     assert!(outcome.id_preserved().unwrap_or(true));
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::io::Write;

use crate::client::ObjectsClient;
use crate::error::{ObjectsError, Result};
use crate::models::{ObjectListQuery, ObjectRecord, ObjectRequest};
use crate::output::{format_timestamp, PrettyPrint};
use crate::traits::{Create, Delete, Get, List, Update};

/// Name shared by both walkthrough payloads.
pub const PAYLOAD_NAME: &str = "Apple MacBook Pro 16";

/// Body of the walkthrough's create call.
pub fn create_payload() -> ObjectRequest {
    ObjectRequest::new(PAYLOAD_NAME)
        .with_attr("year", 2019_i64)
        .with_attr("price", 1849.99)
        .with_attr("CPU model", "Intel Core i9")
        .with_attr("Hard disk size", "1 TB")
}

/// Body of the walkthrough's update call: a price change and a new color.
pub fn update_payload() -> ObjectRequest {
    ObjectRequest::new(PAYLOAD_NAME)
        .with_attr("year", 2019_i64)
        .with_attr("price", 2049.99)
        .with_attr("CPU model", "Intel Core i9")
        .with_attr("Hard disk size", "1 TB")
        .with_attr("color", "silver")
}

/// One HTTP call of the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    List,
    Create,
    GetById,
    Update,
    Delete,
}

impl Step {
    /// Line printed when the step fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::List => "Error: Unable to retrieve data",
            Self::Create => "Error: Unable to create object",
            Self::GetById => "Error: Unable to retrieve object by ID",
            Self::Update => "Error: Unable to update object",
            Self::Delete => "Error: Unable to delete object",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Create => "create",
            Self::GetById => "get",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// What a walkthrough run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Steps issued, in order, with whether each succeeded.
    pub steps: Vec<(Step, bool)>,
    /// Id returned by a successful create.
    pub created_id: Option<String>,
    /// Id echoed by a successful update; the delete targets this one.
    pub updated_id: Option<String>,
}

impl Outcome {
    /// Whether the step was issued at all.
    pub fn ran(&self, step: Step) -> bool {
        self.steps.iter().any(|(s, _)| *s == step)
    }

    /// Whether the step was issued and succeeded.
    pub fn succeeded(&self, step: Step) -> bool {
        self.steps.iter().any(|(s, ok)| *s == step && *ok)
    }

    /// Whether the update echoed the id the create returned.
    ///
    /// `None` unless both writes succeeded.
    pub fn id_preserved(&self) -> Option<bool> {
        match (&self.created_id, &self.updated_id) {
            (Some(created), Some(updated)) => Some(created == updated),
            _ => None,
        }
    }

    fn record(&mut self, step: Step, ok: bool) {
        self.steps.push((step, ok));
    }
}

/// Drives the five calls and writes their human-readable dump to `out`.
///
/// Each step reports a non-success status or transport failure by printing
/// its fixed error line and returning `None`. Bodies that do not decode and
/// failed writes to `out` are returned as errors.
pub struct Walkthrough<'a, W> {
    client: &'a ObjectsClient,
    out: W,
}

impl<'a, W: Write> Walkthrough<'a, W> {
    pub fn new(client: &'a ObjectsClient, out: W) -> Self {
        Self { client, out }
    }

    /// Run the whole walkthrough with the built-in payloads.
    pub async fn run(&mut self) -> Result<Outcome> {
        self.run_with(&create_payload(), &update_payload()).await
    }

    /// Run the whole walkthrough with caller-supplied payloads.
    #[tracing::instrument(skip_all, fields(base_url = %self.client.base_url()))]
    pub async fn run_with(
        &mut self,
        create: &ObjectRequest,
        update: &ObjectRequest,
    ) -> Result<Outcome> {
        let mut outcome = Outcome::default();

        let listed = self.list_all().await?;
        outcome.record(Step::List, listed.is_some());

        let Some(created) = self.create(create).await? else {
            outcome.record(Step::Create, false);
            return Ok(outcome);
        };
        outcome.record(Step::Create, true);
        outcome.created_id = Some(created.id.clone());

        let fetched = self.get_by_id(&created.id).await?;
        outcome.record(Step::GetById, fetched.is_some());

        let Some(updated) = self.update(&created.id, update).await? else {
            outcome.record(Step::Update, false);
            return Ok(outcome);
        };
        outcome.record(Step::Update, true);
        outcome.updated_id = Some(updated.id.clone());

        if updated.id != created.id {
            tracing::warn!(
                created = %created.id,
                updated = %updated.id,
                "update echoed a different id; deleting the echoed one"
            );
        }

        let deleted = self.delete(&updated.id).await?;
        outcome.record(Step::Delete, deleted.is_some());

        Ok(outcome)
    }

    /// GET the collection and print every object, each followed by a blank
    /// line. `None` when the call failed.
    pub async fn list_all(&mut self) -> Result<Option<Vec<ObjectRecord>>> {
        let objects =
            match ObjectRecord::list(self.client, &ObjectListQuery::default()).await {
                Ok(objects) => objects,
                Err(e) => return self.step_failed(Step::List, e),
            };

        for object in &objects {
            writeln!(self.out, "{}", object.pretty_print())?;
            writeln!(self.out)?;
        }
        tracing::debug!(count = objects.len(), "listed objects");

        Ok(Some(objects))
    }

    /// POST a new object and print it with its creation time.
    pub async fn create(&mut self, request: &ObjectRequest) -> Result<Option<ObjectRecord>> {
        let created = match ObjectRecord::create(self.client, request).await {
            Ok(created) => created,
            Err(e) => return self.step_failed(Step::Create, e),
        };

        writeln!(self.out, "Created Object:")?;
        writeln!(self.out, "{}", created.pretty_print())?;
        writeln!(
            self.out,
            "CreatedAt: {}",
            format_timestamp(created.created_at.as_ref())
        )?;

        Ok(Some(created))
    }

    /// GET one object and print it.
    pub async fn get_by_id(&mut self, id: &str) -> Result<Option<ObjectRecord>> {
        let object = match ObjectRecord::get(self.client, id.to_string()).await {
            Ok(object) => object,
            Err(e) => return self.step_failed(Step::GetById, e),
        };

        writeln!(self.out, "Retrieved Object by ID:")?;
        writeln!(self.out, "{}", object.pretty_print())?;
        writeln!(self.out)?;

        Ok(Some(object))
    }

    /// PUT a replacement body and print the result with its update time.
    pub async fn update(
        &mut self,
        id: &str,
        request: &ObjectRequest,
    ) -> Result<Option<ObjectRecord>> {
        let updated = match ObjectRecord::update(self.client, id.to_string(), request).await {
            Ok(updated) => updated,
            Err(e) => return self.step_failed(Step::Update, e),
        };

        writeln!(self.out, "Updated Object:")?;
        writeln!(self.out, "{}", updated.pretty_print())?;
        writeln!(
            self.out,
            "UpdatedAt: {}",
            format_timestamp(updated.updated_at.as_ref())
        )?;
        writeln!(self.out)?;

        Ok(Some(updated))
    }

    /// DELETE one object and print the response body verbatim.
    pub async fn delete(&mut self, id: &str) -> Result<Option<String>> {
        let body = match ObjectRecord::delete(self.client, id.to_string()).await {
            Ok(body) => body,
            Err(e) => return self.step_failed(Step::Delete, e),
        };

        writeln!(self.out, "Delete Response:")?;
        writeln!(self.out, "{body}")?;

        Ok(Some(body))
    }

    fn step_failed<T>(&mut self, step: Step, err: ObjectsError) -> Result<Option<T>> {
        if !err.is_step_failure() {
            return Err(err);
        }

        tracing::warn!(%step, status = ?err.status_code(), error = %err, "step failed");
        writeln!(self.out, "{}", step.failure_message())?;
        Ok(None)
    }
}

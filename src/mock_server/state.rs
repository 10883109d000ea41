//! Mock server state management.
//!
//! Provides the in-memory data store for the mock objects API server.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{ObjectRecord, ObjectRequest, Step};

/// First server-assigned id; later ids count up from here in hex.
const FIRST_GENERATED_ID: u64 = 0xff80_8181_9000_0000;

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug)]
pub struct MockState {
    /// Objects indexed by id. Listing returns them in id order.
    pub objects: BTreeMap<String, ObjectRecord>,

    /// Operations that answer 500 instead of doing their work.
    pub failing: HashSet<Step>,

    /// Every request received, with the id it targeted.
    pub requests: Vec<(Step, Option<String>)>,

    next_id: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            objects: BTreeMap::new(),
            failing: HashSet::new(),
            requests: Vec::new(),
            next_id: FIRST_GENERATED_ID,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add an object to the state.
    pub fn with_object(mut self, object: ObjectRecord) -> Self {
        self.objects.insert(object.id.clone(), object);
        self
    }

    /// Make an operation fail with a 500.
    pub fn failing(mut self, step: Step) -> Self {
        self.failing.insert(step);
        self
    }

    /// Whether an operation is set to fail.
    pub fn fails(&self, step: Step) -> bool {
        self.failing.contains(&step)
    }

    /// Note an incoming request.
    pub fn record(&mut self, step: Step, id: Option<&str>) {
        self.requests.push((step, id.map(str::to_string)));
    }

    /// Ids targeted by requests of the given kind, in arrival order.
    pub fn ids_requested(&self, step: Step) -> Vec<String> {
        self.requests
            .iter()
            .filter(|(s, _)| *s == step)
            .filter_map(|(_, id)| id.clone())
            .collect()
    }

    /// Get an object by id.
    pub fn get_object(&self, id: &str) -> Option<&ObjectRecord> {
        self.objects.get(id)
    }

    /// List objects, restricted to `ids` when it is non-empty.
    pub fn list_objects(&self, ids: &[String]) -> Vec<&ObjectRecord> {
        self.objects
            .values()
            .filter(|o| ids.is_empty() || ids.contains(&o.id))
            .collect()
    }

    /// Store a new object under a fresh id and return it with `createdAt`.
    pub fn create_object(&mut self, request: ObjectRequest) -> ObjectRecord {
        let id = format!("{:x}", self.next_id);
        self.next_id += 1;

        let object = ObjectRecord {
            id: id.clone(),
            name: request.name,
            data: Some(request.data),
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        self.objects.insert(id, object.clone());
        object
    }

    /// Replace an object's name and data and return it with `updatedAt`.
    ///
    /// The response carries `updatedAt` only, as the live API does.
    pub fn update_object(&mut self, id: &str, request: ObjectRequest) -> Option<ObjectRecord> {
        let object = self.objects.get_mut(id)?;
        object.name = request.name;
        object.data = Some(request.data);
        object.updated_at = Some(Utc::now());

        let mut response = object.clone();
        response.created_at = None;
        Some(response)
    }

    /// Remove an object.
    pub fn delete_object(&mut self, id: &str) -> Option<ObjectRecord> {
        self.objects.remove(id)
    }
}

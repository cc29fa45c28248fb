use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One job as returned by `GET /sites/{site}/jobs`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Job {
    pub uid: u64,
    pub user: String,
    /// The API omits the name for unnamed jobs.
    #[serde(default)]
    pub name: Option<String>,
    /// Epoch seconds; 0 means the job has not started yet.
    #[serde(default)]
    pub started_at: i64,
    /// Allotted runtime in seconds.
    #[serde(default)]
    pub walltime: i64,
    pub state: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>, // Catch unknown fields
}

impl Job {
    pub fn has_started(&self) -> bool {
        self.started_at != 0
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Envelope of the job-list endpoint: a page of jobs plus the match count.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JobList {
    pub items: Vec<Job>,
    pub total: u64,
}

/// Per-job resource detail from `GET /sites/{site}/jobs/{uid}`.
///
/// `resources_by_type` maps a resource-type name (e.g. "cores") to raw
/// "hostname.domain/index" tokens.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JobResources {
    #[serde(default)]
    pub resources_by_type: HashMap<String, Vec<String>>,
}

impl JobResources {
    pub fn core_tokens(&self) -> &[String] {
        self.resources_by_type
            .get("cores")
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// One node entry from `GET /sites/{site}/status`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NodeStatus {
    pub hard: String,
    pub soft: String,
    #[serde(default)]
    pub busy_slots: u32,
    #[serde(default)]
    pub free_slots: u32,
    #[serde(default)]
    pub reservations: Vec<serde_json::Value>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>, // Catch unknown fields
}

impl NodeStatus {
    pub fn is_dead(&self) -> bool {
        self.hard.eq_ignore_ascii_case("dead")
    }

    pub fn has_reservation(&self) -> bool {
        !self.reservations.is_empty()
    }
}

/// Node map of the status endpoint, keyed by the node's full name.
///
/// A BTreeMap keeps the display order stable without an extra sort.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteStatus {
    pub nodes: BTreeMap<String, NodeStatus>,
}

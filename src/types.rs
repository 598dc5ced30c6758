// src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scraped job posting, keyed by the site-assigned id from the page URL.
/// Immutable once built; nothing is persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub html: String,
}

/// The closed set of actions the relay can perform against the job store.
#[derive(Debug, Clone)]
pub enum Instruction {
    /// Store a scraped posting on the server.
    Post { id: String, html: String },
    /// Retrieve a stored posting by id.
    Get { id: String },
    /// Retrieve every stored posting and export them to disk.
    GetAll,
}

impl Instruction {
    pub fn kind(&self) -> InstructionKind {
        match self {
            Instruction::Post { .. } => InstructionKind::Post,
            Instruction::Get { .. } => InstructionKind::Get,
            Instruction::GetAll => InstructionKind::GetAll,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    Post,
    Get,
    GetAll,
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstructionKind::Post => "POST",
            InstructionKind::Get => "GET",
            InstructionKind::GetAll => "GETALL",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Success,
    Failure,
}

/// Outcome of one instruction, surfaced to the user. Post/Get results carry
/// the id they concern; GetAll results carry none.
#[derive(Debug, Clone)]
pub struct RequestResult {
    pub instruction: InstructionKind,
    pub status: RequestStatus,
    pub id: Option<String>,
    pub error: Option<String>,
}

impl RequestResult {
    pub(crate) fn success(instruction: InstructionKind, id: Option<String>) -> Self {
        Self {
            instruction,
            status: RequestStatus::Success,
            id,
            error: None,
        }
    }

    pub(crate) fn failure(
        instruction: InstructionKind,
        id: Option<String>,
        error: &anyhow::Error,
    ) -> Self {
        Self {
            instruction,
            status: RequestStatus::Failure,
            id,
            error: Some(format!("{:#}", error)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RequestStatus::Success
    }
}

// Response envelope for single-job endpoints. The server's payload shape is
// reconstructed from usage, so only the id is interpreted.
#[derive(Debug, Deserialize)]
pub(crate) struct JobEnvelope {
    pub job: JobRecord,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobRecord {
    pub id: serde_json::Value,
}

impl JobRecord {
    /// The server may return the id as a string or a number.
    pub fn id_string(&self) -> String {
        match self.id.as_str() {
            Some(s) => s.to_string(),
            None => self.id.to_string(),
        }
    }
}

// Request body for creating a job. The server expects the markup under the
// uppercase "HTML" key.
#[derive(Debug, Serialize)]
pub(crate) struct CreateJobBody<'a> {
    pub id: &'a str,
    #[serde(rename = "HTML")]
    pub html: &'a str,
}

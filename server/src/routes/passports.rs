//! Passport and contract JSON routes.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContractInfo {
    pub address: String,
    pub chain_id: Option<u64>,
    pub deployed: bool,
    pub functions: Vec<ContractFunction>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContractFunction {
    pub name: String,
    pub signature: String,
    pub read_only: bool,
}

/// `GET /api/passports/{id}` returns the passport record.
///
/// The id is not used for lookup; every id returns the configured record,
/// matching what the `/battery-passport/{id}` page renders.
pub async fn get_passport(State(state): State<AppState>, Path(id): Path<String>) -> Json<passport::PassportRecord> {
    tracing::debug!(%id, record_id = %state.record.id, "passport requested");
    Json(state.record.as_ref().clone())
}

/// `GET /api/contract` describes the contract the client should bind to.
pub async fn get_contract(State(state): State<AppState>) -> Json<ContractInfo> {
    Json(ContractInfo {
        address: state.contract.address.clone(),
        chain_id: state.contract.chain_id,
        deployed: state.contract.is_deployed(),
        functions: state
            .abi
            .functions()
            .filter_map(|entry| {
                Some(ContractFunction {
                    name: entry.name.clone()?,
                    signature: entry.signature()?,
                    read_only: entry.is_read_only(),
                })
            })
            .collect(),
    })
}

#[cfg(test)]
#[path = "passports_test.rs"]
mod tests;

// Copyright (c) 2026 Toolkit Console Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Proxy Action Catalogue
//!
//! One entry per backend resource/action. Each action declares its
//! same-origin route, HTTP method, required inbound fields, backend path,
//! outbound body and the fixed message returned when the backend fails.
//!
//! # Architecture
//!
//! - **Layer:** Application Layer
//! - **Purpose:** Declarative description of every proxied call

use serde_json::{Map, Value};

use super::params::{Field, ProxyParams};
use crate::domain::backend::BackendMethod;
use crate::domain::resource::ResourcePath;

use Field::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyAction {
    GetTenant,
    GetBrand,
    ListBrands,
    GetSource,
    ListSources,
    GetPrompt,
    ListPrompts,
    GetWorker,
    ListWorkers,
    CreateWorker,
    UpdateWorker,
    DeleteWorker,
    CreateGeneration,
    GetGeneration,
    ListGenerations,
    CompassStatus,
    TriggerCompass,
}

/// Missing path fields are rejected before a path is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing path field {0}")]
pub struct MissingField(pub Field);

impl ProxyAction {
    pub const ALL: [ProxyAction; 17] = [
        ProxyAction::GetTenant,
        ProxyAction::GetBrand,
        ProxyAction::ListBrands,
        ProxyAction::GetSource,
        ProxyAction::ListSources,
        ProxyAction::GetPrompt,
        ProxyAction::ListPrompts,
        ProxyAction::GetWorker,
        ProxyAction::ListWorkers,
        ProxyAction::CreateWorker,
        ProxyAction::UpdateWorker,
        ProxyAction::DeleteWorker,
        ProxyAction::CreateGeneration,
        ProxyAction::GetGeneration,
        ProxyAction::ListGenerations,
        ProxyAction::CompassStatus,
        ProxyAction::TriggerCompass,
    ];

    /// Same-origin route served by the proxy.
    pub fn route(&self) -> &'static str {
        match self {
            ProxyAction::GetTenant => "/api/tenant",
            ProxyAction::GetBrand => "/api/brand",
            ProxyAction::ListBrands => "/api/brand/list",
            ProxyAction::GetSource => "/api/source",
            ProxyAction::ListSources => "/api/source/list",
            ProxyAction::GetPrompt => "/api/prompt",
            ProxyAction::ListPrompts => "/api/prompt/list",
            ProxyAction::GetWorker => "/api/worker",
            ProxyAction::ListWorkers => "/api/worker/list",
            ProxyAction::CreateWorker => "/api/worker/create",
            ProxyAction::UpdateWorker => "/api/worker/update",
            ProxyAction::DeleteWorker => "/api/worker/delete",
            ProxyAction::CreateGeneration => "/api/generation/create",
            ProxyAction::GetGeneration => "/api/generation",
            ProxyAction::ListGenerations => "/api/generation/list",
            ProxyAction::CompassStatus => "/api/brand-compass/status",
            ProxyAction::TriggerCompass => "/api/brand-compass/trigger",
        }
    }

    /// Method used both inbound and outbound.
    pub fn method(&self) -> BackendMethod {
        match self {
            ProxyAction::CreateWorker
            | ProxyAction::CreateGeneration
            | ProxyAction::TriggerCompass => BackendMethod::Post,
            ProxyAction::UpdateWorker => BackendMethod::Put,
            ProxyAction::DeleteWorker => BackendMethod::Delete,
            _ => BackendMethod::Get,
        }
    }

    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            ProxyAction::GetTenant => &[TenantId, ApiKey],
            ProxyAction::GetBrand => &[TenantId, BrandId, ApiKey],
            ProxyAction::ListBrands => &[TenantId, ApiKey],
            ProxyAction::GetSource => &[TenantId, BrandId, SourceId, ApiKey],
            ProxyAction::ListSources => &[TenantId, BrandId, ApiKey],
            ProxyAction::GetPrompt => &[TenantId, PromptId, ApiKey],
            ProxyAction::ListPrompts => &[TenantId, ApiKey],
            ProxyAction::GetWorker => &[TenantId, WorkerId, ApiKey],
            ProxyAction::ListWorkers => &[TenantId, ApiKey],
            ProxyAction::CreateWorker => {
                &[TenantId, ApiKey, Name, Description, OutputType, Prompt]
            }
            ProxyAction::UpdateWorker => {
                &[TenantId, WorkerId, ApiKey, Name, Description, Prompt]
            }
            ProxyAction::DeleteWorker => &[TenantId, WorkerId, ApiKey],
            ProxyAction::CreateGeneration => &[TenantId, BrandId, WorkerId, ApiKey],
            ProxyAction::GetGeneration => {
                &[TenantId, BrandId, WorkerId, GenerationId, ApiKey]
            }
            ProxyAction::ListGenerations => &[TenantId, BrandId, WorkerId, ApiKey],
            ProxyAction::CompassStatus => &[TenantId, BrandId, ApiKey],
            ProxyAction::TriggerCompass => &[TenantId, BrandId, ApiKey],
        }
    }

    /// Fixed client-facing message for any backend failure.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ProxyAction::GetTenant => "Failed to fetch tenant data",
            ProxyAction::GetBrand => "Failed to fetch brand",
            ProxyAction::ListBrands => "Failed to fetch brands data",
            ProxyAction::GetSource => "Failed to fetch source",
            ProxyAction::ListSources => "Failed to fetch sources data",
            ProxyAction::GetPrompt => "Failed to fetch prompt",
            ProxyAction::ListPrompts => "Failed to fetch prompts data",
            ProxyAction::GetWorker => "Failed to fetch worker data",
            ProxyAction::ListWorkers => "Failed to fetch workers data",
            ProxyAction::CreateWorker => "Failed to create worker",
            ProxyAction::UpdateWorker => "Failed to update worker",
            ProxyAction::DeleteWorker => "Failed to delete worker",
            ProxyAction::CreateGeneration => "Failed to create generation",
            ProxyAction::GetGeneration => "Failed to fetch generation",
            ProxyAction::ListGenerations => "Failed to fetch generations",
            ProxyAction::CompassStatus => "Failed to fetch brand compass status",
            ProxyAction::TriggerCompass => "Failed to trigger brand compass",
        }
    }

    /// Delete relays `{"success": true}` instead of the backend body.
    pub fn relays_body(&self) -> bool {
        !matches!(self, ProxyAction::DeleteWorker)
    }

    pub fn backend_path(&self, params: &ProxyParams) -> Result<ResourcePath, MissingField> {
        let id = |field: Field| {
            params
                .text(field)
                .map(|value| value.into_owned())
                .ok_or(MissingField(field))
        };

        let tenant = ResourcePath::tenant(id(TenantId)?);
        let path = match self {
            ProxyAction::GetTenant => tenant.into(),
            ProxyAction::GetBrand => tenant.brand(id(BrandId)?).into(),
            ProxyAction::ListBrands => tenant.brands(),
            ProxyAction::GetSource => tenant.brand(id(BrandId)?).source(id(SourceId)?),
            ProxyAction::ListSources => tenant.brand(id(BrandId)?).sources(),
            ProxyAction::GetPrompt => tenant.prompt(id(PromptId)?),
            ProxyAction::ListPrompts => tenant.prompts(),
            ProxyAction::GetWorker
            | ProxyAction::UpdateWorker
            | ProxyAction::DeleteWorker => tenant.worker(id(WorkerId)?),
            ProxyAction::ListWorkers | ProxyAction::CreateWorker => tenant.workers(),
            ProxyAction::CreateGeneration | ProxyAction::ListGenerations => tenant
                .brand(id(BrandId)?)
                .worker(id(WorkerId)?)
                .generations(),
            ProxyAction::GetGeneration => tenant
                .brand(id(BrandId)?)
                .worker(id(WorkerId)?)
                .generation(id(GenerationId)?),
            ProxyAction::CompassStatus => tenant.brand(id(BrandId)?).compass(),
            ProxyAction::TriggerCompass => tenant.brand(id(BrandId)?).compass_trigger(),
        };
        Ok(path)
    }

    /// Outbound JSON body. Only the listed fields are forwarded, values
    /// verbatim, keyed by their backend names.
    pub fn backend_body(&self, params: &ProxyParams) -> Option<Value> {
        let forwarded: &[Field] = match self {
            ProxyAction::CreateWorker => &[Name, Description, OutputType, Prompt],
            // Update never changes the output type.
            ProxyAction::UpdateWorker => &[Name, Description, Prompt],
            ProxyAction::CreateGeneration => &[Context],
            _ => return None,
        };

        let mut body = Map::new();
        for field in forwarded {
            if let Some(value) = params.value(*field) {
                body.insert(field.backend_key().to_string(), value.clone());
            }
        }
        Some(Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn full_params() -> ProxyParams {
        ProxyParams::new()
            .with("tenantId", "T1")
            .with("brandId", "B1")
            .with("sourceId", "S1")
            .with("promptId", "P1")
            .with("workerId", "W1")
            .with("generationId", "G1")
            .with("apiKey", "K1")
            .with("name", "W")
            .with("description", "D")
            .with("output_type", "TEXT")
            .with("prompt", "P")
    }

    #[test]
    fn test_routes_are_unique() {
        let routes: HashSet<_> = ProxyAction::ALL.iter().map(|a| a.route()).collect();
        assert_eq!(routes.len(), ProxyAction::ALL.len());
    }

    #[test]
    fn test_every_action_requires_tenant_and_key() {
        for action in ProxyAction::ALL {
            let required = action.required_fields();
            assert!(required.contains(&TenantId), "{action:?}");
            assert!(required.contains(&ApiKey), "{action:?}");
        }
    }

    #[test]
    fn test_backend_paths() {
        let params = full_params();
        let cases = [
            (ProxyAction::GetTenant, "tenant/T1"),
            (ProxyAction::GetBrand, "tenant/T1/brand/B1"),
            (ProxyAction::ListBrands, "tenant/T1/brand"),
            (ProxyAction::GetSource, "tenant/T1/brand/B1/source/S1"),
            (ProxyAction::ListSources, "tenant/T1/brand/B1/source"),
            (ProxyAction::GetPrompt, "tenant/T1/prompt/P1"),
            (ProxyAction::ListPrompts, "tenant/T1/prompt"),
            (ProxyAction::GetWorker, "tenant/T1/worker/W1"),
            (ProxyAction::ListWorkers, "tenant/T1/worker"),
            (ProxyAction::CreateWorker, "tenant/T1/worker"),
            (ProxyAction::UpdateWorker, "tenant/T1/worker/W1"),
            (ProxyAction::DeleteWorker, "tenant/T1/worker/W1"),
            (ProxyAction::CreateGeneration, "tenant/T1/brand/B1/worker/W1/generation"),
            (ProxyAction::GetGeneration, "tenant/T1/brand/B1/worker/W1/generation/G1"),
            (ProxyAction::ListGenerations, "tenant/T1/brand/B1/worker/W1/generation"),
            (ProxyAction::CompassStatus, "tenant/T1/brand/B1/compass"),
            (ProxyAction::TriggerCompass, "tenant/T1/brand/B1/compass/trigger"),
        ];
        for (action, expected) in cases {
            assert_eq!(action.backend_path(&params).unwrap().to_string(), expected);
        }
    }

    #[test]
    fn test_update_body_drops_output_type() {
        let body = ProxyAction::UpdateWorker.backend_body(&full_params()).unwrap();
        assert_eq!(body, json!({"name": "W", "description": "D", "prompt": "P"}));
    }

    #[test]
    fn test_create_worker_rekeys_camel_case_output_type() {
        let params = ProxyParams::new()
            .with("name", "W")
            .with("description", "D")
            .with("outputType", "VIDEO")
            .with("prompt", "P")
            .with("apiKey", "K1");
        let body = ProxyAction::CreateWorker.backend_body(&params).unwrap();
        assert_eq!(
            body,
            json!({"name": "W", "description": "D", "output_type": "VIDEO", "prompt": "P"})
        );
    }

    #[test]
    fn test_generation_context_omitted_when_empty() {
        let params = full_params().with("context", "");
        assert_eq!(
            ProxyAction::CreateGeneration.backend_body(&params),
            Some(json!({}))
        );
        let params = full_params().with("context", "launch week");
        assert_eq!(
            ProxyAction::CreateGeneration.backend_body(&params),
            Some(json!({"context": "launch week"}))
        );
    }

    #[test]
    fn test_trigger_and_reads_send_no_body() {
        assert!(ProxyAction::TriggerCompass.backend_body(&full_params()).is_none());
        assert!(ProxyAction::GetTenant.backend_body(&full_params()).is_none());
    }
}

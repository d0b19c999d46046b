//! Resource graph builder
//!
//! Expands a parameter set and a model-deployment list into the full
//! declaration graph for the chat-bot stack. Construction is
//! deterministic: the same inputs always produce the same declarations,
//! properties and edges. Values only the engine can produce (keys,
//! principal ids) are declared as computed bindings, never guessed.

use crate::graph::ResourceGraph;
use botstack_domain::constants::{
    PLAN_CAPACITY, SECRET_GROUNDING_ENDPOINT, SECRET_GROUNDING_KEY, SETTING_AI_DEPLOYMENT_PREFIX,
    SETTING_AI_ENDPOINT, SETTING_DATABASE_CONNECTION, SETTING_GROUNDING_ENDPOINT,
    SETTING_GROUNDING_KEY, SETTING_SEARCH_ENDPOINT, SETTING_SEARCH_KEY, SETTING_SPEECH_KEY,
    SETTING_SPEECH_REGION, SETTING_STORAGE_CONNECTION,
};
use botstack_domain::{
    AppSetting, ComputedBinding, Identity, ModelDeployment, Parameters, ResolveOp,
    ResourceDeclaration, ResourceKind, ResourceNames, Result, SkuSpec, vault_secret_reference,
};
use serde_json::json;
use tracing::debug;

/// Builds the declaration graph from an immutable naming configuration
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    names: ResourceNames,
}

impl GraphBuilder {
    /// Builder over a fixed naming configuration
    pub fn new(names: ResourceNames) -> Self {
        Self { names }
    }

    /// Naming configuration the builder declares against
    pub fn names(&self) -> &ResourceNames {
        &self.names
    }

    /// Construct the full graph for one parameter set
    ///
    /// Parameter and naming validation runs first; no declaration is
    /// produced for a rejected input (fail-fast, never partial).
    pub fn build(
        &self,
        parameters: &Parameters,
        deployments: &[ModelDeployment],
    ) -> Result<ResourceGraph> {
        parameters.validate()?;
        self.names.validate()?;
        let tier = parameters.plan_tier()?;

        let names = &self.names;
        let location = parameters.location.as_str();
        let mut resources = Vec::new();

        // Independent leaf resources. The vault comes first; access
        // policies are attached post-creation out of band.
        resources.push(
            ResourceDeclaration::new(ResourceKind::Vault, &names.vault, location)
                .with_sku(SkuSpec::named("standard"))
                .with_property("enableRbacAuthorization", json!(true))
                .with_property("enabledForTemplateDeployment", json!(true)),
        );

        resources.push(
            ResourceDeclaration::new(ResourceKind::StorageAccount, &names.storage, location)
                .with_sku(SkuSpec::named("Standard_LRS"))
                .with_property("kind", json!("StorageV2"))
                .with_property("accessTier", json!("Hot"))
                .with_property("allowBlobPublicAccess", json!(false))
                .with_property("minimumTlsVersion", json!("TLS1_2")),
        );

        resources.push(
            ResourceDeclaration::new(ResourceKind::DatabaseAccount, &names.database, location)
                .with_property("kind", json!("GlobalDocumentDB"))
                .with_property("databaseAccountOfferType", json!("Standard"))
                .with_property(
                    "locations",
                    json!([{ "locationName": location, "failoverPriority": 0 }]),
                ),
        );

        resources.push(
            ResourceDeclaration::new(ResourceKind::SearchService, &names.search, location)
                .with_sku(SkuSpec::named("basic"))
                .with_property("hostingMode", json!("default"))
                .with_property("partitionCount", json!(1))
                .with_property("replicaCount", json!(1)),
        );

        resources.push(
            ResourceDeclaration::new(ResourceKind::SpeechAccount, &names.speech, location)
                .with_sku(SkuSpec::named("S0"))
                .with_property("kind", json!("SpeechServices")),
        );

        // Generative-AI account with one child resource per model entry.
        resources.push(
            ResourceDeclaration::new(ResourceKind::AiAccount, &names.ai_account, location)
                .with_sku(SkuSpec::named("S0"))
                .with_property("kind", json!("OpenAI"))
                .with_property("customSubDomainName", json!(names.ai_account))
                .with_property("publicNetworkAccess", json!("Enabled")),
        );
        for entry in deployments {
            resources.push(
                ResourceDeclaration::new(ResourceKind::ModelDeployment, &entry.name, location)
                    .with_parent(&names.ai_account)
                    .with_sku(SkuSpec::named("Standard").with_capacity(entry.capacity))
                    .with_property(
                        "model",
                        json!({
                            "format": "OpenAI",
                            "name": entry.model,
                            "version": entry.resolved_version(),
                        }),
                    ),
            );
        }

        // Hosting plan sized by the SKU parameter.
        resources.push(
            ResourceDeclaration::new(ResourceKind::ServerFarm, &names.plan, location)
                .with_sku(
                    SkuSpec::named(&parameters.app_service_sku)
                        .with_tier(tier.as_str())
                        .with_capacity(PLAN_CAPACITY),
                )
                .with_property("reserved", json!(true)),
        );

        // Web application: depends on the plan and on every binding
        // source; computed bindings are resolved into its settings at
        // apply time, static settings are declared here.
        let mut web = ResourceDeclaration::new(ResourceKind::WebSite, &names.web_app, location)
            .with_identity(Identity::SystemAssigned)
            .depends_on(&names.plan)
            .with_property("serverFarmId", json!(names.plan))
            .with_property("httpsOnly", json!(true));
        let static_settings = self.static_settings(parameters, deployments);
        web = web.with_property(
            "siteConfig",
            json!({ "appSettings": static_settings }),
        );
        let bindings = self.bindings();
        for binding in &bindings {
            if binding.target == names.web_app {
                web = web.depends_on(&binding.source);
            }
        }
        // Vault routing makes the vault a dependency of the web app even
        // though no binding names it as a source.
        web = web.depends_on(&names.vault);
        resources.push(web);

        // Staging slot for blue-green rollout, on the same plan.
        resources.push(
            ResourceDeclaration::new(ResourceKind::SiteSlot, &names.slot, location)
                .with_parent(&names.web_app)
                .depends_on(&names.plan)
                .with_property("serverFarmId", json!(names.plan))
                .with_property("httpsOnly", json!(true)),
        );

        // Bot channel registration: callback on the app's public
        // hostname, application identity filled in from the app's
        // system-assigned identity at apply time.
        resources.push(
            ResourceDeclaration::new(ResourceKind::BotService, &names.bot, "global")
                .with_sku(SkuSpec::named("F0"))
                .depends_on(&names.web_app)
                .with_property("displayName", json!(names.bot))
                .with_property("endpoint", json!(names.messaging_endpoint())),
        );

        debug!(
            resources = resources.len(),
            bindings = bindings.len(),
            "resource graph constructed"
        );

        Ok(ResourceGraph::new(
            parameters.clone(),
            names.clone(),
            resources,
            bindings,
        ))
    }

    /// Settings whose values are known at declaration time
    fn static_settings(
        &self,
        parameters: &Parameters,
        deployments: &[ModelDeployment],
    ) -> Vec<AppSetting> {
        let vault_uri = self.names.vault_uri();
        let mut settings = vec![AppSetting::new(SETTING_SPEECH_REGION, &parameters.location)];
        for entry in deployments {
            settings.push(AppSetting::new(
                deployment_setting_name(&entry.name),
                &entry.name,
            ));
        }
        // Grounding pair: seeded into the vault out of band, referenced
        // statically like every other secret-valued setting.
        settings.push(AppSetting::new(
            SETTING_GROUNDING_ENDPOINT,
            vault_secret_reference(&vault_uri, SECRET_GROUNDING_ENDPOINT),
        ));
        settings.push(AppSetting::new(
            SETTING_GROUNDING_KEY,
            vault_secret_reference(&vault_uri, SECRET_GROUNDING_KEY),
        ));
        settings
    }

    /// Computed bindings: resolve-then-inject, one uniform interface
    fn bindings(&self) -> Vec<ComputedBinding> {
        let names = &self.names;
        let web = names.web_app.as_str();
        vec![
            ComputedBinding::plain(web, SETTING_AI_ENDPOINT, &names.ai_account, ResolveOp::Endpoint),
            ComputedBinding::plain(
                web,
                SETTING_SEARCH_ENDPOINT,
                &names.search,
                ResolveOp::Endpoint,
            ),
            ComputedBinding::secret(web, SETTING_SEARCH_KEY, &names.search, ResolveOp::PrimaryKey),
            ComputedBinding::secret(
                web,
                SETTING_DATABASE_CONNECTION,
                &names.database,
                ResolveOp::ConnectionString,
            ),
            ComputedBinding::secret(
                web,
                SETTING_STORAGE_CONNECTION,
                &names.storage,
                ResolveOp::ConnectionString,
            ),
            ComputedBinding::secret(web, SETTING_SPEECH_KEY, &names.speech, ResolveOp::PrimaryKey),
            ComputedBinding::plain(&names.bot, "msaAppId", web, ResolveOp::PrincipalId),
        ]
    }
}

/// App-setting name announcing a model deployment to the application
///
/// `gpt-4o-mini` becomes `AZURE_OPENAI_DEPLOYMENT_GPT_4O_MINI`.
pub fn deployment_setting_name(deployment: &str) -> String {
    let suffix: String = deployment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}{}", SETTING_AI_DEPLOYMENT_PREFIX, suffix)
}

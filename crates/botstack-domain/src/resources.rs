//! Resource declarations
//!
//! A declaration describes the desired state of one managed cloud object.
//! Declarations are consumed by a provisioning engine, never mutated after
//! construction within a run; re-declaring the same desired state must be
//! a no-op against an already-matching resource.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Provider resource kinds that appear in the chat-bot stack graph
///
/// Each kind carries its provider type string and the API version the
/// declaration is pinned to. API versions are configuration data; they
/// are centralized here so a version bump touches exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Secret vault holding runtime secrets
    Vault,
    /// Blob storage account
    StorageAccount,
    /// NoSQL document database account
    DatabaseAccount,
    /// Search service
    SearchService,
    /// Speech service account
    SpeechAccount,
    /// Generative-AI account
    AiAccount,
    /// Model deployment, child of the AI account
    ModelDeployment,
    /// App service hosting plan
    ServerFarm,
    /// Web application
    WebSite,
    /// Secondary deployment slot of the web application
    SiteSlot,
    /// Bot channel registration
    BotService,
}

impl ResourceKind {
    /// Provider resource type string
    pub const fn provider_type(self) -> &'static str {
        match self {
            Self::Vault => "Microsoft.KeyVault/vaults",
            Self::StorageAccount => "Microsoft.Storage/storageAccounts",
            Self::DatabaseAccount => "Microsoft.DocumentDB/databaseAccounts",
            Self::SearchService => "Microsoft.Search/searchServices",
            Self::SpeechAccount | Self::AiAccount => "Microsoft.CognitiveServices/accounts",
            Self::ModelDeployment => "Microsoft.CognitiveServices/accounts/deployments",
            Self::ServerFarm => "Microsoft.Web/serverfarms",
            Self::WebSite => "Microsoft.Web/sites",
            Self::SiteSlot => "Microsoft.Web/sites/slots",
            Self::BotService => "Microsoft.BotService/botServices",
        }
    }

    /// API version the declaration is pinned to
    pub const fn api_version(self) -> &'static str {
        match self {
            Self::Vault => "2023-07-01",
            Self::StorageAccount => "2023-05-01",
            Self::DatabaseAccount => "2024-11-15",
            Self::SearchService => "2023-11-01",
            Self::SpeechAccount | Self::AiAccount | Self::ModelDeployment => "2024-10-01",
            Self::ServerFarm | Self::WebSite | Self::SiteSlot => "2023-12-01",
            Self::BotService => "2022-09-15",
        }
    }
}

/// System-assigned identity marker
///
/// Only the system-assigned flavor is modelled; the web application uses
/// it as the bot's application identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    /// Identity created and managed by the platform alongside the resource
    SystemAssigned,
}

/// SKU / tier selector for a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuSpec {
    /// SKU name token (e.g. `B3`, `Standard_LRS`, `S0`)
    pub name: String,

    /// Derived tier, where the provider distinguishes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,

    /// Instance or scale capacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl SkuSpec {
    /// SKU with a name token only
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tier: None,
            capacity: None,
        }
    }

    /// Attach a tier
    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    /// Attach a capacity
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

/// Desired state of one managed cloud object
///
/// Logical names are unique within a graph. `parent` and `depends_on`
/// reference other declarations by logical name; the provisioning engine
/// topologically orders creation from these edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDeclaration {
    /// Resource kind (provider type + API version)
    pub kind: ResourceKind,

    /// Logical name, unique within the graph
    pub name: String,

    /// Deployment region
    pub location: String,

    /// SKU / tier selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<SkuSpec>,

    /// Free-form property bag passed to the provider
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,

    /// Logical name of the parent resource, for child declarations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Managed identity block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,

    /// Explicit dependency edges beyond the parent edge
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

impl ResourceDeclaration {
    /// Create a declaration with the mandatory fields
    pub fn new(kind: ResourceKind, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            location: location.into(),
            sku: None,
            properties: Map::new(),
            parent: None,
            identity: None,
            depends_on: Vec::new(),
        }
    }

    /// Attach a SKU
    pub fn with_sku(mut self, sku: SkuSpec) -> Self {
        self.sku = Some(sku);
        self
    }

    /// Set one property in the bag
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Set the parent edge; the parent is also a dependency
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Attach a managed identity block
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Add an explicit dependency edge
    pub fn depends_on(mut self, name: impl Into<String>) -> Self {
        self.depends_on.push(name.into());
        self
    }

    /// All dependency edges, the parent edge included
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.parent
            .as_deref()
            .into_iter()
            .chain(self.depends_on.iter().map(String::as_str))
    }
}

use modelsync_model::{ApiSync, ApiSyncConfig, Collection, Model, ModelResult};
use modelsync_types::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// A user record as served by `{base}/users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

pub type UserModel = Model<User>;
pub type UserCollection = Collection<User, UserModel>;

impl Entity for User {
    const FIELDS: &'static [&'static str] = &["id", "name", "age"];

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }
}

impl User {
    /// A user model synced with `config.base_url`.
    pub fn build(data: User, config: ApiSyncConfig) -> ModelResult<UserModel> {
        Model::build(data, config)
    }

    /// A collection whose items share its adapter and HTTP client.
    pub fn collection(config: ApiSyncConfig) -> ModelResult<UserCollection> {
        let sync = ApiSync::new(config)?;
        let item_sync = sync.clone();
        Ok(Collection::new(sync, move |user: User| {
            Model::with_sync(user, item_sync.clone())
        }))
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, ModelTrait, QueryFilter};

use crate::ent::{
    Builder, Client, Create, Delete, DeleteOne, EntError, Mutation, Op, Schema, Update,
    UpdateOne, Updater, default_to, validate, value,
};
use crate::entities::{location, location_type, work_order};

pub struct Location;

pub type LocationCreate = Create<Location>;
pub type LocationUpdate = Update<Location>;
pub type LocationUpdateOne = UpdateOne<Location>;
pub type LocationDelete = Delete<Location>;
pub type LocationDeleteOne = DeleteOne<Location>;

#[async_trait]
impl Schema for Location {
    type Entity = location::Entity;
    type Model = location::Model;
    type ActiveModel = location::ActiveModel;
    type Edges = ();

    const TYPE: &'static str = "Location";

    fn id_column() -> location::Column {
        location::Column::Id
    }

    fn id_of(model: &location::Model) -> i32 {
        model.id
    }

    fn defaults(mutation: &mut Mutation<Self>) {
        let op = mutation.op();
        let fields = mutation.fields_mut();
        super::stamp(op, &mut fields.create_time, &mut fields.update_time);
        if op == Op::Create {
            default_to(&mut fields.site_survey_needed, || false);
        }
    }

    fn check(mutation: &Mutation<Self>) -> Result<(), EntError> {
        let fields = mutation.fields();
        if mutation.op() == Op::Create {
            validate::require(Self::TYPE, "name", &fields.name)?;
            validate::require(Self::TYPE, "latitude", &fields.latitude)?;
            validate::require(Self::TYPE, "longitude", &fields.longitude)?;
            validate::require_edge(Self::TYPE, "type", &fields.location_type_id)?;
        } else {
            validate::keep_edge(Self::TYPE, "type", &fields.location_type_id)?;
        }
        if let Some(name) = value(&fields.name) {
            validate::not_empty(Self::TYPE, "name", name)?;
        }
        if let Some(latitude) = value(&fields.latitude) {
            validate::range(Self::TYPE, "latitude", *latitude, -90.0, 90.0)?;
        }
        if let Some(longitude) = value(&fields.longitude) {
            validate::range(Self::TYPE, "longitude", *longitude, -180.0, 180.0)?;
        }
        Ok(())
    }

    super::hook_slot!(location);
}

pub trait LocationMutator: Builder<Location> {
    fn set_name(mut self, name: impl Into<String>) -> Self {
        self.mutation_mut().fields_mut().name = Set(name.into());
        self
    }

    fn set_external_id(mut self, external_id: impl Into<Option<String>>) -> Self {
        if let Some(external_id) = external_id.into() {
            self.mutation_mut().fields_mut().external_id = Set(Some(external_id));
        }
        self
    }

    fn set_latitude(mut self, latitude: f64) -> Self {
        self.mutation_mut().fields_mut().latitude = Set(latitude);
        self
    }

    fn set_longitude(mut self, longitude: f64) -> Self {
        self.mutation_mut().fields_mut().longitude = Set(longitude);
        self
    }

    fn set_site_survey_needed(mut self, needed: impl Into<Option<bool>>) -> Self {
        if let Some(needed) = needed.into() {
            self.mutation_mut().fields_mut().site_survey_needed = Set(needed);
        }
        self
    }

    fn set_type_id(mut self, id: i32) -> Self {
        self.mutation_mut().fields_mut().location_type_id = Set(Some(id));
        self
    }

    fn set_type(self, location_type: &location_type::Model) -> Self {
        self.set_type_id(location_type.id)
    }

    fn set_parent_id(mut self, id: impl Into<Option<i32>>) -> Self {
        if let Some(id) = id.into() {
            self.mutation_mut().fields_mut().parent_id = Set(Some(id));
        }
        self
    }

    fn set_parent(self, parent: &location::Model) -> Self {
        self.set_parent_id(parent.id)
    }
}

impl<T: Builder<Location>> LocationMutator for T {}

pub trait LocationUpdater: Updater<Location> {
    fn clear_external_id(mut self) -> Self {
        self.mutation_mut().fields_mut().external_id = Set(None);
        self
    }

    fn clear_parent(mut self) -> Self {
        self.mutation_mut().fields_mut().parent_id = Set(None);
        self
    }
}

impl<T: Updater<Location>> LocationUpdater for T {}

impl location::Model {
    pub async fn query_type(&self, client: &Client) -> Result<Option<location_type::Model>, EntError> {
        client.one(self.find_related(location_type::Entity)).await
    }

    pub async fn query_parent(&self, client: &Client) -> Result<Option<location::Model>, EntError> {
        match self.parent_id {
            Some(id) => client.one(location::Entity::find_by_id(id)).await,
            None => Ok(None),
        }
    }

    pub async fn query_children(&self, client: &Client) -> Result<Vec<location::Model>, EntError> {
        client
            .all(location::Entity::find().filter(location::Column::ParentId.eq(self.id)))
            .await
    }

    pub async fn query_work_orders(&self, client: &Client) -> Result<Vec<work_order::Model>, EntError> {
        client.all(self.find_related(work_order::Entity)).await
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseTransaction, ModelTrait};

use crate::ent::{
    Builder, Client, Create, Delete, DeleteOne, EdgeIds, EntError, Mutation, O2m, Op, Schema,
    Update, UpdateOne, Updater, default_to, validate, value,
};
use crate::entities::{location, location_type};

pub struct LocationType;

#[derive(Debug, Clone, Default)]
pub struct LocationTypeEdges {
    pub locations: EdgeIds,
}

pub type LocationTypeCreate = Create<LocationType>;
pub type LocationTypeUpdate = Update<LocationType>;
pub type LocationTypeUpdateOne = UpdateOne<LocationType>;
pub type LocationTypeDelete = Delete<LocationType>;
pub type LocationTypeDeleteOne = DeleteOne<LocationType>;

pub const DEFAULT_MAP_ZOOM_LEVEL: i32 = 7;

const LOCATIONS: O2m<location::Entity> = O2m {
    target: "Location",
    id: location::Column::Id,
    fk: location::Column::LocationTypeId,
};

#[async_trait]
impl Schema for LocationType {
    type Entity = location_type::Entity;
    type Model = location_type::Model;
    type ActiveModel = location_type::ActiveModel;
    type Edges = LocationTypeEdges;

    const TYPE: &'static str = "LocationType";

    fn id_column() -> location_type::Column {
        location_type::Column::Id
    }

    fn id_of(model: &location_type::Model) -> i32 {
        model.id
    }

    fn defaults(mutation: &mut Mutation<Self>) {
        let op = mutation.op();
        let fields = mutation.fields_mut();
        super::stamp(op, &mut fields.create_time, &mut fields.update_time);
        if op == Op::Create {
            default_to(&mut fields.site, || false);
            default_to(&mut fields.map_zoom_level, || Some(DEFAULT_MAP_ZOOM_LEVEL));
            default_to(&mut fields.index, || 0);
        }
    }

    fn check(mutation: &Mutation<Self>) -> Result<(), EntError> {
        let fields = mutation.fields();
        if mutation.op() == Op::Create {
            validate::require(Self::TYPE, "name", &fields.name)?;
        }
        if let Some(name) = value(&fields.name) {
            validate::not_empty(Self::TYPE, "name", name)?;
        }
        if let Some(Some(zoom)) = value(&fields.map_zoom_level) {
            validate::range(Self::TYPE, "map_zoom_level", *zoom, 0, 22)?;
        }
        if let Some(index) = value(&fields.index) {
            validate::range(Self::TYPE, "index", *index, 0, i32::MAX)?;
        }
        Ok(())
    }

    async fn save_edges(tx: &DatabaseTransaction, id: i32, edges: &LocationTypeEdges) -> Result<(), EntError> {
        LOCATIONS.apply(tx, id, &edges.locations).await
    }

    super::hook_slot!(location_type);
}

pub trait LocationTypeMutator: Builder<LocationType> {
    fn set_name(mut self, name: impl Into<String>) -> Self {
        self.mutation_mut().fields_mut().name = Set(name.into());
        self
    }

    fn set_site(mut self, site: impl Into<Option<bool>>) -> Self {
        if let Some(site) = site.into() {
            self.mutation_mut().fields_mut().site = Set(site);
        }
        self
    }

    fn set_map_type(mut self, map_type: impl Into<Option<String>>) -> Self {
        if let Some(map_type) = map_type.into() {
            self.mutation_mut().fields_mut().map_type = Set(Some(map_type));
        }
        self
    }

    fn set_map_zoom_level(mut self, zoom: impl Into<Option<i32>>) -> Self {
        if let Some(zoom) = zoom.into() {
            self.mutation_mut().fields_mut().map_zoom_level = Set(Some(zoom));
        }
        self
    }

    fn set_index(mut self, index: impl Into<Option<i32>>) -> Self {
        if let Some(index) = index.into() {
            self.mutation_mut().fields_mut().index = Set(index);
        }
        self
    }

    fn add_location_ids(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.mutation_mut().edges_mut().locations.add(ids);
        self
    }
}

impl<T: Builder<LocationType>> LocationTypeMutator for T {}

pub trait LocationTypeUpdater: Updater<LocationType> {
    fn clear_map_type(mut self) -> Self {
        self.mutation_mut().fields_mut().map_type = Set(None);
        self
    }

    fn clear_map_zoom_level(mut self) -> Self {
        self.mutation_mut().fields_mut().map_zoom_level = Set(None);
        self
    }
}

impl<T: Updater<LocationType>> LocationTypeUpdater for T {}

impl location_type::Model {
    pub async fn query_locations(&self, client: &Client) -> Result<Vec<location::Model>, EntError> {
        client.all(self.find_related(location::Entity)).await
    }
}

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema as DbSchema};

use crate::entities::prelude::*;

/// Creates every table from the entity definitions, parents before children.
/// Used for embedded and test databases; deployed databases are managed by
/// the `migration` crate.
pub async fn create_all<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    create(db, User).await?;
    create(db, UsersGroup).await?;
    create(db, PermissionsPolicy).await?;
    create(db, UsersGroupMember).await?;
    create(db, UsersGroupPolicy).await?;
    create(db, LocationType).await?;
    create(db, Location).await?;
    create(db, WorkOrderType).await?;
    create(db, WorkOrder).await?;
    create(db, Link).await?;
    create(db, Activity).await?;
    create(db, ActionsRule).await?;
    create(db, CheckListCategoryDefinition).await?;
    create(db, CheckListItemDefinition).await?;
    Ok(())
}

async fn create<C: ConnectionTrait, E: EntityTrait>(db: &C, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut table = DbSchema::new(backend).create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;
    Ok(())
}

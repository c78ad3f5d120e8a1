use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(timestamp_with_time_zone(Users::CreateTime))
                    .col(timestamp_with_time_zone(Users::UpdateTime))
                    .col(string_uniq(Users::AuthId))
                    .col(string_null(Users::FirstName))
                    .col(string_null(Users::LastName))
                    .col(string_null(Users::Email))
                    .col(string(Users::Status).default("ACTIVE"))
                    .col(string(Users::Role).default("USER"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UsersGroups::Table)
                    .if_not_exists()
                    .col(pk_auto(UsersGroups::Id))
                    .col(timestamp_with_time_zone(UsersGroups::CreateTime))
                    .col(timestamp_with_time_zone(UsersGroups::UpdateTime))
                    .col(string_uniq(UsersGroups::Name))
                    .col(string_null(UsersGroups::Description))
                    .col(string(UsersGroups::Status).default("ACTIVE"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PermissionsPolicies::Table)
                    .if_not_exists()
                    .col(pk_auto(PermissionsPolicies::Id))
                    .col(timestamp_with_time_zone(PermissionsPolicies::CreateTime))
                    .col(timestamp_with_time_zone(PermissionsPolicies::UpdateTime))
                    .col(string_uniq(PermissionsPolicies::Name))
                    .col(string_null(PermissionsPolicies::Description))
                    .col(boolean(PermissionsPolicies::IsGlobal).default(false))
                    .col(json_null(PermissionsPolicies::InventoryPolicy))
                    .col(json_null(PermissionsPolicies::WorkforcePolicy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UsersGroupMembers::Table)
                    .if_not_exists()
                    .col(integer(UsersGroupMembers::UsersGroupId))
                    .col(integer(UsersGroupMembers::UserId))
                    .primary_key(
                        Index::create()
                            .col(UsersGroupMembers::UsersGroupId)
                            .col(UsersGroupMembers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_group_members_group")
                            .from(UsersGroupMembers::Table, UsersGroupMembers::UsersGroupId)
                            .to(UsersGroups::Table, UsersGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_group_members_user")
                            .from(UsersGroupMembers::Table, UsersGroupMembers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UsersGroupPolicies::Table)
                    .if_not_exists()
                    .col(integer(UsersGroupPolicies::UsersGroupId))
                    .col(integer(UsersGroupPolicies::PermissionsPolicyId))
                    .primary_key(
                        Index::create()
                            .col(UsersGroupPolicies::UsersGroupId)
                            .col(UsersGroupPolicies::PermissionsPolicyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_group_policies_group")
                            .from(UsersGroupPolicies::Table, UsersGroupPolicies::UsersGroupId)
                            .to(UsersGroups::Table, UsersGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_group_policies_policy")
                            .from(UsersGroupPolicies::Table, UsersGroupPolicies::PermissionsPolicyId)
                            .to(PermissionsPolicies::Table, PermissionsPolicies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LocationTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(LocationTypes::Id))
                    .col(timestamp_with_time_zone(LocationTypes::CreateTime))
                    .col(timestamp_with_time_zone(LocationTypes::UpdateTime))
                    .col(boolean(LocationTypes::Site).default(false))
                    .col(string_uniq(LocationTypes::Name))
                    .col(string_null(LocationTypes::MapType))
                    .col(integer_null(LocationTypes::MapZoomLevel))
                    .col(integer(LocationTypes::Index).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(pk_auto(Locations::Id))
                    .col(timestamp_with_time_zone(Locations::CreateTime))
                    .col(timestamp_with_time_zone(Locations::UpdateTime))
                    .col(string(Locations::Name))
                    .col(string_null(Locations::ExternalId).unique_key())
                    .col(double(Locations::Latitude))
                    .col(double(Locations::Longitude))
                    .col(boolean(Locations::SiteSurveyNeeded).default(false))
                    .col(integer_null(Locations::LocationTypeId))
                    .col(integer_null(Locations::ParentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_locations_type")
                            .from(Locations::Table, Locations::LocationTypeId)
                            .to(LocationTypes::Table, LocationTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_locations_parent")
                            .from(Locations::Table, Locations::ParentId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkOrderTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkOrderTypes::Id))
                    .col(timestamp_with_time_zone(WorkOrderTypes::CreateTime))
                    .col(timestamp_with_time_zone(WorkOrderTypes::UpdateTime))
                    .col(string(WorkOrderTypes::Name))
                    .col(string_null(WorkOrderTypes::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkOrders::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkOrders::Id))
                    .col(timestamp_with_time_zone(WorkOrders::CreateTime))
                    .col(timestamp_with_time_zone(WorkOrders::UpdateTime))
                    .col(string(WorkOrders::Name))
                    .col(string(WorkOrders::Status).default("PLANNED"))
                    .col(string(WorkOrders::Priority).default("NONE"))
                    .col(text_null(WorkOrders::Description))
                    .col(timestamp_with_time_zone_null(WorkOrders::InstallDate))
                    .col(timestamp_with_time_zone(WorkOrders::CreationDate))
                    .col(integer_null(WorkOrders::Index))
                    .col(timestamp_with_time_zone_null(WorkOrders::CloseDate))
                    .col(integer_null(WorkOrders::WorkOrderTypeId))
                    .col(integer_null(WorkOrders::LocationId))
                    .col(integer_null(WorkOrders::OwnerId))
                    .col(integer_null(WorkOrders::AssigneeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_orders_type")
                            .from(WorkOrders::Table, WorkOrders::WorkOrderTypeId)
                            .to(WorkOrderTypes::Table, WorkOrderTypes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_orders_location")
                            .from(WorkOrders::Table, WorkOrders::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_orders_owner")
                            .from(WorkOrders::Table, WorkOrders::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_orders_assignee")
                            .from(WorkOrders::Table, WorkOrders::AssigneeId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_work_orders_status")
                    .table(WorkOrders::Table)
                    .col(WorkOrders::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Links::Table)
                    .if_not_exists()
                    .col(pk_auto(Links::Id))
                    .col(timestamp_with_time_zone(Links::CreateTime))
                    .col(timestamp_with_time_zone(Links::UpdateTime))
                    .col(string_null(Links::FutureState))
                    .col(integer_null(Links::WorkOrderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_links_work_order")
                            .from(Links::Table, Links::WorkOrderId)
                            .to(WorkOrders::Table, WorkOrders::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(pk_auto(Activities::Id))
                    .col(timestamp_with_time_zone(Activities::CreateTime))
                    .col(timestamp_with_time_zone(Activities::UpdateTime))
                    .col(string(Activities::ChangedField))
                    .col(boolean(Activities::IsCreate).default(false))
                    .col(string_null(Activities::OldValue))
                    .col(string_null(Activities::NewValue))
                    .col(integer_null(Activities::AuthorId))
                    .col(integer_null(Activities::WorkOrderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activities_author")
                            .from(Activities::Table, Activities::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activities_work_order")
                            .from(Activities::Table, Activities::WorkOrderId)
                            .to(WorkOrders::Table, WorkOrders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActionsRules::Table)
                    .if_not_exists()
                    .col(pk_auto(ActionsRules::Id))
                    .col(timestamp_with_time_zone(ActionsRules::CreateTime))
                    .col(timestamp_with_time_zone(ActionsRules::UpdateTime))
                    .col(string(ActionsRules::Name))
                    .col(string(ActionsRules::TriggerId))
                    .col(json(ActionsRules::RuleFilters))
                    .col(json(ActionsRules::RuleActions))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CheckListCategoryDefinitions::Table)
                    .if_not_exists()
                    .col(pk_auto(CheckListCategoryDefinitions::Id))
                    .col(timestamp_with_time_zone(CheckListCategoryDefinitions::CreateTime))
                    .col(timestamp_with_time_zone(CheckListCategoryDefinitions::UpdateTime))
                    .col(string(CheckListCategoryDefinitions::Title))
                    .col(string_null(CheckListCategoryDefinitions::Description))
                    .col(integer_null(CheckListCategoryDefinitions::WorkOrderTypeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_list_categories_work_order_type")
                            .from(
                                CheckListCategoryDefinitions::Table,
                                CheckListCategoryDefinitions::WorkOrderTypeId,
                            )
                            .to(WorkOrderTypes::Table, WorkOrderTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CheckListItemDefinitions::Table)
                    .if_not_exists()
                    .col(pk_auto(CheckListItemDefinitions::Id))
                    .col(timestamp_with_time_zone(CheckListItemDefinitions::CreateTime))
                    .col(timestamp_with_time_zone(CheckListItemDefinitions::UpdateTime))
                    .col(string(CheckListItemDefinitions::Title))
                    .col(string(CheckListItemDefinitions::Type))
                    .col(integer_null(CheckListItemDefinitions::Index))
                    .col(string_null(CheckListItemDefinitions::EnumValues))
                    .col(string_null(CheckListItemDefinitions::EnumSelectionModeValue))
                    .col(string_null(CheckListItemDefinitions::HelpText))
                    .col(integer_null(CheckListItemDefinitions::CheckListCategoryDefinitionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_list_items_category")
                            .from(
                                CheckListItemDefinitions::Table,
                                CheckListItemDefinitions::CheckListCategoryDefinitionId,
                            )
                            .to(CheckListCategoryDefinitions::Table, CheckListCategoryDefinitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CheckListItemDefinitions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CheckListCategoryDefinitions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ActionsRules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Activities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Links::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkOrders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkOrderTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LocationTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsersGroupPolicies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsersGroupMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PermissionsPolicies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsersGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    CreateTime,
    UpdateTime,
    AuthId,
    FirstName,
    LastName,
    Email,
    Status,
    Role,
}

#[derive(DeriveIden)]
enum UsersGroups {
    Table,
    Id,
    CreateTime,
    UpdateTime,
    Name,
    Description,
    Status,
}

#[derive(DeriveIden)]
enum PermissionsPolicies {
    Table,
    Id,
    CreateTime,
    UpdateTime,
    Name,
    Description,
    IsGlobal,
    InventoryPolicy,
    WorkforcePolicy,
}

#[derive(DeriveIden)]
enum UsersGroupMembers {
    Table,
    UsersGroupId,
    UserId,
}

#[derive(DeriveIden)]
enum UsersGroupPolicies {
    Table,
    UsersGroupId,
    PermissionsPolicyId,
}

#[derive(DeriveIden)]
enum LocationTypes {
    Table,
    Id,
    CreateTime,
    UpdateTime,
    Site,
    Name,
    MapType,
    MapZoomLevel,
    Index,
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
    CreateTime,
    UpdateTime,
    Name,
    ExternalId,
    Latitude,
    Longitude,
    SiteSurveyNeeded,
    LocationTypeId,
    ParentId,
}

#[derive(DeriveIden)]
enum WorkOrderTypes {
    Table,
    Id,
    CreateTime,
    UpdateTime,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum WorkOrders {
    Table,
    Id,
    CreateTime,
    UpdateTime,
    Name,
    Status,
    Priority,
    Description,
    InstallDate,
    CreationDate,
    Index,
    CloseDate,
    WorkOrderTypeId,
    LocationId,
    OwnerId,
    AssigneeId,
}

#[derive(DeriveIden)]
enum Links {
    Table,
    Id,
    CreateTime,
    UpdateTime,
    FutureState,
    WorkOrderId,
}

#[derive(DeriveIden)]
enum Activities {
    Table,
    Id,
    CreateTime,
    UpdateTime,
    ChangedField,
    IsCreate,
    OldValue,
    NewValue,
    AuthorId,
    WorkOrderId,
}

#[derive(DeriveIden)]
enum ActionsRules {
    Table,
    Id,
    CreateTime,
    UpdateTime,
    Name,
    TriggerId,
    RuleFilters,
    RuleActions,
}

#[derive(DeriveIden)]
enum CheckListCategoryDefinitions {
    Table,
    Id,
    CreateTime,
    UpdateTime,
    Title,
    Description,
    WorkOrderTypeId,
}

#[derive(DeriveIden)]
enum CheckListItemDefinitions {
    Table,
    Id,
    CreateTime,
    UpdateTime,
    Title,
    Type,
    Index,
    EnumValues,
    EnumSelectionModeValue,
    HelpText,
    CheckListCategoryDefinitionId,
}

pub use super::actions_rule::Entity as ActionsRule;
pub use super::activity::Entity as Activity;
pub use super::check_list_category_definition::Entity as CheckListCategoryDefinition;
pub use super::check_list_item_definition::Entity as CheckListItemDefinition;
pub use super::link::Entity as Link;
pub use super::location::Entity as Location;
pub use super::location_type::Entity as LocationType;
pub use super::permissions_policy::Entity as PermissionsPolicy;
pub use super::user::Entity as User;
pub use super::users_group::Entity as UsersGroup;
pub use super::users_group_member::Entity as UsersGroupMember;
pub use super::users_group_policy::Entity as UsersGroupPolicy;
pub use super::work_order::Entity as WorkOrder;
pub use super::work_order_type::Entity as WorkOrderType;

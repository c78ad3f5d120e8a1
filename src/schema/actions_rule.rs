use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use serde_json::Value as Json;

use crate::ent::{
    Builder, Create, Delete, DeleteOne, EntError, Mutation, Op, Schema, Update, UpdateOne,
    validate, value,
};
use crate::entities::actions_rule;

/// Automation rule: when `trigger_id` fires and `rule_filters` match, run
/// `rule_actions`. Filters and actions are opaque JSON arrays.
pub struct ActionsRule;

pub type ActionsRuleCreate = Create<ActionsRule>;
pub type ActionsRuleUpdate = Update<ActionsRule>;
pub type ActionsRuleUpdateOne = UpdateOne<ActionsRule>;
pub type ActionsRuleDelete = Delete<ActionsRule>;
pub type ActionsRuleDeleteOne = DeleteOne<ActionsRule>;

#[async_trait]
impl Schema for ActionsRule {
    type Entity = actions_rule::Entity;
    type Model = actions_rule::Model;
    type ActiveModel = actions_rule::ActiveModel;
    type Edges = ();

    const TYPE: &'static str = "ActionsRule";

    fn id_column() -> actions_rule::Column {
        actions_rule::Column::Id
    }

    fn id_of(model: &actions_rule::Model) -> i32 {
        model.id
    }

    fn defaults(mutation: &mut Mutation<Self>) {
        let op = mutation.op();
        let fields = mutation.fields_mut();
        super::stamp(op, &mut fields.create_time, &mut fields.update_time);
    }

    fn check(mutation: &Mutation<Self>) -> Result<(), EntError> {
        let fields = mutation.fields();
        if mutation.op() == Op::Create {
            validate::require(Self::TYPE, "name", &fields.name)?;
            validate::require(Self::TYPE, "trigger_id", &fields.trigger_id)?;
            validate::require(Self::TYPE, "rule_filters", &fields.rule_filters)?;
            validate::require(Self::TYPE, "rule_actions", &fields.rule_actions)?;
        }
        if let Some(name) = value(&fields.name) {
            validate::not_empty(Self::TYPE, "name", name)?;
        }
        if let Some(trigger_id) = value(&fields.trigger_id) {
            validate::not_empty(Self::TYPE, "trigger_id", trigger_id)?;
        }
        if let Some(filters) = value(&fields.rule_filters) {
            validate::json_array(Self::TYPE, "rule_filters", filters)?;
        }
        if let Some(actions) = value(&fields.rule_actions) {
            validate::json_array(Self::TYPE, "rule_actions", actions)?;
        }
        Ok(())
    }

    super::hook_slot!(actions_rule);
}

pub trait ActionsRuleMutator: Builder<ActionsRule> {
    fn set_name(mut self, name: impl Into<String>) -> Self {
        self.mutation_mut().fields_mut().name = Set(name.into());
        self
    }

    fn set_trigger_id(mut self, trigger_id: impl Into<String>) -> Self {
        self.mutation_mut().fields_mut().trigger_id = Set(trigger_id.into());
        self
    }

    fn set_rule_filters(mut self, filters: Json) -> Self {
        self.mutation_mut().fields_mut().rule_filters = Set(filters);
        self
    }

    fn set_rule_actions(mut self, actions: Json) -> Self {
        self.mutation_mut().fields_mut().rule_actions = Set(actions);
        self
    }
}

impl<T: Builder<ActionsRule>> ActionsRuleMutator for T {}

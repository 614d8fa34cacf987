//! Dynamic UpdateExpression construction.
//!
//! Given an ordered list of `(attribute, value)` pairs, builds a `SET`
//! expression that writes exactly those attributes and nothing else. Both
//! attribute names and values go through synthetic aliases (`#attr0`,
//! `:val0`, ...) so names that collide with DynamoDB reserved words (`year`,
//! `location`, ...) never appear literally in the expression.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

/// A rendered `SET` expression with its name and value alias maps.
#[derive(Debug, Clone, PartialEq)]
pub struct SetExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

impl SetExpression {
    /// True when the attribute list was empty and there is nothing to set.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Build a `SET` expression from attribute/value pairs.
pub fn build_set_expression(attrs: Vec<(&str, AttributeValue)>) -> SetExpression {
    let mut parts = Vec::with_capacity(attrs.len());
    let mut names = HashMap::with_capacity(attrs.len());
    let mut values = HashMap::with_capacity(attrs.len());

    for (index, (attribute, value)) in attrs.into_iter().enumerate() {
        let name_alias = format!("#attr{index}");
        let value_alias = format!(":val{index}");
        parts.push(format!("{name_alias} = {value_alias}"));
        names.insert(name_alias, attribute.to_string());
        values.insert(value_alias, value);
    }

    SetExpression {
        expression: format!("SET {}", parts.join(", ")),
        names,
        values,
    }
}

mod records;
mod rule_properties;

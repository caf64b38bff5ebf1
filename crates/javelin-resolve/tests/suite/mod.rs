mod fields;
mod hierarchy;
mod scenarios;

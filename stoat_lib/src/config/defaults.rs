use crate::config::{self};

pub const UNIT_PROPAGATION: bool = true;
pub const PURE_ELIMINATION: bool = true;

pub const HEURISTIC: config::Heuristic = config::Heuristic::DeclarationOrder;

//! Standard builtin library

pub mod arithmetic;
pub mod comparison;
pub mod lists;
pub mod logic;
pub mod predicates;
pub mod special_forms;

use crate::tools::ToolRegistry;

/// Register all standard library tools
pub fn register_all(registry: &mut ToolRegistry) {
    special_forms::register(registry);
    logic::register(registry);
    arithmetic::register(registry);
    comparison::register(registry);
    predicates::register(registry);
    lists::register(registry);
}
